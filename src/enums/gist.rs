//! Enumerations describing gists.

graphql_enum! {
    GistOrderField: "Properties by which gist connections can be ordered." {
        CreatedAt => "CREATED_AT"
            as "Order gists by creation time.",
        UpdatedAt => "UPDATED_AT"
            as "Order gists by update time.",
        PushedAt => "PUSHED_AT"
            as "Order gists by push time.",
    }
}

graphql_enum! {
    GistPrivacy: "The privacy of a Gist." {
        Public => "PUBLIC"
            as "Public.",
        Secret => "SECRET"
            as "Secret.",
        All => "ALL"
            as "Gists that are public and secret.",
    }
}
