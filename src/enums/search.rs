//! Enumerations describing search.

graphql_enum! {
    SearchType: "Represents the individual results of a search." {
        Issue => "ISSUE"
            as "Returns results matching issues in repositories.",
        Repository => "REPOSITORY"
            as "Returns results matching repositories.",
        User => "USER"
            as "Returns results matching users on GitHub.",
    }
}
