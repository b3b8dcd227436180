//! Enumerations shared across the schema.

graphql_enum! {
    OrderDirection: "Possible directions in which to order a list of items when provided an `orderBy` argument." {
        Asc => "ASC"
            as "Specifies an ascending order for a given `orderBy` argument.",
        Desc => "DESC"
            as "Specifies a descending order for a given `orderBy` argument.",
    }
}

graphql_enum! {
    SubscriptionState: "The possible states of a subscription." {
        Unsubscribed => "UNSUBSCRIBED"
            as "The User is only notified when particpating or @mentioned.",
        Subscribed => "SUBSCRIBED"
            as "The User is notified of all conversations.",
        Ignored => "IGNORED"
            as "The User is never notified.",
    }
}
