//! Enumerations describing issues and milestones.

graphql_enum! {
    IssueOrderField: "Properties by which issue connections can be ordered." {
        CreatedAt => "CREATED_AT"
            as "Order issues by creation time.",
        UpdatedAt => "UPDATED_AT"
            as "Order issues by update time.",
        Comments => "COMMENTS"
            as "Order issues by comment count.",
    }
}

graphql_enum! {
    IssuePubSubTopic: "The possible PubSub channels for an issue." {
        Updated => "UPDATED"
            as "The channel ID for observing issue updates.",
        Markasread => "MARKASREAD"
            as "The channel ID for marking an issue as read.",
    }
}

graphql_enum! {
    IssueState: "The possible states of an issue." {
        Open => "OPEN"
            as "An issue that is still open.",
        Closed => "CLOSED"
            as "An issue that has been closed.",
    }
}

graphql_enum! {
    MilestoneState: "The possible states of a milestone." {
        Open => "OPEN"
            as "A milestone that is still open.",
        Closed => "CLOSED"
            as "A milestone that has been closed.",
    }
}
