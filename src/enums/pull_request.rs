//! Enumerations describing pull requests and their reviews.

graphql_enum! {
    MergeableState: "Whether or not a PullRequest can be merged." {
        Mergeable => "MERGEABLE"
            as "The pull request can be merged.",
        Conflicting => "CONFLICTING"
            as "The pull request cannot be merged due to merge conflicts.",
        Unknown => "UNKNOWN"
            as "The mergeability of the pull request is still being calculated.",
    }
}

graphql_enum! {
    PullRequestPubSubTopic: "The possible PubSub channels for a pull request." {
        Updated => "UPDATED"
            as "The channel ID for observing pull request updates.",
        Markasread => "MARKASREAD"
            as "The channel ID for marking an pull request as read.",
        HeadRef => "HEAD_REF"
            as "The channel ID for observing head ref updates.",
    }
}

graphql_enum! {
    PullRequestReviewEvent: "The possible events to perform on a pull request review." {
        Comment => "COMMENT"
            as "Submit general feedback without explicit approval.",
        Approve => "APPROVE"
            as "Submit feedback and approve merging these changes.",
        RequestChanges => "REQUEST_CHANGES"
            as "Submit feedback that must be addressed before merging.",
        Dismiss => "DISMISS"
            as "Dismiss review so it now longer effects merging.",
    }
}

graphql_enum! {
    PullRequestReviewState: "The possible states of a pull request review." {
        Pending => "PENDING"
            as "A review that has not yet been submitted.",
        Commented => "COMMENTED"
            as "An informational review.",
        Approved => "APPROVED"
            as "A review allowing the pull request to merge.",
        ChangesRequested => "CHANGES_REQUESTED"
            as "A review blocking the pull request from merging.",
        Dismissed => "DISMISSED"
            as "A review that has been dismissed.",
    }
}

graphql_enum! {
    PullRequestState: "The possible states of a pull request." {
        Open => "OPEN"
            as "A pull request that is still open.",
        Closed => "CLOSED"
            as "A pull request that has been closed without being merged.",
        Merged => "MERGED"
            as "A pull request that has been closed by being merged.",
    }
}
