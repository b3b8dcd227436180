//! Enumerations describing comments.

graphql_enum! {
    CommentAuthorAssociation: "A comment author association with repository." {
        Member => "MEMBER"
            as "Author is a member of the organization that owns the repository.",
        Owner => "OWNER"
            as "Author is the owner of the repository.",
        Collaborator => "COLLABORATOR"
            as "Author has been invited to collaborate on the repository.",
        Contributor => "CONTRIBUTOR"
            as "Author has previously committed to the repository.",
        FirstTimeContributor => "FIRST_TIME_CONTRIBUTOR"
            as "Author has not previously committed to the repository.",
        FirstTimer => "FIRST_TIMER"
            as "Author has not previously committed to GitHub.",
        None => "NONE"
            as "Author has no association with the repository.",
    }
}

graphql_enum! {
    CommentCannotUpdateReason: "The possible errors that will prevent a user from updating a comment." {
        InsufficientAccess => "INSUFFICIENT_ACCESS"
            as "You must be the author or have write access to this repository to update this comment.",
        Locked => "LOCKED"
            as "Unable to create comment because issue is locked.",
        LoginRequired => "LOGIN_REQUIRED"
            as "You must be logged in to update this comment.",
        Maintenance => "MAINTENANCE"
            as "Repository is under maintenance.",
        VerifiedEmailRequired => "VERIFIED_EMAIL_REQUIRED"
            as "At least one email address must be verified to update this comment.",
    }
}
