//! Enumerations describing repositories.

graphql_enum! {
    DefaultRepositoryPermissionField: "The possible default permissions for organization-owned repositories." {
        Read => "READ"
            as "Members have read access to org repos by default.",
        Write => "WRITE"
            as "Members have read and write access to org repos by default.",
        Admin => "ADMIN"
            as "Members have read, write, and admin access to org repos by default.",
    }
}

graphql_enum! {
    LanguageOrderField: "Properties by which language connections can be ordered." {
        Size => "SIZE"
            as "Order languages by the size of all files containing the language.",
    }
}

graphql_enum! {
    RepositoryAffiliation: "The affiliation of a user to a repository." {
        Owner => "OWNER"
            as "Repositories that are owned by the authenticated user.",
        Collaborator => "COLLABORATOR"
            as "Repositories that the user has been added to as a collaborator.",
        OrganizationMember => "ORGANIZATION_MEMBER"
            as "Repositories that the user has access to through being a member of an organization. This includes every repository on every team that the user is on.",
    }
}

graphql_enum! {
    RepositoryCollaboratorAffiliation: "The affiliation type between collaborator and repository." {
        All => "ALL"
            as "All collaborators of the repository.",
        Outside => "OUTSIDE"
            as "All outside collaborators of an organization-owned repository.",
    }
}

graphql_enum! {
    RepositoryLockReason: "The possible reasons a given repository could be in a locked state." {
        Moving => "MOVING"
            as "The repository is locked due to a move.",
        Billing => "BILLING"
            as "The repository is locked due to a billing related reason.",
        Rename => "RENAME"
            as "The repository is locked due to a rename.",
        Migrating => "MIGRATING"
            as "The repository is locked due to a migration.",
    }
}

graphql_enum! {
    RepositoryOrderField: "Properties by which repository connections can be ordered." {
        CreatedAt => "CREATED_AT"
            as "Order repositories by creation time.",
        UpdatedAt => "UPDATED_AT"
            as "Order repositories by update time.",
        PushedAt => "PUSHED_AT"
            as "Order repositories by push time.",
        Name => "NAME"
            as "Order repositories by name.",
        Stargazers => "STARGAZERS"
            as "Order repositories by number of stargazers.",
    }
}

graphql_enum! {
    RepositoryPermission: "The access level to a repository." {
        Admin => "ADMIN"
            as "Can read, clone, push, and add collaborators.",
        Write => "WRITE"
            as "Can read, clone and push.",
        Read => "READ"
            as "Can read and clone.",
    }
}

graphql_enum! {
    RepositoryPrivacy: "The privacy of a repository." {
        Public => "PUBLIC"
            as "Public.",
        Private => "PRIVATE"
            as "Private.",
    }
}

graphql_enum! {
    StarOrderField: "Properties by which star connections can be ordered." {
        StarredAt => "STARRED_AT"
            as "Allows ordering a list of stars by when they were created.",
    }
}

graphql_enum! {
    TopicSuggestionDeclineReason: "Reason that the suggested topic is declined." {
        NotRelevant => "NOT_RELEVANT"
            as "The suggested topic is not relevant to the repository.",
        TooSpecific => "TOO_SPECIFIC"
            as "The suggested topic is too specific for the repository (e.g. #ruby-on-rails-version-4-2-1).",
        PersonalPreference => "PERSONAL_PREFERENCE"
            as "The viewer does not like the suggested topic.",
        TooGeneral => "TOO_GENERAL"
            as "The suggested topic is too general for the repository.",
    }
}
