//! Enumerations describing organizations and their teams.

graphql_enum! {
    OrganizationInvitationRole: "The possible organization invitation roles." {
        DirectMember => "DIRECT_MEMBER"
            as "The user is invited to be a direct member of the organization.",
        Admin => "ADMIN"
            as "The user is invited to be an admin of the organization.",
        BillingManager => "BILLING_MANAGER"
            as "The user is invited to be a billing manager of the organization.",
        Reinstate => "REINSTATE"
            as "The user's previous role will be reinstated.",
    }
}

graphql_enum! {
    TeamMemberRole: "The possible team member roles; either 'maintainer' or 'member'." {
        Maintainer => "MAINTAINER"
            as "A team maintainer has permission to add and remove team members.",
        Member => "MEMBER"
            as "A team member has no administrative permissions on the team.",
    }
}

graphql_enum! {
    TeamMembershipType: "Defines which types of team members are included in the returned list. Can be one of IMMEDIATE, CHILD_TEAM or ALL." {
        Immediate => "IMMEDIATE"
            as "Includes only immediate members of the team.",
        ChildTeam => "CHILD_TEAM"
            as "Includes only child team members for the team.",
        All => "ALL"
            as "Includes immediate and child team members for the team.",
    }
}

graphql_enum! {
    TeamOrderField: "Properties by which team connections can be ordered." {
        Name => "NAME"
            as "Allows ordering a list of teams by name.",
    }
}

graphql_enum! {
    TeamPrivacy: "The possible team privacy values." {
        Secret => "SECRET"
            as "A secret team can only be seen by its members.",
        Visible => "VISIBLE"
            as "A visible team can be seen and @mentioned by every member of the organization.",
    }
}

graphql_enum! {
    TeamRepositoryOrderField: "Properties by which team repository connections can be ordered." {
        CreatedAt => "CREATED_AT"
            as "Order repositories by creation time.",
        UpdatedAt => "UPDATED_AT"
            as "Order repositories by update time.",
        PushedAt => "PUSHED_AT"
            as "Order repositories by push time.",
        Name => "NAME"
            as "Order repositories by name.",
        Permission => "PERMISSION"
            as "Order repositories by permission.",
        Stargazers => "STARGAZERS"
            as "Order repositories by number of stargazers.",
    }
}

graphql_enum! {
    TeamRole: "The role of a user on a team." {
        Admin => "ADMIN"
            as "User has admin rights on the team.",
        Member => "MEMBER"
            as "User is a member of the team.",
    }
}
