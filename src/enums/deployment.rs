//! Enumerations describing deployments.

graphql_enum! {
    DeploymentState: "The possible states in which a deployment can be." {
        Abandoned => "ABANDONED"
            as "The pending deployment was not updated after 30 minutes.",
        Active => "ACTIVE"
            as "The deployment is currently active.",
        Destroyed => "DESTROYED"
            as "An inactive transient deployment.",
        Error => "ERROR"
            as "The deployment experienced an error.",
        Failure => "FAILURE"
            as "The deployment has failed.",
        Inactive => "INACTIVE"
            as "The deployment is inactive.",
        Pending => "PENDING"
            as "The deployment is pending.",
    }
}

graphql_enum! {
    DeploymentStatusState: "The possible states for a deployment status." {
        Pending => "PENDING"
            as "The deployment is pending.",
        Success => "SUCCESS"
            as "The deployment was successful.",
        Failure => "FAILURE"
            as "The deployment has failed.",
        Inactive => "INACTIVE"
            as "The deployment is inactive.",
        Error => "ERROR"
            as "The deployment experienced an error.",
    }
}
