#![doc = include_str!("../README.md")]

// These are required by the code generated via the `graphql_enum!`
// macro.
#[doc(hidden)]
pub use {arcstr, serde};

#[macro_use]
pub mod macros;
pub mod enums;
pub mod schema;
pub mod types;

#[cfg(test)]
mod tests;

pub use crate::{
    enums::{
        CommentAuthorAssociation, CommentCannotUpdateReason, DefaultRepositoryPermissionField,
        DeploymentState, DeploymentStatusState, GistOrderField, GistPrivacy, GitSignatureState,
        IssueOrderField, IssuePubSubTopic, IssueState, LanguageOrderField, MergeableState,
        MilestoneState, OrderDirection, OrganizationInvitationRole, ProjectCardState,
        ProjectOrderField, ProjectState, PullRequestPubSubTopic, PullRequestReviewEvent,
        PullRequestReviewState, PullRequestState, ReactionContent, ReactionOrderField,
        RepositoryAffiliation, RepositoryCollaboratorAffiliation, RepositoryLockReason,
        RepositoryOrderField, RepositoryPermission, RepositoryPrivacy, SearchType, StarOrderField,
        StatusState, SubscriptionState, TeamMemberRole, TeamMembershipType, TeamOrderField,
        TeamPrivacy, TeamRepositoryOrderField, TeamRole, TopicSuggestionDeclineReason,
    },
    schema::{
        meta::{DeprecationStatus, EnumMeta, EnumValue, UnknownEnumValue},
        model::EnumRegistry,
    },
    types::base::GraphQLEnum,
};
