//! Enumerations of the GitHub GraphQL schema, grouped by the domain
//! they describe.
//!
//! Every type here is regenerated from the schema: member order, wire
//! values, and descriptions match it exactly and are never edited by
//! hand.

mod comment;
mod common;
mod deployment;
mod gist;
mod git;
mod issue;
mod project;
mod pull_request;
mod reaction;
mod repository;
mod search;
mod team;

pub use self::{
    comment::{CommentAuthorAssociation, CommentCannotUpdateReason},
    common::{OrderDirection, SubscriptionState},
    deployment::{DeploymentState, DeploymentStatusState},
    gist::{GistOrderField, GistPrivacy},
    git::{GitSignatureState, StatusState},
    issue::{IssueOrderField, IssuePubSubTopic, IssueState, MilestoneState},
    project::{ProjectCardState, ProjectOrderField, ProjectState},
    pull_request::{
        MergeableState, PullRequestPubSubTopic, PullRequestReviewEvent, PullRequestReviewState,
        PullRequestState,
    },
    reaction::{ReactionContent, ReactionOrderField},
    repository::{
        DefaultRepositoryPermissionField, LanguageOrderField, RepositoryAffiliation,
        RepositoryCollaboratorAffiliation, RepositoryLockReason, RepositoryOrderField,
        RepositoryPermission, RepositoryPrivacy, StarOrderField, TopicSuggestionDeclineReason,
    },
    search::SearchType,
    team::{
        OrganizationInvitationRole, TeamMemberRole, TeamMembershipType, TeamOrderField,
        TeamPrivacy, TeamRepositoryOrderField, TeamRole,
    },
};
