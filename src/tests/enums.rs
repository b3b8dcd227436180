use std::fmt;

use pretty_assertions::assert_eq;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    CommentAuthorAssociation, CommentCannotUpdateReason, DefaultRepositoryPermissionField,
    DeploymentState, DeploymentStatusState, EnumRegistry, GistOrderField, GistPrivacy,
    GitSignatureState, GraphQLEnum, IssueOrderField, IssuePubSubTopic, IssueState,
    LanguageOrderField, MergeableState, MilestoneState, OrderDirection, OrganizationInvitationRole,
    ProjectCardState, ProjectOrderField, ProjectState, PullRequestPubSubTopic,
    PullRequestReviewEvent, PullRequestReviewState, PullRequestState, ReactionContent,
    ReactionOrderField, RepositoryAffiliation, RepositoryCollaboratorAffiliation,
    RepositoryLockReason, RepositoryOrderField, RepositoryPermission, RepositoryPrivacy,
    SearchType, StarOrderField, StatusState, SubscriptionState, TeamMemberRole,
    TeamMembershipType, TeamOrderField, TeamPrivacy, TeamRepositoryOrderField, TeamRole,
    TopicSuggestionDeclineReason,
};

/// Every member must translate to its wire value and back, agree with
/// its metadata entry, and survive a serde round trip.
fn assert_round_trip<T>()
where
    T: GraphQLEnum + fmt::Debug + Serialize + DeserializeOwned,
{
    let meta = T::meta();
    assert_eq!(meta.name, T::name());
    assert_eq!(meta.values.len(), T::values().len());

    for (member, value) in T::values().iter().zip(&meta.values) {
        assert_eq!(value.name, member.wire_value());
        assert_eq!(T::from_wire_value(member.wire_value()), Ok(*member));
        assert_eq!(meta.validate(&value.name).unwrap(), value);

        let json = serde_json::to_string(member).unwrap();
        assert_eq!(json, format!("\"{}\"", member.wire_value()));
        assert_eq!(serde_json::from_str::<T>(&json).unwrap(), *member);
    }
}

fn assert_rejects<T: GraphQLEnum + fmt::Debug>(value: &str) {
    let err = T::from_wire_value(value).unwrap_err();
    assert_eq!(err.type_name, T::name());
    assert_eq!(err.value, value);
}

#[test]
fn every_member_of_every_type_round_trips() {
    assert_round_trip::<CommentAuthorAssociation>();
    assert_round_trip::<CommentCannotUpdateReason>();
    assert_round_trip::<DefaultRepositoryPermissionField>();
    assert_round_trip::<DeploymentState>();
    assert_round_trip::<DeploymentStatusState>();
    assert_round_trip::<GistOrderField>();
    assert_round_trip::<GistPrivacy>();
    assert_round_trip::<GitSignatureState>();
    assert_round_trip::<IssueOrderField>();
    assert_round_trip::<IssuePubSubTopic>();
    assert_round_trip::<IssueState>();
    assert_round_trip::<LanguageOrderField>();
    assert_round_trip::<MergeableState>();
    assert_round_trip::<MilestoneState>();
    assert_round_trip::<OrderDirection>();
    assert_round_trip::<OrganizationInvitationRole>();
    assert_round_trip::<ProjectCardState>();
    assert_round_trip::<ProjectOrderField>();
    assert_round_trip::<ProjectState>();
    assert_round_trip::<PullRequestPubSubTopic>();
    assert_round_trip::<PullRequestReviewEvent>();
    assert_round_trip::<PullRequestReviewState>();
    assert_round_trip::<PullRequestState>();
    assert_round_trip::<ReactionContent>();
    assert_round_trip::<ReactionOrderField>();
    assert_round_trip::<RepositoryAffiliation>();
    assert_round_trip::<RepositoryCollaboratorAffiliation>();
    assert_round_trip::<RepositoryLockReason>();
    assert_round_trip::<RepositoryOrderField>();
    assert_round_trip::<RepositoryPermission>();
    assert_round_trip::<RepositoryPrivacy>();
    assert_round_trip::<SearchType>();
    assert_round_trip::<StarOrderField>();
    assert_round_trip::<StatusState>();
    assert_round_trip::<SubscriptionState>();
    assert_round_trip::<TeamMemberRole>();
    assert_round_trip::<TeamMembershipType>();
    assert_round_trip::<TeamOrderField>();
    assert_round_trip::<TeamPrivacy>();
    assert_round_trip::<TeamRepositoryOrderField>();
    assert_round_trip::<TeamRole>();
    assert_round_trip::<TopicSuggestionDeclineReason>();
}

#[test]
fn rejects_values_absent_from_the_schema() {
    assert_rejects::<IssueState>("BOGUS");
    assert_rejects::<PullRequestState>("BOGUS");
    assert_rejects::<RepositoryPermission>("MAINTAIN");
    assert_rejects::<ReactionContent>("EYES");
}

#[test]
fn membership_is_case_sensitive() {
    assert_eq!(IssueState::from_wire_value("OPEN"), Ok(IssueState::Open));
    assert_rejects::<IssueState>("open");
    assert_rejects::<IssueState>("Open");
}

#[test]
fn issue_state_has_exactly_open_and_closed() {
    assert_eq!(IssueState::values(), &[IssueState::Open, IssueState::Closed][..]);

    let meta = IssueState::meta();
    let wires: Vec<_> = meta.values.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(wires, ["OPEN", "CLOSED"]);
}

#[test]
fn pull_request_state_distinguishes_merged_from_closed() {
    assert_eq!(
        PullRequestState::from_wire_value("MERGED"),
        Ok(PullRequestState::Merged),
    );
    assert_eq!(
        PullRequestState::from_wire_value("OPEN"),
        Ok(PullRequestState::Open),
    );
    assert_rejects::<PullRequestState>("DRAFT");

    let meta = PullRequestState::meta();
    assert_eq!(
        meta.value_by_name("MERGED").unwrap().description.as_deref(),
        Some("A pull request that has been closed by being merged."),
    );
}

#[test]
fn serde_errors_carry_the_rejected_value() {
    let err = serde_json::from_str::<PullRequestState>("\"DRAFT\"").unwrap_err();
    assert!(
        err.to_string()
            .contains("Invalid value \"DRAFT\" for enum \"PullRequestState\""),
        "unexpected message: {err}",
    );
}

#[test]
fn deserialization_rejects_non_strings() {
    assert!(serde_json::from_str::<IssueState>("3").is_err());
    assert!(serde_json::from_str::<IssueState>("null").is_err());
    assert!(serde_json::from_str::<IssueState>("[\"OPEN\"]").is_err());
}

#[test]
fn registry_metadata_matches_the_typed_bindings() {
    let registry = EnumRegistry::new();

    let meta = registry.type_by_name("PullRequestState").unwrap();
    assert_eq!(*meta, PullRequestState::meta());

    assert!(registry.type_by_name("pullRequestState").is_none());
}
