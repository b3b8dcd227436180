//! Registry of the schema's enumeration types.

use arcstr::ArcStr;
use fnv::FnvBuildHasher;
use indexmap::IndexMap;

use crate::{
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
    schema::meta::{EnumMeta, EnumValue, UnknownEnumValue},
    types::base::GraphQLEnum,
};

/// Registry of every enumeration type of the bound schema.
///
/// The registry is built once from the static tables and never mutated
/// afterwards, so a single instance can be shared by reference across
/// any number of threads without synchronization. It serves consumers
/// that work with schema type names dynamically; code that knows the
/// enumeration type statically uses [`GraphQLEnum`] directly.
#[derive(Debug)]
pub struct EnumRegistry {
    types: IndexMap<ArcStr, EnumMeta, FnvBuildHasher>,
}

impl EnumRegistry {
    /// Builds the registry of all enumeration types of the schema.
    pub fn new() -> Self {
        let mut registry = Self {
            types: IndexMap::default(),
        };

        registry.insert::<CommentAuthorAssociation>();
        registry.insert::<CommentCannotUpdateReason>();
        registry.insert::<DefaultRepositoryPermissionField>();
        registry.insert::<DeploymentState>();
        registry.insert::<DeploymentStatusState>();
        registry.insert::<GistOrderField>();
        registry.insert::<GistPrivacy>();
        registry.insert::<GitSignatureState>();
        registry.insert::<IssueOrderField>();
        registry.insert::<IssuePubSubTopic>();
        registry.insert::<IssueState>();
        registry.insert::<LanguageOrderField>();
        registry.insert::<MergeableState>();
        registry.insert::<MilestoneState>();
        registry.insert::<OrderDirection>();
        registry.insert::<OrganizationInvitationRole>();
        registry.insert::<ProjectCardState>();
        registry.insert::<ProjectOrderField>();
        registry.insert::<ProjectState>();
        registry.insert::<PullRequestPubSubTopic>();
        registry.insert::<PullRequestReviewEvent>();
        registry.insert::<PullRequestReviewState>();
        registry.insert::<PullRequestState>();
        registry.insert::<ReactionContent>();
        registry.insert::<ReactionOrderField>();
        registry.insert::<RepositoryAffiliation>();
        registry.insert::<RepositoryCollaboratorAffiliation>();
        registry.insert::<RepositoryLockReason>();
        registry.insert::<RepositoryOrderField>();
        registry.insert::<RepositoryPermission>();
        registry.insert::<RepositoryPrivacy>();
        registry.insert::<SearchType>();
        registry.insert::<StarOrderField>();
        registry.insert::<StatusState>();
        registry.insert::<SubscriptionState>();
        registry.insert::<TeamMemberRole>();
        registry.insert::<TeamMembershipType>();
        registry.insert::<TeamOrderField>();
        registry.insert::<TeamPrivacy>();
        registry.insert::<TeamRepositoryOrderField>();
        registry.insert::<TeamRole>();
        registry.insert::<TopicSuggestionDeclineReason>();

        registry
    }

    fn insert<T: GraphQLEnum>(&mut self) {
        let meta = T::meta();
        self.types.insert(meta.name.clone(), meta);
    }

    /// Accesses the metadata of an enumeration type given its schema
    /// name.
    pub fn type_by_name(&self, name: &str) -> Option<&EnumMeta> {
        self.types.get(name)
    }

    /// Validates `value` as a wire value of the enumeration type named
    /// `type_name`.
    ///
    /// A type name the registry does not know fails the same way an
    /// unknown value does: the string is certainly not a member of that
    /// type.
    pub fn validate(&self, type_name: &str, value: &str) -> Result<&EnumValue, UnknownEnumValue> {
        match self.type_by_name(type_name) {
            Some(meta) => meta.validate(value),
            None => Err(UnknownEnumValue {
                type_name: type_name.into(),
                value: value.into(),
            }),
        }
    }

    /// Iterates the registered enumeration types, in registration
    /// order.
    pub fn types(&self) -> impl Iterator<Item = &EnumMeta> {
        self.types.values()
    }

    /// The number of registered enumeration types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry contains no enumeration types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for EnumRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::EnumRegistry;

    #[test]
    fn registers_every_schema_enum() {
        let registry = EnumRegistry::new();

        assert_eq!(registry.len(), 42);
        assert!(!registry.is_empty());

        let names: Vec<_> = registry.types().map(|meta| meta.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"CommentAuthorAssociation"));
        assert_eq!(names.last(), Some(&"TopicSuggestionDeclineReason"));

        // Registration follows the schema's alphabetical type order.
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn every_type_is_described_and_non_empty() {
        for meta in EnumRegistry::new().types() {
            assert!(meta.description.is_some(), "{} lacks a description", meta.name);
            assert!(!meta.values.is_empty(), "{} has no members", meta.name);
        }
    }

    #[test]
    fn wire_values_are_unique_within_each_type() {
        for meta in EnumRegistry::new().types() {
            let distinct: HashSet<_> = meta.values.iter().map(|v| v.name.as_str()).collect();
            assert_eq!(
                distinct.len(),
                meta.values.len(),
                "duplicate wire value in {}",
                meta.name,
            );
        }
    }

    #[test]
    fn validates_by_type_name() {
        let registry = EnumRegistry::new();

        assert!(registry.validate("IssueState", "CLOSED").is_ok());
        assert!(registry.validate("IssueState", "BOGUS").is_err());

        let err = registry.validate("NoSuchEnum", "OPEN").unwrap_err();
        assert_eq!(err.type_name, "NoSuchEnum");
        assert_eq!(err.value, "OPEN");
    }
}
