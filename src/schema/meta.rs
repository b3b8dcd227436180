//! Types used to describe the schema's enumerations.

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};

/// Whether an enumeration member is deprecated, with context.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DeprecationStatus {
    /// The member is not deprecated.
    Current,
    /// The member is deprecated, with an optional reason.
    Deprecated(Option<ArcStr>),
}

impl DeprecationStatus {
    /// If this deprecation status indicates the member is deprecated.
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    /// An optional reason for the deprecation, or none if `Current`.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Current => None,
            Self::Deprecated(reason) => reason.as_deref(),
        }
    }
}

/// Error of a string not matching any member of the enumeration type it
/// was validated against.
///
/// The sole failure mode of these bindings. It is always surfaced to
/// the immediate caller and never retried, substituted with a default,
/// or escalated here: the remote schema may declare members these
/// tables predate, and only the caller can decide whether that degrades
/// gracefully or aborts the surrounding operation.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("Invalid value \"{value}\" for enum \"{type_name}\"")]
pub struct UnknownEnumValue {
    /// Name of the enumeration type the value was validated against.
    pub type_name: ArcStr,
    /// The rejected value.
    pub value: String,
}

/// Metadata for a single member of an enumeration type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EnumValue {
    /// The wire value of this member.
    ///
    /// This is the exact string the API serializes for the member. It
    /// is the serialization contract and changes only together with the
    /// remote schema.
    pub name: ArcStr,
    /// The optional description of this member.
    ///
    /// Documentation only; it has no behavioral effect.
    pub description: Option<ArcStr>,
    /// Whether the member is deprecated, with an optional reason.
    pub deprecation_status: DeprecationStatus,
}

impl EnumValue {
    /// Constructs a new [`EnumValue`] with the provided wire value.
    pub fn new(name: ArcStr) -> Self {
        Self {
            name,
            description: None,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    /// Sets the `description` of this [`EnumValue`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets this [`EnumValue`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<ArcStr>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason);
        self
    }
}

/// Metadata for an enumeration type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumMeta {
    /// The name of the enumeration type in the schema.
    pub name: ArcStr,
    /// The optional description of the enumeration type.
    pub description: Option<ArcStr>,
    /// All members, in schema order.
    pub values: Vec<EnumValue>,
}

impl EnumMeta {
    /// Builds a new [`EnumMeta`] type with the specified `name` and
    /// member `values`.
    pub fn new(name: ArcStr, values: &[EnumValue]) -> Self {
        Self {
            name,
            description: None,
            values: values.to_owned(),
        }
    }

    /// Sets the `description` of this [`EnumMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Accesses a member's metadata given its wire value.
    ///
    /// Matching is case-sensitive and exact.
    pub fn value_by_name(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }

    /// Validates `value` as a wire value of this enumeration type.
    pub fn validate(&self, value: &str) -> Result<&EnumValue, UnknownEnumValue> {
        self.value_by_name(value).ok_or_else(|| UnknownEnumValue {
            type_name: self.name.clone(),
            value: value.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use arcstr::literal;

    use super::{DeprecationStatus, EnumMeta, EnumValue};

    fn privacy_meta() -> EnumMeta {
        EnumMeta::new(
            literal!("GistPrivacy"),
            &[
                EnumValue::new(literal!("PUBLIC")).description(literal!("Public.")),
                EnumValue::new(literal!("SECRET")).description(literal!("Secret.")),
            ],
        )
        .description(literal!("The privacy of a Gist."))
    }

    #[test]
    fn validates_declared_values() {
        let meta = privacy_meta();

        let member = meta.validate("SECRET").unwrap();
        assert_eq!(member.name, "SECRET");
        assert_eq!(member.description.as_deref(), Some("Secret."));
        assert_eq!(member.deprecation_status, DeprecationStatus::Current);
    }

    #[test]
    fn validation_is_case_sensitive() {
        let meta = privacy_meta();

        assert!(meta.validate("PUBLIC").is_ok());
        assert!(meta.validate("public").is_err());
        assert!(meta.validate("Public").is_err());
    }

    #[test]
    fn unknown_value_reports_type_and_value() {
        let err = privacy_meta().validate("BOGUS").unwrap_err();

        assert_eq!(err.type_name, "GistPrivacy");
        assert_eq!(err.value, "BOGUS");
        assert_eq!(
            err.to_string(),
            "Invalid value \"BOGUS\" for enum \"GistPrivacy\"",
        );
    }
}
