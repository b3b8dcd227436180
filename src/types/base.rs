//! The trait connecting bound enumeration types to the registry.

use arcstr::ArcStr;

use crate::schema::meta::{EnumMeta, UnknownEnumValue};

/// Binding of one enumeration type of the GitHub GraphQL schema.
///
/// Implementors are closed sum types declared through
/// [`graphql_enum!`](crate::graphql_enum): every variant is one member
/// the schema declares, and carries the exact string the API serializes
/// for it. Request construction translates members to wire values with
/// [`wire_value`](GraphQLEnum::wire_value); response decoding goes the
/// other way through [`from_wire_value`](GraphQLEnum::from_wire_value).
pub trait GraphQLEnum: Copy + Eq + Sized + 'static {
    /// The name of this enumeration type in the schema.
    fn name() -> ArcStr;

    /// All members of this enumeration type, in schema order.
    fn values() -> &'static [Self];

    /// The wire value serialized for this member.
    fn wire_value(&self) -> &'static str;

    /// Parses a wire value into the member it denotes.
    ///
    /// Matching is case-sensitive and exact. A string the schema does
    /// not declare fails with [`UnknownEnumValue`] rather than being
    /// accepted or defaulted; the caller decides how to react, e.g.
    /// when decoding a response produced by a schema newer than these
    /// bindings.
    fn from_wire_value(value: &str) -> Result<Self, UnknownEnumValue>;

    /// Builds the schema metadata describing this enumeration type.
    fn meta() -> EnumMeta;
}
