//! Definition of the [`graphql_enum!`] macro.

/// Binds one enumeration type of a GraphQL schema as a closed Rust enum.
///
/// Each member names its Rust variant, the exact wire value the API
/// serializes, and optionally a description and a deprecation reason:
///
/// ```rust
/// use octoql::GraphQLEnum as _;
///
/// octoql::graphql_enum! {
///     Color: "Colors a signal lamp can show." {
///         Red => "RED" as "Stop.",
///         Orange => "ORANGE" as "Prepare to stop.",
///         Green => "GREEN" as "Go.",
///         Black => "BLACK" deprecated "Superseded by ORANGE.",
///     }
/// }
///
/// assert_eq!(Color::Red.wire_value(), "RED");
/// assert_eq!(Color::from_wire_value("GREEN"), Ok(Color::Green));
/// assert!(Color::from_wire_value("green").is_err());
/// ```
///
/// One invocation generates the enum itself (with the descriptions as
/// rustdoc), its [`GraphQLEnum`] implementation, `Display` and `FromStr`
/// over wire values, and serde implementations serializing the wire
/// value string. Matching is case-sensitive; a string the schema does
/// not declare is reported as [`UnknownEnumValue`], never accepted or
/// defaulted.
///
/// [`GraphQLEnum`]: crate::GraphQLEnum
/// [`UnknownEnumValue`]: crate::UnknownEnumValue
#[macro_export]
macro_rules! graphql_enum {
    (
        $name:ident: $descr:literal {
            $(
                $variant:ident => $wire:literal
                $(as $vdescr:literal)?
                $(deprecated $reason:literal)?
            ),+ $(,)?
        }
    ) => {
        #[doc = $descr]
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum $name {
            $(
                $(#[doc = $vdescr])?
                $variant,
            )+
        }

        impl $crate::GraphQLEnum for $name {
            fn name() -> $crate::arcstr::ArcStr {
                $crate::arcstr::literal!(::core::stringify!($name))
            }

            fn values() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn wire_value(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            fn from_wire_value(
                value: &str,
            ) -> ::core::result::Result<Self, $crate::UnknownEnumValue> {
                match value {
                    $($wire => ::core::result::Result::Ok(Self::$variant),)+
                    _ => ::core::result::Result::Err($crate::UnknownEnumValue {
                        type_name: <Self as $crate::GraphQLEnum>::name(),
                        value: value.into(),
                    }),
                }
            }

            fn meta() -> $crate::EnumMeta {
                $crate::EnumMeta::new(
                    <Self as $crate::GraphQLEnum>::name(),
                    &[$(
                        $crate::EnumValue::new($crate::arcstr::literal!($wire))
                            $(.description($crate::arcstr::literal!($vdescr)))?
                            $(.deprecated(::core::option::Option::Some(
                                $crate::arcstr::literal!($reason),
                            )))?
                    ),+],
                )
                .description($crate::arcstr::literal!($descr))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as $crate::GraphQLEnum>::wire_value(self))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::UnknownEnumValue;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::GraphQLEnum>::from_wire_value(s)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str(<Self as $crate::GraphQLEnum>::wire_value(self))
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                struct WireValueVisitor;

                impl $crate::serde::de::Visitor<'_> for WireValueVisitor {
                    type Value = $name;

                    fn expecting(
                        &self,
                        f: &mut ::core::fmt::Formatter<'_>,
                    ) -> ::core::fmt::Result {
                        ::core::write!(f, "a `{}` wire value", ::core::stringify!($name))
                    }

                    fn visit_str<E>(
                        self,
                        value: &str,
                    ) -> ::core::result::Result<Self::Value, E>
                    where
                        E: $crate::serde::de::Error,
                    {
                        <$name as $crate::GraphQLEnum>::from_wire_value(value).map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(WireValueVisitor)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{DeprecationStatus, GraphQLEnum as _};

    graphql_enum! {
        Color: "Colors a signal lamp can show." {
            Red => "RED" as "Stop.",
            Orange => "ORANGE" as "Prepare to stop.",
            Green => "GREEN" as "Go.",
            Black => "BLACK" deprecated "Superseded by ORANGE.",
        }
    }

    #[test]
    fn generates_wire_values_in_declaration_order() {
        assert_eq!(
            Color::values(),
            &[Color::Red, Color::Orange, Color::Green, Color::Black][..],
        );
        assert_eq!(Color::Orange.wire_value(), "ORANGE");
    }

    #[test]
    fn meta_carries_descriptions_and_deprecation() {
        let meta = Color::meta();

        assert_eq!(meta.name, "Color");
        assert_eq!(meta.description.as_deref(), Some("Colors a signal lamp can show."));

        let red = meta.value_by_name("RED").unwrap();
        assert_eq!(red.description.as_deref(), Some("Stop."));
        assert_eq!(red.deprecation_status, DeprecationStatus::Current);

        let black = meta.value_by_name("BLACK").unwrap();
        assert_eq!(black.description, None);
        assert!(black.deprecation_status.is_deprecated());
        assert_eq!(black.deprecation_status.reason(), Some("Superseded by ORANGE."));
    }

    #[test]
    fn display_and_from_str_use_wire_values() {
        assert_eq!(Color::Green.to_string(), "GREEN");
        assert_eq!("BLACK".parse::<Color>(), Ok(Color::Black));
        assert!("BLURPLE".parse::<Color>().is_err());
    }
}
