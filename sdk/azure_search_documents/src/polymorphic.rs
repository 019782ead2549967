//! Discriminated (de)serialization for the service's polymorphic resource families.
//!
//! Analyzers, tokenizers, token filters, char filters, skills, scoring functions,
//! similarity algorithms and data change/deletion detection policies are all
//! open families: every JSON object carries a discriminator property
//! (`@odata.type`, or `type` for scoring functions) naming its concrete shape.
//!
//! Each family is a Rust enum with one variant per known shape plus an
//! `Unknown` variant. A discriminator this SDK does not recognize never fails
//! deserialization; the object is kept verbatim in [`UnknownVariant`] and is
//! written back unchanged.

use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Discriminator property used by most families.
pub const ODATA_TYPE: &str = "@odata.type";

/// A concrete member of a polymorphic family.
///
/// Implementors serialize only their own properties; the family enum adds the
/// discriminator.
pub trait PolymorphicVariant: Serialize + DeserializeOwned {
    /// Discriminator values this type is deserialized from. The first entry is
    /// the one written by default.
    const DISCRIMINATORS: &'static [&'static str];

    /// The discriminator written when serializing this value.
    fn discriminator(&self) -> &'static str {
        Self::DISCRIMINATORS[0]
    }

    /// The resource name, for families whose members are named.
    fn name(&self) -> Option<&str> {
        None
    }
}

/// A family member whose discriminator is not known to this SDK version.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnknownVariant {
    /// The discriminator value as received (empty if the property was absent).
    pub discriminator: String,
    /// Every other property of the object, untouched.
    pub properties: Map<String, Value>,
}

impl UnknownVariant {
    /// The `name` property, if present.
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(Value::as_str)
    }

    /// Split a JSON object into its discriminator and remaining properties.
    pub(crate) fn from_value(value: Value, tag_key: &str) -> Result<Self, String> {
        match value {
            Value::Object(mut properties) => {
                let discriminator = match properties.remove(tag_key) {
                    Some(Value::String(s)) => s,
                    _ => String::new(),
                };
                Ok(Self {
                    discriminator,
                    properties,
                })
            }
            other => Err(format!("expected a JSON object, found {other}")),
        }
    }

    pub(crate) fn serialize_tagged<S: Serializer>(
        &self,
        tag_key: &str,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = self.properties.clone();
        if !self.discriminator.is_empty() {
            map.insert(tag_key.to_string(), Value::String(self.discriminator.clone()));
        }
        map.serialize(serializer)
    }
}

/// Serialize `value` as a JSON object with `tag_key: tag` added.
pub(crate) fn serialize_tagged<T, S>(
    tag_key: &str,
    tag: &str,
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    let mut map = match serde_json::to_value(value).map_err(S::Error::custom)? {
        Value::Object(map) => map,
        other => {
            return Err(S::Error::custom(format!(
                "expected a JSON object, found {other}"
            )))
        }
    };
    map.insert(tag_key.to_string(), Value::String(tag.to_string()));
    map.serialize(serializer)
}

/// Read the discriminator of a JSON object, or an empty string if absent.
pub(crate) fn read_tag(value: &Value, tag_key: &str) -> String {
    value
        .get(tag_key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Declare the discriminators of a family member.
///
/// `named` generates a [`PolymorphicVariant::name`] that returns the `name` field;
/// `optionally_named` does the same for an `Option<String>` field.
macro_rules! impl_variant {
    ($ty:ty => [$($tag:literal),+ $(,)?], named) => {
        impl $crate::polymorphic::PolymorphicVariant for $ty {
            const DISCRIMINATORS: &'static [&'static str] = &[$($tag),+];

            fn name(&self) -> Option<&str> {
                Some(self.name.as_str())
            }
        }
    };
    ($ty:ty => [$($tag:literal),+ $(,)?], optionally_named) => {
        impl $crate::polymorphic::PolymorphicVariant for $ty {
            const DISCRIMINATORS: &'static [&'static str] = &[$($tag),+];

            fn name(&self) -> Option<&str> {
                self.name.as_deref()
            }
        }
    };
    ($ty:ty => [$($tag:literal),+ $(,)?]) => {
        impl $crate::polymorphic::PolymorphicVariant for $ty {
            const DISCRIMINATORS: &'static [&'static str] = &[$($tag),+];
        }
    };
}

/// Declare a polymorphic family enum with an `Unknown` fallback variant.
macro_rules! polymorphic_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $family:ident tagged $tag_key:expr => {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($ty:ty),
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $family {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )+
            /// A member whose discriminator is not known to this SDK version.
            Unknown($crate::polymorphic::UnknownVariant),
        }

        impl $family {
            /// The JSON property holding the discriminator for this family.
            pub const DISCRIMINATOR_PROPERTY: &'static str = $tag_key;

            /// The primary discriminator of every known member, in declaration order.
            pub const KNOWN_DISCRIMINATORS: &'static [&'static str] = &[
                $(<$ty as $crate::polymorphic::PolymorphicVariant>::DISCRIMINATORS[0]),+
            ];

            /// The discriminator value this member serializes with.
            pub fn discriminator(&self) -> &str {
                match self {
                    $(
                        Self::$variant(v) => {
                            <$ty as $crate::polymorphic::PolymorphicVariant>::discriminator(v)
                        }
                    )+
                    Self::Unknown(u) => u.discriminator.as_str(),
                }
            }

            /// The member's `name`, when the family is named.
            pub fn name(&self) -> Option<&str> {
                match self {
                    $(
                        Self::$variant(v) => {
                            <$ty as $crate::polymorphic::PolymorphicVariant>::name(v)
                        }
                    )+
                    Self::Unknown(u) => u.name(),
                }
            }

            /// Returns `true` if the discriminator was not recognized.
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        $(
            impl ::std::convert::From<$ty> for $family {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+

        impl ::serde::Serialize for $family {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                match self {
                    $(
                        Self::$variant(v) => $crate::polymorphic::serialize_tagged(
                            $tag_key,
                            <$ty as $crate::polymorphic::PolymorphicVariant>::discriminator(v),
                            v,
                            serializer,
                        ),
                    )+
                    Self::Unknown(u) => u.serialize_tagged($tag_key, serializer),
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $family {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                use ::serde::de::Error as _;

                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                let tag = $crate::polymorphic::read_tag(&value, $tag_key);
                $(
                    if <$ty as $crate::polymorphic::PolymorphicVariant>::DISCRIMINATORS
                        .contains(&tag.as_str())
                    {
                        return ::serde_json::from_value::<$ty>(value)
                            .map(Self::$variant)
                            .map_err(D::Error::custom);
                    }
                )+
                $crate::polymorphic::UnknownVariant::from_value(value, $tag_key)
                    .map(Self::Unknown)
                    .map_err(D::Error::custom)
            }
        }
    };
}

/// Assert that every sample maps to a known member of the family, keeps its
/// discriminator and serializes back to the same JSON, and that every known
/// member has at least one sample.
#[cfg(test)]
macro_rules! assert_round_trips {
    ($family:ty, [$($sample:expr),+ $(,)?]) => {{
        let samples: ::std::vec::Vec<::serde_json::Value> = vec![$($sample),+];
        let mut covered = ::std::collections::BTreeSet::new();

        for json in samples {
            let tag = json[<$family>::DISCRIMINATOR_PROPERTY]
                .as_str()
                .unwrap_or_default()
                .to_string();
            let member: $family = ::serde_json::from_value(json.clone())
                .unwrap_or_else(|e| panic!("{json} failed to deserialize: {e}"));

            assert!(!member.is_unknown(), "{json} should map to a known variant");
            assert_eq!(member.discriminator(), tag);
            assert_eq!(::serde_json::to_value(&member).unwrap(), json);
            covered.insert(tag);
        }

        let missing: ::std::vec::Vec<&str> = <$family>::KNOWN_DISCRIMINATORS
            .iter()
            .copied()
            .filter(|d| !covered.contains(*d))
            .collect();
        assert!(missing.is_empty(), "no sample for {missing:?}");
    }};
}

#[cfg(test)]
pub(crate) use assert_round_trips;
pub(crate) use impl_variant;
pub(crate) use polymorphic_family;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Circle {
        name: String,
        radius: f64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Square {
        side: f64,
    }

    impl_variant!(Circle => ["#Test.Circle", "#Test.CircleV0"], named);
    impl_variant!(Square => ["#Test.Square"]);

    polymorphic_family! {
        enum Shape tagged ODATA_TYPE => {
            Circle(Circle),
            Square(Square),
        }
    }

    #[test]
    fn known_variant_serializes_discriminator() {
        let shape = Shape::from(Circle {
            name: "c".into(),
            radius: 2.0,
        });
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["@odata.type"], "#Test.Circle");
        assert_eq!(json["radius"], 2.0);
        assert_eq!(shape.name(), Some("c"));
    }

    #[test]
    fn every_member_round_trips() {
        assert_eq!(Shape::DISCRIMINATOR_PROPERTY, ODATA_TYPE);
        assert_eq!(Shape::KNOWN_DISCRIMINATORS, ["#Test.Circle", "#Test.Square"]);
        assert_round_trips!(Shape, [
            serde_json::json!({"@odata.type": "#Test.Circle", "name": "c", "radius": 1.5}),
            serde_json::json!({"@odata.type": "#Test.Square", "side": 2.0}),
        ]);
    }

    #[test]
    fn secondary_discriminator_selects_variant() {
        let json = serde_json::json!({"@odata.type": "#Test.CircleV0", "name": "old", "radius": 1.0});
        let shape: Shape = serde_json::from_value(json).unwrap();
        assert!(matches!(shape, Shape::Circle(_)));
        // Re-serializes with the primary discriminator.
        assert_eq!(shape.discriminator(), "#Test.Circle");
    }

    #[test]
    fn unknown_discriminator_is_kept_verbatim() {
        let json = serde_json::json!({"@odata.type": "#Test.Hexagon", "name": "h", "sides": 6});
        let shape: Shape = serde_json::from_value(json.clone()).unwrap();
        assert!(shape.is_unknown());
        assert_eq!(shape.discriminator(), "#Test.Hexagon");
        assert_eq!(shape.name(), Some("h"));
        assert_eq!(serde_json::to_value(&shape).unwrap(), json);
    }

    #[test]
    fn missing_discriminator_is_unknown() {
        let json = serde_json::json!({"side": 3.0});
        let shape: Shape = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(shape.discriminator(), "");
        assert_eq!(serde_json::to_value(&shape).unwrap(), json);
    }

    #[test]
    fn malformed_known_variant_is_an_error() {
        let json = serde_json::json!({"@odata.type": "#Test.Square", "side": "wide"});
        assert!(serde_json::from_value::<Shape>(json).is_err());
    }

    #[test]
    fn non_object_is_an_error() {
        assert!(serde_json::from_value::<Shape>(serde_json::json!(42)).is_err());
    }
}
