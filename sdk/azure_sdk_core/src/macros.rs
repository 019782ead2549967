//! Macros shared by the service crates.

/// Declare an open string vocabulary.
///
/// The service may add values at any time, so every generated enum carries an
/// `Other(String)` variant that keeps unrecognized values verbatim. Values
/// (de)serialize as plain JSON strings.
///
/// ```rust
/// azure_sdk_core::expandable_enum! {
///     /// Supported colors.
///     pub enum Color {
///         /// Red.
///         Red => "red",
///         /// Blue.
///         Blue => "blue",
///     }
/// }
///
/// assert_eq!(Color::from("red"), Color::Red);
/// assert_eq!(Color::from("green"), Color::Other("green".into()));
/// assert_eq!(Color::Blue.as_str(), "blue");
/// ```
#[macro_export]
macro_rules! expandable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value not known to this version of the SDK.
            Other(String),
        }

        impl $name {
            /// Returns the wire representation of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl ::std::convert::From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from(value))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::expandable_enum! {
        /// Test vocabulary.
        pub enum Fruit {
            /// Apple.
            Apple => "apple",
            /// Pear.
            Pear => "pear",
        }
    }

    #[test]
    fn known_values_map_to_variants() {
        assert_eq!(Fruit::from("apple"), Fruit::Apple);
        assert_eq!(Fruit::Pear.to_string(), "pear");
    }

    #[test]
    fn unknown_values_are_kept_verbatim() {
        let fruit: Fruit = serde_json::from_str("\"kiwi\"").expect("should deserialize");
        assert_eq!(fruit, Fruit::Other("kiwi".into()));
        assert_eq!(serde_json::to_string(&fruit).unwrap(), "\"kiwi\"");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(Fruit::from("Apple"), Fruit::Other("Apple".into()));
    }
}
