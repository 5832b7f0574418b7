//! Core trait for value objects.
//!
//! A value object wraps exactly one primitive, validates it once at
//! construction, and is compared by the primitive alone. Serializing is the
//! identity on the primitive; deserializing goes back through validation.

use crate::error::ValidationResult;
use std::fmt::Debug;

/// Capability contract shared by every value object kind.
///
/// Implementors are expected to hold their primitive privately so that the
/// only way in is [`ValueObject::from_primitive`].
pub trait ValueObject: Debug + Clone + PartialEq + Send + Sync + Sized {
    /// The wrapped primitive (a `String` for every kind in this crate).
    type Primitive: Debug + Clone + PartialEq;

    /// Name of the kind, used in validation messages.
    const KIND: &'static str;

    /// Validate `raw` and wrap it.
    fn from_primitive(raw: Self::Primitive) -> ValidationResult<Self>;

    /// Borrow the wrapped primitive.
    fn primitive(&self) -> &Self::Primitive;

    /// Serialize to the primitive.
    fn to_primitive(&self) -> Self::Primitive {
        self.primitive().clone()
    }

    /// Value equality: true iff both wrap equal primitives.
    fn equals(&self, other: &Self) -> bool {
        self.primitive() == other.primitive()
    }
}

/// Serialize any value object to its primitive.
pub fn serialize<V: ValueObject>(value: &V) -> V::Primitive {
    value.to_primitive()
}

/// Rebuild a value object of kind `V` from a primitive, re-running validation.
///
/// ```rust
/// use chat_domain::value_objects::{deserialize, Email};
///
/// let email = deserialize::<Email>("ann@example.com".to_string()).unwrap();
/// assert_eq!(email.as_str(), "ann@example.com");
/// assert!(deserialize::<Email>("not-an-email".to_string()).is_err());
/// ```
pub fn deserialize<V: ValueObject>(raw: V::Primitive) -> ValidationResult<V> {
    V::from_primitive(raw)
}

/// Implements [`ValueObject`] and the usual conversions for a `String` newtype.
///
/// The newtype must be a tuple struct over `String`. `$validate` is a
/// `fn(&str) -> ValidationResult<()>` run on every construction path,
/// including serde deserialization.
#[macro_export]
macro_rules! impl_string_value_object {
    ($type:ident, kind: $kind:expr, validate: $validate:path) => {
        impl $crate::value_objects::ValueObject for $type {
            type Primitive = String;

            const KIND: &'static str = $kind;

            fn from_primitive(raw: String) -> $crate::error::ValidationResult<Self> {
                $validate(&raw)?;
                Ok(Self(raw))
            }

            fn primitive(&self) -> &String {
                &self.0
            }
        }

        impl $type {
            /// Validate and wrap the given string.
            pub fn new(value: impl Into<String>) -> $crate::error::ValidationResult<Self> {
                <Self as $crate::value_objects::ValueObject>::from_primitive(value.into())
            }

            /// Borrow the wrapped string.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the value object and return the wrapped string.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $type {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $type {
            type Error = $crate::error::ValidationError;

            fn try_from(value: String) -> $crate::error::ValidationResult<Self> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $type {
            type Error = $crate::error::ValidationError;

            fn try_from(value: &str) -> $crate::error::ValidationResult<Self> {
                Self::new(value)
            }
        }

        impl std::str::FromStr for $type {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> $crate::error::ValidationResult<Self> {
                Self::new(s)
            }
        }

        impl serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(value).map_err(serde::de::Error::custom)
            }
        }
    };
}
