use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::WireError;
use crate::validate::{Validator, ViolationKind};
use crate::wire::{Shape, WireValue};

/// The closed set of constants an [`OpenEnum`] recognizes.
pub trait KnownValue: Copy + Eq + fmt::Debug + 'static {
    const NAME: &'static str;
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|known| known.as_str() == value)
    }
}

/// A string enum that keeps values it does not recognize.
///
/// The raw string is what goes back on the wire and what equality compares;
/// the resolved constant is a cache for matching in application code.
#[derive(Clone)]
pub struct OpenEnum<E> {
    raw: String,
    known: Option<E>,
}

impl<E: KnownValue> OpenEnum<E> {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let known = E::parse(&raw);
        Self { raw, known }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn known(&self) -> Option<E> {
        self.known
    }

    pub fn is_known(&self) -> bool {
        self.known.is_some()
    }
}

impl<E: KnownValue> From<E> for OpenEnum<E> {
    fn from(known: E) -> Self {
        Self {
            raw: known.as_str().to_string(),
            known: Some(known),
        }
    }
}

impl<E> PartialEq for OpenEnum<E> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E> Eq for OpenEnum<E> {}

impl<E: KnownValue> PartialEq<E> for OpenEnum<E> {
    fn eq(&self, other: &E) -> bool {
        self.raw == other.as_str()
    }
}

impl<E> Hash for OpenEnum<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<E: fmt::Debug> fmt::Debug for OpenEnum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.known {
            Some(known) => write!(f, "{known:?}"),
            None => write!(f, "Unknown({:?})", self.raw),
        }
    }
}

impl<E> fmt::Display for OpenEnum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<E> Serialize for OpenEnum<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de, E: KnownValue> Deserialize<'de> for OpenEnum<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from_raw)
    }
}

impl<E: KnownValue> WireValue for OpenEnum<E> {
    const SHAPE: Shape = Shape::String;

    fn to_wire(&self) -> Value {
        Value::String(self.raw.clone())
    }

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value
            .as_str()
            .map(Self::from_raw)
            .ok_or_else(|| WireError::unexpected("string", value))
    }

    fn validate_into(&self, validator: &mut Validator) {
        if self.known.is_none() {
            validator.report(ViolationKind::InvalidEnumValue {
                enum_name: E::NAME,
                value: self.raw.clone(),
            });
        }
    }
}

/// Declares a known-constant enum plus its [`OpenEnum`] alias.
///
/// ```ignore
/// open_enum! {
///     pub enum CadenceKnown as Cadence {
///         Monthly = "monthly",
///         Annual = "annual",
///     }
/// }
/// ```
#[macro_export]
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $known:ident as $alias:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $known {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::KnownValue for $known {
            const NAME: &'static str = stringify!($alias);
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        pub type $alias = $crate::OpenEnum<$known>;
    };
}
