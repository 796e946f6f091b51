use serde_json::{Map, Value};

use crate::error::WireError;
use crate::model::FieldSpec;
use crate::raw::RawFields;
use crate::validate::Validator;
use crate::wire::WireValue;

/// One concrete shape a [`Union`] may resolve to.
pub struct Candidate<U> {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
    pub build: fn(RawFields) -> U,
    /// Validates a borrowed wire object as this candidate.
    pub validate: fn(&Map<String, Value>, &mut Validator),
}

impl<U> Candidate<U> {
    /// The literal this candidate pins `discriminator` to, if any.
    pub fn tag(&self, discriminator: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|spec| spec.wire == discriminator)
            .and_then(|spec| spec.constant)
    }

    pub fn is_satisfied_by(&self, object: &Map<String, Value>) -> bool {
        self.fields
            .iter()
            .all(|spec| spec.admits(object.get(spec.wire)))
    }
}

impl<U> Clone for Candidate<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for Candidate<U> {}

impl<U> std::fmt::Debug for Candidate<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("name", &self.name)
            .field("fields", &self.fields.len())
            .finish()
    }
}

/// A closed set of model shapes sharing one wire position.
///
/// Implemented by [`variant_union!`](crate::variant_union!).
pub trait Union: WireValue {
    const NAME: &'static str;
    /// Wire key whose string value selects the variant, when the union has one.
    const DISCRIMINATOR: Option<&'static str>;

    /// Candidates in declaration order.
    fn candidates() -> Vec<Candidate<Self>>;

    fn variant_name(&self) -> &'static str;
}

/// Picks the candidate `object` should be decoded as.
///
/// A discriminator value claimed by exactly one candidate wins outright.
/// Otherwise the first candidate, in order, whose required fields and tag are
/// all satisfied is taken.
pub fn resolve<'c, U>(
    union: &'static str,
    discriminator: Option<&str>,
    object: &Map<String, Value>,
    candidates: &'c [Candidate<U>],
) -> Result<&'c Candidate<U>, WireError> {
    let tag = discriminator.and_then(|key| object.get(key));

    if let (Some(key), Some(Value::String(tag))) = (discriminator, tag) {
        let mut claimed = candidates
            .iter()
            .filter(|candidate| candidate.tag(key) == Some(tag.as_str()));
        if let (Some(candidate), None) = (claimed.next(), claimed.next()) {
            tracing::trace!(union, variant = candidate.name, tag = %tag, "variant selected by discriminator");
            return Ok(candidate);
        }
    }

    tracing::debug!(union, "falling back to structural variant matching");
    if let Some(candidate) = candidates
        .iter()
        .find(|candidate| candidate.is_satisfied_by(object))
    {
        tracing::trace!(union, variant = candidate.name, "variant selected structurally");
        return Ok(candidate);
    }

    let attempted = tag.and_then(|value| match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    });
    tracing::debug!(union, discriminator = ?attempted, "no variant matches");
    Err(WireError::NoMatchingVariant {
        union,
        discriminator: attempted,
    })
}

/// Declares a sum type over [`Model`](crate::Model)s with wire resolution.
///
/// ```ignore
/// variant_union! {
///     pub enum Price ["model_type"] {
///         Unit(UnitPrice),
///         Minimum(MinimumPrice),
///     }
/// }
/// ```
///
/// Without the bracketed discriminator the union is resolved structurally.
#[macro_export]
macro_rules! variant_union {
    (@disc $disc:literal) => { ::core::option::Option::Some($disc) };
    (@disc) => { ::core::option::Option::None };

    (
        $(#[$meta:meta])*
        pub enum $name:ident $([$disc:literal])? {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )+
        }

        impl $name {
            pub fn raw(&self) -> &$crate::RawFields {
                match self {
                    $(Self::$variant(inner) => $crate::Model::raw(inner),)+
                }
            }

            /// The tag the held variant carries on the wire.
            pub fn discriminator_value(&self) -> ::core::option::Option<&str> {
                let key = <Self as $crate::Union>::DISCRIMINATOR?;
                self.raw().get(key)?.as_str()
            }
        }

        impl $crate::Union for $name {
            const NAME: &'static str = stringify!($name);
            const DISCRIMINATOR: ::core::option::Option<&'static str> =
                $crate::variant_union!(@disc $($disc)?);

            fn candidates() -> ::std::vec::Vec<$crate::Candidate<Self>> {
                ::std::vec![
                    $(
                        $crate::Candidate {
                            name: stringify!($variant),
                            fields: <$ty as $crate::Model>::FIELDS,
                            build: |raw| Self::$variant(<$ty as $crate::Model>::from_raw(raw)),
                            validate: <$ty as $crate::Model>::validate_object,
                        },
                    )+
                ]
            }

            fn variant_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant),)+
                }
            }
        }

        impl $crate::WireValue for $name {
            const SHAPE: $crate::Shape = $crate::Shape::Object;

            fn to_wire(&self) -> $crate::__private::serde_json::Value {
                match self {
                    $(Self::$variant(inner) => $crate::WireValue::to_wire(inner),)+
                }
            }

            fn from_wire(
                value: &$crate::__private::serde_json::Value,
            ) -> ::core::result::Result<Self, $crate::WireError> {
                let object = value
                    .as_object()
                    .ok_or_else(|| $crate::WireError::unexpected("object", value))?;
                let candidates = <Self as $crate::Union>::candidates();
                let chosen = $crate::resolve(
                    <Self as $crate::Union>::NAME,
                    <Self as $crate::Union>::DISCRIMINATOR,
                    object,
                    &candidates,
                )?;
                ::core::result::Result::Ok((chosen.build)($crate::RawFields::from_map(
                    object.clone(),
                )))
            }

            fn validate_into(&self, validator: &mut $crate::Validator) {
                match self {
                    $(Self::$variant(inner) => $crate::WireValue::validate_into(inner, validator),)+
                }
            }

            fn validate_wire(
                value: &$crate::__private::serde_json::Value,
                validator: &mut $crate::Validator,
            ) {
                let ::core::option::Option::Some(object) = value.as_object() else {
                    validator.reject($crate::WireError::unexpected("object", value));
                    return;
                };
                let candidates = <Self as $crate::Union>::candidates();
                match $crate::resolve(
                    <Self as $crate::Union>::NAME,
                    <Self as $crate::Union>::DISCRIMINATOR,
                    object,
                    &candidates,
                ) {
                    ::core::result::Result::Ok(chosen) => (chosen.validate)(object, validator),
                    ::core::result::Result::Err(err) => validator.reject(err),
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                match self {
                    $(Self::$variant(inner) => $crate::__private::serde::Serialize::serialize(inner, serializer),)+
                }
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <$crate::__private::serde_json::Value as $crate::__private::serde::Deserialize<'de>>::deserialize(deserializer)?;
                <Self as $crate::WireValue>::from_wire(&value)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }

        $(
            impl ::core::convert::From<$ty> for $name {
                fn from(inner: $ty) -> Self {
                    Self::$variant(inner)
                }
            }
        )+
    };
}
