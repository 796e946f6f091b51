use serde_json::{Map, Value};

use crate::raw::RawFields;
use crate::validate::Validator;
use crate::wire::{Shape, WireValue};

/// How a schema field may appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Must be present and non-null.
    Required,
    /// May be absent; a wire `null` reads as absent and is never written.
    Optional,
    /// May be absent, `null`, or a value, and all three are distinct.
    Nullable,
}

/// Static description of one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub wire: &'static str,
    pub presence: Presence,
    pub shape: Shape,
    /// Literal the field is pinned to, for discriminator tags.
    pub constant: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(wire: &'static str, presence: Presence, shape: Shape) -> Self {
        Self {
            wire,
            presence,
            shape,
            constant: None,
        }
    }

    pub const fn constant(wire: &'static str, value: &'static str) -> Self {
        Self {
            wire,
            presence: Presence::Required,
            shape: Shape::String,
            constant: Some(value),
        }
    }

    /// Whether `value` (absent when `None`) could belong to this field.
    ///
    /// Only required fields and constants constrain a match.
    pub fn admits(&self, value: Option<&Value>) -> bool {
        if let Some(expected) = self.constant {
            return value.and_then(Value::as_str) == Some(expected);
        }
        match (self.presence, value) {
            (Presence::Required, None | Some(Value::Null)) => false,
            (Presence::Required, Some(value)) => self.shape.matches(value),
            _ => true,
        }
    }
}

/// A record backed by a [`RawFields`] store.
///
/// Implemented by [`model!`](crate::model!); typed accessors are generated as
/// inherent methods on each model.
pub trait Model: WireValue + Clone + PartialEq + Default {
    const NAME: &'static str;
    const FIELDS: &'static [FieldSpec];

    fn raw(&self) -> &RawFields;

    /// Direct access to the store, e.g. to attach additional properties.
    fn raw_mut(&mut self) -> &mut RawFields;

    fn from_raw(raw: RawFields) -> Self;

    fn into_raw(self) -> RawFields;

    /// Checks a wire object against [`FIELDS`](Self::FIELDS) without taking
    /// ownership of it.
    fn validate_object(object: &Map<String, Value>, validator: &mut Validator);

    /// Whether `wire_key` is a key of the raw store, including as an explicit
    /// `null`.
    ///
    /// This is key presence, not the typed state: an optional non-nullable
    /// field received as `null` is present here while its getter returns
    /// `None`.
    fn is_present(&self, wire_key: &str) -> bool {
        self.raw().contains(wire_key)
    }

    fn is_null(&self, wire_key: &str) -> bool {
        self.raw().is_null(wire_key)
    }

    /// Entries whose keys this model does not declare.
    fn unknown_fields(&self) -> Vec<(&str, &Value)> {
        self.raw()
            .unknown(Self::FIELDS)
            .map(|(key, value)| (key.as_str(), value))
            .collect()
    }

    fn field_spec(wire_key: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|spec| spec.wire == wire_key)
    }
}

/// Declares a raw-backed model with typed accessors.
///
/// Each field line reads `presence getter / setter: Type = "wire_key";` where
/// presence is `required`, `optional` or `nullable`. A bracketed
/// `["key" = "value"]` after the name pins a discriminator tag that
/// `Default` writes and validation checks.
///
/// ```ignore
/// model! {
///     pub struct MinimumConfig {
///         required minimum_amount / set_minimum_amount: String = "minimum_amount";
///         optional prorated / set_prorated: bool = "prorated";
///     }
/// }
/// ```
#[macro_export]
macro_rules! model {
    (@presence required) => { $crate::Presence::Required };
    (@presence optional) => { $crate::Presence::Optional };
    (@presence nullable) => { $crate::Presence::Nullable };

    (@accessors required [$(#[$m:meta])*] $getter:ident $setter:ident $ty:ty, $wire:literal) => {
        $(#[$m])*
        pub fn $getter(&self) -> ::core::result::Result<$ty, $crate::Error> {
            self.raw.required($wire)
        }

        pub fn $setter(&mut self, value: impl ::core::convert::Into<$ty>) -> &mut Self {
            let value: $ty = value.into();
            self.raw.set($wire, &value);
            self
        }
    };
    (@accessors optional [$(#[$m:meta])*] $getter:ident $setter:ident $ty:ty, $wire:literal) => {
        $(#[$m])*
        pub fn $getter(&self) -> ::core::result::Result<::core::option::Option<$ty>, $crate::Error> {
            self.raw.optional($wire)
        }

        /// `None` unsets the field.
        pub fn $setter(&mut self, value: ::core::option::Option<$ty>) -> &mut Self {
            self.raw.set_optional($wire, value.as_ref());
            self
        }
    };
    (@accessors nullable [$(#[$m:meta])*] $getter:ident $setter:ident $ty:ty, $wire:literal) => {
        $(#[$m])*
        pub fn $getter(&self) -> ::core::result::Result<$crate::Field<$ty>, $crate::Error> {
            self.raw.nullable($wire)
        }

        /// `None` sends an explicit `null`.
        pub fn $setter(&mut self, value: ::core::option::Option<$ty>) -> &mut Self {
            self.raw.set_nullable($wire, value.as_ref());
            self
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident $([$tag_key:literal = $tag_value:literal])? {
            $(
                $(#[$fmeta:meta])*
                $presence:ident $getter:ident / $setter:ident : $ty:ty = $wire:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            raw: $crate::RawFields,
        }

        impl $name {
            pub fn new() -> Self {
                <Self as ::core::default::Default>::default()
            }

            $(
                $crate::model!(@accessors $presence [$(#[$fmeta])*] $getter $setter $ty, $wire);
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                #[allow(unused_mut)]
                let mut raw = $crate::RawFields::new();
                $(
                    raw.insert_raw(
                        $tag_key,
                        $crate::__private::serde_json::Value::String(
                            ::std::string::String::from($tag_value),
                        ),
                    );
                )?
                Self { raw }
            }
        }

        impl $crate::Model for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [$crate::FieldSpec] = &[
                $($crate::FieldSpec::constant($tag_key, $tag_value),)?
                $(
                    $crate::FieldSpec::new(
                        $wire,
                        $crate::model!(@presence $presence),
                        <$ty as $crate::WireValue>::SHAPE,
                    ),
                )*
            ];

            fn raw(&self) -> &$crate::RawFields {
                &self.raw
            }

            fn raw_mut(&mut self) -> &mut $crate::RawFields {
                &mut self.raw
            }

            fn from_raw(raw: $crate::RawFields) -> Self {
                Self { raw }
            }

            fn into_raw(self) -> $crate::RawFields {
                self.raw
            }

            fn validate_object(
                object: &$crate::__private::serde_json::Map<
                    ::std::string::String,
                    $crate::__private::serde_json::Value,
                >,
                validator: &mut $crate::Validator,
            ) {
                validator.nested(|validator| {
                    $(validator.constant(object, $tag_key, $tag_value);)?
                    $(
                        validator.field::<$ty>(
                            object,
                            $wire,
                            $crate::model!(@presence $presence),
                        );
                    )*
                });
            }
        }

        impl $crate::WireValue for $name {
            const SHAPE: $crate::Shape = $crate::Shape::Object;

            fn to_wire(&self) -> $crate::__private::serde_json::Value {
                self.raw.to_value()
            }

            fn from_wire(
                value: &$crate::__private::serde_json::Value,
            ) -> ::core::result::Result<Self, $crate::WireError> {
                $crate::RawFields::from_value(value).map(|raw| Self { raw })
            }

            fn validate_into(&self, validator: &mut $crate::Validator) {
                <Self as $crate::Model>::validate_object(self.raw.as_map(), validator);
            }

            fn validate_wire(
                value: &$crate::__private::serde_json::Value,
                validator: &mut $crate::Validator,
            ) {
                match value.as_object() {
                    ::core::option::Option::Some(object) => {
                        <Self as $crate::Model>::validate_object(object, validator)
                    }
                    ::core::option::Option::None => {
                        validator.reject($crate::WireError::unexpected("object", value))
                    }
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.raw, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <$crate::RawFields as $crate::__private::serde::Deserialize<'de>>::deserialize(
                    deserializer,
                )
                .map(|raw| Self { raw })
            }
        }
    };
}
