//! Raw-backed JSON models for the billing API.
//!
//! Every model keeps the exact object it was decoded from in a
//! [`RawFields`] store. Typed accessors parse on read and write through on
//! assignment, so a decoded payload re-serializes unchanged.

pub mod codec;
pub mod error;
pub mod field;
pub mod model;
pub mod open_enum;
pub mod raw;
pub mod validate;
pub mod variant;
pub mod wire;

pub use codec::{DecodeOptions, decode, from_slice, from_str, to_bytes, to_string, to_value, to_vec};
pub use error::{Error, WireError, json_kind};
pub use field::Field;
pub use model::{FieldSpec, Model, Presence};
pub use open_enum::{KnownValue, OpenEnum};
pub use raw::RawFields;
pub use validate::{Validate, ValidationErrors, Validator, Violation, ViolationKind};
pub use variant::{Candidate, Union, resolve};
pub use wire::{Shape, WireValue};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
