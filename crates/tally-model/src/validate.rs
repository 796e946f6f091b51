use std::fmt;

use serde_json::{Map, Value};
use tally_common::DEFAULT_MAX_VALIDATION_DEPTH;

use crate::error::{WireError, json_kind};
use crate::model::Presence;
use crate::wire::WireValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    MissingRequiredField,
    InvalidEnumValue {
        enum_name: &'static str,
        value: String,
    },
    InvalidFieldType {
        expected: &'static str,
        found: &'static str,
    },
    UnexpectedConstant {
        expected: &'static str,
        found: String,
    },
    NoMatchingVariant {
        union: &'static str,
        discriminator: Option<String>,
    },
    DepthExceeded {
        limit: usize,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::MissingRequiredField => f.write_str("missing required field"),
            ViolationKind::InvalidEnumValue { enum_name, value } => {
                write!(f, "{value:?} is not a known {enum_name} value")
            }
            ViolationKind::InvalidFieldType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            ViolationKind::UnexpectedConstant { expected, found } => {
                write!(f, "expected constant {expected:?}, found {found}")
            }
            ViolationKind::NoMatchingVariant {
                union,
                discriminator: Some(tag),
            } => write!(f, "no {union} variant matches discriminator {tag:?}"),
            ViolationKind::NoMatchingVariant {
                union,
                discriminator: None,
            } => write!(f, "no {union} variant matches"),
            ViolationKind::DepthExceeded { limit } => {
                write!(f, "nesting deeper than {limit} levels")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON path of the offending value, `$` being the validated root.
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Every violation found by one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    pub fn at_path(&self, path: &str) -> Option<&Violation> {
        self.violations.iter().find(|violation| violation.path == path)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "; {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Accumulates violations while walking a model tree.
#[derive(Debug)]
pub struct Validator {
    path: Vec<Segment>,
    depth: usize,
    max_depth: usize,
    violations: Vec<Violation>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_VALIDATION_DEPTH)
    }
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            path: Vec::new(),
            depth: 0,
            max_depth,
            violations: Vec::new(),
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                violations: self.violations,
            })
        }
    }

    pub fn report(&mut self, kind: ViolationKind) {
        self.violations.push(Violation {
            path: self.render_path(),
            kind,
        });
    }

    /// Records a conversion error at the current path.
    pub fn reject(&mut self, err: WireError) {
        let kind = match err {
            WireError::UnexpectedType { expected, found } => {
                ViolationKind::InvalidFieldType { expected, found }
            }
            WireError::NoMatchingVariant {
                union,
                discriminator,
            } => ViolationKind::NoMatchingVariant {
                union,
                discriminator,
            },
            WireError::MissingField(_) => ViolationKind::MissingRequiredField,
        };
        self.report(kind);
    }

    pub fn at<F: FnOnce(&mut Self)>(&mut self, key: &str, f: F) {
        self.path.push(Segment::Key(key.to_string()));
        f(self);
        self.path.pop();
    }

    pub fn at_index<F: FnOnce(&mut Self)>(&mut self, index: usize, f: F) {
        self.path.push(Segment::Index(index));
        f(self);
        self.path.pop();
    }

    /// Enters one level of model nesting, or reports `DepthExceeded` and skips.
    pub fn nested<F: FnOnce(&mut Self)>(&mut self, f: F) {
        if self.depth >= self.max_depth {
            tracing::warn!(
                path = %self.render_path(),
                limit = self.max_depth,
                "validation depth limit reached"
            );
            self.report(ViolationKind::DepthExceeded {
                limit: self.max_depth,
            });
            return;
        }
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    /// Checks one schema field of a model's wire object.
    pub fn field<T: WireValue>(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        presence: Presence,
    ) {
        self.at(key, |validator| match (object.get(key), presence) {
            (None, Presence::Required) => validator.report(ViolationKind::MissingRequiredField),
            (None, _) => {}
            (Some(Value::Null), Presence::Required) => {
                validator.report(ViolationKind::InvalidFieldType {
                    expected: T::SHAPE.name(),
                    found: "null",
                })
            }
            (Some(Value::Null), _) => {}
            (Some(value), _) => T::validate_wire(value, validator),
        });
    }

    /// Checks a field pinned to a literal, such as a discriminator tag.
    pub fn constant(&mut self, object: &Map<String, Value>, key: &str, expected: &'static str) {
        self.at(key, |validator| match object.get(key) {
            None => validator.report(ViolationKind::MissingRequiredField),
            Some(Value::String(found)) if found == expected => {}
            Some(Value::String(found)) => validator.report(ViolationKind::UnexpectedConstant {
                expected,
                found: format!("{found:?}"),
            }),
            Some(other) => validator.report(ViolationKind::UnexpectedConstant {
                expected,
                found: json_kind(other).to_string(),
            }),
        });
    }

    fn render_path(&self) -> String {
        let mut out = String::from("$");
        for segment in &self.path {
            match segment {
                Segment::Key(key) => {
                    out.push('.');
                    out.push_str(key);
                }
                Segment::Index(index) => {
                    out.push('[');
                    out.push_str(&index.to_string());
                    out.push(']');
                }
            }
        }
        out
    }
}

/// Recursive, non-mutating validation of a typed value.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_with_depth(DEFAULT_MAX_VALIDATION_DEPTH)
    }

    fn validate_with_depth(&self, max_depth: usize) -> Result<(), ValidationErrors>;
}

impl<T: WireValue> Validate for T {
    fn validate_with_depth(&self, max_depth: usize) -> Result<(), ValidationErrors> {
        let mut validator = Validator::with_max_depth(max_depth);
        self.validate_into(&mut validator);
        validator.finish()
    }
}
