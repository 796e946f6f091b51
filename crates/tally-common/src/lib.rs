use serde::{Deserialize, Serialize};

pub const ENV_RESPONSE_VALIDATION: &str = "TALLY_RESPONSE_VALIDATION";
pub const ENV_MAX_VALIDATION_DEPTH: &str = "TALLY_MAX_VALIDATION_DEPTH";

pub const DEFAULT_MAX_VALIDATION_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Final, merged codec configuration.
///
/// Merge order: explicit > ENV > defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Validate every decoded response before handing it to the caller.
    pub response_validation: bool,
    /// Nesting limit for recursive validation.
    pub max_validation_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            response_validation: false,
            max_validation_depth: DEFAULT_MAX_VALIDATION_DEPTH,
        }
    }
}

/// Optional layer used for merging codec config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodecConfigPatch {
    pub response_validation: Option<bool>,
    pub max_validation_depth: Option<usize>,
}

impl CodecConfigPatch {
    pub fn overlay(&mut self, other: CodecConfigPatch) {
        if other.response_validation.is_some() {
            self.response_validation = other.response_validation;
        }
        if other.max_validation_depth.is_some() {
            self.max_validation_depth = other.max_validation_depth;
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a patch from an arbitrary key lookup. Unset keys stay `None`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let response_validation = match lookup(ENV_RESPONSE_VALIDATION) {
            Some(value) => Some(parse_bool(ENV_RESPONSE_VALIDATION, &value)?),
            None => None,
        };
        let max_validation_depth = match lookup(ENV_MAX_VALIDATION_DEPTH) {
            Some(value) => Some(value.trim().parse::<usize>().map_err(|_| {
                ConfigError::InvalidValue {
                    key: ENV_MAX_VALIDATION_DEPTH,
                    value: value.clone(),
                }
            })?),
            None => None,
        };
        let patch = Self {
            response_validation,
            max_validation_depth,
        };
        tracing::debug!(?patch, "codec config loaded from environment");
        Ok(patch)
    }

    pub fn into_config(self) -> CodecConfig {
        let defaults = CodecConfig::default();
        CodecConfig {
            response_validation: self
                .response_validation
                .unwrap_or(defaults.response_validation),
            max_validation_depth: self
                .max_validation_depth
                .unwrap_or(defaults.max_validation_depth),
        }
    }
}

impl From<CodecConfig> for CodecConfigPatch {
    fn from(value: CodecConfig) -> Self {
        Self {
            response_validation: Some(value.response_validation),
            max_validation_depth: Some(value.max_validation_depth),
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
