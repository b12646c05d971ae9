//! Runtime configuration for the nickname engine.
//!
//! Values come from environment variables (a `.env` file is loaded by `main`
//! first), falling back to defaults when unset.
//!
//! | Variable                   | Default               |
//! |----------------------------|-----------------------|
//! | `NICKNAMES_SECTION`        | `gordoNames`          |
//! | `NICKNAMES_DESTROY_POLICY` | `retain`              |
//! | `NICKNAMES_SAVE_PATH`      | `nicknames-save.json` |

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SECTION_NAME: &str = "gordoNames";
pub const DEFAULT_SAVE_PATH: &str = "nicknames-save.json";

const SECTION_VAR: &str = "NICKNAMES_SECTION";
const DESTROY_POLICY_VAR: &str = "NICKNAMES_DESTROY_POLICY";
const SAVE_PATH_VAR: &str = "NICKNAMES_SAVE_PATH";

// ============================================================================
// Destroy Policy
// ============================================================================

/// What happens to a landmark's stored name when its instance is destroyed
/// without an explicit clear.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DestroyPolicy {
    /// Keep the entry so the next instance with the same durable id adopts it.
    #[default]
    Retain,
    /// Remove the entry on every destroy, for any reason.
    Remove,
}

impl std::fmt::Display for DestroyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DestroyPolicy::Retain => write!(f, "retain"),
            DestroyPolicy::Remove => write!(f, "remove"),
        }
    }
}

impl std::str::FromStr for DestroyPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" | "keep" => Ok(DestroyPolicy::Retain),
            "remove" | "remove_on_destroy" | "forget" => Ok(DestroyPolicy::Remove),
            other => Err(ConfigError::InvalidValue {
                variable: DESTROY_POLICY_VAR,
                value: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// Config
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {variable}: {value:?}")]
    InvalidValue {
        variable: &'static str,
        value: String,
    },
}

/// Nickname engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknameConfig {
    /// Name of the save-document section holding durable names.
    pub section_name: String,
    pub destroy_policy: DestroyPolicy,
    /// Save file used by the console driver when no path is given.
    pub save_path: PathBuf,
}

impl Default for NicknameConfig {
    fn default() -> Self {
        Self {
            section_name: DEFAULT_SECTION_NAME.to_string(),
            destroy_policy: DestroyPolicy::default(),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

impl NicknameConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let section_name = match lookup(SECTION_VAR) {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    variable: SECTION_VAR,
                    value,
                })
            }
            Some(value) => value,
            None => defaults.section_name,
        };

        let destroy_policy = match lookup(DESTROY_POLICY_VAR) {
            Some(value) => value.parse()?,
            None => defaults.destroy_policy,
        };

        let save_path = lookup(SAVE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.save_path);

        Ok(Self {
            section_name,
            destroy_policy,
            save_path,
        })
    }

    pub fn with_destroy_policy(mut self, policy: DestroyPolicy) -> Self {
        self.destroy_policy = policy;
        self
    }
}
