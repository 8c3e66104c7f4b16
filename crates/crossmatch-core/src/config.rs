//! Configuration types for crossmatch.
//!
//! [`Config::load`] reads `~/.config/crossmatch/config.toml` layered on top of
//! the embedded defaults, then `CROSSMATCH__SECTION__KEY` environment
//! overrides. [`Config::defaults`] returns the same defaults without touching
//! the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::filter::DEFAULT_MAX_DISJUNCTS;
use crate::search::PatternLimits;
use crate::semantic::DEFAULT_MAX_SEMANTIC_VARIANTS;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[patterns]
max_patterns         = 128
diacritic_expansions = 6
typo_variants        = 25

[semantic]
max_variants = 3

[filter]
max_disjuncts = 15
columns       = ["display_name", "email", "phone"]
"#;

const ENV_PREFIX: &str = "CROSSMATCH";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/crossmatch/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub patterns: PatternLimits,
    #[serde(default)]
    pub semantic: SemanticConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// `[semantic]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SemanticConfig {
    /// Upper bound on the variant chain, i.e. embedding calls per query.
    #[serde(default = "default_max_variants")]
    pub max_variants: usize,
}

fn default_max_variants() -> usize { DEFAULT_MAX_SEMANTIC_VARIANTS }

impl Default for SemanticConfig {
    fn default() -> Self {
        Self { max_variants: default_max_variants() }
    }
}

/// `[filter]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Patterns turned into `ILIKE` disjuncts; stricter than the pattern cap.
    #[serde(default = "default_max_disjuncts")]
    pub max_disjuncts: usize,
    #[serde(default = "default_columns")]
    pub columns: Vec<String>,
}

fn default_max_disjuncts() -> usize { DEFAULT_MAX_DISJUNCTS }
fn default_columns() -> Vec<String> {
    vec!["display_name".to_string(), "email".to_string(), "phone".to_string()]
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_disjuncts: default_max_disjuncts(),
            columns: default_columns(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from the default path, layered on the built-in defaults. A missing
    /// file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path, layered on the built-in defaults and
    /// followed by environment overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        tracing::debug!(path = %path.display(), "config: loaded");
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Reject caps that would make a builder return nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.patterns.max_patterns == 0 {
            return Err(ConfigError::Invalid {
                field: "patterns.max_patterns",
                reason: "must be at least 1",
            });
        }
        if self.semantic.max_variants == 0 {
            return Err(ConfigError::Invalid {
                field: "semantic.max_variants",
                reason: "must be at least 1",
            });
        }
        if self.filter.max_disjuncts == 0 {
            return Err(ConfigError::Invalid {
                field: "filter.max_disjuncts",
                reason: "must be at least 1",
            });
        }
        if self.filter.columns.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                field: "filter.columns",
                reason: "column names must not be blank",
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("crossmatch")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.patterns, PatternLimits::default());
        assert_eq!(cfg.semantic.max_variants, 3);
        assert_eq!(cfg.filter.max_disjuncts, 15);
        assert_eq!(cfg.filter.columns, vec!["display_name", "email", "phone"]);
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[semantic]\nmax_variants = 2\n\n[patterns]\ntypo_variants = 10").unwrap();

        let cfg = Config::load_from(file.path()).unwrap();
        assert_eq!(cfg.semantic.max_variants, 2);
        assert_eq!(cfg.patterns.typo_variants, 10);
        assert_eq!(cfg.patterns.max_patterns, 128);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.filter.max_disjuncts, 15);
    }

    #[test]
    fn zero_caps_are_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[filter]\nmax_disjuncts = 0").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "filter.max_disjuncts", .. }));
    }
}
