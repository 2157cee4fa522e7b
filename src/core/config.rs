//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.dwellboard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::menu::{CategoryConfig, TextEffect, default_categories};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DwellboardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub words: WordsConfig,
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub target_duration_ms: Option<u64>,
    pub tick_interval_ms: Option<u64>,
    pub latch: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WordsConfig {
    pub enabled: Option<bool>,
    pub url: Option<String>,
    pub suggestion_limit: Option<usize>,
}

/// One entry in a category's `items` array.
///
/// ```toml
/// items = [
///     "Sim",                                        # Phrase
///     { label = "Água", text = "Quero água" },      # LabeledPhrase
///     { label = "Mais", items = ["Talvez"] },       # Group
///     { action = "delete-last-word" },              # Action
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ItemConfig {
    Phrase(String),
    Group {
        label: String,
        items: Vec<ItemConfig>,
    },
    LabeledPhrase {
        label: String,
        text: String,
    },
    Action {
        action: TextEffect,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TARGET_DURATION_MS: u64 = 2500;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;
pub const DEFAULT_WORDS_URL: &str =
    "https://raw.githubusercontent.com/fserb/pt-br/refs/heads/master/palavras";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub target_duration: Duration,
    pub tick_interval: Duration,
    pub latch: bool,
    pub words_enabled: bool,
    pub words_url: String,
    pub suggestion_limit: usize,
    pub categories: Vec<CategoryConfig>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&DwellboardConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Values taken from command-line flags (None/false = not specified).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub target_ms: Option<u64>,
    pub latch: bool,
    pub words: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.dwellboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dwellboard").join("config.toml"))
}

/// Load config from `~/.dwellboard/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DwellboardConfig::default()`.
pub fn load_config() -> Result<DwellboardConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DwellboardConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DwellboardConfig::default());
    }

    load_config_from(&path)
}

/// Parse the config file at `path`. Missing or malformed files are errors.
pub fn load_config_from(path: &Path) -> Result<DwellboardConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DwellboardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Dwellboard Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# target_duration_ms = 2500     # Hold time to sweep the whole list (DWELLBOARD_TARGET_MS)
# tick_interval_ms = 16         # Redraw cadence while pressed
# latch = false                 # Space toggles press/release (terminals without key-up)

# [words]
# enabled = false               # Fetch the word list at startup
# url = "https://raw.githubusercontent.com/fserb/pt-br/refs/heads/master/palavras"
# suggestion_limit = 3

# Categories replace the built-in board when present.
# [[categories]]
# label = "Básico"
# items = ["Sim", "Não", { label = "Água", text = "Quero água, por favor" }]

# [[categories]]
# label = "Editar"
# items = [
#     { action = "delete-last-word" },
#     { action = "delete-last-sentence" },
#     { action = "clear-all", label = "Limpar" },
# ]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DwellboardConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &DwellboardConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Target duration: CLI → env → config → default
    let target_ms = cli
        .target_ms
        .or_else(|| {
            env("DWELLBOARD_TARGET_MS").and_then(|v| parse_env_u64("DWELLBOARD_TARGET_MS", &v))
        })
        .or(config.general.target_duration_ms)
        .unwrap_or(DEFAULT_TARGET_DURATION_MS);
    let target_ms = non_zero_or_default("target_duration_ms", target_ms, DEFAULT_TARGET_DURATION_MS);

    let tick_ms = config
        .general
        .tick_interval_ms
        .unwrap_or(DEFAULT_TICK_INTERVAL_MS);
    let tick_ms = non_zero_or_default("tick_interval_ms", tick_ms, DEFAULT_TICK_INTERVAL_MS);

    // Words URL: env → config → default
    let words_url = env("DWELLBOARD_WORDS_URL")
        .or_else(|| config.words.url.clone())
        .unwrap_or_else(|| DEFAULT_WORDS_URL.to_string());

    let categories = if config.categories.is_empty() {
        default_categories()
    } else {
        config.categories.clone()
    };

    ResolvedConfig {
        target_duration: Duration::from_millis(target_ms),
        tick_interval: Duration::from_millis(tick_ms),
        latch: cli.latch || config.general.latch.unwrap_or(false),
        words_enabled: cli.words || config.words.enabled.unwrap_or(false),
        words_url,
        suggestion_limit: config
            .words
            .suggestion_limit
            .unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        categories,
    }
}

fn parse_env_u64(key: &str, value: &str) -> Option<u64> {
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, value, e);
            None
        }
    }
}

fn non_zero_or_default(name: &str, value: u64, default: u64) -> u64 {
    if value == 0 {
        warn!("{} must be positive, using default {}", name, default);
        default
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = DwellboardConfig::default();
        assert!(config.categories.is_empty());
        assert!(config.general.target_duration_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&DwellboardConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.target_duration, Duration::from_millis(2500));
        assert_eq!(resolved.tick_interval, Duration::from_millis(16));
        assert!(!resolved.latch);
        assert!(!resolved.words_enabled);
        assert_eq!(resolved.words_url, DEFAULT_WORDS_URL);
        assert_eq!(resolved.suggestion_limit, 3);
        assert_eq!(resolved.categories, default_categories());
    }

    #[test]
    fn test_override_order() {
        let config = DwellboardConfig {
            general: GeneralConfig {
                target_duration_ms: Some(4000),
                ..Default::default()
            },
            ..Default::default()
        };

        let from_file = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(from_file.target_duration, Duration::from_millis(4000));

        let env = |key: &str| (key == "DWELLBOARD_TARGET_MS").then(|| "3000".to_string());
        let from_env = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(from_env.target_duration, Duration::from_millis(3000));

        let cli = CliOverrides {
            target_ms: Some(1500),
            ..Default::default()
        };
        let from_cli = resolve_with_env(&config, &cli, env);
        assert_eq!(from_cli.target_duration, Duration::from_millis(1500));
    }

    #[test]
    fn test_bad_env_value_is_ignored() {
        let env = |key: &str| (key == "DWELLBOARD_TARGET_MS").then(|| "soon".to_string());
        let resolved = resolve_with_env(&DwellboardConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.target_duration, Duration::from_millis(DEFAULT_TARGET_DURATION_MS));
    }

    #[test]
    fn test_zero_durations_fall_back() {
        let config = DwellboardConfig {
            general: GeneralConfig {
                target_duration_ms: Some(0),
                tick_interval_ms: Some(0),
                latch: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.target_duration, Duration::from_millis(DEFAULT_TARGET_DURATION_MS));
        assert_eq!(resolved.tick_interval, Duration::from_millis(DEFAULT_TICK_INTERVAL_MS));
    }

    #[test]
    fn test_cli_flags_enable_features() {
        let cli = CliOverrides {
            latch: true,
            words: true,
            ..Default::default()
        };
        let resolved = resolve_with_env(&DwellboardConfig::default(), &cli, no_env);
        assert!(resolved.latch);
        assert!(resolved.words_enabled);
    }

    #[test]
    fn test_toml_with_mixed_items() {
        let toml_str = r#"
[general]
target_duration_ms = 3000
latch = true

[words]
enabled = true
suggestion_limit = 5

[[categories]]
label = "Básico"
items = ["Sim", { label = "Água", text = "Quero água" }, { label = "Mais", items = ["Talvez"] }]

[[categories]]
label = "Editar"
items = [{ action = "delete-last-word" }, { action = "clear-all", label = "Zerar" }]
"#;
        let config: DwellboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.target_duration_ms, Some(3000));
        assert_eq!(config.words.suggestion_limit, Some(5));
        assert_eq!(config.categories.len(), 2);

        let basic = &config.categories[0].items;
        assert_eq!(basic[0], ItemConfig::Phrase("Sim".to_string()));
        assert_eq!(
            basic[1],
            ItemConfig::LabeledPhrase {
                label: "Água".to_string(),
                text: "Quero água".to_string(),
            }
        );
        assert_eq!(
            basic[2],
            ItemConfig::Group {
                label: "Mais".to_string(),
                items: vec![ItemConfig::Phrase("Talvez".to_string())],
            }
        );

        let edit = &config.categories[1].items;
        assert_eq!(
            edit[0],
            ItemConfig::Action {
                action: TextEffect::DeleteLastWord,
                label: None,
            }
        );
        assert_eq!(
            edit[1],
            ItemConfig::Action {
                action: TextEffect::ClearAll,
                label: Some("Zerar".to_string()),
            }
        );

        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.categories, config.categories);
    }

    #[test]
    fn test_unknown_action_is_a_parse_error() {
        let toml_str = r#"
[[categories]]
label = "Editar"
items = [{ action = "undo" }]
"#;
        assert!(toml::from_str::<DwellboardConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join(format!(
            "dwellboard-config-test-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[general]\ntick_interval_ms = 33\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.general.tick_interval_ms, Some(33));
        fs::remove_file(&path).unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
