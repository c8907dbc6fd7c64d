//! Flick configuration file handling
//!
//! `flick.toml` holds deck tuning and feed filtering. Every key is optional:
//!
//! ```toml
//! commit_threshold = 250.0
//! fling_distance = 500.0
//! pressed_scale = 0.95
//!
//! [fling_spring]
//! tension = 5.0
//! friction = 7.0
//! rest_displacement = 100.0
//! rest_speed = 100.0
//!
//! [feed]
//! active_only = true
//! limit = 100
//! ```

use anyhow::{Context, Result};
use flick_core::DeckConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE: &str = "flick.toml";

/// Load deck configuration
///
/// An explicit path must exist. Without one, `flick.toml` in the current
/// directory is used if present, otherwise defaults.
pub fn load(explicit: Option<&Path>) -> Result<DeckConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = Path::new(CONFIG_FILE);
            if !fallback.exists() {
                debug!("No {} found, using defaults", CONFIG_FILE);
                return Ok(DeckConfig::default());
            }
            fallback.to_path_buf()
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = parse(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse(content: &str) -> Result<DeckConfig> {
    let config: DeckConfig = toml::from_str(content)?;
    if config.commit_threshold <= 0.0 {
        anyhow::bail!(
            "commit_threshold must be positive, got {}",
            config.commit_threshold
        );
    }
    if config.fling_distance <= config.commit_threshold {
        anyhow::bail!(
            "fling_distance ({}) must exceed commit_threshold ({})",
            config.fling_distance,
            config.commit_threshold
        );
    }
    Ok(config)
}

/// Serialize a configuration to TOML
pub fn to_toml(config: &DeckConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize deck config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use flick_core::SpringProfile;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse("").unwrap(), DeckConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = parse(
            r#"
            commit_threshold = 200.0

            [feed]
            limit = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.commit_threshold, 200.0);
        assert_eq!(config.pressed_scale, 0.95);
        assert_eq!(config.settle_spring, SpringProfile::settle());
        assert_eq!(config.feed.limit, Some(20));
    }

    #[test]
    fn test_rejects_fling_inside_threshold() {
        assert!(parse("commit_threshold = 300.0\nfling_distance = 200.0").is_err());
        assert!(parse("commit_threshold = -1.0").is_err());
    }

    #[test]
    fn test_default_round_trips() {
        let text = to_toml(&DeckConfig::default()).unwrap();
        assert_eq!(parse(&text).unwrap(), DeckConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        assert!(load(Some(Path::new("/nonexistent/flick.toml"))).is_err());
    }
}
