//! Pile Config Operations
//!
//! Loading, validating and storing the pile configuration. The file format
//! follows the extension: `.toml` or `.json`.

use super::config_data::PilesConfig;
use crate::error::{PileError, PileResult};
use crate::rules::CATEGORY_RULES;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

fn format_for(path: &Path) -> PileResult<ConfigFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(ConfigFormat::Toml),
        Some("json") => Ok(ConfigFormat::Json),
        other => Err(PileError::InvalidConfig {
            field: "path".to_string(),
            value: path.display().to_string(),
            reason: format!("unsupported extension {:?}, expected toml or json", other),
        }),
    }
}

/// Parse a TOML configuration and validate it
pub fn parse_toml(source: &str) -> PileResult<PilesConfig> {
    let config: PilesConfig = toml::from_str(source).map_err(|e| PileError::DeserializationError {
        context: "toml config".to_string(),
        error: e.to_string(),
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse a JSON configuration and validate it
pub fn parse_json(source: &str) -> PileResult<PilesConfig> {
    let config: PilesConfig =
        serde_json::from_str(source).map_err(|e| PileError::DeserializationError {
            context: "json config".to_string(),
            error: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Load a configuration file
pub fn load_config(path: &Path) -> PileResult<PilesConfig> {
    let format = format_for(path)?;
    let source = fs::read_to_string(path).map_err(|e| PileError::ConfigLoad {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    let config = match format {
        ConfigFormat::Toml => parse_toml(&source),
        ConfigFormat::Json => parse_json(&source),
    }
    .map_err(|e| match e {
        PileError::DeserializationError { error, .. } => PileError::ConfigLoad {
            path: path.display().to_string(),
            error,
        },
        other => other,
    })?;

    log::info!(
        "Loaded pile config from {} ({} categories configured)",
        path.display(),
        config.categories.len()
    );
    Ok(config)
}

/// Write a configuration file in the format its extension names
pub fn save_config(path: &Path, config: &PilesConfig) -> PileResult<()> {
    let contents = match format_for(path)? {
        ConfigFormat::Toml => {
            toml::to_string_pretty(config).map_err(|e| PileError::SerializationError {
                context: "toml config".to_string(),
                error: e.to_string(),
            })?
        }
        ConfigFormat::Json => {
            serde_json::to_string_pretty(config).map_err(|e| PileError::SerializationError {
                context: "json config".to_string(),
                error: e.to_string(),
            })?
        }
    };

    fs::write(path, contents).map_err(|e| PileError::ConfigLoad {
        path: path.display().to_string(),
        error: e.to_string(),
    })
}

/// Load a configuration file, writing the defaults first when it is missing
pub fn load_or_create_config(path: &Path) -> PileResult<PilesConfig> {
    if path.exists() {
        return load_config(path);
    }

    let config = PilesConfig::with_defaults();
    save_config(path, &config)?;
    log::info!("Wrote default pile config to {}", path.display());
    Ok(config)
}

/// Reject values the pile formulas cannot work with
fn validate_config(config: &PilesConfig) -> PileResult<()> {
    for (key, category) in &config.categories {
        if category.stacking_capacity == Some(0) {
            return Err(PileError::InvalidConfig {
                field: format!("categories.{}.stacking_capacity", key),
                value: "0".to_string(),
                reason: "stacking capacity must be positive".to_string(),
            });
        }
        if category.transfer_quantity == Some(0) {
            return Err(PileError::InvalidConfig {
                field: format!("categories.{}.transfer_quantity", key),
                value: "0".to_string(),
                reason: "transfer quantity must be positive".to_string(),
            });
        }
        if !CATEGORY_RULES.iter().any(|rule| rule.key == key) {
            log::warn!("Pile config names unknown category '{}', ignoring it", key);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ground_storage::GroundStorageLayout;

    #[test]
    fn test_parse_toml() {
        let config = parse_toml(
            r#"
            [categories.stick]
            stacking_capacity = 48

            [categories.arrow]
            enabled = false

            [categories.henbox]
            layout = "Quadrants"
            stacking_model = "morepiles:block/henbox-pile"
            "#,
        )
        .expect("valid toml in test");

        let stick = config.category("stick").expect("stick configured");
        assert!(stick.enabled);
        assert_eq!(stick.stacking_capacity, Some(48));

        let arrow = config.category("arrow").expect("arrow configured");
        assert!(!arrow.enabled);

        let henbox = config.category("henbox").expect("henbox configured");
        assert_eq!(henbox.layout, Some(GroundStorageLayout::Quadrants));
        assert_eq!(
            henbox.stacking_model.as_ref().map(ToString::to_string),
            Some("morepiles:block/henbox-pile".to_string())
        );
    }

    #[test]
    fn test_parse_json() {
        let config = parse_json(r#"{ "categories": { "rope": { "enabled": false } } }"#)
            .expect("valid json in test");
        assert!(!config.category("rope").expect("rope configured").enabled);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = parse_toml("[categories.stick]\nstacking_capacity = 0\n")
            .expect_err("zero capacity in test");
        match err {
            PileError::InvalidConfig { field, .. } => {
                assert_eq!(field, "categories.stick.stacking_capacity")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_category_is_not_fatal() {
        let config = parse_toml("[categories.teapot]\nenabled = false\n")
            .expect("unknown categories are tolerated");
        assert!(config.category("teapot").is_some());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().expect("tempdir in test");
        let err = load_config(&dir.path().join("piles.yaml")).expect_err("yaml in test");
        assert!(matches!(err, PileError::InvalidConfig { .. }));
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().expect("tempdir in test");
        let path = dir.path().join("morepiles.toml");

        let created = load_or_create_config(&path).expect("defaults written in test");
        assert!(path.exists());
        assert_eq!(created, PilesConfig::with_defaults());

        let reloaded = load_config(&path).expect("reload in test");
        assert_eq!(reloaded, created);
    }

    #[test]
    fn test_json_file_load() {
        let dir = tempfile::tempdir().expect("tempdir in test");
        let path = dir.path().join("morepiles.json");
        fs::write(&path, r#"{ "categories": { "sail": { "stacking_capacity": 4 } } }"#)
            .expect("write in test");

        let config = load_config(&path).expect("load in test");
        assert_eq!(
            config.category("sail").and_then(|c| c.stacking_capacity),
            Some(4)
        );
    }

    #[test]
    fn test_malformed_file_names_path() {
        let dir = tempfile::tempdir().expect("tempdir in test");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[categories.stick\n").expect("write in test");

        match load_config(&path).expect_err("malformed toml in test") {
            PileError::ConfigLoad { path: reported, .. } => {
                assert_eq!(reported, path.display().to_string())
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
