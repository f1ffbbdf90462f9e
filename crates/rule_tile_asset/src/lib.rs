//! Asset persistence for rule_tile_kit
//!
//! This crate loads and saves [`RuleTileAsset`] and [`RuleOverrideAsset`]
//! files as JSON, validating on every load so malformed hand-edited files
//! fail up front instead of corrupting the override merge later. Rule ids are
//! plain data on the rule structs, so identity survives a save/load cycle
//! unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use rule_tile_asset::{load_rule_tile, load_override};
//!
//! let base = load_rule_tile("tiles/cliff.ruletile.json".as_ref())?;
//! let over = load_override("tiles/cliff_mossy.override.json".as_ref())?;
//!
//! let mut instance = RuleTileAsset::new("cliff_mossy (instance)".to_string());
//! over.apply_to(Some(&base), Some(&mut instance));
//! ```

mod validate;

pub use validate::{validate_override, validate_rule_tile};

use std::path::Path;

use rule_tile_core::RuleTileAsset;
use rule_tile_override::RuleOverrideAsset;
use thiserror::Error;

/// Errors that can occur when loading or validating assets
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// ─── Rule tile assets ────────────────────────────────────────────────────────

/// Load a rule tile asset from a JSON file
pub fn load_rule_tile(path: &Path) -> Result<RuleTileAsset, AssetError> {
    let content = std::fs::read_to_string(path).map_err(|e| AssetError::IoError(e.to_string()))?;

    parse_rule_tile(&content)
}

/// Parse a rule tile asset from a JSON string
pub fn parse_rule_tile(json: &str) -> Result<RuleTileAsset, AssetError> {
    let asset: RuleTileAsset =
        serde_json::from_str(json).map_err(|e| AssetError::ParseError(e.to_string()))?;

    validate_rule_tile(&asset)?;

    Ok(asset)
}

/// Save a rule tile asset to a JSON file
pub fn save_rule_tile(asset: &RuleTileAsset, path: &Path) -> Result<(), AssetError> {
    let content =
        serde_json::to_string_pretty(asset).map_err(|e| AssetError::ParseError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| AssetError::IoError(e.to_string()))?;

    Ok(())
}

// ─── Override assets ─────────────────────────────────────────────────────────

/// Load an override asset from a JSON file
pub fn load_override(path: &Path) -> Result<RuleOverrideAsset, AssetError> {
    let content = std::fs::read_to_string(path).map_err(|e| AssetError::IoError(e.to_string()))?;

    parse_override(&content)
}

/// Parse an override asset from a JSON string
pub fn parse_override(json: &str) -> Result<RuleOverrideAsset, AssetError> {
    let asset: RuleOverrideAsset =
        serde_json::from_str(json).map_err(|e| AssetError::ParseError(e.to_string()))?;

    validate_override(&asset)?;

    Ok(asset)
}

/// Save an override asset to a JSON file
pub fn save_override(asset: &RuleOverrideAsset, path: &Path) -> Result<(), AssetError> {
    let content =
        serde_json::to_string_pretty(asset).map_err(|e| AssetError::ParseError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| AssetError::IoError(e.to_string()))?;

    Ok(())
}
