//! Rule-override layer for rule tile assets.
//!
//! A [`RuleOverrideAsset`] inherits the ordered rule list of a base
//! [`RuleTileAsset`](rule_tile_core::RuleTileAsset) and replaces a subset of
//! its rules by stable id. The merge is computed on demand by
//! [`RuleOverrideAsset::apply_to`], which rebuilds a target asset's rule list
//! from scratch; [`RuleOverrideAsset::collect_overrides`] diffs the base and
//! override lists for editing, flagging overrides whose base rule no longer
//! exists.
//!
//! This crate has no engine dependency. It operates on plain data from
//! `rule_tile_core`; resolving the persisted base-asset reference to an actual
//! asset is the caller's concern.

mod apply;
mod types;

pub use types::{OverrideInspection, OverridePair, RuleOverrideAsset};

// Re-export rule_tile_core
pub use rule_tile_core;
