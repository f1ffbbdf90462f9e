//! Core data structures for rule_tile_kit
//!
//! This crate provides the fundamental types for neighbor-rule autotiles:
//! - `TilingRule` - A neighbor pattern paired with its output selection
//! - `RuleOutput` - The output fields of a rule (sprites, prefab, collider)
//! - `RuleTileAsset` - An ordered rule list plus default output fields
//! - `SpriteRef` / `PrefabRef` - Handles to shared, externally owned resources
//!
//! Rules carry a stable integer id, unique within the owning asset and minted
//! by [`RuleTileAsset::add_rule`]. Everything here is plain data with no
//! engine dependency; matching rules against a tilemap is a separate concern.

mod refs;
mod rule;
mod tile;

pub use refs::{PrefabRef, SpriteRef};
pub use rule::{
    ColliderType, NeighborCondition, NeighborRule, OutputKind, RuleId, RuleOutput, RuleTransform,
    TilingRule,
};
pub use tile::RuleTileAsset;
