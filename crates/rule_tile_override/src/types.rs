//! Data types for the rule-override layer.
//!
//! The primary type is [`RuleOverrideAsset`]; the merge operations themselves
//! live in `apply.rs`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rule_tile_core::{ColliderType, OutputKind, PrefabRef, RuleOutput, SpriteRef, TilingRule};

// ─── RuleOverrideAsset ───────────────────────────────────────────────────────

/// An asset that overrides a subset of a base rule tile's rules by id.
///
/// The override list holds bare [`RuleOutput`] entries keyed by the base
/// rules' stable ids, with at most one entry per id — every mutation path
/// removes an existing entry for the id before inserting
/// (see [`set_override`](Self::set_override)). The default output fields are
/// copied onto the merge target unconditionally, whether or not any rule is
/// overridden.
///
/// `base_tile` is the persisted reference to the base asset. Resolving it to
/// a loaded [`RuleTileAsset`](rule_tile_core::RuleTileAsset) happens outside
/// this crate, so the merge operations take the resolved base as an
/// `Option` — `None` meaning the reference is unset or currently unresolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOverrideAsset {
    pub id: Uuid,
    pub name: String,
    /// Reference to the base rule tile asset, if one is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_tile: Option<Uuid>,
    /// Replaces the base asset's default sprite on the merge target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sprite: Option<SpriteRef>,
    /// Replaces the base asset's default instantiated object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_prefab: Option<PrefabRef>,
    #[serde(default)]
    pub default_collider: ColliderType,
    #[serde(default)]
    pub default_output: OutputKind,
    /// Override entries, at most one per rule id.
    #[serde(default)]
    pub overrides: Vec<RuleOutput>,
}

impl RuleOverrideAsset {
    /// Create an override asset with an empty override list and no base.
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            base_tile: None,
            default_sprite: None,
            default_prefab: None,
            default_collider: ColliderType::default(),
            default_output: OutputKind::default(),
            overrides: Vec::new(),
        }
    }

    /// Set the base asset reference
    pub fn with_base(mut self, base: Uuid) -> Self {
        self.base_tile = Some(base);
        self
    }
}

// ─── Inspection pairs ────────────────────────────────────────────────────────

/// One row of an override inspection: a base rule and its override, if any.
///
/// For an orphaned override — an entry whose id no longer exists in the base
/// rule list — `original` is a placeholder rule carrying only the id
/// ([`TilingRule::placeholder`]).
#[derive(Debug, Clone, PartialEq)]
pub struct OverridePair {
    pub original: TilingRule,
    pub replacement: Option<RuleOutput>,
}

/// Result of [`RuleOverrideAsset::collect_overrides`].
///
/// `pairs` holds exactly one entry per distinct id in the union of base rules
/// and override entries: base rules first, in base order, then orphaned
/// overrides in override-list order.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideInspection {
    pub pairs: Vec<OverridePair>,
    /// Index of the first orphaned pair; equals the number of base rules
    /// collected (0 with no base attached). Editors use this to draw the
    /// separator between known rules and orphans.
    pub first_orphan: usize,
}

impl OverrideInspection {
    /// The pairs whose base rule still exists, in base order.
    pub fn matched(&self) -> &[OverridePair] {
        &self.pairs[..self.first_orphan]
    }

    /// The orphaned pairs, in override-list order.
    pub fn orphaned(&self) -> &[OverridePair] {
        &self.pairs[self.first_orphan..]
    }
}
