//! The rule tile asset: an ordered rule list plus default output fields.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ColliderType, OutputKind, PrefabRef, RuleId, SpriteRef, TilingRule};

/// A neighbor-rule autotile asset.
///
/// Rules are matched in list order by the tile-selection pass (not part of
/// this crate); the default output fields apply to cells no rule matches.
/// Rule ids are unique within `rules` — minted by [`add_rule`](Self::add_rule)
/// and repaired by [`ensure_unique_rule_ids`](Self::ensure_unique_rule_ids)
/// for hand-edited asset files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTileAsset {
    pub id: Uuid,
    pub name: String,
    /// Sprite for cells no rule matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sprite: Option<SpriteRef>,
    /// Object instantiated on cells no rule matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_prefab: Option<PrefabRef>,
    #[serde(default)]
    pub default_collider: ColliderType,
    #[serde(default)]
    pub default_output: OutputKind,
    #[serde(default)]
    pub rules: Vec<TilingRule>,
}

impl RuleTileAsset {
    /// Create an empty rule tile asset
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            default_sprite: None,
            default_prefab: None,
            default_collider: ColliderType::default(),
            default_output: OutputKind::default(),
            rules: Vec::new(),
        }
    }

    /// Look up a rule by its stable id
    pub fn rule(&self, id: RuleId) -> Option<&TilingRule> {
        self.rules.iter().find(|r| r.id() == id)
    }

    /// The next free rule id: one past the highest id in use, 0 when empty.
    pub fn next_rule_id(&self) -> RuleId {
        self.rules
            .iter()
            .map(|r| r.id())
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Append `rule`, stamping it with the next free id. Returns the id.
    ///
    /// Any id already on the rule is replaced; this is the only path that
    /// mints ids, which keeps them unique and never reused within the asset.
    pub fn add_rule(&mut self, mut rule: TilingRule) -> RuleId {
        let id = self.next_rule_id();
        rule.output.id = id;
        self.rules.push(rule);
        id
    }

    /// Re-mint the id of any rule whose id was already seen earlier in the
    /// list. First occurrence keeps its id.
    ///
    /// Repair pass for hand-edited asset files; a well-formed asset is left
    /// untouched.
    pub fn ensure_unique_rule_ids(&mut self) {
        let mut next = self.next_rule_id();
        let mut seen: HashSet<RuleId> = HashSet::new();
        for rule in &mut self.rules {
            if !seen.insert(rule.id()) {
                rule.output.id = next;
                seen.insert(next);
                next += 1;
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rule_mints_sequential_ids() {
        let mut asset = RuleTileAsset::new("ground".to_string());
        let a = asset.add_rule(TilingRule::new(0));
        let b = asset.add_rule(TilingRule::new(0));
        let c = asset.add_rule(TilingRule::new(0));

        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(asset.next_rule_id(), 3);
    }

    #[test]
    fn add_rule_replaces_a_stale_id() {
        let mut asset = RuleTileAsset::new("ground".to_string());
        asset.add_rule(TilingRule::new(0));

        // A rule cloned from elsewhere arrives carrying id 0; it must be re-stamped.
        let id = asset.add_rule(TilingRule::new(0));
        assert_eq!(id, 1);
        assert_eq!(asset.rules[1].id(), 1);
    }

    #[test]
    fn rule_lookup_by_id() {
        let mut asset = RuleTileAsset::new("ground".to_string());
        asset.add_rule(TilingRule::new(0));
        let id = asset.add_rule(TilingRule::new(0));

        assert!(asset.rule(id).is_some());
        assert!(asset.rule(999).is_none());
    }

    #[test]
    fn ensure_unique_rule_ids_keeps_first_occurrence() {
        let mut asset = RuleTileAsset::new("ground".to_string());
        // Simulate a hand-edited file with a duplicated id.
        asset.rules.push(TilingRule::new(3));
        asset.rules.push(TilingRule::new(3));
        asset.rules.push(TilingRule::new(1));

        asset.ensure_unique_rule_ids();

        assert_eq!(asset.rules[0].id(), 3, "first occurrence keeps its id");
        assert_eq!(asset.rules[2].id(), 1, "non-duplicates are untouched");
        assert_ne!(asset.rules[1].id(), 3, "duplicate must be re-minted");

        let mut ids: Vec<RuleId> = asset.rules.iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3, "all ids unique after repair");
    }

    #[test]
    fn ensure_unique_rule_ids_is_a_no_op_on_well_formed_assets() {
        let mut asset = RuleTileAsset::new("ground".to_string());
        asset.add_rule(TilingRule::new(0));
        asset.add_rule(TilingRule::new(0));

        let before = asset.clone();
        asset.ensure_unique_rule_ids();
        assert_eq!(asset, before);
    }
}
