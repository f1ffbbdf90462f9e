//! The override-merge operations on [`RuleOverrideAsset`].
//!
//! All operations are synchronous, single-threaded transforms over three
//! plain lists: the base asset's rules, this asset's override entries, and
//! the target asset's rules. Callers in a concurrent context must serialize
//! access externally.

use rule_tile_core::{RuleOutput, RuleTileAsset, TilingRule};

use crate::{OverrideInspection, OverridePair, RuleOverrideAsset};

impl RuleOverrideAsset {
    // ─── Lookup and assignment ───────────────────────────────────────────────

    /// The override entry for `original`, or `None` if the rule is not
    /// overridden.
    ///
    /// Forward linear scan by id; first match wins. With the uniqueness
    /// invariant held there is never more than one match.
    pub fn override_for(&self, original: &TilingRule) -> Option<&RuleOutput> {
        self.overrides.iter().find(|o| o.id == original.id())
    }

    /// Set or clear the override for `original`.
    ///
    /// Any existing entry with the rule's id is removed first (scanning from
    /// the end of the list), so the list never holds two entries for one id.
    /// When `replacement` is `Some`, its fields are cloned into a fresh entry
    /// per the copy contract on [`RuleOutput`] and the entry is appended; the
    /// stored entry's id is pinned to `original.id()`, so a replacement built
    /// from a different rule still attaches to `original`. When `replacement`
    /// is `None`, the net effect is pure removal.
    ///
    /// Afterward [`override_for`](Self::override_for) returns exactly the
    /// assigned value (or `None`); no other entry is affected.
    pub fn set_override(&mut self, original: &TilingRule, replacement: Option<&RuleOutput>) {
        for i in (0..self.overrides.len()).rev() {
            if self.overrides[i].id == original.id() {
                self.overrides.remove(i);
                break;
            }
        }

        if let Some(replacement) = replacement {
            let mut entry = replacement.clone();
            entry.id = original.id();
            self.overrides.push(entry);
        }
    }

    /// Apply a batch of override edits, in order.
    ///
    /// Each pair is a [`set_override`](Self::set_override); later pairs for
    /// the same id win because each assignment removes any prior entry for
    /// that id. The batch is not transactional — there is no per-item failure
    /// path today, but a caller interrupting the loop would observe the pairs
    /// applied so far.
    pub fn apply_overrides(&mut self, pairs: &[OverridePair]) {
        for pair in pairs {
            self.set_override(&pair.original, pair.replacement.as_ref());
        }
    }

    // ─── Inspection ──────────────────────────────────────────────────────────

    /// Pair every base rule with its override and flag orphaned entries.
    ///
    /// Base rules come first, in base order, each paired with its override or
    /// `None`. Override entries whose id appears in no base rule follow in
    /// override-list order, paired with a placeholder original
    /// ([`TilingRule::placeholder`]). With no base attached, the result is
    /// orphans only and `first_orphan` is 0.
    ///
    /// Orphan detection is a linear existence check against the pairs
    /// collected so far — quadratic in the worst case, fine at the tens to
    /// low hundreds of rules assets actually hold.
    pub fn collect_overrides(&self, base: Option<&RuleTileAsset>) -> OverrideInspection {
        let mut pairs = Vec::new();

        if let Some(base) = base {
            for original in &base.rules {
                pairs.push(OverridePair {
                    original: original.clone(),
                    replacement: self.override_for(original).cloned(),
                });
            }
        }

        let first_orphan = pairs.len();

        for entry in &self.overrides {
            if !pairs.iter().any(|p| p.original.id() == entry.id) {
                pairs.push(OverridePair {
                    original: TilingRule::placeholder(entry.id),
                    replacement: Some(entry.clone()),
                });
            }
        }

        OverrideInspection { pairs, first_orphan }
    }

    // ─── Merge ───────────────────────────────────────────────────────────────

    /// Rebuild `target` as the base rule list with overrides layered on.
    ///
    /// No-op unless both a base and a target are attached — an unset base
    /// reference is a tolerated "not configured" state, not an error.
    ///
    /// Copies the four default output fields onto the target unconditionally,
    /// clears the target's rule list, then walks the base rules in order: each
    /// is cloned into a fresh rule, and where an override with a matching id
    /// exists its output fields are layered on top, field by field — base
    /// fields the override does not carry distinctly (the neighbor pattern,
    /// the matching transform) stay as the base authored them. Orphaned
    /// overrides are not emitted.
    ///
    /// The result has exactly as many rules as the base, in base order, and
    /// rebuilding with unchanged state yields an identical target.
    pub fn apply_to(&self, base: Option<&RuleTileAsset>, target: Option<&mut RuleTileAsset>) {
        let (Some(base), Some(target)) = (base, target) else {
            return;
        };

        target.default_sprite = self.default_sprite;
        target.default_prefab = self.default_prefab.clone();
        target.default_collider = self.default_collider;
        target.default_output = self.default_output;

        target.rules.clear();
        for original in &base.rules {
            let mut rule = original.clone();
            if let Some(replacement) = self.override_for(original) {
                rule.output.copy_from(replacement);
            }
            target.rules.push(rule);
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
