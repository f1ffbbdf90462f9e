//! Tiling rules and their output fields.
//!
//! A [`TilingRule`] pairs a sparse neighbor pattern with a [`RuleOutput`].
//! The output half also stands alone: override assets store bare
//! [`RuleOutput`] entries keyed by the same stable [`RuleId`].

use serde::{Deserialize, Serialize};

use crate::{PrefabRef, SpriteRef};

/// Stable rule identifier.
///
/// Unique within the owning asset's rule list, minted by
/// [`RuleTileAsset::add_rule`](crate::RuleTileAsset::add_rule), and never
/// reused for a different logical rule. Serialized assets rely on these ids
/// staying put across save/load cycles.
pub type RuleId = u32;

// ─── Output selection ────────────────────────────────────────────────────────

/// How a rule picks what to place on a matched cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputKind {
    /// Always the first sprite. Default.
    #[default]
    Single,
    /// One of the sprites, chosen by position-seeded noise.
    Random,
    /// All sprites, played as an animation.
    Animation,
}

/// Collider generated for a matched cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColliderType {
    /// No collider.
    None,
    /// Collider from the sprite's physics outline. Default.
    #[default]
    Sprite,
    /// Full-cell collider.
    Grid,
}

/// Transform pool applied to a rule.
///
/// Used both as the matching transform on a [`TilingRule`] (which orientations
/// of the neighbor pattern may match) and as the
/// [`random_transform`](RuleOutput::random_transform) pool on an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RuleTransform {
    /// Pattern matches as authored only. Default.
    #[default]
    Fixed,
    /// Pattern may be rotated in 90° steps.
    Rotated,
    /// Pattern may be mirrored horizontally.
    MirrorX,
    /// Pattern may be mirrored vertically.
    MirrorY,
    /// Pattern may be mirrored on either axis independently.
    MirrorXY,
}

// ─── Neighbor pattern ────────────────────────────────────────────────────────

/// Condition a single neighboring cell must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeighborCondition {
    /// The neighbor must hold this same tile.
    This,
    /// The neighbor must not hold this tile.
    NotThis,
}

/// One cell of a rule's neighbor pattern.
///
/// Patterns are sparse: offsets absent from a rule's neighbor list are
/// don't-care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborRule {
    /// Cell offset relative to the matched cell, `[x, y]`.
    pub offset: [i32; 2],
    pub condition: NeighborCondition,
}

// ─── RuleOutput ──────────────────────────────────────────────────────────────

/// The output fields of a tiling rule, keyed by the rule's stable id.
///
/// # Copy contract
///
/// `Clone` is the documented copy operation for rule content: plain fields are
/// copied by value, [`SpriteRef`]/[`PrefabRef`] handles are copied as handles
/// (the referenced resources stay shared), and `sprites` becomes a fresh list
/// holding the same handles. All merge and override machinery copies rule
/// content through `Clone` or [`copy_from`](RuleOutput::copy_from) rather than
/// assigning fields at call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOutput {
    pub id: RuleId,
    /// One sprite for [`OutputKind::Single`], several for `Random`/`Animation`.
    #[serde(default)]
    pub sprites: Vec<SpriteRef>,
    /// Object instantiated on the matched cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefab: Option<PrefabRef>,
    /// Animation speed range in frames per second.
    #[serde(default = "default_animation_speed")]
    pub min_animation_speed: f32,
    #[serde(default = "default_animation_speed")]
    pub max_animation_speed: f32,
    /// Noise scale for position-seeded [`OutputKind::Random`] selection.
    #[serde(default = "default_noise_scale")]
    pub noise_scale: f32,
    #[serde(default)]
    pub output: OutputKind,
    #[serde(default)]
    pub collider: ColliderType,
    /// Transform pool for randomized output orientation.
    #[serde(default)]
    pub random_transform: RuleTransform,
}

fn default_animation_speed() -> f32 {
    1.0
}

fn default_noise_scale() -> f32 {
    0.5
}

impl RuleOutput {
    /// Create an output with the given id and default fields.
    pub fn new(id: RuleId) -> Self {
        Self {
            id,
            sprites: Vec::new(),
            prefab: None,
            min_animation_speed: default_animation_speed(),
            max_animation_speed: default_animation_speed(),
            noise_scale: default_noise_scale(),
            output: OutputKind::default(),
            collider: ColliderType::default(),
            random_transform: RuleTransform::default(),
        }
    }

    /// Set the single sprite for this output
    pub fn with_sprite(mut self, sprite: SpriteRef) -> Self {
        self.sprites = vec![sprite];
        self
    }

    /// Set the instantiated object for this output
    pub fn with_prefab(mut self, prefab: PrefabRef) -> Self {
        self.prefab = Some(prefab);
        self
    }

    /// Assign every output field of `other` onto `self`, id included.
    ///
    /// This is the layering primitive of the override merge: calling it on a
    /// shell already populated from a base rule leaves the shell with the
    /// override's content, field by field. Follows the copy contract on the
    /// type (fresh sprite list, shared resource handles).
    pub fn copy_from(&mut self, other: &RuleOutput) {
        self.id = other.id;
        self.sprites = other.sprites.clone();
        self.prefab = other.prefab.clone();
        self.min_animation_speed = other.min_animation_speed;
        self.max_animation_speed = other.max_animation_speed;
        self.noise_scale = other.noise_scale;
        self.output = other.output;
        self.collider = other.collider;
        self.random_transform = other.random_transform;
    }
}

impl Default for RuleOutput {
    fn default() -> Self {
        Self::new(0)
    }
}

// ─── TilingRule ──────────────────────────────────────────────────────────────

/// A neighbor pattern paired with its output selection.
///
/// `Clone` extends the [`RuleOutput`] copy contract with a fresh neighbor
/// list; it is the copy operation used when base rules are cloned into an
/// effective rule list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilingRule {
    pub output: RuleOutput,
    /// Sparse neighbor conditions. Offsets not listed are don't-care.
    #[serde(default)]
    pub neighbors: Vec<NeighborRule>,
    /// Which orientations of the pattern may match.
    #[serde(default)]
    pub transform: RuleTransform,
}

impl TilingRule {
    /// Create a rule with the given id, no neighbor conditions, and default
    /// output fields.
    pub fn new(id: RuleId) -> Self {
        Self {
            output: RuleOutput::new(id),
            neighbors: Vec::new(),
            transform: RuleTransform::default(),
        }
    }

    /// The rule's stable id.
    pub fn id(&self) -> RuleId {
        self.output.id
    }

    /// A marker rule carrying only an id.
    ///
    /// Stands in for the original side of an orphaned override when
    /// inspecting an override asset whose base no longer defines this id.
    pub fn placeholder(id: RuleId) -> Self {
        Self::new(id)
    }

    /// Add a neighbor condition
    pub fn with_neighbor(mut self, offset: [i32; 2], condition: NeighborCondition) -> Self {
        self.neighbors.push(NeighborRule { offset, condition });
        self
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_output(id: RuleId) -> RuleOutput {
        let mut out = RuleOutput::new(id)
            .with_sprite(SpriteRef::new(Uuid::nil(), 7))
            .with_prefab(PrefabRef::new("props/torch.prefab"));
        out.output = OutputKind::Animation;
        out.collider = ColliderType::Grid;
        out.min_animation_speed = 2.0;
        out.max_animation_speed = 4.0;
        out
    }

    #[test]
    fn clone_yields_fresh_sprite_list() {
        let original = sample_output(1);
        let mut copy = original.clone();
        copy.sprites.push(SpriteRef::new(Uuid::nil(), 99));

        assert_eq!(original.sprites.len(), 1, "clone must not share the sprite list");
        assert_eq!(copy.sprites.len(), 2);
    }

    #[test]
    fn clone_shares_resource_handles() {
        let original = sample_output(1);
        let copy = original.clone();
        // Handles name the same resources; the resources themselves are not duplicated.
        assert_eq!(copy.sprites[0], original.sprites[0]);
        assert_eq!(copy.prefab, original.prefab);
    }

    #[test]
    fn copy_from_assigns_every_field() {
        let source = sample_output(5);
        let mut shell = RuleOutput::new(1);
        shell.copy_from(&source);
        assert_eq!(shell, source, "copy_from must leave the shell equal to its source");
    }

    #[test]
    fn placeholder_carries_only_the_id() {
        let rule = TilingRule::placeholder(42);
        assert_eq!(rule.id(), 42);

        assert_eq!(
            rule,
            TilingRule::new(42),
            "placeholder must be a default rule plus the id"
        );
    }

    #[test]
    fn tiling_rule_clone_copies_neighbors() {
        let rule = TilingRule::new(1)
            .with_neighbor([0, 1], NeighborCondition::This)
            .with_neighbor([0, -1], NeighborCondition::NotThis);
        let mut copy = rule.clone();
        copy.neighbors.clear();

        assert_eq!(rule.neighbors.len(), 2, "clone must not share the neighbor list");
    }
}
