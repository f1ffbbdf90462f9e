//! Asset validation logic

use std::collections::HashSet;

use rule_tile_core::{RuleId, RuleTileAsset};
use rule_tile_override::RuleOverrideAsset;

use crate::AssetError;

/// Validate that a rule tile asset is internally consistent
///
/// Rule ids must be unique: the override merge and the inspection diff both
/// key on them, and a duplicated id would silently shadow a rule.
pub fn validate_rule_tile(asset: &RuleTileAsset) -> Result<(), AssetError> {
    let mut seen: HashSet<RuleId> = HashSet::new();
    for rule in &asset.rules {
        if !seen.insert(rule.id()) {
            return Err(AssetError::ValidationError(format!(
                "Rule tile '{}' contains duplicate rule id {}",
                asset.name,
                rule.id()
            )));
        }
    }

    Ok(())
}

/// Validate that an override asset is internally consistent
///
/// The override list must hold at most one entry per id (the in-memory
/// remove-before-insert invariant, enforced here for files edited by hand),
/// and the base reference must not point at the override asset itself.
pub fn validate_override(asset: &RuleOverrideAsset) -> Result<(), AssetError> {
    let mut seen: HashSet<RuleId> = HashSet::new();
    for entry in &asset.overrides {
        if !seen.insert(entry.id) {
            return Err(AssetError::ValidationError(format!(
                "Override asset '{}' contains duplicate override id {}",
                asset.name, entry.id
            )));
        }
    }

    if asset.base_tile == Some(asset.id) {
        return Err(AssetError::ValidationError(format!(
            "Override asset '{}' references itself as its base tile",
            asset.name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rule_tile_core::{RuleOutput, TilingRule};

    #[test]
    fn well_formed_assets_pass() {
        let mut base = RuleTileAsset::new("base".to_string());
        base.add_rule(TilingRule::new(0));
        base.add_rule(TilingRule::new(0));
        assert!(validate_rule_tile(&base).is_ok());

        let mut over = RuleOverrideAsset::new("over".to_string()).with_base(base.id);
        over.set_override(&base.rules[0], Some(&RuleOutput::new(0)));
        assert!(validate_override(&over).is_ok());
    }

    #[test]
    fn duplicate_rule_ids_are_rejected() {
        let mut base = RuleTileAsset::new("base".to_string());
        base.rules.push(TilingRule::new(2));
        base.rules.push(TilingRule::new(2));

        let err = validate_rule_tile(&base).unwrap_err();
        assert!(err.to_string().contains("duplicate rule id 2"));
    }

    #[test]
    fn duplicate_override_ids_are_rejected() {
        let mut over = RuleOverrideAsset::new("over".to_string());
        over.overrides.push(RuleOutput::new(5));
        over.overrides.push(RuleOutput::new(5));

        let err = validate_override(&over).unwrap_err();
        assert!(err.to_string().contains("duplicate override id 5"));
    }

    #[test]
    fn self_referential_base_is_rejected() {
        let mut over = RuleOverrideAsset::new("over".to_string());
        over.base_tile = Some(over.id);

        let err = validate_override(&over).unwrap_err();
        assert!(matches!(err, AssetError::ValidationError(_)));
    }
}
