// Stratification configuration: seed, list count, list size, quota table.
//
// The quota table maps each category ("CVC", "TɹVC.CVC, +NPA", ...) to the
// number of entries of that category every list receives. It is data, not
// control flow: a grammar revision that changes the balance only edits
// `data/stratify.json`. Categories absent from the table are left out of
// every list.
//
// `validate()` enforces that the quotas add up to the declared list size,
// so a table edit that breaks the per-list total fails before any sampling.
// It also rejects tables whose per-category totals (`quota * n_lists`) do
// not fit in a `usize`.

use std::collections::BTreeMap;

use nonceword_phon::Category;
use serde::{Deserialize, Serialize};

use crate::error::{ListError, Result};

/// One revision of the stratification design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StratifyConfig {
    /// Revision name, logged at startup.
    pub name: String,
    /// Seed for the run's single `ListRng`.
    pub seed: u64,
    /// Number of lists to produce.
    pub n_lists: usize,
    /// Entries per list; must equal the sum of `quotas`.
    pub list_size: usize,
    /// Per-list count for each sampled category.
    pub quotas: BTreeMap<Category, usize>,
}

impl StratifyConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StratifyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_lists == 0 {
            return Err(ListError::InvalidConfig("n_lists must be positive".into()));
        }
        if let Some((category, _)) = self.quotas.iter().find(|(_, quota)| **quota == 0) {
            return Err(ListError::InvalidConfig(format!(
                "quota for {category} must be positive"
            )));
        }
        let mut total: usize = 0;
        for (category, &quota) in &self.quotas {
            total = total
                .checked_add(quota)
                .ok_or_else(|| ListError::InvalidConfig("quota total overflows".into()))?;
            if quota.checked_mul(self.n_lists).is_none() {
                return Err(ListError::InvalidConfig(format!(
                    "quota for {category} times {} lists overflows",
                    self.n_lists
                )));
            }
        }
        if total != self.list_size {
            return Err(ListError::InvalidConfig(format!(
                "quotas sum to {total}, list_size is {}",
                self.list_size
            )));
        }
        Ok(())
    }

    pub fn quota(&self, category: &Category) -> Option<usize> {
        self.quotas.get(category).copied()
    }
}

/// Load the stratification config embedded at compile time.
///
/// Panics if the embedded JSON is malformed (should never happen in a
/// released build).
pub fn default_config() -> StratifyConfig {
    let json = include_str!("../../data/stratify.json");
    StratifyConfig::from_json(json).expect("embedded stratify.json is malformed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nonceword_phon::{ContactCode, ShapeTag};

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.seed, 1568);
        assert_eq!(config.n_lists, 16);
        assert_eq!(config.list_size, 60);
        assert_eq!(config.quotas.len(), 19);
        assert_eq!(config.quota(&Category::mono(ShapeTag::CwVc)), Some(2));
        assert_eq!(
            config.quota(&Category::di(ShapeTag::TrVc, ShapeTag::Cvc, ContactCode::MinusNpa)),
            Some(1)
        );
    }

    #[test]
    fn test_default_config_balances_syllable_count() {
        let config = default_config();
        let (mono, di): (Vec<_>, Vec<_>) = config
            .quotas
            .iter()
            .partition(|(category, _)| category.contact.is_none());
        let mono: usize = mono.iter().map(|(_, q)| **q).sum();
        let di: usize = di.iter().map(|(_, q)| **q).sum();
        assert_eq!((mono, di), (30, 30));
    }

    #[test]
    fn test_quota_total_must_match_list_size() {
        let json = r#"{"name": "t", "seed": 1, "n_lists": 2, "list_size": 6,
                       "quotas": {"CVC": 5}}"#;
        let err = StratifyConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ListError::InvalidConfig(_)), "{err}");
    }

    #[test]
    fn test_zero_quota_rejected() {
        let json = r#"{"name": "t", "seed": 1, "n_lists": 2, "list_size": 5,
                       "quotas": {"CVC": 5, "sCVC": 0}}"#;
        assert!(StratifyConfig::from_json(json).is_err());
    }

    #[test]
    fn test_unknown_category_key_rejected() {
        let json = r#"{"name": "t", "seed": 1, "n_lists": 2, "list_size": 5,
                       "quotas": {"CVVC": 5}}"#;
        assert!(matches!(
            StratifyConfig::from_json(json),
            Err(ListError::Json(_))
        ));
    }

    #[test]
    fn test_zero_lists_rejected() {
        let json = r#"{"name": "t", "seed": 1, "n_lists": 0, "list_size": 5,
                       "quotas": {"CVC": 5}}"#;
        assert!(StratifyConfig::from_json(json).is_err());
    }

    #[test]
    fn test_overflowing_list_count_rejected() {
        let json = r#"{"name": "t", "seed": 1, "n_lists": 9223372036854775808,
                       "list_size": 5, "quotas": {"CVC": 5}}"#;
        let err = StratifyConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ListError::InvalidConfig(_)), "{err}");
    }

    #[test]
    fn test_overflowing_quota_total_rejected() {
        let json = format!(
            r#"{{"name": "t", "seed": 1, "n_lists": 1, "list_size": 5,
                 "quotas": {{"CVC": {}, "sCVC": 2}}}}"#,
            usize::MAX
        );
        let err = StratifyConfig::from_json(&json).unwrap_err();
        assert!(matches!(err, ListError::InvalidConfig(_)), "{err}");
    }
}
