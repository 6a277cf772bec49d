// Quota-based stratified partitioning of entries into N lists.
//
// Algorithm, for a config with `n_lists = N`:
// 1. Group records by `Category`, in order of first discovery.
// 2. Drop groups with no declared quota (they consume no randomness).
// 3. Require `|group| >= quota * N` for every category in the quota table,
//    counting a category with no records as an empty group; fail with
//    `InsufficientPool` otherwise. Checked up front, before any shuffle.
// 4. Shuffle each group with the run's single `ListRng`, in group order.
// 5. Hand elements `[i*quota, (i+1)*quota)` to list `i`; the tail beyond
//    `quota * N` is unused.
// 6. Shuffle each list, in list order, so records are not blocked by
//    category.
// 7. Verify every list has exactly `list_size` records.
//
// The config is validated first, so `quota * N` cannot overflow.
//
// Within a category the chunks are disjoint slices of one pool, so no record
// lands in two lists. Given the same records in the same order and the same
// seed, the output is identical run to run.

use std::collections::BTreeMap;

use log::{debug, info};
use nonceword_phon::Category;
use nonceword_prng::ListRng;

use crate::config::StratifyConfig;
use crate::error::{ListError, Result};
use crate::record::Record;

/// Records of one category, in input order.
#[derive(Debug, Clone)]
pub struct Group {
    pub category: Category,
    pub records: Vec<Record>,
}

/// Size of one category pool against its quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSummary {
    pub category: Category,
    pub size: usize,
    /// `None` for categories left out of the lists.
    pub quota: Option<usize>,
}

impl PoolSummary {
    /// Entries needed to fill every list, zero for unsampled categories.
    pub fn required(&self, n_lists: usize) -> usize {
        self.quota.map_or(0, |quota| quota.saturating_mul(n_lists))
    }

    /// Entries left over after filling every list; negative when short.
    pub fn slack(&self, n_lists: usize) -> isize {
        self.size as isize - self.required(n_lists) as isize
    }
}

/// Group records by category, preserving first-discovery order.
pub fn group_by_category(records: Vec<Record>) -> Result<Vec<Group>> {
    let mut index: BTreeMap<Category, usize> = BTreeMap::new();
    let mut groups: Vec<Group> = Vec::new();
    for record in records {
        let category = record.category()?;
        let slot = *index.entry(category).or_insert_with(|| {
            groups.push(Group {
                category,
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(record);
    }
    Ok(groups)
}

/// Per-category pool sizes and quotas, in group order.
pub fn pool_report(groups: &[Group], config: &StratifyConfig) -> Vec<PoolSummary> {
    groups
        .iter()
        .map(|group| PoolSummary {
            category: group.category,
            size: group.records.len(),
            quota: config.quota(&group.category),
        })
        .collect()
}

/// Distribute grouped records into `config.n_lists` quota-balanced lists.
pub fn partition(groups: Vec<Group>, config: &StratifyConfig) -> Result<Vec<Vec<Record>>> {
    config.validate()?;
    let n_lists = config.n_lists;

    let mut sampled: Vec<(Group, usize)> = Vec::new();
    for group in groups {
        match config.quota(&group.category) {
            Some(quota) => sampled.push((group, quota)),
            None => info!(
                "{}: {} entries, no quota; left out of all lists",
                group.category,
                group.records.len()
            ),
        }
    }

    for (&category, &quota) in &config.quotas {
        let observed = sampled
            .iter()
            .find(|(group, _)| group.category == category)
            .map_or(0, |(group, _)| group.records.len());
        let required = quota * n_lists;
        if observed < required {
            return Err(ListError::InsufficientPool {
                category,
                observed,
                required,
            });
        }
    }

    let mut rng = ListRng::new(config.seed);
    let mut lists: Vec<Vec<Record>> = (0..n_lists)
        .map(|_| Vec::with_capacity(config.list_size))
        .collect();

    for (group, quota) in sampled {
        let Group {
            category,
            mut records,
        } = group;
        rng.shuffle(&mut records);
        let unused = records.len() - quota * n_lists;
        debug!("{category}: {quota} per list, {unused} held in reserve");
        let mut pool = records.into_iter();
        for list in &mut lists {
            list.extend(pool.by_ref().take(quota));
        }
    }

    for list in &mut lists {
        rng.shuffle(list);
    }

    for (i, list) in lists.iter().enumerate() {
        if list.len() != config.list_size {
            return Err(ListError::ListSize {
                list: i + 1,
                expected: config.list_size,
                actual: list.len(),
            });
        }
    }

    Ok(lists)
}
