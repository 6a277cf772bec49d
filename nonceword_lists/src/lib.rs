// Stratified list construction for nonce-word experiments.
//
// Takes the entry tables written by the synthesis pass and partitions their
// records into N lists, each meeting the per-category quotas of a
// `StratifyConfig` exactly.
//
// Architecture:
// - `record.rs`: `Record`, `EntryTable`, TSV read/write
// - `config.rs`: `StratifyConfig` (seed, list count, list size, quota table)
// - `partition.rs`: grouping, pool checks, shuffling, chunking
// - `error.rs`: `ListError`
// - `lib.rs` (this file): `stratify()`, tables in, list tables out
//
// Determinism constraint: all randomness goes through one
// `nonceword_prng::ListRng` seeded from the config, so identical input
// tables produce byte-identical list files.

pub mod config;
pub mod error;
pub mod partition;
pub mod record;

pub use config::{StratifyConfig, default_config};
pub use error::{ListError, Result};
pub use partition::{PoolSummary, group_by_category, partition, pool_report};
pub use record::{EntryTable, Record, union_columns};

use log::info;

/// Output of one stratification run.
#[derive(Debug, Clone)]
pub struct Stratification {
    /// One table per list, sharing the union of the input columns.
    pub lists: Vec<EntryTable>,
    /// Pool sizes against quotas, in category discovery order.
    pub report: Vec<PoolSummary>,
}

/// Partition the records of `tables` (read in the given order) into
/// quota-balanced lists.
pub fn stratify(tables: &[EntryTable], config: &StratifyConfig) -> Result<Stratification> {
    config.validate()?;
    info!(
        "stratification {}: {} lists of {}, seed {}",
        config.name, config.n_lists, config.list_size, config.seed
    );
    let columns = union_columns(tables);
    let records: Vec<Record> = tables
        .iter()
        .flat_map(|table| table.records.iter().cloned())
        .collect();
    let groups = group_by_category(records)?;
    let report = pool_report(&groups, config);
    let lists = partition(groups, config)?
        .into_iter()
        .map(|records| EntryTable::new(columns.clone(), records))
        .collect();
    Ok(Stratification { lists, report })
}
