// Error type for table I/O, config loading, and partitioning.
//
// `InsufficientPool` and `ListSize` are the data-sufficiency failures of a
// run; they carry the offending category and the observed sizes so the
// grammar or quota table can be adjusted. Everything here is fatal.

use thiserror::Error;

use nonceword_phon::{Category, PhonError};

pub type Result<T> = std::result::Result<T, ListError>;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record's shape or contact code does not parse.
    #[error(transparent)]
    Phon(#[from] PhonError),

    #[error("record is missing the {0:?} column")]
    MissingColumn(String),

    #[error("invalid stratification config: {0}")]
    InvalidConfig(String),

    /// A category pool cannot fill its quota in every list.
    #[error("category {category} has {observed} entries, needs at least {required}")]
    InsufficientPool {
        category: Category,
        observed: usize,
        required: usize,
    },

    /// A finished list does not have the declared length.
    #[error("list {list} has {actual} entries, expected {expected}")]
    ListSize {
        list: usize,
        expected: usize,
        actual: usize,
    },
}
