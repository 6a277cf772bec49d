// Error type for the phonology crate.
//
// Only configuration-class failures live here: an inventory that is
// incomplete relative to the grammar, or a category string that does not
// name a known shape/contact code. Filtered candidates are not errors; they
// are counted in `filter::FilterStats`.

use thiserror::Error;

/// Errors raised by enumeration, classification, or category parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhonError {
    /// A segment reached the place table without an entry.
    #[error("segment {0:?} has no place of articulation in the inventory")]
    UnmappedSegment(String),

    #[error("unknown syllable shape {0:?}")]
    UnknownShape(String),

    #[error("unknown syllable contact code {0:?}")]
    UnknownContactCode(String),

    /// A category string that does not split into shape and optional code.
    #[error("malformed category {0:?}")]
    MalformedCategory(String),

    /// A grammar config that enables a template the enumerator cannot build.
    #[error("grammar {grammar:?}: {shape} is not a valid first syllable of a disyllable")]
    UnsupportedDisyllableShape { grammar: String, shape: String },
}
