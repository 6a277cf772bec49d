// Versioned grammar configuration.
//
// A grammar revision names which monosyllable families are enumerated,
// which first-syllable templates disyllables may use, and how the two
// nuclei of a disyllable are paired. Revisions are data: the active one is
// `data/grammar.json`, embedded at compile time by `default_grammar()`, and
// any other revision can be loaded with `GrammarConfig::from_json()`.
//
// The nucleus-pairing policy is always explicit in the config; there is no
// implicit default, because the two policies produce disjoint disyllable
// sets.

use serde::{Deserialize, Serialize};

use crate::error::PhonError;
use crate::inventory::{LAX_NUCLEI, TENSE_NUCLEI};
use crate::types::ShapeTag;

/// How the nuclei of the two syllables of a disyllable are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NucleusPairing {
    /// Ordered pairs of two distinct lax vowels.
    LaxPermutation,
    /// Tense first syllable, lax second (trochaic weight pattern).
    TenseLax,
}

impl NucleusPairing {
    /// All `(nucleus1, nucleus2)` pairs under this policy, in iteration order.
    pub fn pairs(self) -> Vec<(&'static str, &'static str)> {
        match self {
            NucleusPairing::LaxPermutation => LAX_NUCLEI
                .iter()
                .flat_map(|&n1| {
                    LAX_NUCLEI
                        .iter()
                        .filter(move |&&n2| n2 != n1)
                        .map(move |&n2| (n1, n2))
                })
                .collect(),
            NucleusPairing::TenseLax => TENSE_NUCLEI
                .iter()
                .flat_map(|&n1| LAX_NUCLEI.iter().map(move |&n2| (n1, n2)))
                .collect(),
        }
    }
}

/// One grammar revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarConfig {
    /// Human-readable revision name, logged at startup.
    pub name: String,
    pub revision: u32,
    pub nucleus_pairing: NucleusPairing,
    /// Monosyllable families to enumerate.
    pub monosyllable_shapes: Vec<ShapeTag>,
    /// First-syllable templates for disyllables. The second syllable is
    /// always CVC.
    pub disyllable_shapes: Vec<ShapeTag>,
}

/// First-syllable templates the disyllable enumerator knows how to build.
pub const DISYLLABLE_FIRST_SHAPES: [ShapeTag; 3] = [ShapeTag::Cvc, ShapeTag::TlVc, ShapeTag::TrVc];

/// Errors from loading a grammar revision.
#[derive(Debug, thiserror::Error)]
pub enum GrammarLoadError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] PhonError),
}

impl GrammarConfig {
    /// Parse and validate a grammar revision from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GrammarLoadError> {
        let config: GrammarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject first-syllable templates the enumerator cannot build.
    pub fn validate(&self) -> Result<(), PhonError> {
        match self
            .disyllable_shapes
            .iter()
            .find(|shape| !DISYLLABLE_FIRST_SHAPES.contains(shape))
        {
            Some(shape) => Err(PhonError::UnsupportedDisyllableShape {
                grammar: self.name.clone(),
                shape: shape.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn enables_monosyllable(&self, shape: ShapeTag) -> bool {
        self.monosyllable_shapes.contains(&shape)
    }

    pub fn enables_disyllable(&self, first: ShapeTag) -> bool {
        self.disyllable_shapes.contains(&first)
    }

    /// One-line description of the active variant, for logs.
    pub fn describe(&self) -> String {
        format!(
            "{} (revision {}, nucleus pairing {:?}, {} monosyllable families, {} disyllable families)",
            self.name,
            self.revision,
            self.nucleus_pairing,
            self.monosyllable_shapes.len(),
            self.disyllable_shapes.len()
        )
    }
}

/// Load the grammar revision embedded at compile time.
///
/// Panics if the embedded JSON is malformed (should never happen in a
/// released build).
pub fn default_grammar() -> GrammarConfig {
    let json = include_str!("../../data/grammar.json");
    GrammarConfig::from_json(json).expect("embedded grammar.json is malformed")
}
