// English nonce-word phonology crate.
//
// Synthesizes pronounceable non-words under an explicit phonotactic grammar
// and codes their phonological properties. No file formats, no randomness:
// the output is a deterministic function of the grammar revision and the
// lexicon.
//
// Architecture:
// - `inventory.rs`: segment sets and the place-of-articulation table
// - `types.rs`: `ShapeTag`, `ContactCode`, `Monosyllable`, `Disyllable`, `Category`
// - `grammar.rs`: versioned `GrammarConfig` (families, nucleus pairing)
// - `enumerate.rs`: nested cross-product enumeration of candidates
// - `classify.rs`: syllable-contact coding and flattening to table rows
// - `lexicon.rs`: normalized set of real-word pronunciations
// - `filter.rs`: phonological and lexical rejection with counts
// - `lib.rs` (this file): `synthesize()`, the single forward pass
//
// Data flow is one way: inventory → enumerate → classify → filter. The
// stratification crate consumes the resulting `ClassifiedEntry` rows.

pub mod classify;
pub mod enumerate;
pub mod error;
pub mod filter;
pub mod grammar;
pub mod inventory;
pub mod lexicon;
pub mod types;

pub use classify::{COLUMNS, ClassifiedEntry, classify};
pub use error::PhonError;
pub use filter::{Filter, FilterStats, Verdict};
pub use grammar::{GrammarConfig, NucleusPairing, default_grammar};
pub use lexicon::Lexicon;
pub use types::{Candidate, Category, ContactCode, Disyllable, Monosyllable, Shape, ShapeTag};

use log::info;

/// Kept entries and filter counts for one output file.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub entries: Vec<ClassifiedEntry>,
    pub stats: FilterStats,
}

/// Result of one synthesis pass: monosyllables and disyllables are kept
/// apart because they are written to separate tables.
#[derive(Debug, Clone, Default)]
pub struct Synthesis {
    pub monosyllables: Batch,
    pub disyllables: Batch,
}

/// Enumerate, classify, and filter every candidate of `grammar`.
///
/// Classification runs before filtering, so an inventory gap surfaces as
/// `PhonError::UnmappedSegment` even for candidates that would have been
/// rejected.
pub fn synthesize(grammar: &GrammarConfig, lexicon: &Lexicon) -> Result<Synthesis, PhonError> {
    info!("grammar: {}", grammar.describe());
    let mut mono_filter = Filter::new(lexicon);
    let mut di_filter = Filter::new(lexicon);
    let mut synthesis = Synthesis::default();
    for candidate in enumerate::candidates(grammar) {
        let entry = classify(&candidate)?;
        let (filter, batch) = match &candidate {
            Candidate::Mono(_) => (&mut mono_filter, &mut synthesis.monosyllables),
            Candidate::Di(_) => (&mut di_filter, &mut synthesis.disyllables),
        };
        if filter.check(&candidate) == Verdict::Keep {
            batch.entries.push(entry);
        }
    }
    synthesis.monosyllables.stats = mono_filter.stats();
    synthesis.disyllables.stats = di_filter.stats();
    Ok(synthesis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_with_empty_lexicon() {
        let synthesis = synthesize(&default_grammar(), &Lexicon::new()).unwrap();
        let mono = synthesis.monosyllables.stats;
        assert_eq!(mono.examined, 1894);
        assert_eq!(mono.phonological, 112);
        assert_eq!(mono.lexical, 0);
        assert_eq!(synthesis.monosyllables.entries.len(), 1894 - 112);

        let di = synthesis.disyllables.stats;
        assert_eq!(di.examined, 33408);
        assert_eq!(di.phonological, 1584);
        assert_eq!(synthesis.disyllables.entries.len(), 33408 - 1584);
    }

    #[test]
    fn test_synthesize_drops_lexical_items() {
        let lexicon = Lexicon::from_prons(["k æ t", "b ɪ t"]);
        let synthesis = synthesize(&default_grammar(), &lexicon).unwrap();
        assert_eq!(synthesis.monosyllables.stats.lexical, 2);
        assert!(
            synthesis
                .monosyllables
                .entries
                .iter()
                .all(|e| e.transcription() != "kæt")
        );
        // Every disyllable containing either syllable is gone too.
        assert!(synthesis.disyllables.stats.lexical > 0);
        assert!(synthesis.disyllables.entries.iter().all(|e| {
            let t = e.transcription();
            !t.starts_with("bɪt") && !t.ends_with("kæt")
        }));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let lexicon = Lexicon::from_prons(["kæt", "sɪt", "pɪn"]);
        let synthesis = synthesize(&default_grammar(), &lexicon).unwrap();
        let kept: std::collections::BTreeSet<&str> = synthesis
            .monosyllables
            .entries
            .iter()
            .map(|e| e.transcription())
            .collect();
        // Re-filtering the surviving candidates rejects nothing.
        let mut filter = Filter::new(&lexicon);
        for syl in enumerate::monosyllables(&default_grammar()) {
            if kept.contains(syl.transcription().as_str()) {
                assert_eq!(filter.check(&Candidate::Mono(syl)), Verdict::Keep);
            }
        }
        assert_eq!(filter.stats().examined, kept.len());
        assert_eq!(filter.stats().rejected(), 0);
    }

    #[test]
    fn test_contact_codes_are_closed_set() {
        let synthesis = synthesize(&default_grammar(), &Lexicon::new()).unwrap();
        for entry in &synthesis.disyllables.entries {
            let code = entry.category.contact.expect("disyllables carry a code");
            assert!(ContactCode::ALL.contains(&code));
            assert_eq!(entry.get("syllable.contact.code"), Some(code.as_str()));
        }
        assert!(
            synthesis
                .monosyllables
                .entries
                .iter()
                .all(|e| e.category.contact.is_none())
        );
    }

    #[test]
    fn test_shape_column_agrees_with_category() {
        let synthesis = synthesize(&default_grammar(), &Lexicon::new()).unwrap();
        let entries = synthesis
            .monosyllables
            .entries
            .iter()
            .chain(&synthesis.disyllables.entries);
        for entry in entries {
            let shape = entry.category.shape.to_string();
            assert_eq!(entry.get("shape"), Some(shape.as_str()));
        }
        assert_eq!(synthesis.disyllables.entries[0].get("shape"), Some("CVC.CVC"));
    }
}
