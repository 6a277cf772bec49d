// Constraint filter: phonological admissibility and lexical collision.
//
// A pass/fail gate evaluated once per candidate. Rejected candidates are
// dropped, never repaired. Phonological rules run first, so a candidate
// that is both inadmissible and lexical is counted once, as phonological.
//
// Rules:
// - Tense nucleus before /ŋ/ is inadmissible in any syllable.
// - A disyllable with /n/ before a velar onset is dropped: a transcription
//   cannot show whether the nasal assimilated, so its NPA code is unknowable.
// - Lexical: the whole transcription, and for disyllables each syllable's
//   transcription, must be absent from the lexicon.
//
// Each rejection is logged at debug level; `FilterStats` keeps the running
// counts reported per output file.

use log::debug;

use crate::inventory::{VELAR_NASAL, VELAR_STOPS, is_tense};
use crate::lexicon::Lexicon;
use crate::types::Candidate;

/// Grammar-internal reasons a candidate is inadmissible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonologicalRule {
    TenseBeforeVelarNasal,
    AmbiguousNasalPlace,
}

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Phonological(PhonologicalRule),
    Lexical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Reject(RejectReason),
}

/// Running counts for one output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub examined: usize,
    pub kept: usize,
    pub phonological: usize,
    pub lexical: usize,
}

impl FilterStats {
    pub fn rejected(&self) -> usize {
        self.phonological + self.lexical
    }
}

/// First phonological rule the candidate violates, if any.
pub fn phonological_violation(candidate: &Candidate) -> Option<PhonologicalRule> {
    let tense_before_angma = candidate
        .syllables()
        .iter()
        .any(|syl| is_tense(&syl.nucleus) && syl.coda == VELAR_NASAL);
    if tense_before_angma {
        return Some(PhonologicalRule::TenseBeforeVelarNasal);
    }
    match candidate {
        Candidate::Di(d) if d.syl1.coda == "n" && VELAR_STOPS.contains(&d.syl2.onset.as_str()) => {
            Some(PhonologicalRule::AmbiguousNasalPlace)
        }
        _ => None,
    }
}

/// The strings checked against the lexicon: the whole form, plus each
/// syllable of a disyllable.
pub fn lexical_keys(candidate: &Candidate) -> Vec<String> {
    match candidate {
        Candidate::Mono(m) => vec![m.transcription()],
        Candidate::Di(d) => vec![
            d.syl1.transcription(),
            d.syl2.transcription(),
            d.transcription(),
        ],
    }
}

/// Stateful gate over one stream of candidates.
pub struct Filter<'a> {
    lexicon: &'a Lexicon,
    stats: FilterStats,
}

impl<'a> Filter<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Filter {
            lexicon,
            stats: FilterStats::default(),
        }
    }

    /// Judge one candidate and update the counts.
    pub fn check(&mut self, candidate: &Candidate) -> Verdict {
        self.stats.examined += 1;
        if let Some(rule) = phonological_violation(candidate) {
            debug!("{} rejected: {rule:?}", candidate.transcription());
            self.stats.phonological += 1;
            return Verdict::Reject(RejectReason::Phonological(rule));
        }
        if lexical_keys(candidate)
            .iter()
            .any(|key| self.lexicon.contains(key))
        {
            debug!("{} or a syllable of it is lexical", candidate.transcription());
            self.stats.lexical += 1;
            return Verdict::Reject(RejectReason::Lexical);
        }
        self.stats.kept += 1;
        Verdict::Keep
    }

    pub fn stats(&self) -> FilterStats {
        self.stats
    }
}
