// Phonological classification of enumerated candidates.
//
// Two jobs:
// - `contact_code`: the syllable-contact code of a disyllable, a pure
//   function of the syllable-1 coda and syllable-2 onset.
// - `classify`: flatten a candidate into the fixed entry-table column set
//   together with its stratification `Category`.
//
// Nasal codas are coded for place agreement with the following onset
// (+/-NPA); all other codas are coded for voicing-class agreement (+/-OVA),
// where /s/ counts with the voiceless stops.

use crate::error::PhonError;
use crate::inventory::{is_nasal_coda, is_voiceless_class, place_of};
use crate::types::{Candidate, Category, ContactCode};

/// Column names of an entry table, in order.
pub const COLUMNS: [&str; 9] = [
    "onset1",
    "nucleus1",
    "coda1",
    "onset2",
    "nucleus2",
    "coda2",
    "shape",
    "syllable.contact.code",
    "transcription",
];

pub const SHAPE_COLUMN: &str = "shape";
pub const CONTACT_COLUMN: &str = "syllable.contact.code";

/// Syllable-contact code for `coda` followed by `onset`.
///
/// Errors only if a nasal coda or its following onset is missing from the
/// place table.
pub fn contact_code(coda: &str, onset: &str) -> Result<ContactCode, PhonError> {
    if is_nasal_coda(coda) {
        if place_of(coda)? == place_of(onset)? {
            Ok(ContactCode::PlusNpa)
        } else {
            Ok(ContactCode::MinusNpa)
        }
    } else if is_voiceless_class(coda) == is_voiceless_class(onset) {
        Ok(ContactCode::PlusOva)
    } else {
        Ok(ContactCode::MinusOva)
    }
}

/// A candidate flattened to table values, with its grouping key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEntry {
    pub category: Category,
    /// One value per entry of `COLUMNS`.
    pub values: [String; 9],
}

impl ClassifiedEntry {
    pub fn get(&self, column: &str) -> Option<&str> {
        COLUMNS
            .iter()
            .position(|c| *c == column)
            .map(|i| self.values[i].as_str())
    }

    pub fn transcription(&self) -> &str {
        &self.values[8]
    }
}

/// Compute the category and table row of a candidate.
pub fn classify(candidate: &Candidate) -> Result<ClassifiedEntry, PhonError> {
    let transcription = candidate.transcription();
    let shape = candidate.shape().to_string();
    match candidate {
        Candidate::Mono(m) => Ok(ClassifiedEntry {
            category: Category::mono(m.shape),
            values: [
                m.onset.clone(),
                m.nucleus.clone(),
                m.coda.clone(),
                String::new(),
                String::new(),
                String::new(),
                shape,
                String::new(),
                transcription,
            ],
        }),
        Candidate::Di(d) => {
            let code = d.contact_code()?;
            Ok(ClassifiedEntry {
                category: Category::di(d.syl1.shape, d.syl2.shape, code),
                values: [
                    d.syl1.onset.clone(),
                    d.syl1.nucleus.clone(),
                    d.syl1.coda.clone(),
                    d.syl2.onset.clone(),
                    d.syl2.nucleus.clone(),
                    d.syl2.coda.clone(),
                    shape,
                    code.to_string(),
                    transcription,
                ],
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{SIMPLE_CODAS_PLUS_S, STOPS_PLUS_S};
    use crate::types::{Disyllable, Monosyllable, ShapeTag};

    #[test]
    fn test_nasal_place_agreement() {
        assert_eq!(contact_code("m", "b"), Ok(ContactCode::PlusNpa));
        assert_eq!(contact_code("n", "s"), Ok(ContactCode::PlusNpa));
        assert_eq!(contact_code("ŋ", "k"), Ok(ContactCode::PlusNpa));
        assert_eq!(contact_code("m", "t"), Ok(ContactCode::MinusNpa));
        assert_eq!(contact_code("ŋ", "d"), Ok(ContactCode::MinusNpa));
    }

    #[test]
    fn test_obstruent_voice_agreement() {
        assert_eq!(contact_code("p", "s"), Ok(ContactCode::PlusOva));
        assert_eq!(contact_code("s", "k"), Ok(ContactCode::PlusOva));
        assert_eq!(contact_code("t", "b"), Ok(ContactCode::MinusOva));
        assert_eq!(contact_code("k", "g"), Ok(ContactCode::MinusOva));
    }

    #[test]
    fn test_contact_code_total_over_enumerable_contacts() {
        for coda in SIMPLE_CODAS_PLUS_S {
            for onset in STOPS_PLUS_S {
                assert!(contact_code(coda, onset).is_ok(), "{coda}.{onset}");
            }
        }
    }

    #[test]
    fn test_nasal_before_unmapped_onset_is_error() {
        assert_eq!(
            contact_code("n", "w"),
            Err(PhonError::UnmappedSegment("w".to_string()))
        );
    }

    #[test]
    fn test_classify_monosyllable() {
        let entry = classify(&Candidate::Mono(Monosyllable::new(
            "sk",
            "ɪ",
            "m",
            ShapeTag::SCvc,
        )))
        .unwrap();
        assert_eq!(entry.category, Category::mono(ShapeTag::SCvc));
        assert_eq!(entry.get("onset1"), Some("sk"));
        assert_eq!(entry.get("onset2"), Some(""));
        assert_eq!(entry.get(CONTACT_COLUMN), Some(""));
        assert_eq!(entry.transcription(), "skɪm");
    }

    #[test]
    fn test_classify_disyllable() {
        let entry = classify(&Candidate::Di(Disyllable::new(
            Monosyllable::new("b", "æ", "s", ShapeTag::Cvc),
            Monosyllable::new("g", "ɪ", "t", ShapeTag::Cvc),
        )))
        .unwrap();
        assert_eq!(
            entry.category,
            Category::di(ShapeTag::Cvc, ShapeTag::Cvc, ContactCode::MinusOva)
        );
        assert_eq!(entry.get(SHAPE_COLUMN), Some("CVC.CVC"));
        assert_eq!(entry.get(CONTACT_COLUMN), Some("-OVA"));
        assert_eq!(entry.get("coda2"), Some("t"));
        assert_eq!(entry.transcription(), "bæsgɪt");
        assert_eq!(entry.get("no.such.column"), None);
    }
}
