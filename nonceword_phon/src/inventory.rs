// English segment inventory for nonce-word synthesis.
//
// Pure data: onset, nucleus, and coda sets plus a place-of-articulation
// table. The derived sets (`SIMPLE_ONSETS_PLUS_S`, `NUCLEI`, ...) are spelled
// out rather than computed so they can be used in `const` context; the tests
// check that they agree with the base sets.
//
// Segments are IPA strings. Clusters (`sp`, `tɹ`, `mb`, ...) are built by
// concatenation in `enumerate.rs` and never appear in these tables.

use crate::error::PhonError;

pub const VOICELESS_STOPS: &[&str] = &["p", "t", "k"];
pub const VOICED_STOPS: &[&str] = &["b", "d", "g"];
pub const STOPS: &[&str] = &["p", "t", "k", "b", "d", "g"];
/// Stops that may precede a liquid in a `TlVC`/`TɹVC` onset.
pub const CORONAL_STOPS: &[&str] = &["t", "d"];
/// Velar stops; a coronal nasal coda before one of these is ambiguous.
pub const VELAR_STOPS: &[&str] = &["k", "g"];
pub const STOPS_PLUS_S: &[&str] = &["p", "t", "k", "b", "d", "g", "s"];

// The velar nasal does not occur word-initially.
pub const ONSET_NASALS: &[&str] = &["m", "n"];
pub const SIMPLE_ONSETS_PLUS_S: &[&str] = &["p", "t", "k", "b", "d", "g", "m", "n", "s"];

pub const SIBILANT: &str = "s";
pub const GLIDE: &str = "w";
pub const LATERAL: &str = "l";
pub const RHOTIC: &str = "ɹ";

// /ɔɪ/ is left out as too rare to be worth a cell.
pub const TENSE_NUCLEI: &[&str] = &["iː", "uː", "eɪ", "oʊ", "ɑ", "aɪ", "aʊ"];
pub const LAX_NUCLEI: &[&str] = &["ɪ", "ʊ", "ɛ", "æ"];
pub const NUCLEI: &[&str] = &["iː", "uː", "eɪ", "oʊ", "ɑ", "aɪ", "aʊ", "ɪ", "ʊ", "ɛ", "æ"];

pub const VELAR_NASAL: &str = "ŋ";
pub const NASAL_CODAS: &[&str] = &["m", "n", "ŋ"];
pub const STOP_CODAS: &[&str] = &["p", "t", "k"];
pub const SIMPLE_CODAS: &[&str] = &["m", "n", "ŋ", "p", "t", "k"];
pub const SIMPLE_CODAS_PLUS_S: &[&str] = &["m", "n", "ŋ", "p", "t", "k", "s"];

/// Place of articulation, as far as contact coding needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Place {
    Labial,
    Coronal,
    Velar,
}

/// Look up the place of articulation of a single segment.
///
/// Every segment the enumerator can put in a syllable-1 coda or syllable-2
/// onset is mapped; anything else means the inventory has fallen behind the
/// grammar and is reported as `PhonError::UnmappedSegment`.
pub fn place_of(segment: &str) -> Result<Place, PhonError> {
    match segment {
        "p" | "b" | "m" => Ok(Place::Labial),
        "t" | "d" | "n" | "s" => Ok(Place::Coronal),
        "k" | "g" | "ŋ" => Ok(Place::Velar),
        other => Err(PhonError::UnmappedSegment(other.to_string())),
    }
}

pub fn is_tense(nucleus: &str) -> bool {
    TENSE_NUCLEI.contains(&nucleus)
}

pub fn is_nasal_coda(coda: &str) -> bool {
    NASAL_CODAS.contains(&coda)
}

/// True for /s/ and the voiceless stops: the voicing class used for
/// obstruent voice agreement.
pub fn is_voiceless_class(segment: &str) -> bool {
    segment == SIBILANT || VOICELESS_STOPS.contains(&segment)
}
