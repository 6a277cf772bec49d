// Core nonce-word types: shape tags, contact codes, syllables, categories.
//
// The type hierarchy is:
// - `ShapeTag`: closed set of monosyllable templates (CVC, sCVC, ...)
// - `ContactCode`: closed set of syllable-contact codes (+/-NPA, +/-OVA)
// - `Monosyllable`: onset + nucleus + coda under one template
// - `Disyllable`: two monosyllables; shape and contact code are derived
// - `Candidate`: either of the above, as produced by the enumerator
// - `Shape` / `Category`: the composite key the partitioner groups by
//
// Shape tags and contact codes round-trip through their written forms
// ("TɹVC", "+NPA"), which are also the values stored in entry tables and the
// keys of the quota table. `Category` renders as "CVC" or "CVC.CVC, +NPA".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classify;
use crate::error::PhonError;

/// Segmental template of a single syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShapeTag {
    #[serde(rename = "CVC")]
    Cvc,
    /// /s/ + voiceless stop onset.
    #[serde(rename = "sCVC")]
    SCvc,
    /// Stop + /w/ onset; lax nuclei only.
    #[serde(rename = "CwVC")]
    CwVc,
    /// Coronal stop + /l/ onset.
    #[serde(rename = "TlVC")]
    TlVc,
    /// Coronal stop + /ɹ/ onset.
    #[serde(rename = "TɹVC")]
    TrVc,
    /// Stop + nasal onset.
    #[serde(rename = "CNVC")]
    CnVc,
    /// Nasal + stop onset.
    #[serde(rename = "NCVC")]
    NcVc,
}

impl ShapeTag {
    pub const ALL: [ShapeTag; 7] = [
        ShapeTag::Cvc,
        ShapeTag::SCvc,
        ShapeTag::CwVc,
        ShapeTag::TlVc,
        ShapeTag::TrVc,
        ShapeTag::CnVc,
        ShapeTag::NcVc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeTag::Cvc => "CVC",
            ShapeTag::SCvc => "sCVC",
            ShapeTag::CwVc => "CwVC",
            ShapeTag::TlVc => "TlVC",
            ShapeTag::TrVc => "TɹVC",
            ShapeTag::CnVc => "CNVC",
            ShapeTag::NcVc => "NCVC",
        }
    }
}

impl fmt::Display for ShapeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeTag {
    type Err = PhonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| PhonError::UnknownShape(s.to_string()))
    }
}

/// Relationship between a syllable-1 coda and the following syllable-2 onset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContactCode {
    /// Nasal coda sharing place with the onset.
    #[serde(rename = "+NPA")]
    PlusNpa,
    #[serde(rename = "-NPA")]
    MinusNpa,
    /// Obstruent coda sharing voicing class with the onset.
    #[serde(rename = "+OVA")]
    PlusOva,
    #[serde(rename = "-OVA")]
    MinusOva,
}

impl ContactCode {
    pub const ALL: [ContactCode; 4] = [
        ContactCode::PlusNpa,
        ContactCode::MinusNpa,
        ContactCode::PlusOva,
        ContactCode::MinusOva,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactCode::PlusNpa => "+NPA",
            ContactCode::MinusNpa => "-NPA",
            ContactCode::PlusOva => "+OVA",
            ContactCode::MinusOva => "-OVA",
        }
    }
}

impl fmt::Display for ContactCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactCode {
    type Err = PhonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| PhonError::UnknownContactCode(s.to_string()))
    }
}

/// A single closed syllable. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monosyllable {
    pub onset: String,
    pub nucleus: String,
    pub coda: String,
    pub shape: ShapeTag,
}

impl Monosyllable {
    pub fn new(
        onset: impl Into<String>,
        nucleus: impl Into<String>,
        coda: impl Into<String>,
        shape: ShapeTag,
    ) -> Self {
        Monosyllable {
            onset: onset.into(),
            nucleus: nucleus.into(),
            coda: coda.into(),
            shape,
        }
    }

    pub fn transcription(&self) -> String {
        format!("{}{}{}", self.onset, self.nucleus, self.coda)
    }
}

/// Two syllables; the boundary is positional and not marked in the
/// transcription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disyllable {
    pub syl1: Monosyllable,
    pub syl2: Monosyllable,
}

impl Disyllable {
    pub fn new(syl1: Monosyllable, syl2: Monosyllable) -> Self {
        Disyllable { syl1, syl2 }
    }

    pub fn shape(&self) -> Shape {
        Shape::Di(self.syl1.shape, self.syl2.shape)
    }

    pub fn transcription(&self) -> String {
        format!("{}{}", self.syl1.transcription(), self.syl2.transcription())
    }

    /// Contact code of the syllable-1 coda against the syllable-2 onset.
    pub fn contact_code(&self) -> Result<ContactCode, PhonError> {
        classify::contact_code(&self.syl1.coda, &self.syl2.onset)
    }
}

/// One enumerated form, before classification and filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Mono(Monosyllable),
    Di(Disyllable),
}

impl Candidate {
    pub fn shape(&self) -> Shape {
        match self {
            Candidate::Mono(m) => Shape::Mono(m.shape),
            Candidate::Di(d) => d.shape(),
        }
    }

    pub fn transcription(&self) -> String {
        match self {
            Candidate::Mono(m) => m.transcription(),
            Candidate::Di(d) => d.transcription(),
        }
    }

    /// The syllables making up this candidate, in order.
    pub fn syllables(&self) -> Vec<&Monosyllable> {
        match self {
            Candidate::Mono(m) => vec![m],
            Candidate::Di(d) => vec![&d.syl1, &d.syl2],
        }
    }
}

/// Whole-word shape: a single template, or two joined by ".".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape {
    Mono(ShapeTag),
    Di(ShapeTag, ShapeTag),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Mono(tag) => write!(f, "{tag}"),
            Shape::Di(first, second) => write!(f, "{first}.{second}"),
        }
    }
}

impl FromStr for Shape {
    type Err = PhonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            None => Ok(Shape::Mono(s.parse()?)),
            Some((first, second)) => Ok(Shape::Di(first.parse()?, second.parse()?)),
        }
    }
}

/// Composite stratification key: shape, plus the contact code for
/// disyllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category {
    pub shape: Shape,
    pub contact: Option<ContactCode>,
}

impl Category {
    pub fn mono(tag: ShapeTag) -> Self {
        Category {
            shape: Shape::Mono(tag),
            contact: None,
        }
    }

    pub fn di(first: ShapeTag, second: ShapeTag, contact: ContactCode) -> Self {
        Category {
            shape: Shape::Di(first, second),
            contact: Some(contact),
        }
    }

    /// Parse from the two table columns; an empty contact column means none.
    pub fn from_columns(shape: &str, contact: Option<&str>) -> Result<Self, PhonError> {
        let shape: Shape = shape.parse()?;
        let contact = match contact {
            Some(code) if !code.is_empty() => Some(code.parse::<ContactCode>()?),
            _ => None,
        };
        Ok(Category { shape, contact })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.contact {
            Some(code) => write!(f, "{}, {}", self.shape, code),
            None => write!(f, "{}", self.shape),
        }
    }
}

impl FromStr for Category {
    type Err = PhonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(", ") {
            Some((shape, code)) if !code.is_empty() => Category::from_columns(shape, Some(code)),
            Some(_) => Err(PhonError::MalformedCategory(s.to_string())),
            None => Category::from_columns(s, None),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = PhonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_tag_roundtrip() {
        for tag in ShapeTag::ALL {
            assert_eq!(tag.as_str().parse::<ShapeTag>(), Ok(tag));
        }
        assert_eq!(
            "CCVC".parse::<ShapeTag>(),
            Err(PhonError::UnknownShape("CCVC".to_string()))
        );
    }

    #[test]
    fn test_shape_tag_serde_uses_written_form() {
        let json = serde_json::to_string(&ShapeTag::TrVc).unwrap();
        assert_eq!(json, "\"TɹVC\"");
        let parsed: ShapeTag = serde_json::from_str("\"sCVC\"").unwrap();
        assert_eq!(parsed, ShapeTag::SCvc);
    }

    #[test]
    fn test_contact_code_roundtrip() {
        for code in ContactCode::ALL {
            assert_eq!(code.as_str().parse::<ContactCode>(), Ok(code));
        }
        assert!("NPA".parse::<ContactCode>().is_err());
    }

    #[test]
    fn test_monosyllable_transcription() {
        let syl = Monosyllable::new("tɹ", "æ", "k", ShapeTag::TrVc);
        assert_eq!(syl.transcription(), "tɹæk");
    }

    #[test]
    fn test_disyllable_shape_and_transcription() {
        let di = Disyllable::new(
            Monosyllable::new("dl", "ɪ", "m", ShapeTag::TlVc),
            Monosyllable::new("p", "ʊ", "s", ShapeTag::Cvc),
        );
        assert_eq!(di.shape().to_string(), "TlVC.CVC");
        assert_eq!(di.transcription(), "dlɪmpʊs");
        assert_eq!(di.contact_code(), Ok(ContactCode::PlusNpa));
    }

    #[test]
    fn test_candidate_syllables() {
        let mono = Candidate::Mono(Monosyllable::new("b", "ɛ", "t", ShapeTag::Cvc));
        assert_eq!(mono.syllables().len(), 1);
        assert_eq!(mono.shape(), Shape::Mono(ShapeTag::Cvc));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::mono(ShapeTag::CwVc).to_string(), "CwVC");
        assert_eq!(
            Category::di(ShapeTag::TrVc, ShapeTag::Cvc, ContactCode::MinusOva).to_string(),
            "TɹVC.CVC, -OVA"
        );
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(
            "CVC.CVC, +NPA".parse::<Category>(),
            Ok(Category::di(ShapeTag::Cvc, ShapeTag::Cvc, ContactCode::PlusNpa))
        );
        assert_eq!("NCVC".parse::<Category>(), Ok(Category::mono(ShapeTag::NcVc)));
        assert_eq!(
            "CVC, ".parse::<Category>(),
            Err(PhonError::MalformedCategory("CVC, ".to_string()))
        );
        assert!("CVC.XYZ, +NPA".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_from_columns_empty_code() {
        assert_eq!(
            Category::from_columns("sCVC", Some("")),
            Ok(Category::mono(ShapeTag::SCvc))
        );
    }

    #[test]
    fn test_category_as_json_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(Category::di(ShapeTag::Cvc, ShapeTag::Cvc, ContactCode::PlusOva), 5usize);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"CVC.CVC, +OVA":5}"#);
        let back: std::collections::BTreeMap<Category, usize> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
