// Pronunciation lexicon used to reject real words.
//
// The lexicon is a set of normalized phonemic transcriptions. Normalization
// strips inter-segment separators (whitespace and the "." syllable
// boundary), so "k æ t", "kæ.t" and "kæt" are the same entry. Nothing else
// is assumed about the source dictionary: any line-oriented text with one
// pronunciation per line can be loaded, and several sources merge into one
// set (the main dictionary plus an optional supplementary exclusion list).
//
// Backed by a `BTreeSet` so that iteration, if ever needed, is ordered.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Normalize a transcription for lexicon comparison.
pub fn normalize(pron: &str) -> String {
    pron.chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect()
}

/// A set of real-word pronunciations.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: BTreeSet<String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from transcriptions; blank entries are skipped.
    pub fn from_prons<I, S>(prons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        lexicon.extend(prons);
        lexicon
    }

    /// Add transcriptions, normalizing each one.
    pub fn extend<I, S>(&mut self, prons: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pron in prons {
            let key = normalize(pron.as_ref());
            if !key.is_empty() {
                self.entries.insert(key);
            }
        }
    }

    /// Read one pronunciation per line. Lines starting with `#` are comments.
    /// Returns the number of lines read as pronunciations.
    pub fn read_lines<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let mut read = 0;
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            self.extend([trimmed]);
            read += 1;
        }
        Ok(read)
    }

    /// Read a pronunciation file from disk (see `read_lines`).
    pub fn load_file(&mut self, path: &Path) -> io::Result<usize> {
        let file = File::open(path)?;
        self.read_lines(BufReader::new(file))
    }

    /// Exact membership after normalization.
    pub fn contains(&self, pron: &str) -> bool {
        self.entries.contains(&normalize(pron))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
