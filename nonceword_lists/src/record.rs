// Tabular entry records and tab-delimited table I/O.
//
// A `Record` is an ordered list of named string fields; the partitioner only
// reads its grouping key (`shape` plus the optional
// `syllable.contact.code`) and otherwise treats it as opaque. An
// `EntryTable` pairs a header with records and reads/writes TSV with a
// header row via the `csv` crate.
//
// Output lists carry the superset of the input tables' columns, in order of
// first appearance; a record lacking a column writes an empty field.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use nonceword_phon::Category;
use nonceword_phon::classify::{CONTACT_COLUMN, COLUMNS, ClassifiedEntry, SHAPE_COLUMN};

use crate::error::{ListError, Result};

/// One row of an entry table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Record { fields }
    }

    /// Pair header names with row values positionally.
    pub fn from_row<I, S>(columns: &[String], values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Record {
            fields: columns
                .iter()
                .cloned()
                .zip(values.into_iter().map(Into::into))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// The stratification key of this record.
    pub fn category(&self) -> Result<Category> {
        let shape = self
            .get(SHAPE_COLUMN)
            .ok_or_else(|| ListError::MissingColumn(SHAPE_COLUMN.to_string()))?;
        Ok(Category::from_columns(shape, self.get(CONTACT_COLUMN))?)
    }
}

impl From<&ClassifiedEntry> for Record {
    fn from(entry: &ClassifiedEntry) -> Self {
        Record {
            fields: COLUMNS
                .iter()
                .zip(entry.values.iter())
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        }
    }
}

/// A header plus its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTable {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl EntryTable {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        EntryTable { columns, records }
    }

    /// Table of classified entries under the standard column set.
    pub fn from_entries(entries: &[ClassifiedEntry]) -> Self {
        EntryTable {
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            records: entries.iter().map(Record::from).collect(),
        }
    }

    /// Read a TSV table with a header row.
    pub fn read<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(reader);
        let columns: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            records.push(Record::from_row(&columns, row.iter()));
        }
        Ok(EntryTable { columns, records })
    }

    pub fn read_path(path: &Path) -> Result<Self> {
        Self::read(File::open(path)?)
    }

    /// Write as TSV with a header row. Missing fields are written empty.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
        wtr.write_record(&self.columns)?;
        for record in &self.records {
            wtr.write_record(
                self.columns
                    .iter()
                    .map(|column| record.get(column).unwrap_or("")),
            )?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn write_path(&self, path: &Path) -> Result<()> {
        self.write(File::create(path)?)
    }
}

/// Columns of all tables, deduplicated in order of first appearance.
pub fn union_columns<'a, I>(tables: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a EntryTable>,
{
    let mut columns: Vec<String> = Vec::new();
    for table in tables {
        for column in &table.columns {
            if !columns.contains(column) {
                columns.push(column.clone());
            }
        }
    }
    columns
}
