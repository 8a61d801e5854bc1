use crate::config::Delimiter;
use crate::error::{Result, SplitError};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::ops::Range;
use std::path::Path;

/// Delimiters a single-column header is checked against when sniffing for a
/// wrongly configured delimiter.
const COMMON_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// A delimited table held fully in memory. Fields are kept as the exact strings
/// read from the source, so numbers are written back the way they were read.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Dataset {
    pub fn from_path(path: &Path, delimiter: Delimiter) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), delimiter)
    }

    /// Parse a header row followed by records of the same width.
    pub fn from_reader<R: Read>(reader: R, delimiter: Delimiter) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter.as_byte())
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers = reader.headers().map_err(parse_error)?.clone();
        if headers.is_empty() {
            return Err(SplitError::Parse("no header row found".to_string()));
        }
        if headers.len() == 1 {
            if let Some(other) = suspicious_delimiter(&headers[0], delimiter) {
                return Err(SplitError::Parse(format!(
                    "header parsed as a single column but contains {:?}",
                    other as char
                )));
            }
        }

        let records = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(parse_error)?;

        Ok(Self { headers, records })
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in `range`, clipped to the dataset bounds.
    pub fn slice(&self, range: Range<usize>) -> &[StringRecord] {
        let end = range.end.min(self.records.len());
        let start = range.start.min(end);
        &self.records[start..end]
    }

    /// Write the header and the records in `range` as delimited text. No
    /// row-index column is added.
    pub fn write_delimited<W: Write>(&self, writer: W, delimiter: Delimiter, range: Range<usize>) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter.as_byte())
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);

        writer.write_record(&self.headers)?;
        for record in self.slice(range) {
            writer.write_record(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn to_bytes(&self, delimiter: Delimiter, range: Range<usize>) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_delimited(&mut out, delimiter, range)?;
        Ok(out)
    }
}

fn parse_error(err: csv::Error) -> SplitError {
    match err.into_kind() {
        csv::ErrorKind::Io(e) => SplitError::Io(e),
        csv::ErrorKind::Utf8 { pos, err } => {
            let line = pos.as_ref().map(|p| p.line()).unwrap_or(0);
            SplitError::Encoding(format!("line {}: {}", line, err))
        }
        kind => SplitError::Parse(describe(&kind)),
    }
}

fn describe(kind: &csv::ErrorKind) -> String {
    match kind {
        csv::ErrorKind::UnequalLengths { pos, expected_len, len } => {
            let line = pos.as_ref().map(|p| p.line()).unwrap_or(0);
            format!("line {} has {} fields, expected {}", line, len, expected_len)
        }
        other => format!("{:?}", other),
    }
}

fn suspicious_delimiter(field: &str, configured: Delimiter) -> Option<u8> {
    COMMON_DELIMITERS
        .iter()
        .copied()
        .filter(|&d| d != configured.as_byte())
        .find(|d| field.as_bytes().contains(d))
}
