/// CSV feed parsing: `name,DD.MM.YYYY[,...]` rows into person records
use csv::ReaderBuilder;

use crate::models::PersonRecord;
use crate::utils::datetime::parse_dotted_date;

/// Why a feed row was left out of the dataset
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowErrorKind {
    #[error("row has no date column")]
    MissingDate,
    #[error("'{0}' is not a valid DD.MM.YYYY date")]
    InvalidDate(String),
    #[error("unreadable row: {0}")]
    Malformed(String),
}

/// A rejected row and its 1-based line number in the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: u64,
    pub kind: RowErrorKind,
}

/// Outcome of parsing a feed
#[derive(Debug, Default)]
pub struct ParseReport {
    pub records: Vec<PersonRecord>,
    pub rejected: Vec<RowError>,
}

/// Parse raw CSV text, keeping valid rows in feed order and reporting the rest
pub fn parse_feed(text: &str) -> ParseReport {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut report = ParseReport::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                let line = e.position().map_or(0, |p| line_at(text, p.byte()));
                report.rejected.push(RowError {
                    line,
                    kind: RowErrorKind::Malformed(e.to_string()),
                });
                continue;
            }
        };

        let line = record.position().map_or(0, |p| line_at(text, p.byte()));
        match parse_row(record.get(0).unwrap_or_default(), record.get(1)) {
            Ok(person) => report.records.push(person),
            Err(kind) => report.rejected.push(RowError { line, kind }),
        }
    }

    report
}

/// Pure function: 1-based line of the record starting at `byte`
///
/// The reader may report a record's start before the line break that ends the
/// previous record, so leading `\r`/`\n` bytes are skipped before counting.
fn line_at(text: &str, byte: u64) -> u64 {
    let bytes = text.as_bytes();
    let mut start = usize::try_from(byte).unwrap_or(bytes.len()).min(bytes.len());
    while start < bytes.len() && matches!(bytes[start], b'\r' | b'\n') {
        start += 1;
    }
    bytes[..start].iter().filter(|&&b| b == b'\n').count() as u64 + 1
}

/// Pure function: Build a record from the name and date columns
pub fn parse_row(name: &str, date: Option<&str>) -> Result<PersonRecord, RowErrorKind> {
    let date = date.ok_or(RowErrorKind::MissingDate)?;
    let birth_date =
        parse_dotted_date(date).ok_or_else(|| RowErrorKind::InvalidDate(date.trim().to_string()))?;
    Ok(PersonRecord::new(name.trim(), birth_date))
}
