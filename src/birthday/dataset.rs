use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::parser::{parse_feed, RowError};
use crate::models::PersonRecord;

/// Immutable collection of people parsed from one feed load
#[derive(Debug, Clone)]
pub struct BirthdayDataset {
    persons: Vec<PersonRecord>,
    rejected: Vec<RowError>,
    loaded_at: DateTime<Utc>,
}

impl BirthdayDataset {
    /// Parse feed text into a dataset, logging rows that were left out
    pub fn from_csv(text: &str) -> Self {
        let report = parse_feed(text);

        if !report.rejected.is_empty() {
            warn!(
                "Skipped {} feed row(s) without a valid date",
                report.rejected.len()
            );
            for row in &report.rejected {
                debug!("Feed line {}: {}", row.line, row.kind);
            }
        }
        info!("Loaded {} person(s) from feed", report.records.len());

        Self {
            persons: report.records,
            rejected: report.rejected,
            loaded_at: Utc::now(),
        }
    }

    /// Build a dataset from records that are already parsed
    pub fn from_records(persons: Vec<PersonRecord>) -> Self {
        Self {
            persons,
            rejected: Vec::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Every person, in feed order
    pub fn persons(&self) -> &[PersonRecord] {
        &self.persons
    }

    /// Rows rejected during parsing
    pub fn rejected(&self) -> &[RowError] {
        &self.rejected
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

impl Default for BirthdayDataset {
    fn default() -> Self {
        Self::from_records(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_csv_keeps_order_and_rejections() {
        let dataset = BirthdayDataset::from_csv("B,02.02.2002\r\nbad,xx\r\nA,01.01.2001");
        let names: Vec<&str> = dataset.persons().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rejected().len(), 1);
        assert_eq!(dataset.rejected()[0].line, 2);
    }

    #[test]
    fn test_default_is_empty() {
        let dataset = BirthdayDataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.rejected().is_empty());
    }
}
