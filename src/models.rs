use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

use crate::birthday::BirthdayDataset;
use crate::utils::datetime::{format_ru_date, iso_key, DateFormat};
use crate::utils::timezone::today_in;

/// A person from the birthday feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub name: String,
    /// Localized short date, e.g. "5 февр. 1990"
    pub display_date: String,
    /// `YYYY-MM-DD`
    pub iso_date: String,
    /// `MM-DD`, matches a birthday irrespective of year
    pub birthday_key: String,
    /// `MM`
    pub month_key: String,
}

impl PersonRecord {
    /// Build a record with every key derived from the birth date
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            display_date: format_ru_date(birth_date),
            iso_date: iso_key(birth_date, DateFormat::Full),
            birthday_key: iso_key(birth_date, DateFormat::Birth),
            month_key: iso_key(birth_date, DateFormat::Month),
        }
    }
}

/// An entry handed to a rendered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListItem {
    Person(PersonRecord),
    /// Stand-in shown when a view has no matches
    #[serde(rename_all = "camelCase")]
    Placeholder { message: String, display_date: String },
}

impl ListItem {
    /// Text shown in the name column, also used for search
    pub fn name(&self) -> &str {
        match self {
            ListItem::Person(person) => &person.name,
            ListItem::Placeholder { message, .. } => message,
        }
    }

    /// Text shown in the date column
    pub fn display_date(&self) -> &str {
        match self {
            ListItem::Person(person) => &person.display_date,
            ListItem::Placeholder { display_date, .. } => display_date,
        }
    }

    /// ISO date for the `data-iso` attribute, absent for placeholders
    pub fn iso_date(&self) -> Option<&str> {
        match self {
            ListItem::Person(person) => Some(&person.iso_date),
            ListItem::Placeholder { .. } => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ListItem::Placeholder { .. })
    }
}

/// The four lists shown on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Day,
    Soon,
    Month,
    All,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [ViewKind::Day, ViewKind::Soon, ViewKind::Month, ViewKind::All];

    /// Identifier used for the page section and API path
    pub fn id(self) -> &'static str {
        match self {
            ViewKind::Day => "day",
            ViewKind::Soon => "soon",
            ViewKind::Month => "month",
            ViewKind::All => "all",
        }
    }

    /// Section heading on the page
    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Day => "Сегодня",
            ViewKind::Soon => "Ближайшие дни",
            ViewKind::Month => "Месяц",
            ViewKind::All => "Все",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.id() == id)
    }
}

/// Server state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Latest published dataset snapshot
    pub snapshot: watch::Receiver<Arc<BirthdayDataset>>,
    /// Timezone that decides what "today" is
    pub timezone: Tz,
}

impl AppState {
    pub fn new(snapshot: watch::Receiver<Arc<BirthdayDataset>>, timezone: Tz) -> Self {
        Self { snapshot, timezone }
    }

    /// Clone the current snapshot without holding the channel lock
    pub fn dataset(&self) -> Arc<BirthdayDataset> {
        self.snapshot.borrow().clone()
    }

    pub fn today(&self) -> NaiveDate {
        today_in(&self.timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_record_keys() {
        let person = PersonRecord::new("Иван", NaiveDate::from_ymd_opt(1990, 2, 5).unwrap());
        assert_eq!(person.iso_date, "1990-02-05");
        assert_eq!(person.birthday_key, "02-05");
        assert_eq!(person.month_key, "02");
        assert_eq!(person.display_date, "5 февр. 1990");
    }

    #[test]
    fn test_list_item_serialization() {
        let person = PersonRecord::new("Иван", NaiveDate::from_ymd_opt(1990, 2, 5).unwrap());
        let json = serde_json::to_value(ListItem::Person(person)).unwrap();
        assert_eq!(json["kind"], "person");
        assert_eq!(json["birthdayKey"], "02-05");
        assert_eq!(json["displayDate"], "5 февр. 1990");

        let placeholder = ListItem::Placeholder {
            message: "пусто".to_string(),
            display_date: "17 окт.".to_string(),
        };
        let json = serde_json::to_value(&placeholder).unwrap();
        assert_eq!(json["kind"], "placeholder");
        assert_eq!(json["displayDate"], "17 окт.");
        assert!(placeholder.iso_date().is_none());
        assert!(placeholder.is_placeholder());
    }

    #[test]
    fn test_view_kind_ids() {
        for view in ViewKind::ALL {
            assert_eq!(ViewKind::from_id(view.id()), Some(view));
        }
        assert_eq!(ViewKind::from_id("week"), None);
    }
}
