/// Pure view filters over the dataset: today, upcoming days, a month, everyone
use chrono::NaiveDate;

use super::dataset::BirthdayDataset;
use crate::constants::{EMPTY_DAY_MESSAGE, EMPTY_MONTH_MESSAGE, EMPTY_WEEK_MESSAGE, UPCOMING_DAYS};
use crate::models::{ListItem, PersonRecord, ViewKind};
use crate::utils::datetime::{
    format_ru_day, iso_key, key_in_cyclic_range, month_name, upcoming_range, DateFormat,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("month must be a two-digit value from 01 to 12, got '{0}'")]
    InvalidMonth(String),
}

/// Build the items for one view
pub fn build_view(
    dataset: &BirthdayDataset,
    view: ViewKind,
    today: NaiveDate,
    month: Option<&str>,
) -> Result<Vec<ListItem>, ViewError> {
    let persons = dataset.persons();
    match view {
        ViewKind::Day => Ok(today_persons(persons, today)),
        ViewKind::Soon => Ok(upcoming_persons(persons, today)),
        ViewKind::Month => {
            let current = iso_key(today, DateFormat::Month);
            month_persons(persons, month.unwrap_or(&current))
        }
        ViewKind::All => Ok(all_persons(persons)),
    }
}

/// People whose birthday is today, by name
pub fn today_persons(persons: &[PersonRecord], today: NaiveDate) -> Vec<ListItem> {
    let key = iso_key(today, DateFormat::Birth);
    let mut matches: Vec<PersonRecord> = persons
        .iter()
        .filter(|person| person.birthday_key == key)
        .cloned()
        .collect();

    if matches.is_empty() {
        return vec![placeholder(
            EMPTY_DAY_MESSAGE,
            format_ru_day(today),
        )];
    }

    sort_by_name(&mut matches);
    into_items(matches)
}

/// People whose birthday falls within the days after today, in calendar order
pub fn upcoming_persons(persons: &[PersonRecord], today: NaiveDate) -> Vec<ListItem> {
    let (start, end) = upcoming_range(today, UPCOMING_DAYS);
    let from = iso_key(start, DateFormat::Birth);
    let to = iso_key(end, DateFormat::Birth);

    let mut matches: Vec<PersonRecord> = persons
        .iter()
        .filter(|person| key_in_cyclic_range(&person.birthday_key, &from, &to))
        .cloned()
        .collect();

    if matches.is_empty() {
        let range = format!(
            "{} - {}",
            format_ru_day(start),
            format_ru_day(end)
        );
        return vec![placeholder(EMPTY_WEEK_MESSAGE, range)];
    }

    // Keys before the window start belong to next year when the window wraps
    matches.sort_by(|a, b| {
        let a_pos = (a.birthday_key < from, &a.birthday_key);
        let b_pos = (b.birthday_key < from, &b.birthday_key);
        a_pos.cmp(&b_pos)
    });
    into_items(matches)
}

/// People born in the given month ("01".."12"), by day
pub fn month_persons(persons: &[PersonRecord], month: &str) -> Result<Vec<ListItem>, ViewError> {
    let name = month_name(month).ok_or_else(|| ViewError::InvalidMonth(month.to_string()))?;

    let mut matches: Vec<PersonRecord> = persons
        .iter()
        .filter(|person| person.month_key == month)
        .cloned()
        .collect();

    if matches.is_empty() {
        return Ok(vec![placeholder(EMPTY_MONTH_MESSAGE, name.to_string())]);
    }

    sort_by_birthday(&mut matches);
    Ok(into_items(matches))
}

/// Everyone, in feed order
pub fn all_persons(persons: &[PersonRecord]) -> Vec<ListItem> {
    persons.iter().cloned().map(ListItem::Person).collect()
}

fn sort_by_name(persons: &mut [PersonRecord]) {
    persons.sort_by(|a, b| a.name.cmp(&b.name));
}

fn sort_by_birthday(persons: &mut [PersonRecord]) {
    persons.sort_by(|a, b| a.birthday_key.cmp(&b.birthday_key));
}

fn into_items(persons: Vec<PersonRecord>) -> Vec<ListItem> {
    persons.into_iter().map(ListItem::Person).collect()
}

fn placeholder(message: &str, display_date: String) -> ListItem {
    ListItem::Placeholder {
        message: message.to_string(),
        display_date,
    }
}
