/// Pure date utilities: record keys, Russian month names and ru-RU formatting
use chrono::{Datelike, Duration, NaiveDate};

/// Capitalised month names used by the month selector and placeholders
const MONTH_NAMES: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь", "Октябрь",
    "Ноябрь", "Декабрь",
];

/// Genitive abbreviations as the ru-RU locale prints them after a day number
const SHORT_MONTHS: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

/// Which parts of a date a key or display string contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// Day, month and year
    Full,
    /// Day and month, ignoring the year
    Birth,
    /// Month only
    Month,
}

/// Build an ISO-style key: `YYYY-MM-DD`, `MM-DD` or `MM`
pub fn iso_key(date: NaiveDate, format: DateFormat) -> String {
    match format {
        DateFormat::Full => format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day()),
        DateFormat::Birth => format!("{:02}-{:02}", date.month(), date.day()),
        DateFormat::Month => format!("{:02}", date.month()),
    }
}

/// Format a date the way `toLocaleDateString("ru-RU")` does, minus the " г." suffix
pub fn format_ru_date(date: NaiveDate) -> String {
    format!("{} {}", format_ru_day(date), date.year())
}

/// Day and abbreviated month only, e.g. "9 мая"
pub fn format_ru_day(date: NaiveDate) -> String {
    format!("{} {}", date.day(), SHORT_MONTHS[date.month0() as usize])
}

/// Get the capitalised month name for a two-digit month key ("01".."12")
pub fn month_name(month_key: &str) -> Option<&'static str> {
    parse_month_key(month_key).map(|month| MONTH_NAMES[(month - 1) as usize])
}

/// Parse a strict two-digit month key into 1..=12
pub fn parse_month_key(month_key: &str) -> Option<u32> {
    if month_key.len() != 2 || !month_key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    month_key
        .parse::<u32>()
        .ok()
        .filter(|month| (1..=12).contains(month))
}

/// All twelve month keys with their names, in calendar order
pub fn month_options() -> Vec<(String, &'static str)> {
    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| (format!("{:02}", i + 1), *name))
        .collect()
}

/// Parse a `DD.MM.YYYY` date, rejecting non-numeric pieces and impossible dates
///
/// Years 0 through 99 are read as 1900 through 1999, so `05.02.90` is 1990.
pub fn parse_dotted_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().split('.');
    let day = parse_number(parts.next()?)?;
    let month = parse_number(parts.next()?)?;
    let year = parse_number(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    let year = if year < 100 { year + 1900 } else { year };
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn parse_number(piece: &str) -> Option<u32> {
    let piece = piece.trim();
    if piece.is_empty() || !piece.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    piece.parse().ok()
}

/// The `[start, end]` range of `days` consecutive days beginning tomorrow
pub fn upcoming_range(today: NaiveDate, days: i64) -> (NaiveDate, NaiveDate) {
    let start = today + Duration::days(1);
    let end = today + Duration::days(days.max(1));
    (start, end)
}

/// Check whether an `MM-DD` key lies in `[from, to]`, wrapping past December
pub fn key_in_cyclic_range(key: &str, from: &str, to: &str) -> bool {
    if from <= to {
        key >= from && key <= to
    } else {
        key >= from || key <= to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_key() {
        let d = date(1990, 2, 5);
        assert_eq!(iso_key(d, DateFormat::Full), "1990-02-05");
        assert_eq!(iso_key(d, DateFormat::Birth), "02-05");
        assert_eq!(iso_key(d, DateFormat::Month), "02");
    }

    #[test]
    fn test_format_ru_date() {
        let d = date(1990, 2, 5);
        assert_eq!(format_ru_date(d), "5 февр. 1990");
        assert_eq!(format_ru_day(d), "5 февр.");
        assert_eq!(format_ru_day(date(2026, 5, 9)), "9 мая");
        assert_eq!(format_ru_day(date(2026, 12, 31)), "31 дек.");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name("01"), Some("Январь"));
        assert_eq!(month_name("10"), Some("Октябрь"));
        assert_eq!(month_name("12"), Some("Декабрь"));
        assert_eq!(month_name("00"), None);
        assert_eq!(month_name("13"), None);
        assert_eq!(month_name("1"), None);
    }

    #[test]
    fn test_month_options() {
        let options = month_options();
        assert_eq!(options.len(), 12);
        assert_eq!(options[0], ("01".to_string(), "Январь"));
        assert_eq!(options[11], ("12".to_string(), "Декабрь"));
    }

    #[test]
    fn test_parse_dotted_date() {
        assert_eq!(parse_dotted_date("05.02.1990"), Some(date(1990, 2, 5)));
        assert_eq!(parse_dotted_date(" 1.1.2000 "), Some(date(2000, 1, 1)));
        assert_eq!(parse_dotted_date("29.02.2024"), Some(date(2024, 2, 29)));

        assert_eq!(parse_dotted_date("31.13.2020"), None);
        assert_eq!(parse_dotted_date("29.02.2023"), None);
        assert_eq!(parse_dotted_date("aa.02.2020"), None);
        assert_eq!(parse_dotted_date("05.02"), None);
        assert_eq!(parse_dotted_date("05.02.1990.1"), None);
        assert_eq!(parse_dotted_date("-1.02.1990"), None);
        assert_eq!(parse_dotted_date(""), None);
    }

    #[test]
    fn test_parse_dotted_date_two_digit_year() {
        assert_eq!(parse_dotted_date("05.02.90"), Some(date(1990, 2, 5)));
        assert_eq!(parse_dotted_date("01.01.00"), Some(date(1900, 1, 1)));
        assert_eq!(parse_dotted_date("01.01.0099"), Some(date(1999, 1, 1)));
        assert_eq!(parse_dotted_date("01.01.100"), Some(date(100, 1, 1)));
        // 1900 was not a leap year
        assert_eq!(parse_dotted_date("29.02.00"), None);
    }

    #[test]
    fn test_upcoming_range() {
        let (start, end) = upcoming_range(date(2026, 12, 28), 7);
        assert_eq!(start, date(2026, 12, 29));
        assert_eq!(end, date(2027, 1, 4));
    }

    #[test]
    fn test_key_in_cyclic_range() {
        assert!(key_in_cyclic_range("03-05", "03-01", "03-07"));
        assert!(!key_in_cyclic_range("03-08", "03-01", "03-07"));

        // Wraps past the end of the year
        assert!(key_in_cyclic_range("12-30", "12-29", "01-04"));
        assert!(key_in_cyclic_range("01-02", "12-29", "01-04"));
        assert!(!key_in_cyclic_range("01-05", "12-29", "01-04"));
        assert!(!key_in_cyclic_range("06-15", "12-29", "01-04"));
    }
}
