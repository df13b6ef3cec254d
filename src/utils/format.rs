// src/utils/format.rs

use chrono::{DateTime, NaiveDate, Utc};

/// Returns at most `max_chars` characters of `text`, never splitting a char.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Up to two upper-cased initials from a display name ("John Doe" -> "JD").
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// "2023-01-15" -> "January 15, 2023". Unparsable input is returned as-is.
pub fn format_long_date(date: &str) -> String {
    let day = date.get(..10).unwrap_or(date);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Short timestamp for submission rows, e.g. "Apr 10, 2023, 02:48 PM".
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}
