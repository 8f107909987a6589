// discovery/src/date.rs
//! Publication date display in the site's fixed Turkish locale.

use chrono::{DateTime, Datelike, Utc};

const MONTHS_LONG: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül",
    "Ekim", "Kasım", "Aralık",
];

const MONTHS_SHORT: [&str; 12] = [
    "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `15 Ocak 2024`, used on blog cards and detail pages
    #[default]
    Long,
    /// `15 Oca 2024`, used on news cards
    Short,
}

/// Parse an RFC 3339 timestamp such as `2024-01-15T10:30:00.000Z`
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Render a timestamp as a Turkish calendar date (UTC day)
pub fn format_publish_date(raw: &str, style: DateStyle) -> Option<String> {
    let dt = parse_created_at(raw)?;
    let month_index = dt.month0() as usize;
    let month = match style {
        DateStyle::Long => MONTHS_LONG[month_index],
        DateStyle::Short => MONTHS_SHORT[month_index],
    };
    Some(format!("{} {} {}", dt.day(), month, dt.year()))
}
