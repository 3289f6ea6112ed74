//! Token based date formatting (`yyyy-MM-dd hh:mm:ss`).
//!
//! Tokens: `y` year, `M` month, `d` day, `h` hour (0-23), `m` minute,
//! `s` second, `q` quarter, `S` millisecond. A run of one letter is a single
//! token and its length sets the zero padding.
//!
//! Only the first run of each letter is substituted: in `"MM/MM"` the second
//! `MM` stays literal. Callers relying on repeated tokens must format twice.

use chrono::{Datelike, Timelike};
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd hh:mm:ss";

static YEAR_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"y+").unwrap());

static FIELD_TOKENS: LazyLock<Vec<(DateField, Regex)>> = LazyLock::new(|| {
    DateField::ALL
        .iter()
        .map(|field| (*field, Regex::new(field.pattern()).unwrap()))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateField {
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Quarter,
    Millisecond,
}

impl DateField {
    /// Substitution order
    const ALL: [DateField; 7] = [
        DateField::Month,
        DateField::Day,
        DateField::Hour,
        DateField::Minute,
        DateField::Second,
        DateField::Quarter,
        DateField::Millisecond,
    ];

    fn pattern(self) -> &'static str {
        match self {
            DateField::Month => "M+",
            DateField::Day => "d+",
            DateField::Hour => "h+",
            DateField::Minute => "m+",
            DateField::Second => "s+",
            DateField::Quarter => "q+",
            DateField::Millisecond => "S",
        }
    }

    fn value<T: Datelike + Timelike>(self, date: &T) -> u32 {
        match self {
            DateField::Month => date.month(),
            DateField::Day => date.day(),
            DateField::Hour => date.hour(),
            DateField::Minute => date.minute(),
            DateField::Second => date.second(),
            DateField::Quarter => (date.month() + 2) / 3,
            // nanosecond() exceeds one second during a leap second
            DateField::Millisecond => (date.nanosecond() / 1_000_000) % 1_000,
        }
    }
}

/// Render `date` using the tokens in `fmt`
pub fn format_date<T: Datelike + Timelike>(date: &T, fmt: &str) -> String {
    let mut out = fmt.to_string();

    if let Some(range) = YEAR_TOKEN.find(&out).map(|m| m.range()) {
        // yyyy -> 2024, yy -> 24, y -> 4
        let skip = 4usize.saturating_sub(range.len());
        let year: String = date.year().to_string().chars().skip(skip).collect();
        out.replace_range(range, &year);
    }

    for (field, pattern) in FIELD_TOKENS.iter() {
        let Some(range) = pattern.find(&out).map(|m| m.range()) else {
            continue;
        };
        let value = field.value(date);
        let width = range.len();
        let rendered = if width == 1 {
            value.to_string()
        } else {
            format!("{:0>width$}", value, width = width)
        };
        out.replace_range(range, &rendered);
    }

    out
}

/// Render `date` as `yyyy-MM-dd hh:mm:ss`
pub fn format_date_default<T: Datelike + Timelike>(date: &T) -> String {
    format_date(date, DEFAULT_DATE_FORMAT)
}
