// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar date parsing for due dates and embedded start dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};

/// Storage and display format for dates (`2024-08-05`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Timestamp layouts tried after the plain date, with `T` or space between
// date and time and optional seconds.
const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a calendar date.
///
/// Accepts plain dates (`2024-08-05`) and ISO 8601 timestamps with or
/// without seconds, with `T` or a space as separator, and with an optional
/// `Z`, `+02:00` or `+0200` offset. The date part must be zero-padded.
/// Timestamps are reduced to their calendar date as written, without any
/// time zone conversion.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if !has_padded_date(s) {
        return Err(Error::InvalidDate(s.to_string()));
    }
    if s.len() == DATE_LEN {
        return NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|_| Error::InvalidDate(s.to_string()));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    let local = s.strip_suffix(['Z', 'z']).unwrap_or(s);
    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(local, format) {
            return Ok(dt.date());
        }
        if let Ok(dt) = DateTime::parse_from_str(s, &format!("{}%z", format)) {
            return Ok(dt.date_naive());
        }
    }
    Err(Error::InvalidDate(s.to_string()))
}

const DATE_LEN: usize = 10;

/// Checks that `s` opens with `YYYY-MM-DD` using exactly those digit counts.
fn has_padded_date(s: &str) -> bool {
    let Some(prefix) = s.as_bytes().get(..DATE_LEN) else {
        return false;
    };
    prefix.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
