//! Validation and flattening of a country's raw API payload into typed records.
//!
//! The payload is expected to be `[Meta, [Entry, ...]]`. A payload of any other
//! shape contributes nothing (`MalformedResponse`); an individual entry that cannot
//! be turned into a record is tagged with a `SkipReason` and the rest of the
//! country's entries are still processed.

use crate::models::{Entry, ExpenditureRecord};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Why a whole response was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedResponse {
    NotAnArray,
    /// Fewer than two top-level elements (e.g. a lone error message object).
    MissingEntries { len: usize },
    EntriesNotAnArray,
    EmptyEntries,
}

impl fmt::Display for MalformedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedResponse::NotAnArray => write!(f, "response is not a top-level array"),
            MalformedResponse::MissingEntries { len } => {
                write!(f, "response has {len} element(s), expected 2")
            }
            MalformedResponse::EntriesNotAnArray => write!(f, "entries element is not an array"),
            MalformedResponse::EmptyEntries => write!(f, "entries element is empty"),
        }
    }
}

/// Why a single entry did not become a record.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The entry is not an object, or a field has the wrong JSON type.
    MalformedEntry(String),
    MissingCountry,
    InvalidYear(Option<String>),
    BeforeMinYear(i32),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MalformedEntry(msg) => write!(f, "malformed entry: {msg}"),
            SkipReason::MissingCountry => write!(f, "missing country name"),
            SkipReason::InvalidYear(Some(raw)) => write!(f, "unparseable year {raw}"),
            SkipReason::InvalidYear(None) => write!(f, "missing year"),
            SkipReason::BeforeMinYear(y) => write!(f, "year {y} before cutoff"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    Record(ExpenditureRecord),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub records: Vec<ExpenditureRecord>,
    pub skipped: Vec<SkipReason>,
}

impl Extraction {
    /// Entries dropped for a reason other than the year cutoff.
    pub fn invalid_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|r| !matches!(r, SkipReason::BeforeMinYear(_)))
            .count()
    }
}

/// Check the top-level shape and return the yearly entries.
pub fn response_entries(body: &Value) -> Result<&[Value], MalformedResponse> {
    let arr = body.as_array().ok_or(MalformedResponse::NotAnArray)?;
    if arr.len() < 2 {
        return Err(MalformedResponse::MissingEntries { len: arr.len() });
    }
    match &arr[1] {
        Value::Null => Err(MalformedResponse::EmptyEntries),
        Value::Array(entries) if entries.is_empty() => Err(MalformedResponse::EmptyEntries),
        Value::Array(entries) => Ok(entries.as_slice()),
        _ => Err(MalformedResponse::EntriesNotAnArray),
    }
}

pub fn extract_entry(raw: &Value, min_year: i32) -> Extracted {
    let entry = match Entry::deserialize(raw) {
        Ok(e) => e,
        Err(e) => return Extracted::Skipped(SkipReason::MalformedEntry(e.to_string())),
    };

    let country = match entry.country.and_then(|c| c.value) {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Extracted::Skipped(SkipReason::MissingCountry),
    };

    let year = match entry.date.as_ref().map(|d| (d, d.parse())) {
        Some((_, Some(y))) => y,
        Some((d, None)) => return Extracted::Skipped(SkipReason::InvalidYear(Some(d.to_string()))),
        None => return Extracted::Skipped(SkipReason::InvalidYear(None)),
    };
    if year < min_year {
        return Extracted::Skipped(SkipReason::BeforeMinYear(year));
    }

    Extracted::Record(ExpenditureRecord {
        country,
        year,
        expenditure: entry.value,
    })
}

/// Extract every entry, keeping API order.
pub fn extract_records(entries: &[Value], min_year: i32) -> Extraction {
    let mut out = Extraction::default();
    for raw in entries {
        match extract_entry(raw, min_year) {
            Extracted::Record(r) => out.records.push(r),
            Extracted::Skipped(reason) => out.skipped.push(reason),
        }
    }
    out
}

/// Shape check plus extraction for one country's response body.
pub fn extract_response(body: &Value, min_year: i32) -> Result<Extraction, MalformedResponse> {
    response_entries(body).map(|entries| extract_records(entries, min_year))
}
