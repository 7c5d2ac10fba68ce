//! Before/after comparison of expenditure around historical events.

use crate::models::Event;
use crate::stats::mean_expenditure;
use crate::table::ExpenditureTable;

/// Absolute change (percentage points of GDP) from which a shift is flagged.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Significance {
    Increase,
    Decrease,
}

impl Significance {
    pub fn classify(change: f64) -> Option<Self> {
        if change.abs() < SIGNIFICANCE_THRESHOLD {
            None
        } else if change > 0.0 {
            Some(Significance::Increase)
        } else {
            Some(Significance::Decrease)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryImpact {
    pub country: String,
    pub before: f64,
    pub after: f64,
    pub change: f64,
    pub significance: Option<Significance>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventImpact {
    pub event_year: i32,
    pub event_name: String,
    pub window: i32,
    /// Only countries with data on both sides of the event.
    pub rows: Vec<CountryImpact>,
}

/// Compare each country's mean expenditure over `[year - window, year)` with
/// `(year, year + window]`. The event year itself is in neither window.
pub fn analyze_event_impact(
    table: &ExpenditureTable,
    event_year: i32,
    event_name: &str,
    window: i32,
) -> EventImpact {
    let before_years = (event_year - window)..=(event_year - 1);
    let after_years = (event_year + 1)..=(event_year + window);

    let rows = table
        .countries()
        .into_iter()
        .filter_map(|country| {
            let before = mean_expenditure(table.country_records(country), before_years.clone())?;
            let after = mean_expenditure(table.country_records(country), after_years.clone())?;
            let change = after - before;
            Some(CountryImpact {
                country: country.to_string(),
                before,
                after,
                change,
                significance: Significance::classify(change),
            })
        })
        .collect();

    EventImpact {
        event_year,
        event_name: event_name.to_string(),
        window,
        rows,
    }
}

/// An event is analyzable only when a full "after" window fits before the data horizon.
pub fn has_full_window(event_year: i32, latest_year: i32, window: i32) -> bool {
    event_year <= latest_year - window
}

/// Analyze every event that has a full window, in the given event order.
pub fn analyze_events(
    table: &ExpenditureTable,
    events: &[Event],
    latest_year: i32,
    window: i32,
) -> Vec<EventImpact> {
    events
        .iter()
        .filter(|e| {
            let keep = has_full_window(e.year, latest_year, window);
            if !keep {
                log::debug!(
                    "skipping {} ({}): no full {window}-year window before {latest_year}",
                    e.name,
                    e.year
                );
            }
            keep
        })
        .map(|e| analyze_event_impact(table, e.year, e.name, window))
        .collect()
}
