//! Fixed analysis configuration: the country set, the event list, and the
//! numeric constants of the pipeline. Built once in `main` and handed to
//! every stage.

use crate::models::{CountryCode, Event, EventColor, Rgb8};

/// World Bank indicator id for military expenditure (% of GDP).
pub const INDICATOR_ID: &str = "MS.MIL.XPND.GD.ZS";

/// Observations before this year are dropped during extraction.
pub const MIN_YEAR: i32 = 2010;

/// Years before/after an event that are averaged for impact analysis.
pub const WINDOW: i32 = 2;

/// Rows kept by the ranking.
pub const TOP_N: usize = 10;

/// Russia first, then its neighbours.
pub const RUSSIA_AND_NEIGHBORS: [CountryCode; 14] = CountryCode::ALL;

const fn color(name: &'static str, r: u8, g: u8, b: u8) -> EventColor {
    EventColor {
        name,
        rgb: Rgb8 { r, g, b },
    }
}

pub const HISTORICAL_EVENTS: [Event; 6] = [
    Event {
        year: 2014,
        name: "Crimea Invasion",
        color: color("red", 255, 0, 0),
    },
    Event {
        year: 2015,
        name: "Syria Intervention",
        color: color("orange", 255, 165, 0),
    },
    Event {
        year: 2019,
        name: "Zelensky Election",
        color: color("blue", 0, 0, 255),
    },
    Event {
        year: 2020,
        name: "Nagorno-Karabakh War",
        color: color("purple", 128, 0, 128),
    },
    Event {
        year: 2021,
        name: "Russian Buildup",
        color: color("brown", 165, 42, 42),
    },
    Event {
        year: 2022,
        name: "Ukraine Invasion",
        color: color("darkred", 139, 0, 0),
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub countries: Vec<CountryCode>,
    pub events: Vec<Event>,
    pub min_year: i32,
    pub window: i32,
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            countries: RUSSIA_AND_NEIGHBORS.to_vec(),
            events: HISTORICAL_EVENTS.to_vec(),
            min_year: MIN_YEAR,
            window: WINDOW,
            top_n: TOP_N,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_fixed_constants() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.countries.len(), 14);
        assert_eq!(cfg.countries[0], CountryCode::Rus);
        assert_eq!(cfg.countries[7], CountryCode::Ukr);
        assert_eq!(cfg.events.len(), 6);
        assert!(cfg.events.windows(2).all(|w| w[0].year < w[1].year));
        assert_eq!((cfg.min_year, cfg.window, cfg.top_n), (2010, 2, 10));
    }
}
