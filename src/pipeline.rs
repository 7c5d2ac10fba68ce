//! Fetch → extract → tabulate, then rank and analyze the resulting table.

use crate::api::IndicatorSource;
use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::extract::{MalformedResponse, extract_response};
use crate::impact::{EventImpact, analyze_events};
use crate::models::CountryCode;
use crate::rank::{Ranking, rank_latest};
use crate::table::ExpenditureTable;

/// What one country contributed to the table.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryReport {
    pub country: CountryCode,
    pub records: usize,
    /// Entries dropped for being older than the cutoff.
    pub before_cutoff: usize,
    /// Entries dropped because they could not be parsed.
    pub invalid: usize,
    pub malformed: Option<MalformedResponse>,
}

#[derive(Debug, Clone)]
pub struct TableBuild {
    pub table: ExpenditureTable,
    pub reports: Vec<CountryReport>,
}

/// Fetch every configured country one after the other and build the table.
///
/// A transport failure aborts the run; a malformed payload only means that
/// country contributes no rows.
pub fn build_table<S>(source: &S, config: &AnalysisConfig) -> Result<TableBuild>
where
    S: IndicatorSource + ?Sized,
{
    let mut table = ExpenditureTable::new();
    let mut reports = Vec::with_capacity(config.countries.len());

    for &country in &config.countries {
        let body = source
            .fetch_country(country)
            .map_err(|source| Error::Transport { country, source })?;

        let report = match extract_response(&body, config.min_year) {
            Ok(extraction) => {
                for reason in &extraction.skipped {
                    log::debug!("{country}: skipped entry ({reason})");
                }
                let invalid = extraction.invalid_count();
                let report = CountryReport {
                    country,
                    records: extraction.records.len(),
                    before_cutoff: extraction.skipped.len() - invalid,
                    invalid,
                    malformed: None,
                };
                table.extend_country(extraction.records);
                report
            }
            Err(reason) => {
                log::warn!("{country}: ignoring response, {reason}");
                CountryReport {
                    country,
                    records: 0,
                    before_cutoff: 0,
                    invalid: 0,
                    malformed: Some(reason),
                }
            }
        };
        log::info!(
            "{country}: {} record(s), {} invalid, {} before cutoff",
            report.records,
            report.invalid,
            report.before_cutoff
        );
        reports.push(report);
    }

    log::info!("table holds {} record(s)", table.len());
    Ok(TableBuild { table, reports })
}

/// Ranking and event impacts derived from one table.
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    pub latest_year: i32,
    pub ranking: Ranking<'a>,
    pub impacts: Vec<EventImpact>,
}

pub fn analyze<'a>(table: &'a ExpenditureTable, config: &AnalysisConfig) -> Result<Analysis<'a>> {
    let ranking = rank_latest(table, config.top_n)?;
    let latest_year = ranking.year;
    let impacts = analyze_events(table, &config.events, latest_year, config.window);
    Ok(Analysis {
        latest_year,
        ranking,
        impacts,
    })
}
