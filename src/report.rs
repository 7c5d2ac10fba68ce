//! Plain-text rendering of the run's results for stdout.

use crate::impact::{EventImpact, Significance};
use crate::models::ExpenditureRecord;
use crate::rank::Ranking;
use crate::table::ExpenditureTable;

/// Rows shown in the table preview.
pub const PREVIEW_ROWS: usize = 5;

/// Six decimals like a dataframe print; `NaN` for a missing value.
pub fn fmt_expenditure(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{:.6}", x),
        _ => "NaN".to_string(),
    }
}

/// Indexed three-column table: position, country, year, expenditure.
pub fn render_records(rows: &[(usize, &ExpenditureRecord)]) -> String {
    let cells: Vec<(String, &str, String, String)> = rows
        .iter()
        .map(|(idx, r)| {
            (
                idx.to_string(),
                r.country.as_str(),
                r.year.to_string(),
                fmt_expenditure(r.expenditure),
            )
        })
        .collect();

    let w_idx = cells.iter().map(|c| c.0.len()).max().unwrap_or(0);
    let w_country = cells
        .iter()
        .map(|c| c.1.chars().count())
        .chain(std::iter::once("Country".len()))
        .max()
        .unwrap_or(0);
    let w_year = cells
        .iter()
        .map(|c| c.2.len())
        .chain(std::iter::once("Year".len()))
        .max()
        .unwrap_or(0);
    let w_value = cells
        .iter()
        .map(|c| c.3.len())
        .chain(std::iter::once("Expenditure".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "{:w_idx$}  {:<w_country$}  {:>w_year$}  {:>w_value$}\n",
        "", "Country", "Year", "Expenditure"
    );
    for (idx, country, year, value) in &cells {
        out.push_str(&format!(
            "{:<w_idx$}  {:<w_country$}  {:>w_year$}  {:>w_value$}\n",
            idx, country, year, value
        ));
    }
    out
}

pub fn render_preview(table: &ExpenditureTable) -> String {
    format!(
        "\nFirst few rows of data:\n{}",
        render_records(&table.head(PREVIEW_ROWS))
    )
}

pub fn render_ranking(ranking: &Ranking<'_>) -> String {
    format!(
        "\nTop countries by military expenditure in {}\n{}",
        ranking.year,
        render_records(&ranking.rows)
    )
}

pub fn render_impact(impact: &EventImpact) -> String {
    let w = impact.window;
    let mut out = format!("\nImpact of {} ({}):\n", impact.event_name, impact.event_year);
    for row in &impact.rows {
        out.push_str(&format!("\n{}:\n", row.country));
        out.push_str(&format!("  {w} years before: {:.2}%\n", row.before));
        out.push_str(&format!("  {w} years after:  {:.2}%\n", row.after));
        out.push_str(&format!("  Change:           {:+.2}%\n", row.change));
        match row.significance {
            Some(Significance::Increase) => out.push_str(&format!(
                "  ⚠️ Significant increase after {}\n",
                impact.event_name
            )),
            Some(Significance::Decrease) => out.push_str(&format!(
                "  📉 Significant decrease after {}\n",
                impact.event_name
            )),
            None => {}
        }
    }
    out
}
