use crate::error::{Error, Result};
use crate::models::ExpenditureRecord;
use crate::table::ExpenditureTable;
use std::cmp::Ordering;

/// Ranked rows for the most recent year in the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<'a> {
    pub year: i32,
    /// `(table position, record)`, highest expenditure first.
    pub rows: Vec<(usize, &'a ExpenditureRecord)>,
}

/// Descending by value; a missing value sorts after every present one.
fn by_expenditure_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Rank the countries of the latest year by expenditure and keep the top `top_n`.
///
/// Ties keep table order (stable sort). Rows with a missing value are kept
/// but placed last, so they only appear when fewer than `top_n` rows carry a value.
pub fn rank_latest(table: &ExpenditureTable, top_n: usize) -> Result<Ranking<'_>> {
    let year = table.latest_year().ok_or(Error::EmptyTable)?;
    let mut rows: Vec<(usize, &ExpenditureRecord)> = table
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.year == year)
        .collect();
    rows.sort_by(|(_, a), (_, b)| by_expenditure_desc(a.expenditure, b.expenditure));
    rows.truncate(top_n);
    Ok(Ranking { year, rows })
}
