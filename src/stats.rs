use crate::models::ExpenditureRecord;
use std::ops::RangeInclusive;

/// Arithmetic mean, `None` for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0f64, 0usize), |(s, n), v| (s + v, n + 1));
    if count > 0 {
        Some(sum / count as f64)
    } else {
        None
    }
}

/// Mean of the non-missing expenditures whose year falls in `years`.
pub fn mean_expenditure<'a>(
    records: impl IntoIterator<Item = &'a ExpenditureRecord>,
    years: RangeInclusive<i32>,
) -> Option<f64> {
    mean(
        records
            .into_iter()
            .filter(|r| years.contains(&r.year))
            .filter_map(|r| r.expenditure),
    )
}
