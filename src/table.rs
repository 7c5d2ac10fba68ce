use crate::models::ExpenditureRecord;

/// All records of a run, in country-enumeration order and then API order.
///
/// Nothing is sorted or deduplicated here; the ranking and plotting stages
/// impose their own order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenditureTable {
    records: Vec<ExpenditureRecord>,
}

impl ExpenditureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one country's records.
    pub fn extend_country(&mut self, records: impl IntoIterator<Item = ExpenditureRecord>) {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[ExpenditureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `n` rows with their table positions, for previews.
    pub fn head(&self, n: usize) -> Vec<(usize, &ExpenditureRecord)> {
        self.records.iter().enumerate().take(n).collect()
    }

    /// Unique country names in first-seen order.
    pub fn countries(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for r in &self.records {
            if !seen.contains(&r.country.as_str()) {
                seen.push(r.country.as_str());
            }
        }
        seen
    }

    pub fn country_records<'a>(
        &'a self,
        country: &'a str,
    ) -> impl Iterator<Item = &'a ExpenditureRecord> + 'a {
        self.records.iter().filter(move |r| r.country == country)
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.records.iter().map(|r| r.year).max()
    }

    /// Largest non-missing expenditure across all countries and years.
    pub fn max_expenditure(&self) -> Option<f64> {
        self.records
            .iter()
            .filter_map(|r| r.expenditure)
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }
}

impl FromIterator<ExpenditureRecord> for ExpenditureTable {
    fn from_iter<I: IntoIterator<Item = ExpenditureRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(country: &str, year: i32, v: Option<f64>) -> ExpenditureRecord {
        ExpenditureRecord {
            country: country.into(),
            year,
            expenditure: v,
        }
    }

    #[test]
    fn countries_keep_first_seen_order() {
        let t: ExpenditureTable = vec![
            rec("Russian Federation", 2020, Some(4.0)),
            rec("Norway", 2020, Some(1.9)),
            rec("Russian Federation", 2019, Some(3.9)),
        ]
        .into_iter()
        .collect();
        assert_eq!(t.countries(), vec!["Russian Federation", "Norway"]);
        assert_eq!(t.country_records("Russian Federation").count(), 2);
    }

    #[test]
    fn max_ignores_missing_values() {
        let t: ExpenditureTable = vec![
            rec("A", 2015, None),
            rec("A", 2016, Some(2.5)),
            rec("B", 2016, Some(1.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(t.max_expenditure(), Some(2.5));
        assert_eq!(t.latest_year(), Some(2016));
        assert_eq!(ExpenditureTable::new().max_expenditure(), None);
    }
}
