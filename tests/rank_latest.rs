use milspend::error::Error;
use milspend::models::ExpenditureRecord;
use milspend::rank::rank_latest;
use milspend::table::ExpenditureTable;

fn rec(country: &str, year: i32, v: Option<f64>) -> ExpenditureRecord {
    ExpenditureRecord {
        country: country.into(),
        year,
        expenditure: v,
    }
}

#[test]
fn only_the_latest_year_is_ranked() {
    let table: ExpenditureTable = vec![
        rec("A", 2018, Some(9.0)),
        rec("B", 2020, Some(8.0)),
        rec("C", 2020, Some(7.0)),
        rec("D", 2021, Some(1.0)),
    ]
    .into_iter()
    .collect();
    let ranking = rank_latest(&table, 10).unwrap();
    assert_eq!(ranking.year, 2021);
    assert_eq!(ranking.rows.len(), 1);
    assert_eq!(ranking.rows[0].0, 3);
    assert_eq!(ranking.rows[0].1.country, "D");
}

#[test]
fn at_most_top_n_rows_descending() {
    let table: ExpenditureTable = (0..12)
        .map(|i| rec(&format!("C{i}"), 2021, Some(i as f64)))
        .collect();
    let ranking = rank_latest(&table, 10).unwrap();
    assert_eq!(ranking.rows.len(), 10);
    let values: Vec<f64> = ranking
        .rows
        .iter()
        .map(|(_, r)| r.expenditure.unwrap())
        .collect();
    assert_eq!(values, vec![11.0, 10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0]);
}

#[test]
fn fewer_rows_than_top_n_are_all_returned() {
    let table: ExpenditureTable = vec![rec("A", 2021, Some(2.0)), rec("B", 2021, Some(3.0))]
        .into_iter()
        .collect();
    let ranking = rank_latest(&table, 10).unwrap();
    let names: Vec<&str> = ranking.rows.iter().map(|(_, r)| r.country.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn missing_values_rank_last_and_ties_keep_table_order() {
    let table: ExpenditureTable = vec![
        rec("NoData", 2021, None),
        rec("First", 2021, Some(2.0)),
        rec("Top", 2021, Some(5.0)),
        rec("Second", 2021, Some(2.0)),
    ]
    .into_iter()
    .collect();
    let ranking = rank_latest(&table, 10).unwrap();
    let names: Vec<&str> = ranking.rows.iter().map(|(_, r)| r.country.as_str()).collect();
    assert_eq!(names, vec!["Top", "First", "Second", "NoData"]);

    let top3 = rank_latest(&table, 3).unwrap();
    assert!(top3.rows.iter().all(|(_, r)| r.expenditure.is_some()));
}

#[test]
fn empty_table_is_an_error() {
    let table = ExpenditureTable::new();
    assert!(matches!(rank_latest(&table, 10), Err(Error::EmptyTable)));
}
