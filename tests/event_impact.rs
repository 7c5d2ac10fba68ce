use milspend::config::HISTORICAL_EVENTS;
use milspend::impact::{Significance, analyze_event_impact, analyze_events};
use milspend::models::ExpenditureRecord;
use milspend::report::render_impact;
use milspend::table::ExpenditureTable;

fn table(rows: &[(&str, i32, Option<f64>)]) -> ExpenditureTable {
    rows.iter()
        .map(|(c, y, v)| ExpenditureRecord {
            country: c.to_string(),
            year: *y,
            expenditure: *v,
        })
        .collect()
}

#[test]
fn before_and_after_means_around_event() {
    let t = table(&[
        ("X", 2012, Some(1.0)),
        ("X", 2013, Some(2.0)),
        ("X", 2015, Some(4.0)),
        ("X", 2016, Some(5.0)),
    ]);
    let impact = analyze_event_impact(&t, 2014, "Crimea Invasion", 2);
    assert_eq!(impact.rows.len(), 1);
    let row = &impact.rows[0];
    assert_eq!(row.country, "X");
    assert!((row.before - 1.5).abs() < 1e-12);
    assert!((row.after - 4.5).abs() < 1e-12);
    assert!((row.change - 3.0).abs() < 1e-12);
    assert_eq!(row.significance, Some(Significance::Increase));
}

#[test]
fn event_year_and_out_of_window_years_are_ignored() {
    let t = table(&[
        ("X", 2011, Some(100.0)),
        ("X", 2012, Some(2.0)),
        ("X", 2014, Some(100.0)),
        ("X", 2016, Some(1.0)),
        ("X", 2017, Some(100.0)),
    ]);
    let row = &analyze_event_impact(&t, 2014, "E", 2).rows[0];
    assert_eq!((row.before, row.after), (2.0, 1.0));
    assert_eq!(row.significance, Some(Significance::Decrease));
}

#[test]
fn small_change_is_reported_without_flag() {
    let t = table(&[("X", 2013, Some(2.0)), ("X", 2015, Some(2.25))]);
    let impact = analyze_event_impact(&t, 2014, "E", 2);
    assert_eq!(impact.rows[0].significance, None);
    let txt = render_impact(&impact);
    assert!(txt.contains("  Change:           +0.25%"));
    assert!(!txt.contains("Significant"));
}

#[test]
fn country_without_data_on_one_side_is_omitted() {
    let t = table(&[
        ("OnlyBefore", 2012, Some(1.0)),
        ("OnlyBefore", 2016, None),
        ("Both", 2013, Some(1.0)),
        ("Both", 2015, Some(1.0)),
        ("OnlyAfter", 2015, Some(3.0)),
    ]);
    let impact = analyze_event_impact(&t, 2014, "E", 2);
    let names: Vec<&str> = impact.rows.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(names, vec!["Both"]);
    assert!(impact.rows.iter().all(|r| r.before.is_finite() && r.after.is_finite()));
}

#[test]
fn events_near_the_horizon_are_not_analyzed() {
    let t = table(&[
        ("X", 2018, Some(1.0)),
        ("X", 2019, Some(1.0)),
        ("X", 2020, Some(2.0)),
        ("X", 2021, Some(3.0)),
    ]);
    let impacts = analyze_events(&t, &HISTORICAL_EVENTS, 2021, 2);
    let years: Vec<i32> = impacts.iter().map(|i| i.event_year).collect();
    assert_eq!(years, vec![2014, 2015, 2019]);

    let out: String = impacts.iter().map(render_impact).collect();
    for late in ["Nagorno-Karabakh War", "Russian Buildup", "Ukraine Invasion"] {
        assert!(!out.contains(late), "{late} should not be analyzed");
    }
}

#[test]
fn decrease_is_rendered_with_marker() {
    let t = table(&[("Y", 2018, Some(3.0)), ("Y", 2021, Some(2.0))]);
    let txt = render_impact(&analyze_event_impact(&t, 2019, "Zelensky Election", 2));
    assert!(txt.starts_with("\nImpact of Zelensky Election (2019):\n"));
    assert!(txt.contains("\nY:\n"));
    assert!(txt.contains("  2 years before: 3.00%\n"));
    assert!(txt.contains("  2 years after:  2.00%\n"));
    assert!(txt.contains("  Change:           -1.00%\n"));
    assert!(txt.contains("📉 Significant decrease after Zelensky Election"));
}
