// Live tests (opt-in): cargo test --features online
#![cfg(feature = "online")]

use milspend::api::{Client, IndicatorSource};
use milspend::extract::extract_response;
use milspend::models::CountryCode;

#[test]
fn ukraine_payload_has_recent_records() {
    let body = Client::default().fetch_country(CountryCode::Ukr).unwrap();
    let ex = extract_response(&body, 2010).expect("well-formed payload");
    assert!(!ex.records.is_empty());
    assert!(ex.records.iter().all(|r| r.country == "Ukraine" && r.year >= 2010));
}

#[test]
fn every_configured_country_answers() {
    let client = Client::default();
    for code in CountryCode::ALL {
        client
            .fetch_country(code)
            .unwrap_or_else(|e| panic!("{code}: {e}"));
    }
}
