//! Synchronous client for the **World Bank Indicators API (v2)**.
//!
//! Issues one `country/{code}/indicator/MS.MIL.XPND.GD.ZS` request per country and
//! hands back the decoded JSON body untouched. Shape validation lives in `extract`.
//!
//! ### Notes
//! - No retry and no paging: the provider's default page already holds the
//!   most recent decades, and the analysis only looks at years from 2010 on.
//! - Network timeouts use a sane default (30s total, 10s connect).
//!
//! Typical usage:
//! ```no_run
//! # use milspend::api::{Client, IndicatorSource};
//! # use milspend::models::CountryCode;
//! let client = Client::default();
//! let body = client.fetch_country(CountryCode::Ukr)?;
//! # Ok::<(), milspend::error::FetchError>(())
//! ```
use crate::config::INDICATOR_ID;
use crate::error::FetchError;
use crate::models::CountryCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Anything that can produce the raw indicator payload for a country.
///
/// `Client` talks to the live API; tests plug in canned responses.
pub trait IndicatorSource {
    fn fetch_country(&self, country: CountryCode) -> Result<Value, FetchError>;
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_base_url("https://api.worldbank.org/v2")
    }
}

impl Client {
    /// Client against a different API root (mirrors, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("milspend/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn indicator_url(&self, country: CountryCode) -> String {
        format!(
            "{}/country/{}/indicator/{}?format=json",
            self.base_url, country, INDICATOR_ID
        )
    }
}

impl IndicatorSource for Client {
    fn fetch_country(&self, country: CountryCode) -> Result<Value, FetchError> {
        let url = self.indicator_url(country);
        log::debug!("GET {url}");
        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }
        Ok(resp.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_url_uses_iso3_code_and_json_format() {
        let c = Client::with_base_url("http://localhost:9/v2/");
        assert_eq!(
            c.indicator_url(CountryCode::Ukr),
            "http://localhost:9/v2/country/UKR/indicator/MS.MIL.XPND.GD.ZS?format=json"
        );
    }
}
