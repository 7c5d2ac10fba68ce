use crate::models::CountryCode;
use thiserror::Error;

/// Transport-level failure while fetching one country's payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, timeout, or body decoding failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("GET {url} failed with HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Failures that end a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("fetching {country} failed")]
    Transport {
        country: CountryCode,
        #[source]
        source: FetchError,
    },
    #[error("no expenditure records were extracted; the latest year is undefined")]
    EmptyTable,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
