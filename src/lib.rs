//! milspend
//!
//! Fetches the World Bank military expenditure indicator (`MS.MIL.XPND.GD.ZS`,
//! % of GDP) for Russia and its neighbours, and turns it into a ranked table,
//! a time-series chart annotated with historical events, and a before/after
//! comparison around each event. Pairs with the `milspend` CLI.
//!
//! ### Pipeline
//! fetch (`api`) → extract (`extract`) → tabulate (`table`) →
//! { rank (`rank`), plot (`viz`), event impact (`impact`) }
//!
//! ### Example
//! ```no_run
//! use milspend::{AnalysisConfig, Client, pipeline, report};
//!
//! let config = AnalysisConfig::default();
//! let build = pipeline::build_table(&Client::default(), &config)?;
//! let analysis = pipeline::analyze(&build.table, &config)?;
//! print!("{}", report::render_ranking(&analysis.ranking));
//! milspend::viz::plot_expenditure(
//!     &build.table,
//!     &config.events,
//!     config.min_year,
//!     analysis.latest_year,
//!     "milex.svg",
//!     1500,
//!     800,
//! )?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod impact;
pub mod models;
pub mod pipeline;
pub mod rank;
pub mod report;
pub mod stats;
pub mod table;
pub mod viz;

pub use api::{Client, IndicatorSource};
pub use config::AnalysisConfig;
pub use error::{Error, FetchError};
pub use models::{CountryCode, Event, ExpenditureRecord};
pub use table::ExpenditureTable;
