//! monetr KPI reporting SDK for Rust.
//!
//! # Example
//!
//! ```rust,ignore
//! use monetr::{KeyedDataPoint, KpiConfig, Monetr};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), monetr::Error> {
//!     let client = Monetr::builder("tok_xxx").build()?;
//!
//!     let kpis = KpiConfig::new().kpi("Revenue", 12, [("US", 4), ("EU", 5)]);
//!
//!     let summary = client
//!         .report_keyed(
//!             vec![KeyedDataPoint::new("revenue.us", 99.5, 1706400000000)],
//!             &kpis,
//!         )
//!         .await;
//!
//!     assert!(summary.all_succeeded());
//!     Ok(())
//! }
//! ```

mod batch;
mod client;
mod config;
mod error;
mod kpi;
mod transport;
mod types;

pub use batch::BATCH_SIZE;
pub use client::Monetr;
pub use config::{Config, Environment, MonetrBuilder, DEFAULT_TIMEOUT};
pub use error::Error;
pub use kpi::{KeyError, KpiConfig, KpiEntry};
pub use types::{
    BatchSummary, BlockOutcome, DataPoint, ItemOutcome, ItemStatus, KeyedDataPoint, KeyedSummary,
    RealtimeValue,
};
