//! # Flight Analytics
//!
//! Query and aggregation engine for historical flight-route data.
//! Works on an immutable in-memory [`RecordStore`]; every query is a pure
//! function of the store and its parameters.
//!
//! ## Pipeline
//!
//! ```text
//! RecordStore ──► filter ──┬──► timeseries (by day / by year)
//!                          ├──► ranking (top-N)
//!                          └──► projection (display rows)
//!                                     │
//!                             AnalyticsEngine (query facade)
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, missing_docs)]

pub mod engine;
pub mod error;
pub mod filter;
pub mod loader;
pub mod projection;
pub mod ranking;
pub mod reports;
pub mod store;
pub mod timeseries;

#[cfg(test)]
pub(crate) mod fixtures;

pub use engine::{AnalyticsEngine, DEFAULT_TOP_N};
pub use error::{AnalyticsError, Result};
pub use filter::{RecordFilter, Subset};
pub use projection::{CellValue, Column, DateFormat, ProjectedRow};
pub use ranking::RankKey;
pub use reports::DashboardReport;
pub use store::RecordStore;
