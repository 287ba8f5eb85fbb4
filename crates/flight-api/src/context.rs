//! # API Context
//!
//! Shared state injected into every handler.

use std::sync::Arc;

use flight_analytics::{AnalyticsEngine, RecordStore};

use crate::config::Config;

/// Parameter values used when a request leaves them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    pub airport: String,
    pub year: i32,
    pub top_n: i64,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            airport: "ORD".to_string(),
            year: 2000,
            top_n: flight_analytics::DEFAULT_TOP_N,
        }
    }
}

impl From<&Config> for QueryDefaults {
    fn from(config: &Config) -> Self {
        Self {
            airport: config.default_airport.clone(),
            year: config.default_year,
            top_n: config.top_n,
        }
    }
}

/// Application context shared across all handlers
///
/// The engine sits behind an `Arc` and is only ever read, so handlers on
/// any worker thread can query it without locking.
#[derive(Debug, Clone)]
pub struct ApiContext {
    pub engine: Arc<AnalyticsEngine>,
    pub defaults: QueryDefaults,
}

impl ApiContext {
    pub fn new(store: RecordStore, defaults: QueryDefaults) -> Self {
        Self {
            engine: Arc::new(AnalyticsEngine::new(store)),
            defaults,
        }
    }
}
