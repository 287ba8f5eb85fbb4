//! # Flight Route Explorer - Domain Model
//!
//! Core record type, value objects, and derived-view shapes for the
//! historical flight-route dataset. These types are shared by the
//! analytics engine, the HTTP API, and the report CLI.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// =============================================================================
// VALUE OBJECTS
// =============================================================================

/// A stored latitude/longitude pair, in decimal degrees.
///
/// Coordinates are passed through exactly as loaded; no geographic
/// computation happens anywhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a point only when both halves are known.
    #[must_use]
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

// =============================================================================
// ENUMS
// =============================================================================

/// Which airport field of a record a code is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirportRole {
    /// Departing airport (`origin_airport`)
    Origin,
    /// Arriving airport (`destination_airport`)
    Destination,
}

// =============================================================================
// ENTITY TYPES
// =============================================================================

/// One row of the flight-route dataset.
///
/// `seats >= passengers` is not guaranteed by the source data and nothing
/// relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_date: NaiveDate,

    // Route
    pub origin_airport: String,
    pub destination_airport: String,
    pub origin_city: String,
    pub destination_city: String,

    // Volume
    pub passengers: u64,
    pub seats: u64,

    // Metro population, when known
    pub origin_population: Option<u64>,
    pub destination_population: Option<u64>,

    // Geolocation, None = not available
    pub origin_lat: Option<f64>,
    pub origin_long: Option<f64>,
    pub destination_lat: Option<f64>,
    pub destination_long: Option<f64>,
}

impl FlightRecord {
    /// Calendar year of the flight.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.flight_date.year()
    }

    /// Airport code for the given role.
    #[must_use]
    pub fn airport(&self, role: AirportRole) -> &str {
        match role {
            AirportRole::Origin => &self.origin_airport,
            AirportRole::Destination => &self.destination_airport,
        }
    }
}

// =============================================================================
// DERIVED VIEWS
// =============================================================================

/// Display details for a selected airport.
///
/// Taken from the first record (in dataset order) that departs from the
/// airport. Codes are not unique keys in the dataset, so this is a
/// deterministic first match rather than a lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportInfo {
    pub code: String,
    pub city: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl AirportInfo {
    #[must_use]
    pub fn from_origin(record: &FlightRecord) -> Self {
        Self {
            code: record.origin_airport.clone(),
            city: record.origin_city.clone(),
            latitude: record.origin_lat,
            longitude: record.origin_long,
        }
    }

    /// Map position, if both coordinates are known.
    #[must_use]
    pub fn location(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.latitude, self.longitude)
    }
}

/// Number of flights on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

/// Number of flights in a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: u64,
}

/// Departures and arrivals of one airport in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyTraffic {
    pub year: i32,
    pub departures: u64,
    pub arrivals: u64,
}

/// Airport ranked by number of flights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedAirport {
    pub airport: String,
    pub flights: u64,
}
