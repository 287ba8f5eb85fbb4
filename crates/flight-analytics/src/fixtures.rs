//! Record builders shared by unit tests.

use chrono::NaiveDate;
use flight_domain::FlightRecord;

use crate::store::RecordStore;

pub(crate) fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A route record with plausible defaults for everything but the keys.
pub(crate) fn flight(origin: &str, destination: &str, day: &str) -> FlightRecord {
    FlightRecord {
        flight_date: date(day),
        origin_airport: origin.to_string(),
        destination_airport: destination.to_string(),
        origin_city: format!("{origin} City"),
        destination_city: format!("{destination} City"),
        passengers: 100,
        seats: 150,
        origin_population: Some(1_000_000),
        destination_population: Some(2_000_000),
        origin_lat: Some(41.0),
        origin_long: Some(-87.0),
        destination_lat: Some(34.0),
        destination_long: Some(-118.0),
    }
}

/// Small dataset spanning two years and three airports.
///
/// - ORD departs 3x in 2000 (01-01, 01-01, 01-02) and 1x in 2001
/// - ORD receives 1x in 2000 and 1x in 1999
/// - JFK departs before LAX in the sequence
pub(crate) fn sample_store() -> RecordStore {
    RecordStore::new(vec![
        flight("JFK", "LAX", "2000-03-05"),
        flight("ORD", "JFK", "2000-01-02"),
        flight("ORD", "LAX", "2000-01-01"),
        flight("LAX", "ORD", "2000-02-10"),
        flight("ORD", "LAX", "2000-01-01"),
        flight("ORD", "JFK", "2001-06-15"),
        flight("JFK", "ORD", "1999-12-31"),
    ])
}
