//! CSV loading for the flight-route dataset.
//!
//! The engine itself never touches files; this module turns a CSV export
//! into a [`RecordStore`] and rejects rows whose flight date cannot be
//! parsed. Population and coordinate columns are nullable: empty or
//! non-numeric values (`NA`, `nan`) load as `None`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use flight_domain::FlightRecord;
use serde::Deserialize;

use crate::error::{AnalyticsError, Result};
use crate::store::RecordStore;

/// One CSV row as exported from the source dataset.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Origin_airport")]
    origin_airport: String,
    #[serde(rename = "Destination_airport")]
    destination_airport: String,
    #[serde(rename = "Origin_city")]
    origin_city: String,
    #[serde(rename = "Destination_city")]
    destination_city: String,
    #[serde(rename = "Passengers")]
    passengers: u64,
    #[serde(rename = "Seats")]
    seats: u64,
    #[serde(rename = "Fly_date")]
    fly_date: String,
    #[serde(rename = "Origin_population", deserialize_with = "csv::invalid_option")]
    origin_population: Option<u64>,
    #[serde(
        rename = "Destination_population",
        deserialize_with = "csv::invalid_option"
    )]
    destination_population: Option<u64>,
    #[serde(rename = "Org_airport_lat", deserialize_with = "csv::invalid_option")]
    origin_lat: Option<f64>,
    #[serde(rename = "Org_airport_long", deserialize_with = "csv::invalid_option")]
    origin_long: Option<f64>,
    #[serde(rename = "Dest_airport_lat", deserialize_with = "csv::invalid_option")]
    destination_lat: Option<f64>,
    #[serde(rename = "Dest_airport_long", deserialize_with = "csv::invalid_option")]
    destination_long: Option<f64>,
}

impl CsvRow {
    fn into_record(self, line: u64) -> Result<FlightRecord> {
        let flight_date = parse_flight_date(&self.fly_date).ok_or_else(|| {
            AnalyticsError::MalformedDate {
                line,
                value: self.fly_date.clone(),
            }
        })?;

        Ok(FlightRecord {
            flight_date,
            origin_airport: self.origin_airport,
            destination_airport: self.destination_airport,
            origin_city: self.origin_city,
            destination_city: self.destination_city,
            passengers: self.passengers,
            seats: self.seats,
            origin_population: self.origin_population,
            destination_population: self.destination_population,
            origin_lat: self.origin_lat.filter(|v| v.is_finite()),
            origin_long: self.origin_long.filter(|v| v.is_finite()),
            destination_lat: self.destination_lat.filter(|v| v.is_finite()),
            destination_long: self.destination_long.filter(|v| v.is_finite()),
        })
    }
}

/// Accepts `YYYY-MM-DD`, optionally followed by a `HH:MM:SS` time which
/// is dropped.
fn parse_flight_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .ok()
}

/// Load a dataset from any CSV source with a header row.
///
/// # Errors
///
/// Fails on the first malformed flight date, on non-numeric passenger or
/// seat counts, and on structural CSV problems.
pub fn load_from_reader<R: Read>(reader: R) -> Result<RecordStore> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let line = row.position().map_or(0, csv::Position::line);
        let parsed: CsvRow = row.deserialize(Some(&headers))?;
        records.push(parsed.into_record(line)?);
    }

    tracing::info!(records = records.len(), "Flight dataset loaded");
    Ok(RecordStore::new(records))
}

/// Load a dataset from a CSV file on disk.
///
/// # Errors
///
/// Same as [`load_from_reader`], plus IO errors opening the file.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<RecordStore> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "Loading flight dataset");
    let file = File::open(path)?;
    load_from_reader(file)
}
