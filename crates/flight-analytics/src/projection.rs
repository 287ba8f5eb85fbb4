//! Projection of record subsets into display rows.
//!
//! Rows keep only the requested columns, in the requested order, and the
//! flight date is rendered as text. Everything upstream stays typed.

use std::fmt::{self, Write as _};

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use flight_domain::FlightRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{AnalyticsError, Result};

/// A column of [`FlightRecord`] that can be projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Flight date, rendered with the row's [`DateFormat`]
    FlightDate,
    /// Departing airport code
    OriginAirport,
    /// Arriving airport code
    DestinationAirport,
    /// Departing city
    OriginCity,
    /// Arriving city
    DestinationCity,
    /// Passengers carried
    Passengers,
    /// Seats offered
    Seats,
    /// Metro population at the origin
    OriginPopulation,
    /// Metro population at the destination
    DestinationPopulation,
    /// Origin latitude
    OriginLat,
    /// Origin longitude
    OriginLong,
    /// Destination latitude
    DestinationLat,
    /// Destination longitude
    DestinationLong,
}

impl Column {
    /// Stable field name used in serialized rows.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FlightDate => "flight_date",
            Self::OriginAirport => "origin_airport",
            Self::DestinationAirport => "destination_airport",
            Self::OriginCity => "origin_city",
            Self::DestinationCity => "destination_city",
            Self::Passengers => "passengers",
            Self::Seats => "seats",
            Self::OriginPopulation => "origin_population",
            Self::DestinationPopulation => "destination_population",
            Self::OriginLat => "origin_lat",
            Self::OriginLong => "origin_long",
            Self::DestinationLat => "destination_lat",
            Self::DestinationLong => "destination_long",
        }
    }

    fn extract(&self, record: &FlightRecord, format: &DateFormat) -> CellValue {
        match self {
            Self::FlightDate => CellValue::Text(format.render(record)),
            Self::OriginAirport => CellValue::Text(record.origin_airport.clone()),
            Self::DestinationAirport => CellValue::Text(record.destination_airport.clone()),
            Self::OriginCity => CellValue::Text(record.origin_city.clone()),
            Self::DestinationCity => CellValue::Text(record.destination_city.clone()),
            Self::Passengers => CellValue::Integer(record.passengers),
            Self::Seats => CellValue::Integer(record.seats),
            Self::OriginPopulation => record.origin_population.into(),
            Self::DestinationPopulation => record.destination_population.into(),
            Self::OriginLat => record.origin_lat.into(),
            Self::OriginLong => record.origin_long.into(),
            Self::DestinationLat => record.destination_lat.into(),
            Self::DestinationLong => record.destination_long.into(),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Columns of the "where does this airport fly to" table.
pub const DESTINATION_COLUMNS: [Column; 8] = [
    Column::FlightDate,
    Column::DestinationCity,
    Column::DestinationAirport,
    Column::Passengers,
    Column::Seats,
    Column::DestinationPopulation,
    Column::DestinationLat,
    Column::DestinationLong,
];

/// Columns of the "where do arrivals come from" table.
pub const ORIGIN_COLUMNS: [Column; 8] = [
    Column::FlightDate,
    Column::OriginCity,
    Column::OriginAirport,
    Column::Passengers,
    Column::Seats,
    Column::OriginPopulation,
    Column::OriginLat,
    Column::OriginLong,
];

/// A single projected value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Codes, cities and the rendered date
    Text(String),
    /// Counts and populations
    Integer(u64),
    /// Coordinates
    Float(f64),
    /// Value missing from the source data
    Null,
}

impl From<Option<u64>> for CellValue {
    fn from(v: Option<u64>) -> Self {
        v.map_or(Self::Null, Self::Integer)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Null, Self::Float)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Integer(i) => serializer.serialize_u64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Null => serializer.serialize_none(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Null => f.write_str("N/A"),
        }
    }
}

/// One display row: the requested columns with their values, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRow {
    cells: Vec<(Column, CellValue)>,
}

impl ProjectedRow {
    /// Value of `column`, or `None` if the row does not carry it.
    pub fn get(&self, column: Column) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v)
    }

    /// Columns in projection order.
    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.cells.iter().map(|(c, _)| *c)
    }

    /// Column and value pairs in projection order.
    pub fn cells(&self) -> &[(Column, CellValue)] {
        &self.cells
    }
}

// Serialized as an object whose keys follow column order.
impl Serialize for ProjectedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column.name(), value)?;
        }
        map.end()
    }
}

/// Validated strftime pattern for the date column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    /// `YYYY-MM-DD`
    pub const ISO: &'static str = "%Y-%m-%d";

    /// The [`ISO`](Self::ISO) pattern.
    pub fn iso() -> Self {
        Self {
            pattern: Self::ISO.to_string(),
        }
    }

    /// Validate a chrono strftime pattern.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for empty patterns, unknown specifiers, and
    /// specifiers a calendar date cannot fill (time of day, offsets).
    pub fn parse(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(AnalyticsError::invalid("date_format", "pattern is empty"));
        }
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(AnalyticsError::invalid(
                "date_format",
                format!("unsupported strftime pattern {pattern:?}"),
            ));
        }
        // chrono only reports missing fields when the pattern is rendered
        let mut rendered = String::new();
        if write!(rendered, "{}", NaiveDate::default().format(pattern)).is_err() {
            return Err(AnalyticsError::invalid(
                "date_format",
                format!("pattern {pattern:?} needs more than a calendar date"),
            ));
        }
        Ok(Self {
            pattern: pattern.to_string(),
        })
    }

    /// The validated strftime pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn render(&self, record: &FlightRecord) -> String {
        record.flight_date.format(&self.pattern).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::iso()
    }
}

/// Project `subset` onto `columns`, keeping row order.
pub fn project(subset: &[&FlightRecord], columns: &[Column], format: &DateFormat) -> Vec<ProjectedRow> {
    subset
        .iter()
        .map(|record| ProjectedRow {
            cells: columns
                .iter()
                .map(|column| (*column, column.extract(record, format)))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Subset;
    use crate::fixtures::flight;

    #[test]
    fn test_date_rendered_with_iso_pattern() {
        let record = flight("ORD", "LAX", "2000-03-05");
        let rows = project(&[&record], &[Column::FlightDate], &DateFormat::iso());
        assert_eq!(
            rows[0].get(Column::FlightDate),
            Some(&CellValue::Text("2000-03-05".to_string()))
        );
    }

    #[test]
    fn test_round_trip_of_retained_columns() {
        let mut a = flight("ORD", "LAX", "2000-03-05");
        a.passengers = 42;
        a.destination_population = None;
        let b = flight("ORD", "JFK", "2000-03-06");
        let subset: Subset<'_> = vec![&a, &b];

        let rows = project(&subset, &DESTINATION_COLUMNS, &DateFormat::iso());
        assert_eq!(rows.len(), 2);
        for (row, record) in rows.iter().zip(&subset) {
            assert_eq!(row.columns().collect::<Vec<_>>(), DESTINATION_COLUMNS.to_vec());
            assert_eq!(
                row.get(Column::DestinationAirport),
                Some(&CellValue::Text(record.destination_airport.clone()))
            );
            assert_eq!(row.get(Column::Passengers), Some(&CellValue::Integer(record.passengers)));
            assert_eq!(row.get(Column::Seats), Some(&CellValue::Integer(record.seats)));
            assert_eq!(
                row.get(Column::DestinationPopulation),
                Some(&CellValue::from(record.destination_population))
            );
            assert_eq!(
                row.get(Column::DestinationLat),
                Some(&CellValue::from(record.destination_lat))
            );
        }
        assert_eq!(rows[0].get(Column::DestinationPopulation), Some(&CellValue::Null));
        assert_eq!(rows[0].get(Column::OriginCity), None);
    }

    #[test]
    fn test_serializes_in_column_order() {
        let mut record = flight("ORD", "LAX", "2000-03-05");
        record.origin_lat = None;
        let rows = project(
            &[&record],
            &[Column::FlightDate, Column::OriginAirport, Column::OriginLat],
            &DateFormat::iso(),
        );
        let json = serde_json::to_string(&rows[0]).unwrap();
        assert_eq!(
            json,
            r#"{"flight_date":"2000-03-05","origin_airport":"ORD","origin_lat":null}"#
        );
    }

    #[test]
    fn test_custom_and_invalid_patterns() {
        let record = flight("ORD", "LAX", "2000-03-05");
        let format = DateFormat::parse("%b %Y").unwrap();
        let rows = project(&[&record], &[Column::FlightDate], &format);
        assert_eq!(rows[0].get(Column::FlightDate).unwrap().to_string(), "Mar 2000");

        assert!(matches!(
            DateFormat::parse("%Q"),
            Err(AnalyticsError::InvalidParameter { name: "date_format", .. })
        ));
        assert!(DateFormat::parse("").is_err());
    }

    #[test]
    fn test_time_of_day_patterns_rejected() {
        for pattern in ["%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%d %z"] {
            assert!(
                matches!(
                    DateFormat::parse(pattern),
                    Err(AnalyticsError::InvalidParameter { name: "date_format", .. })
                ),
                "{pattern} should be rejected"
            );
        }
        assert_eq!(DateFormat::parse("%d/%m/%Y").unwrap().pattern(), "%d/%m/%Y");
    }

    #[test]
    fn test_empty_subset() {
        assert!(project(&[], &ORIGIN_COLUMNS, &DateFormat::iso()).is_empty());
    }
}
