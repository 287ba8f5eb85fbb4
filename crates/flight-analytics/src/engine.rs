//! Query facade over an in-memory flight dataset.

use flight_domain::{AirportInfo, AirportRole, DailyCount, RankedAirport, YearlyTraffic};

use crate::error::Result;
use crate::filter::{self, RecordFilter};
use crate::projection::{self, DateFormat, ProjectedRow, DESTINATION_COLUMNS, ORIGIN_COLUMNS};
use crate::ranking::{self, RankKey};
use crate::store::RecordStore;
use crate::timeseries;

/// Ranking size used when the caller does not choose one.
pub const DEFAULT_TOP_N: i64 = 10;

/// Entry point for every dashboard query.
///
/// The engine holds a handle to an immutable [`RecordStore`] and recomputes
/// each answer from scratch on every call; identical parameters on the same
/// store always give identical results. Airports or years without data
/// yield empty results, never errors.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    store: RecordStore,
}

impl AnalyticsEngine {
    /// Create an engine over an already-loaded store.
    pub fn new(store: RecordStore) -> Self {
        tracing::debug!(records = store.len(), "Analytics engine created");
        Self { store }
    }

    /// The underlying dataset.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Flights departing `airport` per day of `year`.
    pub fn departures_by_day(&self, airport: &str, year: i32) -> Vec<DailyCount> {
        let subset = RecordFilter::origin().airport(airport).year(year).apply(&self.store);
        let series = timeseries::group_by_day(&subset);
        tracing::debug!(airport, year, days = series.len(), "Departures by day");
        series
    }

    /// Flights arriving at `airport` per day of `year`.
    pub fn arrivals_by_day(&self, airport: &str, year: i32) -> Vec<DailyCount> {
        let subset = RecordFilter::destination().airport(airport).year(year).apply(&self.store);
        let series = timeseries::group_by_day(&subset);
        tracing::debug!(airport, year, days = series.len(), "Arrivals by day");
        series
    }

    /// Routes leaving `airport` in `year`, as destination display rows.
    pub fn destination_rows(&self, airport: &str, year: i32) -> Vec<ProjectedRow> {
        let subset = RecordFilter::origin().airport(airport).year(year).apply(&self.store);
        let rows = projection::project(&subset, &DESTINATION_COLUMNS, &DateFormat::iso());
        tracing::debug!(airport, year, rows = rows.len(), "Destination rows");
        rows
    }

    /// Routes arriving at `airport` in `year`, as origin display rows.
    pub fn origin_rows(&self, airport: &str, year: i32) -> Vec<ProjectedRow> {
        let subset = RecordFilter::destination().airport(airport).year(year).apply(&self.store);
        let rows = projection::project(&subset, &ORIGIN_COLUMNS, &DateFormat::iso());
        tracing::debug!(airport, year, rows = rows.len(), "Origin rows");
        rows
    }

    /// Busiest departure airports in `year`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `n` is negative.
    pub fn top_airports(&self, year: i32, n: i64) -> Result<Vec<RankedAirport>> {
        let subset = RecordFilter::origin().year(year).apply(&self.store);
        let ranked = ranking::top_n(&subset, RankKey::OriginAirport, n)?;
        tracing::debug!(year, n, returned = ranked.len(), "Top airports");
        Ok(ranked)
    }

    /// Departures and arrivals of `airport` for every year it has traffic.
    pub fn yearly_traffic(&self, airport: &str) -> Vec<YearlyTraffic> {
        let departures = RecordFilter::origin().airport(airport).apply(&self.store);
        let arrivals = RecordFilter::destination().airport(airport).apply(&self.store);
        let traffic = timeseries::outer_join_years(
            &timeseries::group_by_year(&departures),
            &timeseries::group_by_year(&arrivals),
        );
        tracing::debug!(airport, years = traffic.len(), "Yearly traffic");
        traffic
    }

    /// Display details for `airport`, from the first record departing it.
    pub fn airport_info(&self, airport: &str) -> Option<AirportInfo> {
        self.store.first_with_origin(airport).map(AirportInfo::from_origin)
    }

    /// Departure airports active in `year`, in first-seen order.
    pub fn available_airports(&self, year: i32) -> Vec<String> {
        filter::distinct_airports_for_year(&self.store, AirportRole::Origin, year)
    }

    /// Years present in the dataset, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.store.years()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;
    use crate::fixtures::{date, flight, sample_store};
    use crate::projection::{CellValue, Column};

    fn engine() -> AnalyticsEngine {
        AnalyticsEngine::new(sample_store())
    }

    #[test]
    fn test_departures_by_day_scenario() {
        assert_eq!(
            engine().departures_by_day("ORD", 2000),
            vec![
                DailyCount { date: date("2000-01-01"), count: 2 },
                DailyCount { date: date("2000-01-02"), count: 1 },
            ]
        );
    }

    #[test]
    fn test_unknown_parameters_yield_empty_results() {
        let engine = engine();
        assert!(engine.departures_by_day("ZZZ", 2000).is_empty());
        assert!(engine.departures_by_day("ORD", 1990).is_empty());
        assert!(engine.arrivals_by_day("ZZZ", 2000).is_empty());
        assert!(engine.destination_rows("ZZZ", 2000).is_empty());
        assert!(engine.origin_rows("ORD", 2005).is_empty());
        assert!(engine.top_airports(1985, 10).unwrap().is_empty());
        assert!(engine.yearly_traffic("ZZZ").is_empty());
        assert!(engine.airport_info("ZZZ").is_none());
    }

    #[test]
    fn test_arrivals_by_day() {
        assert_eq!(
            engine().arrivals_by_day("ORD", 2000),
            vec![DailyCount { date: date("2000-02-10"), count: 1 }]
        );
    }

    #[test]
    fn test_destination_and_origin_rows() {
        let engine = engine();
        let rows = engine.destination_rows("ORD", 2000);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0].get(Column::DestinationAirport),
            Some(&CellValue::Text("JFK".to_string()))
        );
        assert_eq!(
            rows[0].get(Column::FlightDate),
            Some(&CellValue::Text("2000-01-02".to_string()))
        );
        assert_eq!(rows[0].columns().collect::<Vec<_>>(), DESTINATION_COLUMNS.to_vec());

        let rows = engine.origin_rows("ORD", 2000);
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].get(Column::OriginCity),
            Some(&CellValue::Text("LAX City".to_string()))
        );
        assert_eq!(rows[0].columns().collect::<Vec<_>>(), ORIGIN_COLUMNS.to_vec());
    }

    #[test]
    fn test_top_airports_ties_and_validation() {
        let mut records = Vec::new();
        records.extend((0..50).map(|_| flight("ORD", "SFO", "2000-04-01")));
        records.extend((0..80).map(|_| flight("JFK", "SFO", "2000-04-02")));
        records.extend((0..80).map(|_| flight("LAX", "SFO", "2000-04-03")));
        records.extend((0..99).map(|_| flight("ORD", "SFO", "2001-04-03")));
        let engine = AnalyticsEngine::new(RecordStore::new(records));

        let top = engine.top_airports(2000, 2).unwrap();
        let codes: Vec<(&str, u64)> = top.iter().map(|r| (r.airport.as_str(), r.flights)).collect();
        assert_eq!(codes, vec![("JFK", 80), ("LAX", 80)]);

        assert!(matches!(
            engine.top_airports(2000, -1),
            Err(AnalyticsError::InvalidParameter { name: "n", .. })
        ));
    }

    #[test]
    fn test_yearly_traffic_aligns_on_year() {
        assert_eq!(
            engine().yearly_traffic("ORD"),
            vec![
                YearlyTraffic { year: 1999, departures: 0, arrivals: 1 },
                YearlyTraffic { year: 2000, departures: 3, arrivals: 1 },
                YearlyTraffic { year: 2001, departures: 1, arrivals: 0 },
            ]
        );
    }

    #[test]
    fn test_airport_info_first_match() {
        let info = engine().airport_info("ORD").unwrap();
        assert_eq!(info.code, "ORD");
        assert_eq!(info.city, "ORD City");
        assert_eq!(info.latitude, Some(41.0));
    }

    #[test]
    fn test_available_airports_and_years() {
        let engine = engine();
        assert_eq!(engine.available_airports(2000), vec!["JFK", "ORD", "LAX"]);
        assert_eq!(engine.years(), vec![1999, 2000, 2001]);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let engine = engine();
        let snapshot = engine.store().records().to_vec();

        assert_eq!(engine.departures_by_day("ORD", 2000), engine.departures_by_day("ORD", 2000));
        assert_eq!(engine.arrivals_by_day("ORD", 2000), engine.arrivals_by_day("ORD", 2000));
        assert_eq!(engine.destination_rows("ORD", 2000), engine.destination_rows("ORD", 2000));
        assert_eq!(engine.origin_rows("ORD", 2000), engine.origin_rows("ORD", 2000));
        assert_eq!(
            engine.top_airports(2000, 10).unwrap(),
            engine.top_airports(2000, 10).unwrap()
        );
        assert_eq!(engine.yearly_traffic("ORD"), engine.yearly_traffic("ORD"));
        assert_eq!(engine.store().records(), snapshot.as_slice());
    }
}
