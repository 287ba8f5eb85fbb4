//! Filter engine: airport-role and year predicates over the record store.

use std::collections::HashSet;

use flight_domain::{AirportRole, FlightRecord};

use crate::store::RecordStore;

/// Ordered, possibly empty selection of records borrowed from a store.
pub type Subset<'a> = Vec<&'a FlightRecord>;

/// Predicate combination of airport role, airport code and year.
///
/// Leaving the airport unset matches every airport; leaving the year unset
/// matches every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFilter<'q> {
    role: AirportRole,
    airport: Option<&'q str>,
    year: Option<i32>,
}

impl<'q> RecordFilter<'q> {
    /// Match every record; narrow with [`airport`](Self::airport) and
    /// [`year`](Self::year).
    pub fn new(role: AirportRole) -> Self {
        Self {
            role,
            airport: None,
            year: None,
        }
    }

    /// Departures filter.
    pub fn origin() -> Self {
        Self::new(AirportRole::Origin)
    }

    /// Arrivals filter.
    pub fn destination() -> Self {
        Self::new(AirportRole::Destination)
    }

    /// Only records whose airport for this role is exactly `code`.
    #[must_use]
    pub fn airport(mut self, code: &'q str) -> Self {
        self.airport = Some(code);
        self
    }

    /// Only flights in `year`.
    #[must_use]
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Airport field the filter matches against.
    pub fn role(&self) -> AirportRole {
        self.role
    }

    /// Whether `record` passes every configured predicate.
    pub fn matches(&self, record: &FlightRecord) -> bool {
        self.airport
            .is_none_or(|code| record.airport(self.role) == code)
            && self.year.is_none_or(|year| record.year() == year)
    }

    /// Select matching records, preserving store order.
    pub fn apply<'a>(&self, store: &'a RecordStore) -> Subset<'a> {
        store.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Records where `record[role] == airport` (if given) and the flight falls
/// in `year` (if given). Unknown codes simply produce an empty subset.
pub fn filter<'a>(
    store: &'a RecordStore,
    role: AirportRole,
    airport: Option<&str>,
    year: Option<i32>,
) -> Subset<'a> {
    let mut f = RecordFilter::new(role);
    if let Some(code) = airport {
        f = f.airport(code);
    }
    if let Some(year) = year {
        f = f.year(year);
    }
    f.apply(store)
}

/// Airport codes with at least one record in `year` for the given role,
/// deduplicated, in order of first appearance.
pub fn distinct_airports_for_year(
    store: &RecordStore,
    role: AirportRole,
    year: i32,
) -> Vec<String> {
    let mut seen = HashSet::new();
    store
        .iter()
        .filter(|r| r.year() == year)
        .map(|r| r.airport(role))
        .filter(|code| seen.insert(*code))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_store;

    #[test]
    fn test_origin_and_year() {
        let store = sample_store();
        let subset = filter(&store, AirportRole::Origin, Some("ORD"), Some(2000));
        assert_eq!(subset.len(), 3);
        assert!(subset.iter().all(|r| r.origin_airport == "ORD" && r.year() == 2000));
    }

    #[test]
    fn test_preserves_store_order() {
        let store = sample_store();
        let subset = RecordFilter::origin().airport("ORD").year(2000).apply(&store);
        let dates: Vec<String> = subset.iter().map(|r| r.flight_date.to_string()).collect();
        assert_eq!(dates, vec!["2000-01-02", "2000-01-01", "2000-01-01"]);
    }

    #[test]
    fn test_without_year_spans_all_years() {
        let store = sample_store();
        let subset = filter(&store, AirportRole::Destination, Some("ORD"), None);
        let years: Vec<i32> = subset.iter().map(|r| r.year()).collect();
        assert_eq!(years, vec![2000, 1999]);
    }

    #[test]
    fn test_without_airport_matches_everything_in_year() {
        let store = sample_store();
        let subset = filter(&store, AirportRole::Origin, None, Some(2000));
        assert_eq!(subset.len(), 5);
    }

    #[test]
    fn test_unknown_airport_is_empty() {
        let store = sample_store();
        assert!(filter(&store, AirportRole::Origin, Some("ZZZ"), Some(2000)).is_empty());
        assert!(filter(&store, AirportRole::Origin, Some("ord"), Some(2000)).is_empty());
        assert!(filter(&store, AirportRole::Origin, Some("ORD"), Some(1985)).is_empty());
    }

    #[test]
    fn test_distinct_airports_first_seen_order() {
        let store = sample_store();
        assert_eq!(
            distinct_airports_for_year(&store, AirportRole::Origin, 2000),
            vec!["JFK", "ORD", "LAX"]
        );
        assert_eq!(
            distinct_airports_for_year(&store, AirportRole::Origin, 1999),
            vec!["JFK"]
        );
        assert!(distinct_airports_for_year(&store, AirportRole::Origin, 2009).is_empty());
    }

    #[test]
    fn test_store_is_untouched() {
        let store = sample_store();
        let before = store.records().to_vec();
        let _ = filter(&store, AirportRole::Origin, Some("ORD"), Some(2000));
        assert_eq!(store.records(), before.as_slice());
    }
}
