//! Immutable, shareable record store.

use std::collections::BTreeSet;
use std::sync::Arc;

use flight_domain::FlightRecord;

/// The loaded flight-route dataset.
///
/// Records are kept in their original order behind an `Arc`, so cloning a
/// store hands out another view of the same data. There is no way to
/// mutate a store once built; reloading means building a new one.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Arc<[FlightRecord]>,
}

impl RecordStore {
    /// Take ownership of an already-parsed record sequence.
    pub fn new(records: Vec<FlightRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// All records, in dataset order.
    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    /// Iterate records in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, FlightRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years present in the dataset, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(FlightRecord::year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First record, in dataset order, departing from `code`.
    pub fn first_with_origin(&self, code: &str) -> Option<&FlightRecord> {
        self.records.iter().find(|r| r.origin_airport == code)
    }
}

impl From<Vec<FlightRecord>> for RecordStore {
    fn from(records: Vec<FlightRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a FlightRecord;
    type IntoIter = std::slice::Iter<'a, FlightRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
