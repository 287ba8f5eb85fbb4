//! Frequency ranking of airports within a subset.

use std::collections::HashMap;

use flight_domain::{AirportRole, FlightRecord, RankedAirport};

use crate::error::{AnalyticsError, Result};

/// Record field a ranking counts values of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankKey {
    /// Count departures per airport
    OriginAirport,
    /// Count arrivals per airport
    DestinationAirport,
}

impl RankKey {
    fn value<'a>(&self, record: &'a FlightRecord) -> &'a str {
        match self {
            Self::OriginAirport => record.airport(AirportRole::Origin),
            Self::DestinationAirport => record.airport(AirportRole::Destination),
        }
    }
}

/// The `n` most frequent values of `key` in `subset`.
///
/// Sorted by count descending. Equal counts keep the order in which the
/// values first appear in the subset. Fewer than `n` distinct values
/// simply yields a shorter list.
///
/// # Errors
///
/// `InvalidParameter` when `n` is negative.
pub fn top_n(subset: &[&FlightRecord], key: RankKey, n: i64) -> Result<Vec<RankedAirport>> {
    let limit = usize::try_from(n)
        .map_err(|_| AnalyticsError::invalid("n", format!("must be non-negative, got {n}")))?;

    // Tally in first-seen order; `slots` maps a value to its tally index.
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<(&str, u64)> = Vec::new();
    for record in subset {
        let value = key.value(record);
        match slots.get(value) {
            Some(&i) => tally[i].1 += 1,
            None => {
                slots.insert(value, tally.len());
                tally.push((value, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally.truncate(limit);

    Ok(tally
        .into_iter()
        .map(|(airport, flights)| RankedAirport {
            airport: airport.to_string(),
            flights,
        })
        .collect())
}
