//! Time-series aggregation over record subsets.
//!
//! Series are sparse: a day or year without flights has no entry. Callers
//! that need a dense calendar run [`fill_daily_gaps`] on the result.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use flight_domain::{DailyCount, FlightRecord, YearCount, YearlyTraffic};

/// Flight count per distinct `flight_date`, ascending by date.
pub fn group_by_day(subset: &[&FlightRecord]) -> Vec<DailyCount> {
    let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in subset {
        *buckets.entry(record.flight_date).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

/// Flight count per calendar year, ascending by year.
pub fn group_by_year(subset: &[&FlightRecord]) -> Vec<YearCount> {
    let mut buckets: BTreeMap<i32, u64> = BTreeMap::new();
    for record in subset {
        *buckets.entry(record.year()).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// Align departure and arrival series on year.
///
/// Every year present in either input appears exactly once; the side
/// without data for that year reads zero.
pub fn outer_join_years(departures: &[YearCount], arrivals: &[YearCount]) -> Vec<YearlyTraffic> {
    let mut joined: BTreeMap<i32, YearlyTraffic> = BTreeMap::new();
    for d in departures {
        joined.entry(d.year).or_insert_with(|| empty_year(d.year)).departures += d.count;
    }
    for a in arrivals {
        joined.entry(a.year).or_insert_with(|| empty_year(a.year)).arrivals += a.count;
    }
    joined.into_values().collect()
}

fn empty_year(year: i32) -> YearlyTraffic {
    YearlyTraffic {
        year,
        departures: 0,
        arrivals: 0,
    }
}

/// Expand a sparse daily series into one entry per day in `from..=to`.
///
/// Days missing from `series` get a zero count; entries outside the range
/// are dropped. An inverted range yields an empty series.
pub fn fill_daily_gaps(series: &[DailyCount], from: NaiveDate, to: NaiveDate) -> Vec<DailyCount> {
    let counts: BTreeMap<NaiveDate, u64> = series.iter().map(|d| (d.date, d.count)).collect();
    from.iter_days()
        .take_while(|day| *day <= to)
        .map(|date| DailyCount {
            date,
            count: counts.get(&date).copied().unwrap_or(0),
        })
        .collect()
}
