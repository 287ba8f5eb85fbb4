//! Dashboard report generation for one airport/year selection.

use flight_domain::{AirportInfo, DailyCount, RankedAirport, YearlyTraffic};
use serde::Serialize;

use crate::engine::AnalyticsEngine;
use crate::error::{AnalyticsError, Result};
use crate::projection::ProjectedRow;

/// Every view of the dashboard for a selected airport and year.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// RFC 3339 timestamp of generation
    pub generated_at: String,
    /// Selected airport code
    pub airport: String,
    /// Selected year
    pub year: i32,
    /// City and coordinates, if the airport has any departures
    pub airport_info: Option<AirportInfo>,
    /// Departure airports active in the year
    pub available_airports: Vec<String>,
    /// Daily departures in the year
    pub departures_by_day: Vec<DailyCount>,
    /// Daily arrivals in the year
    pub arrivals_by_day: Vec<DailyCount>,
    /// Routes leaving the airport
    pub destination_rows: Vec<ProjectedRow>,
    /// Routes arriving at the airport
    pub origin_rows: Vec<ProjectedRow>,
    /// Busiest departure airports of the year
    pub top_airports: Vec<RankedAirport>,
    /// Departures and arrivals for every year with traffic
    pub yearly_traffic: Vec<YearlyTraffic>,
}

impl AnalyticsEngine {
    /// Assemble the full dashboard.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `top_n` is negative.
    pub fn dashboard(&self, airport: &str, year: i32, top_n: i64) -> Result<DashboardReport> {
        let top_airports = self.top_airports(year, top_n)?;

        Ok(DashboardReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            airport: airport.to_string(),
            year,
            airport_info: self.airport_info(airport),
            available_airports: self.available_airports(year),
            departures_by_day: self.departures_by_day(airport, year),
            arrivals_by_day: self.arrivals_by_day(airport, year),
            destination_rows: self.destination_rows(airport, year),
            origin_rows: self.origin_rows(airport, year),
            top_airports,
            yearly_traffic: self.yearly_traffic(airport),
        })
    }

    /// Dashboard as pretty-printed JSON.
    pub fn dashboard_json(&self, airport: &str, year: i32, top_n: i64) -> Result<String> {
        let report = self.dashboard(airport, year, top_n)?;
        serde_json::to_string_pretty(&report).map_err(|e| AnalyticsError::Conversion(e.to_string()))
    }

    /// Dashboard as a Markdown document.
    pub fn dashboard_markdown(&self, airport: &str, year: i32, top_n: i64) -> Result<String> {
        let report = self.dashboard(airport, year, top_n)?;
        Ok(render_markdown(&report))
    }
}

fn render_markdown(report: &DashboardReport) -> String {
    let mut md = String::new();
    md.push_str(&format!(
        "# Flight Data Dashboard: {} ({})\n\n",
        escape_cell(&report.airport),
        report.year
    ));
    md.push_str(&format!("**Generated:** {}\n\n", report.generated_at));

    md.push_str("## Airport\n\n");
    md.push_str("| Field | Value |\n");
    md.push_str("|-------|-------|\n");
    match report.airport_info {
        Some(ref info) => {
            md.push_str(&format!("| City | {} |\n", escape_cell(&info.city)));
            match info.location() {
                Some(point) => {
                    md.push_str(&format!("| Latitude | {:.4} |\n", point.latitude));
                    md.push_str(&format!("| Longitude | {:.4} |\n", point.longitude));
                }
                None => md.push_str("| Location | not available |\n"),
            }
        }
        None => md.push_str("| City | Unknown |\n"),
    }
    md.push_str(&format!(
        "| Departing routes in {} | {} |\n",
        report.year,
        report.destination_rows.len()
    ));
    md.push_str(&format!(
        "| Arriving routes in {} | {} |\n\n",
        report.year,
        report.origin_rows.len()
    ));

    push_daily(&mut md, "Departures", &report.departures_by_day);
    push_daily(&mut md, "Arrivals", &report.arrivals_by_day);

    if !report.top_airports.is_empty() {
        md.push_str(&format!("## Top {} Airports\n\n", report.top_airports.len()));
        md.push_str("| Rank | Airport | Number of Flights |\n");
        md.push_str("|------|---------|-------------------|\n");
        for (i, ranked) in report.top_airports.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                i + 1,
                escape_cell(&ranked.airport),
                ranked.flights
            ));
        }
        md.push('\n');
    }

    if !report.yearly_traffic.is_empty() {
        md.push_str("## Departures and Arrivals Over Time\n\n");
        md.push_str("| Year | Departures | Arrivals |\n");
        md.push_str("|------|------------|----------|\n");
        for t in &report.yearly_traffic {
            md.push_str(&format!("| {} | {} | {} |\n", t.year, t.departures, t.arrivals));
        }
        md.push('\n');
    }

    md
}

fn push_daily(md: &mut String, title: &str, series: &[DailyCount]) {
    if series.is_empty() {
        return;
    }
    md.push_str(&format!("## {title} by Date\n\n"));
    md.push_str("| Date | Number of Flights |\n");
    md.push_str("|------|-------------------|\n");
    for day in series {
        md.push_str(&format!("| {} | {} |\n", day.date.format("%Y-%m-%d"), day.count));
    }
    md.push('\n');
}

// A bare `|` would end the table cell early.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
