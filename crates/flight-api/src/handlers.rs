//! # Query Handlers
//!
//! Read-only endpoints over the analytics engine. Unknown airports and
//! empty years answer with empty collections; only the airport detail
//! endpoint reports 404, since it returns a single object.

use axum::extract::{FromRequestParts, Path, Query, State};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use flight_analytics::{DashboardReport, ProjectedRow};
use flight_domain::{AirportInfo, DailyCount, RankedAirport, YearlyTraffic};

use crate::context::ApiContext;
use crate::error::{ApiError, ApiResult};

/// [`Query`] whose rejection is [`ApiError::InvalidInput`].
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(params))
    }
}

/// `?year=` parameter
#[derive(Debug, Default, Deserialize)]
pub struct YearParams {
    pub year: Option<i32>,
}

/// `?year=&n=` parameters
#[derive(Debug, Default, Deserialize)]
pub struct RankingParams {
    pub year: Option<i32>,
    pub n: Option<i64>,
}

/// `?airport=&year=&n=` parameters
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub airport: Option<String>,
    pub year: Option<i32>,
    pub n: Option<i64>,
}

/// Airports selectable for a year.
#[derive(Debug, Serialize)]
pub struct AirportList {
    pub year: i32,
    pub airports: Vec<String>,
}

// =========================================================================
// DATASET
// =========================================================================

pub async fn years(State(ctx): State<ApiContext>) -> Json<Vec<i32>> {
    Json(ctx.engine.years())
}

pub async fn available_airports(
    State(ctx): State<ApiContext>,
    QueryParams(params): QueryParams<YearParams>,
) -> Json<AirportList> {
    let year = params.year.unwrap_or(ctx.defaults.year);
    Json(AirportList {
        year,
        airports: ctx.engine.available_airports(year),
    })
}

// =========================================================================
// AIRPORT QUERIES
// =========================================================================

pub async fn airport_info(
    State(ctx): State<ApiContext>,
    Path(code): Path<String>,
) -> ApiResult<Json<AirportInfo>> {
    ctx.engine
        .airport_info(&code)
        .map(Json)
        .ok_or(ApiError::NotFound {
            entity_type: "airport",
            id: code,
        })
}

pub async fn departures(
    State(ctx): State<ApiContext>,
    Path(code): Path<String>,
    QueryParams(params): QueryParams<YearParams>,
) -> Json<Vec<DailyCount>> {
    let year = params.year.unwrap_or(ctx.defaults.year);
    Json(ctx.engine.departures_by_day(&code, year))
}

pub async fn arrivals(
    State(ctx): State<ApiContext>,
    Path(code): Path<String>,
    QueryParams(params): QueryParams<YearParams>,
) -> Json<Vec<DailyCount>> {
    let year = params.year.unwrap_or(ctx.defaults.year);
    Json(ctx.engine.arrivals_by_day(&code, year))
}

pub async fn destinations(
    State(ctx): State<ApiContext>,
    Path(code): Path<String>,
    QueryParams(params): QueryParams<YearParams>,
) -> Json<Vec<ProjectedRow>> {
    let year = params.year.unwrap_or(ctx.defaults.year);
    Json(ctx.engine.destination_rows(&code, year))
}

pub async fn origins(
    State(ctx): State<ApiContext>,
    Path(code): Path<String>,
    QueryParams(params): QueryParams<YearParams>,
) -> Json<Vec<ProjectedRow>> {
    let year = params.year.unwrap_or(ctx.defaults.year);
    Json(ctx.engine.origin_rows(&code, year))
}

pub async fn traffic(
    State(ctx): State<ApiContext>,
    Path(code): Path<String>,
) -> Json<Vec<YearlyTraffic>> {
    Json(ctx.engine.yearly_traffic(&code))
}

// =========================================================================
// RANKING & DASHBOARD
// =========================================================================

pub async fn top_airports(
    State(ctx): State<ApiContext>,
    QueryParams(params): QueryParams<RankingParams>,
) -> ApiResult<Json<Vec<RankedAirport>>> {
    let year = params.year.unwrap_or(ctx.defaults.year);
    let n = params.n.unwrap_or(ctx.defaults.top_n);
    Ok(Json(ctx.engine.top_airports(year, n)?))
}

pub async fn dashboard(
    State(ctx): State<ApiContext>,
    QueryParams(params): QueryParams<DashboardParams>,
) -> ApiResult<Json<DashboardReport>> {
    let airport = params.airport.unwrap_or_else(|| ctx.defaults.airport.clone());
    let year = params.year.unwrap_or(ctx.defaults.year);
    let n = params.n.unwrap_or(ctx.defaults.top_n);
    if airport.is_empty() {
        return Err(ApiError::InvalidInput("airport must not be empty".to_string()));
    }

    tracing::debug!(%airport, year, n, "Building dashboard");
    Ok(Json(ctx.engine.dashboard(&airport, year, n)?))
}
