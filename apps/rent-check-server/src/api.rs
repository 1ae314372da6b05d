//! API handlers for the rent-check server

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use rent_check::CityInfo;
use serde::Serialize;
use shared_types::{CheckRentRequest, CheckRentResponse, LeaseData};
use tracing::{debug, info};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "rent-check-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// City list response
#[derive(Serialize)]
pub struct CityListResponse {
    pub success: bool,
    pub cities: Vec<CityInfo>,
}

/// Handler: GET /api/cities
pub async fn handle_list_cities(State(state): State<AppState>) -> Json<CityListResponse> {
    Json(CityListResponse {
        success: true,
        cities: state.generator.registry().cities(),
    })
}

/// Handler: POST /api/check-rent
pub async fn handle_check_rent(
    State(state): State<AppState>,
    payload: Result<Json<CheckRentRequest>, JsonRejection>,
) -> Result<Json<CheckRentResponse>, ServerError> {
    let Json(req) = payload.map_err(|rejection| {
        debug!(%rejection, "unreadable check-rent body");
        ServerError::InvalidRequest("Données du bail manquantes ou invalides.".to_string())
    })?;

    validate_lease(&req.lease_data)?;

    info!(
        "Rent check: postal_code={}, rooms={}, furnished={}",
        req.lease_data.postal_code, req.lease_data.number_of_rooms, req.lease_data.furnished
    );

    let report = state
        .generator
        .generate_report(&req.lease_data, req.clause_issues)
        .await?;

    Ok(Json(CheckRentResponse {
        success: true,
        report,
    }))
}

/// Reject leases the engine cannot evaluate
fn validate_lease(lease: &LeaseData) -> Result<(), ServerError> {
    if lease.address.trim().is_empty() || lease.postal_code.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "Adresse et code postal requis.".to_string(),
        ));
    }

    // NaN fails both comparisons and is rejected too
    if !(lease.rent_excluding_charges > 0.0) {
        return Err(ServerError::InvalidRequest(
            "Le loyer hors charges doit être supérieur à 0.".to_string(),
        ));
    }

    if !(lease.surface > 0.0) {
        return Err(ServerError::InvalidRequest(
            "La surface doit être supérieure à 0.".to_string(),
        ));
    }

    Ok(())
}
