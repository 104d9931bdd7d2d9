//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    ActionHistoryResponse, ApplyActionRequest, HealthResponse, RecommendationsQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::VenueId;
use crate::routes::actions::ActionResult;
use crate::routes::recommendations::RecommendationReport;
use crate::services::recommender::{GenerationRequest, OptimizationFilter, PriorityFilter};
use crate::services::{action_history, apply_action, generate_recommendations};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the storage
/// backend is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Recommendations
// =============================================================================

/// GET /v1/venues/{venue_id}/recommendations
///
/// Generate the recommendation report for a venue. Supports filtering by
/// optimization category and priority, and optionally attaches
/// implementation plans.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    Query(query): Query<RecommendationsQuery>,
) -> HandlerResult<RecommendationReport> {
    let optimization_filter: OptimizationFilter = query
        .optimization_type
        .as_deref()
        .unwrap_or("all")
        .parse()
        .map_err(AppError::BadRequest)?;
    let priority_filter: PriorityFilter = query
        .priority
        .as_deref()
        .unwrap_or("all")
        .parse()
        .map_err(AppError::BadRequest)?;

    let request = GenerationRequest {
        venue_id: VenueId::new(venue_id),
        optimization_filter,
        priority_filter,
        include_plans: query.include_plan.unwrap_or(false),
    };

    let report =
        generate_recommendations(state.repository.as_ref(), &state.policy, request).await?;
    Ok(Json(report))
}

// =============================================================================
// Actions
// =============================================================================

/// POST /v1/actions
///
/// Execute an optimization action against a zone or recommendation.
pub async fn post_action(
    State(state): State<AppState>,
    Json(request): Json<ApplyActionRequest>,
) -> HandlerResult<ActionResult> {
    let result = apply_action(
        state.repository.as_ref(),
        &request.action,
        &request.target_id,
        request.parameters,
        &request.actor_id,
    )
    .await?;
    Ok(Json(result))
}

/// GET /v1/zones/{zone_id}/actions
///
/// Fetch the action history for a zone, oldest first.
pub async fn get_zone_actions(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> HandlerResult<ActionHistoryResponse> {
    let actions = action_history(state.repository.as_ref(), &zone_id).await?;
    let total = actions.len();
    Ok(Json(ActionHistoryResponse {
        target_id: zone_id,
        actions,
        total,
    }))
}
