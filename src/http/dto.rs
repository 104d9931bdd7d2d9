//! Data Transfer Objects for the HTTP API.
//!
//! Request/response serialization types for the REST API. Report and action
//! payloads are re-exported from the routes module since they already derive
//! Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::routes::actions::{ActionRecord, ActionResult};
pub use crate::routes::plans::ImplementationPlan;
pub use crate::routes::recommendations::{Recommendation, RecommendationReport};
pub use crate::routes::roi::RoiEstimate;
pub use crate::routes::scores::OptimizationScore;

/// Query parameters for the recommendations endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecommendationsQuery {
    /// Category filter: "all" (default) or a category name
    #[serde(default)]
    pub optimization_type: Option<String>,
    /// Priority filter: "all" (default) or a priority level
    #[serde(default)]
    pub priority: Option<String>,
    /// Whether to include implementation plans (default: false)
    #[serde(default)]
    pub include_plan: Option<bool>,
}

/// Request body for executing an optimization action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyActionRequest {
    /// Action name, e.g. "apply_capacity_optimization"
    pub action: String,
    /// Zone id or optimization id, depending on the action
    #[serde(alias = "targetId")]
    pub target_id: String,
    /// Action-specific parameters
    #[serde(default)]
    pub parameters: serde_json::Value,
    /// Identifier of the operator executing the action
    #[serde(alias = "actorId")]
    pub actor_id: String,
}

/// Action history response for a target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionHistoryResponse {
    pub target_id: String,
    pub actions: Vec<ActionRecord>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend status
    pub repository: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_action_request_accepts_camel_case() {
        let request: ApplyActionRequest = serde_json::from_value(serde_json::json!({
            "action": "mark_implemented",
            "targetId": "capacity:z1:increase_capacity",
            "actorId": "ops-1"
        }))
        .unwrap();
        assert_eq!(request.target_id, "capacity:z1:increase_capacity");
        assert_eq!(request.actor_id, "ops-1");
        assert!(request.parameters.is_null());
    }

    #[test]
    fn test_recommendations_query_defaults() {
        let query: RecommendationsQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(query.optimization_type.is_none());
        assert!(query.priority.is_none());
        assert!(query.include_plan.is_none());
    }
}
