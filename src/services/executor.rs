//! Action execution: applies optimization actions against zones and records
//! the lifecycle transitions of recommendations.
//!
//! Configuration writes go through the repository's idempotent upsert, so
//! re-running an apply action with the same parameters leaves a single
//! config row. Every successful action is also appended to the action log.

use chrono::Utc;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::db::ZoneRepository;
use crate::models::{OptimizationStamp, ZoneConfig};
use crate::routes::actions::{
    ActionRecord, ActionResult, ActionState, CapacityOptimizationParams, OptimizationAction,
    ScheduleParams, ThresholdUpdateParams,
};
use crate::routes::recommendations::{Category, RecommendationId};
use crate::services::error::{EngineError, EngineResult};

/// Execute one optimization action against a target.
///
/// `target_id` is a zone id for the apply actions and a recommendation id
/// for `mark_implemented` and `schedule_implementation`. All validation
/// happens before any write; a failed action mutates nothing.
pub async fn apply_action(
    repo: &dyn ZoneRepository,
    action_name: &str,
    target_id: &str,
    parameters: Value,
    actor_id: &str,
) -> EngineResult<ActionResult> {
    let action: OptimizationAction = action_name
        .parse()
        .map_err(EngineError::UnknownAction)?;

    if target_id.trim().is_empty() {
        return Err(EngineError::Validation("target id must not be empty".to_string()));
    }
    if actor_id.trim().is_empty() {
        return Err(EngineError::Validation("actor id must not be empty".to_string()));
    }

    let state = match action {
        OptimizationAction::ApplyCapacityOptimization => {
            apply_capacity(repo, target_id, &parameters, actor_id).await?
        }
        OptimizationAction::ApplyFlowOptimization => {
            apply_thresholds(repo, target_id, &parameters, actor_id, Category::Flow).await?
        }
        OptimizationAction::ApplySafetyOptimization => {
            apply_thresholds(repo, target_id, &parameters, actor_id, Category::Safety).await?
        }
        OptimizationAction::ApplyLayoutOptimization => {
            apply_thresholds(repo, target_id, &parameters, actor_id, Category::Layout).await?
        }
        OptimizationAction::MarkImplemented => mark_implemented(repo, target_id).await?,
        OptimizationAction::ScheduleImplementation => {
            schedule_implementation(repo, target_id, &parameters).await?
        }
    };

    let timestamp = Utc::now();
    let record = ActionRecord {
        id: Uuid::new_v4(),
        target_id: target_id.to_string(),
        action,
        parameters,
        actor_id: actor_id.to_string(),
        timestamp,
        state,
    };
    repo.record_action(record).await?;

    info!(action = action.as_str(), target_id, actor_id, ?state, "executed action");

    Ok(ActionResult {
        action,
        result: state,
        actor_id: actor_id.to_string(),
        timestamp,
    })
}

fn decode_params<T: serde::de::DeserializeOwned>(parameters: &Value) -> EngineResult<T> {
    serde_json::from_value(parameters.clone())
        .map_err(|e| EngineError::Validation(format!("invalid action parameters: {}", e)))
}

fn stamp(config: &mut ZoneConfig, actor_id: &str, category: Category) {
    config.optimization_stamp = Some(OptimizationStamp {
        last_optimized: Utc::now(),
        optimized_by: actor_id.to_string(),
        optimization_type: category,
    });
}

async fn apply_capacity(
    repo: &dyn ZoneRepository,
    zone_id: &str,
    parameters: &Value,
    actor_id: &str,
) -> EngineResult<ActionState> {
    let params: CapacityOptimizationParams = decode_params(parameters)?;
    if params.new_capacity == 0 {
        return Err(EngineError::Validation("new capacity must be positive".to_string()));
    }

    let snapshot = repo.fetch_zone_snapshot(&zone_id.into()).await?;
    let mut config = snapshot.config;
    config.max_capacity = params.new_capacity;
    config.alert_thresholds.extend(params.alert_thresholds);
    stamp(&mut config, actor_id, Category::Capacity);
    repo.upsert_zone_config(config).await?;
    Ok(ActionState::Applied)
}

async fn apply_thresholds(
    repo: &dyn ZoneRepository,
    zone_id: &str,
    parameters: &Value,
    actor_id: &str,
    category: Category,
) -> EngineResult<ActionState> {
    let params: ThresholdUpdateParams = decode_params(parameters)?;

    let snapshot = repo.fetch_zone_snapshot(&zone_id.into()).await?;
    let mut config = snapshot.config;
    config.alert_thresholds.extend(params.alert_thresholds);
    stamp(&mut config, actor_id, category);
    repo.upsert_zone_config(config).await?;
    Ok(ActionState::Applied)
}

async fn mark_implemented(repo: &dyn ZoneRepository, target_id: &str) -> EngineResult<ActionState> {
    let rec_id: RecommendationId = target_id
        .parse()
        .map_err(|e: String| EngineError::Validation(format!("invalid optimization id: {}", e)))?;
    // The referenced zone must still exist before we record the transition.
    repo.fetch_zone_snapshot(&rec_id.zone_id).await?;
    Ok(ActionState::Implemented)
}

async fn schedule_implementation(
    repo: &dyn ZoneRepository,
    target_id: &str,
    parameters: &Value,
) -> EngineResult<ActionState> {
    let params: ScheduleParams = decode_params(parameters)?;
    let rec_id: RecommendationId = target_id
        .parse()
        .map_err(|e: String| EngineError::Validation(format!("invalid optimization id: {}", e)))?;
    repo.fetch_zone_snapshot(&rec_id.zone_id).await?;

    info!(
        optimization_id = target_id,
        scheduled_date = %params.scheduled_date.to_rfc3339(),
        "scheduled implementation"
    );
    Ok(ActionState::Scheduled)
}

/// Fetch the action history for a zone or recommendation, oldest first.
pub async fn action_history(
    repo: &dyn ZoneRepository,
    target_id: &str,
) -> EngineResult<Vec<ActionRecord>> {
    if target_id.trim().is_empty() {
        return Err(EngineError::Validation("target id must not be empty".to_string()));
    }
    Ok(repo.fetch_actions_for_target(target_id).await?)
}
