use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =========================================================
// Action execution types
// =========================================================

/// Recognized optimization actions. A recommendation is implicitly in the
/// PROPOSED state until one of these is executed against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationAction {
    ApplyCapacityOptimization,
    ApplyFlowOptimization,
    ApplySafetyOptimization,
    ApplyLayoutOptimization,
    MarkImplemented,
    ScheduleImplementation,
}

impl OptimizationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationAction::ApplyCapacityOptimization => "apply_capacity_optimization",
            OptimizationAction::ApplyFlowOptimization => "apply_flow_optimization",
            OptimizationAction::ApplySafetyOptimization => "apply_safety_optimization",
            OptimizationAction::ApplyLayoutOptimization => "apply_layout_optimization",
            OptimizationAction::MarkImplemented => "mark_implemented",
            OptimizationAction::ScheduleImplementation => "schedule_implementation",
        }
    }
}

impl FromStr for OptimizationAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apply_capacity_optimization" => Ok(OptimizationAction::ApplyCapacityOptimization),
            "apply_flow_optimization" => Ok(OptimizationAction::ApplyFlowOptimization),
            "apply_safety_optimization" => Ok(OptimizationAction::ApplySafetyOptimization),
            "apply_layout_optimization" => Ok(OptimizationAction::ApplyLayoutOptimization),
            "mark_implemented" => Ok(OptimizationAction::MarkImplemented),
            "schedule_implementation" => Ok(OptimizationAction::ScheduleImplementation),
            _ => Err(format!("Unknown action: {}", s)),
        }
    }
}

/// Resulting state of an executed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionState {
    Applied,
    Scheduled,
    Implemented,
}

/// Persisted record of one executed action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: Uuid,
    /// Zone id or recommendation id, depending on the action.
    pub target_id: String,
    pub action: OptimizationAction,
    pub parameters: serde_json::Value,
    pub actor_id: String,
    pub timestamp: DateTime<Utc>,
    pub state: ActionState,
}

/// Response payload for an executed action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResult {
    pub action: OptimizationAction,
    pub result: ActionState,
    pub actor_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Parameters for `apply_capacity_optimization`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityOptimizationParams {
    #[serde(alias = "newCapacity")]
    pub new_capacity: u32,
    #[serde(default, alias = "alertThresholds")]
    pub alert_thresholds: BTreeMap<String, f64>,
}

/// Parameters for the flow/safety/layout apply actions: named threshold
/// updates merged into the zone configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdUpdateParams {
    #[serde(default, alias = "alertThresholds")]
    pub alert_thresholds: BTreeMap<String, f64>,
}

/// Parameters for `schedule_implementation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleParams {
    #[serde(alias = "scheduledDate")]
    pub scheduled_date: DateTime<Utc>,
}

/// Route function name constant for action execution
pub const APPLY_ACTION: &str = "apply_action";
