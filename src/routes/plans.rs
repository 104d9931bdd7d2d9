use serde::{Deserialize, Serialize};

// =========================================================
// Implementation plan types
// =========================================================

/// Equipment tier a rollout requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentTier {
    Medium,
    High,
}

/// One phase of a rollout plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanPhase {
    pub name: String,
    pub duration: String,
    pub tasks: Vec<String>,
}

/// Resources a rollout plan requires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResources {
    /// Budget equals the recommendation's estimated cost.
    pub budget: f64,
    pub staff: u32,
    pub equipment: EquipmentTier,
}

/// Phased rollout plan for a single recommendation. Derived, ephemeral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImplementationPlan {
    /// The recommendation this plan expands.
    pub optimization_id: String,
    pub phases: Vec<PlanPhase>,
    /// Overall timeline in weeks.
    pub timeline_weeks: f64,
    pub resources: PlanResources,
    pub risks: Vec<String>,
    pub success_criteria: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_tier_serialization() {
        assert_eq!(serde_json::to_string(&EquipmentTier::High).unwrap(), "\"High\"");
        assert_eq!(serde_json::to_string(&EquipmentTier::Medium).unwrap(), "\"Medium\"");
    }
}
