//! Phased implementation planning.
//!
//! Expands a recommendation into a fixed three-phase rollout with derived
//! timeline and resourcing. Only computed when the caller asks for plans.

use crate::routes::plans::{EquipmentTier, ImplementationPlan, PlanPhase, PlanResources};
use crate::routes::recommendations::{Category, Recommendation};

/// Build the rollout plan for one recommendation.
pub fn build_plan(recommendation: &Recommendation) -> ImplementationPlan {
    let phases = vec![
        PlanPhase {
            name: "Planning".to_string(),
            duration: "1-2 weeks".to_string(),
            tasks: vec![
                "Confirm scope and stakeholders".to_string(),
                "Finalize budget and procurement".to_string(),
                "Schedule work around venue operations".to_string(),
            ],
        },
        PlanPhase {
            name: "Implementation".to_string(),
            duration: "2-4 weeks".to_string(),
            tasks: vec![
                "Execute the physical and configuration changes".to_string(),
                "Train affected staff".to_string(),
                "Update operating procedures".to_string(),
            ],
        },
        PlanPhase {
            name: "Validation".to_string(),
            duration: "1 week".to_string(),
            tasks: vec![
                "Compare telemetry against the targeted metrics".to_string(),
                "Collect staff and visitor feedback".to_string(),
            ],
        },
    ];

    let equipment = if recommendation.category == Category::Technology {
        EquipmentTier::High
    } else {
        EquipmentTier::Medium
    };

    ImplementationPlan {
        optimization_id: recommendation.id.to_string(),
        phases,
        timeline_weeks: recommendation.effort * 1.5,
        resources: PlanResources {
            budget: recommendation.estimated_cost,
            staff: (recommendation.effort / 2.0).ceil() as u32,
            equipment,
        },
        risks: vec![
            "Implementation delays".to_string(),
            "Budget overruns".to_string(),
            "User resistance to changed workflows".to_string(),
        ],
        success_criteria: vec![
            recommendation.metrics.expected_improvement().to_string(),
            "No service disruption during rollout".to_string(),
            "Payback achieved within the estimated period".to_string(),
        ],
    }
}
