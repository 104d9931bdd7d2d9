//! Layout analyzer.
//!
//! Short stays in a busy zone point at a layout that moves people through
//! without engaging them; a low efficiency score points at operational
//! friction in how the space is run.

use crate::models::ZoneSnapshot;
use crate::routes::recommendations::{
    Category, Priority, Recommendation, RecommendationId, RecommendationMetrics, Subtype,
};
use crate::services::policy::{payback_months, AnalysisPolicy};

const ENGAGEMENT_COST: f64 = 7_500.0;
const ENGAGEMENT_SAVINGS: f64 = 14_000.0;
const EFFICIENCY_COST: f64 = 9_000.0;
const EFFICIENCY_SAVINGS: f64 = 16_000.0;

pub fn analyze(snapshot: &ZoneSnapshot, policy: &AnalysisPolicy) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let avg_stay = snapshot.avg_stay_minutes();
    let avg_utilization = snapshot.avg_utilization();
    let avg_efficiency = snapshot.avg_efficiency();

    if avg_stay < policy.short_stay_minutes && avg_utilization > policy.engagement_utilization {
        recommendations.push(Recommendation {
            id: RecommendationId::new(
                Category::Layout,
                snapshot.zone_id.clone(),
                Subtype::LayoutEngagement,
            ),
            category: Category::Layout,
            zone_id: snapshot.zone_id.clone(),
            title: format!("Optimize layout for engagement in {}", snapshot.name),
            description: format!(
                "Visitors stay only {:.0} minutes on average despite {:.0}% utilization; \
                 the zone is a pass-through rather than a destination.",
                avg_stay,
                avg_utilization * 100.0
            ),
            priority: Priority::Medium,
            impact: 6.5,
            effort: 6.0,
            estimated_cost: ENGAGEMENT_COST,
            estimated_savings: ENGAGEMENT_SAVINGS,
            payback_months: payback_months(ENGAGEMENT_COST, ENGAGEMENT_SAVINGS),
            actions: vec![
                "Rearrange anchor attractions deeper into the zone".to_string(),
                "Add seating and dwell points along main paths".to_string(),
            ],
            metrics: RecommendationMetrics::Layout {
                current: avg_stay,
                target: policy.short_stay_minutes + 5.0,
                expected_improvement: format!(
                    "Extend average stay time from {:.0} to around {:.0} minutes",
                    avg_stay,
                    policy.short_stay_minutes + 5.0
                ),
            },
        });
    }

    if avg_efficiency < policy.low_efficiency {
        recommendations.push(Recommendation {
            id: RecommendationId::new(
                Category::Layout,
                snapshot.zone_id.clone(),
                Subtype::OperationalEfficiency,
            ),
            category: Category::Layout,
            zone_id: snapshot.zone_id.clone(),
            title: format!("Improve operational efficiency in {}", snapshot.name),
            description: format!(
                "Efficiency score averages {:.1} out of 5 over the sampling window.",
                avg_efficiency
            ),
            priority: Priority::Medium,
            impact: 7.0,
            effort: 5.0,
            estimated_cost: EFFICIENCY_COST,
            estimated_savings: EFFICIENCY_SAVINGS,
            payback_months: payback_months(EFFICIENCY_COST, EFFICIENCY_SAVINGS),
            actions: vec![
                "Map and remove redundant service steps".to_string(),
                "Reposition supply and waste points to shorten staff routes".to_string(),
            ],
            metrics: RecommendationMetrics::Layout {
                current: avg_efficiency,
                target: 4.0,
                expected_improvement: format!(
                    "Raise the efficiency score from {:.1} to at least 4.0",
                    avg_efficiency
                ),
            },
        });
    }

    recommendations
}
