//! Revenue analyzer.
//!
//! A busy zone with weak daily revenue has untapped demand; long dwell
//! times with modest revenue suggest an upselling opportunity.

use crate::models::ZoneSnapshot;
use crate::routes::recommendations::{
    Category, Priority, Recommendation, RecommendationId, RecommendationMetrics, Subtype,
};
use crate::services::policy::{payback_months, AnalysisPolicy};

const UPLIFT_COST: f64 = 8_500.0;
const UPLIFT_SAVINGS: f64 = 24_000.0;
const UPSELL_COST: f64 = 4_000.0;
const UPSELL_SAVINGS: f64 = 9_000.0;

pub fn analyze(snapshot: &ZoneSnapshot, policy: &AnalysisPolicy) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let avg_revenue = snapshot.avg_revenue();
    let avg_utilization = snapshot.avg_utilization();
    let avg_stay = snapshot.avg_stay_minutes();

    if avg_utilization > policy.revenue_utilization && avg_revenue < policy.low_daily_revenue {
        recommendations.push(Recommendation {
            id: RecommendationId::new(
                Category::Revenue,
                snapshot.zone_id.clone(),
                Subtype::RevenueUplift,
            ),
            category: Category::Revenue,
            zone_id: snapshot.zone_id.clone(),
            title: format!("Enhance revenue generation in {}", snapshot.name),
            description: format!(
                "The zone runs at {:.0}% utilization but generates only {:.0} per day; \
                 footfall is not converting into revenue.",
                avg_utilization * 100.0,
                avg_revenue
            ),
            priority: Priority::Medium,
            impact: 8.0,
            effort: 5.0,
            estimated_cost: UPLIFT_COST,
            estimated_savings: UPLIFT_SAVINGS,
            payback_months: payback_months(UPLIFT_COST, UPLIFT_SAVINGS),
            actions: vec![
                "Add point-of-sale locations along the busiest paths".to_string(),
                "Introduce paid premium offerings in the zone".to_string(),
            ],
            metrics: RecommendationMetrics::Revenue {
                current: avg_revenue,
                target: policy.low_daily_revenue,
                expected_improvement: format!(
                    "Grow daily revenue from {:.0} to at least {:.0}",
                    avg_revenue, policy.low_daily_revenue
                ),
            },
        });
    }

    if avg_stay > policy.long_stay_minutes && avg_revenue < policy.upsell_daily_revenue {
        recommendations.push(Recommendation {
            id: RecommendationId::new(
                Category::Revenue,
                snapshot.zone_id.clone(),
                Subtype::UpsellProgram,
            ),
            category: Category::Revenue,
            zone_id: snapshot.zone_id.clone(),
            title: format!("Implement upselling strategies in {}", snapshot.name),
            description: format!(
                "Visitors stay {:.0} minutes on average yet daily revenue is {:.0}; \
                 long dwell time is an unexploited sales window.",
                avg_stay, avg_revenue
            ),
            priority: Priority::Low,
            impact: 6.0,
            effort: 3.0,
            estimated_cost: UPSELL_COST,
            estimated_savings: UPSELL_SAVINGS,
            payback_months: payback_months(UPSELL_COST, UPSELL_SAVINGS),
            actions: vec![
                "Train staff on bundle and add-on offers".to_string(),
                "Surface combo deals on in-zone displays".to_string(),
            ],
            metrics: RecommendationMetrics::Revenue {
                current: avg_revenue,
                target: policy.upsell_daily_revenue,
                expected_improvement: format!(
                    "Grow daily revenue from {:.0} toward {:.0} through upselling",
                    avg_revenue, policy.upsell_daily_revenue
                ),
            },
        });
    }

    recommendations
}
