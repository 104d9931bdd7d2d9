//! Capacity analyzer.
//!
//! Flags overutilized zones for capacity increases, underutilized zones for
//! space reallocation, and zones with long standing queues for queue
//! management. Pure function of the snapshot; no I/O.

use crate::models::ZoneSnapshot;
use crate::routes::recommendations::{
    Category, Priority, Recommendation, RecommendationId, RecommendationMetrics, Subtype,
};
use crate::services::policy::{payback_months, AnalysisPolicy};

const INCREASE_COST: f64 = 15_000.0;
const INCREASE_SAVINGS: f64 = 25_000.0;
const REALLOCATION_COST: f64 = 5_000.0;
const REALLOCATION_SAVINGS: f64 = 12_000.0;
const QUEUE_COST: f64 = 8_000.0;
const QUEUE_SAVINGS: f64 = 15_000.0;

pub fn analyze(snapshot: &ZoneSnapshot, policy: &AnalysisPolicy) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let avg_utilization = snapshot.avg_utilization();

    if avg_utilization > policy.high_utilization {
        let priority = if avg_utilization > policy.critical_utilization {
            Priority::Critical
        } else {
            Priority::High
        };
        recommendations.push(Recommendation {
            id: RecommendationId::new(
                Category::Capacity,
                snapshot.zone_id.clone(),
                Subtype::IncreaseCapacity,
            ),
            category: Category::Capacity,
            zone_id: snapshot.zone_id.clone(),
            title: format!("Increase capacity in {}", snapshot.name),
            description: format!(
                "Average utilization is {:.0}% of configured capacity over the sampling \
                 window, leaving no headroom for demand peaks.",
                avg_utilization * 100.0
            ),
            priority,
            impact: 8.5,
            effort: 7.0,
            estimated_cost: INCREASE_COST,
            estimated_savings: INCREASE_SAVINGS,
            payback_months: payback_months(INCREASE_COST, INCREASE_SAVINGS),
            actions: vec![
                "Raise the configured maximum capacity".to_string(),
                "Extend the usable floor area or add overflow space".to_string(),
                "Review staffing levels for the higher throughput".to_string(),
            ],
            metrics: RecommendationMetrics::Capacity {
                current: avg_utilization,
                target: 0.85,
                expected_improvement: format!(
                    "Bring average utilization from {:.0}% down to around 85%",
                    avg_utilization * 100.0
                ),
            },
        });
    }

    if avg_utilization < policy.low_utilization {
        recommendations.push(Recommendation {
            id: RecommendationId::new(
                Category::Capacity,
                snapshot.zone_id.clone(),
                Subtype::SpaceReallocation,
            ),
            category: Category::Capacity,
            zone_id: snapshot.zone_id.clone(),
            title: format!("Optimize underutilized space in {}", snapshot.name),
            description: format!(
                "Average utilization is only {:.0}%; the space could serve other \
                 functions or be merged with adjacent zones.",
                avg_utilization * 100.0
            ),
            priority: Priority::Medium,
            impact: 6.0,
            effort: 5.0,
            estimated_cost: REALLOCATION_COST,
            estimated_savings: REALLOCATION_SAVINGS,
            payback_months: payback_months(REALLOCATION_COST, REALLOCATION_SAVINGS),
            actions: vec![
                "Repurpose part of the zone for higher-demand functions".to_string(),
                "Consolidate services from neighboring zones".to_string(),
            ],
            metrics: RecommendationMetrics::Capacity {
                current: avg_utilization,
                target: 0.5,
                expected_improvement: format!(
                    "Lift average utilization from {:.0}% toward 50%",
                    avg_utilization * 100.0
                ),
            },
        });
    }

    if let Some(queue_length) = snapshot.latest_queue_length() {
        if queue_length > policy.queue_length_threshold {
            recommendations.push(Recommendation {
                id: RecommendationId::new(
                    Category::Capacity,
                    snapshot.zone_id.clone(),
                    Subtype::QueueManagement,
                ),
                category: Category::Capacity,
                zone_id: snapshot.zone_id.clone(),
                title: format!("Introduce queue management in {}", snapshot.name),
                description: format!(
                    "The most recent capacity record shows a queue of {} people at \
                     the zone entrance.",
                    queue_length
                ),
                priority: Priority::High,
                impact: 7.5,
                effort: 4.0,
                estimated_cost: QUEUE_COST,
                estimated_savings: QUEUE_SAVINGS,
                payback_months: payback_months(QUEUE_COST, QUEUE_SAVINGS),
                actions: vec![
                    "Add a virtual queueing or ticketing system".to_string(),
                    "Open additional entry lanes during peaks".to_string(),
                    "Display live wait times at the entrance".to_string(),
                ],
                metrics: RecommendationMetrics::Capacity {
                    current: queue_length as f64,
                    target: 3.0,
                    expected_improvement: format!(
                        "Cut peak queue length from {} to under 3",
                        queue_length
                    ),
                },
            });
        }
    }

    recommendations
}
