//! Flow analyzer.
//!
//! Looks at the 7-day occupancy event window for entry/exit imbalance and
//! for bottleneck pressure (events recorded while the zone was near its
//! configured capacity).

use crate::models::{OccupancyEventKind, ZoneSnapshot};
use crate::routes::recommendations::{
    Category, Priority, Recommendation, RecommendationId, RecommendationMetrics, Subtype,
};
use crate::services::policy::{payback_months, AnalysisPolicy};

const BALANCE_COST: f64 = 6_000.0;
const BALANCE_SAVINGS: f64 = 10_000.0;
const BOTTLENECK_COST: f64 = 12_000.0;
const BOTTLENECK_SAVINGS: f64 = 20_000.0;

pub fn analyze(snapshot: &ZoneSnapshot, policy: &AnalysisPolicy) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let entries = snapshot
        .occupancy_events
        .iter()
        .filter(|e| e.kind == OccupancyEventKind::Entry)
        .count();
    let exits = snapshot.occupancy_events.len() - entries;

    let imbalance = (entries as f64 - exits as f64).abs() / entries.max(exits).max(1) as f64;
    if imbalance > policy.flow_imbalance {
        recommendations.push(Recommendation {
            id: RecommendationId::new(
                Category::Flow,
                snapshot.zone_id.clone(),
                Subtype::FlowBalance,
            ),
            category: Category::Flow,
            zone_id: snapshot.zone_id.clone(),
            title: format!("Balance entry/exit flow in {}", snapshot.name),
            description: format!(
                "{} entries against {} exits over the event window ({:.0}% imbalance); \
                 traffic is not circulating evenly through the zone.",
                entries,
                exits,
                imbalance * 100.0
            ),
            priority: Priority::Medium,
            impact: 6.5,
            effort: 4.0,
            estimated_cost: BALANCE_COST,
            estimated_savings: BALANCE_SAVINGS,
            payback_months: payback_months(BALANCE_COST, BALANCE_SAVINGS),
            actions: vec![
                "Add or re-signpost exit routes".to_string(),
                "Review one-way circulation rules".to_string(),
            ],
            metrics: RecommendationMetrics::Flow {
                current: imbalance,
                target: 0.1,
                expected_improvement: format!(
                    "Reduce entry/exit imbalance from {:.0}% to under 10%",
                    imbalance * 100.0
                ),
            },
        });
    }

    if !snapshot.occupancy_events.is_empty() {
        let capacity_limit =
            policy.bottleneck_occupancy_ratio * snapshot.config.max_capacity as f64;
        let bottleneck_events = snapshot
            .occupancy_events
            .iter()
            .filter(|e| e.occupancy_count as f64 > capacity_limit)
            .count();
        let bottleneck_fraction = bottleneck_events as f64 / snapshot.occupancy_events.len() as f64;

        if bottleneck_fraction > policy.bottleneck_event_fraction {
            recommendations.push(Recommendation {
                id: RecommendationId::new(
                    Category::Flow,
                    snapshot.zone_id.clone(),
                    Subtype::BottleneckRelief,
                ),
                category: Category::Flow,
                zone_id: snapshot.zone_id.clone(),
                title: format!("Resolve flow bottlenecks in {}", snapshot.name),
                description: format!(
                    "{:.0}% of occupancy events were recorded above {:.0}% of \
                     configured capacity; visitors are funneling through a congested area.",
                    bottleneck_fraction * 100.0,
                    policy.bottleneck_occupancy_ratio * 100.0
                ),
                priority: Priority::High,
                impact: 8.0,
                effort: 6.0,
                estimated_cost: BOTTLENECK_COST,
                estimated_savings: BOTTLENECK_SAVINGS,
                payback_months: payback_months(BOTTLENECK_COST, BOTTLENECK_SAVINGS),
                actions: vec![
                    "Widen or duplicate the congested passage".to_string(),
                    "Stagger entry during peak periods".to_string(),
                    "Relocate attractions that anchor crowds at choke points".to_string(),
                ],
                metrics: RecommendationMetrics::Flow {
                    current: bottleneck_fraction,
                    target: 0.15,
                    expected_improvement: format!(
                        "Cut near-capacity events from {:.0}% to under 15% of the window",
                        bottleneck_fraction * 100.0
                    ),
                },
            });
        }
    }

    recommendations
}
