//! End-to-end tests for recommendation generation.
//!
//! These tests drive the full pipeline (repository fetch, snapshot
//! validation, category analyzers, ranking, ROI, scores, plans) through a
//! seeded in-memory repository.

mod support;

use voi_rust::api::{VenueId, ZoneId};
use voi_rust::routes::recommendations::{Category, Priority, Subtype};
use voi_rust::services::recommender::{
    GenerationRequest, OptimizationFilter, PriorityFilter,
};
use voi_rust::services::{generate_recommendations, AnalysisPolicy, EngineError};

use support::{healthy_zone, saturated_zone, seeded_repository, zone_with_utilization};

// =========================================================
// Full pipeline
// =========================================================

#[tokio::test]
async fn test_saturated_zone_yields_critical_capacity_and_bottleneck() {
    let repo = seeded_repository("venue-1", vec![saturated_zone("atrium")]);

    let report = generate_recommendations(
        &repo,
        &AnalysisPolicy::default(),
        GenerationRequest::all(VenueId::new("venue-1")),
    )
    .await
    .unwrap();

    assert_eq!(report.venue_id, VenueId::new("venue-1"));
    assert_eq!(report.zones_analyzed, 1);
    assert_eq!(report.zones_skipped, 0);
    assert_eq!(report.recommendations.len(), 2);

    // 97% sustained utilization is above the critical threshold.
    let capacity = &report.recommendations[0];
    assert_eq!(capacity.category, Category::Capacity);
    assert_eq!(capacity.id.subtype, Subtype::IncreaseCapacity);
    assert_eq!(capacity.priority, Priority::Critical);

    // 7 of 10 events above 80% of capacity is a bottleneck.
    let bottleneck = &report.recommendations[1];
    assert_eq!(bottleneck.category, Category::Flow);
    assert_eq!(bottleneck.id.subtype, Subtype::BottleneckRelief);
    assert_eq!(bottleneck.priority, Priority::High);
}

#[tokio::test]
async fn test_healthy_zone_yields_no_recommendations() {
    let repo = seeded_repository("venue-1", vec![healthy_zone("lobby")]);

    let report = generate_recommendations(
        &repo,
        &AnalysisPolicy::default(),
        GenerationRequest::all(VenueId::new("venue-1")),
    )
    .await
    .unwrap();

    assert!(report.recommendations.is_empty());
    assert_eq!(report.zones_analyzed, 1);
    // Scores are still produced for healthy zones.
    assert!(report.scores.contains_key(&ZoneId::new("lobby")));
    assert_eq!(report.roi.total_implementation_cost, 0.0);
    assert_eq!(report.roi.roi_percent, 0.0);
}

#[tokio::test]
async fn test_roi_totals_sum_recommendation_economics() {
    let repo = seeded_repository("venue-1", vec![saturated_zone("atrium")]);

    let report = generate_recommendations(
        &repo,
        &AnalysisPolicy::default(),
        GenerationRequest::all(VenueId::new("venue-1")),
    )
    .await
    .unwrap();

    // increase_capacity (15000 / 25000) + bottleneck_relief (12000 / 20000).
    assert_eq!(report.roi.total_implementation_cost, 27_000.0);
    assert_eq!(report.roi.total_estimated_savings, 45_000.0);
    assert_eq!(report.roi.net_benefit, 18_000.0);
    assert_eq!(report.roi.roi_percent, 67.0);
    assert_eq!(report.roi.cost_by_category[&Category::Capacity], 15_000.0);
    assert_eq!(report.roi.cost_by_category[&Category::Flow], 12_000.0);
}

#[tokio::test]
async fn test_ranking_orders_priority_before_impact_across_zones() {
    // One critical zone and one merely underused zone.
    let repo = seeded_repository(
        "venue-1",
        vec![
            zone_with_utilization("quiet", 0.1),
            saturated_zone("atrium"),
        ],
    );

    let report = generate_recommendations(
        &repo,
        &AnalysisPolicy::default(),
        GenerationRequest::all(VenueId::new("venue-1")),
    )
    .await
    .unwrap();

    let weights: Vec<u8> = report
        .recommendations
        .iter()
        .map(|r| r.priority.weight())
        .collect();
    let mut sorted = weights.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(weights, sorted, "recommendations must be priority-ordered");

    // Within equal priority, impact descends.
    for pair in report.recommendations.windows(2) {
        if pair[0].priority == pair[1].priority {
            assert!(pair[0].impact >= pair[1].impact);
        }
    }
}

#[tokio::test]
async fn test_recommendation_ids_are_deterministic() {
    let repo = seeded_repository("venue-1", vec![saturated_zone("atrium")]);
    let policy = AnalysisPolicy::default();

    let first = generate_recommendations(
        &repo,
        &policy,
        GenerationRequest::all(VenueId::new("venue-1")),
    )
    .await
    .unwrap();
    let second = generate_recommendations(
        &repo,
        &policy,
        GenerationRequest::all(VenueId::new("venue-1")),
    )
    .await
    .unwrap();

    let first_ids: Vec<String> = first.recommendations.iter().map(|r| r.id.to_string()).collect();
    let second_ids: Vec<String> =
        second.recommendations.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(first_ids, second_ids);
    assert_eq!(first_ids[0], "capacity:atrium:increase_capacity");
}

// =========================================================
// Filters and plans
// =========================================================

#[tokio::test]
async fn test_category_filter_limits_analyzers() {
    let repo = seeded_repository("venue-1", vec![saturated_zone("atrium")]);

    let request = GenerationRequest {
        venue_id: VenueId::new("venue-1"),
        optimization_filter: OptimizationFilter::Category(Category::Flow),
        priority_filter: PriorityFilter::All,
        include_plans: false,
    };
    let report = generate_recommendations(&repo, &AnalysisPolicy::default(), request)
        .await
        .unwrap();

    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(report.recommendations[0].category, Category::Flow);
}

#[tokio::test]
async fn test_plans_are_keyed_by_recommendation_id() {
    let repo = seeded_repository("venue-1", vec![saturated_zone("atrium")]);

    let request = GenerationRequest {
        venue_id: VenueId::new("venue-1"),
        optimization_filter: OptimizationFilter::All,
        priority_filter: PriorityFilter::All,
        include_plans: true,
    };
    let report = generate_recommendations(&repo, &AnalysisPolicy::default(), request)
        .await
        .unwrap();

    let plans = report.plans.expect("plans requested");
    assert_eq!(plans.len(), 2);
    let capacity_plan = &plans["capacity:atrium:increase_capacity"];
    assert_eq!(capacity_plan.phases.len(), 3);
    assert_eq!(capacity_plan.timeline_weeks, 10.5);
    assert_eq!(capacity_plan.resources.budget, 15_000.0);
}

#[tokio::test]
async fn test_plans_omitted_by_default() {
    let repo = seeded_repository("venue-1", vec![saturated_zone("atrium")]);

    let report = generate_recommendations(
        &repo,
        &AnalysisPolicy::default(),
        GenerationRequest::all(VenueId::new("venue-1")),
    )
    .await
    .unwrap();
    assert!(report.plans.is_none());
}

// =========================================================
// Policy overrides
// =========================================================

#[tokio::test]
async fn test_policy_override_changes_analyzer_outcome() {
    let repo = seeded_repository("venue-1", vec![zone_with_utilization("hall", 0.85)]);

    // Default policy: 85% is below the high-utilization threshold.
    let report = generate_recommendations(
        &repo,
        &AnalysisPolicy::default(),
        GenerationRequest::all(VenueId::new("venue-1")),
    )
    .await
    .unwrap();
    assert!(report.recommendations.is_empty());

    // Lowering the threshold flags the same zone.
    let policy = AnalysisPolicy {
        high_utilization: 0.8,
        ..AnalysisPolicy::default()
    };
    let report = generate_recommendations(
        &repo,
        &policy,
        GenerationRequest::all(VenueId::new("venue-1")),
    )
    .await
    .unwrap();
    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(report.recommendations[0].id.subtype, Subtype::IncreaseCapacity);
    assert_eq!(report.recommendations[0].priority, Priority::High);
}

// =========================================================
// Error paths
// =========================================================

#[tokio::test]
async fn test_unknown_venue_is_not_found() {
    let repo = seeded_repository("venue-1", vec![healthy_zone("lobby")]);
    let err = generate_recommendations(
        &repo,
        &AnalysisPolicy::default(),
        GenerationRequest::all(VenueId::new("venue-2")),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));
}

#[tokio::test]
async fn test_malformed_zone_is_skipped_not_fatal() {
    let mut broken = healthy_zone("broken");
    broken.analytics.clear();
    let repo = seeded_repository("venue-1", vec![saturated_zone("atrium"), broken]);

    let report = generate_recommendations(
        &repo,
        &AnalysisPolicy::default(),
        GenerationRequest::all(VenueId::new("venue-1")),
    )
    .await
    .unwrap();

    assert_eq!(report.zones_analyzed, 1);
    assert_eq!(report.zones_skipped, 1);
    assert!(!report.recommendations.is_empty());
}

#[tokio::test]
async fn test_out_of_range_scores_skip_zone_instead_of_aborting() {
    // Full utilization plus a safety score past the 0-5 range: unguarded,
    // this zone would push the composite score past 100 while scoring.
    let mut corrupt = zone_with_utilization("corrupt", 1.0);
    for sample in &mut corrupt.analytics {
        sample.safety_score = 6.0;
        sample.efficiency_score = 5.0;
    }
    let repo = seeded_repository("venue-1", vec![corrupt, healthy_zone("lobby")]);

    let report = generate_recommendations(
        &repo,
        &AnalysisPolicy::default(),
        GenerationRequest::all(VenueId::new("venue-1")),
    )
    .await
    .unwrap();

    assert_eq!(report.zones_analyzed, 1);
    assert_eq!(report.zones_skipped, 1);
    assert!(!report.scores.contains_key(&ZoneId::new("corrupt")));
    assert!(report.scores.contains_key(&ZoneId::new("lobby")));
}
