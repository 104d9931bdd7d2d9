//! Safety analyzer.
//!
//! Flags zones with sustained violation counts and zones with insufficient
//! camera coverage. A zone with no cameras at all counts as zero coverage.

use crate::models::{Severity, ZoneSnapshot};
use crate::routes::recommendations::{
    Category, Priority, Recommendation, RecommendationId, RecommendationMetrics, Subtype,
};
use crate::services::policy::{payback_months, AnalysisPolicy};

const MEASURES_COST: f64 = 20_000.0;
const MEASURES_SAVINGS: f64 = 30_000.0;
const COVERAGE_COST: f64 = 10_000.0;
const COVERAGE_SAVINGS: f64 = 8_000.0;

pub fn analyze(snapshot: &ZoneSnapshot, policy: &AnalysisPolicy) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let violation_count = snapshot.violations.len();
    if violation_count > policy.violation_count_threshold {
        let has_critical = snapshot
            .violations
            .iter()
            .any(|v| v.severity == Severity::Critical);
        let priority = if has_critical {
            Priority::Critical
        } else {
            Priority::High
        };
        recommendations.push(Recommendation {
            id: RecommendationId::new(
                Category::Safety,
                snapshot.zone_id.clone(),
                Subtype::SafetyMeasures,
            ),
            category: Category::Safety,
            zone_id: snapshot.zone_id.clone(),
            title: format!("Enhance safety measures in {}", snapshot.name),
            description: format!(
                "{} safety violations recorded over the 30-day window{}.",
                violation_count,
                if has_critical {
                    ", including critical-severity incidents"
                } else {
                    ""
                }
            ),
            priority,
            impact: 9.0,
            effort: 6.0,
            estimated_cost: MEASURES_COST,
            estimated_savings: MEASURES_SAVINGS,
            payback_months: payback_months(MEASURES_COST, MEASURES_SAVINGS),
            actions: vec![
                "Audit the zone against the violation log".to_string(),
                "Increase staff presence at incident hotspots".to_string(),
                "Refresh signage and physical barriers".to_string(),
            ],
            metrics: RecommendationMetrics::Safety {
                current: violation_count as f64,
                target: 3.0,
                expected_improvement: format!(
                    "Reduce monthly violations from {} to 3 or fewer",
                    violation_count
                ),
            },
        });
    }

    let coverage = snapshot.camera_coverage();
    if coverage < policy.camera_coverage {
        recommendations.push(Recommendation {
            id: RecommendationId::new(
                Category::Safety,
                snapshot.zone_id.clone(),
                Subtype::CameraCoverage,
            ),
            category: Category::Safety,
            zone_id: snapshot.zone_id.clone(),
            title: format!("Improve camera coverage in {}", snapshot.name),
            description: format!(
                "Only {:.0}% of installed cameras are online (target {:.0}%).",
                coverage * 100.0,
                policy.camera_coverage * 100.0
            ),
            priority: Priority::Medium,
            impact: 7.0,
            effort: 5.0,
            estimated_cost: COVERAGE_COST,
            estimated_savings: COVERAGE_SAVINGS,
            payback_months: payback_months(COVERAGE_COST, COVERAGE_SAVINGS),
            actions: vec![
                "Repair or replace offline cameras".to_string(),
                "Add cameras to uncovered sightlines".to_string(),
            ],
            metrics: RecommendationMetrics::Safety {
                current: coverage,
                target: policy.camera_coverage,
                expected_improvement: format!(
                    "Raise online camera coverage from {:.0}% to at least {:.0}%",
                    coverage * 100.0,
                    policy.camera_coverage * 100.0
                ),
            },
        });
    }

    recommendations
}
