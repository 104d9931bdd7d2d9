//! Technology analyzer.
//!
//! Purely configuration-driven: zones with no alert thresholds lack
//! monitoring, and restricted zones with no access rules lack automated
//! access control.

use crate::models::ZoneSnapshot;
use crate::routes::recommendations::{
    Category, Priority, Recommendation, RecommendationId, RecommendationMetrics, Subtype,
};
use crate::services::policy::{payback_months, AnalysisPolicy};

const MONITORING_COST: f64 = 11_000.0;
const MONITORING_SAVINGS: f64 = 18_000.0;
const ACCESS_COST: f64 = 13_000.0;
const ACCESS_SAVINGS: f64 = 15_000.0;

pub fn analyze(snapshot: &ZoneSnapshot, _policy: &AnalysisPolicy) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if snapshot.config.alert_thresholds.is_empty() {
        recommendations.push(Recommendation {
            id: RecommendationId::new(
                Category::Technology,
                snapshot.zone_id.clone(),
                Subtype::SmartMonitoring,
            ),
            category: Category::Technology,
            zone_id: snapshot.zone_id.clone(),
            title: format!("Implement smart monitoring in {}", snapshot.name),
            description: "No alert thresholds are configured; occupancy and safety \
                          conditions go unmonitored until staff notice them."
                .to_string(),
            priority: Priority::Medium,
            impact: 7.5,
            effort: 5.0,
            estimated_cost: MONITORING_COST,
            estimated_savings: MONITORING_SAVINGS,
            payback_months: payback_months(MONITORING_COST, MONITORING_SAVINGS),
            actions: vec![
                "Define occupancy and queue alert thresholds".to_string(),
                "Route threshold breaches to the operations dashboard".to_string(),
            ],
            metrics: RecommendationMetrics::Technology {
                current: 0.0,
                target: 3.0,
                expected_improvement: "Configure at least 3 monitored alert thresholds"
                    .to_string(),
            },
        });
    }

    if snapshot.config.restricted_access && snapshot.config.access_rules.is_empty() {
        recommendations.push(Recommendation {
            id: RecommendationId::new(
                Category::Technology,
                snapshot.zone_id.clone(),
                Subtype::AccessControl,
            ),
            category: Category::Technology,
            zone_id: snapshot.zone_id.clone(),
            title: format!("Automate access control in {}", snapshot.name),
            description: "The zone is marked restricted but has no access rules; \
                          enforcement currently depends on manual checks."
                .to_string(),
            priority: Priority::High,
            impact: 8.0,
            effort: 6.0,
            estimated_cost: ACCESS_COST,
            estimated_savings: ACCESS_SAVINGS,
            payback_months: payback_months(ACCESS_COST, ACCESS_SAVINGS),
            actions: vec![
                "Define badge or credential rules for the restricted area".to_string(),
                "Install automated access gates at entry points".to_string(),
            ],
            metrics: RecommendationMetrics::Technology {
                current: 0.0,
                target: 1.0,
                expected_improvement: "Enforce restricted access with automated rules"
                    .to_string(),
            },
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::snapshot_with_utilization;

    #[test]
    fn test_missing_thresholds_flagged() {
        let mut snap = snapshot_with_utilization("z1", 0.5, 30);
        snap.config.alert_thresholds.clear();
        let recs = analyze(&snap, &AnalysisPolicy::default());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id.subtype, Subtype::SmartMonitoring);
        assert_eq!(recs[0].priority, Priority::Medium);
        assert_eq!(recs[0].impact, 7.5);
    }

    #[test]
    fn test_restricted_without_rules_flagged() {
        let mut snap = snapshot_with_utilization("z1", 0.5, 30);
        snap.config.restricted_access = true;
        snap.config.access_rules.clear();
        let recs = analyze(&snap, &AnalysisPolicy::default());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id.subtype, Subtype::AccessControl);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[0].impact, 8.0);
    }

    #[test]
    fn test_restricted_with_rules_not_flagged() {
        let mut snap = snapshot_with_utilization("z1", 0.5, 30);
        snap.config.restricted_access = true;
        assert!(analyze(&snap, &AnalysisPolicy::default()).is_empty());
    }

    #[test]
    fn test_unrestricted_without_rules_not_flagged() {
        let mut snap = snapshot_with_utilization("z1", 0.5, 30);
        snap.config.access_rules.clear();
        assert!(analyze(&snap, &AnalysisPolicy::default()).is_empty());
    }

    #[test]
    fn test_configured_zone_not_flagged() {
        let snap = snapshot_with_utilization("z1", 0.5, 30);
        assert!(analyze(&snap, &AnalysisPolicy::default()).is_empty());
    }
}
