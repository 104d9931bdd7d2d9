//! Analyzer threshold policy.
//!
//! Every numeric threshold the analyzers consult lives here as a named,
//! overridable field instead of an inline literal, so operators can tune
//! behavior through configuration without redeploying. The flow heuristics
//! (imbalance and bottleneck fractions) in particular are configurable
//! defaults rather than validated business constants.

use serde::{Deserialize, Serialize};

/// Named analyzer thresholds with operational defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisPolicy {
    // Capacity
    /// Mean utilization above which a capacity increase is recommended.
    pub high_utilization: f64,
    /// Mean utilization above which the capacity increase is CRITICAL.
    pub critical_utilization: f64,
    /// Mean utilization below which space reallocation is recommended.
    pub low_utilization: f64,
    /// Most-recent queue length above which queue management is recommended.
    pub queue_length_threshold: u32,

    // Flow
    /// Entry/exit imbalance fraction that triggers flow balancing.
    pub flow_imbalance: f64,
    /// Occupancy as a fraction of capacity that counts as a bottleneck event.
    pub bottleneck_occupancy_ratio: f64,
    /// Fraction of bottleneck events that triggers bottleneck relief.
    pub bottleneck_event_fraction: f64,

    // Safety
    /// Violation count (30-day window) that triggers safety measures.
    pub violation_count_threshold: usize,
    /// Online-camera fraction below which coverage work is recommended.
    pub camera_coverage: f64,

    // Layout
    /// Mean stay time (minutes) below which engagement work is considered.
    pub short_stay_minutes: f64,
    /// Mean utilization above which short stays indicate a layout problem.
    pub engagement_utilization: f64,
    /// Mean efficiency score (0-5) below which efficiency work is recommended.
    pub low_efficiency: f64,

    // Revenue
    /// Mean utilization above which low revenue indicates untapped demand.
    pub revenue_utilization: f64,
    /// Mean daily revenue below which revenue uplift is recommended.
    pub low_daily_revenue: f64,
    /// Mean stay time (minutes) above which upselling is considered.
    pub long_stay_minutes: f64,
    /// Mean daily revenue below which upselling is recommended.
    pub upsell_daily_revenue: f64,
}

impl Default for AnalysisPolicy {
    fn default() -> Self {
        AnalysisPolicy {
            high_utilization: 0.9,
            critical_utilization: 0.95,
            low_utilization: 0.3,
            queue_length_threshold: 5,
            flow_imbalance: 0.2,
            bottleneck_occupancy_ratio: 0.8,
            bottleneck_event_fraction: 0.3,
            violation_count_threshold: 10,
            camera_coverage: 0.8,
            short_stay_minutes: 15.0,
            engagement_utilization: 0.7,
            low_efficiency: 3.0,
            revenue_utilization: 0.6,
            low_daily_revenue: 500.0,
            long_stay_minutes: 30.0,
            upsell_daily_revenue: 800.0,
        }
    }
}

/// Payback period in months: cost over monthly savings, one decimal.
/// Zero when there are no savings to amortize against.
pub fn payback_months(cost: f64, annual_savings: f64) -> f64 {
    if annual_savings <= 0.0 {
        return 0.0;
    }
    let months = cost / (annual_savings / 12.0);
    (months * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let policy = AnalysisPolicy::default();
        assert_eq!(policy.high_utilization, 0.9);
        assert_eq!(policy.critical_utilization, 0.95);
        assert_eq!(policy.low_utilization, 0.3);
        assert_eq!(policy.queue_length_threshold, 5);
        assert_eq!(policy.violation_count_threshold, 10);
    }

    #[test]
    fn test_policy_partial_toml_override() {
        let policy: AnalysisPolicy = toml::from_str("high_utilization = 0.85").unwrap();
        assert_eq!(policy.high_utilization, 0.85);
        // Unspecified fields keep their defaults.
        assert_eq!(policy.critical_utilization, 0.95);
    }

    #[test]
    fn test_payback_months_rounds_to_one_decimal() {
        assert_eq!(payback_months(15000.0, 25000.0), 7.2);
        assert_eq!(payback_months(11000.0, 18000.0), 7.3);
        assert_eq!(payback_months(4000.0, 9000.0), 5.3);
    }

    #[test]
    fn test_payback_months_zero_savings() {
        assert_eq!(payback_months(5000.0, 0.0), 0.0);
    }
}
