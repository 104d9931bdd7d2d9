//! ROI estimation over a recommendation set.

use crate::routes::recommendations::Recommendation;
use crate::routes::roi::RoiEstimate;

/// Reduce a filtered recommendation set to aggregate cost/savings figures
/// with per-category breakdowns.
pub fn estimate_roi(recommendations: &[Recommendation]) -> RoiEstimate {
    if recommendations.is_empty() {
        return RoiEstimate::empty();
    }

    let mut estimate = RoiEstimate::empty();

    for rec in recommendations {
        estimate.total_implementation_cost += rec.estimated_cost;
        estimate.total_estimated_savings += rec.estimated_savings;
        *estimate.cost_by_category.entry(rec.category).or_insert(0.0) += rec.estimated_cost;
        *estimate
            .savings_by_category
            .entry(rec.category)
            .or_insert(0.0) += rec.estimated_savings;
    }

    estimate.net_benefit = estimate.total_estimated_savings - estimate.total_implementation_cost;
    estimate.roi_percent = if estimate.total_implementation_cost == 0.0 {
        0.0
    } else {
        (estimate.net_benefit / estimate.total_implementation_cost * 100.0).round()
    };

    let payback_sum: f64 = recommendations.iter().map(|r| r.payback_months).sum();
    let mean_payback = payback_sum / recommendations.len() as f64;
    estimate.average_payback_months = (mean_payback * 10.0).round() / 10.0;

    estimate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ZoneId;
    use crate::routes::recommendations::{
        Category, Priority, RecommendationId, RecommendationMetrics, Subtype,
    };

    fn rec(category: Category, cost: f64, savings: f64, payback: f64) -> Recommendation {
        Recommendation {
            id: RecommendationId::new(category, ZoneId::new("z1"), Subtype::IncreaseCapacity),
            category,
            zone_id: ZoneId::new("z1"),
            title: "t".to_string(),
            description: "d".to_string(),
            priority: Priority::Medium,
            impact: 5.0,
            effort: 5.0,
            estimated_cost: cost,
            estimated_savings: savings,
            payback_months: payback,
            actions: vec![],
            metrics: RecommendationMetrics::Capacity {
                current: 0.0,
                target: 0.0,
                expected_improvement: String::new(),
            },
        }
    }

    #[test]
    fn test_empty_set_is_zeroed() {
        let roi = estimate_roi(&[]);
        assert_eq!(roi.total_implementation_cost, 0.0);
        assert_eq!(roi.average_payback_months, 0.0);
        assert_eq!(roi.roi_percent, 0.0);
    }

    #[test]
    fn test_totals_and_net_benefit() {
        let recs = vec![
            rec(Category::Capacity, 10_000.0, 20_000.0, 6.0),
            rec(Category::Safety, 5_000.0, 10_000.0, 6.0),
        ];
        let roi = estimate_roi(&recs);
        assert_eq!(roi.total_implementation_cost, 15_000.0);
        assert_eq!(roi.total_estimated_savings, 30_000.0);
        assert_eq!(roi.net_benefit, 15_000.0);
        assert_eq!(roi.roi_percent, 100.0);
    }

    #[test]
    fn test_roi_zero_when_cost_zero_regardless_of_savings() {
        let recs = vec![rec(Category::Revenue, 0.0, 50_000.0, 0.0)];
        let roi = estimate_roi(&recs);
        assert_eq!(roi.total_implementation_cost, 0.0);
        assert_eq!(roi.roi_percent, 0.0);
        assert_eq!(roi.net_benefit, 50_000.0);
    }

    #[test]
    fn test_average_payback_rounds_one_decimal() {
        let recs = vec![
            rec(Category::Capacity, 1.0, 1.0, 7.2),
            rec(Category::Capacity, 1.0, 1.0, 6.5),
            rec(Category::Capacity, 1.0, 1.0, 5.0),
        ];
        let roi = estimate_roi(&recs);
        // mean(7.2, 6.5, 5.0) = 6.2333...
        assert_eq!(roi.average_payback_months, 6.2);
    }

    #[test]
    fn test_category_breakdowns() {
        let recs = vec![
            rec(Category::Capacity, 10_000.0, 20_000.0, 6.0),
            rec(Category::Capacity, 2_000.0, 3_000.0, 6.0),
            rec(Category::Flow, 4_000.0, 7_000.0, 6.0),
        ];
        let roi = estimate_roi(&recs);
        assert_eq!(roi.cost_by_category[&Category::Capacity], 12_000.0);
        assert_eq!(roi.savings_by_category[&Category::Flow], 7_000.0);
        assert_eq!(roi.cost_by_category.len(), 2);
    }

    #[test]
    fn test_negative_roi() {
        let recs = vec![rec(Category::Safety, 20_000.0, 10_000.0, 24.0)];
        let roi = estimate_roi(&recs);
        assert_eq!(roi.net_benefit, -10_000.0);
        assert_eq!(roi.roi_percent, -50.0);
    }
}
