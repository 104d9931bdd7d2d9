use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::routes::recommendations::Category;

// =========================================================
// ROI types
// =========================================================

/// Aggregate return-on-investment figures for a recommendation set.
/// Derived and ephemeral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiEstimate {
    pub total_implementation_cost: f64,
    pub total_estimated_savings: f64,
    /// Total savings minus total cost.
    pub net_benefit: f64,
    /// Mean payback period in months, one decimal. Zero for an empty set.
    pub average_payback_months: f64,
    /// Net benefit over cost as a rounded percentage. Zero when cost is zero.
    pub roi_percent: f64,
    pub cost_by_category: BTreeMap<Category, f64>,
    pub savings_by_category: BTreeMap<Category, f64>,
}

impl RoiEstimate {
    /// ROI over an empty recommendation set.
    pub fn empty() -> Self {
        RoiEstimate {
            total_implementation_cost: 0.0,
            total_estimated_savings: 0.0,
            net_benefit: 0.0,
            average_payback_months: 0.0,
            roi_percent: 0.0,
            cost_by_category: BTreeMap::new(),
            savings_by_category: BTreeMap::new(),
        }
    }
}
