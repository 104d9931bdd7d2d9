use serde::{Deserialize, Serialize};

use crate::api::ZoneId;
use crate::routes::recommendations::Priority;

// =========================================================
// Optimization score types
// =========================================================

/// Composite per-zone health score. Recomputed fresh on every request,
/// independent of any emitted recommendations; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationScore {
    pub zone_id: ZoneId,
    /// Mean utilization mapped to 0-100.
    pub utilization_score: u8,
    /// Mean safety score (0-5) mapped to 0-100.
    pub safety_score: u8,
    /// Mean efficiency score (0-5) mapped to 0-100.
    pub efficiency_score: u8,
    /// Unweighted mean of the three sub-scores.
    pub overall: u8,
    /// Headroom to the theoretical maximum of 100.
    pub optimization_potential: u8,
    pub priority_level: Priority,
}

/// Route function name constant for zone scores
pub const GET_ZONE_SCORES: &str = "get_zone_scores";
