//! Per-zone composite health scoring.
//!
//! Scores are computed fresh on every request from the analytics window
//! alone; emitted recommendations never feed back into them.

use std::collections::BTreeMap;

use crate::api::ZoneId;
use crate::models::ZoneSnapshot;
use crate::routes::recommendations::Priority;
use crate::routes::scores::OptimizationScore;

/// Unweighted mean of the three 0-100 sub-scores. Kept as a single seam so
/// a future weighting change is local to this function.
fn overall_score(utilization: u8, safety: u8, efficiency: u8) -> u8 {
    ((utilization as f64 + safety as f64 + efficiency as f64) / 3.0).round() as u8
}

fn priority_level(overall: u8) -> Priority {
    match overall {
        0..=39 => Priority::Critical,
        40..=59 => Priority::High,
        60..=74 => Priority::Medium,
        _ => Priority::Low,
    }
}

fn sub_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Compute the composite score for one zone.
///
/// Sub-scores are clamped to 0-100 so a snapshot carrying out-of-range
/// telemetry can never push `overall` past 100 and underflow the
/// potential; validation upstream skips such zones before scoring.
pub fn score_zone(snapshot: &ZoneSnapshot) -> OptimizationScore {
    let utilization_score = sub_score(snapshot.avg_utilization() * 100.0);
    // Safety and efficiency are 0-5 scores mapped onto 0-100.
    let safety_score = sub_score(snapshot.avg_safety() * 20.0);
    let efficiency_score = sub_score(snapshot.avg_efficiency() * 20.0);

    let overall = overall_score(utilization_score, safety_score, efficiency_score);
    let optimization_potential = 100 - overall;

    OptimizationScore {
        zone_id: snapshot.zone_id.clone(),
        utilization_score,
        safety_score,
        efficiency_score,
        overall,
        optimization_potential,
        priority_level: priority_level(overall),
    }
}

/// Score every zone, keyed by zone id.
pub fn score_zones(snapshots: &[ZoneSnapshot]) -> BTreeMap<ZoneId, OptimizationScore> {
    snapshots
        .iter()
        .map(|s| (s.zone_id.clone(), score_zone(s)))
        .collect()
}
