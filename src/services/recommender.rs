//! Recommendation generation: runs the category analyzers over every zone
//! of a venue, merges and ranks the results, and assembles the full
//! response payload (ROI, scores, optional plans).
//!
//! Generation is synchronous and stateless; all inputs are in memory once
//! the snapshots are fetched. Zones are independent, so large venues are
//! analyzed on blocking worker threads in parallel. Ordered joins keep the
//! emission order deterministic either way.

use std::str::FromStr;

use chrono::Utc;
use tracing::{debug, warn};

use crate::api::VenueId;
use crate::models::ZoneSnapshot;
use crate::routes::recommendations::{
    Category, Priority, Recommendation, RecommendationReport,
};
use crate::services::error::{EngineError, EngineResult};
use crate::services::policy::AnalysisPolicy;
use crate::services::{capacity, flow, layout, planner, revenue, roi, safety, scorer, technology};

/// Venues larger than this are analyzed zone-parallel on blocking workers.
/// At or below it the zones are analyzed inline on the calling task: a
/// single zone scans a few hundred samples, so a handful of zones finish
/// in well under a scheduler tick and offloading would cost more than it
/// saves.
pub(crate) const PARALLEL_ZONE_THRESHOLD: usize = 8;

/// Category filter: everything, or a single analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationFilter {
    All,
    Category(Category),
}

impl FromStr for OptimizationFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(OptimizationFilter::All)
        } else {
            Ok(OptimizationFilter::Category(s.parse()?))
        }
    }
}

impl OptimizationFilter {
    fn admits(&self, category: Category) -> bool {
        match self {
            OptimizationFilter::All => true,
            OptimizationFilter::Category(wanted) => *wanted == category,
        }
    }
}

/// Priority filter: everything, or a single level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFilter {
    All,
    Level(Priority),
}

impl FromStr for PriorityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(PriorityFilter::All)
        } else {
            Ok(PriorityFilter::Level(s.parse()?))
        }
    }
}

impl PriorityFilter {
    fn admits(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Level(wanted) => *wanted == priority,
        }
    }
}

/// Parameters of one generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub venue_id: VenueId,
    pub optimization_filter: OptimizationFilter,
    pub priority_filter: PriorityFilter,
    pub include_plans: bool,
}

impl GenerationRequest {
    /// A request for everything, without plans.
    pub fn all(venue_id: VenueId) -> Self {
        GenerationRequest {
            venue_id,
            optimization_filter: OptimizationFilter::All,
            priority_filter: PriorityFilter::All,
            include_plans: false,
        }
    }
}

/// Run the category analyzers over one zone, in fixed category order.
pub fn analyze_zone(
    snapshot: &ZoneSnapshot,
    policy: &AnalysisPolicy,
    filter: OptimizationFilter,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    for category in Category::ALL {
        if !filter.admits(category) {
            continue;
        }
        let emitted = match category {
            Category::Capacity => capacity::analyze(snapshot, policy),
            Category::Flow => flow::analyze(snapshot, policy),
            Category::Safety => safety::analyze(snapshot, policy),
            Category::Layout => layout::analyze(snapshot, policy),
            Category::Technology => technology::analyze(snapshot, policy),
            Category::Revenue => revenue::analyze(snapshot, policy),
        };
        recommendations.extend(emitted);
    }
    recommendations
}

/// Stable sort by priority weight then impact, both descending. Remaining
/// ties keep analyzer-emission order; priorities are never recomputed here.
pub fn rank(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| {
        b.priority
            .weight()
            .cmp(&a.priority.weight())
            .then_with(|| {
                b.impact
                    .partial_cmp(&a.impact)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
}

/// Assemble the full report from already-validated snapshots.
///
/// Pure except for the `generated_at` timestamp; exposed for direct use in
/// tests and embedding callers that fetch snapshots themselves.
pub fn build_report(
    venue_id: VenueId,
    snapshots: &[ZoneSnapshot],
    recommendations: Vec<Recommendation>,
    request: &GenerationRequest,
    zones_skipped: usize,
) -> RecommendationReport {
    let mut filtered: Vec<Recommendation> = recommendations
        .into_iter()
        .filter(|r| request.priority_filter.admits(r.priority))
        .collect();
    rank(&mut filtered);

    let roi = roi::estimate_roi(&filtered);
    let scores = scorer::score_zones(snapshots);

    let plans = request.include_plans.then(|| {
        filtered
            .iter()
            .map(|rec| (rec.id.to_string(), planner::build_plan(rec)))
            .collect()
    });

    RecommendationReport {
        venue_id,
        generated_at: Utc::now(),
        recommendations: filtered,
        roi,
        scores,
        plans,
        zones_analyzed: snapshots.len(),
        zones_skipped,
    }
}

/// Generate the recommendation report for one venue.
///
/// A zone whose snapshot fails validation is skipped with a logged warning
/// rather than failing the batch; the response covers every other zone.
pub async fn generate_recommendations(
    repo: &dyn crate::db::ZoneRepository,
    policy: &AnalysisPolicy,
    request: GenerationRequest,
) -> EngineResult<RecommendationReport> {
    if request.venue_id.as_str().trim().is_empty() {
        return Err(EngineError::Validation("venue id must not be empty".to_string()));
    }

    let snapshots = repo.fetch_zone_snapshots(&request.venue_id).await?;

    let mut valid = Vec::with_capacity(snapshots.len());
    let mut zones_skipped = 0usize;
    for snapshot in snapshots {
        match snapshot.validate() {
            Ok(()) => valid.push(snapshot),
            Err(issue) => {
                warn!(
                    zone_id = %snapshot.zone_id,
                    venue_id = %request.venue_id,
                    %issue,
                    "skipping zone with unusable snapshot"
                );
                zones_skipped += 1;
            }
        }
    }

    let recommendations = if valid.len() > PARALLEL_ZONE_THRESHOLD {
        debug!(zones = valid.len(), "analyzing zones in parallel");
        let mut handles = Vec::with_capacity(valid.len());
        for snapshot in &valid {
            let snapshot = snapshot.clone();
            let policy = policy.clone();
            let filter = request.optimization_filter;
            handles.push(tokio::task::spawn_blocking(move || {
                analyze_zone(&snapshot, &policy, filter)
            }));
        }
        let mut merged = Vec::new();
        for handle in handles {
            let zone_recs = handle
                .await
                .map_err(|e| EngineError::Internal(format!("analysis task failed: {}", e)))?;
            merged.extend(zone_recs);
        }
        merged
    } else {
        valid
            .iter()
            .flat_map(|snapshot| analyze_zone(snapshot, policy, request.optimization_filter))
            .collect()
    };

    Ok(build_report(
        request.venue_id.clone(),
        &valid,
        recommendations,
        &request,
        zones_skipped,
    ))
}
