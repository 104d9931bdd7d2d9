//! Repository trait for zone telemetry and configuration storage.
//!
//! The engine consumes zone snapshots read-only and writes only through
//! the idempotent config upsert; both sides of that boundary live behind
//! this trait so storage backends can be swapped.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{VenueId, ZoneId};
use crate::models::{ZoneConfig, ZoneSnapshot};
use crate::routes::actions::ActionRecord;

/// Repository trait for zone operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ZoneRepository: Send + Sync {
    /// Fetch snapshots for every zone belonging to a venue.
    ///
    /// # Returns
    /// * `Ok(Vec<ZoneSnapshot>)` - telemetry for all zones of the venue
    /// * `Err(RepositoryError::NotFound)` - if the venue does not resolve
    async fn fetch_zone_snapshots(&self, venue_id: &VenueId)
        -> RepositoryResult<Vec<ZoneSnapshot>>;

    /// Fetch the snapshot for a single zone.
    async fn fetch_zone_snapshot(&self, zone_id: &ZoneId) -> RepositoryResult<ZoneSnapshot>;

    /// Upsert a zone's configuration.
    ///
    /// The write is an atomic upsert keyed by zone id: re-applying
    /// identical parameters overwrites the existing row rather than
    /// creating a duplicate, and concurrent applies to the same zone
    /// resolve last-writer-wins.
    async fn upsert_zone_config(&self, config: ZoneConfig) -> RepositoryResult<ZoneConfig>;

    /// Persist a record of an executed action.
    async fn record_action(&self, record: ActionRecord) -> RepositoryResult<()>;

    /// Fetch all action records for a target (zone id or optimization id),
    /// oldest first.
    async fn fetch_actions_for_target(&self, target_id: &str)
        -> RepositoryResult<Vec<ActionRecord>>;

    /// Check the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
