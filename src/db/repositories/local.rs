//! In-memory repository implementation for unit testing and local
//! development.
//!
//! Zone configuration is held in a map keyed by zone id, which makes the
//! upsert naturally idempotent: the same key can only ever hold one row.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{VenueId, ZoneId};
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, ZoneRepository};
use crate::models::{ZoneConfig, ZoneSnapshot};
use crate::routes::actions::ActionRecord;

/// In-memory zone repository.
#[derive(Default)]
pub struct LocalRepository {
    /// Venue membership: which zones belong to which venue.
    venues: RwLock<HashMap<VenueId, Vec<ZoneId>>>,
    /// Telemetry snapshots keyed by zone id.
    snapshots: RwLock<HashMap<ZoneId, ZoneSnapshot>>,
    /// Written configuration rows keyed by zone id. Overrides the config
    /// embedded in the seeded snapshot once an upsert happens.
    configs: RwLock<HashMap<ZoneId, ZoneConfig>>,
    /// Executed action records, in insertion order.
    actions: RwLock<Vec<ActionRecord>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a venue with zone snapshots. A zone's embedded config serves as
    /// its configuration until the first upsert writes an override row.
    pub fn seed_venue(&self, venue_id: VenueId, zone_snapshots: Vec<ZoneSnapshot>) {
        let mut venues = self.venues.write();
        let mut snapshots = self.snapshots.write();

        let members = venues.entry(venue_id).or_default();
        for snapshot in zone_snapshots {
            members.push(snapshot.zone_id.clone());
            snapshots.insert(snapshot.zone_id.clone(), snapshot);
        }
    }

    /// Number of written configuration rows. Test hook for the upsert
    /// idempotency guarantee; seeded configs do not count.
    pub fn config_row_count(&self) -> usize {
        self.configs.read().len()
    }

    /// Total number of persisted action records.
    pub fn action_record_count(&self) -> usize {
        self.actions.read().len()
    }

    fn snapshot_with_current_config(&self, zone_id: &ZoneId) -> Option<ZoneSnapshot> {
        let snapshot = self.snapshots.read().get(zone_id).cloned()?;
        let config = self.configs.read().get(zone_id).cloned();
        Some(match config {
            Some(config) => ZoneSnapshot { config, ..snapshot },
            None => snapshot,
        })
    }
}

#[async_trait]
impl ZoneRepository for LocalRepository {
    async fn fetch_zone_snapshots(
        &self,
        venue_id: &VenueId,
    ) -> RepositoryResult<Vec<ZoneSnapshot>> {
        let zone_ids = self.venues.read().get(venue_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("venue {} does not exist", venue_id),
                ErrorContext::new("fetch_zone_snapshots")
                    .with_entity("venue")
                    .with_entity_id(venue_id),
            )
        })?;

        Ok(zone_ids
            .iter()
            .filter_map(|id| self.snapshot_with_current_config(id))
            .collect())
    }

    async fn fetch_zone_snapshot(&self, zone_id: &ZoneId) -> RepositoryResult<ZoneSnapshot> {
        self.snapshot_with_current_config(zone_id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("zone {} does not exist", zone_id),
                ErrorContext::new("fetch_zone_snapshot")
                    .with_entity("zone")
                    .with_entity_id(zone_id),
            )
        })
    }

    async fn upsert_zone_config(&self, config: ZoneConfig) -> RepositoryResult<ZoneConfig> {
        if self.snapshots.read().get(&config.zone_id).is_none() {
            return Err(RepositoryError::not_found_with_context(
                format!("zone {} does not exist", config.zone_id),
                ErrorContext::new("upsert_zone_config")
                    .with_entity("zone")
                    .with_entity_id(&config.zone_id),
            ));
        }

        self.configs
            .write()
            .insert(config.zone_id.clone(), config.clone());
        Ok(config)
    }

    async fn record_action(&self, record: ActionRecord) -> RepositoryResult<()> {
        self.actions.write().push(record);
        Ok(())
    }

    async fn fetch_actions_for_target(
        &self,
        target_id: &str,
    ) -> RepositoryResult<Vec<ActionRecord>> {
        Ok(self
            .actions
            .read()
            .iter()
            .filter(|r| r.target_id == target_id)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
