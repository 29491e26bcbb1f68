use crate::core::errors::Result;
use crate::core::models::mutation::Mutation;
use crate::core::services::placement_engine::PlacementEngine;
use crate::core::traits::segment_store::SegmentStore;

/// Records visitors by combining a `PlacementEngine` with a `SegmentStore`.
///
/// Reading the inventory and applying the mutation are two separate store
/// calls with no lock in between, so two managers writing to the same
/// directory at once can lose records.
pub struct AuditManager<S: SegmentStore> {
    pub engine: PlacementEngine,
    pub store: S,
}

impl<S: SegmentStore> AuditManager<S> {
    pub fn new(engine: PlacementEngine, store: S) -> Self {
        Self { engine, store }
    }

    /// Record a visit and return the write that was applied.
    pub fn add_record(&self, visitor_name: &str, time_of_visit: &str) -> Result<Mutation> {
        let files = self.store.list_files()?;
        let mutation = self
            .engine
            .place_record(&files, visitor_name, time_of_visit)?;
        self.store.apply(&mutation)?;
        Ok(mutation)
    }
}
