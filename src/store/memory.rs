use std::collections::HashMap;

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Entity, Record, ViewType};
use crate::seed;
use crate::store::traits::{CatalogReader, CatalogWriter};

/// Session-lifetime store; nothing is persisted and a new store starts
/// from the seed data again
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: HashMap<ViewType, Vec<Record>>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store loaded with the mock catalog for all eight views
    pub fn seeded() -> Self {
        let mut store = Self::empty();
        for view in ViewType::ALL {
            store.collections.insert(view, seed::records_for(view));
        }
        log::debug!(
            "seeded memory store with {} records",
            store.collections.values().map(Vec::len).sum::<usize>()
        );
        store
    }

    /// Replace a view's collection, e.g. with test fixtures
    pub fn with_records(mut self, view: ViewType, records: Vec<Record>) -> Self {
        self.collections.insert(view, records);
        self
    }
}

impl CatalogReader for MemoryStore {
    fn records(&self, view: ViewType) -> &[Record] {
        self.collections
            .get(&view)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl CatalogWriter for MemoryStore {
    fn append_entity(&mut self, view: ViewType, entity: Entity) -> CatalogResult<()> {
        if !view.is_entity_view() {
            return Err(CatalogError::invalid("entity view", view.as_str()));
        }
        if self.find(view, &entity.id).is_some() {
            return Err(CatalogError::DuplicateId {
                view: view.to_string(),
                id: entity.id,
            });
        }

        log::info!("created {} {:?} ({})", view, entity.name, entity.id);
        self.collections
            .entry(view)
            .or_default()
            .push(Record::Entity(entity));
        Ok(())
    }
}
