use crate::error::CatalogResult;
use crate::model::{Entity, Id, Record, ViewType};

/// Read access to the per-view record collections
pub trait CatalogReader {
    /// Records of a view in insertion order
    fn records(&self, view: ViewType) -> &[Record];

    fn find(&self, view: ViewType, id: &Id) -> Option<&Record> {
        self.records(view).iter().find(|record| record.id() == id)
    }

    /// Entity payloads of a view; empty for non-entity views
    fn entities(&self, view: ViewType) -> Vec<Entity> {
        self.records(view)
            .iter()
            .filter_map(Record::as_entity)
            .cloned()
            .collect()
    }
}

/// Mutations the catalog supports. Only entity creation exists; updates
/// and deletes are simulated above the store.
pub trait CatalogWriter {
    /// Append a new entity to one entity view's collection
    fn append_entity(&mut self, view: ViewType, entity: Entity) -> CatalogResult<()>;
}

pub trait CatalogStore: CatalogReader + CatalogWriter {}
impl<T: CatalogReader + CatalogWriter> CatalogStore for T {}
