//! Page-level state for one browsing session.
//!
//! `CatalogSession` owns the store, the current view and query, the bulk
//! selection and the notification list. All state changes go through its
//! methods; readers derive the visible list on demand.

use std::time::Duration;

use crate::error::{CatalogError, CatalogResult};
use crate::logic::{
    build_entity, compose_view, export_records, next_id, BulkOutcome, BulkSelection,
    DependencyGraph, ExportDocument, ExportOptions, Notification, NotificationCenter,
    NotificationKind, DEFAULT_DISMISS_AFTER,
};
use crate::model::{
    AdvancedFilter, Entity, EntityForm, Id, OrgScope, Record, RecordStatus, SortKey, SortOrder,
    ValueFilter, ViewQuery, ViewType,
};
use crate::store::{CatalogReader, CatalogStore, MemoryStore};

#[derive(Debug)]
pub struct CatalogSession<S: CatalogStore = MemoryStore> {
    store: S,
    view: ViewType,
    query: ViewQuery,
    advanced: Option<AdvancedFilter>,
    bulk: BulkSelection,
    notifications: NotificationCenter,
}

impl CatalogSession<MemoryStore> {
    /// Session over the seeded mock catalog
    pub fn seeded() -> Self {
        Self::new(MemoryStore::seeded())
    }
}

impl<S: CatalogStore> CatalogSession<S> {
    pub fn new(store: S) -> Self {
        Self::with_settings(
            store,
            ViewType::default(),
            ViewQuery::default(),
            DEFAULT_DISMISS_AFTER,
        )
    }

    pub fn with_settings(
        store: S,
        view: ViewType,
        query: ViewQuery,
        dismiss_after: Duration,
    ) -> Self {
        Self {
            store,
            view,
            query,
            advanced: None,
            bulk: BulkSelection::new(),
            notifications: NotificationCenter::new(dismiss_after),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    /// Switch views; the search text and selection do not carry over
    pub fn change_view(&mut self, view: ViewType) {
        log::debug!("view {} -> {}", self.view, view);
        self.view = view;
        self.query.search.clear();
        self.bulk.clear();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.prune_selection();
    }

    pub fn set_status_filter(&mut self, status: impl Into<ValueFilter>) {
        self.query.status = status.into();
        self.prune_selection();
    }

    pub fn set_type_filter(&mut self, record_type: impl Into<ValueFilter>) {
        self.query.record_type = record_type.into();
        self.prune_selection();
    }

    pub fn set_org_scope(&mut self, org: impl Into<OrgScope>) {
        self.query.org = org.into();
        self.prune_selection();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.query.sort_by = key;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.query.sort_order = order;
    }

    pub fn toggle_sort_order(&mut self) {
        self.query.sort_order = self.query.sort_order.toggled();
    }

    /// Apply (or clear with `None`) the advanced search criteria
    pub fn set_advanced(&mut self, advanced: Option<AdvancedFilter>) {
        self.advanced = advanced;
        self.prune_selection();
    }

    /// Filtered and sorted records of the active view
    pub fn visible_records(&self) -> Vec<Record> {
        compose_view(
            self.store.records(self.view),
            &self.query,
            self.advanced.as_ref(),
        )
    }

    /// Message shown instead of the grid when nothing matches
    pub fn empty_state_message(&self) -> Option<String> {
        if !self.visible_records().is_empty() {
            return None;
        }
        let title = self.view.config().title;
        Some(if self.query.search.is_empty() {
            format!("No {} found", title.to_lowercase())
        } else {
            format!("No {} match \"{}\"", title.to_lowercase(), self.query.search)
        })
    }

    pub fn find_record(&self, id: &Id) -> CatalogResult<&Record> {
        self.store
            .find(self.view, id)
            .ok_or_else(|| CatalogError::NotFound {
                kind: self.view.record_kind().as_str(),
                id: id.clone(),
            })
    }

    pub fn bulk_mode(&self) -> bool {
        self.bulk.is_enabled()
    }

    pub fn set_bulk_mode(&mut self, enabled: bool) {
        self.bulk.set_enabled(enabled);
    }

    pub fn selected(&self) -> &[Id] {
        self.bulk.selected()
    }

    /// Select or deselect one record; only rendered records can be selected
    pub fn set_selected(&mut self, id: &str, selected: bool) -> CatalogResult<()> {
        if selected {
            self.ensure_visible(id)?;
        }
        self.bulk.set_selected(id, selected);
        Ok(())
    }

    pub fn toggle_selection(&mut self, id: &str) -> CatalogResult<()> {
        let selected = self.bulk.is_selected(id);
        self.set_selected(id, !selected)
    }

    pub fn clear_selection(&mut self) {
        self.bulk.clear();
    }

    pub fn select_all(&mut self, selected: bool) {
        let visible = self.visible_records();
        self.bulk.select_all(&visible, selected);
    }

    pub fn all_selected(&self) -> bool {
        self.bulk.all_selected(&self.visible_records())
    }

    /// Simulated: clears the selection and notifies, records stay
    pub fn bulk_delete(&mut self) -> Option<BulkOutcome> {
        let outcome = self.bulk.delete()?;
        self.notify_bulk(&outcome);
        Some(outcome)
    }

    /// Simulated: clears the selection and notifies, statuses stay
    pub fn bulk_status_change(&mut self, status: RecordStatus) -> Option<BulkOutcome> {
        let outcome = self.bulk.change_status(status)?;
        self.notify_bulk(&outcome);
        Some(outcome)
    }

    /// Build an entity from the form and append it to the active view
    pub fn create_entity(&mut self, form: EntityForm) -> CatalogResult<Entity> {
        if !self.view.is_entity_view() {
            return Err(CatalogError::invalid("entity view", self.view.as_str()));
        }
        let mut entity = build_entity(form)?;
        while self.store.find(self.view, &entity.id).is_some() {
            entity.id = next_id(&entity.id);
        }
        self.store.append_entity(self.view, entity.clone())?;
        self.notifications.push(
            format!("{} created successfully", entity.name),
            NotificationKind::Success,
        );
        Ok(entity)
    }

    /// Graph over the active view's entities; empty for other views
    pub fn dependency_graph(&self) -> DependencyGraph {
        DependencyGraph::from_entities(&self.store.entities(self.view))
    }

    /// Export the visible records
    pub fn export(&self, options: &ExportOptions) -> CatalogResult<ExportDocument> {
        export_records(self.view, &self.visible_records(), options)
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.current()
    }

    pub fn dismiss_notification(&self, id: &str) -> bool {
        self.notifications.dismiss(id)
    }

    fn notify_bulk(&self, outcome: &BulkOutcome) {
        log::info!(
            "simulated bulk action on {} records in {}",
            outcome.affected.len(),
            self.view
        );
        self.notifications
            .push(outcome.message(), NotificationKind::Success);
    }

    fn ensure_visible(&self, id: &str) -> CatalogResult<()> {
        if self.visible_records().iter().any(|record| record.id() == id) {
            return Ok(());
        }
        Err(CatalogError::NotFound {
            kind: self.view.record_kind().as_str(),
            id: id.to_string(),
        })
    }

    fn prune_selection(&mut self) {
        if self.bulk.selected().is_empty() {
            return;
        }
        let visible = self.visible_records();
        self.bulk.retain_visible(&visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityType;
    use crate::test_fixtures::{entity, names, records};

    fn session() -> CatalogSession {
        let mut legacy = entity("2", "Legacy API");
        legacy.status = RecordStatus::Deprecated;
        let store = MemoryStore::empty().with_records(
            ViewType::Components,
            records(vec![entity("1", "Auth Service"), legacy, entity("3", "Billing")]),
        );
        CatalogSession::new(store)
    }

    #[test]
    fn test_change_view_resets_search_and_selection() {
        let mut session = session();
        session.set_search("auth");
        session.set_status_filter("active");
        session.set_selected("1", true).unwrap();

        session.change_view(ViewType::Apis);
        assert_eq!(session.query().search, "");
        assert_eq!(session.query().status, ValueFilter::only("active"));
        assert!(session.selected().is_empty());
    }

    #[test]
    fn test_filter_change_prunes_hidden_selection() {
        let mut session = session();
        session.select_all(true);
        assert_eq!(session.selected().len(), 3);

        session.set_status_filter("deprecated");
        assert_eq!(session.selected(), &["2".to_string()]);
        assert!(session.all_selected());
    }

    #[test]
    fn test_select_all_then_delete_is_simulated() {
        let mut session = session();
        session.set_bulk_mode(true);
        session.select_all(true);

        let before = session.visible_records().len();
        let outcome = session.bulk_delete().unwrap();
        assert_eq!(outcome.affected.len(), 3);
        assert!(session.selected().is_empty());
        assert!(!session.bulk_mode());
        assert_eq!(session.visible_records().len(), before);
        assert_eq!(session.notifications()[0].message, "3 items deleted successfully");
    }

    #[test]
    fn test_selection_is_limited_to_rendered_records() {
        let mut session = session();
        session.set_status_filter("deprecated");

        assert!(matches!(
            session.set_selected("1", true),
            Err(CatalogError::NotFound { .. })
        ));
        assert!(session.toggle_selection("does-not-exist").is_err());
        session.set_selected("2", true).unwrap();
        // deselecting never needs the record to be visible
        session.set_selected("1", false).unwrap();

        let outcome = session.bulk_delete().unwrap();
        assert_eq!(outcome.affected, vec!["2".to_string()]);
        assert_eq!(outcome.message(), "1 items deleted successfully");
    }

    #[test]
    fn test_toggle_and_clear_selection() {
        let mut session = session();
        session.toggle_selection("1").unwrap();
        session.toggle_selection("3").unwrap();
        session.toggle_selection("1").unwrap();
        assert_eq!(session.selected(), &["3".to_string()]);

        session.clear_selection();
        assert!(session.selected().is_empty());
        assert!(session.bulk_status_change(RecordStatus::Inactive).is_none());
        assert!(session.notifications().is_empty());
    }

    #[test]
    fn test_empty_state_message() {
        let mut session = session();
        assert_eq!(session.empty_state_message(), None);
        session.set_search("zzz");
        assert_eq!(
            session.empty_state_message().as_deref(),
            Some("No components match \"zzz\"")
        );
    }

    #[test]
    fn test_create_entity_appends_to_active_view() {
        let mut session = session();
        let form = EntityForm {
            name: "Checkout".to_string(),
            description: "Cart and checkout flow".to_string(),
            owner: "Backend Engineering".to_string(),
            ..EntityForm::new(EntityType::Service)
        };
        let created = session.create_entity(form).unwrap();
        assert!(names(&session.visible_records()).contains(&"Checkout"));
        assert_eq!(session.find_record(&created.id).unwrap().name(), "Checkout");

        session.change_view(ViewType::Users);
        let form = EntityForm::new(EntityType::Service);
        assert!(session.create_entity(form).is_err());
    }

    #[test]
    fn test_back_to_back_creates_get_distinct_ids() {
        let mut session = session();
        let form = |name: &str| EntityForm {
            name: name.to_string(),
            description: "Cart and checkout flow".to_string(),
            owner: "Backend Engineering".to_string(),
            ..EntityForm::new(EntityType::Service)
        };
        let first = session.create_entity(form("Checkout")).unwrap();
        let second = session.create_entity(form("Cart")).unwrap();
        let third = session.create_entity(form("Wishlist")).unwrap();

        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);
        assert_ne!(first.id, third.id);
        assert_eq!(session.store().records(ViewType::Components).len(), 6);
    }

    #[test]
    fn test_find_missing_record() {
        let session = session();
        assert!(matches!(
            session.find_record(&"nope".to_string()),
            Err(CatalogError::NotFound { kind: "entity", .. })
        ));
    }
}
