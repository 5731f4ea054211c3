use std::time::Duration;

use service_catalog::logic::{ExportField, ExportFormat, ExportOptions, ExportScope, GraphViewMode};
use service_catalog::{
    CatalogError, CatalogReader, CatalogSession, EntityForm, EntityType, MemoryStore, Record,
    RecordStatus, SortKey, SortOrder, ViewQuery, ViewType, ALL_ORGANIZATIONS,
};

fn visible_names(session: &CatalogSession) -> Vec<String> {
    session
        .visible_records()
        .iter()
        .map(|record| record.name().to_string())
        .collect()
}

#[test]
fn test_first_load_shows_engineering_components_by_name() {
    let session = CatalogSession::seeded();
    assert_eq!(session.view(), ViewType::Components);
    assert_eq!(
        visible_names(&session),
        vec![
            "Auth Service",
            "Customer Portal",
            "Design System",
            "Legacy Billing",
            "Notification Worker",
            "Search Indexer",
        ]
    );
}

#[test]
fn test_org_scope_and_status_filter() {
    let mut session = CatalogSession::seeded();
    session.set_org_scope(ALL_ORGANIZATIONS);
    assert_eq!(session.visible_records().len(), 7);

    session.set_status_filter("deprecated");
    assert_eq!(visible_names(&session), vec!["Legacy Billing"]);

    session.set_status_filter("all");
    session.set_type_filter("website");
    assert_eq!(visible_names(&session), vec!["Brand Site", "Customer Portal"]);
}

#[test]
fn test_search_matches_description() {
    let mut session = CatalogSession::seeded();
    session.set_search("BILLING");
    assert_eq!(visible_names(&session), vec!["Customer Portal", "Legacy Billing"]);

    session.set_search("no such thing");
    assert!(session.visible_records().is_empty());
    assert_eq!(
        session.empty_state_message().as_deref(),
        Some("No components match \"no such thing\"")
    );
}

#[test]
fn test_sort_by_updated_text_descending() {
    let mut session = CatalogSession::seeded();
    session.set_sort(SortKey::Updated);
    assert_eq!(visible_names(&session)[0], "Customer Portal");

    session.toggle_sort_order();
    assert_eq!(session.query().sort_order, SortOrder::Desc);
    assert_eq!(visible_names(&session)[0], "Legacy Billing");
}

#[test]
fn test_users_view_filters_by_team() {
    let mut session = CatalogSession::seeded();
    session.change_view(ViewType::Users);
    let records = session.visible_records();
    assert!(!records.is_empty());
    assert!(records
        .iter()
        .all(|record| matches!(record, Record::User(user) if user.team == "Engineering Team")));

    // Users carry no status, so a status filter never hides them
    session.set_status_filter("deprecated");
    assert_eq!(session.visible_records().len(), records.len());
}

#[test]
fn test_bulk_delete_is_simulated() {
    let mut session = CatalogSession::seeded();
    session.set_bulk_mode(true);
    session.select_all(true);
    assert!(session.all_selected());

    let outcome = session.bulk_delete().unwrap();
    assert_eq!(outcome.affected.len(), 6);
    assert_eq!(session.visible_records().len(), 6);
    assert!(session.selected().is_empty());
    assert!(!session.bulk_mode());
    assert_eq!(
        session.notifications()[0].message,
        "6 items deleted successfully"
    );

    assert!(session.bulk_delete().is_none());
}

#[test]
fn test_bulk_status_change_keeps_mode() {
    let mut session = CatalogSession::seeded();
    session.set_bulk_mode(true);
    session.set_selected("comp-1", true).unwrap();
    session.set_selected("comp-4", true).unwrap();

    let outcome = session
        .bulk_status_change(RecordStatus::Deprecated)
        .unwrap();
    assert_eq!(outcome.message(), "Status updated for 2 items");
    assert!(session.bulk_mode());
    assert!(session.selected().is_empty());

    let auth = session.find_record(&"comp-1".to_string()).unwrap();
    assert_eq!(auth.status(), Some("active"));
}

#[test]
fn test_create_entity_fills_defaults_and_persists_for_view() {
    let mut session = CatalogSession::seeded();
    session.change_view(ViewType::Apis);
    let form = EntityForm {
        name: "payments".to_string(),
        description: "Payment processing API".to_string(),
        owner: "Backend Engineering".to_string(),
        dependencies: "Billing Database, , Auth Service".to_string(),
        ..EntityForm::new(EntityType::Api)
    };

    let created = session.create_entity(form).unwrap();
    assert_eq!(created.repository, "https://github.com/company/payments");
    assert_eq!(created.tags, vec!["api"]);
    assert_eq!(created.dependencies, vec!["Billing Database", "Auth Service"]);
    assert_eq!(created.last_updated, "Just now");

    session.change_view(ViewType::Components);
    session.change_view(ViewType::Apis);
    assert!(session.find_record(&created.id).is_ok());
    assert_eq!(session.store().records(ViewType::Apis).len(), 6);
}

#[test]
fn test_hidden_ids_cannot_join_a_bulk_action() {
    let mut session = CatalogSession::seeded();
    session.set_status_filter("deprecated");
    session.set_bulk_mode(true);

    assert!(session.set_selected("comp-1", true).is_err());
    assert!(session.set_selected("does-not-exist", true).is_err());
    session.set_selected("comp-5", true).unwrap();

    let outcome = session.bulk_delete().unwrap();
    assert_eq!(outcome.affected, vec!["comp-5".to_string()]);
}

#[test]
fn test_two_creates_in_a_row_both_persist() {
    let mut session = CatalogSession::seeded();
    let form = |name: &str| EntityForm {
        name: name.to_string(),
        description: "Created twice in a row".to_string(),
        owner: "Backend Engineering".to_string(),
        ..EntityForm::new(EntityType::Service)
    };
    let first = session.create_entity(form("Ledger")).unwrap();
    let second = session.create_entity(form("Invoicing")).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(session.store().records(ViewType::Components).len(), 9);
}

#[test]
fn test_create_entity_rejects_missing_owner() {
    let mut session = CatalogSession::seeded();
    let form = EntityForm {
        name: "Orphan".to_string(),
        description: "No owner".to_string(),
        ..EntityForm::new(EntityType::Service)
    };
    assert!(matches!(
        session.create_entity(form),
        Err(CatalogError::MissingField("owner"))
    ));
}

#[test]
fn test_dependency_graph_focus_and_stats() {
    let session = CatalogSession::seeded();
    let graph = session.dependency_graph();

    let full = graph.view(None, GraphViewMode::Both).stats();
    assert_eq!(full.node_count, 7);
    assert_eq!(full.dependency_count, 3);
    assert_eq!(full.dependent_count, 3);
    assert_eq!(full.avg_dependencies, 0.4);

    let dependents = graph.view(Some("comp-3"), GraphViewMode::Dependents);
    let mut names: Vec<_> = dependents.nodes().iter().map(|n| n.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Brand Site", "Customer Portal", "Design System"]);

    let dependencies = graph.view(Some("comp-2"), GraphViewMode::Dependencies);
    let mut names: Vec<_> = dependencies.nodes().iter().map(|n| n.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Auth Service", "Customer Portal", "Design System"]);
}

#[test]
fn test_export_visible_records_as_csv_and_json() {
    let mut session = CatalogSession::seeded();
    session.set_status_filter("deprecated");

    let csv = session.export(&ExportOptions::default()).unwrap();
    assert_eq!(csv.file_name, "components-export.csv");
    let mut lines = csv.content.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,description,owner,status,type,tags")
    );
    assert!(lines.next().unwrap().starts_with("\"comp-5\",\"Legacy Billing\""));

    let options = ExportOptions {
        format: ExportFormat::Json,
        fields: vec![ExportField::Tags, ExportField::Name],
        scope: ExportScope::All,
    };
    let json = session.export(&options).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&json.content).unwrap();
    assert_eq!(
        rows,
        serde_json::json!([{ "name": "Legacy Billing", "tags": ["java", "legacy"] }])
    );
}

#[test]
fn test_export_scope_filters_status() {
    let mut session = CatalogSession::seeded();
    session.set_org_scope(ALL_ORGANIZATIONS);
    let options = ExportOptions {
        format: ExportFormat::Json,
        fields: vec![ExportField::Id],
        scope: ExportScope::Inactive,
    };
    let document = session.export(&options).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&document.content).unwrap();
    assert_eq!(rows, serde_json::json!([{ "id": "comp-6" }]));
}

#[tokio::test(start_paused = true)]
async fn test_bulk_notification_dismisses_itself() {
    let mut session = CatalogSession::with_settings(
        MemoryStore::seeded(),
        ViewType::Components,
        ViewQuery::default(),
        Duration::from_secs(5),
    );
    session.set_selected("comp-1", true).unwrap();
    session.bulk_delete().unwrap();
    assert_eq!(session.notifications().len(), 1);

    tokio::time::sleep(Duration::from_millis(4_900)).await;
    assert_eq!(session.notifications().len(), 1);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(session.notifications().is_empty());
}
