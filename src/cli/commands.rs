use anyhow::Context;

use crate::cli::render;
use crate::cli::{
    BulkArgs, Cli, Commands, CreateArgs, ExportArgs, GraphArgs, ListArgs, QueryArgs, ShowArgs,
};
use crate::config::AppConfig;
use crate::logic::{ExportField, ExportOptions, DEFAULT_GRAPH_FILE};
use crate::model::{AdvancedFilter, EntityForm, EntityType, ViewType};
use crate::session::CatalogSession;
use crate::store::{CatalogReader, MemoryStore};

pub fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::List(args) => run_list(args, config),
        Commands::Show(args) => run_show(args, config),
        Commands::Create(args) => run_create(args, config),
        Commands::Bulk(args) => run_bulk(args, config),
        Commands::Graph(args) => run_graph(args, config),
        Commands::Export(args) => run_export(args, config),
        Commands::Views => run_views(),
    }
}

fn resolve_view(name: Option<&str>, config: &AppConfig) -> anyhow::Result<ViewType> {
    let Some(name) = name else {
        return Ok(config.catalog.default_view);
    };
    name.parse::<ViewType>().map_err(|err| {
        log::warn!("rejected view name {:?}", name);
        anyhow::Error::from(err)
    })
}

fn open_session(view: Option<&str>, config: &AppConfig) -> anyhow::Result<CatalogSession> {
    let view = resolve_view(view, config)?;
    Ok(CatalogSession::with_settings(
        MemoryStore::seeded(),
        view,
        config.initial_query(),
        config.dismiss_after(),
    ))
}

fn open_query(query: &QueryArgs, config: &AppConfig) -> anyhow::Result<CatalogSession> {
    let mut session = open_session(query.view.as_deref(), config)?;
    session.set_search(query.search.as_str());
    session.set_status_filter(query.status.clone());
    session.set_type_filter(query.record_type.clone());
    if let Some(org) = &query.org {
        session.set_org_scope(org.as_str());
    }
    if let Some(sort) = query.sort {
        session.set_sort(sort);
    }
    if let Some(order) = query.order {
        session.set_sort_order(order);
    }
    Ok(session)
}

fn print_notifications(session: &CatalogSession) {
    for notification in session.notifications() {
        println!("[{}] {}", notification.kind, notification.message);
    }
}

fn run_list(args: ListArgs, config: &AppConfig) -> anyhow::Result<()> {
    let mut session = open_query(&args.query, config)?;
    let advanced = AdvancedFilter {
        owners: args.owners,
        tags: args.tags,
        has_repository: args.has_repository,
        has_dependencies: args.has_dependencies,
        ..AdvancedFilter::default()
    };
    if !advanced.is_empty() {
        session.set_advanced(Some(advanced));
    }

    let records = session.visible_records();
    println!("{}", render::view_header(session.view(), records.len()));
    println!("scope: {}", session.query().org);
    if let Some(message) = session.empty_state_message() {
        println!("{}", message);
        return Ok(());
    }
    for record in &records {
        println!("{}", render::record_line(record));
    }
    Ok(())
}

fn run_show(args: ShowArgs, config: &AppConfig) -> anyhow::Result<()> {
    let session = open_session(args.view.as_deref(), config)?;
    let record = session.find_record(&args.id)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print!("{}", render::record_detail(record));
    }
    Ok(())
}

fn run_create(args: CreateArgs, config: &AppConfig) -> anyhow::Result<()> {
    let mut session = open_session(args.view.as_deref(), config)?;
    let entity_type = args
        .entity_type
        .or_else(|| session.view().default_entity_type())
        .unwrap_or(EntityType::Service);
    let form = EntityForm {
        name: args.name,
        description: args.description,
        owner: args.owner,
        repository: args.repository,
        status: args.status,
        version: args.version,
        dependencies: args.dependencies,
        tags: args.tags,
        ..EntityForm::new(entity_type)
    };

    let entity = session.create_entity(form)?;
    println!("{}", render::record_line(&entity.into()));
    println!(
        "{} now has {} records",
        session.view(),
        session.store().records(session.view()).len()
    );
    print_notifications(&session);
    Ok(())
}

fn run_bulk(args: BulkArgs, config: &AppConfig) -> anyhow::Result<()> {
    let mut session = open_query(&args.query, config)?;
    session.set_bulk_mode(true);
    if args.all {
        session.select_all(true);
    } else {
        for id in &args.ids {
            session
                .set_selected(id, true)
                .with_context(|| format!("{} is not in the current list", id))?;
        }
    }

    let outcome = match args.set_status {
        Some(status) => session.bulk_status_change(status),
        None => session.bulk_delete(),
    };
    if outcome.is_none() {
        println!("Nothing selected");
    }
    print_notifications(&session);
    Ok(())
}

fn run_graph(args: GraphArgs, config: &AppConfig) -> anyhow::Result<()> {
    let session = open_session(args.view.as_deref(), config)?;
    let graph = session.dependency_graph();
    if let Some(focus) = args.focus.as_deref() {
        if graph.node(focus).is_none() {
            log::warn!("focus {:?} is not in the {} graph", focus, session.view());
        }
    }

    let view = graph.view(args.focus.as_deref(), args.mode);
    if args.json {
        println!("{}", view.to_json()?);
    } else {
        println!("{}", render::graph_text(&view));
    }

    if args.export {
        std::fs::create_dir_all(&config.export.output_dir)?;
        let path = config.export.output_dir.join(DEFAULT_GRAPH_FILE);
        view.export_to(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn run_export(args: ExportArgs, config: &AppConfig) -> anyhow::Result<()> {
    let session = open_query(&args.query, config)?;
    let options = ExportOptions {
        format: args.format,
        fields: if args.fields.is_empty() {
            ExportField::default_fields()
        } else {
            args.fields
        },
        scope: args.scope,
    };

    let document = session.export(&options)?;
    if args.stdout {
        println!("{}", document.content);
        return Ok(());
    }

    let dir = args.out.unwrap_or_else(|| config.export.output_dir.clone());
    std::fs::create_dir_all(&dir)?;
    let path = document
        .write_to(&dir)
        .with_context(|| format!("writing export to {}", dir.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn run_views() -> anyhow::Result<()> {
    let store = MemoryStore::seeded();
    for view in ViewType::ALL {
        let config = view.config();
        println!(
            "{:<11} {:<11} {:>3}  {}",
            view,
            config.title,
            store.records(view).len(),
            config.description
        );
    }
    Ok(())
}
