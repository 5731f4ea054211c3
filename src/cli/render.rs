//! Plain-text rendering of views, records and graphs.

use std::fmt::Write;

use crate::logic::{GraphStats, GraphView};
use crate::model::{Record, ViewType};

pub fn view_header(view: ViewType, shown: usize) -> String {
    let config = view.config();
    format!(
        "{} › {}\n{} ({})\n{}",
        config.breadcrumb.0, config.breadcrumb.1, config.title, shown, config.description
    )
}

/// One summary line per record, shaped by the record's kind
pub fn record_line(record: &Record) -> String {
    match record {
        Record::Entity(entity) => format!(
            "{:<10} {:<28} {:<8} {:<11} {:<24} {}",
            entity.id,
            entity.name,
            entity.entity_type,
            entity.status,
            entity.owner,
            entity.last_updated
        ),
        Record::Domain(domain) => format!(
            "{:<10} {:<28} {:<11} {:<24} {} systems",
            domain.id,
            domain.name,
            domain.status,
            domain.owner,
            domain.systems.len()
        ),
        Record::Group(group) => format!(
            "{:<10} {:<28} {:<6} {:<24} {} members, lead {}",
            group.id, group.name, group.group_type, group.team, group.members, group.lead
        ),
        Record::User(user) => format!(
            "{:<10} {:<28} {:<24} {:<24} {}",
            user.id, user.name, user.role, user.team, user.email
        ),
        Record::Template(template) => format!(
            "{:<10} {:<28} {:<12} {:<12} {} downloads",
            template.id, template.name, template.language, template.framework, template.downloads
        ),
    }
}

pub fn record_detail(record: &Record) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", record.name(), record.id());
    let _ = writeln!(out, "{}", record.description());
    if let Some(label) = record.type_label() {
        let _ = writeln!(out, "type:         {}", label);
    }
    if let Some(status) = record.status() {
        let _ = writeln!(out, "status:       {}", status);
    }
    if let Some(owner) = record.owner() {
        let _ = writeln!(out, "owner:        {}", owner);
    }
    if let Some(team) = record.team() {
        let _ = writeln!(out, "team:         {}", team);
    }
    if let Some(repository) = record.repository() {
        let _ = writeln!(out, "repository:   {}", repository);
    }
    if let Some(updated) = record.updated() {
        let _ = writeln!(out, "updated:      {}", updated);
    }
    if let Some(tags) = record.tags().filter(|tags| !tags.is_empty()) {
        let _ = writeln!(out, "tags:         {}", tags.join(", "));
    }
    if let Some(dependencies) = record.dependencies().filter(|deps| !deps.is_empty()) {
        let _ = writeln!(out, "dependencies: {}", dependencies.join(", "));
    }
    for entry in record.metadata().unwrap_or_default() {
        let _ = writeln!(out, "  {}: {}", entry.key, entry.value);
    }
    out
}

pub fn graph_stats(stats: &GraphStats) -> String {
    format!(
        "{} nodes, {} dependencies, {} dependents, {:.1} avg dependencies",
        stats.node_count, stats.dependency_count, stats.dependent_count, stats.avg_dependencies
    )
}

pub fn graph_text(view: &GraphView<'_>) -> String {
    let mut out = String::new();
    for node in view.nodes() {
        let _ = writeln!(out, "{} [{}] ({})", node.name, node.entity_type, node.id);
        if !node.dependencies.is_empty() {
            let _ = writeln!(out, "  depends on: {}", node.dependencies.join(", "));
        }
        if !node.dependents.is_empty() {
            let _ = writeln!(out, "  used by:    {}", node.dependents.join(", "));
        }
    }
    let _ = write!(out, "{}", graph_stats(&view.stats()));
    out
}
