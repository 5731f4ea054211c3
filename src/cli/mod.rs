//! Command-line front end: argument definitions, dispatch and text output.

pub mod commands;
pub mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::CatalogError;
use crate::logic::{ExportField, ExportFormat, ExportScope, GraphViewMode};
use crate::model::{EntityType, GroupType, RecordStatus, SortKey, SortOrder, ValueFilter};

pub use commands::run;

#[derive(Debug, Parser)]
#[command(
    name = "catalog",
    version,
    about = "Browse, filter and export the service catalog"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the records of a view after filtering and sorting
    List(ListArgs),
    /// Show one record of a view
    Show(ShowArgs),
    /// Create an entity in a component, system, API or resource view
    Create(CreateArgs),
    /// Simulated bulk delete or status change over a selection
    Bulk(BulkArgs),
    /// Dependency graph of a view's entities
    Graph(GraphArgs),
    /// Export the visible records as CSV or JSON
    Export(ExportArgs),
    /// List the available views
    Views,
}

/// Flags shared by every command that works on a view's visible list
#[derive(Debug, Clone, Default, Args)]
pub struct QueryArgs {
    /// View to open (components, systems, apis, resources, domains, groups, users, templates)
    #[arg(long)]
    pub view: Option<String>,

    /// Case-insensitive text matched against name, description and type
    #[arg(long, default_value = "")]
    pub search: String,

    /// Exact status (active, inactive, deprecated), or "all"
    #[arg(long, default_value = "all", value_parser = parse_status_filter)]
    pub status: ValueFilter,

    /// Exact entity or group type, or "all"
    #[arg(long = "type", default_value = "all", value_parser = parse_type_filter)]
    pub record_type: ValueFilter,

    /// Organization scope, e.g. "Engineering Team" or "All Organizations"
    #[arg(long)]
    pub org: Option<String>,

    #[arg(long)]
    pub sort: Option<SortKey>,

    #[arg(long)]
    pub order: Option<SortOrder>,
}

fn parse_status_filter(value: &str) -> Result<ValueFilter, CatalogError> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(ValueFilter::All);
    }
    let status: RecordStatus = value.parse()?;
    Ok(ValueFilter::only(status.as_str()))
}

/// Entity types and group types share the `type` filter
fn parse_type_filter(value: &str) -> Result<ValueFilter, CatalogError> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(ValueFilter::All);
    }
    if let Ok(entity_type) = value.parse::<EntityType>() {
        return Ok(ValueFilter::only(entity_type.as_str()));
    }
    let group_type: GroupType = value.parse()?;
    Ok(ValueFilter::only(group_type.as_str()))
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Advanced search: required tags (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Advanced search: accepted owners (repeatable)
    #[arg(long = "owner", value_name = "OWNER")]
    pub owners: Vec<String>,

    /// Advanced search: only records with a repository
    #[arg(long)]
    pub has_repository: bool,

    /// Advanced search: only records with dependencies
    #[arg(long)]
    pub has_dependencies: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,

    #[arg(long)]
    pub view: Option<String>,

    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub view: Option<String>,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub owner: String,

    /// Defaults to the view's entity type
    #[arg(long = "type")]
    pub entity_type: Option<EntityType>,

    #[arg(long, default_value = "")]
    pub repository: String,

    #[arg(long, default_value = "active")]
    pub status: RecordStatus,

    #[arg(long, default_value = "v1.0.0")]
    pub version: String,

    /// Comma-separated dependency names
    #[arg(long, default_value = "")]
    pub dependencies: String,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
}

#[derive(Debug, Args)]
pub struct BulkArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Ids to select
    #[arg(long, value_delimiter = ',', conflicts_with = "all")]
    pub ids: Vec<String>,

    /// Select every visible record
    #[arg(long)]
    pub all: bool,

    /// Change status instead of deleting
    #[arg(long = "set-status", value_name = "STATUS")]
    pub set_status: Option<RecordStatus>,
}

#[derive(Debug, Args)]
pub struct GraphArgs {
    #[arg(long)]
    pub view: Option<String>,

    /// Entity id to focus on
    #[arg(long)]
    pub focus: Option<String>,

    #[arg(long, default_value = "both")]
    pub mode: GraphViewMode,

    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Write the shown nodes to dependency-graph.json in the export directory
    #[arg(long)]
    pub export: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,

    /// Comma-separated fields; defaults to id, name, description, owner, status, type, tags
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<ExportField>,

    #[arg(long, default_value = "all")]
    pub scope: ExportScope,

    /// Output directory; defaults to export.output_dir from config
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Print the document instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}
