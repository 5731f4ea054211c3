//! CSV and JSON export of the visible records.

use std::path::Path;

use itertools::Itertools;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Record, ViewType};

/// Fields a user can opt into, in column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportField {
    Id,
    Name,
    Description,
    Owner,
    Status,
    Type,
    Tags,
    Metadata,
    Dependencies,
}

impl ExportField {
    pub const ALL: [ExportField; 9] = [
        ExportField::Id,
        ExportField::Name,
        ExportField::Description,
        ExportField::Owner,
        ExportField::Status,
        ExportField::Type,
        ExportField::Tags,
        ExportField::Metadata,
        ExportField::Dependencies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportField::Id => "id",
            ExportField::Name => "name",
            ExportField::Description => "description",
            ExportField::Owner => "owner",
            ExportField::Status => "status",
            ExportField::Type => "type",
            ExportField::Tags => "tags",
            ExportField::Metadata => "metadata",
            ExportField::Dependencies => "dependencies",
        }
    }

    pub fn default_fields() -> Vec<ExportField> {
        vec![
            ExportField::Id,
            ExportField::Name,
            ExportField::Description,
            ExportField::Owner,
            ExportField::Status,
            ExportField::Type,
            ExportField::Tags,
        ]
    }

    /// The record's value for this field; `None` when the record lacks the
    /// field or the value is empty
    fn value(&self, record: &Record) -> Option<Value> {
        let value = match self {
            ExportField::Id => Value::String(record.id().clone()),
            ExportField::Name => Value::String(record.name().to_string()),
            ExportField::Description => Value::String(record.description().to_string()),
            ExportField::Owner => Value::String(record.owner()?.to_string()),
            ExportField::Status => Value::String(record.status()?.to_string()),
            ExportField::Type => Value::String(record.type_label()?.to_string()),
            ExportField::Tags => serde_json::to_value(record.tags()?).ok()?,
            ExportField::Metadata => serde_json::to_value(record.metadata()?).ok()?,
            ExportField::Dependencies => serde_json::to_value(record.dependencies()?).ok()?,
        };
        match &value {
            Value::String(s) if s.is_empty() => None,
            Value::Array(items) if items.is_empty() => None,
            _ => Some(value),
        }
    }
}

impl std::str::FromStr for ExportField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::invalid("export field", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(CatalogError::invalid("export format", s)),
        }
    }
}

/// Status pre-filter applied before export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportScope {
    #[default]
    All,
    Active,
    Inactive,
}

impl ExportScope {
    fn includes(&self, record: &Record) -> bool {
        match self {
            ExportScope::All => true,
            ExportScope::Active => record.status() == Some("active"),
            ExportScope::Inactive => record.status() == Some("inactive"),
        }
    }
}

impl std::str::FromStr for ExportScope {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ExportScope::All),
            "active" => Ok(ExportScope::Active),
            "inactive" => Ok(ExportScope::Inactive),
            _ => Err(CatalogError::invalid("export scope", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub fields: Vec<ExportField>,
    pub scope: ExportScope,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            fields: ExportField::default_fields(),
            scope: ExportScope::default(),
        }
    }
}

impl ExportOptions {
    /// Opted-in fields in canonical column order, without repeats
    fn columns(&self) -> Vec<ExportField> {
        self.fields.iter().copied().sorted().dedup().collect()
    }
}

/// One exported record: the opted-in fields it actually has, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow(Vec<(ExportField, Value)>);

impl ExportRow {
    fn get(&self, field: ExportField) -> Option<&Value> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, v)| v)
    }
}

impl Serialize for ExportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, value) in &self.0 {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: String,
    pub content: String,
}

impl ExportDocument {
    /// Write into `dir` under the document's file name
    pub fn write_to(&self, dir: &Path) -> CatalogResult<std::path::PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.content)?;
        log::info!("exported {} bytes to {}", self.content.len(), path.display());
        Ok(path)
    }
}

pub fn default_file_name(view: ViewType, format: ExportFormat) -> String {
    format!("{}-export.{}", view.as_str(), format.extension())
}

pub fn build_rows(records: &[Record], options: &ExportOptions) -> Vec<ExportRow> {
    let columns = options.columns();
    records
        .iter()
        .filter(|record| options.scope.includes(record))
        .map(|record| {
            ExportRow(
                columns
                    .iter()
                    .filter_map(|field| field.value(record).map(|value| (*field, value)))
                    .collect(),
            )
        })
        .collect()
}

pub fn export_records(
    view: ViewType,
    records: &[Record],
    options: &ExportOptions,
) -> CatalogResult<ExportDocument> {
    let rows = build_rows(records, options);
    let content = match options.format {
        ExportFormat::Json => serde_json::to_string_pretty(&rows)?,
        ExportFormat::Csv => to_csv(&options.columns(), &rows),
    };
    log::debug!(
        "export of {} rows from {} as {}",
        rows.len(),
        view,
        options.format.extension()
    );

    Ok(ExportDocument {
        file_name: default_file_name(view, options.format),
        content,
    })
}

/// CSV over the opted-in columns that at least one row carries; every
/// data cell is quoted and rows without a column get an empty cell
pub fn to_csv(columns: &[ExportField], rows: &[ExportRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let headers: Vec<ExportField> = columns
        .iter()
        .copied()
        .filter(|field| rows.iter().any(|row| row.get(*field).is_some()))
        .collect();

    let header_line = headers.iter().map(ExportField::as_str).join(",");
    let body = rows.iter().map(|row| {
        headers
            .iter()
            .map(|field| quote(&flatten(row.get(*field))))
            .join(",")
    });

    std::iter::once(header_line).chain(body).join("\n")
}

fn flatten(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                Value::Object(entry) => format!(
                    "{}={}",
                    entry.get("key").and_then(Value::as_str).unwrap_or_default(),
                    entry.get("value").and_then(Value::as_str).unwrap_or_default()
                ),
                other => other.to_string(),
            })
            .join(", "),
        Some(other) => other.to_string(),
    }
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
