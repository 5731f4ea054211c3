use crate::error::{CatalogError, CatalogResult};
use crate::model::{timestamp_id, Entity, EntityForm, Id, MetadataEntry, JUST_NOW};

const REPOSITORY_BASE: &str = "https://github.com/company";

/// Split a comma-separated text input, trimming pieces and dropping empty ones
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reject the form when a required input is blank
pub fn validate_form(form: &EntityForm) -> CatalogResult<()> {
    if form.name.trim().is_empty() {
        return Err(CatalogError::MissingField("name"));
    }
    if form.description.trim().is_empty() {
        return Err(CatalogError::MissingField("description"));
    }
    if form.owner.trim().is_empty() {
        return Err(CatalogError::MissingField("owner"));
    }
    Ok(())
}

/// Turn a submitted form into an entity with a fresh timestamp id
pub fn build_entity(form: EntityForm) -> CatalogResult<Entity> {
    build_entity_with_id(form, timestamp_id())
}

/// The id after `id` in timestamp order; non-numeric ids get a `-1` suffix
pub fn next_id(id: &str) -> Id {
    match id.parse::<u64>() {
        Ok(millis) => (millis + 1).to_string(),
        Err(_) => format!("{}-1", id),
    }
}

/// Apply the form defaults:
/// - blank repository becomes `https://github.com/company/<name>`
/// - blank tags become the selected type
/// - metadata records owner, status and the "just now" update marker
pub fn build_entity_with_id(form: EntityForm, id: Id) -> CatalogResult<Entity> {
    validate_form(&form)?;

    let repository = if form.repository.trim().is_empty() {
        format!("{}/{}", REPOSITORY_BASE, form.name)
    } else {
        form.repository.trim().to_string()
    };

    let tags = match split_list(&form.tags) {
        tags if tags.is_empty() => vec![form.entity_type.to_string()],
        tags => tags,
    };

    let metadata = vec![
        MetadataEntry::new("owner", form.owner.clone()),
        MetadataEntry::new("status", form.status.as_str()),
        MetadataEntry::new("updated", JUST_NOW),
    ];

    Ok(Entity {
        id,
        name: form.name,
        entity_type: form.entity_type,
        description: form.description,
        owner: form.owner,
        repository,
        status: form.status,
        version: form.version,
        last_updated: JUST_NOW.to_string(),
        dependencies: split_list(&form.dependencies),
        tags,
        metadata,
    })
}
