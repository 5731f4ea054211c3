//! Record builders shared by unit tests

use crate::model::{
    Domain, Entity, EntityType, Group, GroupType, Record, RecordStatus, Template, User,
};

pub fn entity(id: &str, name: &str) -> Entity {
    Entity {
        id: id.to_string(),
        name: name.to_string(),
        entity_type: EntityType::Service,
        description: format!("{} description", name),
        owner: "Platform Engineering".to_string(),
        repository: format!("https://github.com/company/{}", id),
        status: RecordStatus::Active,
        version: "v1.0.0".to_string(),
        last_updated: "1 day ago".to_string(),
        dependencies: vec![],
        tags: vec![],
        metadata: vec![],
    }
}

pub fn entity_with_deps(id: &str, name: &str, deps: &[&str]) -> Entity {
    Entity {
        dependencies: deps.iter().map(|d| d.to_string()).collect(),
        ..entity(id, name)
    }
}

pub fn user(id: &str, name: &str, team: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@company.com", id),
        role: "Engineer".to_string(),
        team: team.to_string(),
        avatar: String::new(),
        description: format!("{} works on {}", name, team),
        joined_at: "2022-03-01".to_string(),
        last_active: "today".to_string(),
        skills: vec![],
        projects: vec![],
    }
}

pub fn group(id: &str, name: &str, team: &str) -> Group {
    Group {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} group", name),
        team: team.to_string(),
        members: 5,
        lead: "Lead".to_string(),
        created_at: "2022-01-01".to_string(),
        updated_at: "2024-01-01".to_string(),
        group_type: GroupType::Team,
        projects: vec![],
    }
}

pub fn domain(id: &str, name: &str, owner: &str) -> Domain {
    Domain {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} domain", name),
        owner: owner.to_string(),
        systems: vec![],
        status: RecordStatus::Active,
        created_at: "2022-01-01".to_string(),
        updated_at: "2024-01-01".to_string(),
        tags: vec![],
    }
}

pub fn template(id: &str, name: &str) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} template", name),
        language: "Rust".to_string(),
        framework: "axum".to_string(),
        author: "Platform".to_string(),
        created_at: "2022-01-01".to_string(),
        updated_at: "2024-01-01".to_string(),
        downloads: 10,
        tags: vec![],
        category: "backend".to_string(),
    }
}

pub fn records<T: Into<Record>>(items: Vec<T>) -> Vec<Record> {
    items.into_iter().map(Into::into).collect()
}

pub fn names(records: &[Record]) -> Vec<&str> {
    records.iter().map(Record::name).collect()
}
