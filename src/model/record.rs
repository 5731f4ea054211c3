use crate::model::{Domain, Entity, Group, Id, MetadataEntry, Template, User};
use serde::{Deserialize, Serialize};

/// Kind tag for the catalog's record shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Entity,
    User,
    Group,
    Domain,
    Template,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Entity => "entity",
            RecordKind::User => "user",
            RecordKind::Group => "group",
            RecordKind::Domain => "domain",
            RecordKind::Template => "template",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Any record the catalog can list
///
/// Optional-field accessors return `None` when the record's shape has no
/// such field; predicates treat that as "not applicable" rather than a
/// mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Entity(Entity),
    User(User),
    Group(Group),
    Domain(Domain),
    Template(Template),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Entity(_) => RecordKind::Entity,
            Record::User(_) => RecordKind::User,
            Record::Group(_) => RecordKind::Group,
            Record::Domain(_) => RecordKind::Domain,
            Record::Template(_) => RecordKind::Template,
        }
    }

    pub fn id(&self) -> &Id {
        match self {
            Record::Entity(e) => &e.id,
            Record::User(u) => &u.id,
            Record::Group(g) => &g.id,
            Record::Domain(d) => &d.id,
            Record::Template(t) => &t.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Record::Entity(e) => &e.name,
            Record::User(u) => &u.name,
            Record::Group(g) => &g.name,
            Record::Domain(d) => &d.name,
            Record::Template(t) => &t.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Record::Entity(e) => &e.description,
            Record::User(u) => &u.description,
            Record::Group(g) => &g.description,
            Record::Domain(d) => &d.description,
            Record::Template(t) => &t.description,
        }
    }

    /// The `type` field: entity type or group type
    pub fn type_label(&self) -> Option<&'static str> {
        match self {
            Record::Entity(e) => Some(e.entity_type.as_str()),
            Record::Group(g) => Some(g.group_type.as_str()),
            Record::User(_) | Record::Domain(_) | Record::Template(_) => None,
        }
    }

    pub fn status(&self) -> Option<&'static str> {
        match self {
            Record::Entity(e) => Some(e.status.as_str()),
            Record::Domain(d) => Some(d.status.as_str()),
            Record::User(_) | Record::Group(_) | Record::Template(_) => None,
        }
    }

    pub fn owner(&self) -> Option<&str> {
        match self {
            Record::Entity(e) => Some(&e.owner),
            Record::Domain(d) => Some(&d.owner),
            Record::User(_) | Record::Group(_) | Record::Template(_) => None,
        }
    }

    pub fn team(&self) -> Option<&str> {
        match self {
            Record::User(u) => Some(&u.team),
            Record::Group(g) => Some(&g.team),
            Record::Entity(_) | Record::Domain(_) | Record::Template(_) => None,
        }
    }

    /// `lastUpdated` for entities, `updatedAt` for the shapes that carry it
    pub fn updated(&self) -> Option<&str> {
        match self {
            Record::Entity(e) => Some(&e.last_updated),
            Record::Group(g) => Some(&g.updated_at),
            Record::Domain(d) => Some(&d.updated_at),
            Record::Template(t) => Some(&t.updated_at),
            Record::User(_) => None,
        }
    }

    pub fn tags(&self) -> Option<&[String]> {
        match self {
            Record::Entity(e) => Some(&e.tags),
            Record::Domain(d) => Some(&d.tags),
            Record::Template(t) => Some(&t.tags),
            Record::User(_) | Record::Group(_) => None,
        }
    }

    pub fn repository(&self) -> Option<&str> {
        match self {
            Record::Entity(e) => Some(&e.repository),
            _ => None,
        }
    }

    pub fn dependencies(&self) -> Option<&[String]> {
        match self {
            Record::Entity(e) => Some(&e.dependencies),
            _ => None,
        }
    }

    pub fn metadata(&self) -> Option<&[MetadataEntry]> {
        match self {
            Record::Entity(e) => Some(&e.metadata),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Record::Entity(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Entity> for Record {
    fn from(entity: Entity) -> Self {
        Record::Entity(entity)
    }
}

impl From<User> for Record {
    fn from(user: User) -> Self {
        Record::User(user)
    }
}

impl From<Group> for Record {
    fn from(group: Group) -> Self {
        Record::Group(group)
    }
}

impl From<Domain> for Record {
    fn from(domain: Domain) -> Self {
        Record::Domain(domain)
    }
}

impl From<Template> for Record {
    fn from(template: Template) -> Self {
        Record::Template(template)
    }
}
