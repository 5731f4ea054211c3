use crate::model::{
    Domain, Entity, EntityType, Group, GroupType, MetadataEntry, Record, RecordStatus, Template,
    User, ViewType,
};

/// Helper function to create an Entity with the metadata the catalog shows
#[allow(clippy::too_many_arguments)]
fn catalog_entity(
    id: &str,
    name: &str,
    entity_type: EntityType,
    description: &str,
    owner: &str,
    status: RecordStatus,
    version: &str,
    last_updated: &str,
    dependencies: &[&str],
    tags: &[&str],
) -> Entity {
    let slug = name.to_lowercase().replace(' ', "-");
    Entity {
        id: id.to_string(),
        name: name.to_string(),
        entity_type,
        description: description.to_string(),
        owner: owner.to_string(),
        repository: format!("https://github.com/company/{}", slug),
        status,
        version: version.to_string(),
        last_updated: last_updated.to_string(),
        dependencies: strings(dependencies),
        tags: strings(tags),
        metadata: vec![
            MetadataEntry::new("owner", owner),
            MetadataEntry::new("status", status.as_str()),
            MetadataEntry::new("updated", last_updated),
        ],
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[rustfmt::skip]
pub fn components() -> Vec<Entity> {
    use EntityType::*;
    use RecordStatus::*;
    vec![
        catalog_entity("comp-1", "Auth Service", Service, "Issues and validates session tokens for every product surface", "Backend Engineering", Active, "v2.4.1", "2 hours ago", &["User Database", "Redis Cache"], &["rust", "security", "microservice"]),
        catalog_entity("comp-2", "Customer Portal", Website, "Self-service portal for account and billing management", "Frontend Engineering", Active, "v5.0.3", "1 day ago", &["Auth Service", "Billing API", "Design System"], &["react", "typescript"]),
        catalog_entity("comp-3", "Design System", Library, "Shared UI components and design tokens", "Frontend Engineering", Active, "v3.12.0", "3 days ago", &[], &["react", "design"]),
        catalog_entity("comp-4", "Notification Worker", Service, "Fans out email, SMS and push notifications from the event bus", "Platform Engineering", Active, "v1.8.0", "5 hours ago", &["Event Bus", "Email Gateway"], &["nodejs", "kafka"]),
        catalog_entity("comp-5", "Legacy Billing", Service, "Monolithic billing engine being replaced by the Billing API", "Backend Engineering", Deprecated, "v0.9.7", "8 months ago", &["Billing Database"], &["java", "legacy"]),
        catalog_entity("comp-6", "Search Indexer", Service, "Keeps the product search index in sync with the catalog", "Data Engineering", Inactive, "v1.1.2", "2 weeks ago", &["Search Cluster", "Event Bus"], &["python", "search"]),
        catalog_entity("comp-7", "Brand Site", Website, "Public marketing website", "Design Studio", Active, "v2.0.0", "4 days ago", &["Design System"], &["nextjs", "marketing"]),
    ]
}

#[rustfmt::skip]
pub fn systems() -> Vec<Entity> {
    use EntityType::*;
    use RecordStatus::*;
    vec![
        catalog_entity("sys-1", "Identity Platform", Service, "Authentication, authorization and user profile services", "Backend Engineering", Active, "v4.0.0", "1 day ago", &["Auth Service", "User Database"], &["platform", "security"]),
        catalog_entity("sys-2", "Payments Platform", Service, "Checkout, invoicing and payment processing", "Backend Engineering", Active, "v2.3.0", "6 hours ago", &["Billing API", "Billing Database"], &["platform", "payments"]),
        catalog_entity("sys-3", "Messaging Platform", Service, "Asynchronous messaging and notification delivery", "Platform Engineering", Active, "v1.5.0", "3 days ago", &["Event Bus", "Notification Worker"], &["platform", "kafka"]),
        catalog_entity("sys-4", "Analytics Platform", Service, "Batch and streaming analytics pipelines", "Data Engineering", Inactive, "v0.8.0", "1 month ago", &["Data Warehouse"], &["platform", "data"]),
    ]
}

#[rustfmt::skip]
pub fn apis() -> Vec<Entity> {
    use EntityType::*;
    use RecordStatus::*;
    vec![
        catalog_entity("api-1", "Billing API", Api, "REST API for invoices, subscriptions and payment methods", "Backend Engineering", Active, "v3.1.0", "12 hours ago", &["Billing Database", "Auth Service"], &["rest", "payments"]),
        catalog_entity("api-2", "User Profile API", Api, "Read and update user profile data", "Backend Engineering", Active, "v2.0.4", "2 days ago", &["User Database"], &["graphql", "users"]),
        catalog_entity("api-3", "Search API", Api, "Full-text product search", "Data Engineering", Active, "v1.9.0", "1 week ago", &["Search Cluster"], &["rest", "search"]),
        catalog_entity("api-4", "Email Gateway", Api, "Transactional email delivery wrapper around the mail provider", "Platform Engineering", Active, "v1.2.0", "3 weeks ago", &[], &["email", "rest"]),
        catalog_entity("api-5", "Orders API v1", Api, "First generation order management API", "Backend Engineering", Deprecated, "v1.0.9", "1 year ago", &["Legacy Billing"], &["rest", "legacy"]),
    ]
}

#[rustfmt::skip]
pub fn resources() -> Vec<Entity> {
    use EntityType::*;
    use RecordStatus::*;
    vec![
        catalog_entity("res-1", "User Database", Library, "PostgreSQL cluster holding accounts and profiles", "Platform Engineering", Active, "v15.4", "1 day ago", &[], &["postgres", "aws"]),
        catalog_entity("res-2", "Billing Database", Library, "PostgreSQL cluster for invoices and ledgers", "Platform Engineering", Active, "v15.4", "4 days ago", &[], &["postgres", "aws"]),
        catalog_entity("res-3", "Redis Cache", Library, "Shared cache for sessions and rate limits", "Platform Engineering", Active, "v7.2", "2 weeks ago", &[], &["redis", "kubernetes"]),
        catalog_entity("res-4", "Event Bus", Library, "Kafka cluster carrying domain events", "Platform Engineering", Active, "v3.6", "5 days ago", &[], &["kafka", "kubernetes"]),
        catalog_entity("res-5", "Search Cluster", Library, "OpenSearch cluster backing product search", "Data Engineering", Inactive, "v2.11", "1 month ago", &[], &["opensearch", "aws"]),
    ]
}

#[rustfmt::skip]
pub fn domains() -> Vec<Domain> {
    let domain = |id: &str, name: &str, description: &str, owner: &str, systems: &[&str], status: RecordStatus, updated_at: &str, tags: &[&str]| Domain {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        owner: owner.to_string(),
        systems: strings(systems),
        status,
        created_at: "2022-01-15".to_string(),
        updated_at: updated_at.to_string(),
        tags: strings(tags),
    };
    vec![
        domain("dom-1", "Identity", "Who users are and what they may do", "Backend Engineering", &["Identity Platform"], RecordStatus::Active, "2024-05-02", &["security"]),
        domain("dom-2", "Commerce", "Checkout, payments and orders", "Backend Engineering", &["Payments Platform", "Orders"], RecordStatus::Active, "2024-04-18", &["payments"]),
        domain("dom-3", "Communications", "Outbound messaging to customers", "Platform Engineering", &["Messaging Platform"], RecordStatus::Active, "2024-03-30", &["messaging"]),
        domain("dom-4", "Insights", "Reporting and analytics", "Data Engineering", &["Analytics Platform"], RecordStatus::Inactive, "2023-11-09", &["data"]),
        domain("dom-5", "Brand", "Marketing presence and visual identity", "Design Studio", &[], RecordStatus::Active, "2024-02-11", &["marketing"]),
    ]
}

#[rustfmt::skip]
pub fn groups() -> Vec<Group> {
    let group = |id: &str, name: &str, description: &str, team: &str, members: u32, lead: &str, group_type: GroupType, updated_at: &str, projects: &[&str]| Group {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        team: team.to_string(),
        members,
        lead: lead.to_string(),
        created_at: "2021-09-01".to_string(),
        updated_at: updated_at.to_string(),
        group_type,
        projects: strings(projects),
    };
    vec![
        group("grp-1", "Core Platform", "Runs shared infrastructure", "Engineering Team", 9, "Morgan Lee", GroupType::Team, "2024-05-10", &["Event Bus", "Redis Cache"]),
        group("grp-2", "Web Experience", "Owns customer facing web apps", "Frontend Team", 6, "Priya Shah", GroupType::Squad, "2024-04-22", &["Customer Portal", "Design System"]),
        group("grp-3", "Payments", "Billing and checkout services", "Backend Team", 7, "Diego Alvarez", GroupType::Squad, "2024-05-01", &["Billing API"]),
        group("grp-4", "Rust Guild", "Practices and tooling for Rust services", "Engineering Team", 14, "Sam Okafor", GroupType::Guild, "2024-03-12", &["Auth Service"]),
        group("grp-5", "Visual Design", "Brand and product design", "Design Team", 5, "Alex Kim", GroupType::Team, "2024-01-28", &["Brand Site"]),
    ]
}

#[rustfmt::skip]
pub fn users() -> Vec<User> {
    let user = |id: &str, name: &str, role: &str, team: &str, description: &str, skills: &[&str], projects: &[&str]| User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
        role: role.to_string(),
        team: team.to_string(),
        avatar: String::new(),
        description: description.to_string(),
        joined_at: "2022-02-01".to_string(),
        last_active: "today".to_string(),
        skills: strings(skills),
        projects: strings(projects),
    };
    vec![
        user("usr-1", "Morgan Lee", "Engineering Manager", "Engineering Team", "Leads the core platform team", &["kubernetes", "go"], &["Event Bus"]),
        user("usr-2", "Priya Shah", "Staff Engineer", "Frontend Team", "Frontend architecture and design system", &["react", "typescript"], &["Design System", "Customer Portal"]),
        user("usr-3", "Diego Alvarez", "Senior Engineer", "Backend Team", "Billing and payments services", &["java", "rust"], &["Billing API", "Legacy Billing"]),
        user("usr-4", "Sam Okafor", "Principal Engineer", "Engineering Team", "Security and identity", &["rust", "security"], &["Auth Service"]),
        user("usr-5", "Alex Kim", "Design Lead", "Design Team", "Brand and product design", &["figma"], &["Brand Site"]),
        user("usr-6", "Jordan Reyes", "Product Manager", "Product Team", "Commerce roadmap", &["analytics"], &["Payments Platform"]),
    ]
}

#[rustfmt::skip]
pub fn templates() -> Vec<Template> {
    let template = |id: &str, name: &str, description: &str, language: &str, framework: &str, author: &str, downloads: u64, category: &str, tags: &[&str]| Template {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        language: language.to_string(),
        framework: framework.to_string(),
        author: author.to_string(),
        created_at: "2023-03-01".to_string(),
        updated_at: "2024-04-01".to_string(),
        downloads,
        tags: strings(tags),
        category: category.to_string(),
    };
    vec![
        template("tpl-1", "Rust Microservice", "HTTP service with tracing, config and CI", "Rust", "axum", "Sam Okafor", 342, "backend", &["rust", "microservice"]),
        template("tpl-2", "React Web App", "Next.js app wired to the design system", "TypeScript", "Next.js", "Priya Shah", 518, "frontend", &["react", "typescript"]),
        template("tpl-3", "Python Data Job", "Scheduled batch job with warehouse access", "Python", "Airflow", "Data Engineering", 127, "data", &["python"]),
        template("tpl-4", "Node Worker", "Kafka consumer with retries and metrics", "TypeScript", "Node.js", "Morgan Lee", 203, "backend", &["nodejs", "kafka"]),
    ]
}

/// Seed collection for a view, wrapped as records
pub fn records_for(view: ViewType) -> Vec<Record> {
    match view {
        ViewType::Components => components().into_iter().map(Record::from).collect(),
        ViewType::Systems => systems().into_iter().map(Record::from).collect(),
        ViewType::Apis => apis().into_iter().map(Record::from).collect(),
        ViewType::Resources => resources().into_iter().map(Record::from).collect(),
        ViewType::Domains => domains().into_iter().map(Record::from).collect(),
        ViewType::Groups => groups().into_iter().map(Record::from).collect(),
        ViewType::Users => users().into_iter().map(Record::from).collect(),
        ViewType::Templates => templates().into_iter().map(Record::from).collect(),
    }
}
