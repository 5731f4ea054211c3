//! Dependency graph derived from entity `dependencies` lists.
//!
//! Dependencies are free-text names, so nodes are related by fuzzy
//! containment: two names match when either one, case-folded, contains the
//! other. This is a heuristic and can relate unrelated names that happen to
//! share a substring ("API" and "Payments API Gateway").

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;
use crate::model::{Entity, EntityType, Id};

pub const DEFAULT_GRAPH_FILE: &str = "dependency-graph.json";

/// Case-insensitive containment in either direction
pub fn fuzzy_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Raw dependency names as stored on the entity
    pub dependencies: Vec<String>,
    /// Names of entities whose dependencies fuzzy-match this node's name
    pub dependents: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphViewMode {
    Dependencies,
    Dependents,
    #[default]
    Both,
}

impl GraphViewMode {
    fn includes_dependencies(&self) -> bool {
        matches!(self, GraphViewMode::Dependencies | GraphViewMode::Both)
    }

    fn includes_dependents(&self) -> bool {
        matches!(self, GraphViewMode::Dependents | GraphViewMode::Both)
    }
}

impl std::str::FromStr for GraphViewMode {
    type Err = crate::error::CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dependencies" => Ok(GraphViewMode::Dependencies),
            "dependents" => Ok(GraphViewMode::Dependents),
            "both" => Ok(GraphViewMode::Both),
            _ => Err(crate::error::CatalogError::invalid("graph mode", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    /// Dependency edges that resolved to a node
    pub dependency_count: usize,
    pub dependent_count: usize,
    pub avg_dependencies: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DependencyGraph {
    nodes: Vec<GraphNode>,
}

impl DependencyGraph {
    pub fn from_entities(entities: &[Entity]) -> Self {
        let nodes = entities
            .iter()
            .map(|entity| GraphNode {
                id: entity.id.clone(),
                name: entity.name.clone(),
                entity_type: entity.entity_type,
                dependencies: entity.dependencies.clone(),
                dependents: entities
                    .iter()
                    .filter(|other| {
                        other
                            .dependencies
                            .iter()
                            .any(|dep| fuzzy_match(dep, &entity.name))
                    })
                    .map(|other| other.name.clone())
                    .collect(),
            })
            .collect();

        Self { nodes }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Every node whose name fuzzy-matches the dependency string
    pub fn resolve_dependency<'a>(
        &'a self,
        dependency: &'a str,
    ) -> impl Iterator<Item = &'a GraphNode> + 'a {
        self.nodes
            .iter()
            .filter(move |node| fuzzy_match(&node.name, dependency))
    }

    /// One-hop dependency targets of a node; names that match nothing are dropped
    pub fn dependency_targets<'a>(&'a self, node: &'a GraphNode) -> Vec<&'a GraphNode> {
        node.dependencies
            .iter()
            .flat_map(|dep| self.resolve_dependency(dep))
            .collect()
    }

    /// Number of the node's dependency names that match at least one node
    pub fn resolved_dependency_count(&self, node: &GraphNode) -> usize {
        node.dependencies
            .iter()
            .filter(|dep| {
                let resolved = self.resolve_dependency(dep).next().is_some();
                if !resolved {
                    log::debug!("dependency {:?} of {} has no matching node", dep, node.name);
                }
                resolved
            })
            .count()
    }

    /// Nodes visible for the given focus: everything when no focus is set
    /// or the focus id is unknown, otherwise the focus node plus its
    /// one-hop neighbours in the selected direction(s).
    pub fn view(&self, focus: Option<&str>, mode: GraphViewMode) -> GraphView<'_> {
        let Some(selected) = focus.and_then(|id| self.node(id)) else {
            return GraphView {
                graph: self,
                nodes: self.nodes.iter().collect(),
            };
        };

        let mut related: HashSet<&str> = HashSet::new();
        related.insert(selected.id.as_str());

        if mode.includes_dependencies() {
            for node in self.dependency_targets(selected) {
                related.insert(node.id.as_str());
            }
        }

        if mode.includes_dependents() {
            for node in &self.nodes {
                if selected.dependents.contains(&node.name) {
                    related.insert(node.id.as_str());
                }
            }
        }

        GraphView {
            graph: self,
            nodes: self
                .nodes
                .iter()
                .filter(|node| related.contains(node.id.as_str()))
                .collect(),
        }
    }
}

/// The node subset currently shown
#[derive(Debug, Clone)]
pub struct GraphView<'a> {
    graph: &'a DependencyGraph,
    nodes: Vec<&'a GraphNode>,
}

impl<'a> GraphView<'a> {
    pub fn nodes(&self) -> &[&'a GraphNode] {
        &self.nodes
    }

    pub fn stats(&self) -> GraphStats {
        let node_count = self.nodes.len();
        let dependency_count: usize = self
            .nodes
            .iter()
            .map(|node| self.graph.resolved_dependency_count(node))
            .sum();
        let dependent_count = self.nodes.iter().map(|node| node.dependents.len()).sum();
        let avg_dependencies = if node_count == 0 {
            0.0
        } else {
            (dependency_count as f64 / node_count as f64 * 10.0).round() / 10.0
        };

        GraphStats {
            node_count,
            dependency_count,
            dependent_count,
            avg_dependencies,
        }
    }

    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(&self.nodes)?)
    }

    pub fn export_to(&self, path: &Path) -> CatalogResult<()> {
        std::fs::write(path, self.to_json()?)?;
        log::info!(
            "exported {} graph nodes to {}",
            self.nodes.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{entity, entity_with_deps};

    fn sample() -> DependencyGraph {
        DependencyGraph::from_entities(&[
            entity_with_deps("1", "Auth Service", &["Database"]),
            entity("2", "User Database"),
            entity_with_deps("3", "Web Portal", &["auth", "CDN"]),
            entity("4", "Billing"),
        ])
    }

    fn ids(view: &GraphView) -> Vec<String> {
        view.nodes().iter().map(|n| n.id.clone()).collect()
    }

    #[test]
    fn test_fuzzy_match_is_symmetric_containment() {
        assert!(fuzzy_match("Database", "User Database"));
        assert!(fuzzy_match("User Database", "database"));
        assert!(!fuzzy_match("Billing", "Database"));
    }

    #[test]
    fn test_dependents_are_derived() {
        let graph = sample();
        assert_eq!(graph.node("1").unwrap().dependents, vec!["Web Portal"]);
        assert_eq!(graph.node("2").unwrap().dependents, vec!["Auth Service"]);
        assert!(graph.node("4").unwrap().dependents.is_empty());
    }

    #[test]
    fn test_focus_dependencies_only() {
        let graph = sample();
        let view = graph.view(Some("1"), GraphViewMode::Dependencies);
        assert_eq!(ids(&view), vec!["1", "2"]);
    }

    #[test]
    fn test_focus_dependencies_includes_every_fuzzy_match() {
        let graph = DependencyGraph::from_entities(&[
            entity_with_deps("1", "Auth Service", &["Database"]),
            entity("2", "User Database"),
            entity("3", "Billing"),
            entity("4", "Database"),
        ]);
        let view = graph.view(Some("1"), GraphViewMode::Dependencies);
        assert_eq!(ids(&view), vec!["1", "2", "4"]);
        assert_eq!(view.stats().dependency_count, 1);
    }

    #[test]
    fn test_focus_dependents_only_is_single_hop() {
        let graph = sample();
        let view = graph.view(Some("2"), GraphViewMode::Dependents);
        // Web Portal depends on Auth Service, not on User Database directly
        assert_eq!(ids(&view), vec!["1", "2"]);
    }

    #[test]
    fn test_focus_both_directions() {
        let graph = sample();
        let view = graph.view(Some("1"), GraphViewMode::Both);
        assert_eq!(ids(&view), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_no_or_unknown_focus_shows_everything() {
        let graph = sample();
        assert_eq!(graph.view(None, GraphViewMode::Both).nodes().len(), 4);
        assert_eq!(graph.view(Some("missing"), GraphViewMode::Both).nodes().len(), 4);
    }

    #[test]
    fn test_stats_count_only_resolved_dependencies() {
        let graph = sample();
        let stats = graph.view(None, GraphViewMode::Both).stats();
        // "CDN" resolves to nothing and is dropped
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.dependency_count, 2);
        assert_eq!(stats.dependent_count, 2);
        assert_eq!(stats.avg_dependencies, 0.5);

        let empty = DependencyGraph::default();
        assert_eq!(empty.view(None, GraphViewMode::Both).stats().avg_dependencies, 0.0);
    }

    #[test]
    fn test_export_json_contains_visible_nodes() {
        let graph = sample();
        let json = graph.view(Some("1"), GraphViewMode::Dependencies).to_json().unwrap();
        let parsed: Vec<GraphNode> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "Auth Service");
        assert_eq!(parsed[0].dependencies, vec!["Database"]);
        assert!(json.contains("\n  {"));
    }
}
