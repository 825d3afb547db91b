//! Person → module knowledge graph.
//!
//! Built with a petgraph `StableGraph` plus an id → node index map. One
//! node per person and module, one edge per link whose endpoints both exist.

use keyholder_core::types::collections::FxHashMap;
use keyholder_core::types::{LinkType, ModuleId, PersonId, Snapshot};
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum GraphNode {
    Person(PersonId),
    Module(ModuleId),
}

/// A link as seen from the graph: both endpoints resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEdge {
    pub person: PersonId,
    pub module: ModuleId,
    pub strength: u8,
    pub link_type: LinkType,
}

#[derive(Debug, Clone, Copy)]
struct EdgeWeight {
    strength: u8,
    link_type: LinkType,
}

#[derive(Debug, Default)]
pub struct KnowledgeGraph {
    graph: StableGraph<GraphNode, EdgeWeight, Directed>,
    people: FxHashMap<PersonId, NodeIndex>,
    modules: FxHashMap<ModuleId, NodeIndex>,
}

impl KnowledgeGraph {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut kg = Self::default();

        for person in snapshot.people() {
            let idx = kg.graph.add_node(GraphNode::Person(person.id.clone()));
            kg.people.insert(person.id.clone(), idx);
        }
        for module in snapshot.modules() {
            let idx = kg.graph.add_node(GraphNode::Module(module.id.clone()));
            kg.modules.insert(module.id.clone(), idx);
        }

        let mut skipped = 0usize;
        for link in snapshot.links() {
            match (kg.people.get(&link.source), kg.modules.get(&link.target)) {
                (Some(&from), Some(&to)) => {
                    kg.graph.add_edge(
                        from,
                        to,
                        EdgeWeight {
                            strength: link.strength,
                            link_type: link.link_type,
                        },
                    );
                }
                _ => skipped += 1,
            }
        }

        tracing::debug!(
            nodes = kg.node_count(),
            edges = kg.edge_count(),
            skipped,
            "knowledge graph built"
        );
        kg
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Links leaving `person_id`, in insertion order.
    pub fn links_from_person(&self, person_id: &str) -> Vec<LinkEdge> {
        let Some(&idx) = self.people.get(person_id) else {
            return Vec::new();
        };
        let mut links = self.collect(idx, Direction::Outgoing);
        // petgraph walks adjacency lists newest first
        links.reverse();
        links
    }

    /// Links into `module_id`, strongest first. Ties keep insertion order.
    pub fn links_into_module(&self, module_id: &str) -> Vec<LinkEdge> {
        let Some(&idx) = self.modules.get(module_id) else {
            return Vec::new();
        };
        let mut links = self.collect(idx, Direction::Incoming);
        links.reverse();
        links.sort_by(|a, b| b.strength.cmp(&a.strength));
        links
    }

    fn collect(&self, idx: NodeIndex, direction: Direction) -> Vec<LinkEdge> {
        self.graph
            .edges_directed(idx, direction)
            .filter_map(|edge| {
                let (GraphNode::Person(person), GraphNode::Module(module)) =
                    (&self.graph[edge.source()], &self.graph[edge.target()])
                else {
                    return None;
                };
                Some(LinkEdge {
                    person: person.clone(),
                    module: module.clone(),
                    strength: edge.weight().strength,
                    link_type: edge.weight().link_type,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyholder_core::types::DependencyLink;

    fn link(source: &str, target: &str, strength: u8) -> DependencyLink {
        DependencyLink {
            source: source.into(),
            target: target.into(),
            strength,
            link_type: LinkType::Contributes,
        }
    }

    #[test]
    fn test_dangling_links_are_not_edges() {
        let snapshot = Snapshot::new(vec![], vec![], vec![link("p1", "m1", 50)]).unwrap();
        let graph = KnowledgeGraph::from_snapshot(&snapshot);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.links_from_person("p1").is_empty());
        assert!(graph.links_into_module("m1").is_empty());
    }
}
