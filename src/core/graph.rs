use petgraph::{algo, graph::NodeIndex, Directed, Graph};
use std::collections::HashMap;

/// One artifact or library reference seen during a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    pub path: String,
}

/// Edge weight: the artifact links against the target reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link;

pub type DependencyGraph = Graph<Library, Link, Directed>;

impl Library {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

pub struct GraphBuilder {
    graph: DependencyGraph,
    node_map: HashMap<String, NodeIndex>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Index of `path`, adding a node on first sight
    pub fn node(&mut self, path: &str) -> NodeIndex {
        if let Some(index) = self.node_map.get(path) {
            return *index;
        }
        let index = self.graph.add_node(Library::new(path));
        self.node_map.insert(path.to_string(), index);
        index
    }

    /// Adds `from -> to` unless that link is already present
    pub fn add_link(&mut self, from: &str, to: &str) -> Option<petgraph::graph::EdgeIndex> {
        let source = self.node(from);
        let target = self.node(to);
        if self.graph.find_edge(source, target).is_some() {
            return None;
        }
        Some(self.graph.add_edge(source, target, Link))
    }

    pub fn get_node_index(&self, path: &str) -> Option<NodeIndex> {
        self.node_map.get(path).copied()
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }
}

/// True when some library transitively links back to itself
pub fn has_cycles(graph: &DependencyGraph) -> bool {
    algo::is_cyclic_directed(graph)
}
