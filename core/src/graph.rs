use rustc_hash::FxHashMap;

type NodeIndex = usize;
type EdgeIndex = usize;

#[derive(Debug, Clone)]
struct EdgeEntry {
    source: NodeIndex,
    target: NodeIndex,
    weight: u32,
}

/// A weighted collaboration between two artists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub weight: u32,
}

/// Undirected, simple, weighted graph keyed by artist display name.
///
/// Nodes and edges iterate in insertion order. Nothing is ever removed and
/// weights only grow, so the graph is safe to hand to renderers mid-run.
#[derive(Debug, Clone, Default)]
pub struct CollaborationGraph {
    nodes: Vec<String>,
    node_index: FxHashMap<String, NodeIndex>,
    edges: Vec<EdgeEntry>,
    edge_index: FxHashMap<(NodeIndex, NodeIndex), EdgeIndex>,
    adjacency: Vec<Vec<EdgeIndex>>,
}

impl CollaborationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node; returns `false` if it was already present.
    pub fn add_node(&mut self, name: &str) -> bool {
        let before = self.nodes.len();
        self.ensure_node(name);
        self.nodes.len() > before
    }

    fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.node_index.get(name) {
            return index;
        }

        let index = self.nodes.len();
        self.nodes.push(name.to_string());
        self.node_index.insert(name.to_string(), index);
        self.adjacency.push(Vec::new());
        index
    }

    /// Records one co-credit between `a` and `b` and returns the new weight.
    ///
    /// Missing nodes are created. Returns `None` for a self-loop.
    pub fn add_collaboration(&mut self, a: &str, b: &str) -> Option<u32> {
        if a == b {
            return None;
        }

        let a_index = self.ensure_node(a);
        let b_index = self.ensure_node(b);
        let key = edge_key(a_index, b_index);

        if let Some(&edge) = self.edge_index.get(&key) {
            let entry = &mut self.edges[edge];
            entry.weight += 1;
            return Some(entry.weight);
        }

        let edge = self.edges.len();
        self.edges.push(EdgeEntry {
            source: a_index,
            target: b_index,
            weight: 1,
        });
        self.edge_index.insert(key, edge);
        self.adjacency[a_index].push(edge);
        self.adjacency[b_index].push(edge);
        Some(1)
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        let a_index = *self.node_index.get(a)?;
        let b_index = *self.node_index.get(b)?;
        self.edge_index
            .get(&edge_key(a_index, b_index))
            .map(|&edge| self.edges[edge].weight)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.weight(a, b).is_some()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.edges.iter().map(|entry| self.edge_view(entry))
    }

    /// Neighbors of `name` with the weight of the connecting edge, in edge
    /// insertion order. Unknown names have no neighbors.
    pub fn neighbors<'a>(&'a self, name: &str) -> impl Iterator<Item = (&'a str, u32)> + 'a {
        let node = self.node_index.get(name).copied();

        node.into_iter().flat_map(move |index| {
            self.adjacency[index].iter().map(move |&edge| {
                let entry = &self.edges[edge];
                let other = if entry.source == index {
                    entry.target
                } else {
                    entry.source
                };
                (self.nodes[other].as_str(), entry.weight)
            })
        })
    }

    pub fn degree(&self, name: &str) -> usize {
        self.node_index
            .get(name)
            .map(|&index| self.adjacency[index].len())
            .unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|entry| u64::from(entry.weight)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The `limit` heaviest edges; ties keep insertion order.
    pub fn heaviest_edges(&self, limit: usize) -> Vec<Edge<'_>> {
        let mut edges: Vec<Edge<'_>> = self.edges().collect();
        edges.sort_by(|a, b| b.weight.cmp(&a.weight));
        edges.truncate(limit);
        edges
    }

    fn edge_view(&self, entry: &EdgeEntry) -> Edge<'_> {
        Edge {
            source: &self.nodes[entry.source],
            target: &self.nodes[entry.target],
            weight: entry.weight,
        }
    }
}

fn edge_key(a: NodeIndex, b: NodeIndex) -> (NodeIndex, NodeIndex) {
    if a <= b { (a, b) } else { (b, a) }
}
