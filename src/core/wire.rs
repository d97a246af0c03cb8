//! Compact wire document: single-letter keys to keep saved charts small.
use serde::{Deserialize, Serialize};

use crate::core::types::{Connection, Node, NodeId};

/// One node in wire form.
///
/// `p` is a fixed `[x, y]` pair so serde rejects any other length on decode.
/// `l` is optional on the way in; older documents never wrote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactNode {
    #[serde(default)]
    pub l: bool,
    pub i: NodeId,
    pub t: String,
    pub p: [f64; 2],
    pub c: String,
}

/// `[from, to]`, serialized as a two element array.
pub type CompactConnection = (NodeId, NodeId);

/// The interchanged document: `{"n": [...], "c": [[from, to], ...]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Flowchart {
    pub n: Vec<CompactNode>,
    pub c: Vec<CompactConnection>,
}

/// Decoded records, in document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowchartData {
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
}

impl FlowchartData {
    pub fn new(nodes: Vec<Node>, connections: Vec<Connection>) -> Self {
        Self { nodes, connections }
    }

    /// First node with this id. Ids are unique by caller contract, so first is only.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Connections with `id` at either end, for cascading a node removal.
    pub fn connections_of(&self, id: NodeId) -> impl Iterator<Item = &Connection> + '_ {
        self.connections.iter().filter(move |c| c.touches(id))
    }
}
