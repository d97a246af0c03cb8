//! Rich in-memory records the editor works with.
use serde::{Deserialize, Serialize};

/// Node identifier, unique within one flowchart.
pub type NodeId = u32;

/// Position in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_by(self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeSettings {
    pub color: String,
}

impl NodeSettings {
    pub fn new(color: impl Into<String>) -> Self {
        Self { color: color.into() }
    }
}

/// A flowchart box or label.
///
/// `id` is assigned once (by allocation or decoding) and never changes while the
/// node lives. Label nodes render as plain text; otherwise they behave the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub is_label: bool,
    pub text: String,
    pub position: Point,
    pub settings: NodeSettings,
}

impl Node {
    pub fn new(
        id: NodeId,
        is_label: bool,
        text: impl Into<String>,
        position: Point,
        settings: NodeSettings,
    ) -> Self {
        Self {
            id,
            is_label,
            text: text.into(),
            position,
            settings,
        }
    }
}

/// Directed edge between two nodes, by id value only.
///
/// Endpoints are not checked against any node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub from_node_id: NodeId,
    pub to_node_id: NodeId,
}

impl Connection {
    pub fn new(from_node_id: NodeId, to_node_id: NodeId) -> Self {
        Self {
            from_node_id,
            to_node_id,
        }
    }

    pub fn touches(&self, id: NodeId) -> bool {
        self.from_node_id == id || self.to_node_id == id
    }
}
