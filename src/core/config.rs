use serde::{Deserialize, Serialize};

use crate::core::error::{FlowchartError, FlowchartResult};
use crate::core::types::{NodeId, Point};

/// Tunables for a [`crate::FlowchartMapper`]. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Added to the source position when duplicating a node.
    pub duplicate_offset: Point,
    /// First id handed out by a fresh mapper.
    pub initial_node_id: NodeId,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            duplicate_offset: Point::new(30.0, 30.0),
            initial_node_id: 0,
        }
    }
}

impl MapperConfig {
    pub fn from_json_str(s: &str) -> FlowchartResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FlowchartError::invalid_format(format!("mapper config: {e}")))
    }
}
