//! Node creation, duplication and loading, backed by an owned id counter.
use tracing::debug;

use crate::core::config::MapperConfig;
use crate::core::error::{FlowchartError, FlowchartResult};
use crate::core::types::{Node, NodeId, NodeSettings, Point};
use crate::core::wire::FlowchartData;
use crate::mapping::allocator::NodeIdAllocator;
use crate::mapping::codec::{next_free_node_id, parse_flowchart_str};

/// Per-document mapping state: the id counter and its tunables.
#[derive(Debug, Clone, Default)]
pub struct FlowchartMapper {
    ids: NodeIdAllocator,
    config: MapperConfig,
}

impl FlowchartMapper {
    pub fn new() -> Self {
        Self::with_config(MapperConfig::default())
    }

    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            ids: NodeIdAllocator::starting_at(config.initial_node_id),
            config,
        }
    }

    /// Id the next created node will get.
    pub fn next_node_id(&self) -> NodeId {
        self.ids.peek()
    }

    /// Resets the counter. Used after loading a document whose nodes already
    /// carry ids; `value` must be past all of them.
    pub fn set_initial_node_id(&mut self, value: NodeId) {
        self.ids.reset(value);
    }

    pub fn create_new_node(&mut self, position: Point, is_label: bool, color: &str) -> Node {
        let id = self.ids.next_id();
        Node {
            id,
            is_label,
            text: String::new(),
            position,
            settings: NodeSettings::new(color),
        }
    }

    /// Copy of `original` under a fresh id, shifted by the duplicate offset.
    pub fn duplicate_node(&mut self, original: &Node) -> Node {
        let id = self.ids.next_id();
        debug!(source = original.id, id, "duplicated node");
        Node {
            id,
            is_label: original.is_label,
            text: original.text.clone(),
            position: original.position.offset_by(self.config.duplicate_offset),
            settings: NodeSettings::new(original.settings.color.clone()),
        }
    }

    /// Decodes `json` and moves the counter past its highest node id.
    ///
    /// The counter only moves forward here. A document already holding
    /// `NodeId::MAX` leaves no id to hand out and is `InvalidFormat`. On error
    /// the counter is untouched.
    pub fn load_flowchart(&mut self, json: &str) -> FlowchartResult<FlowchartData> {
        let data = parse_flowchart_str(json)?;
        let seed = next_free_node_id(&data.nodes).ok_or_else(|| {
            FlowchartError::invalid_format(format!(
                "node id {} is in use, no id left for new nodes",
                NodeId::MAX
            ))
        })?;
        self.ids.advance_to(seed);
        Ok(data)
    }
}
