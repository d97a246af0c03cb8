//! Data mapping for a flowchart editor.
//!
//! `core` holds the record shapes (rich nodes/connections and the compact wire
//! document). `mapping` converts between the two and hands out node ids.

pub mod core;
pub mod mapping;

pub use crate::core::config::MapperConfig;
pub use crate::core::error::{FlowchartError, FlowchartResult};
pub use crate::core::types::{Connection, Node, NodeId, NodeSettings, Point};
pub use crate::core::wire::{CompactConnection, CompactNode, Flowchart, FlowchartData};
pub use crate::mapping::allocator::NodeIdAllocator;
pub use crate::mapping::codec::{
    find_connection_index, get_flowchart_json, next_free_node_id, parse_flowchart_json,
    parse_flowchart_str, parse_flowchart_value, to_json_string, to_json_string_pretty,
};
pub use crate::mapping::mapper::FlowchartMapper;
pub use crate::mapping::toon::{parse_flowchart_toon, to_toon_string};
