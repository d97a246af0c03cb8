//! TOON text form of the compact document (same `n`/`c` structure, fewer
//! tokens than JSON).
use serde_json::Value;
use toon_format::{decode_default, encode_default};
use tracing::{debug, warn};

use crate::core::error::{FlowchartError, FlowchartResult};
use crate::core::wire::{Flowchart, FlowchartData};
use crate::mapping::codec::parse_flowchart_value;

/// Coordinates at or past this magnitude are written as bare digit runs that
/// TOON reads back as strings.
const TOON_COORD_LIMIT: f64 = 1.0e18;

fn check_toon_coords(doc: &Flowchart) -> FlowchartResult<()> {
    for node in &doc.n {
        if let Some(v) = node.p.iter().find(|v| !v.is_finite() || v.abs() >= TOON_COORD_LIMIT) {
            return Err(FlowchartError::Toon {
                reason: format!("node {} coordinate {v} cannot be written as a toon number", node.i),
            });
        }
    }
    Ok(())
}

/// Renders `doc` as TOON. Non-finite coordinates and coordinates of magnitude
/// `1e18` or more are a `Toon` error.
pub fn to_toon_string(doc: &Flowchart) -> FlowchartResult<String> {
    check_toon_coords(doc)?;
    let value = serde_json::to_value(doc)?;
    let text = encode_default(&value).map_err(|e| FlowchartError::Toon {
        reason: e.to_string(),
    })?;
    debug!(bytes = text.len(), "rendered flowchart as toon");
    Ok(text)
}

/// Reads a TOON document. Text that is not TOON is a `Toon` error; TOON that
/// does not have the compact shape is `InvalidFormat`.
pub fn parse_flowchart_toon(s: &str) -> FlowchartResult<FlowchartData> {
    let value: Value = decode_default(s).map_err(|e| {
        warn!(error = %e, "rejected toon document");
        FlowchartError::Toon {
            reason: e.to_string(),
        }
    })?;
    parse_flowchart_value(value)
}
