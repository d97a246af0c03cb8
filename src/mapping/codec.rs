//! Rich <-> compact mapping.
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::error::{FlowchartError, FlowchartResult};
use crate::core::types::{Connection, Node, NodeId, NodeSettings, Point};
use crate::core::wire::{CompactConnection, CompactNode, Flowchart, FlowchartData};

fn compact_node(node: &Node) -> CompactNode {
    CompactNode {
        l: node.is_label,
        i: node.id,
        t: node.text.clone(),
        p: [node.position.x, node.position.y],
        c: node.settings.color.clone(),
    }
}

fn expand_node(node: &CompactNode) -> Node {
    let [x, y] = node.p;
    Node {
        id: node.i,
        is_label: node.l,
        text: node.t.clone(),
        position: Point::new(x, y),
        settings: NodeSettings::new(node.c.clone()),
    }
}

/// Encodes nodes and connections into the compact document, keeping input order.
pub fn get_flowchart_json(nodes: &[Node], connections: &[Connection]) -> Flowchart {
    let doc = Flowchart {
        n: nodes.iter().map(compact_node).collect(),
        c: connections
            .iter()
            .map(|conn| -> CompactConnection { (conn.from_node_id, conn.to_node_id) })
            .collect(),
    };
    debug!(nodes = doc.n.len(), connections = doc.c.len(), "encoded flowchart");
    doc
}

/// Inverse of [`get_flowchart_json`].
///
/// A typed [`Flowchart`] already has the right shape, so this cannot fail; raw
/// input goes through [`parse_flowchart_str`] or [`parse_flowchart_value`].
pub fn parse_flowchart_json(doc: &Flowchart) -> FlowchartData {
    let data = FlowchartData {
        nodes: doc.n.iter().map(expand_node).collect(),
        connections: doc
            .c
            .iter()
            .map(|&(from, to)| Connection::new(from, to))
            .collect(),
    };
    debug!(
        nodes = data.nodes.len(),
        connections = data.connections.len(),
        "decoded flowchart"
    );
    data
}

fn rejected(e: serde_json::Error) -> FlowchartError {
    warn!(error = %e, "rejected flowchart document");
    FlowchartError::invalid_format(e.to_string())
}

/// Decodes a JSON document. Anything that is not the compact shape is
/// `InvalidFormat`; nothing is partially populated.
pub fn parse_flowchart_str(s: &str) -> FlowchartResult<FlowchartData> {
    let doc: Flowchart = serde_json::from_str(s).map_err(rejected)?;
    Ok(parse_flowchart_json(&doc))
}

pub fn parse_flowchart_value(value: Value) -> FlowchartResult<FlowchartData> {
    let doc: Flowchart = serde_json::from_value(value).map_err(rejected)?;
    Ok(parse_flowchart_json(&doc))
}

pub fn to_json_string(doc: &Flowchart) -> FlowchartResult<String> {
    Ok(serde_json::to_string(doc)?)
}

pub fn to_json_string_pretty(doc: &Flowchart) -> FlowchartResult<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Index of the first connection `from -> to`, `None` if there is none.
pub fn find_connection_index(
    connections: &[Connection],
    from_id: NodeId,
    to_id: NodeId,
) -> Option<usize> {
    connections
        .iter()
        .position(|c| c.from_node_id == from_id && c.to_node_id == to_id)
}

/// Seed for the id counter after loading: one past the highest id, `Some(0)`
/// when there are no nodes, `None` when the highest id is `NodeId::MAX`.
pub fn next_free_node_id(nodes: &[Node]) -> Option<NodeId> {
    match nodes.iter().map(|n| n.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mk_node(id: NodeId, is_label: bool, text: &str, x: f64, y: f64, color: &str) -> Node {
        Node::new(id, is_label, text, Point::new(x, y), NodeSettings::new(color))
    }

    fn conns(pairs: &[(NodeId, NodeId)]) -> Vec<Connection> {
        pairs.iter().map(|&(f, t)| Connection::new(f, t)).collect()
    }

    #[test]
    fn encodes_single_label_node_to_compact_keys() {
        let nodes = vec![mk_node(3, true, "hi", 1.0, 2.0, "#fff")];

        let doc = get_flowchart_json(&nodes, &[]);

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({ "n": [{ "l": true, "i": 3, "t": "hi", "p": [1.0, 2.0], "c": "#fff" }], "c": [] })
        );
    }

    #[test]
    fn empty_lists_encode_and_decode_to_empty() {
        let doc = get_flowchart_json(&[], &[]);
        assert_eq!(doc, Flowchart::default());
        assert_eq!(to_json_string(&doc).unwrap(), r#"{"n":[],"c":[]}"#);

        let data = parse_flowchart_json(&Flowchart::default());
        assert!(data.nodes.is_empty());
        assert!(data.connections.is_empty());
    }

    #[test]
    fn encode_then_decode_keeps_every_field_and_order() {
        let nodes = vec![
            mk_node(9, false, "end", -4.25, 100.0, "#123456"),
            mk_node(2, true, "note", 0.5, 0.0, "red"),
            mk_node(5, false, "", 3.0, 3.0, ""),
        ];
        let connections = conns(&[(9, 2), (2, 5), (9, 2)]);

        let data = parse_flowchart_json(&get_flowchart_json(&nodes, &connections));

        assert_eq!(data.nodes, nodes);
        assert_eq!(data.connections, connections);
    }

    #[test]
    fn parse_str_reads_compact_document() {
        let data = parse_flowchart_str(
            r##"{"n":[{"l":false,"i":0,"t":"a","p":[10,20],"c":"#000"}],"c":[[0,0]]}"##,
        )
        .unwrap();

        assert_eq!(data.nodes, vec![mk_node(0, false, "a", 10.0, 20.0, "#000")]);
        assert_eq!(data.connections, conns(&[(0, 0)]));
    }

    #[test]
    fn parse_accepts_documents_without_label_flag() {
        let data = parse_flowchart_value(json!({
            "n": [{ "i": 1, "t": "legacy", "p": [0, 0], "c": "#fff" }],
            "c": []
        }))
        .unwrap();

        assert!(!data.nodes[0].is_label);
    }

    #[test]
    fn parse_rejects_short_position() {
        let err = parse_flowchart_value(json!({
            "n": [{ "l": false, "i": 1, "t": "", "p": [1.0], "c": "#fff" }],
            "c": []
        }))
        .unwrap_err();

        assert!(err.is_invalid_format(), "unexpected error: {}", err);
    }

    #[test]
    fn parse_rejects_long_position() {
        let err = parse_flowchart_str(
            r##"{"n":[{"l":false,"i":1,"t":"","p":[1,2,3],"c":"#fff"}],"c":[]}"##,
        )
        .unwrap_err();

        assert!(err.is_invalid_format(), "unexpected error: {}", err);
    }

    #[test]
    fn parse_rejects_non_array_connection() {
        let err = parse_flowchart_value(json!({ "n": [], "c": [{ "from": 1, "to": 2 }] }))
            .unwrap_err();

        match err {
            FlowchartError::InvalidFormat { .. } => {}
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn parse_rejects_three_element_connection() {
        let err = parse_flowchart_value(json!({ "n": [], "c": [[1, 2, 3]] })).unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn parse_rejects_missing_required_field() {
        //no "t"
        let err = parse_flowchart_value(json!({
            "n": [{ "l": false, "i": 1, "p": [1.0, 2.0], "c": "#fff" }],
            "c": []
        }))
        .unwrap_err();

        match err {
            FlowchartError::InvalidFormat { reason } => {
                assert!(reason.contains("missing field"), "{}", reason)
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn parse_rejects_missing_top_level_arrays_and_bad_json() {
        assert!(parse_flowchart_value(json!({ "n": [] })).unwrap_err().is_invalid_format());
        assert!(parse_flowchart_str("{\"n\": [").unwrap_err().is_invalid_format());
    }

    #[test]
    fn parse_does_not_validate_endpoints_or_duplicate_ids() {
        let data = parse_flowchart_value(json!({
            "n": [
                { "l": false, "i": 1, "t": "a", "p": [0, 0], "c": "" },
                { "l": false, "i": 1, "t": "b", "p": [0, 0], "c": "" }
            ],
            "c": [[1, 42]]
        }))
        .unwrap();

        assert_eq!(data.nodes.len(), 2);
        assert_eq!(data.connections, conns(&[(1, 42)]));
    }

    #[test]
    fn find_connection_index_returns_first_match() {
        let connections = conns(&[(1, 2), (2, 3), (1, 2)]);

        assert_eq!(find_connection_index(&connections, 1, 2), Some(0));
        assert_eq!(find_connection_index(&connections, 2, 3), Some(1));
        assert_eq!(find_connection_index(&connections, 9, 9), None);
        //direction matters
        assert_eq!(find_connection_index(&connections, 2, 1), None);
    }

    #[test]
    fn next_free_node_id_is_one_past_max() {
        assert_eq!(next_free_node_id(&[]), Some(0));

        let nodes = vec![
            mk_node(4, false, "", 0.0, 0.0, ""),
            mk_node(11, false, "", 0.0, 0.0, ""),
            mk_node(7, false, "", 0.0, 0.0, ""),
        ];
        assert_eq!(next_free_node_id(&nodes), Some(12));
    }

    #[test]
    fn next_free_node_id_is_none_when_max_id_is_taken() {
        let nodes = vec![
            mk_node(0, false, "", 0.0, 0.0, ""),
            mk_node(NodeId::MAX, false, "", 0.0, 0.0, ""),
        ];
        assert_eq!(next_free_node_id(&nodes), None);
    }

    #[test]
    fn pretty_output_parses_back() {
        let nodes = vec![mk_node(1, false, "x", 1.0, 1.0, "blue")];
        let text = to_json_string_pretty(&get_flowchart_json(&nodes, &conns(&[(1, 1)]))).unwrap();

        let data = parse_flowchart_str(&text).unwrap();
        assert_eq!(data.nodes, nodes);
    }
}
