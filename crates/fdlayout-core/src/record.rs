//! Plain-data import/export shape for graphs.
//!
//! These records mirror the JSON documents exchanged with callers:
//!
//! ```json
//! {
//!   "nodes": [{ "id": "a", "x": 0, "y": 0, "width": 100, "height": 100 }],
//!   "edges": [{ "source": "a", "destination": "b" }]
//! }
//! ```
//!
//! Optional geometry fields fall back to the origin and the default node
//! size on import. Export always fills them in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque key-value payload carried by nodes and edges.
pub type DataMap = IndexMap<String, String>;

/// A whole graph in plain-data form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphRecord {
    pub nodes: Vec<NodeRecord>,

    #[serde(default)]
    pub edges: Vec<EdgeRecord>,

    /// Import-time settings; never emitted on export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<GraphProperties>,
}

/// Graph-wide import settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphProperties {
    /// Width and height given to nodes whose record omits them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_node_size: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub data: DataMap,
}

impl NodeRecord {
    /// A record carrying only an id; every other field takes its default.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
    pub source: String,
    pub destination: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub data: DataMap,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            data: DataMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_document() {
        let json = r#"{
            "nodes": [{ "id": "1" }, { "id": "2", "x": 5, "width": 40 }],
            "edges": [{ "source": "1", "destination": "2", "data": { "kind": "calls" } }]
        }"#;

        let record: GraphRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.nodes.len(), 2);
        assert_eq!(record.nodes[0], NodeRecord::new("1"));
        assert_eq!(record.nodes[1].x, Some(5.0));
        assert_eq!(record.nodes[1].y, None);
        assert_eq!(record.nodes[1].width, Some(40.0));
        assert_eq!(record.edges[0].data.get("kind").map(String::as_str), Some("calls"));
        assert!(record.properties.is_none());
    }

    #[test]
    fn test_deserialize_properties() {
        let json = r#"{ "nodes": [], "properties": { "defaultNodeSize": 60 } }"#;

        let record: GraphRecord = serde_json::from_str(json).unwrap();

        assert!(record.edges.is_empty());
        assert_eq!(
            record.properties.and_then(|p| p.default_node_size),
            Some(60.0)
        );
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let record = GraphRecord {
            nodes: vec![NodeRecord::new("a")],
            edges: vec![EdgeRecord::new("a", "a")],
            properties: None,
        };

        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(
            json,
            r#"{"nodes":[{"id":"a"}],"edges":[{"source":"a","destination":"a"}]}"#
        );
    }
}
