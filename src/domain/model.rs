use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const TEXT_NODE_TYPE: &str = "TEXT";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

/// A node of the remote document tree. Only the fields the extractor reads are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(
        rename = "absoluteBoundingBox",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub absolute_bounding_box: Option<BoundingBox>,
}

impl Node {
    pub fn is_text(&self) -> bool {
        self.node_type == TEXT_NODE_TYPE
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeEntry {
    pub document: Node,
}

/// Body of `GET /v1/files/{key}/nodes`. Entries may be `null` for ids the file lacks.
#[derive(Debug, Clone, Deserialize)]
pub struct FileNodesResponse {
    #[serde(default)]
    pub nodes: HashMap<String, Option<NodeEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub alias: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Web,
    Ios,
    Android,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Web, Platform::Ios, Platform::Android];

    pub fn file_name(&self) -> &'static str {
        match self {
            Platform::Web => "tokens.web.json",
            Platform::Ios => "tokens.ios.json",
            Platform::Android => "tokens.android.json",
        }
    }

    /// Unit that replaces `px`; `None` keeps values verbatim.
    pub fn target_unit(&self) -> Option<&'static str> {
        match self {
            Platform::Web => None,
            Platform::Ios => Some("pt"),
            Platform::Android => Some("dp"),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Web => write!(f, "web"),
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
        }
    }
}

/// Insertion-ordered key/value mapping; inserting an existing key keeps its position.
pub type PlatformMapping = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSet {
    pub web: PlatformMapping,
    pub ios: PlatformMapping,
    pub android: PlatformMapping,
}

impl TokenSet {
    pub fn mapping(&self, platform: Platform) -> &PlatformMapping {
        match platform {
            Platform::Web => &self.web,
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_deserializes_figma_shape() {
        let node: Node = serde_json::from_value(serde_json::json!({
            "id": "3:4",
            "name": "alias",
            "type": "TEXT",
            "characters": " color_primary ",
            "absoluteBoundingBox": {"x": 12.5, "y": 40.0, "width": 80.0, "height": 16.0},
            "style": {"fontSize": 14}
        }))
        .unwrap();

        assert!(node.is_text());
        assert!(node.children.is_empty());
        assert_eq!(node.characters.as_deref(), Some(" color_primary "));
        assert_eq!(node.absolute_bounding_box.unwrap().x, 12.5);
    }

    #[test]
    fn test_frame_without_text_fields() {
        let node: Node = serde_json::from_value(serde_json::json!({
            "type": "FRAME",
            "children": [{"type": "RECTANGLE"}]
        }))
        .unwrap();

        assert!(!node.is_text());
        assert_eq!(node.children.len(), 1);
        assert!(node.children[0].absolute_bounding_box.is_none());
        assert!(node.characters.is_none());
    }

    #[test]
    fn test_null_node_entry() {
        let response: FileNodesResponse =
            serde_json::from_str(r#"{"name": "Tokens", "nodes": {"1:2": null}}"#).unwrap();
        assert!(response.nodes.get("1:2").unwrap().is_none());
    }

    #[test]
    fn test_platform_files_and_units() {
        let names: Vec<_> = Platform::ALL.iter().map(|p| p.file_name()).collect();
        assert_eq!(
            names,
            vec!["tokens.web.json", "tokens.ios.json", "tokens.android.json"]
        );
        assert_eq!(Platform::Web.target_unit(), None);
        assert_eq!(Platform::Ios.target_unit(), Some("pt"));
        assert_eq!(Platform::Android.target_unit(), Some("dp"));
    }
}
