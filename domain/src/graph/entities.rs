//! Knowledge graph entities.
//!
//! The backend extracts entities from documents and links them into a
//! directed, labeled graph. Nodes carry a `group` tag (the entity type as
//! the backend spells it) and a `type` discriminator separating entity
//! nodes from document nodes.

use serde::{Deserialize, Serialize};

/// Entity classification assigned by the backend's NER stage.
///
/// [`Unknown`](Self::Unknown) covers tags this client does not recognize;
/// they are still rendered, with the topic styling as fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Person,
    Organization,
    Location,
    Topic,
    Event,
    Document,
    Unknown,
}

impl EntityType {
    /// Map a backend `group` tag to an entity type.
    pub fn from_group(group: &str) -> Self {
        match group {
            "PERSON" => EntityType::Person,
            "ORGANIZATION" => EntityType::Organization,
            "LOCATION" => EntityType::Location,
            "TOPIC" => EntityType::Topic,
            "EVENT" => EntityType::Event,
            "Document" => EntityType::Document,
            _ => EntityType::Unknown,
        }
    }
}

/// Discriminates how a node behaves, independent of its `group` styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A knowledge-graph entity; double-click inspects it.
    Entity,
    /// A source document; double-click opens it.
    Document,
    /// Anything else; rendered but inert.
    #[default]
    Other,
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "entity" => NodeKind::Entity,
            "document" => NodeKind::Document,
            _ => NodeKind::Other,
        })
    }
}

/// A node of the knowledge graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    /// Entity-type tag as the backend spells it (e.g. `PERSON`).
    #[serde(default)]
    pub group: String,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// Set on document nodes; the document is reachable at `/documents/{doc_id}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
}

/// A directed, labeled edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub label: String,
}

/// A graph neighborhood as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl GraphData {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_type_from_group() {
        assert_eq!(EntityType::from_group("PERSON"), EntityType::Person);
        assert_eq!(EntityType::from_group("Document"), EntityType::Document);
        assert_eq!(EntityType::from_group("GADGET"), EntityType::Unknown);
    }

    #[test]
    fn node_kind_deserializes_unknown_as_other() {
        let node: GraphNode = serde_json::from_str(
            r#"{"id": "n1", "label": "Chunk 3", "type": "chunk"}"#,
        )
        .unwrap();
        assert_eq!(node.kind, NodeKind::Other);
    }

    #[test]
    fn graph_data_parses_backend_shape() {
        let data: GraphData = serde_json::from_str(
            r#"{
                "nodes": [
                    {"id": "e1", "label": "Ada Lovelace", "group": "PERSON", "type": "entity"},
                    {"id": "d1", "label": "Notes", "group": "Document", "type": "document", "doc_id": "abc"}
                ],
                "edges": [{"from": "d1", "to": "e1", "label": "MENTIONS"}]
            }"#,
        )
        .unwrap();
        assert_eq!(data.nodes.len(), 2);
        assert_eq!(data.nodes[0].kind, NodeKind::Entity);
        assert_eq!(data.nodes[1].doc_id.as_deref(), Some("abc"));
        assert_eq!(data.edges[0].label, "MENTIONS");
        assert!(!data.is_empty());
    }
}
