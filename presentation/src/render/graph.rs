//! Knowledge graph view builder.
//!
//! Binds backend graph data to a force-directed network widget spec and
//! exposes the double-click dispatch as an explicit operation: inspecting
//! an entity invokes the caller's callback, double-clicking a document
//! yields the document URL to open.

use kb_domain::{EntityType, GraphData, GraphNode, NodeKind};
use serde_json::{json, Value};

/// Physics tuning for the force-directed solver.
const GRAVITATIONAL_CONSTANT: f64 = -40.0;
const CENTRAL_GRAVITY: f64 = 0.005;
const SPRING_LENGTH: u32 = 150;
const SPRING_CONSTANT: f64 = 0.08;
/// Layout settles after at most this many stabilization iterations.
const STABILIZATION_ITERATIONS: u32 = 100;

const DOCUMENT_NODE_SIZE: u32 = 15;
const ENTITY_NODE_SIZE: u32 = 20;

/// Colors for one node class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub background: &'static str,
    pub border: &'static str,
    pub font: &'static str,
}

const PERSON_STYLE: NodeStyle = NodeStyle {
    background: "#3B82F6",
    border: "#2563EB",
    font: "#ffffff",
};
const ORGANIZATION_STYLE: NodeStyle = NodeStyle {
    background: "#10B981",
    border: "#059669",
    font: "#ffffff",
};
const LOCATION_STYLE: NodeStyle = NodeStyle {
    background: "#F59E0B",
    border: "#D97706",
    font: "#ffffff",
};
const TOPIC_STYLE: NodeStyle = NodeStyle {
    background: "#8B5CF6",
    border: "#7C3AED",
    font: "#ffffff",
};
const EVENT_STYLE: NodeStyle = NodeStyle {
    background: "#EF4444",
    border: "#DC2626",
    font: "#ffffff",
};
const DOCUMENT_STYLE: NodeStyle = NodeStyle {
    background: "#6B7280",
    border: "#4B5563",
    font: "#ffffff",
};

/// Style for a backend `group` tag; unrecognized tags reuse the topic
/// palette.
pub fn node_style(group: &str) -> NodeStyle {
    match EntityType::from_group(group) {
        EntityType::Person => PERSON_STYLE,
        EntityType::Organization => ORGANIZATION_STYLE,
        EntityType::Location => LOCATION_STYLE,
        EntityType::Topic | EntityType::Unknown => TOPIC_STYLE,
        EntityType::Event => EVENT_STYLE,
        EntityType::Document => DOCUMENT_STYLE,
    }
}

/// What a double-click on a node should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeAction {
    /// Inspect the entity with this label (e.g. load its neighborhood).
    InspectEntity(String),
    /// Open this document URL in a new tab/window.
    OpenDocument(String),
}

/// A built network view: widget spec plus the nodes for interaction
/// dispatch.
#[derive(Debug, Clone)]
pub struct GraphView {
    nodes: Vec<GraphNode>,
    spec: Value,
}

/// Build the network spec for a graph neighborhood.
///
/// Returns `None` when there are no nodes to show.
pub fn build_graph(data: &GraphData) -> Option<GraphView> {
    if data.nodes.is_empty() {
        return None;
    }

    let nodes: Vec<Value> = data
        .nodes
        .iter()
        .map(|n| {
            let style = node_style(&n.group);
            let is_document = n.kind == NodeKind::Document;
            json!({
                "id": n.id,
                "label": n.label,
                "group": n.group,
                "color": {
                    "background": style.background,
                    "border": style.border,
                    "highlight": { "background": style.background, "border": "#000" },
                },
                "font": { "color": style.font, "size": 12 },
                "shape": (if is_document { "box" } else { "dot" }),
                "size": (if is_document { DOCUMENT_NODE_SIZE } else { ENTITY_NODE_SIZE }),
                "title": format!("{} ({})", n.label, n.group),
            })
        })
        .collect();

    let edges: Vec<Value> = data
        .edges
        .iter()
        .enumerate()
        .map(|(i, e)| {
            json!({
                "id": i,
                "from": e.from,
                "to": e.to,
                "label": e.label,
                "font": { "size": 9, "color": "#999" },
                "color": { "color": "#ccc", "highlight": "#999" },
                "arrows": { "to": { "enabled": true, "scaleFactor": 0.5 } },
            })
        })
        .collect();

    let spec = json!({
        "nodes": nodes,
        "edges": edges,
        "options": {
            "physics": {
                "solver": "forceAtlas2Based",
                "forceAtlas2Based": {
                    "gravitationalConstant": GRAVITATIONAL_CONSTANT,
                    "centralGravity": CENTRAL_GRAVITY,
                    "springLength": SPRING_LENGTH,
                    "springConstant": SPRING_CONSTANT,
                },
                "stabilization": { "iterations": STABILIZATION_ITERATIONS },
            },
            "interaction": {
                "hover": true,
                "tooltipDelay": 200,
            },
            "layout": {
                "improvedLayout": true,
            },
        },
    });

    Some(GraphView {
        nodes: data.nodes.clone(),
        spec,
    })
}

impl GraphView {
    /// The network widget configuration.
    pub fn spec(&self) -> &Value {
        &self.spec
    }

    /// Resolve a double-click on a node to its action.
    pub fn double_click(&self, node_id: &str) -> Option<NodeAction> {
        let node = self.nodes.iter().find(|n| n.id == node_id)?;
        match node.kind {
            NodeKind::Entity => Some(NodeAction::InspectEntity(node.label.clone())),
            NodeKind::Document => node
                .doc_id
                .as_ref()
                .map(|doc_id| NodeAction::OpenDocument(format!("/documents/{}", doc_id))),
            NodeKind::Other => None,
        }
    }

    /// Dispatch a double-click: entity nodes invoke `on_entity` with the
    /// node's label; document nodes return the URL to open.
    pub fn dispatch_double_click(
        &self,
        node_id: &str,
        on_entity: &mut dyn FnMut(&str),
    ) -> Option<String> {
        match self.double_click(node_id)? {
            NodeAction::InspectEntity(label) => {
                on_entity(&label);
                None
            }
            NodeAction::OpenDocument(url) => Some(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kb_domain::GraphEdge;

    fn sample_data() -> GraphData {
        GraphData {
            nodes: vec![
                GraphNode {
                    id: "e1".to_string(),
                    label: "Ada Lovelace".to_string(),
                    group: "PERSON".to_string(),
                    kind: NodeKind::Entity,
                    doc_id: None,
                },
                GraphNode {
                    id: "d1".to_string(),
                    label: "Notes".to_string(),
                    group: "Document".to_string(),
                    kind: NodeKind::Document,
                    doc_id: Some("doc-9".to_string()),
                },
            ],
            edges: vec![GraphEdge {
                from: "d1".to_string(),
                to: "e1".to_string(),
                label: "MENTIONS".to_string(),
            }],
        }
    }

    #[test]
    fn empty_graph_builds_nothing() {
        assert!(build_graph(&GraphData::default()).is_none());
    }

    #[test]
    fn nodes_are_shaped_by_kind() {
        let view = build_graph(&sample_data()).unwrap();
        let nodes = view.spec()["nodes"].as_array().unwrap();
        assert_eq!(nodes[0]["shape"], "dot");
        assert_eq!(nodes[0]["size"], 20);
        assert_eq!(nodes[1]["shape"], "box");
        assert_eq!(nodes[1]["size"], 15);
        assert_eq!(nodes[0]["color"]["background"], "#3B82F6");
        assert_eq!(nodes[0]["title"], "Ada Lovelace (PERSON)");
    }

    #[test]
    fn unknown_group_reuses_topic_palette() {
        assert_eq!(node_style("GADGET"), TOPIC_STYLE);
    }

    #[test]
    fn edges_are_directed_and_labeled() {
        let view = build_graph(&sample_data()).unwrap();
        let edge = &view.spec()["edges"][0];
        assert_eq!(edge["label"], "MENTIONS");
        assert_eq!(edge["arrows"]["to"]["enabled"], true);
        assert_eq!(edge["arrows"]["to"]["scaleFactor"], 0.5);
    }

    #[test]
    fn physics_constants_are_pinned() {
        let view = build_graph(&sample_data()).unwrap();
        let physics = &view.spec()["options"]["physics"];
        assert_eq!(physics["solver"], "forceAtlas2Based");
        assert_eq!(physics["forceAtlas2Based"]["gravitationalConstant"], -40.0);
        assert_eq!(physics["stabilization"]["iterations"], 100);
    }

    #[test]
    fn entity_double_click_invokes_callback_exactly_once() {
        let view = build_graph(&sample_data()).unwrap();
        let mut seen = Vec::new();
        let opened = view.dispatch_double_click("e1", &mut |label| seen.push(label.to_string()));
        assert_eq!(seen, vec!["Ada Lovelace".to_string()]);
        assert!(opened.is_none());
    }

    #[test]
    fn document_double_click_opens_exactly_one_url() {
        let view = build_graph(&sample_data()).unwrap();
        let mut seen = Vec::new();
        let opened = view.dispatch_double_click("d1", &mut |label| seen.push(label.to_string()));
        assert!(seen.is_empty());
        assert_eq!(opened.as_deref(), Some("/documents/doc-9"));
    }

    #[test]
    fn unknown_node_double_click_is_inert() {
        let view = build_graph(&sample_data()).unwrap();
        let mut calls = 0;
        assert!(view
            .dispatch_double_click("missing", &mut |_| calls += 1)
            .is_none());
        assert_eq!(calls, 0);
    }
}
