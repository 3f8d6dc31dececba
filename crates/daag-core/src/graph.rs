// Rust guideline compliant 2026-02-06

//! Graph model building for Daag.
//!
//! Turns the parsed record set and a color scheme into the
//! rendering-agnostic node/edge/color model handed to the renderer.
//! The builder does not deduplicate edges or check that referenced ids
//! exist; the renderer auto-creates referenced nodes it has not seen.

use crate::colors::ColorScheme;
use crate::models::Record;
use serde::{Deserialize, Serialize};

/// A node in the graph model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Node id, equal to the record title.
    pub id: String,
    /// Display label (title, component, type on separate lines).
    pub label: String,
    /// Fill color for the node. Empty when the status has no scheme entry.
    pub color: String,
}

/// A directed blocking edge between two node ids.
///
/// Endpoints need not name a defined node; dangling references are legal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Id of the blocking ticket.
    pub from: String,
    /// Id of the blocked ticket.
    pub to: String,
}

/// The complete graph model for one database file.
///
/// Built once per file, immutable thereafter, and owned exclusively by the
/// caller that requests rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphModel {
    /// Graph name, used to derive output filenames.
    pub name: String,
    /// One node per record, in record order.
    pub nodes: Vec<GraphNode>,
    /// Directed edges in record order; duplicates permitted.
    pub edges: Vec<GraphEdge>,
}

/// Builds the graph model from a record set and a color scheme.
///
/// Per record: one node with id = title, the record's display label, and
/// the scheme color for its status (empty string when the status is absent
/// from the scheme). Each identifier in `blocked` produces an edge
/// `identifier -> title` and each identifier in `blocks` produces an edge
/// `title -> identifier`, in list order.
///
/// # Arguments
///
/// * `name` - Graph name
/// * `records` - The parsed record set
/// * `scheme` - Status-to-color mapping
///
/// # Returns
///
/// The complete graph model.
pub fn build_graph_model(name: &str, records: &[Record], scheme: &ColorScheme) -> GraphModel {
    let mut nodes = Vec::with_capacity(records.len());
    let mut edges = Vec::new();

    for record in records {
        let color = scheme.get(&record.status).cloned().unwrap_or_default();
        nodes.push(GraphNode {
            id: record.title.clone(),
            label: record.label(),
            color,
        });

        for blocker in record.blocked.identifiers() {
            edges.push(GraphEdge {
                from: blocker.clone(),
                to: record.title.clone(),
            });
        }
        for blocked in record.blocks.identifiers() {
            edges.push(GraphEdge {
                from: record.title.clone(),
                to: blocked.clone(),
            });
        }
    }

    GraphModel {
        name: name.to_string(),
        nodes,
        edges,
    }
}
