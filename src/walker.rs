//! Tree walker - depth-bounded, parent-aware traversal.
//!
//! Drives the extraction pipeline over the parsed node list and assembles
//! the simplified output tree. Pruning rules, in order of application:
//! depth cutoff (a node at the maximum depth is dropped with its whole
//! subtree), then visibility (an invisible node hides all its descendants,
//! whatever their own flags say).

use crate::extractors::base::{ExtractorContext, NodeExtractor, SimplifiedNode};
use crate::raw::RawNode;
use crate::vars::GlobalVariableTable;

/// Result of one traversal: the simplified roots in their original order
/// plus the variable table populated along the way.
#[derive(Debug)]
pub struct WalkResult {
    pub nodes: Vec<SimplifiedNode>,
    pub vars: GlobalVariableTable,
}

/// Walk every root in order, constructing a fresh variable table for the
/// run. `max_depth` of `None` means unlimited.
pub fn walk_nodes(
    roots: &[&RawNode],
    pipeline: &[Box<dyn NodeExtractor>],
    max_depth: Option<usize>,
) -> WalkResult {
    let mut vars = GlobalVariableTable::new();
    let nodes: Vec<SimplifiedNode> = roots
        .iter()
        .filter_map(|root| walk_node(root, 0, None, pipeline, &mut vars, max_depth))
        .collect();

    tracing::debug!(
        "walk complete: {} root nodes, {} interned variables",
        nodes.len(),
        vars.len()
    );
    WalkResult { nodes, vars }
}

fn walk_node(
    node: &RawNode,
    depth: usize,
    parent: Option<&RawNode>,
    pipeline: &[Box<dyn NodeExtractor>],
    vars: &mut GlobalVariableTable,
    max_depth: Option<usize>,
) -> Option<SimplifiedNode> {
    // Hard cutoff: the node itself is pruned once the limit is reached,
    // not merely its children.
    if max_depth.is_some_and(|limit| depth >= limit) {
        return None;
    }
    if !node.is_visible() {
        return None;
    }

    let mut simplified = SimplifiedNode::new(
        node.id.clone(),
        node.name.clone(),
        simplified_type(&node.node_type),
    );

    {
        let mut ctx = ExtractorContext {
            depth,
            parent,
            vars,
        };
        for extractor in pipeline {
            extractor.apply(node, &mut simplified, &mut ctx);
        }
    }

    let children: Vec<SimplifiedNode> = node
        .children
        .iter()
        .filter_map(|child| walk_node(child, depth + 1, Some(node), pipeline, vars, max_depth))
        .collect();
    if !children.is_empty() {
        simplified.children = Some(children);
    }

    Some(simplified)
}

/// Output type tag for a raw node. VECTOR nodes are exported as an image
/// marker so consumers treat them as renderable assets, not shape data.
fn simplified_type(raw_type: &str) -> String {
    if raw_type == "VECTOR" {
        "IMAGE-SVG".to_string()
    } else {
        raw_type.to_string()
    }
}
