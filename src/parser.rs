//! Response parser - collapses the two raw response shapes into one view.
//!
//! The Figma API answers a whole-file fetch and a node-specific fetch with
//! incompatible top-level layouts. This module normalizes both into a single
//! node list plus two flat component catalogs, so everything downstream of
//! the parser is shape-agnostic.

use std::collections::BTreeMap;

use crate::error::NormalizeError;
use crate::extractors::base::Metadata;
use crate::raw::{RawComponent, RawComponentSet, RawNode, RawResponse};

/// Flat catalog entry for a reusable component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Owning component set, when the component is a variant.
    pub component_set_id: Option<String>,
}

/// Flat catalog entry for a component set.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSetSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Shape-independent view of a raw response: metadata, the node list to
/// walk, and the merged component catalogs keyed by id.
#[derive(Debug)]
pub struct ParsedResponse<'a> {
    pub metadata: Metadata,
    pub node_list: Vec<&'a RawNode>,
    pub components: BTreeMap<String, ComponentSummary>,
    pub component_sets: BTreeMap<String, ComponentSetSummary>,
}

/// Deserialize a raw JSON value into the typed response union.
///
/// An object carrying neither a `nodes` map nor a `document` root is the one
/// fatal structural error of a run.
pub fn parse_raw_value(value: serde_json::Value) -> Result<RawResponse, NormalizeError> {
    serde_json::from_value(value).map_err(|source| NormalizeError::UnrecognizedShape { source })
}

/// Normalize either response shape into a [`ParsedResponse`].
pub fn parse_response(raw: &RawResponse) -> ParsedResponse<'_> {
    let parsed = match raw {
        RawResponse::NodeMap(response) => {
            let mut components = BTreeMap::new();
            let mut component_sets = BTreeMap::new();
            let mut node_list = Vec::with_capacity(response.nodes.len());

            for entry in response.nodes.values() {
                merge_components(&mut components, &entry.components);
                merge_component_sets(&mut component_sets, &entry.component_sets);
                node_list.push(&entry.document);
            }

            ParsedResponse {
                metadata: Metadata {
                    name: response.name.clone(),
                    last_modified: response.last_modified.clone(),
                    thumbnail_url: response.thumbnail_url.clone(),
                },
                node_list,
                components,
                component_sets,
            }
        }
        RawResponse::WholeFile(response) => {
            let mut components = BTreeMap::new();
            let mut component_sets = BTreeMap::new();
            merge_components(&mut components, &response.components);
            merge_component_sets(&mut component_sets, &response.component_sets);

            ParsedResponse {
                metadata: Metadata {
                    name: response.name.clone(),
                    last_modified: response.last_modified.clone(),
                    thumbnail_url: response.thumbnail_url.clone(),
                },
                // The document root itself is scaffolding; its immediate
                // children (the pages) are the nodes to walk.
                node_list: response.document.children.iter().collect(),
                components,
                component_sets,
            }
        }
    };

    tracing::debug!(
        "parsed response: {} root nodes, {} components, {} component sets",
        parsed.node_list.len(),
        parsed.components.len(),
        parsed.component_sets.len()
    );
    parsed
}

/// Merge a per-entry component catalog into the accumulator. Catalogs are
/// keyed by stable component id, so the first occurrence wins and repeated
/// merges are idempotent.
fn merge_components(
    accumulator: &mut BTreeMap<String, ComponentSummary>,
    catalog: &BTreeMap<String, RawComponent>,
) {
    for (id, component) in catalog {
        accumulator
            .entry(id.clone())
            .or_insert_with(|| ComponentSummary {
                id: id.clone(),
                name: component.name.clone(),
                description: component.description.clone(),
                component_set_id: component.component_set_id.clone(),
            });
    }
}

fn merge_component_sets(
    accumulator: &mut BTreeMap<String, ComponentSetSummary>,
    catalog: &BTreeMap<String, RawComponentSet>,
) {
    for (id, set) in catalog {
        accumulator
            .entry(id.clone())
            .or_insert_with(|| ComponentSetSummary {
                id: id.clone(),
                name: set.name.clone(),
                description: set.description.clone(),
            });
    }
}
