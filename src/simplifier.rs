//! Simplifier - public API for design normalization
//!
//! Ties the stages together: parse the raw response, walk the node tree
//! through the extraction pipeline, and render the result. This module
//! provides the main public interface for clients holding a raw Figma
//! response in any form (text, JSON value, or typed).

use anyhow::Context;

use crate::extractors::base::SimplifiedDesign;
use crate::extractors::{default_pipeline, NodeExtractor};
use crate::output::{self, OutputFormat};
use crate::parser;
use crate::raw::RawResponse;
use crate::walker::{self, WalkResult};

/// The only tunables a run recognizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifyOptions {
    /// Bounds recursion depth; `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Selects the output serialization; defaults to the structured format.
    pub output_format: OutputFormat,
}

/// Stateless entry point for normalization runs.
///
/// Holds the extraction pipeline; every run constructs its own variable
/// table, so one simplifier can serve any number of sequential runs.
pub struct Simplifier {
    pipeline: Vec<Box<dyn NodeExtractor>>,
}

impl Default for Simplifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Simplifier {
    pub fn new() -> Self {
        Self {
            pipeline: default_pipeline(),
        }
    }

    /// Normalize a typed raw response into a simplified design.
    pub fn simplify(&self, raw: &RawResponse, options: &SimplifyOptions) -> SimplifiedDesign {
        let parsed = parser::parse_response(raw);
        let WalkResult { nodes, vars } =
            walker::walk_nodes(&parsed.node_list, &self.pipeline, options.max_depth);

        SimplifiedDesign {
            metadata: parsed.metadata,
            nodes,
            global_vars: vars,
        }
    }

    /// Normalize an already-parsed JSON value.
    pub fn simplify_value(
        &self,
        value: serde_json::Value,
        options: &SimplifyOptions,
    ) -> anyhow::Result<SimplifiedDesign> {
        let raw = parser::parse_raw_value(value)?;
        Ok(self.simplify(&raw, options))
    }

    /// Normalize raw response text and render it in the requested format.
    pub fn simplify_str(&self, input: &str, options: &SimplifyOptions) -> anyhow::Result<String> {
        let value: serde_json::Value =
            serde_json::from_str(input).context("raw response is not valid JSON")?;
        let design = self.simplify_value(value, options)?;
        Ok(output::render(&design, options.output_format)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::VariableValue;
    use serde_json::json;

    fn simplify(value: serde_json::Value, options: &SimplifyOptions) -> SimplifiedDesign {
        Simplifier::new().simplify_value(value, options).unwrap()
    }

    #[test]
    fn lone_text_node_produces_text_without_style_or_children() {
        let design = simplify(
            json!({
                "name": "f", "lastModified": "t", "thumbnailUrl": "u",
                "nodes": {
                    "1:1": {
                        "document": {
                            "id": "1:1", "name": "Greeting", "type": "TEXT",
                            "characters": "Hello"
                        }
                    }
                }
            }),
            &SimplifyOptions::default(),
        );

        assert_eq!(design.nodes.len(), 1);
        let node = &design.nodes[0];
        assert_eq!(node.node_type, "TEXT");
        assert_eq!(node.text.as_deref(), Some("Hello"));
        assert!(node.text_style.is_none());
        assert!(node.children.is_none());
    }

    #[test]
    fn identical_fills_across_siblings_collapse_to_one_variable() {
        let fill = json!([{ "type": "SOLID", "color": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 } }]);
        let design = simplify(
            json!({
                "name": "f", "lastModified": "t", "thumbnailUrl": "u",
                "nodes": {
                    "1:1": {
                        "document": {
                            "id": "1:1", "name": "Frame", "type": "FRAME",
                            "children": [
                                { "id": "1:2", "name": "Left", "type": "RECTANGLE", "fills": fill.clone() },
                                { "id": "1:3", "name": "Right", "type": "RECTANGLE", "fills": fill }
                            ]
                        }
                    }
                }
            }),
            &SimplifyOptions::default(),
        );

        let children = design.nodes[0].children.as_ref().unwrap();
        let left = children[0].fills.as_ref().unwrap();
        let right = children[1].fills.as_ref().unwrap();
        assert_eq!(left, right);

        let fill_entries: Vec<_> = design
            .global_vars
            .iter()
            .filter(|(id, _)| id.starts_with("fill_"))
            .collect();
        assert_eq!(fill_entries.len(), 1);
        assert!(matches!(fill_entries[0].1, VariableValue::Fills(_)));
    }

    #[test]
    fn max_depth_zero_yields_an_empty_design() {
        let design = simplify(
            json!({
                "name": "f", "lastModified": "t", "thumbnailUrl": "u",
                "nodes": {
                    "1:1": {
                        "document": {
                            "id": "1:1", "name": "Frame", "type": "FRAME",
                            "children": [{ "id": "1:2", "name": "Child", "type": "TEXT" }]
                        }
                    }
                }
            }),
            &SimplifyOptions {
                max_depth: Some(0),
                ..Default::default()
            },
        );

        assert!(design.nodes.is_empty());
        assert!(design.global_vars.is_empty());
    }

    #[test]
    fn simplify_str_renders_structured_output_end_to_end() {
        let input = json!({
            "name": "Demo", "lastModified": "t", "thumbnailUrl": "u",
            "document": {
                "id": "0:0", "name": "Document", "type": "DOCUMENT",
                "children": [
                    { "id": "0:1", "name": "Icon", "type": "VECTOR" }
                ]
            }
        })
        .to_string();

        let text = Simplifier::new()
            .simplify_str(&input, &SimplifyOptions::default())
            .unwrap();
        let back: SimplifiedDesign = serde_json::from_str(&text).unwrap();

        assert_eq!(back.metadata.name, "Demo");
        assert_eq!(back.nodes[0].node_type, "IMAGE-SVG");
    }

    #[test]
    fn structured_round_trip_preserves_the_full_design() {
        let design = simplify(
            json!({
                "name": "f", "lastModified": "t", "thumbnailUrl": "u",
                "nodes": {
                    "1:1": {
                        "document": {
                            "id": "1:1", "name": "Card", "type": "FRAME",
                            "absoluteBoundingBox": { "x": 0.0, "y": 0.0, "width": 200.0, "height": 120.0 },
                            "opacity": 0.9,
                            "cornerRadius": 12.0,
                            "effects": [{ "type": "DROP_SHADOW", "radius": 6.0 }],
                            "children": [{
                                "id": "1:2", "name": "Label", "type": "TEXT",
                                "characters": "Buy now",
                                "style": { "fontFamily": "Inter", "fontSize": 14.0 }
                            }]
                        }
                    }
                }
            }),
            &SimplifyOptions::default(),
        );

        let text = crate::output::render(&design, OutputFormat::Json).unwrap();
        let back: SimplifiedDesign = serde_json::from_str(&text).unwrap();
        assert_eq!(back, design);
    }

    #[test]
    fn invalid_json_text_is_rejected_with_context() {
        let err = Simplifier::new()
            .simplify_str("not json", &SimplifyOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn unrecognized_shape_surfaces_as_an_error() {
        let result = Simplifier::new().simplify_value(
            json!({ "status": 403, "err": "Invalid token" }),
            &SimplifyOptions::default(),
        );
        assert!(result.is_err());
    }
}
