//! Text extractor - character content and typography.

use crate::extractors::base::{ExtractorContext, NodeExtractor, SimplifiedNode, TextStyleRecord};
use crate::raw::RawNode;
use crate::vars::{VariablePrefix, VariableValue};

pub struct TextExtractor;

impl NodeExtractor for TextExtractor {
    fn name(&self) -> &'static str {
        "text"
    }

    fn apply(&self, node: &RawNode, result: &mut SimplifiedNode, ctx: &mut ExtractorContext<'_>) {
        if node.node_type == "TEXT" {
            // Content is copied verbatim; a TEXT node without characters
            // still gets an empty text field, never an absent one.
            result.text = Some(node.characters.clone().unwrap_or_default());
        }

        if let Some(style) = &node.style {
            let record = TextStyleRecord {
                font_family: style.font_family.clone().filter(|name| !name.is_empty()),
                font_size: style.font_size.filter(|v| *v != 0.0),
                font_weight: style.font_weight.filter(|v| *v != 0.0),
                line_height: style.line_height_px.filter(|v| *v != 0.0),
                letter_spacing: style.letter_spacing.filter(|v| *v != 0.0),
            };
            if !record.is_empty() {
                result.text_style = Some(
                    ctx.vars
                        .intern(VariableValue::TextStyle(record), VariablePrefix::TextStyle),
                );
            }
        }
    }
}
