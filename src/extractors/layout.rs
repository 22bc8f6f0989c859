//! Layout extractor - geometry, constraints, alignment, grow factor.

use crate::extractors::base::{ExtractorContext, LayoutRecord, NodeExtractor, SimplifiedNode};
use crate::raw::RawNode;
use crate::vars::{VariablePrefix, VariableValue};

pub struct LayoutExtractor;

impl NodeExtractor for LayoutExtractor {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn apply(&self, node: &RawNode, result: &mut SimplifiedNode, ctx: &mut ExtractorContext<'_>) {
        let mut record = LayoutRecord::default();

        if let Some(bounds) = &node.absolute_bounding_box {
            record.x = Some(bounds.x);
            record.y = Some(bounds.y);
            record.width = Some(bounds.width);
            record.height = Some(bounds.height);
        }
        record.constraints = node.constraints.clone();
        record.align = node.layout_align.clone();
        record.grow = node.layout_grow;

        // A record with at most one populated key carries no real layout
        // information; it is dropped, not interned.
        if record.populated_fields() > 1 {
            result.layout = Some(
                ctx.vars
                    .intern(VariableValue::Layout(record), VariablePrefix::Layout),
            );
        }
    }
}
