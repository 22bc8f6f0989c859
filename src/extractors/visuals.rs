//! Visuals extractor - fills, strokes, effects, opacity, corner radius.
//!
//! Four independent sub-extractions; each is skipped when its raw input is
//! absent or empty, and each list-valued result is interned before being
//! referenced from the node.

use crate::extractors::base::{
    ExtractorContext, NodeExtractor, SimplifiedEffect, SimplifiedFill, SimplifiedNode,
    StrokeRecord,
};
use crate::raw::{RawEffect, RawNode, RawPaint};
use crate::utils::pixels::{px, px_quad};
use crate::vars::{VariablePrefix, VariableValue};

pub struct VisualsExtractor;

impl NodeExtractor for VisualsExtractor {
    fn name(&self) -> &'static str {
        "visuals"
    }

    fn apply(&self, node: &RawNode, result: &mut SimplifiedNode, ctx: &mut ExtractorContext<'_>) {
        self.extract_fills(node, result, ctx);
        self.extract_strokes(node, result, ctx);
        self.extract_effects(node, result, ctx);
        self.extract_scalars(node, result);
    }
}

impl VisualsExtractor {
    fn extract_fills(
        &self,
        node: &RawNode,
        result: &mut SimplifiedNode,
        ctx: &mut ExtractorContext<'_>,
    ) {
        if node.fills.is_empty() {
            return;
        }
        let fills: Vec<SimplifiedFill> = node.fills.iter().map(simplify_paint).collect();
        result.fills = Some(
            ctx.vars
                .intern(VariableValue::Fills(fills), VariablePrefix::Fill),
        );
    }

    fn extract_strokes(
        &self,
        node: &RawNode,
        result: &mut SimplifiedNode,
        ctx: &mut ExtractorContext<'_>,
    ) {
        let colors: Vec<SimplifiedFill> = node.strokes.iter().map(simplify_paint).collect();
        if colors.is_empty() {
            return;
        }
        let record = StrokeRecord {
            colors,
            stroke_weight: node.stroke_weight.filter(|weight| *weight > 0.0).map(px),
            stroke_dashes: if node.stroke_dashes.is_empty() {
                None
            } else {
                Some(node.stroke_dashes.clone())
            },
        };
        result.strokes = Some(
            ctx.vars
                .intern(VariableValue::Stroke(record), VariablePrefix::Stroke),
        );
    }

    fn extract_effects(
        &self,
        node: &RawNode,
        result: &mut SimplifiedNode,
        ctx: &mut ExtractorContext<'_>,
    ) {
        if node.effects.is_empty() {
            return;
        }
        let effects: Vec<SimplifiedEffect> = node.effects.iter().map(simplify_effect).collect();
        result.effects = Some(
            ctx.vars
                .intern(VariableValue::Effects(effects), VariablePrefix::Effect),
        );
    }

    fn extract_scalars(&self, node: &RawNode, result: &mut SimplifiedNode) {
        if let Some(opacity) = node.opacity {
            if opacity != 1.0 {
                result.opacity = Some(opacity);
            }
        }

        // The per-corner array (top/right/bottom/left) wins over the scalar
        // radius when both are present.
        if let Some(radii) = node
            .rectangle_corner_radii
            .as_deref()
            .filter(|radii| radii.len() == 4)
        {
            result.border_radius = Some(px_quad(radii));
        } else if let Some(radius) = node.corner_radius {
            result.border_radius = Some(px(radius));
        }
    }
}

fn simplify_paint(paint: &RawPaint) -> SimplifiedFill {
    SimplifiedFill {
        fill_type: paint.paint_type.clone(),
        color: paint.color,
        opacity: paint.opacity,
        gradient_stops: paint.gradient_stops.clone(),
    }
}

fn simplify_effect(effect: &RawEffect) -> SimplifiedEffect {
    SimplifiedEffect {
        effect_type: effect.effect_type.clone(),
        visible: effect.visible.unwrap_or(true),
        radius: effect.radius,
        color: effect.color,
        offset: effect.offset,
        spread: effect.spread,
        blend_mode: effect.blend_mode.clone(),
    }
}
