// Simplified design model
//
// All data structures for the normalized output: the per-node compact form,
// the structural records that get interned into the global variable table,
// and the assembled top-level design.

use serde::{Deserialize, Serialize};

use crate::raw::{Color, GradientStop, LayoutConstraints, Vector2};
use crate::vars::GlobalVariableTable;

/// Document-level metadata, extracted once per run from the top-level
/// response regardless of its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub name: String,
    pub last_modified: String,
    pub thumbnail_url: String,
}

/// The fully assembled result of one normalization run.
///
/// Field order is part of the output contract: metadata, nodes, globalVars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedDesign {
    pub metadata: Metadata,
    pub nodes: Vec<SimplifiedNode>,
    pub global_vars: GlobalVariableTable,
}

/// Compact output form of one raw node.
///
/// Structural style values (layout, text style, fills, strokes, effects) are
/// not stored inline; those fields hold reference ids into the run's
/// [`GlobalVariableTable`]. Created fresh per traversal and never mutated
/// after the walker attaches it to its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedNode {
    pub id: String,
    pub name: String,
    /// Possibly-renamed type tag: VECTOR nodes are exported as `IMAGE-SVG`.
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<String>,
    /// Only present when != 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Pixel-suffixed radius, e.g. `"8px"` or `"8px 8px 0px 0px"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_properties: Option<Vec<ComponentProperty>>,
    /// Only present when at least one child survived the walk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SimplifiedNode>>,
}

impl SimplifiedNode {
    /// Bare node with identity fields set; extractors fill in the rest.
    pub fn new(id: String, name: String, node_type: String) -> Self {
        Self {
            id,
            name,
            node_type,
            layout: None,
            text: None,
            text_style: None,
            fills: None,
            strokes: None,
            effects: None,
            opacity: None,
            border_radius: None,
            component_id: None,
            component_properties: None,
            children: None,
        }
    }
}

/// One flattened component-instance property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProperty {
    pub name: String,
    /// Stringified raw value (`"true"`, `"42"`, `"Sign in"`).
    pub value: String,
    #[serde(rename = "type")]
    pub prop_type: String,
}

/// Positioning record interned under the `layout_` prefix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<LayoutConstraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grow: Option<f64>,
}

impl LayoutRecord {
    /// Number of populated keys. A record with fewer than two is degenerate
    /// and never emitted or interned.
    pub fn populated_fields(&self) -> usize {
        [
            self.x.is_some(),
            self.y.is_some(),
            self.width.is_some(),
            self.height.is_some(),
            self.constraints.is_some(),
            self.align.is_some(),
            self.grow.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

/// Typography record interned under the `style_` prefix. Each field is kept
/// only when present and truthy in the raw style block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyleRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    /// Mapped from the raw `lineHeightPx`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

impl TextStyleRecord {
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none()
            && self.font_size.is_none()
            && self.font_weight.is_none()
            && self.line_height.is_none()
            && self.letter_spacing.is_none()
    }
}

/// One simplified paint; fill lists are interned under the `fill_` prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedFill {
    #[serde(rename = "type")]
    pub fill_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_stops: Option<Vec<GradientStop>>,
}

/// Stroke record interned under the `stroke_` prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeRecord {
    pub colors: Vec<SimplifiedFill>,
    /// Pixel-suffixed weight, only when the raw weight is > 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_dashes: Option<Vec<f64>>,
}

/// One simplified effect; effect lists are interned under the `effect_`
/// prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedEffect {
    #[serde(rename = "type")]
    pub effect_type: String,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vector2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,
}
