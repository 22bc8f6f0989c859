//! Raw Figma response model
//!
//! Serde types for the two documented response shapes the Figma REST API
//! returns: a whole-file fetch (single `document` root) and a node-specific
//! fetch (a `nodes` map of per-node sub-responses). The shape is decided
//! exactly once, at deserialization time, by the [`RawResponse`] union;
//! downstream code never re-checks it.
//!
//! Everything here is read-only input. The normalization engine never
//! mutates a raw node.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level raw response, one of two shapes.
///
/// The node-map variant is tried first: it is the only shape carrying a
/// `nodes` field, so the presence of that field is the discriminant. An
/// object matching neither variant is a structural error, surfaced by
/// [`crate::parser::parse_raw_value`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawResponse {
    /// Node-specific fetch: `GET /v1/files/:key/nodes?ids=...`
    NodeMap(RawNodesResponse),
    /// Whole-file fetch: `GET /v1/files/:key`
    WholeFile(RawFileResponse),
}

/// Response shape for a node-specific fetch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNodesResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_modified: String,
    #[serde(default)]
    pub thumbnail_url: String,
    /// Requested node id -> sub-response, each with its own catalogs.
    pub nodes: BTreeMap<String, RawNodeEntry>,
}

/// One entry of the per-node map: a document root plus the component
/// catalogs scoped to that node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNodeEntry {
    pub document: RawNode,
    #[serde(default)]
    pub components: BTreeMap<String, RawComponent>,
    #[serde(default)]
    pub component_sets: BTreeMap<String, RawComponentSet>,
}

/// Response shape for a whole-file fetch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFileResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_modified: String,
    #[serde(default)]
    pub thumbnail_url: String,
    /// The file-wide document root; its immediate children are the pages.
    pub document: RawNode,
    #[serde(default)]
    pub components: BTreeMap<String, RawComponent>,
    #[serde(default)]
    pub component_sets: BTreeMap<String, RawComponentSet>,
}

/// One node of the raw design tree.
///
/// The type tag is an open set (`FRAME`, `TEXT`, `VECTOR`, `INSTANCE`,
/// `RECTANGLE`, ...), so it stays a string rather than an enum. Fields the
/// API omits for a given node type deserialize to `None` / empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    /// Absent means visible.
    pub visible: Option<bool>,
    pub absolute_bounding_box: Option<BoundingBox>,
    pub constraints: Option<LayoutConstraints>,
    pub layout_align: Option<String>,
    pub layout_grow: Option<f64>,
    /// Text content, only present on TEXT nodes.
    pub characters: Option<String>,
    pub style: Option<RawTypeStyle>,
    #[serde(default)]
    pub fills: Vec<RawPaint>,
    #[serde(default)]
    pub strokes: Vec<RawPaint>,
    pub stroke_weight: Option<f64>,
    #[serde(default)]
    pub stroke_dashes: Vec<f64>,
    #[serde(default)]
    pub effects: Vec<RawEffect>,
    pub opacity: Option<f64>,
    pub corner_radius: Option<f64>,
    /// Per-corner radii in top/right/bottom/left order.
    pub rectangle_corner_radii: Option<Vec<f64>>,
    /// Backing component id, only present on INSTANCE nodes.
    pub component_id: Option<String>,
    pub component_properties: Option<BTreeMap<String, RawComponentProperty>>,
    #[serde(default)]
    pub children: Vec<RawNode>,
}

impl RawNode {
    /// A node is visible unless the flag is explicitly false.
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

/// Axis-aligned bounding box in absolute canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Layout constraints relative to the parent frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConstraints {
    pub horizontal: String,
    pub vertical: String,
}

/// RGBA color with channels in the 0..=1 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

/// 2D offset, used by shadow effects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

/// One stop of a gradient paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Color,
    pub position: f64,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPaint {
    #[serde(rename = "type")]
    pub paint_type: String,
    pub color: Option<Color>,
    pub opacity: Option<f64>,
    pub gradient_stops: Option<Vec<GradientStop>>,
}

/// A visual effect (shadow, blur) attached to a node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEffect {
    #[serde(rename = "type")]
    pub effect_type: String,
    pub visible: Option<bool>,
    pub radius: Option<f64>,
    pub color: Option<Color>,
    pub offset: Option<Vector2>,
    pub spread: Option<f64>,
    pub blend_mode: Option<String>,
}

/// Typography block carried by TEXT nodes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub line_height_px: Option<f64>,
    pub letter_spacing: Option<f64>,
}

/// Catalog entry describing a reusable component.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComponent {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub component_set_id: Option<String>,
}

/// Catalog entry describing a component set (variant group).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComponentSet {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One exposed property of a component instance. Values are free-form JSON
/// (string, boolean, number) and get stringified during extraction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComponentProperty {
    pub value: serde_json::Value,
    #[serde(rename = "type", default)]
    pub prop_type: String,
}
