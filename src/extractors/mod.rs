//! Extraction pipeline
//!
//! Each extractor is an independent, composable rule that contributes fields
//! to a node's simplified form. The pipeline is a fixed ordered collection
//! of trait objects iterated per node by the walker.
//!
//! # Architecture
//!
//! - `base` - simplified output model, extractor trait and context
//! - `layout` - geometry, constraints, alignment
//! - `text` - text content and typography
//! - `visuals` - fills, strokes, effects, opacity, corner radius
//! - `component` - component-instance references and properties

pub mod base;

pub mod component;
pub mod layout;
pub mod text;
pub mod visuals;

// Re-export the public API
pub use base::{
    ComponentProperty, ExtractorContext, LayoutRecord, Metadata, NodeExtractor, SimplifiedDesign,
    SimplifiedEffect, SimplifiedFill, SimplifiedNode, StrokeRecord, TextStyleRecord,
};
pub use component::ComponentExtractor;
pub use layout::LayoutExtractor;
pub use text::TextExtractor;
pub use visuals::VisualsExtractor;

/// The standard pipeline in its fixed application order: layout, text,
/// visuals, component.
pub fn default_pipeline() -> Vec<Box<dyn NodeExtractor>> {
    vec![
        Box::new(LayoutExtractor),
        Box::new(TextExtractor),
        Box::new(VisualsExtractor),
        Box::new(ComponentExtractor),
    ]
}
