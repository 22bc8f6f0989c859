//! Base extractor module
//!
//! Shared types for the extraction pipeline: the simplified output model
//! and the context/trait every extractor conforms to.

pub mod context;
pub mod types;

pub use context::{ExtractorContext, NodeExtractor};
pub use types::{
    ComponentProperty, LayoutRecord, Metadata, SimplifiedDesign, SimplifiedEffect, SimplifiedFill,
    SimplifiedNode, StrokeRecord, TextStyleRecord,
};
