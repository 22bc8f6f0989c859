// Figma Core - Rust-powered design data normalization
//
// The engine behind a design MCP server: raw Figma REST responses go in,
// a compact, de-duplicated, depth-bounded design description comes out.
// Fetching, transport and credential handling live with the caller; this
// crate is pure, synchronous CPU work over an in-memory tree.

pub mod error;
pub mod extractors;
pub mod output;
pub mod parser;
pub mod raw;
pub mod simplifier;
pub mod utils;
pub mod vars;
pub mod walker;

// Re-export the public API
pub use error::NormalizeError;
pub use extractors::{
    default_pipeline, ExtractorContext, Metadata, NodeExtractor, SimplifiedDesign, SimplifiedNode,
};
pub use output::{render, OutputFormat};
pub use parser::{parse_raw_value, parse_response, ParsedResponse};
pub use raw::{RawNode, RawResponse};
pub use simplifier::{Simplifier, SimplifyOptions};
pub use vars::{GlobalVariableTable, VariablePrefix, VariableValue};
