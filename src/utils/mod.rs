// figma_core utilities module
//
// Small helpers shared across the extraction pipeline.

/// CSS-style pixel value formatting
pub mod pixels;
