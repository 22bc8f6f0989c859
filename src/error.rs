//! Error taxonomy for the normalization engine.
//!
//! There are only two failure classes: a raw response that matches neither
//! documented shape (fatal for the run), and a serialization failure on the
//! structured output path (practically unreachable). YAML formatting
//! failures are not represented here at all; they are recovered inside
//! [`crate::output::render`] by falling back to JSON.

use thiserror::Error;

/// Fatal errors a normalization run can surface to the caller.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The raw input carries neither a `nodes` map nor a `document` root.
    #[error("unrecognized response shape: expected a `nodes` map or a `document` root")]
    UnrecognizedShape {
        #[source]
        source: serde_json::Error,
    },

    /// Structured (JSON) serialization of the result failed.
    #[error("failed to serialize simplified design")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}
