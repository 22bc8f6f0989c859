//! Output formatter - serializes a simplified design to text.
//!
//! Two encodings of the same structure: JSON as the structured interchange
//! format and YAML as the human-readable block format. A YAML failure is
//! never fatal; the call degrades to JSON and logs the reason.

use crate::error::NormalizeError;
use crate::extractors::base::SimplifiedDesign;

/// Requested serialization of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Structured interchange format (pretty-printed JSON).
    #[default]
    Json,
    /// Human-readable block format.
    Yaml,
}

impl OutputFormat {
    pub fn from_string(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Serialize a design in the requested format.
///
/// The YAML path falls back to JSON on failure instead of surfacing an
/// error; only the (practically unreachable) JSON path can fail.
pub fn render(design: &SimplifiedDesign, format: OutputFormat) -> Result<String, NormalizeError> {
    match format {
        OutputFormat::Json => to_json(design),
        OutputFormat::Yaml => match serde_yaml::to_string(design) {
            Ok(text) => Ok(text),
            Err(err) => {
                tracing::warn!("yaml serialization failed, falling back to json: {err}");
                to_json(design)
            }
        },
    }
}

fn to_json(design: &SimplifiedDesign) -> Result<String, NormalizeError> {
    serde_json::to_string_pretty(design).map_err(|source| NormalizeError::Serialize { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{Metadata, SimplifiedNode};
    use crate::vars::GlobalVariableTable;

    fn design() -> SimplifiedDesign {
        SimplifiedDesign {
            metadata: Metadata {
                name: "File".into(),
                last_modified: "2024-05-01T12:00:00Z".into(),
                thumbnail_url: "https://example.com/t.png".into(),
            },
            nodes: vec![SimplifiedNode::new(
                "1:1".into(),
                "Hero".into(),
                "FRAME".into(),
            )],
            global_vars: GlobalVariableTable::new(),
        }
    }

    #[test]
    fn json_output_round_trips_to_an_equal_design() {
        let original = design();
        let text = render(&original, OutputFormat::Json).unwrap();
        let back: SimplifiedDesign = serde_json::from_str(&text).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn json_field_order_is_metadata_nodes_global_vars() {
        let text = render(&design(), OutputFormat::Json).unwrap();
        let metadata = text.find("\"metadata\"").unwrap();
        let nodes = text.find("\"nodes\"").unwrap();
        let global_vars = text.find("\"globalVars\"").unwrap();
        assert!(metadata < nodes && nodes < global_vars);
    }

    #[test]
    fn yaml_output_carries_the_same_structure() {
        let original = design();
        let text = render(&original, OutputFormat::Yaml).unwrap();
        let back: SimplifiedDesign = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn format_selector_parses_known_names_only() {
        assert_eq!(OutputFormat::from_string("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_string("YAML"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::from_string("yml"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::from_string("xml"), None);
    }

    #[test]
    fn default_format_is_structured() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }
}
