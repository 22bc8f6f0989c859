//! Component extractor - instance references and flattened properties.

use crate::extractors::base::{ComponentProperty, ExtractorContext, NodeExtractor, SimplifiedNode};
use crate::raw::RawNode;

pub struct ComponentExtractor;

impl NodeExtractor for ComponentExtractor {
    fn name(&self) -> &'static str {
        "component"
    }

    fn apply(&self, node: &RawNode, result: &mut SimplifiedNode, _ctx: &mut ExtractorContext<'_>) {
        if node.node_type != "INSTANCE" {
            return;
        }

        result.component_id = node.component_id.clone();

        if let Some(properties) = &node.component_properties {
            if !properties.is_empty() {
                let flattened: Vec<ComponentProperty> = properties
                    .iter()
                    .map(|(name, property)| ComponentProperty {
                        name: name.clone(),
                        value: stringify(&property.value),
                        prop_type: property.prop_type.clone(),
                    })
                    .collect();
                result.component_properties = Some(flattened);
            }
        }
    }
}

/// Stringify a free-form property value the way a template would render it:
/// strings stay bare, everything else uses its JSON text form.
fn stringify(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
