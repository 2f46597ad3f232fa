// SPDX-License-Identifier: MIT OR Apache-2.0
//! Blueprint descriptions received from the runtime authority.
//!
//! Blueprints arrive as JSON with camelCase keys and are read-only input to
//! one construction pass. All four sections are optional; an absent section
//! simply binds nothing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared type of a port, parameter, or content entry.
///
/// The optional `identifier` narrows the type: `{typeName: "Number",
/// identifier: "Angle"}` is strictly more specific than `{typeName:
/// "Number"}` during widget resolution. Numeric datatypes may also declare
/// value bounds and whether they are floating-point, used as fallbacks when
/// a parameter carries no explicit constraint metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datatype {
    /// Base type name
    pub type_name: String,
    /// Optional narrowing identifier
    #[serde(default)]
    pub identifier: Option<String>,
    /// Declared minimum value, if the type is numeric
    #[serde(default)]
    pub min_value: Option<f64>,
    /// Declared maximum value, if the type is numeric
    #[serde(default)]
    pub max_value: Option<f64>,
    /// Whether the type is floating-point
    #[serde(default)]
    pub is_float: bool,
}

impl Datatype {
    /// Create a bare datatype with no identifier and no bounds
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            identifier: None,
            min_value: None,
            max_value: None,
            is_float: false,
        }
    }

    /// Narrow the datatype with an identifier
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Human-readable type string: `"typeName (identifier)"`, or the bare
    /// type name when no identifier is declared.
    pub fn display_type(&self) -> String {
        match &self.identifier {
            Some(identifier) => format!("{} ({})", self.type_name, identifier),
            None => self.type_name.clone(),
        }
    }
}

/// A declared input or output port
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortSpec {
    /// Port name, unique within its sequence
    pub name: String,
    /// Declared datatype
    pub datatype: Datatype,
}

/// A named metadata value attached to a parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataEntry {
    /// Metadata key
    pub name: String,
    /// Metadata value (shape depends on the key)
    pub value: Value,
}

/// An editable value exposed on a node, backed by a property and an
/// interactive control widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpec {
    /// Parameter name, unique within the parameter sequence
    pub name: String,
    /// Declared datatype
    pub datatype: Datatype,
    /// Initial property value
    pub default_value: Value,
    /// Optional constraint metadata
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,
}

impl ParameterSpec {
    /// Look up a metadata value by key
    pub fn metadata_value(&self, name: &str) -> Option<&Value> {
        self.metadata.iter().find(|m| m.name == name).map(|m| &m.value)
    }
}

/// A read-only value displayed on a node via a passive display widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSpec {
    /// Content name, unique within the content sequence
    pub name: String,
    /// Declared datatype
    pub datatype: Datatype,
    /// Initial displayed value
    pub default_value: Value,
}

/// Declarative description of a node type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBlueprint {
    /// Declared input ports, in display order
    #[serde(default)]
    pub input_ports: Vec<PortSpec>,
    /// Declared output ports, in display order
    #[serde(default)]
    pub output_ports: Vec<PortSpec>,
    /// Editable parameters, in display order
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    /// Read-only contents, in display order
    #[serde(default)]
    pub contents: Vec<ContentSpec>,
}

impl NodeBlueprint {
    /// Find a content entry by name
    pub fn content(&self, name: &str) -> Option<&ContentSpec> {
        self.contents.iter().find(|c| c.name == name)
    }

    /// Check whether a parameter with the given name is declared
    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.iter().any(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_type() {
        let bare = Datatype::new("Number");
        assert_eq!(bare.display_type(), "Number");

        let narrowed = Datatype::new("Number").with_identifier("Angle");
        assert_eq!(narrowed.display_type(), "Number (Angle)");
    }

    #[test]
    fn test_parse_blueprint_json() {
        let blueprint: NodeBlueprint = serde_json::from_str(
            r#"{
                "inputPorts": [
                    {"name": "enable", "datatype": {"typeName": "Bool"}}
                ],
                "outputPorts": [
                    {"name": "out", "datatype": {"typeName": "Number", "identifier": "Angle"}}
                ],
                "parameters": [
                    {
                        "name": "speed",
                        "datatype": {"typeName": "Number", "minValue": 0.0, "maxValue": 100.0, "isFloat": true},
                        "defaultValue": 25.0,
                        "metadata": [{"name": "precision", "value": 1}]
                    }
                ],
                "contents": [
                    {"name": "measured", "datatype": {"typeName": "Number"}, "defaultValue": 0.0}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(blueprint.input_ports.len(), 1);
        assert_eq!(blueprint.input_ports[0].datatype.type_name, "Bool");
        assert_eq!(
            blueprint.output_ports[0].datatype.display_type(),
            "Number (Angle)"
        );
        assert_eq!(blueprint.parameters[0].default_value, serde_json::json!(25.0));
        assert!(blueprint.parameters[0].datatype.is_float);
        assert_eq!(blueprint.parameters[0].datatype.max_value, Some(100.0));
        assert!(blueprint.content("measured").is_some());
        assert!(!blueprint.has_parameter("measured"));
    }

    #[test]
    fn test_absent_sections_default_empty() {
        let blueprint: NodeBlueprint = serde_json::from_str("{}").unwrap();
        assert!(blueprint.input_ports.is_empty());
        assert!(blueprint.output_ports.is_empty());
        assert!(blueprint.parameters.is_empty());
        assert!(blueprint.contents.is_empty());
    }

    #[test]
    fn test_metadata_lookup() {
        let parameter: ParameterSpec = serde_json::from_str(
            r#"{
                "name": "count",
                "datatype": {"typeName": "Number"},
                "defaultValue": 3,
                "metadata": [
                    {"name": "maximumValue", "value": 9},
                    {"name": "onlyOdd", "value": true}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            parameter.metadata_value("maximumValue"),
            Some(&serde_json::json!(9))
        );
        assert_eq!(parameter.metadata_value("onlyOdd"), Some(&serde_json::json!(true)));
        assert_eq!(parameter.metadata_value("minimumValue"), None);
    }
}
