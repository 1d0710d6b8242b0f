//! Input schemas for our MCP tools

use std::sync::Arc;

use rmcp::model::JsonObject;
use schemars::{Schema, json_schema};
use serde_json::{Map, Value};

use crate::constants::{MAX_PER_PAGE, PARAM_PAGE, PARAM_PER_PAGE};
use crate::field_extraction::ParameterKind;

/// Assembles the JSON Schema object advertised as a tool's input
#[derive(Debug, Default)]
pub struct ParameterBuilder {
    properties: Map<String, Value>,
    required:   Vec<&'static str>,
}

impl ParameterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn property(mut self, name: &'static str, schema: Schema, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema.to_value());
        if required {
            self.required.push(name);
        }
        self
    }

    fn typed(kind: ParameterKind, description: &str) -> Schema {
        json_schema!({
            "type": kind.json_type(),
            "description": description,
        })
    }

    pub fn string(self, name: &'static str, description: &str, required: bool) -> Self {
        self.property(name, Self::typed(ParameterKind::String, description), required)
    }

    /// A string restricted to `values`
    pub fn string_enum(
        self,
        name: &'static str,
        description: &str,
        values: &[&str],
        required: bool,
    ) -> Self {
        let mut schema = Self::typed(ParameterKind::String, description);
        schema.insert("enum".to_string(), Value::from(values.to_vec()));
        self.property(name, schema, required)
    }

    /// Advertised as `number`; integral checks happen at extraction
    pub fn number(self, name: &'static str, description: &str, required: bool) -> Self {
        self.property(name, Self::typed(ParameterKind::Number, description), required)
    }

    pub fn boolean(self, name: &'static str, description: &str) -> Self {
        self.property(name, Self::typed(ParameterKind::Boolean, description), false)
    }

    /// Optional `page` and `perPage` with their bounds
    pub fn with_pagination(self) -> Self {
        let mut page = Self::typed(ParameterKind::Number, "Page number for pagination (min 1)");
        page.insert("minimum".to_string(), Value::from(1));

        let mut per_page = Self::typed(
            ParameterKind::Number,
            "Results per page for pagination (min 1, max 100)",
        );
        per_page.insert("minimum".to_string(), Value::from(1));
        per_page.insert("maximum".to_string(), Value::from(MAX_PER_PAGE));

        self.property(PARAM_PAGE, page, false)
            .property(PARAM_PER_PAGE, per_page, false)
    }

    pub fn build(self) -> Arc<JsonObject> {
        let mut schema = json_schema!({
            "type": "object",
            "properties": self.properties,
        });
        if !self.required.is_empty() {
            schema.insert("required".to_string(), Value::from(self.required));
        }
        Arc::new(schema.as_object().cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_schema_shape() {
        let schema = ParameterBuilder::new()
            .string("owner", "Repository owner", true)
            .number("release_id", "The unique identifier of the release", true)
            .string_enum("order", "Sort order", &["asc", "desc"], false)
            .boolean("draft", "Create a draft")
            .build();

        assert_eq!(schema.get("type"), Some(&json!("object")));
        assert_eq!(schema.get("required"), Some(&json!(["owner", "release_id"])));
        assert_eq!(
            schema["properties"]["order"],
            json!({"type": "string", "description": "Sort order", "enum": ["asc", "desc"]})
        );
        assert_eq!(schema["properties"]["release_id"]["type"], json!("number"));
        assert_eq!(schema["properties"]["draft"]["type"], json!("boolean"));
    }

    #[test]
    fn test_pagination_bounds() {
        let schema = ParameterBuilder::new().with_pagination().build();

        assert!(schema.get("required").is_none());
        assert_eq!(schema["properties"]["page"]["minimum"], json!(1));
        assert_eq!(schema["properties"]["perPage"]["maximum"], json!(100));
    }
}
