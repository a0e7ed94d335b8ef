//! Explicit tool descriptors: parameter lists, return types and the JSON
//! schemas advertised to the host.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Serialize;
use serde_json::{Value, json};

use super::ToolFailure;

/// Semantic type of a parameter or a return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    String,
}

impl ValueKind {
    /// JSON Schema `type` keyword for this kind.
    pub fn json_type(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
        }
    }
}

/// One named parameter of a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ValueKind,
    pub description: String,
    /// `None` means the parameter is required.
    pub default: Option<Value>,
}

impl ParamSpec {
    /// A parameter the caller must supply.
    pub fn required(name: impl Into<String>, kind: ValueKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            default: None,
        }
    }

    /// A parameter that may be omitted or `null`, defaulting to `null`.
    pub fn optional(name: impl Into<String>, kind: ValueKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            default: Some(Value::Null),
        }
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    fn schema(&self) -> Value {
        match &self.default {
            None => json!({
                "type": self.kind.json_type(),
                "description": self.description,
            }),
            Some(default) => json!({
                "anyOf": [
                    { "type": self.kind.json_type() },
                    { "type": "null" },
                ],
                "default": default,
                "description": self.description,
            }),
        }
    }
}

/// Name, parameters, return type and description of a registered tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamSpec>,
    pub returns: ValueKind,
}

impl ToolDescriptor {
    /// Start a descriptor with no parameters that returns a string.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
            returns: ValueKind::String,
        }
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, kind: ValueKind) -> Self {
        self.returns = kind;
        self
    }

    /// JSON Schema for the tool's arguments object.
    pub fn input_schema(&self) -> JsonObject {
        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));

        let mut properties = serde_json::Map::new();
        for param in &self.params {
            properties.insert(param.name.clone(), param.schema());
        }
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.is_required())
            .map(|p| p.name.as_str())
            .collect();

        schema.insert("properties".to_string(), json!(properties));
        schema.insert("required".to_string(), json!(required));
        schema
    }

    /// JSON Schema for the structured `{"result": ...}` payload.
    pub fn output_schema(&self) -> JsonObject {
        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert(
            "properties".to_string(),
            json!({ "result": { "type": self.returns.json_type() } }),
        );
        schema.insert("required".to_string(), json!(["result"]));
        schema
    }
}

/// A value returned by a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ToolValue {
    Integer(i64),
    Text(String),
}

impl ToolValue {
    /// Plain-text rendering sent as the result's content.
    pub fn to_text(&self) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Wrap into a successful MCP result with matching structured content.
    pub fn into_call_result(self) -> CallToolResult {
        let mut result = CallToolResult::success(vec![Content::text(self.to_text())]);
        result.structured_content = Some(json!({ "result": self }));
        result
    }
}

impl From<i64> for ToolValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<String> for ToolValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Arguments of a single invocation, with typed accessors.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    inner: JsonObject,
}

impl ToolArgs {
    pub fn new(inner: JsonObject) -> Self {
        Self { inner }
    }

    /// A required integer argument. Integral floats such as `3.0` are accepted.
    pub fn integer(&self, name: &str) -> Result<i64, ToolFailure> {
        match self.inner.get(name) {
            None | Some(Value::Null) => Err(missing(name)),
            Some(value) => as_integer(value).ok_or_else(|| wrong_type(name, "integer")),
        }
    }

    /// An optional integer argument; missing and `null` both yield `None`.
    pub fn optional_integer(&self, name: &str) -> Result<Option<i64>, ToolFailure> {
        match self.inner.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => as_integer(value)
                .map(Some)
                .ok_or_else(|| wrong_type(name, "integer")),
        }
    }

    /// A required string argument.
    pub fn string(&self, name: &str) -> Result<&str, ToolFailure> {
        match self.inner.get(name) {
            None | Some(Value::Null) => Err(missing(name)),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(wrong_type(name, "string")),
        }
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| f as i64)
}

fn missing(name: &str) -> ToolFailure {
    ToolFailure::InvalidArguments(format!("missing required argument `{}`", name))
}

fn wrong_type(name: &str, expected: &str) -> ToolFailure {
    ToolFailure::InvalidArguments(format!("argument `{}` must be of type {}", name, expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: Value) -> ToolArgs {
        ToolArgs::new(value.as_object().cloned().unwrap())
    }

    #[test]
    fn test_input_schema_required_and_optional() {
        let descriptor = ToolDescriptor::new("read_pdf_file", "Read a PDF.")
            .param(ParamSpec::required("filename", ValueKind::String, "PDF name"))
            .param(ParamSpec::optional("page_limit", ValueKind::Integer, "Page cap"));

        let schema = Value::Object(descriptor.input_schema());

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["filename"]["type"], "string");
        assert_eq!(schema["properties"]["page_limit"]["default"], Value::Null);
        assert_eq!(
            schema["properties"]["page_limit"]["anyOf"][0]["type"],
            "integer"
        );
        assert_eq!(schema["required"], json!(["filename"]));
    }

    #[test]
    fn test_output_schema_uses_return_kind() {
        let descriptor = ToolDescriptor::new("add", "Add.").returns(ValueKind::Integer);
        let schema = Value::Object(descriptor.output_schema());
        assert_eq!(schema["properties"]["result"]["type"], "integer");
    }

    #[test]
    fn test_value_into_call_result() {
        let result = ToolValue::Integer(5).into_call_result();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(json!({ "result": 5 })));

        let result = ToolValue::Text("7/2".to_string()).into_call_result();
        assert_eq!(result.structured_content, Some(json!({ "result": "7/2" })));
    }

    #[test]
    fn test_integer_argument() {
        let a = args(json!({ "a": 4, "b": 2.0, "c": "4", "d": 2.5 }));
        assert_eq!(a.integer("a").unwrap(), 4);
        assert_eq!(a.integer("b").unwrap(), 2);
        assert!(matches!(a.integer("c"), Err(ToolFailure::InvalidArguments(_))));
        assert!(matches!(a.integer("d"), Err(ToolFailure::InvalidArguments(_))));
        assert!(matches!(a.integer("z"), Err(ToolFailure::InvalidArguments(_))));
    }

    #[test]
    fn test_optional_integer_argument() {
        let a = args(json!({ "limit": 3, "none": null }));
        assert_eq!(a.optional_integer("limit").unwrap(), Some(3));
        assert_eq!(a.optional_integer("none").unwrap(), None);
        assert_eq!(a.optional_integer("absent").unwrap(), None);
    }

    #[test]
    fn test_string_argument() {
        let a = args(json!({ "filename": "x.csv", "n": 1 }));
        assert_eq!(a.string("filename").unwrap(), "x.csv");
        assert!(a.string("n").is_err());
        assert!(a.string("missing").is_err());
    }
}
