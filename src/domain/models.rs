use crate::domain::constants::UNKNOWN_COMMAND_TYPE;
use crate::error::ReportError;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A parsed command batch.
///
/// Fields are read lazily so that a file which parses but lacks a required
/// field is reported as a field access failure rather than a parse failure.
#[derive(Debug, Clone)]
pub struct SceneDocument {
    root: Value,
}

impl SceneDocument {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    fn field(&self, name: &str) -> Result<&Value, ReportError> {
        self.root
            .get(name)
            .ok_or_else(|| ReportError::missing(name, "document"))
    }

    pub fn commands(&self) -> Result<Vec<Command>, ReportError> {
        self.field("commands")?
            .as_array()
            .ok_or_else(|| ReportError::invalid("commands", "document", "an array"))?
            .iter()
            .enumerate()
            .map(|(index, entry)| Command::from_entry(index, entry))
            .collect()
    }

    pub fn command_id(&self) -> Result<String, ReportError> {
        self.field("commandId").map(display_value)
    }

    pub fn description(&self) -> Result<String, ReportError> {
        self.field("description").map(display_value)
    }

    pub fn timestamp(&self) -> Option<String> {
        self.root
            .get("timestamp")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    pub fn enabled(&self) -> bool {
        self.root
            .get("enabled")
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    pub fn order(&self) -> i64 {
        self.root.get("order").and_then(Value::as_i64).unwrap_or(0)
    }
}

/// Strings print bare; anything else prints as compact JSON.
fn display_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One entry of the batch's `commands` array. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    pub command_type: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Command {
    pub fn from_entry(index: usize, entry: &Value) -> Result<Self, ReportError> {
        let context = format!("commands[{}]", index);
        let obj = entry
            .as_object()
            .ok_or_else(|| ReportError::invalid(&context, "document", "an object"))?;
        Ok(Self {
            command_type: optional_str(obj, "type", &context)?,
            id: optional_str(obj, "id", &context)?,
            name: optional_str(obj, "name", &context)?,
        })
    }

    pub fn type_label(&self) -> &str {
        self.command_type.as_deref().unwrap_or(UNKNOWN_COMMAND_TYPE)
    }

    pub fn id_or_empty(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

fn optional_str(
    obj: &Map<String, Value>,
    field: &str,
    context: &str,
) -> Result<Option<String>, ReportError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ReportError::invalid(field, context, "a string")),
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub command_type: String,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    pub count: usize,
}

#[derive(Serialize, Debug, Clone)]
pub struct SceneReport {
    pub total_commands: usize,
    pub command_id: String,
    pub description: String,
    pub timestamp: Option<String>,
    pub enabled: bool,
    pub order: i64,
    /// Sorted by type label.
    pub command_types: Vec<TypeCount>,
    /// In `SCENE_CATEGORIES` order.
    pub categories: Vec<CategoryCount>,
}
