//! Schema document traversal: flattening a JSON Schema into editable rows.
//!
//! The walk follows the document's `properties` nesting. Container nodes
//! (`type` absent or `"object"`) group leaves under a category and produce
//! no row themselves; every leaf produces exactly one row. Nodes lacking an
//! expected shape are skipped, never an error.

use log::info;
use serde_json::Value;
use uuid::Uuid;

use crate::constants::GENERAL_HISTORY;
use crate::schema::types::{AnswerType, QuestionRow};

/// Flattens a JSON-Schema-shaped document into an ordered row list.
///
/// Traversal is depth-first in map insertion order. Leaves nested under a
/// container take the first path segment as their category; top-level
/// leaves fall into the ungrouped bucket. Row ids are freshly generated on
/// every call.
pub fn schema_to_rows(schema: &Value) -> Vec<QuestionRow> {
    let mut rows = Vec::new();
    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (key, node) in properties {
            visit(key, node, None, &mut rows);
        }
    }
    info!("Parsed {} question rows from schema document", rows.len());
    rows
}

fn visit(key: &str, node: &Value, category: Option<&str>, rows: &mut Vec<QuestionRow>) {
    match node.get("type").and_then(Value::as_str) {
        Some("object") | None => {}
        Some(json_type) => rows.push(leaf_row(key, node, json_type, category)),
    }
    if let Some(properties) = node.get("properties").and_then(Value::as_object) {
        // The first path segment names the category for everything below.
        let first_segment = category.unwrap_or(key);
        for (child_key, child) in properties {
            visit(child_key, child, Some(first_segment), rows);
        }
    }
}

fn leaf_row(key: &str, node: &Value, json_type: &str, category: Option<&str>) -> QuestionRow {
    let enum_values = node.get("enum").and_then(Value::as_array);
    let answer_type = classify(json_type, enum_values);
    let options = match (answer_type, enum_values) {
        (AnswerType::Dropdown, Some(values)) => values
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    QuestionRow {
        id: Uuid::new_v4(),
        category: category.unwrap_or(GENERAL_HISTORY).to_string(),
        property: key.to_string(),
        description: node
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        answer_type,
        options,
        // Absent `nullable` means the field is required.
        required: !node.get("nullable").and_then(Value::as_bool).unwrap_or(false),
        active: node.get("active").and_then(Value::as_bool).unwrap_or(true),
    }
}

/// Maps a leaf's `type`/`enum` pair onto the closed answer-type set.
fn classify(json_type: &str, enum_values: Option<&Vec<Value>>) -> AnswerType {
    if json_type == "integer" {
        return AnswerType::Number;
    }
    match enum_values {
        Some(values) if is_yes_no(values) => AnswerType::YesNo,
        Some(_) => AnswerType::Dropdown,
        None => AnswerType::Text,
    }
}

/// Exactly two entries equal to {"Yes","No"}, in either order.
fn is_yes_no(values: &[Value]) -> bool {
    values.len() == 2
        && values.iter().any(|v| v.as_str() == Some("Yes"))
        && values.iter().any(|v| v.as_str() == Some("No"))
}
