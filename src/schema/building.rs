//! Schema document assembly: folding the row list back into a JSON Schema.

use serde_json::{json, Map, Value};

use crate::constants::GENERAL_HISTORY;
use crate::schema::types::{AnswerType, QuestionRow};

/// Builds the canonical schema document from the current row list.
///
/// Rows iterate in list order. Ungrouped rows land directly under
/// `properties`; any other category becomes an object container created on
/// first use and reused thereafter. When two rows resolve to the same
/// `(category, property)` pair the later row wins, silently. Inactive rows
/// are included with `active: false` carried as data.
pub fn rows_to_schema(rows: &[QuestionRow]) -> Value {
    let mut properties = Map::new();
    for row in rows {
        let leaf = leaf_definition(row);
        if row.category == GENERAL_HISTORY {
            properties.insert(row.property.clone(), leaf);
            continue;
        }
        let container = properties
            .entry(row.category.clone())
            .or_insert_with(new_container);
        if let Some(node) = container.as_object_mut() {
            let slot = node
                .entry("properties".to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Some(container_properties) = slot.as_object_mut() {
                container_properties.insert(row.property.clone(), leaf);
            }
        }
    }
    json!({ "type": "object", "properties": properties })
}

fn new_container() -> Value {
    json!({ "type": "object", "properties": {} })
}

fn leaf_definition(row: &QuestionRow) -> Value {
    let mut leaf = Map::new();
    leaf.insert(
        "type".to_string(),
        Value::String(row.answer_type.json_type().to_string()),
    );
    leaf.insert(
        "description".to_string(),
        Value::String(row.description.clone()),
    );
    leaf.insert("nullable".to_string(), Value::Bool(!row.required));
    leaf.insert("active".to_string(), Value::Bool(row.active));
    match row.answer_type {
        AnswerType::YesNo => {
            leaf.insert("enum".to_string(), json!(["Yes", "No"]));
        }
        AnswerType::Dropdown => {
            leaf.insert("enum".to_string(), json!(row.options));
        }
        AnswerType::Text | AnswerType::Number => {}
    }
    Value::Object(leaf)
}
