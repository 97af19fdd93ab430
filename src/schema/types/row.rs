//! Core row types for the form editor.
//!
//! A `QuestionRow` is the editable unit of the working list; the generated
//! schema document is derived from rows and never hand-edited.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::constants::GENERAL_HISTORY;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AnswerType {
    #[default]
    Text,
    #[serde(rename = "Yes/No")]
    YesNo,
    Dropdown,
    Number,
}

impl AnswerType {
    /// The closed set of answer types, in display order.
    pub const ALL: [AnswerType; 4] = [
        AnswerType::Text,
        AnswerType::YesNo,
        AnswerType::Dropdown,
        AnswerType::Number,
    ];

    /// JSON Schema `type` keyword for a leaf of this answer type.
    pub fn json_type(&self) -> &'static str {
        match self {
            AnswerType::Number => "integer",
            _ => "string",
        }
    }
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            AnswerType::Text => "Text",
            AnswerType::YesNo => "Yes/No",
            AnswerType::Dropdown => "Dropdown",
            AnswerType::Number => "Number",
        };
        write!(f, "{}", label)
    }
}

/// One editable question definition in the working list.
///
/// The `id` keys the row for UI listing and update targeting; it is never
/// written into the generated schema document. Within one list ids are
/// unique, while `property` need not be (collisions resolve last-write-wins
/// when the document is rebuilt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRow {
    pub id: Uuid,
    pub category: String,
    /// Field name in the schema document, derived from `description`.
    pub property: String,
    /// Human-readable question text; doubles as the schema `description`.
    pub description: String,
    pub answer_type: AnswerType,
    /// Dropdown choices; empty for the other answer types.
    pub options: Vec<String>,
    pub required: bool,
    pub active: bool,
}

impl QuestionRow {
    /// A fresh row with the editor's fixed defaults and a new unique id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            category: GENERAL_HISTORY.to_string(),
            property: String::new(),
            description: String::new(),
            answer_type: AnswerType::Text,
            options: Vec::new(),
            required: false,
            active: true,
        }
    }

    /// Dropdown options rendered as the comma-delimited string a UI shows.
    pub fn options_text(&self) -> String {
        self.options.join(", ")
    }
}

impl Default for QuestionRow {
    fn default() -> Self {
        Self::new()
    }
}

/// A single-field update applied to one row.
///
/// The set of editable fields is closed. There is no `Property` variant:
/// the property name is always recomputed from the description.
#[derive(Debug, Clone, PartialEq)]
pub enum RowUpdate {
    Category(String),
    /// Also recomputes the derived `property` from the new text.
    Description(String),
    AnswerType(AnswerType),
    /// Comma-delimited; segments are trimmed, empty segments are kept.
    Options(String),
    Required(bool),
    Active(bool),
}
