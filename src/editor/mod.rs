//! Editor state: the working row list and its persisted schema document.
//!
//! `FormEditor` is the only component that mutates the row list or the
//! schema value. Operations are synchronous and run to completion; the
//! schema document is derived from rows on demand, never hand-edited.

use log::info;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::EditorConfig;
use crate::db_operations::DbOperations;
use crate::error::FormFoldResult;
use crate::schema::types::{QuestionRow, RowUpdate, SchemaError};
use crate::schema::utils::{format_to_camel_case, split_options};
use crate::schema::{rows_to_schema, schema_to_rows};

/// The form editor's working state.
pub struct FormEditor {
    db_ops: Arc<DbOperations>,
    rows: Vec<QuestionRow>,
    schema: Value,
}

impl FormEditor {
    /// Opens (or creates) storage at the configured path and loads the
    /// persisted schema document into editable rows.
    pub fn open(config: &EditorConfig) -> FormFoldResult<Self> {
        std::fs::create_dir_all(&config.storage_path)?;
        let db = sled::open(config.storage_path.join("db"))?;
        let db_ops = Arc::new(DbOperations::new(db)?);
        Ok(Self::new(db_ops)?)
    }

    /// Builds an editor on top of existing database operations.
    ///
    /// An empty slot yields an empty document and zero rows. Stored text
    /// that fails to parse is an error: the editor never starts from a
    /// half-readable document.
    pub fn new(db_ops: Arc<DbOperations>) -> Result<Self, SchemaError> {
        let schema = db_ops.get_form_schema()?.unwrap_or_else(|| json!({}));
        let rows = schema_to_rows(&schema);
        info!("Editor opened with {} rows", rows.len());
        Ok(Self {
            db_ops,
            rows,
            schema,
        })
    }

    /// The current row list, in editing order.
    pub fn rows(&self) -> &[QuestionRow] {
        &self.rows
    }

    /// The schema document as of the last generate (or the startup load).
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Appends a row with default values and returns its id.
    pub fn add_row(&mut self) -> Uuid {
        let row = QuestionRow::new();
        let id = row.id;
        self.rows.push(row);
        info!("Added question row {}", id);
        id
    }

    /// Applies a single-field update to the row with the given id.
    ///
    /// A description edit recomputes the derived property name; an options
    /// edit splits the delimited text into the options list. All other rows
    /// and fields are left untouched.
    pub fn update_row(&mut self, id: Uuid, update: RowUpdate) -> Result<(), SchemaError> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| SchemaError::NotFound(format!("no row with id {}", id)))?;

        match update {
            RowUpdate::Category(category) => row.category = category,
            RowUpdate::Description(description) => {
                row.property = format_to_camel_case(&description);
                row.description = description;
            }
            RowUpdate::AnswerType(answer_type) => row.answer_type = answer_type,
            RowUpdate::Options(text) => row.options = split_options(&text),
            RowUpdate::Required(required) => row.required = required,
            RowUpdate::Active(active) => row.active = active,
        }
        Ok(())
    }

    /// Rebuilds the schema document from the current rows and persists it,
    /// overwriting the previous document in the store.
    pub fn generate(&mut self) -> Result<&Value, SchemaError> {
        let schema = rows_to_schema(&self.rows);
        self.db_ops.store_form_schema(&schema)?;
        self.schema = schema;
        info!(
            "Generated schema document from {} rows",
            self.rows.len()
        );
        Ok(&self.schema)
    }
}
