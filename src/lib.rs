//! formfold: a form-builder core.
//!
//! Question definitions ("rows") are edited as a flat list, folded into a
//! JSON-Schema-shaped document grouped by category, and persisted in a local
//! sled store. The inverse transform parses a stored document back into
//! editable rows on startup.

pub mod config;
pub mod constants;
pub mod db_operations;
pub mod editor;
pub mod error;
pub mod schema;

// Re-export the main types at the crate level
pub use config::EditorConfig;
pub use db_operations::DbOperations;
pub use editor::FormEditor;
pub use error::{FormFoldError, FormFoldResult};
pub use schema::{
    format_to_camel_case, rows_to_schema, schema_to_rows, split_options, AnswerType, QuestionRow,
    RowUpdate, SchemaError,
};
