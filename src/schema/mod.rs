pub mod building;
pub mod parsing;
pub mod types;
pub mod utils;

mod tests;

// Re-export all types at the schema module level
pub use building::rows_to_schema;
pub use parsing::schema_to_rows;
pub use types::{AnswerType, QuestionRow, RowUpdate, SchemaError};
pub use utils::{format_to_camel_case, split_options};
