pub mod errors;
pub mod row;

pub use errors::SchemaError;
pub use row::{AnswerType, QuestionRow, RowUpdate};
