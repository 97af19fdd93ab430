use crate::schema::types::SchemaError;

/// Converts low-level storage failures into schema errors with context.
pub struct ErrorUtils;

impl ErrorUtils {
    pub fn serialization_error(context: &str, error: serde_json::Error) -> SchemaError {
        SchemaError::InvalidData(format!("Failed to serialize {}: {}", context, error))
    }

    pub fn deserialization_error(context: &str, error: serde_json::Error) -> SchemaError {
        SchemaError::InvalidData(format!("Failed to deserialize {}: {}", context, error))
    }

    pub fn database_error(operation: &str, error: sled::Error) -> SchemaError {
        SchemaError::InvalidData(format!("Database {} failed: {}", operation, error))
    }
}
