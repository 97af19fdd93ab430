use std::fmt;

#[derive(Debug, Clone)]
pub enum SchemaError {
    NotFound(String),
    InvalidData(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SchemaError::NotFound(msg) => write!(f, "Not found: {}", msg),
            SchemaError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
        }
    }
}

impl std::error::Error for SchemaError {}
