// Core database operations
pub mod core;
pub mod error_utils;
mod schema_operations;

// Re-export the main DbOperations struct and error utilities
pub use core::DbOperations;
pub use error_utils::ErrorUtils;
