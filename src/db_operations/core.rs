use super::error_utils::ErrorUtils;
use crate::schema::types::SchemaError;
use serde::{de::DeserializeOwned, Serialize};

/// Unified access to the editor's persistent storage.
#[derive(Clone)]
pub struct DbOperations {
    /// The underlying sled database instance
    db: sled::Db,
    /// Cached tree holding generated schema documents
    pub(crate) schemas_tree: sled::Tree,
}

impl DbOperations {
    /// Creates a new DbOperations instance with the schema tree opened.
    pub fn new(db: sled::Db) -> Result<Self, sled::Error> {
        let schemas_tree = db.open_tree("schemas")?;
        Ok(Self { db, schemas_tree })
    }

    /// Gets a reference to the underlying database
    pub fn db(&self) -> &sled::Db {
        &self.db
    }

    /// Stores a serializable item in a tree as indented JSON text.
    pub fn store_in_tree<T: Serialize>(
        &self,
        tree: &sled::Tree,
        key: &str,
        item: &T,
    ) -> Result<(), SchemaError> {
        // Pretty-printed so the slot stays readable outside the editor.
        let bytes = serde_json::to_vec_pretty(item)
            .map_err(|e| ErrorUtils::serialization_error("item", e))?;

        tree.insert(key.as_bytes(), bytes)
            .map_err(|e| ErrorUtils::database_error("insert", e))?;

        // Ensure the data is durably written to disk
        tree.flush()
            .map_err(|e| ErrorUtils::database_error("flush", e))?;

        Ok(())
    }

    /// Retrieves a deserializable item from a tree.
    pub fn get_from_tree<T: DeserializeOwned>(
        &self,
        tree: &sled::Tree,
        key: &str,
    ) -> Result<Option<T>, SchemaError> {
        match tree.get(key.as_bytes()) {
            Ok(Some(bytes)) => {
                let item = serde_json::from_slice(&bytes)
                    .map_err(|e| ErrorUtils::deserialization_error("item", e))?;
                Ok(Some(item))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(ErrorUtils::database_error("retrieve", e)),
        }
    }
}
