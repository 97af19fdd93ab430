use log::info;
use serde_json::Value;

use super::core::DbOperations;
use crate::constants::SCHEMA_KEY;
use crate::schema::types::SchemaError;

impl DbOperations {
    /// Persists the generated schema document under the fixed slot, fully
    /// overwriting any prior value.
    pub fn store_form_schema(&self, schema: &Value) -> Result<(), SchemaError> {
        self.store_in_tree(&self.schemas_tree, SCHEMA_KEY, schema)?;
        info!("Stored schema document under '{}'", SCHEMA_KEY);
        Ok(())
    }

    /// Loads the persisted schema document.
    ///
    /// An empty slot is `Ok(None)`; stored text that does not parse is an
    /// error for the caller to surface.
    pub fn get_form_schema(&self) -> Result<Option<Value>, SchemaError> {
        self.get_from_tree(&self.schemas_tree, SCHEMA_KEY)
    }
}
