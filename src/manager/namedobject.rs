use serde::Deserialize;

use super::managererror::ManagerError;

/// `"name"` key shared by every registry entry.
#[derive(Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    /// Reads the entry name, rejecting blank names.
    pub fn from_json(json_value: &serde_json::Value) -> Result<NamedJsonObject, ManagerError> {
        let named_object = NamedJsonObject::deserialize(json_value)?;
        if named_object.name.trim().is_empty() {
            return Err(ManagerError::json_custom("entry name must not be blank"));
        }
        Ok(named_object)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}
