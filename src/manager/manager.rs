use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;

use tracing::debug;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;


pub trait IManager<V> where 
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    /// Builds a named object without registering it.
    fn named_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn len(&self) -> usize {
        self.map().len()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let (name, v) = self.named_obj_from_json(json_value)?;
        debug!(name = name.as_str(), "object registered");
        self.map().insert(name, v);
        Ok(())
    }

    /// Registers every object or none of them.
    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        let named_objs = json_vec
            .iter()
            .map(|j| self.named_obj_from_json(j.clone()))
            .collect::<Result<Vec<(String, V)>, ManagerError>>()?;
        let mut map = self.map();
        for (name, v) in named_objs {
            debug!(name = name.as_str(), "object registered");
            map.insert(name, v);
        }
        Ok(())
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where 
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(HashMap::new()), get_obj_from_json}
    }
}

impl <V> IManager<V> for Manager<V> where 
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn named_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError> {   
        let named_object = NamedJsonObject::from_json(&json_value)?;
        let v = (self.get_obj_from_json)(json_value)?;
        Ok((named_object.into_name(), v))
    }
} 
