use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use serde::de::Unexpected;
use tracing::debug;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;


pub trait IManager<V, S> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self,
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone(), supports)?;
        }
        Ok(())
    }

    /// 單一物件或物件陣列皆可。
    fn insert_from_json_value(&self,
                              json_value: serde_json::Value,
                              supports: &S) -> Result<(), ManagerError> {
        match json_value {
            serde_json::Value::Array(json_array) => self.insert_obj_from_json_vec(&json_array, supports),
            serde_json::Value::Object(_) => self.insert_obj_from_json(json_value, supports),
            _ => Err(ManagerError::json_invalid_type(Unexpected::Other("non-object value"), &"object or array of objects"))
        }
    }

    fn from_reader(&self,
                   file_path: &str,
                   supports: &S) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.insert_from_json_value(json_value, supports)
    }
}


pub struct Manager<V, S> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value, &S) -> Result<V, ManagerError>
}


impl <V, S> Manager<V, S> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value, &S) -> Result<V, ManagerError>) -> Manager<V, S> {
        Manager {map_cell: RefCell::new(HashMap::new()), get_obj_from_json}
    }

    pub fn len(&self) -> usize {
        self.map_cell.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 併入另一個 manager 的全部物件，同名者以 `other` 為準。
    pub fn merge(&self, other: Manager<V, S>) {
        self.map_cell.borrow_mut().extend(other.map_cell.into_inner());
    }
}

impl <V, S> IManager<V, S> for Manager<V, S> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError> {
        let name = NamedJsonObject::from_json(&json_value)?.into_name();
        let v = (self.get_obj_from_json)(json_value, supports)?;
        debug!(name = name.as_str(), "registered object");
        self.map().insert(name, v);
        Ok(())
    }
}
