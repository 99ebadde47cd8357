pub mod prototype;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Value;

pub type ObjectRef = Rc<RefCell<Object>>;

#[derive(Debug, Clone, Default)]
pub struct Object {
    pub properties: HashMap<String, Value>,
    pub prototype: Option<ObjectRef>,
    /// Parent method exposed to the super-aware call currently running on
    /// this object. `Undefined` outside such a call.
    pub(crate) current_super: Value,
    /// Name of the method whose call populated `current_super`.
    pub(crate) current_super_method: Option<String>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prototype(prototype: ObjectRef) -> Self {
        Self {
            prototype: Some(prototype),
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.properties.get(key).cloned()
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.properties.insert(key.into(), value);
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn own_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.properties.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn current_super(&self) -> &Value {
        &self.current_super
    }

    pub fn wrapped(self) -> ObjectRef {
        Rc::new(RefCell::new(self))
    }
}
