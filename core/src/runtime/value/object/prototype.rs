use std::rc::Rc;

use crate::runtime::value::Value;

use super::ObjectRef;

pub fn get_property(obj: &ObjectRef, key: &str) -> Option<Value> {
    let mut current = Some(Rc::clone(obj));
    while let Some(candidate) = current {
        let borrowed = candidate.borrow();
        if let Some(value) = borrowed.properties.get(key) {
            return Some(value.clone());
        }
        current = borrowed.prototype.clone();
    }
    None
}

pub fn set_property(obj: &ObjectRef, key: &str, value: Value) {
    obj.borrow_mut().set(key, value);
}

/// Whether `proto` appears anywhere on `obj`'s prototype chain.
pub fn has_in_chain(obj: &ObjectRef, proto: &ObjectRef) -> bool {
    let mut current = obj.borrow().prototype.clone();
    while let Some(candidate) = current {
        if Rc::ptr_eq(&candidate, proto) {
            return true;
        }
        current = candidate.borrow().prototype.clone();
    }
    false
}
