use crate::runtime::value::object::{Object, ObjectRef};

/// Fresh prototype object whose unset lookups fall back to `parent`.
///
/// Only the parent's method table becomes reachable; no initializer of the
/// parent class runs. A new object is allocated on every call, nothing is
/// shared between extensions.
pub fn link(parent: &ObjectRef) -> ObjectRef {
    Object::with_prototype(parent.clone()).wrapped()
}
