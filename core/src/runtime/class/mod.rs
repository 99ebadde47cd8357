pub mod binder;
pub mod detect;
pub mod linker;
mod members;

pub use members::Members;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::config::Config;
use crate::embedding::function_args::FunctionArgs;
use crate::errors::RuntimeError;
use crate::runtime::value::function::Function;
use crate::runtime::value::object::{prototype, Object, ObjectRef};
use crate::runtime::value::Value;
use binder::Classification;

const DEFAULT_CONSTRUCTOR_KEY: &str = "constructor";

/// Anything that can be instantiated and extended: a name, a prototype
/// object, and the key its initializer lives under.
pub trait Constructible {
    fn name(&self) -> &str;

    fn prototype(&self) -> ObjectRef;

    fn constructor_key(&self) -> &str {
        DEFAULT_CONSTRUCTOR_KEY
    }

    /// Allocate an instance linked to the prototype and run the resolved
    /// initializer, if it is a function, with the instance as receiver.
    fn construct(&self, values: Vec<Value>) -> Result<Value, RuntimeError> {
        let instance = Value::Object(Object::with_prototype(self.prototype()).wrapped());
        if let Value::Function(init) = instance.get(self.constructor_key()) {
            trace!(class = self.name(), args = values.len(), "running constructor");
            let key = self.constructor_key();
            init.call_with_super(key, instance.clone(), values, Value::Undefined)?;
        }
        Ok(instance)
    }
}

/// A class produced by extension: method table, statics and parent link.
#[derive(Clone)]
pub struct Class {
    inner: Rc<ClassInner>,
}

struct ClassInner {
    name: String,
    prototype: ObjectRef,
    statics: RefCell<Members>,
    parent: Option<Rc<dyn Constructible>>,
    config: Rc<Config>,
}

impl Class {
    pub fn root() -> Self {
        Self::root_with_config(Rc::new(Config::default()))
    }

    pub fn root_with_config(config: Rc<Config>) -> Self {
        Self {
            inner: Rc::new(ClassInner {
                name: "Class".to_string(),
                prototype: Object::new().wrapped(),
                statics: RefCell::new(Members::new()),
                parent: None,
                config,
            }),
        }
    }

    /// Derive an anonymous subclass. See [`Class::extend_named`].
    pub fn extend(&self, prototype: Option<Members>, statics: Option<Members>) -> Class {
        self.extend_named("(anonymous)", prototype, statics)
    }

    /// Derive a subclass whose method table falls back to this one.
    ///
    /// Every entry of `prototype` is installed on the new method table, with
    /// super-aware functions wrapped around this class's same-named entry.
    /// `statics` are copied onto the new class only. This class is not
    /// modified.
    pub fn extend_named(
        &self,
        name: impl Into<String>,
        prototype: Option<Members>,
        statics: Option<Members>,
    ) -> Class {
        derive(
            name.into(),
            Rc::new(self.clone()),
            prototype,
            statics,
            self.inner.config.clone(),
        )
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The method table. Instances link to it; subclasses link to it.
    pub fn prototype(&self) -> ObjectRef {
        self.inner.prototype.clone()
    }

    pub fn construct(&self, values: Vec<Value>) -> Result<Value, RuntimeError> {
        Constructible::construct(self, values)
    }

    pub fn parent(&self) -> Option<&dyn Constructible> {
        self.inner.parent.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Entry of the method table, resolved through the parent chain.
    pub fn method(&self, name: &str) -> Option<Value> {
        prototype::get_property(&self.inner.prototype, name)
    }

    pub fn get_static(&self, name: &str) -> Option<Value> {
        self.inner.statics.borrow().get(name).cloned()
    }

    pub fn set_static(&self, name: impl Into<String>, value: Value) {
        self.inner.statics.borrow_mut().insert(name, value);
    }

    pub fn static_names(&self) -> Vec<String> {
        self.inner.statics.borrow().names()
    }

    /// Call a static function with the class itself as receiver.
    pub fn call_static(&self, name: &str, values: Vec<Value>) -> Result<Value, RuntimeError> {
        Value::Class(self.clone()).invoke(name, values)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Constructible for Class {
    fn name(&self) -> &str {
        &self.inner.name
    }

    fn prototype(&self) -> ObjectRef {
        self.inner.prototype.clone()
    }

    fn constructor_key(&self) -> &str {
        &self.inner.config.constructor_key
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.inner.name)
            .field("parent", &self.parent().map(|parent| parent.name().to_string()))
            .field("statics", &self.static_names())
            .finish()
    }
}

/// A constructible that was not produced by extension: an initializer
/// function plus a prototype whose constructor entry is that initializer.
#[derive(Clone)]
pub struct Constructor {
    name: String,
    prototype: ObjectRef,
    key: String,
}

impl Constructor {
    pub fn new<F>(name: impl Into<String>, init: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        let name = name.into();
        Self::from_function(Function::new(name.clone(), init))
    }

    pub fn from_function(init: Function) -> Self {
        Self::with_constructor_key(init, DEFAULT_CONSTRUCTOR_KEY)
    }

    pub fn with_constructor_key(init: Function, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut prototype = Object::new();
        prototype.set(key.clone(), Value::Function(init.clone()));
        Self {
            name: init.name().to_string(),
            prototype: prototype.wrapped(),
            key,
        }
    }

    /// Add an entry to the prototype.
    pub fn define(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.prototype.borrow_mut().set(name, value.into());
        self
    }

    pub fn method<F>(self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        let name = name.into();
        let function = Function::new(name.clone(), callback);
        self.define(name, function)
    }
}

impl Constructible for Constructor {
    fn name(&self) -> &str {
        &self.name
    }

    fn prototype(&self) -> ObjectRef {
        self.prototype.clone()
    }

    fn constructor_key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("name", &self.name)
            .field("key", &self.key)
            .finish()
    }
}

/// Extend a constructible that was not produced by [`Class::extend`].
pub fn extend_constructor<C>(
    base: &C,
    prototype: Option<Members>,
    statics: Option<Members>,
) -> Class
where
    C: Constructible + Clone + 'static,
{
    extend_constructor_with(base, prototype, statics, Rc::new(Config::default()))
}

pub(crate) fn extend_constructor_with<C>(
    base: &C,
    prototype: Option<Members>,
    statics: Option<Members>,
    config: Rc<Config>,
) -> Class
where
    C: Constructible + Clone + 'static,
{
    let name = format!("{}(extended)", base.name());
    // The foreign initializer is only reachable under the base's own key.
    let config = if config.constructor_key == base.constructor_key() {
        config
    } else {
        Rc::new(Config {
            constructor_key: base.constructor_key().to_string(),
            ..(*config).clone()
        })
    };
    derive(name, Rc::new(base.clone()), prototype, statics, config)
}

/// Whether `value` is an object whose prototype chain contains `class`'s
/// prototype.
pub fn instance_of(value: &Value, class: &dyn Constructible) -> bool {
    match value {
        Value::Object(object) => prototype::has_in_chain(object, &class.prototype()),
        _ => false,
    }
}

fn derive(
    name: String,
    base: Rc<dyn Constructible>,
    members: Option<Members>,
    statics: Option<Members>,
    config: Rc<Config>,
) -> Class {
    let parent_prototype = base.prototype();
    let prototype = linker::link(&parent_prototype);

    let mut installed = 0;
    let mut super_aware = 0;
    for (key, value) in members.unwrap_or_default() {
        let value = match (binder::classify(&key, &value, &config), &value) {
            (Classification::SuperAware, Value::Function(function)) => {
                super_aware += 1;
                let parent = prototype::get_property(&parent_prototype, &key).unwrap_or_default();
                Value::Function(binder::wrap(&key, function, parent))
            }
            _ => value,
        };
        prototype.borrow_mut().set(key, value);
        installed += 1;
    }

    let statics = statics.unwrap_or_default();
    debug!(
        class = %name,
        parent = base.name(),
        installed,
        super_aware,
        statics = statics.len(),
        "derived class"
    );

    Class {
        inner: Rc::new(ClassInner {
            name,
            prototype,
            statics: RefCell::new(statics),
            parent: Some(base),
            config,
        }),
    }
}
