use crate::embedding::function_args::FunctionArgs;
use crate::errors::RuntimeError;
use crate::runtime::class::{self, Class, Constructible, Members};
use crate::runtime::value::function::Function;
use crate::runtime::value::Value;

/// Fluent construction of the prototype and static tables for one subclass.
pub struct ClassBuilder {
    name: String,
    constructor: Option<Function>,
    prototype: Members,
    statics: Members,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructor: None,
            prototype: Members::new(),
            statics: Members::new(),
        }
    }

    pub fn constructor<F>(mut self, callback: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        self.constructor = Some(Function::new(self.qualified("constructor"), callback));
        self
    }

    /// Constructor that can run the parent's constructor via
    /// [`FunctionArgs::call_super`].
    pub fn constructor_with_super<F>(mut self, callback: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        self.constructor = Some(Function::with_super(self.qualified("constructor"), callback));
        self
    }

    pub fn method<F>(self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        let name = name.into();
        let function = Function::new(self.qualified(&name), callback);
        self.property(name, function)
    }

    pub fn method_with_super<F>(self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        let name = name.into();
        let function = Function::with_super(self.qualified(&name), callback);
        self.property(name, function)
    }

    /// Method whose need for a parent implementation is read from `source`.
    pub fn scripted_method<F>(
        self,
        name: impl Into<String>,
        source: impl Into<String>,
        callback: F,
    ) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        let name = name.into();
        let function = Function::scripted(self.qualified(&name), source, callback);
        self.property(name, function)
    }

    /// Any prototype entry; non-function values are installed verbatim.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.prototype.insert(name, value.into());
        self
    }

    pub fn static_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.statics.insert(name, value.into());
        self
    }

    pub fn static_method<F>(self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        let name = name.into();
        let function = Function::new(self.qualified(&name), callback);
        self.static_value(name, function)
    }

    /// The prototype and static tables, with the constructor stored under
    /// `constructor_key`.
    pub fn members(self, constructor_key: &str) -> (Members, Members) {
        let mut prototype = Members::new();
        if let Some(constructor) = self.constructor {
            prototype.insert(constructor_key, Value::Function(constructor));
        }
        for (name, value) in self.prototype {
            prototype.insert(name, value);
        }
        (prototype, self.statics)
    }

    pub fn extend(self, parent: &Class) -> Class {
        let name = self.name.clone();
        let (prototype, statics) = self.members(&parent.config().constructor_key);
        parent.extend_named(name, Some(prototype), Some(statics))
    }

    pub fn extend_constructor<C>(self, base: &C) -> Class
    where
        C: Constructible + Clone + 'static,
    {
        let (prototype, statics) = self.members(base.constructor_key());
        class::extend_constructor(base, Some(prototype), Some(statics))
    }

    fn qualified(&self, method: &str) -> String {
        format!("{}::{method}", self.name)
    }
}
