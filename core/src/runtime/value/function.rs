use std::fmt;
use std::rc::Rc;

use crate::embedding::callback::NativeFunctionBoxed;
use crate::embedding::function_args::FunctionArgs;
use crate::errors::RuntimeError;
use crate::runtime::value::Value;

/// Whether a method asks for the parent implementation when installed as an
/// override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuperUse {
    Plain,
    Super,
}

#[derive(Clone)]
pub struct Function {
    inner: Rc<FunctionInner>,
}

struct FunctionInner {
    name: String,
    callback: NativeFunctionBoxed,
    super_use: SuperUse,
    source: Option<String>,
    /// Set on the wrapper produced for a super-aware override.
    wraps: Option<Function>,
}

impl Function {
    pub fn new<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        Self::build(
            name.into(),
            NativeFunctionBoxed::from_closure(callback),
            SuperUse::Plain,
            None,
        )
    }

    /// A method that always receives its parent implementation.
    pub fn with_super<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        Self::build(
            name.into(),
            NativeFunctionBoxed::from_closure(callback),
            SuperUse::Super,
            None,
        )
    }

    /// A method carrying the script text it was compiled from. Whether it
    /// needs its parent implementation is decided by scanning that text.
    pub fn scripted<F>(name: impl Into<String>, source: impl Into<String>, callback: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        Self::build(
            name.into(),
            NativeFunctionBoxed::from_closure(callback),
            SuperUse::Plain,
            Some(source.into()),
        )
    }

    fn build(
        name: String,
        callback: NativeFunctionBoxed,
        super_use: SuperUse,
        source: Option<String>,
    ) -> Self {
        Self {
            inner: Rc::new(FunctionInner {
                name,
                callback,
                super_use,
                source,
                wraps: None,
            }),
        }
    }

    pub(crate) fn wrapper(target: &Function, callback: NativeFunctionBoxed) -> Self {
        Self {
            inner: Rc::new(FunctionInner {
                name: target.inner.name.clone(),
                callback,
                super_use: target.inner.super_use,
                source: target.inner.source.clone(),
                wraps: Some(target.clone()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn super_use(&self) -> SuperUse {
        self.inner.super_use
    }

    pub fn source(&self) -> Option<&str> {
        self.inner.source.as_deref()
    }

    /// The override this function binds a parent implementation for, if it is
    /// such a wrapper.
    pub fn wrapped_target(&self) -> Option<&Function> {
        self.inner.wraps.as_ref()
    }

    pub fn is_super_bound(&self) -> bool {
        self.inner.wraps.is_some()
    }

    pub fn call(&self, this: Value, values: Vec<Value>) -> Result<Value, RuntimeError> {
        self.call_with_super(&self.inner.name, this, values, Value::Undefined)
    }

    /// Run the body with `super_method` bound as the parent implementation of
    /// `method_name`.
    pub(crate) fn call_with_super(
        &self,
        method_name: &str,
        this: Value,
        values: Vec<Value>,
        super_method: Value,
    ) -> Result<Value, RuntimeError> {
        let args = FunctionArgs::new(this, values).with_super(method_name, super_method);
        self.inner.callback.call(args)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.inner.name)
            .field("super_use", &self.inner.super_use)
            .field("super_bound", &self.is_super_bound())
            .finish()
    }
}
