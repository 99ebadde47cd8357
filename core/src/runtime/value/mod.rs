mod display;
pub mod function;
pub mod object;

use std::rc::Rc;

use crate::errors::RuntimeError;
use crate::runtime::class::Class;
use function::Function;
use object::{prototype, ObjectRef};

#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Function(Function),
    Object(ObjectRef),
    Class(Class),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl From<Class> for Value {
    fn from(value: Class) -> Self {
        Value::Class(value)
    }
}

impl Value {
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Function(_) | Value::Class(_) => "function",
            Value::Object(_) => "object",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Property lookup with prototype fallback. Classes expose their statics.
    pub fn get(&self, key: &str) -> Value {
        match self {
            Value::Object(object) => prototype::get_property(object, key).unwrap_or_default(),
            Value::Class(class) => class.get_static(key).unwrap_or_default(),
            _ => Value::Undefined,
        }
    }

    pub fn set(&self, key: &str, value: Value) -> Result<(), RuntimeError> {
        match self {
            Value::Object(object) => {
                prototype::set_property(object, key, value);
                Ok(())
            }
            Value::Class(class) => {
                class.set_static(key, value);
                Ok(())
            }
            other => Err(RuntimeError::NotAnObject {
                operation: "set a property",
                type_name: other.type_of(),
            }),
        }
    }

    /// Call this value as a function with the given receiver.
    pub fn call(&self, this: Value, values: Vec<Value>) -> Result<Value, RuntimeError> {
        match self {
            Value::Function(function) => function.call(this, values),
            other => Err(RuntimeError::NotAFunction {
                name: other.to_display_string(),
            }),
        }
    }

    /// Resolve `name` on this value and call it with this value as receiver.
    pub fn invoke(&self, name: &str, values: Vec<Value>) -> Result<Value, RuntimeError> {
        match self.get(name) {
            Value::Function(function) => function.call(self.clone(), values),
            _ => Err(RuntimeError::NotAFunction {
                name: name.to_string(),
            }),
        }
    }

    /// Parent method currently exposed on this instance, `Undefined` when no
    /// super-aware call is running on it.
    pub fn current_super(&self) -> Value {
        match self {
            Value::Object(object) => object.borrow().current_super.clone(),
            _ => Value::Undefined,
        }
    }

    /// Call the parent method exposed on this instance, with this instance
    /// as receiver.
    pub fn call_super(&self, values: Vec<Value>) -> Result<Value, RuntimeError> {
        let (parent, method) = match self {
            Value::Object(object) => {
                let object = object.borrow();
                (object.current_super.clone(), object.current_super_method.clone())
            }
            _ => (Value::Undefined, None),
        };
        let Some(method) = method else {
            return Err(RuntimeError::NoActiveSuperCall);
        };
        match parent {
            Value::Undefined => Err(RuntimeError::NoSuperMethod { name: method }),
            Value::Function(function) => function.call(self.clone(), values),
            _ => Err(RuntimeError::NotAFunction {
                name: format!("super.{method}"),
            }),
        }
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}
