use crate::errors::RuntimeError;
use crate::runtime::value::object::ObjectRef;
use crate::runtime::value::Value;

/// Receiver, arguments and the parent method bound to one activation.
#[derive(Debug, Clone)]
pub struct FunctionArgs {
    this_value: Value,
    values: Vec<Value>,
    super_method: Value,
    method_name: String,
}

impl FunctionArgs {
    pub fn new(this_value: Value, values: Vec<Value>) -> Self {
        Self {
            this_value,
            values,
            super_method: Value::Undefined,
            method_name: String::new(),
        }
    }

    pub(crate) fn with_super(mut self, method_name: &str, super_method: Value) -> Self {
        self.method_name = method_name.to_string();
        self.super_method = super_method;
        self
    }

    pub(crate) fn into_parts(self) -> (Value, Vec<Value>) {
        (self.this_value, self.values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Argument at `index`, or `Undefined` when it was not passed.
    pub fn arg(&self, index: usize) -> Value {
        self.values.get(index).cloned().unwrap_or(Value::Undefined)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn this(&self) -> &Value {
        &self.this_value
    }

    pub fn this_object(&self) -> Result<ObjectRef, RuntimeError> {
        match &self.this_value {
            Value::Object(object) => Ok(object.clone()),
            other => Err(RuntimeError::NotAnObject {
                operation: "use as receiver",
                type_name: other.type_of(),
            }),
        }
    }

    /// Parent implementation bound to this call; `Undefined` for plain methods.
    pub fn super_method(&self) -> &Value {
        &self.super_method
    }

    /// Invoke the parent implementation with the same receiver.
    pub fn call_super(&self, values: Vec<Value>) -> Result<Value, RuntimeError> {
        match &self.super_method {
            Value::Undefined => Err(RuntimeError::NoSuperMethod {
                name: self.method_name.clone(),
            }),
            Value::Function(function) => function.call(self.this_value.clone(), values),
            _ => Err(RuntimeError::NotAFunction {
                name: format!("super.{}", self.method_name),
            }),
        }
    }
}
