use crate::embedding::function_args::FunctionArgs;
use crate::errors::RuntimeError;
use crate::runtime::value::function::Function;
use crate::runtime::value::Value;

/// Insertion-ordered name/value table handed to `extend`.
///
/// Names are unique; inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default)]
pub struct Members {
    entries: Vec<(String, Value)>,
}

impl Members {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Plain method entry.
    pub fn method<F>(self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        let name = name.into();
        let function = Function::new(name.clone(), callback);
        self.with(name, function)
    }

    /// Method entry that receives the parent implementation.
    pub fn method_with_super<F>(self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        let name = name.into();
        let function = Function::with_super(name.clone(), callback);
        self.with(name, function)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl IntoIterator for Members {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Members {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut members = Self::new();
        for (name, value) in iter {
            members.insert(name, value);
        }
        members
    }
}
