use std::rc::Rc;

use crate::config::Config;
use crate::embedding::function_args::FunctionArgs;
use crate::errors::{ConfigError, RuntimeError};
use crate::runtime::class::{self, Class, Constructible, Constructor, Members};
use crate::runtime::value::function::Function;
use crate::runtime::value::Value;

/// Entry point holding the configuration every class it roots inherits.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Rc<Config>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: Rc::new(config),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A root class with an empty method table.
    pub fn root(&self) -> Class {
        Class::root_with_config(self.config.clone())
    }

    pub fn extend(&self, prototype: Option<Members>, statics: Option<Members>) -> Class {
        self.root().extend(prototype, statics)
    }

    /// A foreign constructible whose initializer sits under the configured
    /// constructor key.
    pub fn constructor<F>(&self, name: impl Into<String>, init: F) -> Constructor
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        Constructor::with_constructor_key(Function::new(name, init), &self.config.constructor_key)
    }

    pub fn extend_constructor<C>(
        &self,
        base: &C,
        prototype: Option<Members>,
        statics: Option<Members>,
    ) -> Class
    where
        C: Constructible + Clone + 'static,
    {
        class::extend_constructor_with(base, prototype, statics, self.config.clone())
    }
}
