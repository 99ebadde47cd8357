//! Classical single inheritance on top of a prototype-chained object model.
//!
//! A [`Class`] is a method table linked to its parent's, plus a table of
//! statics. [`Class::extend`] derives a subclass; overrides that ask for it
//! receive the parent's same-named method for the duration of each call.

pub mod config;
pub mod embedding;
pub mod engine;
pub mod errors;
pub mod runtime;

pub use config::Config;
pub use embedding::{ClassBuilder, FunctionArgs};
pub use engine::Engine;
pub use errors::{ConfigError, ProtoclassError, RuntimeError};
pub use runtime::class::{
    extend_constructor, instance_of, Class, Constructible, Constructor, Members,
};
pub use runtime::value::function::{Function, SuperUse};
pub use runtime::value::object::{Object, ObjectRef};
pub use runtime::value::Value;

/// Extend a fresh root class with the default configuration.
pub fn extend(prototype: Option<Members>, statics: Option<Members>) -> Class {
    Class::root().extend(prototype, statics)
}
