use tracing::trace;

use crate::config::Config;
use crate::embedding::callback::NativeFunctionBoxed;
use crate::embedding::function_args::FunctionArgs;
use crate::runtime::class::detect::mentions_keyword;
use crate::runtime::value::function::{Function, SuperUse};
use crate::runtime::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Installed as given.
    Plain,
    /// Installed behind a wrapper that binds the parent implementation.
    SuperAware,
}

/// Decide once, at extension time, how an override entry is installed.
///
/// Only functions can be super-aware. A function is super-aware when it was
/// declared with [`SuperUse::Super`], or when it carries source text that
/// mentions the configured super keyword as a whole word and source detection
/// is enabled.
pub fn classify(name: &str, value: &Value, config: &Config) -> Classification {
    let Value::Function(function) = value else {
        return Classification::Plain;
    };

    let declared = function.super_use() == SuperUse::Super;
    let detected = config.detect_super_in_source
        && function
            .source()
            .is_some_and(|source| mentions_keyword(source, &config.super_keyword));

    let classification = if declared || detected {
        Classification::SuperAware
    } else {
        Classification::Plain
    };
    trace!(method = name, declared, detected, ?classification, "classified override");
    classification
}

/// Wrap `function` so each call sees `parent` as its super implementation.
///
/// The parent is handed to the body through [`FunctionArgs::super_method`] and
/// also parked in the receiver's `current_super` slot for the extent of the
/// call. The slot's previous value is put back before returning, on error as
/// well as on success, so nested and sibling super calls each observe their
/// own parent.
pub fn wrap(name: &str, function: &Function, parent: Value) -> Function {
    let target = function.clone();
    let method_name = name.to_string();
    let callback = NativeFunctionBoxed::from_closure(move |args: FunctionArgs| {
        let (this, values) = args.into_parts();
        let receiver = this.as_object().cloned();
        let saved = receiver.as_ref().map(|object| {
            let mut object = object.borrow_mut();
            let parent = std::mem::replace(&mut object.current_super, parent.clone());
            let method = object.current_super_method.replace(method_name.clone());
            (parent, method)
        });

        trace!(method = %method_name, has_parent = !parent.is_undefined(), "super-aware call");
        let result = target.call_with_super(&method_name, this, values, parent.clone());

        if let (Some(object), Some((parent, method))) = (receiver, saved) {
            let mut object = object.borrow_mut();
            object.current_super = parent;
            object.current_super_method = method;
        }
        result
    });
    Function::wrapper(function, callback)
}
