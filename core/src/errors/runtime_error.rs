use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum RuntimeError {
    #[error("'{name}' is not a function")]
    NotAFunction { name: String },

    #[error("no super method '{name}' is bound to this call")]
    #[diagnostic(help("the parent class has no method with this name"))]
    NoSuperMethod { name: String },

    #[error("super called outside a super-aware method call")]
    NoActiveSuperCall,

    #[error("cannot {operation} on a value of type {type_name}")]
    NotAnObject {
        operation: &'static str,
        type_name: &'static str,
    },

    #[error("type error: {message}")]
    TypeError { message: String },

    #[error("uncaught exception: {message}")]
    Thrown { message: String },
}

impl RuntimeError {
    /// Error raised from inside a method body.
    pub fn thrown(message: impl Into<String>) -> Self {
        Self::Thrown {
            message: message.into(),
        }
    }
}
