use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to parse configuration")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("'{value}' is not a valid identifier for `{field}`")]
    #[diagnostic(help("use a non-empty run of letters, digits, '_' or '$' not starting with a digit"))]
    InvalidIdentifier { field: &'static str, value: String },
}
