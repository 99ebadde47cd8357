pub mod callback;
pub mod class_builder;
pub mod function_args;

pub use callback::{NativeFunction, NativeFunctionBoxed};
pub use class_builder::ClassBuilder;
pub use function_args::FunctionArgs;
