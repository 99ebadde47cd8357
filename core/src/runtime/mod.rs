pub mod class;
pub mod value;
