//! Template rendering implementations

mod variable;

pub use variable::{MissingVariable, VariableRenderer};
