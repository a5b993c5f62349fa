//! The intermediate representation produced by the compiler.
pub mod nodes;
pub mod package;
pub mod tokens;
