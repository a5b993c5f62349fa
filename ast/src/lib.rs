//! The syntax tree of parsed source modules.
//!
//! Parsing itself happens elsewhere; this crate only defines the tree the
//! parser hands over to the compiler.
pub mod nodes;
pub mod source_location;
