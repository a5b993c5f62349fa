#![allow(clippy::new_without_default)]
#![allow(clippy::enum_variant_names)]

pub mod compiler;
pub mod config;
pub mod error;
pub mod lower;
pub mod pkg;

#[cfg(test)]
mod test;
