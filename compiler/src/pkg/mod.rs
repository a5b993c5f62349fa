//! Package descriptors and resolving them.
pub mod codec;
pub mod descriptor;
pub mod loader;
