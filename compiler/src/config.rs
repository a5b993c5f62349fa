//! Configuration for the compiler.
use crate::pkg::codec::{Codec, Codecs};

/// The base name of the descriptor of the project being compiled.
pub const PROJECT_DESCRIPTOR: &str = "Coconut";

/// The base name of the descriptor of a compiled package.
pub const PACKAGE_DESCRIPTOR: &str = "Cocopack";

/// The value assigned to `__name__` when a module is initialized.
const MAIN_NAME: &str = "__main__";

/// A type for storing compiler configuration, such as the descriptor names to
/// look for.
pub struct Config {
    /// The base name (without extension) of a project descriptor.
    pub project_descriptor: String,

    /// The base name (without extension) of a package descriptor.
    pub package_descriptor: String,

    /// The codecs used to decode descriptors, in the order they're tried.
    pub codecs: Codecs,

    /// The value `__name__` is set to at the start of a module's initializer.
    pub main_name: String,
}

impl Config {
    pub fn new() -> Config {
        Config {
            project_descriptor: PROJECT_DESCRIPTOR.to_string(),
            package_descriptor: PACKAGE_DESCRIPTOR.to_string(),
            codecs: Codecs::new(),
            main_name: MAIN_NAME.to_string(),
        }
    }

    pub fn set_project_descriptor(&mut self, name: String) {
        self.project_descriptor = name;
    }

    pub fn set_package_descriptor(&mut self, name: String) {
        self.package_descriptor = name;
    }

    pub fn set_main_name(&mut self, name: String) {
        self.main_name = name;
    }

    /// Registers a codec for the given extension, after the existing ones.
    pub fn add_codec(&mut self, extension: &str, codec: Box<dyn Codec>) {
        self.codecs.register(extension, codec);
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}
