use crate::nodes::Module;
use indexmap::IndexMap;

/// A compiled package and the modules it consists of.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub website: Option<String>,
    pub license: Option<String>,
    pub dependencies: Vec<String>,
    pub modules: IndexMap<String, Module>,
}

impl Package {
    pub fn new<S: Into<String>>(name: S) -> Package {
        Package {
            name: name.into(),
            description: None,
            author: None,
            website: None,
            license: None,
            dependencies: Vec::new(),
            modules: IndexMap::new(),
        }
    }

    /// Adds a module to the package.
    ///
    /// If a module with the same name already exists, the package is left as
    /// is and the module is returned as an error.
    pub fn add_module(&mut self, module: Module) -> Result<(), Module> {
        let name = module.name.as_str();

        if self.modules.contains_key(name) {
            return Err(module);
        }

        self.modules.insert(name.to_string(), module);
        Ok(())
    }

    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{Identifier, ModuleToken};

    #[test]
    fn test_add_module() {
        let mut pkg = Package::new("app");

        assert!(pkg.add_module(Module::new(Identifier::new("main"))).is_ok());
        assert!(pkg.module("main").is_some());
        assert!(pkg.module("other").is_none());
    }

    #[test]
    fn test_add_duplicate_module() {
        let mut pkg = Package::new("app");
        let first = Module::new(Identifier::new("main"));
        let mut second = Module::new(Identifier::new("main"));

        second.imports.insert(ModuleToken::from_dotted("os"));
        pkg.add_module(first).unwrap();

        let rejected = pkg.add_module(second).unwrap_err();

        assert_eq!(rejected.imports.len(), 1);
        assert!(pkg.module("main").map_or(false, |m| m.imports.is_empty()));
    }
}
