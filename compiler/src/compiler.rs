use crate::config::Config;
use crate::error::Error;
use crate::lower::{LowerToIr, ModuleSpec};
use crate::pkg::descriptor::Descriptor;
use crate::pkg::loader::Loader;
use ::ast::nodes::Module;
use ir::package::Package;
use log::debug;
use std::path::{Path, PathBuf};

/// A type that lowers parsed modules into packages.
///
/// The compiler owns the descriptor loader, so descriptors are only read once
/// for the lifetime of a compiler.
pub struct Compiler {
    loader: Loader,
    main_name: String,
}

impl Compiler {
    pub fn new(mut config: Config) -> Self {
        let loader = Loader::from_config(&mut config);

        Self { loader, main_name: config.main_name }
    }

    /// Compiles a single module parsed from `file`.
    ///
    /// The project descriptor is expected in the directory containing `file`,
    /// and the module is named after the file.
    pub fn compile(
        &mut self,
        file: PathBuf,
        module: Module,
    ) -> Result<Package, Error> {
        let root = file.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        let spec = ModuleSpec::from_path(&root, file, module);

        self.compile_modules(&root, vec![spec])
    }

    /// Compiles the modules of the project in `root` into a single package.
    pub fn compile_modules(
        &mut self,
        root: &Path,
        modules: Vec<ModuleSpec>,
    ) -> Result<Package, Error> {
        let mut package = self.loader.load_project(root)?.into_package();

        debug!(
            "compiling {} module(s) into package '{}'",
            modules.len(),
            package.name
        );

        LowerToIr::run_all(&mut package, &self.main_name, modules)?;
        Ok(package)
    }

    /// Loads the descriptor of a dependency, starting in `root`.
    pub fn load_dependency(
        &mut self,
        root: &Path,
    ) -> Result<Descriptor, Error> {
        self.loader.load_dependency(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{assign, cols, module, num, store};
    use ir::nodes::{BinaryOperation, BinaryOperator, Expression, Statement};
    use ir::tokens::{Token, INIT_METHOD};
    use similar_asserts::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_compile() {
        let dir = tempdir().unwrap();

        fs::write(
            dir.path().join("Coconut.json"),
            r#"{"name": "app", "license": "MIT"}"#,
        )
        .unwrap();

        let mut compiler = Compiler::new(Config::new());
        let file = dir.path().join("main.py");
        let ast = module(vec![assign(
            store("x", cols(1, 0, 1)),
            num(1.0, cols(1, 4, 5)),
            cols(1, 0, 5),
        )]);
        let pkg = compiler.compile(file.clone(), ast).unwrap();
        let main = pkg.module("main").unwrap();

        assert_eq!(pkg.name, "app");
        assert_eq!(pkg.license, Some("MIT".to_string()));
        assert!(main.property("x").is_some());
        assert!(main.method(INIT_METHOD).is_some());
        assert_eq!(
            main.exports["x"].referent.as_str(),
            "app::main::x"
        );
        assert_eq!(
            main.property("x").unwrap().location.as_ref().map(|l| l.file()),
            Some(file.as_path())
        );
    }

    #[test]
    fn test_compile_modules() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("Coconut.toml"), "name = \"app\"\n").unwrap();

        let mut compiler = Compiler::new(Config::new());
        let specs = vec![
            ModuleSpec::from_path(
                dir.path(),
                dir.path().join("main.py"),
                module(Vec::new()),
            ),
            ModuleSpec::from_path(
                dir.path(),
                dir.path().join("lib").join("util.py"),
                module(Vec::new()),
            ),
        ];
        let pkg = compiler.compile_modules(dir.path(), specs).unwrap();
        let names: Vec<_> = pkg.modules.keys().map(|k| k.as_str()).collect();

        assert_eq!(names, vec!["main", "lib/util"]);
    }

    #[test]
    fn test_compile_without_descriptor() {
        let dir = tempdir().unwrap();
        let mut compiler = Compiler::new(Config::new());
        let err = compiler
            .compile(dir.path().join("main.py"), module(Vec::new()))
            .unwrap_err();

        assert!(matches!(err, Error::DescriptorNotFound { .. }));
    }

    #[test]
    fn test_custom_main_name() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("Coconut.json"), r#"{"name": "app"}"#)
            .unwrap();

        let mut config = Config::new();

        config.set_main_name("__app__".to_string());

        let mut compiler = Compiler::new(config);
        let ast = module(vec![assign(
            store("x", cols(1, 0, 1)),
            num(1.0, cols(1, 4, 5)),
            cols(1, 0, 5),
        )]);
        let pkg = compiler.compile(dir.path().join("main.py"), ast).unwrap();
        let init = pkg.module("main").unwrap().method(INIT_METHOD).unwrap();

        assert_eq!(
            init.body.statements[0],
            Statement::expression(
                Expression::Binary(Box::new(BinaryOperation {
                    left: Expression::load(Token::new("__name__"), None),
                    operator: BinaryOperator::Assign,
                    right: Expression::string("__app__".to_string(), None),
                    location: None,
                })),
                None,
            )
        );
    }

    #[test]
    fn test_load_dependency() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("src");

        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("Cocopack.json"), r#"{"name": "dep"}"#)
            .unwrap();

        let mut compiler = Compiler::new(Config::new());

        assert_eq!(compiler.load_dependency(&nested).unwrap().name, "dep");
        assert!(compiler.compile_modules(&nested, Vec::new()).is_err());
    }
}
