//! Lowering of source modules into IR modules.
//!
//! Each module is lowered in a single depth-first pass. Top-level function
//! definitions become module methods, imports become import tokens, and all
//! other top-level statements are collected into the module's initializer.
//! Names assigned to at the top level are hoisted into module properties.
use crate::error::{Error, Violation};
use ::ast::nodes::{self as ast, Node as _};
use ::ast::source_location::{Coordinate, SourceLocation};
use indexmap::{IndexMap, IndexSet};
use ir::nodes::{
    BinaryOperation, BinaryOperator, Block, BoolLiteral, BreakStatement,
    Conditional, ContinueStatement, Definition, EmptyStatement, Export,
    Expression, IfStatement, Invoke, LoadDynamic, LocalVariable, Module,
    ModuleMethod, ModuleProperty, NullLiteral, NumberLiteral, ReturnStatement,
    Statement,
};
use ir::package::Package;
use ir::tokens::{
    Identifier, ModuleToken, Token, TypeToken, ENTRYPOINT_METHOD, INIT_METHOD,
    NAME_DELIMITER,
};
use location::{Location, Position};
use log::debug;
use std::path::{Component, Path, PathBuf};

/// The property containing the name a module is running as.
const NAME_PROPERTY: &str = "__name__";

/// Converts a source location into an IR location in `file`.
///
/// Lines are kept as is, while columns are made 1-based. Values that don't fit
/// in a `u32` are clamped to `u32::MAX`.
pub fn map_location(
    file: &Path,
    location: Option<&SourceLocation>,
) -> Option<Location> {
    location.map(|loc| {
        Location::new(file, position(loc.start), position(loc.end))
    })
}

fn position(coordinate: Coordinate) -> Position {
    let line = u32::try_from(coordinate.line).unwrap_or(u32::MAX);
    let column = u32::try_from(coordinate.column)
        .unwrap_or(u32::MAX)
        .saturating_add(1);

    Position::new(line, column)
}

/// Returns the name of the module defined in `file`, relative to `root`.
///
/// The extension is removed and the path components are joined using `/`. If
/// `file` isn't located in `root`, the full path is used instead.
pub fn module_name_from_path(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file).with_extension("");

    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => {
                Some(part.to_string_lossy().into_owned())
            }
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(NAME_DELIMITER)
}

/// A parsed module along with its name and source file.
#[derive(Debug, PartialEq)]
pub struct ModuleSpec {
    pub name: String,
    pub file: PathBuf,
    pub ast: ast::Module,
}

impl ModuleSpec {
    pub fn new(name: String, file: PathBuf, ast: ast::Module) -> ModuleSpec {
        ModuleSpec { name, file, ast }
    }

    /// Returns a spec named after the path of `file` relative to `root`.
    pub fn from_path(
        root: &Path,
        file: PathBuf,
        ast: ast::Module,
    ) -> ModuleSpec {
        let name = module_name_from_path(root, &file);

        ModuleSpec { name, file, ast }
    }
}

/// State tracked while lowering a single module.
#[derive(Default)]
struct Context {
    /// Names assigned to at the top level, and where they're first assigned.
    globals: IndexMap<String, Option<Location>>,

    /// The name of the function being lowered, if any.
    function: Option<String>,
}

/// A compiler pass that lowers source modules into IR modules.
pub struct LowerToIr<'a> {
    package: &'a str,
    main_name: &'a str,
    module: String,
    file: PathBuf,
    context: Context,
}

impl<'a> LowerToIr<'a> {
    /// Lowers all the modules in order and adds them to the package.
    ///
    /// `main_name` is the value assigned to `__name__` at the start of each
    /// module's initializer.
    pub fn run_all(
        package: &mut Package,
        main_name: &str,
        modules: Vec<ModuleSpec>,
    ) -> Result<(), Error> {
        for spec in modules {
            let module = LowerToIr {
                package: &package.name,
                main_name,
                module: spec.name,
                file: spec.file,
                context: Context::default(),
            }
            .run(spec.ast)?;

            package.add_module(module).map_err(|module| {
                Error::violation(
                    Violation::DuplicateModule(module.name.to_string()),
                    None,
                )
            })?;
        }

        Ok(())
    }

    fn run(mut self, node: ast::Module) -> Result<Module, Error> {
        debug!("lowering module '{}' ({})", self.module, self.file.display());

        let mut module = Module::new(Identifier::new(self.module.clone()));
        let mut init = Vec::new();

        module.members.insert(
            NAME_PROPERTY.to_string(),
            Definition::Property(Box::new(ModuleProperty {
                name: Identifier::new(NAME_PROPERTY),
                type_token: TypeToken::dynamic(),
                location: None,
            })),
        );

        for node in node.body {
            match node {
                ast::Statement::FunctionDef(node) => {
                    let location = self.location(&node.location);
                    let method = self.define_function(*node)?;
                    let name = method.name.to_string();

                    if module.members.contains_key(&name) {
                        return Err(Error::violation(
                            Violation::DuplicateMember(name),
                            location,
                        ));
                    }

                    module
                        .members
                        .insert(name, Definition::Method(Box::new(method)));
                }
                ast::Statement::ClassDef(node) => {
                    return Err(Error::unsupported(
                        "ClassDef",
                        self.location(&node.location),
                    ));
                }
                ast::Statement::Import(node) => {
                    self.import(*node, &mut module.imports)?;
                }
                node => init.push(self.statement(node)?),
            }
        }

        if !init.is_empty() {
            let mut body = vec![self.assign_name()];

            body.append(&mut init);
            module.members.insert(
                INIT_METHOD.to_string(),
                Definition::Method(Box::new(ModuleMethod {
                    name: Identifier::new(INIT_METHOD),
                    parameters: Vec::new(),
                    return_type: None,
                    body: Block::new(body),
                    location: None,
                })),
            );
        }

        module.members.insert(
            ENTRYPOINT_METHOD.to_string(),
            Definition::Method(Box::new(ModuleMethod {
                name: Identifier::new(ENTRYPOINT_METHOD),
                parameters: Vec::new(),
                return_type: None,
                body: Block::new(Vec::new()),
                location: None,
            })),
        );

        for (name, location) in self.context.globals.drain(..) {
            if module.members.contains_key(&name) {
                return Err(Error::violation(
                    Violation::GlobalCollision(name),
                    location,
                ));
            }

            let prop = ModuleProperty {
                name: Identifier::new(name.clone()),
                type_token: TypeToken::dynamic(),
                location,
            };

            module.members.insert(name, Definition::Property(Box::new(prop)));
        }

        for name in module.members.keys() {
            let export = Export {
                name: Identifier::new(name.clone()),
                referent: Token::member(self.package, &self.module, name),
            };

            module.exports.insert(name.clone(), export);
        }

        Ok(module)
    }

    fn location(&self, location: &SourceLocation) -> Option<Location> {
        map_location(&self.file, Some(location))
    }

    /// Returns the statement that assigns the module's name to `__name__`.
    fn assign_name(&self) -> Statement {
        let assign = BinaryOperation {
            left: Expression::load(Token::new(NAME_PROPERTY), None),
            operator: BinaryOperator::Assign,
            right: Expression::string(self.main_name.to_string(), None),
            location: None,
        };

        Statement::expression(Expression::Binary(Box::new(assign)), None)
    }

    fn define_function(
        &mut self,
        node: ast::FunctionDef,
    ) -> Result<ModuleMethod, Error> {
        if let Some(dec) = node.decorators.first() {
            return Err(Error::unsupported(
                "Decorator",
                self.location(dec.location()),
            ));
        }

        let parameters = self.parameters(node.arguments)?;
        let name = node.name.name;
        let previous = self.context.function.replace(name.clone());
        let body = self.block(node.body);

        self.context.function = previous;

        Ok(ModuleMethod {
            name: Identifier::new(name),
            parameters,
            return_type: Some(TypeToken::dynamic()),
            body: body?,
            location: self.location(&node.location),
        })
    }

    fn parameters(
        &mut self,
        node: ast::Arguments,
    ) -> Result<Vec<LocalVariable>, Error> {
        if let Some(arg) = node.vararg.as_ref() {
            return Err(Error::unsupported(
                "VarArg",
                self.location(&arg.location),
            ));
        }

        if let Some(arg) = node.kwonlyargs.first() {
            return Err(Error::unsupported(
                "KwOnlyArg",
                self.location(&arg.location),
            ));
        }

        if let Some(arg) = node.kwarg.as_ref() {
            return Err(Error::unsupported(
                "KwArg",
                self.location(&arg.location),
            ));
        }

        if let Some(val) = node.defaults.first() {
            return Err(Error::unsupported(
                "Default",
                self.location(val.location()),
            ));
        }

        Ok(node
            .args
            .into_iter()
            .map(|arg| LocalVariable {
                location: self.location(&arg.location),
                name: Identifier::new(arg.name),
                type_token: TypeToken::dynamic(),
            })
            .collect())
    }

    fn import(
        &mut self,
        node: ast::Import,
        imports: &mut IndexSet<ModuleToken>,
    ) -> Result<(), Error> {
        for alias in node.names {
            if alias.asname.is_some() {
                return Err(Error::unsupported(
                    "ImportAlias",
                    self.location(&alias.location),
                ));
            }

            imports.insert(ModuleToken::from_dotted(&alias.name));
        }

        Ok(())
    }

    fn block(&mut self, nodes: Vec<ast::Statement>) -> Result<Block, Error> {
        let statements = nodes
            .into_iter()
            .map(|node| self.statement(node))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Block::new(statements))
    }

    fn statement(&mut self, node: ast::Statement) -> Result<Statement, Error> {
        let kind = node.kind();
        let location = self.location(node.location());

        match node {
            ast::Statement::Pass(_) => {
                Ok(Statement::Empty(Box::new(EmptyStatement { location })))
            }
            ast::Statement::Break(_) => {
                Ok(Statement::Break(Box::new(BreakStatement { location })))
            }
            ast::Statement::Continue(_) => {
                Ok(Statement::Continue(Box::new(ContinueStatement {
                    location,
                })))
            }
            ast::Statement::Expr(node) => {
                let expr = self.expression(node.value)?;

                Ok(Statement::expression(expr, location))
            }
            ast::Statement::Assign(node) => self.assign(*node, location),
            ast::Statement::If(node) => self.if_statement(*node, location),
            ast::Statement::Return(node) => {
                let value = match node.value {
                    Some(value) => Some(self.expression(value)?),
                    None => None,
                };

                Ok(Statement::Return(Box::new(ReturnStatement {
                    value,
                    location,
                })))
            }
            ast::Statement::Assert(_)
            | ast::Statement::AugAssign(_)
            | ast::Statement::ClassDef(_)
            | ast::Statement::Delete(_)
            | ast::Statement::Exec(_)
            | ast::Statement::For(_)
            | ast::Statement::FunctionDef(_)
            | ast::Statement::Global(_)
            | ast::Statement::Import(_)
            | ast::Statement::ImportFrom(_)
            | ast::Statement::Nonlocal(_)
            | ast::Statement::Print(_)
            | ast::Statement::Raise(_)
            | ast::Statement::Try(_)
            | ast::Statement::While(_)
            | ast::Statement::With(_) => {
                Err(Error::unsupported(kind, location))
            }
        }
    }

    fn assign(
        &mut self,
        node: ast::Assign,
        location: Option<Location>,
    ) -> Result<Statement, Error> {
        let mut targets = node.targets;
        let count = targets.len();
        let target = match targets.pop() {
            Some(target) if count == 1 => target,
            _ => {
                return Err(Error::violation(
                    Violation::MultipleAssignTargets(count),
                    location,
                ))
            }
        };
        let left = self.assign_target(target)?;
        let right = self.expression(node.value)?;
        let assign = BinaryOperation {
            left,
            operator: BinaryOperator::Assign,
            right,
            location: location.clone(),
        };

        Ok(Statement::expression(
            Expression::Binary(Box::new(assign)),
            location,
        ))
    }

    fn assign_target(
        &mut self,
        node: ast::Expression,
    ) -> Result<Expression, Error> {
        let kind = node.kind();
        let location = self.location(node.location());

        match node {
            ast::Expression::Name(node) => {
                self.check_context(
                    kind,
                    node.context,
                    ast::Context::Store,
                    &location,
                )?;

                if self.context.function.is_none() {
                    self.context
                        .globals
                        .entry(node.id.clone())
                        .or_insert_with(|| location.clone());
                }

                Ok(Expression::load(Token::new(node.id), location))
            }
            ast::Expression::Attribute(node) => {
                self.check_context(
                    kind,
                    node.context,
                    ast::Context::Store,
                    &location,
                )?;
                self.load_dynamic(*node, location)
            }
            _ => Err(Error::unsupported(kind, location)),
        }
    }

    fn if_statement(
        &mut self,
        node: ast::If,
        location: Option<Location>,
    ) -> Result<Statement, Error> {
        let condition = self.expression(node.test)?;
        let consequent = self.block(node.body)?;
        let alternate = self.alternate(node.orelse)?;

        Ok(Statement::If(Box::new(IfStatement {
            condition,
            consequent,
            alternate,
            location,
        })))
    }

    /// Lowers the `else` branch of an `if` statement.
    ///
    /// An `elif` is lowered into a nested `if` statement directly, while any
    /// other `else` body is wrapped in a block.
    fn alternate(
        &mut self,
        mut nodes: Vec<ast::Statement>,
    ) -> Result<Option<Statement>, Error> {
        if nodes.is_empty() {
            return Ok(None);
        }

        if nodes.len() == 1 && matches!(nodes[0], ast::Statement::If(_)) {
            return match nodes.pop() {
                Some(node) => self.statement(node).map(Some),
                None => Ok(None),
            };
        }

        let block = self.block(nodes)?;

        Ok(Some(Statement::Block(Box::new(block))))
    }

    fn expression(
        &mut self,
        node: ast::Expression,
    ) -> Result<Expression, Error> {
        let kind = node.kind();
        let location = self.location(node.location());

        match node {
            ast::Expression::Name(node) => {
                self.check_context(
                    kind,
                    node.context,
                    ast::Context::Load,
                    &location,
                )?;

                Ok(Expression::load(Token::new(node.id), location))
            }
            ast::Expression::Attribute(node) => {
                self.check_context(
                    kind,
                    node.context,
                    ast::Context::Load,
                    &location,
                )?;
                self.load_dynamic(*node, location)
            }
            ast::Expression::IfExp(node) => {
                let condition = self.expression(node.test)?;
                let consequent = self.expression(node.body)?;
                let alternate = self.expression(node.orelse)?;

                Ok(Expression::Conditional(Box::new(Conditional {
                    condition,
                    consequent,
                    alternate,
                    location,
                })))
            }
            ast::Expression::Call(node) => self.call(*node, location),
            ast::Expression::Compare(node) => self.compare(*node, location),
            ast::Expression::NameConstant(node) => Ok(match node.value {
                ast::Constant::None => {
                    Expression::Null(Box::new(NullLiteral { location }))
                }
                ast::Constant::True => {
                    Expression::Bool(Box::new(BoolLiteral {
                        value: true,
                        location,
                    }))
                }
                ast::Constant::False => {
                    Expression::Bool(Box::new(BoolLiteral {
                        value: false,
                        location,
                    }))
                }
            }),
            ast::Expression::Str(node) => {
                Ok(Expression::string(node.value, location))
            }
            ast::Expression::Num(node) => {
                Ok(Expression::Number(Box::new(NumberLiteral {
                    value: node.value,
                    location,
                })))
            }
            ast::Expression::BinOp(_)
            | ast::Expression::BoolOp(_)
            | ast::Expression::Dict(_)
            | ast::Expression::DictComp(_)
            | ast::Expression::Ellipsis(_)
            | ast::Expression::GeneratorExp(_)
            | ast::Expression::Lambda(_)
            | ast::Expression::List(_)
            | ast::Expression::ListComp(_)
            | ast::Expression::Repr(_)
            | ast::Expression::Set(_)
            | ast::Expression::SetComp(_)
            | ast::Expression::Starred(_)
            | ast::Expression::Subscript(_)
            | ast::Expression::Tuple(_)
            | ast::Expression::UnaryOp(_)
            | ast::Expression::Yield(_)
            | ast::Expression::YieldFrom(_) => {
                Err(Error::unsupported(kind, location))
            }
        }
    }

    fn load_dynamic(
        &mut self,
        node: ast::Attribute,
        location: Option<Location>,
    ) -> Result<Expression, Error> {
        let object = self.expression(node.value)?;
        let name = Expression::string(node.attribute, location.clone());

        Ok(Expression::LoadDynamic(Box::new(LoadDynamic {
            object,
            name,
            location,
        })))
    }

    fn call(
        &mut self,
        node: ast::Call,
        location: Option<Location>,
    ) -> Result<Expression, Error> {
        if let Some(kw) = node.keywords.first() {
            let construct =
                if kw.name.is_some() { "Keyword" } else { "KwArgs" };

            return Err(Error::unsupported(
                construct,
                self.location(&kw.location),
            ));
        }

        if let Some(val) = node.starargs.as_ref() {
            return Err(Error::unsupported(
                "Starred",
                self.location(val.location()),
            ));
        }

        if let Some(val) = node.kwargs.as_ref() {
            return Err(Error::unsupported(
                "KwArgs",
                self.location(val.location()),
            ));
        }

        let function = self.expression(node.function)?;
        let arguments = node
            .arguments
            .into_iter()
            .map(|arg| self.expression(arg))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Expression::Invoke(Box::new(Invoke {
            function,
            arguments,
            location,
        })))
    }

    fn compare(
        &mut self,
        node: ast::Compare,
        location: Option<Location>,
    ) -> Result<Expression, Error> {
        let mut operators = node.operators;
        let mut comparators = node.comparators;
        let count = operators.len();
        let (op, right) = match (operators.pop(), comparators.pop()) {
            (Some(op), Some(right))
                if operators.is_empty() && comparators.is_empty() =>
            {
                (op, right)
            }
            _ => {
                return Err(Error::violation(
                    Violation::ChainedComparison(count),
                    location,
                ))
            }
        };
        let operator = match op {
            ast::ComparisonOperator::Eq | ast::ComparisonOperator::Is => {
                BinaryOperator::Equal
            }
            ast::ComparisonOperator::NotEq | ast::ComparisonOperator::IsNot => {
                BinaryOperator::NotEqual
            }
            ast::ComparisonOperator::Gt => BinaryOperator::GreaterThan,
            ast::ComparisonOperator::GtE => BinaryOperator::GreaterThanOrEqual,
            ast::ComparisonOperator::Lt => BinaryOperator::LessThan,
            ast::ComparisonOperator::LtE => BinaryOperator::LessThanOrEqual,
            ast::ComparisonOperator::In | ast::ComparisonOperator::NotIn => {
                return Err(Error::unsupported(op.name(), location));
            }
        };
        let left = self.expression(node.left)?;
        let right = self.expression(right)?;

        Ok(Expression::Binary(Box::new(BinaryOperation {
            left,
            operator,
            right,
            location,
        })))
    }

    fn check_context(
        &self,
        construct: &'static str,
        actual: ast::Context,
        expected: ast::Context,
        location: &Option<Location>,
    ) -> Result<(), Error> {
        if actual == expected {
            return Ok(());
        }

        Err(Error::violation(
            Violation::InvalidContext { construct, context: actual.name() },
            location.clone(),
        ))
    }
}
