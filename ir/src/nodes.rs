//! The nodes of an IR module.
//!
//! Every node is owned by its parent and optionally carries the location of
//! the source node it was produced from.
use crate::tokens::{Identifier, ModuleToken, Token, TypeToken};
use indexmap::{IndexMap, IndexSet};
use location::Location;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Assign,
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NullLiteral {
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoolLiteral {
    pub value: bool,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
    pub location: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct NumberLiteral {
    pub value: f64,
    pub location: Option<Location>,
}

impl PartialEq for NumberLiteral {
    fn eq(&self, other: &Self) -> bool {
        // This is just to make unit testing easier.
        self.value == other.value && self.location == other.location
    }
}

impl Eq for NumberLiteral {}

/// A load of a named variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadLocation {
    pub name: Token,
    pub location: Option<Location>,
}

/// A load of a member of an object, looked up at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadDynamic {
    pub object: Expression,
    pub name: Expression,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conditional {
    pub condition: Expression,
    pub consequent: Expression,
    pub alternate: Expression,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invoke {
    pub function: Expression,
    pub arguments: Vec<Expression>,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryOperation {
    pub left: Expression,
    pub operator: BinaryOperator,
    pub right: Expression,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Binary(Box<BinaryOperation>),
    Bool(Box<BoolLiteral>),
    Conditional(Box<Conditional>),
    Invoke(Box<Invoke>),
    LoadDynamic(Box<LoadDynamic>),
    LoadLocation(Box<LoadLocation>),
    Null(Box<NullLiteral>),
    Number(Box<NumberLiteral>),
    String(Box<StringLiteral>),
}

impl Expression {
    pub fn string(value: String, location: Option<Location>) -> Expression {
        Expression::String(Box::new(StringLiteral { value, location }))
    }

    pub fn load(name: Token, location: Option<Location>) -> Expression {
        Expression::LoadLocation(Box::new(LoadLocation { name, location }))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub location: Option<Location>,
}

impl Block {
    /// Returns a block spanning from its first to its last statement.
    ///
    /// If either of these statements has no location, neither does the block.
    pub fn new(statements: Vec<Statement>) -> Block {
        let location = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => {
                match (first.location(), last.location()) {
                    (Some(start), Some(end)) => {
                        Some(Location::start_end(start, end))
                    }
                    _ => None,
                }
            }
            _ => None,
        };

        Block { statements, location }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyStatement {
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakStatement {
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContinueStatement {
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfStatement {
    pub condition: Expression,
    pub consequent: Block,
    pub alternate: Option<Statement>,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Block(Box<Block>),
    Break(Box<BreakStatement>),
    Continue(Box<ContinueStatement>),
    Empty(Box<EmptyStatement>),
    Expression(Box<ExpressionStatement>),
    If(Box<IfStatement>),
    Return(Box<ReturnStatement>),
}

impl Statement {
    pub fn expression(
        expression: Expression,
        location: Option<Location>,
    ) -> Statement {
        Statement::Expression(Box::new(ExpressionStatement {
            expression,
            location,
        }))
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            Statement::Block(ref node) => node.location.as_ref(),
            Statement::Break(ref node) => node.location.as_ref(),
            Statement::Continue(ref node) => node.location.as_ref(),
            Statement::Empty(ref node) => node.location.as_ref(),
            Statement::Expression(ref node) => node.location.as_ref(),
            Statement::If(ref node) => node.location.as_ref(),
            Statement::Return(ref node) => node.location.as_ref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalVariable {
    pub name: Identifier,
    pub type_token: TypeToken,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleProperty {
    pub name: Identifier,
    pub type_token: TypeToken,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleMethod {
    pub name: Identifier,
    pub parameters: Vec<LocalVariable>,
    /// The return type, or `None` for methods that don't return a value.
    pub return_type: Option<TypeToken>,
    pub body: Block,
    pub location: Option<Location>,
}

/// A member defined by a module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Definition {
    Property(Box<ModuleProperty>),
    Method(Box<ModuleMethod>),
}

impl Definition {
    pub fn name(&self) -> &Identifier {
        match self {
            Definition::Property(ref node) => &node.name,
            Definition::Method(ref node) => &node.name,
        }
    }
}

/// A publicly visible name and the member it refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    pub name: Identifier,
    pub referent: Token,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    pub name: Identifier,
    pub imports: IndexSet<ModuleToken>,
    pub exports: IndexMap<String, Export>,
    pub members: IndexMap<String, Definition>,
}

impl Module {
    pub fn new(name: Identifier) -> Module {
        Module {
            name,
            imports: IndexSet::new(),
            exports: IndexMap::new(),
            members: IndexMap::new(),
        }
    }

    pub fn member(&self, name: &str) -> Option<&Definition> {
        self.members.get(name)
    }

    pub fn method(&self, name: &str) -> Option<&ModuleMethod> {
        match self.members.get(name) {
            Some(Definition::Method(ref node)) => Some(node),
            _ => None,
        }
    }

    pub fn property(&self, name: &str) -> Option<&ModuleProperty> {
        match self.members.get(name) {
            Some(Definition::Property(ref node)) => Some(node),
            _ => None,
        }
    }
}
