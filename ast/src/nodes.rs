//! The nodes of a parsed source module.
//!
//! The tree mirrors the shape produced by the parser: every statement and
//! expression is a struct carrying its own `SourceLocation`, wrapped in a boxed
//! variant of `Statement` or `Expression`.
use crate::source_location::SourceLocation;

pub trait Node {
    fn location(&self) -> &SourceLocation;
}

macro_rules! node {
    ($($name:ident),* $(,)?) => {
        $(
            impl Node for $name {
                fn location(&self) -> &SourceLocation {
                    &self.location
                }
            }
        )*
    };
}

/// The context a name, attribute or container is used in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Context {
    Load,
    Store,
    Delete,
}

impl Context {
    pub fn name(self) -> &'static str {
        match self {
            Context::Load => "load",
            Context::Store => "store",
            Context::Delete => "delete",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BooleanOperator {
    And,
    Or,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOperator {
    Add,
    BitAnd,
    BitOr,
    BitXor,
    Div,
    FloorDiv,
    LShift,
    MatMult,
    Mod,
    Mult,
    Pow,
    RShift,
    Sub,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOperator {
    Invert,
    Not,
    UAdd,
    USub,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ComparisonOperator {
    Eq,
    Gt,
    GtE,
    In,
    Is,
    IsNot,
    Lt,
    LtE,
    NotEq,
    NotIn,
}

impl ComparisonOperator {
    pub fn name(self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "Eq",
            ComparisonOperator::Gt => "Gt",
            ComparisonOperator::GtE => "GtE",
            ComparisonOperator::In => "In",
            ComparisonOperator::Is => "Is",
            ComparisonOperator::IsNot => "IsNot",
            ComparisonOperator::Lt => "Lt",
            ComparisonOperator::LtE => "LtE",
            ComparisonOperator::NotEq => "NotEq",
            ComparisonOperator::NotIn => "NotIn",
        }
    }
}

/// The value of a `None`, `True` or `False` literal.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Constant {
    None,
    True,
    False,
}

#[derive(Debug, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Arg {
    pub name: String,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Arguments {
    pub args: Vec<Arg>,
    pub vararg: Option<Arg>,
    pub kwonlyargs: Vec<Arg>,
    pub kwarg: Option<Arg>,
    pub defaults: Vec<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Keyword {
    /// The name of the argument, or `None` for `**value`.
    pub name: Option<String>,
    pub value: Expression,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Alias {
    pub name: String,
    pub asname: Option<String>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Comprehension {
    pub target: Expression,
    pub iter: Expression,
    pub conditions: Vec<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct ExceptHandler {
    pub kind: Option<Expression>,
    pub name: Option<String>,
    pub body: Vec<Statement>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct WithItem {
    pub context: Expression,
    pub variables: Option<Expression>,
    pub location: SourceLocation,
}

node!(Identifier, Arg, Arguments, Keyword, Alias, Comprehension);
node!(ExceptHandler, WithItem);

#[derive(Debug, PartialEq)]
pub struct FunctionDef {
    pub name: Identifier,
    pub arguments: Arguments,
    pub body: Vec<Statement>,
    pub decorators: Vec<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct ClassDef {
    pub name: Identifier,
    pub bases: Vec<Expression>,
    pub body: Vec<Statement>,
    pub decorators: Vec<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Return {
    pub value: Option<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Delete {
    pub targets: Vec<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Assign {
    pub targets: Vec<Expression>,
    pub value: Expression,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct AugAssign {
    pub target: Expression,
    pub operator: BinaryOperator,
    pub value: Expression,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Print {
    pub destination: Option<Expression>,
    pub values: Vec<Expression>,
    pub newline: bool,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct For {
    pub target: Expression,
    pub iter: Expression,
    pub body: Vec<Statement>,
    pub orelse: Vec<Statement>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct While {
    pub test: Expression,
    pub body: Vec<Statement>,
    pub orelse: Vec<Statement>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct If {
    pub test: Expression,
    pub body: Vec<Statement>,
    pub orelse: Vec<Statement>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct With {
    pub items: Vec<WithItem>,
    pub body: Vec<Statement>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Raise {
    pub exception: Option<Expression>,
    pub cause: Option<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Try {
    pub body: Vec<Statement>,
    pub handlers: Vec<ExceptHandler>,
    pub orelse: Vec<Statement>,
    pub finalbody: Vec<Statement>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Assert {
    pub test: Expression,
    pub message: Option<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Import {
    pub names: Vec<Alias>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct ImportFrom {
    pub module: Option<String>,
    pub names: Vec<Alias>,
    pub level: usize,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Exec {
    pub body: Expression,
    pub globals: Option<Expression>,
    pub locals: Option<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Global {
    pub names: Vec<Identifier>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Nonlocal {
    pub names: Vec<Identifier>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Expr {
    pub value: Expression,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Pass {
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Break {
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Continue {
    pub location: SourceLocation,
}

node!(FunctionDef, ClassDef, Return, Delete, Assign, AugAssign, Print, For);
node!(While, If, With, Raise, Try, Assert, Import, ImportFrom, Exec, Global);
node!(Nonlocal, Expr, Pass, Break, Continue);

#[derive(Debug, PartialEq)]
pub enum Statement {
    Assert(Box<Assert>),
    Assign(Box<Assign>),
    AugAssign(Box<AugAssign>),
    Break(Box<Break>),
    ClassDef(Box<ClassDef>),
    Continue(Box<Continue>),
    Delete(Box<Delete>),
    Exec(Box<Exec>),
    Expr(Box<Expr>),
    For(Box<For>),
    FunctionDef(Box<FunctionDef>),
    Global(Box<Global>),
    If(Box<If>),
    Import(Box<Import>),
    ImportFrom(Box<ImportFrom>),
    Nonlocal(Box<Nonlocal>),
    Pass(Box<Pass>),
    Print(Box<Print>),
    Raise(Box<Raise>),
    Return(Box<Return>),
    Try(Box<Try>),
    While(Box<While>),
    With(Box<With>),
}

impl Statement {
    /// Returns the name of the kind of statement, as used by the parser.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Assert(_) => "Assert",
            Statement::Assign(_) => "Assign",
            Statement::AugAssign(_) => "AugAssign",
            Statement::Break(_) => "Break",
            Statement::ClassDef(_) => "ClassDef",
            Statement::Continue(_) => "Continue",
            Statement::Delete(_) => "Delete",
            Statement::Exec(_) => "Exec",
            Statement::Expr(_) => "Expr",
            Statement::For(_) => "For",
            Statement::FunctionDef(_) => "FunctionDef",
            Statement::Global(_) => "Global",
            Statement::If(_) => "If",
            Statement::Import(_) => "Import",
            Statement::ImportFrom(_) => "ImportFrom",
            Statement::Nonlocal(_) => "Nonlocal",
            Statement::Pass(_) => "Pass",
            Statement::Print(_) => "Print",
            Statement::Raise(_) => "Raise",
            Statement::Return(_) => "Return",
            Statement::Try(_) => "Try",
            Statement::While(_) => "While",
            Statement::With(_) => "With",
        }
    }
}

impl Node for Statement {
    fn location(&self) -> &SourceLocation {
        match self {
            Statement::Assert(ref node) => node.location(),
            Statement::Assign(ref node) => node.location(),
            Statement::AugAssign(ref node) => node.location(),
            Statement::Break(ref node) => node.location(),
            Statement::ClassDef(ref node) => node.location(),
            Statement::Continue(ref node) => node.location(),
            Statement::Delete(ref node) => node.location(),
            Statement::Exec(ref node) => node.location(),
            Statement::Expr(ref node) => node.location(),
            Statement::For(ref node) => node.location(),
            Statement::FunctionDef(ref node) => node.location(),
            Statement::Global(ref node) => node.location(),
            Statement::If(ref node) => node.location(),
            Statement::Import(ref node) => node.location(),
            Statement::ImportFrom(ref node) => node.location(),
            Statement::Nonlocal(ref node) => node.location(),
            Statement::Pass(ref node) => node.location(),
            Statement::Print(ref node) => node.location(),
            Statement::Raise(ref node) => node.location(),
            Statement::Return(ref node) => node.location(),
            Statement::Try(ref node) => node.location(),
            Statement::While(ref node) => node.location(),
            Statement::With(ref node) => node.location(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct BoolOp {
    pub operator: BooleanOperator,
    pub values: Vec<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct BinOp {
    pub left: Expression,
    pub operator: BinaryOperator,
    pub right: Expression,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct UnaryOp {
    pub operator: UnaryOperator,
    pub operand: Expression,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Lambda {
    pub arguments: Arguments,
    pub body: Expression,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct IfExp {
    pub test: Expression,
    pub body: Expression,
    pub orelse: Expression,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Dict {
    pub keys: Vec<Expression>,
    pub values: Vec<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Set {
    pub elements: Vec<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct ListComp {
    pub element: Expression,
    pub generators: Vec<Comprehension>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct SetComp {
    pub element: Expression,
    pub generators: Vec<Comprehension>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct DictComp {
    pub key: Expression,
    pub value: Expression,
    pub generators: Vec<Comprehension>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct GeneratorExp {
    pub element: Expression,
    pub generators: Vec<Comprehension>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Yield {
    pub value: Option<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct YieldFrom {
    pub value: Expression,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Compare {
    pub left: Expression,
    pub operators: Vec<ComparisonOperator>,
    pub comparators: Vec<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Call {
    pub function: Expression,
    pub arguments: Vec<Expression>,
    pub keywords: Vec<Keyword>,
    pub starargs: Option<Expression>,
    pub kwargs: Option<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Repr {
    pub value: Expression,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Num {
    pub value: f64,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Str {
    pub value: String,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct NameConstant {
    pub value: Constant,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Ellipsis {
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Attribute {
    pub value: Expression,
    pub attribute: String,
    pub context: Context,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Subscript {
    pub value: Expression,
    pub slice: Expression,
    pub context: Context,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Starred {
    pub value: Expression,
    pub context: Context,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Name {
    pub id: String,
    pub context: Context,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct List {
    pub elements: Vec<Expression>,
    pub context: Context,
    pub location: SourceLocation,
}

#[derive(Debug, PartialEq)]
pub struct Tuple {
    pub elements: Vec<Expression>,
    pub context: Context,
    pub location: SourceLocation,
}

node!(BoolOp, BinOp, UnaryOp, Lambda, IfExp, Dict, Set, ListComp, SetComp);
node!(DictComp, GeneratorExp, Yield, YieldFrom, Compare, Call, Repr, Num);
node!(Str, NameConstant, Ellipsis, Attribute, Subscript, Starred, Name, List);
node!(Tuple);

#[derive(Debug, PartialEq)]
pub enum Expression {
    Attribute(Box<Attribute>),
    BinOp(Box<BinOp>),
    BoolOp(Box<BoolOp>),
    Call(Box<Call>),
    Compare(Box<Compare>),
    Dict(Box<Dict>),
    DictComp(Box<DictComp>),
    Ellipsis(Box<Ellipsis>),
    GeneratorExp(Box<GeneratorExp>),
    IfExp(Box<IfExp>),
    Lambda(Box<Lambda>),
    List(Box<List>),
    ListComp(Box<ListComp>),
    Name(Box<Name>),
    NameConstant(Box<NameConstant>),
    Num(Box<Num>),
    Repr(Box<Repr>),
    Set(Box<Set>),
    SetComp(Box<SetComp>),
    Starred(Box<Starred>),
    Str(Box<Str>),
    Subscript(Box<Subscript>),
    Tuple(Box<Tuple>),
    UnaryOp(Box<UnaryOp>),
    Yield(Box<Yield>),
    YieldFrom(Box<YieldFrom>),
}

impl Expression {
    /// Returns the name of the kind of expression, as used by the parser.
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Attribute(_) => "Attribute",
            Expression::BinOp(_) => "BinOp",
            Expression::BoolOp(_) => "BoolOp",
            Expression::Call(_) => "Call",
            Expression::Compare(_) => "Compare",
            Expression::Dict(_) => "Dict",
            Expression::DictComp(_) => "DictComp",
            Expression::Ellipsis(_) => "Ellipsis",
            Expression::GeneratorExp(_) => "GeneratorExp",
            Expression::IfExp(_) => "IfExp",
            Expression::Lambda(_) => "Lambda",
            Expression::List(_) => "List",
            Expression::ListComp(_) => "ListComp",
            Expression::Name(_) => "Name",
            Expression::NameConstant(_) => "NameConstant",
            Expression::Num(_) => "Num",
            Expression::Repr(_) => "Repr",
            Expression::Set(_) => "Set",
            Expression::SetComp(_) => "SetComp",
            Expression::Starred(_) => "Starred",
            Expression::Str(_) => "Str",
            Expression::Subscript(_) => "Subscript",
            Expression::Tuple(_) => "Tuple",
            Expression::UnaryOp(_) => "UnaryOp",
            Expression::Yield(_) => "Yield",
            Expression::YieldFrom(_) => "YieldFrom",
        }
    }
}

impl Node for Expression {
    fn location(&self) -> &SourceLocation {
        match self {
            Expression::Attribute(ref node) => node.location(),
            Expression::BinOp(ref node) => node.location(),
            Expression::BoolOp(ref node) => node.location(),
            Expression::Call(ref node) => node.location(),
            Expression::Compare(ref node) => node.location(),
            Expression::Dict(ref node) => node.location(),
            Expression::DictComp(ref node) => node.location(),
            Expression::Ellipsis(ref node) => node.location(),
            Expression::GeneratorExp(ref node) => node.location(),
            Expression::IfExp(ref node) => node.location(),
            Expression::Lambda(ref node) => node.location(),
            Expression::List(ref node) => node.location(),
            Expression::ListComp(ref node) => node.location(),
            Expression::Name(ref node) => node.location(),
            Expression::NameConstant(ref node) => node.location(),
            Expression::Num(ref node) => node.location(),
            Expression::Repr(ref node) => node.location(),
            Expression::Set(ref node) => node.location(),
            Expression::SetComp(ref node) => node.location(),
            Expression::Starred(ref node) => node.location(),
            Expression::Str(ref node) => node.location(),
            Expression::Subscript(ref node) => node.location(),
            Expression::Tuple(ref node) => node.location(),
            Expression::UnaryOp(ref node) => node.location(),
            Expression::Yield(ref node) => node.location(),
            Expression::YieldFrom(ref node) => node.location(),
        }
    }
}

/// A single parsed source file.
#[derive(Debug, PartialEq)]
pub struct Module {
    pub body: Vec<Statement>,
    pub location: SourceLocation,
}

node!(Module);
