//! Various test helper functions for building source trees.
use crate::lower::ModuleSpec;
use ast::nodes::{
    Alias, Arg, Arguments, Assign, Attribute, Call, Compare, ComparisonOperator,
    Constant, Context, Expr, Expression, FunctionDef, Identifier, If, Import,
    Module, Name, NameConstant, Num, Pass, Return, Statement, Str,
};
use ast::source_location::SourceLocation;
use location::{Location, Position};

pub(crate) const FILE: &str = "test.py";

/// Returns a source location on a single line, using zero-based columns.
pub(crate) fn cols(line: usize, start: usize, end: usize) -> SourceLocation {
    SourceLocation::line(line, start, end)
}

/// Returns the IR location `cols()` with the same arguments maps to.
pub(crate) fn ir_cols(line: u32, start: u32, end: u32) -> Option<Location> {
    Some(Location::new(
        FILE,
        Position::new(line, start + 1),
        Position::new(line, end + 1),
    ))
}

pub(crate) fn name(
    id: &str,
    context: Context,
    location: SourceLocation,
) -> Expression {
    Expression::Name(Box::new(Name { id: id.to_string(), context, location }))
}

pub(crate) fn load(id: &str, location: SourceLocation) -> Expression {
    name(id, Context::Load, location)
}

pub(crate) fn store(id: &str, location: SourceLocation) -> Expression {
    name(id, Context::Store, location)
}

pub(crate) fn attribute(
    value: Expression,
    attribute: &str,
    context: Context,
    location: SourceLocation,
) -> Expression {
    Expression::Attribute(Box::new(Attribute {
        value,
        attribute: attribute.to_string(),
        context,
        location,
    }))
}

pub(crate) fn num(value: f64, location: SourceLocation) -> Expression {
    Expression::Num(Box::new(Num { value, location }))
}

pub(crate) fn string(value: &str, location: SourceLocation) -> Expression {
    Expression::Str(Box::new(Str { value: value.to_string(), location }))
}

pub(crate) fn constant(
    value: Constant,
    location: SourceLocation,
) -> Expression {
    Expression::NameConstant(Box::new(NameConstant { value, location }))
}

pub(crate) fn call(
    function: Expression,
    arguments: Vec<Expression>,
    location: SourceLocation,
) -> Expression {
    Expression::Call(Box::new(Call {
        function,
        arguments,
        keywords: Vec::new(),
        starargs: None,
        kwargs: None,
        location,
    }))
}

pub(crate) fn compare(
    left: Expression,
    operators: Vec<ComparisonOperator>,
    comparators: Vec<Expression>,
    location: SourceLocation,
) -> Expression {
    Expression::Compare(Box::new(Compare {
        left,
        operators,
        comparators,
        location,
    }))
}

pub(crate) fn expr(value: Expression, location: SourceLocation) -> Statement {
    Statement::Expr(Box::new(Expr { value, location }))
}

pub(crate) fn assign(
    target: Expression,
    value: Expression,
    location: SourceLocation,
) -> Statement {
    Statement::Assign(Box::new(Assign {
        targets: vec![target],
        value,
        location,
    }))
}

pub(crate) fn pass(location: SourceLocation) -> Statement {
    Statement::Pass(Box::new(Pass { location }))
}

pub(crate) fn ret(
    value: Option<Expression>,
    location: SourceLocation,
) -> Statement {
    Statement::Return(Box::new(Return { value, location }))
}

pub(crate) fn if_statement(
    test: Expression,
    body: Vec<Statement>,
    orelse: Vec<Statement>,
    location: SourceLocation,
) -> Statement {
    Statement::If(Box::new(If { test, body, orelse, location }))
}

pub(crate) fn arguments(
    params: Vec<(&str, SourceLocation)>,
    location: SourceLocation,
) -> Arguments {
    Arguments {
        args: params
            .into_iter()
            .map(|(name, location)| Arg { name: name.to_string(), location })
            .collect(),
        vararg: None,
        kwonlyargs: Vec::new(),
        kwarg: None,
        defaults: Vec::new(),
        location,
    }
}

pub(crate) fn function_with(
    name: &str,
    arguments: Arguments,
    body: Vec<Statement>,
    location: SourceLocation,
) -> Statement {
    Statement::FunctionDef(Box::new(FunctionDef {
        name: Identifier {
            name: name.to_string(),
            location: location.clone(),
        },
        arguments,
        body,
        decorators: Vec::new(),
        location,
    }))
}

pub(crate) fn function(
    name: &str,
    params: Vec<(&str, SourceLocation)>,
    body: Vec<Statement>,
    location: SourceLocation,
) -> Statement {
    let args = arguments(params, location.clone());

    function_with(name, args, body, location)
}

pub(crate) fn import(
    names: Vec<(&str, Option<&str>)>,
    location: SourceLocation,
) -> Statement {
    Statement::Import(Box::new(Import {
        names: names
            .into_iter()
            .map(|(name, asname)| Alias {
                name: name.to_string(),
                asname: asname.map(|v| v.to_string()),
                location: location.clone(),
            })
            .collect(),
        location,
    }))
}

pub(crate) fn module(body: Vec<Statement>) -> Module {
    Module { body, location: cols(1, 0, 0) }
}

pub(crate) fn spec(name: &str, body: Vec<Statement>) -> ModuleSpec {
    ModuleSpec::new(name.to_string(), FILE.into(), module(body))
}
