//! Basic forms.
//!
//! `let_` and `if_` are staged builders: each stage is its own type with a
//! single way forward, and only the last stage yields an [`Expr`]. A half-built
//! form cannot be rendered:
//!
//! ```compile_fail
//! use fauna_query::query::{let_, of_long};
//! use fauna_query::to_json;
//!
//! let pending = let_([("x", of_long(1))]).unwrap();
//! to_json(&pending);
//! ```
//!
//! ```compile_fail
//! use fauna_query::query::{if_, of_bool, of_string};
//! use fauna_query::Expr;
//!
//! let pending: Expr = if_(of_bool(true)).then(of_string("yes")).into();
//! ```

use crate::{
    error::BuildError,
    expr::Expr,
    value::{Object, Value},
};

/// Bindings of a `let` form still waiting for its body.
#[derive(Debug, Clone)]
#[must_use = "a let binding is not an expression until completed with `in_`"]
pub struct LetBinding {
    bindings: Object<Expr>,
}

impl LetBinding {
    /// Completes the form as `{"let": {bindings}, "in": body}`.
    pub fn in_(self, body: impl Into<Expr>) -> Expr {
        Expr::call([("let", Expr::object(self.bindings)), ("in", body.into())])
    }
}

/// Creates a new Let expression builder.
///
/// Binding names must be non-empty and unique, and there must be at least one.
///
/// ```
/// use fauna_query::query::{let_, of_long, var};
/// use fauna_query::to_json;
///
/// let expr = let_([("x", of_long(1))]).unwrap().in_(var("x"));
/// assert_eq!(to_json(&expr), r#"{"in":{"var":"x"},"let":{"x":1}}"#);
/// ```
pub fn let_<K, E, I>(bindings: I) -> Result<LetBinding, BuildError>
where
    K: Into<String>,
    E: Into<Expr>,
    I: IntoIterator<Item = (K, E)>,
{
    let mut vars = Object::new();
    for (name, value) in bindings {
        let name = name.into();
        if name.is_empty() {
            return Err(BuildError::EmptyVariableName);
        }
        if vars.contains_key(&name) {
            return Err(BuildError::DuplicateBinding(name));
        }
        vars.insert(name, value.into());
    }

    if vars.is_empty() {
        return Err(BuildError::EmptyBindings);
    }
    Ok(LetBinding { bindings: vars })
}

/// Creates a new Var expression.
pub fn var(name: impl Into<String>) -> Expr {
    Expr::call([("var", Expr::value(Value::String(name.into())))])
}

/// Condition of an `if` form, waiting for its `then` branch.
#[derive(Debug, Clone)]
#[must_use = "an if form needs both `then` and `elze`"]
pub struct IfExpr {
    condition: Expr,
}

/// Condition and `then` branch of an `if` form, waiting for its `else` branch.
#[derive(Debug, Clone)]
#[must_use = "an if form needs an `elze` branch"]
pub struct IfThen {
    condition: Expr,
    then: Expr,
}

impl IfExpr {
    pub fn then(self, then: impl Into<Expr>) -> IfThen {
        IfThen {
            condition: self.condition,
            then: then.into(),
        }
    }
}

impl IfThen {
    /// Completes the form as `{"if": cond, "then": a, "else": b}`.
    pub fn elze(self, elze: impl Into<Expr>) -> Expr {
        Expr::call([
            ("if", self.condition),
            ("then", self.then),
            ("else", elze.into()),
        ])
    }
}

/// Creates a new If expression builder.
pub fn if_(condition: impl Into<Expr>) -> IfExpr {
    IfExpr {
        condition: condition.into(),
    }
}

/// Creates a new Do expression evaluating `exprs` in order.
pub fn do_<E, I>(exprs: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    super::variadic("do", exprs)
}

/// Creates a new Lambda expression binding `argument` inside `expr`.
pub fn lambda(argument: impl Into<String>, expr: impl Into<Expr>) -> Expr {
    Expr::call([
        ("lambda", Expr::value(Value::String(argument.into()))),
        ("expr", expr.into()),
    ])
}

/// Creates a new Quote expression.
pub fn quote(expr: impl Into<Expr>) -> Expr {
    Expr::call([("quote", expr.into())])
}
