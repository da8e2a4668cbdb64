//! Set functions.

use crate::expr::Expr;

/// Creates a new Match set of `index` entries equal to `term`.
pub fn match_(term: impl Into<Expr>, index: impl Into<Expr>) -> Expr {
    Expr::call([("match", term.into()), ("index", index.into())])
}

pub fn union<E, I>(sets: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    super::variadic("union", sets)
}

pub fn intersection<E, I>(sets: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    super::variadic("intersection", sets)
}

pub fn difference<E, I>(sets: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    super::variadic("difference", sets)
}

/// Creates a new Join of `source` with the `target` index or lambda.
pub fn join(source: impl Into<Expr>, target: impl Into<Expr>) -> Expr {
    Expr::call([("join", source.into()), ("with", target.into())])
}
