//! Miscellaneous functions: path lookups, comparison, string, arithmetic and
//! logic.

use crate::{error::BuildError, expr::Expr, path::Path, value::Value};

fn path_terms<P, I>(form: &'static str, path: I) -> Result<Expr, BuildError>
where
    P: Into<Path>,
    I: IntoIterator<Item = P>,
{
    let terms: Vec<Expr> = path
        .into_iter()
        .map(|term| Into::<Path>::into(term).into_expr())
        .collect();
    if terms.is_empty() {
        return Err(BuildError::EmptyPath(form));
    }
    Ok(Expr::array(terms))
}

/// Creates a new Select expression looking up `path` inside `from`.
///
/// Terms keep their order and may mix field names and indices.
///
/// ```
/// use fauna_query::query::{obj, select, of_string};
/// use fauna_query::{Path, to_json};
///
/// let doc = obj([("data", obj([("name", of_string("widget"))]).unwrap())]).unwrap();
/// let expr = select(["data", "name"], doc).unwrap();
/// assert_eq!(to_json(&expr), r#"{"from":{"data":{"name":"widget"}},"select":["data","name"]}"#);
///
/// let mixed = select([Path::field("tags"), Path::index(0)], of_string("x")).unwrap();
/// assert_eq!(to_json(&mixed), r#"{"from":"x","select":["tags",0]}"#);
/// ```
pub fn select<P, I>(path: I, from: impl Into<Expr>) -> Result<Expr, BuildError>
where
    P: Into<Path>,
    I: IntoIterator<Item = P>,
{
    let terms = path_terms("select", path)?;
    Ok(Expr::call([("select", terms), ("from", from.into())]))
}

/// Creates a new Contains expression testing whether `path` exists in `in_`.
pub fn contains<P, I>(path: I, in_: impl Into<Expr>) -> Result<Expr, BuildError>
where
    P: Into<Path>,
    I: IntoIterator<Item = P>,
{
    let terms = path_terms("contains", path)?;
    Ok(Expr::call([("contains", terms), ("in", in_.into())]))
}

pub fn equals<E, I>(terms: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    super::variadic("equals", terms)
}

pub fn concat<E, I>(terms: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    super::variadic("concat", terms)
}

/// Concat with `separator` placed between terms.
pub fn concat_with<E, I>(terms: I, separator: impl Into<String>) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    Expr::call([
        ("concat", Expr::array(terms.into_iter().map(Into::into).collect())),
        ("separator", Expr::value(Value::String(separator.into()))),
    ])
}

pub fn add<E, I>(terms: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    super::variadic("add", terms)
}

pub fn subtract<E, I>(terms: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    super::variadic("subtract", terms)
}

pub fn multiply<E, I>(terms: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    super::variadic("multiply", terms)
}

pub fn divide<E, I>(terms: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    super::variadic("divide", terms)
}

pub fn modulo<E, I>(terms: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    super::variadic("modulo", terms)
}

pub fn and<E, I>(terms: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    super::variadic("and", terms)
}

pub fn or<E, I>(terms: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    super::variadic("or", terms)
}

pub fn not(term: impl Into<Expr>) -> Expr {
    Expr::call([("not", term.into())])
}
