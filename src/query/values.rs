//! Literal values.
//!
//! One constructor per value kind. Object literals are escaped when encoded,
//! so a key such as `"let"` is sent as data rather than as a call.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    error::BuildError,
    expr::Expr,
    value::{Object, Ref, Value},
};

pub fn of_string(value: impl Into<String>) -> Expr {
    Expr::value(Value::String(value.into()))
}

pub fn of_long(value: i64) -> Expr {
    Expr::value(Value::Long(value))
}

/// Non-finite doubles have no JSON form and are sent as `null`.
pub fn of_double(value: f64) -> Expr {
    Expr::value(Value::Double(value))
}

pub fn of_bool(value: bool) -> Expr {
    Expr::value(Value::Boolean(value))
}

pub fn of_ts(value: DateTime<Utc>) -> Expr {
    Expr::value(Value::Ts(value))
}

pub fn of_date(value: NaiveDate) -> Expr {
    Expr::value(Value::Date(value))
}

pub fn null() -> Expr {
    Expr::value(Value::Null)
}

/// Creates a new Ref value.
///
/// ```
/// use fauna_query::{query::ref_, to_json};
///
/// assert_eq!(to_json(&ref_("classes/widgets/123")), r#"{"@ref":"classes/widgets/123"}"#);
/// ```
pub fn ref_(id: impl Into<String>) -> Expr {
    Expr::value(Value::Ref(Ref::new(id)))
}

/// Creates an object literal from key/value pairs.
///
/// Fails with [`BuildError::DuplicateKey`] if a key repeats.
///
/// ```
/// use fauna_query::{query::{obj, of_long}, to_json};
///
/// let literal = obj([("object", of_long(1))]).unwrap();
/// assert_eq!(to_json(&literal), r#"{"object":{"object":1}}"#);
/// ```
pub fn obj<K, E, I>(pairs: I) -> Result<Expr, BuildError>
where
    K: Into<String>,
    E: Into<Expr>,
    I: IntoIterator<Item = (K, E)>,
{
    let entries = Object::from_pairs(pairs.into_iter().map(|(k, v)| (k, v.into())))?;
    Ok(Expr::object(entries))
}

pub fn empty_obj() -> Expr {
    Expr::object(Object::new())
}

/// Creates an array literal.
pub fn arr<E, I>(items: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    Expr::array(items.into_iter().map(Into::into).collect())
}
