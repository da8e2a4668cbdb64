use chrono::{DateTime, NaiveDate, Utc};

use crate::value::{Object, Ref, Value};

/// A finished, serializable query expression.
///
/// Builders in [`crate::query`] produce and consume `Expr`. Internally an
/// expression is one of:
///
/// - a plain [`Value`], encoded as data
/// - an array of expressions
/// - an object literal of expressions, escaped as data when encoded
/// - a function call form, emitted exactly as built and never escaped
///
/// Only the crate's own builders can create call forms, so a user-supplied
/// object can never pass for one.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr(Repr);

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Repr {
    Value(Value),
    Array(Vec<Expr>),
    Object(Object<Expr>),
    Call(Object<Expr>),
}

impl Expr {
    /// Wraps a plain value.
    pub fn value(value: Value) -> Self {
        Expr(Repr::Value(value))
    }

    /// Array literal whose elements may themselves be call forms.
    pub fn array(items: Vec<Expr>) -> Self {
        Expr(Repr::Array(items))
    }

    /// Object literal whose entries may themselves be call forms.
    pub fn object(entries: Object<Expr>) -> Self {
        Expr(Repr::Object(entries))
    }

    /// Call form. Keys are function and parameter names fixed by the builder.
    pub(crate) fn call<I>(form: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Expr)>,
    {
        let mut entries = Object::new();
        for (name, arg) in form {
            entries.insert(name, arg);
        }
        Expr(Repr::Call(entries))
    }

    pub(crate) fn repr(&self) -> &Repr {
        &self.0
    }

    /// Returns the wrapped value if this expression is plain data.
    pub fn as_value(&self) -> Option<&Value> {
        match &self.0 {
            Repr::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns true if this expression is a function call form.
    pub fn is_call(&self) -> bool {
        matches!(self.0, Repr::Call(_))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::value(value)
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        Expr::value(Value::String(s.to_string()))
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        Expr::value(Value::String(s))
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::value(Value::Long(n))
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Expr::value(Value::Long(i64::from(n)))
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::value(Value::Double(n))
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::value(Value::Boolean(b))
    }
}

impl From<Ref> for Expr {
    fn from(r: Ref) -> Self {
        Expr::value(Value::Ref(r))
    }
}

impl From<DateTime<Utc>> for Expr {
    fn from(ts: DateTime<Utc>) -> Self {
        Expr::value(Value::Ts(ts))
    }
}

impl From<NaiveDate> for Expr {
    fn from(date: NaiveDate) -> Self {
        Expr::value(Value::Date(date))
    }
}

impl From<Vec<Expr>> for Expr {
    fn from(items: Vec<Expr>) -> Self {
        Expr::array(items)
    }
}
