//! Write functions.

use crate::{expr::Expr, value::Value};

/// Event action recorded by `insert` and `remove`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Delete,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Delete => "delete",
        }
    }
}

/// Creates a new Create expression with no parameters.
pub fn create(reference: impl Into<Expr>) -> Expr {
    Expr::call([("create", reference.into())])
}

/// Creates a new Create expression with instance parameters.
pub fn create_with(reference: impl Into<Expr>, params: impl Into<Expr>) -> Expr {
    Expr::call([("create", reference.into()), ("params", params.into())])
}

pub fn update(reference: impl Into<Expr>, params: impl Into<Expr>) -> Expr {
    Expr::call([("update", reference.into()), ("params", params.into())])
}

pub fn replace(reference: impl Into<Expr>, params: impl Into<Expr>) -> Expr {
    Expr::call([("replace", reference.into()), ("params", params.into())])
}

pub fn delete(reference: impl Into<Expr>) -> Expr {
    Expr::call([("delete", reference.into())])
}

/// Creates a new Insert expression adding an event to an instance's history.
pub fn insert(
    reference: impl Into<Expr>,
    ts: i64,
    action: Action,
    params: impl Into<Expr>,
) -> Expr {
    Expr::call([
        ("insert", reference.into()),
        ("ts", Expr::value(Value::Long(ts))),
        ("action", Expr::value(Value::String(action.as_str().to_string()))),
        ("params", params.into()),
    ])
}

/// Creates a new Remove expression deleting an event from an instance's history.
pub fn remove(reference: impl Into<Expr>, ts: i64, action: Action) -> Expr {
    Expr::call([
        ("remove", reference.into()),
        ("ts", Expr::value(Value::Long(ts))),
        ("action", Expr::value(Value::String(action.as_str().to_string()))),
    ])
}
