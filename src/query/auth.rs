//! Authentication call forms. These only build the expressions; sessions and
//! credentials are handled by the transport.

use crate::{expr::Expr, value::Value};

pub fn login(reference: impl Into<Expr>, params: impl Into<Expr>) -> Expr {
    Expr::call([("login", reference.into()), ("params", params.into())])
}

pub fn logout(invalidate_all: bool) -> Expr {
    Expr::call([("logout", Expr::value(Value::Boolean(invalidate_all)))])
}

pub fn identify(reference: impl Into<Expr>, password: impl Into<Expr>) -> Expr {
    Expr::call([("identify", reference.into()), ("password", password.into())])
}
