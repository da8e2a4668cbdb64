//! Collection functions. Each takes its operand plus the collection it applies
//! to, emitted as `{"<fn>": operand, "collection": collection}`.

use crate::expr::Expr;

fn over(name: &'static str, operand: Expr, collection: Expr) -> Expr {
    Expr::call([(name, operand), ("collection", collection)])
}

pub fn map(lambda: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    over("map", lambda.into(), collection.into())
}

pub fn foreach(lambda: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    over("foreach", lambda.into(), collection.into())
}

pub fn filter(lambda: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    over("filter", lambda.into(), collection.into())
}

pub fn take(num: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    over("take", num.into(), collection.into())
}

pub fn drop(num: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    over("drop", num.into(), collection.into())
}

pub fn prepend(elems: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    over("prepend", elems.into(), collection.into())
}

pub fn append(elems: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    over("append", elems.into(), collection.into())
}
