//! Time and date functions.

use crate::{expr::Expr, value::Value};

/// Unit of the numeric argument to [`epoch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
}

impl TimeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Microsecond => "microsecond",
            TimeUnit::Nanosecond => "nanosecond",
        }
    }
}

/// Creates a new Time expression parsing an ISO-8601 string, or `"now"`.
pub fn time(time: impl Into<Expr>) -> Expr {
    Expr::call([("time", time.into())])
}

/// Creates a new Epoch expression, a timestamp `num` units after the Unix epoch.
pub fn epoch(num: impl Into<Expr>, unit: TimeUnit) -> Expr {
    Expr::call([
        ("epoch", num.into()),
        ("unit", Expr::value(Value::String(unit.as_str().to_string()))),
    ])
}

/// Creates a new Date expression parsing a `YYYY-MM-DD` string.
pub fn date(date: impl Into<Expr>) -> Expr {
    Expr::call([("date", date.into())])
}
