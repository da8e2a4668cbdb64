//! Request body rendering for query expressions.
//!
//! Both entry points render the canonical wire JSON produced by
//! [`encode_expr`](crate::codec::encode_expr). Object keys come out sorted, so
//! output is deterministic.
//!
//! # Examples
//!
//! ```
//! use fauna_query::output::{to_json, to_json_pretty};
//! use fauna_query::query::{if_, of_bool, of_string};
//!
//! let expr = if_(of_bool(true)).then(of_string("yes")).elze(of_string("no"));
//!
//! // Compact output
//! assert_eq!(to_json(&expr), r#"{"else":"no","if":true,"then":"yes"}"#);
//!
//! // Pretty output
//! assert!(to_json_pretty(&expr).contains("\n  \"if\": true"));
//! ```

use crate::{codec::encode_expr, expr::Expr};

/// Converts an expression to a compact JSON string, ready to send as a
/// request body.
pub fn to_json(expr: &Expr) -> String {
    encode_expr(expr).to_string()
}

/// Converts an expression to JSON with 2-space indentation, for logging and
/// debugging.
pub fn to_json_pretty(expr: &Expr) -> String {
    format!("{:#}", encode_expr(expr))
}
