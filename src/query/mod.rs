//! # Query language constructors
//!
//! Every function here builds an [`Expr`](crate::Expr). Import the whole module
//! to write queries the way they read on the wire:
//!
//! ```
//! use fauna_query::query::*;
//! use fauna_query::to_json;
//!
//! let expr = if_(exists(ref_("classes/widgets/123")))
//!     .then(get(ref_("classes/widgets/123")))
//!     .elze(null());
//!
//! assert_eq!(
//!     to_json(&expr),
//!     r#"{"else":null,"if":{"exists":{"@ref":"classes/widgets/123"}},"then":{"get":{"@ref":"classes/widgets/123"}}}"#
//! );
//! ```
//!
//! ## Organization
//!
//! - **[values]** - Literal values, object and array literals
//! - **[basic]** - `let`, `var`, `if`, `do`, `lambda`, `quote`
//! - **[collections]** - `map`, `foreach`, `filter`, `take`, `drop`, `prepend`, `append`
//! - **[read]** - `get`, `exists`, `count`, `paginate`
//! - **[write]** - `create`, `update`, `replace`, `delete`, `insert`, `remove`
//! - **[sets]** - `match`, `union`, `intersection`, `difference`, `join`
//! - **[misc]** - `select`, `contains`, `equals`, `concat`, arithmetic and logic
//! - **[auth]** - `login`, `logout`, `identify`
//! - **[time]** - `time`, `epoch`, `date`
//!
//! ## Naming
//!
//! Names that clash with Rust keywords carry a trailing underscore (`let_`,
//! `if_`, `do_`, `match_`, `ref_`, and the `in_` completion of `let_`).
//! Literal constructors are prefixed with `of_` so they never collide with the
//! `date` and `time` call forms.

pub mod auth;
pub mod basic;
pub mod collections;
pub mod misc;
pub mod read;
pub mod sets;
pub mod time;
pub mod values;
pub mod write;

pub use auth::*;
pub use basic::*;
pub use collections::*;
pub use misc::*;
pub use read::*;
pub use sets::*;
pub use time::*;
pub use values::*;
pub use write::*;

use crate::expr::Expr;

/// `{"name": [terms...]}`
fn variadic<E, I>(name: &'static str, terms: I) -> Expr
where
    E: Into<Expr>,
    I: IntoIterator<Item = E>,
{
    Expr::call([(name, Expr::array(terms.into_iter().map(Into::into).collect()))])
}
