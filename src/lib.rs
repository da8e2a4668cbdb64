//! Query expression builders and wire-format codec for the FaunaDB query
//! protocol.
//!
//! Client code builds a query from [`Value`]s and the constructors in
//! [`query`], renders it with [`output::to_json`], and decodes the server's
//! response with [`codec::decode`].
//!
//! ```
//! use fauna_query::output::to_json;
//! use fauna_query::query::{let_, of_long, var};
//!
//! let expr = let_([("x", of_long(1))]).unwrap().in_(var("x"));
//! assert_eq!(to_json(&expr), r#"{"in":{"var":"x"},"let":{"x":1}}"#);
//! ```

pub mod cli;
pub mod codec;
pub mod error;
pub mod escape;
pub mod expr;
pub mod output;
pub mod path;
pub mod query;
pub mod value;

pub use codec::{decode, encode, encode_expr, from_str};
pub use error::{BuildError, DecodeError};
pub use expr::Expr;
pub use output::{to_json, to_json_pretty};
pub use path::Path;
pub use value::{Object, Ref, Value};
