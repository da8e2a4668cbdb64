//! Reserved keywords and the object escaping rule.
//!
//! On the wire a function call and a plain data object are both JSON objects.
//! The server treats an object as a call when one of its keys names a function,
//! so any data object that carries such a key is wrapped as
//! `{"object": {...}}` before it is sent. The decoder tags (`@ref`, `@ts`,
//! `@date`) are reserved too, otherwise a data object holding one of them would
//! come back as a ref, timestamp or date.
//!
//! ```
//! use fauna_query::escape::{is_reserved, needs_escape};
//! use fauna_query::{Object, Value};
//!
//! assert!(is_reserved("let"));
//! assert!(!is_reserved("name"));
//!
//! let data = Object::from_pairs([("if", Value::Long(1))]).unwrap();
//! assert!(needs_escape(&data));
//! ```

use crate::value::Object;

/// Key of the envelope that marks its payload as literal data.
pub const OBJECT_ENVELOPE: &str = "object";

/// Grouping of reserved keywords, used by `fq keywords`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Tags,
    Basic,
    Collections,
    Read,
    Write,
    Sets,
    Misc,
    Auth,
    Time,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Tags,
        Category::Basic,
        Category::Collections,
        Category::Read,
        Category::Write,
        Category::Sets,
        Category::Misc,
        Category::Auth,
        Category::Time,
    ];

    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "tags" | "tag" | "values" => Some(Self::Tags),
            "basic" | "basic_forms" | "forms" => Some(Self::Basic),
            "collections" | "collection" => Some(Self::Collections),
            "read" | "reads" => Some(Self::Read),
            "write" | "writes" => Some(Self::Write),
            "sets" | "set" => Some(Self::Sets),
            "misc" | "miscellaneous" => Some(Self::Misc),
            "auth" | "authentication" => Some(Self::Auth),
            "time" | "date" | "time_and_date" => Some(Self::Time),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Tags => "tags",
            Category::Basic => "basic",
            Category::Collections => "collections",
            Category::Read => "read",
            Category::Write => "write",
            Category::Sets => "sets",
            Category::Misc => "misc",
            Category::Auth => "auth",
            Category::Time => "time",
        }
    }
}

// Sorted by keyword; lookups binary-search this table.
static RESERVED: &[(&str, Category)] = &[
    ("@date", Category::Tags),
    ("@ref", Category::Tags),
    ("@ts", Category::Tags),
    ("add", Category::Misc),
    ("and", Category::Misc),
    ("append", Category::Collections),
    ("concat", Category::Misc),
    ("contains", Category::Misc),
    ("count", Category::Read),
    ("create", Category::Write),
    ("date", Category::Time),
    ("delete", Category::Write),
    ("difference", Category::Sets),
    ("divide", Category::Misc),
    ("do", Category::Basic),
    ("drop", Category::Collections),
    ("epoch", Category::Time),
    ("equals", Category::Misc),
    ("exists", Category::Read),
    ("filter", Category::Collections),
    ("foreach", Category::Collections),
    ("get", Category::Read),
    ("identify", Category::Auth),
    ("if", Category::Basic),
    ("insert", Category::Write),
    ("intersection", Category::Sets),
    ("join", Category::Sets),
    ("lambda", Category::Basic),
    ("let", Category::Basic),
    ("login", Category::Auth),
    ("logout", Category::Auth),
    ("map", Category::Collections),
    ("match", Category::Sets),
    ("modulo", Category::Misc),
    ("multiply", Category::Misc),
    ("not", Category::Misc),
    ("object", Category::Basic),
    ("or", Category::Misc),
    ("paginate", Category::Read),
    ("prepend", Category::Collections),
    ("quote", Category::Basic),
    ("remove", Category::Write),
    ("replace", Category::Write),
    ("select", Category::Misc),
    ("subtract", Category::Misc),
    ("take", Category::Collections),
    ("time", Category::Time),
    ("union", Category::Sets),
    ("update", Category::Write),
    ("var", Category::Basic),
];

/// Returns true if `key` names a function form or a decoder tag.
pub fn is_reserved(key: &str) -> bool {
    category_of(key).is_some()
}

/// Looks up the catalog category of a reserved keyword.
pub fn category_of(key: &str) -> Option<Category> {
    RESERVED
        .binary_search_by(|(name, _)| (*name).cmp(key))
        .ok()
        .map(|idx| RESERVED[idx].1)
}

/// All reserved keywords in sorted order.
pub fn reserved_keywords() -> impl Iterator<Item = (&'static str, Category)> {
    RESERVED.iter().copied()
}

/// Returns true if a data object must be wrapped in the `object` envelope.
pub fn needs_escape<T>(obj: &Object<T>) -> bool {
    obj.keys().any(is_reserved)
}
