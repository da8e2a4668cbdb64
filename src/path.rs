use crate::{expr::Expr, value::Value};

/// A single navigation step used by `select` and `contains`.
///
/// On the wire a field is a JSON string and an index is a JSON number, so a
/// path such as `data, tags, 0` becomes `["data", "tags", 0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    /// Object field access by name
    ///
    /// # Examples
    /// - `["name"]` → `Field("name")`
    /// - `["user", "email"]` → `[Field("user"), Field("email")]`
    Field(String),

    /// Array element access by index
    ///
    /// # Examples
    /// - `["items", 0]` → `[Field("items"), Index(0)]`
    Index(i64),
}

impl Path {
    pub fn field(name: impl Into<String>) -> Self {
        Path::Field(name.into())
    }

    pub fn index(idx: i64) -> Self {
        Path::Index(idx)
    }

    pub(crate) fn into_expr(self) -> Expr {
        match self {
            Path::Field(name) => Expr::value(Value::String(name)),
            Path::Index(idx) => Expr::value(Value::Long(idx)),
        }
    }
}

impl From<&str> for Path {
    fn from(name: &str) -> Self {
        Path::Field(name.to_string())
    }
}

impl From<String> for Path {
    fn from(name: String) -> Self {
        Path::Field(name)
    }
}

impl From<i64> for Path {
    fn from(idx: i64) -> Self {
        Path::Index(idx)
    }
}

impl From<i32> for Path {
    fn from(idx: i32) -> Self {
        Path::Index(i64::from(idx))
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Path::Field(name) => write!(f, "{:?}", name),
            Path::Index(idx) => write!(f, "{}", idx),
        }
    }
}
