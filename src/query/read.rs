//! Read functions.

use crate::{expr::Expr, value::Value};

/// Creates a new Get expression.
pub fn get(resource: impl Into<Expr>) -> Expr {
    Expr::call([("get", resource.into())])
}

/// Creates a new Exists expression.
pub fn exists(reference: impl Into<Expr>) -> Expr {
    Expr::call([("exists", reference.into())])
}

/// Creates a new Count expression.
pub fn count(set: impl Into<Expr>) -> Expr {
    Expr::call([("count", set.into())])
}

/// Page boundary for [`Paginate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Cursor {
    Before(Expr),
    After(Expr),
}

pub fn before(value: impl Into<Expr>) -> Cursor {
    Cursor::Before(value.into())
}

pub fn after(value: impl Into<Expr>) -> Cursor {
    Cursor::After(value.into())
}

/// A Paginate form.
///
/// Unlike `let_` and `if_`, every clause except the resource is optional, so
/// the builder is a complete expression as soon as it exists. Clauses left
/// unset are omitted from the wire form.
///
/// ```
/// use fauna_query::query::{after, paginate, ref_};
/// use fauna_query::{Expr, to_json};
///
/// let page: Expr = paginate(ref_("indexes/all_widgets"))
///     .size(10)
///     .cursor(after(ref_("classes/widgets/9")))
///     .into();
/// assert_eq!(
///     to_json(&page),
///     r#"{"after":{"@ref":"classes/widgets/9"},"paginate":{"@ref":"indexes/all_widgets"},"size":10}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Paginate {
    resource: Expr,
    ts: Option<Expr>,
    cursor: Option<Cursor>,
    size: Option<i64>,
    events: bool,
    sources: bool,
}

impl Paginate {
    /// Reads the set as of the given timestamp.
    pub fn ts(mut self, ts: impl Into<Expr>) -> Self {
        self.ts = Some(ts.into());
        self
    }

    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// Returns set events instead of set members.
    pub fn events(mut self, events: bool) -> Self {
        self.events = events;
        self
    }

    /// Includes the source set of each member.
    pub fn sources(mut self, sources: bool) -> Self {
        self.sources = sources;
        self
    }
}

impl From<Paginate> for Expr {
    fn from(page: Paginate) -> Self {
        let mut form = vec![("paginate", page.resource)];
        if let Some(ts) = page.ts {
            form.push(("ts", ts));
        }
        match page.cursor {
            Some(Cursor::Before(at)) => form.push(("before", at)),
            Some(Cursor::After(at)) => form.push(("after", at)),
            None => {}
        }
        if let Some(size) = page.size {
            form.push(("size", Expr::value(Value::Long(size))));
        }
        if page.events {
            form.push(("events", Expr::value(Value::Boolean(true))));
        }
        if page.sources {
            form.push(("sources", Expr::value(Value::Boolean(true))));
        }
        Expr::call(form)
    }
}

/// Creates a new Paginate expression builder.
pub fn paginate(resource: impl Into<Expr>) -> Paginate {
    Paginate {
        resource: resource.into(),
        ts: None,
        cursor: None,
        size: None,
        events: false,
        sources: false,
    }
}
