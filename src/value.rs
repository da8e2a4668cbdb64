use chrono::{DateTime, NaiveDate, Utc};

use crate::error::BuildError;

/// A datum that can appear in a query or in a server response.
///
/// The variant set is closed: the codec matches on every variant and there is
/// no catch-all. Values are immutable once built.
///
/// # Examples
///
/// ```
/// use fauna_query::{Object, Ref, Value};
///
/// // Scalar values
/// let null = Value::Null;
/// let boolean = Value::Boolean(true);
/// let long = Value::Long(42);
/// let double = Value::Double(3.14);
/// let string = Value::String("hello".to_string());
/// let reference = Value::Ref(Ref::new("classes/widgets/123"));
///
/// // Collections
/// let array = Value::Array(vec![Value::Long(1), Value::Long(2)]);
/// let object = Value::Object(
///     Object::from_pairs([("key", Value::String("value".to_string()))]).unwrap(),
/// );
/// assert_eq!(object.as_object().unwrap().get("key"), Some(&Value::String("value".into())));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 string
    String(String),

    /// 64-bit signed integer
    Long(i64),

    /// 64-bit float
    Double(f64),

    /// Boolean (true/false)
    Boolean(bool),

    /// JSON null
    Null,

    /// Point in time, UTC with nanosecond precision (`{"@ts": ...}` on the wire)
    Ts(DateTime<Utc>),

    /// Calendar date without a time component (`{"@date": ...}` on the wire)
    Date(NaiveDate),

    /// Resource identifier (`{"@ref": ...}` on the wire)
    Ref(Ref),

    /// Object with unique string keys
    Object(Object),

    /// Ordered sequence of values
    Array(Vec<Value>),
}

impl Value {
    /// Returns a human-readable type name for the value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Long(_) => "long",
            Value::Double(_) => "double",
            Value::Boolean(_) => "boolean",
            Value::Null => "null",
            Value::Ts(_) => "timestamp",
            Value::Date(_) => "date",
            Value::Ref(_) => "ref",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as double, widening longs
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Long(n) => Some(*n as f64),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_ts(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Ts(ts) => Some(ts),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&NaiveDate> {
        match self {
            Value::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&Ref> {
        match self {
            Value::Ref(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }
}

/// An opaque resource identifier such as `classes/widgets/123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ref(String);

impl Ref {
    pub fn new(id: impl Into<String>) -> Self {
        Ref(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ref {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// String-keyed mapping with unique keys.
///
/// Entries keep their insertion order so the wire output reads the way it was
/// written, but equality ignores order. The same container holds plain values
/// (`Object<Value>`) and expression entries (`Object<Expr>`).
///
/// [`Object::from_pairs`] is the only public way to build one from pairs, so
/// a repeated key is always reported:
///
/// ```compile_fail
/// use fauna_query::{Object, Value};
///
/// let obj: Object = vec![("k", Value::Long(1)), ("k", Value::Long(2))]
///     .into_iter()
///     .collect();
/// ```
///
/// ```compile_fail
/// use fauna_query::{Object, Value};
///
/// let mut obj = Object::new();
/// obj.insert("k", Value::Long(1));
/// ```
#[derive(Debug, Clone)]
pub struct Object<T = Value> {
    entries: Vec<(String, T)>,
}

impl<T> Object<T> {
    pub fn new() -> Self {
        Object {
            entries: Vec::new(),
        }
    }

    /// Builds an object from key/value pairs, rejecting duplicate keys.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self, BuildError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut obj = Object::new();
        for (key, value) in pairs {
            let key = key.into();
            if obj.contains_key(&key) {
                return Err(BuildError::DuplicateKey(key));
            }
            obj.entries.push((key, value));
        }
        Ok(obj)
    }

    /// Inserts an entry, replacing and returning any previous value for `key`.
    /// Callers check for duplicates first where that matters.
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Object<T> {
    fn default() -> Self {
        Object::new()
    }
}

impl<T: PartialEq> PartialEq for Object<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|ov| ov == v))
    }
}

impl<T> IntoIterator for Object<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
