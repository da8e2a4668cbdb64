//! Conversion between the value model and canonical wire JSON.
//!
//! | Value            | Wire form                      |
//! |------------------|--------------------------------|
//! | string/long/...  | JSON primitive                 |
//! | `Null`           | `null`                         |
//! | `Ts`             | `{"@ts": "<RFC 3339, UTC>"}`   |
//! | `Date`           | `{"@date": "YYYY-MM-DD"}`      |
//! | `Ref`            | `{"@ref": "<id>"}`             |
//! | `Array`          | JSON array                     |
//! | `Object`         | JSON object, escaped as data   |
//!
//! Decoding is the exact inverse. A lone `object` key is unwrapped back into
//! an object literal.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use serde_json::{Map, Number, Value as Json};
use tracing::{debug, trace, warn};

use crate::{
    error::DecodeError,
    escape::{OBJECT_ENVELOPE, needs_escape},
    expr::{Expr, Repr},
    value::{Object, Ref, Value},
};

pub const REF_TAG: &str = "@ref";
pub const TS_TAG: &str = "@ts";
pub const DATE_TAG: &str = "@date";

const TAGS: [&str; 3] = [REF_TAG, TS_TAG, DATE_TAG];
const DATE_FORMAT: &str = "%Y-%m-%d";
const TS_EXTENDED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Encode a value as data.
pub fn encode(value: &Value) -> Json {
    match value {
        Value::String(s) => Json::String(s.clone()),
        Value::Long(n) => Json::Number((*n).into()),
        Value::Double(n) => match Number::from_f64(*n) {
            Some(num) => Json::Number(num),
            None => {
                warn!(value = %n, "non-finite double has no JSON form, encoding as null");
                Json::Null
            }
        },
        Value::Boolean(b) => Json::Bool(*b),
        Value::Null => Json::Null,
        Value::Ts(ts) => tagged(TS_TAG, ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        Value::Date(date) => tagged(DATE_TAG, date.format(DATE_FORMAT).to_string()),
        Value::Ref(r) => tagged(REF_TAG, r.id().to_string()),
        Value::Array(arr) => Json::Array(arr.iter().map(encode).collect()),
        Value::Object(obj) => encode_data_object(obj, encode),
    }
}

/// Encode an expression. Call forms are emitted verbatim; object literals are
/// escaped.
pub fn encode_expr(expr: &Expr) -> Json {
    match expr.repr() {
        Repr::Value(value) => encode(value),
        Repr::Array(items) => Json::Array(items.iter().map(encode_expr).collect()),
        Repr::Object(obj) => encode_data_object(obj, encode_expr),
        Repr::Call(form) => Json::Object(
            form.iter()
                .map(|(k, v)| (k.to_string(), encode_expr(v)))
                .collect(),
        ),
    }
}

fn tagged(tag: &str, payload: String) -> Json {
    let mut map = Map::new();
    map.insert(tag.to_string(), Json::String(payload));
    Json::Object(map)
}

/// The one place an object literal is escaped.
fn encode_data_object<T>(obj: &Object<T>, encode_entry: fn(&T) -> Json) -> Json {
    let entries: Map<String, Json> = obj
        .iter()
        .map(|(k, v)| (k.to_string(), encode_entry(v)))
        .collect();

    if needs_escape(obj) {
        trace!(keys = ?obj.keys().collect::<Vec<_>>(), "escaping object literal");
        let mut envelope = Map::new();
        envelope.insert(OBJECT_ENVELOPE.to_string(), Json::Object(entries));
        Json::Object(envelope)
    } else {
        Json::Object(entries)
    }
}

/// Decode wire JSON into a value.
pub fn decode(json: &Json) -> Result<Value, DecodeError> {
    decode_value(json).inspect_err(|e| debug!(error = %e, "failed to decode wire value"))
}

/// Parse and decode a wire JSON document.
pub fn from_str(s: &str) -> Result<Value, DecodeError> {
    let json: Json = serde_json::from_str(s)?;
    decode(&json)
}

fn decode_value(json: &Json) -> Result<Value, DecodeError> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Boolean(*b)),
        Json::Number(n) => decode_number(n),
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Array(arr) => arr
            .iter()
            .map(decode_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Json::Object(map) => decode_object(map),
    }
}

fn decode_number(n: &Number) -> Result<Value, DecodeError> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Long(i))
    } else if n.is_u64() {
        Err(DecodeError::IntegerOutOfRange(n.to_string()))
    } else {
        n.as_f64()
            .map(Value::Double)
            .ok_or_else(|| DecodeError::IntegerOutOfRange(n.to_string()))
    }
}

fn decode_object(map: &Map<String, Json>) -> Result<Value, DecodeError> {
    if let Some(tag) = TAGS.into_iter().find(|tag| map.contains_key(*tag)) {
        if map.len() != 1 {
            return Err(DecodeError::MalformedTag {
                tag,
                reason: format!("expected a single key, found {}", map.len()),
            });
        }
        return decode_tagged(tag, &map[tag]);
    }

    if map.len() == 1 {
        if let Some(inner) = map.get(OBJECT_ENVELOPE) {
            return match inner {
                Json::Object(entries) => decode_entries(entries),
                other => Err(DecodeError::MalformedEnvelope(json_type(other))),
            };
        }
    }

    decode_entries(map)
}

fn decode_entries(map: &Map<String, Json>) -> Result<Value, DecodeError> {
    let mut obj = Object::new();
    for (key, value) in map {
        obj.insert(key.clone(), decode_value(value)?);
    }
    Ok(Value::Object(obj))
}

fn decode_tagged(tag: &'static str, payload: &Json) -> Result<Value, DecodeError> {
    let text = payload.as_str().ok_or_else(|| DecodeError::MalformedTag {
        tag,
        reason: format!("expected a string, found {}", json_type(payload)),
    })?;

    let malformed = |reason: String| DecodeError::MalformedTag { tag, reason };

    match tag {
        REF_TAG => Ok(Value::Ref(Ref::new(text))),
        TS_TAG => decode_ts(text)
            .map(Value::Ts)
            .map_err(|e| malformed(format!("{:?}: {}", text, e))),
        DATE_TAG => NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Value::Date)
            .map_err(|e| malformed(format!("{:?}: {}", text, e))),
        _ => unreachable!("decode_tagged called with non-tag key {}", tag),
    }
}

/// RFC 3339 only covers years 0000-9999; outside that range the encoder
/// writes a signed extended year (`+10000-...`, `-0001-...`) in UTC.
fn decode_ts(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.with_timezone(&Utc))
        .or_else(|rfc_err| match text.strip_suffix('Z') {
            Some(naive) => NaiveDateTime::parse_from_str(naive, TS_EXTENDED_FORMAT)
                .map(|ts| ts.and_utc()),
            None => Err(rfc_err),
        })
}

fn json_type(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode(self).serialize(serializer)
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode_expr(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        decode(&json).map_err(D::Error::custom)
    }
}
