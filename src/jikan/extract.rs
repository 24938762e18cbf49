//! Total field access over untrusted upstream records.
//!
//! Every accessor takes a record and a key and always returns a value:
//! a missing key, a JSON `null` and a value of the wrong type all fall back
//! to the literal default (`""`, `0`, `0.0`, `false`, empty list).

use serde_json::{Map, Value};

/// One upstream entity as decoded JSON.
pub type Record = Map<String, Value>;

pub fn string(record: &Record, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub fn integer(record: &Record, key: &str) -> i64 {
    record.get(key).and_then(Value::as_i64).unwrap_or_default()
}

pub fn float(record: &Record, key: &str) -> f64 {
    record.get(key).and_then(Value::as_f64).unwrap_or_default()
}

pub fn boolean(record: &Record, key: &str) -> bool {
    record.get(key).and_then(Value::as_bool).unwrap_or_default()
}

/// First non-empty string among `keys`, e.g. `title_english` then `title`.
pub fn first_string(record: &Record, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| record.get(*key).and_then(Value::as_str))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Nested object under `key`, if it is one.
pub fn object<'a>(record: &'a Record, key: &str) -> Option<&'a Record> {
    record.get(key).and_then(Value::as_object)
}

/// String one level down, e.g. `user.username`.
pub fn nested_string(record: &Record, outer: &str, inner: &str) -> String {
    object(record, outer)
        .map(|nested| string(nested, inner))
        .unwrap_or_default()
}

/// Flatten a `{from, to}` date span into `(start, end)`.
pub fn date_span(record: &Record, key: &str) -> (String, String) {
    match object(record, key) {
        Some(span) => (string(span, "from"), string(span, "to")),
        None => (String::new(), String::new()),
    }
}

/// Flatten the `entry` sub-object of a recommendation into `(mal_id, title)`.
pub fn entry(record: &Record) -> (i64, String) {
    match object(record, "entry") {
        Some(entry) => (integer(entry, "mal_id"), string(entry, "title")),
        None => (0, String::new()),
    }
}

/// Project a nested collection of `{mal_id, name}` objects into parallel
/// id and name lists. Non-object elements are dropped from both lists.
pub fn id_name_lists(record: &Record, key: &str) -> (Vec<i64>, Vec<String>) {
    objects(record, key)
        .map(|item| (integer(item, "mal_id"), string(item, "name")))
        .unzip()
}

/// Collect `field` from every object element of the array under `key`.
pub fn string_list(record: &Record, key: &str, field: &str) -> Vec<String> {
    objects(record, key).map(|item| string(item, field)).collect()
}

fn objects<'a>(record: &'a Record, key: &str) -> impl Iterator<Item = &'a Record> {
    record
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}
