use log::*;

use crate::traversal::utils::truthy;
use crate::traversal::{Fallback, Path, WILDCARD};
use crate::Value;

/// Resolve `path` against `target`.
///
/// Misses never fail, they resolve to `default`. A `*` segment plucks the rest of the
/// path from every element of the current collection; when another `*` follows, the
/// per-element results are collapsed one level.
pub fn get<'f>(target: &Value, path: impl Into<Path>, default: impl Into<Fallback<'f>>) -> Value {
    let path = path.into();
    let default: Fallback<'f> = default.into();
    let segments = match path.segments() {
        Some(segments) => segments,
        None => return target.clone(),
    };

    let mut current = target;
    for (position, segment) in segments.iter().enumerate() {
        if segment == WILDCARD {
            if !matches!(current, Value::List(_) | Value::Object(_)) {
                return default.resolve();
            }

            let rest = Path::from(segments[position + 1..].to_vec());
            trace!("wildcard over {} with rest {:?}", current, rest);
            let result = pluck(current, &rest, None);

            return if rest.has_wildcard() { collapse(&result) } else { result };
        }

        match current.child(segment) {
            Some(child) => current = child,
            None => return default.resolve(),
        }
    }

    current.clone()
}

/// Resolve `value` on every element of `items`.
///
/// Without `key` the result is a list in element order. With `key`, the result is an
/// object keyed by what `key` resolves to on the same element; a repeated key keeps its
/// first position and takes the last value.
pub fn pluck(items: &Value, value: impl Into<Path>, key: Option<Path>) -> Value {
    let value = value.into();

    match key {
        None => Value::List(
            items
                .pairs()
                .map(|(_, item)| get(item, &value, Fallback::none()))
                .collect(),
        ),
        Some(key) => {
            let mut result = Value::object();
            for (_, item) in items.pairs() {
                let item_key = get(item, &key, Fallback::none());
                result.insert(item_key, get(item, &value, Fallback::none()));
            }
            result
        }
    }
}

/// Concatenate the list elements of `nested` into one list; anything else is skipped.
pub fn collapse(nested: &Value) -> Value {
    let mut result = Vec::new();
    for (_, values) in nested.pairs() {
        if let Value::List(list) = values {
            result.extend(list.iter().cloned());
        }
    }
    Value::List(result)
}

/// Keep the elements of `items` accepted by `predicate`, called with `(value, key)`.
/// Without a predicate, falsy elements are dropped.
///
/// Survivors keep their original keys, so a filtered list comes back as an object keyed
/// by original index.
pub fn filter(items: &Value, predicate: Option<&dyn Fn(&Value, &Value) -> bool>) -> Value {
    let entries = items
        .pairs()
        .filter(|(key, value)| match predicate {
            Some(predicate) => predicate(*value, key),
            None => truthy(value),
        })
        .map(|(key, value)| (key, value.clone()))
        .collect();
    Value::Object(entries)
}
