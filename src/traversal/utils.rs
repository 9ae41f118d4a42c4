use std::cmp::Ordering;

use crate::Value;

/// Falsy values: empty, `false`, zero, `""`, `"0"` and empty collections.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Empty => false,
        Value::Bool(b) => *b,
        Value::I64(i) => *i != 0,
        Value::F64(f) => *f != 0.0,
        Value::Str(s) => !(s.is_empty() || s == "0"),
        Value::List(list) => !list.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::I64(i) => Some(*i as f64),
        Value::F64(f) => Some(*f),
        Value::Str(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn is_collection(value: &Value) -> bool {
    matches!(value, Value::List(_) | Value::Object(_))
}

/// Total ordering over scalars used by the ordering operators of `where`.
///
/// Numbers and numeric strings compare by magnitude, other strings byte-wise, and a
/// number against a non-numeric string compares as text. Empty and booleans compare by
/// truthiness. Collections order after every scalar and among themselves by size.
pub fn loose_cmp(lhs: &Value, rhs: &Value) -> Ordering {
    match (lhs, rhs) {
        (Value::Empty, _) | (_, Value::Empty) | (Value::Bool(_), _) | (_, Value::Bool(_)) => {
            truthy(lhs).cmp(&truthy(rhs))
        }
        (l, r) if is_collection(l) || is_collection(r) => match (is_collection(l), is_collection(r)) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => l.len().cmp(&r.len()),
        },
        (l, r) => match (numeric(l), numeric(r)) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => l.key_string().cmp(&r.key_string()),
        },
    }
}
