use std::fmt;
use std::fmt::Formatter;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Generic nested data: the shape every dataset record and every query result takes.
///
/// `Object` keeps its entries in insertion order. Keys are values themselves so that
/// `pluck` can key a result by whatever the key path resolves to, `Empty` included.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    I64(i64),
    F64(f64),
    Bool(bool),
    List(Vec<Value>),
    Object(Vec<(Value, Value)>),
    Empty,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(_) => write!(f, "String"),
            Value::I64(_) => write!(f, "Int"),
            Value::F64(_) => write!(f, "Float"),
            Value::Bool(_) => write!(f, "Bool"),
            Value::List(list) => write!(f, "List(length = {})", list.len()),
            Value::Object(entries) => write!(f, "Object(length = {})", entries.len()),
            Value::Empty => write!(f, "Empty"),
        }
    }
}

impl Value {
    pub fn object() -> Value {
        Value::Object(Vec::new())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Entry lookup on an object by exact key.
    pub fn entry(&self, key: &Value) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Child lookup by a single path segment. Objects match string keys, and integer
    /// keys by their exact decimal form; lists match an index written the same way.
    pub fn child(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries
                .iter()
                .find(|(key, _)| key.matches_segment(segment))
                .map(|(_, value)| value),
            Value::List(list) => segment
                .parse::<usize>()
                .ok()
                .filter(|i| i.to_string() == segment)
                .and_then(|i| list.get(i)),
            _ => None,
        }
    }

    fn matches_segment(&self, segment: &str) -> bool {
        match self {
            Value::Str(key) => key == segment,
            Value::I64(key) => key.to_string() == segment,
            _ => false,
        }
    }

    /// Insert or overwrite an object entry. An overwritten key keeps its original position.
    /// Non-objects are replaced by a fresh object first.
    pub fn insert(&mut self, key: Value, value: Value) {
        if !matches!(self, Value::Object(_)) {
            *self = Value::object();
        }
        if let Value::Object(entries) = self {
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }
        }
    }

    /// Number of elements of a list or entries of an object; zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::List(list) => list.len(),
            Value::Object(entries) => entries.len(),
            _ => 0,
        }
    }

    /// Iterate `(key, value)` pairs of a collection. Lists yield their index as key.
    pub fn pairs(&self) -> Box<dyn Iterator<Item = (Value, &Value)> + '_> {
        match self {
            Value::List(list) => Box::new(
                list.iter()
                    .enumerate()
                    .map(|(i, v)| (Value::I64(i as i64), v)),
            ),
            Value::Object(entries) => Box::new(entries.iter().map(|(k, v)| (k.clone(), v))),
            _ => Box::new(std::iter::empty()),
        }
    }

    pub fn keys(&self) -> Vec<&Value> {
        match self {
            Value::Object(entries) => entries.iter().map(|(k, _)| k).collect(),
            _ => Vec::new(),
        }
    }

    /// String form of a scalar, used when a value has to act as a map key.
    pub fn key_string(&self) -> String {
        match self {
            Value::Str(text) => text.clone(),
            Value::I64(value) => value.to_string(),
            Value::F64(value) => value.to_string(),
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) | Value::Empty => String::new(),
            Value::List(_) | Value::Object(_) => self.to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Str(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Str(text)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I64(value as i64)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(&key.key_string(), value)?;
                }
                map.end()
            }
            Value::List(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for value in list {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            Value::Str(text) => serializer.serialize_str(text),
            Value::I64(value) => serializer.serialize_i64(*value),
            Value::F64(value) => serializer.serialize_f64(*value),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Empty => serializer.serialize_unit(),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("any structured value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::I64(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(i64::try_from(value).map_or(Value::F64(value as f64), Value::I64))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::F64(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Str(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Str(value))
    }

    fn visit_unit<E>(self) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Empty)
    }

    fn visit_none<E>(self) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Empty)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut list = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            list.push(value);
        }
        Ok(Value::List(list))
    }

    // map access hands entries over in document order
    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut object = Value::Object(Vec::with_capacity(map.size_hint().unwrap_or(0)));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            object.insert(Value::Str(key), value);
        }
        Ok(object)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}
