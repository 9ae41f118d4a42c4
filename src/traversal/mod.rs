use crate::Value;

pub mod value;
pub mod traverse;
pub mod utils;

/// Segment that expands to every element of a collection.
pub const WILDCARD: &str = "*";

/// Dot-path into nested data.
///
/// `Path::whole()` stands for "no path" and resolves to the target itself. A string is
/// split on `.`; a pre-split list of segments is taken verbatim, so its segments may
/// contain dots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    segments: Option<Vec<String>>,
}

impl Path {
    pub fn whole() -> Self {
        Path { segments: None }
    }

    pub fn segments(&self) -> Option<&[String]> {
        self.segments.as_deref()
    }

    pub fn has_wildcard(&self) -> bool {
        self.segments().map_or(false, |s| s.iter().any(|segment| segment == WILDCARD))
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Path { segments: Some(path.split('.').map(str::to_string).collect()) }
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Path::from(path.as_str())
    }
}

impl From<Option<&str>> for Path {
    fn from(path: Option<&str>) -> Self {
        path.map_or_else(Path::whole, Path::from)
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Path { segments: Some(segments) }
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Path { segments: Some(segments.iter().map(|s| s.to_string()).collect()) }
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(segments: [&str; N]) -> Self {
        Path::from(&segments[..])
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

/// What a path miss resolves to. A `Lazy` producer only runs on the miss path.
pub enum Fallback<'f> {
    Value(Value),
    Lazy(&'f dyn Fn() -> Value),
}

impl<'f> Fallback<'f> {
    pub fn none() -> Self {
        Fallback::Value(Value::Empty)
    }

    pub fn lazy(producer: &'f dyn Fn() -> Value) -> Self {
        Fallback::Lazy(producer)
    }

    pub fn resolve(self) -> Value {
        match self {
            Fallback::Value(value) => value,
            Fallback::Lazy(producer) => producer(),
        }
    }
}

impl From<Value> for Fallback<'_> {
    fn from(value: Value) -> Self {
        Fallback::Value(value)
    }
}

impl From<&str> for Fallback<'_> {
    fn from(value: &str) -> Self {
        Fallback::Value(Value::from(value))
    }
}
