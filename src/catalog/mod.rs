use std::borrow::Cow;
use std::path::PathBuf;

use log::*;
use once_cell::sync::OnceCell;

use crate::error::{LanguageError, Result};
use crate::query::{operator_for_where, Compare};
use crate::traversal::traverse::{filter, pluck};
use crate::traversal::Path;
use crate::Value;

pub use language::Language;

pub mod language;

const BUNDLED_DATASET: &str = include_str!("../../resources/languages.json");

/// Where the dataset is read from on first access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// The dataset embedded in the crate.
    #[default]
    Bundled,
    File(PathBuf),
    /// JSON text supplied by the host.
    Inline(String),
}

impl CatalogSource {
    fn location(&self) -> String {
        match self {
            CatalogSource::Bundled => "bundled resources/languages.json".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
            CatalogSource::Inline(_) => "inline dataset".to_string(),
        }
    }

    fn read(&self) -> Result<Cow<'_, str>> {
        match self {
            CatalogSource::Bundled => Ok(Cow::Borrowed(BUNDLED_DATASET)),
            CatalogSource::Inline(text) => Ok(Cow::Borrowed(text.as_str())),
            CatalogSource::File(path) => std::fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|err| self.unavailable(err.to_string())),
        }
    }

    fn unavailable(&self, reason: impl Into<String>) -> LanguageError {
        LanguageError::DatasetUnavailable {
            location: self.location(),
            reason: reason.into(),
        }
    }
}

/// A lookup result: the raw record, or the record wrapped as a [`Language`].
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Raw(Value),
    Hydrated(Language),
}

impl Entry {
    fn build(record: &Value, hydrate: bool) -> Result<Entry> {
        if hydrate {
            Language::new(record.clone()).map(Entry::Hydrated)
        } else {
            Ok(Entry::Raw(record.clone()))
        }
    }

    pub fn raw(&self) -> &Value {
        match self {
            Entry::Raw(record) => record,
            Entry::Hydrated(language) => language.attributes(),
        }
    }

    pub fn language(&self) -> Option<&Language> {
        match self {
            Entry::Hydrated(language) => Some(language),
            Entry::Raw(_) => None,
        }
    }
}

/// Read-only language dataset keyed by lowercase ISO 639-1 code.
///
/// The dataset is parsed once, on first use, and kept for the lifetime of the catalog.
/// Concurrent first access is serialized; a failed load leaves the catalog empty so the
/// next call tries again.
#[derive(Debug, Default)]
pub struct LanguageCatalog {
    source: CatalogSource,
    languages: OnceCell<Value>,
}

impl LanguageCatalog {
    pub fn new(source: CatalogSource) -> Self {
        LanguageCatalog {
            source,
            languages: OnceCell::new(),
        }
    }

    pub fn bundled() -> Self {
        LanguageCatalog::new(CatalogSource::Bundled)
    }

    /// Every record, as an object keyed by code in dataset order.
    pub fn dataset(&self) -> Result<&Value> {
        self.languages.get_or_try_init(|| load(&self.source))
    }

    /// Look a language up by ISO 639-1 code, case-insensitively.
    pub fn lookup(&self, code: &str, hydrate: bool) -> Result<Entry> {
        Entry::build(self.record(code)?, hydrate)
    }

    pub fn language(&self, code: &str) -> Result<Language> {
        Language::new(self.record(code)?.clone())
    }

    pub fn record(&self, code: &str) -> Result<&Value> {
        let code = code.to_lowercase();
        debug!("looking up language '{}'", code);
        self.dataset()?
            .entry(&Value::Str(code.clone()))
            .ok_or(LanguageError::UnknownLanguageCode(code))
    }

    /// Whether `code` is a two-character code present in the dataset.
    pub fn contains(&self, code: &str) -> Result<bool> {
        if code.chars().count() != 2 {
            return Ok(false);
        }
        let code = Value::Str(code.to_lowercase());
        Ok(self.dataset()?.entry(&code).is_some())
    }

    pub fn all(&self, hydrate: bool) -> Result<Vec<(String, Entry)>> {
        self.dataset()?
            .pairs()
            .map(|(code, record)| Ok((code.key_string(), Entry::build(record, hydrate)?)))
            .collect()
    }

    /// Script name by ISO 15924 code.
    ///
    /// A record without a script contributes an `Empty` key mapped to `Empty`.
    pub fn scripts(&self) -> Result<Value> {
        Ok(pluck(self.dataset()?, "script.name", Some(Path::from("script.iso_15924"))))
    }

    /// Family name by ISO 639-5 code.
    ///
    /// A record without a family contributes an `Empty` key mapped to `Empty`.
    pub fn families(&self) -> Result<Value> {
        Ok(pluck(self.dataset()?, "family.name", Some(Path::from("family.iso_639_5"))))
    }

    /// Records whose value at `path` compares to `value` under `operator`, keyed by code.
    pub fn select(&self, path: impl Into<Path>, operator: &str, value: impl Into<Value>) -> Result<Value> {
        let path = path.into();
        let compare = Compare::parse(operator);
        debug!("where {:?} {:?}", path, compare);
        let predicate: &dyn Fn(&Value, &Value) -> bool = &operator_for_where(path, compare, value.into());
        Ok(filter(self.dataset()?, Some(predicate)))
    }

    /// [`select`](Self::select) with equality.
    pub fn select_eq(&self, path: impl Into<Path>, value: impl Into<Value>) -> Result<Value> {
        self.select(path, "=", value)
    }
}

fn load(source: &CatalogSource) -> Result<Value> {
    let text = source.read()?;
    let parsed: Value = serde_json::from_str(&text).map_err(|err| source.unavailable(err.to_string()))?;

    let records = match parsed {
        Value::Object(records) => records,
        other => return Err(source.unavailable(format!("expected an object of languages, found {}", other))),
    };

    let mut languages = Value::object();
    for (code, record) in records {
        let code = Value::Str(code.key_string().to_lowercase());
        if languages.entry(&code).is_some() {
            warn!("duplicate language code {:?}, keeping the last record", code);
        }
        languages.insert(code, record);
    }

    info!("loaded {} languages from {}", languages.len(), source.location());
    Ok(languages)
}
