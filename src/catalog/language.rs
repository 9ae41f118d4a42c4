use serde::ser::{Serialize, Serializer};

use crate::error::{LanguageError, Result};
use crate::traversal::traverse;
use crate::traversal::utils::truthy;
use crate::traversal::Fallback;
use crate::Value;

const MANDATORY: [&str; 3] = ["name", "native", "iso_639_1"];

/// Typed view over one dataset record.
#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    attributes: Value,
}

impl Language {
    /// Wrap a raw record; `name`, `native` and `iso_639_1` must be present and non-empty.
    pub fn new(attributes: Value) -> Result<Language> {
        let language = Language { attributes };
        for key in MANDATORY {
            if !language.attribute(key).map_or(false, truthy) {
                return Err(LanguageError::InvalidLanguageRecord(key.to_string()));
            }
        }
        Ok(language)
    }

    /// Replace every attribute. No validation happens here.
    pub fn set_attributes(&mut self, attributes: Value) -> &mut Self {
        self.attributes = attributes;
        self
    }

    pub fn attributes(&self) -> &Value {
        &self.attributes
    }

    /// Set one top-level attribute.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.attributes.insert(Value::from(key), value.into());
        self
    }

    /// Attribute by dot-path. A literal top-level key wins over the dotted walk, so
    /// `"script.name"` stored verbatim is found as-is.
    pub fn get<'f>(&self, key: &str, default: impl Into<Fallback<'f>>) -> Value {
        match self.attributes.entry(&Value::from(key)) {
            Some(value) => value.clone(),
            None => traverse::get(&self.attributes, key, default),
        }
    }

    fn attribute(&self, key: &str) -> Option<&Value> {
        if let Some(value) = self.attributes.entry(&Value::from(key)) {
            return Some(value);
        }
        key.split('.')
            .try_fold(&self.attributes, |current, segment| current.child(segment))
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    pub fn native_name(&self) -> Option<&str> {
        self.text("native")
    }

    pub fn iso_639_1(&self) -> Option<&str> {
        self.text("iso_639_1")
    }

    pub fn iso_639_2(&self) -> Option<&str> {
        self.text("iso_639_2")
    }

    pub fn iso_639_3(&self) -> Option<&str> {
        self.text("iso_639_3")
    }

    pub fn script(&self) -> Option<&Value> {
        self.attribute("script")
    }

    pub fn script_name(&self) -> Option<&str> {
        self.text("script.name")
    }

    pub fn script_iso_15924(&self) -> Option<&str> {
        self.text("script.iso_15924")
    }

    pub fn script_iso_numeric(&self) -> Option<&str> {
        self.text("script.iso_numeric")
    }

    pub fn script_direction(&self) -> Option<&str> {
        self.text("script.direction")
    }

    pub fn family(&self) -> Option<&Value> {
        self.attribute("family")
    }

    pub fn family_name(&self) -> Option<&str> {
        self.text("family.name")
    }

    pub fn family_iso_639_5(&self) -> Option<&str> {
        self.text("family.iso_639_5")
    }

    pub fn family_hierarchy(&self) -> Option<&str> {
        self.text("family.hierarchy")
    }

    pub fn scope(&self) -> Option<&str> {
        self.text("scope")
    }

    /// The `type` attribute (living, ancient, ...).
    pub fn kind(&self) -> Option<&str> {
        self.text("type")
    }

    pub fn cultures(&self) -> Option<&Value> {
        self.attribute("cultures")
    }

    /// One culture by code, falling back to the first culture when the code is absent.
    pub fn culture(&self, code: Option<&str>) -> Option<&Value> {
        let cultures = self.cultures()?;
        code.and_then(|code| cultures.entry(&Value::from(code)))
            .or_else(|| match cultures {
                Value::Object(entries) => entries.first().map(|(_, culture)| culture),
                _ => None,
            })
    }
}

impl TryFrom<Value> for Language {
    type Error = LanguageError;

    fn try_from(attributes: Value) -> Result<Language> {
        Language::new(attributes)
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.attributes.serialize(serializer)
    }
}
