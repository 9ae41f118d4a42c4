pub use crate::catalog::{CatalogSource, Entry, Language, LanguageCatalog};
pub use crate::error::{LanguageError, Result};
pub use crate::traversal::value::Value;
pub use crate::traversal::{Fallback, Path};

pub mod catalog;
pub mod error;
pub mod query;
pub mod traversal;

#[cfg(test)]
mod tests;
