use std::sync::Once;

use lang_query_lib::{LanguageCatalog, Value};
use simplelog::{Config, LevelFilter, TestLogger};

static LOGGER: Once = Once::new();

pub fn catalog() -> LanguageCatalog {
    LOGGER.call_once(|| {
        let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    });
    LanguageCatalog::bundled()
}

#[allow(dead_code)]
pub fn codes(result: &Value) -> Vec<String> {
    result.keys().into_iter().map(Value::key_string).collect()
}
