//! Translation data model and per-locale projection.
//!
//! The compiled input module exports an ordered `locales` list and an
//! ordered `translations` array. Each translation entry carries a unique
//! `key` plus one value per locale; key uniqueness and locale coverage are
//! the source type system's job, not re-checked here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::DEFAULT_LOCALE;

/// Exported bindings of the compiled translation module.
///
/// `translations` is required; a module without it is malformed. `locales`
/// may be absent, empty, or not a string array at all, which the pipeline
/// recovers from by substituting the default locale.
#[derive(Debug, Deserialize)]
pub struct ModuleExports {
    #[serde(default, deserialize_with = "lenient_locales")]
    pub locales: Vec<String>,
    pub translations: Vec<Value>,
}

/// Accept anything in the `locales` slot. A `null`, a non-array, or an array
/// of non-strings all coerce to an empty list so `resolved_locales` takes
/// the warn-and-default path instead of failing the load.
fn lenient_locales<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// One source entry: a key plus its value per locale.
///
/// The per-locale values stay an insertion-ordered map (serde_json's
/// `preserve_order`) so raw output round-trips the source field order.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationEntry {
    pub key: String,
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

/// One element of a generated locale file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocaleEntry {
    pub key: String,
    pub value: Value,
}

impl ModuleExports {
    /// Resolve the locale list, substituting `[DEFAULT_LOCALE]` when the
    /// export is empty or absent. Returns the list and whether it was
    /// defaulted (so the caller can warn).
    pub fn resolved_locales(&self) -> (Vec<String>, bool) {
        if self.locales.is_empty() {
            (vec![DEFAULT_LOCALE.to_string()], true)
        } else {
            (self.locales.clone(), false)
        }
    }

    /// Deserialize the raw translation values into typed entries.
    ///
    /// Fails when an entry is not an object or lacks a string `key`.
    pub fn entries(&self) -> Result<Vec<TranslationEntry>, serde_json::Error> {
        self.translations
            .iter()
            .map(|value| serde_json::from_value(value.clone()))
            .collect()
    }
}

/// Project the entries into one locale's view, preserving entry order.
///
/// An entry without a value for `locale` projects as JSON `null`.
pub fn project(entries: &[TranslationEntry], locale: &str) -> Vec<LocaleEntry> {
    entries
        .iter()
        .map(|entry| LocaleEntry {
            key: entry.key.clone(),
            value: entry.values.get(locale).cloned().unwrap_or(Value::Null),
        })
        .collect()
}
