//! Plugin configuration: defaults, persisted-blob merge, and the
//! settings-panel parse paths.

use serde::{
  Deserialize,
  Serialize,
};
use transform_core::{
  boundary::BoundarySet,
  case::ExceptionList,
};

use crate::host::{
  SettingsError,
  SettingsStore,
};

/// Words the stock configuration leaves lowercase in title case.
pub const DEFAULT_TITLE_CASE_IGNORE: &[&str] = &[
  "a", "an", "and", "as", "at", "but", "by", "for", "if", "in", "into", "nor", "of", "on", "or",
  "the", "to",
];

/// User configuration, persisted by the host as a JSON blob.
///
/// Missing fields fall back to defaults when an older blob is loaded, so a
/// partial blob merges cleanly instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
  /// Exception words for title case, stored lowercase.
  pub title_case_ignore:   Vec<String>,
  /// User-configured boundary characters. Space and tab are implied and
  /// never stored.
  pub word_boundary_chars: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      title_case_ignore:   DEFAULT_TITLE_CASE_IGNORE.iter().map(|s| s.to_string()).collect(),
      word_boundary_chars: String::new(),
    }
  }
}

impl Config {
  /// Loads configuration from the host's settings store, merging the
  /// persisted blob over defaults. Malformed or missing data degrades to
  /// defaults, never to a hard failure.
  pub fn load(store: &dyn SettingsStore) -> Self {
    match store.load() {
      Ok(Some(value)) => match serde_json::from_value(value) {
        Ok(config) => config,
        Err(err) => {
          log::warn!("malformed settings blob, using defaults: {err}");
          Self::default()
        },
      },
      Ok(None) => Self::default(),
      Err(err) => {
        log::warn!("failed to load settings, using defaults: {err}");
        Self::default()
      },
    }
  }

  /// Persists the configuration through the host's settings store.
  pub fn save(&self, store: &dyn SettingsStore) -> Result<(), SettingsError> {
    let value = serde_json::to_value(self)?;
    store.save(&value)
  }

  /// The effective boundary set: configured characters plus space and tab.
  /// Recomputed on every call; the stored configuration is never mutated.
  pub fn boundary_set(&self) -> BoundarySet {
    BoundarySet::new(self.word_boundary_chars.chars())
  }

  /// The title-case exception list, lowercase-normalized.
  pub fn exception_list(&self) -> ExceptionList {
    ExceptionList::new(self.title_case_ignore.iter())
  }

  /// Parses the settings-panel text field for exception words. Entries are
  /// separated by commas or whitespace, normalized to lowercase; empty
  /// entries are dropped.
  pub fn set_title_case_ignore_text(&mut self, text: &str) {
    self.title_case_ignore = text
      .split(|ch: char| ch == ',' || ch.is_whitespace())
      .filter(|word| !word.is_empty())
      .map(str::to_lowercase)
      .collect();
  }

  /// Parses the settings-panel text field for boundary characters: the value
  /// is trimmed and every remaining char becomes a boundary.
  pub fn set_word_boundary_chars_text(&mut self, text: &str) {
    self.word_boundary_chars = text.trim().to_string();
  }
}

#[cfg(test)]
mod test {
  use std::cell::RefCell;

  use serde_json::{
    Value,
    json,
  };

  use super::*;

  struct MemoryStore {
    value: RefCell<Option<Value>>,
    fail:  bool,
  }

  impl MemoryStore {
    fn new(value: Option<Value>) -> Self {
      Self {
        value: RefCell::new(value),
        fail:  false,
      }
    }
  }

  impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<Value>, SettingsError> {
      if self.fail {
        return Err(SettingsError::Store("backend unavailable".into()));
      }
      Ok(self.value.borrow().clone())
    }

    fn save(&self, value: &Value) -> Result<(), SettingsError> {
      *self.value.borrow_mut() = Some(value.clone());
      Ok(())
    }
  }

  #[test]
  fn test_load_empty_store_yields_defaults() {
    let store = MemoryStore::new(None);
    let config = Config::load(&store);
    assert_eq!(config, Config::default());
    assert!(config.title_case_ignore.contains(&"the".to_string()));
  }

  #[test]
  fn test_load_merges_partial_blob_over_defaults() {
    let store = MemoryStore::new(Some(json!({ "wordBoundaryChars": "-_" })));
    let config = Config::load(&store);
    assert_eq!(config.word_boundary_chars, "-_");
    // Missing field keeps its default.
    assert_eq!(config.title_case_ignore, Config::default().title_case_ignore);
  }

  #[test]
  fn test_load_malformed_blob_degrades_to_defaults() {
    let store = MemoryStore::new(Some(json!({ "wordBoundaryChars": 42 })));
    assert_eq!(Config::load(&store), Config::default());
  }

  #[test]
  fn test_load_store_failure_degrades_to_defaults() {
    let mut store = MemoryStore::new(None);
    store.fail = true;
    assert_eq!(Config::load(&store), Config::default());
  }

  #[test]
  fn test_save_round_trips() {
    let store = MemoryStore::new(None);
    let mut config = Config::default();
    config.set_word_boundary_chars_text(" -. ");
    config.save(&store).unwrap();
    assert_eq!(Config::load(&store), config);
  }

  #[test]
  fn test_ignore_text_parse() {
    let mut config = Config::default();
    config.set_title_case_ignore_text("The, of  AND,,nor ");
    assert_eq!(config.title_case_ignore, vec!["the", "of", "and", "nor"]);
  }

  #[test]
  fn test_boundary_text_parse_trims() {
    let mut config = Config::default();
    config.set_word_boundary_chars_text("  -_/  ");
    assert_eq!(config.word_boundary_chars, "-_/");
    let set = config.boundary_set();
    assert!(set.contains('-'));
    assert!(set.contains('/'));
    assert!(set.contains(' '));
    assert!(set.contains('\t'));
  }

  #[test]
  fn test_empty_boundary_field_leaves_builtins() {
    let mut config = Config::default();
    config.set_word_boundary_chars_text("   ");
    assert_eq!(config.word_boundary_chars, "");
    assert_eq!(config.boundary_set(), BoundarySet::builtin());
  }
}
