//! Capability interfaces provided by the host application.
//!
//! The host's editor and settings machinery stay on the other side of these
//! traits; the plugin consumes them and never reimplements them. Both traits
//! are object-safe so the host can hand the plugin plain trait objects.

use serde_json::Value;
use thiserror::Error;
use transform_core::position::Position;

/// Which end of the cursor/selection to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
  From,
  To,
  Head,
}

/// The narrow slice of the host's text-editing API the plugin consumes.
///
/// Positions follow the host convention: `line` is a document line index and
/// `col` a char offset into that line. Handing back out-of-range positions
/// violates the host contract; the plugin clamps its own scans to line
/// bounds but does not otherwise validate the host's answers.
pub trait HostEditor {
  /// True while the editor pane has input focus.
  fn has_focus(&self) -> bool;

  /// The currently selected text, empty for a collapsed cursor.
  fn selection(&self) -> String;

  fn cursor(&self, anchor: Anchor) -> Position;

  /// Text of the given line, without its line ending.
  fn line(&self, line: usize) -> String;

  fn line_count(&self) -> usize;

  /// Replaces `[from, to)` with `text`.
  fn replace_range(&mut self, text: &str, from: Position, to: Position);

  fn set_selection(&mut self, from: Position, to: Position);

  /// Removes the given line together with its line ending.
  fn delete_line(&mut self, line: usize);

  /// Inserts `text` as a new line before the given line index.
  fn insert_line(&mut self, line: usize, text: &str);
}

/// Errors surfaced by the host's settings store.
#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("settings store error: {0}")]
  Store(String),
  #[error(transparent)]
  Serde(#[from] serde_json::Error),
}

/// Key-value persistence for plugin settings. The persisted value is an
/// opaque JSON blob owned by the host; the plugin loads it once at activation
/// and saves on every settings edit.
pub trait SettingsStore {
  /// Loads the persisted blob, `None` when nothing has been saved yet.
  fn load(&self) -> Result<Option<Value>, SettingsError>;

  /// Persists the blob. Fire-and-forget from the plugin's point of view;
  /// core calls never wait on it.
  fn save(&self, value: &Value) -> Result<(), SettingsError>;
}
