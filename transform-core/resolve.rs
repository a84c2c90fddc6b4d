//! Word/selection resolution.
//!
//! Given the cursor state of a command invocation, works out the exact range
//! of text the command should act on: the explicit selection when one exists,
//! otherwise the word enclosing the cursor, found by scanning outward to the
//! nearest boundary character on each side. The scan never leaves the
//! cursor's line.

use crate::{
  Tendril,
  boundary::BoundarySet,
  position::{
    Position,
    Range,
  },
};

/// The text and ranges a single command invocation operates on.
///
/// Built at the start of a command handler and consumed immediately:
/// `operative` is the range the replacement targets (selection-or-word),
/// `original` is the pre-resolution cursor range used to restore the
/// selection afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionInfo {
  pub text:      Tendril,
  pub operative: Range,
  pub original:  Range,
}

impl SelectionInfo {
  /// True when the invocation started with a non-empty explicit selection.
  #[inline]
  #[must_use]
  pub fn had_selection(&self) -> bool {
    !self.original.is_empty()
  }
}

/// Resolves the operative range and text for a command invocation.
///
/// With a non-empty `selected_text` the selection is passed through untouched
/// and `line_at` is never called. With a collapsed cursor, the anchor line is
/// fetched and scanned outward from the cursor to the nearest boundary
/// character in each direction; the scan is bounded by the start and end of
/// the line. A cursor surrounded by boundary characters resolves to an empty
/// word.
pub fn resolve<F>(
  original: Range,
  selected_text: &str,
  line_at: F,
  boundaries: &BoundarySet,
) -> SelectionInfo
where
  F: FnOnce(usize) -> String,
{
  if !selected_text.is_empty() {
    return SelectionInfo {
      text: selected_text.into(),
      operative: original,
      original,
    };
  }

  let line = original.from.line;
  let text = line_at(line);
  let chars: Vec<char> = text.chars().collect();

  // Columns are char offsets; clamp so the scan stays within the line even
  // if the host hands us a cursor past its end.
  let from_col = original.from.col.min(chars.len());
  let to_col = original.to.col.min(chars.len());

  // Nearest boundary to the left of the cursor ends the scan; the word
  // starts one past it. No boundary means the word starts at column 0.
  let start = chars[..from_col]
    .iter()
    .rposition(|&ch| boundaries.contains(ch))
    .map_or(0, |i| i + 1);

  // Nearest boundary at or right of the cursor is the word end. No boundary
  // means the word runs to the end of the line.
  let end = chars[to_col..]
    .iter()
    .position(|&ch| boundaries.contains(ch))
    .map_or(chars.len(), |i| to_col + i);

  SelectionInfo {
    text: chars[start..end].iter().copied().collect(),
    operative: Range::new(Position::new(line, start), Position::new(line, end)),
    original,
  }
}
