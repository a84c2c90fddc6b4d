//! Command handlers and the registry the host's dispatch glue consumes.
//!
//! Every handler follows the same synchronous shape: resolve the operative
//! range and text, compute the replacement (or target selection), then hand
//! the edit back to the host and restore a sensible cursor. Handlers run to
//! completion inside one host-dispatched callback; nothing here blocks.

use anyhow::Result;
use transform_core::{
  boundary::BoundarySet,
  case::{
    self,
    Case,
  },
  position::{
    Position,
    Range,
  },
  resolve::{
    SelectionInfo,
    resolve,
  },
};

use crate::{
  config::Config,
  host::{
    Anchor,
    HostEditor,
  },
};

/// Borrowed state a command executes against.
pub struct Context<'a> {
  pub editor: &'a mut dyn HostEditor,
  pub config: &'a Config,
}

pub type CommandFn = fn(&mut Context) -> Result<()>;

/// A named command the host binds into its palette and hotkeys.
pub struct Command {
  pub name: &'static str,
  pub doc:  &'static str,
  pub fun:  CommandFn,
}

/// Every command this plugin registers, in palette order.
pub const COMMANDS: &[Command] = &[
  Command {
    name: "uppercase",
    doc:  "Transform to UPPERCASE",
    fun:  uppercase,
  },
  Command {
    name: "lowercase",
    doc:  "Transform to lowercase",
    fun:  lowercase,
  },
  Command {
    name: "title-case",
    doc:  "Transform to Title Case",
    fun:  title_case,
  },
  Command {
    name: "camel-case",
    doc:  "Transform to camelCase",
    fun:  camel_case,
  },
  Command {
    name: "pascal-case",
    doc:  "Transform to PascalCase",
    fun:  pascal_case,
  },
  Command {
    name: "select-word",
    doc:  "Select word",
    fun:  select_word,
  },
  Command {
    name: "select-word-ignore",
    doc:  "Select word (ignore boundary characters setting)",
    fun:  select_word_ignore,
  },
  Command {
    name: "delete-line",
    doc:  "Delete current line",
    fun:  delete_line,
  },
  Command {
    name: "duplicate-line",
    doc:  "Duplicate current line",
    fun:  duplicate_line,
  },
];

/// Looks a command up by its registered name.
pub fn find(name: &str) -> Option<&'static Command> {
  COMMANDS.iter().find(|command| command.name == name)
}

/// Resolves what the current invocation operates on: the explicit selection
/// if one exists, otherwise the word enclosing the cursor. `builtin_only`
/// drops the user-configured boundary characters and resolves against space
/// and tab alone.
fn selection_info(cx: &mut Context, builtin_only: bool) -> SelectionInfo {
  let selected = cx.editor.selection();
  let original = Range::new(cx.editor.cursor(Anchor::From), cx.editor.cursor(Anchor::To));
  let boundaries = if builtin_only {
    BoundarySet::builtin()
  } else {
    cx.config.boundary_set()
  };

  let editor = &*cx.editor;
  resolve(original, &selected, |line| editor.line(line), &boundaries)
}

/// Replaces the operative range with `new_text` and restores the original
/// selection. When an explicit selection was replaced by shorter text, the
/// trailing cursor column shrinks by the difference so it cannot point past
/// the inserted text.
pub fn apply_replacement(editor: &mut dyn HostEditor, info: &SelectionInfo, new_text: &str) {
  let selected_chars = if info.had_selection() {
    info.text.chars().count()
  } else {
    0
  };

  editor.replace_range(new_text, info.operative.from, info.operative.to);

  let mut to = info.original.to;
  let new_chars = new_text.chars().count();
  if selected_chars > 0 && new_chars < selected_chars {
    to.col = to.col.saturating_sub(selected_chars - new_chars);
  }
  editor.set_selection(info.original.from, to);
}

fn transform_case(cx: &mut Context, case: Case) -> Result<()> {
  let info = selection_info(cx, false);
  let new_text = case::transform(
    &info.text,
    case,
    &cx.config.boundary_set(),
    &cx.config.exception_list(),
  );
  apply_replacement(cx.editor, &info, &new_text);
  Ok(())
}

fn uppercase(cx: &mut Context) -> Result<()> {
  transform_case(cx, Case::Upper)
}

fn lowercase(cx: &mut Context) -> Result<()> {
  transform_case(cx, Case::Lower)
}

fn title_case(cx: &mut Context) -> Result<()> {
  transform_case(cx, Case::Title)
}

fn camel_case(cx: &mut Context) -> Result<()> {
  transform_case(cx, Case::Camel)
}

fn pascal_case(cx: &mut Context) -> Result<()> {
  transform_case(cx, Case::Pascal)
}

fn select_word(cx: &mut Context) -> Result<()> {
  let info = selection_info(cx, false);
  cx.editor.set_selection(info.operative.from, info.operative.to);
  Ok(())
}

fn select_word_ignore(cx: &mut Context) -> Result<()> {
  let info = selection_info(cx, true);
  cx.editor.set_selection(info.operative.from, info.operative.to);
  Ok(())
}

fn delete_line(cx: &mut Context) -> Result<()> {
  let line = cx.editor.cursor(Anchor::Head).line;
  cx.editor.delete_line(line);

  // Land on the line that moved up, or the new last line.
  let line = line.min(cx.editor.line_count().saturating_sub(1));
  let pos = Position::new(line, 0);
  cx.editor.set_selection(pos, pos);
  Ok(())
}

fn duplicate_line(cx: &mut Context) -> Result<()> {
  let cursor = cx.editor.cursor(Anchor::Head);
  let text = cx.editor.line(cursor.line);
  cx.editor.insert_line(cursor.line + 1, &text);

  let pos = Position::new(cursor.line + 1, cursor.col);
  cx.editor.set_selection(pos, pos);
  Ok(())
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_registry_names_are_unique() {
    for (i, command) in COMMANDS.iter().enumerate() {
      assert!(
        COMMANDS[i + 1..].iter().all(|other| other.name != command.name),
        "duplicate command name {}",
        command.name
      );
    }
  }

  #[test]
  fn test_find_known_and_unknown() {
    assert!(find("title-case").is_some());
    assert!(find("uppercase").is_some());
    assert!(find("no-such-command").is_none());
  }
}
