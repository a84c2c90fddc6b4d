//! Case conversion over boundary-delimited words.
//!
//! Words are maximal runs of non-boundary characters. Every boundary
//! character in the input is emitted verbatim at the same relative position
//! in the output, for every mode. Title case consults an [`ExceptionList`]
//! of words that must stay lowercase; camel and pascal case do not.

use std::collections::HashSet;

use crate::{
  Tendril,
  boundary::BoundarySet,
};

/// The case transformations a command can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
  Upper,
  Lower,
  Title,
  Camel,
  Pascal,
}

/// Lowercase words excluded from capitalization in title-case mode.
///
/// Entries are normalized to lowercase at construction; empty entries and
/// duplicates are dropped. Membership tests are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionList {
  words: HashSet<String>,
}

impl ExceptionList {
  pub fn new<I, S>(words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let words = words
      .into_iter()
      .filter_map(|word| {
        let word = word.as_ref().trim();
        (!word.is_empty()).then(|| word.to_lowercase())
      })
      .collect();
    Self { words }
  }

  /// Case-insensitive membership test.
  #[must_use]
  pub fn contains(&self, word: &str) -> bool {
    self.words.contains(word.to_lowercase().as_str())
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.words.iter().map(String::as_str)
  }
}

/// Applies `case` to `text`.
///
/// Output depends only on the arguments; boundary characters pass through
/// unchanged in every mode.
pub fn transform(
  text: &str,
  case: Case,
  boundaries: &BoundarySet,
  exceptions: &ExceptionList,
) -> Tendril {
  let mut buf = Tendril::new();
  match case {
    Case::Upper => to_upper_case_with(text.chars(), &mut buf),
    Case::Lower => to_lower_case_with(text.chars(), &mut buf),
    Case::Title => to_title_case_with(text, &mut buf, boundaries, exceptions),
    Case::Camel => to_camel_case_with(text, &mut buf, boundaries),
    Case::Pascal => to_pascal_case_with(text, &mut buf, boundaries),
  }
  buf
}

pub fn to_upper_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_upper_case_with(text, &mut res);
  res
}

pub fn to_upper_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| buf.extend(c.to_uppercase()));
}

pub fn to_lower_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_lower_case_with(text, &mut res);
  res
}

pub fn to_lower_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| buf.extend(c.to_lowercase()));
}

pub fn to_title_case(text: &str, boundaries: &BoundarySet, exceptions: &ExceptionList) -> Tendril {
  let mut res = Tendril::new();
  to_title_case_with(text, &mut res, boundaries, exceptions);
  res
}

/// Title-cases each word: all-lowercase for exception-list words, otherwise
/// lowercase with the first char uppercased.
pub fn to_title_case_with(
  text: &str,
  buf: &mut Tendril,
  boundaries: &BoundarySet,
  exceptions: &ExceptionList,
) {
  each_word_with(text, buf, boundaries, |word, buf| {
    let lowered = word.to_lowercase();
    if exceptions.contains(&lowered) {
      buf.push_str(&lowered);
    } else {
      capitalize_with(&lowered, buf);
    }
  });
}

pub fn to_camel_case(text: &str, boundaries: &BoundarySet) -> Tendril {
  let mut res = Tendril::new();
  to_camel_case_with(text, &mut res, boundaries);
  res
}

/// Camel-cases the text: the first word stays all-lowercase, every later
/// word is capitalized. The exception list does not apply here.
pub fn to_camel_case_with(text: &str, buf: &mut Tendril, boundaries: &BoundarySet) {
  let mut first_word = true;
  each_word_with(text, buf, boundaries, |word, buf| {
    let lowered = word.to_lowercase();
    if first_word {
      buf.push_str(&lowered);
      first_word = false;
    } else {
      capitalize_with(&lowered, buf);
    }
  });
}

pub fn to_pascal_case(text: &str, boundaries: &BoundarySet) -> Tendril {
  let mut res = Tendril::new();
  to_pascal_case_with(text, &mut res, boundaries);
  res
}

/// Pascal-cases the text: every word is capitalized, exception list ignored.
pub fn to_pascal_case_with(text: &str, buf: &mut Tendril, boundaries: &BoundarySet) {
  each_word_with(text, buf, boundaries, |word, buf| {
    capitalize_with(&word.to_lowercase(), buf);
  });
}

/// Walks `text` splitting it into boundary-delimited words. Each non-empty
/// word is handed to `emit`; boundary characters are appended verbatim as
/// they are encountered, so the original spacing and punctuation placement
/// survives, including leading and consecutive boundaries.
fn each_word_with(
  text: &str,
  buf: &mut Tendril,
  boundaries: &BoundarySet,
  mut emit: impl FnMut(&str, &mut Tendril),
) {
  let mut word = String::new();
  for ch in text.chars() {
    if boundaries.contains(ch) {
      if !word.is_empty() {
        emit(&word, buf);
        word.clear();
      }
      buf.push(ch);
    } else {
      word.push(ch);
    }
  }
  // Flush the trailing word after the last boundary.
  if !word.is_empty() {
    emit(&word, buf);
  }
}

/// Appends `word` with its first char uppercased.
/// Expects `word` to be lowercase already.
fn capitalize_with(word: &str, buf: &mut Tendril) {
  let mut chars = word.chars();
  if let Some(first) = chars.next() {
    buf.extend(first.to_uppercase());
    buf.push_str(chars.as_str());
  }
}
