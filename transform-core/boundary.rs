use smallvec::SmallVec;

/// Characters that delimit a word no matter what the user configures.
pub const BUILTIN_BOUNDARIES: [char; 2] = [' ', '\t'];

/// The set of characters that terminate a word for word-selection and
/// title-case splitting.
///
/// The set is the pure union of the user-configured characters and the
/// built-in space/tab pair, deduplicated at construction time. It is never
/// mutated afterwards; callers that need a different set build a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundarySet {
  chars: SmallVec<[char; 8]>,
}

impl BoundarySet {
  /// Builds the effective set from user-configured characters.
  /// Space and tab are always included; duplicates are dropped.
  pub fn new(user_chars: impl IntoIterator<Item = char>) -> Self {
    let mut chars = SmallVec::from_slice(&BUILTIN_BOUNDARIES);
    for ch in user_chars {
      if !chars.contains(&ch) {
        chars.push(ch);
      }
    }
    Self { chars }
  }

  /// The built-in set only: space and tab.
  pub fn builtin() -> Self {
    Self {
      chars: SmallVec::from_slice(&BUILTIN_BOUNDARIES),
    }
  }

  #[inline]
  #[must_use]
  pub fn contains(&self, ch: char) -> bool {
    self.chars.contains(&ch)
  }

  pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
    self.chars.iter().copied()
  }

  /// Number of distinct boundary characters, built-ins included.
  /// Never less than two: space and tab are always present.
  pub fn len(&self) -> usize {
    self.chars.len()
  }
}

impl Default for BoundarySet {
  fn default() -> Self {
    Self::builtin()
  }
}

impl FromIterator<char> for BoundarySet {
  fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
    Self::new(iter)
  }
}
