//! Pure text-transformation core: boundary-delimited case conversion and
//! word/selection resolution. Host-agnostic; everything here is a total
//! function over in-memory text and positions.

use smartstring::{LazyCompact, SmartString};

pub mod boundary;
pub mod case;
pub mod position;
pub mod resolve;

/// Inline-small string used for resolved and transformed text.
pub type Tendril = SmartString<LazyCompact>;
