//! Layout options for printed source
use std::fmt::{self, Write};

/// How printed source is laid out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  /// Argument lists of `read` and `write` wider than this break onto one line each
  pub print_width: u16,
  /// One level of block nesting
  pub indentation: Indentation,
  /// What ends each printed line
  pub line_ending: LineEnding,
}
impl Default for Config {
  fn default() -> Self {
    Self {
      print_width: 80,
      indentation: Indentation::Space(2),
      line_ending: LineEnding::Native,
    }
  }
}

/// What a statement is indented by for each block it is nested in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indentation {
  /// A number of spaces per level
  Space(u16),
  /// A tab per level
  Tab,
}
impl Indentation {
  /// Columns a level takes up when measuring a line. A tab counts as two.
  pub(crate) fn width(self) -> u16 {
    match self {
      Self::Space(spaces) => spaces,
      Self::Tab => 2,
    }
  }

  pub(crate) fn write_levels(self, f: &mut fmt::Formatter<'_>, depth: u16) -> fmt::Result {
    match self {
      Self::Space(spaces) => {
        let columns = usize::from(spaces) * usize::from(depth);
        write!(f, "{:columns$}", "")
      }
      Self::Tab => (0..depth).try_for_each(|_| f.write_char('\t')),
    }
  }
}
impl From<u16> for Indentation {
  /// Spaces per level, where 0 means a tab
  fn from(spaces: u16) -> Self {
    match spaces {
      0 => Self::Tab,
      spaces => Self::Space(spaces),
    }
  }
}

/// What ends each printed line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
  /// `\n`
  LineFeed,
  /// `\r\n`
  CarriageReturnLineFeed,
  /// `\r\n` when printing on Windows, otherwise `\n`
  #[default]
  Native,
}
impl LineEnding {
  pub(crate) const fn as_str(self) -> &'static str {
    match self {
      Self::LineFeed => "\n",
      Self::CarriageReturnLineFeed => "\r\n",
      Self::Native if cfg!(windows) => "\r\n",
      Self::Native => "\n",
    }
  }
}
