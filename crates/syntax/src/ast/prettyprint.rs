//! Pretty-print the AST into a human readable tree, for debugging.
//!
//! Based upon this [blog post](https://www.georgevreilly.com/blog/2023/01/24/TreeInRust2PrintingTrees.html)

use super::{Kind, Node};
use std::fmt;

impl fmt::Display for Node<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    self.pretty(f, "", None, true)
  }
}

const OTHER_CHILD: &str = "│  ";
const OTHER_ENTRY: &str = "├─ ";
const FINAL_CHILD: &str = "   ";
const FINAL_ENTRY: &str = "╰─ ";

impl Node<'_> {
  fn pretty(
    &self,
    f: &mut fmt::Formatter,
    prefix: &str,
    slot: Option<&str>,
    last: bool,
  ) -> fmt::Result {
    let connector = if last { FINAL_ENTRY } else { OTHER_ENTRY };
    write!(f, "{prefix}{connector}")?;
    if let Some(slot) = slot {
      write!(f, "{slot}: ")?;
    }
    self.describe(f)?;
    writeln!(f)?;

    let kind = self.kind();
    let children: Vec<(Option<&str>, &Node)> = kind
      .slot_names()
      .iter()
      .zip(self.children())
      .filter_map(|(name, child)| Some((Some(*name), child?)))
      .chain(self.items().iter().map(|item| (None, &**item)))
      .collect();

    let Some(((last_slot, last_child), children)) = children.split_last() else {
      return Ok(());
    };

    let prefix = format!("{prefix}{}", if last { FINAL_CHILD } else { OTHER_CHILD });
    for (slot, child) in children {
      child.pretty(f, &prefix, *slot, false)?;
    }
    last_child.pretty(f, &prefix, *last_slot, true)
  }

  fn describe(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Identifier(name) => write!(f, "{} ({name})", Kind::Identifier),
      Self::String(text) => write!(f, "{} {text}", Kind::String),
      Self::SimpleType(name) => write!(f, "{} ({name})", Kind::SimpleType),
      Self::Direction(direction) => write!(f, "{} ({direction})", Kind::Direction),
      Self::Operator(operator) => write!(f, "{} ({operator})", Kind::Operator),
      Self::Integer(value) => write!(f, "{} ({value})", Kind::Integer),
      Self::Real(value) => write!(f, "{} ({value:?})", Kind::Real),
      Self::Boolean(value) => write!(f, "{} ({value})", Kind::Boolean),
      _ => write!(f, "{}", self.kind()),
    }
  }
}
