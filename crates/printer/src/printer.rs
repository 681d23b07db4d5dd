use crate::config::{Config, Indentation, LineEnding};
use minipas_syntax::{
  Allocator, Node, NodeBox,
  allocator::{Box, Vec},
};
use std::{fmt, mem};

/// A part of the tree which can be printed as source
pub trait Renderable<'a> {
  /// Describe how to print it, before line breaks are decided
  fn render(&'a self, p: &Printer<'a>) -> IR<'a>;
}

/// Builds the [`IR`] for a tree in its own arena, then lays it out
pub struct Printer<'a> {
  pub(crate) config: Config,
  pub(crate) allocator: &'a Allocator,
}
impl<'a> Printer<'a> {
  pub(crate) fn new(config: Config, allocator: &'a Allocator) -> Self {
    Self { config, allocator }
  }

  /// The source for the node and everything below it
  pub(crate) fn print<'ast: 'a>(&self, node: Option<&'a Node<'ast>>) -> String {
    let ir = self.node(node);
    let layout = ir.layout(0, 0, true, self.config, self.allocator);
    format!("{layout}")
  }

  /// The representation of a child, nothing if it is absent
  pub(crate) fn node<'ast: 'a>(&self, node: Option<&'a Node<'ast>>) -> IR<'a> {
    node.map(|node| node.render(self)).unwrap_or_default()
  }

  /// Text which is not borrowed from the tree, e.g. a formatted number
  pub(crate) fn display(&self, value: impl fmt::Display) -> IR<'a> {
    IR::Text(bumpalo::format!(in self.allocator, "{}", value).into_bump_str())
  }

  /// Render each item, with a separator between them
  pub(crate) fn join<'ast: 'a>(
    &self,
    items: &'a [NodeBox<'ast>],
    separator: impl Fn() -> IR<'a>,
  ) -> IR<'a> {
    self.concat_iterator(items.iter().enumerate().map(|(index, item)| {
      if index == 0 {
        item.render(self)
      } else {
        self.concat([separator(), item.render(self)])
      }
    }))
  }

  /// Lines broken inside these pieces are indented a level deeper
  pub(crate) fn indent<const N: usize>(&self, ir: [IR<'a>; N]) -> IR<'a> {
    IR::Indent(Box::new_in(self.concat(ir), self.allocator))
  }

  /// Keep these pieces on one line if they fit
  pub(crate) fn group<const N: usize>(&self, ir: [IR<'a>; N]) -> IR<'a> {
    IR::Group(Box::new_in(self.concat(ir), self.allocator))
  }

  pub(crate) fn concat<const N: usize>(&self, mut ir: [IR<'a>; N]) -> IR<'a> {
    match N {
      0 => IR::Empty,
      1 => mem::take(&mut ir[0]),
      _ => IR::Concat(Vec::from_iter_in(ir, self.allocator)),
    }
  }

  pub(crate) fn concat_iterator(&self, ir: impl Iterator<Item = IR<'a>>) -> IR<'a> {
    IR::Concat(Vec::from_iter_in(ir, self.allocator))
  }
}

/// Printed source before the line breaks are decided
#[derive(Debug, Default)]
pub enum IR<'a> {
  /// Nothing, e.g. an absent child
  #[default]
  Empty,
  /// Text which never contains a line break
  Text(&'a str),
  /// Breaks the line if the enclosing group is too wide, otherwise nothing
  Line,
  /// Always breaks the line, e.g. between statements
  AlwaysLine,
  /// Breaks the line if the enclosing group is too wide, otherwise a space
  LineOrSpace,
  /// Pieces printed one after another
  Concat(Vec<'a, IR<'a>>),
  /// Lines broken inside are indented one level deeper
  Indent(Box<'a, IR<'a>>),
  /// Printed flat if it fits on the current line, otherwise its lines break
  Group(Box<'a, IR<'a>>),
}
impl<'a> IR<'a> {
  fn forces_break(&self) -> bool {
    match self {
      IR::AlwaysLine => true,
      IR::Empty | IR::Text(_) | IR::Line | IR::LineOrSpace => false,
      IR::Concat(items) => items.iter().any(IR::forces_break),
      IR::Indent(ir) | IR::Group(ir) => ir.forces_break(),
    }
  }

  /// Decide the line breaks, starting `column` characters into a line at the given
  /// nesting depth. `flat` is whether the enclosing group fitted.
  fn layout(
    &self,
    column: u16,
    depth: u16,
    flat: bool,
    config: Config,
    allocator: &'a Allocator,
  ) -> Layout<'a> {
    match self {
      IR::Empty => Layout::Empty,
      IR::Line if flat => Layout::Empty,
      IR::Text(text) => Layout::Text(text),
      IR::LineOrSpace if flat => Layout::Text(" "),
      IR::Line | IR::AlwaysLine | IR::LineOrSpace => Layout::Break {
        depth,
        indentation: config.indentation,
        line_ending: config.line_ending,
      },

      IR::Indent(ir) => ir.layout(column, depth + 1, flat, config, allocator),
      IR::Concat(items) => {
        let mut sequence = Vec::with_capacity_in(items.len(), allocator);
        let mut column = column;

        for item in items {
          let item = item.layout(column, depth, flat, config, allocator);
          column = if item.breaks() {
            item.last_line_width()
          } else {
            column.saturating_add(item.first_line_width())
          };
          sequence.push(item);
        }

        Layout::Sequence(sequence)
      }
      IR::Group(ir) => {
        if !ir.forces_break() {
          let flat = ir.layout(column, depth, true, config, allocator);
          if flat.fits(config.print_width, column) {
            return flat;
          }
        }

        ir.layout(column, depth, false, config, allocator)
      }
    }
  }
}

/// Printed source with every line break decided
#[derive(Debug)]
enum Layout<'a> {
  Empty,
  Text(&'a str),
  /// A line ending, then the indentation for the next line
  Break {
    depth: u16,
    indentation: Indentation,
    line_ending: LineEnding,
  },
  Sequence(Vec<'a, Layout<'a>>),
}
impl Layout<'_> {
  /// Does the first line fit in what is left of a line already `column` wide?
  fn fits(&self, print_width: u16, column: u16) -> bool {
    column <= print_width && self.first_line_width() <= print_width - column
  }

  fn first_line_width(&self) -> u16 {
    match self {
      Layout::Empty => 0,
      Layout::Text(text) => u16::try_from(text.len()).unwrap_or(u16::MAX),
      Layout::Break { .. } => 0,
      Layout::Sequence(items) => {
        let mut width: u16 = 0;
        for item in items {
          width = width.saturating_add(item.first_line_width());
          if item.breaks() {
            break;
          }
        }
        width
      }
    }
  }

  fn last_line_width(&self) -> u16 {
    match self {
      Layout::Empty => 0,
      Layout::Text(text) => u16::try_from(text.len()).unwrap_or(u16::MAX),
      Layout::Break {
        depth, indentation, ..
      } => indentation.width().saturating_mul(*depth),
      Layout::Sequence(items) => {
        let mut width: u16 = 0;
        for item in items.iter().rev() {
          width = width.saturating_add(item.last_line_width());
          if item.breaks() {
            break;
          }
        }
        width
      }
    }
  }

  fn breaks(&self) -> bool {
    match self {
      Layout::Break { .. } => true,
      Layout::Sequence(items) => items.iter().any(Layout::breaks),
      Layout::Empty | Layout::Text(_) => false,
    }
  }
}
impl fmt::Display for Layout<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Empty => Ok(()),
      Self::Text(text) => f.write_str(text),
      Self::Break {
        depth,
        indentation,
        line_ending,
      } => {
        f.write_str(line_ending.as_str())?;
        indentation.write_levels(f, *depth)
      }
      Self::Sequence(items) => items.iter().try_for_each(|item| fmt::Display::fmt(item, f)),
    }
  }
}
