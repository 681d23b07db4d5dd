//! # Declarations
//!
//! The program root, the `var` section and types.

use super::{Node, NodeBox, Slot};
use crate::allocator::{Allocator, Vec};
use std::fmt;

/// The root of a program
#[derive(Debug, Default)]
pub struct Program<'ast> {
  /// A [`Node::VarSection`], absent if nothing is declared
  pub declarations: Slot<'ast>,
  /// The main block of the program, a [`Node::Compound`]
  pub body: Slot<'ast>,
}
impl<'ast> Program<'ast> {
  /// The declarations of the `var` section
  #[must_use]
  pub fn declarations(&self) -> Option<&Node<'ast>> {
    self.declarations.as_deref()
  }
  /// The main block of the program
  #[must_use]
  pub fn body(&self) -> Option<&Node<'ast>> {
    self.body.as_deref()
  }
}

/// An ordered list of nodes, e.g. the statements of a block
#[derive(Debug)]
pub struct List<'ast> {
  /// The items of the list, in source order
  pub items: Vec<'ast, NodeBox<'ast>>,
}
impl<'ast> List<'ast> {
  /// Create an empty list in the allocator
  #[must_use]
  pub fn new_in(allocator: &'ast Allocator) -> Self {
    Self {
      items: Vec::new_in(allocator),
    }
  }

  /// How many items are in the list
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }
  /// Does the list have any items?
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// The items of the list
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Node<'ast>> + ExactSizeIterator {
    self.items.iter().map(|item| &**item)
  }
}

/// Variables declared with a type, e.g. `a, b : integer`
#[derive(Debug, Default)]
pub struct Declaration<'ast> {
  /// A [`Node::IdentifierList`] of the declared names
  pub identifiers: Slot<'ast>,
  /// The [`Node::Type`] of the variables
  pub type_: Slot<'ast>,
}
impl<'ast> Declaration<'ast> {
  /// The names being declared
  #[must_use]
  pub fn identifiers(&self) -> Option<&Node<'ast>> {
    self.identifiers.as_deref()
  }
  /// The type of the declared variables
  #[must_use]
  pub fn type_(&self) -> Option<&Node<'ast>> {
    self.type_.as_deref()
  }
}

/// A type, e.g. `integer`, `array [1..10] of real`
///
/// If the bounds are present, it is an array of the element type.
#[derive(Debug, Default)]
pub struct Type<'ast> {
  /// The lower bound of an array
  pub lower: Slot<'ast>,
  /// The upper bound of an array
  pub upper: Slot<'ast>,
  /// The type, or the element type of an array, a [`Node::SimpleType`]
  pub element: Slot<'ast>,
}
impl<'ast> Type<'ast> {
  /// The lower bound of an array type
  #[must_use]
  pub fn lower(&self) -> Option<&Node<'ast>> {
    self.lower.as_deref()
  }
  /// The upper bound of an array type
  #[must_use]
  pub fn upper(&self) -> Option<&Node<'ast>> {
    self.upper.as_deref()
  }
  /// The element type
  #[must_use]
  pub fn element(&self) -> Option<&Node<'ast>> {
    self.element.as_deref()
  }

  /// Is the type an array?
  #[must_use]
  pub fn is_array(&self) -> bool {
    self.lower.is_some()
  }
}

/// The built in types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeName {
  /// `integer`
  #[default]
  Integer,
  /// `real`
  Real,
  /// `boolean`
  Boolean,
}
impl TypeName {
  /// The keyword for the type
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Integer => "integer",
      Self::Real => "real",
      Self::Boolean => "boolean",
    }
  }
}
impl fmt::Display for TypeName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
