//! # Expressions

use super::{Node, Slot};
use std::fmt;

/// An expression, e.g. `1 + 2`
///
/// A simple expression only fills the left slot.
#[derive(Debug, Default)]
pub struct Expression<'ast> {
  /// The left hand side of the operation
  pub left: Slot<'ast>,
  /// A [`Node::Operator`]
  pub operator: Slot<'ast>,
  /// The right hand side of the operation
  pub right: Slot<'ast>,
}
impl<'ast> Expression<'ast> {
  /// The left hand side of the operation
  #[must_use]
  pub fn left(&self) -> Option<&Node<'ast>> {
    self.left.as_deref()
  }
  /// The operator node
  #[must_use]
  pub fn operator(&self) -> Option<&Node<'ast>> {
    self.operator.as_deref()
  }
  /// The right hand side of the operation
  #[must_use]
  pub fn right(&self) -> Option<&Node<'ast>> {
    self.right.as_deref()
  }
}

/// Indexing into an array, e.g. `xs[i + 1]`
#[derive(Debug, Default)]
pub struct Subscript<'ast> {
  /// The array being indexed
  pub identifier: Slot<'ast>,
  /// The index expression
  pub index: Slot<'ast>,
}
impl<'ast> Subscript<'ast> {
  /// The array being indexed
  #[must_use]
  pub fn identifier(&self) -> Option<&Node<'ast>> {
    self.identifier.as_deref()
  }
  /// The index expression
  #[must_use]
  pub fn index(&self) -> Option<&Node<'ast>> {
    self.index.as_deref()
  }
}

/// A prefix form wrapping a single operand: `not x`, `- x` or `(x)`
#[derive(Debug, Default)]
pub struct Unary<'ast> {
  /// The wrapped expression
  pub operand: Slot<'ast>,
}
impl<'ast> Unary<'ast> {
  /// The wrapped expression
  #[must_use]
  pub fn operand(&self) -> Option<&Node<'ast>> {
    self.operand.as_deref()
  }
}

/// A binary operator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operator {
  /// `<`
  Lt,
  /// `<=`
  Le,
  /// `>`
  Gt,
  /// `>=`
  Ge,
  /// `=`
  Eq,
  /// `<>`
  Ne,
  /// `+`
  #[default]
  Plus,
  /// `-`
  Minus,
  /// `or`
  Or,
  /// `*`
  Mul,
  /// `/`
  Slash,
  /// `div`
  Div,
  /// `mod`
  Mod,
  /// `and`
  And,
}
impl Operator {
  /// The symbol of the operator
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Lt => "<",
      Self::Le => "<=",
      Self::Gt => ">",
      Self::Ge => ">=",
      Self::Eq => "=",
      Self::Ne => "<>",
      Self::Plus => "+",
      Self::Minus => "-",
      Self::Or => "or",
      Self::Mul => "*",
      Self::Slash => "/",
      Self::Div => "div",
      Self::Mod => "mod",
      Self::And => "and",
    }
  }
}
impl fmt::Display for Operator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
