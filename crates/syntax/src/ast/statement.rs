//! # Statements

use super::{Node, Slot};
use std::fmt;

/// A block of statements, e.g. `begin x := 1; write(x) end`
#[derive(Debug, Default)]
pub struct Compound<'ast> {
  /// A [`Node::StatementList`]
  pub statements: Slot<'ast>,
}
impl<'ast> Compound<'ast> {
  /// The statements in the block
  #[must_use]
  pub fn statements(&self) -> Option<&Node<'ast>> {
    self.statements.as_deref()
  }
}

/// Reading or writing, e.g. `read(x)`, `write(x, y)`
#[derive(Debug, Default)]
pub struct Io<'ast> {
  /// The expression, or [`Node::ExpressionList`], inside the brackets
  pub argument: Slot<'ast>,
}
impl<'ast> Io<'ast> {
  /// The argument of the call
  #[must_use]
  pub fn argument(&self) -> Option<&Node<'ast>> {
    self.argument.as_deref()
  }
}

/// An assignment, e.g. `x := 1`, `xs[i] := 1`
#[derive(Debug, Default)]
pub struct Assign<'ast> {
  /// The variable being assigned to
  pub target: Slot<'ast>,
  /// The index into the variable, if it is an array
  pub subscript: Slot<'ast>,
  /// The value being assigned
  pub value: Slot<'ast>,
}
impl<'ast> Assign<'ast> {
  /// The variable being assigned to
  #[must_use]
  pub fn target(&self) -> Option<&Node<'ast>> {
    self.target.as_deref()
  }
  /// The index into the variable
  #[must_use]
  pub fn subscript(&self) -> Option<&Node<'ast>> {
    self.subscript.as_deref()
  }
  /// The value being assigned
  #[must_use]
  pub fn value(&self) -> Option<&Node<'ast>> {
    self.value.as_deref()
  }
}

/// A conditional, e.g. `if x then y else z`
#[derive(Debug, Default)]
pub struct If<'ast> {
  /// The guard
  pub condition: Slot<'ast>,
  /// The statement run if the guard is true
  pub then: Slot<'ast>,
  /// The statement run if the guard is false
  pub otherwise: Slot<'ast>,
}
impl<'ast> If<'ast> {
  /// The guard of the conditional
  #[must_use]
  pub fn condition(&self) -> Option<&Node<'ast>> {
    self.condition.as_deref()
  }
  /// The statement run if the guard is true
  #[must_use]
  pub fn then(&self) -> Option<&Node<'ast>> {
    self.then.as_deref()
  }
  /// The `else` branch
  #[must_use]
  pub fn otherwise(&self) -> Option<&Node<'ast>> {
    self.otherwise.as_deref()
  }
}

/// A while loop, e.g. `while x do y`
#[derive(Debug, Default)]
pub struct While<'ast> {
  /// The guard, checked before each iteration
  pub condition: Slot<'ast>,
  /// The loop body
  pub body: Slot<'ast>,
}
impl<'ast> While<'ast> {
  /// The guard of the loop
  #[must_use]
  pub fn condition(&self) -> Option<&Node<'ast>> {
    self.condition.as_deref()
  }
  /// The loop body
  #[must_use]
  pub fn body(&self) -> Option<&Node<'ast>> {
    self.body.as_deref()
  }
}

/// A for loop, e.g. `for i := 10 downto 1 do x`
#[derive(Debug, Default)]
pub struct For<'ast> {
  /// The loop variable
  pub variable: Slot<'ast>,
  /// The initial value
  pub start: Slot<'ast>,
  /// A [`Node::Direction`], counting up or down
  pub direction: Slot<'ast>,
  /// The final value
  pub end: Slot<'ast>,
  /// The loop body
  pub body: Slot<'ast>,
}
impl<'ast> For<'ast> {
  /// The loop variable
  #[must_use]
  pub fn variable(&self) -> Option<&Node<'ast>> {
    self.variable.as_deref()
  }
  /// The initial value
  #[must_use]
  pub fn start(&self) -> Option<&Node<'ast>> {
    self.start.as_deref()
  }
  /// The direction marker
  #[must_use]
  pub fn direction(&self) -> Option<&Node<'ast>> {
    self.direction.as_deref()
  }
  /// The final value
  #[must_use]
  pub fn end(&self) -> Option<&Node<'ast>> {
    self.end.as_deref()
  }
  /// The loop body
  #[must_use]
  pub fn body(&self) -> Option<&Node<'ast>> {
    self.body.as_deref()
  }
}

/// Which way a for loop counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
  /// Ascending, `to`
  #[default]
  To,
  /// Descending, `downto`
  Downto,
}
impl Direction {
  /// The keyword for the direction
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::To => "to",
      Self::Downto => "downto",
    }
  }
}
impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
