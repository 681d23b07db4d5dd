//! Bump allocation of the AST
//!
//! All nodes of a tree are allocated in a single arena, and are freed together when
//! the arena is dropped.

use crate::ast::*;
use std::{error, fmt};

/// Arena allocator
pub type Allocator = bumpalo::Bump;
/// `Box` in the bump allocator
pub type Box<'allocator, T> = bumpalo::boxed::Box<'allocator, T>;
/// `Vec` in the bump allocator
pub type Vec<'allocator, T> = bumpalo::collections::Vec<'allocator, T>;
/// `String` in the bump allocator
pub type String<'allocator> = bumpalo::collections::String<'allocator>;

/// Create an arena with space for at least `capacity` bytes up front.
///
/// # Errors
/// If the memory for the arena could not be allocated.
pub fn try_with_capacity(capacity: usize) -> Result<Allocator, AllocationError> {
  Allocator::try_with_capacity(capacity).map_err(|_| AllocationError { capacity })
}

/// The arena could not be allocated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationError {
  /// The number of bytes which were requested
  pub capacity: usize,
}
impl fmt::Display for AllocationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Allocation Failure: could not allocate {} bytes for the syntax tree",
      self.capacity
    )
  }
}
impl error::Error for AllocationError {}

/// Creates nodes in an [`Allocator`].
///
/// Used by the parser to build the tree from the bottom up.
///
/// # Examples
/// ```
/// use minipas_syntax::{Allocator, Builder, ast::Operator};
///
/// let allocator = Allocator::new();
/// let builder = Builder::new(&allocator);
/// let sum = builder.binary(builder.integer(1), Operator::Plus, builder.integer(2));
///
/// assert_eq!(sum.children().count(), 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Builder<'ast> {
  allocator: &'ast Allocator,
}
impl<'ast> Builder<'ast> {
  /// Creates a builder which places nodes in the allocator
  #[must_use]
  pub fn new(allocator: &'ast Allocator) -> Self {
    Self { allocator }
  }

  /// The allocator the nodes are placed in
  #[must_use]
  pub fn allocator(&self) -> &'ast Allocator {
    self.allocator
  }

  /// Create a node of the given kind.
  ///
  /// It has [`Kind::arity`] child slots, all empty. Lists have no items, text is
  /// empty, and scalar payloads hold their default value.
  pub fn create(&self, kind: Kind) -> NodeBox<'ast> {
    self.node(Node::empty(kind, self.allocator))
  }

  /// Move a node into the allocator
  pub fn node(&self, node: Node<'ast>) -> NodeBox<'ast> {
    Box::new_in(node, self.allocator)
  }

  fn text(&self, text: &str) -> Text<'ast> {
    Text::from_str_in(text, self.allocator)
  }

  fn list(&self, items: impl IntoIterator<Item = NodeBox<'ast>>) -> List<'ast> {
    List {
      items: Vec::from_iter_in(items, self.allocator),
    }
  }

  /// The root of a program
  pub fn program(&self, declarations: Slot<'ast>, body: NodeBox<'ast>) -> NodeBox<'ast> {
    self.node(Node::Program(Program {
      declarations,
      body: Some(body),
    }))
  }

  /// A `var` section holding the given declarations
  pub fn var_section(
    &self,
    declarations: impl IntoIterator<Item = NodeBox<'ast>>,
  ) -> NodeBox<'ast> {
    self.node(Node::VarSection(self.list(declarations)))
  }

  /// A declaration of variables with a type, e.g. `a, b : integer`
  pub fn declaration(&self, identifiers: NodeBox<'ast>, type_: NodeBox<'ast>) -> NodeBox<'ast> {
    self.node(Node::Declaration(Declaration {
      identifiers: Some(identifiers),
      type_: Some(type_),
    }))
  }

  /// A list of identifiers from their names
  pub fn identifier_list<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> NodeBox<'ast> {
    let identifiers = names.into_iter().map(|name| self.identifier(name));
    self.node(Node::IdentifierList(self.list(identifiers)))
  }

  /// An identifier
  pub fn identifier(&self, name: &str) -> NodeBox<'ast> {
    self.node(Node::Identifier(self.text(name)))
  }

  /// A type which is one of the built in types
  pub fn simple_type(&self, name: TypeName) -> NodeBox<'ast> {
    self.node(Node::Type(Type {
      lower: None,
      upper: None,
      element: Some(self.node(Node::SimpleType(name))),
    }))
  }

  /// An array type, e.g. `array [1..10] of real`
  pub fn array_type(
    &self,
    lower: NodeBox<'ast>,
    upper: NodeBox<'ast>,
    element: TypeName,
  ) -> NodeBox<'ast> {
    self.node(Node::Type(Type {
      lower: Some(lower),
      upper: Some(upper),
      element: Some(self.node(Node::SimpleType(element))),
    }))
  }

  /// A `begin ... end` block of the given statements
  pub fn compound(&self, statements: impl IntoIterator<Item = NodeBox<'ast>>) -> NodeBox<'ast> {
    self.node(Node::Compound(Compound {
      statements: Some(self.statement_list(statements)),
    }))
  }

  /// A list of statements
  pub fn statement_list(
    &self,
    statements: impl IntoIterator<Item = NodeBox<'ast>>,
  ) -> NodeBox<'ast> {
    self.node(Node::StatementList(self.list(statements)))
  }

  /// Reading into a variable
  pub fn read(&self, argument: NodeBox<'ast>) -> NodeBox<'ast> {
    self.node(Node::Read(Io {
      argument: Some(argument),
    }))
  }

  /// Writing an expression, or a list of expressions
  pub fn write(&self, argument: NodeBox<'ast>) -> NodeBox<'ast> {
    self.node(Node::Write(Io {
      argument: Some(argument),
    }))
  }

  /// An assignment, with an optional index into the target
  pub fn assign(
    &self,
    target: NodeBox<'ast>,
    subscript: Slot<'ast>,
    value: NodeBox<'ast>,
  ) -> NodeBox<'ast> {
    self.node(Node::Assign(Assign {
      target: Some(target),
      subscript,
      value: Some(value),
    }))
  }

  /// A conditional, with an optional `else` branch
  pub fn if_(
    &self,
    condition: NodeBox<'ast>,
    then: NodeBox<'ast>,
    otherwise: Slot<'ast>,
  ) -> NodeBox<'ast> {
    self.node(Node::If(If {
      condition: Some(condition),
      then: Some(then),
      otherwise,
    }))
  }

  /// A while loop
  pub fn while_(&self, condition: NodeBox<'ast>, body: NodeBox<'ast>) -> NodeBox<'ast> {
    self.node(Node::While(While {
      condition: Some(condition),
      body: Some(body),
    }))
  }

  /// A for loop, counting from start to end in the given direction
  pub fn for_(
    &self,
    variable: NodeBox<'ast>,
    start: NodeBox<'ast>,
    direction: Direction,
    end: NodeBox<'ast>,
    body: NodeBox<'ast>,
  ) -> NodeBox<'ast> {
    self.node(Node::For(For {
      variable: Some(variable),
      start: Some(start),
      direction: Some(self.node(Node::Direction(direction))),
      end: Some(end),
      body: Some(body),
    }))
  }

  /// An expression with a binary operator, e.g. `1 + 2`
  pub fn binary(
    &self,
    left: NodeBox<'ast>,
    operator: Operator,
    right: NodeBox<'ast>,
  ) -> NodeBox<'ast> {
    self.node(Node::Expression(Expression {
      left: Some(left),
      operator: Some(self.node(Node::Operator(operator))),
      right: Some(right),
    }))
  }

  /// An expression without an operator, wrapping a single operand
  pub fn expression(&self, operand: NodeBox<'ast>) -> NodeBox<'ast> {
    self.node(Node::Expression(Expression {
      left: Some(operand),
      operator: None,
      right: None,
    }))
  }

  /// A comma separated list of expressions
  pub fn expression_list(
    &self,
    expressions: impl IntoIterator<Item = NodeBox<'ast>>,
  ) -> NodeBox<'ast> {
    self.node(Node::ExpressionList(self.list(expressions)))
  }

  /// Indexing into an array, e.g. `xs[i]`
  pub fn subscript(&self, identifier: NodeBox<'ast>, index: NodeBox<'ast>) -> NodeBox<'ast> {
    self.node(Node::Subscript(Subscript {
      identifier: Some(identifier),
      index: Some(index),
    }))
  }

  /// Logical negation, `not x`
  pub fn not(&self, operand: NodeBox<'ast>) -> NodeBox<'ast> {
    self.node(Node::Not(Unary {
      operand: Some(operand),
    }))
  }

  /// Arithmetic negation, `- x`
  pub fn negate(&self, operand: NodeBox<'ast>) -> NodeBox<'ast> {
    self.node(Node::Negate(Unary {
      operand: Some(operand),
    }))
  }

  /// An expression in parentheses, `(x)`
  pub fn group(&self, operand: NodeBox<'ast>) -> NodeBox<'ast> {
    self.node(Node::Group(Unary {
      operand: Some(operand),
    }))
  }

  /// A string literal, the text should include its quotes
  pub fn string(&self, text: &str) -> NodeBox<'ast> {
    self.node(Node::String(self.text(text)))
  }

  /// An integer literal
  pub fn integer(&self, value: i64) -> NodeBox<'ast> {
    self.node(Node::Integer(value))
  }

  /// A real literal.
  ///
  /// The value must be finite, a literal in source can never be infinite or NaN.
  /// Checked in debug builds.
  pub fn real(&self, value: f64) -> NodeBox<'ast> {
    debug_assert!(value.is_finite(), "real literal {value} is not finite");
    self.node(Node::Real(value))
  }

  /// A boolean literal
  pub fn boolean(&self, value: bool) -> NodeBox<'ast> {
    self.node(Node::Boolean(value))
  }
}
