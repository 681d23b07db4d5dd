//! # AST
//!
//! The definition of the Abstract Syntax Tree (AST)

use crate::allocator::{Allocator, Box, String, Vec};
use std::fmt;

pub mod declaration;
pub mod expression;
mod prettyprint;
pub mod statement;

pub use declaration::{Declaration, List, Program, Type, TypeName};
pub use expression::{Expression, Operator, Subscript, Unary};
pub use statement::{Assign, Compound, Direction, For, If, Io, While};

/// A node allocated in the [`Allocator`]
pub type NodeBox<'ast> = Box<'ast, Node<'ast>>;
/// A child slot of a node, which may be empty
pub type Slot<'ast> = Option<NodeBox<'ast>>;
/// Text owned by an identifier or string node
pub type Text<'ast> = String<'ast>;

/// A node of the tree, one variant for each production of the grammar
#[must_use]
#[derive(Debug)]
pub enum Node<'ast> {
  /// The root of a program, e.g. `program parsed_prog; var ... begin ... end.`
  Program(Program<'ast>),
  /// The declarations of a `var` section
  VarSection(List<'ast>),
  /// Variables declared with a type, e.g. `a, b : integer`
  Declaration(Declaration<'ast>),
  /// A comma separated list of identifiers, e.g. `a, b, c`
  IdentifierList(List<'ast>),
  /// An identifier, e.g. `total`
  Identifier(Text<'ast>),
  /// A type, either simple or an array, e.g. `array [1..10] of real`
  Type(Type<'ast>),
  /// The name of a built in type, e.g. `integer`
  SimpleType(TypeName),
  /// A block of statements, e.g. `begin ... end`
  Compound(Compound<'ast>),
  /// The statements of a block, separated by semicolons
  StatementList(List<'ast>),
  /// Reading input, e.g. `read(x)`
  Read(Io<'ast>),
  /// Writing output, e.g. `write(x)`
  Write(Io<'ast>),
  /// An assignment, e.g. `x := 1`, `xs[i] := 1`
  Assign(Assign<'ast>),
  /// A conditional, e.g. `if x then y else z`
  If(If<'ast>),
  /// A while loop, e.g. `while x do y`
  While(While<'ast>),
  /// A for loop, e.g. `for i := 1 to 10 do x`
  For(For<'ast>),
  /// The direction of a for loop, `to` or `downto`
  Direction(Direction),
  /// An expression, possibly with a binary operator, e.g. `1 + 2`
  Expression(Expression<'ast>),
  /// A comma separated list of expressions, e.g. `x, y + 1`
  ExpressionList(List<'ast>),
  /// A binary operator, e.g. `+`, `div`
  Operator(Operator),
  /// Indexing into an array, e.g. `xs[i]`
  Subscript(Subscript<'ast>),
  /// Logical negation, e.g. `not x`
  Not(Unary<'ast>),
  /// Arithmetic negation, e.g. `- x`
  Negate(Unary<'ast>),
  /// An expression in parentheses, e.g. `(1 + 2)`
  Group(Unary<'ast>),
  /// A string literal, stored as written, e.g. `'hello'`
  String(Text<'ast>),
  /// An integer literal, e.g. `42`
  Integer(i64),
  /// A real literal, e.g. `1.5`. Always finite.
  Real(f64),
  /// A boolean literal, `true` or `false`
  Boolean(bool),
}

/// The kind of a [`Node`], which grammar production it represents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
  /// [`Node::Program`]
  Program,
  /// [`Node::VarSection`]
  VarSection,
  /// [`Node::Declaration`]
  Declaration,
  /// [`Node::IdentifierList`]
  IdentifierList,
  /// [`Node::Identifier`]
  Identifier,
  /// [`Node::Type`]
  Type,
  /// [`Node::SimpleType`]
  SimpleType,
  /// [`Node::Compound`]
  Compound,
  /// [`Node::StatementList`]
  StatementList,
  /// [`Node::Read`]
  Read,
  /// [`Node::Write`]
  Write,
  /// [`Node::Assign`]
  Assign,
  /// [`Node::If`]
  If,
  /// [`Node::While`]
  While,
  /// [`Node::For`]
  For,
  /// [`Node::Direction`]
  Direction,
  /// [`Node::Expression`]
  Expression,
  /// [`Node::ExpressionList`]
  ExpressionList,
  /// [`Node::Operator`]
  Operator,
  /// [`Node::Subscript`]
  Subscript,
  /// [`Node::Not`]
  Not,
  /// [`Node::Negate`]
  Negate,
  /// [`Node::Group`]
  Group,
  /// [`Node::String`]
  String,
  /// [`Node::Integer`]
  Integer,
  /// [`Node::Real`]
  Real,
  /// [`Node::Boolean`]
  Boolean,
}
impl Kind {
  /// Every kind of node
  pub const ALL: [Self; 27] = [
    Self::Program,
    Self::VarSection,
    Self::Declaration,
    Self::IdentifierList,
    Self::Identifier,
    Self::Type,
    Self::SimpleType,
    Self::Compound,
    Self::StatementList,
    Self::Read,
    Self::Write,
    Self::Assign,
    Self::If,
    Self::While,
    Self::For,
    Self::Direction,
    Self::Expression,
    Self::ExpressionList,
    Self::Operator,
    Self::Subscript,
    Self::Not,
    Self::Negate,
    Self::Group,
    Self::String,
    Self::Integer,
    Self::Real,
    Self::Boolean,
  ];

  /// The names of the child slots a node of this kind owns, in order
  #[must_use]
  pub const fn slot_names(self) -> &'static [&'static str] {
    match self {
      Self::Program => &["Declarations", "Body"],
      Self::Declaration => &["Identifiers", "Type"],
      Self::Type => &["Lower", "Upper", "Element"],
      Self::Compound => &["Statements"],
      Self::Read | Self::Write => &["Argument"],
      Self::Assign => &["Target", "Subscript", "Value"],
      Self::If => &["Condition", "Then", "Otherwise"],
      Self::While => &["Condition", "Body"],
      Self::For => &["Variable", "Start", "Direction", "End", "Body"],
      Self::Expression => &["Left", "Operator", "Right"],
      Self::Subscript => &["Identifier", "Index"],
      Self::Not | Self::Negate | Self::Group => &["Operand"],
      Self::VarSection
      | Self::IdentifierList
      | Self::Identifier
      | Self::SimpleType
      | Self::StatementList
      | Self::Direction
      | Self::ExpressionList
      | Self::Operator
      | Self::String
      | Self::Integer
      | Self::Real
      | Self::Boolean => &[],
    }
  }

  /// How many child slots a node of this kind owns
  #[must_use]
  pub const fn arity(self) -> usize {
    self.slot_names().len()
  }

  /// Does a node of this kind own a text payload?
  #[must_use]
  pub const fn owns_text(self) -> bool {
    matches!(self, Self::Identifier | Self::String)
  }

  /// Does a node of this kind hold an ordered list of items?
  #[must_use]
  pub const fn is_list(self) -> bool {
    matches!(
      self,
      Self::VarSection | Self::IdentifierList | Self::StatementList | Self::ExpressionList
    )
  }
}
impl fmt::Display for Kind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Self::Program => "Program",
      Self::VarSection => "Var Section",
      Self::Declaration => "Declaration",
      Self::IdentifierList => "Identifier List",
      Self::Identifier => "Identifier",
      Self::Type => "Type",
      Self::SimpleType => "Simple Type",
      Self::Compound => "Compound",
      Self::StatementList => "Statement List",
      Self::Read => "Read",
      Self::Write => "Write",
      Self::Assign => "Assign",
      Self::If => "If",
      Self::While => "While",
      Self::For => "For",
      Self::Direction => "Direction",
      Self::Expression => "Expression",
      Self::ExpressionList => "Expression List",
      Self::Operator => "Operator",
      Self::Subscript => "Subscript",
      Self::Not => "Not",
      Self::Negate => "Negate",
      Self::Group => "Group",
      Self::String => "String",
      Self::Integer => "Integer",
      Self::Real => "Real",
      Self::Boolean => "Boolean",
    };

    f.write_str(name)
  }
}

impl<'ast> Node<'ast> {
  /// A node of the given kind, with every slot empty and a default payload
  pub fn empty(kind: Kind, allocator: &'ast Allocator) -> Self {
    match kind {
      Kind::Program => Self::Program(Program::default()),
      Kind::VarSection => Self::VarSection(List::new_in(allocator)),
      Kind::Declaration => Self::Declaration(Declaration::default()),
      Kind::IdentifierList => Self::IdentifierList(List::new_in(allocator)),
      Kind::Identifier => Self::Identifier(Text::new_in(allocator)),
      Kind::Type => Self::Type(Type::default()),
      Kind::SimpleType => Self::SimpleType(TypeName::default()),
      Kind::Compound => Self::Compound(Compound::default()),
      Kind::StatementList => Self::StatementList(List::new_in(allocator)),
      Kind::Read => Self::Read(Io::default()),
      Kind::Write => Self::Write(Io::default()),
      Kind::Assign => Self::Assign(Assign::default()),
      Kind::If => Self::If(If::default()),
      Kind::While => Self::While(While::default()),
      Kind::For => Self::For(For::default()),
      Kind::Direction => Self::Direction(Direction::default()),
      Kind::Expression => Self::Expression(Expression::default()),
      Kind::ExpressionList => Self::ExpressionList(List::new_in(allocator)),
      Kind::Operator => Self::Operator(Operator::default()),
      Kind::Subscript => Self::Subscript(Subscript::default()),
      Kind::Not => Self::Not(Unary::default()),
      Kind::Negate => Self::Negate(Unary::default()),
      Kind::Group => Self::Group(Unary::default()),
      Kind::String => Self::String(Text::new_in(allocator)),
      Kind::Integer => Self::Integer(0),
      Kind::Real => Self::Real(0.0),
      Kind::Boolean => Self::Boolean(false),
    }
  }

  /// The kind of the node
  #[must_use]
  pub fn kind(&self) -> Kind {
    match self {
      Self::Program(_) => Kind::Program,
      Self::VarSection(_) => Kind::VarSection,
      Self::Declaration(_) => Kind::Declaration,
      Self::IdentifierList(_) => Kind::IdentifierList,
      Self::Identifier(_) => Kind::Identifier,
      Self::Type(_) => Kind::Type,
      Self::SimpleType(_) => Kind::SimpleType,
      Self::Compound(_) => Kind::Compound,
      Self::StatementList(_) => Kind::StatementList,
      Self::Read(_) => Kind::Read,
      Self::Write(_) => Kind::Write,
      Self::Assign(_) => Kind::Assign,
      Self::If(_) => Kind::If,
      Self::While(_) => Kind::While,
      Self::For(_) => Kind::For,
      Self::Direction(_) => Kind::Direction,
      Self::Expression(_) => Kind::Expression,
      Self::ExpressionList(_) => Kind::ExpressionList,
      Self::Operator(_) => Kind::Operator,
      Self::Subscript(_) => Kind::Subscript,
      Self::Not(_) => Kind::Not,
      Self::Negate(_) => Kind::Negate,
      Self::Group(_) => Kind::Group,
      Self::String(_) => Kind::String,
      Self::Integer(_) => Kind::Integer,
      Self::Real(_) => Kind::Real,
      Self::Boolean(_) => Kind::Boolean,
    }
  }

  /// The child in the given slot, if the slot exists and is filled
  #[must_use]
  pub fn child(&self, index: usize) -> Option<&Node<'ast>> {
    self.slot(index).and_then(Option::as_deref)
  }

  /// Every child slot of the node in order, exactly [`Kind::arity`] of them
  pub fn children(&self) -> impl ExactSizeIterator<Item = Option<&Node<'ast>>> {
    (0..self.kind().arity()).map(|index| self.child(index))
  }

  /// Take the child out of the given slot, leaving it empty
  pub fn take_child(&mut self, index: usize) -> Slot<'ast> {
    self.slot_mut(index).and_then(Option::take)
  }

  /// The items of a list node, empty for any other kind
  #[must_use]
  pub fn items(&self) -> &[NodeBox<'ast>] {
    match self {
      Self::VarSection(list)
      | Self::IdentifierList(list)
      | Self::StatementList(list)
      | Self::ExpressionList(list) => list.items.as_slice(),
      _ => &[],
    }
  }

  /// The items of a list node, if the node is a list
  pub fn items_mut(&mut self) -> Option<&mut Vec<'ast, NodeBox<'ast>>> {
    match self {
      Self::VarSection(list)
      | Self::IdentifierList(list)
      | Self::StatementList(list)
      | Self::ExpressionList(list) => Some(&mut list.items),
      _ => None,
    }
  }

  /// The text of an identifier or string node
  #[must_use]
  pub fn text(&self) -> Option<&str> {
    match self {
      Self::Identifier(text) | Self::String(text) => Some(text.as_str()),
      _ => None,
    }
  }
}

macro_rules! slot_table {
  ($($variant:ident => [$($field:ident),+]),* $(,)?) => {
    impl<'ast> Node<'ast> {
      fn slot(&self, index: usize) -> Option<&Slot<'ast>> {
        match self {
          $(Self::$variant(x) => [$(&x.$field),+].into_iter().nth(index),)*
          _ => None,
        }
      }

      fn slot_mut(&mut self, index: usize) -> Option<&mut Slot<'ast>> {
        match self {
          $(Self::$variant(x) => [$(&mut x.$field),+].into_iter().nth(index),)*
          _ => None,
        }
      }
    }
  };
}

slot_table! {
  Program => [declarations, body],
  Declaration => [identifiers, type_],
  Type => [lower, upper, element],
  Compound => [statements],
  Read => [argument],
  Write => [argument],
  Assign => [target, subscript, value],
  If => [condition, then, otherwise],
  While => [condition, body],
  For => [variable, start, direction, end, body],
  Expression => [left, operator, right],
  Subscript => [identifier, index],
  Not => [operand],
  Negate => [operand],
  Group => [operand],
}
