use super::printer::{IR, Printer, Renderable};
use minipas_syntax::ast::*;

/// The name given to every printed program
pub const PROGRAM_NAME: &str = "parsed_prog";

impl<'a, 'ast: 'a> Renderable<'a> for Node<'ast> {
  fn render(&'a self, p: &Printer<'a>) -> IR<'a> {
    match self {
      Node::Program(program) => program.render(p),
      Node::VarSection(list) => p.concat_iterator(list.iter().enumerate().map(|(index, declaration)| {
        let line = if index == 0 { IR::Empty } else { IR::AlwaysLine };
        p.concat([line, declaration.render(p), IR::Text(";")])
      })),
      Node::Declaration(declaration) => declaration.render(p),
      Node::IdentifierList(list) => p.join(&list.items, || IR::Text(", ")),
      Node::Identifier(text) | Node::String(text) => IR::Text(text.as_str()),
      Node::Type(type_) => type_.render(p),
      Node::SimpleType(name) => IR::Text(name.as_str()),
      Node::Compound(compound) => compound.render(p),
      Node::StatementList(list) => p.join(&list.items, || p.concat([IR::Text(";"), IR::AlwaysLine])),
      Node::Read(io) => call(p, "read", io),
      Node::Write(io) => call(p, "write", io),
      Node::Assign(assign) => assign.render(p),
      Node::If(if_) => if_.render(p),
      Node::While(while_) => while_.render(p),
      Node::For(for_) => for_.render(p),
      Node::Direction(Direction::To) => IR::Text(" to "),
      Node::Direction(Direction::Downto) => IR::Text(" downto "),
      Node::Expression(expression) => expression.render(p),
      Node::ExpressionList(list) => p.join(&list.items, || p.concat([IR::Text(","), IR::LineOrSpace])),
      Node::Operator(operator) => p.concat([IR::Text(" "), IR::Text(operator.as_str()), IR::Text(" ")]),
      Node::Subscript(subscript) => subscript.render(p),
      Node::Not(unary) => p.concat([IR::Text("not "), p.node(unary.operand())]),
      Node::Negate(unary) => p.concat([IR::Text("- "), p.node(unary.operand())]),
      Node::Group(unary) => p.concat([IR::Text("("), p.node(unary.operand()), IR::Text(")")]),
      Node::Integer(value) => p.display(value),
      Node::Real(value) => p.display(format_args!("{value:?}")),
      Node::Boolean(true) => IR::Text("true"),
      Node::Boolean(false) => IR::Text("false"),
    }
  }
}

/// A read or write statement, e.g. `write(a, b)`
fn call<'a, 'ast: 'a>(p: &Printer<'a>, name: &'static str, io: &'a Io<'ast>) -> IR<'a> {
  p.group([
    IR::Text(name),
    IR::Text("("),
    p.indent([IR::Line, p.node(io.argument())]),
    IR::Line,
    IR::Text(")"),
  ])
}

/// The body of a loop or branch.
///
/// A block stays on the same line as the keyword before it, anything else is
/// indented on the next line.
fn body<'a, 'ast: 'a>(p: &Printer<'a>, node: Option<&'a Node<'ast>>) -> IR<'a> {
  match node {
    Some(node @ Node::Compound(_)) => p.concat([IR::Text(" "), node.render(p)]),
    Some(node) => p.indent([IR::AlwaysLine, node.render(p)]),
    None => IR::Empty,
  }
}

/// Would an `else` placed after this statement attach to an `if` inside it?
fn ends_with_open_if(node: &Node) -> bool {
  match node {
    Node::If(if_) => match if_.otherwise() {
      Some(otherwise) => ends_with_open_if(otherwise),
      None => true,
    },
    Node::While(while_) => while_.body().is_some_and(ends_with_open_if),
    Node::For(for_) => for_.body().is_some_and(ends_with_open_if),
    _ => false,
  }
}

impl<'a, 'ast: 'a> Renderable<'a> for Program<'ast> {
  fn render(&'a self, p: &Printer<'a>) -> IR<'a> {
    let declarations = match self.declarations() {
      Some(Node::VarSection(list)) if list.is_empty() => None,
      Some(section @ Node::VarSection(_)) => Some(section.render(p)),
      Some(declaration) => Some(p.concat([declaration.render(p), IR::Text(";")])),
      None => None,
    };
    let declarations = match declarations {
      Some(declarations) => p.concat([
        IR::Text("var"),
        p.indent([IR::AlwaysLine, declarations]),
        IR::AlwaysLine,
      ]),
      None => IR::Empty,
    };

    p.concat([
      IR::Text("program "),
      IR::Text(PROGRAM_NAME),
      IR::Text(";"),
      IR::AlwaysLine,
      declarations,
      p.node(self.body()),
      IR::Text("."),
      IR::AlwaysLine,
    ])
  }
}
impl<'a, 'ast: 'a> Renderable<'a> for Declaration<'ast> {
  fn render(&'a self, p: &Printer<'a>) -> IR<'a> {
    p.concat([
      p.node(self.identifiers()),
      IR::Text(" : "),
      p.node(self.type_()),
    ])
  }
}
impl<'a, 'ast: 'a> Renderable<'a> for Type<'ast> {
  fn render(&'a self, p: &Printer<'a>) -> IR<'a> {
    if !self.is_array() {
      return p.node(self.element());
    }

    p.concat([
      IR::Text("array ["),
      p.node(self.lower()),
      IR::Text(".."),
      p.node(self.upper()),
      IR::Text("] of "),
      p.node(self.element()),
    ])
  }
}
impl<'a, 'ast: 'a> Renderable<'a> for Compound<'ast> {
  fn render(&'a self, p: &Printer<'a>) -> IR<'a> {
    let statements = match self.statements() {
      Some(Node::StatementList(list)) if list.is_empty() => IR::Empty,
      Some(statements) => p.indent([IR::AlwaysLine, statements.render(p)]),
      None => IR::Empty,
    };

    p.concat([
      IR::Text("begin"),
      statements,
      IR::AlwaysLine,
      IR::Text("end"),
    ])
  }
}
impl<'a, 'ast: 'a> Renderable<'a> for Assign<'ast> {
  fn render(&'a self, p: &Printer<'a>) -> IR<'a> {
    let subscript = match self.subscript() {
      Some(subscript) => p.concat([IR::Text("["), subscript.render(p), IR::Text("]")]),
      None => IR::Empty,
    };

    p.concat([
      p.node(self.target()),
      subscript,
      IR::Text(" := "),
      p.node(self.value()),
    ])
  }
}
impl<'a, 'ast: 'a> Renderable<'a> for If<'ast> {
  fn render(&'a self, p: &Printer<'a>) -> IR<'a> {
    let condition = p.concat([IR::Text("if "), p.node(self.condition()), IR::Text(" then")]);

    let Some(otherwise) = self.otherwise() else {
      return p.concat([condition, body(p, self.then())]);
    };

    // Otherwise the `else` would belong to the inner `if`
    let then = match self.then() {
      Some(then) if ends_with_open_if(then) => p.concat([
        IR::Text(" begin"),
        p.indent([IR::AlwaysLine, then.render(p)]),
        IR::AlwaysLine,
        IR::Text("end"),
      ]),
      then => body(p, then),
    };
    let otherwise = match otherwise {
      Node::If(_) => p.concat([IR::Text(" "), otherwise.render(p)]),
      otherwise => body(p, Some(otherwise)),
    };

    p.concat([
      condition,
      then,
      IR::AlwaysLine,
      IR::Text("else"),
      otherwise,
    ])
  }
}
impl<'a, 'ast: 'a> Renderable<'a> for While<'ast> {
  fn render(&'a self, p: &Printer<'a>) -> IR<'a> {
    p.concat([
      IR::Text("while "),
      p.node(self.condition()),
      IR::Text(" do"),
      body(p, self.body()),
    ])
  }
}
impl<'a, 'ast: 'a> Renderable<'a> for For<'ast> {
  fn render(&'a self, p: &Printer<'a>) -> IR<'a> {
    p.concat([
      IR::Text("for "),
      p.node(self.variable()),
      IR::Text(" := "),
      p.node(self.start()),
      p.node(self.direction()),
      p.node(self.end()),
      IR::Text(" do"),
      body(p, self.body()),
    ])
  }
}
impl<'a, 'ast: 'a> Renderable<'a> for Expression<'ast> {
  fn render(&'a self, p: &Printer<'a>) -> IR<'a> {
    p.concat([
      p.node(self.left()),
      p.node(self.operator()),
      p.node(self.right()),
    ])
  }
}
impl<'a, 'ast: 'a> Renderable<'a> for Subscript<'ast> {
  fn render(&'a self, p: &Printer<'a>) -> IR<'a> {
    p.concat([
      p.node(self.identifier()),
      IR::Text("["),
      p.node(self.index()),
      IR::Text("]"),
    ])
  }
}
