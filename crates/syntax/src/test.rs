use crate::allocator::{self, Allocator, Builder};
use crate::ast::{Direction, Kind, Node, Operator, TypeName};
use crate::release::{Released, destroy};
use indoc::indoc;

#[test]
fn created_nodes_have_empty_slots() {
  let allocator = Allocator::new();
  let builder = Builder::new(&allocator);

  for kind in Kind::ALL {
    let mut node = builder.create(kind);

    assert_eq!(node.kind(), kind);
    assert_eq!(node.children().len(), kind.arity());
    assert!(node.children().all(|child| child.is_none()));
    assert!(node.items().is_empty());
    assert_eq!(node.items_mut().is_some(), kind.is_list());

    if kind.owns_text() {
      assert_eq!(node.text(), Some(""));
    } else {
      assert_eq!(node.text(), None);
    }
  }
}

#[test]
fn arity_table() {
  assert_eq!(Kind::Program.arity(), 2);
  assert_eq!(Kind::While.arity(), 2);
  assert_eq!(Kind::Declaration.arity(), 2);
  assert_eq!(Kind::Subscript.arity(), 2);
  assert_eq!(Kind::For.arity(), 5);
  assert_eq!(Kind::Assign.arity(), 3);
  assert_eq!(Kind::If.arity(), 3);
  assert_eq!(Kind::Expression.arity(), 3);
  assert_eq!(Kind::Type.arity(), 3);
  assert_eq!(Kind::Compound.arity(), 1);
  assert_eq!(Kind::Read.arity(), 1);
  assert_eq!(Kind::Write.arity(), 1);
  assert_eq!(Kind::Not.arity(), 1);
  assert_eq!(Kind::Negate.arity(), 1);
  assert_eq!(Kind::Group.arity(), 1);
  assert_eq!(Kind::Identifier.arity(), 0);
  assert_eq!(Kind::Integer.arity(), 0);
  assert_eq!(Kind::StatementList.arity(), 0);

  for kind in Kind::ALL {
    assert!(matches!(kind.arity(), 0 | 1 | 2 | 3 | 5));
  }
}

#[test]
fn only_identifiers_and_strings_own_text() {
  let text_kinds: Vec<_> = Kind::ALL.into_iter().filter(|k| k.owns_text()).collect();
  assert_eq!(text_kinds, [Kind::Identifier, Kind::String]);
}

#[test]
fn children_are_in_slot_order() {
  let allocator = Allocator::new();
  let b = Builder::new(&allocator);

  let for_loop = b.for_(
    b.identifier("i"),
    b.integer(1),
    Direction::Downto,
    b.integer(10),
    b.compound([]),
  );
  let kinds: Vec<_> = for_loop.children().map(|c| c.map(Node::kind)).collect();
  assert_eq!(
    kinds,
    [
      Some(Kind::Identifier),
      Some(Kind::Integer),
      Some(Kind::Direction),
      Some(Kind::Integer),
      Some(Kind::Compound),
    ]
  );

  let assign = b.assign(b.identifier("x"), None, b.integer(1));
  let kinds: Vec<_> = assign.children().map(|c| c.map(Node::kind)).collect();
  assert_eq!(kinds, [Some(Kind::Identifier), None, Some(Kind::Integer)]);
  assert!(assign.child(3).is_none());
}

#[test]
fn parser_can_fill_created_nodes() {
  let allocator = Allocator::new();
  let b = Builder::new(&allocator);

  let mut node = b.create(Kind::Assign);
  if let Node::Assign(assign) = &mut *node {
    assign.target = Some(b.identifier("x"));
    assign.value = Some(b.integer(3));
  }

  let Node::Assign(assign) = &*node else {
    panic!("expected an assignment");
  };
  assert_eq!(assign.target().and_then(Node::text), Some("x"));
  assert!(assign.subscript().is_none());
  assert!(matches!(assign.value(), Some(Node::Integer(3))));

  let mut list = b.create(Kind::StatementList);
  list.items_mut().unwrap().push(node);
  assert_eq!(list.items().len(), 1);

  let taken = list.items_mut().unwrap()[0].take_child(0);
  assert!(taken.is_some());
  assert!(list.items()[0].child(0).is_none());
}

#[test]
fn destroy_absent_node() {
  assert_eq!(destroy(None), Released::default());
}

#[test]
fn destroy_declaration() {
  let allocator = Allocator::new();
  let b = Builder::new(&allocator);

  // declaration, identifier list, 3 identifiers, type, simple type
  let declaration = b.declaration(
    b.identifier_list(["a", "b", "c"]),
    b.simple_type(TypeName::Integer),
  );
  assert_eq!(
    destroy(Some(declaration)),
    Released { nodes: 7, texts: 3 }
  );
}

#[test]
fn destroy_program() {
  let allocator = Allocator::new();
  let b = Builder::new(&allocator);

  let declarations = b.var_section([b.declaration(
    b.identifier_list(["xs"]),
    b.array_type(b.integer(1), b.integer(10), TypeName::Real),
  )]);
  let body = b.compound([
    b.assign(
      b.identifier("xs"),
      Some(b.integer(1)),
      b.binary(b.real(1.5), Operator::Mul, b.integer(2)),
    ),
    b.write(b.expression_list([b.string("'done'"), b.identifier("xs")])),
  ]);
  let program = b.program(Some(declarations), body);

  // program 1
  // var section, declaration, identifier list, identifier, type, 2 bounds, simple type: 8
  // compound, statement list: 2
  // assign, identifier, integer, expression, real, operator, integer: 7
  // write, expression list, string, identifier: 4
  assert_eq!(
    destroy(Some(program)),
    Released {
      nodes: 22,
      texts: 4
    }
  );
}

#[test]
fn destroy_created_node() {
  let allocator = Allocator::new();
  let b = Builder::new(&allocator);

  assert_eq!(
    destroy(Some(b.create(Kind::For))),
    Released { nodes: 1, texts: 0 }
  );
  assert_eq!(
    destroy(Some(b.create(Kind::String))),
    Released { nodes: 1, texts: 1 }
  );
}

#[test]
fn arena_with_capacity() {
  let allocator = allocator::try_with_capacity(1024).unwrap();
  let b = Builder::new(&allocator);
  let node = b.integer(1);

  assert!(matches!(*node, Node::Integer(1)));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "real literal inf is not finite")]
fn real_literals_are_finite() {
  let allocator = Allocator::new();
  let b = Builder::new(&allocator);
  let _ = b.real(f64::INFINITY);
}

#[test]
fn allocation_error_message() {
  let error = allocator::AllocationError { capacity: 64 };
  assert_eq!(
    error.to_string(),
    "Allocation Failure: could not allocate 64 bytes for the syntax tree"
  );
}

#[test]
fn tree_view() {
  let allocator = Allocator::new();
  let b = Builder::new(&allocator);

  let statement = b.if_(
    b.binary(b.identifier("x"), Operator::Gt, b.integer(0)),
    b.write(b.boolean(true)),
    Some(b.assign(b.identifier("x"), None, b.negate(b.real(2.0)))),
  );

  let expected = indoc! {"
    ╰─ If
       ├─ Condition: Expression
       │  ├─ Left: Identifier (x)
       │  ├─ Operator: Operator (>)
       │  ╰─ Right: Integer (0)
       ├─ Then: Write
       │  ╰─ Argument: Boolean (true)
       ╰─ Otherwise: Assign
          ├─ Target: Identifier (x)
          ╰─ Value: Negate
             ╰─ Operand: Real (2.0)
  "};
  assert_eq!(statement.to_string(), expected);
}

#[test]
fn tree_view_lists() {
  let allocator = Allocator::new();
  let b = Builder::new(&allocator);

  let declaration = b.declaration(
    b.identifier_list(["a", "b"]),
    b.simple_type(TypeName::Boolean),
  );

  let expected = indoc! {"
    ╰─ Declaration
       ├─ Identifiers: Identifier List
       │  ├─ Identifier (a)
       │  ╰─ Identifier (b)
       ╰─ Type: Type
          ╰─ Element: Simple Type (boolean)
  "};
  assert_eq!(declaration.to_string(), expected);
}
