//! # Printer Tests
//!
//! Build whole programs and check the source printed for them.

use indoc::indoc;
use minipas_printer::{
  PrinterConfig, render, render_to,
  config::{Config, LineEnding},
};
use minipas_syntax::{
  Allocator, Builder, NodeBox, Released,
  ast::{Direction, Operator, TypeName},
  destroy,
};

fn config() -> Config {
  Config {
    line_ending: LineEnding::LineFeed,
    ..Config::default()
  }
}

fn squash(source: &str) -> String {
  source.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn write_answer<'ast>(b: &Builder<'ast>) -> NodeBox<'ast> {
  b.program(None, b.compound([b.write(b.integer(42))]))
}

#[test]
fn write_answer_program() {
  let allocator = Allocator::new();
  let b = Builder::new(&allocator);
  let program = write_answer(&b);

  let output = render(Some(&*program), config());
  assert_eq!(squash(&output), "program parsed_prog; begin write(42) end.");
  assert_eq!(output, "program parsed_prog;\nbegin\n  write(42)\nend.\n");
}

#[test]
fn rendering_is_deterministic() {
  let allocator = Allocator::new();
  let b = Builder::new(&allocator);
  let program = write_answer(&b);

  let first = render(Some(&*program), PrinterConfig::default());
  let second = render(Some(&*program), PrinterConfig::default());
  assert_eq!(first, second);
}

#[test]
fn full_program() {
  let allocator = Allocator::new();
  let b = Builder::new(&allocator);

  let declarations = b.var_section([
    b.declaration(
      b.identifier_list(["i", "n", "total"]),
      b.simple_type(TypeName::Integer),
    ),
    b.declaration(
      b.identifier_list(["xs"]),
      b.array_type(b.integer(1), b.integer(10), TypeName::Real),
    ),
    b.declaration(
      b.identifier_list(["done"]),
      b.simple_type(TypeName::Boolean),
    ),
  ]);

  let body = b.compound([
    b.read(b.identifier("n")),
    b.assign(b.identifier("total"), None, b.integer(0)),
    b.assign(b.identifier("done"), None, b.boolean(false)),
    b.for_(
      b.identifier("i"),
      b.integer(1),
      Direction::To,
      b.identifier("n"),
      b.compound([
        b.assign(
          b.identifier("xs"),
          Some(b.identifier("i")),
          b.binary(b.identifier("i"), Operator::Slash, b.real(2.5)),
        ),
        b.assign(
          b.identifier("total"),
          None,
          b.binary(b.identifier("total"), Operator::Plus, b.identifier("i")),
        ),
      ]),
    ),
    b.while_(
      b.not(b.identifier("done")),
      b.if_(
        b.binary(
          b.group(b.binary(b.identifier("total"), Operator::Mod, b.integer(2))),
          Operator::Eq,
          b.integer(0),
        ),
        b.assign(b.identifier("done"), None, b.boolean(true)),
        Some(b.assign(
          b.identifier("total"),
          None,
          b.binary(b.identifier("total"), Operator::Minus, b.integer(1)),
        )),
      ),
    ),
    b.write(b.expression_list([
      b.string("'total: '"),
      b.identifier("total"),
      b.subscript(b.identifier("xs"), b.integer(1)),
      b.negate(b.integer(1)),
    ])),
  ]);

  let program = b.program(Some(declarations), body);

  let expected = indoc! {"
    program parsed_prog;
    var
      i, n, total : integer;
      xs : array [1..10] of real;
      done : boolean;
    begin
      read(n);
      total := 0;
      done := false;
      for i := 1 to n do begin
        xs[i] := i / 2.5;
        total := total + i
      end;
      while not done do
        if (total mod 2) = 0 then
          done := true
        else
          total := total - 1;
      write('total: ', total, xs[1], - 1)
    end.
  "};
  assert_eq!(render(Some(&*program), config()), expected);

  assert_eq!(
    destroy(Some(program)),
    Released {
      nodes: 81,
      texts: 24
    }
  );
}

#[test]
fn render_to_sink() {
  let allocator = Allocator::new();
  let b = Builder::new(&allocator);
  let program = write_answer(&b);

  let mut sink = Vec::new();
  render_to(&mut sink, Some(&*program), config()).unwrap();
  assert_eq!(
    String::from_utf8(sink).unwrap(),
    "program parsed_prog;\nbegin\n  write(42)\nend.\n"
  );

  let mut sink = Vec::new();
  render_to(&mut sink, None, config()).unwrap();
  assert!(sink.is_empty());
}

#[test]
fn print_then_destroy() {
  let allocator = Allocator::new();
  let b = Builder::new(&allocator);
  let program = write_answer(&b);

  let output = render(Some(&*program), config());
  let released = destroy(Some(program));

  assert!(output.ends_with("end.\n"));
  // program, compound, statement list, write, integer
  assert_eq!(released, Released { nodes: 5, texts: 0 });
}
