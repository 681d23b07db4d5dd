//! # Printer
//!
//! Prints a syntax tree back into source code.
//!
//! Works in stages:
//! - Converts each node of the tree into an intermediate representation ([IR])
//! - Then calculates how much of the intermediate representation it can fit in printWidth
//! - Converts to a second IR which can be directly printed
//!
//! Based upon the algorithm described by Philip Wadler in [`A prettier printer`](https://homepages.inf.ed.ac.uk/wadler/papers/prettier/prettier.pdf).
//!
//! The output does not echo the layout of the original source, but it parses to the same
//! tree.

#![deny(unsafe_code)]

pub mod config;
mod printer;
mod source;


use minipas_syntax::{Allocator, Node};
use std::io;

/// Print a tree into source code. An absent node prints as an empty string.
///
/// # Examples
/// ```
/// use minipas_printer::{PrinterConfig, render};
/// use minipas_syntax::{Allocator, Builder, ast::Operator};
///
/// let allocator = Allocator::new();
/// let b = Builder::new(&allocator);
/// let sum = b.binary(b.integer(1), Operator::Plus, b.integer(2));
///
/// assert_eq!(render(Some(&*sum), PrinterConfig::default()), "1 + 2");
/// ```
#[must_use]
pub fn render(node: Option<&Node<'_>>, config: PrinterConfig) -> String {
  let allocator = Allocator::new();
  let printer = printer::Printer::new(config, &allocator);
  let output = printer.print(node);

  log::trace!(
    "Rendered {} ({} bytes)",
    node.map_or_else(|| "nothing".to_owned(), |node| node.kind().to_string()),
    output.len()
  );

  output
}

/// Print a tree into source code, writing it to the sink.
///
/// # Errors
/// If the sink cannot be written to.
pub fn render_to(
  sink: &mut impl io::Write,
  node: Option<&Node<'_>>,
  config: PrinterConfig,
) -> io::Result<()> {
  sink.write_all(render(node, config).as_bytes())?;
  sink.flush()
}

pub use config::Config as PrinterConfig;
pub use source::PROGRAM_NAME;
