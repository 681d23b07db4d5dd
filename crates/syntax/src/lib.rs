//! # Syntax
//! The Abstract Syntax Tree for a small Pascal-like language.
//!
//! The tree is built by an external parser, bottom-up, from nodes handed out by a
//! [`Builder`]. Every node lives in a bump [`Allocator`], one per parse. Each kind of
//! node owns exactly the child slots its grammar production has, as named fields, so
//! a node can never have the wrong number of children. Lists (statements, identifiers,
//! declarations and expressions) are ordered sequences on their own list kinds.
//!
//! A finished tree can be torn down with [`destroy`], and printed back to source
//! with the `minipas-printer` crate.

#![deny(unsafe_code)]

pub mod allocator;
pub mod ast;
mod release;

#[cfg(test)]
mod test;

pub use allocator::{AllocationError, Allocator, Builder};
pub use ast::{Kind, Node, NodeBox, Slot};
pub use release::{Released, destroy};
