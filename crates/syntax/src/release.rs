//! Tearing down a tree.
//!
//! The memory of every node is returned when the [`Allocator`](crate::Allocator) is
//! dropped. Destroying a tree first runs the destructors of its nodes, children before
//! parents, and reports what was released.

use crate::ast::NodeBox;
use std::ops;

/// What was released when destroying a tree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Released {
  /// The number of nodes, including list items
  pub nodes: usize,
  /// The number of text payloads owned by identifiers and strings
  pub texts: usize,
}
impl ops::AddAssign for Released {
  fn add_assign(&mut self, other: Self) {
    self.nodes += other.nodes;
    self.texts += other.texts;
  }
}

/// Destroy a node and everything reachable from it.
///
/// Children are destroyed in slot order, then the items of a list, then the node
/// itself. Destroying an absent node does nothing.
///
/// # Examples
/// ```
/// use minipas_syntax::{Allocator, Builder, destroy};
///
/// let allocator = Allocator::new();
/// let builder = Builder::new(&allocator);
/// let list = builder.identifier_list(["a", "b"]);
///
/// let released = destroy(Some(list));
/// assert_eq!(released.nodes, 3);
/// assert_eq!(released.texts, 2);
/// ```
pub fn destroy(node: Option<NodeBox<'_>>) -> Released {
  let Some(node) = node else {
    return Released::default();
  };

  let kind = node.kind();
  let released = release(node);
  log::debug!(
    "Destroyed {kind} tree ({} nodes, {} texts)",
    released.nodes,
    released.texts
  );

  released
}

fn release(mut node: NodeBox<'_>) -> Released {
  let mut released = Released::default();
  let kind = node.kind();

  for index in 0..kind.arity() {
    if let Some(child) = node.take_child(index) {
      released += release(child);
    }
  }

  if let Some(items) = node.items_mut() {
    for item in items.drain(..) {
      released += release(item);
    }
  }

  if kind.owns_text() {
    released.texts += 1;
  }
  released.nodes += 1;

  released
}
