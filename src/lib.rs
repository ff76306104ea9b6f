//! This crate exposes a Binary Search Tree (BST) that is built balanced and
//! rebalanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert,
//! find, and delete stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores one value and sometimes has
//! child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`), so keeping the
//! height near `lg N` for `N` nodes is what makes a BST worth having.
//!
//! ## Balancing
//!
//! This tree does not rebalance itself while it is mutated. Instead,
//! [`Tree::build`] constructs a tree of minimal height from any input
//! sequence, and [`Tree::rebalance`] restores that shape whenever a run of
//! inserts and deletes has skewed the structure. In between, `insert` and
//! `delete` preserve the ordering invariants but may let the height drift
//! toward `O(N)`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod display;
#[cfg(test)]
mod test;
pub mod tree;

pub use tree::{Node, Tree};
