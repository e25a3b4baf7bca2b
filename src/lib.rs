//! This crate exposes a handful of classic ordered data structures and
//! algorithms, written to be read as much as to be used.
//!
//! ## Heap
//!
//! [`heap::Heap`] is a binary heap that can act as either a min-heap or a
//! max-heap. Unlike [`std::collections::BinaryHeap`], every element is
//! addressable by its index in the backing array, so any element (not just
//! the top one) can have its value changed or be removed in `O(lg N)`.
//!
//! ## Binary Search Tree
//!
//! [`tree::Tree`] is a plain, unbalanced Binary Search Tree. The most
//! important invariants of a BST are:
//!
//! 1. For every node in a BST, all the nodes in its left subtree have a
//!    value less than its own value.
//! 2. For every node in a BST, all the nodes in its right subtree have a
//!    value greater than its own value.
//!
//! Equal values never create new nodes; they are merged into the node that
//! already holds that value. Because the tree never rebalances, inserting
//! sorted input produces a tree whose height equals its size minus one.
//!
//! ## Quickselect
//!
//! [`quickselect`] finds the `n`-th smallest element of a slice in expected
//! linear time by partially partitioning the slice in place.
//!
//! All three accept any [`Compare`] implementation (closures included) and
//! fall back to the [`Natural`] [`Ord`] ordering of their elements.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]
#![forbid(unsafe_code)]

pub mod error;
pub mod heap;
pub mod quickselect;
pub mod tree;

pub use compare::{natural, Compare, Natural};
pub use error::{Error, Result};
