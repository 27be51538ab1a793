//! This crate exposes the classic data structures mostly for educational
//! purposes: search trees, a binary heap, linked lists, stacks, queues, a
//! deque and two graph representations.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). An [`AvlTree`] keeps the height at `O(lg N)`
//! by rotating subtrees after every insertion and deletion while a plain [`BinarySearchTree`]
//! degrades to a list when fed sorted keys.
//!
//! ## Binary Heap
//!
//! A [`Heap`] is a complete binary tree stored in a `Vec` by position: the children of index
//! `i` live at `2i + 1` and `2i + 2`. Its root is always the largest (max-heap) or smallest
//! (min-heap) element.
//!
//! ## Thread safety
//!
//! Nothing in here synchronizes internally. Every container is a plain owned value, so it is
//! `Send`/`Sync` exactly when its elements are; share one across threads by wrapping it in a
//! `Mutex` or similar.
//!
//! # Examples
//!
//! ```
//! use classic_ds::{AvlTree, Heap};
//!
//! let mut tree = AvlTree::new();
//! for key in 0..20 {
//!     tree.insert(key, key.to_string());
//! }
//! assert!(tree.height() <= 6);
//! assert_eq!(tree.min(), Some(&0));
//!
//! let mut heap = Heap::max_heap();
//! heap.extend(vec![3, 9, 1]);
//! assert_eq!(heap.remove(), Ok(9));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod deque;
pub mod error;
pub mod graph;
pub mod heap;
pub mod list;
pub mod queue;
pub mod stack;
pub mod tree;

#[cfg(test)]
mod test;

pub use deque::Deque;
pub use error::{Error, Result};
pub use graph::{AdjacencyListGraph, AdjacencyMatrixGraph, Graph};
pub use heap::{Heap, Polarity};
pub use list::{DoublyLinkedList, SinglyLinkedList};
pub use queue::{Queue, StackQueue};
pub use stack::{QueueStack, Stack};
pub use tree::{Avl, AvlTree, Balance, BinarySearchTree, Tree, Unbalanced};
