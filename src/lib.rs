//! A prefix tree (trie) based string set.
//!
//! This crate provides a `TrieSet`, a set of strings stored in a trie
//! (prefix tree), with prefix-scoped queries and set algebra between tries.
//!
//! # Features
//!
//! - Fast membership tests with O(k) complexity where k is the key length
//! - Prefix-based operations (counting, testing and removing keys with a common prefix)
//! - Sorted, double-ended iteration and bidirectional cursors
//! - Union, difference and subset comparison through operators
//!
//! With the `tracing` feature enabled, mutations emit `trace`-level events.

mod algebra;
mod as_chars;
mod cursor;
mod iter;
mod node;
mod trie_set;

pub use algebra::{Difference, Intersection, SymmetricDifference, Union};
pub use as_chars::AsChars;
pub use cursor::Cursor;
pub use iter::{IntoIter, Iter, PrefixIter};
pub use trie_set::TrieSet;

#[cfg(test)]
mod proptest_trieset;
