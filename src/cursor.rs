use std::fmt;

use crate::node::TrieNode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// Walks the stored keys below `base` in lexicographic order, in either direction.
///
/// The cursor sits either on a stored key or on the ghost position, which lies
/// between the last key and the first one. Stepping forward from the ghost lands
/// on the smallest key, stepping backward on the largest; stepping past either end
/// returns to the ghost.
#[derive(Clone)]
pub(crate) struct RawCursor<'a> {
    base: &'a TrieNode,
    base_len: usize,
    path: Vec<(char, &'a TrieNode)>,
    key: String,
    at_ghost: bool,
}

impl<'a> RawCursor<'a> {
    /// Creates a cursor at the ghost position. `prefix` is the key spelled by the
    /// path from the root to `base`.
    pub(crate) fn new(base: &'a TrieNode, prefix: String) -> Self {
        RawCursor {
            base,
            base_len: prefix.len(),
            path: Vec::new(),
            key: prefix,
            at_ghost: true,
        }
    }

    #[inline]
    pub(crate) fn is_ghost(&self) -> bool {
        self.at_ghost
    }

    /// The key at the current position, `None` at the ghost.
    #[inline]
    pub(crate) fn key(&self) -> Option<&str> {
        if self.at_ghost { None } else { Some(self.key.as_str()) }
    }

    pub(crate) fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.step_forward(),
            Direction::Backward => self.step_backward(),
        }
    }

    #[inline]
    fn current_node(&self) -> &'a TrieNode {
        self.path.last().map_or(self.base, |&(_, node)| node)
    }

    fn push(&mut self, label: char, node: &'a TrieNode) {
        self.key.push(label);
        self.path.push((label, node));
    }

    fn pop(&mut self) -> Option<(char, &'a TrieNode)> {
        let frame = self.path.pop()?;
        self.key.pop();
        Some(frame)
    }

    fn reset(&mut self) {
        self.path.clear();
        self.key.truncate(self.base_len);
    }

    fn enter_ghost(&mut self) {
        self.reset();
        self.at_ghost = true;
    }

    fn descend_last(&mut self) {
        while let Some((label, child)) = self.current_node().last_child() {
            self.push(label, child);
        }
    }

    // Pre-order successor: a node comes before its children, children ascend.
    fn step_forward(&mut self) {
        if self.at_ghost {
            self.reset();
            self.at_ghost = false;
            if self.base.is_end {
                return;
            }
        }

        loop {
            if let Some((label, child)) = self.current_node().first_child() {
                self.push(label, child);
            } else {
                loop {
                    let Some((label, _)) = self.pop() else {
                        self.enter_ghost();
                        return;
                    };
                    if let Some((next, sibling)) = self.current_node().next_sibling(label) {
                        self.push(next, sibling);
                        break;
                    }
                }
            }

            if self.current_node().is_end {
                return;
            }
        }
    }

    // Mirror of `step_forward`: the predecessor of a node is the deepest last
    // descendant of its previous sibling, or its parent when there is none.
    fn step_backward(&mut self) {
        if self.at_ghost {
            self.reset();
            self.at_ghost = false;
            self.descend_last();
            if self.current_node().is_end {
                return;
            }
        }

        loop {
            let Some((label, _)) = self.pop() else {
                self.enter_ghost();
                return;
            };
            if let Some((prev, sibling)) = self.current_node().prev_sibling(label) {
                self.push(prev, sibling);
                self.descend_last();
            }

            if self.current_node().is_end {
                return;
            }
        }
    }
}

/// A cursor over the keys of a `TrieSet`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back and forth.
/// It always rests either on a key or on the "ghost" position, which sits between
/// the last key and the first key. Moving next from the last key (or previous from
/// the first key) lands on the ghost; moving again wraps around.
///
/// This struct is created by [`cursor_front`], [`cursor_back`] and [`cursor_ghost`].
///
/// # Examples
///
/// ```
/// # use trieset::TrieSet;
/// let set = TrieSet::from(["car", "cat", "dog"]);
///
/// let mut cursor = set.cursor_ghost();
/// cursor.move_prev();
/// assert_eq!(cursor.current(), Some("dog"));
/// cursor.move_next();
/// assert!(cursor.is_ghost());
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some("car"));
/// ```
///
/// [`cursor_front`]: crate::TrieSet::cursor_front
/// [`cursor_back`]: crate::TrieSet::cursor_back
/// [`cursor_ghost`]: crate::TrieSet::cursor_ghost
#[derive(Clone)]
pub struct Cursor<'a> {
    pub(crate) raw: RawCursor<'a>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(raw: RawCursor<'a>) -> Self {
        Cursor { raw }
    }

    /// Moves to the next key in ascending order.
    pub fn move_next(&mut self) {
        self.raw.step(Direction::Forward);
    }

    /// Moves to the previous key in ascending order.
    pub fn move_prev(&mut self) {
        self.raw.step(Direction::Backward);
    }

    /// Returns the key the cursor is on, or `None` at the ghost position.
    pub fn current(&self) -> Option<&str> {
        self.raw.key()
    }

    pub fn is_ghost(&self) -> bool {
        self.raw.is_ghost()
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current()).finish()
    }
}
