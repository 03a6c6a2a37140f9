use std::collections::{BTreeMap, btree_map};
use std::fmt;
use std::ops::Bound::{Excluded, Unbounded};

/// A trie node. Nodes own their children, so a single long key nests as deep
/// as it is long; `Clone` and `Drop` below walk the subtree with an explicit
/// stack instead of recursing.
#[derive(Default)]
pub(crate) struct TrieNode {
    pub(crate) is_end: bool,
    pub(crate) children: BTreeMap<char, TrieNode>,
}

// Parent state saved while the copy descends into the child under `label`.
struct CloneFrame<'a> {
    label: char,
    pending: btree_map::Iter<'a, char, TrieNode>,
    copy: TrieNode,
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        let mut stack: Vec<CloneFrame<'_>> = Vec::new();
        let mut pending = self.children.iter();
        let mut copy = self.shallow_copy();

        loop {
            if let Some((&label, child)) = pending.next() {
                stack.push(CloneFrame {
                    label,
                    pending: std::mem::replace(&mut pending, child.children.iter()),
                    copy: std::mem::replace(&mut copy, child.shallow_copy()),
                });
            } else if let Some(parent) = stack.pop() {
                let child = std::mem::replace(&mut copy, parent.copy);
                copy.children.insert(parent.label, child);
                pending = parent.pending;
            } else {
                return copy;
            }
        }
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_end", &self.is_end)
            .field("labels", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl TrieNode {
    pub(crate) fn new() -> Self {
        TrieNode {
            is_end: false,
            children: BTreeMap::new(),
        }
    }

    fn shallow_copy(&self) -> Self {
        TrieNode {
            is_end: self.is_end,
            children: BTreeMap::new(),
        }
    }

    /// Builds a detached single-path subtree spelling `labels`, whose last node is a stored key.
    pub(crate) fn chain(labels: &[char]) -> Self {
        let mut node = TrieNode::new();
        node.is_end = true;
        for &label in labels.iter().rev() {
            let mut parent = TrieNode::new();
            parent.children.insert(label, node);
            node = parent;
        }
        node
    }

    #[inline]
    pub(crate) fn child(&self, label: char) -> Option<&TrieNode> {
        self.children.get(&label)
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, label: char) -> Option<&mut TrieNode> {
        self.children.get_mut(&label)
    }

    pub(crate) fn detach(&mut self, label: char) -> Option<TrieNode> {
        self.children.remove(&label)
    }

    #[inline]
    pub(crate) fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub(crate) fn first_child(&self) -> Option<(char, &TrieNode)> {
        self.children.iter().next().map(|(&c, n)| (c, n))
    }

    pub(crate) fn last_child(&self) -> Option<(char, &TrieNode)> {
        self.children.iter().next_back().map(|(&c, n)| (c, n))
    }

    /// Child with the smallest label strictly greater than `label`.
    pub(crate) fn next_sibling(&self, label: char) -> Option<(char, &TrieNode)> {
        self.children
            .range((Excluded(label), Unbounded))
            .next()
            .map(|(&c, n)| (c, n))
    }

    /// Child with the largest label strictly less than `label`.
    pub(crate) fn prev_sibling(&self, label: char) -> Option<(char, &TrieNode)> {
        self.children
            .range(..label)
            .next_back()
            .map(|(&c, n)| (c, n))
    }

    /// Number of stored keys in this subtree, including this node.
    pub(crate) fn count_keys(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_end {
                count += 1;
            }
            stack.extend(node.children.values());
        }

        count
    }

    /// Returns `true` as soon as any stored key is found in this subtree.
    pub(crate) fn has_keys(&self) -> bool {
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_end {
                return true;
            }
            stack.extend(node.children.values());
        }

        false
    }
}
