use std::collections::btree_map::Entry;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::as_chars::AsChars;
use crate::cursor::{Cursor, Direction, RawCursor};
use crate::iter::{Iter, PrefixIter};
use crate::node::TrieNode;

/// A `TrieSet` is a set of strings stored in a trie (prefix tree).
///
/// Every edge of the trie is labelled with one `char`; a node is marked when the
/// path from the root to it spells a stored key. Keys are kept in lexicographic
/// order, and every query has a prefix-scoped counterpart.
///
/// # Features
///
/// - Membership, insertion and removal in O(k) where k is the key length
/// - Prefix-based operations (counting, testing and removing keys with a common prefix)
/// - Double-ended iteration and bidirectional cursors in sorted order
/// - Set algebra through `+`, `-`, `+=`, `-=` and subset comparisons through `<`, `<=`, `>`, `>=`
///
/// # Examples
///
/// ```
/// use trieset::TrieSet;
///
/// let mut set = TrieSet::new();
///
/// set.insert("cat");
/// set.insert("car");
/// set.insert("dog");
///
/// assert_eq!(set.len(), 3);
/// assert!(set.contains_prefix("ca"));
/// assert!(!set.contains("ca"));
///
/// set.remove("car");
/// assert!(set.contains_prefix("ca"));
///
/// for key in set.iter() {
///     println!("{}", key);
/// }
/// ```
#[derive(Clone, Default)]
pub struct TrieSet {
    pub(crate) root: TrieNode,
    pub(crate) size: usize,
}

impl<K: AsChars, const N: usize> From<[K; N]> for TrieSet {
    fn from(array: [K; N]) -> Self {
        let mut trie = TrieSet::new();
        for key in array {
            trie.insert(key);
        }
        trie
    }
}

impl<K: AsChars> From<&[K]> for TrieSet {
    fn from(slice: &[K]) -> Self {
        let mut trie = TrieSet::new();
        for key in slice {
            trie.insert(key);
        }
        trie
    }
}

impl From<BTreeSet<String>> for TrieSet {
    fn from(set: BTreeSet<String>) -> Self {
        set.into_iter().collect()
    }
}

impl From<HashSet<String>> for TrieSet {
    fn from(set: HashSet<String>) -> Self {
        set.into_iter().collect()
    }
}

impl From<TrieSet> for BTreeSet<String> {
    fn from(trie: TrieSet) -> Self {
        trie.into_iter().collect()
    }
}

impl<K: AsChars> Extend<K> for TrieSet {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: AsChars> FromIterator<K> for TrieSet {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = TrieSet::new();
        trie.extend(iter);
        trie
    }
}

impl Hash for TrieSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);

        for key in self.iter() {
            key.hash(state);
        }
    }
}

impl fmt::Debug for TrieSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Writes every key on its own line, in ascending order.
impl fmt::Display for TrieSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cursor = self.cursor_front();
        while let Some(key) = cursor.current() {
            writeln!(f, "{}", key)?;
            cursor.move_next();
        }
        Ok(())
    }
}

impl TrieSet {
    /// Creates a new empty `TrieSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let set = TrieSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        TrieSet {
            root: TrieNode::new(),
            size: 0,
        }
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let mut set = TrieSet::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert("a");
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the set contains no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of keys that start with `prefix`.
    ///
    /// The empty prefix counts every key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let set = TrieSet::from(["car", "cat", "dog"]);
    /// assert_eq!(set.prefix_len("ca"), 2);
    /// assert_eq!(set.prefix_len("cow"), 0);
    /// assert_eq!(set.prefix_len(""), 3);
    /// ```
    pub fn prefix_len<K: AsChars>(&self, prefix: K) -> usize {
        match self.find(prefix) {
            Some(node) if std::ptr::eq(node, &self.root) => self.size,
            Some(node) => node.count_keys(),
            None => 0,
        }
    }

    /// Returns `true` if no key starts with `prefix`.
    ///
    /// Stops at the first key found instead of counting the whole subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let set = TrieSet::from(["car"]);
    /// assert!(!set.prefix_is_empty("c"));
    /// assert!(set.prefix_is_empty("d"));
    /// ```
    pub fn prefix_is_empty<K: AsChars>(&self, prefix: K) -> bool {
        self.find(prefix).is_none_or(|node| !node.has_keys())
    }

    /// Removes all keys from the set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let mut set = TrieSet::from(["a", "b"]);
    ///
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(removed = self.size, "cleared trie");

        self.root = TrieNode::new();
        self.size = 0;
    }

    /// Inserts a key into the set.
    ///
    /// Returns `true` if the key was not present before. Inserting a key that is
    /// already stored leaves the set unchanged.
    ///
    /// The missing tail of the key's path is built off to the side and linked in
    /// with a single edge, so a panic while building it leaves the set untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let mut set = TrieSet::new();
    /// assert!(set.insert("a"));
    /// assert!(!set.insert("a"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert<K: AsChars>(&mut self, key: K) -> bool {
        let labels = key.as_chars_vec();
        let mut current = &mut self.root;

        for (depth, &label) in labels.iter().enumerate() {
            match current.children.entry(label) {
                Entry::Occupied(entry) => current = entry.into_mut(),
                Entry::Vacant(entry) => {
                    entry.insert(TrieNode::chain(&labels[depth + 1..]));
                    self.size += 1;

                    #[cfg(feature = "tracing")]
                    tracing::trace!(key = %labels.iter().collect::<String>(), new_nodes = labels.len() - depth, "inserted key");

                    return true;
                }
            }
        }

        if current.is_end {
            return false;
        }
        current.is_end = true;
        self.size += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(key = %labels.iter().collect::<String>(), new_nodes = 0, "inserted key");

        true
    }

    /// Inserts a key only if it is not already present.
    ///
    /// Returns the key back as `Err` if it was already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let mut set = TrieSet::new();
    /// assert_eq!(set.try_insert("a"), Ok(()));
    /// assert_eq!(set.try_insert("a"), Err("a".to_string()));
    /// ```
    pub fn try_insert<K: AsChars>(&mut self, key: K) -> Result<(), String> {
        if self.contains(&key) {
            Err(key.to_key_string())
        } else {
            self.insert(key);
            Ok(())
        }
    }

    /// Returns `true` if the set contains exactly this key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let set = TrieSet::from(["cat"]);
    /// assert!(set.contains("cat"));
    /// assert!(!set.contains("ca"));
    /// ```
    pub fn contains<K: AsChars>(&self, key: K) -> bool {
        self.find(key).is_some_and(|node| node.is_end)
    }

    /// Returns `true` if some stored key starts with `prefix`.
    ///
    /// The empty string is always a prefix, even of an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let set = TrieSet::from(["cat"]);
    /// assert!(set.contains_prefix("ca"));
    /// assert!(set.contains_prefix("cat"));
    /// assert!(!set.contains_prefix("cats"));
    /// assert!(TrieSet::new().contains_prefix(""));
    /// ```
    pub fn contains_prefix<K: AsChars>(&self, prefix: K) -> bool {
        self.find(prefix).is_some()
    }

    /// Removes a key from the set, returning whether it was present.
    ///
    /// Nodes left without keys below them are pruned up to the nearest ancestor
    /// that is itself a key, has other children, or is the root.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let mut set = TrieSet::from(["car", "cat"]);
    ///
    /// assert!(set.remove("car"));
    /// assert!(!set.remove("car"));
    /// assert!(set.contains_prefix("ca"));
    /// ```
    pub fn remove<K: AsChars>(&mut self, key: K) -> bool {
        let labels = key.as_chars_vec();

        let Some((cut, target)) = self.probe(&labels) else {
            return false;
        };
        if !target.is_end {
            return false;
        }

        if labels.is_empty() || target.has_children() {
            if let Some(node) = self.node_mut(&labels) {
                node.is_end = false;
            }
        } else if let Some(parent) = self.node_mut(&labels[..cut]) {
            parent.detach(labels[cut]);
        }
        self.size -= 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(key = %labels.iter().collect::<String>(), "removed key");

        true
    }

    /// Removes every key that starts with `prefix`, including `prefix` itself,
    /// and returns how many keys were removed.
    ///
    /// Removing the empty prefix clears the set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let mut set = TrieSet::from(["ca", "car", "cat", "dog"]);
    ///
    /// assert_eq!(set.remove_prefix("ca"), 3);
    /// assert_eq!(set.remove_prefix("ca"), 0);
    /// assert!(set.contains("dog"));
    /// ```
    pub fn remove_prefix<K: AsChars>(&mut self, prefix: K) -> usize {
        let labels = prefix.as_chars_vec();

        if labels.is_empty() {
            let removed = self.size;
            self.clear();
            return removed;
        }

        let Some((cut, _)) = self.probe(&labels) else {
            return 0;
        };
        let removed = self
            .node_mut(&labels[..cut])
            .and_then(|parent| parent.detach(labels[cut]))
            .map_or(0, |subtree| subtree.count_keys());
        self.size -= removed;

        #[cfg(feature = "tracing")]
        tracing::trace!(prefix = %labels.iter().collect::<String>(), removed, "removed prefix");

        removed
    }

    /// Retains only the keys specified by the predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let mut set = TrieSet::from(["a", "bb", "ccc"]);
    /// set.retain(|key| key.len() > 1);
    /// assert!(!set.contains("a"));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> bool,
    {
        let keys_to_remove: Vec<String> = self.iter().filter(|key| !f(key.as_str())).collect();

        for key in keys_to_remove {
            self.remove(&key);
        }
    }

    /// Returns the smallest key, if any.
    pub fn first(&self) -> Option<String> {
        self.iter().next()
    }

    /// Returns the largest key, if any.
    pub fn last(&self) -> Option<String> {
        self.iter().next_back()
    }

    /// Returns an iterator over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let set = TrieSet::from(["dog", "cat", "car"]);
    ///
    /// let keys: Vec<String> = set.iter().collect();
    /// assert_eq!(keys, ["car", "cat", "dog"]);
    ///
    /// let reversed: Vec<String> = set.iter().rev().collect();
    /// assert_eq!(reversed, ["dog", "cat", "car"]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root, String::new(), self.size)
    }

    /// Returns an iterator over the keys that start with `prefix`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let set = TrieSet::from(["apple", "application", "banana"]);
    ///
    /// let mut iter = set.prefix_iter("app");
    /// assert_eq!(iter.next().as_deref(), Some("apple"));
    /// assert_eq!(iter.next().as_deref(), Some("application"));
    /// assert!(iter.next().is_none());
    /// ```
    pub fn prefix_iter<K: AsChars>(&self, prefix: K) -> PrefixIter<'_> {
        let labels = prefix.as_chars_vec();
        let inner = match self.find(&labels) {
            Some(node) => Iter::new(node, labels.iter().collect(), node.count_keys()),
            None => Iter::new(&self.root, String::new(), 0),
        };
        PrefixIter { inner }
    }

    /// Returns all keys that start with `prefix`, in ascending order.
    pub fn keys_with_prefix<K: AsChars>(&self, prefix: K) -> Vec<String> {
        self.prefix_iter(prefix).collect()
    }

    /// Returns a cursor on the smallest key, or on the ghost position if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let set = TrieSet::from(["a", "b"]);
    ///
    /// let mut cursor = set.cursor_front();
    /// assert_eq!(cursor.current(), Some("a"));
    /// cursor.move_next();
    /// assert_eq!(cursor.current(), Some("b"));
    /// cursor.move_next();
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn cursor_front(&self) -> Cursor<'_> {
        let mut raw = RawCursor::new(&self.root, String::new());
        raw.step(Direction::Forward);
        Cursor::new(raw)
    }

    /// Returns a cursor on the largest key, or on the ghost position if the set is empty.
    pub fn cursor_back(&self) -> Cursor<'_> {
        let mut raw = RawCursor::new(&self.root, String::new());
        raw.step(Direction::Backward);
        Cursor::new(raw)
    }

    /// Returns a cursor on the ghost position, one past the largest key.
    pub fn cursor_ghost(&self) -> Cursor<'_> {
        Cursor::new(RawCursor::new(&self.root, String::new()))
    }

    /// Walks the path spelled by `key`, returning its terminal node.
    fn find<K: AsChars>(&self, key: K) -> Option<&TrieNode> {
        let mut current = &self.root;
        for label in key.as_chars() {
            current = current.child(label)?;
        }
        Some(current)
    }

    fn node_mut(&mut self, labels: &[char]) -> Option<&mut TrieNode> {
        let mut current = &mut self.root;
        for &label in labels {
            current = current.child_mut(label)?;
        }
        Some(current)
    }

    /// Walks the path spelled by `labels` and returns its terminal node together
    /// with the depth of the deepest node on the path that must survive when the
    /// terminal node goes away: the root, a stored key, or a node with other children.
    fn probe(&self, labels: &[char]) -> Option<(usize, &TrieNode)> {
        let mut current = &self.root;
        let mut cut = 0;

        for (depth, &label) in labels.iter().enumerate() {
            if current.is_end || current.children.len() > 1 {
                cut = depth;
            }
            current = current.child(label)?;
        }

        Some((cut, current))
    }
}
