use std::iter::FusedIterator;

use crate::{
    TrieSet,
    cursor::{Direction, RawCursor},
    node::TrieNode,
};

/// An iterator over the keys of a `TrieSet`, in ascending order.
///
/// Keys are yielded as owned snapshots. Call [`rev`] for descending order.
///
/// This struct is created by the [`iter`] method on [`TrieSet`].
///
/// [`iter`]: TrieSet::iter
/// [`rev`]: Iterator::rev
#[derive(Clone)]
pub struct Iter<'a> {
    pub(crate) front: RawCursor<'a>,
    pub(crate) back: RawCursor<'a>,
    pub(crate) remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(base: &'a TrieNode, prefix: String, remaining: usize) -> Self {
        Iter {
            front: RawCursor::new(base, prefix.clone()),
            back: RawCursor::new(base, prefix),
            remaining,
        }
    }

    fn advance(cursor: &mut RawCursor<'a>, direction: Direction) -> Option<String> {
        cursor.step(direction);
        cursor.key().map(str::to_owned)
    }
}

impl Iterator for Iter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Self::advance(&mut self.front, Direction::Forward)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Self::advance(&mut self.back, Direction::Backward)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// An iterator over the keys of a `TrieSet` that start with a given prefix.
///
/// Keys are reported in full, prefix included.
///
/// This struct is created by the [`prefix_iter`] method on [`TrieSet`].
///
/// [`prefix_iter`]: TrieSet::prefix_iter
#[derive(Clone)]
pub struct PrefixIter<'a> {
    pub(crate) inner: Iter<'a>,
}

impl Iterator for PrefixIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for PrefixIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for PrefixIter<'_> {}

impl FusedIterator for PrefixIter<'_> {}

/// An owning iterator over the keys of a `TrieSet`.
///
/// This struct is created when a `TrieSet` is consumed using `into_iter()`.
/// The keys are collected in order up front and the nodes are released before
/// the first key is yielded.
pub struct IntoIter {
    keys: std::vec::IntoIter<String>,
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl IntoIterator for TrieSet {
    type Item = String;
    type IntoIter = IntoIter;

    /// Consumes the set into an iterator yielding owned keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let set = TrieSet::from(["b", "a"]);
    ///
    /// let keys: Vec<String> = set.into_iter().collect();
    /// assert_eq!(keys, ["a", "b"]);
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        let keys: Vec<String> = self.iter().collect();
        drop(self);
        IntoIter {
            keys: keys.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a TrieSet {
    type Item = String;
    type IntoIter = Iter<'a>;

    /// Returns an iterator over the keys of the set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let set = TrieSet::from(["a", "b"]);
    ///
    /// for key in &set {
    ///     println!("{}", key);
    /// }
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
