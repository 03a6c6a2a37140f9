//! Set algebra between two `TrieSet`s.
//!
//! Every operation here is defined over the stored key sets only; two tries with
//! the same keys compare equal no matter how their nodes were grown or pruned.

use std::cmp::Ordering;
use std::iter::{FusedIterator, Peekable};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{Iter, TrieSet};

impl AddAssign<&TrieSet> for TrieSet {
    /// Inserts every key of `rhs`.
    fn add_assign(&mut self, rhs: &TrieSet) {
        for key in rhs {
            self.insert(key);
        }
    }
}

impl SubAssign<&TrieSet> for TrieSet {
    /// Removes every key of `rhs`. Keys of `rhs` are matched exactly, never as prefixes.
    fn sub_assign(&mut self, rhs: &TrieSet) {
        for key in rhs {
            self.remove(key);
        }
    }
}

impl Add<&TrieSet> for TrieSet {
    type Output = TrieSet;

    fn add(mut self, rhs: &TrieSet) -> TrieSet {
        self += rhs;
        self
    }
}

impl Add<&TrieSet> for &TrieSet {
    type Output = TrieSet;

    /// Returns the union of `self` and `rhs` as a new `TrieSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let a = TrieSet::from(["a", "ab"]);
    /// let b = TrieSet::from(["ab", "abc"]);
    ///
    /// assert_eq!(&a + &b, TrieSet::from(["a", "ab", "abc"]));
    /// ```
    fn add(self, rhs: &TrieSet) -> TrieSet {
        self.clone() + rhs
    }
}

impl Sub<&TrieSet> for TrieSet {
    type Output = TrieSet;

    fn sub(mut self, rhs: &TrieSet) -> TrieSet {
        self -= rhs;
        self
    }
}

impl Sub<&TrieSet> for &TrieSet {
    type Output = TrieSet;

    /// Returns the keys of `self` that are not in `rhs` as a new `TrieSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let a = TrieSet::from(["a", "ab"]);
    /// let b = TrieSet::from(["ab", "abc"]);
    ///
    /// assert_eq!(&a - &b, TrieSet::from(["a"]));
    /// ```
    fn sub(self, rhs: &TrieSet) -> TrieSet {
        self.clone() - rhs
    }
}

impl PartialEq for TrieSet {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }

        self.iter().eq(other.iter())
    }
}

impl Eq for TrieSet {}

/// Orders tries by inclusion: `a < b` iff `a` is a proper subset of `b`.
///
/// This is a partial order. Tries where neither contains the other are
/// incomparable, so `<`, `>`, `<=`, `>=` and `==` are all `false` for them.
///
/// # Examples
///
/// ```
/// # use trieset::TrieSet;
/// let a = TrieSet::from(["a", "ab"]);
/// let b = TrieSet::from(["ab", "abc"]);
/// let c = TrieSet::from(["a", "ab", "abc"]);
///
/// assert!(a < c);
/// assert!(c >= b);
/// assert_eq!(a.partial_cmp(&b), None);
/// assert!(!(a < b) && !(a > b) && a != b);
/// ```
impl PartialOrd for TrieSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.size.cmp(&other.size) {
            Ordering::Equal => (self == other).then_some(Ordering::Equal),
            Ordering::Less => self.is_subset(other).then_some(Ordering::Less),
            Ordering::Greater => other.is_subset(self).then_some(Ordering::Greater),
        }
    }
}

impl TrieSet {
    /// Returns `true` if every key of `self` is also in `other`.
    pub fn is_subset(&self, other: &TrieSet) -> bool {
        self.size <= other.size && self.iter().all(|key| other.contains(&key))
    }

    /// Returns `true` if every key of `other` is also in `self`.
    pub fn is_superset(&self, other: &TrieSet) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` share no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let a = TrieSet::from(["ab"]);
    /// let b = TrieSet::from(["a", "abc"]);
    /// assert!(a.is_disjoint(&b));
    /// ```
    pub fn is_disjoint(&self, other: &TrieSet) -> bool {
        self.intersection(other).next().is_none()
    }

    /// Visits the keys in `self` or `other`, without duplicates, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let a = TrieSet::from(["a", "c"]);
    /// let b = TrieSet::from(["b", "c"]);
    ///
    /// let union: Vec<String> = a.union(&b).collect();
    /// assert_eq!(union, ["a", "b", "c"]);
    /// ```
    pub fn union<'a>(&'a self, other: &'a TrieSet) -> Union<'a> {
        Union {
            merge: Merge::new(self, other),
        }
    }

    /// Visits the keys in both `self` and `other`, in ascending order.
    pub fn intersection<'a>(&'a self, other: &'a TrieSet) -> Intersection<'a> {
        Intersection {
            merge: Merge::new(self, other),
        }
    }

    /// Visits the keys in `self` but not in `other`, in ascending order.
    pub fn difference<'a>(&'a self, other: &'a TrieSet) -> Difference<'a> {
        Difference {
            merge: Merge::new(self, other),
        }
    }

    /// Visits the keys in exactly one of `self` and `other`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieset::TrieSet;
    /// let a = TrieSet::from(["a", "ab"]);
    /// let b = TrieSet::from(["ab", "abc"]);
    ///
    /// let diff: Vec<String> = a.symmetric_difference(&b).collect();
    /// assert_eq!(diff, ["a", "abc"]);
    /// ```
    pub fn symmetric_difference<'a>(&'a self, other: &'a TrieSet) -> SymmetricDifference<'a> {
        SymmetricDifference {
            merge: Merge::new(self, other),
        }
    }
}

enum Peeked {
    Both(Ordering),
    Left,
    Right,
    Neither,
}

/// Two sorted key walks advanced in lockstep.
#[derive(Clone)]
struct Merge<'a> {
    left: Peekable<Iter<'a>>,
    right: Peekable<Iter<'a>>,
}

impl<'a> Merge<'a> {
    fn new(left: &'a TrieSet, right: &'a TrieSet) -> Self {
        Merge {
            left: left.iter().peekable(),
            right: right.iter().peekable(),
        }
    }

    fn peek(&mut self) -> Peeked {
        match (self.left.peek(), self.right.peek()) {
            (Some(l), Some(r)) => Peeked::Both(l.cmp(r)),
            (Some(_), None) => Peeked::Left,
            (None, Some(_)) => Peeked::Right,
            (None, None) => Peeked::Neither,
        }
    }

    fn upper_bound(&self) -> usize {
        self.left.len() + self.right.len()
    }
}

/// A lazy iterator producing the union of two `TrieSet`s.
///
/// This struct is created by the [`union`] method on [`TrieSet`].
///
/// [`union`]: TrieSet::union
#[derive(Clone)]
pub struct Union<'a> {
    merge: Merge<'a>,
}

impl Iterator for Union<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.merge.peek() {
            Peeked::Both(Ordering::Less) | Peeked::Left => self.merge.left.next(),
            Peeked::Both(Ordering::Greater) | Peeked::Right => self.merge.right.next(),
            Peeked::Both(Ordering::Equal) => {
                self.merge.right.next();
                self.merge.left.next()
            }
            Peeked::Neither => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower = self.merge.left.len().max(self.merge.right.len());
        (lower, Some(self.merge.upper_bound()))
    }
}

impl FusedIterator for Union<'_> {}

/// A lazy iterator producing the intersection of two `TrieSet`s.
///
/// This struct is created by the [`intersection`] method on [`TrieSet`].
///
/// [`intersection`]: TrieSet::intersection
#[derive(Clone)]
pub struct Intersection<'a> {
    merge: Merge<'a>,
}

impl Iterator for Intersection<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.merge.peek() {
                Peeked::Both(Ordering::Less) => {
                    self.merge.left.next();
                }
                Peeked::Both(Ordering::Greater) => {
                    self.merge.right.next();
                }
                Peeked::Both(Ordering::Equal) => {
                    self.merge.right.next();
                    return self.merge.left.next();
                }
                Peeked::Left | Peeked::Right | Peeked::Neither => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.merge.left.len().min(self.merge.right.len())))
    }
}

impl FusedIterator for Intersection<'_> {}

/// A lazy iterator producing the keys of one `TrieSet` missing from another.
///
/// This struct is created by the [`difference`] method on [`TrieSet`].
///
/// [`difference`]: TrieSet::difference
#[derive(Clone)]
pub struct Difference<'a> {
    merge: Merge<'a>,
}

impl Iterator for Difference<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.merge.peek() {
                Peeked::Both(Ordering::Less) | Peeked::Left => return self.merge.left.next(),
                Peeked::Both(Ordering::Equal) => {
                    self.merge.left.next();
                    self.merge.right.next();
                }
                Peeked::Both(Ordering::Greater) => {
                    self.merge.right.next();
                }
                Peeked::Right | Peeked::Neither => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.merge.left.len()))
    }
}

impl FusedIterator for Difference<'_> {}

/// A lazy iterator producing the keys in exactly one of two `TrieSet`s.
///
/// This struct is created by the [`symmetric_difference`] method on [`TrieSet`].
///
/// [`symmetric_difference`]: TrieSet::symmetric_difference
#[derive(Clone)]
pub struct SymmetricDifference<'a> {
    merge: Merge<'a>,
}

impl Iterator for SymmetricDifference<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.merge.peek() {
                Peeked::Both(Ordering::Less) | Peeked::Left => return self.merge.left.next(),
                Peeked::Both(Ordering::Greater) | Peeked::Right => {
                    return self.merge.right.next();
                }
                Peeked::Both(Ordering::Equal) => {
                    self.merge.left.next();
                    self.merge.right.next();
                }
                Peeked::Neither => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.merge.upper_bound()))
    }
}

impl FusedIterator for SymmetricDifference<'_> {}
