use std::borrow::Cow;

/// The `AsChars` trait allows a type to be used as a key in a `TrieSet`.
///
/// Each `char` is one edge label in the trie.
pub trait AsChars {
    /// Returns the labels of the key, in order.
    fn as_chars(&self) -> impl Iterator<Item = char>;

    fn as_chars_vec(&self) -> Vec<char> {
        self.as_chars().collect()
    }

    fn to_key_string(&self) -> String {
        self.as_chars().collect()
    }
}

impl AsChars for char {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        std::iter::once(*self)
    }
}

impl AsChars for str {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        self.chars()
    }
}

impl AsChars for String {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        self.as_str().chars()
    }
}

impl AsChars for Box<str> {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        self.chars()
    }
}

impl AsChars for Cow<'_, str> {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        self.chars()
    }
}

impl AsChars for [char] {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        self.iter().copied()
    }
}

impl AsChars for Vec<char> {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        self.iter().copied()
    }
}

impl<const N: usize> AsChars for [char; N] {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        self.iter().copied()
    }
}

impl<T: AsChars + ?Sized> AsChars for &T {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        T::as_chars(*self)
    }
}
