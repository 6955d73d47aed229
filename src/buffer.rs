//! Owned, cheaply clonable inputs.
//!
//! [`OwnedStr`] and [`OwnedSlice`] keep the whole buffer behind an [`Arc`]
//! and describe a window into it. Taking a prefix or a remainder only
//! adjusts the window, so parsing an owned buffer never copies its
//! contents, and every sub-view produced during a parse keeps the buffer
//! alive on its own.
use crate::input::{AsBytes, Input};
use alloc::{string::String, sync::Arc, vec::Vec};
use core::fmt;
use core::hash::{Hash, Hasher};

/// Shared, owned UTF-8 text.
///
/// ```
/// # use carve::{Input, OwnedStr};
/// let text = OwnedStr::new("key=value");
/// let (key, rest) = text.take_split(3);
/// assert_eq!(key, "key");
/// assert_eq!(rest, "=value");
/// assert_eq!(rest.offset(), 3);
/// ```
#[derive(Clone)]
pub struct OwnedStr {
    buf: Arc<str>,
    start: usize,
    end: usize,
}

/// Shared, owned sequence of `T`.
#[derive(Clone)]
pub struct OwnedSlice<T> {
    buf: Arc<[T]>,
    start: usize,
    end: usize,
}

impl OwnedStr {
    /// Creates a view covering all of `text`.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let buf = text.into();
        let end = buf.len();
        Self { buf, start: 0, end }
    }

    /// Returns the viewed text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf[self.start..self.end]
    }

    /// Returns the byte offset of this view within the whole buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.start
    }
}

impl<T> OwnedSlice<T> {
    /// Creates a view covering all of `items`.
    pub fn new(items: impl Into<Arc<[T]>>) -> Self {
        let buf = items.into();
        let end = buf.len();
        Self { buf, start: 0, end }
    }

    /// Returns the viewed elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[self.start..self.end]
    }

    /// Returns the element offset of this view within the whole buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.start
    }
}

impl Input for OwnedStr {
    type Item = char;

    #[inline]
    fn input_len(&self) -> usize {
        self.end - self.start
    }

    fn take_split(&self, offset: usize) -> (Self, Self) {
        debug_assert!(self.as_str().is_char_boundary(offset));
        let mid = self.start + offset;
        (
            Self {
                buf: Arc::clone(&self.buf),
                start: self.start,
                end: mid,
            },
            Self {
                buf: Arc::clone(&self.buf),
                start: mid,
                end: self.end,
            },
        )
    }

    #[inline]
    fn iter_indices(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.as_str().char_indices()
    }
}

impl<T: Copy> Input for OwnedSlice<T> {
    type Item = T;

    #[inline]
    fn input_len(&self) -> usize {
        self.end - self.start
    }

    fn take_split(&self, offset: usize) -> (Self, Self) {
        debug_assert!(offset <= self.input_len());
        let mid = self.start + offset;
        (
            Self {
                buf: Arc::clone(&self.buf),
                start: self.start,
                end: mid,
            },
            Self {
                buf: Arc::clone(&self.buf),
                start: mid,
                end: self.end,
            },
        )
    }

    #[inline]
    fn iter_indices(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.as_slice().iter().copied().enumerate()
    }

    #[inline]
    fn slice_index(&self, count: usize) -> Option<usize> {
        (count <= self.input_len()).then_some(count)
    }
}

impl AsBytes for OwnedStr {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    #[inline]
    fn is_boundary(&self, offset: usize) -> bool {
        self.as_str().is_char_boundary(offset)
    }
}

impl AsBytes for OwnedSlice<u8> {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

impl From<&str> for OwnedStr {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for OwnedStr {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl<T: Clone> From<&[T]> for OwnedSlice<T> {
    fn from(items: &[T]) -> Self {
        Self::new(items)
    }
}

impl<T> From<Vec<T>> for OwnedSlice<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl fmt::Debug for OwnedStr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for OwnedStr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnedSlice<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl PartialEq for OwnedStr {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for OwnedStr {}

impl Hash for OwnedStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl PartialEq<str> for OwnedStr {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for OwnedStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<OwnedStr> for &str {
    fn eq(&self, other: &OwnedStr) -> bool {
        *self == other.as_str()
    }
}

impl<T: PartialEq> PartialEq for OwnedSlice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for OwnedSlice<T> {}

impl<T: Hash> Hash for OwnedSlice<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: PartialEq> PartialEq<[T]> for OwnedSlice<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for OwnedSlice<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const LEN: usize> PartialEq<&[T; LEN]> for OwnedSlice<T> {
    fn eq(&self, other: &&[T; LEN]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
