use crate::{OwnedSlice, OwnedStr};
use alloc::{boxed::Box, string::String, sync::Arc, vec::Vec};

/// Outcome of comparing the head of an input against a literal pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareResult {
    /// The input starts with the whole pattern, which spans this many
    /// storage units.
    Match(usize),
    /// The input is shorter than the pattern but agrees with it so far.
    ///
    /// More input could still produce a [`Match`](CompareResult::Match).
    ProperPrefix,
    /// The input and the pattern differ somewhere in their common prefix.
    Mismatch,
}

/// A parsable, immutable sequence of symbols.
///
/// An [`Input`] value describes the unconsumed tail of some underlying
/// sequence. Nothing in `carve` ever mutates an input: consuming symbols is
/// done with [`take_split`](Input::take_split), which produces new values for
/// both the consumed prefix and the remainder. As a result any input can be
/// retried against another parser without undoing anything, which is what
/// makes backtracking in [`alt`](crate::branch::alt) free.
///
/// Lengths and offsets are measured in *storage units* of the underlying
/// sequence: bytes for UTF-8 text, elements for slices. Offsets passed to
/// [`take_split`](Input::take_split) must come from this input (either
/// [`input_len`](Input::input_len) itself or an index produced by
/// [`iter_indices`](Input::iter_indices), [`position`](Input::position),
/// [`slice_index`](Input::slice_index) or a [`Compare`] match).
///
/// `carve` implements [`Input`] for `&str`, `&[T]`, [`OwnedStr`],
/// [`OwnedSlice<T>`] and, with the `ascii` feature, `&AsciiStr`.
pub trait Input: Clone {
    /// The symbol type this input is a sequence of.
    type Item: Copy;

    /// Returns the remaining length in storage units.
    fn input_len(&self) -> usize;

    /// Splits the input at `offset`, returning `(consumed, remainder)`.
    ///
    /// `offset` must not exceed [`input_len`](Input::input_len) and must fall
    /// on a symbol boundary.
    fn take_split(&self, offset: usize) -> (Self, Self);

    /// Iterates over the remaining symbols together with their offsets.
    fn iter_indices(&self) -> impl Iterator<Item = (usize, Self::Item)> + '_;

    /// Returns the offset of the first symbol satisfying `pred`.
    fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: Fn(Self::Item) -> bool,
    {
        self.iter_indices()
            .find(|&(_, item)| pred(item))
            .map(|(idx, _)| idx)
    }

    /// Returns the offset just past the first `count` symbols.
    ///
    /// [`None`] is returned if fewer than `count` symbols remain.
    fn slice_index(&self, count: usize) -> Option<usize> {
        let mut seen = 0;
        for (idx, _) in self.iter_indices() {
            if seen == count {
                return Some(idx);
            }
            seen += 1;
        }
        if seen == count {
            Some(self.input_len())
        } else {
            None
        }
    }

    /// Returns `true` if no symbols remain.
    fn is_empty(&self) -> bool {
        self.input_len() == 0
    }
}

/// Comparison of an input's head against a literal pattern of type `T`.
pub trait Compare<T> {
    /// Compares the start of `self` with `pattern`.
    fn compare(&self, pattern: T) -> CompareResult;

    /// Compares the start of `self` with `pattern`, ignoring ASCII case.
    fn compare_no_case(&self, pattern: T) -> CompareResult;
}

/// Byte view of a text-like input or pattern.
///
/// Any two [`AsBytes`] types can be compared against each other with
/// [`Compare`].
pub trait AsBytes {
    /// Returns the underlying bytes.
    fn as_bytes(&self) -> &[u8];

    /// Returns `true` if the bytes may be split at `offset`.
    ///
    /// Text overrides this to reject offsets inside a UTF-8 sequence.
    #[inline]
    fn is_boundary(&self, offset: usize) -> bool {
        offset <= self.as_bytes().len()
    }
}

/// ASCII classification of a symbol.
///
/// Only the ASCII ranges are recognized; any other symbol is in none of the
/// classes.
pub trait AsChar: Copy {
    /// Converts the symbol to a [`char`].
    fn as_char(self) -> char;

    /// Returns `true` if the symbol stands for `c`.
    #[inline]
    fn is_char(self, c: char) -> bool {
        self.as_char() == c
    }

    /// `A-Z` or `a-z`.
    #[inline]
    fn is_alpha(self) -> bool {
        self.as_char().is_ascii_alphabetic()
    }

    /// `0-9`.
    #[inline]
    fn is_digit(self) -> bool {
        self.as_char().is_ascii_digit()
    }

    #[inline]
    fn is_alphanum(self) -> bool {
        self.is_alpha() || self.is_digit()
    }

    /// Space or horizontal tab.
    #[inline]
    fn is_space(self) -> bool {
        matches!(self.as_char(), ' ' | '\t')
    }

    /// Line feed or carriage return.
    #[inline]
    fn is_newline(self) -> bool {
        matches!(self.as_char(), '\n' | '\r')
    }

    #[inline]
    fn is_multispace(self) -> bool {
        self.is_space() || self.is_newline()
    }
}

/// A set of symbols, used by [`is_a`](crate::complete::is_a),
/// [`one_of`](crate::complete::one_of) and friends.
pub trait FindToken<T> {
    /// Returns `true` if `token` is a member of the set.
    fn find_token(&self, token: T) -> bool;
}

/// Trait for types that can be directly converted into an [`Input`] type.
///
/// [`IntoInput`] is analogous to [`IntoIterator`]. Every [`Input`] converts to
/// itself, references to owning containers convert to borrowed views (so
/// `my_parser.parse(&my_string)` works), and owning containers passed by value
/// convert to the shared, owned inputs [`OwnedStr`] and [`OwnedSlice`].
pub trait IntoInput {
    /// The [`Input`] this type will convert to.
    type Input: Input;

    /// Convert to an [`Input`] type.
    fn into_input(self) -> Self::Input;
}

pub(crate) fn compare_bytes(input: &[u8], pattern: &[u8], fold_case: bool) -> CompareResult {
    let len = core::cmp::min(input.len(), pattern.len());
    let head = &input[..len];
    let expected = &pattern[..len];
    let same = if fold_case {
        head.eq_ignore_ascii_case(expected)
    } else {
        head == expected
    };
    if !same {
        CompareResult::Mismatch
    } else if input.len() < pattern.len() {
        CompareResult::ProperPrefix
    } else {
        CompareResult::Match(pattern.len())
    }
}

impl<S: AsBytes, P: AsBytes> Compare<P> for S {
    #[inline]
    fn compare(&self, pattern: P) -> CompareResult {
        on_boundary(self, compare_bytes(self.as_bytes(), pattern.as_bytes(), false))
    }

    #[inline]
    fn compare_no_case(&self, pattern: P) -> CompareResult {
        on_boundary(self, compare_bytes(self.as_bytes(), pattern.as_bytes(), true))
    }
}

#[inline]
fn on_boundary<S: AsBytes>(input: &S, res: CompareResult) -> CompareResult {
    match res {
        CompareResult::Match(len) if !input.is_boundary(len) => CompareResult::Mismatch,
        res => res,
    }
}

impl<'a> Input for &'a str {
    type Item = char;

    #[inline]
    fn input_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn take_split(&self, offset: usize) -> (Self, Self) {
        let (consumed, rem) = self.split_at(offset);
        (consumed, rem)
    }

    #[inline]
    fn iter_indices(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.char_indices()
    }
}

impl<'a, T: Copy> Input for &'a [T] {
    type Item = T;

    #[inline]
    fn input_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn take_split(&self, offset: usize) -> (Self, Self) {
        let (consumed, rem) = self.split_at(offset);
        (consumed, rem)
    }

    #[inline]
    fn iter_indices(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.iter().copied().enumerate()
    }

    #[inline]
    fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: Fn(T) -> bool,
    {
        self.iter().position(|&item| pred(item))
    }

    #[inline]
    fn slice_index(&self, count: usize) -> Option<usize> {
        (count <= self.len()).then_some(count)
    }
}

#[cfg(feature = "ascii")]
impl<'a> Input for &'a crate::AsciiStr {
    type Item = crate::AsciiChar;

    #[inline]
    fn input_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn take_split(&self, offset: usize) -> (Self, Self) {
        (&self[..offset], &self[offset..])
    }

    #[inline]
    fn iter_indices(&self) -> impl Iterator<Item = (usize, crate::AsciiChar)> + '_ {
        self.as_slice().iter().copied().enumerate()
    }

    #[inline]
    fn slice_index(&self, count: usize) -> Option<usize> {
        (count <= self.len()).then_some(count)
    }
}

impl AsBytes for &str {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }

    #[inline]
    fn is_boundary(&self, offset: usize) -> bool {
        self.is_char_boundary(offset)
    }
}

impl AsBytes for &[u8] {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl<const LEN: usize> AsBytes for &[u8; LEN] {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

#[cfg(feature = "ascii")]
impl AsBytes for &crate::AsciiStr {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        crate::AsciiStr::as_bytes(self)
    }
}

impl AsChar for u8 {
    #[inline]
    fn as_char(self) -> char {
        self as char
    }

    /// A byte stands for an ASCII `c` only.
    #[inline]
    fn is_char(self, c: char) -> bool {
        self.is_ascii() && self as char == c
    }
}

impl AsChar for char {
    #[inline]
    fn as_char(self) -> char {
        self
    }
}

#[cfg(feature = "ascii")]
impl AsChar for crate::AsciiChar {
    #[inline]
    fn as_char(self) -> char {
        crate::AsciiChar::as_char(self)
    }
}

impl FindToken<char> for &str {
    fn find_token(&self, token: char) -> bool {
        self.contains(token)
    }
}

impl FindToken<u8> for &str {
    fn find_token(&self, token: u8) -> bool {
        token.is_ascii() && str::as_bytes(self).contains(&token)
    }
}

#[cfg(feature = "ascii")]
impl FindToken<crate::AsciiChar> for &str {
    fn find_token(&self, token: crate::AsciiChar) -> bool {
        str::as_bytes(self).contains(&token.as_byte())
    }
}

impl<T: PartialEq> FindToken<T> for &[T] {
    fn find_token(&self, token: T) -> bool {
        self.contains(&token)
    }
}

impl<T: PartialEq, const LEN: usize> FindToken<T> for &[T; LEN] {
    fn find_token(&self, token: T) -> bool {
        self.contains(&token)
    }
}

impl<T: PartialEq, const LEN: usize> FindToken<T> for [T; LEN] {
    fn find_token(&self, token: T) -> bool {
        self.contains(&token)
    }
}

impl FindToken<char> for char {
    fn find_token(&self, token: char) -> bool {
        *self == token
    }
}

impl FindToken<u8> for u8 {
    fn find_token(&self, token: u8) -> bool {
        *self == token
    }
}

impl<I: Input> IntoInput for I {
    type Input = I;

    fn into_input(self) -> Self::Input {
        self
    }
}

impl<'a, T: Copy, const LEN: usize> IntoInput for &'a [T; LEN] {
    type Input = &'a [T];

    fn into_input(self) -> Self::Input {
        self
    }
}

impl<'a, T: Copy> IntoInput for &'a Vec<T> {
    type Input = &'a [T];

    fn into_input(self) -> &'a [T] {
        self
    }
}

impl<'a, T: Copy> IntoInput for &'a Box<[T]> {
    type Input = &'a [T];

    fn into_input(self) -> &'a [T] {
        self
    }
}

impl<'a> IntoInput for &'a Box<str> {
    type Input = &'a str;

    fn into_input(self) -> &'a str {
        self
    }
}

impl<'a> IntoInput for &'a String {
    type Input = &'a str;

    fn into_input(self) -> &'a str {
        self
    }
}

#[cfg(feature = "ascii")]
impl<'a> IntoInput for &'a crate::AsciiString {
    type Input = &'a crate::AsciiStr;

    fn into_input(self) -> Self::Input {
        self
    }
}

impl IntoInput for String {
    type Input = OwnedStr;

    fn into_input(self) -> OwnedStr {
        OwnedStr::new(self)
    }
}

impl IntoInput for Arc<str> {
    type Input = OwnedStr;

    fn into_input(self) -> OwnedStr {
        OwnedStr::new(self)
    }
}

impl<T: Copy> IntoInput for Vec<T> {
    type Input = OwnedSlice<T>;

    fn into_input(self) -> OwnedSlice<T> {
        OwnedSlice::new(self)
    }
}

impl<T: Copy> IntoInput for Arc<[T]> {
    type Input = OwnedSlice<T>;

    fn into_input(self) -> OwnedSlice<T> {
        OwnedSlice::new(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compare_prefix_states() {
        assert_eq!("hello world".compare("hello"), CompareResult::Match(5));
        assert_eq!("hel".compare("hello"), CompareResult::ProperPrefix);
        assert_eq!("ciao".compare("hello"), CompareResult::Mismatch);
        assert_eq!("he".compare("hx"), CompareResult::Mismatch);
        assert_eq!("".compare("hello"), CompareResult::ProperPrefix);
        assert_eq!("abc".compare(""), CompareResult::Match(0));
    }

    #[test]
    fn compare_across_representations() {
        let bytes: &[u8] = b"<svg>";
        assert_eq!(bytes.compare("<svg"), CompareResult::Match(4));
        assert_eq!(bytes.compare(b"<sv"), CompareResult::Match(3));
        assert_eq!("HeLLo".compare_no_case("hello"), CompareResult::Match(5));
        assert_eq!("HeLLo".compare("hello"), CompareResult::Mismatch);
    }

    #[test]
    fn byte_patterns_split_text_on_char_boundaries() {
        assert_eq!("é".compare(&b"\xC3"[..]), CompareResult::Mismatch);
        assert_eq!("éa".compare(&b"\xC3\xA9"[..]), CompareResult::Match(2));
        assert_eq!("é".compare_no_case(&b"\xC3"[..]), CompareResult::Mismatch);
        assert_eq!("".compare(&b"\xC3"[..]), CompareResult::ProperPrefix);
    }

    #[test]
    fn bytes_stand_for_ascii_chars_only() {
        assert!(b'a'.is_char('a'));
        assert!(!0xE9u8.is_char('é'));
        assert!('é'.is_char('é'));
        assert!(!"é".find_token(0xC3u8));
        assert!("ab".find_token(b'b'));
    }

    #[test]
    fn str_offsets_are_bytes() {
        let input = "é1x";
        assert_eq!(input.input_len(), 4);
        assert_eq!(input.slice_index(1), Some(2));
        assert_eq!(input.slice_index(3), Some(4));
        assert_eq!(input.slice_index(4), None);
        assert_eq!(input.position(|c| AsChar::is_digit(c)), Some(2));
        assert_eq!(input.take_split(2), ("é", "1x"));
    }

    #[test]
    fn slice_offsets_are_elements() {
        let input: &[u8] = b"ab1";
        assert_eq!(input.slice_index(3), Some(3));
        assert_eq!(input.slice_index(4), None);
        assert_eq!(input.position(|b| b.is_digit()), Some(2));
    }

    #[test]
    fn classification_is_ascii_only() {
        assert!('a'.is_alpha());
        assert!(!'é'.is_alpha());
        assert!(b'7'.is_digit());
        assert!(!AsChar::is_digit('٣'));
        assert!('\t'.is_space());
        assert!('\n'.is_multispace());
        assert!(!'\n'.is_space());
    }

    #[test]
    fn token_sets() {
        assert!("+-".find_token('-'));
        assert!(!"+-".find_token('*'));
        assert!("+-".find_token(b'+'));
        assert!(b"xyz".find_token(b'y'));
        assert!(['a', 'b'].find_token('b'));
    }
}
