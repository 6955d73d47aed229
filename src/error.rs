//! Failure outcomes and error causes.
//!
//! Every parser failure is a [`Failure`], which says *how* the parser failed
//! ([`Incomplete`](Failure::Incomplete), [`Recoverable`](Failure::Recoverable)
//! or [`Fatal`](Failure::Fatal)) and, for the latter two, carries an error
//! value describing *why*. The error value is any type implementing
//! [`Error`]. Two are provided: the flat `(I, ErrorKind)` pair and the
//! chained [`Cause`].
use crate::input::Input;
use alloc::boxed::Box;
use core::fmt;

/// The reason a parser failed.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    Tag,
    Char,
    OneOf,
    NoneOf,
    Digit,
    Alpha,
    AlphaNumeric,
    Space,
    MultiSpace,
    Eof,
    TakeWhile1,
    TakeWhileMN,
    TakeTill1,
    IsA,
    IsNot,
    Many0,
    Many1,
    ManyMN,
    ManyTill,
    Count,
    SeparatedList,
    Alt,
    Verify,
    Not,
    MapRes,
    /// The kind passed to [`basic::fail`](crate::basic::fail) when no more
    /// specific kind applies. No built-in parser produces it.
    Fail,
    /// Reserved for errors originated by user-written parsers.
    User,
}

impl ErrorKind {
    /// Returns a short, human readable description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Char => "character",
            Self::OneOf => "one of a set",
            Self::NoneOf => "none of a set",
            Self::Digit => "digit",
            Self::Alpha => "alphabetic",
            Self::AlphaNumeric => "alphanumeric",
            Self::Space => "space",
            Self::MultiSpace => "whitespace",
            Self::Eof => "end of input",
            Self::TakeWhile1 => "at least one matching symbol",
            Self::TakeWhileMN => "bounded run of matching symbols",
            Self::TakeTill1 => "at least one non-terminating symbol",
            Self::IsA => "run of set members",
            Self::IsNot => "run of non-members",
            Self::Many0 => "repetition",
            Self::Many1 => "at least one repetition",
            Self::ManyMN => "bounded repetition",
            Self::ManyTill => "repetition until terminator",
            Self::Count => "exact repetition",
            Self::SeparatedList => "separated list",
            Self::Alt => "one of the alternatives",
            Self::Verify => "verification",
            Self::Not => "negative lookahead",
            Self::MapRes => "conversion",
            Self::Fail => "failure",
            Self::User => "user defined",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// How a parser failed.
///
/// * [`Incomplete`](Failure::Incomplete): the input ended before a decision
///   could be made. Only streaming primitives produce it.
/// * [`Recoverable`](Failure::Recoverable): this alternative does not match.
///   Alternation and repetition react to it by trying something else.
/// * [`Fatal`](Failure::Fatal): the input matched far enough that trying
///   anything else is pointless. Every combinator propagates it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure<E> {
    Incomplete,
    Recoverable(E),
    Fatal(E),
}

impl<E> Failure<E> {
    #[inline]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete)
    }

    #[inline]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable(_))
    }

    #[inline]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }

    /// Returns the error value, if there is one.
    pub fn cause(&self) -> Option<&E> {
        match self {
            Self::Incomplete => None,
            Self::Recoverable(err) | Self::Fatal(err) => Some(err),
        }
    }

    /// Consumes the failure, returning the error value if there is one.
    pub fn into_cause(self) -> Option<E> {
        match self {
            Self::Incomplete => None,
            Self::Recoverable(err) | Self::Fatal(err) => Some(err),
        }
    }

    /// Converts the error value, keeping the failure state.
    pub fn map<F, R>(self, map_fn: F) -> Failure<R>
    where
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Incomplete => Failure::Incomplete,
            Self::Recoverable(err) => Failure::Recoverable(map_fn(err)),
            Self::Fatal(err) => Failure::Fatal(map_fn(err)),
        }
    }

    /// Turns a recoverable failure into a fatal one.
    ///
    /// Used by hand-written parsers that commit to a branch once a
    /// distinguishing prefix has been seen.
    pub fn into_fatal(self) -> Self {
        match self {
            Self::Recoverable(err) => Self::Fatal(err),
            other => other,
        }
    }
}

/// Trait for parse error values.
///
/// An error knows the position it was raised at and the [`ErrorKind`] that
/// describes it. Combinators that add context call [`wrap`](Error::wrap);
/// whether the wrapped error is kept is up to the implementation.
pub trait Error<I: Input>: Sized {
    /// Creates a new error at `pos`.
    fn from_kind(pos: I, kind: ErrorKind) -> Self;

    /// Adds outer context to an existing error.
    fn wrap(self, pos: I, kind: ErrorKind) -> Self;

    /// Returns the input position the error was raised at.
    fn position(&self) -> &I;

    /// Returns the kind of the error.
    fn kind(&self) -> ErrorKind;
}

impl<I: Input> Error<I> for (I, ErrorKind) {
    #[inline]
    fn from_kind(pos: I, kind: ErrorKind) -> Self {
        (pos, kind)
    }

    /// Adding context to a flat error keeps the innermost error.
    #[inline]
    fn wrap(self, _pos: I, _kind: ErrorKind) -> Self {
        self
    }

    #[inline]
    fn position(&self) -> &I {
        &self.0
    }

    #[inline]
    fn kind(&self) -> ErrorKind {
        self.1
    }
}

/// A chain of error causes.
///
/// The outermost cause describes the construct that failed (for example
/// [`ErrorKind::Alt`]) and [`inner`](Cause::inner) leads towards the
/// primitive that originally failed.
///
/// ```
/// # use carve::prelude::*;
/// # use carve::{Cause, ErrorKind, complete::{tag, digit1}};
/// fn number_or_nil(input: &str) -> PResult<&str, &str, Cause<&str>> {
///     alt!(digit1, tag("nil")).parse(input)
/// }
///
/// let err = number_or_nil("x").unwrap_err().into_cause().unwrap();
/// assert_eq!(err.kind(), ErrorKind::Alt);
/// assert_eq!(err.root().kind(), ErrorKind::Tag);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {kind} at {pos:?}")]
pub struct Cause<I> {
    pos: I,
    kind: ErrorKind,
    inner: Option<Box<Cause<I>>>,
}

/// Iterator over a [`Cause`] and its inner causes, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a, I>(Option<&'a Cause<I>>);

impl<I> Cause<I> {
    pub fn new(pos: I, kind: ErrorKind) -> Self {
        Self {
            pos,
            kind,
            inner: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> &I {
        &self.pos
    }

    /// Returns the cause this one wraps, if any.
    #[inline]
    pub fn inner(&self) -> Option<&Cause<I>> {
        self.inner.as_deref()
    }

    /// Returns the innermost cause.
    pub fn root(&self) -> &Cause<I> {
        let mut cause = self;
        while let Some(inner) = cause.inner() {
            cause = inner;
        }
        cause
    }

    pub fn chain(&self) -> Chain<'_, I> {
        Chain(Some(self))
    }

    /// Returns the kinds along the chain, outermost first.
    pub fn kinds(&self) -> impl Iterator<Item = ErrorKind> + '_ {
        self.chain().map(Cause::kind)
    }
}

impl<'a, I> Iterator for Chain<'a, I> {
    type Item = &'a Cause<I>;

    fn next(&mut self) -> Option<Self::Item> {
        let cause = self.0?;
        self.0 = cause.inner();
        Some(cause)
    }
}

impl<I: Input> Error<I> for Cause<I> {
    #[inline]
    fn from_kind(pos: I, kind: ErrorKind) -> Self {
        Self::new(pos, kind)
    }

    fn wrap(self, pos: I, kind: ErrorKind) -> Self {
        Self {
            pos,
            kind,
            inner: Some(Box::new(self)),
        }
    }

    #[inline]
    fn position(&self) -> &I {
        &self.pos
    }

    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::{string::ToString, vec::Vec};

    #[test]
    fn cause_chain_order() {
        let err = Cause::from_kind("abc", ErrorKind::Tag)
            .wrap("xabc", ErrorKind::Many1)
            .wrap("xabc", ErrorKind::Alt);
        assert_eq!(
            err.kinds().collect::<Vec<_>>(),
            [ErrorKind::Alt, ErrorKind::Many1, ErrorKind::Tag]
        );
        assert_eq!(err.root().position(), &"abc");
        assert_eq!(err.inner().map(Cause::kind), Some(ErrorKind::Many1));
        assert_eq!(err.chain().count(), 3);
    }

    #[test]
    fn flat_error_keeps_innermost() {
        let err = <(&str, ErrorKind)>::from_kind("abc", ErrorKind::Digit)
            .wrap("zabc", ErrorKind::Alt);
        assert_eq!(err, ("abc", ErrorKind::Digit));
    }

    #[test]
    fn failure_accessors() {
        let fail: Failure<(&str, ErrorKind)> = Failure::Recoverable(("x", ErrorKind::Tag));
        assert!(fail.is_recoverable());
        assert_eq!(fail.cause().map(|e| e.1), Some(ErrorKind::Tag));
        assert!(fail.into_fatal().is_fatal());

        let incomplete: Failure<(&str, ErrorKind)> = Failure::Incomplete;
        assert!(incomplete.is_incomplete());
        assert_eq!(incomplete.into_cause(), None);
        assert!(incomplete.into_fatal().is_incomplete());
    }

    #[test]
    fn cause_display() {
        let err = Cause::new("rest", ErrorKind::Digit);
        assert_eq!(err.to_string(), "expected digit at \"rest\"");
    }
}
