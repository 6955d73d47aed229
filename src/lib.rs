#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Small, composable parser-combinators.
//! `carve` is a parser-combinator library in the spirit of
//! [`nom`](https://crates.io/crates/nom), with support for `no_std`. Parsers are
//! plain functions (or values implementing [`Parse`]) from an input to a
//! [`PResult`], and combinators build larger parsers out of smaller ones.
//!
//! # Contents
//! * [Example](#example) - A short parser for a coordinate pair
//! * [Parser Input](#parser-input) - What can be parsed
//! * [Failures](#failures) - The three ways a parser can fail
//! * [Complete and Streaming](#complete-and-streaming) - Two families of primitives
//! * [Parsing Errors](#parsing-errors) - Error values and cause chains
//! * [Logging](#logging) - Tracing parser decisions
//! * [Features](#features) - Available crate features
//!
//! # Example
//! ```
//! use carve::prelude::*;
//! use carve::Cause;
//! use carve::complete::{char, digit1};
//! use carve::sequence::{delimited, separated_pair};
//!
//! fn number(input: &str) -> PResult<u32, &str, Cause<&str>> {
//!     digit1.map_res(|digits: &str| digits.parse::<u32>()).parse(input)
//! }
//!
//! fn point(input: &str) -> PResult<(u32, u32), &str, Cause<&str>> {
//!     delimited(char('('), separated_pair(number, char(','), number), char(')'))
//!         .parse(input)
//! }
//!
//! fn main() {
//!     assert_eq!(point.parse("(3,14) rest"), Ok(Success((3, 14), " rest")));
//!     assert!(point.parse("(3;14)").unwrap_err().is_recoverable());
//! }
//! ```
//!
//! # Parser Input
//! Parsers consume values implementing [`Input`]: an immutable view of a
//! sequence of symbols. Consuming input never mutates anything, it produces a
//! new view of the remainder, so speculative attempts can be retried from the
//! original input for free.
//!
//! [`Input`] is implemented for `&str` (symbols are [`char`]s), `&[T]`,
//! [`OwnedStr`] and [`OwnedSlice<T>`] (shared owned buffers), and `&AsciiStr`
//! with the `ascii` feature. [`Parse::parse`] accepts anything implementing
//! [`IntoInput`], so `&String`, `&Vec<u8>` and `&[u8; N]` work directly, and a
//! `String` or `Vec<T>` passed by value is parsed as an owned buffer.
//!
//! # Failures
//! A failed parse returns one of the three [`Failure`] states:
//!
//! * [`Failure::Incomplete`] - more input is needed to decide.
//! * [`Failure::Recoverable`] - this parser did not match, but another
//!   alternative might.
//! * [`Failure::Fatal`] - the input is wrong and no alternative should be
//!   attempted.
//!
//! Alternation ([`alt!`](branch::alt!), [`branch::alt`], [`Parse::or`]) moves on to the next
//! choice only on a recoverable failure. Repetition ([`multi::many0`] and
//! friends) stops cleanly on a recoverable failure of the repeated parser. Every
//! other failure short-circuits all the way out.
//!
//! # Complete and Streaming
//! Primitives come in two flavors with the same names: [`complete`] treats the
//! end of input as final, and [`streaming`] reports [`Failure::Incomplete`]
//! whenever the answer could change if more input arrived.
//!
//! ```
//! # use carve::prelude::*;
//! # use carve::{Cause, complete, streaming};
//! fn complete_kw(input: &str) -> PResult<&str, &str, Cause<&str>> {
//!     complete::tag("select").parse(input)
//! }
//!
//! fn streaming_kw(input: &str) -> PResult<&str, &str, Cause<&str>> {
//!     streaming::tag("select").parse(input)
//! }
//!
//! assert!(complete_kw.parse("sel").unwrap_err().is_recoverable());
//! assert!(streaming_kw.parse("sel").unwrap_err().is_incomplete());
//! ```
//!
//! # Parsing Errors
//! The error type of a parser is generic and only needs to implement
//! [`Error`]. Combinators create errors with [`Error::from_kind`] and add
//! context with [`Error::wrap`]. `carve` provides two implementations:
//!
//! * `(I, ErrorKind)` - position and kind of the innermost failure.
//! * [`Cause<I>`] - the full chain, outermost context first. [`Cause`]
//!   implements [`core::error::Error`] and [`Display`](core::fmt::Display).
//!
//! # Logging
//! With the `trace` feature enabled, backtracking decisions and wrapped
//! parsers ([`Parse::traced`]) are reported through
//! [`tracing`](https://crates.io/crates/tracing) at trace level. Without the
//! feature no logging code is compiled in.
//!
//! # Features
//! There is no `std` feature, since `carve` only uses `core` and `alloc`.
//!
//! * `ascii` - [`Input`] and classification support for
//!   [`AsciiStr`](ascii::AsciiStr). Enabled by default.
//! * `trace` - Emit [`tracing`](https://crates.io/crates/tracing) events for
//!   parser decisions.

extern crate alloc;

#[cfg(feature = "trace")]
macro_rules! trace {
    ($($arg:tt)*) => { ::tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "trace")]
macro_rules! debug {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "trace"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

mod buffer;
mod error;
mod input;
mod primitive;

pub mod basic;
pub mod branch;
pub mod multi;
pub mod sequence;

pub use buffer::*;
pub use error::*;
pub use input::*;
pub use primitive::{complete, streaming};

#[cfg(feature = "ascii")]
pub use ascii::{AsciiChar, AsciiStr, AsciiString};

extern crate self as carve;

/// The `carve` prelude.
pub mod prelude {
    pub use super::branch::alt;
    pub use super::sequence::tuple;
    pub use super::{
        Error as _, Failure, Input, IntoInput, PResult, PResultExt, Parse, Success,
    };
}

/// Type returned by a parser when parsing succeeds.
///
/// [`Success`] is returned in the [`Ok`] variant of a [`PResult`]. It is a
/// named tuple containing the parsed value (see [`Parse::Parsed`]) and the
/// remaining unparsed input.
#[derive(Debug, Clone)]
pub struct Success<T, I>(
    /// The parsed value
    pub T,
    /// The remaining unparsed input
    pub I,
);

/// The [`Result`] type returned by a parser.
///
/// Unlike a typical [`Result`] alias, [`PResult`] has three generic
/// parameters: the parsed value type, the input type, and the error type.
/// A failure does not carry the input; undoing a failed attempt is just a
/// matter of retrying with the input that was passed in.
pub type PResult<T, I, E> = Result<Success<T, I>, Failure<E>>;

/// Trait implemented by all parsers.
///
/// Most parsers are not implemented by hand. Any
/// [`Fn(I) -> PResult<T, I, E>`](core::ops::Fn) is a parser, so a plain
/// function with a concrete [`PResult`] return type is the usual way to
/// define one.
///
/// ```
/// # use carve::prelude::*;
/// # use carve::{Cause, complete::alpha1};
/// fn word(input: &str) -> PResult<&str, &str, Cause<&str>> {
///     alpha1.parse(input)
/// }
///
/// assert_eq!(word.parse("carve it"), Ok(Success("carve", " it")));
/// ```
///
/// A reusable combinator is a function returning [`impl Parse`](Parse). The
/// [`Parsed`](Parse::Parsed) and [`Error`](Parse::Error) associated types
/// should be spelled out in the return type for inference to work when the
/// result is combined further.
pub trait Parse<I: Input> {
    /// The value type that is produced by the parser on success.
    type Parsed: Sized;

    /// The error type that is produced by the parser on failure.
    type Error: Error<I>;

    /// Parses the provided input.
    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>;

    /// Creates a parser whose parsed result is transformed.
    ///
    /// See also [`basic::map`].
    ///
    /// # Example
    /// ```
    /// # use carve::prelude::*;
    /// # use carve::{Cause, complete::digit1};
    /// fn digit_count(input: &str) -> PResult<usize, &str, Cause<&str>> {
    ///     digit1.map(|digits: &str| digits.len()).parse(input)
    /// }
    ///
    /// assert_eq!(digit_count.parse("2024-01"), Ok(Success(4, "-01")));
    /// ```
    #[inline]
    fn map<F, R>(self, map_fn: F) -> impl Parse<I, Parsed = R, Error = Self::Error>
    where
        Self: Sized,
        F: Fn(Self::Parsed) -> R,
    {
        basic::map(self, map_fn)
    }

    /// Creates a parser whose parsed result is fallibly transformed.
    ///
    /// If `map_fn` returns [`Err`], the new parser fails recoverably with
    /// [`ErrorKind::MapRes`] at the start of its input.
    ///
    /// See also [`basic::map_res`].
    ///
    /// # Example
    /// ```
    /// # use carve::prelude::*;
    /// # use carve::{Cause, ErrorKind, complete::digit1};
    /// fn byte(input: &str) -> PResult<u8, &str, Cause<&str>> {
    ///     digit1.map_res(|digits: &str| digits.parse::<u8>()).parse(input)
    /// }
    ///
    /// assert_eq!(byte.parse("255"), Ok(Success(255, "")));
    /// let err = byte.parse("256").unwrap_err().into_cause().unwrap();
    /// assert_eq!(err.kind(), ErrorKind::MapRes);
    /// assert_eq!(err.position(), &"256");
    /// ```
    #[inline]
    fn map_res<F, R, X>(self, map_fn: F) -> impl Parse<I, Parsed = R, Error = Self::Error>
    where
        Self: Sized,
        F: Fn(Self::Parsed) -> Result<R, X>,
    {
        basic::map_res(self, map_fn)
    }

    /// Creates a parser whose error value is transformed.
    ///
    /// The failure state (recoverable or fatal) is kept.
    #[inline]
    fn map_err<F, E>(self, map_err_fn: F) -> impl Parse<I, Parsed = Self::Parsed, Error = E>
    where
        Self: Sized,
        F: Fn(Self::Error) -> E,
        E: Error<I>,
    {
        basic::map_err(self, map_err_fn)
    }

    /// Creates a parser whose error value is converted via [`Into`].
    ///
    /// See also [`basic::err_into`].
    #[inline]
    fn err_into<E>(self) -> impl Parse<I, Parsed = Self::Parsed, Error = E>
    where
        Self: Sized,
        Self::Error: Into<E>,
        E: Error<I>,
    {
        basic::err_into(self)
    }

    /// Creates a parser that produces a clone of `value` on success.
    ///
    /// See also [`basic::value`].
    #[inline]
    fn value<T>(self, value: T) -> impl Parse<I, Parsed = T, Error = Self::Error>
    where
        Self: Sized,
        T: Clone,
    {
        basic::value(value, self)
    }

    /// Creates a parser that discards the parsed value.
    #[inline]
    fn ignore(self) -> impl Parse<I, Parsed = (), Error = Self::Error>
    where
        Self: Sized,
    {
        basic::ignore(self)
    }

    /// Creates a parser that turns a recoverable failure into [`None`].
    ///
    /// See also [`basic::opt`].
    ///
    /// # Example
    /// ```
    /// # use carve::prelude::*;
    /// # use carve::{Cause, complete::char};
    /// fn sign(input: &str) -> PResult<Option<char>, &str, Cause<&str>> {
    ///     char('-').opt().parse(input)
    /// }
    ///
    /// assert_eq!(sign.parse("-1"), Ok(Success(Some('-'), "1")));
    /// assert_eq!(sign.parse("1"), Ok(Success(None, "1")));
    /// ```
    #[inline]
    fn opt(self) -> impl Parse<I, Parsed = Option<Self::Parsed>, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::opt(self)
    }

    /// Creates a parser that rejects parsed values failing `verify_fn`.
    ///
    /// See also [`basic::verify`].
    #[inline]
    fn verify<F>(self, verify_fn: F) -> impl Parse<I, Parsed = Self::Parsed, Error = Self::Error>
    where
        Self: Sized,
        F: Fn(&Self::Parsed) -> bool,
    {
        basic::verify(self, verify_fn)
    }

    /// Creates a parser that returns the consumed input instead of the
    /// parsed value.
    ///
    /// See also [`basic::recognize`].
    ///
    /// # Example
    /// ```
    /// # use carve::prelude::*;
    /// # use carve::{Cause, complete::{char, digit1}};
    /// fn decimal(input: &str) -> PResult<&str, &str, Cause<&str>> {
    ///     tuple!(digit1, char('.'), digit1).recognize().parse(input)
    /// }
    ///
    /// assert_eq!(decimal.parse("3.25m"), Ok(Success("3.25", "m")));
    /// ```
    #[inline]
    fn recognize(self) -> impl Parse<I, Parsed = I, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::recognize(self)
    }

    /// Creates a parser that succeeds without consuming any input.
    ///
    /// See also [`basic::peek`].
    #[inline]
    fn peek(self) -> impl Parse<I, Parsed = Self::Parsed, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::peek(self)
    }

    /// Creates a parser that fails with [`Failure::Incomplete`] promoted to a
    /// recoverable [`ErrorKind::Eof`].
    ///
    /// Useful for running a streaming parser over input known to be final.
    ///
    /// See also [`basic::complete`].
    #[inline]
    fn complete(self) -> impl Parse<I, Parsed = Self::Parsed, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::complete(self)
    }

    /// Creates a parser out of a reference to another parser.
    ///
    /// [`Parse`] is not automatically implemented for references to types that
    /// implement [`Parse`], so [`Parse::by_ref`] can by used to convert a
    /// reference to a parser into a parser.
    ///
    /// See also [`basic::by_ref`].
    #[inline]
    fn by_ref<'a>(&'a self) -> impl Parse<I, Parsed = Self::Parsed, Error = Self::Error> + 'a
    where
        I: 'a,
    {
        basic::by_ref(self)
    }

    /// Creates a parser that applies two parsers in sequence.
    ///
    /// See also [`sequence::pair`] and [`tuple!`](sequence::tuple!).
    ///
    /// # Example
    /// ```
    /// # use carve::prelude::*;
    /// # use carve::{Cause, complete::{alpha1, digit1}};
    /// fn code(input: &str) -> PResult<(&str, &str), &str, Cause<&str>> {
    ///     alpha1.then(digit1).parse(input)
    /// }
    ///
    /// assert_eq!(code.parse("AB12"), Ok(Success(("AB", "12"), "")));
    /// assert!(code.parse("AB").is_err());
    /// ```
    #[inline]
    fn then<P>(
        self,
        other: P,
    ) -> impl Parse<I, Parsed = (Self::Parsed, P::Parsed), Error = Self::Error>
    where
        Self: Sized,
        P: Parse<I, Error = Self::Error>,
    {
        sequence::pair(self, other)
    }

    /// Creates a parser that attempts `other` when `self` fails
    /// recoverably.
    ///
    /// If both fail, the failure of `other` is returned as is. Use
    /// [`alt!`](branch::alt!) or [`branch::alt`] to get an [`ErrorKind::Alt`] context
    /// around the final failure.
    ///
    /// See also [`branch::either`].
    #[inline]
    fn or<P>(self, other: P) -> impl Parse<I, Parsed = Self::Parsed, Error = Self::Error>
    where
        Self: Sized,
        P: Parse<I, Parsed = Self::Parsed, Error = Self::Error>,
    {
        branch::either(self, other)
    }

    /// Creates a parser that reports its progress under `name`.
    ///
    /// With the `trace` feature, each application opens a trace level span
    /// named after the rule and records the outcome. Without the feature the
    /// returned parser behaves exactly like `self`.
    ///
    /// See also [`basic::traced`].
    #[inline]
    fn traced(self, name: &'static str) -> impl Parse<I, Parsed = Self::Parsed, Error = Self::Error>
    where
        Self: Sized,
    {
        basic::traced(name, self)
    }
}

mod sealed {
    use super::{Error, Input, PResult};

    pub trait Sealed {}

    impl<T, I: Input, E: Error<I>> Sealed for PResult<T, I, E> {}
}

/// Additional convenience methods for [`PResult`].
pub trait PResultExt: sealed::Sealed {
    type Parsed;
    type Error: Error<Self::Input>;
    type Input: Input;

    fn success(parsed: Self::Parsed, rem: Self::Input) -> Self;

    fn recoverable(pos: Self::Input, kind: ErrorKind) -> Self;

    fn parsed(&self) -> Option<&Self::Parsed>;

    fn remaining(&self) -> Option<&Self::Input>;

    fn failure(&self) -> Option<&Failure<Self::Error>>;

    fn map_parsed<F, R>(self, map_fn: F) -> PResult<R, Self::Input, Self::Error>
    where
        F: FnOnce(Self::Parsed) -> R;
}

impl<T, I: Input, E: Error<I>> PResultExt for PResult<T, I, E> {
    type Parsed = T;
    type Error = E;
    type Input = I;

    fn success(parsed: T, rem: I) -> Self {
        Ok(Success(parsed, rem))
    }

    fn recoverable(pos: I, kind: ErrorKind) -> Self {
        Err(Failure::Recoverable(E::from_kind(pos, kind)))
    }

    fn parsed(&self) -> Option<&T> {
        match self {
            Ok(Success(val, _)) => Some(val),
            Err(_) => None,
        }
    }

    fn remaining(&self) -> Option<&I> {
        match self {
            Ok(Success(_, rem)) => Some(rem),
            Err(_) => None,
        }
    }

    fn failure(&self) -> Option<&Failure<E>> {
        self.as_ref().err()
    }

    fn map_parsed<F, R>(self, map_fn: F) -> PResult<R, I, E>
    where
        F: FnOnce(T) -> R,
    {
        self.map(move |succ| succ.map(map_fn))
    }
}

impl<F, T, I, E> Parse<I> for F
where
    F: Fn(I) -> PResult<T, I, E>,
    I: Input,
    E: Error<I>,
{
    type Parsed = T;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<T, I, E>
    where
        N: IntoInput<Input = I>,
    {
        (*self)(input.into_input())
    }
}

impl<T, I> Success<T, I> {
    pub fn map<F, R>(self, map_fn: F) -> Success<R, I>
    where
        F: FnOnce(T) -> R,
    {
        let Success(val, rem) = self;
        Success(map_fn(val), rem)
    }
}

impl<T, I> From<Success<T, I>> for (T, I) {
    fn from(Success(t, i): Success<T, I>) -> (T, I) {
        (t, i)
    }
}

impl<T, I> From<(T, I)> for Success<T, I> {
    fn from((t, i): (T, I)) -> Self {
        Self(t, i)
    }
}

impl<T, U: From<T>, I: Input, E: Error<I>> From<Success<T, I>> for PResult<U, I, E> {
    fn from(Success(val, rem): Success<T, I>) -> Self {
        Ok(Success(U::from(val), rem))
    }
}

impl<LT, LI, RT, RI> PartialEq<Success<RT, RI>> for Success<LT, LI>
where
    LT: PartialEq<RT>,
    LI: PartialEq<RI>,
{
    fn eq(&self, other: &Success<RT, RI>) -> bool {
        PartialEq::eq(&self.0, &other.0) && PartialEq::eq(&self.1, &other.1)
    }
}

impl<T, I> Eq for Success<T, I>
where
    T: Eq,
    I: Eq,
{
}
