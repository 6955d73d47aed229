//! Primitive parsers for input that is known to be complete.
//!
//! Reaching the end of the input is treated as final: a parser that needs
//! more symbols than are left fails recoverably, and a run of matching
//! symbols that extends to the end of the input simply ends there.
//!
//! See [`streaming`](crate::streaming) for the variants that report
//! [`Failure::Incomplete`](crate::Failure::Incomplete) instead.
use super::*;

/// Parses `pattern` verbatim.
///
/// # Example
/// ```
/// # use carve::prelude::*;
/// # use carve::{Cause, ErrorKind, complete::tag};
/// fn open(input: &str) -> PResult<&str, &str, Cause<&str>> {
///     tag("<svg").parse(input)
/// }
///
/// assert_eq!(open.parse("<svg>"), Ok(Success("<svg", ">")));
/// let err = open.parse("<sv").unwrap_err().into_cause().unwrap();
/// assert_eq!(err.kind(), ErrorKind::Tag);
/// ```
#[inline]
pub const fn tag<T, I, E>(pattern: T) -> impl Parse<I, Parsed = I, Error = E>
where
    T: Clone,
    I: Input + Compare<T>,
    E: Error<I>,
{
    TagParser {
        pattern,
        no_case: false,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Parses `pattern`, ignoring ASCII case.
///
/// The parsed value is the input as written, not the pattern.
#[inline]
pub const fn tag_no_case<T, I, E>(pattern: T) -> impl Parse<I, Parsed = I, Error = E>
where
    T: Clone,
    I: Input + Compare<T>,
    E: Error<I>,
{
    TagParser {
        pattern,
        no_case: true,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Takes exactly `count` symbols.
///
/// Fails with [`ErrorKind::Eof`] if fewer remain.
#[inline]
pub const fn take<I, E>(count: usize) -> impl Parse<I, Parsed = I, Error = E>
where
    I: Input,
    E: Error<I>,
{
    TakeParser {
        count,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Takes the longest run of symbols satisfying `pred`, possibly empty.
#[inline]
pub const fn take_while<F, I, E>(pred: F) -> impl Parse<I, Parsed = I, Error = E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    TakeWhileParser {
        pred,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Takes the longest non-empty run of symbols satisfying `pred`.
///
/// Fails with [`ErrorKind::TakeWhile1`] if the first symbol does not satisfy
/// `pred`.
#[inline]
pub const fn take_while1<F, I, E>(pred: F) -> impl Parse<I, Parsed = I, Error = E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    TakeWhile1Parser {
        pred,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Takes between `min` and `max` symbols satisfying `pred`, as many as
/// possible.
///
/// Fails with [`ErrorKind::TakeWhileMN`] when fewer than `min` symbols match.
///
/// # Example
/// ```
/// # use carve::prelude::*;
/// # use carve::{Cause, complete::take_while_m_n};
/// fn hex_pair(input: &str) -> PResult<&str, &str, Cause<&str>> {
///     take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()).parse(input)
/// }
///
/// assert_eq!(hex_pair.parse("ff0"), Ok(Success("ff", "0")));
/// assert!(hex_pair.parse("f").is_err());
/// ```
#[inline]
pub const fn take_while_m_n<F, I, E>(
    min: usize,
    max: usize,
    pred: F,
) -> impl Parse<I, Parsed = I, Error = E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    TakeWhileMNParser {
        min,
        max,
        pred,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Takes symbols up to the first one satisfying `pred`, possibly none.
#[inline]
pub const fn take_till<F, I, E>(pred: F) -> impl Parse<I, Parsed = I, Error = E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    TakeTillParser {
        pred,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Takes at least one symbol up to the first one satisfying `pred`.
#[inline]
pub const fn take_till1<F, I, E>(pred: F) -> impl Parse<I, Parsed = I, Error = E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    TakeTill1Parser {
        pred,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Takes the longest non-empty run of symbols that are members of `set`.
#[inline]
pub const fn is_a<T, I, E>(set: T) -> impl Parse<I, Parsed = I, Error = E>
where
    T: FindToken<I::Item>,
    I: Input,
    E: Error<I>,
{
    IsAParser {
        set,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Takes the longest non-empty run of symbols that are not members of `set`.
#[inline]
pub const fn is_not<T, I, E>(set: T) -> impl Parse<I, Parsed = I, Error = E>
where
    T: FindToken<I::Item>,
    I: Input,
    E: Error<I>,
{
    IsNotParser {
        set,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Parses the single symbol `expected`.
#[inline]
pub const fn char<I, E>(expected: char) -> impl Parse<I, Parsed = char, Error = E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    CharParser {
        expected,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Parses a single symbol that is a member of `set`.
#[inline]
pub const fn one_of<T, I, E>(set: T) -> impl Parse<I, Parsed = I::Item, Error = E>
where
    T: FindToken<I::Item>,
    I: Input,
    E: Error<I>,
{
    OneOfParser {
        set,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Parses a single symbol that is not a member of `set`.
#[inline]
pub const fn none_of<T, I, E>(set: T) -> impl Parse<I, Parsed = I::Item, Error = E>
where
    T: FindToken<I::Item>,
    I: Input,
    E: Error<I>,
{
    NoneOfParser {
        set,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Parses a single symbol satisfying `pred`.
#[inline]
pub const fn satisfy<F, I, E>(pred: F) -> impl Parse<I, Parsed = I::Item, Error = E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    SatisfyParser {
        pred,
        streaming: false,
        _phantom: PhantomData,
    }
}

/// Parses any single symbol.
pub fn anychar<I: Input, E: Error<I>>(input: I) -> PResult<I::Item, I, E> {
    split_any(input, false)
}

/// Zero or more ASCII digits.
pub fn digit0<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while(input, |item: I::Item| item.is_digit(), false)
}

/// One or more ASCII digits.
pub fn digit1<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while1(input, |item: I::Item| item.is_digit(), ErrorKind::Digit, false)
}

/// Zero or more ASCII letters.
pub fn alpha0<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while(input, |item: I::Item| item.is_alpha(), false)
}

/// One or more ASCII letters.
pub fn alpha1<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while1(input, |item: I::Item| item.is_alpha(), ErrorKind::Alpha, false)
}

/// Zero or more ASCII letters and digits.
pub fn alphanumeric0<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while(input, |item: I::Item| item.is_alphanum(), false)
}

/// One or more ASCII letters and digits.
pub fn alphanumeric1<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while1(
        input,
        |item: I::Item| item.is_alphanum(),
        ErrorKind::AlphaNumeric,
        false,
    )
}

/// Zero or more spaces and tabs.
pub fn space0<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while(input, |item: I::Item| item.is_space(), false)
}

/// One or more spaces and tabs.
pub fn space1<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while1(input, |item: I::Item| item.is_space(), ErrorKind::Space, false)
}

/// Zero or more spaces, tabs, carriage returns and line feeds.
pub fn multispace0<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while(input, |item: I::Item| item.is_multispace(), false)
}

/// One or more spaces, tabs, carriage returns and line feeds.
pub fn multispace1<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while1(
        input,
        |item: I::Item| item.is_multispace(),
        ErrorKind::MultiSpace,
        false,
    )
}
