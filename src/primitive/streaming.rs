//! Primitive parsers for input that may be continued.
//!
//! These parsers have the same names and the same behavior as the ones in
//! [`complete`](crate::complete) wherever the answer is already decided.
//! When reaching the end of the input leaves the answer open (a literal that
//! matches so far, a run of matching symbols that touches the end, a symbol
//! that is not there yet) they fail with [`Failure::Incomplete`] instead.
//!
//! ```
//! # use carve::prelude::*;
//! # use carve::{Cause, streaming::digit1};
//! fn number(input: &str) -> PResult<&str, &str, Cause<&str>> {
//!     digit1(input)
//! }
//!
//! assert_eq!(number.parse("12;"), Ok(Success("12", ";")));
//! assert_eq!(number.parse("12"), Err(Failure::Incomplete));
//! ```
use super::*;

/// Parses `pattern` verbatim.
///
/// Input that is a proper prefix of `pattern` is
/// [`Incomplete`](Failure::Incomplete).
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
        streaming: true,
        _phantom: PhantomData,
    }
}

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
        streaming: true,
        _phantom: PhantomData,
    }
}

/// Takes exactly `count` symbols.
#[inline]
pub const fn take<I, E>(count: usize) -> impl Parse<I, Parsed = I, Error = E>
where
    I: Input,
    E: Error<I>,
{
    TakeParser {
        count,
        streaming: true,
        _phantom: PhantomData,
    }
}

/// Takes the longest run of symbols satisfying `pred`.
///
/// A run reaching the end of the input is
/// [`Incomplete`](Failure::Incomplete).
#[inline]
pub const fn take_while<F, I, E>(pred: F) -> impl Parse<I, Parsed = I, Error = E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    TakeWhileParser {
        pred,
        streaming: true,
        _phantom: PhantomData,
    }
}

#[inline]
pub const fn take_while1<F, I, E>(pred: F) -> impl Parse<I, Parsed = I, Error = E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    TakeWhile1Parser {
        pred,
        streaming: true,
        _phantom: PhantomData,
    }
}

/// Takes between `min` and `max` symbols satisfying `pred`.
///
/// Reaching the end of the input before `max` symbols have been taken is
/// [`Incomplete`](Failure::Incomplete).
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
        streaming: true,
        _phantom: PhantomData,
    }
}

#[inline]
pub const fn take_till<F, I, E>(pred: F) -> impl Parse<I, Parsed = I, Error = E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    TakeTillParser {
        pred,
        streaming: true,
        _phantom: PhantomData,
    }
}

#[inline]
pub const fn take_till1<F, I, E>(pred: F) -> impl Parse<I, Parsed = I, Error = E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    TakeTill1Parser {
        pred,
        streaming: true,
        _phantom: PhantomData,
    }
}

#[inline]
pub const fn is_a<T, I, E>(set: T) -> impl Parse<I, Parsed = I, Error = E>
where
    T: FindToken<I::Item>,
    I: Input,
    E: Error<I>,
{
    IsAParser {
        set,
        streaming: true,
        _phantom: PhantomData,
    }
}

#[inline]
pub const fn is_not<T, I, E>(set: T) -> impl Parse<I, Parsed = I, Error = E>
where
    T: FindToken<I::Item>,
    I: Input,
    E: Error<I>,
{
    IsNotParser {
        set,
        streaming: true,
        _phantom: PhantomData,
    }
}

/// Parses the single symbol `expected`.
///
/// Empty input is [`Incomplete`](Failure::Incomplete).
#[inline]
pub const fn char<I, E>(expected: char) -> impl Parse<I, Parsed = char, Error = E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    CharParser {
        expected,
        streaming: true,
        _phantom: PhantomData,
    }
}

#[inline]
pub const fn one_of<T, I, E>(set: T) -> impl Parse<I, Parsed = I::Item, Error = E>
where
    T: FindToken<I::Item>,
    I: Input,
    E: Error<I>,
{
    OneOfParser {
        set,
        streaming: true,
        _phantom: PhantomData,
    }
}

#[inline]
pub const fn none_of<T, I, E>(set: T) -> impl Parse<I, Parsed = I::Item, Error = E>
where
    T: FindToken<I::Item>,
    I: Input,
    E: Error<I>,
{
    NoneOfParser {
        set,
        streaming: true,
        _phantom: PhantomData,
    }
}

#[inline]
pub const fn satisfy<F, I, E>(pred: F) -> impl Parse<I, Parsed = I::Item, Error = E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    SatisfyParser {
        pred,
        streaming: true,
        _phantom: PhantomData,
    }
}

pub fn anychar<I: Input, E: Error<I>>(input: I) -> PResult<I::Item, I, E> {
    split_any(input, true)
}

pub fn digit0<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while(input, |item: I::Item| item.is_digit(), true)
}

pub fn digit1<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while1(input, |item: I::Item| item.is_digit(), ErrorKind::Digit, true)
}

pub fn alpha0<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while(input, |item: I::Item| item.is_alpha(), true)
}

pub fn alpha1<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while1(input, |item: I::Item| item.is_alpha(), ErrorKind::Alpha, true)
}

pub fn alphanumeric0<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while(input, |item: I::Item| item.is_alphanum(), true)
}

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
        true,
    )
}

pub fn space0<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while(input, |item: I::Item| item.is_space(), true)
}

pub fn space1<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while1(input, |item: I::Item| item.is_space(), ErrorKind::Space, true)
}

pub fn multispace0<I, E>(input: I) -> PResult<I, I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    split_while(input, |item: I::Item| item.is_multispace(), true)
}

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
        true,
    )
}
