//! Combinators applying parsers one after another.
//!
//! Each parser in a sequence starts where the previous one stopped. The first
//! failure ends the sequence and is returned unchanged, in whatever state it
//! was: a sequence does not add context to its errors, and the input it was
//! given is untouched so the caller may retry something else.

use crate::{Input, IntoInput, PResult, Parse, Success};
use core::marker::PhantomData;

/// Creates a parser that applies a sequence of parsers and returns their
/// outputs as a flat tuple.
///
/// [`tuple!`] accepts any number of parsers, all with the same error type.
/// It expands to a balanced tree of [`pair`]s whose nested output is
/// flattened with a single [`map`](crate::basic::map). With no arguments it
/// succeeds with `()` without consuming anything.
///
/// # Example
/// ```
/// # use carve::prelude::*;
/// # use carve::{Cause, complete::{alpha1, char, digit1}};
/// fn assignment(input: &str) -> PResult<(&str, char, &str), &str, Cause<&str>> {
///     tuple!(alpha1, char('='), digit1).parse(input)
/// }
///
/// assert_eq!(assignment.parse("x=42;"), Ok(Success(("x", '=', "42"), ";")));
/// assert!(assignment.parse("x:42").is_err());
/// ```
pub use carve_macros::tuple;

#[derive(Debug, Clone)]
struct PairParser<P1, P2, I>(P1, P2, PhantomData<fn() -> I>)
where
    P1: Parse<I>,
    P2: Parse<I, Error = P1::Error>,
    I: Input;

impl<P1, P2, I> Parse<I> for PairParser<P1, P2, I>
where
    P1: Parse<I>,
    P2: Parse<I, Error = P1::Error>,
    I: Input,
{
    type Parsed = (P1::Parsed, P2::Parsed);
    type Error = P1::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let Success(first, rem) = self.0.parse(input)?;
        let Success(second, rem) = self.1.parse(rem)?;
        Ok(Success((first, second), rem))
    }
}

/// Creates a parser that applies `first` then `second`, returning both
/// outputs.
///
/// See also [`Parse::then`].
#[inline]
pub const fn pair<P1, P2, I>(
    first: P1,
    second: P2,
) -> impl Parse<I, Parsed = (P1::Parsed, P2::Parsed), Error = P1::Error>
where
    P1: Parse<I>,
    P2: Parse<I, Error = P1::Error>,
    I: Input,
{
    PairParser(first, second, PhantomData)
}

#[derive(Debug, Clone)]
struct SeparatedPairParser<P1, S, P2, I>(P1, S, P2, PhantomData<fn() -> I>)
where
    P1: Parse<I>,
    S: Parse<I, Error = P1::Error>,
    P2: Parse<I, Error = P1::Error>,
    I: Input;

impl<P1, S, P2, I> Parse<I> for SeparatedPairParser<P1, S, P2, I>
where
    P1: Parse<I>,
    S: Parse<I, Error = P1::Error>,
    P2: Parse<I, Error = P1::Error>,
    I: Input,
{
    type Parsed = (P1::Parsed, P2::Parsed);
    type Error = P1::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let Success(first, rem) = self.0.parse(input)?;
        let Success(_, rem) = self.1.parse(rem)?;
        let Success(second, rem) = self.2.parse(rem)?;
        Ok(Success((first, second), rem))
    }
}

/// Creates a parser that applies `first`, `sep` and `second`, keeping the
/// outputs of `first` and `second`.
///
/// # Example
/// ```
/// # use carve::prelude::*;
/// # use carve::{Cause, complete::{alpha1, char, digit1}, sequence::separated_pair};
/// fn entry(input: &str) -> PResult<(&str, &str), &str, Cause<&str>> {
///     separated_pair(alpha1, char(':'), digit1).parse(input)
/// }
///
/// assert_eq!(entry.parse("port:80"), Ok(Success(("port", "80"), "")));
/// ```
#[inline]
pub const fn separated_pair<P1, S, P2, I>(
    first: P1,
    sep: S,
    second: P2,
) -> impl Parse<I, Parsed = (P1::Parsed, P2::Parsed), Error = P1::Error>
where
    P1: Parse<I>,
    S: Parse<I, Error = P1::Error>,
    P2: Parse<I, Error = P1::Error>,
    I: Input,
{
    SeparatedPairParser(first, sep, second, PhantomData)
}

#[derive(Debug, Clone)]
struct DelimitedParser<L, P, R, I>(L, P, R, PhantomData<fn() -> I>)
where
    L: Parse<I>,
    P: Parse<I, Error = L::Error>,
    R: Parse<I, Error = L::Error>,
    I: Input;

impl<L, P, R, I> Parse<I> for DelimitedParser<L, P, R, I>
where
    L: Parse<I>,
    P: Parse<I, Error = L::Error>,
    R: Parse<I, Error = L::Error>,
    I: Input,
{
    type Parsed = P::Parsed;
    type Error = L::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let Success(_, rem) = self.0.parse(input)?;
        let Success(val, rem) = self.1.parse(rem)?;
        let Success(_, rem) = self.2.parse(rem)?;
        Ok(Success(val, rem))
    }
}

/// Creates a parser that applies `left`, `parser` and `right`, keeping only
/// the output of `parser`.
#[inline]
pub const fn delimited<L, P, R, I>(
    left: L,
    parser: P,
    right: R,
) -> impl Parse<I, Parsed = P::Parsed, Error = L::Error>
where
    L: Parse<I>,
    P: Parse<I, Error = L::Error>,
    R: Parse<I, Error = L::Error>,
    I: Input,
{
    DelimitedParser(left, parser, right, PhantomData)
}

#[derive(Debug, Clone)]
struct PrecededParser<L, P, I>(L, P, PhantomData<fn() -> I>)
where
    L: Parse<I>,
    P: Parse<I, Error = L::Error>,
    I: Input;

impl<L, P, I> Parse<I> for PrecededParser<L, P, I>
where
    L: Parse<I>,
    P: Parse<I, Error = L::Error>,
    I: Input,
{
    type Parsed = P::Parsed;
    type Error = L::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let Success(_, rem) = self.0.parse(input)?;
        self.1.parse(rem)
    }
}

/// Creates a parser that applies `prefix` then `parser`, keeping only the
/// output of `parser`.
#[inline]
pub const fn preceded<L, P, I>(
    prefix: L,
    parser: P,
) -> impl Parse<I, Parsed = P::Parsed, Error = L::Error>
where
    L: Parse<I>,
    P: Parse<I, Error = L::Error>,
    I: Input,
{
    PrecededParser(prefix, parser, PhantomData)
}

#[derive(Debug, Clone)]
struct TerminatedParser<P, R, I>(P, R, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    R: Parse<I, Error = P::Error>,
    I: Input;

impl<P, R, I> Parse<I> for TerminatedParser<P, R, I>
where
    P: Parse<I>,
    R: Parse<I, Error = P::Error>,
    I: Input,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let Success(val, rem) = self.0.parse(input)?;
        let Success(_, rem) = self.1.parse(rem)?;
        Ok(Success(val, rem))
    }
}

/// Creates a parser that applies `parser` then `suffix`, keeping only the
/// output of `parser`.
#[inline]
pub const fn terminated<P, R, I>(
    parser: P,
    suffix: R,
) -> impl Parse<I, Parsed = P::Parsed, Error = P::Error>
where
    P: Parse<I>,
    R: Parse<I, Error = P::Error>,
    I: Input,
{
    TerminatedParser(parser, suffix, PhantomData)
}
