//! Ordered choice between parsers.
//!
//! Alternatives are tried from the first to the last, each against the same
//! input. The first success wins. A recoverable failure moves on to the next
//! alternative; an incomplete or fatal failure ends the choice at once.

use crate::{Error, ErrorKind, Failure, Input, IntoInput, PResult, Parse};
use core::marker::PhantomData;

/// Creates a parser that matches exactly one of its arguments.
///
/// [`alt!`] accepts any number of parsers, all with the same output and
/// error types. It expands to [`alt`] around a balanced tree of [`either`]s,
/// so when every alternative fails recoverably the failure of the last one is
/// returned, wrapped once with [`ErrorKind::Alt`].
///
/// # Example
/// ```
/// # use carve::prelude::*;
/// # use carve::{Cause, ErrorKind, complete::tag};
/// fn command(input: &str) -> PResult<&str, &str, Cause<&str>> {
///     alt!(tag("get"), tag("set"), tag("del")).parse(input)
/// }
///
/// assert_eq!(command.parse("set x"), Ok(Success("set", " x")));
///
/// let err = command.parse("put x").unwrap_err().into_cause().unwrap();
/// assert_eq!(err.kind(), ErrorKind::Alt);
/// assert_eq!(err.inner().unwrap().kind(), ErrorKind::Tag);
/// assert_eq!(err.position(), &"put x");
/// ```
pub use carve_macros::alt;

#[derive(Debug, Clone)]
struct EitherParser<P1, P2, I>(P1, P2, PhantomData<fn() -> I>)
where
    P1: Parse<I>,
    P2: Parse<I, Parsed = P1::Parsed, Error = P1::Error>,
    I: Input;

impl<P1, P2, I> Parse<I> for EitherParser<P1, P2, I>
where
    P1: Parse<I>,
    P2: Parse<I, Parsed = P1::Parsed, Error = P1::Error>,
    I: Input,
{
    type Parsed = P1::Parsed;
    type Error = P1::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        match self.0.parse(input.clone()) {
            Err(Failure::Recoverable(_)) => {
                trace!(remaining = input.input_len(), "alternative failed, backtracking");
                self.1.parse(input)
            }
            res => res,
        }
    }
}

/// Creates a parser that tries `first`, then `second` if `first` fails
/// recoverably.
///
/// No context is added to the failure of `second`. See [`alt`] for that.
///
/// See also [`Parse::or`].
#[inline]
pub const fn either<P1, P2, I>(
    first: P1,
    second: P2,
) -> impl Parse<I, Parsed = P1::Parsed, Error = P1::Error>
where
    P1: Parse<I>,
    P2: Parse<I, Parsed = P1::Parsed, Error = P1::Error>,
    I: Input,
{
    EitherParser(first, second, PhantomData)
}

#[derive(Debug, Clone)]
struct AltParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for AltParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        match self.0.parse(input.clone()) {
            Err(Failure::Recoverable(err)) => {
                debug!(remaining = input.input_len(), "all alternatives failed");
                Err(Failure::Recoverable(err.wrap(input, ErrorKind::Alt)))
            }
            res => res,
        }
    }
}

/// Creates a parser that adds [`ErrorKind::Alt`] context to a recoverable
/// failure of `choices`.
///
/// `choices` is usually one or more nested [`either`]s; [`alt!`] builds both
/// layers. Success, incomplete and fatal outcomes pass through unchanged.
#[inline]
pub const fn alt<P, I>(choices: P) -> impl Parse<I, Parsed = P::Parsed, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    AltParser(choices, PhantomData)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::complete::{alpha1, digit1, tag};
    use crate::sequence::pair;
    use crate::{streaming, Cause, Success};
    use alloc::vec::Vec;

    type Res<'a, T> = PResult<T, &'a str, Cause<&'a str>>;

    fn fatal(input: &str) -> Res<'_, &str> {
        Err(Failure::Fatal(Cause::new(input, ErrorKind::User)))
    }

    #[test]
    fn first_success_wins() {
        fn p(input: &str) -> Res<'_, &str> {
            alt!(tag("ab"), tag("a"), alpha1).parse(input)
        }

        assert_eq!(p("abc"), Ok(Success("ab", "c")));
        assert_eq!(p("acb"), Ok(Success("a", "cb")));
        assert_eq!(p("xyz"), Ok(Success("xyz", "")));
    }

    #[test]
    fn backtracks_after_partial_match() {
        fn p(input: &str) -> Res<'_, (&str, &str)> {
            alt!(pair(tag("key"), digit1), pair(alpha1, tag("=")),).parse(input)
        }

        assert_eq!(p("keyword="), Ok(Success(("keyword", "="), "")));
    }

    #[test]
    fn exhaustion_wraps_last_cause_once() {
        fn p(input: &str) -> Res<'_, &str> {
            alt!(digit1, tag("nil"), tag("none")).parse(input)
        }

        let err = p("x").unwrap_err().into_cause().unwrap();
        assert_eq!(
            err.kinds().collect::<Vec<_>>(),
            [ErrorKind::Alt, ErrorKind::Tag]
        );
        assert_eq!(err.position(), &"x");
    }

    #[test]
    fn fatal_and_incomplete_stop_the_choice() {
        fn with_fatal(input: &str) -> Res<'_, &str> {
            alt!(tag("a"), fatal, alpha1).parse(input)
        }
        fn with_incomplete(input: &str) -> Res<'_, &str> {
            alt!(streaming::tag("abc"), alpha1).parse(input)
        }

        assert_eq!(with_fatal("a"), Ok(Success("a", "")));
        let err = with_fatal("b").unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.cause().map(Cause::kind), Some(ErrorKind::User));
        assert_eq!(with_incomplete("ab"), Err(Failure::Incomplete));
    }

    #[test]
    fn either_adds_no_context() {
        fn p(input: &str) -> Res<'_, &str> {
            either(digit1, tag("nil")).parse(input)
        }

        let err = p("x").unwrap_err().into_cause().unwrap();
        assert_eq!(err.kind(), ErrorKind::Tag);
        assert!(err.inner().is_none());
    }

    #[test]
    fn single_alternative() {
        fn p(input: &str) -> Res<'_, &str> {
            alt!(digit1).parse(input)
        }

        assert_eq!(p("1"), Ok(Success("1", "")));
        assert_eq!(
            p("x").unwrap_err().into_cause().map(|e| e.kind()),
            Some(ErrorKind::Alt)
        );
    }

    #[test]
    fn flat_error_keeps_primitive() {
        fn p(input: &str) -> PResult<&str, &str, (&str, ErrorKind)> {
            alt!(digit1, tag("nil")).parse(input)
        }

        assert_eq!(p("x"), Err(Failure::Recoverable(("x", ErrorKind::Tag))));
    }
}
