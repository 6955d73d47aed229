//! Generic parser and combinator building blocks.
//!
//! This module provides the combinators that transform a single parser:
//! mapping its output, making it optional, checking it, looking ahead with
//! it, and so on. Everything here supports any combination of input and
//! error types.
//!
//! Most functions that take a parser as a parameter and produce a transformed
//! parser are also available as methods on the [`Parse`] trait.

use crate::{Error, ErrorKind, Failure, Input, IntoInput, PResult, PResultExt, Parse, Success};
use core::marker::PhantomData;

#[derive(Debug, Clone)]
struct SuccessParser<T, I, E>(T, PhantomData<fn() -> (I, E)>)
where
    T: Clone,
    I: Input,
    E: Error<I>;

impl<T, I, E> Parse<I> for SuccessParser<T, I, E>
where
    T: Clone,
    I: Input,
    E: Error<I>,
{
    type Parsed = T;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<T, I, E>
    where
        N: IntoInput<Input = I>,
    {
        Ok(Success(self.0.clone(), input.into_input()))
    }
}

/// Creates a parser that always succeeds with a clone of `value`, consuming
/// nothing.
#[inline]
pub const fn success<T, I, E>(value: T) -> impl Parse<I, Parsed = T, Error = E>
where
    T: Clone,
    I: Input,
    E: Error<I>,
{
    SuccessParser(value, PhantomData)
}

#[derive(Debug, Clone)]
struct FailParser<T, I, E>(ErrorKind, PhantomData<fn() -> (T, I, E)>)
where
    I: Input,
    E: Error<I>;

impl<T, I, E> Parse<I> for FailParser<T, I, E>
where
    I: Input,
    E: Error<I>,
{
    type Parsed = T;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<T, I, E>
    where
        N: IntoInput<Input = I>,
    {
        PResult::recoverable(input.into_input(), self.0)
    }
}

/// Creates a parser that always fails recoverably with `kind`.
///
/// [`ErrorKind::Fail`] is the kind to use when the failure has no more
/// specific meaning.
#[inline]
pub const fn fail<T, I, E>(kind: ErrorKind) -> impl Parse<I, Parsed = T, Error = E>
where
    I: Input,
    E: Error<I>,
{
    FailParser(kind, PhantomData)
}

#[derive(Debug, Clone)]
struct MapParser<P, F, R, I>(P, F, PhantomData<fn() -> (R, I)>)
where
    P: Parse<I>,
    I: Input,
    F: Fn(P::Parsed) -> R;

impl<P, F, R, I> Parse<I> for MapParser<P, F, R, I>
where
    P: Parse<I>,
    I: Input,
    F: Fn(P::Parsed) -> R,
{
    type Parsed = R;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<R, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        self.0.parse(input).map_parsed(&self.1)
    }
}

/// Creates a parser whose parsed result is transformed.
///
/// The provided function, `map_fn`, is applied to the parsed result of
/// `parser` if it parses successfully. Failures pass through untouched.
///
/// See also [`Parse::map`].
///
/// # Example
/// ```
/// # use carve::prelude::*;
/// # use carve::{Cause, basic::map, complete::alpha1};
/// fn shout(input: &str) -> PResult<String, &str, Cause<&str>> {
///     map(alpha1, |word: &str| word.to_uppercase()).parse(input)
/// }
///
/// assert_eq!(shout.parse("hey!"), Ok(Success(String::from("HEY"), "!")));
/// ```
#[inline]
pub const fn map<P, F, R, I>(parser: P, map_fn: F) -> impl Parse<I, Parsed = R, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
    F: Fn(P::Parsed) -> R,
{
    MapParser(parser, map_fn, PhantomData)
}

#[derive(Debug, Clone)]
struct MapResParser<P, F, R, X, I>(P, F, PhantomData<fn() -> (R, X, I)>)
where
    P: Parse<I>,
    I: Input,
    F: Fn(P::Parsed) -> Result<R, X>;

impl<P, F, R, X, I> Parse<I> for MapResParser<P, F, R, X, I>
where
    P: Parse<I>,
    I: Input,
    F: Fn(P::Parsed) -> Result<R, X>,
{
    type Parsed = R;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<R, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let Success(val, rem) = self.0.parse(input.clone())?;
        match (self.1)(val) {
            Ok(val) => Ok(Success(val, rem)),
            Err(_) => PResult::recoverable(input, ErrorKind::MapRes),
        }
    }
}

/// Creates a parser whose parsed result is fallibly transformed.
///
/// When `map_fn` returns [`Err`], the new parser fails recoverably with
/// [`ErrorKind::MapRes`] at the position `parser` started from. The value
/// inside the [`Err`] is discarded.
///
/// See also [`Parse::map_res`].
#[inline]
pub const fn map_res<P, F, R, X, I>(
    parser: P,
    map_fn: F,
) -> impl Parse<I, Parsed = R, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
    F: Fn(P::Parsed) -> Result<R, X>,
{
    MapResParser(parser, map_fn, PhantomData)
}

#[derive(Debug, Clone)]
struct MapErrParser<P, F, E, I>(P, F, PhantomData<fn() -> (E, I)>)
where
    P: Parse<I>,
    I: Input,
    F: Fn(P::Error) -> E,
    E: Error<I>;

impl<P, F, E, I> Parse<I> for MapErrParser<P, F, E, I>
where
    P: Parse<I>,
    I: Input,
    F: Fn(P::Error) -> E,
    E: Error<I>,
{
    type Parsed = P::Parsed;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<P::Parsed, I, E>
    where
        N: IntoInput<Input = I>,
    {
        self.0.parse(input).map_err(|fail| fail.map(&self.1))
    }
}

/// Creates a parser whose error value is transformed by `map_err_fn`.
///
/// See also [`Parse::map_err`].
#[inline]
pub const fn map_err<P, F, E, I>(
    parser: P,
    map_err_fn: F,
) -> impl Parse<I, Parsed = P::Parsed, Error = E>
where
    P: Parse<I>,
    I: Input,
    F: Fn(P::Error) -> E,
    E: Error<I>,
{
    MapErrParser(parser, map_err_fn, PhantomData)
}

/// Creates a parser whose error value is converted via [`Into`].
///
/// See also [`Parse::err_into`].
#[inline]
pub const fn err_into<P, E, I>(parser: P) -> impl Parse<I, Parsed = P::Parsed, Error = E>
where
    P: Parse<I>,
    I: Input,
    P::Error: Into<E>,
    E: Error<I>,
{
    map_err(parser, Into::into)
}

#[derive(Debug, Clone)]
struct ValueParser<T, P, I>(T, P, PhantomData<fn() -> I>)
where
    T: Clone,
    P: Parse<I>,
    I: Input;

impl<T, P, I> Parse<I> for ValueParser<T, P, I>
where
    T: Clone,
    P: Parse<I>,
    I: Input,
{
    type Parsed = T;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<T, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let Success(_, rem) = self.1.parse(input)?;
        Ok(Success(self.0.clone(), rem))
    }
}

/// Creates a parser that replaces the output of `parser` with a clone of
/// `value`.
///
/// See also [`Parse::value`].
///
/// # Example
/// ```
/// # use carve::prelude::*;
/// # use carve::{Cause, basic::value, complete::tag};
/// fn boolean(input: &str) -> PResult<bool, &str, Cause<&str>> {
///     alt!(value(true, tag("true")), value(false, tag("false"))).parse(input)
/// }
///
/// assert_eq!(boolean.parse("false,"), Ok(Success(false, ",")));
/// ```
#[inline]
pub const fn value<T, P, I>(value: T, parser: P) -> impl Parse<I, Parsed = T, Error = P::Error>
where
    T: Clone,
    P: Parse<I>,
    I: Input,
{
    ValueParser(value, parser, PhantomData)
}

/// Creates a parser that discards the output of `parser`.
#[inline]
pub const fn ignore<P, I>(parser: P) -> impl Parse<I, Parsed = (), Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    ValueParser((), parser, PhantomData)
}

#[derive(Debug, Clone)]
struct OptParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for OptParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = Option<P::Parsed>;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        match self.0.parse(input.clone()) {
            Ok(Success(val, rem)) => Ok(Success(Some(val), rem)),
            Err(Failure::Recoverable(_)) => {
                trace!("optional parser did not match");
                Ok(Success(None, input))
            }
            Err(fail) => Err(fail),
        }
    }
}

/// Creates a parser that succeeds with [`None`] when `parser` fails
/// recoverably.
///
/// Incomplete and fatal failures are propagated.
///
/// See also [`Parse::opt`].
#[inline]
pub const fn opt<P, I>(parser: P) -> impl Parse<I, Parsed = Option<P::Parsed>, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    OptParser(parser, PhantomData)
}

#[derive(Debug, Clone)]
struct VerifyParser<P, F, I>(P, F, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input,
    F: Fn(&P::Parsed) -> bool;

impl<P, F, I> Parse<I> for VerifyParser<P, F, I>
where
    P: Parse<I>,
    I: Input,
    F: Fn(&P::Parsed) -> bool,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        match self.0.parse(input.clone())? {
            Success(val, rem) if (self.1)(&val) => Ok(Success(val, rem)),
            Success(..) => PResult::recoverable(input, ErrorKind::Verify),
        }
    }
}

/// Creates a parser that fails recoverably with [`ErrorKind::Verify`] when
/// the output of `parser` does not satisfy `verify_fn`.
///
/// The error is reported at the position `parser` started from.
///
/// See also [`Parse::verify`].
#[inline]
pub const fn verify<P, F, I>(
    parser: P,
    verify_fn: F,
) -> impl Parse<I, Parsed = P::Parsed, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
    F: Fn(&P::Parsed) -> bool,
{
    VerifyParser(parser, verify_fn, PhantomData)
}

#[derive(Debug, Clone)]
struct RecognizeParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for RecognizeParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = I;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<I, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let Success(_, rem) = self.0.parse(input.clone())?;
        let consumed = input.input_len() - rem.input_len();
        let (recognized, _) = input.take_split(consumed);
        Ok(Success(recognized, rem))
    }
}

/// Creates a parser whose output is the input consumed by `parser`.
///
/// See also [`Parse::recognize`].
#[inline]
pub const fn recognize<P, I>(parser: P) -> impl Parse<I, Parsed = I, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    RecognizeParser(parser, PhantomData)
}

#[derive(Debug, Clone)]
struct PeekParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for PeekParser<P, I>
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
        let Success(val, _) = self.0.parse(input.clone())?;
        Ok(Success(val, input))
    }
}

/// Creates a parser that applies `parser` without consuming any input.
///
/// See also [`Parse::peek`].
#[inline]
pub const fn peek<P, I>(parser: P) -> impl Parse<I, Parsed = P::Parsed, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    PeekParser(parser, PhantomData)
}

#[derive(Debug, Clone)]
struct NotParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for NotParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = ();
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<(), I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        match self.0.parse(input.clone()) {
            Ok(_) => PResult::recoverable(input, ErrorKind::Not),
            Err(Failure::Recoverable(_)) => Ok(Success((), input)),
            Err(fail) => Err(fail),
        }
    }
}

/// Creates a parser that succeeds, consuming nothing, only where `parser`
/// fails recoverably.
///
/// Where `parser` matches, the new parser fails recoverably with
/// [`ErrorKind::Not`].
#[inline]
pub const fn not<P, I>(parser: P) -> impl Parse<I, Parsed = (), Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    NotParser(parser, PhantomData)
}

#[derive(Debug, Clone)]
struct CondParser<P, I>(bool, P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for CondParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = Option<P::Parsed>;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        if self.0 {
            self.1.parse(input).map_parsed(Some)
        } else {
            Ok(Success(None, input))
        }
    }
}

/// Creates a parser that applies `parser` only when `condition` is `true`,
/// and otherwise succeeds with [`None`] without consuming input.
#[inline]
pub const fn cond<P, I>(
    condition: bool,
    parser: P,
) -> impl Parse<I, Parsed = Option<P::Parsed>, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    CondParser(condition, parser, PhantomData)
}

/// Succeeds only at the end of the input.
///
/// Fails recoverably with [`ErrorKind::Eof`] if any input remains.
pub fn eof<I: Input, E: Error<I>>(input: I) -> PResult<(), I, E> {
    if input.is_empty() {
        Ok(Success((), input))
    } else {
        PResult::recoverable(input, ErrorKind::Eof)
    }
}

/// Consumes all remaining input.
pub fn rest<I: Input, E: Error<I>>(input: I) -> PResult<I, I, E> {
    let len = input.input_len();
    let (consumed, rem) = input.take_split(len);
    Ok(Success(consumed, rem))
}

/// Returns the length of the remaining input without consuming any.
pub fn rest_len<I: Input, E: Error<I>>(input: I) -> PResult<usize, I, E> {
    let len = input.input_len();
    Ok(Success(len, input))
}

#[derive(Debug, Clone)]
struct AllConsumingParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for AllConsumingParser<P, I>
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
        let Success(val, rem) = self.0.parse(input)?;
        if rem.is_empty() {
            Ok(Success(val, rem))
        } else {
            PResult::recoverable(rem, ErrorKind::Eof)
        }
    }
}

/// Creates a parser that requires `parser` to consume all of its input.
///
/// Leftover input is a recoverable [`ErrorKind::Eof`] failure at the
/// position of the leftover.
#[inline]
pub const fn all_consuming<P, I>(parser: P) -> impl Parse<I, Parsed = P::Parsed, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    AllConsumingParser(parser, PhantomData)
}

#[derive(Debug, Clone)]
struct CompleteParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for CompleteParser<P, I>
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
            Err(Failure::Incomplete) => PResult::recoverable(input, ErrorKind::Eof),
            res => res,
        }
    }
}

/// Creates a parser that reports [`Failure::Incomplete`] from `parser` as a
/// recoverable [`ErrorKind::Eof`] failure.
///
/// See also [`Parse::complete`].
#[inline]
pub const fn complete<P, I>(parser: P) -> impl Parse<I, Parsed = P::Parsed, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    CompleteParser(parser, PhantomData)
}

#[derive(Debug)]
struct RefParser<'a, P, I>(&'a P, PhantomData<fn() -> I>)
where
    P: Parse<I> + ?Sized,
    I: Input;

impl<'a, P, I> Parse<I> for RefParser<'a, P, I>
where
    P: Parse<I> + ?Sized,
    I: Input,
{
    type Parsed = P::Parsed;
    type Error = P::Error;

    #[inline]
    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        self.0.parse(input)
    }
}

impl<'a, P, I> Clone for RefParser<'a, P, I>
where
    P: Parse<I> + ?Sized,
    I: Input,
{
    fn clone(&self) -> Self {
        Self(self.0, PhantomData)
    }
}

/// Creates a parser out of a reference to another parser.
///
/// See also [`Parse::by_ref`].
#[inline]
pub const fn by_ref<'a, P, I>(
    parser: &'a P,
) -> impl Parse<I, Parsed = P::Parsed, Error = P::Error> + 'a
where
    P: Parse<I> + ?Sized,
    I: Input + 'a,
{
    RefParser(parser, PhantomData)
}

#[derive(Debug, Clone)]
struct TracedParser<P, I>(&'static str, P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for TracedParser<P, I>
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

        #[cfg(feature = "trace")]
        let _span =
            tracing::trace_span!("parse", rule = self.0, len = input.input_len()).entered();
        #[cfg(feature = "trace")]
        let before = input.input_len();

        let res = self.1.parse(input);

        #[cfg(feature = "trace")]
        match &res {
            Ok(Success(_, rem)) => {
                tracing::trace!(consumed = before - rem.input_len(), "matched")
            }
            Err(Failure::Incomplete) => tracing::trace!("incomplete"),
            Err(Failure::Recoverable(err)) => tracing::trace!(kind = %err.kind(), "no match"),
            Err(Failure::Fatal(err)) => tracing::trace!(kind = %err.kind(), "fatal"),
        }

        res
    }
}

/// Creates a parser that behaves like `parser` and reports each
/// application under the rule name `name`.
///
/// With the `trace` feature this opens a trace level `parse` span carrying
/// the rule name and the remaining input length, and records whether the
/// rule matched, how much it consumed, or the kind of its failure.
#[inline]
pub const fn traced<P, I>(
    name: &'static str,
    parser: P,
) -> impl Parse<I, Parsed = P::Parsed, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    TracedParser(name, parser, PhantomData)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::complete::{alpha1, char, digit1, tag};
    use crate::{streaming, Cause};
    use alloc::string::String;

    type Res<'a, T> = PResult<T, &'a str, Cause<&'a str>>;

    fn fatal(input: &str) -> Res<'_, &str> {
        Err(Failure::Fatal(Cause::new(input, ErrorKind::User)))
    }

    fn kind_of<T>(res: Res<'_, T>) -> Option<ErrorKind> {
        res.err().and_then(Failure::into_cause).map(|err| err.kind())
    }

    #[test]
    fn success_and_fail() {
        fn unit(input: &str) -> Res<'_, u8> {
            success(7).parse(input)
        }
        fn nope(input: &str) -> Res<'_, u8> {
            fail(ErrorKind::Fail).parse(input)
        }

        assert_eq!(unit("abc"), Ok(Success(7, "abc")));
        assert_eq!(kind_of(nope("abc")), Some(ErrorKind::Fail));
        assert_eq!(ErrorKind::Fail.description(), "failure");
    }

    #[test]
    fn map_composes() {
        fn len_plus_one(input: &str) -> Res<'_, usize> {
            map(map(alpha1, |s: &str| s.len()), |n: usize| n + 1).parse(input)
        }

        assert_eq!(len_plus_one("abc1"), Ok(Success(4, "1")));
        assert_eq!(kind_of(len_plus_one("1")), Some(ErrorKind::Alpha));
    }

    #[test]
    fn map_res_reports_at_start() {
        fn small(input: &str) -> Res<'_, u8> {
            map_res(digit1, |d: &str| d.parse::<u8>()).parse(input)
        }

        assert_eq!(small("12x"), Ok(Success(12, "x")));
        let err = small("999x").unwrap_err().into_cause().unwrap();
        assert_eq!(err.kind(), ErrorKind::MapRes);
        assert_eq!(err.position(), &"999x");
    }

    #[test]
    fn map_err_keeps_state() {
        fn flat(input: &str) -> PResult<&str, &str, (&str, ErrorKind)> {
            map_err(digit1, |err: Cause<&str>| (*err.position(), err.kind())).parse(input)
        }
        fn flat_fatal(input: &str) -> PResult<&str, &str, (&str, ErrorKind)> {
            map_err(fatal, |err: Cause<&str>| (*err.position(), err.kind())).parse(input)
        }

        assert_eq!(flat("x"), Err(Failure::Recoverable(("x", ErrorKind::Digit))));
        assert_eq!(flat_fatal("x"), Err(Failure::Fatal(("x", ErrorKind::User))));
    }

    #[test]
    fn value_and_ignore() {
        fn yes(input: &str) -> Res<'_, bool> {
            value(true, tag("yes")).parse(input)
        }
        fn skip(input: &str) -> Res<'_, ()> {
            ignore(tag("yes")).parse(input)
        }

        assert_eq!(yes("yes!"), Ok(Success(true, "!")));
        assert_eq!(skip("yes!"), Ok(Success((), "!")));
        assert!(yes("no").is_err());
    }

    #[test]
    fn opt_only_absorbs_recoverable() {
        fn sign(input: &str) -> Res<'_, Option<char>> {
            opt(char('-')).parse(input)
        }
        fn opt_fatal(input: &str) -> Res<'_, Option<&str>> {
            opt(fatal).parse(input)
        }
        fn opt_incomplete(input: &str) -> Res<'_, Option<&str>> {
            opt(streaming::tag("abc")).parse(input)
        }

        assert_eq!(sign("-5"), Ok(Success(Some('-'), "5")));
        assert_eq!(sign("5"), Ok(Success(None, "5")));
        assert!(opt_fatal("x").unwrap_err().is_fatal());
        assert_eq!(opt_incomplete("ab"), Err(Failure::Incomplete));
    }

    #[test]
    fn verify_reports_at_start() {
        fn short(input: &str) -> Res<'_, &str> {
            verify(alpha1, |s: &&str| s.len() <= 3).parse(input)
        }

        assert_eq!(short("abc1"), Ok(Success("abc", "1")));
        let err = short("abcd1").unwrap_err().into_cause().unwrap();
        assert_eq!(err.kind(), ErrorKind::Verify);
        assert_eq!(err.position(), &"abcd1");
    }

    #[test]
    fn recognize_returns_consumed_prefix() {
        fn pair_text(input: &str) -> Res<'_, &str> {
            recognize(crate::sequence::pair(alpha1, digit1)).parse(input)
        }

        assert_eq!(pair_text("ab12;"), Ok(Success("ab12", ";")));
        assert!(pair_text("12").is_err());
    }

    #[test]
    fn peek_and_not_consume_nothing() {
        fn look(input: &str) -> Res<'_, &str> {
            peek(digit1).parse(input)
        }
        fn no_digit(input: &str) -> Res<'_, ()> {
            not(digit1).parse(input)
        }
        fn not_fatal(input: &str) -> Res<'_, ()> {
            not(fatal).parse(input)
        }

        assert_eq!(look("12a"), Ok(Success("12", "12a")));
        assert_eq!(no_digit("a1"), Ok(Success((), "a1")));
        assert_eq!(kind_of(no_digit("1a")), Some(ErrorKind::Not));
        assert!(not_fatal("a").unwrap_err().is_fatal());
    }

    #[test]
    fn cond_skips_when_false() {
        fn maybe(flag: bool, input: &str) -> Res<'_, Option<&str>> {
            cond(flag, digit1).parse(input)
        }

        assert_eq!(maybe(true, "1a"), Ok(Success(Some("1"), "a")));
        assert_eq!(maybe(false, "1a"), Ok(Success(None, "1a")));
        assert!(maybe(true, "a").is_err());
    }

    #[test]
    fn end_of_input() {
        assert_eq!(eof::<_, Cause<&str>>(""), Ok(Success((), "")));
        assert_eq!(kind_of(eof::<_, Cause<&str>>("x")), Some(ErrorKind::Eof));
        assert_eq!(rest::<_, Cause<&str>>("abc"), Ok(Success("abc", "")));
        assert_eq!(rest_len::<_, Cause<&str>>("abc"), Ok(Success(3, "abc")));

        fn whole(input: &str) -> Res<'_, &str> {
            all_consuming(digit1).parse(input)
        }
        assert_eq!(whole("123"), Ok(Success("123", "")));
        let err = whole("123x").unwrap_err().into_cause().unwrap();
        assert_eq!(err.kind(), ErrorKind::Eof);
        assert_eq!(err.position(), &"x");
    }

    #[test]
    fn complete_promotes_incomplete() {
        fn number(input: &str) -> Res<'_, &str> {
            complete(streaming::digit1).parse(input)
        }

        assert_eq!(number("12;"), Ok(Success("12", ";")));
        assert_eq!(kind_of(number("12")), Some(ErrorKind::Eof));
    }

    #[test]
    fn by_ref_and_traced_are_transparent() {
        fn word(input: &str) -> Res<'_, String> {
            map(alpha1, |s: &str| String::from(s)).parse(input)
        }
        let parser = traced("word", by_ref(&word));

        let res: Res<'_, String> = parser.parse("hi there");
        assert_eq!(res, Ok(Success(String::from("hi"), " there")));
        let res: Res<'_, String> = parser.parse("1");
        assert!(res.is_err());
    }

    #[test]
    fn by_ref_method_borrows_parser() {
        fn word(input: &str) -> Res<'_, String> {
            map(alpha1, |s: &str| String::from(s)).parse(input)
        }
        let first = word.by_ref();
        let second = word.by_ref();

        let res: Res<'_, String> = first.parse("ab1");
        assert_eq!(res, Ok(Success(String::from("ab"), "1")));
        let res: Res<'_, String> = second.parse("cd ");
        assert_eq!(res, Ok(Success(String::from("cd"), " ")));
        let res: Res<'_, (String, &str)> = word.by_ref().then(digit1).parse("x9");
        assert_eq!(res, Ok(Success((String::from("x"), "9"), "")));
    }
}
