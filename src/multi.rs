//! Repetition combinators.
//!
//! A repeated parser is applied until it fails recoverably, at which point
//! the repetition ends and returns what it has collected, leaving the input
//! where the last successful application stopped. An incomplete or fatal
//! failure of the repeated parser ends the whole repetition with that
//! failure and discards the collected items.
//!
//! A repeated parser that succeeds without consuming anything would repeat
//! forever. Unbounded repetitions detect this and fail recoverably with their
//! own [`ErrorKind`] instead.

use crate::{Error, ErrorKind, Failure, Input, IntoInput, PResult, Parse, Success};
use alloc::vec::Vec;
use core::marker::PhantomData;

/// Iterator driving an unbounded repetition of a parser.
///
/// The iterator ends when the parser fails. A recoverable failure simply ends
/// the iteration; any other failure, or a success that consumed nothing, is
/// stored in the failure slot for the owning combinator to return.
struct Many0Iter<'a, P, I>
where
    P: Parse<I>,
    I: Input,
{
    parser: &'a P,
    input: &'a mut I,
    failure: &'a mut Option<Failure<P::Error>>,
    guard: ErrorKind,
    done: bool,
}

impl<'a, P, I> Many0Iter<'a, P, I>
where
    P: Parse<I>,
    I: Input,
{
    fn new(
        parser: &'a P,
        input: &'a mut I,
        failure: &'a mut Option<Failure<P::Error>>,
        guard: ErrorKind,
    ) -> Self {
        Self {
            parser,
            input,
            failure,
            guard,
            done: false,
        }
    }
}

impl<'a, P, I> Iterator for Many0Iter<'a, P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Item = P::Parsed;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let before = self.input.clone();
        match self.parser.parse(before.clone()) {
            Ok(Success(_, rem)) if rem.input_len() == before.input_len() => {
                debug!(kind = %self.guard, "repeated parser consumed nothing");
                *self.failure = Some(Failure::Recoverable(P::Error::from_kind(before, self.guard)));
                self.done = true;
                None
            }
            Ok(Success(val, rem)) => {
                *self.input = rem;
                Some(val)
            }
            Err(Failure::Recoverable(_)) => {
                trace!(remaining = before.input_len(), "repetition ended");
                self.done = true;
                None
            }
            Err(fail) => {
                *self.failure = Some(fail);
                self.done = true;
                None
            }
        }
    }
}

impl<'a, P, I> core::iter::FusedIterator for Many0Iter<'a, P, I>
where
    P: Parse<I>,
    I: Input,
{
}

#[derive(Debug, Clone)]
struct CollectMany0Parser<P, C, I>(P, PhantomData<fn() -> (C, I)>)
where
    P: Parse<I>,
    I: Input,
    C: FromIterator<P::Parsed>;

impl<P, C, I> Parse<I> for CollectMany0Parser<P, C, I>
where
    P: Parse<I>,
    I: Input,
    C: FromIterator<P::Parsed>,
{
    type Parsed = C;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<C, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let mut input = input.into_input();
        let mut failure = None;
        let ret = C::from_iter(Many0Iter::new(
            &self.0,
            &mut input,
            &mut failure,
            ErrorKind::Many0,
        ));
        match failure {
            Some(fail) => Err(fail),
            None => Ok(Success(ret, input)),
        }
    }
}

/// Creates a parser that applies `parser` zero or more times and collects
/// the outputs into `C`.
///
/// See [`many0`] for the exact repetition rules.
#[inline]
pub const fn collect_many0<P, C, I>(parser: P) -> impl Parse<I, Parsed = C, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
    C: FromIterator<P::Parsed>,
{
    CollectMany0Parser(parser, PhantomData)
}

/// Creates a parser that applies `parser` zero or more times.
///
/// Never fails recoverably on its own account unless `parser` succeeds
/// without consuming input, which is reported as [`ErrorKind::Many0`].
///
/// # Example
/// ```
/// # use carve::prelude::*;
/// # use carve::{Cause, complete::tag, multi::many0};
/// fn abs(input: &str) -> PResult<Vec<&str>, &str, Cause<&str>> {
///     many0(tag("ab")).parse(input)
/// }
///
/// assert_eq!(abs.parse("ababc"), Ok(Success(vec!["ab", "ab"], "c")));
/// assert_eq!(abs.parse("c"), Ok(Success(vec![], "c")));
/// ```
#[inline]
pub const fn many0<P, I>(parser: P) -> impl Parse<I, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    CollectMany0Parser(parser, PhantomData)
}

#[derive(Debug, Clone)]
struct CollectMany1Parser<P, C, I>(P, PhantomData<fn() -> (C, I)>)
where
    P: Parse<I>,
    I: Input,
    C: FromIterator<P::Parsed>;

impl<P, C, I> Parse<I> for CollectMany1Parser<P, C, I>
where
    P: Parse<I>,
    I: Input,
    C: FromIterator<P::Parsed>,
{
    type Parsed = C;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<C, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let Success(first, mut rem) = match self.0.parse(input.clone()) {
            Ok(succ) => succ,
            Err(Failure::Recoverable(err)) => {
                return Err(Failure::Recoverable(err.wrap(input, ErrorKind::Many1)))
            }
            Err(fail) => return Err(fail),
        };
        if rem.input_len() == input.input_len() {
            debug!(kind = %ErrorKind::Many1, "repeated parser consumed nothing");
            return Err(Failure::Recoverable(P::Error::from_kind(
                input,
                ErrorKind::Many1,
            )));
        }

        let mut failure = None;
        let ret = C::from_iter(core::iter::once(first).chain(Many0Iter::new(
            &self.0,
            &mut rem,
            &mut failure,
            ErrorKind::Many1,
        )));
        match failure {
            Some(fail) => Err(fail),
            None => Ok(Success(ret, rem)),
        }
    }
}

/// Creates a parser that applies `parser` one or more times and collects
/// the outputs into `C`.
#[inline]
pub const fn collect_many1<P, C, I>(parser: P) -> impl Parse<I, Parsed = C, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
    C: FromIterator<P::Parsed>,
{
    CollectMany1Parser(parser, PhantomData)
}

/// Creates a parser that applies `parser` one or more times.
///
/// If the first application fails recoverably, that failure is returned
/// wrapped with [`ErrorKind::Many1`].
#[inline]
pub const fn many1<P, I>(parser: P) -> impl Parse<I, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    CollectMany1Parser(parser, PhantomData)
}

#[derive(Debug, Clone)]
struct FoldMany0Parser<P, G, F, R, I>(P, G, F, PhantomData<fn() -> (R, I)>)
where
    P: Parse<I>,
    I: Input,
    G: Fn() -> R,
    F: Fn(R, P::Parsed) -> R;

impl<P, G, F, R, I> Parse<I> for FoldMany0Parser<P, G, F, R, I>
where
    P: Parse<I>,
    I: Input,
    G: Fn() -> R,
    F: Fn(R, P::Parsed) -> R,
{
    type Parsed = R;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<R, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let mut input = input.into_input();
        let mut failure = None;
        let ret = Many0Iter::new(&self.0, &mut input, &mut failure, ErrorKind::Many0)
            .fold((self.1)(), &self.2);
        match failure {
            Some(fail) => Err(fail),
            None => Ok(Success(ret, input)),
        }
    }
}

/// Creates a parser that applies `parser` zero or more times, folding the
/// outputs into an accumulator.
///
/// `init` produces the initial accumulator on every application of the new
/// parser, and `fold_fn` combines it with each output in turn.
///
/// # Example
/// ```
/// # use carve::prelude::*;
/// # use carve::{Cause, basic::{map_res, opt}, complete::{char, digit1}};
/// # use carve::{multi::fold_many0, sequence::terminated};
/// fn sum(input: &str) -> PResult<u32, &str, Cause<&str>> {
///     fold_many0(
///         terminated(map_res(digit1, |d: &str| d.parse::<u32>()), opt(char('+'))),
///         || 0,
///         |acc: u32, n: u32| acc + n,
///     )
///     .parse(input)
/// }
///
/// assert_eq!(sum.parse("1+2+39"), Ok(Success(42, "")));
/// ```
#[inline]
pub const fn fold_many0<P, G, F, R, I>(
    parser: P,
    init: G,
    fold_fn: F,
) -> impl Parse<I, Parsed = R, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
    G: Fn() -> R,
    F: Fn(R, P::Parsed) -> R,
{
    FoldMany0Parser(parser, init, fold_fn, PhantomData)
}

#[derive(Debug, Clone)]
struct CountParser<P, I>(P, usize, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for CountParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = Vec<P::Parsed>;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let mut rem = input.clone();
        let mut ret = Vec::with_capacity(self.1);
        for _ in 0..self.1 {
            match self.0.parse(rem.clone()) {
                Ok(Success(val, new_rem)) => {
                    ret.push(val);
                    rem = new_rem;
                }
                Err(Failure::Recoverable(err)) => {
                    return Err(Failure::Recoverable(err.wrap(input, ErrorKind::Count)))
                }
                Err(fail) => return Err(fail),
            }
        }
        Ok(Success(ret, rem))
    }
}

/// Creates a parser that applies `parser` exactly `count` times.
///
/// A recoverable failure of any application is returned wrapped with
/// [`ErrorKind::Count`].
#[inline]
pub const fn count<P, I>(
    parser: P,
    count: usize,
) -> impl Parse<I, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    CountParser(parser, count, PhantomData)
}

#[derive(Debug, Clone)]
struct ManyMNParser<P, I>(usize, usize, P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for ManyMNParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = Vec<P::Parsed>;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let (min, max) = (self.0, self.1);
        if min > max {
            return Err(Failure::Recoverable(P::Error::from_kind(
                input,
                ErrorKind::ManyMN,
            )));
        }

        let mut rem = input.clone();
        let mut ret = Vec::new();
        while ret.len() < max {
            match self.2.parse(rem.clone()) {
                Ok(Success(_, new_rem)) if new_rem.input_len() == rem.input_len() => {
                    debug!(kind = %ErrorKind::ManyMN, "repeated parser consumed nothing");
                    return Err(Failure::Recoverable(P::Error::from_kind(
                        rem,
                        ErrorKind::ManyMN,
                    )));
                }
                Ok(Success(val, new_rem)) => {
                    ret.push(val);
                    rem = new_rem;
                }
                Err(Failure::Recoverable(err)) if ret.len() < min => {
                    return Err(Failure::Recoverable(err.wrap(input, ErrorKind::ManyMN)))
                }
                Err(Failure::Recoverable(_)) => break,
                Err(fail) => return Err(fail),
            }
        }
        Ok(Success(ret, rem))
    }
}

/// Creates a parser that applies `parser` at least `min` and at most `max`
/// times.
///
/// Fewer than `min` matches is a recoverable [`ErrorKind::ManyMN`] failure
/// wrapping the failure that ended the repetition.
#[inline]
pub const fn many_m_n<P, I>(
    min: usize,
    max: usize,
    parser: P,
) -> impl Parse<I, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    P: Parse<I>,
    I: Input,
{
    ManyMNParser(min, max, parser, PhantomData)
}

#[derive(Debug, Clone)]
struct ManyTillParser<P, Q, I>(P, Q, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    Q: Parse<I, Error = P::Error>,
    I: Input;

impl<P, Q, I> Parse<I> for ManyTillParser<P, Q, I>
where
    P: Parse<I>,
    Q: Parse<I, Error = P::Error>,
    I: Input,
{
    type Parsed = (Vec<P::Parsed>, Q::Parsed);
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let mut rem = input.into_input();
        let mut ret = Vec::new();
        loop {
            match self.1.parse(rem.clone()) {
                Ok(Success(end, new_rem)) => return Ok(Success((ret, end), new_rem)),
                Err(Failure::Recoverable(_)) => {}
                Err(fail) => return Err(fail),
            }

            match self.0.parse(rem.clone()) {
                Ok(Success(_, new_rem)) if new_rem.input_len() == rem.input_len() => {
                    debug!(kind = %ErrorKind::ManyTill, "repeated parser consumed nothing");
                    return Err(Failure::Recoverable(P::Error::from_kind(
                        rem,
                        ErrorKind::ManyTill,
                    )));
                }
                Ok(Success(val, new_rem)) => {
                    ret.push(val);
                    rem = new_rem;
                }
                Err(Failure::Recoverable(err)) => {
                    return Err(Failure::Recoverable(err.wrap(rem, ErrorKind::ManyTill)))
                }
                Err(fail) => return Err(fail),
            }
        }
    }
}

/// Creates a parser that applies `parser` until `terminator` matches.
///
/// The terminator is tried first at every step. The output is the collected
/// items together with the terminator's output. When neither matches, the
/// failure of `parser` is returned wrapped with [`ErrorKind::ManyTill`].
#[inline]
pub const fn many_till<P, Q, I>(
    parser: P,
    terminator: Q,
) -> impl Parse<I, Parsed = (Vec<P::Parsed>, Q::Parsed), Error = P::Error>
where
    P: Parse<I>,
    Q: Parse<I, Error = P::Error>,
    I: Input,
{
    ManyTillParser(parser, terminator, PhantomData)
}

/// Parses `(sep item)*` after an already parsed first item.
///
/// Each `sep item` step is speculative: if either fails recoverably, the
/// step is abandoned and the list ends before the separator.
fn separated_tail<S, P, I>(
    sep: &S,
    item: &P,
    mut items: Vec<P::Parsed>,
    mut rem: I,
) -> PResult<Vec<P::Parsed>, I, P::Error>
where
    S: Parse<I, Error = P::Error>,
    P: Parse<I>,
    I: Input,
{
    loop {
        let before = rem.input_len();
        let after_sep = match sep.parse(rem.clone()) {
            Ok(Success(_, after_sep)) if after_sep.input_len() == before => {
                debug!(kind = %ErrorKind::SeparatedList, "separator consumed nothing");
                return Err(Failure::Recoverable(P::Error::from_kind(
                    rem,
                    ErrorKind::SeparatedList,
                )));
            }
            Ok(Success(_, after_sep)) => after_sep,
            Err(Failure::Recoverable(_)) => return Ok(Success(items, rem)),
            Err(fail) => return Err(fail),
        };
        let sep_len = after_sep.input_len();

        match item.parse(after_sep) {
            Ok(Success(_, after_item)) if after_item.input_len() == sep_len => {
                debug!(kind = %ErrorKind::SeparatedList, "item consumed nothing");
                return Err(Failure::Recoverable(P::Error::from_kind(
                    rem,
                    ErrorKind::SeparatedList,
                )));
            }
            Ok(Success(val, after_item)) => {
                items.push(val);
                rem = after_item;
            }
            Err(Failure::Recoverable(_)) => {
                trace!(remaining = before, "discarding trailing separator");
                return Ok(Success(items, rem));
            }
            Err(fail) => return Err(fail),
        }
    }
}

#[derive(Debug, Clone)]
struct SeparatedListParser<S, P, I>(S, P, PhantomData<fn() -> I>)
where
    S: Parse<I, Error = P::Error>,
    P: Parse<I>,
    I: Input;

impl<S, P, I> Parse<I> for SeparatedListParser<S, P, I>
where
    S: Parse<I, Error = P::Error>,
    P: Parse<I>,
    I: Input,
{
    type Parsed = Vec<P::Parsed>;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        match self.1.parse(input.clone()) {
            Ok(Success(_, rem)) if rem.input_len() == input.input_len() => {
                debug!(kind = %ErrorKind::SeparatedList, "first item consumed nothing");
                Err(Failure::Recoverable(P::Error::from_kind(
                    input,
                    ErrorKind::SeparatedList,
                )))
            }
            Ok(Success(first, rem)) => {
                let mut items = Vec::new();
                items.push(first);
                separated_tail(&self.0, &self.1, items, rem)
            }
            Err(Failure::Recoverable(_)) => Ok(Success(Vec::new(), input)),
            Err(fail) => Err(fail),
        }
    }
}

/// Creates a parser for zero or more `item`s separated by `sep`.
///
/// A separator that is not followed by an item is left unconsumed. An item
/// or separator that succeeds without consuming input is a recoverable
/// [`ErrorKind::SeparatedList`] failure.
///
/// # Example
/// ```
/// # use carve::prelude::*;
/// # use carve::{Cause, complete::{char, digit1}, multi::separated_list};
/// fn csv(input: &str) -> PResult<Vec<&str>, &str, Cause<&str>> {
///     separated_list(char(','), digit1).parse(input)
/// }
///
/// assert_eq!(csv.parse("1,22,333"), Ok(Success(vec!["1", "22", "333"], "")));
/// assert_eq!(csv.parse("1,22,x"), Ok(Success(vec!["1", "22"], ",x")));
/// assert_eq!(csv.parse("x"), Ok(Success(vec![], "x")));
/// ```
#[inline]
pub const fn separated_list<S, P, I>(
    sep: S,
    item: P,
) -> impl Parse<I, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    S: Parse<I, Error = P::Error>,
    P: Parse<I>,
    I: Input,
{
    SeparatedListParser(sep, item, PhantomData)
}

#[derive(Debug, Clone)]
struct SeparatedNonemptyListParser<S, P, I>(S, P, PhantomData<fn() -> I>)
where
    S: Parse<I, Error = P::Error>,
    P: Parse<I>,
    I: Input;

impl<S, P, I> Parse<I> for SeparatedNonemptyListParser<S, P, I>
where
    S: Parse<I, Error = P::Error>,
    P: Parse<I>,
    I: Input,
{
    type Parsed = Vec<P::Parsed>;
    type Error = P::Error;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I, Self::Error>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let Success(first, rem) = self.1.parse(input.clone())?;
        if rem.input_len() == input.input_len() {
            debug!(kind = %ErrorKind::SeparatedList, "first item consumed nothing");
            return Err(Failure::Recoverable(P::Error::from_kind(
                input,
                ErrorKind::SeparatedList,
            )));
        }
        let mut items = Vec::new();
        items.push(first);
        separated_tail(&self.0, &self.1, items, rem)
    }
}

/// Creates a parser for one or more `item`s separated by `sep`.
///
/// A failure of the first item is returned unchanged. Otherwise this behaves
/// like [`separated_list`].
#[inline]
pub const fn separated_nonempty_list<S, P, I>(
    sep: S,
    item: P,
) -> impl Parse<I, Parsed = Vec<P::Parsed>, Error = P::Error>
where
    S: Parse<I, Error = P::Error>,
    P: Parse<I>,
    I: Input,
{
    SeparatedNonemptyListParser(sep, item, PhantomData)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::basic::{opt, success};
    use crate::complete::{alpha1, char, digit0, digit1, tag};
    use crate::sequence::terminated;
    use crate::{streaming, Cause};
    use alloc::{string::String, vec};
    use pretty_assertions::assert_eq;

    type Res<'a, T> = PResult<T, &'a str, Cause<&'a str>>;

    fn fatal(input: &str) -> Res<'_, &str> {
        Err(Failure::Fatal(Cause::new(input, ErrorKind::User)))
    }

    fn kinds<T>(res: Res<'_, T>) -> Vec<ErrorKind> {
        match res {
            Err(Failure::Recoverable(err)) => err.kinds().collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn many0_collects_until_mismatch() {
        fn p(input: &str) -> Res<'_, Vec<&str>> {
            many0(tag("ab")).parse(input)
        }

        assert_eq!(p("ababc"), Ok(Success(vec!["ab", "ab"], "c")));
        assert_eq!(p(""), Ok(Success(vec![], "")));
        assert_eq!(p("aab"), Ok(Success(vec![], "aab")));
    }

    #[test]
    fn many0_zero_consumption_guard() {
        fn p(input: &str) -> Res<'_, Vec<&str>> {
            many0(digit0).parse(input)
        }

        assert_eq!(kinds(p("abc")), [ErrorKind::Many0]);
        assert_eq!(kinds(p("12abc")), [ErrorKind::Many0]);
    }

    #[test]
    fn many0_propagates_other_failures() {
        fn with_fatal(input: &str) -> Res<'_, Vec<&str>> {
            many0(crate::branch::either(tag("a"), fatal)).parse(input)
        }
        fn with_incomplete(input: &str) -> Res<'_, Vec<&str>> {
            many0(streaming::tag("ab")).parse(input)
        }

        assert!(with_fatal("aab").unwrap_err().is_fatal());
        assert_eq!(with_incomplete("aba"), Err(Failure::Incomplete));
    }

    #[test]
    fn collect_into_other_containers() {
        fn letters(input: &str) -> Res<'_, String> {
            collect_many0(crate::complete::satisfy(|c: char| c.is_ascii_lowercase()))
                .parse(input)
        }
        fn letters1(input: &str) -> Res<'_, String> {
            collect_many1(crate::complete::satisfy(|c: char| c.is_ascii_lowercase()))
                .parse(input)
        }

        assert_eq!(letters("abC"), Ok(Success(String::from("ab"), "C")));
        assert_eq!(letters1("abC"), Ok(Success(String::from("ab"), "C")));
        assert_eq!(kinds(letters1("C")), [ErrorKind::Many1, ErrorKind::Char]);
    }

    #[test]
    fn many1_wraps_first_failure() {
        fn p(input: &str) -> Res<'_, Vec<&str>> {
            many1(tag("abc")).parse(input)
        }
        fn empty_item(input: &str) -> Res<'_, Vec<()>> {
            many1(success(())).parse(input)
        }

        assert_eq!(p("abcabcx"), Ok(Success(vec!["abc", "abc"], "x")));
        let err = p("123").unwrap_err().into_cause().unwrap();
        assert_eq!(err.kinds().collect::<Vec<_>>(), [ErrorKind::Many1, ErrorKind::Tag]);
        assert_eq!(err.position(), &"123");
        assert_eq!(kinds(empty_item("x")), [ErrorKind::Many1]);
    }

    #[test]
    fn fold_accumulates() {
        fn total(input: &str) -> Res<'_, usize> {
            fold_many0(
                terminated(alpha1, opt(char(' '))),
                || 0,
                |acc: usize, w: &str| acc + w.len(),
            )
            .parse(input)
        }

        assert_eq!(total("ab cde f1"), Ok(Success(6, "1")));
        assert_eq!(total("1"), Ok(Success(0, "1")));
    }

    #[test]
    fn count_is_exact() {
        fn three(input: &str) -> Res<'_, Vec<&str>> {
            count(tag("ab"), 3).parse(input)
        }

        assert_eq!(three("abababab"), Ok(Success(vec!["ab", "ab", "ab"], "ab")));
        let err = three("ababx").unwrap_err().into_cause().unwrap();
        assert_eq!(err.kinds().collect::<Vec<_>>(), [ErrorKind::Count, ErrorKind::Tag]);
        assert_eq!(err.position(), &"ababx");
    }

    #[test]
    fn bounded_repetition() {
        fn p(input: &str) -> Res<'_, Vec<&str>> {
            many_m_n(2, 3, tag("a")).parse(input)
        }
        fn backwards(input: &str) -> Res<'_, Vec<&str>> {
            many_m_n(3, 2, tag("a")).parse(input)
        }

        assert_eq!(p("aaaa"), Ok(Success(vec!["a", "a", "a"], "a")));
        assert_eq!(p("aab"), Ok(Success(vec!["a", "a"], "b")));
        assert_eq!(kinds(p("ab")), [ErrorKind::ManyMN, ErrorKind::Tag]);
        assert_eq!(kinds(backwards("aaa")), [ErrorKind::ManyMN]);
    }

    #[test]
    fn many_till_stops_at_terminator() {
        fn p(input: &str) -> Res<'_, (Vec<&str>, &str)> {
            many_till(tag("ab"), tag("end")).parse(input)
        }

        assert_eq!(p("ababend;"), Ok(Success((vec!["ab", "ab"], "end"), ";")));
        assert_eq!(p("end"), Ok(Success((vec![], "end"), "")));
        let err = p("abx").unwrap_err().into_cause().unwrap();
        assert_eq!(err.kinds().collect::<Vec<_>>(), [ErrorKind::ManyTill, ErrorKind::Tag]);
        assert_eq!(err.position(), &"x");
    }

    #[test]
    fn separated_list_trailing_separator() {
        fn p(input: &str) -> Res<'_, Vec<&str>> {
            separated_list(char(','), digit1).parse(input)
        }

        assert_eq!(p("1,2,3"), Ok(Success(vec!["1", "2", "3"], "")));
        assert_eq!(p("1,2,"), Ok(Success(vec!["1", "2"], ",")));
        assert_eq!(p(",1"), Ok(Success(vec![], ",1")));
        assert_eq!(p(""), Ok(Success(vec![], "")));
    }

    #[test]
    fn separated_list_guards() {
        fn empty_sep(input: &str) -> Res<'_, Vec<&str>> {
            separated_list(tag(""), digit1).parse(input)
        }
        fn empty_item(input: &str) -> Res<'_, Vec<&str>> {
            separated_list(char(','), digit0).parse(input)
        }

        assert_eq!(kinds(empty_sep("12")), [ErrorKind::SeparatedList]);
        assert_eq!(kinds(empty_item("1,,")), [ErrorKind::SeparatedList]);
        assert_eq!(kinds(empty_item("x")), [ErrorKind::SeparatedList]);
    }

    #[test]
    fn separated_list_propagates_fatal() {
        fn p(input: &str) -> Res<'_, Vec<&str>> {
            separated_list(char(','), crate::branch::either(digit1, fatal)).parse(input)
        }

        assert_eq!(p("1,2"), Ok(Success(vec!["1", "2"], "")));
        assert!(p("1,x").unwrap_err().is_fatal());
    }

    #[test]
    fn nonempty_list() {
        fn p(input: &str) -> Res<'_, Vec<&str>> {
            separated_nonempty_list(char(','), digit1).parse(input)
        }

        assert_eq!(p("1,2;"), Ok(Success(vec!["1", "2"], ";")));
        assert_eq!(p("1;"), Ok(Success(vec!["1"], ";")));
        assert_eq!(kinds(p("x")), [ErrorKind::Digit]);
    }
}
