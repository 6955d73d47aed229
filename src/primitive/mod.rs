use crate::{
    AsChar, Compare, CompareResult, Error, ErrorKind, Failure, FindToken, Input, IntoInput,
    PResult, Parse, Success,
};
use core::marker::PhantomData;

pub mod complete;
pub mod streaming;

#[inline]
fn split<I: Input>(input: I, offset: usize) -> Success<I, I> {
    let (consumed, rem) = input.take_split(offset);
    Success(consumed, rem)
}

#[inline]
fn reject<T, I: Input, E: Error<I>>(input: I, kind: ErrorKind) -> PResult<T, I, E> {
    Err(Failure::Recoverable(E::from_kind(input, kind)))
}

fn split_tag<T, I, E>(input: I, pattern: T, no_case: bool, streaming: bool) -> PResult<I, I, E>
where
    I: Input + Compare<T>,
    E: Error<I>,
{
    let res = if no_case {
        input.compare_no_case(pattern)
    } else {
        input.compare(pattern)
    };
    match res {
        CompareResult::Match(len) => Ok(split(input, len)),
        CompareResult::ProperPrefix if streaming => Err(Failure::Incomplete),
        _ => reject(input, ErrorKind::Tag),
    }
}

fn split_count<I: Input, E: Error<I>>(input: I, count: usize, streaming: bool) -> PResult<I, I, E> {
    match input.slice_index(count) {
        Some(offset) => Ok(split(input, offset)),
        None if streaming => Err(Failure::Incomplete),
        None => reject(input, ErrorKind::Eof),
    }
}

/// Splits off the longest prefix whose symbols satisfy `pred`.
pub(crate) fn split_while<I, E, F>(input: I, pred: F, streaming: bool) -> PResult<I, I, E>
where
    I: Input,
    E: Error<I>,
    F: Fn(I::Item) -> bool,
{
    match input.position(|item| !pred(item)) {
        Some(offset) => Ok(split(input, offset)),
        None if streaming => Err(Failure::Incomplete),
        None => {
            let len = input.input_len();
            Ok(split(input, len))
        }
    }
}

/// Like [`split_while`], but an empty prefix fails with `kind`.
pub(crate) fn split_while1<I, E, F>(
    input: I,
    pred: F,
    kind: ErrorKind,
    streaming: bool,
) -> PResult<I, I, E>
where
    I: Input,
    E: Error<I>,
    F: Fn(I::Item) -> bool,
{
    match input.position(|item| !pred(item)) {
        Some(0) => reject(input, kind),
        Some(offset) => Ok(split(input, offset)),
        None if streaming => Err(Failure::Incomplete),
        None if input.is_empty() => reject(input, kind),
        None => {
            let len = input.input_len();
            Ok(split(input, len))
        }
    }
}

fn split_while_m_n<I, E, F>(
    input: I,
    min: usize,
    max: usize,
    pred: F,
    streaming: bool,
) -> PResult<I, I, E>
where
    I: Input,
    E: Error<I>,
    F: Fn(I::Item) -> bool,
{
    let mut count = 0;
    let mut end = None;
    for (idx, item) in input.iter_indices() {
        if count == max || !pred(item) {
            end = Some(idx);
            break;
        }
        count += 1;
    }

    match end {
        Some(offset) if count >= min => Ok(split(input, offset)),
        Some(_) => reject(input, ErrorKind::TakeWhileMN),
        None if streaming && count < max => Err(Failure::Incomplete),
        None if count >= min => {
            let len = input.input_len();
            Ok(split(input, len))
        }
        None => reject(input, ErrorKind::TakeWhileMN),
    }
}

/// Takes a single symbol if it satisfies `pred`.
fn split_symbol<I, E, F>(
    input: I,
    pred: F,
    kind: ErrorKind,
    streaming: bool,
) -> PResult<I::Item, I, E>
where
    I: Input,
    E: Error<I>,
    F: Fn(I::Item) -> bool,
{
    let head = {
        let mut iter = input.iter_indices();
        iter.next()
            .map(|(_, item)| (item, iter.next().map_or(input.input_len(), |(idx, _)| idx)))
    };

    match head {
        Some((item, offset)) if pred(item) => {
            let (_, rem) = input.take_split(offset);
            Ok(Success(item, rem))
        }
        Some(_) => reject(input, kind),
        None if streaming => Err(Failure::Incomplete),
        None => reject(input, kind),
    }
}

#[derive(Debug, Clone)]
struct TagParser<T, I, E> {
    pattern: T,
    no_case: bool,
    streaming: bool,
    _phantom: PhantomData<fn() -> (I, E)>,
}

#[derive(Debug, Clone)]
struct TakeParser<I, E> {
    count: usize,
    streaming: bool,
    _phantom: PhantomData<fn() -> (I, E)>,
}

#[derive(Debug, Clone)]
struct TakeWhileParser<F, I, E> {
    pred: F,
    streaming: bool,
    _phantom: PhantomData<fn() -> (I, E)>,
}

#[derive(Debug, Clone)]
struct TakeWhile1Parser<F, I, E> {
    pred: F,
    streaming: bool,
    _phantom: PhantomData<fn() -> (I, E)>,
}

#[derive(Debug, Clone)]
struct TakeWhileMNParser<F, I, E> {
    min: usize,
    max: usize,
    pred: F,
    streaming: bool,
    _phantom: PhantomData<fn() -> (I, E)>,
}

#[derive(Debug, Clone)]
struct TakeTillParser<F, I, E> {
    pred: F,
    streaming: bool,
    _phantom: PhantomData<fn() -> (I, E)>,
}

#[derive(Debug, Clone)]
struct TakeTill1Parser<F, I, E> {
    pred: F,
    streaming: bool,
    _phantom: PhantomData<fn() -> (I, E)>,
}

#[derive(Debug, Clone)]
struct IsAParser<T, I, E> {
    set: T,
    streaming: bool,
    _phantom: PhantomData<fn() -> (I, E)>,
}

#[derive(Debug, Clone)]
struct IsNotParser<T, I, E> {
    set: T,
    streaming: bool,
    _phantom: PhantomData<fn() -> (I, E)>,
}

#[derive(Debug, Clone)]
struct CharParser<I, E> {
    expected: char,
    streaming: bool,
    _phantom: PhantomData<fn() -> (I, E)>,
}

#[derive(Debug, Clone)]
struct OneOfParser<T, I, E> {
    set: T,
    streaming: bool,
    _phantom: PhantomData<fn() -> (I, E)>,
}

#[derive(Debug, Clone)]
struct NoneOfParser<T, I, E> {
    set: T,
    streaming: bool,
    _phantom: PhantomData<fn() -> (I, E)>,
}

#[derive(Debug, Clone)]
struct SatisfyParser<F, I, E> {
    pred: F,
    streaming: bool,
    _phantom: PhantomData<fn() -> (I, E)>,
}

impl<T, I, E> Parse<I> for TagParser<T, I, E>
where
    T: Clone,
    I: Input + Compare<T>,
    E: Error<I>,
{
    type Parsed = I;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<I, I, E>
    where
        N: IntoInput<Input = I>,
    {
        split_tag(
            input.into_input(),
            self.pattern.clone(),
            self.no_case,
            self.streaming,
        )
    }
}

impl<I, E> Parse<I> for TakeParser<I, E>
where
    I: Input,
    E: Error<I>,
{
    type Parsed = I;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<I, I, E>
    where
        N: IntoInput<Input = I>,
    {
        split_count(input.into_input(), self.count, self.streaming)
    }
}

impl<F, I, E> Parse<I> for TakeWhileParser<F, I, E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    type Parsed = I;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<I, I, E>
    where
        N: IntoInput<Input = I>,
    {
        split_while(input.into_input(), &self.pred, self.streaming)
    }
}

impl<F, I, E> Parse<I> for TakeWhile1Parser<F, I, E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    type Parsed = I;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<I, I, E>
    where
        N: IntoInput<Input = I>,
    {
        split_while1(
            input.into_input(),
            &self.pred,
            ErrorKind::TakeWhile1,
            self.streaming,
        )
    }
}

impl<F, I, E> Parse<I> for TakeWhileMNParser<F, I, E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    type Parsed = I;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<I, I, E>
    where
        N: IntoInput<Input = I>,
    {
        split_while_m_n(
            input.into_input(),
            self.min,
            self.max,
            &self.pred,
            self.streaming,
        )
    }
}

impl<F, I, E> Parse<I> for TakeTillParser<F, I, E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    type Parsed = I;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<I, I, E>
    where
        N: IntoInput<Input = I>,
    {
        split_while(input.into_input(), |item| !(self.pred)(item), self.streaming)
    }
}

impl<F, I, E> Parse<I> for TakeTill1Parser<F, I, E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    type Parsed = I;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<I, I, E>
    where
        N: IntoInput<Input = I>,
    {
        split_while1(
            input.into_input(),
            |item| !(self.pred)(item),
            ErrorKind::TakeTill1,
            self.streaming,
        )
    }
}

impl<T, I, E> Parse<I> for IsAParser<T, I, E>
where
    T: FindToken<I::Item>,
    I: Input,
    E: Error<I>,
{
    type Parsed = I;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<I, I, E>
    where
        N: IntoInput<Input = I>,
    {
        split_while1(
            input.into_input(),
            |item| self.set.find_token(item),
            ErrorKind::IsA,
            self.streaming,
        )
    }
}

impl<T, I, E> Parse<I> for IsNotParser<T, I, E>
where
    T: FindToken<I::Item>,
    I: Input,
    E: Error<I>,
{
    type Parsed = I;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<I, I, E>
    where
        N: IntoInput<Input = I>,
    {
        split_while1(
            input.into_input(),
            |item| !self.set.find_token(item),
            ErrorKind::IsNot,
            self.streaming,
        )
    }
}

impl<I, E> Parse<I> for CharParser<I, E>
where
    I: Input,
    I::Item: AsChar,
    E: Error<I>,
{
    type Parsed = char;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<char, I, E>
    where
        N: IntoInput<Input = I>,
    {
        let Success(item, rem) = split_symbol(
            input.into_input(),
            |item: I::Item| item.is_char(self.expected),
            ErrorKind::Char,
            self.streaming,
        )?;
        Ok(Success(item.as_char(), rem))
    }
}

impl<T, I, E> Parse<I> for OneOfParser<T, I, E>
where
    T: FindToken<I::Item>,
    I: Input,
    E: Error<I>,
{
    type Parsed = I::Item;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<I::Item, I, E>
    where
        N: IntoInput<Input = I>,
    {
        split_symbol(
            input.into_input(),
            |item| self.set.find_token(item),
            ErrorKind::OneOf,
            self.streaming,
        )
    }
}

impl<T, I, E> Parse<I> for NoneOfParser<T, I, E>
where
    T: FindToken<I::Item>,
    I: Input,
    E: Error<I>,
{
    type Parsed = I::Item;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<I::Item, I, E>
    where
        N: IntoInput<Input = I>,
    {
        split_symbol(
            input.into_input(),
            |item| !self.set.find_token(item),
            ErrorKind::NoneOf,
            self.streaming,
        )
    }
}

impl<F, I, E> Parse<I> for SatisfyParser<F, I, E>
where
    F: Fn(I::Item) -> bool,
    I: Input,
    E: Error<I>,
{
    type Parsed = I::Item;
    type Error = E;

    fn parse<N>(&self, input: N) -> PResult<I::Item, I, E>
    where
        N: IntoInput<Input = I>,
    {
        split_symbol(input.into_input(), &self.pred, ErrorKind::Char, self.streaming)
    }
}

/// Takes the next symbol, whatever it is.
#[inline]
fn split_any<I: Input, E: Error<I>>(input: I, streaming: bool) -> PResult<I::Item, I, E> {
    split_symbol(input, |_| true, ErrorKind::Eof, streaming)
}
