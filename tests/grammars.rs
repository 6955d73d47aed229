use carve::basic::{all_consuming, map, map_res, opt, recognize, value};
use carve::complete::{
    alpha1, char, digit1, multispace0, multispace1, one_of, tag, take_till, take_while,
};
use carve::multi::{many0, separated_list};
use carve::prelude::*;
use carve::sequence::{delimited, pair, preceded, separated_pair, terminated};
use carve::{AsChar, Cause, Compare, ErrorKind, OwnedStr};
use pretty_assertions::assert_eq;

type Res<'a, T> = PResult<T, &'a str, Cause<&'a str>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    MoveTo(i32, i32),
    LineTo(i32, i32),
    Close,
}

fn number(input: &str) -> Res<'_, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| s.parse::<i32>()).parse(input)
}

fn coordinates(input: &str) -> Res<'_, (i32, i32)> {
    separated_pair(
        number,
        alt!(
            recognize(delimited(multispace0, char(','), multispace0)),
            multispace1,
        ),
        number,
    )
    .parse(input)
}

fn command(input: &str) -> Res<'_, Command> {
    alt!(
        map(
            preceded(pair(one_of("Mm"), multispace0), coordinates),
            |(x, y): (i32, i32)| Command::MoveTo(x, y),
        ),
        map(
            preceded(pair(one_of("Ll"), multispace0), coordinates),
            |(x, y): (i32, i32)| Command::LineTo(x, y),
        ),
        value(Command::Close, one_of("Zz")),
    )
    .parse(input)
}

fn path(input: &str) -> Res<'_, Vec<Command>> {
    all_consuming(delimited(
        multispace0,
        separated_list(multispace1, command),
        multispace0,
    ))
    .parse(input)
}

#[test]
fn path_data() {
    assert_eq!(
        path(" M 10 20 L 30,40 l -5 , 5 Z "),
        Ok(Success(
            vec![
                Command::MoveTo(10, 20),
                Command::LineTo(30, 40),
                Command::LineTo(-5, 5),
                Command::Close,
            ],
            ""
        ))
    );
    assert_eq!(path(""), Ok(Success(vec![], "")));
}

#[test]
fn path_data_rejects_unknown_command() {
    let err = path("M 1 2 Q 3 4").unwrap_err().into_cause().unwrap();
    assert_eq!(err.kind(), ErrorKind::Eof);
    assert_eq!(err.position(), &"Q 3 4");

    let err = command("Q 3 4").unwrap_err().into_cause().unwrap();
    assert_eq!(err.kinds().collect::<Vec<_>>(), [ErrorKind::Alt, ErrorKind::OneOf]);
}

#[test]
fn path_numbers_out_of_range() {
    let err = number("99999999999").unwrap_err().into_cause().unwrap();
    assert_eq!(err.kind(), ErrorKind::MapRes);
    assert_eq!(err.position(), &"99999999999");
}

fn name(input: &str) -> Res<'_, &str> {
    recognize(pair(
        alpha1,
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == ':'),
    ))
    .parse(input)
}

fn quoted(input: &str) -> Res<'_, &str> {
    alt!(
        delimited(char('"'), take_till(|c: char| c == '"'), char('"')),
        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
    )
    .parse(input)
}

fn attribute(input: &str) -> Res<'_, (&str, &str)> {
    separated_pair(name, delimited(multispace0, char('='), multispace0), quoted).parse(input)
}

/// Parses `<name attr="value" ...>` or the self-closing form, returning the
/// element name, its attributes and whether it closes itself.
fn start_tag(input: &str) -> Res<'_, (&str, Vec<(&str, &str)>, bool)> {
    preceded(
        char('<'),
        tuple!(
            name,
            many0(preceded(multispace1, attribute)),
            preceded(
                multispace0,
                alt!(value(false, tag(">")), value(true, tag("/>"))),
            ),
        ),
    )
    .parse(input)
}

#[test]
fn xml_start_tags() {
    assert_eq!(
        start_tag(r#"<svg width="10" xlink:href='#a' >rest"#),
        Ok(Success(
            ("svg", vec![("width", "10"), ("xlink:href", "#a")], false),
            "rest"
        ))
    );
    assert_eq!(
        start_tag(r#"<path d = "M 0 0 Z"/>"#),
        Ok(Success(("path", vec![("d", "M 0 0 Z")], true), ""))
    );
    assert_eq!(start_tag("<g>"), Ok(Success(("g", vec![], false), "")));
}

#[test]
fn xml_unquoted_value_stops_attributes() {
    let err = start_tag("<svg width=10>").unwrap_err().into_cause().unwrap();
    assert_eq!(err.kinds().collect::<Vec<_>>(), [ErrorKind::Alt, ErrorKind::Tag]);
    assert_eq!(err.position(), &"width=10>");
}

/// After `name=` the value is mandatory, so its failure is committed.
fn committed_attribute(input: &str) -> Res<'_, (&str, &str)> {
    let Success(key, rem) = terminated(name, char('=')).parse(input)?;
    let Success(val, rem) = quoted(rem).map_err(Failure::into_fatal)?;
    Ok(Success((key, val), rem))
}

#[test]
fn committed_failure_is_not_backtracked() {
    fn attrs(input: &str) -> Res<'_, Vec<(&str, &str)>> {
        many0(preceded(multispace1, committed_attribute)).parse(input)
    }

    assert_eq!(attrs(r#" a="1" b='2'>"#), Ok(Success(vec![("a", "1"), ("b", "2")], ">")));
    assert_eq!(attrs(" >"), Ok(Success(vec![], " >")));

    let err = attrs(r#" a="1" b=2>"#).unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(err.cause().map(|c| *c.position()), Some("2>"));
}

fn generic_attribute<I>(input: I) -> PResult<(I, I), I, Cause<I>>
where
    I: Input + Compare<&'static str>,
    I::Item: AsChar,
{
    preceded(
        tag("@"),
        separated_pair(
            alpha1,
            delimited(multispace0, char('='), multispace0),
            delimited(
                char('"'),
                take_till(|c: I::Item| c.as_char() == '"'),
                char('"'),
            ),
        ),
    )
    .parse(input)
}

fn flatten<I: core::fmt::Display>(
    res: PResult<(I, I), I, Cause<I>>,
) -> Result<[String; 3], Vec<ErrorKind>> {
    match res {
        Ok(Success((key, val), rem)) => Ok([key.to_string(), val.to_string(), rem.to_string()]),
        Err(fail) => Err(fail.cause().map(|c| c.kinds().collect()).unwrap_or_default()),
    }
}

#[test]
fn owned_and_borrowed_inputs_agree() {
    for text in [r#"@id = "main" tail"#, r#"@id="""#, "@ id", "id", r#"@id="open"#] {
        let borrowed = flatten(generic_attribute(text));
        let owned = flatten(generic_attribute(OwnedStr::from(text)));
        let via_string = flatten(generic_attribute::<OwnedStr>.parse(String::from(text)));
        let string = String::from(text);
        let via_ref = flatten(generic_attribute::<&str>.parse(&string));

        assert_eq!(borrowed, owned, "{text}");
        assert_eq!(borrowed, via_string, "{text}");
        assert_eq!(borrowed, via_ref, "{text}");
    }

    assert_eq!(
        flatten(generic_attribute(r#"@id = "main" tail"#)),
        Ok(["id".to_string(), "main".to_string(), " tail".to_string()])
    );
}

#[test]
fn owned_remainder_shares_storage() {
    let input = OwnedStr::from("@k=\"v\";");
    let Success((key, val), rem) = generic_attribute(input.clone()).unwrap();

    assert_eq!(key, "k");
    assert_eq!(val, "v");
    assert_eq!(rem, ";");
    assert_eq!(rem.offset(), 6);
}

#[test]
fn byte_inputs() {
    fn header(input: &[u8]) -> PResult<(&[u8], Vec<&[u8]>), &[u8], Cause<&[u8]>> {
        pair(
            terminated(tag("GET"), multispace1),
            separated_list(char('/'), alpha1),
        )
        .parse(input)
    }

    assert_eq!(
        header(b"GET abc/de/1"),
        Ok(Success((&b"GET"[..], vec![&b"abc"[..], &b"de"[..]]), &b"/1"[..]))
    );
}
