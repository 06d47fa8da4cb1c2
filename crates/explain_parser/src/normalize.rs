//! Rewrite the accepted square-root phrasings into `sqrt(N)`.
//!
//! Rewrites run in a fixed order over the trimmed text:
//! 1. `√` (and `√(`) becomes `sqrt(`
//! 2. `square root of N` becomes `sqrt(N)`
//! 3. a whole string `root N` becomes `sqrt(N)`
//! 4. `sqrt(N` is closed to `sqrt(N)`
//!
//! `N` is an optionally negative decimal literal; rejecting signs and
//! fractions is left to the sqrt pattern. The output is a fixed point:
//! normalizing it again returns it unchanged.

use nom::{
    bytes::complete::tag_no_case,
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, opt},
    sequence::{pair, preceded, tuple},
    IResult,
};

use crate::grammar::signed_decimal;

type Rewrite = fn(&str) -> IResult<&str, String>;

/// Apply `rule` at every position of `input`, left to right, copying
/// characters through wherever it does not match.
fn rewrite_all(input: &str, rule: Rewrite) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut rest = input;
    while let Some(c) = rest.chars().next() {
        match rule(rest) {
            Ok((after, replacement)) if after.len() < rest.len() => {
                out.push_str(&replacement);
                rest = after;
            }
            _ => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

fn radical(input: &str) -> IResult<&str, String> {
    map(
        pair(char('√'), opt(preceded(multispace0, char('(')))),
        |_| "sqrt(".to_string(),
    )(input)
}

fn square_root_of(input: &str) -> IResult<&str, String> {
    map(
        tuple((
            tag_no_case("square"),
            multispace0,
            tag_no_case("root"),
            multispace0,
            tag_no_case("of"),
            multispace0,
            signed_decimal,
        )),
        |(.., n)| format!("sqrt({n})"),
    )(input)
}

fn open_sqrt_call(input: &str) -> IResult<&str, String> {
    map(
        tuple((
            tag_no_case("sqrt("),
            multispace0,
            signed_decimal,
            opt(preceded(multispace0, char(')'))),
        )),
        |(_, _, n, _)| format!("sqrt({n})"),
    )(input)
}

fn leading_root(text: &str) -> Option<String> {
    all_consuming(preceded(pair(tag_no_case("root"), multispace0), signed_decimal))(text)
        .ok()
        .map(|(_, n)| format!("sqrt({n})"))
}

/// Canonicalize square-root phrasing. Text without any root phrasing is only
/// trimmed.
pub fn normalize(query: &str) -> String {
    let text = rewrite_all(query.trim(), radical);
    let text = rewrite_all(&text, square_root_of);
    let text = leading_root(&text).unwrap_or(text);
    rewrite_all(&text, open_sqrt_call)
}
