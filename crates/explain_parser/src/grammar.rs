//! Recognizers for the fixed math shapes: `sqrt(N)` and `a op b`.

use nom::{
    bytes::complete::tag_no_case,
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{delimited, pair, tuple},
    IResult,
};

use crate::error::{ParseError, RadicandError};
use crate::expr::BinOp;

/// `\d+(\.\d+)?`
pub(crate) fn decimal_literal(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, opt(pair(char('.'), digit1))))(input)
}

/// `-?\d+(\.\d+)?`
pub(crate) fn signed_decimal(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), decimal_literal))(input)
}

fn sqrt_call(input: &str) -> IResult<&str, &str> {
    let (input, (_, _, _, _, argument, _, _)) = tuple((
        tag_no_case("sqrt"),
        multispace0,
        char('('),
        multispace0,
        signed_decimal,
        multispace0,
        char(')'),
    ))(input)?;
    Ok((input, argument))
}

/// Match a whole string of the form `sqrt(<number>)` and return the argument
/// text. Sign and fraction are kept so the caller can reject them explicitly.
pub fn parse_sqrt_call(text: &str) -> Result<&str, ParseError> {
    all_consuming(delimited(multispace0, sqrt_call, multispace0))(text)
        .map(|(_, argument)| argument)
        .map_err(|e| ParseError::NomError(format!("{}", e)))
}

/// Turn a `sqrt(...)` argument into a radicand no larger than `max`.
///
/// `-0` and `4.0` are accepted as 0 and 4.
pub fn parse_radicand(text: &str, max: u64) -> Result<u64, RadicandError> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (integer_part, fraction_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let is_zero = |digits: &str| digits.chars().all(|c| c == '0');
    if !is_zero(fraction_part) {
        return Err(RadicandError::NotInteger(text.to_string()));
    }
    if negative && !is_zero(integer_part) {
        return Err(RadicandError::Negative(text.to_string()));
    }

    let too_large = || RadicandError::TooLarge {
        text: text.to_string(),
        max,
    };
    let value: u64 = integer_part.parse().map_err(|_| too_large())?;
    if value > max {
        return Err(too_large());
    }
    Ok(value)
}

/// A single two-operand arithmetic expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpression {
    pub left: f64,
    pub op: BinOp,
    pub right: f64,
}

fn binary_expression(input: &str) -> IResult<&str, (&str, char, &str)> {
    let (input, (_, left, _, op, _, right, _)) = tuple((
        multispace0,
        signed_decimal,
        multispace0,
        one_of("+-*/"),
        multispace0,
        signed_decimal,
        multispace0,
    ))(input)?;
    Ok((input, (left, op, right)))
}

/// Match a whole string of the form `a op b` with optionally signed decimal
/// operands.
pub fn parse_binary_expression(text: &str) -> Result<BinaryExpression, ParseError> {
    let (_, (left, op, right)) = all_consuming(binary_expression)(text)
        .map_err(|e| ParseError::NomError(format!("{}", e)))?;

    let operand = |literal: &str| -> Result<f64, ParseError> {
        literal
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::NomError(format!("operand out of range: {literal}")))
    };
    let op = BinOp::from_symbol(op)
        .ok_or_else(|| ParseError::UnconsumedInput(op.to_string()))?;

    Ok(BinaryExpression {
        left: operand(left)?,
        op,
        right: operand(right)?,
    })
}
