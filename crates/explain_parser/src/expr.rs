//! Arithmetic expression trees for the generic fallback pattern.
//!
//! Text goes through three stages, each of which can reject it:
//! 1. a character whitelist gate (nothing else runs if it fails),
//! 2. a recursive-descent parser producing an [`Expr`] tree,
//! 3. a tree-walking evaluator that records every reduction it performs.
//!
//! Grammar (left associative, one optional unary minus per factor):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := factor (('*' | '/') factor)*
//! factor  := '-'? primary
//! primary := number | '(' expr ')'
//! ```

use std::fmt;

use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, multispace0, one_of},
    combinator::{opt, recognize},
    error::{Error, ErrorKind},
    multi::fold_many0,
    sequence::{pair, preceded},
    IResult,
};

use crate::classify::is_arithmetic_char;
use crate::error::{EvalError, ExprError};

/// Deepest parenthesis nesting the parser accepts.
pub const MAX_NESTING: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }

    /// Name of the operation, e.g. "addition".
    pub fn name(self) -> &'static str {
        match self {
            BinOp::Add => "addition",
            BinOp::Sub => "subtraction",
            BinOp::Mul => "multiplication",
            BinOp::Div => "division",
        }
    }

    /// The rule for this operation, in words.
    pub fn rule(self) -> &'static str {
        match self {
            BinOp::Add => "Add the values: a + b",
            BinOp::Sub => "Subtract the second from the first: a − b",
            BinOp::Mul => "Multiply the values: a × b",
            BinOp::Div => "Divide the first by the second: a ÷ b",
        }
    }

    /// Apply the operation with f64 semantics. Division by zero is checked
    /// by callers, not here.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinOp::Add => left + right,
            BinOp::Sub => left - right,
            BinOp::Mul => left * right,
            BinOp::Div => left / right,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Neg(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

/// One binary operation carried out during evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    pub left: f64,
    pub op: BinOp,
    pub right: f64,
    pub value: f64,
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.left),
            self.op,
            format_number(self.right),
            format_number(self.value)
        )
    }
}

/// Value of an expression plus the reductions that produced it, in the order
/// they were performed.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub reductions: Vec<Reduction>,
}

/// Render a number the way explanations show it: no trailing `.0`, no `-0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

impl Expr {
    pub fn evaluate(&self) -> Result<Evaluation, EvalError> {
        let mut reductions = Vec::new();
        let value = self.eval_into(&mut reductions)?;
        Ok(Evaluation { value, reductions })
    }

    fn eval_into(&self, reductions: &mut Vec<Reduction>) -> Result<f64, EvalError> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Neg(inner) => Ok(-inner.eval_into(reductions)?),
            Expr::Binary(op, l, r) => {
                let left = l.eval_into(reductions)?;
                let right = r.eval_into(reductions)?;
                if *op == BinOp::Div && right == 0.0 {
                    return Err(EvalError::DivisionByZero { dividend: left });
                }
                let value = op.apply(left, right);
                if !value.is_finite() {
                    return Err(EvalError::Overflow);
                }
                reductions.push(Reduction {
                    left,
                    op: *op,
                    right,
                    value,
                });
                Ok(value)
            }
        }
    }
}

/// Whitelist gate: reject anything that is not plain arithmetic before any
/// parsing happens.
pub fn check_whitelist(text: &str) -> Result<(), ExprError> {
    if text.trim().is_empty() {
        return Err(ExprError::Empty);
    }
    match text.chars().enumerate().find(|(_, c)| !is_arithmetic_char(*c)) {
        Some((position, ch)) => Err(ExprError::UnsupportedCharacter { ch, position }),
        None => Ok(()),
    }
}

// Numeric literal: 12, 1.5, .5, 8.
fn parse_number(input: &str) -> IResult<&str, Expr> {
    let (rest, text) = recognize(alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    )))(input)?;

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok((rest, Expr::Number(value))),
        _ => Err(nom::Err::Failure(Error::new(input, ErrorKind::Float))),
    }
}

fn parse_parens(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, _) = char('(')(input)?;
    if depth >= MAX_NESTING {
        return Err(nom::Err::Failure(Error::new(input, ErrorKind::TooLarge)));
    }
    let (input, inner) = parse_expr(input, depth + 1)?;
    let (input, _) = preceded(multispace0, char(')'))(input)?;
    Ok((input, inner))
}

fn parse_primary(input: &str, depth: usize) -> IResult<&str, Expr> {
    preceded(
        multispace0,
        alt((parse_number, |i| parse_parens(i, depth))),
    )(input)
}

fn parse_factor(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, minus) = opt(preceded(multispace0, char('-')))(input)?;
    let (input, primary) = parse_primary(input, depth)?;
    match minus {
        Some(_) => Ok((input, Expr::Neg(Box::new(primary)))),
        None => Ok((input, primary)),
    }
}

fn parse_term(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, init) = parse_factor(input, depth)?;
    fold_many0(
        pair(preceded(multispace0, one_of("*/")), |i| parse_factor(i, depth)),
        move || init.clone(),
        |acc, (op, val)| fold_binary(op, acc, val),
    )(input)
}

fn parse_expr(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, init) = parse_term(input, depth)?;
    fold_many0(
        pair(preceded(multispace0, one_of("+-")), |i| parse_term(i, depth)),
        move || init.clone(),
        |acc, (op, val)| fold_binary(op, acc, val),
    )(input)
}

fn fold_binary(symbol: char, left: Expr, right: Expr) -> Expr {
    // one_of only yields the four operator symbols
    let op = BinOp::from_symbol(symbol).unwrap_or(BinOp::Add);
    Expr::Binary(op, Box::new(left), Box::new(right))
}

/// Gate, then parse `text` into an expression tree.
pub fn parse_expression(text: &str) -> Result<Expr, ExprError> {
    check_whitelist(text)?;

    match parse_expr(text, 0) {
        Ok((rest, expr)) => {
            let rest = rest.trim();
            if rest.is_empty() {
                Ok(expr)
            } else {
                Err(ExprError::Malformed(format!("unexpected input '{rest}'")))
            }
        }
        Err(nom::Err::Failure(e)) if e.code == ErrorKind::TooLarge => {
            Err(ExprError::TooDeep(MAX_NESTING))
        }
        Err(nom::Err::Failure(e)) if e.code == ErrorKind::Float => {
            Err(ExprError::NumberOutOfRange)
        }
        Err(e) => Err(ExprError::Malformed(format!("{}", e))),
    }
}
