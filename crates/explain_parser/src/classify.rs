//! Decide whether a raw query should go through the math pipeline.

use nom::{
    bytes::complete::tag,
    character::complete::{char, multispace0, multispace1},
    sequence::tuple,
    IResult,
};

/// Which pipeline a query is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Math,
    General,
}

/// The first classification rule a query satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathCue {
    /// `sqrt(...)` wrapping the whole string.
    SqrtCall,
    /// `√`, "square root", or a leading "root ".
    RootCue,
    /// Only digits, whitespace, `.` and `+ - * / ( )`.
    ArithmeticText,
    /// Digits plus other symbols but no letters, e.g. `2 ^^ 3`.
    SymbolicDigits,
}

/// Characters allowed in a plain arithmetic expression.
///
/// Shared by the classifier and the expression gate so both agree on what
/// "arithmetic text" means.
pub fn is_arithmetic_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

/// Non-empty and made only of [`is_arithmetic_char`] characters.
pub fn is_arithmetic_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_arithmetic_char)
}

fn sqrt_call_prefix(input: &str) -> IResult<&str, (&str, &str, char)> {
    tuple((tag("sqrt"), multispace0, char('(')))(input)
}

fn square_root_phrase(input: &str) -> IResult<&str, (&str, &str, &str)> {
    tuple((tag("square"), multispace0, tag("root")))(input)
}

fn leading_root_word(input: &str) -> IResult<&str, (&str, &str)> {
    tuple((tag("root"), multispace1))(input)
}

fn contains_square_root_phrase(text: &str) -> bool {
    text.char_indices()
        .any(|(i, _)| square_root_phrase(&text[i..]).is_ok())
}

/// Find the rule that marks `query` as math, if any. Rules are tried in order
/// on the trimmed, lowercased text.
pub fn math_cue(query: &str) -> Option<MathCue> {
    let text = query.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    if sqrt_call_prefix(&text).is_ok() && text.ends_with(')') {
        return Some(MathCue::SqrtCall);
    }
    if text.contains('√') || contains_square_root_phrase(&text) || leading_root_word(&text).is_ok()
    {
        return Some(MathCue::RootCue);
    }
    if is_arithmetic_text(&text) {
        return Some(MathCue::ArithmeticText);
    }
    if text.chars().any(|c| c.is_ascii_digit()) && !text.chars().any(char::is_alphabetic) {
        return Some(MathCue::SymbolicDigits);
    }
    None
}

pub fn classify(query: &str) -> QueryKind {
    match math_cue(query) {
        Some(_) => QueryKind::Math,
        None => QueryKind::General,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_sqrt_call() {
        assert_eq!(math_cue("sqrt(49)"), Some(MathCue::SqrtCall));
        assert_eq!(math_cue("  SQRT (abc)  "), Some(MathCue::SqrtCall));
        // not wrapping the whole string
        assert_ne!(math_cue("sqrt(4) apples"), Some(MathCue::SqrtCall));
    }

    #[test]
    fn root_cues() {
        assert_eq!(math_cue("√144"), Some(MathCue::RootCue));
        assert_eq!(math_cue("Square Root of 144"), Some(MathCue::RootCue));
        assert_eq!(math_cue("what is the squareroot of 2"), Some(MathCue::RootCue));
        assert_eq!(math_cue("root 144"), Some(MathCue::RootCue));
        assert_eq!(math_cue("rooted trees"), None);
    }

    #[test]
    fn arithmetic_text() {
        assert_eq!(math_cue("12 * 3"), Some(MathCue::ArithmeticText));
        assert_eq!(math_cue("(10 + 2) * 5"), Some(MathCue::ArithmeticText));
        assert_eq!(math_cue("3.5/7"), Some(MathCue::ArithmeticText));
    }

    #[test]
    fn symbolic_digits_are_math() {
        assert_eq!(math_cue("2 ^^ 3"), Some(MathCue::SymbolicDigits));
        assert_eq!(math_cue("3!"), Some(MathCue::SymbolicDigits));
    }

    #[test]
    fn general_questions() {
        assert_eq!(classify("why is the sky blue?"), QueryKind::General);
        assert_eq!(classify("explain photosynthesis in 3 steps"), QueryKind::General);
        assert_eq!(classify("???"), QueryKind::General);
        assert_eq!(classify("   "), QueryKind::General);
        assert_eq!(classify(""), QueryKind::General);
    }

    #[test]
    fn whitelist_predicate() {
        assert!(is_arithmetic_text("1 + (2 * 3) / 4.5 - 6"));
        assert!(!is_arithmetic_text("2 ^ 3"));
        assert!(!is_arithmetic_text("x + 1"));
        assert!(!is_arithmetic_text(""));
    }
}
