//! Token parsers for ownership rule lines.
//!
//! Lines are split into whitespace-separated tokens with nom combinators.
//! The first token of a rule line is its pattern; the rest are owner
//! candidates.

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while1},
    multi::many0,
    sequence::preceded,
};

/// Characters that can appear inside a token.
fn is_token_char(c: char) -> bool {
    !c.is_whitespace()
}

/// Parses one token, skipping any leading whitespace.
pub fn token(input: &str) -> IResult<&str, &str> {
    preceded(take_while(char::is_whitespace), take_while1(is_token_char)).parse(input)
}

/// Splits a line into tokens on runs of whitespace.
///
/// Trailing whitespace is ignored. An all-whitespace line yields no tokens.
pub fn tokens(input: &str) -> Vec<&str> {
    match many0(token).parse(input) {
        Ok((_, tokens)) => tokens,
        Err(_) => Vec::new(),
    }
}

/// Checks if a line is blank (empty or only whitespace).
pub fn is_blank_line(input: &str) -> bool {
    input.trim().is_empty()
}

/// Checks if a line is a comment.
///
/// Unlike a strict "starts with `#`" check, leading whitespace is skipped, so
/// an indented `# note` is a comment too.
pub fn is_comment_line(input: &str) -> bool {
    input.trim_start().starts_with('#')
}

/// Returns true if the token is a handle reference (`@user` or `@org/team`).
pub fn is_handle(token: &str) -> bool {
    token.starts_with('@')
}
