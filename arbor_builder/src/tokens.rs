use crate::constant::*;

/// A single Cli token, classified by its dash syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// `--name` (holds `name`).
    LongFlag(&'t str),
    /// `-n` (holds `n`, which may be more than one character).
    ShortFlag(&'t str),
    /// Anything else, including `-`, `--` and `---x`.
    Positional(&'t str),
}

impl<'t> Token<'t> {
    pub(crate) fn classify(token: &'t str) -> Self {
        if let Some(name) = token.strip_prefix("--") {
            if !name.is_empty() && !name.starts_with('-') {
                return Token::LongFlag(name);
            }
        }

        if let Some(name) = token.strip_prefix('-') {
            if !name.is_empty() && !name.starts_with('-') {
                return Token::ShortFlag(name);
            }
        }

        Token::Positional(token)
    }

    pub(crate) fn is_flag(&self) -> bool {
        !matches!(self, Token::Positional(_))
    }
}

impl<'t> std::fmt::Display for Token<'t> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::LongFlag(name) => write!(f, "--{name}"),
            Token::ShortFlag(name) => write!(f, "-{name}"),
            Token::Positional(value) => write!(f, "{value}"),
        }
    }
}

/// Classify every token, splitting `--name=value` (and `-n=value`) into a flag followed by its operand.
///
/// Only the first `=` splits.
/// The right hand side is always positional, so `--offset=-5` hands `-5` to `--offset` as a value.
pub(crate) fn expand<'t>(tokens: &[&'t str]) -> Vec<Token<'t>> {
    let mut expanded = Vec::with_capacity(tokens.len());

    for &token in tokens {
        match token.split_once('=') {
            Some((left, right)) => match Token::classify(left) {
                Token::Positional(_) => expanded.push(Token::classify(token)),
                flag => {
                    expanded.push(flag);
                    expanded.push(Token::Positional(right));
                }
            },
            None => expanded.push(Token::classify(token)),
        }
    }

    expanded
}

/// Whether the token requests the help message: `-h`, `--help`, `-h=..` or `--help=..`.
pub(crate) fn is_help(token: &str) -> bool {
    let flag = token.split_once('=').map_or(token, |(left, _)| left);

    match Token::classify(flag) {
        Token::LongFlag(name) => name == HELP_NAME,
        Token::ShortFlag(name) => {
            let mut characters = name.chars();
            characters.next() == Some(HELP_SHORT) && characters.next().is_none()
        }
        Token::Positional(_) => false,
    }
}

pub(crate) fn has_help(tokens: &[&str]) -> bool {
    tokens.iter().any(|token| is_help(token))
}
