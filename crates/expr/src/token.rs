use std::{iter::Peekable, str::CharIndices};

use crate::error::{ParseError, ParseErrorKind};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
    End,
}

impl Token {
    /// Source-like rendering used in error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Number(value) => value.to_string(),
            Token::Ident(name) => name.clone(),
            Token::Plus => "+".into(),
            Token::Minus => "-".into(),
            Token::Star => "*".into(),
            Token::Slash => "/".into(),
            Token::Caret => "^".into(),
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),
            Token::Comma => ",".into(),
            Token::End => "end of input".into(),
        }
    }
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Splits expression text into tokens, ending with [`Token::End`].
///
/// # Errors
///
/// Returns a [`ParseError`] on characters that cannot start a token or on
/// malformed number literals.
pub(crate) fn tokenize(text: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(position, ch)) = chars.peek() {
        let token = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            c if c.is_ascii_digit() || c == '.' => lex_number(text, &mut chars)?,
            c if c.is_alphabetic() || c == '_' => lex_ident(text, &mut chars),
            '*' => {
                chars.next();
                if chars.next_if(|&(_, c)| c == '*').is_some() {
                    Token::Caret
                } else {
                    Token::Star
                }
            }
            _ => {
                chars.next();
                match ch {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '/' => Token::Slash,
                    '^' => Token::Caret,
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    ',' => Token::Comma,
                    other => {
                        return Err(ParseError::new(
                            ParseErrorKind::UnexpectedChar(other),
                            position,
                            text,
                        ));
                    }
                }
            }
        };
        tokens.push(Spanned { token, position });
    }

    tokens.push(Spanned {
        token: Token::End,
        position: text.len(),
    });
    Ok(tokens)
}

fn lex_number(text: &str, chars: &mut Peekable<CharIndices<'_>>) -> Result<Token, ParseError> {
    let start = chars.peek().map_or(text.len(), |&(i, _)| i);
    let mut end = start;

    let int_digits = take_digits(chars, &mut end);
    let mut frac_digits = false;
    if let Some((i, _)) = chars.next_if(|&(_, c)| c == '.') {
        end = i + 1;
        frac_digits = take_digits(chars, &mut end);
    }

    if !int_digits && !frac_digits {
        return Err(ParseError::new(
            ParseErrorKind::UnexpectedChar('.'),
            start,
            text,
        ));
    }

    // An exponent marker only belongs to the number when digits follow it,
    // otherwise `2E` would swallow the constant `E`.
    if exponent_follows(&text[end..]) {
        let marker = chars.next().map_or(end, |(i, _)| i);
        end = marker + 1;
        if let Some((i, _)) = chars.next_if(|&(_, c)| c == '+' || c == '-') {
            end = i + 1;
        }
        take_digits(chars, &mut end);
    }

    let literal = &text[start..end];
    literal.parse::<f64>().map(Token::Number).map_err(|_| {
        ParseError::new(
            ParseErrorKind::InvalidNumber(literal.to_owned()),
            start,
            text,
        )
    })
}

/// Consumes a run of ASCII digits, advancing `end` past them.
fn take_digits(chars: &mut Peekable<CharIndices<'_>>, end: &mut usize) -> bool {
    let mut any = false;
    while let Some((i, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        *end = i + c.len_utf8();
        any = true;
    }
    any
}

fn exponent_follows(rest: &str) -> bool {
    let mut rest = rest.chars();
    if !matches!(rest.next(), Some('e' | 'E')) {
        return false;
    }
    match rest.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('+' | '-') => rest.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

fn lex_ident(text: &str, chars: &mut Peekable<CharIndices<'_>>) -> Token {
    let start = chars.peek().map_or(text.len(), |&(i, _)| i);
    let mut end = start;
    while let Some((i, c)) = chars.next_if(|&(_, c)| c.is_alphanumeric() || c == '_') {
        end = i + c.len_utf8();
    }
    Token::Ident(text[start..end].to_owned())
}
