use crate::iupac::error::LexicalError;
use crate::iupac::keywords::{CYCLO, ENDING};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Cyclo,
    Word,
    Digit,
    Hyphen,
    Comma,
    Ending,
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }
}

/// Splits a hydrocarbon name into tokens.
///
/// Alphabetic runs are not split into keywords here; that is left to the
/// parser, which knows which table applies at each point of the grammar.
/// The only split made is the trailing `e` of the final run, which becomes
/// an [`TokenKind::Ending`] token.
pub fn scan(source: &str) -> Result<Vec<Token>, LexicalError> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        match ch {
            '1'..='9' => {
                chars.next();
                tokens.push(Token::new(TokenKind::Digit, &source[start..start + 1], start));
            }
            '-' => {
                chars.next();
                tokens.push(Token::new(TokenKind::Hyphen, "-", start));
            }
            ',' => {
                chars.next();
                tokens.push(Token::new(TokenKind::Comma, ",", start));
            }
            _ if source[start..].starts_with(CYCLO) => {
                for _ in 0..CYCLO.len() {
                    chars.next();
                }
                tokens.push(Token::new(TokenKind::Cyclo, CYCLO, start));
            }
            c if c.is_ascii_alphabetic() => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if !c.is_ascii_alphabetic() {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                push_word(&mut tokens, source, start, end);
            }
            other => {
                return Err(LexicalError {
                    message: "Unexpected character".to_string(),
                    lexeme: other.to_string(),
                    position: start,
                });
            }
        }
    }

    tokens.push(Token::new(TokenKind::Eof, "", source.len()));
    Ok(tokens)
}

fn push_word(tokens: &mut Vec<Token>, source: &str, start: usize, end: usize) {
    let run = &source[start..end];
    if end == source.len() && run.ends_with(ENDING) {
        let split = end - ENDING.len_utf8();
        tokens.push(Token::new(TokenKind::Word, &source[start..split], start));
        tokens.push(Token::new(TokenKind::Ending, &source[split..end], split));
    } else {
        tokens.push(Token::new(TokenKind::Word, run, start));
    }
}
