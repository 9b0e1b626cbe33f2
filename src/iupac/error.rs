use std::fmt;

use thiserror::Error;

use crate::compound::GraphError;
use crate::iupac::tokenizer::Token;

/// An input character the tokenizer does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} '{lexeme}' at position {position}")]
pub struct LexicalError {
    pub message: String,
    pub lexeme: String,
    /// Byte offset of `lexeme` in the input name.
    pub position: usize,
}

/// A grammar expectation that the token stream did not meet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} '{}' at position {}", .token.lexeme, .token.position)]
pub struct SyntaxError {
    pub message: String,
    /// The token, or the unconsumed part of a word, found instead.
    pub token: Token,
}

/// A naming or chemistry rule broken by an otherwise well-formed name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}{}", Location(.token.as_ref()))]
pub struct SemanticError {
    pub message: String,
    pub token: Option<Token>,
}

struct Location<'a>(Option<&'a Token>);

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(token) => write!(f, " '{}' at position {}", token.lexeme, token.position),
            None => Ok(()),
        }
    }
}

impl SemanticError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            token: None,
        }
    }

    pub(crate) fn at(message: impl Into<String>, token: &Token) -> Self {
        Self {
            message: message.into(),
            token: Some(token.clone()),
        }
    }
}

/// The stage of the pipeline that rejected a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Lexical,
    Syntax,
    Semantic,
    /// The graph engine refused a bond the analyzer had accepted.
    Internal,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Lexical => "lexical",
            Stage::Syntax => "syntax",
            Stage::Semantic => "semantic",
            Stage::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// Errors produced when converting a hydrocarbon name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("lexical error: {0}")]
    Lexical(#[from] LexicalError),
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("semantic error: {0}")]
    Semantic(#[from] SemanticError),
    #[error("internal invariant violated: {0}")]
    Internal(#[from] GraphError),
}

impl PipelineError {
    pub fn stage(&self) -> Stage {
        match self {
            Self::Lexical(_) => Stage::Lexical,
            Self::Syntax(_) => Stage::Syntax,
            Self::Semantic(_) => Stage::Semantic,
            Self::Internal(_) => Stage::Internal,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Lexical(e) => e.message.clone(),
            Self::Syntax(e) => e.message.clone(),
            Self::Semantic(e) => e.message.clone(),
            Self::Internal(e) => e.to_string(),
        }
    }

    /// The offending piece of the input, when the stage knows it.
    pub fn lexeme(&self) -> Option<&str> {
        match self {
            Self::Lexical(e) => Some(&e.lexeme),
            Self::Syntax(e) => Some(&e.token.lexeme),
            Self::Semantic(e) => e.token.as_ref().map(|t| t.lexeme.as_str()),
            Self::Internal(_) => None,
        }
    }

    /// Byte offset of [`lexeme`](Self::lexeme) in the input name.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Lexical(e) => Some(e.position),
            Self::Syntax(e) => Some(e.token.position),
            Self::Semantic(e) => e.token.as_ref().map(|t| t.position),
            Self::Internal(_) => None,
        }
    }
}
