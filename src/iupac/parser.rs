use crate::bond::BondOrder;
use crate::iupac::ast::{Group, Hydrocarbon, Locants, MultiplyingAffix, Stem, Type};
use crate::iupac::error::SyntaxError;
use crate::iupac::keywords::{
    match_prefix, Table, ALKANE_SUFFIX, CONNECTOR, MULTIPLYING_AFFIXES, STEMS, SUFFIXES,
};
use crate::iupac::tokenizer::{Token, TokenKind};

const CONNECTOR_WITHOUT_AFFIX: &str = "Complex group with multiplying affix expected after connector";

pub fn parse(tokens: &[Token]) -> Result<Hydrocarbon, SyntaxError> {
    Parser::new(tokens).hydrocarbon()
}

/// The tail of a word token left over after a keyword was taken off its
/// front. It is the next word the parser sees, before any further token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residual {
    pub text: String,
    pub position: usize,
}

/// Recursive-descent parser over a token slice.
///
/// Words produced by the tokenizer may hold several keywords back to back
/// (`hexa` is the stem `hex` followed by the connector `a`). Whenever a
/// keyword is taken off a word, what is left is kept as the parser's
/// [`Residual`] rather than written back into the token stream.
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    residual: Option<Residual>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            residual: None,
        }
    }

    /// Starts parsing with `residual` pending in front of `tokens`.
    pub fn with_residual(tokens: &'a [Token], residual: Residual) -> Self {
        Self {
            tokens,
            current: 0,
            residual: (!residual.text.is_empty()).then_some(residual),
        }
    }

    pub fn residual(&self) -> Option<&Residual> {
        self.residual.as_ref()
    }

    pub fn hydrocarbon(&mut self) -> Result<Hydrocarbon, SyntaxError> {
        let is_cyclic = self.match_kind(TokenKind::Cyclo);
        let stem = self.stem()?;
        let has_connector = self.connector();
        let shape = self.shape(has_connector)?;
        self.consume(TokenKind::Ending, "Ending expected")?;
        if !self.is_at_end() {
            return Err(self.error("EOF expected after ending"));
        }

        Ok(Hydrocarbon {
            is_cyclic,
            stem,
            shape,
        })
    }

    fn stem(&mut self) -> Result<Stem, SyntaxError> {
        let (token, carbon_count) = self
            .keyword(STEMS)
            .ok_or_else(|| self.error("Stem expected"))?;
        Ok(Stem {
            token,
            carbon_count,
        })
    }

    /// Takes a leading `a` off the current word, unless the word starts
    /// with the alkane suffix.
    fn connector(&mut self) -> bool {
        match self.peek_word() {
            Some(word)
                if word.lexeme.starts_with(CONNECTOR)
                    && !word.lexeme.starts_with(ALKANE_SUFFIX) =>
            {
                self.take_prefix(word, CONNECTOR.len_utf8());
                true
            }
            _ => false,
        }
    }

    fn shape(&mut self, has_connector: bool) -> Result<Type, SyntaxError> {
        if matches!(self.peek_keyword(SUFFIXES), Some((ALKANE_SUFFIX, _))) {
            if has_connector {
                return Err(self.error(CONNECTOR_WITHOUT_AFFIX));
            }
            self.keyword(SUFFIXES);
            return Ok(Type::Alkane);
        }

        let first = self.group(has_connector)?;
        let (_, order) = self.suffix()?;
        match order {
            BondOrder::Double if self.check(TokenKind::Hyphen) => {
                let second = self.group(false)?;
                let (token, order) = self.suffix()?;
                if order != BondOrder::Triple {
                    return Err(SyntaxError {
                        message: "Suffix 'yn' expected".to_string(),
                        token,
                    });
                }
                Ok(Type::Enyne {
                    alkene: first,
                    alkyne: second,
                })
            }
            BondOrder::Double => Ok(Type::Alkene(first)),
            _ => Ok(Type::Alkyne(first)),
        }
    }

    fn group(&mut self, has_connector: bool) -> Result<Group, SyntaxError> {
        let locants = if self.match_kind(TokenKind::Hyphen) {
            self.locants()?
        } else {
            Locants::implicit()
        };

        let multiplying_affix = if has_connector {
            let (token, multiplier) = self
                .keyword(MULTIPLYING_AFFIXES)
                .ok_or_else(|| self.error(CONNECTOR_WITHOUT_AFFIX))?;
            Some(MultiplyingAffix { token, multiplier })
        } else {
            None
        };

        Ok(Group {
            locants,
            multiplying_affix,
        })
    }

    fn locants(&mut self) -> Result<Locants, SyntaxError> {
        let mut locants = vec![self.digit("Digit expected after hyphen")?];
        while !self.is_at_end() && !self.check(TokenKind::Hyphen) {
            self.consume(TokenKind::Comma, "Comma expected after digit")?;
            locants.push(self.digit("Digit expected after comma")?);
        }
        self.consume(TokenKind::Hyphen, "Unterminated locants, expected hyphen")?;
        Ok(Locants(locants))
    }

    fn digit(&mut self, message: &str) -> Result<u32, SyntaxError> {
        let token = self.consume(TokenKind::Digit, message)?;
        token.lexeme.parse().map_err(|_| SyntaxError {
            message: message.to_string(),
            token,
        })
    }

    /// A suffix naming a multiple bond: `en` or `yn`.
    fn suffix(&mut self) -> Result<(Token, BondOrder), SyntaxError> {
        let order = self
            .peek_keyword(SUFFIXES)
            .and_then(|(_, order)| multiple_bond(order));
        match (order, self.peek_word()) {
            (Some(order), Some(word)) => {
                let len = match_prefix(SUFFIXES, &word.lexeme).map_or(0, |(k, _)| k.len());
                Ok((self.take_prefix(word, len), order))
            }
            _ => Err(self.error("Suffix 'en' or 'yn' expected")),
        }
    }

    /// Takes the keyword from `table` that prefixes the current word.
    ///
    /// Returns the keyword as a token of its own together with its table
    /// value. Whatever follows the keyword in the word becomes the residual.
    /// When nothing in `table` matches, the parser is left untouched.
    pub fn keyword(&mut self, table: Table) -> Option<(Token, u32)> {
        let word = self.peek_word()?;
        let (keyword, value) = match_prefix(table, &word.lexeme)?;
        Some((self.take_prefix(word, keyword.len()), value))
    }

    fn peek_keyword(&self, table: Table) -> Option<(&'static str, u32)> {
        let word = self.peek_word()?;
        match_prefix(table, &word.lexeme)
    }

    /// Consumes the first `len` bytes of `word`, which must be the word
    /// returned by [`Self::peek_word`].
    fn take_prefix(&mut self, word: Token, len: usize) -> Token {
        if self.residual.take().is_none() {
            self.current += 1;
        }
        let rest = &word.lexeme[len..];
        if !rest.is_empty() {
            self.residual = Some(Residual {
                text: rest.to_string(),
                position: word.position + len,
            });
        }
        Token::new(TokenKind::Word, &word.lexeme[..len], word.position)
    }

    fn peek(&self) -> Token {
        match &self.residual {
            Some(r) => Token::new(TokenKind::Word, r.text.as_str(), r.position),
            None => self
                .tokens
                .get(self.current)
                .cloned()
                .unwrap_or_else(|| self.eof()),
        }
    }

    fn eof(&self) -> Token {
        let position = self
            .tokens
            .last()
            .map_or(0, |t| t.position + t.lexeme.len());
        Token::new(TokenKind::Eof, "", position)
    }

    fn peek_kind(&self) -> TokenKind {
        if self.residual.is_some() {
            return TokenKind::Word;
        }
        self.tokens
            .get(self.current)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    fn peek_word(&self) -> Option<Token> {
        let token = self.peek();
        (token.kind == TokenKind::Word).then_some(token)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    fn advance(&mut self) -> Token {
        let token = self.peek();
        if self.residual.take().is_none() && token.kind != TokenKind::Eof {
            self.current += 1;
        }
        token
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(message))
        }
    }

    fn error(&self, message: &str) -> SyntaxError {
        SyntaxError {
            message: message.to_string(),
            token: self.peek(),
        }
    }
}

fn multiple_bond(order: u32) -> Option<BondOrder> {
    match order {
        2 => Some(BondOrder::Double),
        3 => Some(BondOrder::Triple),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iupac::tokenizer::scan;

    fn parse_str(name: &str) -> Result<Hydrocarbon, SyntaxError> {
        parse(&scan(name).unwrap())
    }

    fn word(lexeme: &str, position: usize) -> Token {
        Token::new(TokenKind::Word, lexeme, position)
    }

    fn simple(locants: &[u32]) -> Group {
        Group {
            locants: Locants(locants.to_vec()),
            multiplying_affix: None,
        }
    }

    fn multiplied(locants: &[u32], affix: &str, position: usize, multiplier: u32) -> Group {
        Group {
            locants: Locants(locants.to_vec()),
            multiplying_affix: Some(MultiplyingAffix {
                token: word(affix, position),
                multiplier,
            }),
        }
    }

    #[test]
    fn cyclic_alkane() {
        let h = parse_str("cyclopropane").unwrap();
        assert!(h.is_cyclic);
        assert_eq!(h.stem.token, word("prop", 5));
        assert_eq!(h.stem.carbon_count, 3);
        assert_eq!(h.shape, Type::Alkane);
    }

    #[test]
    fn acyclic_alkanes() {
        for (name, n) in [("methane", 1), ("hexane", 6), ("heptane", 7), ("decane", 10)] {
            let h = parse_str(name).unwrap();
            assert!(!h.is_cyclic);
            assert_eq!(h.carbon_count(), n, "{name}");
            assert_eq!(h.shape, Type::Alkane);
        }
    }

    #[test]
    fn cyclic_alkene_with_multiplier() {
        let h = parse_str("cyclohexa-1,3,5-triene").unwrap();
        assert!(h.is_cyclic);
        assert_eq!(h.stem.carbon_count, 6);
        assert_eq!(h.shape, Type::Alkene(multiplied(&[1, 3, 5], "tri", 16, 3)));
    }

    #[test]
    fn simple_alkyne_without_locants() {
        let h = parse_str("ethyne").unwrap();
        assert_eq!(h.stem.carbon_count, 2);
        assert_eq!(h.shape, Type::Alkyne(simple(&[1])));
    }

    #[test]
    fn alkene_with_single_locant() {
        let h = parse_str("prop-1-ene").unwrap();
        assert_eq!(h.shape, Type::Alkene(simple(&[1])));
    }

    #[test]
    fn alkene_with_connector() {
        let h = parse_str("propa-1,2-diene").unwrap();
        assert_eq!(h.shape, Type::Alkene(multiplied(&[1, 2], "di", 10, 2)));
    }

    #[test]
    fn enyne() {
        let h = parse_str("hepta-1,5-dien-3-yne").unwrap();
        assert_eq!(h.stem.token, word("hept", 0));
        assert_eq!(
            h.shape,
            Type::Enyne {
                alkene: multiplied(&[1, 5], "di", 10, 2),
                alkyne: simple(&[3]),
            }
        );
    }

    #[test]
    fn locants_keep_written_order() {
        let h = parse_str("penta-3,2-diene").unwrap();
        assert_eq!(h.shape.alkene_group().unwrap().locants.as_slice(), &[3, 2]);
    }

    #[test]
    fn missing_stem() {
        let err = parse_str("cycloyne").unwrap_err();
        assert!(err.message.contains("Stem expected"));
        assert_eq!(err.token, word("yn", 5));
    }

    #[test]
    fn missing_suffix() {
        let err = parse_str("cyclomethe").unwrap_err();
        assert!(err.message.contains("Suffix 'en' or 'yn' expected"));
        assert_eq!(err.token.kind, TokenKind::Ending);
        assert_eq!(err.token.lexeme, "e");
    }

    #[test]
    fn connector_requires_multiplying_affix() {
        let err = parse_str("propa-5-ene").unwrap_err();
        assert!(err.message.contains("Complex group with multiplying affix expected"));
        assert_eq!(err.token, word("en", 8));
    }

    #[test]
    fn connector_before_alkane_suffix() {
        let err = parse_str("propaane").unwrap_err();
        assert!(err.message.contains("Complex group with multiplying affix expected"));
        assert_eq!(err.token, word("an", 5));
    }

    #[test]
    fn multiplying_affix_without_connector() {
        let err = parse_str("prop-5-diene").unwrap_err();
        assert!(err.message.contains("Suffix 'en' or 'yn' expected"));
        assert_eq!(err.token, word("dien", 7));
    }

    #[test]
    fn alkane_suffix_after_locants() {
        let err = parse_str("prop-1-ane").unwrap_err();
        assert!(err.message.contains("Suffix 'en' or 'yn' expected"));
        assert_eq!(err.token, word("an", 7));
    }

    #[test]
    fn leftover_after_suffix() {
        let err = parse_str("prop-5-enero").unwrap_err();
        assert!(err.message.contains("Ending expected"));
        assert_eq!(err.token, word("ero", 9));
    }

    #[test]
    fn missing_ending() {
        let err = parse_str("propan").unwrap_err();
        assert!(err.message.contains("Ending expected"));
        assert_eq!(err.token.kind, TokenKind::Eof);
        assert_eq!(err.token.position, 6);
    }

    #[test]
    fn second_group_must_be_alkyne() {
        let err = parse_str("hepta-1,5-dien-3-ene").unwrap_err();
        assert!(err.message.contains("Suffix 'yn' expected"));
        assert_eq!(err.token, word("en", 17));
    }

    #[test]
    fn no_second_group_after_alkyne() {
        let err = parse_str("but-1-yn-3-yne").unwrap_err();
        assert!(err.message.contains("Ending expected"));
        assert_eq!(err.token.kind, TokenKind::Hyphen);
        assert_eq!(err.token.position, 8);
    }

    #[test]
    fn unterminated_locants() {
        let err = parse_str("prop-5").unwrap_err();
        assert!(err.message.contains("Unterminated locants"));
        assert_eq!(err.token.kind, TokenKind::Eof);
    }

    #[test]
    fn malformed_locants() {
        let err = parse_str("prop-1,a-ene").unwrap_err();
        assert!(err.message.contains("Digit expected after comma"));
        assert_eq!(err.token, word("a", 7));

        let err = parse_str("prop--ene").unwrap_err();
        assert!(err.message.contains("Digit expected after hyphen"));
    }

    #[test]
    fn adjacent_digits_need_a_comma() {
        let err = parse_str("prop-12-ene").unwrap_err();
        assert!(err.message.contains("Comma expected after digit"));
        assert_eq!(err.token.lexeme, "2");
    }

    #[test]
    fn trailing_tokens_after_ending() {
        let mut tokens = scan("ethane").unwrap();
        tokens.insert(tokens.len() - 1, Token::new(TokenKind::Hyphen, "-", 6));
        let err = parse(&tokens).unwrap_err();
        assert!(err.message.contains("EOF expected after ending"));
        assert_eq!(err.token.kind, TokenKind::Hyphen);
    }

    #[test]
    fn empty_token_slice() {
        let err = parse(&[]).unwrap_err();
        assert!(err.message.contains("Stem expected"));
        assert_eq!(err.token.kind, TokenKind::Eof);
    }

    #[test]
    fn keyword_extraction_leaves_residual() {
        let tokens = [word("hexa", 5), Token::new(TokenKind::Eof, "", 9)];
        let mut parser = Parser::new(&tokens);
        let (token, value) = parser.keyword(STEMS).unwrap();
        assert_eq!(token, word("hex", 5));
        assert_eq!(value, 6);
        assert_eq!(
            parser.residual(),
            Some(&Residual {
                text: "a".to_string(),
                position: 8
            })
        );
    }

    #[test]
    fn keyword_extraction_consumes_residual_first() {
        let tokens = [word("yn", 10), Token::new(TokenKind::Eof, "", 12)];
        let residual = Residual {
            text: "dien".to_string(),
            position: 6,
        };
        let mut parser = Parser::with_residual(&tokens, residual);

        assert_eq!(parser.keyword(STEMS), None);
        assert_eq!(parser.residual().unwrap().text, "dien");

        let (token, value) = parser.keyword(MULTIPLYING_AFFIXES).unwrap();
        assert_eq!((token, value), (word("di", 6), 2));
        assert_eq!(parser.residual().unwrap().position, 8);

        let (token, _) = parser.keyword(SUFFIXES).unwrap();
        assert_eq!(token, word("en", 8));
        assert_eq!(parser.residual(), None);

        let (token, value) = parser.keyword(SUFFIXES).unwrap();
        assert_eq!((token, value), (word("yn", 10), 3));
        assert!(parser.is_at_end());
    }
}
