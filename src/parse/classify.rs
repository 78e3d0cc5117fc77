use super::ast::{Dice, Numeric};
use super::error::{DiceSyntax, ParseError, ParseErrorKind};
use super::lexer::{lexer, Lexer, TokenKind};
use super::tokenizer::Token;
use crate::common::*;
use logos_iter::LogosIter;

/// The grammar form a single token was recognized as.
#[derive(Debug, Clone, PartialEq)]
pub enum Form {
    Numeric(Numeric),
    Operator(Operator),
    Dice(Dice),
}

/// Tries, in order, an integer literal, an operator and a dice specifier.
pub fn classify(token: &Token<'_>) -> Result<Form, ParseError> {
    if let Ok(x) = token.slice.parse::<Int>() {
        return Ok(Form::Numeric(Numeric(x)));
    }
    if let Some(op) = Operator::from_token(token.slice) {
        return Ok(Form::Operator(op));
    }
    parse_dice(token.slice)
        .map(Form::Dice)
        .map_err(|e| ParseError::new(ParseErrorKind::Dice(e), token))
}

pub(crate) fn parse_dice(s: &str) -> Result<Dice, DiceSyntax> {
    DiceParser::new(s).parse()
}

struct DiceParser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> DiceParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            lexer: lexer(source),
        }
    }

    fn slice(&self) -> &'a str {
        &self.source[self.lexer.span()]
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn consume(&mut self, expected: TokenKind, err: DiceSyntax) -> Result<(), DiceSyntax> {
        if self.matches(expected) {
            self.lexer.next();
            Ok(())
        } else {
            Err(err)
        }
    }

    fn consume_digits<T: std::str::FromStr>(
        &mut self,
        missing: DiceSyntax,
        field: &'static str,
    ) -> Result<T, DiceSyntax> {
        self.consume(TokenKind::Digits, missing)?;
        parse_field(self.slice(), field)
    }

    fn parse(mut self) -> Result<Dice, DiceSyntax> {
        let num = if self.matches(TokenKind::Digits) {
            self.lexer.next();
            Some(self.slice())
        } else {
            None
        };

        match self.lexer.peek() {
            Some(TokenKind::Dice) => {
                self.lexer.next();
            }
            None => return Err(DiceSyntax::MissingDelimiter),
            Some(_) => return Err(DiceSyntax::InvalidStart),
        }
        let num = match num {
            Some(digits) => parse_field(digits, "repetitions")?,
            None => 0,
        };

        let faces: UInt = self.consume_digits(DiceSyntax::MissingFaces, "face count")?;
        let faces = NonZeroUInt::new(faces).ok_or(DiceSyntax::ZeroFaces)?;

        let keep = self.parse_keep()?;
        if self.lexer.peek().is_some() {
            return Err(DiceSyntax::TrailingInput);
        }
        Ok(Dice::with_keep(num, faces, keep))
    }

    fn parse_keep(&mut self) -> Result<Int, DiceSyntax> {
        if !self.matches(TokenKind::Keep) {
            return Ok(0);
        }
        self.lexer.next();

        let highest = match self.lexer.peek() {
            Some(TokenKind::Highest) => true,
            Some(TokenKind::Lowest) => false,
            _ => return Err(DiceSyntax::MissingSelector),
        };
        self.lexer.next();

        let count: Int = self.consume_digits(DiceSyntax::MissingKeepCount, "keep count")?;
        Ok(if highest { count } else { -count })
    }
}

fn parse_field<T: std::str::FromStr>(digits: &str, field: &'static str) -> Result<T, DiceSyntax> {
    digits.parse().map_err(|_| DiceSyntax::TooLarge(field))
}
