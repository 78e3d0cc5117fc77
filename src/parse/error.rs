use super::tokenizer::Token;
use std::ops::Range;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, token: &Token<'_>) -> Self {
        Self {
            kind,
            span: token.span.clone(),
            slice: token.slice.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("unrecognized token; {0}")]
    Dice(#[from] DiceSyntax),
    #[error("expression cannot start with an operator")]
    LeadingOperator,
    #[error("a dice token not at the start must be immediately preceded by an operator")]
    MissingOperator,
}

/// Ways a token can fail the `[<num>]d<faces>[k(h|l)<count>]` grammar.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum DiceSyntax {
    #[error("dice token must start with digit or 'd'")]
    InvalidStart,
    #[error("dice token must contain 'd'")]
    MissingDelimiter,
    #[error("dice token must specify face count")]
    MissingFaces,
    #[error("dice must have at least one face")]
    ZeroFaces,
    #[error("'k' must be followed by 'h' or 'l'")]
    MissingSelector,
    #[error("the kh/kl parameter must be numeric")]
    MissingKeepCount,
    #[error("unexpected input after dice specifier")]
    TrailingInput,
    #[error("{0} is too large")]
    TooLarge(&'static str),
}
