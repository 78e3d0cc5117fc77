pub mod ast;
mod builder;
mod classify;
mod error;
mod lexer;
mod tokenizer;

pub use builder::build;
pub use classify::{classify, Form};
pub use error::{DiceSyntax, ParseError, ParseErrorKind};
pub use tokenizer::{tokenize, Token};

/// Tokenizes and builds an expression tree without rolling anything.
pub fn parse(s: &str) -> Result<ast::Expression, ParseError> {
    let tokens = tokenize(s);
    log::debug!(
        "tokens for {:?}: {:?}",
        s,
        tokens.iter().map(|t| t.slice).collect::<Vec<_>>()
    );
    let expr = build(tokens)?;
    log::debug!("built expression: {}", expr);
    Ok(expr)
}
