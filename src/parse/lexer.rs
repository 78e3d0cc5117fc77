use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};

/// Lexer over the inside of a single dice token.
pub(crate) type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub(crate) fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum TokenKind {
    #[regex(r"[0-9]+")]
    Digits,

    #[token("d")]
    Dice,
    #[token("k")]
    Keep,

    #[token("h")]
    Highest,
    #[token("l")]
    Lowest,

    #[error]
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        TokenKind::lexer(s).collect()
    }

    #[test]
    fn test_lex_dice() {
        assert_eq!(kinds("d20"), [Dice, Digits]);
        assert_eq!(kinds("12d4"), [Digits, Dice, Digits]);
        assert_eq!(kinds("2d20kh1"), [Digits, Dice, Digits, Keep, Highest, Digits]);
        assert_eq!(kinds("4d6kl10"), [Digits, Dice, Digits, Keep, Lowest, Digits]);
    }

    #[test]
    fn test_lex_errors() {
        assert_eq!(kinds("x"), [Error]);
        assert_eq!(kinds("2dx"), [Digits, Dice, Error]);
    }

    #[test]
    fn test_peekable_slices() {
        let mut lex = lexer("3d8");
        assert_eq!(lex.peek(), Some(&Digits));
        assert_eq!(lex.next(), Some(Digits));
        assert_eq!(lex.slice(), "3");
        assert_eq!(lex.next(), Some(Dice));
        assert_eq!(lex.next(), Some(Digits));
        assert_eq!(lex.slice(), "8");
        assert_eq!(lex.next(), None);
    }
}
