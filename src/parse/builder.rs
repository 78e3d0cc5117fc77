use super::ast::*;
use super::classify::{classify, Form};
use super::error::{ParseError, ParseErrorKind};
use super::tokenizer::Token;

/// Folds tokens left to right into a single tree.
///
/// An operand fills the root (when there is none) or the open right side of an
/// operator root. An operator adopts the current root as its left side and
/// becomes the new root. Trailing operators are left open and only fail when
/// the tree is evaluated.
pub fn build<'a>(tokens: impl IntoIterator<Item = Token<'a>>) -> Result<Expression, ParseError> {
    let mut root: Option<Node> = None;

    for token in tokens {
        let next = match classify(&token)? {
            Form::Operator(op) => {
                let left = root
                    .take()
                    .ok_or_else(|| ParseError::new(ParseErrorKind::LeadingOperator, &token))?;
                Node::Arithmetic(Arithmetic::open(op, left))
            }
            Form::Numeric(x) => attach(root.take(), Node::Numeric(x), &token)?,
            Form::Dice(x) => attach(root.take(), Node::Dice(x), &token)?,
        };
        root = Some(next);
    }

    Ok(Expression::new(root))
}

fn attach(root: Option<Node>, operand: Node, token: &Token<'_>) -> Result<Node, ParseError> {
    match root {
        None => Ok(operand),
        Some(Node::Arithmetic(mut op)) if op.right.is_none() => {
            op.right = Some(Box::new(operand));
            Ok(Node::Arithmetic(op))
        }
        Some(_) if matches!(operand, Node::Dice(_)) => {
            Err(ParseError::new(ParseErrorKind::MissingOperator, token))
        }
        Some(Node::Arithmetic(mut op)) => {
            if let Some(lost) = op.right.replace(Box::new(operand)) {
                log::warn!(
                    "operand {} replaced by {:?} at position {}: no operator between them",
                    lost,
                    token.slice,
                    token.span.start
                );
            }
            Ok(Node::Arithmetic(op))
        }
        Some(current) => {
            log::warn!(
                "discarding operand {:?} at position {}: no operator precedes it",
                token.slice,
                token.span.start
            );
            Ok(current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Operator::*;
    use crate::parse::ast::test_utils::*;
    use crate::parse::tokenizer::tokenize;

    fn parse(s: &str) -> Result<Expression, ParseError> {
        build(tokenize(s))
    }

    fn check(s: &str, expected: Node) {
        assert_eq!(parse(s).unwrap().root, Some(expected));
    }

    fn check_err(s: &str, expected: ParseErrorKind, slice: &str) {
        let err = parse(s).unwrap_err();
        assert_eq!(err.kind, expected);
        assert_eq!(err.slice, slice);
    }

    #[test]
    fn test_build_single_operand() {
        check("d20", dice(0, 20));
        check("1d20", dice(1, 20));
        check("7", int(7));
    }

    #[test]
    fn test_build_arithmetic() {
        check("1d20+5", bin(dice(1, 20), Add, int(5)));
        check("2d20+5", bin(dice(2, 20), Add, int(5)));
        check("1d20 + 1d10", bin(dice(1, 20), Add, dice(1, 10)));
        check(
            "2d20kh1 - 1 + d4",
            bin(bin(kept_dice(2, 20, 1), Sub, int(1)), Add, dice(0, 4)),
        );
    }

    #[test]
    fn test_build_empty() {
        assert_eq!(parse("").unwrap().root, None);
        assert_eq!(parse("   ").unwrap().root, None);
    }

    #[test]
    fn test_build_trailing_operator_is_open() {
        let expr = parse("1d6 +").unwrap();
        assert_eq!(
            expr.root,
            Some(Node::Arithmetic(Arithmetic::open(Add, dice(1, 6))))
        );
    }

    #[test]
    fn test_build_consecutive_operators() {
        // the second operator closes over the still-open first one
        let expr = parse("1 + - 2").unwrap();
        let inner = Node::Arithmetic(Arithmetic::open(Add, int(1)));
        assert_eq!(expr.root, Some(bin(inner, Sub, int(2))));
    }

    #[test]
    fn test_build_errors() {
        check_err("+5", ParseErrorKind::LeadingOperator, "+");
        check_err("- 1d4", ParseErrorKind::LeadingOperator, "-");
        check_err("1d20 1d4", ParseErrorKind::MissingOperator, "1d4");
        check_err("3 d6", ParseErrorKind::MissingOperator, "d6");
        check_err("1 + 2 d6", ParseErrorKind::MissingOperator, "d6");
    }

    #[test]
    fn test_build_discards_unjoined_number() {
        check("1d20 5", dice(1, 20));
        check("7 5", int(7));
    }

    #[test]
    fn test_build_unjoined_number_replaces_right_operand() {
        check("1 + 2 3", bin(int(1), Add, int(3)));
        check("1d4 - 2d6 3", bin(dice(1, 4), Sub, int(3)));
        check("1 + 2 3 4", bin(int(1), Add, int(4)));
    }

    #[test]
    fn test_build_reports_classification_error() {
        let err = parse("1 + 2q").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Dice(_)));
        assert_eq!(err.span, 4..6);
    }
}
