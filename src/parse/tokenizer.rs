use std::ops::Range;

/// A raw slice of the input together with its byte range.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token<'a> {
    pub slice: &'a str,
    pub span: Range<usize>,
}

impl<'a> Token<'a> {
    fn new(source: &'a str, span: Range<usize>) -> Self {
        Self {
            slice: &source[span.clone()],
            span,
        }
    }
}

/// Splits a dice expression into tokens.
///
/// `+` and `-` always stand alone, whitespace separates tokens without being part
/// of one, and `d` only starts a new token when the pending one already holds
/// something other than digits. Anything else is passed through for the
/// classifier to accept or reject.
pub fn tokenize(s: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    let mut split_before = false;
    let mut split_after = false;

    let mut flush = |start: &mut Option<usize>, end: usize| {
        if let Some(begin) = start.take() {
            tokens.push(Token::new(s, begin..end));
        }
    };

    for (i, c) in s.char_indices() {
        let space = c.is_whitespace();
        if space {
            split_before = true;
        }

        if c == '+' || c == '-' {
            split_before = true;
            split_after = true;
        }

        if c == 'd' {
            if let Some(begin) = start {
                if !s[begin..i].bytes().all(|b| b.is_ascii_digit()) {
                    split_before = true;
                }
            }
        }

        if split_before {
            flush(&mut start, i);
            split_before = false;
        }

        if space {
            continue;
        }
        start.get_or_insert(i);

        if split_after {
            flush(&mut start, i + c.len_utf8());
            split_after = false;
        }
    }
    flush(&mut start, s.len());

    tokens
}
