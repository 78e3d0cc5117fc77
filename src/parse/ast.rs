use crate::common::*;
use crate::roll::Eval;
use std::fmt;

/// A built expression tree. An empty token stream builds an expression with no root.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub(crate) root: Option<Node>,
}

impl Expression {
    pub(crate) fn new(root: Option<Node>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => fmt::Display::fmt(root, f),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch::enum_dispatch(Eval)]
pub enum Node {
    Numeric(Numeric),
    Arithmetic(Arithmetic),
    Dice(Dice),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(x) => fmt::Display::fmt(x, f),
            Self::Arithmetic(x) => fmt::Display::fmt(x, f),
            Self::Dice(x) => fmt::Display::fmt(x, f),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Numeric(pub Int);

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A binary `+`/`-` node. `right` stays unset until the builder sees the next operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Arithmetic {
    pub op: Operator,
    pub left: Box<Node>,
    pub right: Option<Box<Node>>,
}

impl Arithmetic {
    pub fn new(op: Operator, left: Node, right: Node) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Some(Box::new(right)),
        }
    }

    pub(crate) fn open(op: Operator, left: Node) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: None,
        }
    }
}

impl fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left, self.op)?;
        if let Some(right) = &self.right {
            write!(f, " {}", right)?;
        }
        Ok(())
    }
}

/// `keep` is signed: positive came from `kh<n>`, negative from `kl<n>`, zero means no suffix.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dice {
    pub num: usize,
    pub faces: NonZeroUInt,
    pub keep: Int,
}

impl Dice {
    pub fn new(num: usize, faces: NonZeroUInt) -> Self {
        Self::with_keep(num, faces, 0)
    }

    pub fn with_keep(num: usize, faces: NonZeroUInt, keep: Int) -> Self {
        Self { num, faces, keep }
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}{}", self.num, self.faces, KeepSuffix(self.keep))
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    pub fn int(x: Int) -> Node {
        Node::Numeric(Numeric(x))
    }

    pub fn dice(num: usize, faces: u32) -> Node {
        kept_dice(num, faces, 0)
    }

    pub fn kept_dice(num: usize, faces: u32, keep: Int) -> Node {
        let faces = NonZeroUInt::new(faces).unwrap();
        Node::Dice(Dice::with_keep(num, faces, keep))
    }

    pub fn bin(left: Node, op: Operator, right: Node) -> Node {
        Node::Arithmetic(Arithmetic::new(op, left, right))
    }
}
