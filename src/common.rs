use std::fmt::{self, Write};
use std::num::NonZeroU32;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Add,
    Sub,
}

impl Operator {
    pub fn from_token(s: &str) -> Option<Self> {
        Some(match s {
            "+" => Self::Add,
            "-" => Self::Sub,
            _ => return None,
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Add => '+',
            Self::Sub => '-',
        };
        f.write_char(c)
    }
}

/// Renders the `kh<n>`/`kl<n>` suffix for a signed keep count; zero renders nothing.
pub(crate) struct KeepSuffix(pub Int);

impl fmt::Display for KeepSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => Ok(()),
            n if n > 0 => write!(f, "kh{}", n),
            n => write!(f, "kl{}", n.unsigned_abs()),
        }
    }
}
