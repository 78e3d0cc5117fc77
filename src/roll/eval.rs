use super::{error::RollError, RResult};
use crate::common::*;
use crate::parse::ast::{Arithmetic, Dice, Numeric};
use std::fmt;

/// A value together with the trace that explains it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RollResult {
    pub value: Int,
    pub details: String,
}

impl RollResult {
    pub fn new(value: Int, details: impl Into<String>) -> Self {
        Self {
            value,
            details: details.into(),
        }
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.details, self.value)
    }
}

#[enum_dispatch::enum_dispatch]
pub trait Eval {
    fn eval<R: crate::roll::Roller>(
        &self,
        ctx: &mut crate::roll::RollContext<R>,
    ) -> crate::roll::RResult<crate::roll::RollResult>;
}

impl Eval for Numeric {
    fn eval<R: crate::roll::Roller>(
        &self,
        _: &mut crate::roll::RollContext<R>,
    ) -> RResult<RollResult> {
        Ok(RollResult::new(self.0, self.0.to_string()))
    }
}

impl Eval for Arithmetic {
    /// Note the operand order: the result is `right op left`, and the trace
    /// renders the right side first.
    fn eval<R: crate::roll::Roller>(
        &self,
        ctx: &mut crate::roll::RollContext<R>,
    ) -> RResult<RollResult> {
        let right = self
            .right
            .as_ref()
            .ok_or(RollError::MissingOperand(self.op))?
            .eval(ctx)?;
        let left = self.left.eval(ctx)?;

        let value = match self.op {
            Operator::Add => right.value.checked_add(left.value),
            Operator::Sub => right.value.checked_sub(left.value),
        }
        .ok_or(RollError::Overflow)?;
        let details = format!("({}){}({})", right.details, self.op, left.details);
        Ok(RollResult::new(value, details))
    }
}

impl Eval for Dice {
    fn eval<R: crate::roll::Roller>(
        &self,
        ctx: &mut crate::roll::RollContext<R>,
    ) -> RResult<RollResult> {
        let (start, end) = self.window()?;
        let mut rolls = ctx.roll(self.num, self.faces)?;
        let raw = format!("{}({})", self, join(&rolls));

        rolls.sort_unstable();
        let selected = &rolls[start..end];
        let value = selected
            .iter()
            .try_fold(0 as Int, |sum, &x| sum.checked_add(Int::from(x)))
            .ok_or(RollError::Overflow)?;

        let details = format!("{}=>({})", raw, join(selected));
        log::debug!("rolled {}: {}", self, details);
        Ok(RollResult::new(value, details))
    }
}

impl Dice {
    /// The `[start, end)` range of the sorted rolls that is summed.
    ///
    /// `kh<n>` drops the `n` lowest dice and `kl<n>` drops the `n` highest, so
    /// the suffix only matches "keep `n`" when exactly `n + 1` dice are rolled.
    pub fn window(&self) -> RResult<(usize, usize)> {
        let out_of_range = || RollError::KeepOutOfRange {
            keep: self.keep,
            num: self.num,
        };
        let n = usize::try_from(self.keep.unsigned_abs()).map_err(|_| out_of_range())?;
        if n > self.num {
            return Err(out_of_range());
        }

        Ok(if self.keep > 0 {
            (n, self.num)
        } else {
            (0, self.num - n)
        })
    }
}

fn join(rolls: &[UInt]) -> String {
    rolls
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
