use super::{error::RollError, eval::Eval, roller::Roller, RResult, RollResult};
use crate::common::*;
use crate::parse::ast;

pub type DefaultRoller = rand::prelude::ThreadRng;

/// Evaluation settings plus the random source that dice draw from.
pub struct RollContext<R = DefaultRoller> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    pub fn max_rolls(&self) -> Option<usize> {
        self.max_rolls
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        self.rolls = self.rolls.saturating_add(n);
        if self.max_rolls.map_or(false, |max| self.rolls > max) {
            Err(RollError::TooManyRolls)
        } else {
            Ok(())
        }
    }

    /// Draws `num` dice in roll order.
    pub fn roll(&mut self, num: usize, sides: NonZeroUInt) -> RResult<Vec<UInt>> {
        self.count_rolls(num)?;
        let mut rolls = Vec::new();
        self.roller.roll_into(&mut rolls, num, sides);
        Ok(rolls)
    }

    /// Evaluates a whole expression with a fresh roll budget.
    pub fn eval(&mut self, expr: &ast::Expression) -> RResult<RollResult> {
        self.rolls = 0;
        let root = expr.root.as_ref().ok_or(RollError::EmptyExpression)?;
        root.eval(self)
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(Some(1000), rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::StepRoller;

    fn mock_roller() -> StepRoller {
        StepRoller::new(NonZeroUInt::new(10).unwrap(), 1)
    }

    fn d(x: UInt) -> NonZeroUInt {
        NonZeroUInt::new(x).unwrap()
    }

    #[test]
    fn test_roll_counts_against_budget() {
        let mut ctx = RollContext::new_bounded(5, mock_roller());
        assert_eq!(ctx.roll(3, d(20)).unwrap(), [10, 11, 12]);
        assert_eq!(ctx.roll(2, d(20)).unwrap(), [13, 14]);
        assert_eq!(ctx.roll(1, d(20)), Err(RollError::TooManyRolls));
    }

    #[test]
    fn test_unbounded_roll() {
        let mut ctx = RollContext::new_unbounded(mock_roller());
        assert_eq!(ctx.max_rolls(), None);
        assert_eq!(ctx.roll(5000, d(4)).unwrap().len(), 5000);
    }

    #[test]
    fn test_eval_resets_budget() {
        let mut ctx = RollContext::new_bounded(3, mock_roller());
        let expr = crate::parse::parse("3d6").unwrap();
        assert!(ctx.eval(&expr).is_ok());
        assert!(ctx.eval(&expr).is_ok());
    }

    #[test]
    fn test_eval_empty() {
        let mut ctx = RollContext::new_bounded(3, mock_roller());
        let expr = crate::parse::parse("").unwrap();
        assert_eq!(ctx.eval(&expr), Err(RollError::EmptyExpression));
    }

    #[test]
    fn test_default_context() {
        let ctx = RollContext::default();
        assert_eq!(ctx.max_rolls(), Some(1000));
    }
}
