mod ctx;
mod error;
mod eval;
mod roller;

use crate::parse::ast;

pub type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, RollContext};
pub use error::RollError;
pub use eval::{Eval, RollResult};
pub use roller::Roller;

pub fn eval<R: Roller>(expr: &ast::Expression, roller: R, max_rolls: Option<usize>) -> RResult<RollResult> {
    let mut ctx = RollContext::new(max_rolls, roller);
    ctx.eval(expr)
}
