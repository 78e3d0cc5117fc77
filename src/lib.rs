//! Parses dice notation such as `2d20kh1+5` and rolls it, producing both a
//! value and a trace of every die that went into it.

pub mod common;
mod error;
pub mod roll;

pub mod parse;

pub use error::Error;
pub use roll::{RollContext, RollResult, Roller};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Rolls `expression` with the thread-local RNG and the default roll budget.
pub fn evaluate(expression: &str) -> Result<RollResult> {
    evaluate_with(expression, &mut RollContext::default())
}

/// Rolls `expression` with a caller-supplied context, e.g. one built around a seeded RNG.
pub fn evaluate_with<R: Roller>(expression: &str, ctx: &mut RollContext<R>) -> Result<RollResult> {
    let expr = parse::parse(expression)?;
    Ok(ctx.eval(&expr)?)
}
