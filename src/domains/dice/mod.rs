//! Dice engine module.
//!
//! Shared building blocks for every dice tool: the notation parser and the
//! random number source. Tools own their validation bounds and output
//! formatting; this module only knows how to parse expressions and roll.

pub mod notation;
pub mod rng;

pub use notation::{DiceExpression, NotationError, parse_notation};
pub use rng::Roller;
