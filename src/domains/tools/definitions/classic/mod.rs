//! Classic dice tools: coin flips, standard notation rolls, percentile.

pub mod coin;
pub mod percentile;
pub mod standard;

pub use coin::{FlipCoinParams, FlipCoinTool};
pub use percentile::{RollPercentileParams, RollPercentileTool};
pub use standard::{RollDiceParams, RollDiceTool};
