//! Tools for specific game systems: Fudge/Fate dice, exploding dice,
//! success-counting dice pools.

pub mod exploding;
pub mod fudge;
pub mod pool;

pub use exploding::{RollExplodingParams, RollExplodingTool};
pub use fudge::{RollFudgeParams, RollFudgeTool};
pub use pool::{RollPoolParams, RollPoolTool};
