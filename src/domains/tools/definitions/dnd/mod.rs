//! D&D 5e tools: ability scores, advantage and disadvantage rolls.

pub mod advantage;
pub mod disadvantage;
pub mod stats;

pub use advantage::{RollAdvantageParams, RollAdvantageTool};
pub use disadvantage::{RollDisadvantageParams, RollDisadvantageTool};
pub use stats::{DndStatsParams, DndStatsTool};
