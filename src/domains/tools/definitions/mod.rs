//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod classic;
pub mod common;
pub mod dnd;
pub mod systems;

pub use classic::{FlipCoinTool, RollDiceTool, RollPercentileTool};
pub use dnd::{DndStatsTool, RollAdvantageTool, RollDisadvantageTool};
pub use systems::{RollExplodingTool, RollFudgeTool, RollPoolTool};
