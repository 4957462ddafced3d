//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::{
    DndStatsTool, FlipCoinTool, RollAdvantageTool, RollDiceTool, RollDisadvantageTool,
    RollExplodingTool, RollFudgeTool, RollPercentileTool, RollPoolTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry;

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            FlipCoinTool::NAME,
            RollDiceTool::NAME,
            DndStatsTool::NAME,
            RollAdvantageTool::NAME,
            RollDisadvantageTool::NAME,
            RollPercentileTool::NAME,
            RollFudgeTool::NAME,
            RollExplodingTool::NAME,
            RollPoolTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            FlipCoinTool::to_tool(),
            RollDiceTool::to_tool(),
            DndStatsTool::to_tool(),
            RollAdvantageTool::to_tool(),
            RollDisadvantageTool::to_tool(),
            RollPercentileTool::to_tool(),
            RollFudgeTool::to_tool(),
            RollExplodingTool::to_tool(),
            RollPoolTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            FlipCoinTool::NAME => FlipCoinTool::http_handler(arguments),
            RollDiceTool::NAME => RollDiceTool::http_handler(arguments),
            DndStatsTool::NAME => DndStatsTool::http_handler(arguments),
            RollAdvantageTool::NAME => RollAdvantageTool::http_handler(arguments),
            RollDisadvantageTool::NAME => RollDisadvantageTool::http_handler(arguments),
            RollPercentileTool::NAME => RollPercentileTool::http_handler(arguments),
            RollFudgeTool::NAME => RollFudgeTool::http_handler(arguments),
            RollExplodingTool::NAME => RollExplodingTool::http_handler(arguments),
            RollPoolTool::NAME => RollPoolTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new();
        let names = registry.tool_names();
        assert_eq!(names.len(), 9);
        assert!(names.contains(&"flip_coin"));
        assert!(names.contains(&"roll_dice"));
        assert!(names.contains(&"roll_dnd_stats"));
        assert!(names.contains(&"roll_advantage"));
        assert!(names.contains(&"roll_disadvantage"));
        assert!(names.contains(&"roll_percentile"));
        assert!(names.contains(&"roll_fudge"));
        assert!(names.contains(&"roll_exploding"));
        assert!(names.contains(&"roll_pool"));
    }

    #[test]
    fn test_get_all_tools_have_schemas() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 9);
        for tool in tools {
            assert!(tool.description.is_some());
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_flip_coin() {
        let registry = ToolRegistry::new();
        let result = registry.call_tool("flip_coin", serde_json::json!({ "count": "2" }));
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new();
        let result = registry.call_tool("unknown", serde_json::json!({}));
        assert!(result.is_err());
    }
}
