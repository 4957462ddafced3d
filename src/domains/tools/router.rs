//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    DndStatsTool, FlipCoinTool, RollAdvantageTool, RollDiceTool, RollDisadvantageTool,
    RollExplodingTool, RollFudgeTool, RollPercentileTool, RollPoolTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(FlipCoinTool::create_route())
        .with_route(RollDiceTool::create_route())
        .with_route(DndStatsTool::create_route())
        .with_route(RollAdvantageTool::create_route())
        .with_route(RollDisadvantageTool::create_route())
        .with_route(RollPercentileTool::create_route())
        .with_route(RollFudgeTool::create_route())
        .with_route(RollExplodingTool::create_route())
        .with_route(RollPoolTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 9);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
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
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let registry = ToolRegistry::new();
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router();
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
