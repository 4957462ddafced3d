//! Disadvantage roll tool definition.
//!
//! Roll twice, keep the lower - D&D 5e disadvantage.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::advantage::{PairedRollOutcome, validate_die_type};
use crate::domains::dice::Roller;
use crate::domains::tools::definitions::common::{error_result, success_result};

fn default_die_type() -> String {
    "20".to_string()
}

/// Parameters for the disadvantage roll tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RollDisadvantageParams {
    /// Sides on the die to roll.
    #[schemars(description = "Die type to roll with disadvantage (default: 20)")]
    #[serde(default = "default_die_type")]
    pub die_type: String,
}

/// Disadvantage roll tool - roll twice, take the lower.
pub struct RollDisadvantageTool;

impl RollDisadvantageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "roll_disadvantage";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Roll with disadvantage (roll twice, take lower) for D&D 5e.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &RollDisadvantageParams, roller: &mut Roller) -> CallToolResult {
        info!("Rolling d{} with disadvantage", params.die_type);

        let sides = match validate_die_type(&params.die_type) {
            Ok(s) => s,
            Err(e) => return error_result(&e.to_string()),
        };

        let outcome = roll_disadvantage(roller, sides);
        success_result(format_disadvantage(&outcome))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let die_type = arguments
            .get("die_type")
            .and_then(|v| v.as_str())
            .unwrap_or("20")
            .to_string();

        let params = RollDisadvantageParams { die_type };
        let mut roller = Roller::new();
        let result = Self::execute(&params, &mut roller);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RollDisadvantageParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: RollDisadvantageParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                let mut roller = Roller::new();
                Ok(Self::execute(&params, &mut roller))
            }
            .boxed()
        })
    }
}

fn roll_disadvantage(roller: &mut Roller, sides: i64) -> PairedRollOutcome {
    let first = roller.die(sides);
    let second = roller.die(sides);

    PairedRollOutcome {
        sides,
        first,
        second,
        result: first.min(second),
    }
}

fn format_disadvantage(outcome: &PairedRollOutcome) -> String {
    let emoji = if outcome.result == 1 {
        "💀"
    } else if outcome.result as f64 <= outcome.sides as f64 * 0.25 {
        "😰"
    } else {
        "🎲"
    };

    format!(
        "{} **Rolling d{} with Disadvantage**:\nFirst roll: {}\nSecond roll: {}\n**Result: {}** (took the lower)",
        emoji, outcome.sides, outcome.first, outcome.second, outcome.result
    )
}
