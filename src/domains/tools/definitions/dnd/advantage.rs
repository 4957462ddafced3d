//! Advantage roll tool definition.
//!
//! Roll twice, keep the higher - D&D 5e advantage.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::dice::Roller;
use crate::domains::tools::ValidationError;
use crate::domains::tools::definitions::common::{error_result, int_arg_or, success_result};

fn default_die_type() -> String {
    "20".to_string()
}

/// Parameters for the advantage roll tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RollAdvantageParams {
    /// Sides on the die to roll.
    #[schemars(description = "Die type to roll with advantage (default: 20)")]
    #[serde(default = "default_die_type")]
    pub die_type: String,
}

/// Outcome of a paired roll that keeps one value.
#[derive(Debug, Clone, Copy)]
pub struct PairedRollOutcome {
    pub sides: i64,
    pub first: i64,
    pub second: i64,
    pub result: i64,
}

/// Advantage roll tool - roll twice, take the higher.
pub struct RollAdvantageTool;

impl RollAdvantageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "roll_advantage";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Roll with advantage (roll twice, take higher) for D&D 5e.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &RollAdvantageParams, roller: &mut Roller) -> CallToolResult {
        info!("Rolling d{} with advantage", params.die_type);

        let sides = match validate_die_type(&params.die_type) {
            Ok(s) => s,
            Err(e) => return error_result(&e.to_string()),
        };

        let outcome = roll_advantage(roller, sides);
        success_result(format_advantage(&outcome))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let die_type = arguments
            .get("die_type")
            .and_then(|v| v.as_str())
            .unwrap_or("20")
            .to_string();

        let params = RollAdvantageParams { die_type };
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
            input_schema: cached_schema_for_type::<RollAdvantageParams>(),
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
                let params: RollAdvantageParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                let mut roller = Roller::new();
                Ok(Self::execute(&params, &mut roller))
            }
            .boxed()
        })
    }
}

/// Shared by the advantage and disadvantage tools: parse the die type with a
/// d20 default and check the 2-1000 bound.
pub(super) fn validate_die_type(raw: &str) -> Result<i64, ValidationError> {
    let sides = int_arg_or(raw, 20).ok_or_else(|| {
        ValidationError::new(format!(
            "Invalid die type '{}'. Please provide a number.",
            raw
        ))
    })?;

    if !(2..=1000).contains(&sides) {
        return Err(ValidationError::new(
            "Die must have between 2 and 1000 sides",
        ));
    }

    Ok(sides)
}

fn roll_advantage(roller: &mut Roller, sides: i64) -> PairedRollOutcome {
    let first = roller.die(sides);
    let second = roller.die(sides);

    PairedRollOutcome {
        sides,
        first,
        second,
        result: first.max(second),
    }
}

fn format_advantage(outcome: &PairedRollOutcome) -> String {
    let emoji = if outcome.result == outcome.sides {
        "⚡"
    } else if outcome.result as f64 >= outcome.sides as f64 * 0.75 {
        "🎯"
    } else {
        "🎲"
    };

    format!(
        "{} **Rolling d{} with Advantage**:\nFirst roll: {}\nSecond roll: {}\n**Result: {}** (took the higher)",
        emoji, outcome.sides, outcome.first, outcome.second, outcome.result
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_result_is_max_of_both() {
        let mut roller = Roller::from_seed(42);
        for _ in 0..100 {
            let outcome = roll_advantage(&mut roller, 20);
            assert_eq!(outcome.result, outcome.first.max(outcome.second));
            assert!((1..=20).contains(&outcome.first));
            assert!((1..=20).contains(&outcome.second));
        }
    }

    #[test]
    fn test_validate_blank_defaults_to_d20() {
        assert_eq!(validate_die_type(""), Ok(20));
        assert_eq!(validate_die_type("  "), Ok(20));
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_die_type("1").is_err());
        assert!(validate_die_type("1001").is_err());
        assert_eq!(validate_die_type("2"), Ok(2));
        assert_eq!(validate_die_type("1000"), Ok(1000));
    }

    #[test]
    fn test_execute_malformed_die_type() {
        let params = RollAdvantageParams {
            die_type: "twenty".to_string(),
        };
        let mut roller = Roller::from_seed(1);
        let result = RollAdvantageTool::execute(&params, &mut roller);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("Invalid die type 'twenty'"));
    }

    #[test]
    fn test_format_glyph_tiers() {
        let mk = |result: i64| PairedRollOutcome {
            sides: 20,
            first: result,
            second: 1,
            result,
        };
        assert!(format_advantage(&mk(20)).starts_with("⚡"));
        assert!(format_advantage(&mk(15)).starts_with("🎯"));
        assert!(format_advantage(&mk(10)).starts_with("🎲"));
    }

    #[test]
    fn test_format_mentions_both_rolls() {
        let outcome = PairedRollOutcome {
            sides: 20,
            first: 7,
            second: 13,
            result: 13,
        };
        let text = format_advantage(&outcome);
        assert!(text.contains("First roll: 7"));
        assert!(text.contains("Second roll: 13"));
        assert!(text.contains("**Result: 13** (took the higher)"));
    }
}
