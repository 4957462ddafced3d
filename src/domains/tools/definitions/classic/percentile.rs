//! Percentile roll tool definition.
//!
//! Rolls d100 the tabletop way: a tens die and a ones die, where a double
//! zero reads as 100.

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
use crate::domains::tools::definitions::common::success_result;

/// Parameters for the percentile roll tool. Takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RollPercentileParams {}

/// Outcome of a percentile roll.
#[derive(Debug, Clone, Copy)]
pub struct PercentileOutcome {
    /// Tens die value: 0, 10, ..., 90.
    pub tens: i64,
    /// Ones die value: 0..=9.
    pub ones: i64,
    /// Final result in 1..=100.
    pub result: i64,
}

/// Percentile roll tool - d100 via two d10s.
pub struct RollPercentileTool;

impl RollPercentileTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "roll_percentile";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Roll percentile dice (d100) for percentage-based checks.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(_params: &RollPercentileParams, roller: &mut Roller) -> CallToolResult {
        info!("Rolling percentile dice");

        let outcome = roll_percentile(roller);
        success_result(format_percentile(&outcome))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(_arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let mut roller = Roller::new();
        let result = Self::execute(&RollPercentileParams::default(), &mut roller);

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
            input_schema: cached_schema_for_type::<RollPercentileParams>(),
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
                let params: RollPercentileParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                let mut roller = Roller::new();
                Ok(Self::execute(&params, &mut roller))
            }
            .boxed()
        })
    }
}

fn roll_percentile(roller: &mut Roller) -> PercentileOutcome {
    let tens = roller.range(0, 9) * 10;
    let ones = roller.range(0, 9);

    // Double zero is 100, never 0.
    let result = if tens + ones > 0 { tens + ones } else { 100 };

    PercentileOutcome { tens, ones, result }
}

fn format_percentile(outcome: &PercentileOutcome) -> String {
    let emoji = if outcome.result == 100 {
        "💯"
    } else if outcome.result >= 95 {
        "⭐"
    } else if outcome.result >= 90 {
        "✨"
    } else {
        "🎲"
    };

    let tens_label = if outcome.tens > 0 {
        outcome.tens.to_string()
    } else {
        "00".to_string()
    };

    format!(
        "{} **Percentile Roll (d100)**:\nTens die: {}\nOnes die: {}\n**Result: {}%**",
        emoji, tens_label, outcome.ones, outcome.result
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_always_in_range() {
        let mut roller = Roller::from_seed(42);
        for _ in 0..500 {
            let outcome = roll_percentile(&mut roller);
            assert!((1..=100).contains(&outcome.result));
            assert_eq!(outcome.tens % 10, 0);
            assert!((0..=90).contains(&outcome.tens));
            assert!((0..=9).contains(&outcome.ones));
            if outcome.tens + outcome.ones > 0 {
                assert_eq!(outcome.result, outcome.tens + outcome.ones);
            } else {
                assert_eq!(outcome.result, 100);
            }
        }
    }

    #[test]
    fn test_format_double_zero_reads_one_hundred() {
        let outcome = PercentileOutcome {
            tens: 0,
            ones: 0,
            result: 100,
        };
        let text = format_percentile(&outcome);
        assert!(text.starts_with("💯"));
        assert!(text.contains("Tens die: 00"));
        assert!(text.contains("Ones die: 0"));
        assert!(text.contains("**Result: 100%**"));
    }

    #[test]
    fn test_format_glyph_tiers() {
        let mk = |tens: i64, ones: i64| PercentileOutcome {
            tens,
            ones,
            result: tens + ones,
        };
        assert!(format_percentile(&mk(90, 5)).starts_with("⭐"));
        assert!(format_percentile(&mk(90, 2)).starts_with("✨"));
        assert!(format_percentile(&mk(40, 2)).starts_with("🎲"));
    }

    #[test]
    fn test_format_plain_roll() {
        let outcome = PercentileOutcome {
            tens: 40,
            ones: 2,
            result: 42,
        };
        let text = format_percentile(&outcome);
        assert!(text.contains("Tens die: 40"));
        assert!(text.contains("Ones die: 2"));
        assert!(text.contains("**Result: 42%**"));
    }
}
