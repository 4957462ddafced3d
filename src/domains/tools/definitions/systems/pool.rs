//! Dice pool tool definition.
//!
//! Rolls a pool of same-sided dice and counts successes against a target
//! number, in the style of World of Darkness and Shadowrun.

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

fn default_pool_size() -> String {
    "5".to_string()
}

fn default_target() -> String {
    "6".to_string()
}

fn default_die_type() -> String {
    "10".to_string()
}

/// Parameters for the dice pool tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RollPoolParams {
    /// Number of dice in the pool.
    #[schemars(description = "Number of dice in the pool (default: 5, max: 50)")]
    #[serde(default = "default_pool_size")]
    pub pool_size: String,

    /// Minimum roll that counts as a success.
    #[schemars(description = "Target number a die must meet or beat (default: 6)")]
    #[serde(default = "default_target")]
    pub target: String,

    /// Sides on each pool die.
    #[schemars(description = "Die type for the pool (default: 10)")]
    #[serde(default = "default_die_type")]
    pub die_type: String,
}

/// Validated pool parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSpec {
    pub size: i64,
    pub target: i64,
    pub sides: i64,
}

/// Outcome of a dice pool roll.
#[derive(Debug, Clone)]
pub struct PoolOutcome {
    pub spec: PoolSpec,
    /// Rolls in the order they were made.
    pub rolls: Vec<i64>,
    pub successes: usize,
    pub criticals: usize,
}

/// Dice pool tool - success counting against a target number.
pub struct RollPoolTool;

impl RollPoolTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "roll_pool";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Roll a dice pool counting successes against a target number.";

    const MIN_POOL: i64 = 1;
    const MAX_POOL: i64 = 50;
    const MIN_SIDES: i64 = 2;
    const MAX_SIDES: i64 = 100;

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &RollPoolParams, roller: &mut Roller) -> CallToolResult {
        info!(
            "Rolling pool of {}d{} against target {}",
            params.pool_size, params.die_type, params.target
        );

        let spec = match validate_pool(params) {
            Ok(s) => s,
            Err(e) => return error_result(&e.to_string()),
        };

        let outcome = roll_pool(roller, spec);
        success_result(format_pool(&outcome))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let arg = |key: &str, default: &str| {
            arguments
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or(default)
                .to_string()
        };

        let params = RollPoolParams {
            pool_size: arg("pool_size", "5"),
            target: arg("target", "6"),
            die_type: arg("die_type", "10"),
        };
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
            input_schema: cached_schema_for_type::<RollPoolParams>(),
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
                let params: RollPoolParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                let mut roller = Roller::new();
                Ok(Self::execute(&params, &mut roller))
            }
            .boxed()
        })
    }
}

fn validate_pool(params: &RollPoolParams) -> Result<PoolSpec, ValidationError> {
    let parsed = (
        int_arg_or(&params.pool_size, 5),
        int_arg_or(&params.target, 6),
        int_arg_or(&params.die_type, 10),
    );
    let (Some(size), Some(target), Some(sides)) = parsed else {
        return Err(ValidationError::new(
            "Invalid input. Please provide numbers for pool size, target, and die type.",
        ));
    };

    if !(RollPoolTool::MIN_POOL..=RollPoolTool::MAX_POOL).contains(&size) {
        return Err(ValidationError::new("Pool size must be between 1 and 50"));
    }
    if !(RollPoolTool::MIN_SIDES..=RollPoolTool::MAX_SIDES).contains(&sides) {
        return Err(ValidationError::new(
            "Die must have between 2 and 100 sides",
        ));
    }
    if !(1..=sides).contains(&target) {
        return Err(ValidationError::new(format!(
            "Target must be between 1 and {}",
            sides
        )));
    }

    Ok(PoolSpec {
        size,
        target,
        sides,
    })
}

fn roll_pool(roller: &mut Roller, spec: PoolSpec) -> PoolOutcome {
    let rolls = roller.roll_set(spec.size, spec.sides);
    let successes = rolls.iter().filter(|r| **r >= spec.target).count();
    let criticals = rolls.iter().filter(|r| **r == spec.sides).count();

    PoolOutcome {
        spec,
        rolls,
        successes,
        criticals,
    }
}

fn format_pool(outcome: &PoolOutcome) -> String {
    let spec = outcome.spec;
    let emoji = if outcome.successes as f64 >= spec.size as f64 * 0.75 {
        "🌟"
    } else if outcome.successes > 0 {
        "✅"
    } else {
        "❌"
    };

    let mut sorted = outcome.rolls.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut result = format!(
        "{} **Dice Pool Result**:\nRolling {}d{}, target {}+\nRolls: {:?}\n\n**Successes: {}/{}**",
        emoji, spec.size, spec.sides, spec.target, sorted, outcome.successes, spec.size,
    );

    if outcome.criticals > 0 {
        result.push_str(&format!("\n⭐ Critical rolls: {}", outcome.criticals));
    }

    result
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

    fn spec(size: i64, target: i64, sides: i64) -> PoolSpec {
        PoolSpec {
            size,
            target,
            sides,
        }
    }

    #[test]
    fn test_success_and_critical_counts() {
        let mut roller = Roller::from_seed(42);
        for _ in 0..30 {
            let outcome = roll_pool(&mut roller, spec(8, 6, 10));
            assert_eq!(outcome.rolls.len(), 8);
            assert!(outcome.successes <= 8);
            assert_eq!(
                outcome.successes,
                outcome.rolls.iter().filter(|r| **r >= 6).count()
            );
            assert_eq!(
                outcome.criticals,
                outcome.rolls.iter().filter(|r| **r == 10).count()
            );
            assert!(outcome.criticals <= outcome.successes);
        }
    }

    #[test]
    fn test_validate_defaults() {
        let params = RollPoolParams {
            pool_size: String::new(),
            target: String::new(),
            die_type: String::new(),
        };
        assert_eq!(validate_pool(&params), Ok(spec(5, 6, 10)));
    }

    #[test]
    fn test_validate_bounds() {
        let params = |pool: &str, target: &str, die: &str| RollPoolParams {
            pool_size: pool.to_string(),
            target: target.to_string(),
            die_type: die.to_string(),
        };

        assert!(validate_pool(&params("0", "6", "10")).is_err());
        assert!(validate_pool(&params("51", "6", "10")).is_err());
        assert!(validate_pool(&params("5", "6", "1")).is_err());
        assert!(validate_pool(&params("5", "6", "101")).is_err());
        assert!(validate_pool(&params("5", "0", "10")).is_err());
        assert!(validate_pool(&params("5", "11", "10")).is_err());
        assert!(validate_pool(&params("50", "100", "100")).is_ok());
    }

    #[test]
    fn test_validate_target_message_names_sides() {
        let params = RollPoolParams {
            pool_size: "5".to_string(),
            target: "9".to_string(),
            die_type: "6".to_string(),
        };
        let err = validate_pool(&params).unwrap_err();
        assert_eq!(err.to_string(), "❌ Error: Target must be between 1 and 6");
    }

    #[test]
    fn test_execute_malformed_arguments() {
        let params = RollPoolParams {
            pool_size: "lots".to_string(),
            target: "6".to_string(),
            die_type: "10".to_string(),
        };
        let mut roller = Roller::from_seed(1);
        let result = RollPoolTool::execute(&params, &mut roller);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("Invalid input"));
    }

    #[test]
    fn test_format_shows_sorted_rolls_and_criticals() {
        let outcome = PoolOutcome {
            spec: spec(4, 6, 10),
            rolls: vec![2, 10, 7, 10],
            successes: 3,
            criticals: 2,
        };
        let text = format_pool(&outcome);
        assert!(text.contains("Rolling 4d10, target 6+"));
        assert!(text.contains("Rolls: [10, 10, 7, 2]"));
        assert!(text.contains("**Successes: 3/4**"));
        assert!(text.contains("⭐ Critical rolls: 2"));
        assert!(text.starts_with("🌟"));
    }

    #[test]
    fn test_format_no_successes() {
        let outcome = PoolOutcome {
            spec: spec(3, 8, 10),
            rolls: vec![2, 5, 7],
            successes: 0,
            criticals: 0,
        };
        let text = format_pool(&outcome);
        assert!(text.starts_with("❌"));
        assert!(!text.contains("Critical rolls"));
    }
}
