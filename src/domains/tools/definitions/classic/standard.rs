//! Standard dice roll tool definition.
//!
//! Rolls dice from standard notation like `1d20`, `2d6+3`, `3d8-2`.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::dice::{DiceExpression, Roller, parse_notation};
use crate::domains::tools::ValidationError;
use crate::domains::tools::definitions::common::{error_result, plus_sign, success_result};

fn default_notation() -> String {
    "1d6".to_string()
}

/// Parameters for the standard dice roll tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RollDiceParams {
    /// Dice expression to roll.
    #[schemars(description = "Dice notation like 1d20, 2d6+3, 3d8-2 (default: 1d6)")]
    #[serde(default = "default_notation")]
    pub notation: String,
}

/// Outcome of a standard dice roll.
#[derive(Debug, Clone)]
pub struct DiceOutcome {
    pub rolls: Vec<i64>,
    pub modifier: i64,
    pub total: i64,
}

/// Standard dice roll tool - rolls dice from notation.
pub struct RollDiceTool;

impl RollDiceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "roll_dice";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Roll dice using standard notation like 1d20, 2d6+3, 3d8-2, etc.";

    const MIN_DICE: i64 = 1;
    const MAX_DICE: i64 = 100;
    const MIN_SIDES: i64 = 2;
    const MAX_SIDES: i64 = 1000;

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &RollDiceParams, roller: &mut Roller) -> CallToolResult {
        info!("Rolling dice: {}", params.notation);

        let expr = match validate_notation(&params.notation) {
            Ok(e) => e,
            Err(e) => return error_result(&e.to_string()),
        };

        let outcome = roll(roller, expr);
        success_result(format_roll(&outcome))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let notation = arguments
            .get("notation")
            .and_then(|v| v.as_str())
            .unwrap_or("1d6")
            .to_string();

        let params = RollDiceParams { notation };
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
            input_schema: cached_schema_for_type::<RollDiceParams>(),
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
                let params: RollDiceParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                let mut roller = Roller::new();
                Ok(Self::execute(&params, &mut roller))
            }
            .boxed()
        })
    }
}

fn validate_notation(raw: &str) -> Result<DiceExpression, ValidationError> {
    let notation = if raw.trim().is_empty() { "1d6" } else { raw };

    let expr = parse_notation(notation).map_err(|_| {
        ValidationError::new(format!(
            "Invalid dice notation '{}'. Use format like 1d20, 2d6+3, etc.",
            raw
        ))
    })?;

    if !(RollDiceTool::MIN_DICE..=RollDiceTool::MAX_DICE).contains(&expr.count) {
        return Err(ValidationError::new("Please roll between 1 and 100 dice"));
    }
    if !(RollDiceTool::MIN_SIDES..=RollDiceTool::MAX_SIDES).contains(&expr.sides) {
        return Err(ValidationError::new(
            "Dice must have between 2 and 1000 sides",
        ));
    }

    Ok(expr)
}

fn roll(roller: &mut Roller, expr: DiceExpression) -> DiceOutcome {
    let rolls = roller.roll_set(expr.count, expr.sides);
    let total = rolls.iter().sum::<i64>() + expr.modifier;

    DiceOutcome {
        rolls,
        modifier: expr.modifier,
        total,
    }
}

fn format_roll(outcome: &DiceOutcome) -> String {
    let mut result = format!("🎲 Rolled: {:?}", outcome.rolls);

    if outcome.modifier != 0 {
        result.push_str(&format!(
            " {}{}",
            plus_sign(outcome.modifier),
            outcome.modifier
        ));
    }
    result.push_str(&format!(" = **{}**", outcome.total));

    if outcome.rolls.len() > 1 {
        let rolls: Vec<String> = outcome.rolls.iter().map(|r| r.to_string()).collect();
        result.push_str(&format!("\nIndividual rolls: {}", rolls.join(", ")));
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

    #[test]
    fn test_roll_count_and_bounds() {
        let mut roller = Roller::from_seed(42);
        for _ in 0..20 {
            let expr = DiceExpression {
                count: 5,
                sides: 8,
                modifier: 0,
            };
            let outcome = roll(&mut roller, expr);
            assert_eq!(outcome.rolls.len(), 5);
            assert!(outcome.rolls.iter().all(|r| (1..=8).contains(r)));
            assert_eq!(outcome.total, outcome.rolls.iter().sum::<i64>());
        }
    }

    #[test]
    fn test_roll_applies_modifier() {
        let mut roller = Roller::from_seed(7);
        let expr = DiceExpression {
            count: 2,
            sides: 6,
            modifier: 3,
        };
        let outcome = roll(&mut roller, expr);
        assert_eq!(outcome.total, outcome.rolls.iter().sum::<i64>() + 3);
    }

    #[test]
    fn test_validate_blank_defaults() {
        let expr = validate_notation("").unwrap();
        assert_eq!(expr.count, 1);
        assert_eq!(expr.sides, 6);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_notation("0d6").is_err());
        assert!(validate_notation("101d6").is_err());
        assert!(validate_notation("1d1").is_err());
        assert!(validate_notation("1d1001").is_err());
        assert!(validate_notation("100d1000").is_ok());
    }

    #[test]
    fn test_execute_invalid_notation() {
        let params = RollDiceParams {
            notation: "abc".to_string(),
        };
        let mut roller = Roller::from_seed(1);
        let result = RollDiceTool::execute(&params, &mut roller);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("Invalid dice notation 'abc'"));
    }

    #[test]
    fn test_format_single_die_omits_individual_line() {
        let outcome = DiceOutcome {
            rolls: vec![4],
            modifier: 0,
            total: 4,
        };
        let text = format_roll(&outcome);
        assert_eq!(text, "🎲 Rolled: [4] = **4**");
    }

    #[test]
    fn test_format_with_modifier_and_individuals() {
        let outcome = DiceOutcome {
            rolls: vec![3, 5],
            modifier: 2,
            total: 10,
        };
        let text = format_roll(&outcome);
        assert!(text.starts_with("🎲 Rolled: [3, 5] +2 = **10**"));
        assert!(text.contains("Individual rolls: 3, 5"));
    }

    #[test]
    fn test_format_negative_modifier() {
        let outcome = DiceOutcome {
            rolls: vec![6, 2],
            modifier: -2,
            total: 6,
        };
        assert!(format_roll(&outcome).contains("[6, 2] -2 = **6**"));
    }
}
