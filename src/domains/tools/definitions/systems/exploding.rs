//! Exploding dice tool definition.
//!
//! A die that shows its maximum face is rolled again and the new result
//! appended to its chain. Explosions share one invocation-wide budget so the
//! loop always terminates.

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

/// Maximum number of explosions across all dice in a single invocation.
pub const EXPLOSION_CAP: u32 = 10;

fn default_notation() -> String {
    "1d6".to_string()
}

/// Parameters for the exploding dice tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RollExplodingParams {
    /// Dice expression to roll.
    #[schemars(description = "Dice notation like 1d6, 2d8 (default: 1d6)")]
    #[serde(default = "default_notation")]
    pub notation: String,
}

/// Outcome of an exploding dice roll.
#[derive(Debug, Clone)]
pub struct ExplodingOutcome {
    /// The notation echoed back in the report.
    pub notation: String,
    /// One chain of results per input die; a chain longer than one exploded.
    pub dice: Vec<Vec<i64>>,
    pub modifier: i64,
    pub total: i64,
    /// How many explosions happened, at most [`EXPLOSION_CAP`].
    pub explosions: u32,
}

/// Exploding dice tool.
pub struct RollExplodingTool;

impl RollExplodingTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "roll_exploding";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Roll exploding dice where max rolls trigger additional rolls.";

    const MIN_DICE: i64 = 1;
    const MAX_DICE: i64 = 20;
    const MIN_SIDES: i64 = 2;
    const MAX_SIDES: i64 = 100;

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &RollExplodingParams, roller: &mut Roller) -> CallToolResult {
        info!("Rolling exploding dice: {}", params.notation);

        let (expr, notation) = match validate_notation(&params.notation) {
            Ok(v) => v,
            Err(e) => return error_result(&e.to_string()),
        };

        let outcome = roll_exploding(roller, expr, notation);
        success_result(format_exploding(&outcome))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let notation = arguments
            .get("notation")
            .and_then(|v| v.as_str())
            .unwrap_or("1d6")
            .to_string();

        let params = RollExplodingParams { notation };
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
            input_schema: cached_schema_for_type::<RollExplodingParams>(),
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
                let params: RollExplodingParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                let mut roller = Roller::new();
                Ok(Self::execute(&params, &mut roller))
            }
            .boxed()
        })
    }
}

fn validate_notation(raw: &str) -> Result<(DiceExpression, String), ValidationError> {
    let notation = if raw.trim().is_empty() {
        "1d6".to_string()
    } else {
        raw.to_string()
    };

    let expr = parse_notation(&notation).map_err(|_| {
        ValidationError::new(format!(
            "Invalid dice notation '{}'. Use format like 1d6, 2d8, etc.",
            raw
        ))
    })?;

    if !(RollExplodingTool::MIN_DICE..=RollExplodingTool::MAX_DICE).contains(&expr.count) {
        return Err(ValidationError::new(
            "Please roll between 1 and 20 exploding dice",
        ));
    }
    if !(RollExplodingTool::MIN_SIDES..=RollExplodingTool::MAX_SIDES).contains(&expr.sides) {
        return Err(ValidationError::new(
            "Exploding dice must have between 2 and 100 sides",
        ));
    }

    Ok((expr, notation))
}

/// Roll one die chain. The invocation-wide explosion count is passed in and
/// returned updated, keeping the shared cap explicit.
fn roll_die_chain(roller: &mut Roller, sides: i64, mut explosions: u32) -> (Vec<i64>, u32) {
    let mut chain = vec![roller.die(sides)];

    while chain[chain.len() - 1] == sides && explosions < EXPLOSION_CAP {
        chain.push(roller.die(sides));
        explosions += 1;
    }

    (chain, explosions)
}

fn roll_exploding(roller: &mut Roller, expr: DiceExpression, notation: String) -> ExplodingOutcome {
    let mut dice = Vec::with_capacity(expr.count as usize);
    let mut explosions = 0;

    for _ in 0..expr.count {
        let (chain, updated) = roll_die_chain(roller, expr.sides, explosions);
        explosions = updated;
        dice.push(chain);
    }

    let total = dice.iter().flatten().sum::<i64>() + expr.modifier;

    ExplodingOutcome {
        notation,
        dice,
        modifier: expr.modifier,
        total,
        explosions,
    }
}

fn format_exploding(outcome: &ExplodingOutcome) -> String {
    let mut result = format!("💥 **Exploding Dice Roll ({}!)**:\n", outcome.notation);

    for (i, chain) in outcome.dice.iter().enumerate() {
        if chain.len() > 1 {
            result.push_str(&format!("Die {}: {:?} (exploded!)\n", i + 1, chain));
        } else {
            result.push_str(&format!("Die {}: {:?}\n", i + 1, chain));
        }
    }

    if outcome.modifier != 0 {
        result.push_str(&format!(
            "\nModifier: {}{}\n",
            plus_sign(outcome.modifier),
            outcome.modifier
        ));
    }

    result.push_str(&format!("\n**Total: {}**", outcome.total));

    if outcome.explosions > 0 {
        result.push_str(&format!("\n🎆 Total explosions: {}", outcome.explosions));
    }

    result
}
