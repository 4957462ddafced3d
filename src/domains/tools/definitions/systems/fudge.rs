//! Fudge/Fate dice tool definition.
//!
//! Fudge dice have three faces: minus, blank, plus, valued -1/0/+1.

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
use crate::domains::tools::definitions::common::{
    error_result, int_arg_or, plus_sign, success_result,
};

fn default_count() -> String {
    "4".to_string()
}

/// Parameters for the Fudge dice tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RollFudgeParams {
    /// How many Fudge dice to roll.
    #[schemars(description = "Number of Fudge dice to roll (default: 4, max: 20)")]
    #[serde(default = "default_count")]
    pub count: String,
}

/// Outcome of a Fudge dice roll.
#[derive(Debug, Clone)]
pub struct FudgeOutcome {
    /// Face values, each in {-1, 0, +1}.
    pub faces: Vec<i64>,
    pub total: i64,
}

/// Fudge/Fate dice tool.
pub struct RollFudgeTool;

impl RollFudgeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "roll_fudge";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Roll Fudge/Fate dice returning + (plus), - (minus), or blank results.";

    const MIN_DICE: i64 = 1;
    const MAX_DICE: i64 = 20;

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &RollFudgeParams, roller: &mut Roller) -> CallToolResult {
        info!("Rolling {} Fudge dice", params.count);

        let count = match validate_count(&params.count) {
            Ok(c) => c,
            Err(e) => return error_result(&e.to_string()),
        };

        let outcome = roll_fudge(roller, count);
        success_result(format_fudge(&outcome))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let count = arguments
            .get("count")
            .and_then(|v| v.as_str())
            .unwrap_or("4")
            .to_string();

        let params = RollFudgeParams { count };
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
            input_schema: cached_schema_for_type::<RollFudgeParams>(),
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
                let params: RollFudgeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                let mut roller = Roller::new();
                Ok(Self::execute(&params, &mut roller))
            }
            .boxed()
        })
    }
}

fn validate_count(raw: &str) -> Result<i64, ValidationError> {
    let count = int_arg_or(raw, 4).ok_or_else(|| {
        ValidationError::new(format!("Invalid count '{}'. Please provide a number.", raw))
    })?;

    if !(RollFudgeTool::MIN_DICE..=RollFudgeTool::MAX_DICE).contains(&count) {
        return Err(ValidationError::new(
            "Please roll between 1 and 20 Fudge dice",
        ));
    }

    Ok(count)
}

fn face_symbol(face: i64) -> &'static str {
    match face {
        1 => "+",
        -1 => "-",
        _ => "◯",
    }
}

fn roll_fudge(roller: &mut Roller, count: i64) -> FudgeOutcome {
    let faces: Vec<i64> = (0..count).map(|_| roller.range(-1, 1)).collect();
    let total = faces.iter().sum();

    FudgeOutcome { faces, total }
}

fn format_fudge(outcome: &FudgeOutcome) -> String {
    let symbols: Vec<&str> = outcome.faces.iter().map(|f| face_symbol(*f)).collect();

    format!(
        "🎲 **Fudge/Fate Dice Roll**:\nRolled {}dF: [{}]\n**Total: {}{}**",
        outcome.faces.len(),
        symbols.join(" "),
        plus_sign(outcome.total),
        outcome.total,
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
    fn test_faces_and_total() {
        let mut roller = Roller::from_seed(42);
        for _ in 0..50 {
            let outcome = roll_fudge(&mut roller, 4);
            assert_eq!(outcome.faces.len(), 4);
            assert!(outcome.faces.iter().all(|f| (-1..=1).contains(f)));
            assert_eq!(outcome.total, outcome.faces.iter().sum::<i64>());
        }
    }

    #[test]
    fn test_face_symbols() {
        assert_eq!(face_symbol(1), "+");
        assert_eq!(face_symbol(0), "◯");
        assert_eq!(face_symbol(-1), "-");
    }

    #[test]
    fn test_format_positive_total_gets_plus() {
        let outcome = FudgeOutcome {
            faces: vec![1, 1, 0, -1],
            total: 1,
        };
        let text = format_fudge(&outcome);
        assert!(text.contains("Rolled 4dF: [+ + ◯ -]"));
        assert!(text.contains("**Total: +1**"));
    }

    #[test]
    fn test_format_negative_total_keeps_own_sign() {
        let outcome = FudgeOutcome {
            faces: vec![-1, -1],
            total: -2,
        };
        assert!(format_fudge(&outcome).contains("**Total: -2**"));
    }

    #[test]
    fn test_validate_blank_defaults_to_four() {
        assert_eq!(validate_count(""), Ok(4));
    }

    #[test]
    fn test_execute_rejects_out_of_bounds() {
        let mut roller = Roller::from_seed(1);

        for bad in ["0", "21"] {
            let params = RollFudgeParams {
                count: bad.to_string(),
            };
            let result = RollFudgeTool::execute(&params, &mut roller);
            assert!(result.is_error.unwrap_or(false));
            assert!(result_text(&result).contains("between 1 and 20 Fudge dice"));
        }
    }
}
