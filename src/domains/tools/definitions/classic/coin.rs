//! Coin flip tool definition.

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

fn default_count() -> String {
    "1".to_string()
}

/// Parameters for the coin flip tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FlipCoinParams {
    /// How many coins to flip.
    #[schemars(description = "Number of coins to flip (default: 1, max: 100)")]
    #[serde(default = "default_count")]
    pub count: String,
}

/// One face of a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Heads,
    Tails,
}

impl Face {
    fn label(self) -> &'static str {
        match self {
            Face::Heads => "Heads",
            Face::Tails => "Tails",
        }
    }
}

/// Outcome of a coin flip invocation.
#[derive(Debug, Clone)]
pub struct CoinOutcome {
    pub flips: Vec<Face>,
    pub heads: usize,
    pub tails: usize,
}

/// Coin flip tool - flips one or more fair coins.
pub struct FlipCoinTool;

impl FlipCoinTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "flip_coin";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Flip one or more coins and return heads or tails results.";

    const MIN_COINS: i64 = 1;
    const MAX_COINS: i64 = 100;

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &FlipCoinParams, roller: &mut Roller) -> CallToolResult {
        info!("Flipping {} coin(s)", params.count);

        let count = match validate_count(&params.count) {
            Ok(c) => c,
            Err(e) => return error_result(&e.to_string()),
        };

        let outcome = flip_coins(roller, count as usize);
        success_result(format_flips(&outcome))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let count = arguments
            .get("count")
            .and_then(|v| v.as_str())
            .unwrap_or("1")
            .to_string();

        let params = FlipCoinParams { count };
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
            input_schema: cached_schema_for_type::<FlipCoinParams>(),
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
                let params: FlipCoinParams =
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
    let count = int_arg_or(raw, 1).ok_or_else(|| {
        ValidationError::new(format!("Invalid count '{}'. Please provide a number.", raw))
    })?;

    if !(FlipCoinTool::MIN_COINS..=FlipCoinTool::MAX_COINS).contains(&count) {
        return Err(ValidationError::new("Please flip between 1 and 100 coins"));
    }

    Ok(count)
}

fn flip_coins(roller: &mut Roller, count: usize) -> CoinOutcome {
    let mut flips = Vec::with_capacity(count);
    let mut heads = 0;

    for _ in 0..count {
        let face = if roller.flip() { Face::Heads } else { Face::Tails };
        if face == Face::Heads {
            heads += 1;
        }
        flips.push(face);
    }

    CoinOutcome {
        tails: count - heads,
        flips,
        heads,
    }
}

fn format_flips(outcome: &CoinOutcome) -> String {
    if outcome.flips.len() == 1 {
        let face = outcome.flips[0];
        let emoji = match face {
            Face::Heads => "🪙",
            Face::Tails => "🌑",
        };
        return format!("{} **{}!**", emoji, face.label());
    }

    let total = outcome.flips.len();
    let results: Vec<&str> = outcome.flips.iter().map(|f| f.label()).collect();

    format!(
        "🪙 Flipped {} coins:\nResults: {}\n\n📊 Summary:\n- Heads: {} ({:.1}%)\n- Tails: {} ({:.1}%)",
        total,
        results.join(", "),
        outcome.heads,
        outcome.heads as f64 / total as f64 * 100.0,
        outcome.tails,
        outcome.tails as f64 / total as f64 * 100.0,
    )
}
