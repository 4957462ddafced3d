//! D&D ability score tool definition.
//!
//! Rolls the classic 4d6-drop-lowest array for all six ability scores.

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

const STAT_NAMES: [&str; 6] = [
    "Strength",
    "Dexterity",
    "Constitution",
    "Intelligence",
    "Wisdom",
    "Charisma",
];

/// Parameters for the ability score tool. Takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct DndStatsParams {}

/// One rolled ability score.
#[derive(Debug, Clone)]
pub struct StatRoll {
    pub name: &'static str,
    /// All four d6 results, sorted descending.
    pub rolls: Vec<i64>,
    /// The lowest die, which is dropped.
    pub dropped: i64,
    /// Sum of the three kept dice.
    pub total: i64,
}

/// Outcome of a full ability score array.
#[derive(Debug, Clone)]
pub struct StatsOutcome {
    pub stats: Vec<StatRoll>,
    pub total_points: i64,
    pub modifier_total: i64,
}

/// D&D ability score tool - 4d6 drop lowest, six times.
pub struct DndStatsTool;

impl DndStatsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "roll_dnd_stats";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Roll D&D ability scores using 4d6 drop lowest method for all six stats.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(_params: &DndStatsParams, roller: &mut Roller) -> CallToolResult {
        info!("Rolling D&D ability scores");

        let outcome = roll_stats(roller);
        success_result(format_stats(&outcome))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(_arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let mut roller = Roller::new();
        let result = Self::execute(&DndStatsParams::default(), &mut roller);

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
            input_schema: cached_schema_for_type::<DndStatsParams>(),
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
                let params: DndStatsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                let mut roller = Roller::new();
                Ok(Self::execute(&params, &mut roller))
            }
            .boxed()
        })
    }
}

/// Ability modifier: floor((score - 10) / 2). `div_euclid` keeps the floor
/// behavior for scores below 10.
fn ability_modifier(score: i64) -> i64 {
    (score - 10).div_euclid(2)
}

fn roll_stats(roller: &mut Roller) -> StatsOutcome {
    let mut stats = Vec::with_capacity(STAT_NAMES.len());

    for name in STAT_NAMES {
        let mut rolls = roller.roll_set(4, 6);
        rolls.sort_unstable_by(|a, b| b.cmp(a));
        let dropped = rolls[3];
        let total = rolls[..3].iter().sum();
        stats.push(StatRoll {
            name,
            rolls,
            dropped,
            total,
        });
    }

    let total_points = stats.iter().map(|s| s.total).sum();
    let modifier_total = stats.iter().map(|s| ability_modifier(s.total)).sum();

    StatsOutcome {
        stats,
        total_points,
        modifier_total,
    }
}

fn format_stats(outcome: &StatsOutcome) -> String {
    let details: Vec<String> = outcome
        .stats
        .iter()
        .map(|s| {
            format!(
                "**{:<12}**: {:>2} (rolled {:?}, dropped {})",
                s.name, s.total, s.rolls, s.dropped
            )
        })
        .collect();

    let mut array: Vec<i64> = outcome.stats.iter().map(|s| s.total).collect();
    array.sort_unstable_by(|a, b| b.cmp(a));
    let array: Vec<String> = array.iter().map(|v| v.to_string()).collect();

    let sign = if outcome.modifier_total >= 0 { "+" } else { "" };

    format!(
        "⚔️ **D&D Ability Scores** (4d6 drop lowest):\n\n{}\n\n📊 **Summary**:\n- Total: {} points\n- Average: {:.1}\n- Modifier total: {}{}\n- Array: [{}]",
        details.join("\n"),
        outcome.total_points,
        outcome.total_points as f64 / 6.0,
        sign,
        outcome.modifier_total,
        array.join(", "),
    )
}
