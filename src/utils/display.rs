use crate::models::cache::CacheStats;
use crate::services::stats_service::StatsState;
use crate::utils::format::{format_change, format_tvl};
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

const PLACEHOLDER: &str = "—";

pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_header(&self, text: &str) -> String {
        format!("\n=== {} ===", text.bright_white().bold())
    }

    pub fn format_table(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.add_row(Row::new(
            headers.iter().map(|h| Cell::new(h).style_spec("b")).collect(),
        ));

        for row in rows {
            table.add_row(Row::new(row.iter().map(|cell| Cell::new(cell)).collect()));
        }

        table.to_string()
    }

    pub fn format_colored_change(&self, change: f64) -> String {
        let formatted = format_change(change);
        if formatted.is_positive {
            formatted.text.green().to_string()
        } else {
            formatted.text.red().to_string()
        }
    }

    pub fn format_stats_summary(&self, tool_id: &str, slug: Option<&str>, state: &StatsState) -> String {
        let title = match slug {
            Some(slug) => format!("{} ({})", tool_id, slug),
            None => tool_id.to_string(),
        };

        let mut output = vec![self.format_header(&title)];
        match (&state.statistics, slug) {
            (Some(stats), _) => {
                output.push(format!("TVL: {}", format_tvl(stats.total_value_locked)));
                output.push(format!("24h Change: {}", self.format_colored_change(stats.change_one_day)));
                output.push(format!("7d Change: {}", self.format_colored_change(stats.change_seven_day)));
                output.push(format!(
                    "24h Volume: {}",
                    stats.volume_24h.map(format_tvl).unwrap_or_else(|| PLACEHOLDER.to_string())
                ));
            }
            (None, None) => output.push("No live data for this tool".dimmed().to_string()),
            (None, Some(_)) if state.is_loading => output.push("Loading...".dimmed().to_string()),
            (None, Some(_)) => output.push(format!("TVL: {}", PLACEHOLDER)),
        }

        output.join("\n")
    }

    /// One table row per tool: id, TVL and 24h change, or placeholders.
    pub fn stats_row(&self, tool_id: &str, state: &StatsState) -> Vec<String> {
        match &state.statistics {
            Some(stats) => vec![
                tool_id.to_string(),
                format_tvl(stats.total_value_locked),
                self.format_colored_change(stats.change_one_day),
            ],
            None => vec![tool_id.to_string(), PLACEHOLDER.to_string(), PLACEHOLDER.to_string()],
        }
    }

    pub fn format_cache_stats(&self, stats: &CacheStats) -> String {
        format!(
            "Cached protocols: {} ({} fresh, {} expired)",
            stats.total,
            stats.fresh,
            stats.total - stats.fresh
        )
    }
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        Self::new()
    }
}
