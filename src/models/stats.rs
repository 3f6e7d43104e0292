use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Live statistics for one protocol as reported by DeFiLlama.
///
/// A value is never merged with a later fetch; the next successful fetch
/// replaces it whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProtocolStatistics {
    /// Total value locked, in USD.
    pub total_value_locked: f64,
    /// Signed percentage change over the last day.
    pub change_one_day: f64,
    /// Signed percentage change over the last seven days.
    pub change_seven_day: f64,
    pub volume_24h: Option<f64>,
}

impl ProtocolStatistics {
    /// Normalizes a `/protocol/{slug}` response body.
    ///
    /// Missing or non-numeric fields read as zero, except `volume24h` which
    /// stays absent.
    pub fn from_response(json: &Value) -> Self {
        Self {
            total_value_locked: json.get("tvl").map(read_tvl).unwrap_or(0.0),
            change_one_day: read_number(json, "change_1d").unwrap_or(0.0),
            change_seven_day: read_number(json, "change_7d").unwrap_or(0.0),
            volume_24h: read_number(json, "volume24h"),
        }
    }
}

fn read_number(json: &Value, field: &str) -> Option<f64> {
    json.get(field).and_then(|v| v.as_f64()).filter(|v| v.is_finite())
}

// The full protocol endpoint reports `tvl` as a history of
// `{date, totalLiquidityUSD}` points; the last point is the current value.
fn read_tvl(tvl: &Value) -> f64 {
    let current = match tvl {
        Value::Array(points) => points
            .last()
            .and_then(|p| p.get("totalLiquidityUSD"))
            .and_then(|v| v.as_f64()),
        other => other.as_f64(),
    };
    current.filter(|v| v.is_finite()).unwrap_or(0.0)
}
