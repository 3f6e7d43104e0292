/// A percentage change ready for display, plus its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedChange {
    pub text: String,
    pub is_positive: bool,
}

/// Renders a USD amount with the largest fitting K/M/B suffix.
pub fn format_tvl(tvl: f64) -> String {
    if tvl >= 1e9 {
        format!("${:.2}B", tvl / 1e9)
    } else if tvl >= 1e6 {
        format!("${:.2}M", tvl / 1e6)
    } else if tvl >= 1e3 {
        format!("${:.2}K", tvl / 1e3)
    } else {
        format!("${:.2}", tvl)
    }
}

pub fn format_change(change: f64) -> FormattedChange {
    // `-0.0` would otherwise print as "+-0.00%".
    let change = if change == 0.0 { 0.0 } else { change };
    let is_positive = change >= 0.0;
    let text = if is_positive {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    };

    FormattedChange { text, is_positive }
}
