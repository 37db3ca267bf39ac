use pulse_core::Stats;

/// Placeholder shown for a statistic of an empty series.
pub const PLACEHOLDER: &str = "—";

/// Format a percentage the way the gauge label does: rounded, no decimals.
pub fn percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

/// `["Min: 10%", "Avg: 20%", "Max: 30%"]`, or dashes when there is no data.
pub fn stat_labels(stats: Option<Stats>) -> [String; 3] {
    let [min, avg, max] = stat_values(stats);
    [
        format!("Min: {min}"),
        format!("Avg: {avg}"),
        format!("Max: {max}"),
    ]
}

/// Hover text of the gauge: the shown label plus the window statistics.
pub fn gauge_tooltip(label: &str, stats: Option<Stats>, paused: bool) -> String {
    let [min, avg, max] = stat_values(stats);
    let suffix = if paused { " (paused)" } else { "" };
    format!("CPU: {label} — Min {min} Avg {avg} Max {max}{suffix}")
}

fn stat_values(stats: Option<Stats>) -> [String; 3] {
    match stats {
        Some(s) => [percent(s.min), percent(s.avg), percent(s.max)],
        None => [PLACEHOLDER.to_string(), PLACEHOLDER.to_string(), PLACEHOLDER.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: Stats = Stats { min: 10.0, max: 30.0, avg: 20.0 };

    #[test]
    fn empty_stats_use_placeholder() {
        assert_eq!(stat_labels(None), ["Min: —", "Avg: —", "Max: —"]);
    }

    #[test]
    fn stats_are_rounded_percentages() {
        let stats = Stats { min: 9.6, max: 99.4, avg: 42.5 };
        assert_eq!(stat_labels(Some(stats)), ["Min: 10%", "Avg: 43%", "Max: 99%"]);
    }

    #[test]
    fn tooltip_mentions_pause() {
        assert_eq!(
            gauge_tooltip("42%", Some(STATS), true),
            "CPU: 42% — Min 10% Avg 20% Max 30% (paused)"
        );
        assert_eq!(
            gauge_tooltip("0%", None, false),
            "CPU: 0% — Min — Avg — Max —"
        );
    }
}
