use pulse_core::{PulseError, Result, ThemeMode};
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `pulse.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PulseConfig {
    /// Window settings.
    pub global: GlobalConfig,
    /// History buffer sizes.
    pub history: HistoryConfig,
    /// Telemetry source.
    pub feed: FeedConfig,
    /// Throughput chart geometry.
    pub chart: ChartConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

impl PulseConfig {
    /// Reject values the dashboard cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.history.cpu_capacity == 0 || self.history.throughput_capacity == 0 {
            return Err(PulseError::Config(
                "history capacities must be at least 1".to_string(),
            ));
        }
        if self.feed.interval_ms == 0 {
            return Err(PulseError::Config("feed.interval_ms must be positive".to_string()));
        }
        if !(self.global.scale_factor > 0.0) {
            return Err(PulseError::Config("global.scale_factor must be positive".to_string()));
        }
        Ok(())
    }
}

/// Window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Initial window width in logical pixels.
    pub width: f32,
    /// Initial window height in logical pixels.
    pub height: f32,
    /// Pixel density applied to every drawing surface.
    pub scale_factor: f32,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            width:        960.0,
            height:       640.0,
            scale_factor: 1.0,
        }
    }
}

/// Number of samples kept per metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub cpu_capacity: usize,
    pub throughput_capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            cpu_capacity:        pulse_core::ingest::CPU_HISTORY_CAPACITY,
            throughput_capacity: pulse_core::ingest::THROUGHPUT_HISTORY_CAPACITY,
        }
    }
}

/// Where payloads come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedSource {
    /// Sample the local machine.
    #[default]
    System,
    /// Read JSON payloads, one per line, from standard input.
    Stdin,
}

/// Telemetry source settings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub source: FeedSource,
    /// Poll interval of the `system` source.
    pub interval_ms: u64,
    /// Processes listed in the process table.
    pub process_count: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            source:        FeedSource::System,
            interval_ms:   2_000,
            process_count: 5,
        }
    }
}

/// Throughput chart geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart height in logical pixels.
    pub height: f32,
    pub padding_left: f32,
    pub padding_right: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height:        180.0,
            padding_left:  8.0,
            padding_right: 8.0,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Presentation mode at startup.
    pub mode: ThemeMode,
    /// Body text size in points.
    pub font_size: f32,
    /// Gauge center label size in points.
    pub label_size: f32,
    pub light_background: String,
    pub light_foreground: String,
    pub dark_background: String,
    pub dark_foreground: String,
    /// Secondary text (stats row, timestamps).
    pub muted: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode:             ThemeMode::Light,
            font_size:        13.0,
            label_size:       26.0,
            light_background: "#f8fafc".to_string(),
            light_foreground: "#0f172a".to_string(),
            dark_background:  "#0b1220".to_string(),
            dark_foreground:  "#e2e8f0".to_string(),
            muted:            "#94a3b8".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg: PulseConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, PulseConfig::default());
        assert_eq!(cfg.history.cpu_capacity, 120);
        assert_eq!(cfg.history.throughput_capacity, 60);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg: PulseConfig = toml::from_str(
            r#"
            [feed]
            source = "stdin"

            [theme]
            mode = "dark"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.feed.source, FeedSource::Stdin);
        assert_eq!(cfg.feed.interval_ms, 2_000);
        assert_eq!(cfg.theme.mode, ThemeMode::Dark);
        assert_eq!(cfg.theme.label_size, 26.0);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut cfg = PulseConfig::default();
        cfg.history.cpu_capacity = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn defaults_validate() {
        assert!(PulseConfig::default().validate().is_ok());
    }
}
