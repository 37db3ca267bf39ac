use serde::{Deserialize, Deserializer, Serialize};

/// One telemetry update delivered by the feed.
///
/// Every field is optional.  Fields that are present but of the wrong type
/// are treated as absent, so a malformed value degrades to the default rather
/// than rejecting the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Payload {
    #[serde(deserialize_with = "lenient_number")]
    pub cpu: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub throughput: Option<f64>,
    /// A non-array value reads as empty; rows that are not objects are dropped.
    #[serde(deserialize_with = "lenient_rows")]
    pub processes: Vec<ProcessInfo>,
}

impl Payload {
    /// CPU usage in percent, `0` when missing.
    #[must_use]
    pub fn cpu_or_zero(&self) -> f64 {
        self.cpu.unwrap_or(0.0)
    }

    /// Throughput sample, `0` when missing.
    #[must_use]
    pub fn throughput_or_zero(&self) -> f64 {
        self.throughput.unwrap_or(0.0)
    }
}

/// A row of the process table carried alongside a payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProcessInfo {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub cpu: Option<f64>,
    /// Resident memory in bytes.
    #[serde(deserialize_with = "lenient")]
    pub mem: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(serde::de::IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Other(_) => None,
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Lenient::deserialize(deserializer)?.into_option())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::<D, f64>(deserializer)?.filter(|v| v.is_finite()))
}

fn lenient_rows<'de, D>(deserializer: D) -> Result<Vec<ProcessInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Option<Vec<Lenient<ProcessInfo>>> = lenient(deserializer)?;
    Ok(rows
        .unwrap_or_default()
        .into_iter()
        .filter_map(Lenient::into_option)
        .collect())
}

/// Global light/dark presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark  => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Connectivity of the telemetry feed as shown in the status chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Online,
    Offline,
    /// The user stopped the data service.
    Stopped,
}

impl ConnectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Connecting => "Status: Connecting...",
            Self::Online     => "Status: Online",
            Self::Offline    => "Status: Offline",
            Self::Stopped    => "Status: Stopped",
        }
    }
}

/// What the gauge currently shows: the value drawn and its center label.
///
/// The view renders from this; it is never read back from the view.  While
/// playback is paused it simply stops being written, which freezes both.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub gauge_value: f64,
    pub label: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            gauge_value: 0.0,
            label: "0%".to_string(),
        }
    }
}

impl DisplayState {
    /// Record a newly shown CPU value.  The gauge value is clamped; the label
    /// shows the rounded raw reading.
    pub fn show(&mut self, cpu: f64) {
        self.gauge_value = cpu.clamp(0.0, 100.0);
        self.label = format!("{}%", cpu.round() as i64);
    }
}
