use crate::state::Payload;

/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Telemetry feed task   → `Telemetry`
/// - Chart pointer         → `ChartHovered`, `ChartLeft`
/// - Surface layout        → `SurfaceResized`
/// - Config watcher task   → `ConfigReloaded`
/// - Buttons / keyboard    → `TogglePlayback`, `ToggleTheme`, `ToggleService`
#[derive(Debug, Clone)]
pub enum Message {
    // ── Telemetry feed ────────────────────────────────────────────────────────
    /// One delivery from the feed.  `None` signals a disconnect.
    Telemetry(Option<Payload>),

    // ── Pointer / layout ──────────────────────────────────────────────────────
    /// Pointer moved over the chart; position relative to the chart surface.
    /// Only `x` selects the sample, `y` places the tooltip.
    ChartHovered { x: f32, y: f32 },
    /// Pointer left the chart surface.
    ChartLeft,
    /// A drawing surface was laid out at a new logical size.
    SurfaceResized(SurfaceId, f32, f32),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk; triggers a live reload.
    ConfigReloaded,

    // ── User actions ──────────────────────────────────────────────────────────
    /// Pause button or Space key.
    TogglePlayback,
    /// Switch between light and dark presentation.
    ToggleTheme,
    /// Start or stop the data service.
    ToggleService,
}

/// Identifies one of the dashboard's drawing surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    Gauge,
    Sparkline,
    Chart,
}
