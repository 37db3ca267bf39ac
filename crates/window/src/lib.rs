//! Desktop window for `pulse`.
//!
//! Owns the Iced application loop and wires together the background tasks:
//! - Telemetry data service (system sampler or stdin JSON lines)
//! - Config file watcher (live reload on change)
//! - Space key (pause / resume the gauge)

use chrono::Local;
use futures::{channel::mpsc::Sender, SinkExt};
use iced::{
    event, keyboard,
    widget::{button, column, container, row, text},
    window, Alignment, Element, Length, Point, Size, Subscription, Task,
};
use pulse_config::{default_path, load as load_config, ConfigWatcher, FeedConfig, PulseConfig};
use pulse_core::{event::Message as AppMessage, Ingested, SurfaceId, TelemetryIngestor, ThemeMode};
use pulse_feed::FeedHandle;
use pulse_renderer::{ChartRenderer, GaugeRenderer, Hover, HoverResolver, Padding, SparklineRenderer};
use pulse_theme::{Theme, ThemeSignal};
use pulse_widgets::{process, status, ChartPanel, GaugePanel, GAUGE_SIZE, SPARKLINE_SIZE};
use tracing::{debug, info, warn};

/// Outer padding of the page.
const PAGE_PADDING: f32 = 20.0;
/// Gap between the gauge column and the chart.
const PANEL_GAP: f32 = 24.0;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the dashboard window and block until it is closed.
pub fn run() -> iced::Result {
    let config = read_config();
    let size = Size::new(config.global.width, config.global.height);

    iced::application(Dashboard::new, Dashboard::update, Dashboard::view)
        .title(Dashboard::title)
        .subscription(Dashboard::subscription)
        .style(Dashboard::style)
        .window_size(size)
        .run()
}

fn read_config() -> PulseConfig {
    load_config(default_path()).unwrap_or_else(|e| {
        warn!("Using default config: {e}");
        PulseConfig::default()
    })
}

// ── Message ───────────────────────────────────────────────────────────────────

/// Top-level application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Propagate a core event-bus message.
    App(AppMessage),
    /// The data service was (re)spawned; keep its control handle.
    FeedReady(FeedHandle),
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Dashboard {
    config:          PulseConfig,
    theme:           Theme,
    signal:          ThemeSignal,
    ingestor:        TelemetryIngestor,
    gauge:           GaugeRenderer,
    sparkline:       SparklineRenderer,
    chart:           ChartRenderer,
    resolver:        HoverResolver,
    /// Hovered throughput sample and the pointer it came from.
    hover:           Option<(Hover, Point)>,
    feed:            Option<FeedHandle>,
    service_running: bool,
}

impl Dashboard {
    fn new() -> (Self, Task<Message>) {
        (Self::with_config(read_config()), Task::none())
    }

    fn with_config(config: PulseConfig) -> Self {
        let scale   = config.global.scale_factor;
        let padding = chart_padding(&config);
        let chart_layout = Size::new(
            config.global.width - 2.0 * PAGE_PADDING - GAUGE_SIZE.width - PANEL_GAP,
            config.chart.height,
        );

        let mut dashboard = Self {
            theme:           Theme::from_config(&config.theme),
            signal:          ThemeSignal::new(config.theme.mode),
            ingestor:        TelemetryIngestor::new(
                config.history.cpu_capacity,
                config.history.throughput_capacity,
            ),
            gauge:           GaugeRenderer::new(GAUGE_SIZE, scale),
            sparkline:       SparklineRenderer::new(SPARKLINE_SIZE, scale),
            chart:           ChartRenderer::new(chart_layout, scale, padding),
            resolver:        HoverResolver::new(padding),
            hover:           None,
            feed:            None,
            service_running: true,
            config,
        };

        let mode = dashboard.signal.read();
        dashboard.redraw_all(mode);
        dashboard
    }

    fn title(&self) -> String {
        String::from("pulse")
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::App(msg) => self.handle_app(msg),
            Message::FeedReady(handle) => {
                if !self.service_running {
                    handle.stop();
                }
                self.feed = Some(handle);
            }
        }
        Task::none()
    }

    fn handle_app(&mut self, msg: AppMessage) {
        let mode = self.signal.read();

        match msg {
            AppMessage::Telemetry(payload) => {
                match self.ingestor.ingest(payload.as_ref(), Local::now()) {
                    Ingested::Sample { gauge } => {
                        if let Some(value) = gauge {
                            self.gauge.set_value(value, mode);
                        }
                        self.redraw_series(mode);
                    }
                    // nothing changed; status chip picks up Offline from the ingestor
                    Ingested::Disconnected => {}
                }
            }
            AppMessage::ChartHovered { x, y } => {
                let samples = self.ingestor.throughput().snapshot();
                self.hover = self
                    .resolver
                    .resolve(x, self.chart.width(), &samples)
                    .map(|hover| (hover, Point::new(x, y)));
                let index = self.hover_index();
                self.chart.draw(&samples, index, mode);
            }
            AppMessage::ChartLeft => {
                self.hover = None;
                self.chart.draw(&self.ingestor.throughput().snapshot(), None, mode);
            }
            AppMessage::SurfaceResized(surface, width, height) => {
                self.resize(surface, Size::new(width, height), mode);
            }
            AppMessage::TogglePlayback => {
                let paused = self.ingestor.toggle_playback();
                info!(paused, "Playback toggled");
            }
            AppMessage::ToggleTheme => {
                let mode = self.signal.toggle();
                debug!(?mode, "Theme toggled");
                self.redraw_all(mode);
            }
            AppMessage::ToggleService => {
                self.service_running = !self.service_running;
                if let Some(feed) = &self.feed {
                    if self.service_running {
                        feed.start();
                    } else {
                        feed.stop();
                    }
                }
                self.ingestor.set_service_running(self.service_running);
            }
            AppMessage::ConfigReloaded => self.reload_config(),
        }
    }

    fn resize(&mut self, surface: SurfaceId, layout: Size, mode: ThemeMode) {
        let scale = self.config.global.scale_factor;
        debug!(?surface, width = layout.width, height = layout.height, "Surface resized");

        match surface {
            SurfaceId::Gauge => self.gauge.resize(layout, scale, mode),
            SurfaceId::Sparkline => {
                let samples = self.ingestor.cpu().snapshot();
                self.sparkline.resize(layout, scale, &samples, mode);
            }
            SurfaceId::Chart => {
                let samples = self.ingestor.throughput().snapshot();
                self.chart.resize(layout, scale, &samples, mode);
            }
        }
    }

    fn reload_config(&mut self) {
        let cfg = match load_config(default_path()) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Config reload failed: {e}");
                return;
            }
        };
        info!("Config reloaded");

        if cfg.theme.mode != self.config.theme.mode {
            self.signal.set(cfg.theme.mode);
        }
        if cfg.history != self.config.history {
            warn!("History capacities apply on next start");
        }

        let padding = chart_padding(&cfg);
        self.chart.set_padding(padding);
        self.resolver = HoverResolver::new(padding);
        self.theme  = Theme::from_config(&cfg.theme);
        self.config = cfg;

        let mode = self.signal.read();
        self.redraw_all(mode);
    }

    /// Redraw the history views from fresh snapshots.  A held hover is
    /// re-resolved against the new chart data.
    fn redraw_series(&mut self, mode: ThemeMode) {
        self.sparkline.draw(&self.ingestor.cpu().snapshot(), mode);

        let samples = self.ingestor.throughput().snapshot();
        if let Some((_, pointer)) = self.hover {
            self.hover = self
                .resolver
                .resolve(pointer.x, self.chart.width(), &samples)
                .map(|hover| (hover, pointer));
        }
        let index = self.hover_index();
        self.chart.draw(&samples, index, mode);
    }

    fn redraw_all(&mut self, mode: ThemeMode) {
        self.gauge.draw(mode);
        self.redraw_series(mode);
    }

    fn hover_index(&self) -> Option<usize> {
        self.hover.map(|(hover, _)| hover.index)
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let mode = self.signal.read();
        let font = self.theme.font_size;

        // ── Header: title · status · toggles ─────────────────────────────────
        let controls = row![
            status::view(
                self.ingestor.status(),
                self.ingestor.last_update(),
                font,
                self.theme.muted,
            ),
            button(text(theme_button_label(mode)).size(font))
                .on_press(AppMessage::ToggleTheme),
            button(text(service_button_label(self.service_running)).size(font))
                .on_press(AppMessage::ToggleService),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let header = row![
            text("CPU & Throughput").size(font + 5.0),
            container(controls).align_right(Length::Fill),
        ]
        .align_y(Alignment::Center);

        // ── Panels: gauge column · throughput chart ──────────────────────────
        let gauge = GaugePanel {
            gauge:     self.gauge.scene(),
            sparkline: self.sparkline.scene(),
            display:   self.ingestor.display(),
            stats:     self.ingestor.cpu_stats(),
            playback:  self.ingestor.playback(),
        }
        .view(&self.theme);

        let chart = ChartPanel {
            scene:  self.chart.scene(),
            latest: self.ingestor.throughput().last(),
            hover:  self.hover,
            height: self.config.chart.height,
        }
        .view(&self.theme);

        let panels = row![gauge, container(chart).width(Length::Fill)]
            .spacing(PANEL_GAP)
            .align_y(Alignment::Start);

        // ── Process table ────────────────────────────────────────────────────
        let processes = process::view(self.ingestor.processes(), font, self.theme.muted);

        let page = column![header, panels, processes]
            .spacing(20)
            .padding(PAGE_PADDING);

        Element::from(page).map(Message::App)
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            Subscription::run_with(self.config.feed.clone(), feed_stream),
            Subscription::run(config_stream),
            event::listen_with(space_toggle),
        ])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        let mode = self.signal.read();
        iced::theme::Style {
            background_color: self.theme.background(mode).to_iced(),
            text_color:       self.theme.foreground(mode).to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Spawns the data service for `config` and forwards its payloads in order.
///
/// Keyed on the feed config, so editing `[feed]` restarts the service.
fn feed_stream(config: &FeedConfig) -> impl iced::futures::Stream<Item = Message> {
    let config = config.clone();
    iced::stream::channel(16, move |mut sender: Sender<Message>| async move {
        let (handle, mut rx) = pulse_feed::spawn(&config);
        if sender.send(Message::FeedReady(handle)).await.is_err() {
            return;
        }

        while let Some(payload) = rx.recv().await {
            if sender
                .send(Message::App(AppMessage::Telemetry(payload)))
                .await
                .is_err()
            {
                return;
            }
        }

        // Finite source ended; its disconnect has been delivered.
        std::future::pending::<()>().await;
    })
}

/// Watches `~/.config/pulse/pulse.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            debug!(path = %watcher.path().display(), "Config change detected");
            let _ = sender.try_send(Message::App(AppMessage::ConfigReloaded));
        }

        std::future::pending::<()>().await;
    })
}

/// Space toggles playback unless a widget already consumed the key.
fn space_toggle(event: iced::Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match (event, status) {
        (
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Space),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::App(AppMessage::TogglePlayback)),
        _ => None,
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn chart_padding(config: &PulseConfig) -> Padding {
    Padding::new(config.chart.padding_left, config.chart.padding_right)
}

fn theme_button_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Dark Mode",
        ThemeMode::Dark  => "Light Mode",
    }
}

fn service_button_label(running: bool) -> &'static str {
    if running { "Stop Data" } else { "Start Data" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::{ConnectionStatus, Payload};

    fn dashboard() -> Dashboard {
        Dashboard::with_config(PulseConfig::default())
    }

    fn telemetry(cpu: f64, throughput: f64) -> Message {
        Message::App(AppMessage::Telemetry(Some(Payload {
            cpu:        Some(cpu),
            throughput: Some(throughput),
            processes:  Vec::new(),
        })))
    }

    #[test]
    fn telemetry_moves_gauge_and_history() {
        let mut d = dashboard();
        let _ = d.update(telemetry(42.0, 7.5));

        assert_eq!(d.gauge.value(), 42.0);
        assert_eq!(d.ingestor.display().label, "42%");
        assert_eq!(d.ingestor.throughput().last(), Some(7.5));
        assert_eq!(d.ingestor.status(), ConnectionStatus::Online);
    }

    #[test]
    fn paused_gauge_keeps_value_while_history_grows() {
        let mut d = dashboard();
        let _ = d.update(telemetry(10.0, 1.0));
        let _ = d.update(Message::App(AppMessage::TogglePlayback));
        let _ = d.update(telemetry(90.0, 2.0));

        assert_eq!(d.gauge.value(), 10.0);
        assert_eq!(d.ingestor.cpu().len(), 2);
    }

    #[test]
    fn hover_follows_pointer_and_clears_on_leave() {
        let mut d = dashboard();
        for v in [1.0, 2.0, 3.0] {
            let _ = d.update(telemetry(5.0, v));
        }

        let x = d.chart.width() - d.chart.padding().right;
        let _ = d.update(Message::App(AppMessage::ChartHovered { x, y: 10.0 }));
        assert_eq!(d.hover.map(|(h, _)| h.index), Some(2));
        assert_eq!(d.chart.hover_index(), Some(2));

        let _ = d.update(Message::App(AppMessage::ChartLeft));
        assert!(d.hover.is_none());
        assert_eq!(d.chart.hover_index(), None);
    }

    #[test]
    fn hover_on_empty_chart_is_ignored() {
        let mut d = dashboard();
        let _ = d.update(Message::App(AppMessage::ChartHovered { x: 50.0, y: 10.0 }));
        assert!(d.hover.is_none());
    }

    #[test]
    fn theme_toggle_flips_signal() {
        let mut d = dashboard();
        assert_eq!(d.signal.read(), ThemeMode::Light);
        let _ = d.update(Message::App(AppMessage::ToggleTheme));
        assert_eq!(d.signal.read(), ThemeMode::Dark);
        assert_eq!(theme_button_label(d.signal.read()), "Light Mode");
    }

    #[test]
    fn service_toggle_sets_status() {
        let mut d = dashboard();
        let _ = d.update(Message::App(AppMessage::ToggleService));
        assert!(!d.service_running);
        assert_eq!(d.ingestor.status(), ConnectionStatus::Stopped);
        assert_eq!(service_button_label(d.service_running), "Start Data");

        let _ = d.update(Message::App(AppMessage::ToggleService));
        assert_eq!(d.ingestor.status(), ConnectionStatus::Connecting);
    }

    #[test]
    fn resize_updates_chart_width() {
        let mut d = dashboard();
        let _ = d.update(Message::App(AppMessage::SurfaceResized(SurfaceId::Chart, 500.0, 180.0)));
        assert_eq!(d.chart.width(), 500.0);
    }
}
