use crate::playback::{PlaybackController, PlaybackState};
use crate::series::{BoundedSeries, Stats};
use crate::state::{ConnectionStatus, DisplayState, Payload, ProcessInfo};
use chrono::{DateTime, Local};

/// History window of the CPU gauge's sparkline.
pub const CPU_HISTORY_CAPACITY: usize = 120;
/// History window of the throughput chart.
pub const THROUGHPUT_HISTORY_CAPACITY: usize = 60;

/// What a single payload changed, so the caller knows which surfaces to redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ingested {
    /// Series were updated.  `gauge` carries the value to forward to the gauge
    /// renderer, or `None` when playback is paused.
    Sample { gauge: Option<f64> },
    /// The feed signalled a disconnect.  Nothing but the status changed.
    Disconnected,
}

/// Single writer of the dashboard's history buffers.
///
/// Receives payloads in arrival order and processes each one to completion:
/// push both series, recompute statistics, consult the playback gate, update
/// the display state.  Renderers only ever see snapshots.
#[derive(Debug, Clone)]
pub struct TelemetryIngestor {
    cpu:         BoundedSeries,
    throughput:  BoundedSeries,
    cpu_stats:   Option<Stats>,
    playback:    PlaybackController,
    display:     DisplayState,
    status:      ConnectionStatus,
    last_update: Option<DateTime<Local>>,
    processes:   Vec<ProcessInfo>,
}

impl Default for TelemetryIngestor {
    fn default() -> Self {
        Self::new(CPU_HISTORY_CAPACITY, THROUGHPUT_HISTORY_CAPACITY)
    }
}

impl TelemetryIngestor {
    pub fn new(cpu_capacity: usize, throughput_capacity: usize) -> Self {
        Self {
            cpu:         BoundedSeries::new(cpu_capacity),
            throughput:  BoundedSeries::new(throughput_capacity),
            cpu_stats:   None,
            playback:    PlaybackController::new(),
            display:     DisplayState::default(),
            status:      ConnectionStatus::default(),
            last_update: None,
            processes:   Vec::new(),
        }
    }

    /// Apply one feed delivery.  `None` means the feed disconnected.
    pub fn ingest(&mut self, payload: Option<&Payload>, now: DateTime<Local>) -> Ingested {
        let Some(payload) = payload else {
            if self.status != ConnectionStatus::Offline {
                tracing::warn!("Telemetry feed disconnected; keeping history");
            }
            self.status = ConnectionStatus::Offline;
            return Ingested::Disconnected;
        };

        self.status = ConnectionStatus::Online;

        let cpu = payload.cpu_or_zero();
        self.cpu.push(cpu);
        self.cpu_stats = self.cpu.stats();

        let gauge = if self.playback.admits_gauge() {
            self.display.show(cpu);
            Some(self.display.gauge_value)
        } else {
            None
        };

        self.throughput.push(payload.throughput_or_zero());
        self.processes = payload.processes.clone();
        self.last_update = Some(now);

        Ingested::Sample { gauge }
    }

    /// Flip the playback gate.  Returns `true` when now paused.
    pub fn toggle_playback(&mut self) -> bool {
        self.playback.toggle() == PlaybackState::Paused
    }

    /// Reflect a user start/stop of the data service in the status.
    pub fn set_service_running(&mut self, running: bool) {
        self.status = if running {
            ConnectionStatus::Connecting
        } else {
            ConnectionStatus::Stopped
        };
    }

    pub fn cpu(&self) -> &BoundedSeries {
        &self.cpu
    }

    pub fn throughput(&self) -> &BoundedSeries {
        &self.throughput
    }

    pub fn cpu_stats(&self) -> Option<Stats> {
        self.cpu_stats
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn last_update(&self) -> Option<DateTime<Local>> {
        self.last_update
    }

    pub fn processes(&self) -> &[ProcessInfo] {
        &self.processes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(cpu: f64, throughput: f64) -> Payload {
        Payload {
            cpu: Some(cpu),
            throughput: Some(throughput),
            ..Payload::default()
        }
    }

    #[test]
    fn pause_freezes_gauge_but_not_history() {
        let mut ingestor = TelemetryIngestor::default();
        let mut visible = Vec::new();

        for (i, v) in [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().enumerate() {
            ingestor.ingest(Some(&payload(v, v)), Local::now());
            visible.push(ingestor.display().gauge_value);
            // pause after v2, resume after v4
            if i == 1 || i == 3 {
                ingestor.toggle_playback();
            }
        }

        assert_eq!(visible, vec![1.0, 2.0, 2.0, 2.0, 5.0]);
        assert_eq!(&*ingestor.cpu().snapshot(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(ingestor.cpu_stats().map(|s| s.max), Some(5.0));
    }

    #[test]
    fn paused_ingest_reports_no_gauge_value() {
        let mut ingestor = TelemetryIngestor::default();
        ingestor.toggle_playback();
        let result = ingestor.ingest(Some(&payload(40.0, 0.0)), Local::now());
        assert_eq!(result, Ingested::Sample { gauge: None });
        assert_eq!(ingestor.display().label, "0%");
    }

    #[test]
    fn missing_fields_push_zero() {
        let mut ingestor = TelemetryIngestor::default();
        ingestor.ingest(Some(&Payload::default()), Local::now());
        assert_eq!(&*ingestor.cpu().snapshot(), &[0.0]);
        assert_eq!(&*ingestor.throughput().snapshot(), &[0.0]);
    }

    #[test]
    fn disconnect_preserves_series_and_stats() {
        let mut ingestor = TelemetryIngestor::default();
        let now = Local::now();
        for v in [10.0, 20.0, 30.0] {
            ingestor.ingest(Some(&payload(v, v * 2.0)), now);
        }
        let cpu_before = ingestor.cpu().snapshot();
        let tp_before  = ingestor.throughput().snapshot();
        let stats      = ingestor.cpu_stats();
        let display    = ingestor.display().clone();

        let result = ingestor.ingest(None, Local::now());

        assert_eq!(result, Ingested::Disconnected);
        assert_eq!(ingestor.status(), ConnectionStatus::Offline);
        assert_eq!(ingestor.cpu().snapshot(), cpu_before);
        assert_eq!(ingestor.throughput().snapshot(), tp_before);
        assert_eq!(ingestor.cpu_stats(), stats);
        assert_eq!(ingestor.display(), &display);
        assert_eq!(ingestor.last_update(), Some(now));
    }

    #[test]
    fn payload_after_disconnect_goes_back_online() {
        let mut ingestor = TelemetryIngestor::default();
        ingestor.ingest(None, Local::now());
        ingestor.ingest(Some(&payload(1.0, 1.0)), Local::now());
        assert_eq!(ingestor.status(), ConnectionStatus::Online);
    }

    #[test]
    fn series_respect_their_capacities() {
        let mut ingestor = TelemetryIngestor::new(3, 2);
        for v in 0..10 {
            ingestor.ingest(Some(&payload(v as f64, v as f64)), Local::now());
        }
        assert_eq!(&*ingestor.cpu().snapshot(), &[7.0, 8.0, 9.0]);
        assert_eq!(&*ingestor.throughput().snapshot(), &[8.0, 9.0]);
    }

    #[test]
    fn service_toggle_sets_status() {
        let mut ingestor = TelemetryIngestor::default();
        ingestor.set_service_running(false);
        assert_eq!(ingestor.status(), ConnectionStatus::Stopped);
        ingestor.set_service_running(true);
        assert_eq!(ingestor.status(), ConnectionStatus::Connecting);
    }
}
