use pulse_config::FeedConfig;
use pulse_core::{Payload, ProcessInfo};
use std::time::{Duration, Instant};
use sysinfo::{Networks, System};
use tokio::sync::{mpsc, watch};
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

/// Samples the local machine: global CPU usage, network throughput and the
/// busiest processes.
pub struct SystemSampler {
    sys:           System,
    networks:      Networks,
    last:          Instant,
    process_count: usize,
}

impl SystemSampler {
    pub fn new(process_count: usize) -> Self {
        Self {
            sys:      System::new_all(),
            networks: Networks::new_with_refreshed_list(),
            last:     Instant::now(),
            process_count,
        }
    }

    /// Drop the network deltas accumulated so far, e.g. after a stop.
    pub fn reset(&mut self) {
        self.networks.refresh(false);
        self.last = Instant::now();
    }

    pub fn sample(&mut self) -> Payload {
        self.sys.refresh_all();
        self.networks.refresh(false); // false = keep existing interfaces list

        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f64();
        self.last = now;

        // `received()` / `transmitted()` are deltas since the last refresh.
        let bytes: u64 = self
            .networks
            .iter()
            .map(|(_, d)| d.received() + d.transmitted())
            .sum();

        Payload {
            cpu:        Some(f64::from(self.sys.global_cpu_usage())),
            throughput: Some(kilobytes_per_second(bytes, elapsed)),
            processes:  self.top_processes(),
        }
    }

    fn top_processes(&self) -> Vec<ProcessInfo> {
        let mut procs: Vec<ProcessInfo> = self
            .sys
            .processes()
            .values()
            .map(|p| ProcessInfo {
                name:   Some(p.name().to_string_lossy().into_owned()),
                cpu:    Some(f64::from(p.cpu_usage())),
                mem:    Some(p.memory()),
                status: Some(p.status().to_string()),
            })
            .collect();

        procs.sort_by(|a, b| {
            b.cpu
                .unwrap_or(0.0)
                .total_cmp(&a.cpu.unwrap_or(0.0))
        });
        procs.truncate(self.process_count);
        procs
    }
}

/// Byte delta over `elapsed` seconds as KB/s, one decimal place.
fn kilobytes_per_second(bytes: u64, elapsed: f64) -> f64 {
    if elapsed <= 0.0 {
        return 0.0;
    }
    let kb = bytes as f64 / 1_000.0 / elapsed;
    (kb * 10.0).round() / 10.0
}

/// Poll the machine every `interval_ms` while the service is running.
pub async fn run(
    config: FeedConfig,
    tx: mpsc::Sender<Option<Payload>>,
    mut running: watch::Receiver<bool>,
) {
    let mut sampler = SystemSampler::new(config.process_count);
    let mut ticker  = time::interval(Duration::from_millis(config.interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        if !*running.borrow_and_update() {
            if !crate::wait_running(&mut running).await {
                break;
            }
            sampler.reset();
            ticker.reset();
            continue;
        }

        tokio::select! {
            _ = ticker.tick() => {
                let payload = sampler.sample();
                debug!(cpu = ?payload.cpu, throughput = ?payload.throughput, "System sample");
                if tx.send(Some(payload)).await.is_err() {
                    break; // all receivers dropped
                }
            }
            changed = running.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_uses_elapsed_time() {
        assert_eq!(kilobytes_per_second(4_000, 2.0), 2.0);
        assert_eq!(kilobytes_per_second(1_234, 1.0), 1.2);
    }

    #[test]
    fn zero_elapsed_is_zero_rate() {
        assert_eq!(kilobytes_per_second(10_000, 0.0), 0.0);
    }
}
