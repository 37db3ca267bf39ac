use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Watches `pulse.toml` and fires a notification whenever it is written.
///
/// The parent directory is watched rather than the file itself: editors that
/// save by renaming a temp file over the original would otherwise detach the
/// watch after the first save.  Bursts of events collapse into one pending
/// notification.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// use pulse_config::ConfigWatcher;
/// let (_watcher, mut rx) = ConfigWatcher::spawn("/home/user/.config/pulse/pulse.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed, reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path` on the current Tokio runtime.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    let Some(dir) = path.parent().map(Path::to_path_buf) else {
        error!("Config path '{}' has no parent directory", path.display());
        return;
    };

    let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = event_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        warn!("Config directory '{}' not watchable: {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = event_rx.recv().await {
        match event {
            Ok(e) if touches_config(&e, &path) => {
                debug!(kind = ?e.kind, "Config file event");
                match tx.try_send(()) {
                    Ok(()) | Err(mpsc::error::TrySendError::Full(())) => {}
                    Err(mpsc::error::TrySendError::Closed(())) => break,
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

/// Whether a filesystem event is a write/create affecting the config file.
fn touches_config(event: &notify::Event, path: &Path) -> bool {
    use notify::EventKind::{Create, Modify};

    matches!(event.kind, Modify(_) | Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some() && p.file_name() == path.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, EventKind, ModifyKind, RemoveKind};

    fn event(kind: EventKind, path: &str) -> notify::Event {
        notify::Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn write_to_config_counts() {
        let cfg = Path::new("/tmp/pulse/pulse.toml");
        let e = event(EventKind::Modify(ModifyKind::Any), "/tmp/pulse/pulse.toml");
        assert!(touches_config(&e, cfg));
    }

    #[test]
    fn sibling_files_are_ignored() {
        let cfg = Path::new("/tmp/pulse/pulse.toml");
        let e = event(EventKind::Create(CreateKind::File), "/tmp/pulse/.pulse.toml.swp");
        assert!(!touches_config(&e, cfg));
    }

    #[test]
    fn removal_is_ignored() {
        let cfg = Path::new("/tmp/pulse/pulse.toml");
        let e = event(EventKind::Remove(RemoveKind::File), "/tmp/pulse/pulse.toml");
        assert!(!touches_config(&e, cfg));
    }
}
