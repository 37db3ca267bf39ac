use pulse_core::ThemeMode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Process-wide light/dark indicator.
///
/// Renderers never consult it directly: the event loop reads it once per
/// update and passes the resulting [`ThemeMode`] into each draw call.
#[derive(Debug, Clone, Default)]
pub struct ThemeSignal {
    dark: Arc<AtomicBool>,
}

impl ThemeSignal {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            dark: Arc::new(AtomicBool::new(mode.is_dark())),
        }
    }

    pub fn read(&self) -> ThemeMode {
        if self.dark.load(Ordering::Acquire) {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn set(&self, mode: ThemeMode) {
        self.dark.store(mode.is_dark(), Ordering::Release);
    }

    /// Flip the mode and return the new one.
    pub fn toggle(&self) -> ThemeMode {
        let was_dark = self.dark.fetch_xor(true, Ordering::AcqRel);
        if was_dark {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let signal = ThemeSignal::new(ThemeMode::Light);
        let reader = signal.clone();
        assert_eq!(signal.toggle(), ThemeMode::Dark);
        assert_eq!(reader.read(), ThemeMode::Dark);
        reader.set(ThemeMode::Light);
        assert_eq!(signal.read(), ThemeMode::Light);
    }
}
