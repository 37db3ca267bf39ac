/// The two states of the gauge playback gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Live,
    Paused,
}

/// Pause/resume gate for the gauge and its center label.
///
/// Only the gauge is gated.  History capture and statistics are handled
/// upstream by the ingestor and keep running while paused.  There is no
/// auto-resume: [`toggle`](Self::toggle) is the only transition.
#[derive(Debug, Clone, Default)]
pub struct PlaybackController {
    state: PlaybackState,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between `Live` and `Paused`, returning the new state.
    pub fn toggle(&mut self) -> PlaybackState {
        self.state = match self.state {
            PlaybackState::Live   => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Live,
        };
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Paused
    }

    /// Whether an incoming payload may update the gauge.
    pub fn admits_gauge(&self) -> bool {
        self.state == PlaybackState::Live
    }

    /// Label for the pause/resume control.
    pub fn action_label(&self) -> &'static str {
        match self.state {
            PlaybackState::Live   => "Pause",
            PlaybackState::Paused => "Resume",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_live() {
        let playback = PlaybackController::new();
        assert!(playback.admits_gauge());
        assert_eq!(playback.action_label(), "Pause");
    }

    #[test]
    fn toggle_flips_and_flips_back() {
        let mut playback = PlaybackController::new();
        assert_eq!(playback.toggle(), PlaybackState::Paused);
        assert!(!playback.admits_gauge());
        assert_eq!(playback.action_label(), "Resume");
        assert_eq!(playback.toggle(), PlaybackState::Live);
        assert!(playback.admits_gauge());
    }
}
