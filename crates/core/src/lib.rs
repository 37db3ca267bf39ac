pub mod error;
pub mod event;
pub mod ingest;
pub mod playback;
pub mod series;
pub mod state;

pub use error::{PulseError, Result};
pub use event::{Message, SurfaceId};
pub use ingest::{Ingested, TelemetryIngestor};
pub use playback::{PlaybackController, PlaybackState};
pub use series::{BoundedSeries, Stats};
pub use state::{ConnectionStatus, DisplayState, Payload, ProcessInfo, ThemeMode};
