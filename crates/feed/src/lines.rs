use pulse_core::{Payload, PulseError, Result};
use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Outcome of one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Payload(Payload),
    /// A literal `null`: the upstream signalled a disconnect.
    Disconnect,
    /// Blank or unparseable; nothing to deliver.
    Skip,
}

/// Interpret one line of JSON-lines input.
pub fn parse_line(line: &str) -> Line {
    let line = line.trim();
    if line.is_empty() {
        return Line::Skip;
    }

    match decode(line) {
        Ok(Some(payload)) => Line::Payload(payload),
        Ok(None) => Line::Disconnect,
        Err(e) => {
            warn!("Skipping line: {e}");
            Line::Skip
        }
    }
}

/// Decode one JSON value: an object payload or `null`.
///
/// Any other JSON shape is rejected, even though the payload fields could be
/// read positionally from an array.
pub fn decode(line: &str) -> Result<Option<Payload>> {
    let malformed = |e: serde_json::Error| PulseError::Feed(format!("malformed payload: {e}"));

    match serde_json::from_str::<Value>(line).map_err(malformed)? {
        Value::Null => Ok(None),
        value @ Value::Object(_) => Payload::deserialize(value).map(Some).map_err(malformed),
        other => Err(PulseError::Feed(format!("payload must be an object, got {other}"))),
    }
}

/// Forward payloads read line by line from `reader`.
///
/// End of input is delivered as a final disconnect.  While the service is
/// stopped nothing is read, so the writer sees backpressure.
pub async fn run<R>(reader: R, tx: mpsc::Sender<Option<Payload>>, mut running: watch::Receiver<bool>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        if !crate::wait_running(&mut running).await {
            break;
        }

        let item = match lines.next_line().await {
            Ok(Some(line)) => match parse_line(&line) {
                Line::Payload(payload) => Some(payload),
                Line::Disconnect => None,
                Line::Skip => continue,
            },
            Ok(None) => {
                info!("Telemetry input closed");
                let _ = tx.send(None).await;
                break;
            }
            Err(e) => {
                warn!("Telemetry input error: {}", PulseError::from(e));
                let _ = tx.send(None).await;
                break;
            }
        };

        if tx.send(item).await.is_err() {
            debug!("Payload receiver dropped; stopping reader");
            break;
        }
    }
}
