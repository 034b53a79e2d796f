//! Arbiter worker: owns the stored trigger record and serializes
//! invocations one command at a time.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use sampler_core::arbitrate;
use shared::domain::TriggerCounts;
use tracing::{debug, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || run(cmd_rx, ui_tx));
}

fn run(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    // Session state: initialized once at startup, dropped with the session.
    let mut stored = TriggerCounts::default();
    let mut rng = rand::rng();
    info!("arbiter worker started");

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::SyncSources { observed, file } => {
                match arbitrate(&observed, &mut stored, file.as_ref(), &mut rng) {
                    Ok(Some(dataset)) => {
                        debug!(
                            source = ?dataset.kind,
                            samples = dataset.values.len(),
                            "dataset recomputed"
                        );
                        let _ = ui_tx.try_send(UiEvent::DatasetReady(dataset));
                    }
                    Ok(None) => {
                        debug!("no source changed; dataset left as-is");
                    }
                    Err(err) => {
                        warn!(%err, "file load failed");
                        let _ = ui_tx
                            .try_send(UiEvent::Error(UiError::from_parse_error(&err)));
                    }
                }
            }
        }
    }

    info!("arbiter worker stopped (command queue closed)");
}
