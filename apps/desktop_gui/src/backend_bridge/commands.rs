//! Backend commands queued from UI to the arbiter worker.

use shared::domain::{FileSpec, TriggerCounts};

pub enum BackendCommand {
    /// Ship the UI's current observed trigger counters, plus the pending
    /// file selection if any, to the worker for arbitration.
    SyncSources {
        observed: TriggerCounts,
        file: Option<FileSpec>,
    },
}
