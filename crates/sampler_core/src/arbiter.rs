//! Trigger diffing and branch selection across the three data sources.

use rand::Rng;
use shared::{
    domain::{Dataset, FileSpec, SourceKind, TriggerCounts},
    error::FileParseError,
};
use tracing::{debug, trace};

use crate::{sources, table};

/// Compares the observed trigger counters against the stored last-seen
/// record and recomputes the dataset from the source that changed.
///
/// Branch priority is fixed, first match wins: normal, then poisson, then
/// file load. Exactly one stored counter is updated per invocation, even if
/// several observed counters differ. When nothing changed, `Ok(None)` is
/// returned and the caller leaves its current dataset alone.
pub fn arbitrate<R: Rng + ?Sized>(
    observed: &TriggerCounts,
    stored: &mut TriggerCounts,
    file: Option<&FileSpec>,
    rng: &mut R,
) -> Result<Option<Dataset>, FileParseError> {
    if observed.normal != stored.normal {
        debug!(
            observed = observed.normal,
            stored = stored.normal,
            "normal generator fired"
        );
        stored.normal = observed.normal;
        return Ok(Some(Dataset {
            kind: SourceKind::Normal,
            values: sources::normal_samples(rng, sources::SAMPLE_COUNT),
        }));
    }

    if observed.poisson != stored.poisson {
        debug!(
            observed = observed.poisson,
            stored = stored.poisson,
            "poisson generator fired"
        );
        stored.poisson = observed.poisson;
        return Ok(Some(Dataset {
            kind: SourceKind::Poisson,
            values: sources::poisson_samples(rng, sources::SAMPLE_COUNT),
        }));
    }

    if observed.file_load != stored.file_load {
        debug!(
            observed = observed.file_load,
            stored = stored.file_load,
            "file load fired"
        );
        // Consume the trigger before parsing so a malformed file does not
        // re-fire on every later invocation.
        stored.file_load = observed.file_load;
        let spec = file.ok_or(FileParseError::NoSelection)?;
        let values = table::read_numeric_column(spec)?;
        return Ok(Some(Dataset {
            kind: SourceKind::FileLoad,
            values,
        }));
    }

    trace!("no trigger changed; dataset left unchanged");
    Ok(None)
}

#[cfg(test)]
#[path = "tests/arbiter_tests.rs"]
mod tests;
