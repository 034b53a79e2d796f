//! Source arbitration and dataset production for the histogram sampler.
//!
//! The arbiter diffs observed trigger counters against a stored last-seen
//! record and recomputes the dataset from the single source that changed,
//! with fixed branch priority. The generators and the file reader are the
//! three dataset producers behind those branches.

pub mod arbiter;
pub mod sources;
pub mod table;

pub use arbiter::arbitrate;
