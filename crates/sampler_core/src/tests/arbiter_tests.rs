use std::{
    env, fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use rand::{rngs::StdRng, SeedableRng};
use shared::{
    domain::{FileSpec, SourceKind, TriggerCounts},
    error::FileParseError,
};

use super::arbitrate;
use crate::sources::SAMPLE_COUNT;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn scratch_file(tag: &str, contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("sampler_core_arbiter_{tag}_{suffix}.csv"));
    fs::write(&path, contents).expect("write scratch file");
    path
}

#[test]
fn fires_normal_branch_and_updates_only_that_counter() {
    let observed = TriggerCounts {
        normal: 1,
        ..Default::default()
    };
    let mut stored = TriggerCounts::default();

    let dataset = arbitrate(&observed, &mut stored, None, &mut rng())
        .expect("generation is infallible")
        .expect("changed counter produces a dataset");

    assert_eq!(dataset.kind, SourceKind::Normal);
    assert_eq!(dataset.values.len(), SAMPLE_COUNT);
    assert_eq!(stored, observed);
}

#[test]
fn fires_poisson_branch_when_only_poisson_changed() {
    let observed = TriggerCounts {
        poisson: 3,
        ..Default::default()
    };
    let mut stored = TriggerCounts::default();

    let dataset = arbitrate(&observed, &mut stored, None, &mut rng())
        .expect("generation is infallible")
        .expect("changed counter produces a dataset");

    assert_eq!(dataset.kind, SourceKind::Poisson);
    assert_eq!(dataset.values.len(), SAMPLE_COUNT);
    assert_eq!(stored.poisson, 3);
    assert_eq!(stored.normal, 0);
    assert_eq!(stored.file_load, 0);
}

#[test]
fn normal_outranks_simultaneous_poisson_change() {
    // Simulated out-of-order delivery: both generator counters moved between
    // two invocations. The first invocation must resolve to the normal
    // branch only; the poisson change is picked up on the next one.
    let observed = TriggerCounts {
        normal: 1,
        poisson: 1,
        ..Default::default()
    };
    let mut stored = TriggerCounts::default();
    let mut rng = rng();

    let first = arbitrate(&observed, &mut stored, None, &mut rng)
        .expect("generation is infallible")
        .expect("dataset");
    assert_eq!(first.kind, SourceKind::Normal);
    assert_eq!(stored.normal, 1);
    assert_eq!(stored.poisson, 0);

    let second = arbitrate(&observed, &mut stored, None, &mut rng)
        .expect("generation is infallible")
        .expect("dataset");
    assert_eq!(second.kind, SourceKind::Poisson);
    assert_eq!(stored, observed);
}

#[test]
fn unchanged_counters_yield_empty_result() {
    let observed = TriggerCounts::default();
    let mut stored = TriggerCounts::default();

    let result = arbitrate(&observed, &mut stored, None, &mut rng())
        .expect("no branch fires, so no error");
    assert!(result.is_none());
    assert_eq!(stored, TriggerCounts::default());
}

#[test]
fn file_branch_parses_selected_file() {
    let path = scratch_file("ok", "1.5\n2.5\n-3\n");
    let spec = FileSpec {
        path: path.clone(),
        has_header: false,
    };
    let observed = TriggerCounts {
        file_load: 1,
        ..Default::default()
    };
    let mut stored = TriggerCounts::default();

    let dataset = arbitrate(&observed, &mut stored, Some(&spec), &mut rng())
        .expect("well-formed file")
        .expect("changed counter produces a dataset");

    assert_eq!(dataset.kind, SourceKind::FileLoad);
    assert_eq!(dataset.values, vec![1.5, 2.5, -3.0]);
    assert_eq!(stored.file_load, 1);

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn file_branch_without_selection_reports_no_selection() {
    let observed = TriggerCounts {
        file_load: 1,
        ..Default::default()
    };
    let mut stored = TriggerCounts::default();

    let err = arbitrate(&observed, &mut stored, None, &mut rng())
        .expect_err("no selection to load");
    assert!(matches!(err, FileParseError::NoSelection));
}

#[test]
fn failed_parse_consumes_the_trigger() {
    let path = scratch_file("bad", "1.0\nnot-a-number\n");
    let spec = FileSpec {
        path: path.clone(),
        has_header: false,
    };
    let observed = TriggerCounts {
        file_load: 1,
        ..Default::default()
    };
    let mut stored = TriggerCounts::default();
    let mut rng = rng();

    let err = arbitrate(&observed, &mut stored, Some(&spec), &mut rng)
        .expect_err("malformed file");
    assert!(matches!(err, FileParseError::NotNumeric { .. }));
    assert_eq!(stored.file_load, 1);

    // The trigger was consumed: the same observed counts no longer re-fire
    // the failing load.
    let retry = arbitrate(&observed, &mut stored, Some(&spec), &mut rng)
        .expect("nothing left to fire");
    assert!(retry.is_none());

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn reselecting_after_reset_refires_file_branch() {
    let path = scratch_file("refire", "7\n8\n9\n");
    let spec = FileSpec {
        path: path.clone(),
        has_header: false,
    };
    let mut observed = TriggerCounts {
        file_load: 1,
        ..Default::default()
    };
    let mut stored = TriggerCounts::default();
    let mut rng = rng();

    let first = arbitrate(&observed, &mut stored, Some(&spec), &mut rng)
        .expect("well-formed file")
        .expect("dataset");
    assert_eq!(first.kind, SourceKind::FileLoad);

    // Reset then re-select the identical filename: the presence counter
    // increments, so the branch fires again even though nothing about the
    // file itself changed.
    observed.bump(SourceKind::FileLoad);
    let second = arbitrate(&observed, &mut stored, Some(&spec), &mut rng)
        .expect("well-formed file")
        .expect("dataset");
    assert_eq!(second.kind, SourceKind::FileLoad);
    assert_eq!(second.values, vec![7.0, 8.0, 9.0]);
    assert_eq!(stored.file_load, 2);

    fs::remove_file(path).expect("cleanup");
}
