mod error;
mod index;
mod plan;

pub use error::DiffError;
pub use index::PackageIndex;
pub use plan::ExecutionPlan;

use crate::types::{compare_version_release, key_name_arch, KeyFn, PackageRecord};

use anyhow::Result;
use std::panic::{self, AssertUnwindSafe};

/// The three diff partitions. Each preserves its source list's original
/// order (stable filter, not sorted).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffResult {
    pub only_in_first: Vec<PackageRecord>,
    pub only_in_second: Vec<PackageRecord>,
    pub newer_in_second: Vec<PackageRecord>,
}

/// Compare two branch package lists, choosing sequential or parallel
/// dispatch from the input sizes and the machine's core count.
pub fn diff(first: &[PackageRecord], second: &[PackageRecord]) -> Result<DiffResult> {
    let plan = plan::plan(first.len(), second.len(), plan::available_cores());
    diff_with_plan(first, second, plan)
}

pub fn diff_with_plan(
    first: &[PackageRecord],
    second: &[PackageRecord],
    plan: ExecutionPlan,
) -> Result<DiffResult> {
    match plan {
        ExecutionPlan::Sequential => Ok(diff_sequential(first, second, key_name_arch)),
        ExecutionPlan::Parallel(workers) => diff_parallel(first, second, key_name_arch, workers),
    }
}

fn diff_sequential(
    first: &[PackageRecord],
    second: &[PackageRecord],
    key: KeyFn,
) -> DiffResult {
    DiffResult {
        only_in_first: only_in(first, second, key),
        only_in_second: only_in(second, first, key),
        newer_in_second: newer_in_second(first, second, key),
    }
}

/// Run the three independent partitions on a fixed-size pool and block
/// until all of them finish. Results are recombined by task identity, so
/// output ordering does not depend on completion order. A panicking task
/// aborts the whole call; there is no partial-result path.
fn diff_parallel(
    first: &[PackageRecord],
    second: &[PackageRecord],
    key: KeyFn,
    workers: usize,
) -> Result<DiffResult> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| DiffError::TaskFailure(e.to_string()))?;

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pool.install(|| {
            rayon::join(
                || only_in(first, second, key),
                || {
                    rayon::join(
                        || only_in(second, first, key),
                        || newer_in_second(first, second, key),
                    )
                },
            )
        })
    }));

    match outcome {
        Ok((only_in_first, (only_in_second, newer_in_second))) => Ok(DiffResult {
            only_in_first,
            only_in_second,
            newer_in_second,
        }),
        Err(_) => Err(DiffError::TaskFailure("comparison task panicked".to_string()).into()),
    }
}

/// Records in `records` whose key does not occur in `other`.
fn only_in(records: &[PackageRecord], other: &[PackageRecord], key: KeyFn) -> Vec<PackageRecord> {
    let index = PackageIndex::build(other, key);
    records
        .iter()
        .filter(|pkg| !index.contains(&key(pkg)))
        .cloned()
        .collect()
}

/// Records in `second` that exist in `first` under the same key but carry
/// a strictly newer epoch/version/release.
fn newer_in_second(
    first: &[PackageRecord],
    second: &[PackageRecord],
    key: KeyFn,
) -> Vec<PackageRecord> {
    let index = PackageIndex::build(first, key);
    second
        .iter()
        .filter(|pkg| match index.get(&key(pkg)) {
            // A strictly newer version counts on its own; an equal version
            // (the walk ranks both sides newer-or-equal) defers to the
            // release walk, where equality is no update
            Some(base) => {
                pkg.epoch >= base.epoch
                    && compare_version_release(&pkg.version, &base.version, false)
                    && (compare_version_release(&pkg.release, &base.release, true)
                        || !compare_version_release(&base.version, &pkg.version, false))
            }
            None => false,
        })
        .cloned()
        .collect()
}
