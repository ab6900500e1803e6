/// Execution strategy for one diff call, chosen once and never resized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionPlan {
    Sequential,
    Parallel(usize),
}

// Below this many records (both lists summed) parallel dispatch is not
// worth the pool setup. The boundary itself stays sequential.
const PARALLEL_THRESHOLD: usize = 1_600_000;
// On a dual-core machine two workers only pay off from here on (inclusive)
const DUAL_CORE_THRESHOLD: usize = 2_100_000;

pub fn plan(size1: usize, size2: usize, cores: usize) -> ExecutionPlan {
    let total = size1 + size2;
    if total > PARALLEL_THRESHOLD {
        if cores == 2 {
            if total >= DUAL_CORE_THRESHOLD {
                return ExecutionPlan::Parallel(2);
            }
        } else if cores > 2 {
            return ExecutionPlan::Parallel(3);
        }
    }

    ExecutionPlan::Sequential
}

pub fn available_cores() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
