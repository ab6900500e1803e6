use thiserror::Error;

#[derive(Error, Clone, Debug)]
pub enum DiffError {
    #[error("Malformed package record #{index} ({name}): missing field '{field}'")]
    MalformedRecord {
        index: usize,
        name: String,
        field: &'static str,
    },
    #[error("Comparison task failed: {0}")]
    TaskFailure(String),
}
