use crate::types::{KeyFn, PackageRecord, PkgKey};

use std::collections::HashMap;

/// Epoch/version/release of the first record seen for a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    pub epoch: i64,
    pub version: String,
    pub release: String,
}

/// Per-branch lookup keyed by (name, arch).
///
/// The first occurrence of a key is retained; later records sharing that
/// key are silently dropped, even if they carry a newer version. This
/// matches the output of earlier releases of the tool and is deliberately
/// not resolved by recency.
pub struct PackageIndex {
    entries: HashMap<PkgKey, IndexEntry>,
}

impl PackageIndex {
    pub fn build(records: &[PackageRecord], key: KeyFn) -> Self {
        let mut entries = HashMap::with_capacity(records.len());
        for record in records {
            entries.entry(key(record)).or_insert_with(|| IndexEntry {
                epoch: record.epoch,
                version: record.version.clone(),
                release: record.release.clone(),
            });
        }
        PackageIndex { entries }
    }

    pub fn get(&self, key: &PkgKey) -> Option<&IndexEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &PkgKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
