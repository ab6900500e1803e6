mod version;

pub use version::compare_version_release;

use crate::diff::DiffResult;

use chrono::Local;
use nix::unistd::{self, Uid};
use serde::{Deserialize, Serialize};

/// A binary package record as exported by the branch API.
///
/// Two records denote the same package across branches when their
/// (name, arch) pairs match, regardless of version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    pub epoch: i64,
    pub version: String,
    pub release: String,
    pub arch: String,
    pub disttag: String,
    pub buildtime: i64,
    pub source: String,
}

/// The identity of a package across branches.
pub type PkgKey = (String, String);

/// Key extraction strategy for the diff. Must be pure.
pub type KeyFn = fn(&PackageRecord) -> PkgKey;

pub fn key_name_arch(pkg: &PackageRecord) -> PkgKey {
    (pkg.name.clone(), pkg.arch.clone())
}

/// The result document, annotated with who ran the comparison and when.
#[derive(Debug, Serialize)]
pub struct Response {
    pub user: String,
    pub time: String,
    pub result: DiffReport,
}

#[derive(Debug, Serialize)]
pub struct DiffReport {
    pub first_package: Vec<PackageRecord>,
    pub second_package: Vec<PackageRecord>,
    pub newer_versions_first_package: Vec<PackageRecord>,
}

impl Response {
    pub fn new(diff: DiffResult) -> Self {
        Response {
            user: current_user(),
            time: Local::now().format("%H:%M:%S %d-%m-%Y").to_string(),
            result: DiffReport {
                first_package: diff.only_in_first,
                second_package: diff.only_in_second,
                newer_versions_first_package: diff.newer_in_second,
            },
        }
    }
}

fn current_user() -> String {
    if let Ok(Some(user)) = unistd::User::from_uid(Uid::effective()) {
        return user.name;
    }
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}
