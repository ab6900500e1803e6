use crate::diff::DiffError;
use crate::types::PackageRecord;

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;

#[derive(Deserialize)]
struct ExportPayload {
    #[serde(default)]
    packages: Vec<RawRecord>,
}

/// One item of the export's `packages` array, before validation.
#[derive(Deserialize)]
struct RawRecord {
    name: Option<String>,
    epoch: Option<i64>,
    version: Option<String>,
    release: Option<String>,
    arch: Option<String>,
    disttag: Option<String>,
    buildtime: Option<i64>,
    source: Option<String>,
}

impl RawRecord {
    /// The single validation step. Everything downstream works with typed
    /// records and never re-checks fields.
    fn into_record(self, index: usize) -> Result<PackageRecord, DiffError> {
        let pkgname = self.name.clone().unwrap_or_else(|| "?".to_string());
        let missing = move |field: &'static str| DiffError::MalformedRecord {
            index,
            name: pkgname.clone(),
            field,
        };

        Ok(PackageRecord {
            name: self.name.ok_or_else(|| missing("name"))?,
            epoch: self.epoch.ok_or_else(|| missing("epoch"))?,
            version: self.version.ok_or_else(|| missing("version"))?,
            release: self.release.ok_or_else(|| missing("release"))?,
            arch: self.arch.ok_or_else(|| missing("arch"))?,
            disttag: self.disttag.ok_or_else(|| missing("disttag"))?,
            buildtime: self.buildtime.ok_or_else(|| missing("buildtime"))?,
            source: self.source.ok_or_else(|| missing("source"))?,
        })
    }
}

fn ingest(payload: ExportPayload) -> Result<Vec<PackageRecord>, DiffError> {
    payload
        .packages
        .into_iter()
        .enumerate()
        .map(|(index, raw)| raw.into_record(index))
        .collect()
}

async fn fetch_branch(client: &Client, api_base: &str, branch: &str) -> Result<Vec<PackageRecord>> {
    let url = format!("{api_base}/{branch}");
    let resp = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Failed to reach the package export API for {branch}"))?;

    match resp.status().as_u16() {
        200 => (),
        404 => bail!("Branch {} not found at {}", branch, &url),
        status => bail!("Failed to fetch branch {}: HTTP status {}", branch, status),
    }

    let payload: ExportPayload = resp
        .json()
        .await
        .with_context(|| format!("Failed to parse package export for {branch}"))?;

    ingest(payload).with_context(|| format!("Malformed package record in branch {branch}"))
}

/// Fetch both branch package lists concurrently. Either failure aborts the
/// whole retrieval.
pub async fn fetch_branches(
    api_base: &str,
    branch1: &str,
    branch2: &str,
) -> Result<(Vec<PackageRecord>, Vec<PackageRecord>)> {
    let client = Client::new();
    tokio::try_join!(
        fetch_branch(&client, api_base, branch1),
        fetch_branch(&client, api_base, branch2)
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ingest_valid_payload() {
        let data = r#"{
            "length": 1,
            "packages": [{
                "name": "bash",
                "epoch": 0,
                "version": "5.2",
                "release": "alt1",
                "arch": "x86_64",
                "disttag": "sisyphus+330001.100.1.1",
                "buildtime": 1700000000,
                "source": "bash"
            }]
        }"#;

        let payload: ExportPayload = serde_json::from_str(data).unwrap();
        let records = ingest(payload).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "bash");
        assert_eq!(records[0].version, "5.2");
    }

    #[test]
    fn ingest_aborts_on_missing_field() {
        let data = r#"{
            "packages": [
                {
                    "name": "bash",
                    "epoch": 0,
                    "version": "5.2",
                    "release": "alt1",
                    "arch": "x86_64",
                    "disttag": "",
                    "buildtime": 0,
                    "source": "bash"
                },
                {
                    "name": "coreutils",
                    "epoch": 0,
                    "release": "alt1",
                    "arch": "x86_64",
                    "disttag": "",
                    "buildtime": 0,
                    "source": "coreutils"
                }
            ]
        }"#;

        let payload: ExportPayload = serde_json::from_str(data).unwrap();
        let err = ingest(payload).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("#1"));
        assert!(msg.contains("coreutils"));
        assert!(msg.contains("version"));
    }

    #[test]
    fn ingest_empty_packages() {
        let payload: ExportPayload = serde_json::from_str("{}").unwrap();
        assert!(ingest(payload).unwrap().is_empty());
    }
}
