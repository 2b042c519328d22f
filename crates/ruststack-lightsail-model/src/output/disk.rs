//! Disk and disk snapshot output types.

use serde::{Deserialize, Serialize};

use crate::types::{Disk, DiskSnapshot};

/// Output for the `GetDisk` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDiskOutput {
    /// The requested disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<Disk>,
}

/// Output for the `GetDisks` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDisksOutput {
    /// The disks in the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disks: Option<Vec<Disk>>,

    /// The token for the next page of results, present when more results
    /// exist than fit in a single response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Output for the `GetDiskSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDiskSnapshotOutput {
    /// The requested disk snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_snapshot: Option<DiskSnapshot>,
}

/// Output for the `GetDiskSnapshots` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDiskSnapshotsOutput {
    /// The disk snapshots in the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_snapshots: Option<Vec<DiskSnapshot>>,

    /// The token for the next page of results, present when more results
    /// exist than fit in a single response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}
