//! Disk and disk snapshot input types.

use serde::{Deserialize, Serialize};

/// Input for the `GetDisk` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDiskInput {
    /// The name of the disk to describe.
    pub disk_name: String,
}

/// Input for the `GetDisks` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDisksInput {
    /// The token returned by a previous request, to advance to the next page
    /// of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Input for the `GetDiskSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDiskSnapshotInput {
    /// The name of the disk snapshot to describe.
    pub disk_snapshot_name: String,
}

/// Input for the `GetDiskSnapshots` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDiskSnapshotsInput {
    /// The token returned by a previous request, to advance to the next page
    /// of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}
