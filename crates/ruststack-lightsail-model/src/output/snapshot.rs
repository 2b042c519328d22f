//! Snapshot copy and export output types.

use serde::{Deserialize, Serialize};

use crate::types::Operation;

/// Output for the `CopySnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopySnapshotOutput {
    /// The operation records describing the request's progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}

/// Output for the `ExportSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshotOutput {
    /// The operation records describing the request's progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}
