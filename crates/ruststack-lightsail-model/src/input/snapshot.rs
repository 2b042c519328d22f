//! Snapshot copy and export input types.

use serde::{Deserialize, Serialize};

use crate::types::RegionName;

/// Input for the `CopySnapshot` operation.
///
/// The source is either a manual snapshot (`source_snapshot_name`) or an
/// automatic snapshot of a resource (`source_resource_name` plus
/// `restore_date` or `use_latest_restorable_auto_snapshot`); the two source
/// parameters are mutually exclusive, as are the two automatic-snapshot
/// selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopySnapshotInput {
    /// The name of the source manual snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_snapshot_name: Option<String>,

    /// The name of the source instance or disk when copying an automatic
    /// snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_resource_name: Option<String>,

    /// The date of the source automatic snapshot to copy, in `YYYY-MM-DD`
    /// format. Use `GetAutoSnapshots` to list available dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_date: Option<String>,

    /// Whether to copy the latest available automatic snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_latest_restorable_auto_snapshot: Option<bool>,

    /// The name of the new snapshot to create.
    pub target_snapshot_name: String,

    /// The AWS Region where the source snapshot lives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_region: Option<RegionName>,
}

/// Input for the `ExportSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshotInput {
    /// The name of the instance or disk snapshot to export to Amazon EC2.
    pub source_snapshot_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_manual_snapshot_copy() {
        let input = CopySnapshotInput {
            source_snapshot_name: Some("web-1-snap".to_owned()),
            target_snapshot_name: "web-1-snap-ohio".to_owned(),
            source_region: Some(RegionName::UsWest2),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).expect("serialize CopySnapshotInput");
        assert!(json.contains(r#""sourceSnapshotName":"web-1-snap""#));
        assert!(json.contains(r#""sourceRegion":"us-west-2""#));
        assert!(!json.contains("sourceResourceName"));
        assert!(!json.contains("restoreDate"));
    }

    #[test]
    fn test_should_serialize_automatic_snapshot_copy() {
        let input = CopySnapshotInput {
            source_resource_name: Some("web-1".to_owned()),
            use_latest_restorable_auto_snapshot: Some(true),
            target_snapshot_name: "web-1-latest".to_owned(),
            source_region: Some(RegionName::UsEast2),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).expect("serialize CopySnapshotInput");
        assert!(json.contains(r#""useLatestRestorableAutoSnapshot":true"#));
        assert!(!json.contains("sourceSnapshotName"));
    }
}
