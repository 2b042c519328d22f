//! Instance input types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{AddOnRequest, DiskMap, InstanceAccessProtocol, InstanceEntry, Tag};

/// Input for the `CreateInstances` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstancesInput {
    /// The names of the instances to create. Names must be unique within
    /// each AWS Region of the Lightsail account.
    pub instance_names: Vec<String>,

    /// The Availability Zone to create the instances in, e.g. `us-east-2a`.
    pub availability_zone: String,

    /// (Deprecated) The name of a custom image to create the instances from.
    /// Superseded by `blueprint_id` in API version 2017-09-21.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_image_name: Option<String>,

    /// The ID of the blueprint to create the instances from, e.g.
    /// `os_amlinux_2016_03`. Use `GetBlueprints` to list available values.
    pub blueprint_id: String,

    /// The ID of the bundle (plan) for the instances, e.g. `micro_1_0`.
    /// Use `GetBundles` to list available values.
    pub bundle_id: String,

    /// A launch script that runs on the instances before boot. Depending on
    /// the blueprint, the tooling differs: Amazon Linux uses `yum`, Debian
    /// and Ubuntu use `apt-get`, FreeBSD uses `pkg`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,

    /// The name of the SSH key pair to use for the instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair_name: Option<String>,

    /// Tags to attach to the instances during creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// Add-ons to enable on the instances during creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_ons: Option<Vec<AddOnRequest>>,
}

/// Input for the `CreateInstancesFromSnapshot` operation.
///
/// Either `instance_snapshot_name` or `source_instance_name` identifies the
/// source; the two parameters are mutually exclusive. `restore_date` and
/// `use_latest_restorable_auto_snapshot` only apply when restoring from an
/// automatic snapshot of a source instance, and are likewise exclusive of
/// each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstancesFromSnapshotInput {
    /// The names of the instances to create.
    pub instance_names: Vec<String>,

    /// Block storage disks to create from disks of the source instance,
    /// keyed by the source instance name, e.g.
    /// `{"my-instance": [{"originalDiskPath": "/dev/xvdf", "newDiskName": "my-new-disk"}]}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_disk_mapping: Option<HashMap<String, Vec<DiskMap>>>,

    /// The Availability Zone to create the instances in, e.g. `us-east-2a`.
    pub availability_zone: String,

    /// The name of the instance snapshot to create the instances from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_snapshot_name: Option<String>,

    /// The ID of the bundle (plan) for the instances, e.g. `micro_1_0`.
    pub bundle_id: String,

    /// A launch script that runs on the instances before boot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,

    /// The name of the SSH key pair to use for the instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair_name: Option<String>,

    /// Tags to attach to the instances during creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// Add-ons to enable on the instances during creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_ons: Option<Vec<AddOnRequest>>,

    /// The name of the source instance whose automatic snapshot to restore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_instance_name: Option<String>,

    /// The date of the automatic snapshot to restore, in `YYYY-MM-DD`
    /// format. Use `GetAutoSnapshots` to list available dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_date: Option<String>,

    /// Whether to restore from the latest available automatic snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_latest_restorable_auto_snapshot: Option<bool>,
}

/// Input for the `GetInstance` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInstanceInput {
    /// The name of the instance to describe.
    pub instance_name: String,
}

/// Input for the `GetInstances` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInstancesInput {
    /// The token returned by a previous request, to advance to the next page
    /// of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Input for the `GetInstanceAccessDetails` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInstanceAccessDetailsInput {
    /// The name of the instance to access.
    pub instance_name: String,

    /// The protocol to get access details for (`ssh` or `rdp`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<InstanceAccessProtocol>,
}

/// Input for the `CreateCloudFormationStack` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCloudFormationStackInput {
    /// The instances to export to Amazon EC2, built from exported instance
    /// snapshots. Currently one entry per request.
    pub instances: Vec<InstanceEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AddOnType, AutoSnapshotAddOnRequest, PortInfoSourceType};

    #[test]
    fn test_should_serialize_create_instances_input() {
        let input = CreateInstancesInput {
            instance_names: vec!["web-1".to_owned(), "web-2".to_owned()],
            availability_zone: "us-east-2a".to_owned(),
            blueprint_id: "os_amlinux_2016_03".to_owned(),
            bundle_id: "micro_1_0".to_owned(),
            tags: Some(vec![Tag {
                key: Some("env".to_owned()),
                value: Some("prod".to_owned()),
            }]),
            add_ons: Some(vec![AddOnRequest {
                add_on_type: Some(AddOnType::AutoSnapshot),
                auto_snapshot_add_on_request: Some(AutoSnapshotAddOnRequest {
                    snapshot_time_of_day: Some("06:00".to_owned()),
                }),
            }]),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).expect("serialize CreateInstancesInput");
        assert!(json.contains(r#""instanceNames":["web-1","web-2"]"#));
        assert!(json.contains(r#""availabilityZone":"us-east-2a""#));
        assert!(json.contains(r#""addOns":[{"addOnType":"AutoSnapshot""#));
        assert!(!json.contains("customImageName"));
        assert!(!json.contains("userData"));
    }

    #[test]
    fn test_should_deserialize_create_instances_from_snapshot_with_disk_mapping() {
        let json = r#"{
            "instanceNames": ["restored-1"],
            "availabilityZone": "us-east-2a",
            "bundleId": "micro_1_0",
            "instanceSnapshotName": "web-1-snap",
            "attachedDiskMapping": {
                "web-1": [{"originalDiskPath": "/dev/xvdf", "newDiskName": "restored-disk"}]
            }
        }"#;
        let input: CreateInstancesFromSnapshotInput =
            serde_json::from_str(json).expect("deserialize CreateInstancesFromSnapshotInput");
        assert_eq!(input.instance_names, vec!["restored-1".to_owned()]);
        let mapping = input.attached_disk_mapping.expect("disk mapping");
        let disks = mapping.get("web-1").expect("mapped disks");
        assert_eq!(disks[0].new_disk_name.as_deref(), Some("restored-disk"));
        assert_eq!(input.source_instance_name, None);
        assert_eq!(input.use_latest_restorable_auto_snapshot, None);
    }

    #[test]
    fn test_should_serialize_cloud_formation_stack_input() {
        let input = CreateCloudFormationStackInput {
            instances: vec![InstanceEntry {
                source_name: Some("web-1-export".to_owned()),
                instance_type: Some("t2.micro".to_owned()),
                port_info_source: Some(PortInfoSourceType::Instance),
                availability_zone: Some("us-east-2a".to_owned()),
                ..Default::default()
            }],
        };
        let json = serde_json::to_string(&input).expect("serialize CreateCloudFormationStackInput");
        assert!(json.contains(r#""portInfoSource":"INSTANCE""#));
        assert!(!json.contains("userData"));
    }
}
