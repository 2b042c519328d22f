//! Lightsail operation enum.

use std::fmt;

/// The `X-Amz-Target` prefix for Lightsail JSON 1.1 requests.
pub const TARGET_PREFIX: &str = "Lightsail_20161128";

/// All supported Lightsail operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightsailOperation {
    // Instances
    /// Create one or more instances from a blueprint and bundle.
    CreateInstances,
    /// Create one or more instances from an instance snapshot.
    CreateInstancesFromSnapshot,
    /// Describe a single instance.
    GetInstance,
    /// Describe all instances.
    GetInstances,
    /// Fetch temporary SSH/RDP access details for an instance.
    GetInstanceAccessDetails,
    /// Export instances and disks as a CloudFormation stack.
    CreateCloudFormationStack,

    // Catalog
    /// List available instance images.
    GetBlueprints,
    /// List available instance plans.
    GetBundles,

    // Disks & snapshots
    /// Describe a single block storage disk.
    GetDisk,
    /// Describe all block storage disks.
    GetDisks,
    /// Describe a single disk snapshot.
    GetDiskSnapshot,
    /// Describe all disk snapshots.
    GetDiskSnapshots,
    /// Copy a manual or automatic snapshot, optionally across regions.
    CopySnapshot,
    /// Export a snapshot to Amazon EC2.
    ExportSnapshot,

    // Relational databases
    /// Create a managed database.
    CreateRelationalDatabase,
    /// Create a managed database from a database snapshot.
    CreateRelationalDatabaseFromSnapshot,
    /// Describe a single managed database.
    GetRelationalDatabase,
    /// Describe all managed databases.
    GetRelationalDatabases,
    /// Describe a single database snapshot.
    GetRelationalDatabaseSnapshot,
    /// Describe all database snapshots.
    GetRelationalDatabaseSnapshots,
    /// Fetch log events for a database log stream.
    GetRelationalDatabaseLogEvents,
    /// Fetch metric datapoints for a database.
    GetRelationalDatabaseMetricData,

    // Monitoring & notifications
    /// Create or update a metric alarm.
    PutAlarm,
    /// Describe alarms.
    GetAlarms,
    /// Delete an alarm.
    DeleteAlarm,
    /// Register an email address or phone number for notifications.
    CreateContactMethod,
    /// Describe registered contact methods.
    GetContactMethods,

    // Load balancers
    /// Describe the TLS certificates of a load balancer.
    GetLoadBalancerTlsCertificates,

    // Operations
    /// Describe a single asynchronous operation record.
    GetOperation,
    /// Describe all asynchronous operation records.
    GetOperations,
}

impl LightsailOperation {
    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateInstances => "CreateInstances",
            Self::CreateInstancesFromSnapshot => "CreateInstancesFromSnapshot",
            Self::GetInstance => "GetInstance",
            Self::GetInstances => "GetInstances",
            Self::GetInstanceAccessDetails => "GetInstanceAccessDetails",
            Self::CreateCloudFormationStack => "CreateCloudFormationStack",
            Self::GetBlueprints => "GetBlueprints",
            Self::GetBundles => "GetBundles",
            Self::GetDisk => "GetDisk",
            Self::GetDisks => "GetDisks",
            Self::GetDiskSnapshot => "GetDiskSnapshot",
            Self::GetDiskSnapshots => "GetDiskSnapshots",
            Self::CopySnapshot => "CopySnapshot",
            Self::ExportSnapshot => "ExportSnapshot",
            Self::CreateRelationalDatabase => "CreateRelationalDatabase",
            Self::CreateRelationalDatabaseFromSnapshot => "CreateRelationalDatabaseFromSnapshot",
            Self::GetRelationalDatabase => "GetRelationalDatabase",
            Self::GetRelationalDatabases => "GetRelationalDatabases",
            Self::GetRelationalDatabaseSnapshot => "GetRelationalDatabaseSnapshot",
            Self::GetRelationalDatabaseSnapshots => "GetRelationalDatabaseSnapshots",
            Self::GetRelationalDatabaseLogEvents => "GetRelationalDatabaseLogEvents",
            Self::GetRelationalDatabaseMetricData => "GetRelationalDatabaseMetricData",
            Self::PutAlarm => "PutAlarm",
            Self::GetAlarms => "GetAlarms",
            Self::DeleteAlarm => "DeleteAlarm",
            Self::CreateContactMethod => "CreateContactMethod",
            Self::GetContactMethods => "GetContactMethods",
            Self::GetLoadBalancerTlsCertificates => "GetLoadBalancerTlsCertificates",
            Self::GetOperation => "GetOperation",
            Self::GetOperations => "GetOperations",
        }
    }

    /// Parse an operation name string into a `LightsailOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CreateInstances" => Some(Self::CreateInstances),
            "CreateInstancesFromSnapshot" => Some(Self::CreateInstancesFromSnapshot),
            "GetInstance" => Some(Self::GetInstance),
            "GetInstances" => Some(Self::GetInstances),
            "GetInstanceAccessDetails" => Some(Self::GetInstanceAccessDetails),
            "CreateCloudFormationStack" => Some(Self::CreateCloudFormationStack),
            "GetBlueprints" => Some(Self::GetBlueprints),
            "GetBundles" => Some(Self::GetBundles),
            "GetDisk" => Some(Self::GetDisk),
            "GetDisks" => Some(Self::GetDisks),
            "GetDiskSnapshot" => Some(Self::GetDiskSnapshot),
            "GetDiskSnapshots" => Some(Self::GetDiskSnapshots),
            "CopySnapshot" => Some(Self::CopySnapshot),
            "ExportSnapshot" => Some(Self::ExportSnapshot),
            "CreateRelationalDatabase" => Some(Self::CreateRelationalDatabase),
            "CreateRelationalDatabaseFromSnapshot" => {
                Some(Self::CreateRelationalDatabaseFromSnapshot)
            }
            "GetRelationalDatabase" => Some(Self::GetRelationalDatabase),
            "GetRelationalDatabases" => Some(Self::GetRelationalDatabases),
            "GetRelationalDatabaseSnapshot" => Some(Self::GetRelationalDatabaseSnapshot),
            "GetRelationalDatabaseSnapshots" => Some(Self::GetRelationalDatabaseSnapshots),
            "GetRelationalDatabaseLogEvents" => Some(Self::GetRelationalDatabaseLogEvents),
            "GetRelationalDatabaseMetricData" => Some(Self::GetRelationalDatabaseMetricData),
            "PutAlarm" => Some(Self::PutAlarm),
            "GetAlarms" => Some(Self::GetAlarms),
            "DeleteAlarm" => Some(Self::DeleteAlarm),
            "CreateContactMethod" => Some(Self::CreateContactMethod),
            "GetContactMethods" => Some(Self::GetContactMethods),
            "GetLoadBalancerTlsCertificates" => Some(Self::GetLoadBalancerTlsCertificates),
            "GetOperation" => Some(Self::GetOperation),
            "GetOperations" => Some(Self::GetOperations),
            _ => None,
        }
    }

    /// Parse an `X-Amz-Target` header value (`Lightsail_20161128.<Name>`).
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        let name = target.strip_prefix(TARGET_PREFIX)?.strip_prefix('.')?;
        Self::from_name(name)
    }

    /// Returns the full `X-Amz-Target` value for this operation.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}.{}", self.as_str())
    }
}

impl fmt::Display for LightsailOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[LightsailOperation] = &[
        LightsailOperation::CreateInstances,
        LightsailOperation::CreateInstancesFromSnapshot,
        LightsailOperation::GetInstance,
        LightsailOperation::GetInstances,
        LightsailOperation::GetInstanceAccessDetails,
        LightsailOperation::CreateCloudFormationStack,
        LightsailOperation::GetBlueprints,
        LightsailOperation::GetBundles,
        LightsailOperation::GetDisk,
        LightsailOperation::GetDisks,
        LightsailOperation::GetDiskSnapshot,
        LightsailOperation::GetDiskSnapshots,
        LightsailOperation::CopySnapshot,
        LightsailOperation::ExportSnapshot,
        LightsailOperation::CreateRelationalDatabase,
        LightsailOperation::CreateRelationalDatabaseFromSnapshot,
        LightsailOperation::GetRelationalDatabase,
        LightsailOperation::GetRelationalDatabases,
        LightsailOperation::GetRelationalDatabaseSnapshot,
        LightsailOperation::GetRelationalDatabaseSnapshots,
        LightsailOperation::GetRelationalDatabaseLogEvents,
        LightsailOperation::GetRelationalDatabaseMetricData,
        LightsailOperation::PutAlarm,
        LightsailOperation::GetAlarms,
        LightsailOperation::DeleteAlarm,
        LightsailOperation::CreateContactMethod,
        LightsailOperation::GetContactMethods,
        LightsailOperation::GetLoadBalancerTlsCertificates,
        LightsailOperation::GetOperation,
        LightsailOperation::GetOperations,
    ];

    #[test]
    fn test_should_roundtrip_operation_names() {
        for op in ALL {
            assert_eq!(LightsailOperation::from_name(op.as_str()), Some(*op));
        }
    }

    #[test]
    fn test_should_reject_unknown_operation_name() {
        assert_eq!(LightsailOperation::from_name("DestroyEverything"), None);
    }

    #[test]
    fn test_should_parse_target_header() {
        assert_eq!(
            LightsailOperation::from_target("Lightsail_20161128.GetBlueprints"),
            Some(LightsailOperation::GetBlueprints)
        );
        assert_eq!(LightsailOperation::from_target("GetBlueprints"), None);
        assert_eq!(
            LightsailOperation::from_target("DynamoDB_20120810.GetItem"),
            None
        );
    }

    #[test]
    fn test_should_build_target_value() {
        assert_eq!(
            LightsailOperation::CreateInstances.target(),
            "Lightsail_20161128.CreateInstances"
        );
    }

    #[test]
    fn test_should_display_operation_name() {
        assert_eq!(
            LightsailOperation::GetRelationalDatabaseLogEvents.to_string(),
            "GetRelationalDatabaseLogEvents"
        );
    }
}
