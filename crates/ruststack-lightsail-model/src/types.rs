//! Shared Lightsail types.
//!
//! All types follow the Lightsail JSON wire format with `camelCase` member
//! names. Structs use `#[serde(rename_all = "camelCase")]` and omit absent
//! fields, so a serialized shape contains exactly the fields that were set.
//!
//! Lightsail models constrained strings as "a string with a suggested closed
//! vocabulary": the service documents the allowed values but accepts and
//! returns undocumented ones. Every vocabulary enum here therefore carries an
//! `Unknown(String)` variant that passes unrecognized values through
//! verbatim, with hand-written serde impls instead of derives.
//!
//! Timestamps are `f64` epoch seconds, the raw JSON wire value.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums - resources and regions
// ---------------------------------------------------------------------------

/// The Lightsail resource type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Instance,
    StaticIp,
    KeyPair,
    InstanceSnapshot,
    Domain,
    PeeredVpc,
    LoadBalancer,
    LoadBalancerTlsCertificate,
    Disk,
    DiskSnapshot,
    RelationalDatabase,
    RelationalDatabaseSnapshot,
    ExportSnapshotRecord,
    CloudFormationStackRecord,
    Alarm,
    ContactMethod,
    /// An unrecognized resource type received from the service.
    Unknown(String),
}

impl ResourceType {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Instance => "Instance",
            Self::StaticIp => "StaticIp",
            Self::KeyPair => "KeyPair",
            Self::InstanceSnapshot => "InstanceSnapshot",
            Self::Domain => "Domain",
            Self::PeeredVpc => "PeeredVpc",
            Self::LoadBalancer => "LoadBalancer",
            Self::LoadBalancerTlsCertificate => "LoadBalancerTlsCertificate",
            Self::Disk => "Disk",
            Self::DiskSnapshot => "DiskSnapshot",
            Self::RelationalDatabase => "RelationalDatabase",
            Self::RelationalDatabaseSnapshot => "RelationalDatabaseSnapshot",
            Self::ExportSnapshotRecord => "ExportSnapshotRecord",
            Self::CloudFormationStackRecord => "CloudFormationStackRecord",
            Self::Alarm => "Alarm",
            Self::ContactMethod => "ContactMethod",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for ResourceType {
    fn from(s: &str) -> Self {
        match s {
            "Instance" => Self::Instance,
            "StaticIp" => Self::StaticIp,
            "KeyPair" => Self::KeyPair,
            "InstanceSnapshot" => Self::InstanceSnapshot,
            "Domain" => Self::Domain,
            "PeeredVpc" => Self::PeeredVpc,
            "LoadBalancer" => Self::LoadBalancer,
            "LoadBalancerTlsCertificate" => Self::LoadBalancerTlsCertificate,
            "Disk" => Self::Disk,
            "DiskSnapshot" => Self::DiskSnapshot,
            "RelationalDatabase" => Self::RelationalDatabase,
            "RelationalDatabaseSnapshot" => Self::RelationalDatabaseSnapshot,
            "ExportSnapshotRecord" => Self::ExportSnapshotRecord,
            "CloudFormationStackRecord" => Self::CloudFormationStackRecord,
            "Alarm" => Self::Alarm,
            "ContactMethod" => Self::ContactMethod,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for ResourceType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResourceType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An AWS region where Lightsail resources can live.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegionName {
    UsEast1,
    UsEast2,
    UsWest1,
    UsWest2,
    EuWest1,
    EuWest2,
    EuWest3,
    EuCentral1,
    CaCentral1,
    ApSouth1,
    ApSoutheast1,
    ApSoutheast2,
    ApNortheast1,
    ApNortheast2,
    /// An unrecognized region name received from the service.
    Unknown(String),
}

impl RegionName {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::UsEast1 => "us-east-1",
            Self::UsEast2 => "us-east-2",
            Self::UsWest1 => "us-west-1",
            Self::UsWest2 => "us-west-2",
            Self::EuWest1 => "eu-west-1",
            Self::EuWest2 => "eu-west-2",
            Self::EuWest3 => "eu-west-3",
            Self::EuCentral1 => "eu-central-1",
            Self::CaCentral1 => "ca-central-1",
            Self::ApSouth1 => "ap-south-1",
            Self::ApSoutheast1 => "ap-southeast-1",
            Self::ApSoutheast2 => "ap-southeast-2",
            Self::ApNortheast1 => "ap-northeast-1",
            Self::ApNortheast2 => "ap-northeast-2",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for RegionName {
    fn from(s: &str) -> Self {
        match s {
            "us-east-1" => Self::UsEast1,
            "us-east-2" => Self::UsEast2,
            "us-west-1" => Self::UsWest1,
            "us-west-2" => Self::UsWest2,
            "eu-west-1" => Self::EuWest1,
            "eu-west-2" => Self::EuWest2,
            "eu-west-3" => Self::EuWest3,
            "eu-central-1" => Self::EuCentral1,
            "ca-central-1" => Self::CaCentral1,
            "ap-south-1" => Self::ApSouth1,
            "ap-southeast-1" => Self::ApSoutheast1,
            "ap-southeast-2" => Self::ApSoutheast2,
            "ap-northeast-1" => Self::ApNortheast1,
            "ap-northeast-2" => Self::ApNortheast2,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for RegionName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RegionName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for RegionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Enums - blueprints and bundles
// ---------------------------------------------------------------------------

/// The operating system platform of a blueprint or bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InstancePlatform {
    /// Linux or Unix based images.
    LinuxUnix,
    /// Windows Server based images.
    Windows,
    /// An unrecognized platform value received from the service.
    Unknown(String),
}

impl InstancePlatform {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::LinuxUnix => "LINUX_UNIX",
            Self::Windows => "WINDOWS",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for InstancePlatform {
    fn from(s: &str) -> Self {
        match s {
            "LINUX_UNIX" => Self::LinuxUnix,
            "WINDOWS" => Self::Windows,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for InstancePlatform {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InstancePlatform {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for InstancePlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The blueprint kind: a bare operating system or an application stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlueprintType {
    Os,
    App,
    /// An unrecognized blueprint type received from the service.
    Unknown(String),
}

impl BlueprintType {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Os => "os",
            Self::App => "app",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for BlueprintType {
    fn from(s: &str) -> Self {
        match s {
            "os" => Self::Os,
            "app" => Self::App,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for BlueprintType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BlueprintType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for BlueprintType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Enums - disks
// ---------------------------------------------------------------------------

/// The state of a block storage disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiskState {
    Pending,
    Error,
    Available,
    InUse,
    /// The disk state cannot be determined.
    UnknownValue,
    /// An unrecognized state value received from the service.
    Unknown(String),
}

impl DiskState {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Error => "error",
            Self::Available => "available",
            Self::InUse => "in-use",
            Self::UnknownValue => "unknown",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for DiskState {
    fn from(s: &str) -> Self {
        match s {
            "pending" => Self::Pending,
            "error" => Self::Error,
            "available" => Self::Available,
            "in-use" => Self::InUse,
            "unknown" => Self::UnknownValue,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for DiskState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DiskState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for DiskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The state of a disk snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiskSnapshotState {
    Pending,
    Completed,
    Error,
    /// The snapshot state cannot be determined.
    UnknownValue,
    /// An unrecognized state value received from the service.
    Unknown(String),
}

impl DiskSnapshotState {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Error => "error",
            Self::UnknownValue => "unknown",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for DiskSnapshotState {
    fn from(s: &str) -> Self {
        match s {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "error" => Self::Error,
            "unknown" => Self::UnknownValue,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for DiskSnapshotState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DiskSnapshotState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for DiskSnapshotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Enums - operations
// ---------------------------------------------------------------------------

/// The status of an asynchronous operation record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperationStatus {
    NotStarted,
    Started,
    Failed,
    Completed,
    Succeeded,
    /// An unrecognized status value received from the service.
    Unknown(String),
}

impl OperationStatus {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::Started => "Started",
            Self::Failed => "Failed",
            Self::Completed => "Completed",
            Self::Succeeded => "Succeeded",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for OperationStatus {
    fn from(s: &str) -> Self {
        match s {
            "NotStarted" => Self::NotStarted,
            "Started" => Self::Started,
            "Failed" => Self::Failed,
            "Completed" => Self::Completed,
            "Succeeded" => Self::Succeeded,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for OperationStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OperationStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of work an asynchronous operation record describes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperationType {
    DeleteKnownHostKeys,
    DeleteInstance,
    CreateInstance,
    StopInstance,
    StartInstance,
    RebootInstance,
    OpenInstancePublicPorts,
    PutInstancePublicPorts,
    CloseInstancePublicPorts,
    AllocateStaticIp,
    ReleaseStaticIp,
    AttachStaticIp,
    DetachStaticIp,
    UpdateDomainEntry,
    DeleteDomainEntry,
    CreateDomain,
    DeleteDomain,
    CreateInstanceSnapshot,
    DeleteInstanceSnapshot,
    CreateInstancesFromSnapshot,
    CreateLoadBalancer,
    DeleteLoadBalancer,
    AttachInstancesToLoadBalancer,
    DetachInstancesFromLoadBalancer,
    UpdateLoadBalancerAttribute,
    CreateLoadBalancerTlsCertificate,
    DeleteLoadBalancerTlsCertificate,
    AttachLoadBalancerTlsCertificate,
    CreateDisk,
    DeleteDisk,
    AttachDisk,
    DetachDisk,
    CreateDiskSnapshot,
    DeleteDiskSnapshot,
    CreateDiskFromSnapshot,
    CreateRelationalDatabase,
    UpdateRelationalDatabase,
    DeleteRelationalDatabase,
    CreateRelationalDatabaseFromSnapshot,
    CreateRelationalDatabaseSnapshot,
    DeleteRelationalDatabaseSnapshot,
    UpdateRelationalDatabaseParameters,
    StartRelationalDatabase,
    RebootRelationalDatabase,
    StopRelationalDatabase,
    EnableAddOn,
    DisableAddOn,
    PutAlarm,
    GetAlarms,
    DeleteAlarm,
    TestAlarm,
    CreateContactMethod,
    GetContactMethods,
    SendContactMethodVerification,
    DeleteContactMethod,
    /// An unrecognized operation type received from the service.
    Unknown(String),
}

impl OperationType {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::DeleteKnownHostKeys => "DeleteKnownHostKeys",
            Self::DeleteInstance => "DeleteInstance",
            Self::CreateInstance => "CreateInstance",
            Self::StopInstance => "StopInstance",
            Self::StartInstance => "StartInstance",
            Self::RebootInstance => "RebootInstance",
            Self::OpenInstancePublicPorts => "OpenInstancePublicPorts",
            Self::PutInstancePublicPorts => "PutInstancePublicPorts",
            Self::CloseInstancePublicPorts => "CloseInstancePublicPorts",
            Self::AllocateStaticIp => "AllocateStaticIp",
            Self::ReleaseStaticIp => "ReleaseStaticIp",
            Self::AttachStaticIp => "AttachStaticIp",
            Self::DetachStaticIp => "DetachStaticIp",
            Self::UpdateDomainEntry => "UpdateDomainEntry",
            Self::DeleteDomainEntry => "DeleteDomainEntry",
            Self::CreateDomain => "CreateDomain",
            Self::DeleteDomain => "DeleteDomain",
            Self::CreateInstanceSnapshot => "CreateInstanceSnapshot",
            Self::DeleteInstanceSnapshot => "DeleteInstanceSnapshot",
            Self::CreateInstancesFromSnapshot => "CreateInstancesFromSnapshot",
            Self::CreateLoadBalancer => "CreateLoadBalancer",
            Self::DeleteLoadBalancer => "DeleteLoadBalancer",
            Self::AttachInstancesToLoadBalancer => "AttachInstancesToLoadBalancer",
            Self::DetachInstancesFromLoadBalancer => "DetachInstancesFromLoadBalancer",
            Self::UpdateLoadBalancerAttribute => "UpdateLoadBalancerAttribute",
            Self::CreateLoadBalancerTlsCertificate => "CreateLoadBalancerTlsCertificate",
            Self::DeleteLoadBalancerTlsCertificate => "DeleteLoadBalancerTlsCertificate",
            Self::AttachLoadBalancerTlsCertificate => "AttachLoadBalancerTlsCertificate",
            Self::CreateDisk => "CreateDisk",
            Self::DeleteDisk => "DeleteDisk",
            Self::AttachDisk => "AttachDisk",
            Self::DetachDisk => "DetachDisk",
            Self::CreateDiskSnapshot => "CreateDiskSnapshot",
            Self::DeleteDiskSnapshot => "DeleteDiskSnapshot",
            Self::CreateDiskFromSnapshot => "CreateDiskFromSnapshot",
            Self::CreateRelationalDatabase => "CreateRelationalDatabase",
            Self::UpdateRelationalDatabase => "UpdateRelationalDatabase",
            Self::DeleteRelationalDatabase => "DeleteRelationalDatabase",
            Self::CreateRelationalDatabaseFromSnapshot => "CreateRelationalDatabaseFromSnapshot",
            Self::CreateRelationalDatabaseSnapshot => "CreateRelationalDatabaseSnapshot",
            Self::DeleteRelationalDatabaseSnapshot => "DeleteRelationalDatabaseSnapshot",
            Self::UpdateRelationalDatabaseParameters => "UpdateRelationalDatabaseParameters",
            Self::StartRelationalDatabase => "StartRelationalDatabase",
            Self::RebootRelationalDatabase => "RebootRelationalDatabase",
            Self::StopRelationalDatabase => "StopRelationalDatabase",
            Self::EnableAddOn => "EnableAddOn",
            Self::DisableAddOn => "DisableAddOn",
            Self::PutAlarm => "PutAlarm",
            Self::GetAlarms => "GetAlarms",
            Self::DeleteAlarm => "DeleteAlarm",
            Self::TestAlarm => "TestAlarm",
            Self::CreateContactMethod => "CreateContactMethod",
            Self::GetContactMethods => "GetContactMethods",
            Self::SendContactMethodVerification => "SendContactMethodVerification",
            Self::DeleteContactMethod => "DeleteContactMethod",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for OperationType {
    fn from(s: &str) -> Self {
        match s {
            "DeleteKnownHostKeys" => Self::DeleteKnownHostKeys,
            "DeleteInstance" => Self::DeleteInstance,
            "CreateInstance" => Self::CreateInstance,
            "StopInstance" => Self::StopInstance,
            "StartInstance" => Self::StartInstance,
            "RebootInstance" => Self::RebootInstance,
            "OpenInstancePublicPorts" => Self::OpenInstancePublicPorts,
            "PutInstancePublicPorts" => Self::PutInstancePublicPorts,
            "CloseInstancePublicPorts" => Self::CloseInstancePublicPorts,
            "AllocateStaticIp" => Self::AllocateStaticIp,
            "ReleaseStaticIp" => Self::ReleaseStaticIp,
            "AttachStaticIp" => Self::AttachStaticIp,
            "DetachStaticIp" => Self::DetachStaticIp,
            "UpdateDomainEntry" => Self::UpdateDomainEntry,
            "DeleteDomainEntry" => Self::DeleteDomainEntry,
            "CreateDomain" => Self::CreateDomain,
            "DeleteDomain" => Self::DeleteDomain,
            "CreateInstanceSnapshot" => Self::CreateInstanceSnapshot,
            "DeleteInstanceSnapshot" => Self::DeleteInstanceSnapshot,
            "CreateInstancesFromSnapshot" => Self::CreateInstancesFromSnapshot,
            "CreateLoadBalancer" => Self::CreateLoadBalancer,
            "DeleteLoadBalancer" => Self::DeleteLoadBalancer,
            "AttachInstancesToLoadBalancer" => Self::AttachInstancesToLoadBalancer,
            "DetachInstancesFromLoadBalancer" => Self::DetachInstancesFromLoadBalancer,
            "UpdateLoadBalancerAttribute" => Self::UpdateLoadBalancerAttribute,
            "CreateLoadBalancerTlsCertificate" => Self::CreateLoadBalancerTlsCertificate,
            "DeleteLoadBalancerTlsCertificate" => Self::DeleteLoadBalancerTlsCertificate,
            "AttachLoadBalancerTlsCertificate" => Self::AttachLoadBalancerTlsCertificate,
            "CreateDisk" => Self::CreateDisk,
            "DeleteDisk" => Self::DeleteDisk,
            "AttachDisk" => Self::AttachDisk,
            "DetachDisk" => Self::DetachDisk,
            "CreateDiskSnapshot" => Self::CreateDiskSnapshot,
            "DeleteDiskSnapshot" => Self::DeleteDiskSnapshot,
            "CreateDiskFromSnapshot" => Self::CreateDiskFromSnapshot,
            "CreateRelationalDatabase" => Self::CreateRelationalDatabase,
            "UpdateRelationalDatabase" => Self::UpdateRelationalDatabase,
            "DeleteRelationalDatabase" => Self::DeleteRelationalDatabase,
            "CreateRelationalDatabaseFromSnapshot" => Self::CreateRelationalDatabaseFromSnapshot,
            "CreateRelationalDatabaseSnapshot" => Self::CreateRelationalDatabaseSnapshot,
            "DeleteRelationalDatabaseSnapshot" => Self::DeleteRelationalDatabaseSnapshot,
            "UpdateRelationalDatabaseParameters" => Self::UpdateRelationalDatabaseParameters,
            "StartRelationalDatabase" => Self::StartRelationalDatabase,
            "RebootRelationalDatabase" => Self::RebootRelationalDatabase,
            "StopRelationalDatabase" => Self::StopRelationalDatabase,
            "EnableAddOn" => Self::EnableAddOn,
            "DisableAddOn" => Self::DisableAddOn,
            "PutAlarm" => Self::PutAlarm,
            "GetAlarms" => Self::GetAlarms,
            "DeleteAlarm" => Self::DeleteAlarm,
            "TestAlarm" => Self::TestAlarm,
            "CreateContactMethod" => Self::CreateContactMethod,
            "GetContactMethods" => Self::GetContactMethods,
            "SendContactMethodVerification" => Self::SendContactMethodVerification,
            "DeleteContactMethod" => Self::DeleteContactMethod,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for OperationType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OperationType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Enums - instance access and networking
// ---------------------------------------------------------------------------

/// The protocol used to connect to an instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InstanceAccessProtocol {
    Ssh,
    Rdp,
    /// An unrecognized protocol value received from the service.
    Unknown(String),
}

impl InstanceAccessProtocol {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ssh => "ssh",
            Self::Rdp => "rdp",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for InstanceAccessProtocol {
    fn from(s: &str) -> Self {
        match s {
            "ssh" => Self::Ssh,
            "rdp" => Self::Rdp,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for InstanceAccessProtocol {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InstanceAccessProtocol {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for InstanceAccessProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the firewall configuration of an exported instance comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PortInfoSourceType {
    /// Use the default firewall settings of the blueprint.
    Default,
    /// Use the firewall settings of the source instance.
    Instance,
    /// Open all ports.
    None,
    /// Close all ports.
    Closed,
    /// An unrecognized source type received from the service.
    Unknown(String),
}

impl PortInfoSourceType {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "DEFAULT",
            Self::Instance => "INSTANCE",
            Self::None => "NONE",
            Self::Closed => "CLOSED",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for PortInfoSourceType {
    fn from(s: &str) -> Self {
        match s {
            "DEFAULT" => Self::Default,
            "INSTANCE" => Self::Instance,
            "NONE" => Self::None,
            "CLOSED" => Self::Closed,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for PortInfoSourceType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PortInfoSourceType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for PortInfoSourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The IP protocol of a firewall rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NetworkProtocol {
    Tcp,
    All,
    Udp,
    Icmp,
    /// An unrecognized protocol value received from the service.
    Unknown(String),
}

impl NetworkProtocol {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tcp => "tcp",
            Self::All => "all",
            Self::Udp => "udp",
            Self::Icmp => "icmp",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for NetworkProtocol {
    fn from(s: &str) -> Self {
        match s {
            "tcp" => Self::Tcp,
            "all" => Self::All,
            "udp" => Self::Udp,
            "icmp" => Self::Icmp,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for NetworkProtocol {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NetworkProtocol {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for NetworkProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a port is open to the public internet or to the Lightsail
/// private network only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PortAccessType {
    Public,
    Private,
    /// An unrecognized access type received from the service.
    Unknown(String),
}

impl PortAccessType {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for PortAccessType {
    fn from(s: &str) -> Self {
        match s {
            "Public" => Self::Public,
            "Private" => Self::Private,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for PortAccessType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PortAccessType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for PortAccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The direction of traffic a firewall rule covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccessDirection {
    Inbound,
    Outbound,
    /// An unrecognized direction value received from the service.
    Unknown(String),
}

impl AccessDirection {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for AccessDirection {
    fn from(s: &str) -> Self {
        match s {
            "inbound" => Self::Inbound,
            "outbound" => Self::Outbound,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for AccessDirection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccessDirection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for AccessDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Enums - contact methods and alarms
// ---------------------------------------------------------------------------

/// The protocol of a notification contact method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContactProtocol {
    Email,
    Sms,
    /// An unrecognized protocol value received from the service.
    Unknown(String),
}

impl ContactProtocol {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Email => "Email",
            Self::Sms => "SMS",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for ContactProtocol {
    fn from(s: &str) -> Self {
        match s {
            "Email" => Self::Email,
            "SMS" => Self::Sms,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for ContactProtocol {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContactProtocol {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for ContactProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The verification status of a contact method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContactMethodStatus {
    PendingVerification,
    Valid,
    Invalid,
    /// An unrecognized status value received from the service.
    Unknown(String),
}

impl ContactMethodStatus {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PendingVerification => "PendingVerification",
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for ContactMethodStatus {
    fn from(s: &str) -> Self {
        match s {
            "PendingVerification" => Self::PendingVerification,
            "Valid" => Self::Valid,
            "Invalid" => Self::Invalid,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for ContactMethodStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContactMethodStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for ContactMethodStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The state of a metric alarm.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlarmState {
    /// The metric is within the defined threshold.
    Ok,
    /// The metric is outside the defined threshold.
    Alarm,
    /// Not enough data is available to determine the state.
    InsufficientData,
    /// An unrecognized state value received from the service.
    Unknown(String),
}

impl AlarmState {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::Alarm => "ALARM",
            Self::InsufficientData => "INSUFFICIENT_DATA",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for AlarmState {
    fn from(s: &str) -> Self {
        match s {
            "OK" => Self::Ok,
            "ALARM" => Self::Alarm,
            "INSUFFICIENT_DATA" => Self::InsufficientData,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for AlarmState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AlarmState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for AlarmState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The arithmetic operation used to compare a metric against an alarm
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    GreaterThanOrEqualToThreshold,
    GreaterThanThreshold,
    LessThanThreshold,
    LessThanOrEqualToThreshold,
    /// An unrecognized operator value received from the service.
    Unknown(String),
}

impl ComparisonOperator {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::GreaterThanOrEqualToThreshold => "GreaterThanOrEqualToThreshold",
            Self::GreaterThanThreshold => "GreaterThanThreshold",
            Self::LessThanThreshold => "LessThanThreshold",
            Self::LessThanOrEqualToThreshold => "LessThanOrEqualToThreshold",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for ComparisonOperator {
    fn from(s: &str) -> Self {
        match s {
            "GreaterThanOrEqualToThreshold" => Self::GreaterThanOrEqualToThreshold,
            "GreaterThanThreshold" => Self::GreaterThanThreshold,
            "LessThanThreshold" => Self::LessThanThreshold,
            "LessThanOrEqualToThreshold" => Self::LessThanOrEqualToThreshold,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for ComparisonOperator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComparisonOperator {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an alarm handles missing metric datapoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TreatMissingData {
    /// Missing data is treated as breaching the threshold.
    Breaching,
    /// Missing data is treated as not breaching the threshold.
    NotBreaching,
    /// The current alarm state is maintained.
    Ignore,
    /// The alarm does not consider missing data.
    Missing,
    /// An unrecognized value received from the service.
    Unknown(String),
}

impl TreatMissingData {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Breaching => "breaching",
            Self::NotBreaching => "notBreaching",
            Self::Ignore => "ignore",
            Self::Missing => "missing",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for TreatMissingData {
    fn from(s: &str) -> Self {
        match s {
            "breaching" => Self::Breaching,
            "notBreaching" => Self::NotBreaching,
            "ignore" => Self::Ignore,
            "missing" => Self::Missing,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for TreatMissingData {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TreatMissingData {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for TreatMissingData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Enums - metrics
// ---------------------------------------------------------------------------

/// The statistic applied to metric datapoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetricStatistic {
    /// The lowest value observed during the period.
    Minimum,
    /// The highest value observed during the period.
    Maximum,
    /// The sum of all values observed during the period.
    Sum,
    /// Sum divided by SampleCount.
    Average,
    /// The number of datapoints used for the calculation.
    SampleCount,
    /// An unrecognized statistic value received from the service.
    Unknown(String),
}

impl MetricStatistic {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Minimum => "Minimum",
            Self::Maximum => "Maximum",
            Self::Sum => "Sum",
            Self::Average => "Average",
            Self::SampleCount => "SampleCount",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for MetricStatistic {
    fn from(s: &str) -> Self {
        match s {
            "Minimum" => Self::Minimum,
            "Maximum" => Self::Maximum,
            "Sum" => Self::Sum,
            "Average" => Self::Average,
            "SampleCount" => Self::SampleCount,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for MetricStatistic {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MetricStatistic {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for MetricStatistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metric that can be monitored on an instance or load balancer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetricName {
    CpuUtilization,
    NetworkIn,
    NetworkOut,
    StatusCheckFailed,
    StatusCheckFailedInstance,
    StatusCheckFailedSystem,
    ClientTlsNegotiationErrorCount,
    HealthyHostCount,
    UnhealthyHostCount,
    HttpCodeLb4xxCount,
    HttpCodeLb5xxCount,
    HttpCodeInstance2xxCount,
    HttpCodeInstance3xxCount,
    HttpCodeInstance4xxCount,
    HttpCodeInstance5xxCount,
    InstanceResponseTime,
    RejectedConnectionCount,
    RequestCount,
    DatabaseConnections,
    DiskQueueDepth,
    FreeStorageSpace,
    NetworkReceiveThroughput,
    NetworkTransmitThroughput,
    /// An unrecognized metric name received from the service.
    Unknown(String),
}

impl MetricName {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CpuUtilization => "CPUUtilization",
            Self::NetworkIn => "NetworkIn",
            Self::NetworkOut => "NetworkOut",
            Self::StatusCheckFailed => "StatusCheckFailed",
            Self::StatusCheckFailedInstance => "StatusCheckFailed_Instance",
            Self::StatusCheckFailedSystem => "StatusCheckFailed_System",
            Self::ClientTlsNegotiationErrorCount => "ClientTLSNegotiationErrorCount",
            Self::HealthyHostCount => "HealthyHostCount",
            Self::UnhealthyHostCount => "UnhealthyHostCount",
            Self::HttpCodeLb4xxCount => "HTTPCode_LB_4XX_Count",
            Self::HttpCodeLb5xxCount => "HTTPCode_LB_5XX_Count",
            Self::HttpCodeInstance2xxCount => "HTTPCode_Instance_2XX_Count",
            Self::HttpCodeInstance3xxCount => "HTTPCode_Instance_3XX_Count",
            Self::HttpCodeInstance4xxCount => "HTTPCode_Instance_4XX_Count",
            Self::HttpCodeInstance5xxCount => "HTTPCode_Instance_5XX_Count",
            Self::InstanceResponseTime => "InstanceResponseTime",
            Self::RejectedConnectionCount => "RejectedConnectionCount",
            Self::RequestCount => "RequestCount",
            Self::DatabaseConnections => "DatabaseConnections",
            Self::DiskQueueDepth => "DiskQueueDepth",
            Self::FreeStorageSpace => "FreeStorageSpace",
            Self::NetworkReceiveThroughput => "NetworkReceiveThroughput",
            Self::NetworkTransmitThroughput => "NetworkTransmitThroughput",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for MetricName {
    fn from(s: &str) -> Self {
        match s {
            "CPUUtilization" => Self::CpuUtilization,
            "NetworkIn" => Self::NetworkIn,
            "NetworkOut" => Self::NetworkOut,
            "StatusCheckFailed" => Self::StatusCheckFailed,
            "StatusCheckFailed_Instance" => Self::StatusCheckFailedInstance,
            "StatusCheckFailed_System" => Self::StatusCheckFailedSystem,
            "ClientTLSNegotiationErrorCount" => Self::ClientTlsNegotiationErrorCount,
            "HealthyHostCount" => Self::HealthyHostCount,
            "UnhealthyHostCount" => Self::UnhealthyHostCount,
            "HTTPCode_LB_4XX_Count" => Self::HttpCodeLb4xxCount,
            "HTTPCode_LB_5XX_Count" => Self::HttpCodeLb5xxCount,
            "HTTPCode_Instance_2XX_Count" => Self::HttpCodeInstance2xxCount,
            "HTTPCode_Instance_3XX_Count" => Self::HttpCodeInstance3xxCount,
            "HTTPCode_Instance_4XX_Count" => Self::HttpCodeInstance4xxCount,
            "HTTPCode_Instance_5XX_Count" => Self::HttpCodeInstance5xxCount,
            "InstanceResponseTime" => Self::InstanceResponseTime,
            "RejectedConnectionCount" => Self::RejectedConnectionCount,
            "RequestCount" => Self::RequestCount,
            "DatabaseConnections" => Self::DatabaseConnections,
            "DiskQueueDepth" => Self::DiskQueueDepth,
            "FreeStorageSpace" => Self::FreeStorageSpace,
            "NetworkReceiveThroughput" => Self::NetworkReceiveThroughput,
            "NetworkTransmitThroughput" => Self::NetworkTransmitThroughput,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for MetricName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MetricName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unit of a metric datapoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetricUnit {
    Seconds,
    Microseconds,
    Milliseconds,
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Bits,
    Kilobits,
    Megabits,
    Gigabits,
    Terabits,
    Percent,
    Count,
    BytesSecond,
    KilobytesSecond,
    MegabytesSecond,
    GigabytesSecond,
    TerabytesSecond,
    BitsSecond,
    KilobitsSecond,
    MegabitsSecond,
    GigabitsSecond,
    TerabitsSecond,
    CountSecond,
    None,
    /// An unrecognized unit value received from the service.
    Unknown(String),
}

impl MetricUnit {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Seconds => "Seconds",
            Self::Microseconds => "Microseconds",
            Self::Milliseconds => "Milliseconds",
            Self::Bytes => "Bytes",
            Self::Kilobytes => "Kilobytes",
            Self::Megabytes => "Megabytes",
            Self::Gigabytes => "Gigabytes",
            Self::Terabytes => "Terabytes",
            Self::Bits => "Bits",
            Self::Kilobits => "Kilobits",
            Self::Megabits => "Megabits",
            Self::Gigabits => "Gigabits",
            Self::Terabits => "Terabits",
            Self::Percent => "Percent",
            Self::Count => "Count",
            Self::BytesSecond => "Bytes/Second",
            Self::KilobytesSecond => "Kilobytes/Second",
            Self::MegabytesSecond => "Megabytes/Second",
            Self::GigabytesSecond => "Gigabytes/Second",
            Self::TerabytesSecond => "Terabytes/Second",
            Self::BitsSecond => "Bits/Second",
            Self::KilobitsSecond => "Kilobits/Second",
            Self::MegabitsSecond => "Megabits/Second",
            Self::GigabitsSecond => "Gigabits/Second",
            Self::TerabitsSecond => "Terabits/Second",
            Self::CountSecond => "Count/Second",
            Self::None => "None",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for MetricUnit {
    fn from(s: &str) -> Self {
        match s {
            "Seconds" => Self::Seconds,
            "Microseconds" => Self::Microseconds,
            "Milliseconds" => Self::Milliseconds,
            "Bytes" => Self::Bytes,
            "Kilobytes" => Self::Kilobytes,
            "Megabytes" => Self::Megabytes,
            "Gigabytes" => Self::Gigabytes,
            "Terabytes" => Self::Terabytes,
            "Bits" => Self::Bits,
            "Kilobits" => Self::Kilobits,
            "Megabits" => Self::Megabits,
            "Gigabits" => Self::Gigabits,
            "Terabits" => Self::Terabits,
            "Percent" => Self::Percent,
            "Count" => Self::Count,
            "Bytes/Second" => Self::BytesSecond,
            "Kilobytes/Second" => Self::KilobytesSecond,
            "Megabytes/Second" => Self::MegabytesSecond,
            "Gigabytes/Second" => Self::GigabytesSecond,
            "Terabytes/Second" => Self::TerabytesSecond,
            "Bits/Second" => Self::BitsSecond,
            "Kilobits/Second" => Self::KilobitsSecond,
            "Megabits/Second" => Self::MegabitsSecond,
            "Gigabits/Second" => Self::GigabitsSecond,
            "Terabits/Second" => Self::TerabitsSecond,
            "Count/Second" => Self::CountSecond,
            "None" => Self::None,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for MetricUnit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MetricUnit {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for MetricUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metric that can be monitored on a managed database.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RelationalDatabaseMetricName {
    CpuUtilization,
    DatabaseConnections,
    DiskQueueDepth,
    FreeStorageSpace,
    NetworkReceiveThroughput,
    NetworkTransmitThroughput,
    /// An unrecognized metric name received from the service.
    Unknown(String),
}

impl RelationalDatabaseMetricName {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CpuUtilization => "CPUUtilization",
            Self::DatabaseConnections => "DatabaseConnections",
            Self::DiskQueueDepth => "DiskQueueDepth",
            Self::FreeStorageSpace => "FreeStorageSpace",
            Self::NetworkReceiveThroughput => "NetworkReceiveThroughput",
            Self::NetworkTransmitThroughput => "NetworkTransmitThroughput",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for RelationalDatabaseMetricName {
    fn from(s: &str) -> Self {
        match s {
            "CPUUtilization" => Self::CpuUtilization,
            "DatabaseConnections" => Self::DatabaseConnections,
            "DiskQueueDepth" => Self::DiskQueueDepth,
            "FreeStorageSpace" => Self::FreeStorageSpace,
            "NetworkReceiveThroughput" => Self::NetworkReceiveThroughput,
            "NetworkTransmitThroughput" => Self::NetworkTransmitThroughput,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for RelationalDatabaseMetricName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RelationalDatabaseMetricName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for RelationalDatabaseMetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Enums - load balancer TLS certificates
// ---------------------------------------------------------------------------

/// The validation status of a TLS certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadBalancerTlsCertificateStatus {
    PendingValidation,
    Issued,
    Inactive,
    Expired,
    ValidationTimedOut,
    Revoked,
    Failed,
    /// The certificate status cannot be determined.
    UnknownValue,
    /// An unrecognized status value received from the service.
    Unknown(String),
}

impl LoadBalancerTlsCertificateStatus {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PendingValidation => "PENDING_VALIDATION",
            Self::Issued => "ISSUED",
            Self::Inactive => "INACTIVE",
            Self::Expired => "EXPIRED",
            Self::ValidationTimedOut => "VALIDATION_TIMED_OUT",
            Self::Revoked => "REVOKED",
            Self::Failed => "FAILED",
            Self::UnknownValue => "UNKNOWN",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for LoadBalancerTlsCertificateStatus {
    fn from(s: &str) -> Self {
        match s {
            "PENDING_VALIDATION" => Self::PendingValidation,
            "ISSUED" => Self::Issued,
            "INACTIVE" => Self::Inactive,
            "EXPIRED" => Self::Expired,
            "VALIDATION_TIMED_OUT" => Self::ValidationTimedOut,
            "REVOKED" => Self::Revoked,
            "FAILED" => Self::Failed,
            "UNKNOWN" => Self::UnknownValue,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for LoadBalancerTlsCertificateStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LoadBalancerTlsCertificateStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for LoadBalancerTlsCertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The validation status of a single domain on a TLS certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadBalancerTlsCertificateDomainStatus {
    PendingValidation,
    Failed,
    Success,
    /// An unrecognized status value received from the service.
    Unknown(String),
}

impl LoadBalancerTlsCertificateDomainStatus {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PendingValidation => "PENDING_VALIDATION",
            Self::Failed => "FAILED",
            Self::Success => "SUCCESS",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for LoadBalancerTlsCertificateDomainStatus {
    fn from(s: &str) -> Self {
        match s {
            "PENDING_VALIDATION" => Self::PendingValidation,
            "FAILED" => Self::Failed,
            "SUCCESS" => Self::Success,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for LoadBalancerTlsCertificateDomainStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LoadBalancerTlsCertificateDomainStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for LoadBalancerTlsCertificateDomainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a TLS certificate request failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadBalancerTlsCertificateFailureReason {
    NoAvailableContacts,
    AdditionalVerificationRequired,
    DomainNotAllowed,
    InvalidPublicDomain,
    Other,
    /// An unrecognized reason value received from the service.
    Unknown(String),
}

impl LoadBalancerTlsCertificateFailureReason {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NoAvailableContacts => "NO_AVAILABLE_CONTACTS",
            Self::AdditionalVerificationRequired => "ADDITIONAL_VERIFICATION_REQUIRED",
            Self::DomainNotAllowed => "DOMAIN_NOT_ALLOWED",
            Self::InvalidPublicDomain => "INVALID_PUBLIC_DOMAIN",
            Self::Other => "OTHER",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for LoadBalancerTlsCertificateFailureReason {
    fn from(s: &str) -> Self {
        match s {
            "NO_AVAILABLE_CONTACTS" => Self::NoAvailableContacts,
            "ADDITIONAL_VERIFICATION_REQUIRED" => Self::AdditionalVerificationRequired,
            "DOMAIN_NOT_ALLOWED" => Self::DomainNotAllowed,
            "INVALID_PUBLIC_DOMAIN" => Self::InvalidPublicDomain,
            "OTHER" => Self::Other,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for LoadBalancerTlsCertificateFailureReason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LoadBalancerTlsCertificateFailureReason {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for LoadBalancerTlsCertificateFailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The renewal status of a TLS certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadBalancerTlsCertificateRenewalStatus {
    PendingAutoRenewal,
    PendingValidation,
    Success,
    Failed,
    /// An unrecognized status value received from the service.
    Unknown(String),
}

impl LoadBalancerTlsCertificateRenewalStatus {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PendingAutoRenewal => "PENDING_AUTO_RENEWAL",
            Self::PendingValidation => "PENDING_VALIDATION",
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for LoadBalancerTlsCertificateRenewalStatus {
    fn from(s: &str) -> Self {
        match s {
            "PENDING_AUTO_RENEWAL" => Self::PendingAutoRenewal,
            "PENDING_VALIDATION" => Self::PendingValidation,
            "SUCCESS" => Self::Success,
            "FAILED" => Self::Failed,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for LoadBalancerTlsCertificateRenewalStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LoadBalancerTlsCertificateRenewalStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for LoadBalancerTlsCertificateRenewalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a TLS certificate was revoked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadBalancerTlsCertificateRevocationReason {
    Unspecified,
    KeyCompromise,
    CaCompromise,
    AffiliationChanged,
    Superceded,
    CessationOfOperation,
    CertificateHold,
    RemoveFromCrl,
    PrivilegeWithdrawn,
    AACompromise,
    /// An unrecognized reason value received from the service.
    Unknown(String),
}

impl LoadBalancerTlsCertificateRevocationReason {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::KeyCompromise => "KEY_COMPROMISE",
            Self::CaCompromise => "CA_COMPROMISE",
            Self::AffiliationChanged => "AFFILIATION_CHANGED",
            Self::Superceded => "SUPERCEDED",
            Self::CessationOfOperation => "CESSATION_OF_OPERATION",
            Self::CertificateHold => "CERTIFICATE_HOLD",
            Self::RemoveFromCrl => "REMOVE_FROM_CRL",
            Self::PrivilegeWithdrawn => "PRIVILEGE_WITHDRAWN",
            Self::AACompromise => "A_A_COMPROMISE",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for LoadBalancerTlsCertificateRevocationReason {
    fn from(s: &str) -> Self {
        match s {
            "UNSPECIFIED" => Self::Unspecified,
            "KEY_COMPROMISE" => Self::KeyCompromise,
            "CA_COMPROMISE" => Self::CaCompromise,
            "AFFILIATION_CHANGED" => Self::AffiliationChanged,
            "SUPERCEDED" => Self::Superceded,
            "CESSATION_OF_OPERATION" => Self::CessationOfOperation,
            "CERTIFICATE_HOLD" => Self::CertificateHold,
            "REMOVE_FROM_CRL" => Self::RemoveFromCrl,
            "PRIVILEGE_WITHDRAWN" => Self::PrivilegeWithdrawn,
            "A_A_COMPROMISE" => Self::AACompromise,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for LoadBalancerTlsCertificateRevocationReason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LoadBalancerTlsCertificateRevocationReason {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for LoadBalancerTlsCertificateRevocationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Enums - add-ons
// ---------------------------------------------------------------------------

/// The kind of add-on that can be enabled on a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AddOnType {
    /// Daily automatic snapshots.
    AutoSnapshot,
    /// An unrecognized add-on type received from the service.
    Unknown(String),
}

impl AddOnType {
    /// Returns the Lightsail wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AutoSnapshot => "AutoSnapshot",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for AddOnType {
    fn from(s: &str) -> Self {
        match s {
            "AutoSnapshot" => Self::AutoSnapshot,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl Serialize for AddOnType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AddOnType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for AddOnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Structs - tags, locations and add-ons
// ---------------------------------------------------------------------------

/// A key-value tag attached to a Lightsail resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// The tag key (up to 128 Unicode characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The tag value (up to 256 Unicode characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// The region and Availability Zone where a resource lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLocation {
    /// The Availability Zone, e.g. `us-east-2a`. Follows the format
    /// `<region-name><az-suffix>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// The AWS Region name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<RegionName>,
}

/// An add-on enabled on a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    /// The name of the add-on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The status of the add-on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The daily time when an automatic snapshot is created, in `HH:00`
    /// format (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_time_of_day: Option<String>,
    /// The next daily time an automatic snapshot will be created, in `HH:00`
    /// format (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_snapshot_time_of_day: Option<String>,
}

/// A request to enable or modify an add-on on a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnRequest {
    /// The add-on type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_on_type: Option<AddOnType>,
    /// Automatic snapshot settings, required when `add_on_type` is
    /// `AutoSnapshot`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_snapshot_add_on_request: Option<AutoSnapshotAddOnRequest>,
}

/// Automatic snapshot add-on settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoSnapshotAddOnRequest {
    /// The daily time when an automatic snapshot should be created, in
    /// `HH:00` format (UTC, hourly increments only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_time_of_day: Option<String>,
}

// ---------------------------------------------------------------------------
// Structs - blueprints and bundles
// ---------------------------------------------------------------------------

/// An instance image available for new instances: an operating system or a
/// preinstalled application stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    /// The blueprint ID, e.g. `os_amlinux_2016_03` or `app_wordpress_4_4`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint_id: Option<String>,
    /// The friendly name, e.g. `Amazon Linux` or `WordPress`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The group the blueprint belongs to, e.g. `amazon-linux`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Whether the blueprint is an operating system or an application stack.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub blueprint_type: Option<BlueprintType>,
    /// A description of the blueprint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the blueprint is active. Inactive blueprints are no longer
    /// offered for new instances but remain usable for existing ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// The minimum bundle power required to run this blueprint, e.g. `500`.
    /// `0` indicates the blueprint runs on all instance sizes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_power: Option<i32>,
    /// The version of the blueprint's operating system or application,
    /// e.g. `2016.03.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// The version code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<String>,
    /// The product URL for additional information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    /// The end-user license agreement URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
    /// The operating system platform the blueprint supports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<InstancePlatform>,
}

/// A bundle: the specification (plan) that determines an instance's power,
/// memory, storage and price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// The monthly price in US dollars, e.g. `5.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f32>,
    /// The number of vCPUs, e.g. `2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_count: Option<i32>,
    /// The size of the SSD in GB, e.g. `30`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_size_in_gb: Option<i32>,
    /// The bundle ID, e.g. `micro_1_0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    /// The Amazon EC2 instance type, e.g. `t2.micro`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Whether the bundle is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// The friendly name, e.g. `Micro`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// A numeric value representing the bundle's power. Compared against a
    /// blueprint's `min_power` to determine compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<i32>,
    /// The amount of RAM in GB, e.g. `2.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_size_in_gb: Option<f32>,
    /// The monthly data transfer allowance in GB, e.g. `2000`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_per_month_in_gb: Option<i32>,
    /// The operating system platforms the bundle supports. A WINDOWS bundle
    /// only supports WINDOWS blueprints; a LINUX_UNIX bundle only supports
    /// LINUX_UNIX blueprints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_platforms: Option<Vec<InstancePlatform>>,
}

// ---------------------------------------------------------------------------
// Structs - disks and disk snapshots
// ---------------------------------------------------------------------------

/// A block storage disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disk {
    /// The unique name of the disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The Amazon Resource Name (ARN) of the disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// The support code, used by AWS support to look up the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,
    /// The date and time (epoch seconds) when the disk was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    /// The region and Availability Zone where the disk lives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResourceLocation>,
    /// The Lightsail resource type (`Disk`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    /// The tags attached to the disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// The add-ons enabled on the disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_ons: Option<Vec<AddOn>>,
    /// The size of the disk in GB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_gb: Option<i32>,
    /// Whether this disk is a system disk (has an operating system loaded
    /// on it).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_system_disk: Option<bool>,
    /// The input/output operations per second (IOPS) of the disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    /// The disk path, e.g. `/dev/xvdf`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The state of the disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<DiskState>,
    /// The name of the instance the disk is attached to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_to: Option<String>,
    /// Whether the disk is attached to an instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_attached: Option<bool>,
    /// (Deprecated) The attachment state of the disk. Superseded by
    /// `is_attached`; still returned as `attached` for attached disks in
    /// API version 2017-09-21 and earlier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_state: Option<String>,
    /// (Deprecated) The number of GB in use. Superseded in API version
    /// 2017-09-21.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gb_in_use: Option<i32>,
}

/// A mapping from a disk of a source instance to a new disk created from a
/// snapshot of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskMap {
    /// The original disk path of the source instance, e.g. `/dev/xvdf`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_disk_path: Option<String>,
    /// The name of the new disk, e.g. `my-new-disk`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_disk_name: Option<String>,
}

/// A point-in-time snapshot of a block storage disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskSnapshot {
    /// The name of the disk snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The Amazon Resource Name (ARN) of the disk snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// The support code, used by AWS support to look up the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,
    /// The date and time (epoch seconds) when the snapshot was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    /// The region and Availability Zone where the snapshot lives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResourceLocation>,
    /// The Lightsail resource type (`DiskSnapshot`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    /// The tags attached to the snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// The size of the snapshot in GB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_gb: Option<i32>,
    /// The status of the snapshot operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<DiskSnapshotState>,
    /// The progress of the snapshot operation, e.g. `100%`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
    /// The name of the source disk, when snapshotting a disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_disk_name: Option<String>,
    /// The ARN of the source disk, when snapshotting a disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_disk_arn: Option<String>,
    /// The name of the source instance, when snapshotting an instance's
    /// system disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_instance_name: Option<String>,
    /// The ARN of the source instance, when snapshotting an instance's
    /// system disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_instance_arn: Option<String>,
    /// Whether the snapshot was created automatically by the auto-snapshot
    /// add-on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_from_auto_snapshot: Option<bool>,
}

// ---------------------------------------------------------------------------
// Structs - operations
// ---------------------------------------------------------------------------

/// A record of an asynchronous API operation and its progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// The ID of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The name of the resource the operation affects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// The resource type the operation affects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    /// The date and time (epoch seconds) when the operation was initialized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    /// The region and Availability Zone of the affected resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResourceLocation>,
    /// Whether the operation has reached a terminal state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_terminal: Option<bool>,
    /// Details about the operation, e.g. the disk name for an attach
    /// operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_details: Option<String>,
    /// The kind of work the operation performs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<OperationType>,
    /// The status of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OperationStatus>,
    /// The date and time (epoch seconds) when the status last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_changed_at: Option<f64>,
    /// The error code, when the operation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// The error details, when the operation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

// ---------------------------------------------------------------------------
// Structs - instances
// ---------------------------------------------------------------------------

/// A Lightsail virtual private server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    /// The name the user gave the instance, e.g. `Amazon_Linux-1GB-Ohio-1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The Amazon Resource Name (ARN) of the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// The support code, used by AWS support to look up the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,
    /// The date and time (epoch seconds) when the instance was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    /// The region and Availability Zone where the instance lives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResourceLocation>,
    /// The Lightsail resource type (`Instance`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    /// The tags attached to the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// The blueprint ID the instance was created from, e.g.
    /// `os_amlinux_2016_03`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint_id: Option<String>,
    /// The friendly name of the blueprint, e.g. `Amazon Linux`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint_name: Option<String>,
    /// The bundle ID the instance runs on, e.g. `micro_1_0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    /// The add-ons enabled on the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_ons: Option<Vec<AddOn>>,
    /// Whether the instance has a static IP attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_static_ip: Option<bool>,
    /// The private IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    /// The public IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip_address: Option<String>,
    /// The IPv6 address, if one is assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
    /// The vCPU, disk and RAM specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<InstanceHardware>,
    /// The monthly transfer allowance and open ports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<InstanceNetworking>,
    /// The running state, e.g. `running` or `pending`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<InstanceState>,
    /// The user name for connecting to the instance, e.g. `ec2-user`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// The name of the SSH key pair used by the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key_name: Option<String>,
}

/// The hardware specification of an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceHardware {
    /// The number of vCPUs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_count: Option<i32>,
    /// The disks attached to the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disks: Option<Vec<Disk>>,
    /// The amount of RAM in GB, e.g. `1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_size_in_gb: Option<f32>,
}

/// The networking configuration of an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceNetworking {
    /// The monthly data transfer allowance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_transfer: Option<MonthlyTransfer>,
    /// The firewall rules (open ports) of the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<InstancePortInfo>>,
}

/// The monthly data transfer allowance of an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTransfer {
    /// The amount allocated per month, in GB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gb_per_month_allocated: Option<i32>,
}

/// A firewall rule (open port range) on an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstancePortInfo {
    /// The first port in the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    /// The last port in the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
    /// The IP protocol name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<NetworkProtocol>,
    /// The location from which access is allowed, e.g. `Anywhere (0.0.0.0/0)`
    /// or `Custom` when a CIDR list is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_from: Option<String>,
    /// The type of access (`Public` or `Private`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_type: Option<PortAccessType>,
    /// The common name of the rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    /// The access direction (`inbound` or `outbound`). Lightsail currently
    /// supports only inbound access direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_direction: Option<AccessDirection>,
    /// The IPv4 address or range of addresses allowed to connect, in CIDR
    /// notation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidrs: Option<Vec<String>>,
    /// An alias that defines access for a preconfigured range of IP
    /// addresses. The only alias currently supported is `lightsail-connect`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_list_aliases: Option<Vec<String>>,
}

/// The running state of an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceState {
    /// The numeric status code of the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    /// The state of the instance, e.g. `running` or `pending`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Temporary credentials for connecting to an instance over SSH or RDP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceAccessDetails {
    /// For SSH access: the public key certificate matching `private_key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_key: Option<String>,
    /// The date and time (epoch seconds) when these credentials expire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<f64>,
    /// The public IP address of the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// For RDP access: the password. Empty for a recently created Windows
    /// instance whose password is not yet available; use `password_data` or
    /// retry later.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// For RDP access: the encrypted password data, decryptable with the
    /// instance's key pair when the plain-text password is not available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_data: Option<PasswordData>,
    /// For SSH access: the temporary private key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// The protocol of these access details (`ssh` or `rdp`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<InstanceAccessProtocol>,
    /// The name of the instance the access details apply to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    /// The user name for connecting to the instance, e.g. `ec2-user`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// The public SSH host keys or the RDP certificate of the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_keys: Option<Vec<HostKeyAttributes>>,
}

/// The encrypted administrator password of a Windows instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordData {
    /// The encrypted password, decryptable with the key pair named in
    /// `key_pair_name`. Empty until the password is available, typically
    /// within 15 minutes of instance creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciphertext: Option<String>,
    /// The name of the key pair that can decrypt `ciphertext`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair_name: Option<String>,
}

/// A public SSH host key or RDP certificate of an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostKeyAttributes {
    /// The SSH host key algorithm or the RDP certificate format, e.g.
    /// `ssh-rsa` or `x509-cert`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// The public SSH host key or the RDP certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// The date and time (epoch seconds) when the host key or certificate
    /// was last recorded by Lightsail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witnessed_at: Option<f64>,
    /// The SHA-1 fingerprint, e.g.
    /// `SHA1:1CHH6FaAaXjtFOsR/t83vf91SR0` for an SSH host key.
    #[serde(rename = "fingerprintSHA1", skip_serializing_if = "Option::is_none")]
    pub fingerprint_sha1: Option<String>,
    /// The SHA-256 fingerprint.
    #[serde(rename = "fingerprintSHA256", skip_serializing_if = "Option::is_none")]
    pub fingerprint_sha256: Option<String>,
    /// For RDP certificates: the date and time (epoch seconds) when the
    /// certificate becomes valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_valid_before: Option<f64>,
    /// For RDP certificates: the date and time (epoch seconds) when the
    /// certificate expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_valid_after: Option<f64>,
}

/// An instance to export to Amazon EC2 via a CloudFormation stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceEntry {
    /// The name of the export snapshot record containing the exported
    /// instance snapshot to use as the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// The EC2 instance type to launch, e.g. `t2.micro`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Where the new instance's firewall configuration comes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_info_source: Option<PortInfoSourceType>,
    /// A launch script that runs on the new instance before it boots.
    /// Depending on the blueprint, the tooling differs: Amazon Linux uses
    /// `yum`, Debian and Ubuntu use `apt-get`, FreeBSD uses `pkg`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    /// The Availability Zone to launch the new instance into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
}

// ---------------------------------------------------------------------------
// Structs - contact methods and alarms
// ---------------------------------------------------------------------------

/// An email address or mobile phone number registered to receive
/// notifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMethod {
    /// The destination: an email address or a phone number in E.164 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_endpoint: Option<String>,
    /// The verification status of the contact method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactMethodStatus>,
    /// The protocol of the contact method (`Email` or `SMS`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<ContactProtocol>,
    /// The name of the contact method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The Amazon Resource Name (ARN) of the contact method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// The date and time (epoch seconds) when the contact method was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    /// The region and Availability Zone of the contact method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResourceLocation>,
    /// The Lightsail resource type (`ContactMethod`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    /// The support code, used by AWS support to look up the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,
}

/// A metric alarm watching a single resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    /// The name of the alarm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The Amazon Resource Name (ARN) of the alarm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// The date and time (epoch seconds) when the alarm was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    /// The region and Availability Zone of the alarm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResourceLocation>,
    /// The Lightsail resource type (`Alarm`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    /// The support code, used by AWS support to look up the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,
    /// The resource the alarm monitors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored_resource_info: Option<MonitoredResourceInfo>,
    /// The comparison applied between the statistic and the threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_operator: Option<ComparisonOperator>,
    /// The number of most recent periods over which data is evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_periods: Option<i32>,
    /// The period in seconds over which the statistic is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<i32>,
    /// The value the statistic is compared against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// The number of datapoints within the evaluation periods that must
    /// breach to trigger the alarm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datapoints_to_alarm: Option<i32>,
    /// How the alarm handles missing datapoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treat_missing_data: Option<TreatMissingData>,
    /// The statistic applied to the metric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistic: Option<MetricStatistic>,
    /// The metric the alarm watches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<MetricName>,
    /// The current state of the alarm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AlarmState>,
    /// The unit of the metric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<MetricUnit>,
    /// The contact protocols used for the alarm, e.g. `Email` and/or `SMS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_protocols: Option<Vec<ContactProtocol>>,
    /// The alarm states that trigger a notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_triggers: Option<Vec<AlarmState>>,
    /// Whether notifications are enabled for the alarm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_enabled: Option<bool>,
}

/// The resource a Lightsail alarm monitors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredResourceInfo {
    /// The Amazon Resource Name (ARN) of the monitored resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// The name of the monitored resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The resource type of the monitored resource. Instances, load
    /// balancers and relational databases are the only resources that
    /// currently support alarms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
}

// ---------------------------------------------------------------------------
// Structs - relational databases
// ---------------------------------------------------------------------------

/// A managed database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationalDatabase {
    /// The unique name of the database resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The Amazon Resource Name (ARN) of the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// The support code, used by AWS support to look up the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,
    /// The date and time (epoch seconds) when the database was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    /// The region and Availability Zone where the database lives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResourceLocation>,
    /// The Lightsail resource type (`RelationalDatabase`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    /// The tags attached to the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// The blueprint ID: the engine and engine version, e.g. `mysql_8_0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database_blueprint_id: Option<String>,
    /// The bundle ID: the performance specification, e.g. `micro_1_0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database_bundle_id: Option<String>,
    /// The name of the master database created at launch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_database_name: Option<String>,
    /// The CPU, disk and RAM specification of the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<RelationalDatabaseHardware>,
    /// The state of the database, e.g. `available`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// The secondary Availability Zone of a high-availability database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_availability_zone: Option<String>,
    /// Whether automated backup retention is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_enabled: Option<bool>,
    /// Changes that have been requested but not yet applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_modified_values: Option<PendingModifiedRelationalDatabaseValues>,
    /// The database engine, e.g. `mysql`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    /// The database engine version, e.g. `5.7.23`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    /// The latest point in time (epoch seconds) to which the database can be
    /// restored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_restorable_time: Option<f64>,
    /// The master user name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    /// The status of parameter updates for the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_apply_status: Option<String>,
    /// The daily window during which automated backups are created, e.g.
    /// `16:18-16:48`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    /// The weekly window during which system maintenance can occur, e.g.
    /// `Tue:17:00-Tue:17:30`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    /// Whether the database is publicly accessible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,
    /// The endpoint for connecting to the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_endpoint: Option<RelationalDatabaseEndpoint>,
    /// Maintenance actions pending for the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_maintenance_actions: Option<Vec<PendingMaintenanceAction>>,
    /// The certificate authority associated with the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_certificate_identifier: Option<String>,
}

/// The hardware specification of a managed database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationalDatabaseHardware {
    /// The number of vCPUs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_count: Option<i32>,
    /// The size of the disk in GB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_size_in_gb: Option<i32>,
    /// The amount of RAM in GB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_size_in_gb: Option<f32>,
}

/// The connection endpoint of a managed database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationalDatabaseEndpoint {
    /// The port the database listens on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// The DNS address of the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Requested database changes that have not been applied yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingModifiedRelationalDatabaseValues {
    /// The pending master user password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    /// The pending database engine version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    /// The pending automated backup retention setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_enabled: Option<bool>,
}

/// A maintenance action pending for a managed database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingMaintenanceAction {
    /// The type of pending action, e.g. `system-update`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// A description of the pending action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The effective date (epoch seconds) of the pending action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_apply_date: Option<f64>,
}

/// A snapshot of a managed database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationalDatabaseSnapshot {
    /// The name of the database snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The Amazon Resource Name (ARN) of the database snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// The support code, used by AWS support to look up the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,
    /// The date and time (epoch seconds) when the snapshot was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    /// The region and Availability Zone where the snapshot lives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResourceLocation>,
    /// The Lightsail resource type (`RelationalDatabaseSnapshot`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    /// The tags attached to the snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// The database engine of the source database, e.g. `mysql`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    /// The engine version of the source database, e.g. `5.7.23`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    /// The size of the disk in GB, e.g. `32`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_gb: Option<i32>,
    /// The state of the snapshot, e.g. `available`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// The name of the source database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_relational_database_name: Option<String>,
    /// The ARN of the source database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_relational_database_arn: Option<String>,
    /// The bundle ID of the source database, e.g. `micro_1_0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_relational_database_bundle_id: Option<String>,
    /// The blueprint ID of the source database, e.g. `mysql_8_0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_relational_database_blueprint_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Structs - load balancer TLS certificates
// ---------------------------------------------------------------------------

/// An SSL/TLS certificate associated with a Lightsail load balancer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerTlsCertificate {
    /// The name of the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The Amazon Resource Name (ARN) of the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// The support code, used by AWS support to look up the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,
    /// The date and time (epoch seconds) when the certificate was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    /// The region and Availability Zone of the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResourceLocation>,
    /// The Lightsail resource type (`LoadBalancerTlsCertificate`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    /// The tags attached to the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// The name of the load balancer the certificate is associated with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_name: Option<String>,
    /// Whether the certificate is attached to a load balancer. A load
    /// balancer can have one attached and one inactive certificate at a time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_attached: Option<bool>,
    /// The validation status of the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LoadBalancerTlsCertificateStatus>,
    /// The domain name the certificate covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// The records used to validate control of the certificate's domains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_validation_records: Option<Vec<LoadBalancerTlsCertificateDomainValidationRecord>>,
    /// Why the certificate request failed, when it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<LoadBalancerTlsCertificateFailureReason>,
    /// The date and time (epoch seconds) when the certificate was issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<f64>,
    /// The certificate authority that issued the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// The public key algorithm, e.g. `RSA-2048`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_algorithm: Option<String>,
    /// The date and time (epoch seconds) after which the certificate is no
    /// longer valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_after: Option<f64>,
    /// The date and time (epoch seconds) before which the certificate is not
    /// valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<f64>,
    /// The status of the certificate's managed renewal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_summary: Option<LoadBalancerTlsCertificateRenewalSummary>,
    /// Why the certificate was revoked, when it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation_reason: Option<LoadBalancerTlsCertificateRevocationReason>,
    /// The date and time (epoch seconds) when the certificate was revoked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked_at: Option<f64>,
    /// The serial number of the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    /// The algorithm used to sign the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<String>,
    /// The name of the entity associated with the public key in the
    /// certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Additional domain names (subject alternative names) the certificate
    /// covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_alternative_names: Option<Vec<String>>,
}

/// A DNS record used to validate control of a domain on a TLS certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerTlsCertificateDomainValidationRecord {
    /// The name of the validation record, a CNAME under the domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The DNS record type of the validation record, e.g. `CNAME`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    /// The value the validation record must resolve to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// The validation status of the domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_status: Option<LoadBalancerTlsCertificateDomainStatus>,
    /// The domain name being validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
}

/// The managed-renewal status of a TLS certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerTlsCertificateRenewalSummary {
    /// The status of the renewal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_status: Option<LoadBalancerTlsCertificateRenewalStatus>,
    /// Per-domain validation status for the renewal, as Lightsail re-validates
    /// each domain before renewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_validation_options: Option<Vec<LoadBalancerTlsCertificateDomainValidationOption>>,
}

/// The validation status of a single domain during certificate renewal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerTlsCertificateDomainValidationOption {
    /// The domain name being validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// The validation status of the domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_status: Option<LoadBalancerTlsCertificateDomainStatus>,
}

// ---------------------------------------------------------------------------
// Structs - logs and metrics
// ---------------------------------------------------------------------------

/// A single database log event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    /// The date and time (epoch seconds) when the event was emitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    /// The message of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A single metric datapoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDatapoint {
    /// The average of the values observed during the period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    /// The highest value observed during the period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// The lowest value observed during the period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// The number of values used for the calculation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<f64>,
    /// The sum of the values observed during the period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,
    /// The timestamp (epoch seconds) of the datapoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    /// The unit of the datapoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<MetricUnit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_tag_in_camel_case() {
        let tag = Tag {
            key: Some("Environment".to_owned()),
            value: Some("Production".to_owned()),
        };
        let json = serde_json::to_string(&tag).expect("serialize Tag");
        assert_eq!(json, r#"{"key":"Environment","value":"Production"}"#);
    }

    #[test]
    fn test_should_serialize_default_shape_as_empty_object() {
        let json = serde_json::to_string(&Blueprint::default()).expect("serialize Blueprint");
        assert_eq!(json, "{}");
        let json = serde_json::to_string(&Disk::default()).expect("serialize Disk");
        assert_eq!(json, "{}");
        let json = serde_json::to_string(&Alarm::default()).expect("serialize Alarm");
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_should_leave_unset_blueprint_fields_absent() {
        let blueprint = Blueprint {
            blueprint_id: Some("app_wordpress_4_4".to_owned()),
            name: Some("WordPress".to_owned()),
            is_active: Some(true),
            ..Default::default()
        };
        assert_eq!(blueprint.blueprint_id.as_deref(), Some("app_wordpress_4_4"));
        assert_eq!(blueprint.name.as_deref(), Some("WordPress"));
        assert_eq!(blueprint.is_active, Some(true));
        assert_eq!(blueprint.group, None);
        assert_eq!(blueprint.min_power, None);
        assert_eq!(blueprint.platform, None);

        let json = serde_json::to_string(&blueprint).expect("serialize Blueprint");
        assert!(json.contains(r#""blueprintId":"app_wordpress_4_4""#));
        assert!(json.contains(r#""name":"WordPress""#));
        assert!(json.contains(r#""isActive":true"#));
        assert!(!json.contains("group"));
        assert!(!json.contains("minPower"));
    }

    #[test]
    fn test_should_rename_blueprint_type_to_type_on_the_wire() {
        let blueprint = Blueprint {
            blueprint_type: Some(BlueprintType::App),
            ..Default::default()
        };
        let json = serde_json::to_string(&blueprint).expect("serialize Blueprint");
        assert_eq!(json, r#"{"type":"app"}"#);
    }

    #[test]
    fn test_should_distinguish_absent_from_empty_collection() {
        let without = Bundle::default();
        let with_empty = Bundle {
            supported_platforms: Some(Vec::new()),
            ..Default::default()
        };
        let json = serde_json::to_string(&without).expect("serialize Bundle");
        assert!(!json.contains("supportedPlatforms"));
        let json = serde_json::to_string(&with_empty).expect("serialize Bundle");
        assert_eq!(json, r#"{"supportedPlatforms":[]}"#);
    }

    #[test]
    fn test_should_compare_operations_field_by_field() {
        let base = Operation {
            id: Some("op-1".to_owned()),
            status: Some(OperationStatus::Failed),
            operation_type: Some(OperationType::CreateInstance),
            ..Default::default()
        };
        let same = base.clone();
        assert_eq!(base, same);

        let differing = Operation {
            error_details: Some("insufficient capacity".to_owned()),
            ..base.clone()
        };
        assert_ne!(base, differing);
    }

    #[test]
    fn test_should_roundtrip_documented_enum_values() {
        let state: DiskState = serde_json::from_str(r#""in-use""#).expect("deserialize DiskState");
        assert_eq!(state, DiskState::InUse);
        assert_eq!(
            serde_json::to_string(&state).expect("serialize DiskState"),
            r#""in-use""#
        );

        let state: DiskState = serde_json::from_str(r#""unknown""#).expect("deserialize DiskState");
        assert_eq!(state, DiskState::UnknownValue);
    }

    #[test]
    fn test_should_pass_undocumented_enum_values_through() {
        let state: DiskState =
            serde_json::from_str(r#""hibernating""#).expect("deserialize DiskState");
        assert_eq!(state, DiskState::Unknown("hibernating".to_owned()));
        assert_eq!(state.as_str(), "hibernating");
        assert_eq!(
            serde_json::to_string(&state).expect("serialize DiskState"),
            r#""hibernating""#
        );
    }

    #[test]
    fn test_should_use_wire_spellings_for_metric_enums() {
        assert_eq!(MetricName::CpuUtilization.as_str(), "CPUUtilization");
        assert_eq!(MetricName::HttpCodeLb4xxCount.as_str(), "HTTPCode_LB_4XX_Count");
        assert_eq!(
            MetricName::from("StatusCheckFailed_Instance"),
            MetricName::StatusCheckFailedInstance
        );
        assert_eq!(MetricUnit::BytesSecond.as_str(), "Bytes/Second");
        assert_eq!(MetricUnit::from("Count/Second"), MetricUnit::CountSecond);
        assert_eq!(TreatMissingData::NotBreaching.as_str(), "notBreaching");
    }

    #[test]
    fn test_should_serialize_timestamps_as_epoch_numbers() {
        let operation = Operation {
            created_at: Some(1_479_893_217.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&operation).expect("serialize Operation");
        assert_eq!(json, r#"{"createdAt":1479893217.0}"#);
    }

    #[test]
    fn test_should_deserialize_disk_with_nested_shapes() {
        let json = r#"{
            "name": "my-disk",
            "arn": "arn:aws:lightsail:us-east-2:123456789012:Disk/my-disk",
            "createdAt": 1479893217.0,
            "location": {"availabilityZone": "us-east-2a", "regionName": "us-east-2"},
            "resourceType": "Disk",
            "tags": [{"key": "team", "value": "storage"}],
            "sizeInGb": 32,
            "isSystemDisk": false,
            "iops": 240,
            "state": "available",
            "isAttached": false
        }"#;
        let disk: Disk = serde_json::from_str(json).expect("deserialize Disk");
        assert_eq!(disk.name.as_deref(), Some("my-disk"));
        assert_eq!(disk.size_in_gb, Some(32));
        assert_eq!(disk.state, Some(DiskState::Available));
        assert_eq!(disk.resource_type, Some(ResourceType::Disk));
        assert_eq!(
            disk.location.as_ref().and_then(|l| l.region_name.clone()),
            Some(RegionName::UsEast2)
        );
        let tags = disk.tags.as_deref().expect("disk tags");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].key.as_deref(), Some("team"));
        assert_eq!(disk.attached_to, None);
        assert_eq!(disk.add_ons, None);
    }

    #[test]
    fn test_should_roundtrip_alarm_through_json() {
        let alarm = Alarm {
            name: Some("cpu-high".to_owned()),
            comparison_operator: Some(ComparisonOperator::GreaterThanOrEqualToThreshold),
            evaluation_periods: Some(5),
            period: Some(300),
            threshold: Some(90.0),
            treat_missing_data: Some(TreatMissingData::Breaching),
            statistic: Some(MetricStatistic::Average),
            metric_name: Some(MetricName::CpuUtilization),
            state: Some(AlarmState::Alarm),
            unit: Some(MetricUnit::Percent),
            contact_protocols: Some(vec![ContactProtocol::Email, ContactProtocol::Sms]),
            notification_triggers: Some(vec![AlarmState::Alarm, AlarmState::Ok]),
            notification_enabled: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_string(&alarm).expect("serialize Alarm");
        assert!(json.contains(r#""metricName":"CPUUtilization""#));
        assert!(json.contains(r#""state":"ALARM""#));
        assert!(json.contains(r#""contactProtocols":["Email","SMS"]"#));
        let parsed: Alarm = serde_json::from_str(&json).expect("deserialize Alarm");
        assert_eq!(alarm, parsed);
    }

    #[test]
    fn test_should_deserialize_relational_database_description() {
        let json = r#"{
            "name": "my-db",
            "state": "available",
            "engine": "mysql",
            "engineVersion": "5.7.23",
            "masterEndpoint": {"port": 3306, "address": "ls.example.rds.amazonaws.com"},
            "hardware": {"cpuCount": 1, "diskSizeInGb": 40, "ramSizeInGb": 1.0},
            "pendingModifiedValues": {},
            "backupRetentionEnabled": true
        }"#;
        let db: RelationalDatabase =
            serde_json::from_str(json).expect("deserialize RelationalDatabase");
        assert_eq!(db.state.as_deref(), Some("available"));
        assert_eq!(
            db.master_endpoint.as_ref().and_then(|e| e.port),
            Some(3306)
        );
        assert_eq!(
            db.hardware.as_ref().and_then(|h| h.disk_size_in_gb),
            Some(40)
        );
        assert_eq!(
            db.pending_modified_values,
            Some(PendingModifiedRelationalDatabaseValues::default())
        );
    }

    #[test]
    fn test_should_display_wire_values() {
        assert_eq!(ResourceType::RelationalDatabase.to_string(), "RelationalDatabase");
        assert_eq!(RegionName::EuCentral1.to_string(), "eu-central-1");
        assert_eq!(InstancePlatform::LinuxUnix.to_string(), "LINUX_UNIX");
        assert_eq!(DiskSnapshotState::Completed.to_string(), "completed");
        assert_eq!(OperationStatus::Succeeded.to_string(), "Succeeded");
        assert_eq!(OperationType::CreateDiskFromSnapshot.to_string(), "CreateDiskFromSnapshot");
        assert_eq!(InstanceAccessProtocol::Rdp.to_string(), "rdp");
        assert_eq!(PortInfoSourceType::Closed.to_string(), "CLOSED");
        assert_eq!(NetworkProtocol::Icmp.to_string(), "icmp");
        assert_eq!(AccessDirection::Inbound.to_string(), "inbound");
        assert_eq!(ContactMethodStatus::PendingVerification.to_string(), "PendingVerification");
        assert_eq!(AlarmState::InsufficientData.to_string(), "INSUFFICIENT_DATA");
        assert_eq!(
            LoadBalancerTlsCertificateStatus::ValidationTimedOut.to_string(),
            "VALIDATION_TIMED_OUT"
        );
        assert_eq!(
            LoadBalancerTlsCertificateRevocationReason::AACompromise.to_string(),
            "A_A_COMPROMISE"
        );
        assert_eq!(AddOnType::AutoSnapshot.to_string(), "AutoSnapshot");
    }

    #[test]
    fn test_should_serialize_host_key_fingerprint_names_verbatim() {
        let key = HostKeyAttributes {
            algorithm: Some("ssh-rsa".to_owned()),
            fingerprint_sha1: Some("SHA1:1CHH6FaAaXjtFOsR/t83vf91SR0".to_owned()),
            fingerprint_sha256: Some(
                "SHA256:KTsMnRBh1IhD17HpdfsbzeGA4jOijm5tyXsMjKVbB8o".to_owned(),
            ),
            ..Default::default()
        };
        let json = serde_json::to_string(&key).expect("serialize HostKeyAttributes");
        assert!(json.contains(r#""fingerprintSHA1""#));
        assert!(json.contains(r#""fingerprintSHA256""#));
    }

    #[test]
    fn test_should_deserialize_tls_certificate_with_validation_records() {
        let json = r#"{
            "name": "my-cert",
            "status": "PENDING_VALIDATION",
            "domainName": "example.com",
            "domainValidationRecords": [{
                "name": "_a79865eb4cd1a6ab990a45779b4e0b96.example.com",
                "type": "CNAME",
                "value": "_d04014c5ab4aa7c08a5a2bfa37f0fdd9.acm-validations.aws",
                "validationStatus": "PENDING_VALIDATION",
                "domainName": "example.com"
            }],
            "renewalSummary": {
                "renewalStatus": "PENDING_AUTO_RENEWAL",
                "domainValidationOptions": [
                    {"domainName": "example.com", "validationStatus": "SUCCESS"}
                ]
            }
        }"#;
        let cert: LoadBalancerTlsCertificate =
            serde_json::from_str(json).expect("deserialize LoadBalancerTlsCertificate");
        assert_eq!(
            cert.status,
            Some(LoadBalancerTlsCertificateStatus::PendingValidation)
        );
        let records = cert
            .domain_validation_records
            .as_deref()
            .expect("validation records");
        assert_eq!(records[0].record_type.as_deref(), Some("CNAME"));
        assert_eq!(
            cert.renewal_summary.as_ref().and_then(|r| r.renewal_status.clone()),
            Some(LoadBalancerTlsCertificateRenewalStatus::PendingAutoRenewal)
        );
    }
}
