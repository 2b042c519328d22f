//! Instance output types.

use serde::{Deserialize, Serialize};

use crate::types::{Instance, InstanceAccessDetails, Operation};

/// Output for the `CreateInstances` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstancesOutput {
    /// The operation records describing the request's progress, one per
    /// created instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}

/// Output for the `CreateInstancesFromSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstancesFromSnapshotOutput {
    /// The operation records describing the request's progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}

/// Output for the `GetInstance` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInstanceOutput {
    /// The requested instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<Instance>,
}

/// Output for the `GetInstances` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInstancesOutput {
    /// The instances in the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<Instance>>,

    /// The token for the next page of results, present when more results
    /// exist than fit in a single response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Output for the `GetInstanceAccessDetails` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInstanceAccessDetailsOutput {
    /// Temporary credentials for connecting to the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_details: Option<InstanceAccessDetails>,
}

/// Output for the `CreateCloudFormationStack` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCloudFormationStackOutput {
    /// The operation records describing the request's progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OperationStatus, OperationType};

    #[test]
    fn test_should_deserialize_create_instances_response() {
        let json = r#"{
            "operations": [{
                "id": "3e8e4e9d-a2ac-4d45-8bbd-86c34bbd52bf",
                "resourceName": "web-1",
                "resourceType": "Instance",
                "createdAt": 1479893217.0,
                "isTerminal": false,
                "operationType": "CreateInstance",
                "status": "Started"
            }]
        }"#;
        let output: CreateInstancesOutput =
            serde_json::from_str(json).expect("deserialize CreateInstancesOutput");
        let operations = output.operations.as_deref().expect("operations");
        assert_eq!(operations.len(), 1);
        assert_eq!(
            operations[0].operation_type,
            Some(OperationType::CreateInstance)
        );
        assert_eq!(operations[0].status, Some(OperationStatus::Started));
    }

    #[test]
    fn test_should_deserialize_ssh_access_details() {
        let json = r#"{
            "accessDetails": {
                "protocol": "ssh",
                "instanceName": "web-1",
                "ipAddress": "203.0.113.7",
                "username": "ec2-user",
                "expiresAt": 1479893800.0,
                "hostKeys": [{"algorithm": "ssh-rsa", "witnessedAt": 1479893217.0}]
            }
        }"#;
        let output: GetInstanceAccessDetailsOutput =
            serde_json::from_str(json).expect("deserialize GetInstanceAccessDetailsOutput");
        let details = output.access_details.expect("access details");
        assert_eq!(details.username.as_deref(), Some("ec2-user"));
        assert_eq!(details.password, None);
        let host_keys = details.host_keys.as_deref().expect("host keys");
        assert_eq!(host_keys[0].algorithm.as_deref(), Some("ssh-rsa"));
    }
}
