//! Operation record and load balancer input types.

use serde::{Deserialize, Serialize};

/// Input for the `GetOperation` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOperationInput {
    /// The ID of the operation record to describe.
    pub operation_id: String,
}

/// Input for the `GetOperations` operation.
///
/// Results are ordered by creation date, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOperationsInput {
    /// The token returned by a previous request, to advance to the next page
    /// of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Input for the `GetLoadBalancerTlsCertificates` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLoadBalancerTlsCertificatesInput {
    /// The name of the load balancer whose certificates to describe.
    pub load_balancer_name: String,
}
