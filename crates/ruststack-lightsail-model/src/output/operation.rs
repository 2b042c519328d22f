//! Operation record and load balancer output types.

use serde::{Deserialize, Serialize};

use crate::types::{LoadBalancerTlsCertificate, Operation};

/// Output for the `GetOperation` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOperationOutput {
    /// The requested operation record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
}

/// Output for the `GetOperations` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOperationsOutput {
    /// The operation records of the account, newest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,

    /// The token for the next page of results, present when more results
    /// exist than fit in a single response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Output for the `GetLoadBalancerTlsCertificates` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLoadBalancerTlsCertificatesOutput {
    /// The TLS certificates of the load balancer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_certificates: Option<Vec<LoadBalancerTlsCertificate>>,
}
