//! Relational database output types.

use serde::{Deserialize, Serialize};

use crate::types::{
    LogEvent, MetricDatapoint, Operation, RelationalDatabase, RelationalDatabaseMetricName,
    RelationalDatabaseSnapshot,
};

/// Output for the `CreateRelationalDatabase` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelationalDatabaseOutput {
    /// The operation records describing the request's progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}

/// Output for the `CreateRelationalDatabaseFromSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelationalDatabaseFromSnapshotOutput {
    /// The operation records describing the request's progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}

/// Output for the `GetRelationalDatabase` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseOutput {
    /// The requested database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database: Option<RelationalDatabase>,
}

/// Output for the `GetRelationalDatabases` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabasesOutput {
    /// The databases in the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_databases: Option<Vec<RelationalDatabase>>,

    /// The token for the next page of results, present when more results
    /// exist than fit in a single response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Output for the `GetRelationalDatabaseSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseSnapshotOutput {
    /// The requested database snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database_snapshot: Option<RelationalDatabaseSnapshot>,
}

/// Output for the `GetRelationalDatabaseSnapshots` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseSnapshotsOutput {
    /// The database snapshots in the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database_snapshots: Option<Vec<RelationalDatabaseSnapshot>>,

    /// The token for the next page of results, present when more results
    /// exist than fit in a single response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Output for the `GetRelationalDatabaseLogEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseLogEventsOutput {
    /// The log events of the requested log stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_log_events: Option<Vec<LogEvent>>,

    /// The token to advance to the previous (older) page of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_backward_token: Option<String>,

    /// The token to advance to the next (newer) page of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_forward_token: Option<String>,
}

/// Output for the `GetRelationalDatabaseMetricData` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseMetricDataOutput {
    /// The metric the datapoints belong to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<RelationalDatabaseMetricName>,

    /// The metric datapoints for the requested time interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_data: Option<Vec<MetricDatapoint>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MetricUnit;

    #[test]
    fn test_should_deserialize_log_events_with_paging_tokens() {
        let json = r#"{
            "resourceLogEvents": [
                {"createdAt": 1570000000.0, "message": "Aborted connection 42"},
                {"createdAt": 1570000060.0, "message": "Access denied for user"}
            ],
            "nextBackwardToken": "b/1570000000",
            "nextForwardToken": "f/1570000060"
        }"#;
        let output: GetRelationalDatabaseLogEventsOutput =
            serde_json::from_str(json).expect("deserialize GetRelationalDatabaseLogEventsOutput");
        let events = output.resource_log_events.as_deref().expect("log events");
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0].message.as_deref(),
            Some("Aborted connection 42")
        );
        assert_eq!(output.next_forward_token.as_deref(), Some("f/1570000060"));
    }

    #[test]
    fn test_should_roundtrip_metric_data_output() {
        let output = GetRelationalDatabaseMetricDataOutput {
            metric_name: Some(RelationalDatabaseMetricName::DatabaseConnections),
            metric_data: Some(vec![MetricDatapoint {
                average: Some(3.5),
                sample_count: Some(2.0),
                timestamp: Some(1_570_000_000.0),
                unit: Some(MetricUnit::Count),
                ..Default::default()
            }]),
        };
        let json = serde_json::to_string(&output).expect("serialize output");
        assert!(json.contains(r#""metricName":"DatabaseConnections""#));
        let parsed: GetRelationalDatabaseMetricDataOutput =
            serde_json::from_str(&json).expect("deserialize output");
        assert_eq!(output, parsed);
    }
}
