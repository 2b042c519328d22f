//! Relational database input types.

use serde::{Deserialize, Serialize};

use crate::types::{MetricStatistic, MetricUnit, RelationalDatabaseMetricName, Tag};

/// Input for the `CreateRelationalDatabase` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelationalDatabaseInput {
    /// The name for the new database. Must start and end with an
    /// alphanumeric character and may contain 2 to 255 alphanumeric
    /// characters, underscores, hyphens and dots.
    pub relational_database_name: String,

    /// The Availability Zone to create the database in, e.g. `us-east-2a`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,

    /// The blueprint ID: the engine and engine version, e.g. `mysql_8_0`.
    /// Use `GetRelationalDatabaseBlueprints` to list available values.
    pub relational_database_blueprint_id: String,

    /// The bundle ID: the performance specification, e.g. `micro_1_0`.
    /// Use `GetRelationalDatabaseBundles` to list available values.
    pub relational_database_bundle_id: String,

    /// The name of the master database created at launch. Must contain 1 to
    /// 64 alphanumeric characters and cannot be a word reserved by the
    /// database engine.
    pub master_database_name: String,

    /// The master user name. Must contain 1 to 16 alphanumeric characters,
    /// start with a letter, and cannot be a word reserved by the engine.
    pub master_username: String,

    /// The master user password. May contain any printable ASCII character
    /// except `/`, `"` or `@`, 8 to 41 characters. Generated automatically
    /// when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,

    /// The daily window during which automated backups are created, in
    /// `hh24:mi-hh24:mi` UTC format, e.g. `16:00-16:30`. Must be at least 30
    /// minutes and must not conflict with the maintenance window. Chosen
    /// randomly when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,

    /// The weekly window during which system maintenance can occur, in
    /// `ddd:hh24:mi-ddd:hh24:mi` UTC format, e.g. `Tue:17:00-Tue:17:30`.
    /// Chosen randomly when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,

    /// Whether the database is reachable from the public internet. Defaults
    /// to local access from the attached resources only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,

    /// Tags to attach to the database during creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Input for the `CreateRelationalDatabaseFromSnapshot` operation.
///
/// The source is either a database snapshot
/// (`relational_database_snapshot_name`) or an existing database restored to
/// a point in time (`source_relational_database_name` plus `restore_time` or
/// `use_latest_restorable_time`); `restore_time` and
/// `use_latest_restorable_time` are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelationalDatabaseFromSnapshotInput {
    /// The name for the new database.
    pub relational_database_name: String,

    /// The Availability Zone to create the database in, e.g. `us-east-2a`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,

    /// Whether the database is reachable from the public internet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,

    /// The name of the database snapshot to create the database from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database_snapshot_name: Option<String>,

    /// The bundle ID for the new database. Defaults to the bundle of the
    /// source database, and must be equal to or greater than it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database_bundle_id: Option<String>,

    /// The name of the source database to restore from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_relational_database_name: Option<String>,

    /// The point in time (epoch seconds) to restore the source database to.
    /// Must be before the latest restorable time of the source database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_time: Option<f64>,

    /// Whether to restore the source database to its latest restorable time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_latest_restorable_time: Option<bool>,

    /// Tags to attach to the database during creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Input for the `GetRelationalDatabase` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseInput {
    /// The name of the database to describe.
    pub relational_database_name: String,
}

/// Input for the `GetRelationalDatabases` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabasesInput {
    /// The token returned by a previous request, to advance to the next page
    /// of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Input for the `GetRelationalDatabaseSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseSnapshotInput {
    /// The name of the database snapshot to describe.
    pub relational_database_snapshot_name: String,
}

/// Input for the `GetRelationalDatabaseSnapshots` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseSnapshotsInput {
    /// The token returned by a previous request, to advance to the next page
    /// of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Input for the `GetRelationalDatabaseLogEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseLogEventsInput {
    /// The name of the database to fetch log events for.
    pub relational_database_name: String,

    /// The name of the log stream, e.g. `error` or `slowquery`. Use
    /// `GetRelationalDatabaseLogStreams` to list available streams.
    pub log_stream_name: String,

    /// The start (epoch seconds) of the time interval to fetch. Rounded down
    /// to the nearest hour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,

    /// The end (epoch seconds) of the time interval to fetch. Rounded down
    /// to the nearest hour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,

    /// Whether to read the log from the head (oldest first). Defaults to
    /// reading from the tail. The default changes to head when a
    /// `page_token` is supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_from_head: Option<bool>,

    /// The token returned by a previous request (`next_backward_token` or
    /// `next_forward_token`), to advance to an adjacent page of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Input for the `GetRelationalDatabaseMetricData` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseMetricDataInput {
    /// The name of the database to fetch metric data for.
    pub relational_database_name: String,

    /// The metric to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<RelationalDatabaseMetricName>,

    /// The granularity of the datapoints, in seconds. Currently only `60` is
    /// supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<i32>,

    /// The start (epoch seconds) of the time interval to fetch. Rounded down
    /// to the nearest 30 minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,

    /// The end (epoch seconds) of the time interval to fetch. Rounded down
    /// to the nearest 30 minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,

    /// The unit of the metric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<MetricUnit>,

    /// The statistics to apply to the metric datapoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Vec<MetricStatistic>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_create_database_input() {
        let input = CreateRelationalDatabaseInput {
            relational_database_name: "my-db".to_owned(),
            relational_database_blueprint_id: "mysql_8_0".to_owned(),
            relational_database_bundle_id: "micro_1_0".to_owned(),
            master_database_name: "shop".to_owned(),
            master_username: "dbadmin".to_owned(),
            preferred_backup_window: Some("16:00-16:30".to_owned()),
            publicly_accessible: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).expect("serialize CreateRelationalDatabaseInput");
        assert!(json.contains(r#""relationalDatabaseBlueprintId":"mysql_8_0""#));
        assert!(json.contains(r#""preferredBackupWindow":"16:00-16:30""#));
        assert!(!json.contains("masterUserPassword"));
        assert!(!json.contains("preferredMaintenanceWindow"));
    }

    #[test]
    fn test_should_keep_point_in_time_selectors_independent() {
        let by_time = CreateRelationalDatabaseFromSnapshotInput {
            relational_database_name: "restored-db".to_owned(),
            source_relational_database_name: Some("my-db".to_owned()),
            restore_time: Some(1_570_000_000.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&by_time).expect("serialize input");
        assert!(json.contains(r#""restoreTime":1570000000.0"#));
        assert!(!json.contains("useLatestRestorableTime"));

        let by_latest = CreateRelationalDatabaseFromSnapshotInput {
            relational_database_name: "restored-db".to_owned(),
            source_relational_database_name: Some("my-db".to_owned()),
            use_latest_restorable_time: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_string(&by_latest).expect("serialize input");
        assert!(json.contains(r#""useLatestRestorableTime":true"#));
        assert!(!json.contains("restoreTime"));
    }

    #[test]
    fn test_should_deserialize_metric_data_input() {
        let json = r#"{
            "relationalDatabaseName": "my-db",
            "metricName": "CPUUtilization",
            "period": 60,
            "startTime": 1570000000,
            "endTime": 1570003600,
            "unit": "Percent",
            "statistics": ["Average", "Maximum"]
        }"#;
        let input: GetRelationalDatabaseMetricDataInput =
            serde_json::from_str(json).expect("deserialize GetRelationalDatabaseMetricDataInput");
        assert_eq!(
            input.metric_name,
            Some(RelationalDatabaseMetricName::CpuUtilization)
        );
        assert_eq!(input.unit, Some(MetricUnit::Percent));
        assert_eq!(
            input.statistics,
            Some(vec![MetricStatistic::Average, MetricStatistic::Maximum])
        );
    }
}
