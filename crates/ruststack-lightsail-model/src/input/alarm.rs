//! Alarm and contact method input types.

use serde::{Deserialize, Serialize};

use crate::types::{
    AlarmState, ComparisonOperator, ContactProtocol, MetricName, TreatMissingData,
};

/// Input for the `PutAlarm` operation.
///
/// Creates the alarm when no alarm with the given name exists, otherwise
/// replaces the existing alarm's configuration wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutAlarmInput {
    /// The name for the alarm, unique within each AWS Region of the
    /// Lightsail account.
    pub alarm_name: String,

    /// The metric to associate with the alarm. Which metrics apply depends
    /// on the monitored resource type: instances support `CPUUtilization`,
    /// `NetworkIn`, `NetworkOut`, `StatusCheckFailed`,
    /// `StatusCheckFailed_Instance` and `StatusCheckFailed_System`; load
    /// balancers and databases support their respective metric sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<MetricName>,

    /// The name of the instance, load balancer or database the alarm
    /// monitors.
    pub monitored_resource_name: String,

    /// The comparison applied between the statistic and `threshold`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_operator: Option<ComparisonOperator>,

    /// The value the statistic is compared against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,

    /// The number of most recent periods over which data is evaluated.
    /// Together with `datapoints_to_alarm` this forms an "M out of N"
    /// evaluation, with N not exceeding 288 five-minute periods (one day).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_periods: Option<i32>,

    /// The number of datapoints within the evaluation periods that must
    /// breach to trigger the alarm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datapoints_to_alarm: Option<i32>,

    /// How the alarm handles missing datapoints. Defaults to `missing`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treat_missing_data: Option<TreatMissingData>,

    /// The contact protocols to notify through (`Email` and/or `SMS`). Use
    /// an empty list to remove all protocols from an existing alarm. A
    /// verified contact method for each protocol must already exist in the
    /// region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_protocols: Option<Vec<ContactProtocol>>,

    /// The alarm states that trigger a notification. Defaults to `ALARM`
    /// when omitted and `notification_enabled` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_triggers: Option<Vec<AlarmState>>,

    /// Whether the alarm sends notifications. Defaults to true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_enabled: Option<bool>,
}

/// Input for the `GetAlarms` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAlarmsInput {
    /// The name of a specific alarm to describe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_name: Option<String>,

    /// The token returned by a previous request, to advance to the next page
    /// of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,

    /// The name of a monitored resource whose alarms to describe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored_resource_name: Option<String>,
}

/// Input for the `DeleteAlarm` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAlarmInput {
    /// The name of the alarm to delete.
    pub alarm_name: String,
}

/// Input for the `CreateContactMethod` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactMethodInput {
    /// The protocol of the contact method (`Email` or `SMS`). SMS is
    /// supported in a subset of AWS Regions, and to a subset of countries
    /// and regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<ContactProtocol>,

    /// The destination: an email address, or a phone number in E.164 format
    /// (e.g. `+14155552671`).
    pub contact_endpoint: String,
}

/// Input for the `GetContactMethods` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetContactMethodsInput {
    /// The protocols to describe. All contact methods are returned when
    /// omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocols: Option<Vec<ContactProtocol>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_put_alarm_input() {
        let input = PutAlarmInput {
            alarm_name: "cpu-high".to_owned(),
            metric_name: Some(MetricName::CpuUtilization),
            monitored_resource_name: "web-1".to_owned(),
            comparison_operator: Some(ComparisonOperator::GreaterThanOrEqualToThreshold),
            threshold: Some(90.0),
            evaluation_periods: Some(12),
            datapoints_to_alarm: Some(10),
            treat_missing_data: Some(TreatMissingData::NotBreaching),
            contact_protocols: Some(vec![ContactProtocol::Email]),
            notification_triggers: Some(vec![AlarmState::Alarm, AlarmState::InsufficientData]),
            notification_enabled: Some(true),
        };
        let json = serde_json::to_string(&input).expect("serialize PutAlarmInput");
        assert!(json.contains(r#""alarmName":"cpu-high""#));
        assert!(json.contains(r#""comparisonOperator":"GreaterThanOrEqualToThreshold""#));
        assert!(json.contains(r#""treatMissingData":"notBreaching""#));
        assert!(json.contains(r#""notificationTriggers":["ALARM","INSUFFICIENT_DATA"]"#));
    }

    #[test]
    fn test_should_serialize_empty_contact_protocols_to_clear_them() {
        let input = PutAlarmInput {
            alarm_name: "cpu-high".to_owned(),
            monitored_resource_name: "web-1".to_owned(),
            contact_protocols: Some(Vec::new()),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).expect("serialize PutAlarmInput");
        assert!(json.contains(r#""contactProtocols":[]"#));
    }
}
