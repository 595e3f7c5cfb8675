use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ComplianceRuleError;

/// Payload AWS Config hands to the function on a configuration change.
///
/// `invokingEvent` and `ruleParameters` arrive as JSON documents encoded in strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub invoking_event: String,
    pub rule_parameters: String,
    pub event_left_scope: bool,
    pub result_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvokingEvent {
    configuration_item: Option<ConfigurationItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationItem {
    pub resource_type: String,
    pub resource_id: String,
    pub configuration_item_status: String,
    pub configuration_item_capture_time: DateTime<Utc>,
    pub configuration: Option<InstanceConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfiguration {
    /// `None` for on-demand instances.
    pub instance_lifecycle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleParameters {
    pub desired_lifecycle: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct DecodedEvent {
    pub configuration_item: ConfigurationItem,
    pub rule_parameters: RuleParameters,
    pub event_left_scope: bool,
    pub result_token: String,
}

impl ChangeEvent {
    pub fn decode(self) -> Result<DecodedEvent, ComplianceRuleError> {
        let invoking_event: InvokingEvent = serde_json::from_str(&self.invoking_event)
            .map_err(ComplianceRuleError::decode("invokingEvent"))?;
        let rule_parameters: RuleParameters = serde_json::from_str(&self.rule_parameters)
            .map_err(ComplianceRuleError::decode("ruleParameters"))?;
        let configuration_item = invoking_event
            .configuration_item
            .ok_or(ComplianceRuleError::MalformedInput("configurationItem"))?;

        Ok(DecodedEvent {
            configuration_item,
            rule_parameters,
            event_left_scope: self.event_left_scope,
            result_token: self.result_token,
        })
    }
}

impl ConfigurationItem {
    /// Capture time as epoch seconds, millisecond precision.
    pub fn ordering_timestamp(&self) -> f64 {
        self.configuration_item_capture_time.timestamp_millis() as f64 / 1000.0
    }
}
