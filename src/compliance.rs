use std::fmt;
use std::fmt::{Display, Formatter};

use crate::error::ComplianceRuleError;
use crate::event::{ConfigurationItem, RuleParameters};

pub const EC2_INSTANCE_RESOURCE_TYPE: &str = "AWS::EC2::Instance";

const APPLICABLE_STATUSES: [&'static str; 2] = ["OK", "ResourceDiscovered"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceVerdict {
    Compliant,
    NonCompliant,
    NotApplicable,
}

impl ComplianceVerdict {
    pub fn as_str(&self) -> &'static str {
        match *self {
            ComplianceVerdict::Compliant => "COMPLIANT",
            ComplianceVerdict::NonCompliant => "NON_COMPLIANT",
            ComplianceVerdict::NotApplicable => "NOT_APPLICABLE",
        }
    }
}

impl Default for ComplianceVerdict {
    fn default() -> Self {
        ComplianceVerdict::NotApplicable
    }
}

impl Display for ComplianceVerdict {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only live snapshots that are still in the rule's scope get evaluated.
pub fn is_applicable(configuration_item: &ConfigurationItem, event_left_scope: bool) -> bool {
    APPLICABLE_STATUSES.contains(&configuration_item.configuration_item_status.as_str())
        && !event_left_scope
}

pub fn evaluate_compliance(
    configuration_item: &ConfigurationItem,
    rule_parameters: &RuleParameters,
) -> Result<ComplianceVerdict, ComplianceRuleError> {
    if configuration_item.resource_type != EC2_INSTANCE_RESOURCE_TYPE {
        return Ok(ComplianceVerdict::NotApplicable);
    }

    let configuration = configuration_item
        .configuration
        .as_ref()
        .ok_or(ComplianceRuleError::MalformedInput("configuration"))?;
    let desired_lifecycle = rule_parameters
        .desired_lifecycle
        .as_deref()
        .ok_or(ComplianceRuleError::MalformedInput("desiredLifecycle"))?;

    if configuration.instance_lifecycle.as_deref() == Some(desired_lifecycle) {
        Ok(ComplianceVerdict::Compliant)
    } else {
        Ok(ComplianceVerdict::NonCompliant)
    }
}
