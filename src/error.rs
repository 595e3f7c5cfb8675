use std::error::Error;

use rusoto_config::PutEvaluationsError;
use rusoto_core::RusotoError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ComplianceRuleError {
    Decode {
        field: &'static str,
        source: serde_json::Error,
    },
    MalformedInput(&'static str),
    PutEvaluations(RusotoError<PutEvaluationsError>),
    EvaluationRejected(String),
}

impl ComplianceRuleError {
    pub fn decode(field: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| ComplianceRuleError::Decode { field, source }
    }
}

impl Display for ComplianceRuleError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            ComplianceRuleError::Decode { field, ref source } => {
                write!(f, "Failed to decode {}: {}", field, source)
            }
            ComplianceRuleError::MalformedInput(field) => {
                write!(f, "Required field {} is missing", field)
            }
            ComplianceRuleError::PutEvaluations(ref error) => std::fmt::Display::fmt(error, f),
            ComplianceRuleError::EvaluationRejected(ref resource_id) => {
                write!(f, "AWS Config rejected the evaluation for {}", resource_id)
            }
        }
    }
}

impl Error for ComplianceRuleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ComplianceRuleError::Decode { ref source, .. } => Some(source),
            ComplianceRuleError::PutEvaluations(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<RusotoError<PutEvaluationsError>> for ComplianceRuleError {
    fn from(e: RusotoError<PutEvaluationsError>) -> ComplianceRuleError {
        ComplianceRuleError::PutEvaluations(e)
    }
}
