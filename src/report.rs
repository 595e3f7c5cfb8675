use crate::compliance::ComplianceVerdict;
use crate::error::ComplianceRuleError;
use async_trait::async_trait;
use rusoto_config::{ConfigService, ConfigServiceClient, Evaluation, PutEvaluationsRequest};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    pub resource_type: String,
    pub resource_id: String,
    pub verdict: ComplianceVerdict,
    pub ordering_timestamp: f64,
}

impl From<EvaluationReport> for Evaluation {
    fn from(report: EvaluationReport) -> Self {
        Evaluation {
            compliance_resource_type: report.resource_type,
            compliance_resource_id: report.resource_id,
            compliance_type: report.verdict.as_str().to_string(),
            ordering_timestamp: report.ordering_timestamp,
            annotation: None,
        }
    }
}

/// Delivers one evaluation to the compliance store.
#[async_trait]
pub trait ReportEvaluation {
    async fn put_evaluation(
        &self,
        report: EvaluationReport,
        result_token: &str,
    ) -> Result<(), ComplianceRuleError>;
}

pub struct ConfigServiceReporter {
    client: ConfigServiceClient,
}

#[async_trait]
impl ReportEvaluation for ConfigServiceReporter {
    async fn put_evaluation(
        &self,
        report: EvaluationReport,
        result_token: &str,
    ) -> Result<(), ComplianceRuleError> {
        let resource_id = report.resource_id.clone();
        let response = self
            .client
            .put_evaluations(PutEvaluationsRequest {
                evaluations: Some(vec![Evaluation::from(report)]),
                result_token: result_token.to_string(),
                ..Default::default()
            })
            .await?;

        let failed_evaluations = response.failed_evaluations.unwrap_or_default();
        if failed_evaluations.is_empty() {
            return Ok(());
        }
        for failed in &failed_evaluations {
            warn!(
                resource_type = %failed.compliance_resource_type,
                resource_id = %failed.compliance_resource_id,
                compliance_type = %failed.compliance_type,
                "AWS Config did not accept evaluation"
            );
        }
        Err(ComplianceRuleError::EvaluationRejected(resource_id))
    }
}

impl ConfigServiceReporter {
    pub fn new_with_client(client: ConfigServiceClient) -> Self {
        ConfigServiceReporter { client }
    }
}
