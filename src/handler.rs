use tracing::{debug, info};

use crate::compliance::{evaluate_compliance, is_applicable, ComplianceVerdict};
use crate::error::ComplianceRuleError;
use crate::event::ChangeEvent;
use crate::report::{EvaluationReport, ReportEvaluation};

pub struct ComplianceEvaluator<R> {
    reporter: R,
}

impl<R: ReportEvaluation> ComplianceEvaluator<R> {
    pub fn new(reporter: R) -> Self {
        ComplianceEvaluator { reporter }
    }

    /// Evaluates the configuration item carried by `event` and submits exactly one
    /// evaluation for it. Nothing is submitted when decoding or evaluation fails.
    pub async fn handle(&self, event: ChangeEvent) -> Result<ComplianceVerdict, ComplianceRuleError> {
        let decoded = event.decode()?;
        let item = &decoded.configuration_item;

        let mut verdict = ComplianceVerdict::default();
        if is_applicable(item, decoded.event_left_scope) {
            verdict = evaluate_compliance(item, &decoded.rule_parameters)?;
        } else {
            debug!(
                status = %item.configuration_item_status,
                event_left_scope = decoded.event_left_scope,
                "configuration item is not applicable"
            );
        }

        info!(
            resource_type = %item.resource_type,
            resource_id = %item.resource_id,
            %verdict,
            "reporting evaluation"
        );
        let report = EvaluationReport {
            resource_type: item.resource_type.clone(),
            resource_id: item.resource_id.clone(),
            verdict,
            ordering_timestamp: item.ordering_timestamp(),
        };
        self.reporter
            .put_evaluation(report, &decoded.result_token)
            .await?;
        Ok(verdict)
    }
}
