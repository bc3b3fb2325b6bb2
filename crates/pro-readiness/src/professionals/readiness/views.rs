use serde::{Deserialize, Serialize};

use super::domain::ProfessionalId;
use super::evaluation::{criteria_table, CompletionReport, EligibilityDecision};

/// Checklist row for the admin readiness report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub completed: bool,
}

/// Admin view merging completed and missing steps into one ordered checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessReportView {
    pub professional_id: ProfessionalId,
    pub percentage: u8,
    pub is_complete: bool,
    pub checklist: Vec<ChecklistItem>,
    pub can_be_active: bool,
    pub is_pending_review: bool,
    pub reasons: Vec<String>,
}

impl ReadinessReportView {
    pub fn new(
        professional_id: ProfessionalId,
        report: &CompletionReport,
        decision: EligibilityDecision,
    ) -> Self {
        let checklist = criteria_table()
            .map(|(label, _)| ChecklistItem {
                label: label.to_string(),
                completed: report.completed_steps.iter().any(|step| step == label),
            })
            .collect();

        Self {
            professional_id,
            percentage: report.percentage,
            is_complete: report.is_complete,
            checklist,
            can_be_active: decision.can_be_active,
            is_pending_review: decision.is_pending_review,
            reasons: decision.reasons,
        }
    }
}

/// Self-service dashboard view; completion only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCompletionView {
    pub percentage: u8,
    pub completed_steps: Vec<String>,
    pub missing_steps: Vec<String>,
    pub is_complete: bool,
}

impl From<CompletionReport> for ProfileCompletionView {
    fn from(report: CompletionReport) -> Self {
        Self {
            percentage: report.percentage,
            completed_steps: report.completed_steps,
            missing_steps: report.missing_steps,
            is_complete: report.is_complete,
        }
    }
}
