use serde::{Deserialize, Serialize};

use super::super::domain::{AccountStatus, ProfessionalProfile};
use super::config::ReadinessPolicy;
use super::CompletionReport;

/// Advisory activation outcome; the status writer decides whether to act on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub can_be_active: bool,
    pub is_pending_review: bool,
    pub reasons: Vec<String>,
}

impl EligibilityDecision {
    /// Status the decision points to, leaving administrative states untouched.
    pub fn suggested_status(&self, current: AccountStatus) -> AccountStatus {
        if current.is_administrative() {
            return current;
        }
        if self.can_be_active {
            AccountStatus::Active
        } else if self.is_pending_review {
            AccountStatus::PendingReview
        } else {
            AccountStatus::Incomplete
        }
    }

    pub fn summary(&self) -> String {
        if self.can_be_active {
            "eligible for activation".to_string()
        } else if self.is_pending_review {
            format!("pending review: {}", self.reasons.join("; "))
        } else {
            format!("incomplete: {}", self.reasons.join("; "))
        }
    }
}

pub(crate) fn decide_eligibility(
    profile: &ProfessionalProfile,
    report: &CompletionReport,
    policy: &ReadinessPolicy,
) -> EligibilityDecision {
    let mut reasons = Vec::new();

    if policy.require_identity_verification && !profile.identity_verified {
        reasons.push("Identity verification has not been completed".to_string());
    }

    if policy.require_qualification_verification && !profile.qualification_verified {
        reasons.push("Qualification verification has not been completed".to_string());
    }

    if report.percentage < policy.activation_threshold {
        reasons.push(format!(
            "Profile is {}% complete; {}% is required for activation",
            report.percentage, policy.activation_threshold
        ));
    }

    let can_be_active = reasons.is_empty();
    let is_pending_review = !can_be_active && report.percentage >= policy.review_threshold;

    EligibilityDecision {
        can_be_active,
        is_pending_review,
        reasons,
    }
}
