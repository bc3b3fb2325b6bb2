mod config;
mod criteria;
mod policy;

pub use config::{PolicyError, ReadinessPolicy};
pub use policy::EligibilityDecision;

use super::domain::ProfessionalProfile;
use serde::{Deserialize, Serialize};

/// Number of weighted criteria every report accounts for.
pub const CRITERIA_COUNT: usize = criteria::CRITERIA_LEN;

/// Stateless evaluator applying the scoring table and activation policy to a snapshot.
#[derive(Debug, Clone)]
pub struct ReadinessEngine {
    policy: ReadinessPolicy,
}

impl ReadinessEngine {
    pub fn new(policy: ReadinessPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ReadinessPolicy {
        &self.policy
    }

    pub fn completion(&self, profile: &ProfessionalProfile) -> CompletionReport {
        criteria::score_profile(profile)
    }

    pub fn eligibility(
        &self,
        profile: &ProfessionalProfile,
        report: &CompletionReport,
    ) -> EligibilityDecision {
        policy::decide_eligibility(profile, report, &self.policy)
    }
}

/// Weighted completion of a professional's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    pub percentage: u8,
    pub completed_steps: Vec<String>,
    pub missing_steps: Vec<String>,
    pub is_complete: bool,
}

/// Labels of the scoring table in evaluation order, with their weights.
pub fn criteria_table() -> impl Iterator<Item = (&'static str, u8)> {
    criteria::CRITERIA
        .iter()
        .map(|criterion| (criterion.label, criterion.weight))
}
