use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{AccountStatus, ProfessionalId, ProfessionalProfile, ValidationError};
use super::evaluation::{
    CompletionReport, EligibilityDecision, PolicyError, ReadinessEngine, ReadinessPolicy,
};
use super::repository::{ProfileRepository, RepositoryError, StatusWriter};

/// Service composing the data-access collaborator with the readiness engine.
pub struct ReadinessService<R> {
    repository: Arc<R>,
    engine: Arc<ReadinessEngine>,
}

impl<R> ReadinessService<R>
where
    R: ProfileRepository + 'static,
{
    /// Build the service, rejecting policies no professional could satisfy consistently.
    pub fn new(repository: Arc<R>, policy: ReadinessPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self {
            repository,
            engine: Arc::new(ReadinessEngine::new(policy)),
        })
    }

    pub fn policy(&self) -> &ReadinessPolicy {
        self.engine.policy()
    }

    /// Compute how complete a professional's profile is.
    pub fn calculate_profile_completion(
        &self,
        professional_id: &str,
    ) -> Result<CompletionReport, ReadinessError> {
        let profile = self.load(professional_id)?;
        Ok(self.engine.completion(&profile))
    }

    /// Report whether the account qualifies for active status. Nothing is persisted.
    pub fn can_professional_be_active(
        &self,
        professional_id: &str,
    ) -> Result<EligibilityDecision, ReadinessError> {
        let (_, _, decision) = self.evaluate(professional_id)?;
        Ok(decision)
    }

    /// Completion and eligibility from a single fetch, for the admin checklist.
    pub fn readiness_report(
        &self,
        professional_id: &str,
    ) -> Result<(ProfessionalId, CompletionReport, EligibilityDecision), ReadinessError> {
        let (profile, report, decision) = self.evaluate(professional_id)?;
        Ok((profile.professional_id, report, decision))
    }

    /// Feed the eligibility decision to the status writer when it implies a change.
    pub fn reconcile_status<W>(
        &self,
        professional_id: &str,
        writer: &W,
    ) -> Result<StatusReconciliation, ReadinessError>
    where
        W: StatusWriter + ?Sized,
    {
        let (profile, _, decision) = self.evaluate(professional_id)?;
        let previous = profile.status;
        let current = decision.suggested_status(previous);
        let changed = current != previous;

        if changed {
            writer
                .write_status(&profile.professional_id, current)
                .map_err(|error| match error {
                    RepositoryError::NotFound => {
                        ReadinessError::NotFound(profile.professional_id.clone())
                    }
                    other => ReadinessError::DataAccess(other),
                })?;
            info!(
                professional_id = %profile.professional_id,
                from = previous.label(),
                to = current.label(),
                "professional status updated"
            );
        } else if previous.is_administrative() {
            debug!(
                professional_id = %profile.professional_id,
                status = previous.label(),
                "administrative status left untouched"
            );
        }

        Ok(StatusReconciliation {
            professional_id: profile.professional_id,
            previous,
            current,
            changed,
            decision,
            evaluated_at: Utc::now(),
        })
    }

    fn evaluate(
        &self,
        professional_id: &str,
    ) -> Result<(ProfessionalProfile, CompletionReport, EligibilityDecision), ReadinessError> {
        let profile = self.load(professional_id)?;
        let report = self.engine.completion(&profile);
        let decision = self.engine.eligibility(&profile, &report);
        debug!(
            professional_id = %profile.professional_id,
            percentage = report.percentage,
            can_be_active = decision.can_be_active,
            "readiness evaluated"
        );
        Ok((profile, report, decision))
    }

    fn load(&self, professional_id: &str) -> Result<ProfessionalProfile, ReadinessError> {
        let id = ProfessionalId::parse(professional_id)?;
        match self.repository.fetch_professional_profile(&id) {
            Ok(Some(profile)) => Ok(profile),
            Ok(None) | Err(RepositoryError::NotFound) => Err(ReadinessError::NotFound(id)),
            Err(error) => {
                warn!(professional_id = %id, %error, "profile fetch failed");
                Err(ReadinessError::DataAccess(error))
            }
        }
    }
}

/// Outcome of feeding an eligibility decision into the status writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReconciliation {
    pub professional_id: ProfessionalId,
    pub previous: AccountStatus,
    pub current: AccountStatus,
    pub changed: bool,
    pub decision: EligibilityDecision,
    pub evaluated_at: DateTime<Utc>,
}

/// Error raised by the readiness service.
#[derive(Debug, thiserror::Error)]
pub enum ReadinessError {
    #[error("professional {0} not found")]
    NotFound(ProfessionalId),
    #[error("data access failed: {0}")]
    DataAccess(#[source] RepositoryError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
