use super::domain::{AccountStatus, ProfessionalId, ProfessionalProfile};

/// Data-access collaborator returning the joined profile snapshot in one round trip.
pub trait ProfileRepository: Send + Sync {
    fn fetch_professional_profile(
        &self,
        id: &ProfessionalId,
    ) -> Result<Option<ProfessionalProfile>, RepositoryError>;
}

/// Writer owning persisted account status transitions.
pub trait StatusWriter: Send + Sync {
    fn write_status(&self, id: &ProfessionalId, status: AccountStatus)
        -> Result<(), RepositoryError>;
}

/// Error enumeration for data-access failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
    #[error("profile fetch exceeded {budget_ms}ms budget")]
    TimedOut { budget_ms: u64 },
}
