//! Profile completion scoring and activation eligibility for professionals.
//!
//! The service loads one joined profile snapshot through [`ProfileRepository`], scores it
//! against a fixed weighted table, and derives an advisory [`EligibilityDecision`]. It never
//! writes status on its own; [`ReadinessService::reconcile_status`] hands the decision to an
//! injected [`StatusWriter`].

pub mod domain;
pub(crate) mod evaluation;
pub mod repository;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    AccountStatus, Location, ProfessionalId, ProfessionalProfile, ServiceArea, ServiceListing,
    ValidationError, WalletSummary,
};
pub use evaluation::{
    criteria_table, CompletionReport, EligibilityDecision, PolicyError, ReadinessEngine,
    ReadinessPolicy, CRITERIA_COUNT,
};
pub use repository::{ProfileRepository, RepositoryError, StatusWriter};
pub use router::{readiness_router, ReadinessRoutes};
pub use service::{ReadinessError, ReadinessService, StatusReconciliation};
pub use views::{ChecklistItem, ProfileCompletionView, ReadinessReportView};
