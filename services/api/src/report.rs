use crate::infra::{load_seed, InMemoryProfileStore};
use clap::Args;
use pro_readiness::config::ConfigError;
use pro_readiness::error::AppError;
use pro_readiness::professionals::readiness::{
    ReadinessPolicy, ReadinessReportView, ReadinessService,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ReadinessReportArgs {
    /// JSON array of professional profiles
    #[arg(long)]
    pub(crate) seed: PathBuf,
    /// Professional to evaluate
    #[arg(long)]
    pub(crate) professional_id: String,
    /// Completion percentage required for activation
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) activation_threshold: u8,
    /// Completion percentage at which blocked profiles count as pending review
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) review_threshold: Option<u8>,
    /// Do not require identity verification for activation
    #[arg(long)]
    pub(crate) skip_identity_check: bool,
}

pub(crate) fn run_readiness_report(args: ReadinessReportArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryProfileStore::seeded(load_seed(&args.seed)?));
    let view = build_report(store, &args)?;
    let rendered = serde_json::to_string_pretty(&view)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn build_report(
    store: Arc<InMemoryProfileStore>,
    args: &ReadinessReportArgs,
) -> Result<ReadinessReportView, AppError> {
    let mut policy = ReadinessPolicy::new(args.activation_threshold);
    if let Some(review) = args.review_threshold {
        policy.review_threshold = review;
    }
    policy.require_identity_verification = !args.skip_identity_check;

    let service = ReadinessService::new(store, policy).map_err(ConfigError::Policy)?;
    let (id, report, decision) = service.readiness_report(&args.professional_id)?;
    Ok(ReadinessReportView::new(id, &report, decision))
}
