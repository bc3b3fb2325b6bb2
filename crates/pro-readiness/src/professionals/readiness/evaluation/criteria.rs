use super::super::domain::ProfessionalProfile;
use super::CompletionReport;

/// Single weighted entry of the completion table.
pub(crate) struct Criterion {
    pub label: &'static str,
    pub weight: u8,
    pub satisfied: fn(&ProfessionalProfile) -> bool,
}

pub(crate) const CRITERIA_LEN: usize = 4;

/// Ordered scoring table. Weights sum to 100.
pub(crate) static CRITERIA: [Criterion; CRITERIA_LEN] = [
    Criterion {
        label: "Account created",
        weight: 10,
        satisfied: account_exists,
    },
    Criterion {
        label: "Profile photo uploaded",
        weight: 25,
        satisfied: has_avatar,
    },
    Criterion {
        label: "At least one active service",
        weight: 40,
        satisfied: has_active_service,
    },
    Criterion {
        label: "Wallet set up",
        weight: 25,
        satisfied: has_wallet,
    },
];

fn account_exists(_profile: &ProfessionalProfile) -> bool {
    true
}

fn has_avatar(profile: &ProfessionalProfile) -> bool {
    non_blank(profile.avatar_url.as_deref())
}

fn has_active_service(profile: &ProfessionalProfile) -> bool {
    profile.services.iter().any(|service| service.active)
}

fn has_wallet(profile: &ProfessionalProfile) -> bool {
    profile.wallet.is_some()
}

fn non_blank(value: Option<&str>) -> bool {
    value.map(|text| !text.trim().is_empty()).unwrap_or(false)
}

pub(crate) fn score_profile(profile: &ProfessionalProfile) -> CompletionReport {
    let mut percentage: u8 = 0;
    let mut completed_steps = Vec::new();
    let mut missing_steps = Vec::new();

    for criterion in &CRITERIA {
        if (criterion.satisfied)(profile) {
            percentage += criterion.weight;
            completed_steps.push(criterion.label.to_string());
        } else {
            missing_steps.push(criterion.label.to_string());
        }
    }

    CompletionReport {
        percentage,
        is_complete: missing_steps.is_empty(),
        completed_steps,
        missing_steps,
    }
}
