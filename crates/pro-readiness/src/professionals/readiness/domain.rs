use std::fmt;

use serde::{Deserialize, Serialize};

const MAX_ID_LEN: usize = 64;

/// Identifier wrapper for professional accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProfessionalId(pub String);

impl ProfessionalId {
    /// Validate a caller supplied identifier before it reaches the data-access layer.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }
        if trimmed.chars().count() > MAX_ID_LEN {
            return Err(ValidationError::IdentifierTooLong { max: MAX_ID_LEN });
        }
        if let Some(invalid) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(ValidationError::InvalidCharacter(invalid));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfessionalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejection raised for malformed identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("professional id must not be empty")]
    EmptyIdentifier,
    #[error("professional id exceeds {max} characters")]
    IdentifierTooLong { max: usize },
    #[error("professional id contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// Account lifecycle states shared with the status-transition writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Incomplete,
    PendingReview,
    Active,
    Suspended,
    Banned,
}

impl AccountStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AccountStatus::Incomplete => "INCOMPLETE",
            AccountStatus::PendingReview => "PENDING_REVIEW",
            AccountStatus::Active => "ACTIVE",
            AccountStatus::Suspended => "SUSPENDED",
            AccountStatus::Banned => "BANNED",
        }
    }

    /// Suspensions and bans are administrative and outrank completion recomputation.
    pub const fn is_administrative(self) -> bool {
        matches!(self, AccountStatus::Suspended | AccountStatus::Banned)
    }
}

/// Offered service as listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceListing {
    pub title: String,
    pub active: bool,
}

/// Wallet record summary; only its presence matters for readiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSummary {
    pub wallet_id: String,
    pub balance_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub postal_code: String,
}

/// Area a professional is willing to travel to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    pub radius_km: u32,
}

/// Joined, read-only snapshot of the records that make up a professional's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalProfile {
    pub professional_id: ProfessionalId,
    pub status: AccountStatus,
    #[serde(default)]
    pub identity_verified: bool,
    #[serde(default)]
    pub qualification_verified: bool,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceListing>,
    #[serde(default)]
    pub wallet: Option<WalletSummary>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub service_area: Option<ServiceArea>,
}

impl ProfessionalProfile {
    /// Bare account with nothing filled in beyond its existence.
    pub fn new(professional_id: ProfessionalId) -> Self {
        Self {
            professional_id,
            status: AccountStatus::Incomplete,
            identity_verified: false,
            qualification_verified: false,
            bio: None,
            avatar_url: None,
            services: Vec::new(),
            wallet: None,
            location: None,
            service_area: None,
        }
    }
}
