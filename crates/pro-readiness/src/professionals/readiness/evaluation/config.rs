use serde::{Deserialize, Serialize};

/// Platform policy the eligibility decision is evaluated against.
///
/// The activation threshold is platform configuration; callers inject it rather than
/// relying on a built-in number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessPolicy {
    pub activation_threshold: u8,
    pub review_threshold: u8,
    pub require_identity_verification: bool,
    pub require_qualification_verification: bool,
}

impl ReadinessPolicy {
    /// Policy gating activation at `activation_threshold` with identity verification required.
    pub fn new(activation_threshold: u8) -> Self {
        Self {
            activation_threshold,
            review_threshold: activation_threshold,
            require_identity_verification: true,
            require_qualification_verification: false,
        }
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.activation_threshold > 100 {
            return Err(PolicyError::ThresholdOutOfRange {
                name: "activation_threshold",
                value: self.activation_threshold,
            });
        }
        if self.review_threshold > self.activation_threshold {
            return Err(PolicyError::ReviewAboveActivation {
                review: self.review_threshold,
                activation: self.activation_threshold,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("{name} must be between 0 and 100, got {value}")]
    ThresholdOutOfRange { name: &'static str, value: u8 },
    #[error("review threshold {review} exceeds activation threshold {activation}")]
    ReviewAboveActivation { review: u8, activation: u8 },
}
