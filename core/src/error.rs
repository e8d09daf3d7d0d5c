use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdviceError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Investment '{id}' not found")]
    InvestmentNotFound { id: String },

    #[error("Subsidy '{id}' not found")]
    SubsidyNotFound { id: String },

    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("No language model is configured")]
    ModelNotConfigured,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AdviceError {
    /// True for lookups of identifiers that are not in a catalog.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AdviceError::InvestmentNotFound { .. } | AdviceError::SubsidyNotFound { .. }
        )
    }

    /// True when the caller sent something unusable, as opposed to an
    /// internal failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AdviceError::MissingField { .. }
                | AdviceError::InvalidRequest { .. }
                | AdviceError::Serialization(_)
        )
    }

    /// True when a required external collaborator is missing.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, AdviceError::ModelNotConfigured)
    }
}

pub type AdviceResult<T> = Result<T, AdviceError>;
