use thiserror::Error;

use models::errors::ModelError;

/// Outcomes the transport layer must map. `Display` is the message shown to API clients.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Email já cadastrado.")]
    DuplicateEmail,
    #[error("Dados inválidos.")]
    InvalidData,
    #[error("Cliente não encontrado.")]
    NotFound,
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl ServiceError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::DuplicateEmail => 2001,
            ServiceError::InvalidData => 2002,
            ServiceError::NotFound => 2003,
            ServiceError::Storage(_) => 2100,
        }
    }

    /// Business-rule failures, as opposed to infrastructure ones.
    pub fn is_business(&self) -> bool {
        !matches!(self, ServiceError::Storage(_))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::UniqueViolation(_) => ServiceError::DuplicateEmail,
            ModelError::NotFound(_) => ServiceError::NotFound,
            ModelError::Db(msg) => ServiceError::Storage(msg),
        }
    }
}
