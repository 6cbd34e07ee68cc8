/// Returned by identity providers when the caller's identity can't be determined.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{description}")]
pub struct AuthError {
    pub description: String,
    pub recovery_suggestion: String,
}

impl AuthError {
    pub fn new(description: impl Into<String>, recovery_suggestion: impl Into<String>) -> Self {
        AuthError {
            description: description.into(),
            recovery_suggestion: recovery_suggestion.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefixError {
    #[error("Could not resolve the identity for the key prefix: {description}")]
    Auth {
        description: String,
        recovery_suggestion: String,
    },
    #[error("Invalid prefix resolver configuration: {description}")]
    Configuration { description: String },
}

impl From<AuthError> for PrefixError {
    fn from(err: AuthError) -> Self {
        PrefixError::Auth {
            description: err.description,
            recovery_suggestion: err.recovery_suggestion,
        }
    }
}
