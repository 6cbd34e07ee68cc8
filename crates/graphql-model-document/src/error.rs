use crate::{decorator::ModelOperation, document::OperationType, predicate::Combinator};

pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocumentError {
    #[error("The document has no selection set, a directive decorator must be applied before building it")]
    IncompleteDocument,
    #[error("Model '{model}' is missing a value for its primary key field '{field}'")]
    MissingPrimaryKeyField { model: String, field: String },
    #[error("Operator '{operator}' used on field '{field}' has no server-side filter equivalent")]
    UnknownOperator { field: String, operator: String },
    #[error("Variable '${name}' is already declared as '{existing}' and cannot be redeclared as '{incoming}'")]
    VariableNameCollision {
        name: String,
        existing: String,
        incoming: String,
    },
    #[error("The {decorator} decorator needs an operation name, apply a directive decorator first")]
    MissingDirective { decorator: &'static str },
    #[error("'{operation}' cannot be used in a {operation_type} document")]
    OperationTypeMismatch {
        operation: ModelOperation,
        operation_type: OperationType,
    },
    #[error("An '{combinator}' predicate group must contain at least one predicate")]
    EmptyPredicateGroup { combinator: Combinator },
    #[error("Invalid schema for model '{model}': {reason}")]
    InvalidSchema { model: String, reason: String },
    #[error("A model instance must serialize to an object, found {found}")]
    InvalidModelInstance { found: String },
    #[error("Could not serialize the model instance: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        DocumentError::Serialization(err.to_string())
    }
}
