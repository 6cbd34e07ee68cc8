use crate::{
    document::{Document, OperationType, SelectionSet},
    error::{DocumentError, DocumentResult},
    schema::ModelSchema,
};

use super::{DecoratorContext, DocumentDecorator};

/// Root field generated for every model, `create` becomes `createPost`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ModelOperation {
    Create,
    Update,
    Delete,
    Get,
    List,
    OnCreate,
    OnUpdate,
    OnDelete,
}

impl ModelOperation {
    pub fn operation_type(self) -> OperationType {
        match self {
            ModelOperation::Create | ModelOperation::Update | ModelOperation::Delete => OperationType::Mutation,
            ModelOperation::Get | ModelOperation::List => OperationType::Query,
            ModelOperation::OnCreate | ModelOperation::OnUpdate | ModelOperation::OnDelete => {
                OperationType::Subscription
            }
        }
    }

    /// `createPost`, `getPost`, `listPosts`, `onCreatePost`...
    pub fn root_field_name(self, schema: &ModelSchema) -> String {
        match self {
            ModelOperation::List => format!("{self}{}", schema.plural_name()),
            _ => format!("{self}{}", schema.name()),
        }
    }
}

/// Names the operation and seeds its selection set. Runs before every other decorator.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveNameDecorator {
    operation: ModelOperation,
}

impl DirectiveNameDecorator {
    pub fn new(operation: ModelOperation) -> Self {
        DirectiveNameDecorator { operation }
    }

    pub fn operation(&self) -> ModelOperation {
        self.operation
    }
}

impl DocumentDecorator for DirectiveNameDecorator {
    fn decorate(&self, document: Document, ctx: DecoratorContext<'_>) -> DocumentResult<Document> {
        if self.operation.operation_type() != document.operation_type() {
            return Err(DocumentError::OperationTypeMismatch {
                operation: self.operation,
                operation_type: document.operation_type(),
            });
        }

        let selection_set = SelectionSet::for_model(ctx.schema, ctx.config.include_typename);
        let selection_set = match self.operation {
            ModelOperation::List => selection_set.paginated(),
            _ => selection_set,
        };

        Ok(document
            .with_name(self.operation.root_field_name(ctx.schema))
            .with_directive(self.operation)
            .with_selection_set(selection_set))
    }
}
