use crate::{
    config::DocumentConfig,
    decorator::{Decorator, DecoratorContext, DocumentDecorator},
    document::{Document, OperationType},
    error::{DocumentError, DocumentResult},
    schema::ModelSchema,
};

/// Applies decorators in the order they are added, starting from an empty document of the given
/// operation type.
///
/// The first failing decorator stops the pipeline: later decorators are skipped and its error is
/// returned by [`DocumentBuilder::build`].
#[derive(Debug, Clone)]
pub struct DocumentBuilder<'a> {
    schema: &'a ModelSchema,
    config: DocumentConfig,
    state: DocumentResult<Document>,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(schema: &'a ModelSchema, operation_type: OperationType) -> Self {
        DocumentBuilder {
            schema,
            config: DocumentConfig::default(),
            state: schema.validate().map(|()| Document::new(operation_type)),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: DocumentConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn decorate(mut self, decorator: impl Into<Decorator>) -> Self {
        let decorator = decorator.into();

        self.state = match self.state {
            Ok(document) => {
                tracing::debug!(model = self.schema.name(), decorator = decorator.name(), "Applying decorator.");

                let ctx = DecoratorContext {
                    schema: self.schema,
                    config: &self.config,
                };

                decorator.decorate(document, ctx).inspect_err(|err| {
                    tracing::debug!(
                        model = self.schema.name(),
                        decorator = decorator.name(),
                        "Decorator failed: {err}"
                    );
                })
            }
            Err(err) => {
                tracing::trace!(decorator = decorator.name(), "Skipping decorator after an earlier failure.");
                Err(err)
            }
        };

        self
    }

    pub fn build(self) -> DocumentResult<Document> {
        let document = self.state?;

        if document.selection_set().is_none() {
            return Err(DocumentError::IncompleteDocument);
        }

        Ok(document)
    }
}
