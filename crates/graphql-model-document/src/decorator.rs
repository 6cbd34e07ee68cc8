//! Decorators each contribute one fragment to a document: operation name and selection set,
//! mutation input, primary key variables, filter or pagination.
//!
//! Order matters. The directive decorator must come first because the others derive type names
//! such as `CreatePostInput!` from the operation name it sets.

mod directive;
mod filter;
mod model;
mod model_id;
mod pagination;

pub use directive::{DirectiveNameDecorator, ModelOperation};
pub use filter::FilterDecorator;
pub use model::{ModelDecorator, MutationType};
pub use model_id::{ModelIdDecorator, ModelIdInput};
pub use pagination::PaginationDecorator;

use crate::{
    config::DocumentConfig,
    document::Document,
    error::{DocumentError, DocumentResult},
    input::{DocumentInput, DocumentInputs},
    schema::ModelSchema,
};

/// What a decorator gets to look at besides the document itself.
#[derive(Debug, Clone, Copy)]
pub struct DecoratorContext<'a> {
    pub schema: &'a ModelSchema,
    pub config: &'a DocumentConfig,
}

pub trait DocumentDecorator {
    fn decorate(&self, document: Document, ctx: DecoratorContext<'_>) -> DocumentResult<Document>;
}

#[derive(Debug, Clone, PartialEq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Decorator {
    Directive(DirectiveNameDecorator),
    Model(ModelDecorator),
    ModelId(ModelIdDecorator),
    Filter(FilterDecorator),
    Pagination(PaginationDecorator),
}

impl Decorator {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl DocumentDecorator for Decorator {
    fn decorate(&self, document: Document, ctx: DecoratorContext<'_>) -> DocumentResult<Document> {
        match self {
            Decorator::Directive(decorator) => decorator.decorate(document, ctx),
            Decorator::Model(decorator) => decorator.decorate(document, ctx),
            Decorator::ModelId(decorator) => decorator.decorate(document, ctx),
            Decorator::Filter(decorator) => decorator.decorate(document, ctx),
            Decorator::Pagination(decorator) => decorator.decorate(document, ctx),
        }
    }
}

impl From<DirectiveNameDecorator> for Decorator {
    fn from(decorator: DirectiveNameDecorator) -> Self {
        Decorator::Directive(decorator)
    }
}

impl From<ModelDecorator> for Decorator {
    fn from(decorator: ModelDecorator) -> Self {
        Decorator::Model(decorator)
    }
}

impl From<ModelIdDecorator> for Decorator {
    fn from(decorator: ModelIdDecorator) -> Self {
        Decorator::ModelId(decorator)
    }
}

impl From<FilterDecorator> for Decorator {
    fn from(decorator: FilterDecorator) -> Self {
        Decorator::Filter(decorator)
    }
}

impl From<PaginationDecorator> for Decorator {
    fn from(decorator: PaginationDecorator) -> Self {
        Decorator::Pagination(decorator)
    }
}

/// Registers the variables produced by a decorator on top of the document's existing ones.
fn register_inputs(
    document: Document,
    ctx: DecoratorContext<'_>,
    variables: impl IntoIterator<Item = (String, DocumentInput)>,
) -> DocumentResult<Document> {
    let policy = ctx.config.variable_collisions;

    let mut incoming = DocumentInputs::new();
    for (name, input) in variables {
        incoming.insert(name, input, policy)?;
    }

    let mut inputs = document.inputs().clone();
    inputs.merge(incoming, policy)?;

    Ok(document.with_inputs(inputs))
}

/// Operation name set by the directive decorator, needed to derive input type names.
fn require_operation_name<'d>(document: &'d Document, decorator: &'static str) -> DocumentResult<&'d str> {
    if document.name().is_empty() {
        return Err(DocumentError::MissingDirective { decorator });
    }

    Ok(document.name())
}
