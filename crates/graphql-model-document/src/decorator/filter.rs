use crate::{
    document::{Document, OperationType},
    error::DocumentResult,
    filter,
    input::DocumentInput,
    naming::{condition_input_type, filter_input_type, CONDITION_VARIABLE, FILTER_VARIABLE},
    predicate::QueryPredicate,
};

use super::{register_inputs, DecoratorContext, DocumentDecorator};

/// Adds `filter: Model<Name>FilterInput` to queries and subscriptions, or
/// `condition: Model<Name>ConditionInput` to mutations. An empty predicate adds nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDecorator {
    predicate: QueryPredicate,
}

impl FilterDecorator {
    pub fn new(predicate: QueryPredicate) -> Self {
        FilterDecorator { predicate }
    }
}

impl DocumentDecorator for FilterDecorator {
    fn decorate(&self, document: Document, ctx: DecoratorContext<'_>) -> DocumentResult<Document> {
        let Some(filter) = filter::translate(&self.predicate)? else {
            return Ok(document);
        };

        let model_name = ctx.schema.name();
        let (name, ty) = match document.operation_type() {
            OperationType::Mutation => (CONDITION_VARIABLE, condition_input_type(model_name)),
            OperationType::Query | OperationType::Subscription => (FILTER_VARIABLE, filter_input_type(model_name)),
        };

        register_inputs(document, ctx, [(name.to_string(), DocumentInput::new(ty, filter))])
    }
}
