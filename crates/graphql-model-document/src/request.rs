use serde_json::{Map, Value};

use crate::{
    builder::DocumentBuilder,
    config::DocumentConfig,
    decorator::{
        DirectiveNameDecorator, FilterDecorator, ModelDecorator, ModelIdDecorator, ModelOperation, MutationType,
        PaginationDecorator,
    },
    document::{Document, OperationType},
    error::DocumentResult,
    model::ModelInstance,
    predicate::QueryPredicate,
    schema::ModelSchema,
};

/// Body of a GraphQL request over HTTP.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: String,
    pub operation_name: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub variables: Map<String, Value>,
}

impl From<&Document> for GraphqlRequest {
    fn from(document: &Document) -> Self {
        GraphqlRequest {
            query: document.text(),
            operation_name: document.operation_name(),
            variables: document.variables(),
        }
    }
}

impl From<Document> for GraphqlRequest {
    fn from(document: Document) -> Self {
        (&document).into()
    }
}

/// Ready-made decorator chains for the usual model operations.
#[derive(Debug, Clone)]
pub struct ModelRequests<'a> {
    schema: &'a ModelSchema,
    config: DocumentConfig,
}

impl<'a> ModelRequests<'a> {
    pub fn new(schema: &'a ModelSchema) -> Self {
        ModelRequests {
            schema,
            config: DocumentConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: DocumentConfig) -> Self {
        self.config = config;
        self
    }

    fn builder(&self, operation_type: OperationType) -> DocumentBuilder<'a> {
        DocumentBuilder::new(self.schema, operation_type).with_config(self.config.clone())
    }

    pub fn create(&self, model: ModelInstance) -> DocumentResult<GraphqlRequest> {
        self.mutation(model, MutationType::Create, QueryPredicate::All)
    }

    /// `condition` only applies the update when the stored instance matches it.
    pub fn update(&self, model: ModelInstance, condition: QueryPredicate) -> DocumentResult<GraphqlRequest> {
        self.mutation(model, MutationType::Update, condition)
    }

    pub fn delete(&self, model: ModelInstance, condition: QueryPredicate) -> DocumentResult<GraphqlRequest> {
        self.mutation(model, MutationType::Delete, condition)
    }

    fn mutation(
        &self,
        model: ModelInstance,
        mutation_type: MutationType,
        condition: QueryPredicate,
    ) -> DocumentResult<GraphqlRequest> {
        let operation = match mutation_type {
            MutationType::Create => ModelOperation::Create,
            MutationType::Update => ModelOperation::Update,
            MutationType::Delete => ModelOperation::Delete,
        };

        self.builder(OperationType::Mutation)
            .decorate(DirectiveNameDecorator::new(operation))
            .decorate(ModelDecorator::new(model, mutation_type))
            .decorate(FilterDecorator::new(condition))
            .build()
            .map(GraphqlRequest::from)
    }

    pub fn get(&self, id: impl Into<String>) -> DocumentResult<GraphqlRequest> {
        self.builder(OperationType::Query)
            .decorate(DirectiveNameDecorator::new(ModelOperation::Get))
            .decorate(ModelIdDecorator::query_by_id(id))
            .build()
            .map(GraphqlRequest::from)
    }

    pub fn list(&self, predicate: QueryPredicate, pagination: PaginationDecorator) -> DocumentResult<GraphqlRequest> {
        self.builder(OperationType::Query)
            .decorate(DirectiveNameDecorator::new(ModelOperation::List))
            .decorate(FilterDecorator::new(predicate))
            .decorate(pagination)
            .build()
            .map(GraphqlRequest::from)
    }

    /// `operation` must be one of `onCreate`, `onUpdate` or `onDelete`.
    pub fn subscription(&self, operation: ModelOperation) -> DocumentResult<GraphqlRequest> {
        self.builder(OperationType::Subscription)
            .decorate(DirectiveNameDecorator::new(operation))
            .build()
            .map(GraphqlRequest::from)
    }
}
