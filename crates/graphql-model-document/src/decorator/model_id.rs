use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{
    document::Document,
    error::{DocumentError, DocumentResult},
    input::DocumentInput,
    model::ModelInstance,
    naming::{mutation_input_type, ID_TYPE, ID_VARIABLE, INPUT_VARIABLE},
    schema::ModelSchema,
};

use super::{register_inputs, require_operation_name, DecoratorContext, DocumentDecorator};

/// Binds the primary key of a model into the document variables, for delete mutations and get
/// queries.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelIdDecorator {
    input: ModelIdInput,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModelIdInput {
    /// `input: {<key fields>}` for a delete mutation.
    Delete(ModelInstance),
    /// `id: ID!`, preceded by the first custom key field when the model has a custom key.
    QueryById(String),
    /// One `ID!` variable per primary key field.
    Query(IndexMap<String, String>),
}

impl ModelIdDecorator {
    pub fn new(input: ModelIdInput) -> Self {
        ModelIdDecorator { input }
    }

    pub fn delete(model: ModelInstance) -> Self {
        Self::new(ModelIdInput::Delete(model))
    }

    pub fn query_by_id(id: impl Into<String>) -> Self {
        Self::new(ModelIdInput::QueryById(id.into()))
    }

    pub fn query(identifiers: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self::new(ModelIdInput::Query(
            identifiers
                .into_iter()
                .map(|(field, id)| (field.into(), id.into()))
                .collect(),
        ))
    }
}

impl DocumentDecorator for ModelIdDecorator {
    fn decorate(&self, document: Document, ctx: DecoratorContext<'_>) -> DocumentResult<Document> {
        let schema = ctx.schema;

        let variables = match &self.input {
            ModelIdInput::Delete(model) => {
                let ty = mutation_input_type(require_operation_name(&document, "model id")?);
                let key = primary_key_object(schema, model)?;

                vec![(INPUT_VARIABLE.to_string(), DocumentInput::new(ty, key))]
            }
            ModelIdInput::QueryById(id) => {
                let mut variables = Vec::with_capacity(2);
                if let Some(first) = schema.custom_primary_key_fields().and_then(|fields| fields.first()) {
                    variables.push((first.clone(), DocumentInput::new(ID_TYPE, id.as_str())));
                }
                variables.push((ID_VARIABLE.to_string(), DocumentInput::new(ID_TYPE, id.as_str())));
                variables
            }
            ModelIdInput::Query(identifiers) => {
                let variables = schema
                    .primary_key_fields()
                    .map(|field| match identifiers.get(field) {
                        Some(id) => Ok((field.to_string(), DocumentInput::new(ID_TYPE, id.as_str()))),
                        None => Err(missing_key(schema, field)),
                    })
                    .collect::<DocumentResult<Vec<_>>>()?;

                for field in identifiers.keys().filter(|field| !schema.is_primary_key_field(field)) {
                    tracing::debug!(model = schema.name(), field, "Ignoring identifier for a non primary key field.");
                }

                variables
            }
        };

        register_inputs(document, ctx, variables)
    }
}

/// The primary key of `model` as an object, key fields in declaration order.
pub(super) fn primary_key_object(schema: &ModelSchema, model: &ModelInstance) -> DocumentResult<Value> {
    let mut key = Map::new();
    for field in schema.primary_key_fields() {
        let value = model.non_null(field).ok_or_else(|| missing_key(schema, field))?;
        key.insert(field.to_string(), value.clone());
    }

    Ok(Value::Object(key))
}

pub(super) fn missing_key(schema: &ModelSchema, field: &str) -> DocumentError {
    DocumentError::MissingPrimaryKeyField {
        model: schema.name().to_string(),
        field: field.to_string(),
    }
}
