use serde_json::{Map, Value};

use crate::{
    document::Document,
    error::DocumentResult,
    input::DocumentInput,
    model::ModelInstance,
    naming::{mutation_input_type, INPUT_VARIABLE},
    schema::{Association, FieldType, ModelField, ModelSchema},
};

use super::{
    model_id::{missing_key, primary_key_object},
    register_inputs, require_operation_name, DecoratorContext, DocumentDecorator,
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MutationType {
    Create,
    Update,
    Delete,
}

/// Serializes a model instance into the `input` variable of a mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDecorator {
    model: ModelInstance,
    mutation_type: MutationType,
}

impl ModelDecorator {
    pub fn new(model: ModelInstance, mutation_type: MutationType) -> Self {
        ModelDecorator { model, mutation_type }
    }

    pub fn mutation_type(&self) -> MutationType {
        self.mutation_type
    }
}

impl DocumentDecorator for ModelDecorator {
    fn decorate(&self, document: Document, ctx: DecoratorContext<'_>) -> DocumentResult<Document> {
        let schema = ctx.schema;
        let ty = mutation_input_type(require_operation_name(&document, "model")?);

        let input = match self.mutation_type {
            MutationType::Create => Value::Object(mutation_fields(schema, &self.model)),
            MutationType::Update => {
                let mut fields = mutation_fields(schema, &self.model);
                fields.retain(|_, value| !value.is_null());

                if let Some(field) = schema.primary_key_fields().find(|field| !fields.contains_key(*field)) {
                    return Err(missing_key(schema, field));
                }

                Value::Object(fields)
            }
            MutationType::Delete => primary_key_object(schema, &self.model)?,
        };

        tracing::trace!(model = schema.name(), mutation = %self.mutation_type, "Serialized model input.");

        register_inputs(document, ctx, [(INPUT_VARIABLE.to_string(), DocumentInput::new(ty, input))])
    }
}

/// Every field a mutation may carry, in schema order. Absent fields are explicit `null`s.
fn mutation_fields(schema: &ModelSchema, model: &ModelInstance) -> Map<String, Value> {
    let mut fields = Map::new();

    for field in schema.fields() {
        match field.ty() {
            FieldType::Scalar(_) | FieldType::Enum(_) | FieldType::Embedded(_) => {
                if is_server_computed(schema, field) {
                    continue;
                }
                let value = model.get(field.name()).cloned().unwrap_or(Value::Null);
                set_field(&mut fields, field.name(), value);
            }
            FieldType::Model(Association::BelongsTo {
                associated_keys,
                target_names,
                ..
            }) => {
                let associated = model.get(field.name());
                for (key, target) in associated_keys.iter().zip(target_names) {
                    let value = model
                        .non_null(target)
                        .or_else(|| associated.and_then(|associated| associated.get(key)))
                        .cloned()
                        .unwrap_or(Value::Null);
                    set_field(&mut fields, target, value);
                }
            }
            FieldType::Model(Association::HasOne { .. } | Association::HasMany { .. }) => {}
        }
    }

    fields
}

/// Key fields always identify the instance, even when the server generates them.
fn is_server_computed(schema: &ModelSchema, field: &ModelField) -> bool {
    field.is_read_only() && !field.is_required() && !schema.is_primary_key_field(field.name())
}

// A foreign key may be declared both as a plain field and as a belongs-to target, a value
// never gets replaced by a null.
fn set_field(fields: &mut Map<String, Value>, name: &str, value: Value) {
    match fields.get_mut(name) {
        Some(existing) => {
            if !value.is_null() {
                *existing = value;
            }
        }
        None => {
            fields.insert(name.to_string(), value);
        }
    }
}
