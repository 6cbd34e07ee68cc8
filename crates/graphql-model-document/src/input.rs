use indexmap::{map::Entry, IndexMap};
use serde_json::{Map, Value};

use crate::{
    config::CollisionPolicy,
    error::{DocumentError, DocumentResult},
};

/// A declared operation variable: its GraphQL type and the value sent along with the document.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DocumentInput {
    #[serde(rename = "type")]
    ty: String,
    value: Value,
}

impl DocumentInput {
    pub fn new(ty: impl Into<String>, value: impl Into<Value>) -> Self {
        DocumentInput {
            ty: ty.into(),
            value: value.into(),
        }
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Variables of a document, kept in order of first registration. That order is the one
/// used for the variable definitions and the field arguments of the rendered document.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct DocumentInputs(IndexMap<String, DocumentInput>);

impl DocumentInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&DocumentInput> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocumentInput)> {
        self.0.iter().map(|(name, input)| (name.as_str(), input))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Registers a variable. An existing variable keeps its position, its type and value are
    /// replaced according to `policy`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        input: DocumentInput,
        policy: CollisionPolicy,
    ) -> DocumentResult<()> {
        match self.0.entry(name.into()) {
            Entry::Vacant(entry) => {
                entry.insert(input);
            }
            Entry::Occupied(mut entry) => {
                if policy == CollisionPolicy::Reject && entry.get().ty != input.ty {
                    return Err(DocumentError::VariableNameCollision {
                        name: entry.key().clone(),
                        existing: entry.get().ty.clone(),
                        incoming: input.ty,
                    });
                }

                tracing::trace!(variable = %entry.key(), "Replacing previously registered variable.");
                entry.insert(input);
            }
        }

        Ok(())
    }

    /// Merges `other` into `self` one variable at a time, in `other`'s order.
    pub fn merge(&mut self, other: DocumentInputs, policy: CollisionPolicy) -> DocumentResult<()> {
        for (name, input) in other.0 {
            self.insert(name, input, policy)?;
        }

        Ok(())
    }

    /// The `variables` object of a GraphQL request.
    pub fn variables(&self) -> Map<String, Value> {
        self.0
            .iter()
            .map(|(name, input)| (name.clone(), input.value.clone()))
            .collect()
    }
}
