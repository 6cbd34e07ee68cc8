mod render;
mod selection_set;

use std::fmt;

use serde_json::{Map, Value};

pub use selection_set::{Selection, SelectionSet};

use crate::{decorator::ModelOperation, input::DocumentInputs, naming::pascal_cased};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

/// A GraphQL document built for one model operation.
///
/// Documents are values: decorators consume one and hand back a new one through the `with_*`
/// methods, and the rendered text only depends on the fields below.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    operation_type: OperationType,
    name: String,
    directive: Option<ModelOperation>,
    selection_set: Option<SelectionSet>,
    inputs: DocumentInputs,
}

impl Document {
    pub fn new(operation_type: OperationType) -> Self {
        Document {
            operation_type,
            name: String::new(),
            directive: None,
            selection_set: None,
            inputs: DocumentInputs::default(),
        }
    }

    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    /// Name of the root field, `createPost` or `listPosts`. Empty until a directive is applied.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the operation itself, `CreatePost`.
    pub fn operation_name(&self) -> String {
        pascal_cased(&self.name)
    }

    pub fn directive(&self) -> Option<ModelOperation> {
        self.directive
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }

    pub fn inputs(&self) -> &DocumentInputs {
        &self.inputs
    }

    /// Variable values keyed by name, as sent in the request payload.
    pub fn variables(&self) -> Map<String, Value> {
        self.inputs.variables()
    }

    pub fn text(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Document {
            name: name.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_directive(self, directive: ModelOperation) -> Self {
        Document {
            directive: Some(directive),
            ..self
        }
    }

    #[must_use]
    pub fn with_selection_set(self, selection_set: SelectionSet) -> Self {
        Document {
            selection_set: Some(selection_set),
            ..self
        }
    }

    #[must_use]
    pub fn with_inputs(self, inputs: DocumentInputs) -> Self {
        Document { inputs, ..self }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self)?)
    }
}
