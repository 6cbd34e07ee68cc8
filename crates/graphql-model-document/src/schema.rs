use std::borrow::Cow;

use crate::{
    error::{DocumentError, DocumentResult},
    naming::ID_VARIABLE,
};

/// Static description of a model type: its fields, primary key and relationships.
///
/// Schemas are read-only once built and can be shared between threads, every document
/// built from them only borrows them.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSchema {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    plural_name: Option<String>,
    #[serde(default)]
    primary_key: PrimaryKey,
    fields: Vec<ModelField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimaryKey {
    /// A single synthetic `id` field.
    #[default]
    Default,
    /// Ordered list of fields uniquely identifying an instance.
    Custom(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelField {
    name: String,
    #[serde(rename = "type")]
    ty: FieldType,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    read_only: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Scalar(ScalarType),
    Enum(String),
    /// Non-model type stored inline, selected and sent as a whole.
    Embedded(String),
    Model(Association),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScalarType {
    #[serde(rename = "ID")]
    Id,
    String,
    Int,
    Float,
    Boolean,
    #[serde(rename = "AWSDate")]
    Date,
    #[serde(rename = "AWSTime")]
    Time,
    #[serde(rename = "AWSDateTime")]
    DateTime,
    #[serde(rename = "AWSTimestamp")]
    Timestamp,
    #[serde(rename = "AWSEmail")]
    Email,
    #[serde(rename = "AWSJSON")]
    Json,
    #[serde(rename = "AWSURL")]
    Url,
    #[serde(rename = "AWSPhone")]
    Phone,
    #[serde(rename = "AWSIPAddress")]
    IpAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Association {
    /// The model holds the foreign key: `target_names[i]` stores `associated_keys[i]` of the
    /// associated model.
    #[serde(rename_all = "camelCase")]
    BelongsTo {
        model: String,
        associated_keys: Vec<String>,
        target_names: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    HasOne { model: String, associated_keys: Vec<String> },
    HasMany { model: String },
}

impl ModelSchema {
    pub fn new(name: impl Into<String>, primary_key: PrimaryKey, fields: impl IntoIterator<Item = ModelField>) -> Self {
        ModelSchema {
            name: name.into(),
            plural_name: None,
            primary_key,
            fields: fields.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn with_plural_name(mut self, plural_name: impl Into<String>) -> Self {
        self.plural_name = Some(plural_name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plural used by list operations, `Post` -> `Posts` unless overridden.
    pub fn plural_name(&self) -> Cow<'_, str> {
        match &self.plural_name {
            Some(plural_name) => Cow::Borrowed(plural_name),
            None => Cow::Owned(format!("{}s", self.name)),
        }
    }

    pub fn primary_key(&self) -> &PrimaryKey {
        &self.primary_key
    }

    pub fn fields(&self) -> &[ModelField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&ModelField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Declared custom key fields, `None` when the model uses the synthetic `id`.
    pub fn custom_primary_key_fields(&self) -> Option<&[String]> {
        match &self.primary_key {
            PrimaryKey::Default => None,
            PrimaryKey::Custom(fields) => Some(fields),
        }
    }

    pub fn primary_key_fields(&self) -> impl Iterator<Item = &str> + '_ {
        let (default, custom): (Option<&str>, &[String]) = match &self.primary_key {
            PrimaryKey::Default => (Some(ID_VARIABLE), &[]),
            PrimaryKey::Custom(fields) => (None, fields),
        };

        default.into_iter().chain(custom.iter().map(String::as_str))
    }

    pub fn is_primary_key_field(&self, name: &str) -> bool {
        self.primary_key_fields().any(|field| field == name)
    }

    pub fn validate(&self) -> DocumentResult<()> {
        match &self.primary_key {
            PrimaryKey::Default => {
                if self.field(ID_VARIABLE).is_none() {
                    return Err(self.invalid("the default primary key requires an 'id' field".to_string()));
                }
            }
            PrimaryKey::Custom(fields) => {
                if fields.is_empty() {
                    return Err(self.invalid("a custom primary key must list at least one field".to_string()));
                }
                if let Some(missing) = fields.iter().find(|name| self.field(name).is_none()) {
                    return Err(self.invalid(format!("primary key field '{missing}' is not declared")));
                }
            }
        }

        for field in &self.fields {
            if let FieldType::Model(Association::BelongsTo {
                associated_keys,
                target_names,
                ..
            }) = &field.ty
            {
                if associated_keys.is_empty() || associated_keys.len() != target_names.len() {
                    return Err(self.invalid(format!(
                        "belongs-to field '{}' must map every associated key to one target name",
                        field.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: String) -> DocumentError {
        DocumentError::InvalidSchema {
            model: self.name.clone(),
            reason,
        }
    }
}

impl ModelField {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        ModelField {
            name: name.into(),
            ty,
            required: false,
            read_only: false,
        }
    }

    pub fn scalar(name: impl Into<String>, scalar: ScalarType) -> Self {
        Self::new(name, FieldType::Scalar(scalar))
    }

    pub fn id() -> Self {
        Self::scalar(ID_VARIABLE, ScalarType::Id).required()
    }

    pub fn belongs_to(
        name: impl Into<String>,
        model: impl Into<String>,
        associated_keys: impl IntoIterator<Item = impl Into<String>>,
        target_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(
            name,
            FieldType::Model(Association::BelongsTo {
                model: model.into(),
                associated_keys: associated_keys.into_iter().map(Into::into).collect(),
                target_names: target_names.into_iter().map(Into::into).collect(),
            }),
        )
    }

    pub fn has_one(
        name: impl Into<String>,
        model: impl Into<String>,
        associated_keys: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(
            name,
            FieldType::Model(Association::HasOne {
                model: model.into(),
                associated_keys: associated_keys.into_iter().map(Into::into).collect(),
            }),
        )
    }

    pub fn has_many(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(name, FieldType::Model(Association::HasMany { model: model.into() }))
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Server-computed field such as `createdAt`, never sent in mutation inputs unless required.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &FieldType {
        &self.ty
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn association(&self) -> Option<&Association> {
        match &self.ty {
            FieldType::Model(association) => Some(association),
            _ => None,
        }
    }
}
