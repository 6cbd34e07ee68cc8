use crate::{
    naming::{ITEMS_FIELD, NEXT_TOKEN_FIELD, TYPENAME_FIELD},
    schema::{Association, FieldType, ModelSchema},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet(Vec<Selection>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Field(String),
    Object { name: String, selection_set: SelectionSet },
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every scalar, enum and embedded field of the model, with belongs-to and has-one
    /// relationships nested one level down to the associated keys. Has-many relationships are
    /// never selected.
    pub fn for_model(schema: &ModelSchema, include_typename: bool) -> Self {
        let mut selection_set = SelectionSet::new();

        for field in schema.fields() {
            match field.ty() {
                FieldType::Scalar(_) | FieldType::Enum(_) | FieldType::Embedded(_) => {
                    selection_set.push_field(field.name());
                }
                FieldType::Model(
                    Association::BelongsTo { associated_keys, .. } | Association::HasOne { associated_keys, .. },
                ) => {
                    let mut nested = SelectionSet::new();
                    for key in associated_keys {
                        nested.push_field(key);
                    }
                    if include_typename {
                        nested.push_field(TYPENAME_FIELD);
                    }
                    selection_set.push_object(field.name(), nested);
                }
                FieldType::Model(Association::HasMany { .. }) => {}
            }
        }

        if include_typename {
            selection_set.push_field(TYPENAME_FIELD);
        }

        selection_set
    }

    /// Wraps the selection into a connection: `items { ... } nextToken`.
    #[must_use]
    pub fn paginated(self) -> Self {
        let mut connection = SelectionSet::new();
        connection.push_object(ITEMS_FIELD, self);
        connection.push_field(NEXT_TOKEN_FIELD);
        connection
    }

    pub fn push_field(&mut self, name: impl Into<String>) {
        self.0.push(Selection::Field(name.into()));
    }

    pub fn push_object(&mut self, name: impl Into<String>, selection_set: SelectionSet) {
        self.0.push(Selection::Object {
            name: name.into(),
            selection_set,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selection> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
