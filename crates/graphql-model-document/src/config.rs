#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
    /// What happens when two decorators register the same variable name.
    pub variable_collisions: CollisionPolicy,
    /// Append `__typename` to every generated selection set.
    /// True by default.
    pub include_typename: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            variable_collisions: CollisionPolicy::default(),
            include_typename: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CollisionPolicy {
    /// A variable registered again with a different type is an error. Registering it again
    /// with the same type replaces the value.
    #[default]
    Reject,
    /// The last registration wins, whatever its type.
    Overwrite,
}
