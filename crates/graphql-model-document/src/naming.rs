//! Variable names and type names shared by the decorators.

pub const ID_VARIABLE: &str = "id";
pub const INPUT_VARIABLE: &str = "input";
pub const FILTER_VARIABLE: &str = "filter";
pub const CONDITION_VARIABLE: &str = "condition";
pub const LIMIT_VARIABLE: &str = "limit";
pub const NEXT_TOKEN_VARIABLE: &str = "nextToken";

pub const ID_TYPE: &str = "ID!";
pub const LIMIT_TYPE: &str = "Int";
pub const NEXT_TOKEN_TYPE: &str = "String";

pub const TYPENAME_FIELD: &str = "__typename";
pub const ITEMS_FIELD: &str = "items";
pub const NEXT_TOKEN_FIELD: &str = "nextToken";

/// Upper-cases the first character, leaving the rest untouched: `createPost` becomes `CreatePost`.
pub fn pascal_cased(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `createPost` -> `CreatePostInput!`
pub fn mutation_input_type(operation_name: &str) -> String {
    format!("{}Input!", pascal_cased(operation_name))
}

pub fn filter_input_type(model_name: &str) -> String {
    format!("Model{model_name}FilterInput")
}

pub fn condition_input_type(model_name: &str) -> String {
    format!("Model{model_name}ConditionInput")
}
