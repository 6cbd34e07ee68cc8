//! Translation of predicate trees into the filter input objects expected by the server:
//!
//! - `field("title").eq("x")` -> `{"title": {"eq": "x"}}`
//! - `a & b` -> `{"and": [a, b]}`, `a | b` -> `{"or": [a, b]}`
//! - `!a` -> `{"not": a}`
//! - `!QueryPredicate::All` -> `{"not": {}}`, a filter no instance matches

use serde_json::{json, Map, Value};

use crate::{
    error::{DocumentError, DocumentResult},
    predicate::{FieldPredicate, PredicateGroup, QueryOperator, QueryPredicate},
};

/// Operator keywords understood by the server filter inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum FilterOperator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    Contains,
    NotContains,
    BeginsWith,
    Between,
}

/// Returns `None` when the predicate does not constrain anything, in which case no filter
/// variable must be emitted.
pub fn translate(predicate: &QueryPredicate) -> DocumentResult<Option<Value>> {
    match predicate {
        QueryPredicate::All => Ok(None),
        QueryPredicate::Group(group) if group.predicates().is_empty() => Ok(None),
        predicate => translate_predicate(predicate).map(Some),
    }
}

fn translate_predicate(predicate: &QueryPredicate) -> DocumentResult<Value> {
    match predicate {
        // Nested inside a group, an empty filter object matches everything.
        QueryPredicate::All => Ok(Value::Object(Map::new())),
        QueryPredicate::Operation(operation) => translate_operation(operation),
        QueryPredicate::Group(group) => translate_group(group),
        QueryPredicate::Not(predicate) => Ok(json!({ "not": translate_predicate(predicate)? })),
    }
}

fn translate_group(group: &PredicateGroup) -> DocumentResult<Value> {
    if group.predicates().is_empty() {
        return Err(DocumentError::EmptyPredicateGroup {
            combinator: group.combinator(),
        });
    }

    let predicates = group
        .predicates()
        .iter()
        .map(translate_predicate)
        .collect::<DocumentResult<Vec<_>>>()?;

    let mut filter = Map::with_capacity(1);
    filter.insert(group.combinator().to_string(), Value::Array(predicates));

    Ok(Value::Object(filter))
}

fn translate_operation(operation: &FieldPredicate) -> DocumentResult<Value> {
    let (operator, value) = match operation.operator() {
        QueryOperator::Eq(value) => (FilterOperator::Eq, value.clone()),
        QueryOperator::Ne(value) => (FilterOperator::Ne, value.clone()),
        QueryOperator::Gt(value) => (FilterOperator::Gt, value.clone()),
        QueryOperator::Lt(value) => (FilterOperator::Lt, value.clone()),
        QueryOperator::Ge(value) => (FilterOperator::Ge, value.clone()),
        QueryOperator::Le(value) => (FilterOperator::Le, value.clone()),
        QueryOperator::Contains(value) => (FilterOperator::Contains, value.clone()),
        QueryOperator::NotContains(value) => (FilterOperator::NotContains, value.clone()),
        QueryOperator::BeginsWith(value) => (FilterOperator::BeginsWith, value.clone()),
        QueryOperator::Between(start, end) => (FilterOperator::Between, json!([start, end])),
        QueryOperator::Named { keyword, value } => {
            let operator: FilterOperator = keyword.parse().map_err(|_| DocumentError::UnknownOperator {
                field: operation.field().to_string(),
                operator: keyword.clone(),
            })?;

            (operator, value.clone())
        }
    };

    let keyword: &'static str = operator.into();

    let mut comparison = Map::with_capacity(1);
    comparison.insert(keyword.to_string(), value);

    let mut filter = Map::with_capacity(1);
    filter.insert(operation.field().to_string(), Value::Object(comparison));

    Ok(Value::Object(filter))
}
