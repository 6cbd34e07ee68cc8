use graphql_model_document::{
    field, predicate::Combinator, translate_filter, DirectiveNameDecorator, DocumentBuilder, DocumentError,
    FilterDecorator, ModelOperation, OperationType, QueryPredicate,
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::fixtures;

#[test]
fn nested_groups_keep_construction_order() {
    let predicate = field("id").eq("x") & (field("title").begins_with("T") | field("content").contains("c"));

    let filter = translate_filter(&predicate).unwrap().unwrap();

    assert_eq!(
        serde_json::to_string(&filter).unwrap(),
        r#"{"and":[{"id":{"eq":"x"}},{"or":[{"title":{"beginsWith":"T"}},{"content":{"contains":"c"}}]}]}"#
    );
}

#[test]
fn every_operator_keyword() {
    let predicate = QueryPredicate::and([
        field("a").eq(1),
        field("b").ne(2),
        field("c").gt(3),
        field("d").lt(4),
        field("e").ge(5),
        field("f").le(6),
        field("g").contains("x"),
        field("h").not_contains("y"),
        field("i").begins_with("z"),
        field("j").between(1, 10),
        field("k").operator("notContains", "w"),
    ]);

    let filter = translate_filter(&predicate).unwrap().unwrap();

    assert_eq!(
        filter,
        json!({"and": [
            {"a": {"eq": 1}},
            {"b": {"ne": 2}},
            {"c": {"gt": 3}},
            {"d": {"lt": 4}},
            {"e": {"ge": 5}},
            {"f": {"le": 6}},
            {"g": {"contains": "x"}},
            {"h": {"notContains": "y"}},
            {"i": {"beginsWith": "z"}},
            {"j": {"between": [1, 10]}},
            {"k": {"notContains": "w"}},
        ]})
    );
}

#[test]
fn negation() {
    let predicate = !(field("status").eq("DRAFT") | field("rating").lt(2));

    let filter = translate_filter(&predicate).unwrap().unwrap();

    assert_eq!(
        filter,
        json!({"not": {"or": [{"status": {"eq": "DRAFT"}}, {"rating": {"lt": 2}}]}})
    );
}

#[test]
fn values_are_not_coerced() {
    let predicate = field("rating").eq("5") & field("published").eq(true) & field("score").ge(4.5);

    let filter = translate_filter(&predicate).unwrap().unwrap();

    assert_eq!(
        filter,
        json!({"and": [{"rating": {"eq": "5"}}, {"published": {"eq": true}}, {"score": {"ge": 4.5}}]})
    );
}

#[test]
fn deep_nesting() {
    let predicate = (0..64).fold(field("depth").eq(0), |predicate, depth| {
        !(predicate | field("depth").eq(depth + 1))
    });

    let mut filter = &translate_filter(&predicate).unwrap().unwrap();
    let mut depth = 0;
    while let Some(inner) = filter.get("not") {
        filter = &inner["or"][0];
        depth += 1;
    }

    assert_eq!(depth, 64);
    assert_eq!(filter, &json!({"depth": {"eq": 0}}));
}

#[test]
fn unknown_operator() {
    let predicate = field("rating").eq(1) & field("title").operator("matches", "^T");

    let error = translate_filter(&predicate).unwrap_err();

    assert_eq!(
        error,
        DocumentError::UnknownOperator {
            field: "title".to_string(),
            operator: "matches".to_string(),
        }
    );
    insta::assert_snapshot!(
        error.to_string(),
        @"Operator 'matches' used on field 'title' has no server-side filter equivalent"
    );
}

#[test]
fn empty_predicates_translate_to_no_filter() {
    assert_eq!(translate_filter(&QueryPredicate::All).unwrap(), None);
    assert_eq!(translate_filter(&QueryPredicate::and([])).unwrap(), None);
    assert_eq!(translate_filter(&QueryPredicate::or([])).unwrap(), None);
}

#[test]
fn nested_empty_group_is_an_error() {
    let predicate = field("a").eq(1) & QueryPredicate::or([]);

    let error = translate_filter(&predicate).unwrap_err();

    assert_eq!(error, DocumentError::EmptyPredicateGroup { combinator: Combinator::Or });
}

#[test]
fn nested_all_matches_everything() {
    let predicate = QueryPredicate::or([field("a").eq(1), QueryPredicate::All]);

    let filter = translate_filter(&predicate).unwrap().unwrap();

    assert_eq!(filter, json!({"or": [{"a": {"eq": 1}}, {}]}));
}

#[test]
fn negated_all_matches_nothing() {
    let schema = fixtures::post();

    assert_eq!(translate_filter(&!QueryPredicate::All).unwrap(), Some(json!({"not": {}})));

    let document = DocumentBuilder::new(&schema, OperationType::Query)
        .decorate(DirectiveNameDecorator::new(ModelOperation::List))
        .decorate(FilterDecorator::new(!QueryPredicate::All))
        .build()
        .unwrap();

    assert_eq!(document.variables().get("filter"), Some(&json!({"not": {}})));
}

#[test]
fn empty_predicate_adds_no_variable() {
    let schema = fixtures::post();

    let without_filter = DocumentBuilder::new(&schema, OperationType::Query)
        .decorate(DirectiveNameDecorator::new(ModelOperation::List))
        .build()
        .unwrap();

    let with_empty_filter = DocumentBuilder::new(&schema, OperationType::Query)
        .decorate(DirectiveNameDecorator::new(ModelOperation::List))
        .decorate(FilterDecorator::new(QueryPredicate::All))
        .decorate(FilterDecorator::new(QueryPredicate::and([])))
        .build()
        .unwrap();

    assert_eq!(without_filter, with_empty_filter);
    assert!(!with_empty_filter.text().contains("filter"));
}

#[test]
fn filter_variable_on_list() {
    let schema = fixtures::post();

    let document = DocumentBuilder::new(&schema, OperationType::Query)
        .decorate(DirectiveNameDecorator::new(ModelOperation::List))
        .decorate(FilterDecorator::new(field("rating").between(1, 3)))
        .build()
        .unwrap();

    assert_eq!(
        serde_json::to_value(document.inputs()).unwrap(),
        json!({
            "filter": {
                "type": "ModelPostFilterInput",
                "value": {"rating": {"between": [1, 3]}},
            }
        })
    );
}
