use graphql_model_document::{
    DirectiveNameDecorator, DocumentBuilder, DocumentError, ModelIdDecorator, ModelInstance, ModelOperation,
    ModelSchema, OperationType,
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::fixtures;

fn delete(schema: &ModelSchema, model: ModelInstance) -> Result<graphql_model_document::Document, DocumentError> {
    DocumentBuilder::new(schema, OperationType::Mutation)
        .decorate(DirectiveNameDecorator::new(ModelOperation::Delete))
        .decorate(ModelIdDecorator::delete(model))
        .build()
}

#[test]
fn delete_with_default_key_binds_only_the_id() {
    let document = delete(&fixtures::post(), fixtures::new_post()).unwrap();

    assert_eq!(document.inputs().names().collect::<Vec<_>>(), ["input"]);

    let input = document.inputs().get("input").unwrap();
    assert_eq!(input.ty(), "DeletePostInput!");
    assert_eq!(input.value(), &json!({"id": "post-1"}));
}

#[test]
fn delete_with_composite_key_binds_key_fields_in_schema_order() {
    // Declared in the opposite order of the key.
    let team = ModelInstance::new()
        .with("region", "eu-west-1")
        .with("name", "Engineering")
        .with("teamId", "team-1");

    let document = delete(&fixtures::team(), team).unwrap();
    let input = document.inputs().get("input").unwrap();

    assert_eq!(input.ty(), "DeleteTeamInput!");
    assert_eq!(
        serde_json::to_string(input.value()).unwrap(),
        r#"{"teamId":"team-1","name":"Engineering"}"#
    );
    assert!(!document.inputs().contains("id"));
}

#[test]
fn delete_with_missing_key_field() {
    let team = ModelInstance::new().with("teamId", "team-1").with("name", serde_json::Value::Null);

    let error = delete(&fixtures::team(), team).unwrap_err();

    assert_eq!(
        error,
        DocumentError::MissingPrimaryKeyField {
            model: "Team".to_string(),
            field: "name".to_string(),
        }
    );
    insta::assert_snapshot!(error.to_string(), @"Model 'Team' is missing a value for its primary key field 'name'");
}

#[test]
fn delete_requires_the_directive_first() {
    let schema = fixtures::post();

    let error = DocumentBuilder::new(&schema, OperationType::Mutation)
        .decorate(ModelIdDecorator::delete(fixtures::new_post()))
        .decorate(DirectiveNameDecorator::new(ModelOperation::Delete))
        .build()
        .unwrap_err();

    assert_eq!(error, DocumentError::MissingDirective { decorator: "model id" });
}

#[test]
fn query_by_id_with_default_key() {
    let schema = fixtures::post();

    let document = DocumentBuilder::new(&schema, OperationType::Query)
        .decorate(DirectiveNameDecorator::new(ModelOperation::Get))
        .decorate(ModelIdDecorator::query_by_id("post-1"))
        .build()
        .unwrap();

    assert_eq!(
        serde_json::to_value(document.inputs()).unwrap(),
        json!({"id": {"type": "ID!", "value": "post-1"}})
    );
}

#[test]
fn query_by_id_with_composite_key_registers_both_names() {
    let schema = fixtures::team();

    let document = DocumentBuilder::new(&schema, OperationType::Query)
        .decorate(DirectiveNameDecorator::new(ModelOperation::Get))
        .decorate(ModelIdDecorator::query_by_id("team-1"))
        .build()
        .unwrap();

    assert_eq!(
        serde_json::to_value(document.inputs()).unwrap(),
        json!({
            "teamId": {"type": "ID!", "value": "team-1"},
            "id": {"type": "ID!", "value": "team-1"},
        })
    );
    assert_eq!(document.inputs().names().collect::<Vec<_>>(), ["teamId", "id"]);
}

#[test]
fn query_by_id_twice_replaces_the_value() {
    let schema = fixtures::post();

    let document = DocumentBuilder::new(&schema, OperationType::Query)
        .decorate(DirectiveNameDecorator::new(ModelOperation::Get))
        .decorate(ModelIdDecorator::query_by_id("first"))
        .decorate(ModelIdDecorator::query_by_id("second"))
        .build()
        .unwrap();

    assert_eq!(document.variables().get("id"), Some(&json!("second")));
    assert_eq!(document.inputs().len(), 1);
}

#[test]
fn query_with_identifier_map() {
    let schema = fixtures::team();

    let document = DocumentBuilder::new(&schema, OperationType::Query)
        .decorate(DirectiveNameDecorator::new(ModelOperation::Get))
        .decorate(ModelIdDecorator::query([
            ("name", "Engineering"),
            ("region", "ignored"),
            ("teamId", "team-1"),
        ]))
        .build()
        .unwrap();

    insta::assert_snapshot!(document.text(), @r###"
    query GetTeam($teamId: ID!, $name: ID!) {
      getTeam(teamId: $teamId, name: $name) {
        teamId
        name
        region
        __typename
      }
    }
    "###);
    assert_eq!(
        document.variables(),
        json!({"teamId": "team-1", "name": "Engineering"}).as_object().cloned().unwrap()
    );
}

#[test]
fn query_with_incomplete_identifier_map() {
    let schema = fixtures::team();

    let error = DocumentBuilder::new(&schema, OperationType::Query)
        .decorate(DirectiveNameDecorator::new(ModelOperation::Get))
        .decorate(ModelIdDecorator::query([("teamId", "team-1")]))
        .build()
        .unwrap_err();

    assert_eq!(
        error,
        DocumentError::MissingPrimaryKeyField {
            model: "Team".to_string(),
            field: "name".to_string(),
        }
    );
}
