use graphql_model_document::{
    field, DirectiveNameDecorator, Document, DocumentBuilder, DocumentError, DocumentResult, FilterDecorator,
    ModelDecorator, ModelField, ModelInstance, ModelOperation, ModelSchema, MutationType, OperationType, PrimaryKey,
    ScalarType,
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::fixtures;

fn mutation(schema: &ModelSchema, model: ModelInstance, mutation_type: MutationType) -> DocumentResult<Document> {
    let operation = match mutation_type {
        MutationType::Create => ModelOperation::Create,
        MutationType::Update => ModelOperation::Update,
        MutationType::Delete => ModelOperation::Delete,
    };

    DocumentBuilder::new(schema, OperationType::Mutation)
        .decorate(DirectiveNameDecorator::new(operation))
        .decorate(ModelDecorator::new(model, mutation_type))
        .build()
}

#[test]
fn create_sends_unset_optional_fields_as_null() {
    let post = ModelInstance::new()
        .with("title", "title")
        .with("content", "content")
        .with("createdAt", "2024-05-01T10:00:00.000Z");

    let document = mutation(&fixtures::post(), post, MutationType::Create).unwrap();
    let input = document.inputs().get("input").unwrap();

    assert_eq!(input.ty(), "CreatePostInput!");
    assert_eq!(
        serde_json::to_string_pretty(input.value()).unwrap(),
        serde_json::to_string_pretty(&json!({
            "id": null,
            "title": "title",
            "content": "content",
            "createdAt": "2024-05-01T10:00:00.000Z",
            "rating": null,
            "status": null,
        }))
        .unwrap()
    );
}

#[test]
fn create_skips_server_computed_fields() {
    let post = fixtures::new_post().with("updatedAt", "2024-05-02T10:00:00.000Z");

    let document = mutation(&fixtures::post(), post, MutationType::Create).unwrap();
    let input = document.inputs().get("input").unwrap().value();

    assert!(input.get("updatedAt").is_none());
    assert!(input.get("comments").is_none());
}

#[test]
fn update_keeps_only_set_fields_and_the_key() {
    let post = ModelInstance::new()
        .with("id", "post-1")
        .with("title", "new title")
        .with("rating", serde_json::Value::Null);

    let document = mutation(&fixtures::post(), post, MutationType::Update).unwrap();
    let input = document.inputs().get("input").unwrap();

    assert_eq!(input.ty(), "UpdatePostInput!");
    assert_eq!(input.value(), &json!({"id": "post-1", "title": "new title"}));
}

#[test]
fn update_without_key() {
    let post = ModelInstance::new().with("title", "new title");

    let error = mutation(&fixtures::post(), post, MutationType::Update).unwrap_err();

    assert_eq!(
        error,
        DocumentError::MissingPrimaryKeyField {
            model: "Post".to_string(),
            field: "id".to_string(),
        }
    );
}

/// Keyed by a server-generated timestamp.
fn event() -> ModelSchema {
    ModelSchema::new(
        "Event",
        PrimaryKey::Custom(vec!["eventId".to_string(), "createdAt".to_string()]),
        [
            ModelField::scalar("eventId", ScalarType::Id).required(),
            ModelField::scalar("createdAt", ScalarType::DateTime).read_only(),
            ModelField::scalar("updatedAt", ScalarType::DateTime).read_only(),
            ModelField::scalar("title", ScalarType::String),
        ],
    )
}

fn new_event() -> ModelInstance {
    ModelInstance::new()
        .with("eventId", "e1")
        .with("createdAt", "2024-01-01T00:00:00Z")
        .with("updatedAt", "2024-01-02T00:00:00Z")
        .with("title", "t")
}

#[test]
fn update_sends_read_only_key_fields() {
    let document = mutation(&event(), new_event(), MutationType::Update).unwrap();

    assert_eq!(
        document.variables().get("input"),
        Some(&json!({"eventId": "e1", "createdAt": "2024-01-01T00:00:00Z", "title": "t"}))
    );
}

#[test]
fn create_sends_read_only_key_fields() {
    let document = mutation(&event(), new_event(), MutationType::Create).unwrap();

    assert_eq!(
        document.variables().get("input"),
        Some(&json!({"eventId": "e1", "createdAt": "2024-01-01T00:00:00Z", "title": "t"}))
    );
}

#[test]
fn delete_sends_the_composite_key() {
    let document = mutation(&fixtures::team(), fixtures::new_team(), MutationType::Delete).unwrap();

    assert_eq!(
        document.variables(),
        json!({"input": {"teamId": "team-1", "name": "Engineering"}})
            .as_object()
            .cloned()
            .unwrap()
    );
}

#[test]
fn update_with_condition() {
    let schema = fixtures::post();

    let document = DocumentBuilder::new(&schema, OperationType::Mutation)
        .decorate(DirectiveNameDecorator::new(ModelOperation::Update))
        .decorate(ModelDecorator::new(
            ModelInstance::new().with("id", "post-1").with("rating", 4),
            MutationType::Update,
        ))
        .decorate(FilterDecorator::new(field("rating").lt(4)))
        .build()
        .unwrap();

    insta::assert_snapshot!(document.text(), @r###"
    mutation UpdatePost($input: UpdatePostInput!, $condition: ModelPostConditionInput) {
      updatePost(input: $input, condition: $condition) {
        id
        title
        content
        createdAt
        updatedAt
        rating
        status
        __typename
      }
    }
    "###);
    assert_eq!(
        document.variables().get("condition"),
        Some(&json!({"rating": {"lt": 4}}))
    );
}

#[test]
fn belongs_to_key_is_taken_from_the_associated_model() {
    let comment = ModelInstance::new()
        .with("id", "comment-1")
        .with("content", "Nice post")
        .with("post", json!({"id": "post-1", "title": "ignored"}));

    let document = mutation(&fixtures::comment(), comment, MutationType::Create).unwrap();

    assert_eq!(
        document.variables().get("input"),
        Some(&json!({"id": "comment-1", "content": "Nice post", "postID": "post-1"}))
    );
}

#[test]
fn belongs_to_target_field_wins_over_the_associated_model() {
    let comment = ModelInstance::new()
        .with("id", "comment-1")
        .with("content", "Nice post")
        .with("postID", "post-2")
        .with("post", json!({"id": "post-1"}));

    let document = mutation(&fixtures::comment(), comment, MutationType::Update).unwrap();

    assert_eq!(
        document.variables().get("input"),
        Some(&json!({"id": "comment-1", "content": "Nice post", "postID": "post-2"}))
    );
}

#[test]
fn instance_from_a_serializable_struct() {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Post {
        id: String,
        title: String,
        content: String,
        created_at: String,
        rating: Option<u8>,
    }

    let post = ModelInstance::from_serializable(&Post {
        id: "post-1".to_string(),
        title: "title".to_string(),
        content: "content".to_string(),
        created_at: "2024-05-01T10:00:00.000Z".to_string(),
        rating: Some(5),
    })
    .unwrap();

    let document = mutation(&fixtures::post(), post, MutationType::Create).unwrap();

    assert_eq!(
        document.variables().get("input"),
        Some(&json!({
            "id": "post-1",
            "title": "title",
            "content": "content",
            "createdAt": "2024-05-01T10:00:00.000Z",
            "rating": 5,
            "status": null,
        }))
    );
}

#[test]
fn instance_must_be_an_object() {
    let error = ModelInstance::from_serializable(&"post-1").unwrap_err();

    insta::assert_snapshot!(error.to_string(), @"A model instance must serialize to an object, found a string");
}
