//! # GraphQL model documents
//!
//! Builds the GraphQL document and the typed variables of a model operation: create, update and
//! delete mutations, get and list queries, and onCreate/onUpdate/onDelete subscriptions.
//!
//! A [`DocumentBuilder`] starts from the model schema and an operation type and applies
//! decorators in order, each one adding its part of the document:
//!
//! ```ignore
//! let document = DocumentBuilder::new(&schema, OperationType::Query)
//!     .decorate(DirectiveNameDecorator::new(ModelOperation::List))
//!     .decorate(FilterDecorator::new(field("title").begins_with("Hello")))
//!     .decorate(PaginationDecorator::default().with_limit(10))
//!     .build()?;
//! ```
//!
//! which renders as
//!
//! ```graphql
//! query ListPosts($filter: ModelPostFilterInput, $limit: Int) {
//!   listPosts(filter: $filter, limit: $limit) {
//!     items {
//!       id
//!       title
//!       __typename
//!     }
//!     nextToken
//!   }
//! }
//! ```

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod builder;
mod config;
mod decorator;
mod document;
mod error;
mod filter;
mod input;
mod model;
pub mod naming;
pub mod predicate;
mod request;
mod schema;

pub use builder::DocumentBuilder;
pub use config::{CollisionPolicy, DocumentConfig};
pub use decorator::{
    Decorator, DecoratorContext, DirectiveNameDecorator, DocumentDecorator, FilterDecorator, ModelDecorator,
    ModelIdDecorator, ModelIdInput, ModelOperation, MutationType, PaginationDecorator,
};
pub use document::{Document, OperationType, Selection, SelectionSet};
pub use error::{DocumentError, DocumentResult};
pub use filter::{translate as translate_filter, FilterOperator};
pub use input::{DocumentInput, DocumentInputs};
pub use model::ModelInstance;
pub use predicate::{field, QueryPredicate};
pub use request::{GraphqlRequest, ModelRequests};
pub use schema::{Association, FieldType, ModelField, ModelSchema, PrimaryKey, ScalarType};
