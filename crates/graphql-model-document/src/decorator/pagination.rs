use crate::{
    document::Document,
    error::DocumentResult,
    input::DocumentInput,
    naming::{LIMIT_TYPE, LIMIT_VARIABLE, NEXT_TOKEN_TYPE, NEXT_TOKEN_VARIABLE},
};

use super::{register_inputs, DecoratorContext, DocumentDecorator};

/// Adds `limit` and `nextToken` when they are set, never as nulls. Bounds are left to the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationDecorator {
    limit: Option<u64>,
    next_token: Option<String>,
}

impl PaginationDecorator {
    pub fn new(limit: Option<u64>, next_token: Option<String>) -> Self {
        PaginationDecorator { limit, next_token }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl DocumentDecorator for PaginationDecorator {
    fn decorate(&self, document: Document, ctx: DecoratorContext<'_>) -> DocumentResult<Document> {
        let limit = self
            .limit
            .map(|limit| (LIMIT_VARIABLE.to_string(), DocumentInput::new(LIMIT_TYPE, limit)));
        let next_token = self.next_token.as_deref().map(|next_token| {
            (
                NEXT_TOKEN_VARIABLE.to_string(),
                DocumentInput::new(NEXT_TOKEN_TYPE, next_token),
            )
        });

        register_inputs(document, ctx, limit.into_iter().chain(next_token))
    }
}
