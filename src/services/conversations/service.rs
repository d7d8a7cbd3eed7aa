//! Conversations service implementation.

use super::*;
use crate::api::{decode, to_body, to_params, ApiCaller};
use crate::auth::Credential;
use crate::errors::SlackResult;
use crate::types::Channel;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for conversations service operations
#[async_trait]
pub trait ConversationsServiceTrait: Send + Sync {
    /// List every conversation, following pagination to the end
    async fn list_all(&self, request: ListConversationsRequest) -> SlackResult<Vec<Channel>>;

    /// Open or resume a DM/MPIM
    async fn open(&self, request: OpenConversationRequest) -> SlackResult<OpenConversationResponse>;
}

/// Conversations service implementation
#[derive(Clone, Debug)]
pub struct ConversationsService {
    api: ApiCaller,
}

impl ConversationsService {
    /// Create a new conversations service
    pub fn new(api: ApiCaller) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ConversationsServiceTrait for ConversationsService {
    #[instrument(skip(self))]
    async fn list_all(&self, request: ListConversationsRequest) -> SlackResult<Vec<Channel>> {
        let params = to_params(&request)?;
        let channels = self
            .api
            .get_paginated("conversations.list", &params, "channels", Credential::Default)
            .await?;

        channels.into_iter().map(decode).collect()
    }

    #[instrument(skip(self), fields(users = %request.users))]
    async fn open(&self, request: OpenConversationRequest) -> SlackResult<OpenConversationResponse> {
        let body = to_body(&request)?;
        let response = self
            .api
            .post("conversations.open", body, Credential::Default)
            .await?;

        decode(response)
    }
}
