//! Messages service implementation.

use super::*;
use crate::api::{decode, to_body, to_params, ApiCaller};
use crate::auth::Credential;
use crate::errors::SlackResult;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for messages service operations
#[async_trait]
pub trait MessagesServiceTrait: Send + Sync {
    /// Post a message to a channel
    async fn post(&self, request: PostMessageRequest) -> SlackResult<PostMessageResponse>;

    /// Get a permalink to a message
    async fn get_permalink(&self, request: GetPermalinkRequest) -> SlackResult<GetPermalinkResponse>;
}

/// Messages service implementation
#[derive(Clone, Debug)]
pub struct MessagesService {
    api: ApiCaller,
}

impl MessagesService {
    /// Create a new messages service
    pub fn new(api: ApiCaller) -> Self {
        Self { api }
    }
}

#[async_trait]
impl MessagesServiceTrait for MessagesService {
    #[instrument(skip(self, request), fields(channel = %request.channel))]
    async fn post(&self, request: PostMessageRequest) -> SlackResult<PostMessageResponse> {
        let body = to_body(&request)?;
        let response = self
            .api
            .post("chat.postMessage", body, Credential::Default)
            .await?;

        decode(response)
    }

    #[instrument(skip(self), fields(channel = %request.channel, ts = %request.message_ts))]
    async fn get_permalink(&self, request: GetPermalinkRequest) -> SlackResult<GetPermalinkResponse> {
        let params = to_params(&request)?;
        let response = self
            .api
            .get("chat.getPermalink", &params, Credential::Default)
            .await?;

        decode(response)
    }
}
