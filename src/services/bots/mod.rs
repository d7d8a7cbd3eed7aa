//! Bots service for Slack API.

use crate::api::{decode, to_params, ApiCaller};
use crate::auth::Credential;
use crate::errors::SlackResult;
use crate::types::{Bot, BotId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Request to get bot info
#[derive(Debug, Clone, Serialize)]
pub struct BotInfoRequest {
    /// Bot ID
    pub bot: BotId,
}

impl BotInfoRequest {
    /// Create a new request
    pub fn new(bot: impl Into<BotId>) -> Self {
        Self { bot: bot.into() }
    }
}

/// Response from bots.info
#[derive(Debug, Clone, Deserialize)]
pub struct BotInfoResponse {
    /// Success indicator
    pub ok: bool,
    /// Bot
    pub bot: Bot,
}

/// Trait for bots service operations
#[async_trait]
pub trait BotsServiceTrait: Send + Sync {
    /// Get bot info
    async fn info(&self, request: BotInfoRequest) -> SlackResult<BotInfoResponse>;
}

/// Bots service implementation
#[derive(Clone, Debug)]
pub struct BotsService {
    api: ApiCaller,
}

impl BotsService {
    /// Create a new bots service
    pub fn new(api: ApiCaller) -> Self {
        Self { api }
    }
}

#[async_trait]
impl BotsServiceTrait for BotsService {
    #[instrument(skip(self), fields(bot = %request.bot))]
    async fn info(&self, request: BotInfoRequest) -> SlackResult<BotInfoResponse> {
        let params = to_params(&request)?;
        let response = self
            .api
            .get("bots.info", &params, Credential::Default)
            .await?;

        decode(response)
    }
}
