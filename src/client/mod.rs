//! Slack client implementation.
//!
//! Provides the main entry point for interacting with Slack APIs.

use crate::api::{ApiCaller, Params};
use crate::auth::{AuthManager, Credential};
use crate::config::SlackConfig;
use crate::errors::SlackResult;
use crate::observability::{RequestLogger, TracingRequestLogger};
use crate::services::bots::{BotInfoRequest, BotInfoResponse, BotsServiceTrait};
use crate::services::conversations::{
    ConversationsServiceTrait, ListConversationsRequest, OpenConversationRequest,
    OpenConversationResponse,
};
use crate::services::files::{FilesServiceTrait, SharedPublicUrlRequest, SharedPublicUrlResponse};
use crate::services::messages::{
    GetPermalinkRequest, GetPermalinkResponse, MessagesServiceTrait, PostMessageRequest,
    PostMessageResponse,
};
use crate::services::users::{GetUserRequest, GetUserResponse, ListUsersRequest, UsersServiceTrait};
use crate::services::{BotsService, ConversationsService, FilesService, MessagesService, UsersService};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{Attachment, BotId, Channel, ChannelId, FileId, Timestamp, User, UserId};
use serde_json::Value;
use std::sync::Arc;

/// Trait defining the Slack client interface
pub trait SlackClient: Send + Sync {
    /// Get the configuration
    fn config(&self) -> &SlackConfig;

    /// Get the authentication manager
    fn auth_manager(&self) -> &AuthManager;

    /// Get the conversations service
    fn conversations(&self) -> &dyn ConversationsServiceTrait;

    /// Get the messages service
    fn messages(&self) -> &dyn MessagesServiceTrait;

    /// Get the users service
    fn users(&self) -> &dyn UsersServiceTrait;

    /// Get the files service
    fn files(&self) -> &dyn FilesServiceTrait;

    /// Get the bots service
    fn bots(&self) -> &dyn BotsServiceTrait;
}

/// Main Slack client implementation
#[derive(Clone)]
pub struct SlackClientImpl {
    config: Arc<SlackConfig>,
    api: ApiCaller,
    transport: Arc<dyn HttpTransport>,
    // Service instances
    conversations_service: ConversationsService,
    messages_service: MessagesService,
    users_service: UsersService,
    files_service: FilesService,
    bots_service: BotsService,
}

impl SlackClientImpl {
    /// Create a new Slack client with the given configuration
    pub fn new(config: SlackConfig) -> SlackResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Self::with_transport(config, transport)
    }

    /// Create a new Slack client with a custom transport
    pub fn with_transport(
        config: SlackConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> SlackResult<Self> {
        let logger = Arc::new(TracingRequestLogger::new(config.redaction));
        Self::with_transport_and_logger(config, transport, logger)
    }

    /// Create a new Slack client with a custom transport and request logger
    pub fn with_transport_and_logger(
        config: SlackConfig,
        transport: Arc<dyn HttpTransport>,
        logger: Arc<dyn RequestLogger>,
    ) -> SlackResult<Self> {
        config.validate()?;
        let config = Arc::new(config);
        let api = ApiCaller::new(config.clone(), transport.clone(), logger);

        Ok(Self {
            conversations_service: ConversationsService::new(api.clone()),
            messages_service: MessagesService::new(api.clone()),
            users_service: UsersService::new(api.clone()),
            files_service: FilesService::new(api.clone()),
            bots_service: BotsService::new(api.clone()),
            config,
            api,
            transport,
        })
    }

    /// Get a reference to the HTTP transport
    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    /// Get a reference to the base URL
    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str()
    }

    /// Build a full URL for an endpoint
    pub fn build_url(&self, endpoint: &str) -> String {
        self.config.build_url(endpoint)
    }

    /// Get the conversations service
    pub fn conversations(&self) -> &ConversationsService {
        &self.conversations_service
    }

    /// Get the messages service
    pub fn messages(&self) -> &MessagesService {
        &self.messages_service
    }

    /// Get the users service
    pub fn users(&self) -> &UsersService {
        &self.users_service
    }

    /// Get the files service
    pub fn files(&self) -> &FilesService {
        &self.files_service
    }

    /// Get the bots service
    pub fn bots(&self) -> &BotsService {
        &self.bots_service
    }

    // Low-level access for endpoints without a dedicated operation

    /// GET an endpoint with the token in the query string
    pub async fn get(&self, endpoint: &str, params: &Params, credential: Credential) -> SlackResult<Value> {
        self.api.get(endpoint, params, credential).await
    }

    /// POST a JSON body with a bearer token
    pub async fn post(&self, endpoint: &str, body: Value, credential: Credential) -> SlackResult<Value> {
        self.api.post(endpoint, body, credential).await
    }

    /// GET every page of a cursor-paginated endpoint and concatenate `listing`
    pub async fn get_paginated(
        &self,
        endpoint: &str,
        params: &Params,
        listing: &str,
        credential: Credential,
    ) -> SlackResult<Vec<Value>> {
        self.api
            .get_paginated(endpoint, params, listing, credential)
            .await
    }

    // Convenience operations

    /// All conversations visible to the bot
    pub async fn get_channels(&self) -> SlackResult<Vec<Channel>> {
        self.conversations_service
            .list_all(ListConversationsRequest::new())
            .await
    }

    /// All workspace members
    pub async fn get_members(&self) -> SlackResult<Vec<User>> {
        self.users_service.list_all(ListUsersRequest::new()).await
    }

    /// Look up one user
    pub async fn user_info(&self, user: impl Into<UserId>) -> SlackResult<GetUserResponse> {
        self.users_service.info(GetUserRequest::new(user)).await
    }

    /// Permalink for a message
    pub async fn get_permalink(
        &self,
        channel: impl Into<ChannelId>,
        message_ts: impl Into<Timestamp>,
    ) -> SlackResult<GetPermalinkResponse> {
        self.messages_service
            .get_permalink(GetPermalinkRequest::new(channel, message_ts))
            .await
    }

    /// Look up one bot
    pub async fn get_bot_info(&self, bot: impl Into<BotId>) -> SlackResult<BotInfoResponse> {
        self.bots_service.info(BotInfoRequest::new(bot)).await
    }

    /// Post a message as the bot
    pub async fn post_message(
        &self,
        channel: impl Into<ChannelId>,
        text: impl Into<String>,
        mrkdwn: bool,
        attachments: Vec<Attachment>,
    ) -> SlackResult<PostMessageResponse> {
        let request = PostMessageRequest::new(channel, text)
            .mrkdwn(mrkdwn)
            .attachments(attachments);
        self.messages_service.post(request).await
    }

    /// Open or resume a DM with one user
    pub async fn open_direct_message(
        &self,
        users: impl Into<UserId>,
    ) -> SlackResult<OpenConversationResponse> {
        self.conversations_service
            .open(OpenConversationRequest::new(users))
            .await
    }

    /// Enable public sharing of a file; runs under the user token
    pub async fn file_public_url(
        &self,
        file: impl Into<FileId>,
    ) -> SlackResult<SharedPublicUrlResponse> {
        self.files_service
            .shared_public_url(SharedPublicUrlRequest::new(file))
            .await
    }
}

impl SlackClient for SlackClientImpl {
    fn config(&self) -> &SlackConfig {
        &self.config
    }

    fn auth_manager(&self) -> &AuthManager {
        self.api.auth()
    }

    fn conversations(&self) -> &dyn ConversationsServiceTrait {
        &self.conversations_service
    }

    fn messages(&self) -> &dyn MessagesServiceTrait {
        &self.messages_service
    }

    fn users(&self) -> &dyn UsersServiceTrait {
        &self.users_service
    }

    fn files(&self) -> &dyn FilesServiceTrait {
        &self.files_service
    }

    fn bots(&self) -> &dyn BotsServiceTrait {
        &self.bots_service
    }
}

impl std::fmt::Debug for SlackClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClientImpl")
            .field("config", &self.config)
            .finish()
    }
}
