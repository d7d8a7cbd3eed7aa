//! Users service implementation.

use super::*;
use crate::api::{decode, to_params, ApiCaller};
use crate::auth::Credential;
use crate::errors::SlackResult;
use crate::types::User;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for users service operations
#[async_trait]
pub trait UsersServiceTrait: Send + Sync {
    /// Get user info
    async fn info(&self, request: GetUserRequest) -> SlackResult<GetUserResponse>;

    /// List every workspace member, following pagination to the end
    async fn list_all(&self, request: ListUsersRequest) -> SlackResult<Vec<User>>;
}

/// Users service implementation
#[derive(Clone, Debug)]
pub struct UsersService {
    api: ApiCaller,
}

impl UsersService {
    /// Create a new users service
    pub fn new(api: ApiCaller) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UsersServiceTrait for UsersService {
    #[instrument(skip(self), fields(user = %request.user))]
    async fn info(&self, request: GetUserRequest) -> SlackResult<GetUserResponse> {
        let params = to_params(&request)?;
        let response = self
            .api
            .get("users.info", &params, Credential::Default)
            .await?;

        decode(response)
    }

    #[instrument(skip(self))]
    async fn list_all(&self, request: ListUsersRequest) -> SlackResult<Vec<User>> {
        let params = to_params(&request)?;
        let members = self
            .api
            .get_paginated("users.list", &params, "members", Credential::Default)
            .await?;

        members.into_iter().map(decode).collect()
    }
}
