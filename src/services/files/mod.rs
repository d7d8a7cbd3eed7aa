//! Files service for Slack API.

use crate::api::{decode, to_body, ApiCaller};
use crate::auth::Credential;
use crate::errors::SlackResult;
use crate::types::{File, FileId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Request to enable public sharing of a file
#[derive(Debug, Clone, Serialize)]
pub struct SharedPublicUrlRequest {
    /// File ID
    pub file: FileId,
}

impl SharedPublicUrlRequest {
    /// Create a new request
    pub fn new(file: impl Into<FileId>) -> Self {
        Self { file: file.into() }
    }
}

/// Response from files.sharedPublicURL
#[derive(Debug, Clone, Deserialize)]
pub struct SharedPublicUrlResponse {
    /// Success indicator
    pub ok: bool,
    /// The shared file
    pub file: File,
}

/// Trait for files service operations
#[async_trait]
pub trait FilesServiceTrait: Send + Sync {
    /// Enable public sharing; requires the user token
    async fn shared_public_url(&self, request: SharedPublicUrlRequest) -> SlackResult<SharedPublicUrlResponse>;
}

/// Files service implementation
#[derive(Clone, Debug)]
pub struct FilesService {
    api: ApiCaller,
}

impl FilesService {
    /// Create a new files service
    pub fn new(api: ApiCaller) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FilesServiceTrait for FilesService {
    #[instrument(skip(self), fields(file = %request.file))]
    async fn shared_public_url(&self, request: SharedPublicUrlRequest) -> SlackResult<SharedPublicUrlResponse> {
        let body = to_body(&request)?;
        let response = self
            .api
            .post("files.sharedPublicURL", body, Credential::User)
            .await?;

        decode(response)
    }
}
