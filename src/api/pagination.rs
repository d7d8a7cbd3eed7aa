//! Cursor pagination.
//!
//! Pages are fetched one after another; page N+1 is requested only after the
//! cursor on page N has been read. The first failing page aborts the whole
//! listing and nothing fetched so far is returned.

use super::{ApiCaller, Params};
use crate::auth::Credential;
use crate::errors::{PaginationError, ResponseError, SlackError, SlackResult};
use crate::observability::{record_error, record_page, record_success, RequestTrace};
use crate::types::ResponseMetadata;
use serde_json::Value;
use tracing::{debug, Instrument};

impl ApiCaller {
    /// GET every page of a cursor-paginated endpoint and concatenate the
    /// `listing` arrays in page order.
    pub async fn get_paginated(
        &self,
        endpoint: &str,
        params: &Params,
        listing: &str,
        credential: Credential,
    ) -> SlackResult<Vec<Value>> {
        let trace = RequestTrace::new("GET", endpoint);
        let span = trace.span();

        let result = self
            .collect_pages(endpoint, params, listing, credential, &span)
            .instrument(span.clone())
            .await;

        match &result {
            Ok(items) => {
                record_success(&span);
                debug!(
                    endpoint = %endpoint,
                    items = items.len(),
                    elapsed_ms = trace.elapsed_ms(),
                    "Pagination complete"
                );
            }
            Err(error) => record_error(&span, &error.to_string()),
        }

        result
    }

    async fn collect_pages(
        &self,
        endpoint: &str,
        params: &Params,
        listing: &str,
        credential: Credential,
        span: &tracing::Span,
    ) -> SlackResult<Vec<Value>> {
        let mut items = Vec::new();
        let mut page_params = params.clone();
        let mut pages: u32 = 0;

        loop {
            record_page(span, pages + 1);
            let page = self.get(endpoint, &page_params, credential).await?;
            pages += 1;

            items.extend(listing_items(&page, listing)?);

            let Some(cursor) = next_cursor(&page) else {
                return Ok(items);
            };

            if let Some(limit) = self.config.max_pages {
                if pages >= limit {
                    return Err(SlackError::Pagination(PaginationError::PageLimitExceeded {
                        endpoint: endpoint.to_string(),
                        limit,
                    }));
                }
            }

            page_params = params.clone();
            page_params.insert("cursor".to_string(), Value::String(cursor));
        }
    }
}

/// Continuation cursor of a page, if more pages exist
pub(crate) fn next_cursor(page: &Value) -> Option<String> {
    let metadata: ResponseMetadata =
        serde_json::from_value(page.get("response_metadata")?.clone()).ok()?;

    if metadata.has_more() {
        metadata.next_cursor
    } else {
        None
    }
}

/// Items of the named listing on one page; a missing listing is empty
fn listing_items(page: &Value, listing: &str) -> SlackResult<Vec<Value>> {
    match page.get(listing) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(_) => Err(SlackError::Response(ResponseError::UnexpectedResponse {
            message: format!("'{}' is not an array", listing),
        })),
    }
}
