//! Shared query parameter types for API handlers.

use roster_core::pagination::{PageRequest, DEFAULT_PAGE};
use serde::Deserialize;

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};

/// Pagination parameters for list and search endpoints (`?page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl ListParams {
    /// Resolve into a [`PageRequest`], filling gaps from configuration.
    ///
    /// A `limit` above `max_page_size` is a bad request; non-positive
    /// values are rejected by [`PageRequest::new`] as validation errors.
    pub fn page_request(&self, config: &ServerConfig) -> AppResult<PageRequest> {
        let limit = self.limit.unwrap_or(config.default_page_size);
        if limit > config.max_page_size {
            return Err(AppError::BadRequest(format!(
                "limit must not exceed {}, got {limit}",
                config.max_page_size
            )));
        }
        Ok(PageRequest::new(self.page.unwrap_or(DEFAULT_PAGE), limit)?)
    }
}
