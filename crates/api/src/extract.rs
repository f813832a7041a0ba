//! Extractor wrappers whose rejections are [`AppError`]s.
//!
//! Axum's stock `Json`, `Path` and `Query` reject with plain-text bodies
//! (and 422 for JSON shape errors). These wrappers route every rejection
//! through [`AppError::BadRequest`] so clients always get the JSON error
//! body with status 400.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
