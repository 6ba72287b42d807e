//! Request extractors whose rejections render as [`AppError`] JSON.
//!
//! [`AppPath`] wraps axum's `Path` so an unparseable id is a 400 with the
//! usual error body. [`RequiredJson`] runs three checks in order, rejecting
//! with a 400 before the handler runs (and therefore before anything is
//! persisted):
//!
//! 1. the body is a JSON object containing every key in
//!    [`RequiredFields::REQUIRED`] (all missing keys are reported together);
//! 2. the object decodes into `T` without type coercion;
//! 3. `T`'s `validator` rules (string lengths, email format, no NUL bytes) pass.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use starwars_core::error::CoreError;
use starwars_core::payload::{require_fields, RequiredFields};
use validator::Validate;

use crate::error::AppError;

/// Path parameters, rejected as [`AppError::BadRequest`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// A request body decoded into `T` after required-key and validation checks.
#[derive(Debug)]
pub struct RequiredJson<T>(pub T);

impl<S, T> FromRequest<S> for RequiredJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + RequiredFields,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let object = require_fields(value, T::REQUIRED)?;

        let input: T = serde_json::from_value(Value::Object(object))
            .map_err(|e| CoreError::Validation(format!("Invalid request body: {e}")))?;

        input.validate().map_err(CoreError::from)?;

        Ok(Self(input))
    }
}
