pub mod inventory;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

use crate::services::StoreError;

/// JSON body used for confirmations and errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Item not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Unable to dispatch request: {0}")]
    Dispatch(String),
}

impl ApiError {
    pub fn dispatch<E: Debug>(err: E) -> Self {
        ApiError::Dispatch(format!("{:?}", err))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) | ApiError::Dispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{}", self);
        }

        HttpResponse::build(self.status_code()).json(MessageResponse::new(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::BadRequest("bad body".to_owned()).status_code(),
            StatusCode::BAD_REQUEST
        );

        let dispatch = ApiError::dispatch("no handler");
        assert_eq!(dispatch.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            dispatch.to_string(),
            "Unable to dispatch request: \"no handler\""
        );

        let serde_err = serde_json::from_str::<u32>("x").unwrap_err();
        let store = ApiError::from(StoreError::from(serde_err));
        assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_match_contract() {
        assert_eq!(ApiError::NotFound.to_string(), "Item not found");
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method not allowed");
    }
}
