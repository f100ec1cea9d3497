pub mod response {
    use crate::modules::return_reason::service;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::{json, Value};

    pub enum Success {
        ReturnReasons(Vec<Value>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReturnReasons(return_reasons) => (
                    StatusCode::OK,
                    Json(json!({ "return_reasons": return_reasons })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidRequest(String),
        InvalidState(String),
        FailedToFetchReturnReasons,
    }

    impl From<service::Error> for Error {
        fn from(err: service::Error) -> Self {
            match err {
                service::Error::InvalidData(message) => Self::InvalidRequest(message),
                service::Error::Conflict(message) => Self::InvalidState(message),
                service::Error::NotFound(_) | service::Error::Unexpected => {
                    Self::FailedToFetchReturnReasons
                }
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidRequest(message) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": message, "code": "invalid_data" })),
                )
                    .into_response(),
                Self::InvalidState(message) => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": message, "code": "not_allowed" })),
                )
                    .into_response(),
                Self::FailedToFetchReturnReasons => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch return reasons", "code": "unknown_error" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
