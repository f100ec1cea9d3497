pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::modules::return_reason::service;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::{json, Value};

    pub enum Success {
        ReturnReason(Value),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReturnReason(return_reason) => (
                    StatusCode::OK,
                    Json(json!({ "return_reason": return_reason })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ReturnReasonNotFound(String),
        InvalidReturnReasonId(String),
        InvalidState(String),
        FailedToFetchReturnReason,
    }

    impl From<service::Error> for Error {
        fn from(err: service::Error) -> Self {
            match err {
                service::Error::NotFound(message) => Self::ReturnReasonNotFound(message),
                service::Error::InvalidData(message) => Self::InvalidReturnReasonId(message),
                service::Error::Conflict(message) => Self::InvalidState(message),
                service::Error::Unexpected => Self::FailedToFetchReturnReason,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReturnReasonNotFound(message) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": message, "code": "not_found" })),
                )
                    .into_response(),
                Self::InvalidReturnReasonId(message) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": message, "code": "invalid_data" })),
                )
                    .into_response(),
                Self::InvalidState(message) => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": message, "code": "not_allowed" })),
                )
                    .into_response(),
                Self::FailedToFetchReturnReason => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch return reason", "code": "unknown_error" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
