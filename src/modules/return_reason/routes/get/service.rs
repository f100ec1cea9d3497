use super::types::{request, response};
use crate::{modules::return_reason::selection::FindConfig, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let config = FindConfig::store();

    ctx.return_reason_service
        .retrieve(&payload.id, &config)
        .await
        .map(|return_reason| response::Success::ReturnReason(config.project(&return_reason)))
        .map_err(|err| {
            tracing::debug!("Failed to retrieve return reason {}: {}", payload.id, err);
            err.into()
        })
}
