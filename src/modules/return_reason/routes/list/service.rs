use super::types::response;
use crate::{
    modules::return_reason::{repository::Filters, selection::FindConfig},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let config = FindConfig::store();

    ctx.return_reason_service
        .list(&Filters::top_level(), &config)
        .await
        .map(|return_reasons| {
            response::Success::ReturnReasons(
                return_reasons
                    .iter()
                    .map(|return_reason| config.project(return_reason))
                    .collect(),
            )
        })
        .map_err(|err| {
            tracing::debug!("Failed to list return reasons: {}", err);
            err.into()
        })
}
