#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use storefront_backend_rs::{
    app,
    modules::return_reason::{
        repository::{Filters, ReturnReason},
        selection::{FindConfig, ReturnReasonRelation},
        service::{self, validate_id, ReturnReasonService},
    },
    types::{AppContext, Context},
};
use tower::ServiceExt;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Retrieve(String, FindConfig),
    List(Filters, FindConfig),
}

/// In-memory stand-in for the Postgres service. Reasons are kept in insertion order.
#[derive(Default)]
pub struct MemoryReturnReasonService {
    reasons: Vec<ReturnReason>,
    failure: Option<service::Error>,
    calls: Mutex<Vec<Call>>,
}

impl MemoryReturnReasonService {
    pub fn new(reasons: Vec<ReturnReason>) -> Self {
        Self {
            reasons,
            ..Default::default()
        }
    }

    pub fn failing(failure: service::Error) -> Self {
        Self {
            failure: Some(failure),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn with_relations(&self, mut reason: ReturnReason, config: &FindConfig) -> ReturnReason {
        if config.includes(ReturnReasonRelation::ParentReturnReason) {
            let parent = reason.parent_return_reason_id.as_ref().and_then(|id| {
                self.reasons
                    .iter()
                    .find(|candidate| &candidate.id == id && !candidate.is_deleted())
                    .cloned()
                    .map(Box::new)
            });
            reason.parent_return_reason = Some(parent);
        }

        if config.includes(ReturnReasonRelation::ReturnReasonChildren) {
            reason.return_reason_children = Some(
                self.reasons
                    .iter()
                    .filter(|candidate| {
                        candidate.parent_return_reason_id.as_deref() == Some(reason.id.as_str())
                            && !candidate.is_deleted()
                    })
                    .cloned()
                    .collect(),
            );
        }

        reason
    }
}

#[async_trait]
impl ReturnReasonService for MemoryReturnReasonService {
    async fn retrieve(
        &self,
        id: &str,
        config: &FindConfig,
    ) -> Result<ReturnReason, service::Error> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Retrieve(id.to_string(), config.clone()));

        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        validate_id(id)?;

        self.reasons
            .iter()
            .find(|reason| reason.id == id && !reason.is_deleted())
            .cloned()
            .map(|reason| self.with_relations(reason, config))
            .ok_or_else(|| service::Error::not_found(id))
    }

    async fn list(
        &self,
        filters: &Filters,
        config: &FindConfig,
    ) -> Result<Vec<ReturnReason>, service::Error> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::List(filters.clone(), config.clone()));

        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        Ok(self
            .reasons
            .iter()
            .filter(|reason| filters.matches(reason))
            .cloned()
            .map(|reason| self.with_relations(reason, config))
            .collect())
    }
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

pub fn reason(id: &str, label: &str, parent: Option<&str>, minutes: i64) -> ReturnReason {
    let at = base_time() + Duration::minutes(minutes);
    ReturnReason {
        id: id.to_string(),
        value: label.to_lowercase().replace(' ', "_"),
        label: label.to_string(),
        description: None,
        parent_return_reason_id: parent.map(str::to_string),
        metadata: Some(serde_json::json!({ "source": "seed" })),
        created_at: at,
        updated_at: at,
        deleted_at: None,
        parent_return_reason: None,
        return_reason_children: None,
    }
}

pub fn router(service: Arc<MemoryReturnReasonService>) -> Router {
    let ctx = Context {
        app: AppContext {
            host: String::from("127.0.0.1"),
            port: 8000,
            url: String::from("http://127.0.0.1:8000"),
        },
        return_reason_service: service,
    };

    app::get_router(Arc::new(ctx))
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
