use super::{validate_id, Error, ReturnReasonService};
use crate::modules::return_reason::{
    repository::{self, Filters, ReturnReason},
    selection::{FindConfig, ReturnReasonRelation},
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;

#[derive(Clone)]
pub struct PgReturnReasonService {
    pool: PgPool,
}

impl PgReturnReasonService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_relations(
        &self,
        reasons: &mut [ReturnReason],
        config: &FindConfig,
    ) -> Result<(), Error> {
        if reasons.is_empty() {
            return Ok(());
        }

        if config.includes(ReturnReasonRelation::ParentReturnReason) {
            let parent_ids = reasons
                .iter()
                .filter_map(|reason| reason.parent_return_reason_id.clone())
                .collect::<Vec<_>>();

            let parents = match parent_ids.is_empty() {
                true => HashMap::new(),
                false => repository::find_many_by_ids(&self.pool, &parent_ids)
                    .await
                    .map_err(Error::from)?
                    .into_iter()
                    .map(|parent| (parent.id.clone(), parent))
                    .collect::<HashMap<_, _>>(),
            };

            for reason in reasons.iter_mut() {
                let parent = reason
                    .parent_return_reason_id
                    .as_ref()
                    .and_then(|id| parents.get(id))
                    .cloned()
                    .map(Box::new);
                reason.parent_return_reason = Some(parent);
            }
        }

        if config.includes(ReturnReasonRelation::ReturnReasonChildren) {
            let ids = reasons
                .iter()
                .map(|reason| reason.id.clone())
                .collect::<Vec<_>>();

            let mut children_by_parent: HashMap<String, Vec<ReturnReason>> = HashMap::new();
            for child in repository::find_children_of(&self.pool, &ids)
                .await
                .map_err(Error::from)?
            {
                if let Some(parent_id) = child.parent_return_reason_id.clone() {
                    children_by_parent.entry(parent_id).or_default().push(child);
                }
            }

            for reason in reasons.iter_mut() {
                reason.return_reason_children =
                    Some(children_by_parent.remove(&reason.id).unwrap_or_default());
            }
        }

        Ok(())
    }
}

impl From<repository::Error> for Error {
    fn from(err: repository::Error) -> Self {
        match err {
            repository::Error::Conflict(message) => Error::Conflict(message),
            repository::Error::UnexpectedError => Error::Unexpected,
        }
    }
}

#[async_trait]
impl ReturnReasonService for PgReturnReasonService {
    async fn retrieve(&self, id: &str, config: &FindConfig) -> Result<ReturnReason, Error> {
        validate_id(id)?;

        let reason = repository::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| Error::not_found(id))?;

        let mut reasons = [reason];
        self.load_relations(&mut reasons, config).await?;
        let [reason] = reasons;

        Ok(reason)
    }

    async fn list(
        &self,
        filters: &Filters,
        config: &FindConfig,
    ) -> Result<Vec<ReturnReason>, Error> {
        let mut reasons = repository::find_many(&self.pool, filters).await?;
        self.load_relations(&mut reasons, config).await?;

        tracing::debug!("Fetched {} return reasons", reasons.len());

        Ok(reasons)
    }
}
