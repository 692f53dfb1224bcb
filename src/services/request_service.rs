use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::RequestRepository,
    events::{ChangeFeed, TABLE_REQUESTS},
    models::auth::User,
    models::request::{Request, RequestItemDetail, RequestView},
    models::status::Decision,
};

// Item pedido em uma solicitação de material.
#[derive(Debug, Clone)]
pub struct RequestedItem {
    pub item_id: Uuid,
    pub requested_quantity: i32,
}

#[derive(Clone)]
pub struct RequestService {
    request_repo: RequestRepository,
    pool: PgPool,
    change_feed: Arc<ChangeFeed>,
}

impl RequestService {
    pub fn new(
        request_repo: RequestRepository,
        pool: PgPool,
        change_feed: Arc<ChangeFeed>,
    ) -> Self {
        Self {
            request_repo,
            pool,
            change_feed,
        }
    }

    // Mesmo padrão transacional da submissão: pai + itens pedidos entram
    // juntos ou nada entra.
    pub async fn create_request(
        &self,
        user: &User,
        items: &[RequestedItem],
        notes: Option<&str>,
    ) -> Result<Request, AppError> {
        let mut tx = self.pool.begin().await?;

        let request = self.request_repo.create(&mut *tx, user.id, notes).await?;

        for item in items {
            self.request_repo
                .insert_item(&mut *tx, request.id, item.item_id, item.requested_quantity)
                .await?;
        }

        tx.commit().await?;

        self.change_feed.publish(TABLE_REQUESTS);
        Ok(request)
    }

    pub async fn list(&self) -> Result<Vec<RequestView>, AppError> {
        let metas = self.request_repo.list().await?;

        let ids: Vec<Uuid> = metas.iter().map(|meta| meta.id).collect();
        let mut items_by_parent: HashMap<Uuid, Vec<RequestItemDetail>> = HashMap::new();
        if !ids.is_empty() {
            for item in self.request_repo.list_items(&ids).await? {
                items_by_parent
                    .entry(item.request_id)
                    .or_default()
                    .push(item);
            }
        }

        Ok(metas
            .into_iter()
            .map(|meta| {
                let items = items_by_parent.remove(&meta.id).unwrap_or_default();
                RequestView::assemble(meta, items)
            })
            .collect())
    }

    pub async fn set_status(&self, id: Uuid, decision: Decision) -> Result<(), AppError> {
        let affected = self.request_repo.set_status(id, decision.into()).await?;
        if affected == 0 {
            return Err(AppError::RequestNotFound);
        }

        self.change_feed.publish(TABLE_REQUESTS);
        Ok(())
    }
}
