use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::SubmissionRepository,
    events::{ChangeFeed, TABLE_SUBMISSIONS},
    models::auth::User,
    models::status::Decision,
    models::submission::{Submission, SubmissionItemDetail, SubmissionView},
};

// Item contado que o técnico reporta ao fechar um inventário.
#[derive(Debug, Clone)]
pub struct CountedItem {
    pub item_id: Uuid,
    pub previous_quantity: i32,
    pub reported_quantity: i32,
}

#[derive(Clone)]
pub struct SubmissionService {
    submission_repo: SubmissionRepository,
    pool: PgPool,
    change_feed: Arc<ChangeFeed>,
}

impl SubmissionService {
    pub fn new(
        submission_repo: SubmissionRepository,
        pool: PgPool,
        change_feed: Arc<ChangeFeed>,
    ) -> Self {
        Self {
            submission_repo,
            pool,
            change_feed,
        }
    }

    // Fecha um inventário: cria o pai (status 'pending') e os itens
    // contados dentro de uma única transação — ou entra tudo, ou nada.
    pub async fn create_submission(
        &self,
        user: &User,
        items: &[CountedItem],
        notes: Option<&str>,
    ) -> Result<Submission, AppError> {
        let vehicle_id = user.vehicle_id.ok_or(AppError::NoVehicleAssigned)?;

        let mut tx = self.pool.begin().await?;

        let submission = self
            .submission_repo
            .create(&mut *tx, user.id, vehicle_id, notes)
            .await?;

        for item in items {
            self.submission_repo
                .insert_item(
                    &mut *tx,
                    submission.id,
                    item.item_id,
                    item.previous_quantity,
                    item.reported_quantity,
                )
                .await?; // Se falhar aqui, o pai criado acima é desfeito no rollback
        }

        tx.commit().await?;

        self.change_feed.publish(TABLE_SUBMISSIONS);
        Ok(submission)
    }

    // Lista para a tela de conferência: pais ordenados do mais novo para o
    // mais antigo, cada um com seus itens contados.
    pub async fn list(&self) -> Result<Vec<SubmissionView>, AppError> {
        let metas = self.submission_repo.list().await?;

        let ids: Vec<Uuid> = metas.iter().map(|meta| meta.id).collect();
        let mut items_by_parent: HashMap<Uuid, Vec<SubmissionItemDetail>> = HashMap::new();
        if !ids.is_empty() {
            for item in self.submission_repo.list_items(&ids).await? {
                items_by_parent
                    .entry(item.submission_id)
                    .or_default()
                    .push(item);
            }
        }

        Ok(metas
            .into_iter()
            .map(|meta| {
                let items = items_by_parent.remove(&meta.id).unwrap_or_default();
                SubmissionView::assemble(meta, items)
            })
            .collect())
    }

    // Decisão do gestor. A tela só oferece os botões em registros
    // pendentes; o servidor não re-verifica — ver models::status.
    // As quantidades reportadas NÃO são aplicadas ao estoque.
    pub async fn set_status(&self, id: Uuid, decision: Decision) -> Result<(), AppError> {
        let affected = self.submission_repo.set_status(id, decision.into()).await?;
        if affected == 0 {
            return Err(AppError::SubmissionNotFound);
        }

        self.change_feed.publish(TABLE_SUBMISSIONS);
        Ok(())
    }
}
