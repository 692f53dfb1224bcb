// src/config.rs

use std::sync::Arc;
use std::{env, time::Duration};

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{
        DashboardRepository, InventoryRepository, ItemRepository, RequestRepository,
        SubmissionRepository, UserRepository, VehicleRepository,
    },
    events::ChangeFeed,
    services::{
        auth::AuthService, request_service::RequestService,
        submission_service::SubmissionService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub change_feed: Arc<ChangeFeed>,

    pub user_repo: UserRepository,
    pub vehicle_repo: VehicleRepository,
    pub item_repo: ItemRepository,
    pub inventory_repo: InventoryRepository,
    pub dashboard_repo: DashboardRepository,

    pub auth_service: AuthService,
    pub submission_service: SubmissionService,
    pub request_service: RequestService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // Um único hub de eventos para o processo inteiro; cada tela
        // assina e desassina pelo WebSocket.
        let change_feed = Arc::new(ChangeFeed::default());

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let vehicle_repo = VehicleRepository::new(db_pool.clone());
        let item_repo = ItemRepository::new(db_pool.clone());
        let inventory_repo = InventoryRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo.clone(), jwt_secret);
        let submission_service = SubmissionService::new(
            SubmissionRepository::new(db_pool.clone()),
            db_pool.clone(),
            change_feed.clone(),
        );
        let request_service = RequestService::new(
            RequestRepository::new(db_pool.clone()),
            db_pool.clone(),
            change_feed.clone(),
        );

        Ok(Self {
            db_pool,
            change_feed,
            user_repo,
            vehicle_repo,
            item_repo,
            inventory_repo,
            dashboard_repo,
            auth_service,
            submission_service,
            request_service,
        })
    }
}
