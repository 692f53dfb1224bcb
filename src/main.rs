//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post, put},
    Router,
};
use tokio::net::TcpListener;

mod common;
mod config;
mod db;
mod docs;
mod events;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;
use crate::middleware::rbac::role_gate;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Telas do gestor
    let manager_routes = Router::new()
        .route(
            "/api/catalog/items",
            get(handlers::catalog::list_items).post(handlers::catalog::create_item),
        )
        .route(
            "/api/catalog/items/{id}",
            put(handlers::catalog::update_item).delete(handlers::catalog::delete_item),
        )
        .route(
            "/api/vehicles",
            get(handlers::vehicles::list_vehicles).post(handlers::vehicles::create_vehicle),
        )
        .route(
            "/api/vehicles/{id}",
            put(handlers::vehicles::update_vehicle).delete(handlers::vehicles::delete_vehicle),
        )
        .route(
            "/api/vehicles/{id}/inventory",
            get(handlers::vehicles::get_vehicle_inventory),
        )
        .route(
            "/api/vehicles/{id}/inventory/{item_id}",
            put(handlers::vehicles::set_inventory_level),
        )
        .route(
            "/api/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/api/users/{id}",
            put(handlers::users::update_user).delete(handlers::users::delete_user),
        )
        .route("/api/submissions", get(handlers::submissions::list_submissions))
        .route(
            "/api/submissions/{id}/status",
            patch(handlers::submissions::update_submission_status),
        )
        .route("/api/requests", get(handlers::requests::list_requests))
        .route(
            "/api/requests/{id}/status",
            patch(handlers::requests::update_request_status),
        )
        .route("/api/dashboard/summary", get(handlers::dashboard::get_summary));

    // Telas do técnico
    let technician_routes = Router::new()
        .route(
            "/api/technician/inventory",
            get(handlers::technician::get_inventory),
        )
        .route(
            "/api/technician/catalog",
            get(handlers::technician::get_catalog),
        )
        .route(
            "/api/technician/submissions",
            post(handlers::technician::submit_inventory),
        )
        .route(
            "/api/technician/requests",
            post(handlers::technician::request_material),
        );

    // Sessão e feed de mudanças: qualquer papel autenticado
    let session_routes = Router::new()
        .route("/api/auth/me", get(handlers::auth::get_me))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/realtime/ws", get(handlers::realtime::ws_handler));

    // Tudo que é protegido passa primeiro pelo auth_guard e depois pelo
    // portão único de papel (camadas são aplicadas de fora para dentro:
    // a última adicionada roda primeiro).
    let protected_routes = manager_routes
        .merge(technician_routes)
        .merge(session_routes)
        .layer(axum_middleware::from_fn(role_gate))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(protected_routes)
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
