// src/docs.rs

use axum::Json;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::get_me,

        // --- Catalog ---
        handlers::catalog::list_items,
        handlers::catalog::create_item,
        handlers::catalog::update_item,
        handlers::catalog::delete_item,

        // --- Vehicles ---
        handlers::vehicles::list_vehicles,
        handlers::vehicles::create_vehicle,
        handlers::vehicles::update_vehicle,
        handlers::vehicles::delete_vehicle,
        handlers::vehicles::get_vehicle_inventory,
        handlers::vehicles::set_inventory_level,

        // --- Users ---
        handlers::users::list_users,
        handlers::users::create_user,
        handlers::users::update_user,
        handlers::users::delete_user,

        // --- Submissions / Requests ---
        handlers::submissions::list_submissions,
        handlers::submissions::update_submission_status,
        handlers::requests::list_requests,
        handlers::requests::update_request_status,

        // --- Technician ---
        handlers::technician::get_inventory,
        handlers::technician::get_catalog,
        handlers::technician::submit_inventory,
        handlers::technician::request_material,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::User,
            models::auth::LoginPayload,
            models::auth::AuthResponse,

            // --- Catalog ---
            models::catalog::ItemCategory,
            models::catalog::Item,

            // --- Vehicles / Inventory ---
            models::vehicle::Vehicle,
            models::inventory::InventoryLevel,
            models::inventory::InventoryItemView,

            // --- Workflow ---
            models::status::ReviewStatus,
            models::status::Decision,
            models::submission::Submission,
            models::submission::SubmissionItemDetail,
            models::submission::SubmissionView,
            models::request::Request,
            models::request::RequestItemDetail,
            models::request::RequestView,

            // --- Dashboard ---
            models::dashboard::DashboardSummary,

            // --- Payloads ---
            handlers::catalog::ItemPayload,
            handlers::vehicles::VehiclePayload,
            handlers::vehicles::InventoryLevelPayload,
            handlers::users::CreateUserPayload,
            handlers::users::UpdateUserPayload,
            handlers::submissions::DecisionPayload,
            handlers::technician::CountedItemPayload,
            handlers::technician::SubmitInventoryPayload,
            handlers::technician::RequestedItemPayload,
            handlers::technician::RequestMaterialPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Sessão"),
        (name = "Catalog", description = "Catálogo Global de Itens"),
        (name = "Vehicles", description = "Almoxarifados e Estoque"),
        (name = "Users", description = "Gestão de Usuários"),
        (name = "Submissions", description = "Conferência de Inventários"),
        (name = "Requests", description = "Solicitações de Material"),
        (name = "Technician", description = "Telas do Técnico"),
        (name = "Dashboard", description = "Painel do Gestor")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

// O documento é servido por uma rota comum, sem UI embutida.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
