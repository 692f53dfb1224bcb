//! Autorização por papel: uma tabela declarativa de telas e um portão
//! único que a consulta a cada requisição (nada é cacheado entre
//! navegações — papel e sessão podem mudar entre uma e outra).

use axum::{extract::Request, middleware::Next, response::Response};

use crate::{
    common::error::AppError,
    models::auth::{User, UserRole},
};

/// As telas do aplicativo, identificadas pelo prefixo de rota da API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Catalog,
    Vehicles,
    Users,
    Submissions,
    Requests,
    TechnicianHome,
    InventoryCheck,
    MaterialRequest,
}

impl Screen {
    /// Mapeia um caminho de requisição para a tela dona dele.
    /// Caminhos fora da tabela (sessão, realtime) não são telas.
    pub fn from_path(path: &str) -> Option<Screen> {
        // Os prefixos de técnico vêm primeiro: são os mais específicos.
        if path.starts_with("/api/technician/inventory")
            || path.starts_with("/api/technician/submissions")
        {
            return Some(Screen::InventoryCheck);
        }
        if path.starts_with("/api/technician/catalog")
            || path.starts_with("/api/technician/requests")
        {
            return Some(Screen::MaterialRequest);
        }
        if path.starts_with("/api/technician") {
            return Some(Screen::TechnicianHome);
        }
        if path.starts_with("/api/dashboard") {
            return Some(Screen::Dashboard);
        }
        if path.starts_with("/api/catalog") {
            return Some(Screen::Catalog);
        }
        if path.starts_with("/api/vehicles") {
            return Some(Screen::Vehicles);
        }
        if path.starts_with("/api/users") {
            return Some(Screen::Users);
        }
        if path.starts_with("/api/submissions") {
            return Some(Screen::Submissions);
        }
        if path.starts_with("/api/requests") {
            return Some(Screen::Requests);
        }
        None
    }

    /// A tabela papel -> conjunto de telas alcançáveis.
    pub fn allowed_for(self, role: UserRole) -> bool {
        match self {
            Screen::Dashboard
            | Screen::Catalog
            | Screen::Vehicles
            | Screen::Users
            | Screen::Submissions
            | Screen::Requests => role == UserRole::Manager,

            Screen::TechnicianHome | Screen::InventoryCheck | Screen::MaterialRequest => {
                role == UserRole::Technician
            }
        }
    }
}

/// Tela inicial de cada papel; o login devolve isso para o cliente
/// resolver o redirecionamento da rota raiz.
pub fn home_route(role: UserRole) -> &'static str {
    match role {
        UserRole::Manager => "/dashboard",
        UserRole::Technician => "/technician",
    }
}

// O portão único de autorização. Roda depois do auth_guard, então o
// usuário já está nos extensions; papel errado para a tela é um 403
// silencioso, e o cliente resolve o redirecionamento sozinho.
pub async fn role_gate(request: Request, next: Next) -> Result<Response, AppError> {
    if let Some(screen) = Screen::from_path(request.uri().path()) {
        let user = request
            .extensions()
            .get::<User>()
            .ok_or(AppError::InvalidToken)?;

        if !screen.allowed_for(user.role) {
            return Err(AppError::Forbidden);
        }
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_screens_are_manager_only() {
        for screen in [
            Screen::Dashboard,
            Screen::Catalog,
            Screen::Vehicles,
            Screen::Users,
            Screen::Submissions,
            Screen::Requests,
        ] {
            assert!(screen.allowed_for(UserRole::Manager));
            assert!(!screen.allowed_for(UserRole::Technician));
        }
    }

    #[test]
    fn technician_screens_are_technician_only() {
        for screen in [
            Screen::TechnicianHome,
            Screen::InventoryCheck,
            Screen::MaterialRequest,
        ] {
            assert!(screen.allowed_for(UserRole::Technician));
            assert!(!screen.allowed_for(UserRole::Manager));
        }
    }

    #[test]
    fn paths_map_to_their_screens() {
        assert_eq!(Screen::from_path("/api/catalog/items"), Some(Screen::Catalog));
        assert_eq!(Screen::from_path("/api/vehicles"), Some(Screen::Vehicles));
        assert_eq!(
            Screen::from_path("/api/submissions/3f0e/status"),
            Some(Screen::Submissions)
        );
        assert_eq!(
            Screen::from_path("/api/technician/inventory"),
            Some(Screen::InventoryCheck)
        );
        assert_eq!(
            Screen::from_path("/api/technician/submissions"),
            Some(Screen::InventoryCheck)
        );
        assert_eq!(
            Screen::from_path("/api/technician/catalog"),
            Some(Screen::MaterialRequest)
        );
        assert_eq!(
            Screen::from_path("/api/technician/requests"),
            Some(Screen::MaterialRequest)
        );
        assert_eq!(
            Screen::from_path("/api/dashboard/summary"),
            Some(Screen::Dashboard)
        );
    }

    #[test]
    fn session_and_realtime_paths_are_not_screens() {
        assert_eq!(Screen::from_path("/api/auth/me"), None);
        assert_eq!(Screen::from_path("/api/auth/logout"), None);
        assert_eq!(Screen::from_path("/api/realtime/ws"), None);
    }

    #[test]
    fn home_route_follows_role() {
        assert_eq!(home_route(UserRole::Manager), "/dashboard");
        assert_eq!(home_route(UserRole::Technician), "/technician");
    }
}
