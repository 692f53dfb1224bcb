use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{Claims, User},
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String) -> Self {
        Self {
            user_repo,
            jwt_secret,
        }
    }

    // Login por nome (case-insensitive) + senha. Qualquer causa de falha —
    // nome desconhecido, senha errada, erro de backend — degrada para a
    // mesma resposta genérica, sem distinguir qual campo errou.
    pub async fn login(&self, name: &str, password: &str) -> Result<(User, String), AppError> {
        let mut matches = match self.user_repo.find_by_name(name).await {
            Ok(matches) => matches,
            Err(e) => {
                tracing::error!("Falha ao consultar usuário no login: {}", e);
                return Err(AppError::InvalidCredentials);
            }
        };

        // Semântica de `single()`: exatamente uma linha deve casar.
        if matches.len() != 1 {
            return Err(AppError::InvalidCredentials);
        }
        let user = matches.remove(0);

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid = tokio::task::spawn_blocking(move || {
            verify(&password_clone, &password_hash_clone)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = create_token(&self.jwt_secret, user.id)?;
        Ok((user, token))
    }

    // Gera o hash bcrypt fora do executor async.
    pub async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let password_clone = password.to_owned();
        let hashed = tokio::task::spawn_blocking(move || {
            hash(&password_clone, bcrypt::DEFAULT_COST)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
        Ok(hashed)
    }

    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let claims = decode_token(&self.jwt_secret, token)?;

        // O token morre junto com a linha do usuário: se o gestor excluiu a
        // conta, a sessão deixa de valer na mesma hora.
        self.user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::UserNotFound)
    }
}

pub fn create_token(jwt_secret: &str, user_id: Uuid) -> Result<String, AppError> {
    let now = Utc::now();
    let expires_at = now + chrono::Duration::days(7);

    let claims = Claims {
        sub: user_id,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?)
}

pub fn decode_token(jwt_secret: &str, token: &str) -> Result<Claims, AppError> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &validation,
    )
    .map_err(|_| AppError::InvalidToken)?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const SECRET: &str = "segredo-de-teste";

    #[test]
    fn token_round_trip_preserves_subject() {
        let user_id = Uuid::new_v4();
        let token = create_token(SECRET, user_id).unwrap();
        let claims = decode_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_with_wrong_secret_is_rejected() {
        let token = create_token(SECRET, Uuid::new_v4()).unwrap();
        let result = decode_token("outro-segredo", &token);
        assert_matches!(result, Err(AppError::InvalidToken));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert_matches!(
            decode_token(SECRET, "não-é-um-token"),
            Err(AppError::InvalidToken)
        );
    }

    #[test]
    fn bcrypt_verify_matches_only_the_right_password() {
        // Custo mínimo para o teste não arrastar.
        let hashed = hash("senha123", 4).unwrap();
        assert!(verify("senha123", &hashed).unwrap());
        assert!(!verify("senha124", &hashed).unwrap());
    }
}
