use std::sync::Arc;
use validator::Validate;

use crate::{
    auth::{JwtService, PasswordCodec, Verification},
    errors::{AppError, AppResult},
    models::dto::{request::LoginRequest, response::LoginResponse},
    repositories::UserRepository,
};

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, jwt: JwtService) -> Self {
        Self { users, jwt }
    }

    /// Verify credentials and issue a signed token. Unknown usernames and
    /// bad passwords produce the same Unauthorized answer.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let user = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        match PasswordCodec::verify(&request.password, &user.password_hash) {
            Verification::Valid => {}
            Verification::ValidLegacy => {
                // Write-on-read migration: replace the plaintext row with a
                // proper credential while we still hold the password.
                let upgraded = PasswordCodec::encode(&request.password)?;
                self.users.update_password(user.id, &upgraded).await?;
                log::info!("upgraded legacy credential for user {}", user.username);
            }
            Verification::Invalid => {
                return Err(AppError::Unauthorized(
                    "Invalid username or password".to_string(),
                ));
            }
        }

        let token = self.jwt.create_token(&user)?;
        log::info!("user {} logged in", user.username);

        Ok(LoginResponse::new(token, &user))
    }
}
