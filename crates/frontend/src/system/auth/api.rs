use contracts::domain::common::EntityId;
use contracts::system::auth::{LoginRequest, SignupRequest, UserInfo, UserUpdate};

use crate::shared::api_utils::{get_json, post_json, post_unit, put_json, ApiError};

/// Inicia sesión; el backend deja la cookie de sesión.
pub async fn login(email: String, password: String) -> Result<UserInfo, ApiError> {
    let request = LoginRequest { email, password };
    post_json("/users/login", &request).await
}

/// Registra un usuario nuevo y deja la sesión iniciada.
pub async fn signup(request: &SignupRequest) -> Result<UserInfo, ApiError> {
    post_json("/users/signup", request).await
}

pub async fn logout() -> Result<(), ApiError> {
    post_unit::<()>("/users/logout", None).await
}

/// Usuario de la sesión actual.
pub async fn current_user() -> Result<UserInfo, ApiError> {
    get_json("/users/me").await
}

pub async fn update_user(id: EntityId, update: &UserUpdate) -> Result<(), ApiError> {
    put_json(&format!("/users/{}", id), update).await
}
