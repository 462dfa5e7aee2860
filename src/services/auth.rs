//! Authentication and user administration service
//!
//! User management shares the auth endpoints on the backend (`/auth/register`
//! doubles as the admin "create user", `/auth/{id}` as the profile update),
//! so both concerns live in one service.

use crate::{
    error::ApiResult,
    http::ApiClient,
    models::{Credentials, RegisterUser, TokenResponse, UpdateUser, User},
};

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Authenticate and store the bearer token in the shared session
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<TokenResponse> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token: TokenResponse = self.api.post_json("/auth/login", &credentials).await?;
        self.api.session().store(token.access_token.clone());
        tracing::info!(email, "logged in");
        Ok(token)
    }

    /// Register an account; the server ignores the requested role unless the
    /// caller is an admin
    pub async fn register(&self, draft: &RegisterUser) -> ApiResult<User> {
        self.api.post_json("/auth/register", draft).await
    }

    /// Currently authenticated account
    pub async fn me(&self) -> ApiResult<User> {
        self.api.get_json("/auth/me").await
    }

    /// Partial update of an account; only provided fields change
    pub async fn update_user(&self, id: i64, update: &UpdateUser) -> ApiResult<User> {
        self.api.put_json(&format!("/auth/{}", id), update).await
    }

    /// Admin: list all accounts
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.api.get_json("/user_admin/").await
    }

    /// Admin: delete an account
    pub async fn delete_user(&self, id: i64) -> ApiResult<()> {
        self.api.delete(&format!("/user_admin/{}/", id)).await
    }

    /// Drop the session token
    pub fn logout(&self) {
        self.api.session().clear();
    }
}
