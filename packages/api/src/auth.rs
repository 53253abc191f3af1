//! Account endpoints under `/users`.

use serde::{Deserialize, Serialize};
use store::User;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// `POST /users/login`
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    client
        .post("/users/login", &Credentials { email, password })
        .await
}

/// `POST /users/register`. The account stays unusable until the emailed
/// verification link is followed.
pub async fn register(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<MessageResponse, ApiError> {
    client
        .post("/users/register", &Credentials { email, password })
        .await
}

/// `POST /users/forgot-password`
pub async fn forgot_password(client: &ApiClient, email: &str) -> Result<MessageResponse, ApiError> {
    #[derive(Serialize)]
    struct Body<'a> {
        email: &'a str,
    }
    client.post("/users/forgot-password", &Body { email }).await
}
