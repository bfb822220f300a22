//! Auth Requests

use serde::Serialize;

use super::ApiClient;
use crate::models::LoginResponse;

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, String> {
        self.post_json("/auth/login", &LoginArgs { email, password })
            .await
    }
}
