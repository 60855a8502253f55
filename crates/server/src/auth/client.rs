use reqwest::Method;
use serde::de::IgnoredAny;
use serde_json::Value;
use shared_types::{ServiceResult, SetRoleRequest, SignInRequest, SignUpRequest, UserList};

use super::cookies::Credentials;
use crate::services::{ApiClient, Upstream};

/// Email/password and admin calls to the auth service.
///
/// Sign-in, sign-up and sign-out return the upstream's `Set-Cookie` values
/// alongside the result; callers relay them to the browser.
#[derive(Debug, Clone)]
pub struct AuthClient {
    auth: ApiClient,
}

impl AuthClient {
    pub fn new(auth: ApiClient) -> Self {
        Self { auth }
    }

    pub fn api(&self) -> &ApiClient {
        &self.auth
    }

    #[tracing::instrument(skip_all, fields(email = %request.email))]
    pub async fn sign_in_email(&self, request: &SignInRequest) -> Upstream<Value> {
        self.auth
            .request("sign in", Method::POST, "/sign-in/email", Some(request), &Credentials::none())
            .await
    }

    #[tracing::instrument(skip_all, fields(email = %request.email))]
    pub async fn sign_up_email(&self, request: &SignUpRequest) -> Upstream<Value> {
        self.auth
            .request("sign up", Method::POST, "/sign-up/email", Some(request), &Credentials::none())
            .await
    }

    /// Ends the session identified by `credentials`. The payload is ignored.
    #[tracing::instrument(skip_all)]
    pub async fn sign_out(&self, credentials: &Credentials) -> Upstream<()> {
        let upstream = self
            .auth
            .request::<IgnoredAny, _>(
                "sign out",
                Method::POST,
                "/sign-out",
                Some(&serde_json::json!({})),
                credentials,
            )
            .await;
        Upstream {
            result: upstream.result.map(|_| ()),
            set_cookies: upstream.set_cookies,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn list_users(&self, credentials: &Credentials) -> ServiceResult<UserList> {
        self.auth
            .call::<UserList, ()>("list users", Method::GET, "/admin/list-users", None, credentials)
            .await
    }

    #[tracing::instrument(skip_all, fields(user_id = %request.user_id, role = request.role.as_str()))]
    pub async fn set_role(
        &self,
        credentials: &Credentials,
        request: &SetRoleRequest,
    ) -> ServiceResult<()> {
        self.auth
            .call::<IgnoredAny, _>(
                "update user role",
                Method::POST,
                "/admin/set-role",
                Some(request),
                credentials,
            )
            .await
            .map(|_| ())
    }
}
