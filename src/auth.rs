//! Login and logout against the backend auth endpoints

use log::warn;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;
use crate::session::{SessionContext, UserProfile};

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: UserProfile,
}

/// Client for the authentication endpoints
pub struct AuthClient {
    url: String,
    client: Client,
    session: SessionContext,
    options: ClientOptions,
}

impl AuthClient {
    pub(crate) fn new(
        url: &str,
        client: Client,
        session: SessionContext,
        options: ClientOptions,
    ) -> Self {
        Self {
            url: url.to_string(),
            client,
            session,
            options,
        }
    }

    /// Sign in with email and password and persist the returned session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, Error> {
        let url = format!("{}/auth/login", self.url);
        let response: LoginResponse = Fetch::post(&self.client, &url)
            .timeout(self.options.request_timeout)
            .json(&Credentials { email, password })?
            .execute()
            .await?;

        self.session
            .store()
            .set_session(&response.token, &response.user)?;
        Ok(response.user)
    }

    /// Sign out. The server call is best-effort; the local session is
    /// cleared regardless of its outcome.
    pub async fn sign_out(&self) {
        let url = format!("{}/auth/logout", self.url);
        let token = self.session.store().token();

        if token.is_some() {
            let result = Fetch::post(&self.client, &url)
                .timeout(self.options.request_timeout)
                .bearer(token.as_deref())
                .execute_empty()
                .await;
            if let Err(err) = result {
                warn!("logout request failed: {}", err);
            }
        }

        self.session.store().clear();
    }
}
