use api_auth::dtos::auth::{AuthResponse, LoginRequest, RegisterRequest};
use api_rentals::dtos::{property::PropertyCreateBody, tenant::TenantCreateBody};
use common::http::IdMessage;
use db::models::{payment::PaymentWithNames, property::Property, tenant::Tenant, user::User};
use log::{info, warn};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    error::ClientError,
    store::{SessionStore, StoredSession},
};

/// Explicit session handle: one per signed-in UI, no global state.
pub struct SessionClient<S: SessionStore> {
    client: Client,
    api_url: String,
    store: S,
}

impl<S: SessionStore> SessionClient<S> {
    /// `base_url` is the server root, e.g. `http://localhost:3001`.
    pub fn new(base_url: &str, store: S) -> Self {
        SessionClient {
            client: Client::new(),
            api_url: format!("{}/api", base_url.trim_end_matches('/')),
            store,
        }
    }

    pub async fn sign_up(&self, req: RegisterRequest) -> Result<AuthResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/auth/signup", self.api_url))
            .json(&req)
            .send()
            .await?;
        self.remember(parse(response).await?)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/auth/signin", self.api_url))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        self.remember(parse(response).await?)
    }

    fn remember(&self, auth: AuthResponse) -> Result<AuthResponse, ClientError> {
        self.store.save(&StoredSession {
            token: auth.token.clone(),
            user: auth.user.clone(),
        })?;
        info!("Signed in as {}", auth.user.email);
        Ok(auth)
    }

    /// Forgets the local session. The token itself stays valid until it expires.
    pub fn sign_out(&self) -> Result<(), ClientError> {
        self.store.clear()
    }

    fn session(&self) -> Option<StoredSession> {
        match self.store.load() {
            Ok(session) => session,
            Err(e) => {
                warn!("Ignoring unreadable session: {}", e);
                None
            }
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.session().map(|s| s.user)
    }

    pub fn token(&self) -> Option<String> {
        self.session().map(|s| s.token)
    }

    /// True when a token and user are stored. Nothing is checked against the
    /// server, so an expired token still counts; use [`Self::verify_with_server`]
    /// when that matters.
    pub fn is_authenticated(&self) -> bool {
        self.session().is_some_and(|s| !s.token.is_empty())
    }

    /// Asks the server who the stored token belongs to. A rejected token
    /// surfaces as `ClientError::Api` with status 401, 403 or 404.
    pub async fn verify_with_server(&self) -> Result<User, ClientError> {
        self.get("/users/me").await
    }

    pub async fn list_properties(&self) -> Result<Vec<Property>, ClientError> {
        self.get("/properties").await
    }

    pub async fn create_property(&self, body: &PropertyCreateBody) -> Result<IdMessage, ClientError> {
        let request = self.client.post(format!("{}/properties", self.api_url)).json(body);
        parse(self.authorized(request)?.send().await?).await
    }

    pub async fn list_tenants(&self) -> Result<Vec<Tenant>, ClientError> {
        self.get("/tenants").await
    }

    pub async fn create_tenant(&self, body: &TenantCreateBody) -> Result<IdMessage, ClientError> {
        let request = self.client.post(format!("{}/tenants", self.api_url)).json(body);
        parse(self.authorized(request)?.send().await?).await
    }

    pub async fn list_payments(&self) -> Result<Vec<PaymentWithNames>, ClientError> {
        self.get("/payments").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = self.client.get(format!("{}{}", self.api_url, path));
        parse(self.authorized(request)?.send().await?).await
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let token = self.token().ok_or(ClientError::NotAuthenticated)?;
        Ok(request.bearer_auth(token))
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::json!({"error": "Unknown error"}));
        let message = body["error"]
            .as_str()
            .unwrap_or("Unknown error")
            .to_string();
        warn!("Request failed with {}: {}", status, message);
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json::<T>().await?)
}
