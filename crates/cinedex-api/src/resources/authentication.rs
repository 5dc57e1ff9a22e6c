//! `authentication/*` endpoints.
//!
//! Only the token exchanges are wrapped; the browser approval step of the
//! request token flow happens outside this crate.

use anyhow::Result;
use serde::Serialize;
use tracing::instrument;

use crate::client::{NO_QUERY, TmdbClient};
use crate::types::{
    GuestSession, LoginRequest, RequestToken, Session, SessionDeleted, StatusResponse,
};

#[derive(Serialize)]
struct RequestTokenBody<'a> {
    request_token: &'a str,
}

#[derive(Serialize)]
struct AccessTokenBody<'a> {
    access_token: &'a str,
}

#[derive(Serialize)]
struct SessionIdBody<'a> {
    session_id: &'a str,
}

/// Authentication endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticationApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> AuthenticationApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Checks that the configured credentials are accepted.
    ///
    /// # Errors
    ///
    /// Returns an API error (status 401) when they are not.
    #[instrument(skip_all)]
    pub async fn validate_key(&self) -> Result<StatusResponse> {
        self.client.get("authentication", NO_QUERY).await
    }

    /// Creates a guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn create_guest_session(&self) -> Result<GuestSession> {
        self.client
            .get("authentication/guest_session/new", NO_QUERY)
            .await
    }

    /// Creates an unapproved request token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn create_request_token(&self) -> Result<RequestToken> {
        self.client.get("authentication/token/new", NO_QUERY).await
    }

    /// Exchanges an approved request token for a session.
    ///
    /// # Errors
    ///
    /// Returns an API error if the token is not approved or expired.
    #[instrument(skip_all)]
    pub async fn create_session(&self, request_token: &str) -> Result<Session> {
        let body = RequestTokenBody { request_token };
        self.client
            .post("authentication/session/new", NO_QUERY, &body)
            .await
    }

    /// Approves a request token with account credentials.
    ///
    /// # Errors
    ///
    /// Returns an API error if the credentials are rejected.
    #[instrument(skip_all)]
    pub async fn validate_with_login(&self, login: &LoginRequest) -> Result<RequestToken> {
        self.client
            .post("authentication/token/validate_with_login", NO_QUERY, login)
            .await
    }

    /// Converts a v4 access token into a v3 session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn create_session_from_v4(&self, access_token: &str) -> Result<Session> {
        let body = AccessTokenBody { access_token };
        self.client
            .post("authentication/session/convert/4", NO_QUERY, &body)
            .await
    }

    /// Invalidates a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn delete_session(&self, session_id: &str) -> Result<SessionDeleted> {
        let body = SessionIdBody { session_id };
        self.client
            .delete("authentication/session", NO_QUERY, Some(&body))
            .await
    }
}
