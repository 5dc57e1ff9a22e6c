//! `account/*` endpoints.

use anyhow::Result;
use serde::Serialize;
use tracing::instrument;

use crate::client::TmdbClient;
use crate::media::MediaType;
use crate::types::{
    AccountDetails, FavoriteRequest, ListSummary, MovieResult, Paged, RatedEpisode, RatedMovie,
    RatedTv, StatusResponse, TvResult, WatchlistRequest,
};

/// Sort order of account and guest session lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccountSort {
    /// Oldest first.
    #[serde(rename = "created_at.asc")]
    CreatedAtAsc,
    /// Newest first.
    #[serde(rename = "created_at.desc")]
    CreatedAtDesc,
}

/// Options for favorite, rated and watchlist listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccountListOptions {
    /// User session (unused by guest session endpoints).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Response language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Result page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<AccountSort>,
}

impl AccountListOptions {
    /// Options scoped to a user session.
    #[must_use]
    pub fn session(session_id: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id.into()),
            ..Self::default()
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn sort_by(mut self, sort: AccountSort) -> Self {
        self.sort_by = Some(sort);
        self
    }
}

#[derive(Serialize)]
struct SessionQuery<'s> {
    session_id: &'s str,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
}

/// Account endpoints. All of them require a user session.
#[derive(Debug, Clone, Copy)]
pub struct AccountApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> AccountApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Account of the session owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip_all)]
    pub async fn details(&self, session_id: &str) -> Result<AccountDetails> {
        let query = SessionQuery {
            session_id,
            page: None,
        };
        self.client.get("account", &query).await
    }

    /// Favorite movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn favorite_movies(
        &self,
        account_id: u64,
        options: &AccountListOptions,
    ) -> Result<Paged<MovieResult>> {
        let path = format!("account/{account_id}/favorite/movies");
        self.client.get(&path, options).await
    }

    /// Favorite TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn favorite_tv(
        &self,
        account_id: u64,
        options: &AccountListOptions,
    ) -> Result<Paged<TvResult>> {
        let path = format!("account/{account_id}/favorite/tv");
        self.client.get(&path, options).await
    }

    /// Adds or removes a favorite.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self, session_id))]
    pub async fn mark_as_favorite(
        &self,
        account_id: u64,
        session_id: &str,
        media_type: MediaType,
        media_id: u64,
        favorite: bool,
    ) -> Result<StatusResponse> {
        let path = format!("account/{account_id}/favorite");
        let query = SessionQuery {
            session_id,
            page: None,
        };
        let body = FavoriteRequest {
            media_type,
            media_id,
            favorite,
        };
        self.client.post(&path, &query, &body).await
    }

    /// Lists created by the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, session_id))]
    pub async fn lists(
        &self,
        account_id: u64,
        session_id: &str,
        page: Option<u32>,
    ) -> Result<Paged<ListSummary>> {
        let path = format!("account/{account_id}/lists");
        let query = SessionQuery { session_id, page };
        self.client.get(&path, &query).await
    }

    /// Movies rated by the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn rated_movies(
        &self,
        account_id: u64,
        options: &AccountListOptions,
    ) -> Result<Paged<RatedMovie>> {
        let path = format!("account/{account_id}/rated/movies");
        self.client.get(&path, options).await
    }

    /// TV series rated by the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn rated_tv(
        &self,
        account_id: u64,
        options: &AccountListOptions,
    ) -> Result<Paged<RatedTv>> {
        let path = format!("account/{account_id}/rated/tv");
        self.client.get(&path, options).await
    }

    /// TV episodes rated by the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn rated_tv_episodes(
        &self,
        account_id: u64,
        options: &AccountListOptions,
    ) -> Result<Paged<RatedEpisode>> {
        let path = format!("account/{account_id}/rated/tv/episodes");
        self.client.get(&path, options).await
    }

    /// Movies on the watchlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn watchlist_movies(
        &self,
        account_id: u64,
        options: &AccountListOptions,
    ) -> Result<Paged<MovieResult>> {
        let path = format!("account/{account_id}/watchlist/movies");
        self.client.get(&path, options).await
    }

    /// TV series on the watchlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn watchlist_tv(
        &self,
        account_id: u64,
        options: &AccountListOptions,
    ) -> Result<Paged<TvResult>> {
        let path = format!("account/{account_id}/watchlist/tv");
        self.client.get(&path, options).await
    }

    /// Adds to or removes from the watchlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self, session_id))]
    pub async fn add_to_watchlist(
        &self,
        account_id: u64,
        session_id: &str,
        media_type: MediaType,
        media_id: u64,
        watchlist: bool,
    ) -> Result<StatusResponse> {
        let path = format!("account/{account_id}/watchlist");
        let query = SessionQuery {
            session_id,
            page: None,
        };
        let body = WatchlistRequest {
            media_type,
            media_id,
            watchlist,
        };
        self.client.post(&path, &query, &body).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn test_account_list_options_wire_names() {
        // Arrange
        let options = AccountListOptions::session("sess")
            .page(2)
            .sort_by(AccountSort::CreatedAtDesc);

        // Act
        let value = serde_json::to_value(&options).unwrap();

        // Assert
        assert_eq!(
            value,
            json!({"session_id": "sess", "page": 2, "sort_by": "created_at.desc"})
        );
    }
}
