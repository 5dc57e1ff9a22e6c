//! User lists (`list/*`) and guest session listings.

use anyhow::Result;
use serde::Serialize;
use tracing::instrument;

use super::account::AccountListOptions;
use crate::client::TmdbClient;
use crate::options::PageOptions;
use crate::types::{
    CreateListRequest, ItemStatus, ListCreated, ListDetails, ListItemRequest, Paged,
    RatedEpisode, RatedMovie, RatedTv, StatusResponse,
};

#[derive(Serialize)]
struct SessionQuery<'s> {
    session_id: &'s str,
}

#[derive(Serialize)]
struct ClearQuery<'s> {
    session_id: &'s str,
    confirm: bool,
}

#[derive(Serialize)]
struct ItemStatusQuery {
    movie_id: u64,
}

/// List endpoints. Mutations require the session of the list owner.
#[derive(Debug, Clone, Copy)]
pub struct ListsApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> ListsApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// List details with one page of items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn details(&self, list_id: &str, options: &PageOptions) -> Result<ListDetails> {
        let path = format!("list/{list_id}");
        self.client.get(&path, options).await
    }

    /// Whether a movie is on the list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn item_status(&self, list_id: &str, movie_id: u64) -> Result<ItemStatus> {
        let path = format!("list/{list_id}/item_status");
        self.client.get(&path, &ItemStatusQuery { movie_id }).await
    }

    /// Creates a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip_all, fields(name = %request.name))]
    pub async fn create(&self, session_id: &str, request: &CreateListRequest) -> Result<ListCreated> {
        self.client
            .post("list", &SessionQuery { session_id }, request)
            .await
    }

    /// Adds a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self, session_id))]
    pub async fn add_movie(
        &self,
        list_id: &str,
        session_id: &str,
        media_id: u64,
    ) -> Result<StatusResponse> {
        let path = format!("list/{list_id}/add_item");
        self.client
            .post(&path, &SessionQuery { session_id }, &ListItemRequest { media_id })
            .await
    }

    /// Removes a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self, session_id))]
    pub async fn remove_movie(
        &self,
        list_id: &str,
        session_id: &str,
        media_id: u64,
    ) -> Result<StatusResponse> {
        let path = format!("list/{list_id}/remove_item");
        self.client
            .post(&path, &SessionQuery { session_id }, &ListItemRequest { media_id })
            .await
    }

    /// Removes every item. `confirm` must be `true` for the API to act.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self, session_id))]
    pub async fn clear(&self, list_id: &str, session_id: &str, confirm: bool) -> Result<StatusResponse> {
        let path = format!("list/{list_id}/clear");
        let query = ClearQuery {
            session_id,
            confirm,
        };
        self.client.post(&path, &query, &serde_json::json!({})).await
    }

    /// Deletes the list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self, session_id))]
    pub async fn delete(&self, list_id: &str, session_id: &str) -> Result<StatusResponse> {
        let path = format!("list/{list_id}");
        self.client
            .delete(&path, &SessionQuery { session_id }, None::<&()>)
            .await
    }
}

/// Listings scoped to a guest session.
#[derive(Debug, Clone, Copy)]
pub struct GuestSessionsApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> GuestSessionsApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Movies rated in the guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn rated_movies(
        &self,
        guest_session_id: &str,
        options: &AccountListOptions,
    ) -> Result<Paged<RatedMovie>> {
        let path = format!("guest_session/{guest_session_id}/rated/movies");
        self.client.get(&path, options).await
    }

    /// TV series rated in the guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn rated_tv(
        &self,
        guest_session_id: &str,
        options: &AccountListOptions,
    ) -> Result<Paged<RatedTv>> {
        let path = format!("guest_session/{guest_session_id}/rated/tv");
        self.client.get(&path, options).await
    }

    /// TV episodes rated in the guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn rated_tv_episodes(
        &self,
        guest_session_id: &str,
        options: &AccountListOptions,
    ) -> Result<Paged<RatedEpisode>> {
        let path = format!("guest_session/{guest_session_id}/rated/tv/episodes");
        self.client.get(&path, options).await
    }
}
