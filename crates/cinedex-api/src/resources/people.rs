//! `person/*` endpoints.

use anyhow::Result;
use tracing::instrument;

use crate::client::{NO_QUERY, TmdbClient};
use crate::options::{ChangesOptions, DetailsOptions, LanguageOptions, PageOptions};
use crate::types::{
    ChangeSet, ExternalIds, Images, Paged, PersonCombinedCredits, PersonDetails,
    PersonMovieCredits, PersonResult, PersonTvCredits, Translations,
};

/// People endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PeopleApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> PeopleApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Primary person details, plus any sub-resources named in
    /// `append_to_response`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn details(&self, person_id: u64, options: &DetailsOptions) -> Result<PersonDetails> {
        let path = format!("person/{person_id}");
        self.client.get(&path, options).await
    }

    /// Change history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn changes(&self, person_id: u64, options: &ChangesOptions) -> Result<ChangeSet> {
        let path = format!("person/{person_id}/changes");
        self.client.get(&path, options).await
    }

    /// Movie and TV credits in one list, each entry tagged with `media_type`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn combined_credits(
        &self,
        person_id: u64,
        options: &LanguageOptions,
    ) -> Result<PersonCombinedCredits> {
        let path = format!("person/{person_id}/combined_credits");
        self.client.get(&path, options).await
    }

    /// IDs on other sites.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn external_ids(&self, person_id: u64) -> Result<ExternalIds> {
        let path = format!("person/{person_id}/external_ids");
        self.client.get(&path, NO_QUERY).await
    }

    /// Profile images.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn images(&self, person_id: u64) -> Result<Images> {
        let path = format!("person/{person_id}/images");
        self.client.get(&path, NO_QUERY).await
    }

    /// Movie credits.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn movie_credits(
        &self,
        person_id: u64,
        options: &LanguageOptions,
    ) -> Result<PersonMovieCredits> {
        let path = format!("person/{person_id}/movie_credits");
        self.client.get(&path, options).await
    }

    /// TV credits.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn tv_credits(
        &self,
        person_id: u64,
        options: &LanguageOptions,
    ) -> Result<PersonTvCredits> {
        let path = format!("person/{person_id}/tv_credits");
        self.client.get(&path, options).await
    }

    /// Biography translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn translations(&self, person_id: u64) -> Result<Translations> {
        let path = format!("person/{person_id}/translations");
        self.client.get(&path, NO_QUERY).await
    }

    /// Most recently created person.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn latest(&self) -> Result<PersonDetails> {
        self.client.get("person/latest", NO_QUERY).await
    }

    /// Popular people.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn popular(&self, options: &PageOptions) -> Result<Paged<PersonResult>> {
        self.client.get("person/popular", options).await
    }
}
