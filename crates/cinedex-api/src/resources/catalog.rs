//! Small read-only catalogs: certifications, changes, configuration, genres,
//! watch providers.

use anyhow::Result;
use serde::Serialize;
use tracing::instrument;

use crate::client::{NO_QUERY, TmdbClient};
use crate::options::{ChangesOptions, LanguageOptions};
use crate::types::{
    ApiConfiguration, Certifications, ChangedId, Country, Department, GenreList, Language, Paged,
    Timezone, WatchProviderList, WatchRegions,
};

// --- Certifications ---

/// Age certification endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CertificationsApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> CertificationsApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Movie certifications by country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn movie(&self) -> Result<Certifications> {
        self.client.get("certification/movie/list", NO_QUERY).await
    }

    /// TV certifications by country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn tv(&self) -> Result<Certifications> {
        self.client.get("certification/tv/list", NO_QUERY).await
    }
}

// --- Changes ---

/// Change feeds: IDs changed within a date window (24 hours by default).
#[derive(Debug, Clone, Copy)]
pub struct ChangesApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> ChangesApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Changed movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn movies(&self, options: &ChangesOptions) -> Result<Paged<ChangedId>> {
        self.client.get("movie/changes", options).await
    }

    /// Changed TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn tv(&self, options: &ChangesOptions) -> Result<Paged<ChangedId>> {
        self.client.get("tv/changes", options).await
    }

    /// Changed people.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn people(&self, options: &ChangesOptions) -> Result<Paged<ChangedId>> {
        self.client.get("person/changes", options).await
    }
}

// --- Configuration ---

/// API configuration endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> ConfigurationApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Image base URLs, sizes and change keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn details(&self) -> Result<ApiConfiguration> {
        self.client.get("configuration", NO_QUERY).await
    }

    /// Countries (ISO 3166-1).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn countries(&self, options: &LanguageOptions) -> Result<Vec<Country>> {
        self.client.get("configuration/countries", options).await
    }

    /// Departments and their jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn jobs(&self) -> Result<Vec<Department>> {
        self.client.get("configuration/jobs", NO_QUERY).await
    }

    /// Languages (ISO 639-1).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn languages(&self) -> Result<Vec<Language>> {
        self.client.get("configuration/languages", NO_QUERY).await
    }

    /// Officially supported translations (`en-US`, ...).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn primary_translations(&self) -> Result<Vec<String>> {
        self.client
            .get("configuration/primary_translations", NO_QUERY)
            .await
    }

    /// Timezones by country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn timezones(&self) -> Result<Vec<Timezone>> {
        self.client.get("configuration/timezones", NO_QUERY).await
    }
}

// --- Genres ---

/// Genre list endpoints.
#[derive(Debug, Clone, Copy)]
pub struct GenresApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> GenresApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Movie genres.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn movie_list(&self, options: &LanguageOptions) -> Result<GenreList> {
        self.client.get("genre/movie/list", options).await
    }

    /// TV genres.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn tv_list(&self, options: &LanguageOptions) -> Result<GenreList> {
        self.client.get("genre/tv/list", options).await
    }
}

// --- Watch providers ---

/// Options for the watch provider catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WatchProviderOptions {
    /// Response language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Restrict to providers available in this country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_region: Option<String>,
}

/// Watch provider catalogs.
#[derive(Debug, Clone, Copy)]
pub struct WatchProvidersApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> WatchProvidersApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Countries with provider data.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn regions(&self, options: &LanguageOptions) -> Result<WatchRegions> {
        self.client.get("watch/providers/regions", options).await
    }

    /// Movie providers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn movie_providers(&self, options: &WatchProviderOptions) -> Result<WatchProviderList> {
        self.client.get("watch/providers/movie", options).await
    }

    /// TV providers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn tv_providers(&self, options: &WatchProviderOptions) -> Result<WatchProviderList> {
        self.client.get("watch/providers/tv", options).await
    }
}
