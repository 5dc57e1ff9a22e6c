//! Lookups of single entities: collections, companies, networks, credits,
//! keywords and reviews.

use anyhow::Result;
use serde::Serialize;
use tracing::instrument;

use crate::client::{NO_QUERY, TmdbClient};
use crate::options::{ImageOptions, LanguageOptions};
use crate::types::{
    AlternativeNames, CollectionDetails, CompanyDetails, CreditDetails, Images, Keyword,
    MovieResult, NetworkDetails, Paged, ReviewDetails, Translations,
};

// --- Collections ---

/// Collection endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CollectionsApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> CollectionsApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Collection details with its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn details(
        &self,
        collection_id: u64,
        options: &LanguageOptions,
    ) -> Result<CollectionDetails> {
        let path = format!("collection/{collection_id}");
        self.client.get(&path, options).await
    }

    /// Collection images.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn images(&self, collection_id: u64, options: &ImageOptions) -> Result<Images> {
        let path = format!("collection/{collection_id}/images");
        self.client.get(&path, options).await
    }

    /// Collection translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn translations(&self, collection_id: u64) -> Result<Translations> {
        let path = format!("collection/{collection_id}/translations");
        self.client.get(&path, NO_QUERY).await
    }
}

// --- Companies ---

/// Production company endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CompaniesApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> CompaniesApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Company details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn details(&self, company_id: u64) -> Result<CompanyDetails> {
        let path = format!("company/{company_id}");
        self.client.get(&path, NO_QUERY).await
    }

    /// Other names of the company.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn alternative_names(&self, company_id: u64) -> Result<AlternativeNames> {
        let path = format!("company/{company_id}/alternative_names");
        self.client.get(&path, NO_QUERY).await
    }

    /// Company logos.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn images(&self, company_id: u64, options: &ImageOptions) -> Result<Images> {
        let path = format!("company/{company_id}/images");
        self.client.get(&path, options).await
    }
}

// --- Networks ---

/// TV network endpoints.
#[derive(Debug, Clone, Copy)]
pub struct NetworksApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> NetworksApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Network details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn details(&self, network_id: u64) -> Result<NetworkDetails> {
        let path = format!("network/{network_id}");
        self.client.get(&path, NO_QUERY).await
    }

    /// Other names of the network.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn alternative_names(&self, network_id: u64) -> Result<AlternativeNames> {
        let path = format!("network/{network_id}/alternative_names");
        self.client.get(&path, NO_QUERY).await
    }

    /// Network logos.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn images(&self, network_id: u64) -> Result<Images> {
        let path = format!("network/{network_id}/images");
        self.client.get(&path, NO_QUERY).await
    }
}

// --- Credits ---

/// Credit lookup.
#[derive(Debug, Clone, Copy)]
pub struct CreditsApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> CreditsApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// A single credit with its person and media.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn details(&self, credit_id: &str) -> Result<CreditDetails> {
        let path = format!("credit/{credit_id}");
        self.client.get(&path, NO_QUERY).await
    }
}

// --- Keywords ---

/// Options for `keyword/{keyword_id}/movies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordMoviesOptions {
    /// Response language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Result page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Include adult titles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
}

/// Keyword endpoints.
#[derive(Debug, Clone, Copy)]
pub struct KeywordsApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> KeywordsApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Keyword details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn details(&self, keyword_id: u64) -> Result<Keyword> {
        let path = format!("keyword/{keyword_id}");
        self.client.get(&path, NO_QUERY).await
    }

    /// Movies tagged with the keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn movies(
        &self,
        keyword_id: u64,
        options: &KeywordMoviesOptions,
    ) -> Result<Paged<MovieResult>> {
        let path = format!("keyword/{keyword_id}/movies");
        self.client.get(&path, options).await
    }
}

// --- Reviews ---

/// Review lookup.
#[derive(Debug, Clone, Copy)]
pub struct ReviewsApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> ReviewsApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// A single review.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn details(&self, review_id: &str) -> Result<ReviewDetails> {
        let path = format!("review/{review_id}");
        self.client.get(&path, NO_QUERY).await
    }
}
