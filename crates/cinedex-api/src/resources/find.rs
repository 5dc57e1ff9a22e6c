//! `find/{external_id}`: lookup by an ID from another database.

use anyhow::Result;
use serde::Serialize;
use tracing::instrument;

use crate::client::TmdbClient;
use crate::types::FindResults;

/// Database the external ID belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalSource {
    /// IMDb (`tt0137523`, `nm0000093`).
    ImdbId,
    /// Facebook.
    FacebookId,
    /// Instagram.
    InstagramId,
    /// TheTVDB.
    TvdbId,
    /// TikTok.
    TiktokId,
    /// Twitter / X.
    TwitterId,
    /// Wikidata.
    WikidataId,
    /// YouTube.
    YoutubeId,
}

/// Options for `find/{external_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindOptions {
    /// Source database (required).
    pub external_source: ExternalSource,
    /// Response language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl FindOptions {
    /// Options for the given source.
    #[must_use]
    pub const fn new(external_source: ExternalSource) -> Self {
        Self {
            external_source,
            language: None,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// External ID lookup.
#[derive(Debug, Clone, Copy)]
pub struct FindApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> FindApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Finds movies, series, seasons, episodes and people by external ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options), fields(source = ?options.external_source))]
    pub async fn by_external_id(
        &self,
        external_id: &str,
        options: &FindOptions,
    ) -> Result<FindResults> {
        let path = format!("find/{external_id}");
        self.client.get(&path, options).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn test_find_options_always_send_source() {
        // Arrange
        let options = FindOptions::new(ExternalSource::TvdbId);

        // Act
        let value = serde_json::to_value(&options).unwrap();

        // Assert
        assert_eq!(value, json!({"external_source": "tvdb_id"}));
    }
}
