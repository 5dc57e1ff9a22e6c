//! Query option bags shared by several resources.
//!
//! Every field is optional; unset fields are left out of the query string, so
//! `Some(0)` or `Some(false)` are sent while `None` is not.

use chrono::NaiveDate;
use serde::Serialize;

/// `language` only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageOptions {
    /// ISO 639-1 language, optionally with region (`en-US`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl LanguageOptions {
    /// Options with only the language set.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
        }
    }
}

/// `language` and `page`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageOptions {
    /// Response language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Result page (1-500).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl PageOptions {
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
}

/// `language`, `page` and `region`, used by movie listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegionPageOptions {
    /// Response language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Result page (1-500).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// ISO 3166-1 region used to filter release dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl RegionPageOptions {
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

    /// Sets the region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// Options for primary detail endpoints (`movie/{id}`, `tv/{id}`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailsOptions {
    /// Response language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Comma-separated sub-resources to inline (`credits,images`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_to_response: Option<String>,
    /// Languages accepted for appended images (`en,null`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_image_language: Option<String>,
}

impl DetailsOptions {
    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Adds sub-resources to `append_to_response`.
    ///
    /// ```
    /// use cinedex_api::DetailsOptions;
    ///
    /// let options = DetailsOptions::default().append(&["credits"]).append(&["images"]);
    /// assert_eq!(options.append_to_response.as_deref(), Some("credits,images"));
    /// ```
    #[must_use]
    pub fn append(mut self, names: &[&str]) -> Self {
        let mut parts: Vec<String> = self
            .append_to_response
            .take()
            .map(|s| s.split(',').map(String::from).collect())
            .unwrap_or_default();
        parts.extend(names.iter().map(|n| (*n).to_owned()));
        parts.retain(|p| !p.is_empty());
        if !parts.is_empty() {
            self.append_to_response = Some(parts.join(","));
        }
        self
    }

    /// Sets the accepted languages for appended images.
    #[must_use]
    pub fn include_image_language(mut self, languages: impl Into<String>) -> Self {
        self.include_image_language = Some(languages.into());
        self
    }
}

/// Options for `.../images` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageOptions {
    /// Preferred language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Comma-separated languages to include (`en,null`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_image_language: Option<String>,
}

impl ImageOptions {
    /// Sets the preferred language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the included languages.
    #[must_use]
    pub fn include_image_language(mut self, languages: impl Into<String>) -> Self {
        self.include_image_language = Some(languages.into());
        self
    }
}

/// Options for `.../videos` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoOptions {
    /// Preferred language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Comma-separated languages to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_video_language: Option<String>,
}

/// Options for change feeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangesOptions {
    /// Window start (at most 14 days before `end_date`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Window end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Result page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ChangesOptions {
    /// Restricts to a date window.
    #[must_use]
    pub const fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// User scope for rating and account-state endpoints.
///
/// Exactly one of the two ids is normally set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionOptions {
    /// Authenticated user session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Guest session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_session_id: Option<String>,
}

impl SessionOptions {
    /// Scope to a user session.
    #[must_use]
    pub fn session(session_id: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id.into()),
            guest_session_id: None,
        }
    }

    /// Scope to a guest session.
    #[must_use]
    pub fn guest(guest_session_id: impl Into<String>) -> Self {
        Self {
            session_id: None,
            guest_session_id: Some(guest_session_id.into()),
        }
    }
}
