//! Account, authentication and user list types.

use serde::{Deserialize, Serialize};

use super::common::string_or_number;
use crate::media::{MediaObject, MediaType};

// --- Account ---

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gravatar {
    pub hash: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbAvatar {
    pub avatar_path: Option<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Avatar {
    pub gravatar: Gravatar,
    pub tmdb: TmdbAvatar,
}

/// Response from `account`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountDetails {
    /// Account ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Login name.
    pub username: String,
    /// Preferred language.
    pub iso_639_1: String,
    /// Preferred region.
    pub iso_3166_1: String,
    /// Whether adult results are enabled.
    pub include_adult: bool,
    /// Avatar.
    pub avatar: Avatar,
}

/// Body of `account/{account_id}/favorite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FavoriteRequest {
    /// `movie` or `tv`.
    pub media_type: MediaType,
    /// Entity ID.
    pub media_id: u64,
    /// Add (`true`) or remove (`false`).
    pub favorite: bool,
}

/// Body of `account/{account_id}/watchlist`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WatchlistRequest {
    /// `movie` or `tv`.
    pub media_type: MediaType,
    /// Entity ID.
    pub media_id: u64,
    /// Add (`true`) or remove (`false`).
    pub watchlist: bool,
}

// --- Authentication ---

/// Response from `authentication/token/new` and `validate_with_login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestToken {
    /// Whether the call succeeded.
    pub success: bool,
    /// Expiry timestamp (UTC).
    pub expires_at: String,
    /// Token to approve and exchange for a session.
    pub request_token: String,
}

/// Response from `authentication/guest_session/new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestSession {
    /// Whether the call succeeded.
    pub success: bool,
    /// Guest session ID.
    pub guest_session_id: String,
    /// Expiry timestamp (UTC).
    pub expires_at: String,
}

/// Response from `authentication/session/new` and `session/convert/4`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Whether the call succeeded.
    pub success: bool,
    /// Session ID.
    pub session_id: String,
}

/// Response from `DELETE authentication/session`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionDeleted {
    /// Whether the call succeeded.
    pub success: bool,
}

/// Body of `authentication/token/validate_with_login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// TMDB username.
    pub username: String,
    /// TMDB password.
    pub password: String,
    /// Unapproved request token.
    pub request_token: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish_non_exhaustive()
    }
}

// --- Lists ---

/// List entry in account and movie listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSummary {
    /// List ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Times favorited.
    pub favorite_count: u32,
    /// Number of items.
    pub item_count: u32,
    /// Language.
    pub iso_639_1: String,
    /// `movie` or `tv`.
    pub list_type: String,
    /// Poster image path.
    pub poster_path: Option<String>,
}

/// Response from `list/{list_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListDetails {
    /// List ID, numeric or hexadecimal depending on the list age.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Creator's username.
    pub created_by: String,
    /// Times favorited.
    pub favorite_count: u32,
    /// Number of items.
    pub item_count: u32,
    /// Language.
    pub iso_639_1: String,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Items, each tagged with `media_type`.
    pub items: Vec<MediaObject>,
    /// Current page.
    pub page: u32,
    /// Total pages.
    pub total_pages: u32,
    /// Total items.
    pub total_results: u32,
}

/// Response from `list/{list_id}/item_status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStatus {
    /// List ID.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Whether the movie is on the list.
    pub item_present: bool,
}

/// Response from `POST list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListCreated {
    /// Whether the call succeeded.
    pub success: bool,
    /// TMDB status code.
    pub status_code: i32,
    /// Human-readable status.
    pub status_message: String,
    /// ID of the new list.
    pub list_id: u64,
}

/// Body of `POST list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateListRequest {
    /// List name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Language (ISO 639-1).
    pub language: String,
}

/// Body of `list/{list_id}/add_item` and `remove_item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListItemRequest {
    /// Movie ID.
    pub media_id: u64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use serde_json::json;

    use super::*;

    #[test]
    fn test_favorite_request_body() {
        // Arrange
        let body = FavoriteRequest {
            media_type: MediaType::Tv,
            media_id: 1399,
            favorite: false,
        };

        // Act
        let value = serde_json::to_value(body).unwrap();

        // Assert
        assert_eq!(
            value,
            json!({"media_type": "tv", "media_id": 1399, "favorite": false})
        );
    }

    #[test]
    fn test_login_request_debug_hides_password() {
        // Arrange
        let login = LoginRequest {
            username: String::from("alice"),
            password: String::from("hunter2"),
            request_token: String::from("tok"),
        };

        // Act
        let rendered = format!("{login:?}");

        // Assert
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_list_details_items_are_polymorphic() {
        // Arrange
        let value = json!({
            "id": "509ec17b19c2950a0600050d",
            "name": "Best of 1999",
            "created_by": "travisbell",
            "item_count": 2,
            "items": [
                {"media_type": "movie", "id": 550, "title": "Fight Club"},
                {"media_type": "tv", "id": 1399, "name": "Game of Thrones"}
            ]
        });

        // Act
        let list: ListDetails = serde_json::from_value(value).unwrap();

        // Assert
        assert_eq!(list.id, "509ec17b19c2950a0600050d");
        let decoded: Vec<_> = list.items.iter().map(|i| i.decode().unwrap()).collect();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[1].media_type(), MediaType::Tv);
    }
}
