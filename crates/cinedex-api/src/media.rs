//! Polymorphic "movie or TV show or person" payloads.
//!
//! Endpoints such as multi search, trending `all` and combined credits return
//! objects whose shape depends on a `media_type` discriminator. They decode as
//! [`MediaObject`] and are converted into a concrete type on demand; every
//! conversion checks the discriminator before touching the fields.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TmdbError;
use crate::types::{MovieResult, PersonResult, TvResult};

/// Discriminator key carried by polymorphic objects.
const MEDIA_TYPE_KEY: &str = "media_type";

/// Known `media_type` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(clippy::module_name_repetitions)]
pub enum MediaType {
    /// `movie`
    Movie,
    /// `tv`
    Tv,
    /// `person`
    Person,
    /// `collection`
    Collection,
    /// `tv_season`
    TvSeason,
    /// `tv_episode`
    TvEpisode,
}

impl MediaType {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Person => "person",
            Self::Collection => "collection",
            Self::TvSeason => "tv_season",
            Self::TvEpisode => "tv_episode",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loosely-typed JSON object tagged with `media_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[allow(clippy::module_name_repetitions)]
pub struct MediaObject(Map<String, Value>);

impl MediaObject {
    /// Wraps an already parsed JSON object.
    #[must_use]
    pub const fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Raw discriminator value, if present and a string.
    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        self.0.get(MEDIA_TYPE_KEY).and_then(Value::as_str)
    }

    /// `id` field, if present and numeric.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.0.get("id").and_then(Value::as_u64)
    }

    /// Whether the discriminator equals `target`.
    #[must_use]
    pub fn is(&self, target: MediaType) -> bool {
        self.media_type() == Some(target.as_str())
    }

    /// Underlying JSON fields.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the wrapper, returning the JSON fields.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Converts into `T` after checking that the discriminator is `target`.
    ///
    /// Fields of `T` missing from the object take their defaults; extra fields
    /// are dropped.
    ///
    /// # Errors
    ///
    /// - [`TmdbError::MissingMediaType`] when there is no discriminator.
    /// - [`TmdbError::InvalidConversion`] when it names another type.
    /// - [`TmdbError::Decode`] when a field has the wrong JSON type.
    pub fn convert<T: DeserializeOwned>(&self, target: MediaType) -> Result<T, TmdbError> {
        match self.media_type() {
            None => Err(TmdbError::MissingMediaType { to: target }),
            Some(found) if found != target.as_str() => Err(TmdbError::InvalidConversion {
                from: found.to_owned(),
                to: target,
            }),
            Some(_) => serde_json::from_value(Value::Object(self.0.clone()))
                .map_err(|source| TmdbError::Decode { to: target, source }),
        }
    }

    /// Converts a `movie` object.
    ///
    /// # Errors
    ///
    /// See [`MediaObject::convert`].
    pub fn to_movie(&self) -> Result<MovieResult, TmdbError> {
        self.convert(MediaType::Movie)
    }

    /// Converts a `tv` object.
    ///
    /// # Errors
    ///
    /// See [`MediaObject::convert`].
    pub fn to_tv(&self) -> Result<TvResult, TmdbError> {
        self.convert(MediaType::Tv)
    }

    /// Converts a `person` object.
    ///
    /// # Errors
    ///
    /// See [`MediaObject::convert`].
    pub fn to_person(&self) -> Result<PersonResult, TmdbError> {
        self.convert(MediaType::Person)
    }

    /// Decodes into the [`Media`] variant named by the discriminator.
    ///
    /// # Errors
    ///
    /// - [`TmdbError::UnsupportedMediaType`] when the discriminator is missing
    ///   or is not one of `movie`, `tv`, `person`.
    /// - [`TmdbError::Decode`] when the fields do not fit the variant.
    pub fn decode(&self) -> Result<Media, TmdbError> {
        match self.media_type() {
            Some("movie") => self.to_movie().map(Media::Movie),
            Some("tv") => self.to_tv().map(Media::Tv),
            Some("person") => self.to_person().map(Media::Person),
            other => Err(TmdbError::UnsupportedMediaType {
                found: other.map(str::to_owned),
            }),
        }
    }
}

impl From<Map<String, Value>> for MediaObject {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<&MediaObject> for Media {
    type Error = TmdbError;

    fn try_from(obj: &MediaObject) -> Result<Self, Self::Error> {
        obj.decode()
    }
}

/// Closed set of result shapes found in mixed listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "media_type", rename_all = "snake_case")]
pub enum Media {
    /// A movie result.
    Movie(MovieResult),
    /// A TV series result.
    Tv(TvResult),
    /// A person result.
    Person(PersonResult),
}

impl Media {
    /// Discriminator of the variant.
    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        match self {
            Self::Movie(_) => MediaType::Movie,
            Self::Tv(_) => MediaType::Tv,
            Self::Person(_) => MediaType::Person,
        }
    }

    /// TMDB id of the wrapped entity.
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Movie(m) => m.id,
            Self::Tv(t) => t.id,
            Self::Person(p) => p.id,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use serde_json::json;

    use super::*;

    fn object(value: Value) -> MediaObject {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_media_type_wire_names() {
        // Arrange & Act
        let parsed: Vec<MediaType> =
            serde_json::from_str(r#"["movie","tv","person","collection","tv_season","tv_episode"]"#)
                .unwrap();

        // Assert
        assert_eq!(
            parsed,
            vec![
                MediaType::Movie,
                MediaType::Tv,
                MediaType::Person,
                MediaType::Collection,
                MediaType::TvSeason,
                MediaType::TvEpisode,
            ]
        );
        for media_type in parsed {
            assert_eq!(
                serde_json::to_value(media_type).unwrap(),
                json!(media_type.to_string())
            );
        }
    }

    #[test]
    fn test_convert_movie() {
        // Arrange
        let obj = object(json!({
            "media_type": "movie",
            "id": 550,
            "title": "Fight Club",
            "original_title": "Fight Club",
            "vote_average": 8.4,
            "genre_ids": [18],
            "release_date": "1999-10-15",
            "unexpected_field": {"nested": true}
        }));

        // Act
        let movie = obj.to_movie().unwrap();

        // Assert
        assert_eq!(obj.id(), Some(550));
        assert_eq!(movie.id, 550);
        assert_eq!(movie.title, "Fight Club");
        assert_eq!(movie.genre_ids, vec![18]);
        assert_eq!(movie.release_date.as_deref(), Some("1999-10-15"));
    }

    #[test]
    fn test_convert_round_trips_declared_fields() {
        // Arrange
        let tv = TvResult {
            id: 1399,
            name: String::from("Game of Thrones"),
            original_name: String::from("Game of Thrones"),
            origin_country: vec![String::from("US")],
            first_air_date: Some(String::from("2011-04-17")),
            vote_count: 21_000,
            ..TvResult::default()
        };
        let Value::Object(mut map) = serde_json::to_value(&tv).unwrap() else {
            panic!("TvResult must serialize to an object");
        };
        map.insert(String::from("media_type"), json!("tv"));
        let obj = MediaObject::new(map);

        // Act
        let decoded = obj.to_tv().unwrap();

        // Assert
        assert_eq!(decoded, tv);
    }

    #[test]
    fn test_person_to_movie_fails() {
        // Arrange
        let obj = object(json!({"media_type": "person", "id": 287, "name": "Brad Pitt"}));

        // Act
        let err = obj.to_movie().unwrap_err();

        // Assert
        assert!(matches!(
            err,
            TmdbError::InvalidConversion { ref from, to: MediaType::Movie } if from == "person"
        ));
        assert_eq!(err.to_string(), "invalid conversion from person to movie");
    }

    #[test]
    fn test_every_mismatch_fails() {
        // Arrange
        let tags = ["movie", "tv", "person"];
        let targets = [MediaType::Movie, MediaType::Tv, MediaType::Person];

        for tag in tags {
            let obj = object(json!({"media_type": tag, "id": 1}));
            for target in targets {
                // Act
                let result = obj.convert::<Value>(target);

                // Assert
                if tag == target.as_str() {
                    assert!(result.is_ok());
                } else {
                    assert!(result.is_err(), "{tag} -> {target} must fail");
                }
            }
        }
    }

    #[test]
    fn test_missing_discriminator_fails() {
        // Arrange
        let obj = object(json!({"id": 550, "title": "Fight Club"}));

        // Act
        let err = obj.to_movie().unwrap_err();

        // Assert
        assert!(matches!(err, TmdbError::MissingMediaType { to: MediaType::Movie }));
    }

    #[test]
    fn test_field_type_mismatch_is_decode_error() {
        // Arrange
        let obj = object(json!({"media_type": "movie", "id": "550"}));

        // Act
        let err = obj.to_movie().unwrap_err();

        // Assert
        assert!(matches!(err, TmdbError::Decode { to: MediaType::Movie, .. }));
    }

    #[test]
    fn test_decode_dispatches_on_discriminator() {
        // Arrange
        let items: Vec<MediaObject> = serde_json::from_value(json!([
            {"media_type": "movie", "id": 1, "title": "A"},
            {"media_type": "tv", "id": 2, "name": "B"},
            {"media_type": "person", "id": 3, "name": "C"}
        ]))
        .unwrap();

        // Act
        let decoded: Vec<Media> = items.iter().map(|i| i.decode().unwrap()).collect();

        // Assert
        assert!(matches!(decoded[0], Media::Movie(ref m) if m.title == "A"));
        assert!(matches!(decoded[1], Media::Tv(ref t) if t.name == "B"));
        assert!(matches!(decoded[2], Media::Person(ref p) if p.name == "C"));
        assert_eq!(
            decoded.iter().map(Media::id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(decoded[1].media_type(), MediaType::Tv);
    }

    #[test]
    fn test_decode_rejects_unknown_discriminator() {
        // Arrange
        let obj = object(json!({"media_type": "tv_episode", "id": 62085}));

        // Act
        let result = Media::try_from(&obj);

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            TmdbError::UnsupportedMediaType { found: Some(ref f) } if f == "tv_episode"
        ));
        assert_eq!(err.to_string(), "unsupported media_type tv_episode");
    }

    #[test]
    fn test_decode_untagged_object_names_no_target() {
        // Arrange
        let obj = object(json!({"id": 550, "title": "Fight Club"}));

        // Act
        let err = obj.decode().unwrap_err();

        // Assert
        assert!(matches!(err, TmdbError::UnsupportedMediaType { found: None }));
    }

    #[test]
    fn test_media_serializes_with_tag() {
        // Arrange
        let media = Media::Movie(MovieResult {
            id: 550,
            title: String::from("Fight Club"),
            ..MovieResult::default()
        });

        // Act
        let value = serde_json::to_value(&media).unwrap();

        // Assert
        assert_eq!(value["media_type"], "movie");
        assert_eq!(value["id"], 550);
    }
}
