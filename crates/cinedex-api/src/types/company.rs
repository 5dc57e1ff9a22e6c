//! Companies, networks and collections.

use serde::{Deserialize, Serialize};

use super::movie::MovieResult;

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentCompany {
    pub id: u64,
    pub name: String,
    pub logo_path: Option<String>,
}

/// Response from `company/{company_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyDetails {
    /// Company ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Headquarters location.
    pub headquarters: String,
    /// Homepage.
    pub homepage: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country (ISO 3166-1).
    pub origin_country: String,
    /// Parent company.
    pub parent_company: Option<ParentCompany>,
}

/// Response from `network/{network_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkDetails {
    /// Network ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Headquarters location.
    pub headquarters: String,
    /// Homepage.
    pub homepage: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country (ISO 3166-1).
    pub origin_country: String,
}

/// Collection reference embedded in movie details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionSummary {
    /// Collection ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Response from `collection/{collection_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionDetails {
    /// Collection ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Overview text.
    pub overview: String,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Movies in the collection.
    pub parts: Vec<MovieResult>,
}

impl CollectionDetails {
    /// Parts sorted by release date; undated parts last.
    #[must_use]
    pub fn parts_by_release(&self) -> Vec<&MovieResult> {
        let mut parts: Vec<&MovieResult> = self.parts.iter().collect();
        parts.sort_by(|a, b| match (&a.release_date, &b.release_date) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        parts
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_collection_parts_by_release() {
        // Arrange
        let collection: CollectionDetails = serde_json::from_value(serde_json::json!({
            "id": 10,
            "name": "Star Wars Collection",
            "parts": [
                {"id": 3, "title": "C", "release_date": null},
                {"id": 2, "title": "B", "release_date": "1980-05-20"},
                {"id": 1, "title": "A", "release_date": "1977-05-25"}
            ]
        }))
        .unwrap();

        // Act
        let ids: Vec<u64> = collection.parts_by_release().iter().map(|m| m.id).collect();

        // Assert
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_company_parent_is_optional() {
        // Arrange & Act
        let company: CompanyDetails = serde_json::from_value(serde_json::json!({
            "id": 508,
            "name": "Regency Enterprises",
            "parent_company": null
        }))
        .unwrap();

        // Assert
        assert_eq!(company.name, "Regency Enterprises");
        assert!(company.parent_company.is_none());
    }
}
