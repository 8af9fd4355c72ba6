//! Disease catalog endpoints - labels, categories, and health bot search

use axum::{extract::Query, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, DiseaseCategory};

/// A catalog entry
#[derive(Debug, Serialize)]
pub struct DiseaseEntry {
    pub class_id: usize,
    pub name: &'static str,
    pub category: String,
}

/// GET /diseases - List all known disease labels with their categories
pub async fn list_diseases() -> Json<Vec<DiseaseEntry>> {
    let entries = catalog::CLASS_NAMES
        .iter()
        .enumerate()
        .map(|(idx, &name)| DiseaseEntry {
            class_id: idx,
            name,
            category: DiseaseCategory::from_label(name).to_string(),
        })
        .collect();

    Json(entries)
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text disease name query
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub name: &'static str,
    pub category: String,
    pub info: &'static str,
}

/// GET /diseases/search?q= - Health bot lookup by free-text query
///
/// Case-insensitive substring match; the first matching label in the fixed
/// class order wins. A miss is a 404 with a notice, not a server error.
pub async fn search_diseases(
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchHit>, (StatusCode, String)> {
    match catalog::search(&params.q) {
        Some(name) => Ok(Json(SearchHit {
            name,
            category: DiseaseCategory::from_label(name).to_string(),
            info: catalog::disease_info(name),
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            "Disease not found. Please check spelling.".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_diseases_covers_catalog() {
        let Json(entries) = list_diseases().await;

        assert_eq!(entries.len(), catalog::NUM_CLASSES);
        assert_eq!(entries[0].name, "BA- cellulitis");
        assert_eq!(entries[0].category, "Bacterial");
        assert_eq!(entries[9].category, "Precancerous");
    }

    #[tokio::test]
    async fn test_search_hit() {
        let params = SearchParams {
            q: "RingWorm".to_string(),
        };
        let Json(hit) = search_diseases(Query(params)).await.unwrap();

        assert_eq!(hit.name, "FU-ringworm");
        assert_eq!(hit.category, "Fungal");
        assert_eq!(hit.info, catalog::disease_info("FU-ringworm"));
    }

    #[tokio::test]
    async fn test_search_miss_is_not_found() {
        let params = SearchParams {
            q: "xyz".to_string(),
        };
        let (status, message) = search_diseases(Query(params)).await.unwrap_err();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(message.contains("not found"));
    }
}
