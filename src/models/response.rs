use serde::Deserialize;

use super::details::PlaceDetail;
use super::place::SearchResult;

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailsResponse {
    #[serde(default)]
    pub result: PlaceDetail,
    #[serde(default)]
    pub status: String,
}
