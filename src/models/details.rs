use serde::Deserialize;

/// Enrichment data for one place identifier. `Default` doubles as the
/// zero-rated fallback written when the details lookup fails.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub formatted_phone_number: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub relative_time_description: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub time: i64,
}
