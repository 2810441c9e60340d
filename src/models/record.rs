use super::details::PlaceDetail;
use super::place::SearchResult;

// The feed has always reported a literal review count of 1 per row;
// downstream consumers depend on it, so it is not derived from the
// details response.
const NUM_REVIEWS: &str = "1";

/// The flat row appended to the output CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRecord {
    pub name: String,
    pub num_reviews: String,
    pub rating: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlaceRecord {
    /// Joins one search result with its details lookup. Pure projection:
    /// name and location come from the search side, rating from the details
    /// side.
    pub fn from_parts(result: &SearchResult, detail: &PlaceDetail) -> Self {
        Self {
            name: result.name.clone(),
            num_reviews: NUM_REVIEWS.to_string(),
            rating: detail.rating,
            latitude: result.geometry.location.lat,
            longitude: result.geometry.location.lng,
        }
    }

    /// Renders the five CSV fields in output order. Numeric fields are
    /// fixed-point with exactly 6 fractional digits.
    pub fn fields(&self) -> [String; 5] {
        [
            self.name.clone(),
            self.num_reviews.clone(),
            format!("{:.6}", self.rating),
            format!("{:.6}", self.latitude),
            format!("{:.6}", self.longitude),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Geometry, LatLng};

    fn search_result(name: &str, lat: f64, lng: f64) -> SearchResult {
        SearchResult {
            name: name.to_string(),
            place_id: "abc".to_string(),
            geometry: Geometry {
                location: LatLng { lat, lng },
            },
            ..SearchResult::default()
        }
    }

    #[test]
    fn maps_name_location_and_rating() {
        let result = search_result("Cafe X", 40.001, -74.001);
        let detail = PlaceDetail {
            rating: 4.5,
            ..PlaceDetail::default()
        };

        let record = PlaceRecord::from_parts(&result, &detail);
        assert_eq!(record.name, "Cafe X");
        assert_eq!(record.num_reviews, "1");
        assert_eq!(record.rating, 4.5);
        assert_eq!(record.latitude, 40.001);
        assert_eq!(record.longitude, -74.001);
    }

    #[test]
    fn fields_use_six_decimal_places() {
        let result = search_result("Cafe X", 40.001, -74.001);
        let detail = PlaceDetail {
            rating: 4.5,
            ..PlaceDetail::default()
        };

        let record = PlaceRecord::from_parts(&result, &detail);
        assert_eq!(
            record.fields(),
            ["Cafe X", "1", "4.500000", "40.001000", "-74.001000"]
        );
    }

    #[test]
    fn default_detail_yields_zero_rating() {
        let result = search_result("No Detail", 1.0, 2.0);
        let record = PlaceRecord::from_parts(&result, &PlaceDetail::default());
        assert_eq!(record.fields()[2], "0.000000");
    }
}
