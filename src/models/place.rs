use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: bool,
}

/// One candidate place from a nearby-search response. Every field is
/// defaulted: an absent member decodes as its zero value instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
}
