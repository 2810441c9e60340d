mod details;
mod place;
mod record;
mod response;

pub use details::{PlaceDetail, Review};
pub use place::{Geometry, LatLng, OpeningHours, SearchResult};
pub use record::PlaceRecord;
pub use response::{DetailsResponse, SearchResponse};
