pub mod places;

pub use places::PlacesClient;
