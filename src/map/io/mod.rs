mod geojson;
mod read;

pub use geojson::{write_geojson, write_matched_geojson};
pub use read::read_features;
