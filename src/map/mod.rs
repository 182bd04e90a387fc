mod boundaries;
mod feature;
mod io;
mod matcher;
mod select;
mod style;

pub use boundaries::Boundaries;
pub use feature::{BoundaryFeature, FeatureKind};
pub use io::{read_features, write_geojson, write_matched_geojson};
pub use matcher::{match_features, match_states, MatchedArea, MatchedState};
pub use select::{focus, Focus};
pub use style::{fill_color, COLOR_SCALE, HOURLY_THRESHOLDS, NO_DATA_COLOR};
