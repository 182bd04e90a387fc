#![doc = "Prevailing wage map: OFLC wage filtering, area boundary joins and point-in-area lookup"]
mod common;
mod config;
mod filter;
mod geom;
mod lookup;
mod map;
mod session;
mod wage;

#[doc(inline)]
pub use config::Config;

#[doc(inline)]
pub use wage::{load, Dataset, ParseFieldError, WageField, WageLevel, WageLevels, WageRecord, ANNUAL_MULTIPLIER, REQUIRED_COLUMNS};

#[doc(inline)]
pub use filter::{derive_filtered_set, format_currency, parse_wage_bound, suggest, summary, table_rows, FilterSelection};

#[doc(inline)]
pub use geom::{locate, multipolygon_contains, polygon_contains, ring_contains, AreaIndex, Shape};

#[doc(inline)]
pub use map::{
    fill_color, focus, match_features, match_states, read_features, write_geojson, write_matched_geojson,
    BoundaryFeature, Boundaries, FeatureKind, Focus, MatchedArea, MatchedState, COLOR_SCALE, HOURLY_THRESHOLDS, NO_DATA_COLOR,
};

#[doc(inline)]
pub use lookup::{validate_zip, AreaInfo, Geocoder, LookupError, Place, ZipReport};

#[cfg(feature = "geocode")]
#[doc(inline)]
pub use lookup::{ZippopotamGeocoder, DEFAULT_BASE_URL};

#[doc(inline)]
pub use session::{AreaView, LoadPhase, MapView, Session, StateView, View};
