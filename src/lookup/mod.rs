mod error;
mod report;
mod zip;
#[cfg(feature = "geocode")]
mod zippopotam;

pub use error::LookupError;
pub use report::{AreaInfo, ZipReport};
pub use zip::{validate_zip, Geocoder, Place};
#[cfg(feature = "geocode")]
pub use zippopotam::{ZippopotamGeocoder, DEFAULT_BASE_URL};
