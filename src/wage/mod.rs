mod dataset;
mod level;
mod load;
mod record;

pub use dataset::Dataset;
pub use level::{ParseFieldError, WageField, WageLevel, WageLevels, ANNUAL_MULTIPLIER};
pub use load::{load, REQUIRED_COLUMNS};
pub use record::WageRecord;

pub(crate) use record::split_counties;
#[cfg(test)]
pub(crate) use record::fixtures;
