/// Failure of a zip or point lookup. None of these change loaded state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("please enter a valid 5-digit US zip code (got {0:?})")]
    InvalidZip(String),

    #[error("zip code {0} not found")]
    NotFound(String),

    #[error("geocoding service failed: {0}")]
    Service(String),

    #[error("{0} not loaded yet")]
    NotLoaded(&'static str),
}
