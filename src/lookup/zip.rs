use std::sync::LazyLock;

use regex::Regex;

use crate::lookup::LookupError;

static ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{5}$").unwrap());

/// Trim `text` and check it is a five-digit US zip code.
pub fn validate_zip(text: &str) -> Result<&str, LookupError> {
    let zip = text.trim();
    if ZIP_RE.is_match(zip) { Ok(zip) } else { Err(LookupError::InvalidZip(zip.to_string())) }
}

/// A geocoded zip code.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,       // Place name, e.g. "Beverly Hills"
    pub state: String,
    pub state_abbr: String,
    pub lat: f64,
    pub lon: f64,
}

/// Resolves a zip code to a place.
pub trait Geocoder {
    /// `zip` has already been validated.
    fn geocode(&self, zip: &str) -> Result<Place, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_digits_only() {
        assert_eq!(validate_zip("20001"), Ok("20001"));
        assert_eq!(validate_zip("  02134\n"), Ok("02134"));
        for bad in ["", "2000", "200011", "2000a", "20001-1234", "٢٠٠٠١"] {
            assert!(matches!(validate_zip(bad), Err(LookupError::InvalidZip(_))), "{bad:?}");
        }
    }
}
