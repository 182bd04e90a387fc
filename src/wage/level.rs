use std::{fmt, str::FromStr};

/// Hours in a full-time working year (40 hours × 52 weeks).
pub const ANNUAL_MULTIPLIER: f64 = 2080.0;

/// One of the four prevailing wage tiers, or the overall average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum WageLevel {
    #[default]
    Level1,
    Level2,
    Level3,
    Level4,
    Average,
}

impl WageLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            WageLevel::Level1 => "Level1",
            WageLevel::Level2 => "Level2",
            WageLevel::Level3 => "Level3",
            WageLevel::Level4 => "Level4",
            WageLevel::Average => "Average",
        }
    }

    pub fn order() -> [WageLevel; 5] {
        [
            WageLevel::Level1,
            WageLevel::Level2,
            WageLevel::Level3,
            WageLevel::Level4,
            WageLevel::Average,
        ]
    }
}

/// A wage column: a level, either as written in the source or annualized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WageField {
    pub level: WageLevel,
    pub annual: bool,
}

impl WageField {
    #[inline] pub fn raw(level: WageLevel) -> Self { Self { level, annual: false } }

    #[inline] pub fn annual(level: WageLevel) -> Self { Self { level, annual: true } }

    /// The annual column for this field. Annual fields are returned unchanged.
    #[inline] pub fn annualized(self) -> Self { Self::annual(self.level) }
}

impl fmt::Display for WageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.annual {
            write!(f, "{}_Annual", self.level.to_str())
        } else {
            f.write_str(self.level.to_str())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wage level {0:?} (expected Level1..Level4 or Average, optionally suffixed with Annual)")]
pub struct ParseFieldError(pub String);

impl FromStr for WageField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (name, annual) = match strip_suffix_ignore_case(trimmed, "Annual") {
            Some(rest) => (rest.strip_suffix('_').unwrap_or(rest), true),
            None => (trimmed, false),
        };

        let level = WageLevel::order().into_iter()
            .find(|level| level.to_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseFieldError(s.to_string()))?;

        Ok(Self { level, annual })
    }
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let tail = s.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &s[..split])
}

/// The five wage values of a record, in one unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WageLevels {
    pub level1: f64,
    pub level2: f64,
    pub level3: f64,
    pub level4: f64,
    pub average: f64,
}

impl WageLevels {
    /// Get the value of a single level.
    pub fn get(&self, level: WageLevel) -> f64 {
        match level {
            WageLevel::Level1 => self.level1,
            WageLevel::Level2 => self.level2,
            WageLevel::Level3 => self.level3,
            WageLevel::Level4 => self.level4,
            WageLevel::Average => self.average,
        }
    }

    /// Multiply every level by the same factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            level1: self.level1 * factor,
            level2: self.level2 * factor,
            level3: self.level3 * factor,
            level4: self.level4 * factor,
            average: self.average * factor,
        }
    }
}
