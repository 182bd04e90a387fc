use crate::wage::ANNUAL_MULTIPLIER;

/// Fill colour of features without wage data.
pub const NO_DATA_COLOR: &str = "#cccccc";

/// Bucket colours from lowest to highest wage.
pub const COLOR_SCALE: [&str; 6] = ["#deebf7", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#084594"];

/// Hourly break points of the colour scale; applied to annual wages after
/// scaling by [`ANNUAL_MULTIPLIER`].
pub const HOURLY_THRESHOLDS: [f64; 5] = [20.0, 40.0, 60.0, 80.0, 100.0];

/// Fill colour for an annual wage. A value must exceed a threshold to move
/// into the next bucket.
pub fn fill_color(annual_wage: Option<f64>) -> &'static str {
    let Some(wage) = annual_wage.filter(|w| !w.is_nan()) else { return NO_DATA_COLOR };

    let bucket = HOURLY_THRESHOLDS.iter()
        .take_while(|&&hourly| wage > hourly * ANNUAL_MULTIPLIER)
        .count();
    COLOR_SCALE[bucket]
}
