//! Rule-based corrective action recommendations for out-of-band measurements.
//!
//! The table is keyed by exact parameter name and guarded by the direction
//! of the deviation. Anything that does not match a row, including a failing
//! measurement whose deviation runs the other way, falls through to the
//! generic recommendation.

/// Standard parameter names, matching the `quality_parameters` seed data.
pub const PARAM_WATER_ABSORPTION: &str = "Water Absorption";
pub const PARAM_WARPING: &str = "Warping";
pub const PARAM_BREAKING_STRENGTH: &str = "Breaking Strength";
pub const PARAM_THICKNESS: &str = "Thickness";
pub const PARAM_LENGTH: &str = "Length";
pub const PARAM_WIDTH: &str = "Width";

pub const ACTION_WATER_ABSORPTION: &str =
    "Increase firing temperature by 10-15°C or extend firing time by 5-10 minutes.";
pub const ACTION_WARPING: &str =
    "Reduce cooling rate after firing. Check kiln temperature uniformity.";
pub const ACTION_BREAKING_STRENGTH: &str =
    "Check clay composition. Consider increasing thickness or adjusting material formula.";
pub const ACTION_THICKNESS: &str = "Adjust pressing parameters. Check for wear on pressing tools.";
pub const ACTION_DIMENSIONS: &str = "Calibrate cutting tools. Check for wear on molds.";
pub const ACTION_GENERIC: &str =
    "Review production process parameters and raw materials quality.";

/// Recommend a corrective action for `parameter` measured at `value`
/// against the band `[min, max]`.
pub fn advise_action(parameter: &str, value: f64, min: f64, max: f64) -> &'static str {
    let out_of_band = value < min || value > max;

    match parameter {
        PARAM_WATER_ABSORPTION if value > max => ACTION_WATER_ABSORPTION,
        PARAM_WARPING if value > max => ACTION_WARPING,
        PARAM_BREAKING_STRENGTH if value < min => ACTION_BREAKING_STRENGTH,
        PARAM_THICKNESS if out_of_band => ACTION_THICKNESS,
        PARAM_LENGTH | PARAM_WIDTH if out_of_band => ACTION_DIMENSIONS,
        _ => ACTION_GENERIC,
    }
}
