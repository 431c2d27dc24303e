//! Geographic positions and placemark label formatting.

use serde::{Deserialize, Serialize};

/// A geographic position in degrees, with altitude in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    /// Altitude in meters, interpreted per [`AltitudeMode`].
    pub altitude: f64,
}

impl Position {
    /// Create a position from latitude, longitude and altitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Create a position on the surface (zero altitude).
    #[must_use]
    pub const fn surface(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, 0.0)
    }
}

/// How a renderable's altitude is interpreted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AltitudeMode {
    /// Altitude is ignored; the renderable sits on the terrain.
    ClampToGround,
    /// Altitude is measured from the terrain surface.
    #[default]
    RelativeToGround,
    /// Altitude is measured from the ellipsoid.
    Absolute,
}

/// Format `value` with `digits` significant digits, the way label text
/// is produced for placemark coordinates (`38.9072` at 4 digits is
/// `"38.91"`).
///
/// Values whose integer part already needs more than `digits` digits are
/// rounded to an integer rather than switched to exponent notation. When
/// rounding carries into a new leading digit (`9.9996` at 4 digits), the
/// result keeps `digits` significant digits (`"10.00"`).
#[must_use]
pub fn to_precision(value: f64, digits: u32) -> String {
    let digits = digits.max(1) as i32;
    let decimals = |magnitude: i32| (digits - 1 - magnitude).max(0) as usize;

    let magnitude = magnitude(value);
    let places = decimals(magnitude);
    let text = format!("{value:.places$}");

    let carried = text
        .parse::<f64>()
        .is_ok_and(|rounded| magnitude_of_rounded(rounded) > magnitude);
    if carried {
        let places = decimals(magnitude + 1);
        format!("{value:.places$}")
    } else {
        text
    }
}

/// Decimal exponent of the leading digit; zero for zero and non-finite
/// values.
fn magnitude(value: f64) -> i32 {
    if value == 0.0 || !value.is_finite() {
        0
    } else {
        value.abs().log10().floor() as i32
    }
}

fn magnitude_of_rounded(rounded: f64) -> i32 {
    if rounded == 0.0 {
        i32::MIN
    } else {
        magnitude(rounded)
    }
}

/// Build the multi-line label shown next to a placemark.
#[must_use]
pub fn placemark_label(position: &Position) -> String {
    format!(
        "Placemark \nLat {}\nLon {}",
        to_precision(position.latitude, 4),
        to_precision(position.longitude, 5)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_matches_label_digits() {
        assert_eq!(to_precision(38.9072, 4), "38.91");
        assert_eq!(to_precision(-77.0369, 5), "-77.037");
        assert_eq!(to_precision(55.7558, 4), "55.76");
        assert_eq!(to_precision(37.6173, 5), "37.617");
    }

    #[test]
    fn precision_handles_small_and_zero_values() {
        assert_eq!(to_precision(0.0, 4), "0.000");
        assert_eq!(to_precision(0.012_34, 2), "0.012");
        // Too many integer digits: rounded, no exponent form
        assert_eq!(to_precision(12_345.6, 3), "12346");
    }

    #[test]
    fn precision_keeps_digit_count_when_rounding_carries() {
        assert_eq!(to_precision(9.9996, 4), "10.00");
        assert_eq!(to_precision(-9.9996, 4), "-10.00");
        assert_eq!(to_precision(89.99999, 4), "90.00");
        assert_eq!(to_precision(99.999_99, 4), "100.0");
        assert_eq!(to_precision(-179.999_999, 5), "-180.00");
        assert_eq!(to_precision(0.099_96, 2), "0.10");
    }

    #[test]
    fn label_near_pole_keeps_four_digits() {
        let label = placemark_label(&Position::surface(89.99999, 0.0));
        assert_eq!(label, "Placemark \nLat 90.00\nLon 0.0000");
    }

    #[test]
    fn label_has_three_lines() {
        let label = placemark_label(&Position::surface(38.9072, -77.0369));
        assert_eq!(label, "Placemark \nLat 38.91\nLon -77.037");
        assert_eq!(label.lines().count(), 3);
    }
}
