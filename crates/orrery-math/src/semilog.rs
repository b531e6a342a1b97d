//! Semi-log interpolation between two calibration anchors.
//!
//! Real magnitudes in the scene span several orders of magnitude (Mercury is
//! 4,879 km across, Jupiter 142,984 km). A linear map would make the small
//! bodies vanish, so values are interpolated in log space instead:
//!
//! ```text
//! screen = screen_low + (ln(value) - ln(real_low)) * slope
//! slope  = (screen_high - screen_low) / (ln(real_high) - ln(real_low))
//! ```

use crate::ScaleError;

/// Two anchor pairs `(real_low, screen_low)` and `(real_high, screen_high)`
/// with the slope precomputed.
///
/// Construct through [`calibrate`] or [`ScaleCalibration::new`]; both enforce
/// `0 < real_low < real_high`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleCalibration {
    real_low: f64,
    real_high: f64,
    screen_low: f64,
    screen_high: f64,
    slope: f64,
}

impl ScaleCalibration {
    /// Build a calibration from its four anchors.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidCalibration`] unless both real anchors are
    /// finite with `0 < real_low < real_high` and both screen anchors are finite.
    pub fn new(
        real_low: f64,
        real_high: f64,
        screen_low: f64,
        screen_high: f64,
    ) -> Result<Self, ScaleError> {
        let anchors_ok = real_low.is_finite()
            && real_high.is_finite()
            && real_low > 0.0
            && real_low < real_high
            && screen_low.is_finite()
            && screen_high.is_finite();

        if !anchors_ok {
            return Err(ScaleError::InvalidCalibration {
                real_low,
                real_high,
                screen_low,
                screen_high,
            });
        }

        let slope = (screen_high - screen_low) / (real_high.ln() - real_low.ln());

        Ok(Self {
            real_low,
            real_high,
            screen_low,
            screen_high,
            slope,
        })
    }

    /// Map a real magnitude onto the screen range.
    ///
    /// Values outside `[real_low, real_high]` extrapolate along the same line;
    /// nothing is clamped.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidMagnitude`] for zero, negative or
    /// non-finite input.
    pub fn apply(&self, value: f64) -> Result<f64, ScaleError> {
        if !(value.is_finite() && value > 0.0) {
            return Err(ScaleError::InvalidMagnitude(value));
        }
        Ok(self.screen_low + (value.ln() - self.real_low.ln()) * self.slope)
    }

    /// Lower real-world anchor.
    pub fn real_low(&self) -> f64 {
        self.real_low
    }

    /// Upper real-world anchor.
    pub fn real_high(&self) -> f64 {
        self.real_high
    }

    /// Screen size at the lower anchor.
    pub fn screen_low(&self) -> f64 {
        self.screen_low
    }

    /// Screen size at the upper anchor.
    pub fn screen_high(&self) -> f64 {
        self.screen_high
    }

    /// Screen units per unit of `ln(value)`.
    pub fn slope(&self) -> f64 {
        self.slope
    }
}

/// Calibrate a semi-log scale. See [`ScaleCalibration::new`].
pub fn calibrate(
    real_low: f64,
    real_high: f64,
    screen_low: f64,
    screen_high: f64,
) -> Result<ScaleCalibration, ScaleError> {
    ScaleCalibration::new(real_low, real_high, screen_low, screen_high)
}

/// Apply a calibration to a magnitude. See [`ScaleCalibration::apply`].
pub fn scale(calib: &ScaleCalibration, value: f64) -> Result<f64, ScaleError> {
    calib.apply(value)
}
