//! Scaling error types.

/// Errors produced while calibrating or applying a semi-log scale.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    /// Real anchors must be finite with `0 < real_low < real_high`, screen
    /// anchors must be finite.
    #[error(
        "invalid calibration ({real_low} -> {screen_low}, {real_high} -> {screen_high}): \
         real anchors must satisfy 0 < low < high and all anchors must be finite"
    )]
    InvalidCalibration {
        /// Lower real-world anchor.
        real_low: f64,
        /// Upper real-world anchor.
        real_high: f64,
        /// Screen size mapped from the lower anchor.
        screen_low: f64,
        /// Screen size mapped from the upper anchor.
        screen_high: f64,
    },

    /// Only finite positive magnitudes have a logarithm.
    #[error("invalid magnitude {0}: value must be finite and positive")]
    InvalidMagnitude(f64),
}
