//! Geometry error types.

/// What made a geometry request invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryIssue {
    /// Start and end points coincide, so there is no direction to orient along.
    DegenerateSegment,
    /// An endpoint has a NaN or infinite coordinate.
    NonFiniteEndpoint,
    /// Tube radius must be finite and positive.
    NonPositiveRadius(f32),
    /// A tube cross-section needs at least three sides.
    TooFewSegments(u32),
    /// Axis length must be finite and positive.
    NonPositiveHeight(f32),
    /// The distance between the endpoints overflows `f32`.
    UnrepresentableLength,
}

impl std::fmt::Display for GeometryIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryIssue::DegenerateSegment => write!(f, "start and end points coincide"),
            GeometryIssue::NonFiniteEndpoint => write!(f, "endpoint is not finite"),
            GeometryIssue::NonPositiveRadius(r) => write!(f, "radius {r} must be positive"),
            GeometryIssue::TooFewSegments(n) => {
                write!(f, "{n} radial segments, at least 3 required")
            }
            GeometryIssue::NonPositiveHeight(h) => write!(f, "height {h} must be positive"),
            GeometryIssue::UnrepresentableLength => {
                write!(f, "segment length does not fit in an f32")
            }
        }
    }
}

/// Errors returned by geometry construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// The request violates a geometric precondition.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(GeometryIssue),
}
