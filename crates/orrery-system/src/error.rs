//! Scene assembly error types.

use orrery_geometry::GeometryError;
use orrery_math::ScaleError;

/// Errors raised while loading the body table or assembling the scene.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    /// Failed to read a body table from disk.
    #[error("failed to read body table: {0}")]
    Read(#[from] std::io::Error),

    /// Body table is not valid RON.
    #[error("failed to parse body table: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The body table has no entries.
    #[error("body table is empty")]
    EmptyCatalog,

    /// Two bodies share a name.
    #[error("duplicate body name {0:?}")]
    DuplicateBody(String),

    /// A body has a zero, negative or non-finite magnitude.
    #[error("body {name:?} has invalid {field}: must be finite and positive")]
    InvalidBody {
        /// Body name.
        name: String,
        /// Offending field.
        field: &'static str,
    },

    /// The line test needs a positive extent whose doubled range is finite.
    #[error("line extent {0} must be positive with a finite sampling range")]
    InvalidExtent(f32),

    /// A magnitude could not be scaled.
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// A node could not be built.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
