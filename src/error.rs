use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the polywire renderer.
#[derive(Debug, Error)]
pub enum PolywireError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to solid topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("face {face} references vertex {index}, but the solid has {len} vertices")]
    IndexOutOfRange { face: usize, index: usize, len: usize },

    #[error("face {face} has {len} indices, at least 3 are required")]
    FaceTooSmall { face: usize, len: usize },

    #[error("vertex {vertex} has {incident} incident faces, expected {expected}")]
    BuildInconsistency {
        vertex: usize,
        incident: usize,
        expected: usize,
    },

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to operations on solids.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("unknown solid kind: {0:?}")]
    UnknownSolidKind(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to rasterization and output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render parameters: {0}")]
    InvalidParameters(String),

    #[error("failed to write {}: {reason}", path.display())]
    OutputWrite { path: PathBuf, reason: String },

    #[error("display unavailable: {0}")]
    DisplayUnavailable(String),
}

/// Convenience type alias for results using [`PolywireError`].
pub type Result<T> = std::result::Result<T, PolywireError>;
