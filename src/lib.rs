//! Wireframe rendering of convex polyhedra with Roberts hidden-line removal.
//!
//! The pipeline is linear: build a [`topology::Solid`]
//! ([`operations::creation`]), move it into pixel space
//! ([`operations::transform`]), rewind its faces outward and keep the
//! front-facing ones ([`operations::visibility`]), then draw their edges
//! ([`render`]).

pub mod config;
pub mod error;
pub mod math;
pub mod operations;
pub mod render;
pub mod topology;

pub use config::RenderConfig;
pub use error::{PolywireError, Result};
