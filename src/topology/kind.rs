use std::fmt;
use std::str::FromStr;

use crate::error::{OperationError, PolywireError};

/// The solids the builder knows how to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolidKind {
    /// 12 vertices, 20 triangular faces.
    #[default]
    Icosahedron,
    /// 20 vertices, 12 pentagonal faces, built as the icosahedron's dual.
    Dodecahedron,
}

impl SolidKind {
    /// Short name used on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Icosahedron => "icosa",
            Self::Dodecahedron => "dodeca",
        }
    }
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolidKind {
    type Err = PolywireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "icosa" | "icosahedron" => Ok(Self::Icosahedron),
            "dodeca" | "dodecahedron" => Ok(Self::Dodecahedron),
            _ => Err(OperationError::UnknownSolidKind(s.to_owned()).into()),
        }
    }
}
