use crate::error::Result;
use crate::topology::{Solid, SolidKind};

use super::{MakeDodecahedron, MakeIcosahedron};

/// Creates a solid of the requested kind.
pub struct MakeSolid {
    kind: SolidKind,
    radius: f64,
}

impl MakeSolid {
    /// Creates a new `MakeSolid` operation.
    #[must_use]
    pub fn new(kind: SolidKind, radius: f64) -> Self {
        Self { kind, radius }
    }

    /// Executes the operation, dispatching on the solid kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn execute(&self) -> Result<Solid> {
        match self.kind {
            SolidKind::Icosahedron => MakeIcosahedron::new(self.radius).execute(),
            SolidKind::Dodecahedron => MakeDodecahedron::new(self.radius).execute(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_kind() {
        let ico = MakeSolid::new(SolidKind::Icosahedron, 1.0).execute().unwrap();
        assert_eq!(ico.faces().len(), 20);
        let dodeca = MakeSolid::new(SolidKind::Dodecahedron, 1.0).execute().unwrap();
        assert_eq!(dodeca.faces().len(), 12);
    }
}
