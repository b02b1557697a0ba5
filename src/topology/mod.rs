pub mod face;
pub mod kind;
pub mod solid;

pub use face::Face;
pub use kind::SolidKind;
pub use solid::Solid;
