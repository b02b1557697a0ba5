mod general;
mod rotate;
mod scale;
mod view;

pub use general::GeneralTransform;
pub use rotate::{rotation_x, rotation_y};
pub use scale::scale_translate;
pub use view::ViewTransform;

use crate::math::{mat_mul, Matrix4};

/// Multiplies matrices left to right: `compose(&[a, b, c]) == a * b * c`.
///
/// The rightmost matrix is applied to a point first. An empty slice yields
/// the identity.
#[must_use]
pub fn compose(matrices: &[Matrix4]) -> Matrix4 {
    matrices
        .iter()
        .fold(Matrix4::identity(), |acc, m| mat_mul(&acc, m))
}
