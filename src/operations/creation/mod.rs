mod make_dodecahedron;
mod make_dual;
mod make_icosahedron;
mod make_solid;

pub use make_dodecahedron::MakeDodecahedron;
pub use make_dual::MakeDual;
pub use make_icosahedron::MakeIcosahedron;
pub use make_solid::MakeSolid;
