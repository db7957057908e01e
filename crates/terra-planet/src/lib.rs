//! Scene entities built on the cube sphere: the shaded planet and the sun
//! that lights it.

mod light;
mod planet;
mod uniform;

pub use light::{Light, Orbit, orbit_position};
pub use planet::{Planet, scatter_coefficients};
pub use uniform::{LightUniform, ScreenInputs, ScreenUniform, SurfaceUniform};
