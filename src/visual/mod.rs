// Canvas backgrounds, one per page slot.

mod mesh;
mod orbit;
mod waves;

pub use mesh::{Mesh, Particle};
pub use orbit::{Orbit, OrbitFrame};
pub use waves::{Wave, WaveField};
