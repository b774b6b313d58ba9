mod astro;

pub use astro::planet::PlanetRecord;
pub use astro::system::{SolarSystem, solar_system, LINES};
