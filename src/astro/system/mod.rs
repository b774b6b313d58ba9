use std::sync::LazyLock;
use anyhow::{Result, anyhow};
use log::debug;
use rustc_hash::FxHashMap;

use super::planet::{PlanetRecord, PLANET_TABLE};


const GREETING_START: u32 = 1;
const GREETING_END: u32 = 1_000_000;

/// Message templates. Nothing formats with these yet.
pub const LINES: [&str; 3] = [
    "{} is a {} planet",
    "The radius of {} is {} km",
    "{} is planet nr. {} counting from the sun",
];

static GREETING: LazyLock<Vec<u32>> = LazyLock::new(|| {
    debug!("Computing greeting sequence {}..{}", GREETING_START, GREETING_END);
    (GREETING_START..GREETING_END).collect()
});

static SOLAR_SYSTEM: LazyLock<SolarSystem> = LazyLock::new(SolarSystem::new);

/// The process-wide solar system, built on first use.
pub fn solar_system() -> &'static SolarSystem {
    &SOLAR_SYSTEM
}

#[derive(Debug)]
pub struct SolarSystem {
    planets: Vec<PlanetRecord>,
    by_name: FxHashMap<String, usize>,
    line_index: usize,
}

impl SolarSystem {
    pub fn new() -> Self {
        let planets = PLANET_TABLE.iter().enumerate()
            .map(|(i, (name, descriptor, radius))| PlanetRecord::new(name, descriptor, *radius, i + 1))
            .collect::<Vec<_>>();
        let by_name = planets.iter().enumerate()
            .map(|(i, p)| (p.name().to_owned(), i))
            .collect::<FxHashMap<_, _>>();
        debug!("Built solar system with {} planets", planets.len());

        Self {
            planets,
            by_name,
            line_index: 0,
        }
    }

    /// The integers 1 through 999,999. Computed once and shared by every caller.
    pub fn greet(&self) -> &'static [u32] {
        &GREETING
    }

    pub fn explain<T>(&self, x: T) {
        let _tmp = x;
    }
}

impl SolarSystem {
    pub fn planets(&self) -> &[PlanetRecord] {
        &self.planets
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }

    pub fn planet(&self, name: &str) -> Result<&PlanetRecord> {
        let index = self.by_name.get(name).ok_or(anyhow!("No planet named {}", name))?;
        Ok(&self.planets[*index])
    }

    /// Look up a planet by its 1-based position from the sun.
    pub fn nth(&self, ordinal: usize) -> Option<&PlanetRecord> {
        ordinal.checked_sub(1).and_then(|i| self.planets.get(i))
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}
