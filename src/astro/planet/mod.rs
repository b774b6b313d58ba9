use serde::{Serialize, Deserialize};

#[cfg(test)]
mod tests;

/// (name, descriptor, radius in km), ordered outward from the sun.
pub(super) const PLANET_TABLE: [(&str, &str, u32); 8] = [
    ("Mercury", "hot", 2240),
    ("Venus", "sulphurous", 6052),
    ("Earth", "fertile", 6378),
    ("Mars", "reddish", 3397),
    ("Jupiter", "stormy", 71492),
    ("Saturn", "ringed", 60268),
    ("Uranus", "cold", 25559),
    ("Neptune", "very cold", 24766),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetRecord {
    name: String,
    descriptor: String,
    radius_km: u32, // Kilometers
    ordinal: usize, // 1 is closest to the sun
}

impl PlanetRecord {
    pub(super) fn new(name: &str, descriptor: &str, radius_km: u32, ordinal: usize) -> Self {
        Self {
            name: name.to_owned(),
            descriptor: descriptor.to_owned(),
            radius_km,
            ordinal,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn radius_km(&self) -> u32 {
        self.radius_km
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

impl PartialEq<(&str, &str, u32, usize)> for PlanetRecord {
    fn eq(&self, other: &(&str, &str, u32, usize)) -> bool {
        self.name == other.0
            && self.descriptor == other.1
            && self.radius_km == other.2
            && self.ordinal == other.3
    }
}
