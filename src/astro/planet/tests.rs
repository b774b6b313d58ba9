use super::*;

#[test]
fn table_to_records() {
    let records = PLANET_TABLE.iter().enumerate()
        .map(|(i, (name, descriptor, radius))| PlanetRecord::new(name, descriptor, *radius, i + 1))
        .collect::<Vec<_>>();
    assert_eq!(records[4], ("Jupiter", "stormy", 71492, 5));
    assert_ne!(records[4], ("Jupiter", "stormy", 71492, 4));
}

#[test]
fn bincode_storage() {
    let neptune = PlanetRecord::new("Neptune", "very cold", 24766, 8);
    let bytes = bincode::serialize(&neptune).unwrap();
    let loaded: PlanetRecord = bincode::deserialize(&bytes).unwrap();
    assert_eq!(loaded, neptune);
}
