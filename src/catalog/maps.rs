pub const MAPS: &[&str] = &[
    "Antarctic Peninsula",
    "Ilios",
    "King's Row",
    "Lijiang Tower",
    "Route 66",
    "Rialto",
    "Colosseo",
    "Eichenwalde",
];

pub fn is_known_map(name: &str) -> bool {
    MAPS.iter().any(|m| m.eq_ignore_ascii_case(name))
}
