//! Default value functions for serde deserialization.

pub fn inflation_radius() -> usize {
    1
}

pub fn path_file() -> String {
    "output/path.json".to_string()
}

pub fn svg_file() -> String {
    "output/path.svg".to_string()
}

pub fn enabled() -> bool {
    true
}
