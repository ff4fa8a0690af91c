pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Seed for one (capacity, n_items) cell of a sweep, so any cell can be
/// regenerated on its own from the base seed.
pub fn cell_seed(base: &str, capacity: u32, n_items: usize) -> [u8; 32] {
    u8s_from_str(&format!("{}:{}:{}", base, capacity, n_items))
}
