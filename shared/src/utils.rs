use rand::{rngs::StdRng, SeedableRng};

/// Split a `0xRRGGBB` colour into its sRGB bytes.
pub fn hex_to_srgb_u8(hex: u32) -> [u8; 3] {
    [
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    ]
}

/// Seeded RNG when a seed is given, entropy-seeded otherwise.
pub fn scene_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
