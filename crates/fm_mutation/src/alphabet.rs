use rand::Rng;

/// Bases eligible for substitution. Order matters for reproducibility:
/// a seeded generator picks replacements by index into this table.
pub const ALPHABET: [u8; 4] = *b"ATCG";

/// True for the upper-case canonical bases A, T, C and G only.
pub fn is_alphabet_member(c: u8) -> bool {
    matches!(c, b'A' | b'T' | b'C' | b'G')
}

/// Uniform draw from [`ALPHABET`].
pub fn random_base<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    ALPHABET[rng.random_range(0..ALPHABET.len())]
}
