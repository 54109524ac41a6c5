use crate::utils::random::{index, RandomSource};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 8;

/// Opaque item identifier such as `mcq_k3x9a0zq`.
pub fn generate_item_id(rng: &mut dyn RandomSource, prefix: &str) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[index(rng, ID_ALPHABET.len())] as char)
        .collect();
    format!("{}_{}", prefix, suffix)
}
