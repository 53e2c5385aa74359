//! Shuffling and sampling over an injected random source
//!
//! Nothing here touches a global RNG. Sessions own a [`GameRng`] built by
//! [`game_rng`]; tests pass a fixed seed and get the same games every run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source owned by game sessions
pub type GameRng = StdRng;

/// Build a session RNG, seeded when reproducibility is wanted
pub fn game_rng(seed: Option<u64>) -> GameRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fisher–Yates shuffle into a new vector; `items` is left untouched
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut result = items.to_vec();
    for i in (1..result.len()).rev() {
        let j = rng.gen_range(0..=i);
        result.swap(i, j);
    }
    result
}

/// Up to `n` elements drawn without replacement
///
/// Asking for at least as many elements as there are returns the whole
/// input in shuffled order.
pub fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], n: usize, rng: &mut R) -> Vec<T> {
    let mut shuffled = shuffle(items, rng);
    shuffled.truncate(n.min(items.len()));
    shuffled
}

/// Lowercase base36 string, used to keep ids from repeated builds apart
pub fn base36_suffix<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
