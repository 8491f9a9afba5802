use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

/// Random source used for placement and per-frame jitter.
pub type SimRng = ChaCha12Rng;

/// Create the simulation RNG: deterministic when a seed is given, entropy-seeded otherwise.
pub fn create_rng(seed: Option<u64>) -> SimRng {
    match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_entropy(),
    }
}
