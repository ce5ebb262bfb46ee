use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

pub type SimRng = ChaCha12Rng;

/// Create a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> SimRng {
    ChaCha12Rng::seed_from_u64(seed)
}

/// The stream consumed during one tick. Every tick starts from a fresh seed so
/// a tick's outcome depends only on the previous state and the tick index.
pub fn tick_rng(base_seed: u64, tick: u64) -> SimRng {
    create_rng(base_seed.wrapping_add(tick))
}
