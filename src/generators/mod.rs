use rand::{SeedableRng, rngs::StdRng};

mod recur_backtrack;

pub use recur_backtrack::{carve, recursive_backtrack};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
