//! Built-in list sources: the sample list and random lists

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::input::{RANDOM_MAX_LEN, RANDOM_MAX_VALUE, SAMPLE_CYCLE, SAMPLE_VALUES};
use crate::core::ListInput;
use crate::error::CycleStepperError;

/// `[3, 2, 0, -4]` with the tail linked back to index 1
pub fn sample_list() -> Result<ListInput, CycleStepperError> {
    ListInput::new(SAMPLE_VALUES.to_vec(), SAMPLE_CYCLE)
}

/// A random list of 1 to 20 values in `0..=100`, with a random cycle index
/// (possibly -1)
pub fn random_list<R: Rng + ?Sized>(rng: &mut R) -> Result<ListInput, CycleStepperError> {
    let len = rng.gen_range(1..=RANDOM_MAX_LEN);
    let values = (0..len)
        .map(|_| rng.gen_range(0..=RANDOM_MAX_VALUE))
        .collect();
    let cycle = rng.gen_range(-1..len as i64);

    ListInput::new(values, cycle)
}

/// Random list from a fixed seed, or from the thread RNG when none is given
pub fn random_list_with_seed(seed: Option<u64>) -> Result<ListInput, CycleStepperError> {
    match seed {
        Some(seed) => random_list(&mut StdRng::seed_from_u64(seed)),
        None => random_list(&mut rand::thread_rng()),
    }
}
