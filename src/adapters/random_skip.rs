use crate::domain::ports::SkipPolicy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Skips each sheet independently with a fixed probability.
pub struct RandomSkip {
    probability: f64,
    rng: StdRng,
}

impl RandomSkip {
    /// `probability` must already be validated to lie in `[0, 1]`.
    pub fn new(probability: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { probability, rng }
    }
}

impl SkipPolicy for RandomSkip {
    fn should_skip(&mut self, _sheet: u32) -> bool {
        // random() 落在 [0, 1)，所以 0 永不跳過、1 一律跳過
        self.rng.random::<f64>() < self.probability
    }
}
