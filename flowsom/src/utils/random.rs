#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::sync::Mutex;

/// A seed used by repeatable random sources.
pub const DEFAULT_SEED: u32 = 3_459_173_429;

/// Provides the way to use randomized values in generic way.
pub trait Random: Send + Sync {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Shuffles items in place using Fisher-Yates algorithm on top of `uniform_int`.
    fn shuffle(&self, items: &mut [usize]) {
        for idx in (1..items.len()).rev() {
            let other = self.uniform_int(0, idx as i32) as usize;
            items.swap(idx, other);
        }
    }
}

/// A default random implementation backed by a small fast generator.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` seeded with the given value.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }

    /// Creates a new instance of `DefaultRandom` which produces the same sequence on each run.
    pub fn new_repeatable() -> Self {
        Self::new_with_seed(DEFAULT_SEED as u64)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.lock().unwrap().gen_range(min..=max)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng.lock().unwrap().gen_range(min..max)
    }
}

/// A linear congruential generator with 15 bits of output, the same one classic FlowSOM uses
/// to pick training samples. Allows to replay sample streams recorded with it.
pub struct LegacyRandom {
    state: Mutex<u32>,
}

impl LegacyRandom {
    const MAX_VALUE: u32 = 32767;

    /// Creates a new instance of `LegacyRandom` with the given seed.
    pub fn new_with_seed(seed: u32) -> Self {
        Self { state: Mutex::new(seed) }
    }

    /// Returns next raw value in [0, 32767] range.
    pub fn next_raw(&self) -> u32 {
        let mut state = self.state.lock().unwrap();
        *state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);

        (*state / 65_536) % (Self::MAX_VALUE + 1)
    }

    fn next_unit(&self) -> Float {
        self.next_raw() as Float / (Self::MAX_VALUE as Float + 1.)
    }
}

impl Default for LegacyRandom {
    fn default() -> Self {
        Self::new_with_seed(DEFAULT_SEED)
    }
}

impl Random for LegacyRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        let span = (max as i64 - min as i64 + 1) as Float;

        min + (span * self.next_unit()) as i32
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        min + (max - min) * self.next_unit()
    }
}
