//! Clock and random implementations.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uniform picks from the thread RNG, or from a seeded RNG
/// when reproducible runs are wanted.
pub struct SystemRandom {
    seeded: Option<Mutex<StdRng>>,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self { seeded: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: usize, max: usize) -> usize {
        match &self.seeded {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                rng.gen_range(min..=max)
            }
            None => rand::thread_rng().gen_range(min..=max),
        }
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Fixed random for testing. Always picks `min + offset`, clamped to `max`.
#[cfg(test)]
pub struct FixedRandom(pub usize);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_range(&self, min: usize, max: usize) -> usize {
        (min + self.0).min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_stays_in_range() {
        let random = SystemRandom::new();
        for _ in 0..200 {
            let n = random.gen_range(2, 5);
            assert!((2..=5).contains(&n));
        }
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let a = SystemRandom::seeded(42);
        let b = SystemRandom::seeded(42);
        let xs: Vec<_> = (0..20).map(|_| a.gen_range(0, 9)).collect();
        let ys: Vec<_> = (0..20).map(|_| b.gen_range(0, 9)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn single_candidate_range() {
        assert_eq!(SystemRandom::new().gen_range(0, 0), 0);
    }

    #[test]
    fn fixed_random_clamps() {
        assert_eq!(FixedRandom(3).gen_range(0, 1), 1);
        assert_eq!(FixedRandom(0).gen_range(0, 4), 0);
    }
}
