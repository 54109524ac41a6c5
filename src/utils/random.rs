use rand::Rng;

/// Source of uniform draws for item generation.
///
/// Every `rand::Rng` is a source, so production code passes `thread_rng()` and
/// tests pass a seeded `StdRng` or a scripted implementation.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform integer in `[low, high)`. Returns `low` when the range is empty.
    fn int_range(&mut self, low: i64, high: i64) -> i64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn int_range(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.gen_range(low..high)
    }
}

/// Uniform index into a collection of `len` elements.
pub fn index(rng: &mut dyn RandomSource, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let idx = (rng.unit() * len as f64).floor();
    if idx.is_finite() && idx > 0.0 {
        (idx as usize).min(len - 1)
    } else {
        0
    }
}

/// Picks one element uniformly. `items` must be non-empty.
pub fn pick<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    &items[index(rng, items.len())]
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.int_range(0, i as i64 + 1).clamp(0, i as i64) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Replays a fixed list of unit draws, cycling when exhausted.
    pub struct ScriptedSource {
        draws: Vec<f64>,
        cursor: usize,
    }

    impl ScriptedSource {
        pub fn new(draws: Vec<f64>) -> Self {
            Self { draws, cursor: 0 }
        }

        pub fn constant(value: f64) -> Self {
            Self::new(vec![value])
        }
    }

    impl RandomSource for ScriptedSource {
        fn unit(&mut self) -> f64 {
            if self.draws.is_empty() {
                return 0.0;
            }
            let value = self.draws[self.cursor % self.draws.len()];
            self.cursor += 1;
            value
        }

        fn int_range(&mut self, low: i64, high: i64) -> i64 {
            if high <= low {
                return low;
            }
            let span = (high - low) as f64;
            (low + (self.unit() * span).floor() as i64).min(high - 1)
        }
    }
}
