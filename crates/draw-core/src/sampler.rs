use rand::prelude::*;
use smallvec::SmallVec;

/// Drawn numbers in display order (left to right in the tube).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawResult(pub SmallVec<[u32; 8]>);

impl DrawResult {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl From<&[u32]> for DrawResult {
    fn from(numbers: &[u32]) -> Self {
        Self(numbers.iter().copied().collect())
    }
}

/// Source of draw results. Swapped for [`FixedSampler`] in tests.
pub trait DrawSampler {
    /// `k` distinct numbers from `1..=n`.
    ///
    /// Requires `k <= n`; the caller validates this up front.
    fn sample(&mut self, k: usize, n: u32) -> DrawResult;
}

/// Rejection sampling without replacement: draw uniformly from `1..=n` and
/// keep a number only if it has not been drawn yet.
pub struct RandomSampler<R: Rng = StdRng> {
    rng: R,
}

impl RandomSampler<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DrawSampler for RandomSampler<R> {
    fn sample(&mut self, k: usize, n: u32) -> DrawResult {
        assert!(
            k as u64 <= u64::from(n),
            "cannot draw {k} distinct numbers from 1..={n}"
        );
        let mut numbers: SmallVec<[u32; 8]> = SmallVec::with_capacity(k);
        while numbers.len() < k {
            let candidate = self.rng.gen_range(1..=n);
            if !numbers.contains(&candidate) {
                numbers.push(candidate);
            }
        }
        DrawResult(numbers)
    }
}

/// Replays scripted results in order, cycling when it runs out.
pub struct FixedSampler {
    results: Vec<DrawResult>,
    next: usize,
}

impl FixedSampler {
    pub fn new(result: &[u32]) -> Self {
        Self::sequence(vec![DrawResult::from(result)])
    }

    pub fn sequence(results: Vec<DrawResult>) -> Self {
        assert!(!results.is_empty(), "FixedSampler needs at least one result");
        Self { results, next: 0 }
    }
}

impl DrawSampler for FixedSampler {
    fn sample(&mut self, k: usize, _n: u32) -> DrawResult {
        let result = self.results[self.next % self.results.len()].clone();
        self.next += 1;
        debug_assert_eq!(result.len(), k, "scripted result length mismatch");
        result
    }
}
