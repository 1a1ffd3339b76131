use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Deterministic source of demo records.
///
/// Every draw comes from one seeded [`StdRng`] and every timestamp is an
/// offset before `anchor`, so two generators built with the same seed and
/// anchor produce identical output.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    pub(crate) rng: StdRng,
    pub(crate) anchor: DateTime<Utc>,
    seed: u64,
}

impl MockGenerator {
    #[must_use]
    pub fn seeded(seed: u64, anchor: DateTime<Utc>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            anchor,
            seed,
        }
    }

    /// Generator with a fresh random seed. Call [`MockGenerator::seed`] to
    /// replay the run later.
    #[must_use]
    pub fn from_entropy(anchor: DateTime<Utc>) -> Self {
        let seed: u64 = rand::random();
        tracing::debug!(seed, "mock generator seeded from entropy");
        Self::seeded(seed, anchor)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    pub(crate) fn id(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }

    pub(crate) fn pick<T: Copy>(&mut self, options: &[T]) -> T {
        options[self.rng.random_range(0..options.len())]
    }

    pub(crate) fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    /// Up to `max` distinct entries of `options`, possibly none.
    pub(crate) fn pick_some(&mut self, options: &[&str], max: usize) -> Vec<String> {
        let count = self.rng.random_range(0..=max.min(options.len()));
        let mut pool = options.to_vec();
        pool.shuffle(&mut self.rng);
        pool.into_iter().take(count).map(str::to_string).collect()
    }

    pub(crate) fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }

    pub(crate) fn int(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }

    pub(crate) fn float(&mut self, low: f32, high: f32) -> f32 {
        let raw = self.rng.random_range(low..=high);
        (raw * 10.0).round() / 10.0
    }

    /// Cents value in `[low, high]` dollars.
    pub(crate) fn money(&mut self, low: i64, high: i64) -> rust_decimal::Decimal {
        let cents = self.rng.random_range(low * 100..=high * 100);
        rust_decimal::Decimal::new(cents, 2)
    }

    /// A moment within the `days` before the anchor.
    pub(crate) fn within_days(&mut self, days: i64) -> DateTime<Utc> {
        let minutes = self.rng.random_range(0..days * 24 * 60);
        self.anchor - TimeDelta::minutes(minutes)
    }

    /// A moment between `from` and the anchor.
    pub(crate) fn between(&mut self, from: DateTime<Utc>) -> DateTime<Utc> {
        let span = (self.anchor - from).num_minutes().max(0);
        from + TimeDelta::minutes(self.rng.random_range(0..=span))
    }
}

/// Fill `{key}` placeholders in a template.
pub(crate) fn fill(template: &str, values: &[(&str, String)]) -> String {
    values.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}
