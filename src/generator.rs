//! Random order generation.
//!
//! [`OrderGenerator`] is an iterator that yields exactly `count` [`OrderRecord`]s
//! with ids `1..=count` in order. Each record gets:
//! - a side drawn with a fair coin (`Buy` / `Sell`)
//! - a price drawn uniformly from [`GeneratorConfig::price`] (default `[1, 255]`)
//! - a quantity drawn uniformly from [`GeneratorConfig::quantity`] (default `[1, 65535]`)
//!
//! The default constructors use the thread-local, OS-seeded RNG, so two runs never
//! produce the same file. [`OrderGenerator::with_config`] accepts any [`Rng`], which
//! is how the tests pin a seed.

use std::ops::RangeInclusive;

use rand::{Rng, rngs::ThreadRng};
use tracing::debug;

use crate::{
    errors::{GeneratorError, GeneratorResult},
    orders::{OrderRecord, Side},
};

pub const DEFAULT_PRICE: RangeInclusive<u64> = 1..=255;
pub const DEFAULT_QUANTITY: RangeInclusive<u64> = 1..=65535;

/// Sampling bounds for generated orders. Both ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub price: RangeInclusive<u64>,
    pub quantity: RangeInclusive<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            price: DEFAULT_PRICE,
            quantity: DEFAULT_QUANTITY,
        }
    }
}

impl GeneratorConfig {
    /// Rejects empty ranges and ranges that would allow a zero price or quantity.
    pub fn validate(&self) -> GeneratorResult<()> {
        check_range("price", &self.price)?;
        check_range("quantity", &self.quantity)
    }
}

fn check_range(field: &'static str, range: &RangeInclusive<u64>) -> GeneratorResult<()> {
    let (min, max) = (*range.start(), *range.end());
    if min == 0 || min > max {
        return Err(GeneratorError::InvalidRange { field, min, max });
    }
    Ok(())
}

/// Yields `count` random orders with sequential ids starting at 1.
pub struct OrderGenerator<R: Rng = ThreadRng> {
    config: GeneratorConfig,
    rng: R,
    next_id: u64,
    remaining: u64,
}

impl OrderGenerator<ThreadRng> {
    /// Generator with the default bounds, backed by the thread RNG.
    pub fn new(count: u64) -> Self {
        debug!(count, "creating order generator with default bounds");
        OrderGenerator {
            config: GeneratorConfig::default(),
            rng: rand::rng(),
            next_id: 1,
            remaining: count,
        }
    }
}

impl<R: Rng> OrderGenerator<R> {
    pub fn with_config(config: GeneratorConfig, count: u64, rng: R) -> GeneratorResult<Self> {
        config.validate()?;
        debug!(count, ?config, "creating order generator");
        Ok(OrderGenerator {
            config,
            rng,
            next_id: 1,
            remaining: count,
        })
    }

    fn random_side(&mut self) -> Side {
        if self.rng.random_bool(0.5) {
            Side::Buy
        } else {
            Side::Sell
        }
    }
}

impl<R: Rng> Iterator for OrderGenerator<R> {
    type Item = OrderRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let side = self.random_side();
        // ranges were validated as non-empty, random_range cannot panic here
        let price = self.rng.random_range(self.config.price.clone());
        let quantity = self.rng.random_range(self.config.quantity.clone());
        let id = self.next_id;
        self.next_id += 1;

        Some(OrderRecord {
            side,
            id,
            price,
            quantity,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<R: Rng> ExactSizeIterator for OrderGenerator<R> {}

/// Collects `count` orders with the default bounds.
pub fn generate_orders(count: u64) -> Vec<OrderRecord> {
    OrderGenerator::new(count).collect()
}
