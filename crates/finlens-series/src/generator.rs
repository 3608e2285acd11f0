//! Random-walk OHLCV generator.

use std::ops::Range;

use chrono::{Local, NaiveDateTime};
use finlens_types::{PricePoint, Result, Series, SeriesRequest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::RangePolicy;

/// Per-sample volatility as a fraction of the current base price.
pub const VOLATILITY: f64 = 0.02;

/// Range the starting base price is drawn from.
pub const BASE_PRICE_RANGE: Range<f64> = 150.0..200.0;

/// Range each sample's volume is drawn from.
pub const VOLUME_RANGE: Range<u64> = 100_000..1_000_000;

/// Floor for the walk's base price, keeping every price positive.
const MIN_BASE_PRICE: f64 = 1.0;

/// Synthetic series generator.
///
/// The random source is injected so tests can seed it. Generated values do
/// not depend on the requested symbol, which only labels the series.
#[derive(Debug)]
pub struct SeriesGenerator<R = StdRng> {
    rng: R,
}

impl SeriesGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Creates a reproducible generator.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SeriesGenerator<R> {
    /// Creates a generator over the given random source.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a series anchored at the current local time.
    ///
    /// # Errors
    ///
    /// Returns an error if the range window cannot be placed on the calendar.
    pub fn generate(&mut self, request: &SeriesRequest) -> Result<Series> {
        self.generate_at(request, Local::now().naive_local())
    }

    /// Generates a series anchored at `now`.
    ///
    /// The first sample opens at a base price drawn from
    /// [`BASE_PRICE_RANGE`]. Each later sample opens at the previous close
    /// moved by up to half of [`VOLATILITY`] in either direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the range window cannot be placed on the calendar.
    pub fn generate_at(&mut self, request: &SeriesRequest, now: NaiveDateTime) -> Result<Series> {
        let policy = RangePolicy::for_range(request.range);
        let times = policy.timestamps(now)?;

        let mut points: Vec<PricePoint> = Vec::with_capacity(policy.nominal_points);
        let mut base = self.rng.gen_range(BASE_PRICE_RANGE);

        for timestamp in times {
            let change = self.swing() * VOLATILITY * base;
            if let Some(prev) = points.last() {
                base = (prev.close + change).max(MIN_BASE_PRICE);
            }
            points.push(self.sample(&policy, timestamp, base));
        }

        debug!(
            symbol = %request.symbol,
            range = %request.range,
            points = points.len(),
            "generated synthetic series"
        );

        Ok(Series::new(request.symbol.clone(), request.range, points))
    }

    /// Builds one sample opening at `base`.
    fn sample(&mut self, policy: &RangePolicy, timestamp: NaiveDateTime, base: f64) -> PricePoint {
        let open = base;
        let close = base + self.swing() * VOLATILITY * base;
        let high = open.max(close) + self.unit() * VOLATILITY * base;
        let low = open.min(close) - self.unit() * VOLATILITY * base;
        let volume = self.rng.gen_range(VOLUME_RANGE);

        PricePoint::new(
            timestamp,
            policy.label(timestamp),
            round_cents(open),
            round_cents(high),
            round_cents(low),
            round_cents(close),
            volume,
        )
    }

    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Uniform draw in `[-0.5, 0.5)`.
    fn swing(&mut self) -> f64 {
        self.unit() - 0.5
    }
}

/// Rounds a price to cents. Monotone, so wick ordering survives.
fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
