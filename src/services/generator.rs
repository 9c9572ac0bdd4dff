//! Synthetic sales data generation
//!
//! Produces twelve months of figures per year following a fixed retail
//! seasonality curve, with independent random jitter per month. The random
//! source is injectable so a seed reproduces a data set exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{Month, SalesCollection, SalesRecord, YearlySales};

/// Per-month scaling, low in Q1/Q2 and peaking in Q4
pub const SEASONAL_MULTIPLIERS: [f64; 12] = [
    0.8, 0.75, 0.9, 0.95, 1.0, 1.05, 1.1, 1.08, 1.0, 1.15, 1.25, 1.4,
];

/// Bounds of the uniform per-month sales jitter (upper exclusive)
pub const JITTER_RANGE: (f64, f64) = (0.9, 1.1);

/// Bounds of the profit share of sales (upper exclusive)
pub const PROFIT_MARGIN_RANGE: (f64, f64) = (0.15, 0.25);

/// Bounds of the average order size used to derive order counts (upper exclusive)
pub const ORDER_SIZE_RANGE: (f64, f64) = (80.0, 120.0);

/// Largest base amount whose yearly totals are guaranteed to fit in `u64`
pub const MAX_BASE_AMOUNT: f64 = 1e15;

/// A year to generate and its nominal sales scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearPlan {
    pub year: i32,
    pub base_amount: f64,
}

impl YearPlan {
    pub fn new(year: i32, base_amount: f64) -> Self {
        Self { year, base_amount }
    }
}

/// Generates sales data from a random source
pub struct SalesGenerator<R: Rng> {
    rng: R,
}

impl SalesGenerator<Pcg64Mcg> {
    /// Reproducible generator for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg64Mcg::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(Pcg64Mcg::from_entropy())
    }
}

impl<R: Rng> SalesGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate twelve monthly records for a year
    ///
    /// `year` is only a label for logging; the figures depend on
    /// `base_amount` and the random source.
    pub fn generate(&mut self, year: i32, base_amount: f64) -> Vec<SalesRecord> {
        let records: Vec<SalesRecord> = Month::ALL
            .iter()
            .zip(SEASONAL_MULTIPLIERS.iter())
            .map(|(&month, &seasonal)| {
                let jitter = sample_between(&mut self.rng, JITTER_RANGE);
                let sales = round_amount(base_amount * seasonal * jitter);

                let margin = sample_between(&mut self.rng, PROFIT_MARGIN_RANGE);
                let profit = round_amount(sales as f64 * margin);

                let order_size = sample_between(&mut self.rng, ORDER_SIZE_RANGE);
                let orders = round_amount(sales as f64 / order_size);

                SalesRecord::new(month, sales, profit, orders)
            })
            .collect();

        log::debug!(
            "generated {} monthly records for {} (base {})",
            records.len(),
            year,
            base_amount
        );

        records
    }

    /// Generate a year and compute its totals
    ///
    /// Base amounts above [`MAX_BASE_AMOUNT`] are rejected, since their totals
    /// could not be represented.
    pub fn generate_year(&mut self, year: i32, base_amount: f64) -> DashboardResult<YearlySales> {
        if base_amount > MAX_BASE_AMOUNT {
            return Err(DashboardError::Validation(format!(
                "Base amount {} for {} exceeds the maximum of {}",
                base_amount, year, MAX_BASE_AMOUNT
            )));
        }
        let data = self.generate(year, base_amount);
        YearlySales::new(year, data)
    }

    /// Generate every planned year, keeping the plan's order
    pub fn generate_collection(&mut self, plan: &[YearPlan]) -> DashboardResult<SalesCollection> {
        let years = plan
            .iter()
            .map(|p| self.generate_year(p.year, p.base_amount))
            .collect::<DashboardResult<Vec<_>>>()?;

        let collection = SalesCollection::new(years)?;
        log::info!("generated sales data for {} years", collection.len());
        Ok(collection)
    }
}

/// Uniform draw from the half-open range `[low, high)`
fn sample_between<R: Rng>(rng: &mut R, (low, high): (f64, f64)) -> f64 {
    rng.gen_range(low..high)
}

/// Round to the nearest whole unit. Negative or NaN inputs saturate to 0.
fn round_amount(value: f64) -> u64 {
    value.round() as u64
}
