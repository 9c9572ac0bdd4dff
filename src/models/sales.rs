//! Sales data model
//!
//! Monthly sales records, their yearly aggregates, and the fixed collection
//! of years shown by the dashboard. Everything here is immutable once built.

use serde::{Deserialize, Serialize};

use super::month::Month;
use crate::error::{DashboardError, DashboardResult};

/// One calendar month's figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Month this record covers
    pub month: Month,
    /// Gross sales amount in whole currency units
    pub sales: u64,
    /// Profit in whole currency units (a fraction of sales)
    pub profit: u64,
    /// Number of orders placed
    pub orders: u64,
}

impl SalesRecord {
    /// Create a new record
    pub fn new(month: Month, sales: u64, profit: u64, orders: u64) -> Self {
        Self {
            month,
            sales,
            profit,
            orders,
        }
    }
}

/// Summed figures over a year's records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalesTotals {
    pub total_sales: u64,
    pub total_profit: u64,
    pub total_orders: u64,
}

impl SalesTotals {
    /// Sum sales, profit and orders over the given records
    ///
    /// Fails instead of wrapping when a sum does not fit in `u64`.
    pub fn aggregate(data: &[SalesRecord]) -> DashboardResult<Self> {
        data.iter().try_fold(Self::default(), |acc, record| {
            let overflow = |field: &str| {
                DashboardError::Validation(format!(
                    "Total {} overflows at {}",
                    field, record.month
                ))
            };
            Ok(Self {
                total_sales: acc
                    .total_sales
                    .checked_add(record.sales)
                    .ok_or_else(|| overflow("sales"))?,
                total_profit: acc
                    .total_profit
                    .checked_add(record.profit)
                    .ok_or_else(|| overflow("profit"))?,
                total_orders: acc
                    .total_orders
                    .checked_add(record.orders)
                    .ok_or_else(|| overflow("orders"))?,
            })
        })
    }
}

/// One year's data set with its precomputed totals
///
/// Totals are computed once in [`YearlySales::new`]; the fields are private so
/// they can never drift from `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlySales {
    year: i32,
    data: Vec<SalesRecord>,
    #[serde(flatten)]
    totals: SalesTotals,
}

impl YearlySales {
    /// Build a year from exactly twelve records in calendar order
    pub fn new(year: i32, data: Vec<SalesRecord>) -> DashboardResult<Self> {
        if data.len() != Month::ALL.len() {
            return Err(DashboardError::Validation(format!(
                "Year {} has {} monthly records, expected {}",
                year,
                data.len(),
                Month::ALL.len()
            )));
        }

        if let Some((record, expected)) = data
            .iter()
            .zip(Month::ALL.iter())
            .find(|(record, expected)| record.month != **expected)
        {
            return Err(DashboardError::Validation(format!(
                "Year {} is out of calendar order: found {} where {} was expected",
                year, record.month, expected
            )));
        }

        let totals = SalesTotals::aggregate(&data)?;
        Ok(Self { year, data, totals })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Monthly records in calendar order
    pub fn data(&self) -> &[SalesRecord] {
        &self.data
    }

    pub fn totals(&self) -> SalesTotals {
        self.totals
    }

    pub fn total_sales(&self) -> u64 {
        self.totals.total_sales
    }

    pub fn total_profit(&self) -> u64 {
        self.totals.total_profit
    }

    pub fn total_orders(&self) -> u64 {
        self.totals.total_orders
    }
}

/// The fixed, ordered set of years available to the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SalesCollection {
    years: Vec<YearlySales>,
}

impl SalesCollection {
    /// Build a collection, keeping the given order
    ///
    /// Fails on an empty list or when two entries share a year.
    pub fn new(years: Vec<YearlySales>) -> DashboardResult<Self> {
        if years.is_empty() {
            return Err(DashboardError::Validation(
                "A sales collection needs at least one year".into(),
            ));
        }

        for (i, entry) in years.iter().enumerate() {
            if years[..i].iter().any(|other| other.year == entry.year) {
                return Err(DashboardError::duplicate_year(entry.year));
            }
        }

        Ok(Self { years })
    }

    /// All years in collection order
    pub fn years(&self) -> &[YearlySales] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// The most recent year in the collection
    pub fn latest(&self) -> &YearlySales {
        // Non-empty by construction
        self.years
            .iter()
            .max_by_key(|y| y.year)
            .unwrap_or(&self.years[0])
    }

    /// The earliest year in the collection
    pub fn earliest(&self) -> &YearlySales {
        self.years
            .iter()
            .min_by_key(|y| y.year)
            .unwrap_or(&self.years[0])
    }

    /// Look up a year
    pub fn find(&self, year: i32) -> Option<&YearlySales> {
        self.years.iter().find(|y| y.year == year)
    }

    /// Look up a year, falling back to the most recent one
    pub fn get_or_latest(&self, year: i32) -> &YearlySales {
        self.find(year).unwrap_or_else(|| self.latest())
    }

    /// The entry immediately preceding `year` (greatest year strictly below it)
    pub fn previous(&self, year: i32) -> Option<&YearlySales> {
        self.years
            .iter()
            .filter(|y| y.year < year)
            .max_by_key(|y| y.year)
    }

    /// Position of a year in collection order
    pub fn position(&self, year: i32) -> Option<usize> {
        self.years.iter().position(|y| y.year == year)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Twelve records with the given sales per month, profit 20%, orders sales/100
    pub(crate) fn flat_year(year: i32, sales: u64) -> YearlySales {
        let data = Month::ALL
            .iter()
            .map(|&m| SalesRecord::new(m, sales, sales / 5, sales / 100))
            .collect();
        YearlySales::new(year, data).unwrap()
    }

    #[test]
    fn test_totals_equal_sums() {
        let data: Vec<SalesRecord> = Month::ALL
            .iter()
            .enumerate()
            .map(|(i, &m)| SalesRecord::new(m, 1000 + i as u64, 200 + i as u64, 10 + i as u64))
            .collect();
        let year = YearlySales::new(2024, data.clone()).unwrap();

        assert_eq!(year.total_sales(), data.iter().map(|r| r.sales).sum::<u64>());
        assert_eq!(year.total_profit(), data.iter().map(|r| r.profit).sum::<u64>());
        assert_eq!(year.total_orders(), data.iter().map(|r| r.orders).sum::<u64>());
        assert_eq!(year.total_sales(), 12 * 1000 + 66);
    }

    #[test]
    fn test_rejects_totals_that_overflow() {
        let data: Vec<SalesRecord> = Month::ALL
            .iter()
            .map(|&m| SalesRecord::new(m, u64::MAX / 2, 1, 1))
            .collect();
        let err = YearlySales::new(2024, data).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Total sales overflows at Mar"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let data = vec![SalesRecord::new(Month::Jan, 1, 0, 0)];
        let err = YearlySales::new(2024, data).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_rejects_out_of_order_months() {
        let mut data: Vec<SalesRecord> = Month::ALL
            .iter()
            .map(|&m| SalesRecord::new(m, 10, 1, 1))
            .collect();
        data.swap(0, 1);
        assert!(YearlySales::new(2024, data).is_err());
    }

    #[test]
    fn test_collection_rejects_duplicates_and_empty() {
        let err = SalesCollection::new(vec![flat_year(2024, 10), flat_year(2024, 20)]).unwrap_err();
        assert!(matches!(err, DashboardError::Duplicate { .. }));
        assert!(SalesCollection::new(Vec::new()).is_err());
    }

    #[test]
    fn test_collection_lookup() {
        let collection = SalesCollection::new(vec![
            flat_year(2024, 300),
            flat_year(2023, 200),
            flat_year(2022, 100),
        ])
        .unwrap();

        assert_eq!(collection.latest().year(), 2024);
        assert_eq!(collection.earliest().year(), 2022);
        assert_eq!(collection.find(2023).map(|y| y.year()), Some(2023));
        assert!(collection.find(1999).is_none());
        assert_eq!(collection.get_or_latest(1999).year(), 2024);
        assert_eq!(collection.previous(2024).map(|y| y.year()), Some(2023));
        assert!(collection.previous(2022).is_none());
        assert_eq!(collection.position(2022), Some(2));
    }

    #[test]
    fn test_serialized_shape() {
        let year = flat_year(2023, 100);
        let value = serde_json::to_value(&year).unwrap();
        assert_eq!(value["year"], 2023);
        assert_eq!(value["total_sales"], 1200);
        assert_eq!(value["data"].as_array().map(|a| a.len()), Some(12));
        assert_eq!(value["data"][0]["month"], "Jan");
    }
}
