//! # Monthly Reporting
//!
//! Read-only aggregation over the sales ledger.
//!
//! The aggregator scans a slice of committed sales, keeps those whose
//! creation date falls in the requested calendar month, and derives revenue,
//! sale count, average ticket, a per-product ranking, and a per-day
//! breakdown. It never caches and never mutates; every call recomputes from
//! the slice it is given.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Sale;

// =============================================================================
// Report Types
// =============================================================================

/// Per-product sales ranking entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSales {
    pub product_id: String,
    pub product_name: String,
    pub quantity_sold: i64,
    pub revenue_cents: i64,
}

impl ProductSales {
    /// Revenue as Money.
    #[inline]
    pub fn revenue(&self) -> Money {
        Money::from_cents(self.revenue_cents)
    }
}

/// One calendar day's sales.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub count: usize,
    pub revenue_cents: i64,
}

/// Aggregated figures for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Calendar month, 1-12.
    pub month: u32,
    pub year: i32,

    /// Sum of totals of every sale in the month, in centavos.
    pub revenue_cents: i64,

    /// Number of sales in the month.
    pub count: usize,

    /// `revenue / count`, zero when the month had no sales.
    pub average_ticket_cents: i64,

    /// Products ordered by quantity sold (ties broken by name).
    pub top_products: Vec<ProductSales>,

    /// Per-day figures, in date order.
    pub daily_sales: Vec<DailySales>,
}

impl MonthlyReport {
    /// Revenue as Money.
    #[inline]
    pub fn revenue(&self) -> Money {
        Money::from_cents(self.revenue_cents)
    }

    /// Average ticket as Money.
    #[inline]
    pub fn average_ticket(&self) -> Money {
        Money::from_cents(self.average_ticket_cents)
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Builds the report for one calendar month (`month` is 1-12).
pub fn monthly_report(sales: &[Sale], month: u32, year: i32) -> MonthlyReport {
    let matching: Vec<&Sale> = sales
        .iter()
        .filter(|sale| sale.created_at.month() == month && sale.created_at.year() == year)
        .collect();

    let revenue_cents: i64 = matching.iter().map(|sale| sale.total_cents).sum();
    let count = matching.len();
    let average_ticket_cents = if count == 0 {
        0
    } else {
        revenue_cents / count as i64
    };

    MonthlyReport {
        month,
        year,
        revenue_cents,
        count,
        average_ticket_cents,
        top_products: rank_products(&matching),
        daily_sales: group_by_day(&matching),
    }
}

/// Aggregates line quantities and revenue per product, most-sold first.
fn rank_products(sales: &[&Sale]) -> Vec<ProductSales> {
    let mut by_product: BTreeMap<String, ProductSales> = BTreeMap::new();

    for sale in sales {
        for line in &sale.items {
            let entry = by_product
                .entry(line.product_id.clone())
                .or_insert_with(|| ProductSales {
                    product_id: line.product_id.clone(),
                    product_name: line.product_name.clone(),
                    quantity_sold: 0,
                    revenue_cents: 0,
                });
            entry.quantity_sold += line.quantity;
            entry.revenue_cents += line.total_cents;
        }
    }

    let mut ranking: Vec<ProductSales> = by_product.into_values().collect();
    ranking.sort_by(|a, b| {
        b.quantity_sold
            .cmp(&a.quantity_sold)
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
    ranking
}

/// Buckets sales by calendar day, in date order.
fn group_by_day(sales: &[&Sale]) -> Vec<DailySales> {
    let mut by_day: BTreeMap<NaiveDate, (usize, i64)> = BTreeMap::new();

    for sale in sales {
        let bucket = by_day.entry(sale.created_at.date_naive()).or_insert((0, 0));
        bucket.0 += 1;
        bucket.1 += sale.total_cents;
    }

    by_day
        .into_iter()
        .map(|(date, (count, revenue_cents))| DailySales {
            date,
            count,
            revenue_cents,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PaymentMethod, SaleLine};
    use chrono::{TimeZone, Utc};

    fn sale_on(
        year: i32,
        month: u32,
        day: u32,
        total_cents: i64,
        lines: Vec<(&str, &str, i64, i64)>,
    ) -> Sale {
        Sale {
            id: uuid::Uuid::new_v4().to_string(),
            items: lines
                .into_iter()
                .map(|(id, name, qty, unit)| SaleLine {
                    product_id: id.to_string(),
                    product_name: name.to_string(),
                    quantity: qty,
                    unit_price_cents: unit,
                    total_cents: qty * unit,
                })
                .collect(),
            total_cents,
            payment_method: PaymentMethod::Cash,
            employee_id: "op-1".to_string(),
            created_at: Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_filters_by_calendar_month() {
        let sales = vec![
            sale_on(2024, 3, 1, 1000, vec![]),
            sale_on(2024, 3, 31, 2000, vec![]),
            sale_on(2024, 4, 1, 4000, vec![]),
            sale_on(2023, 3, 15, 8000, vec![]),
        ];

        let report = monthly_report(&sales, 3, 2024);

        assert_eq!(report.count, 2);
        assert_eq!(report.revenue(), Money::from_cents(3000));
        assert_eq!(report.average_ticket(), Money::from_cents(1500));
    }

    #[test]
    fn test_empty_month_has_zero_average() {
        let sales = vec![sale_on(2024, 3, 1, 1000, vec![])];

        let report = monthly_report(&sales, 7, 2024);

        assert_eq!(report.count, 0);
        assert_eq!(report.revenue(), Money::zero());
        assert_eq!(report.average_ticket(), Money::zero());
        assert!(report.top_products.is_empty());
        assert!(report.daily_sales.is_empty());
    }

    #[test]
    fn test_top_products_ranked_by_quantity() {
        let sales = vec![
            sale_on(2024, 5, 2, 3000, vec![("p1", "Coca-Cola 2L", 3, 1000)]),
            sale_on(
                2024,
                5,
                3,
                5480,
                vec![("p2", "Arroz 5kg", 2, 2490), ("p1", "Coca-Cola 2L", 1, 500)],
            ),
        ];

        let report = monthly_report(&sales, 5, 2024);

        assert_eq!(report.top_products.len(), 2);
        assert_eq!(report.top_products[0].product_id, "p1");
        assert_eq!(report.top_products[0].quantity_sold, 4);
        assert_eq!(report.top_products[0].revenue_cents, 3 * 1000 + 500);
        assert_eq!(report.top_products[1].product_id, "p2");
        assert_eq!(report.top_products[1].quantity_sold, 2);
    }

    #[test]
    fn test_daily_sales_grouped_in_date_order() {
        let sales = vec![
            sale_on(2024, 5, 20, 2000, vec![]),
            sale_on(2024, 5, 2, 1000, vec![]),
            sale_on(2024, 5, 2, 500, vec![]),
        ];

        let report = monthly_report(&sales, 5, 2024);

        assert_eq!(report.daily_sales.len(), 2);
        assert_eq!(
            report.daily_sales[0].date,
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
        );
        assert_eq!(report.daily_sales[0].count, 2);
        assert_eq!(report.daily_sales[0].revenue_cents, 1500);
        assert_eq!(report.daily_sales[1].count, 1);
        assert_eq!(report.daily_sales[1].revenue_cents, 2000);
    }

    #[test]
    fn test_revenue_is_sum_of_matching_totals_only() {
        let sales = vec![
            sale_on(2024, 6, 1, 1234, vec![]),
            sale_on(2024, 6, 30, 4321, vec![]),
            sale_on(2024, 7, 1, 9999, vec![]),
        ];

        let report = monthly_report(&sales, 6, 2024);
        assert_eq!(report.revenue_cents, 5555);
    }
}
