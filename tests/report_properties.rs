//! Property tests for the sales report pipeline
//!
//! Checks the report invariants over arbitrary generated datasets,
//! including records that reference unknown sellers and unknown SKUs.

use proptest::prelude::*;
use rust_decimal::Decimal;
use sales_report_engine::types::{LineItem, Product, PurchaseRecord, SalesData, Seller};
use sales_report_engine::{analyze_sales_data, AnalyzeOptions};

/// Generated line item: (product index, quantity, sale price in cents,
/// discount percent). Product indexes may point past the catalog to
/// produce unknown SKUs.
type RawItem = (usize, u32, i64, i64);

fn build_data(
    seller_count: usize,
    product_count: usize,
    raw_records: Vec<(usize, Vec<RawItem>)>,
) -> SalesData {
    SalesData {
        sellers: (0..seller_count)
            .map(|n| Seller {
                id: format!("seller-{}", n),
                first_name: "Seller".to_string(),
                last_name: format!("{}", n),
            })
            .collect(),
        products: (0..product_count)
            .map(|n| Product {
                sku: format!("sku-{}", n),
                purchase_price: Decimal::new(500 + 25 * n as i64, 2),
            })
            .collect(),
        purchase_records: raw_records
            .into_iter()
            .map(|(seller_index, items)| PurchaseRecord {
                // Indexes at or past seller_count reference unknown sellers
                seller_id: format!("seller-{}", seller_index),
                items: items
                    .into_iter()
                    .map(|(product_index, quantity, price_cents, discount)| LineItem {
                        sku: format!("sku-{}", product_index),
                        quantity,
                        sale_price: Decimal::new(price_cents, 2),
                        discount: Decimal::new(discount, 0),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn arb_data() -> impl Strategy<Value = SalesData> {
    (1usize..8, 1usize..10).prop_flat_map(|(seller_count, product_count)| {
        let records = prop::collection::vec(
            (
                0usize..seller_count + 2,
                prop::collection::vec(
                    (0usize..product_count + 2, 0u32..20, 0i64..100_000, 0i64..=100),
                    0..6,
                ),
            ),
            1..12,
        );
        records.prop_map(move |raw_records| build_data(seller_count, product_count, raw_records))
    })
}

proptest! {
    #[test]
    fn prop_row_count_equals_seller_count(data in arb_data()) {
        let report = analyze_sales_data(&data, AnalyzeOptions::default()).unwrap();
        prop_assert_eq!(report.rows.len(), data.sellers.len());
    }

    #[test]
    fn prop_rows_are_non_increasing_by_profit(data in arb_data()) {
        let report = analyze_sales_data(&data, AnalyzeOptions::default()).unwrap();
        prop_assert!(report
            .rows
            .windows(2)
            .all(|pair| pair[0].profit >= pair[1].profit));
    }

    #[test]
    fn prop_every_input_seller_appears_exactly_once(data in arb_data()) {
        let report = analyze_sales_data(&data, AnalyzeOptions::default()).unwrap();
        let mut reported: Vec<&str> =
            report.rows.iter().map(|row| row.seller_id.as_str()).collect();
        let mut expected: Vec<&str> =
            data.sellers.iter().map(|seller| seller.id.as_str()).collect();
        reported.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(reported, expected);
    }

    #[test]
    fn prop_top_products_capped_and_sorted(data in arb_data()) {
        let report = analyze_sales_data(&data, AnalyzeOptions::default()).unwrap();
        for row in &report.rows {
            prop_assert!(row.top_products.len() <= 10);
            prop_assert!(row
                .top_products
                .windows(2)
                .all(|pair| pair[0].quantity >= pair[1].quantity));
        }
    }

    #[test]
    fn prop_monetary_fields_have_at_most_two_decimals(data in arb_data()) {
        let report = analyze_sales_data(&data, AnalyzeOptions::default()).unwrap();
        for row in &report.rows {
            prop_assert!(row.revenue.scale() <= 2);
            prop_assert!(row.profit.scale() <= 2);
            prop_assert!(row.bonus.scale() <= 2);
        }
    }

    #[test]
    fn prop_analysis_is_deterministic(data in arb_data()) {
        let first = analyze_sales_data(&data, AnalyzeOptions::default()).unwrap();
        let second = analyze_sales_data(&data, AnalyzeOptions::default()).unwrap();
        prop_assert_eq!(first, second);
    }
}
