use serde::Deserialize;

/// The one-time, immutable metrics payload driving all rendering.
///
/// A snapshot is either wholly absent (before acquisition resolves) or
/// wholly present; the optional array fields model endpoints that omit a
/// section entirely, not partially-loaded state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricsSnapshot {
    pub total_sales: u64,
    pub total_revenue: f64,
    pub monthly_sales: Option<Vec<MonthlySales>>,
    pub top_products: Option<Vec<ProductSales>>,
    pub order_status: Option<Vec<StatusCount>>,
    pub inventory_levels: Option<Vec<StockLevel>>,
    pub revenue_by_category: Option<Vec<CategoryRevenue>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductSales {
    pub name: String,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockLevel {
    pub product: String,
    pub stock: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryRevenue {
    pub quarter: String,
    pub electronics: f64,
    pub clothing: f64,
    pub accessories: f64,
}

impl MetricsSnapshot {
    /// The fixed dataset served by the mock source.
    pub fn mock() -> Self {
        fn monthly(month: &str, sales: f64) -> MonthlySales {
            MonthlySales {
                month: month.to_string(),
                sales,
            }
        }
        fn product(name: &str, sales: f64) -> ProductSales {
            ProductSales {
                name: name.to_string(),
                sales,
            }
        }
        fn status(status: &str, count: f64) -> StatusCount {
            StatusCount {
                status: status.to_string(),
                count,
            }
        }
        fn stock(product: &str, stock: f64) -> StockLevel {
            StockLevel {
                product: product.to_string(),
                stock,
            }
        }
        fn quarter(quarter: &str, electronics: f64, clothing: f64, accessories: f64) -> CategoryRevenue {
            CategoryRevenue {
                quarter: quarter.to_string(),
                electronics,
                clothing,
                accessories,
            }
        }

        Self {
            total_sales: 1200,
            total_revenue: 45000.0,
            monthly_sales: Some(vec![
                monthly("January", 100.0),
                monthly("February", 150.0),
                monthly("March", 200.0),
                monthly("April", 250.0),
                monthly("May", 300.0),
                monthly("June", 400.0),
                monthly("July", 500.0),
                monthly("August", 450.0),
                monthly("September", 350.0),
                monthly("October", 300.0),
                monthly("November", 200.0),
                monthly("December", 150.0),
            ]),
            top_products: Some(vec![
                product("Laptop", 300.0),
                product("Smartphone", 250.0),
                product("Headphones", 200.0),
                product("Tablet", 150.0),
                product("Smartwatch", 100.0),
            ]),
            order_status: Some(vec![
                status("Pending", 50.0),
                status("Shipped", 100.0),
                status("Delivered", 200.0),
                status("Cancelled", 30.0),
            ]),
            inventory_levels: Some(vec![
                stock("Laptop", 80.0),
                stock("Smartphone", 120.0),
                stock("Headphones", 200.0),
                stock("Tablet", 50.0),
                stock("Smartwatch", 30.0),
            ]),
            revenue_by_category: Some(vec![
                quarter("Q1", 10000.0, 5000.0, 3000.0),
                quarter("Q2", 12000.0, 6000.0, 4000.0),
                quarter("Q3", 15000.0, 7000.0, 5000.0),
                quarter("Q4", 18000.0, 8000.0, 6000.0),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_dataset_shape() {
        let snapshot = MetricsSnapshot::mock();
        assert_eq!(snapshot.total_sales, 1200);
        assert_eq!(snapshot.total_revenue, 45000.0);
        let months = snapshot.monthly_sales.as_ref().unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].month, "January");
        assert_eq!(months[11].month, "December");
        assert_eq!(snapshot.top_products.as_ref().unwrap().len(), 5);
        assert_eq!(snapshot.order_status.as_ref().unwrap().len(), 4);
        assert_eq!(snapshot.inventory_levels.as_ref().unwrap().len(), 5);
        assert_eq!(snapshot.revenue_by_category.as_ref().unwrap().len(), 4);
    }

    #[test]
    fn deserializes_summary_only_payload() {
        let snapshot: MetricsSnapshot =
            serde_json::from_str(r#"{"total_sales": 10, "total_revenue": 500}"#).unwrap();
        assert_eq!(snapshot.total_sales, 10);
        assert_eq!(snapshot.total_revenue, 500.0);
        assert!(snapshot.monthly_sales.is_none());
        assert!(snapshot.top_products.is_none());
        assert!(snapshot.order_status.is_none());
        assert!(snapshot.inventory_levels.is_none());
        assert!(snapshot.revenue_by_category.is_none());
    }

    #[test]
    fn rejects_payload_without_summary_fields() {
        let result = serde_json::from_str::<MetricsSnapshot>(r#"{"monthly_sales": []}"#);
        assert!(result.is_err());
    }
}
