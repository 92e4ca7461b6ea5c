//! Pure snapshot-to-chart mapping.
//!
//! One builder per panel, each a deterministic transformation of one
//! snapshot array into labels and series. Order is preserved everywhere:
//! the source array order is the x-axis order.

use ratatui::style::Color;

use crate::snapshot::{
    CategoryRevenue, MetricsSnapshot, MonthlySales, ProductSales, StatusCount, StockLevel,
};
use crate::surface::PanelId;

/// How a panel draws its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Smoothed filled line in the original; a braille line chart here.
    Line,
    Bar,
    /// Pie in the original; proportional colored ratio bars here.
    Distribution,
    /// Stacked bar in the original; one bar group per label here.
    GroupedBar,
}

#[derive(Debug, Clone)]
pub struct Series {
    pub name: &'static str,
    pub values: Vec<f64>,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct ChartData {
    pub kind: ChartKind,
    pub title: &'static str,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartData {
    /// Largest value across all series, for axis scaling.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

// Accent colors carried over from the original palette.
pub const SALES_COLOR: Color = Color::Rgb(59, 130, 246);
pub const PRODUCTS_COLOR: Color = Color::Rgb(75, 192, 192);
pub const INVENTORY_COLOR: Color = Color::Rgb(153, 102, 255);
pub const STATUS_PALETTE: [Color; 4] = [
    Color::Rgb(255, 99, 132),
    Color::Rgb(54, 162, 235),
    Color::Rgb(75, 192, 192),
    Color::Rgb(255, 206, 86),
];
pub const ELECTRONICS_COLOR: Color = Color::Rgb(255, 99, 132);
pub const CLOTHING_COLOR: Color = Color::Rgb(54, 162, 235);
pub const ACCESSORIES_COLOR: Color = Color::Rgb(75, 192, 192);

pub fn sales_trend(rows: &[MonthlySales]) -> ChartData {
    ChartData {
        kind: ChartKind::Line,
        title: "Sales Trends Over Time (2025)",
        labels: rows.iter().map(|r| r.month.clone()).collect(),
        series: vec![Series {
            name: "Sales ($)",
            values: rows.iter().map(|r| r.sales).collect(),
            color: SALES_COLOR,
        }],
    }
}

pub fn top_products(rows: &[ProductSales]) -> ChartData {
    ChartData {
        kind: ChartKind::Bar,
        title: "Top-Selling Products (2025)",
        labels: rows.iter().map(|r| r.name.clone()).collect(),
        series: vec![Series {
            name: "Units Sold",
            values: rows.iter().map(|r| r.sales).collect(),
            color: PRODUCTS_COLOR,
        }],
    }
}

pub fn order_status(rows: &[StatusCount]) -> ChartData {
    ChartData {
        kind: ChartKind::Distribution,
        title: "Order Status Distribution (2025)",
        labels: rows.iter().map(|r| r.status.clone()).collect(),
        series: vec![Series {
            name: "Orders",
            values: rows.iter().map(|r| r.count).collect(),
            color: STATUS_PALETTE[0],
        }],
    }
}

pub fn inventory_levels(rows: &[StockLevel]) -> ChartData {
    ChartData {
        kind: ChartKind::Bar,
        title: "Inventory Stock Levels (2025)",
        labels: rows.iter().map(|r| r.product.clone()).collect(),
        series: vec![Series {
            name: "Stock Level",
            values: rows.iter().map(|r| r.stock).collect(),
            color: INVENTORY_COLOR,
        }],
    }
}

pub fn revenue_by_category(rows: &[CategoryRevenue]) -> ChartData {
    ChartData {
        kind: ChartKind::GroupedBar,
        title: "Revenue by Product Category (2025)",
        labels: rows.iter().map(|r| r.quarter.clone()).collect(),
        series: vec![
            Series {
                name: "Electronics",
                values: rows.iter().map(|r| r.electronics).collect(),
                color: ELECTRONICS_COLOR,
            },
            Series {
                name: "Clothing",
                values: rows.iter().map(|r| r.clothing).collect(),
                color: CLOTHING_COLOR,
            },
            Series {
                name: "Accessories",
                values: rows.iter().map(|r| r.accessories).collect(),
                color: ACCESSORIES_COLOR,
            },
        ],
    }
}

/// Builds a chart for every array field present on the snapshot. Absent
/// fields produce no entry at all, so their panels are never bound.
pub fn build_all(snapshot: &MetricsSnapshot) -> Vec<(PanelId, ChartData)> {
    let mut charts = Vec::new();
    if let Some(rows) = &snapshot.monthly_sales {
        charts.push((PanelId::SalesTrend, sales_trend(rows)));
    }
    if let Some(rows) = &snapshot.top_products {
        charts.push((PanelId::TopProducts, top_products(rows)));
    }
    if let Some(rows) = &snapshot.order_status {
        charts.push((PanelId::OrderStatus, order_status(rows)));
    }
    if let Some(rows) = &snapshot.inventory_levels {
        charts.push((PanelId::Inventory, inventory_levels(rows)));
    }
    if let Some(rows) = &snapshot.revenue_by_category {
        charts.push((PanelId::CategoryRevenue, revenue_by_category(rows)));
    }
    charts
}
