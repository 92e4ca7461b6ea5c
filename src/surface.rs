//! Instance-scoped chart surface registry.
//!
//! Each chart panel owns at most one bound chart at a time. Binding a panel
//! releases whatever was bound to it before, and the registry counts both
//! sides so teardown can be checked for balance (no leaked instances, no
//! double release).

use std::collections::HashMap;

use crate::charts::ChartData;

/// Identifies one of the five chart panels on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    SalesTrend,
    TopProducts,
    OrderStatus,
    Inventory,
    CategoryRevenue,
}

impl PanelId {
    /// All panels in display order.
    pub fn all() -> &'static [PanelId] {
        &[
            PanelId::SalesTrend,
            PanelId::TopProducts,
            PanelId::OrderStatus,
            PanelId::Inventory,
            PanelId::CategoryRevenue,
        ]
    }
}

/// Per-view registry of bound charts, owned by the app for its lifetime.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    bound: HashMap<PanelId, ChartData>,
    created: usize,
    released: usize,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a chart to a panel, releasing any prior binding first.
    pub fn bind(&mut self, id: PanelId, chart: ChartData) {
        if self.bound.remove(&id).is_some() {
            self.released += 1;
        }
        self.bound.insert(id, chart);
        self.created += 1;
    }

    pub fn get(&self, id: PanelId) -> Option<&ChartData> {
        self.bound.get(&id)
    }

    pub fn is_bound(&self, id: PanelId) -> bool {
        self.bound.contains_key(&id)
    }

    /// Bound panels in display order.
    pub fn bound_panels(&self) -> Vec<PanelId> {
        PanelId::all()
            .iter()
            .copied()
            .filter(|id| self.is_bound(*id))
            .collect()
    }

    /// Releases every bound chart. Safe to call more than once.
    pub fn release_all(&mut self) {
        self.released += self.bound.len();
        self.bound.clear();
    }

    pub fn created(&self) -> usize {
        self.created
    }

    pub fn released(&self) -> usize {
        self.released
    }

    /// True when nothing is bound and every creation has been released.
    pub fn is_balanced(&self) -> bool {
        self.bound.is_empty() && self.created == self.released
    }
}
