// src/domain/property.rs

use serde::{Deserialize, Serialize};

use super::filter::aggregate;
use super::tenant::TenantRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Active,
    Maintenance,
    Vacant,
}

/// A building in the landlord's portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    pub units: u32,
    pub occupied_units: u32,
    pub monthly_rent: f64,
    pub status: PropertyStatus,
}

/// Headline numbers on the landlord dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_units: u32,
    pub occupied_units: u32,
    /// Rounded to the nearest whole percent; 0 with no units.
    pub occupancy_percent: u32,
    /// Rent of tenants whose payments are current.
    pub monthly_revenue: f64,
    pub pending_maintenance: usize,
    pub unread_messages: usize,
}

impl PortfolioSummary {
    pub fn compute(
        properties: &[Property],
        tenants: &[TenantRecord],
        pending_maintenance: usize,
        unread_messages: usize,
    ) -> Self {
        let total_units: u32 = properties.iter().map(|p| p.units).sum();
        let occupied_units: u32 = properties.iter().map(|p| p.occupied_units).sum();
        let occupancy_percent = if total_units == 0 {
            0
        } else {
            (occupied_units as f64 / total_units as f64 * 100.0).round() as u32
        };

        Self {
            total_units,
            occupied_units,
            occupancy_percent,
            monthly_revenue: aggregate(tenants).total,
            pending_maintenance,
            unread_messages,
        }
    }
}
