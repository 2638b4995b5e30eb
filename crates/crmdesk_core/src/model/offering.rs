//! Service offering model shown by the services catalog.

use crate::model::Amount;
use serde::{Deserialize, Serialize};

/// Catalog identifier such as `digital` or `service-3`.
pub type OfferingId = String;

/// Whether an offering is currently sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfferingStatus {
    Active,
    Inactive,
}

/// One service line the business sells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub id: OfferingId,
    /// Label matched against `Lead::service` and `Client::service`.
    pub name: String,
    pub description: String,
    pub base_price: Amount,
    /// Free-text engagement length, e.g. `3-6 months` or `Per Event`.
    pub duration: String,
    pub active_clients: u32,
    pub total_earnings: Amount,
    pub features: Vec<String>,
    pub status: OfferingStatus,
}

/// Offering fields supplied by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOffering {
    pub name: String,
    pub description: String,
    pub base_price: Amount,
    pub duration: String,
    pub features: Vec<String>,
    pub status: OfferingStatus,
}

impl NewOffering {
    /// Builds the catalog entry. New offerings start with no clients or
    /// earnings. Blank feature lines are dropped; the rest keep their text
    /// as entered.
    pub(crate) fn into_offering(self, id: OfferingId) -> ServiceOffering {
        let features = self
            .features
            .into_iter()
            .filter(|feature| !feature.trim().is_empty())
            .collect();

        ServiceOffering {
            id,
            name: self.name,
            description: self.description,
            base_price: self.base_price,
            duration: self.duration,
            active_clients: 0,
            total_earnings: 0,
            features,
            status: self.status,
        }
    }
}
