//! Seeded service catalog and its add/total operations.
//!
//! # Invariants
//! - Offerings are listed newest first.
//! - Catalog totals saturate instead of overflowing.

use crate::model::offering::{NewOffering, OfferingId, OfferingStatus, ServiceOffering};
use crate::model::{saturating_total, Amount};
use crate::store::IdSequence;
use log::debug;

const GENERATED_ID_PREFIX: &str = "service-";

/// Ordered collection of service offerings.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    offerings: Vec<ServiceOffering>,
    generated_ids: IdSequence,
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ServiceCatalog {
    /// Catalog with no offerings.
    pub fn empty() -> Self {
        Self {
            offerings: Vec::new(),
            generated_ids: IdSequence::above(0),
        }
    }

    /// Catalog pre-populated with the five standard service lines.
    pub fn seeded() -> Self {
        Self {
            offerings: seed_offerings(),
            generated_ids: IdSequence::above(0),
        }
    }

    pub fn offerings(&self) -> &[ServiceOffering] {
        &self.offerings
    }

    pub fn offering(&self, id: &str) -> Option<&ServiceOffering> {
        self.offerings.iter().find(|offering| offering.id == id)
    }

    /// Service names in catalog order, as matched by filters and analytics.
    pub fn labels(&self) -> Vec<&str> {
        self.offerings
            .iter()
            .map(|offering| offering.name.as_str())
            .collect()
    }

    /// Adds an offering at the front of the catalog and returns its id.
    pub fn add_offering(&mut self, draft: NewOffering) -> OfferingId {
        let id = format!("{GENERATED_ID_PREFIX}{}", self.generated_ids.next_id());
        let offering = draft.into_offering(id.clone());
        debug!(
            "event=offering_added module=catalog status=ok id={} features={}",
            id,
            offering.features.len()
        );
        self.offerings.insert(0, offering);
        id
    }

    pub fn total_earnings(&self) -> Amount {
        saturating_total(self.offerings.iter().map(|offering| offering.total_earnings))
    }

    pub fn total_active_clients(&self) -> u32 {
        self.offerings.iter().fold(0, |total: u32, offering| {
            total.saturating_add(offering.active_clients)
        })
    }
}

fn seed_offerings() -> Vec<ServiceOffering> {
    vec![
        offering(
            "digital",
            "Digital Marketing",
            "Comprehensive digital marketing solutions including SEO, social media management, content marketing, and online advertising campaigns.",
            2500,
            "3-6 months",
            23,
            57500,
            &["SEO Optimization", "Social Media Management", "Content Creation", "PPC Campaigns", "Analytics & Reporting"],
        ),
        offering(
            "technical",
            "Technical Support",
            "24/7 technical support services for businesses including IT infrastructure management, software support, and system maintenance.",
            1800,
            "Ongoing",
            18,
            32400,
            &["24/7 Support", "System Monitoring", "Software Updates", "Security Management", "Backup Solutions"],
        ),
        offering(
            "bakery",
            "Bakery Services",
            "Professional bakery and catering services for events, corporate meetings, and special occasions with custom menu options.",
            1500,
            "Per Event",
            12,
            18000,
            &["Custom Cakes", "Event Catering", "Corporate Orders", "Specialty Items", "Delivery Service"],
        ),
        offering(
            "hr",
            "HR Services",
            "Complete human resources solutions including recruitment, employee training, performance management, and HR compliance.",
            3200,
            "6-12 months",
            15,
            48000,
            &["Recruitment", "Training Programs", "Performance Reviews", "Compliance Management", "Employee Relations"],
        ),
        offering(
            "courses",
            "Courses & Training",
            "Professional development courses and training programs for individuals and corporate teams in various business and technical skills.",
            950,
            "1-3 months",
            31,
            29450,
            &["Online Courses", "Live Training", "Certification", "Corporate Workshops", "Learning Materials"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn offering(
    id: &str,
    name: &str,
    description: &str,
    base_price: Amount,
    duration: &str,
    active_clients: u32,
    total_earnings: Amount,
    features: &[&str],
) -> ServiceOffering {
    ServiceOffering {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        base_price,
        duration: duration.to_string(),
        active_clients,
        total_earnings,
        features: features.iter().map(|feature| feature.to_string()).collect(),
        status: OfferingStatus::Active,
    }
}
