use crmdesk_core::{NewOffering, OfferingStatus, ServiceCatalog};

fn draft(name: &str, features: &[&str]) -> NewOffering {
    NewOffering {
        name: name.to_string(),
        description: "Seasonal photo shoots".to_string(),
        base_price: 1200,
        duration: "Per Event".to_string(),
        features: features.iter().map(|feature| feature.to_string()).collect(),
        status: OfferingStatus::Active,
    }
}

#[test]
fn seeded_catalog_has_five_offerings_and_totals() {
    let catalog = ServiceCatalog::seeded();

    assert_eq!(catalog.offerings().len(), 5);
    assert_eq!(
        catalog.labels(),
        vec![
            "Digital Marketing",
            "Technical Support",
            "Bakery Services",
            "HR Services",
            "Courses & Training",
        ]
    );
    assert_eq!(catalog.total_earnings(), 185_350);
    assert_eq!(catalog.total_active_clients(), 99);
    assert_eq!(catalog.offering("hr").unwrap().base_price, 3200);
}

#[test]
fn add_offering_prepends_fresh_entry_without_blank_features() {
    let mut catalog = ServiceCatalog::seeded();

    let id = catalog.add_offering(draft("Photography", &["Portraits", "  ", "", " Editing "]));

    assert_eq!(id, "service-1");
    let offering = &catalog.offerings()[0];
    assert_eq!(offering.id, "service-1");
    assert_eq!(offering.name, "Photography");
    assert_eq!(offering.features, vec!["Portraits", " Editing "]);
    assert_eq!(offering.active_clients, 0);
    assert_eq!(offering.total_earnings, 0);
    assert_eq!(catalog.total_earnings(), 185_350);
    assert_eq!(catalog.offerings().len(), 6);
}

#[test]
fn generated_offering_ids_increase() {
    let mut catalog = ServiceCatalog::empty();

    let first = catalog.add_offering(draft("A", &[]));
    let second = catalog.add_offering(draft("B", &[]));

    assert_eq!(first, "service-1");
    assert_eq!(second, "service-2");
    assert_eq!(catalog.labels(), vec!["B", "A"]);
}
