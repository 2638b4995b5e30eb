use chrono::{NaiveDate, NaiveTime};
use crmdesk_core::query::metrics::{
    active_client_count, invoice_totals, meeting_stats, monthly_recurring_revenue,
    service_revenue, top_service, total_collected, total_revenue,
};
use crmdesk_core::{
    ClientStatus, CrmStore, DashboardSummary, FixedClock, InvoiceStatus, InvoiceTotals,
    MeetingStats, MeetingStatus, MeetingType, NewClient, NewInvoice, NewMeeting, ServiceCatalog,
    StoreConfig,
};

fn seeded_store() -> CrmStore<FixedClock> {
    CrmStore::with_config(
        StoreConfig::default(),
        FixedClock(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
    )
}

fn empty_store() -> CrmStore<FixedClock> {
    CrmStore::with_config(
        StoreConfig::empty(),
        FixedClock(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
    )
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn paid_invoice(amount: u64) -> NewInvoice {
    NewInvoice {
        client_id: 1,
        client_name: "Large Account".to_string(),
        service: "HR Services".to_string(),
        amount,
        status: InvoiceStatus::Paid,
        issue_date: date(2024, 1, 1),
        due_date: date(2024, 1, 31),
        paid_date: Some(date(2024, 1, 15)),
    }
}

fn client_with(revenue: u64, total_paid: u64) -> NewClient {
    NewClient {
        name: "Large Account".to_string(),
        email: "accounts@large.example".to_string(),
        phone: "+1 555 0100".to_string(),
        service: "HR Services".to_string(),
        status: ClientStatus::Active,
        revenue,
        join_date: date(2024, 1, 1),
        total_paid,
        next_payment_date: None,
        department: None,
        location: None,
        role: None,
    }
}

#[test]
fn seed_invoice_totals_bucket_by_status() {
    let store = seeded_store();

    assert_eq!(
        invoice_totals(store.invoices()),
        InvoiceTotals {
            paid: 5700,
            pending: 1800,
            overdue: 1500,
        }
    );
    assert_eq!(total_revenue(store.invoices()), 5700);
}

#[test]
fn seed_dashboard_summary() {
    let store = seeded_store();

    let summary = DashboardSummary::compute(&store);

    assert_eq!(summary.total_revenue, 5700);
    assert_eq!(summary.active_clients, 5);
    assert_eq!(summary.open_leads, 2);
    assert_eq!(summary.monthly_recurring_revenue, 9950);
    assert_eq!(summary.conversion_rate, 71.4);
    assert_eq!(summary.average_revenue_per_client, 1140);
}

#[test]
fn conversion_moves_dashboard_figures() {
    let mut store = seeded_store();

    store.convert_lead_to_client(1).unwrap();
    let summary = DashboardSummary::compute(&store);

    assert_eq!(summary.open_leads, 1);
    assert_eq!(summary.active_clients, 6);
    assert_eq!(summary.monthly_recurring_revenue, 9950 + 2800);
    assert_eq!(summary.conversion_rate, 85.7);
    assert_eq!(summary.total_revenue, 5700);
}

#[test]
fn inactive_clients_still_count_toward_recurring_revenue() {
    let mut clients = seeded_store().clients().to_vec();
    clients[0].status = ClientStatus::Inactive;

    assert_eq!(active_client_count(&clients), 4);
    assert_eq!(monthly_recurring_revenue(&clients), 9950);
}

#[test]
fn empty_store_summary_is_all_zero() {
    let store = CrmStore::with_config(
        StoreConfig::empty(),
        FixedClock(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
    );

    let summary = DashboardSummary::compute(&store);

    assert_eq!(summary.total_revenue, 0);
    assert_eq!(summary.conversion_rate, 0.0);
    assert_eq!(summary.average_revenue_per_client, 0);
    assert_eq!(summary.invoice_totals, InvoiceTotals::default());
}

#[test]
fn amounts_near_max_saturate_instead_of_overflowing() {
    let mut store = empty_store();
    store.add_client(client_with(u64::MAX, u64::MAX));
    store.add_client(client_with(u64::MAX, 1));
    store.add_invoice(paid_invoice(u64::MAX / 2 + 1));
    store.add_invoice(paid_invoice(u64::MAX / 2 + 1));

    assert_eq!(invoice_totals(store.invoices()).paid, u64::MAX);
    assert_eq!(monthly_recurring_revenue(store.clients()), u64::MAX);
    assert_eq!(total_collected(store.clients()), u64::MAX);

    let summary = DashboardSummary::compute(&store);
    assert_eq!(summary.total_revenue, u64::MAX);
    assert_eq!(summary.average_revenue_per_client, u64::MAX / 2 + 1);

    let rows = service_revenue(store.clients(), &["HR Services"]);
    assert_eq!(rows[0].total_paid, u64::MAX);
    assert_eq!(rows[0].monthly_revenue, u64::MAX);
}

#[test]
fn seed_meeting_stats() {
    let store = seeded_store();

    assert_eq!(
        meeting_stats(store.meetings()),
        MeetingStats {
            scheduled: 3,
            completed: 0,
            total_hours: 3,
        }
    );
}

#[test]
fn completing_a_meeting_moves_it_between_counts() {
    let mut store = seeded_store();

    store
        .update_meeting_status(1, MeetingStatus::Completed)
        .unwrap();
    let stats = meeting_stats(store.meetings());

    assert_eq!(stats.scheduled, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.total_hours, 3);
}

#[test]
fn meeting_hours_round_half_up() {
    let mut store = empty_store();
    let client = seeded_store().clients()[0].clone();
    store.add_meeting(NewMeeting::scheduled_with(
        &client,
        "Quarterly review",
        date(2024, 2, 5),
        NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        90,
        MeetingType::Support,
    ));

    assert_eq!(meeting_stats(store.meetings()).total_hours, 2);
    assert_eq!(meeting_stats(&[]), MeetingStats::default());
}

#[test]
fn seed_total_collected_sums_client_payments() {
    let store = seeded_store();

    assert_eq!(total_collected(store.clients()), 29850);
    assert_eq!(total_collected(&[]), 0);
}

#[test]
fn service_revenue_sorts_catalog_labels_by_total_paid() {
    let store = seeded_store();
    let catalog = ServiceCatalog::seeded();

    let rows = service_revenue(store.clients(), &catalog.labels());

    let order = rows.iter().map(|row| row.service.as_str()).collect::<Vec<_>>();
    assert_eq!(
        order,
        vec![
            "HR Services",
            "Digital Marketing",
            "Technical Support",
            "Bakery Services",
            "Courses & Training",
        ]
    );
    assert_eq!(rows[0].total_paid, 9600);
    assert_eq!(rows[0].monthly_revenue, 3200);
    assert_eq!(rows[0].active_clients, 1);
    // Seed client 5 is labelled "Courses", which no catalog name matches.
    assert_eq!(rows[4].active_clients, 0);
    assert_eq!(rows[4].total_paid, 0);
}

#[test]
fn top_service_is_highest_total_paid() {
    let store = seeded_store();

    let top = top_service(store.clients(), &["Technical Support", "Digital Marketing"]).unwrap();

    assert_eq!(top.service, "Digital Marketing");
    assert_eq!(top.total_paid, 7500);
    assert!(top_service::<&str>(store.clients(), &[]).is_none());
}

#[test]
fn summary_serializes_with_camel_case_keys() {
    let store = seeded_store();

    let json = serde_json::to_value(DashboardSummary::compute(&store)).unwrap();

    assert_eq!(json["totalRevenue"], 5700);
    assert_eq!(json["monthlyRecurringRevenue"], 9950);
    assert_eq!(json["invoiceTotals"]["overdue"], 1500);
}
