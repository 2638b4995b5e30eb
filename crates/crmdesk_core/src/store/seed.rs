//! Demo data set loaded into a seeded store.
//!
//! Collections are listed in display order, which for the seed set is
//! ascending id.

use crate::model::client::{Client, ClientStatus};
use crate::model::invoice::{Invoice, InvoiceStatus};
use crate::model::lead::{Lead, LeadStatus, Priority};
use crate::model::meeting::{Meeting, MeetingStatus, MeetingType};
use crate::model::Amount;
use chrono::{NaiveDate, NaiveTime};

pub fn seed_leads() -> Vec<Lead> {
    vec![
        Lead {
            id: 1,
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@email.com".to_string(),
            phone: "+1 (555) 0123".to_string(),
            service: "Digital Marketing".to_string(),
            budget: 2800,
            status: LeadStatus::New,
            priority: Priority::High,
            created_at: date(2024, 1, 15),
            notes: "Interested in comprehensive digital marketing package".to_string(),
            start_date: None,
            end_date: None,
        },
        Lead {
            id: 2,
            name: "Maria Garcia".to_string(),
            email: "maria.garcia@email.com".to_string(),
            phone: "+1 (555) 0124".to_string(),
            service: "HR Services".to_string(),
            budget: 3500,
            status: LeadStatus::Contacted,
            priority: Priority::Medium,
            created_at: date(2024, 1, 14),
            notes: "Looking for employee training programs".to_string(),
            start_date: None,
            end_date: None,
        },
    ]
}

pub fn seed_clients() -> Vec<Client> {
    vec![
        active_client(1, "John Smith", "john.smith@email.com", "+1 (555) 0100", "Digital Marketing", 2500, date(2024, 1, 1), 7500, date(2024, 2, 15)),
        active_client(2, "Sarah Johnson", "sarah.j@email.com", "+1 (555) 0101", "Technical Support", 1800, date(2024, 1, 5), 5400, date(2024, 2, 10)),
        active_client(3, "Mike Wilson", "mike.wilson@email.com", "+1 (555) 0102", "HR Services", 3200, date(2024, 1, 10), 9600, date(2024, 2, 20)),
        active_client(4, "Emily Davis", "emily.davis@email.com", "+1 (555) 0103", "Bakery Services", 1500, date(2024, 1, 12), 4500, date(2024, 2, 18)),
        active_client(5, "Chris Brown", "chris.brown@email.com", "+1 (555) 0104", "Courses", 950, date(2024, 1, 18), 2850, date(2024, 2, 25)),
    ]
}

pub fn seed_invoices() -> Vec<Invoice> {
    vec![
        invoice(1001, 1, "John Smith", "Digital Marketing", 2500, InvoiceStatus::Paid, date(2024, 1, 1), date(2024, 1, 31), Some(date(2024, 1, 28))),
        invoice(1002, 2, "Sarah Johnson", "Technical Support", 1800, InvoiceStatus::Pending, date(2024, 1, 15), date(2024, 2, 15), None),
        invoice(1003, 3, "Mike Wilson", "HR Services", 3200, InvoiceStatus::Paid, date(2024, 1, 10), date(2024, 2, 10), Some(date(2024, 2, 8))),
        invoice(1004, 4, "Emily Davis", "Bakery Services", 1500, InvoiceStatus::Overdue, date(2024, 1, 5), date(2024, 1, 20), None),
    ]
}

pub fn seed_meetings() -> Vec<Meeting> {
    vec![
        scheduled_meeting(1, 1, "John Smith", "Project Kickoff", date(2024, 2, 15), time(10, 0), 60, MeetingType::InitialConsultation),
        scheduled_meeting(2, 2, "Sarah Johnson", "Monthly Review", date(2024, 2, 16), time(14, 0), 30, MeetingType::FollowUp),
        scheduled_meeting(3, 3, "Mike Wilson", "Training Session", date(2024, 2, 18), time(11, 0), 90, MeetingType::ProjectReview),
    ]
}

#[allow(clippy::too_many_arguments)]
fn active_client(
    id: u32,
    name: &str,
    email: &str,
    phone: &str,
    service: &str,
    revenue: Amount,
    join_date: NaiveDate,
    total_paid: Amount,
    next_payment_date: NaiveDate,
) -> Client {
    Client {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        service: service.to_string(),
        status: ClientStatus::Active,
        revenue,
        join_date,
        total_paid,
        next_payment_date: Some(next_payment_date),
        department: None,
        location: None,
        role: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn invoice(
    id: u32,
    client_id: u32,
    client_name: &str,
    service: &str,
    amount: Amount,
    status: InvoiceStatus,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    paid_date: Option<NaiveDate>,
) -> Invoice {
    Invoice {
        id,
        client_id,
        client_name: client_name.to_string(),
        service: service.to_string(),
        amount,
        status,
        issue_date,
        due_date,
        paid_date,
    }
}

#[allow(clippy::too_many_arguments)]
fn scheduled_meeting(
    id: u32,
    client_id: u32,
    client_name: &str,
    title: &str,
    date: NaiveDate,
    time: NaiveTime,
    duration_minutes: u32,
    kind: MeetingType,
) -> Meeting {
    Meeting {
        id,
        client_id,
        client_name: client_name.to_string(),
        title: title.to_string(),
        date,
        time,
        duration_minutes,
        kind,
        status: MeetingStatus::Scheduled,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("seed times are valid wall-clock times")
}
