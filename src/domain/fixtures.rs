// src/domain/fixtures.rs
//! Seed data each workspace starts from.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::maintenance::{MaintenanceRequest, Priority, RequestStatus};
use super::messages::{Message, Sender};
use super::payment::{PaymentRecord, PaymentStatus};
use super::property::{Property, PropertyStatus};
use super::reminder::{Reminder, ReminderCategory};
use super::tenant::{PaymentStanding, TenantRecord, TenantStatus};

pub const RENTER_PROPERTY: &str = "Apartment #202";
pub const RENTER_RENT: f64 = 1500.0;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

pub fn renter_payments() -> Vec<PaymentRecord> {
    let rows = [
        ("1", day(2025, 1, 1), "Credit Card", "PAY-2025-001"),
        ("2", day(2024, 12, 1), "Bank Transfer", "PAY-2024-012"),
        ("3", day(2024, 11, 1), "Credit Card", "PAY-2024-011"),
        ("4", day(2024, 10, 1), "Credit Card", "PAY-2024-010"),
        ("5", day(2024, 9, 1), "Bank Transfer", "PAY-2024-009"),
        ("6", day(2024, 8, 1), "Credit Card", "PAY-2024-008"),
        ("7", day(2024, 7, 1), "Credit Card", "PAY-2024-007"),
        ("8", day(2024, 6, 1), "Bank Transfer", "PAY-2024-006"),
    ];

    rows.into_iter()
        .map(|(id, date, method, reference)| PaymentRecord {
            id: id.to_string(),
            date,
            amount: RENTER_RENT,
            status: PaymentStatus::Completed,
            method: method.to_string(),
            reference: reference.to_string(),
            property: RENTER_PROPERTY.to_string(),
        })
        .collect()
}

pub fn renter_reminders() -> Vec<Reminder> {
    vec![
        Reminder {
            id: "2".into(),
            category: ReminderCategory::Maintenance,
            title: "Maintenance Scheduled".into(),
            message: "HVAC maintenance has been scheduled for June 5, 2025 between 10 AM - 2 PM."
                .into(),
            created_at: at(2025, 5, 20, 10, 0),
            is_read: true,
            due_date: None,
            tier: None,
        },
        Reminder {
            id: "3".into(),
            category: ReminderCategory::Lease,
            title: "Lease Renewal Notice".into(),
            message: "Your lease expires in 3 months. Please contact your landlord to discuss renewal options."
                .into(),
            created_at: at(2025, 5, 15, 9, 0),
            is_read: false,
            due_date: None,
            tier: None,
        },
    ]
}

pub fn renter_maintenance() -> Vec<MaintenanceRequest> {
    vec![
        MaintenanceRequest {
            id: "1".into(),
            kind: "plumbing".into(),
            priority: Priority::High,
            description: "Kitchen sink is leaking and water is pooling under the cabinet.".into(),
            status: RequestStatus::InProgress,
            submitted: day(2025, 5, 20),
            scheduled: Some(day(2025, 5, 25)),
            tenant: None,
            property: None,
        },
        MaintenanceRequest {
            id: "2".into(),
            kind: "electrical".into(),
            priority: Priority::Medium,
            description: "Living room outlet is not working properly.".into(),
            status: RequestStatus::Completed,
            submitted: day(2025, 5, 10),
            scheduled: Some(day(2025, 5, 15)),
            tenant: None,
            property: None,
        },
    ]
}

pub fn renter_messages() -> Vec<Message> {
    vec![
        Message {
            id: "1".into(),
            from: Sender::Landlord,
            subject: "Welcome to Your New Home!".into(),
            content: "Dear John,\n\nWelcome to Apartment #202! I hope you're settling in well. \
                      Please don't hesitate to reach out if you have any questions.\n\n\
                      Best regards,\nSarah Johnson"
                .into(),
            sent_at: at(2025, 5, 1, 0, 0),
            is_read: true,
            reply_to: None,
        },
        Message {
            id: "2".into(),
            from: Sender::Landlord,
            subject: "Building Maintenance Notice".into(),
            content: "Dear Residents,\n\nWe will be conducting routine maintenance on the \
                      building's HVAC system this weekend (June 1-2).\n\n\
                      Best regards,\nSarah Johnson"
                .into(),
            sent_at: at(2025, 5, 28, 0, 0),
            is_read: false,
            reply_to: None,
        },
        Message {
            id: "3".into(),
            from: Sender::Landlord,
            subject: "Rent Payment Confirmation".into(),
            content: "Hi John,\n\nThis is to confirm that we received your rent payment for \
                      May 2025. Thank you for your prompt payment!\n\n\
                      Best regards,\nSarah Johnson"
                .into(),
            sent_at: at(2025, 5, 2, 0, 0),
            is_read: true,
            reply_to: None,
        },
    ]
}

#[rustfmt::skip]
pub fn tenants() -> Vec<TenantRecord> {
    let rows = [
        ("1", "John Smith", "john.smith@email.com", "(555) 123-4567", "Sunset Apartments", "Apt #202", 1500.0,
         day(2024, 1, 1), day(2024, 12, 31), TenantStatus::Active, PaymentStanding::Current, day(2025, 1, 1)),
        ("2", "Emily Johnson", "emily.johnson@email.com", "(555) 234-5678", "Downtown Lofts", "Unit 305", 2200.0,
         day(2024, 3, 15), day(2025, 3, 14), TenantStatus::Active, PaymentStanding::Current, day(2025, 1, 1)),
        ("3", "Michael Brown", "michael.brown@email.com", "(555) 345-6789", "Garden View Complex", "Apt #101", 1800.0,
         day(2024, 6, 1), day(2025, 5, 31), TenantStatus::Active, PaymentStanding::Late, day(2024, 12, 15)),
        ("4", "Sarah Davis", "sarah.davis@email.com", "(555) 456-7890", "Riverside Towers", "Unit 1205", 2800.0,
         day(2024, 2, 1), day(2025, 1, 31), TenantStatus::Active, PaymentStanding::Current, day(2025, 1, 1)),
        ("5", "David Wilson", "david.wilson@email.com", "(555) 567-8901", "Oak Street Apartments", "Apt #45", 1650.0,
         day(2023, 9, 1), day(2024, 8, 31), TenantStatus::Expired, PaymentStanding::Overdue, day(2024, 8, 1)),
    ];

    rows.into_iter()
        .map(
            |(id, name, email, phone, property, unit, rent, start, end, status, standing, last)| {
                TenantRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                    property: property.to_string(),
                    unit: unit.to_string(),
                    rent_amount: rent,
                    lease_start: start,
                    lease_end: end,
                    status,
                    payment_status: standing,
                    last_payment: last,
                }
            },
        )
        .collect()
}

pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".into(),
            name: "Sunset Apartments".into(),
            address: "123 Sunset Blvd".into(),
            units: 24,
            occupied_units: 22,
            monthly_rent: 1500.0,
            status: PropertyStatus::Active,
        },
        Property {
            id: "2".into(),
            name: "Downtown Lofts".into(),
            address: "456 Main Street".into(),
            units: 12,
            occupied_units: 11,
            monthly_rent: 2200.0,
            status: PropertyStatus::Active,
        },
        Property {
            id: "3".into(),
            name: "Garden View Complex".into(),
            address: "789 Garden Ave".into(),
            units: 36,
            occupied_units: 34,
            monthly_rent: 1800.0,
            status: PropertyStatus::Maintenance,
        },
    ]
}

pub fn landlord_maintenance() -> Vec<MaintenanceRequest> {
    vec![
        MaintenanceRequest {
            id: "1".into(),
            kind: "Plumbing".into(),
            priority: Priority::High,
            description: "Kitchen sink is leaking and water is pooling under the cabinet.".into(),
            status: RequestStatus::Pending,
            submitted: day(2025, 1, 15),
            scheduled: None,
            tenant: Some("John Smith".into()),
            property: Some("Sunset Apartments".into()),
        },
        MaintenanceRequest {
            id: "2".into(),
            kind: "HVAC".into(),
            priority: Priority::Medium,
            description: "Heating system not working properly in unit.".into(),
            status: RequestStatus::InProgress,
            submitted: day(2025, 1, 14),
            scheduled: None,
            tenant: Some("Emily Johnson".into()),
            property: Some("Downtown Lofts".into()),
        },
    ]
}

#[rustfmt::skip]
pub fn landlord_messages() -> Vec<Message> {
    let rows = [
        ("1", "Urgent: Kitchen Sink Leak",
         "Hi Sarah, I have an urgent issue with my kitchen sink. It's been leaking for the past two days. Can someone come take a look as soon as possible?",
         at(2025, 1, 15, 10, 30), false),
        ("2", "Thank you for quick maintenance response",
         "Hi Sarah, I wanted to thank you for the quick response to my HVAC issue yesterday. The heating is working perfectly now!",
         at(2025, 1, 14, 16, 45), true),
        ("3", "Question about lease renewal",
         "Hello, my lease is coming up for renewal in a few months and I wanted to discuss the terms. Could we schedule a time to talk about this?",
         at(2025, 1, 13, 14, 20), true),
        ("4", "Noise complaint from upstairs neighbor",
         "Hi Sarah, there has been excessive noise coming from the apartment above me, especially late at night. Could you speak with them about it?",
         at(2025, 1, 12, 9, 15), true),
        ("5", "Request for parking space assignment",
         "Hello, I recently purchased a car and would like to request a parking space in the building garage. Could you let me know about availability?",
         at(2025, 1, 10, 14, 30), true),
    ];

    rows.into_iter()
        .map(|(id, subject, content, sent_at, is_read)| Message {
            id: id.to_string(),
            from: Sender::Tenant,
            subject: subject.to_string(),
            content: content.to_string(),
            sent_at,
            is_read,
            reply_to: None,
        })
        .collect()
}
