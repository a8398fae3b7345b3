// src/domain/reminder.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::{days_until, long_date};
use super::money::format_usd;

/// Rent reminders are only synthesized inside this many days of the due date.
pub const REMINDER_WINDOW_DAYS: i64 = 7;

const AUTO_PAY_MARKER: &str = "Auto-Pay";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderCategory {
    Payment,
    Lease,
    Maintenance,
    General,
}

/// How close a due date is, driving display emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    Urgent,
    Important,
    Reminder,
}

impl UrgencyTier {
    /// Tier for a number of days remaining, or `None` outside the window.
    pub fn for_days(days_remaining: i64) -> Option<Self> {
        match days_remaining {
            0..=1 => Some(UrgencyTier::Urgent),
            2..=3 => Some(UrgencyTier::Important),
            4..=REMINDER_WINDOW_DAYS => Some(UrgencyTier::Reminder),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyTier::Urgent => "urgent",
            UrgencyTier::Important => "important",
            UrgencyTier::Reminder => "reminder",
        }
    }
}

/// A notification surfaced to the renter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub category: ReminderCategory,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub due_date: Option<NaiveDate>,
    pub tier: Option<UrgencyTier>,
}

impl Reminder {
    pub fn mark_read(&mut self) {
        self.is_read = true;
    }

    fn is_unread_payment_for(&self, due_date: NaiveDate) -> bool {
        self.category == ReminderCategory::Payment
            && self.due_date == Some(due_date)
            && !self.is_read
    }
}

/// What the rent is and where, for reminder wording.
#[derive(Debug, Clone, PartialEq)]
pub struct RentContext {
    pub amount: f64,
    pub property_name: String,
}

/// Rent-due reminder for `due_date`, if one is needed right now.
///
/// Nothing is produced outside `[0, 7]` days remaining (overdue included), or
/// while an unread payment reminder for the same due date already exists.
pub fn derive_reminder(
    due_date: NaiveDate,
    now: DateTime<Utc>,
    existing: &[Reminder],
    rent: &RentContext,
) -> Option<Reminder> {
    let days = days_until(due_date, now);
    let tier = UrgencyTier::for_days(days)?;

    if existing.iter().any(|r| r.is_unread_payment_for(due_date)) {
        return None;
    }

    let amount = format_usd(rent.amount);
    let property = &rent.property_name;
    let when = long_date(due_date);

    let (title, message) = match days {
        0 => (
            "Rent Due Today!".to_string(),
            format!(
                "Your rent payment of {amount} for {property} is due TODAY. \
                 Please make your payment as soon as possible to avoid late fees."
            ),
        ),
        1 => (
            "Rent Due Tomorrow!".to_string(),
            format!(
                "Your rent payment of {amount} for {property} is due TOMORROW ({when}). \
                 Don't forget to make your payment!"
            ),
        ),
        2..=3 => (
            format!("Rent Due in {days} Days"),
            format!(
                "Your rent payment of {amount} for {property} is due in {days} days ({when}). \
                 Consider setting up auto-pay to never miss a payment!"
            ),
        ),
        _ => (
            format!("Rent Due in {days} Days"),
            format!(
                "Friendly reminder: Your rent payment of {amount} for {property} is due on {when}."
            ),
        ),
    };

    Some(Reminder {
        id: format!("rent-due-{due_date}-{}", now.timestamp_millis()),
        category: ReminderCategory::Payment,
        title,
        message,
        created_at: now,
        is_read: false,
        due_date: Some(due_date),
        tier: Some(tier),
    })
}

/// "Auto-Pay Processed" notice, emitted once on the due date itself.
pub fn derive_auto_pay_reminder(
    due_date: NaiveDate,
    now: DateTime<Utc>,
    existing: &[Reminder],
    rent: &RentContext,
) -> Option<Reminder> {
    if days_until(due_date, now) != 0 {
        return None;
    }

    let already_sent = existing
        .iter()
        .any(|r| r.is_unread_payment_for(due_date) && r.title.contains(AUTO_PAY_MARKER));
    if already_sent {
        return None;
    }

    Some(Reminder {
        id: format!("auto-pay-{due_date}-{}", now.timestamp_millis()),
        category: ReminderCategory::Payment,
        title: format!("{AUTO_PAY_MARKER} Processed Successfully"),
        message: format!(
            "Your rent payment of {} has been automatically processed for {}. \
             Thank you for using auto-pay!",
            format_usd(rent.amount),
            rent.property_name
        ),
        created_at: now,
        is_read: false,
        due_date: Some(due_date),
        tier: UrgencyTier::for_days(0),
    })
}

/// Runs both checks against the same inputs. Rent-due comes first.
pub fn derive_reminders(
    due_date: NaiveDate,
    now: DateTime<Utc>,
    existing: &[Reminder],
    auto_pay_enabled: bool,
    rent: &RentContext,
) -> Vec<Reminder> {
    let mut out = Vec::new();
    out.extend(derive_reminder(due_date, now, existing, rent));
    if auto_pay_enabled {
        out.extend(derive_auto_pay_reminder(due_date, now, existing, rent));
    }
    out
}

/// Confirmation shown after a successful payment. Carries no due date, so it
/// never suppresses a rent-due reminder.
pub fn payment_confirmation(
    amount: f64,
    property_name: &str,
    next_due: NaiveDate,
    now: DateTime<Utc>,
) -> Reminder {
    Reminder {
        id: format!("payment-confirmation-{}", now.timestamp_millis()),
        category: ReminderCategory::Payment,
        title: "Payment Confirmed".to_string(),
        message: format!(
            "Your rent payment of {} has been successfully processed for {}. \
             Your next payment is due on {}.",
            format_usd(amount),
            property_name,
            long_date(next_due)
        ),
        created_at: now,
        is_read: false,
        due_date: None,
        tier: None,
    }
}
