// src/workspace.rs
//! In-memory state behind each role's views. Lives for the process only.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::calendar::next_due_date;
use crate::domain::fixtures;
use crate::domain::maintenance::MaintenanceLog;
use crate::domain::messages::{Inbox, Sender};
use crate::domain::payment::{PaymentLedger, PaymentRecord};
use crate::domain::property::{PortfolioSummary, Property};
use crate::domain::reminder::{derive_reminders, payment_confirmation, Reminder, RentContext};
use crate::domain::tenant::{PaymentStanding, TenantBook, TenantStatus};
use crate::errors::ServerError;

pub struct RenterWorkspace {
    pub payments: PaymentLedger,
    /// Newest first.
    pub reminders: Vec<Reminder>,
    pub due_date: NaiveDate,
    pub auto_pay_enabled: bool,
    pub rent: RentContext,
    pub messages: Inbox,
    pub maintenance: MaintenanceLog,
}

impl RenterWorkspace {
    pub fn seeded(today: NaiveDate) -> Self {
        Self {
            payments: PaymentLedger::new(fixtures::renter_payments()),
            reminders: fixtures::renter_reminders(),
            due_date: next_due_date(today),
            auto_pay_enabled: false,
            rent: RentContext {
                amount: fixtures::RENTER_RENT,
                property_name: fixtures::RENTER_PROPERTY.to_string(),
            },
            messages: Inbox::new(Sender::Tenant, fixtures::renter_messages()),
            maintenance: MaintenanceLog::new(fixtures::renter_maintenance()),
        }
    }

    /// Re-evaluates the due date against `now` and prepends whatever the
    /// deriver produces. Returns the new reminders.
    pub fn check_reminders(&mut self, now: DateTime<Utc>) -> Vec<Reminder> {
        let fresh = derive_reminders(
            self.due_date,
            now,
            &self.reminders,
            self.auto_pay_enabled,
            &self.rent,
        );

        for reminder in &fresh {
            info!(id = %reminder.id, title = %reminder.title, "reminder created");
            self.reminders.insert(0, reminder.clone());
        }
        if fresh.is_empty() {
            debug!(due_date = %self.due_date, "no reminder needed");
        }
        fresh
    }

    /// Settles a payment: appends it to the ledger, moves the due date to
    /// the next month and posts a confirmation.
    pub fn record_payment(
        &mut self,
        amount: f64,
        method: &str,
        now: DateTime<Utc>,
    ) -> Result<PaymentRecord, ServerError> {
        if !(amount.is_finite() && amount > 0.0) {
            return Err(ServerError::BadRequest("amount must be positive".into()));
        }

        let today = now.date_naive();
        let payment = self.payments.record(
            amount,
            method,
            &self.rent.property_name,
            today,
            now.timestamp_millis().to_string(),
        );

        self.due_date = next_due_date(today);
        let confirmation =
            payment_confirmation(amount, &self.rent.property_name, self.due_date, now);
        self.reminders.insert(0, confirmation);

        info!(
            reference = %payment.reference,
            amount = payment.amount,
            next_due = %self.due_date,
            "payment recorded"
        );
        Ok(payment)
    }

    pub fn mark_reminder_read(&mut self, id: &str) -> Result<(), ServerError> {
        let reminder = self
            .reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ServerError::NotFound)?;
        reminder.mark_read();
        Ok(())
    }

    pub fn set_auto_pay(&mut self, enabled: bool) {
        info!(enabled, "auto-pay updated");
        self.auto_pay_enabled = enabled;
    }

    pub fn unread_reminders(&self) -> usize {
        self.reminders.iter().filter(|r| !r.is_read).count()
    }
}

pub struct LandlordWorkspace {
    pub tenants: TenantBook,
    pub properties: Vec<Property>,
    pub maintenance: MaintenanceLog,
    pub messages: Inbox,
}

/// Tenant head-counts shown next to the tenant list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TenantCounts {
    pub total: usize,
    pub active: usize,
    pub overdue: usize,
}

impl LandlordWorkspace {
    pub fn seeded() -> Self {
        Self {
            tenants: TenantBook::new(fixtures::tenants()),
            properties: fixtures::properties(),
            maintenance: MaintenanceLog::new(fixtures::landlord_maintenance()),
            messages: Inbox::new(Sender::Landlord, fixtures::landlord_messages()),
        }
    }

    pub fn summary(&self) -> PortfolioSummary {
        PortfolioSummary::compute(
            &self.properties,
            self.tenants.tenants(),
            self.maintenance.pending_count(),
            self.messages.unread_count(),
        )
    }

    pub fn tenant_counts(&self) -> TenantCounts {
        TenantCounts {
            total: self.tenants.tenants().len(),
            active: self.tenants.count_with_status(TenantStatus::Active),
            overdue: self.tenants.count_with_standing(PaymentStanding::Overdue),
        }
    }
}

/// Both roles' state. Only one user is signed in at a time, but switching
/// accounts does not reset either side.
pub struct Workspaces {
    pub renter: RenterWorkspace,
    pub landlord: LandlordWorkspace,
}

impl Workspaces {
    pub fn seeded(today: NaiveDate) -> Self {
        Self {
            renter: RenterWorkspace::seeded(today),
            landlord: LandlordWorkspace::seeded(),
        }
    }
}
