// src/domain/tenant.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ServerError;

/// Lease lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Active,
    Pending,
    Expired,
}

impl TenantStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TenantStatus::Active => "active",
            TenantStatus::Pending => "pending",
            TenantStatus::Expired => "expired",
        }
    }

    /// `"all"` and unknown values mean "no filter".
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "active" => Some(TenantStatus::Active),
            "pending" => Some(TenantStatus::Pending),
            "expired" => Some(TenantStatus::Expired),
            _ => None,
        }
    }
}

/// Whether the tenant is up to date on rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStanding {
    Current,
    Late,
    Overdue,
}

impl PaymentStanding {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStanding::Current => "current",
            PaymentStanding::Late => "late",
            PaymentStanding::Overdue => "overdue",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "current" => Some(PaymentStanding::Current),
            "late" => Some(PaymentStanding::Late),
            "overdue" => Some(PaymentStanding::Overdue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property: String,
    pub unit: String,
    pub rent_amount: f64,
    pub lease_start: NaiveDate,
    pub lease_end: NaiveDate,
    pub status: TenantStatus,
    pub payment_status: PaymentStanding,
    pub last_payment: NaiveDate,
}

/// Everything but the id: what the add/edit form submits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TenantDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property: String,
    pub unit: String,
    pub rent_amount: f64,
    pub lease_start: NaiveDate,
    pub lease_end: NaiveDate,
    pub status: TenantStatus,
    pub payment_status: PaymentStanding,
    pub last_payment: NaiveDate,
}

impl TenantDraft {
    /// Required-field check done at the edge, before the list is touched.
    pub fn validate(&self) -> Result<(), ServerError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("property", &self.property),
            ("unit", &self.unit),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ServerError::BadRequest(format!("{field} is required")));
            }
        }
        if !(self.rent_amount.is_finite() && self.rent_amount > 0.0) {
            return Err(ServerError::BadRequest("rent amount must be positive".into()));
        }
        Ok(())
    }

    fn into_record(self, id: String) -> TenantRecord {
        TenantRecord {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            property: self.property,
            unit: self.unit,
            rent_amount: self.rent_amount,
            lease_start: self.lease_start,
            lease_end: self.lease_end,
            status: self.status,
            payment_status: self.payment_status,
            last_payment: self.last_payment,
        }
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(TenantRecord),
    /// The user did not confirm; nothing changed.
    Cancelled,
}

/// The landlord's in-memory tenant list, newest first.
#[derive(Debug, Clone, Default)]
pub struct TenantBook {
    tenants: Vec<TenantRecord>,
}

impl TenantBook {
    pub fn new(seed: Vec<TenantRecord>) -> Self {
        Self { tenants: seed }
    }

    pub fn tenants(&self) -> &[TenantRecord] {
        &self.tenants
    }

    pub fn get(&self, id: &str) -> Option<&TenantRecord> {
        self.tenants.iter().find(|t| t.id == id)
    }

    /// Adds a tenant under `id`, suffixing it if that id is already taken.
    pub fn add(&mut self, draft: TenantDraft, id: String) -> Result<TenantRecord, ServerError> {
        draft.validate()?;

        let mut unique = id.clone();
        let mut n = 1;
        while self.get(&unique).is_some() {
            unique = format!("{id}-{n}");
            n += 1;
        }

        let tenant = draft.into_record(unique);
        self.tenants.insert(0, tenant.clone());
        Ok(tenant)
    }

    /// Replaces every field of the tenant except its id.
    pub fn update(&mut self, id: &str, draft: TenantDraft) -> Result<TenantRecord, ServerError> {
        draft.validate()?;

        let slot = self
            .tenants
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ServerError::NotFound)?;
        *slot = draft.into_record(id.to_string());
        Ok(slot.clone())
    }

    pub fn delete(&mut self, id: &str, confirmed: bool) -> Result<DeleteOutcome, ServerError> {
        let pos = self
            .tenants
            .iter()
            .position(|t| t.id == id)
            .ok_or(ServerError::NotFound)?;

        if !confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }
        Ok(DeleteOutcome::Deleted(self.tenants.remove(pos)))
    }

    pub fn count_with_status(&self, status: TenantStatus) -> usize {
        self.tenants.iter().filter(|t| t.status == status).count()
    }

    pub fn count_with_standing(&self, standing: PaymentStanding) -> usize {
        self.tenants
            .iter()
            .filter(|t| t.payment_status == standing)
            .count()
    }
}
