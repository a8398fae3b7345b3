// src/domain/payment.rs

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
        }
    }

    /// Parses a filter value. `"all"` and unknown values mean "no filter".
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "completed" => Some(PaymentStatus::Completed),
            "pending" => Some(PaymentStatus::Pending),
            "failed" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }
}

/// Display name for the payment form's method choice.
pub fn method_label(code: &str) -> &'static str {
    match code.trim().to_lowercase().as_str() {
        "bank" | "bank transfer" => "Bank Transfer",
        _ => "Credit Card",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub status: PaymentStatus,
    pub method: String,
    pub reference: String,
    pub property: String,
}

/// Append-only list of payments for one renter.
///
/// References are `PAY-{year}-{seq:03}`; `seq` only ever grows, so no two
/// records in a ledger share a reference.
#[derive(Debug, Clone)]
pub struct PaymentLedger {
    payments: Vec<PaymentRecord>,
    next_seq: u32,
}

impl PaymentLedger {
    /// Newest first, as seeded.
    pub fn new(seed: Vec<PaymentRecord>) -> Self {
        let next_seq = seed.len() as u32 + 1;
        Self {
            payments: seed,
            next_seq,
        }
    }

    pub fn payments(&self) -> &[PaymentRecord] {
        &self.payments
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    pub fn next_reference(&self, year: i32) -> String {
        format!("PAY-{year}-{:03}", self.next_seq)
    }

    /// Records a settled payment dated `today` and returns a copy of it.
    pub fn record(
        &mut self,
        amount: f64,
        method: &str,
        property: &str,
        today: NaiveDate,
        id: String,
    ) -> PaymentRecord {
        let payment = PaymentRecord {
            id,
            date: today,
            amount,
            status: PaymentStatus::Completed,
            method: method.to_string(),
            reference: self.next_reference(today.year()),
            property: property.to_string(),
        };
        self.next_seq += 1;
        self.payments.insert(0, payment.clone());
        payment
    }
}
