// src/domain/filter.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::calendar::days_since;
use super::payment::{PaymentRecord, PaymentStatus};
use super::tenant::{PaymentStanding, TenantRecord, TenantStatus};

/// A record that can be narrowed down by the list filters.
pub trait FilterRecord {
    type Status: Copy + PartialEq;

    /// Fields the free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;
    fn has_status(&self, status: Self::Status) -> bool;
    /// Date the age filter is measured from.
    fn record_date(&self) -> NaiveDate;
}

/// A record that contributes to a money summary.
pub trait Aggregatable {
    fn amount(&self) -> f64;
    /// Whether the amount counts toward the total.
    fn is_settled(&self) -> bool;
}

/// Age window, measured back from now. Not a calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DateRange {
    Last30Days,
    Last90Days,
    LastYear,
    All,
}

impl DateRange {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "30days" => DateRange::Last30Days,
            "90days" => DateRange::Last90Days,
            "year" => DateRange::LastYear,
            _ => DateRange::All,
        }
    }

    pub fn max_age_days(self) -> Option<i64> {
        match self {
            DateRange::Last30Days => Some(30),
            DateRange::Last90Days => Some(90),
            DateRange::LastYear => Some(365),
            DateRange::All => None,
        }
    }

    pub fn contains(self, date: NaiveDate, now: DateTime<Utc>) -> bool {
        match self.max_age_days() {
            Some(max) => days_since(date, now) <= max,
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<S> {
    /// Case-insensitive substring over the searchable fields.
    Text(String),
    Status(S),
    Age(DateRange),
}

impl<S: Copy + PartialEq> Predicate<S> {
    pub fn matches<R>(&self, record: &R, now: DateTime<Utc>) -> bool
    where
        R: FilterRecord<Status = S>,
    {
        match self {
            Predicate::Text(needle) => {
                let needle = needle.to_lowercase();
                record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
            Predicate::Status(status) => record.has_status(*status),
            Predicate::Age(range) => range.contains(record.record_date(), now),
        }
    }
}

/// A conjunction of predicates. Empty text and "all" selections add nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Query<S> {
    predicates: Vec<Predicate<S>>,
}

impl<S> Default for Query<S> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<S: Copy + PartialEq> Query<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_predicates(predicates: Vec<Predicate<S>>) -> Self {
        Self { predicates }
    }

    pub fn text(mut self, term: &str) -> Self {
        if !term.trim().is_empty() {
            self.predicates.push(Predicate::Text(term.to_string()));
        }
        self
    }

    pub fn status(mut self, status: Option<S>) -> Self {
        if let Some(s) = status {
            self.predicates.push(Predicate::Status(s));
        }
        self
    }

    pub fn within(mut self, range: DateRange) -> Self {
        if range != DateRange::All {
            self.predicates.push(Predicate::Age(range));
        }
        self
    }

    pub fn predicates(&self) -> &[Predicate<S>] {
        &self.predicates
    }

    pub fn matches<R>(&self, record: &R, now: DateTime<Utc>) -> bool
    where
        R: FilterRecord<Status = S>,
    {
        self.predicates.iter().all(|p| p.matches(record, now))
    }
}

/// Records satisfying every predicate, in their original order.
pub fn filter<'a, R>(records: &'a [R], query: &Query<R::Status>, now: DateTime<Utc>) -> Vec<&'a R>
where
    R: FilterRecord,
{
    records.iter().filter(|r| query.matches(*r, now)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total: f64,
    pub count: usize,
    pub average: f64,
}

/// Sum, count and mean of the settled records, in one pass.
pub fn aggregate<'a, R, I>(records: I) -> Summary
where
    R: Aggregatable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let (total, count) = records
        .into_iter()
        .filter(|r| r.is_settled())
        .fold((0.0, 0usize), |(sum, n), r| (sum + r.amount(), n + 1));

    let average = if count > 0 { total / count as f64 } else { 0.0 };

    Summary {
        total,
        count,
        average,
    }
}

impl FilterRecord for PaymentRecord {
    type Status = PaymentStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.reference.as_str(),
            self.method.as_str(),
            self.property.as_str(),
        ]
    }

    fn has_status(&self, status: PaymentStatus) -> bool {
        self.status == status
    }

    fn record_date(&self) -> NaiveDate {
        self.date
    }
}

impl Aggregatable for PaymentRecord {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn is_settled(&self) -> bool {
        self.status == PaymentStatus::Completed
    }
}

/// Tenants have two independent status axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantFacet {
    Lease(TenantStatus),
    Payment(PaymentStanding),
}

impl FilterRecord for TenantRecord {
    type Status = TenantFacet;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.property.as_str(),
            self.unit.as_str(),
        ]
    }

    fn has_status(&self, facet: TenantFacet) -> bool {
        match facet {
            TenantFacet::Lease(s) => self.status == s,
            TenantFacet::Payment(s) => self.payment_status == s,
        }
    }

    fn record_date(&self) -> NaiveDate {
        self.last_payment
    }
}

impl Aggregatable for TenantRecord {
    fn amount(&self) -> f64 {
        self.rent_amount
    }

    fn is_settled(&self) -> bool {
        self.payment_status == PaymentStanding::Current
    }
}
