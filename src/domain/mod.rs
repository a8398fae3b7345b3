pub mod calendar;
pub mod filter;
pub mod fixtures;
pub mod maintenance;
pub mod messages;
pub mod money;
pub mod payment;
pub mod property;
pub mod reminder;
pub mod tenant;

pub use filter::{aggregate, filter, DateRange, Predicate, Query, Summary, TenantFacet};
pub use reminder::{derive_auto_pay_reminder, derive_reminder, derive_reminders, Reminder};
