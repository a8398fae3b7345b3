mod auth_tests;
mod dashboard_tests;
mod inbox_tests;
mod payments_tests;
mod reminders_tests;
mod tenants_tests;
