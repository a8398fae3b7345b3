pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod responses;
pub mod router;
pub mod scheduler;
pub mod spreadsheets;
pub mod telemetry;
pub mod workspace;
