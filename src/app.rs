// src/app.rs
//! Everything a request handler needs, shared across astra's workers.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::auth::MockAuthService;
use crate::config::SimulationConfig;
use crate::db::Database;
use crate::errors::ServerError;
use crate::workspace::Workspaces;

pub type SharedState = Arc<Mutex<Workspaces>>;

/// Source of "now" for reminder checks and new records.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Clone)]
pub struct App {
    pub db: Database,
    pub state: SharedState,
    pub simulation: SimulationConfig,
    pub auth: MockAuthService,
    clock: Arc<dyn Clock>,
}

impl App {
    /// Seeds both workspaces as of the clock's current date.
    pub fn new(db: Database, simulation: SimulationConfig, clock: Arc<dyn Clock>) -> Self {
        let state = Arc::new(Mutex::new(Workspaces::seeded(clock.now().date_naive())));
        Self {
            db,
            state,
            auth: MockAuthService::new(simulation.login_delay()),
            simulation,
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    pub fn workspaces(&self) -> Result<MutexGuard<'_, Workspaces>, ServerError> {
        lock(&self.state)
    }
}

pub fn lock(state: &SharedState) -> Result<MutexGuard<'_, Workspaces>, ServerError> {
    state.lock().map_err(|_| {
        tracing::error!("workspace lock poisoned");
        ServerError::InternalError
    })
}
