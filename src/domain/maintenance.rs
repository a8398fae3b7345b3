// src/domain/maintenance.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Unknown values fall back to medium, the form's default.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: String,
    pub kind: String,
    pub priority: Priority,
    pub description: String,
    pub status: RequestStatus,
    pub submitted: NaiveDate,
    pub scheduled: Option<NaiveDate>,
    pub tenant: Option<String>,
    pub property: Option<String>,
}

/// What the renter fills in.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRequest {
    pub kind: String,
    pub priority: Priority,
    pub description: String,
    pub scheduled: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct MaintenanceLog {
    requests: Vec<MaintenanceRequest>,
}

impl MaintenanceLog {
    pub fn new(seed: Vec<MaintenanceRequest>) -> Self {
        Self { requests: seed }
    }

    pub fn requests(&self) -> &[MaintenanceRequest] {
        &self.requests
    }

    pub fn pending_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .count()
    }

    /// New requests always start out pending, dated today.
    pub fn submit(
        &mut self,
        req: NewRequest,
        now: DateTime<Utc>,
    ) -> Result<MaintenanceRequest, ServerError> {
        if req.kind.trim().is_empty() {
            return Err(ServerError::BadRequest("request type is required".into()));
        }
        if req.description.trim().is_empty() {
            return Err(ServerError::BadRequest("description is required".into()));
        }

        let request = MaintenanceRequest {
            id: now.timestamp_millis().to_string(),
            kind: req.kind.trim().to_string(),
            priority: req.priority,
            description: req.description.trim().to_string(),
            status: RequestStatus::Pending,
            submitted: now.date_naive(),
            scheduled: req.scheduled,
            tenant: None,
            property: None,
        };
        self.requests.insert(0, request.clone());
        Ok(request)
    }
}
