// src/auth/mock.rs
use std::thread;
use std::time::Duration;

use tracing::info;

use super::sessions::{Role, User};
use crate::errors::ServerError;

/// Stand-in for a real identity provider. Every login succeeds.
#[derive(Debug, Clone)]
pub struct MockAuthService {
    delay: Duration,
}

impl MockAuthService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Any email containing lowercase "landlord" signs in as the landlord; everything
    /// else is the renter. The password is ignored.
    pub fn login(&self, email: &str, _password: &str) -> Result<User, ServerError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ServerError::BadRequest("email is required".into()));
        }

        thread::sleep(self.delay);

        let user = if email.contains("landlord") {
            User {
                id: "2".into(),
                name: "Sarah Johnson".into(),
                email: email.to_string(),
                role: Role::Landlord,
                property_id: None,
                property_name: None,
            }
        } else {
            User {
                id: "1".into(),
                name: "John Smith".into(),
                email: email.to_string(),
                role: Role::Renter,
                property_id: Some("202".into()),
                property_name: Some("Apartment #202".into()),
            }
        };

        info!(user_id = %user.id, role = user.role.as_str(), "mock login");
        Ok(user)
    }
}
