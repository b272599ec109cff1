//! Service domain entity

use chrono::{DateTime, Utc};

/// Longest service name the store accepts.
pub const MAX_SERVICE_NAME_LEN: usize = 25;

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub service_id: i32,
    /// Unique across all services, compared case-sensitively.
    pub service_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    pub fn new(service_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            service_id: 0,
            service_name: service_name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn merge(&mut self, incoming: &Service) {
        self.service_name = incoming.service_name.clone();
    }
}
