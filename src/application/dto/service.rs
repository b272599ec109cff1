//! Service DTO

use serde::{Deserialize, Serialize};

use crate::domain::Service;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDto {
    /// 0 when the service has not been stored yet
    #[serde(default)]
    pub service_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

impl ServiceDto {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            service_id: 0,
            service_name: Some(name.into()),
        }
    }

    pub fn with_id(service_id: i32, name: impl Into<String>) -> Self {
        Self {
            service_id,
            service_name: Some(name.into()),
        }
    }
}

impl From<Service> for ServiceDto {
    fn from(s: Service) -> Self {
        Self {
            service_id: s.service_id,
            service_name: Some(s.service_name),
        }
    }
}
