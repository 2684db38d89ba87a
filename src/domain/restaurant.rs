use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A restaurant record as returned by the backend. The identifier is
/// server-assigned and immutable; timestamps are absent on older records.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub rating: f64,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a record; the backend assigns the identifier.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub rating: f64,
    pub location: String,
}

impl NewRestaurant {
    #[must_use]
    pub fn new(name: String, rating: f64, location: String) -> Self {
        Self {
            name: name.trim().to_string(),
            rating,
            location: location.trim().to_string(),
        }
    }
}

/// Full-record update; the identifier travels in the body, not the path.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct UpdateRestaurant {
    pub id: Uuid,
    pub name: String,
    pub rating: f64,
    pub location: String,
}

impl UpdateRestaurant {
    #[must_use]
    pub fn new(id: Uuid, name: String, rating: f64, location: String) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            rating,
            location: location.trim().to_string(),
        }
    }
}
